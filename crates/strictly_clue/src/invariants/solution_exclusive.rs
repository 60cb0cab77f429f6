//! Each card has at most one holder and the solution one card per category.

use super::Invariant;
use crate::item::Category;
use crate::status::CardHeld;
use crate::table::Table;

/// Invariant: no item is `Yes` for two owners, and the solution has at most
/// one `Yes` per category.
pub struct SolutionExclusive;

impl Invariant<Table> for SolutionExclusive {
    fn holds(table: &Table) -> bool {
        let single_holder = table.universe().ids().all(|item| {
            table
                .owners()
                .filter(|owner| table.status(*owner, item) == Ok(CardHeld::Yes))
                .count()
                <= 1
        });
        let solution = table.solution();
        let one_per_category = Category::ALL.iter().all(|category| {
            table
                .universe()
                .of_category(*category)
                .filter(|item| solution.status(item.id()) == Ok(CardHeld::Yes))
                .count()
                <= 1
        });
        single_holder && one_per_category
    }

    fn description() -> &'static str {
        "Every card has at most one holder and the solution one card per category"
    }
}
