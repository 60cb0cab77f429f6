//! First-class invariants for the deduction table.
//!
//! Invariants are logical properties that must hold after every deduction
//! step. They are testable independently and checked in debug builds once
//! the fixpoint settles.

pub mod checklist_complete;
pub mod confirmed_yes;
pub mod holder_index;
pub mod monotonic;
pub mod solution_exclusive;

pub use checklist_complete::ChecklistComplete;
pub use confirmed_yes::ConfirmedAreYes;
pub use holder_index::HolderIndexConsistent;
pub use monotonic::MonotonicBeliefs;
pub use solution_exclusive::SolutionExclusive;

use crate::table::Table;

/// A logical property that must hold for a given state.
pub trait Invariant<S> {
    /// Checks if the invariant holds for the given state.
    fn holds(state: &S) -> bool;

    /// Human-readable description of the invariant.
    fn description() -> &'static str;
}

/// Violation of an invariant.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
#[display("Invariant violated: {}", description)]
pub struct InvariantViolation {
    /// Description of the violated invariant.
    pub description: String,
}

impl InvariantViolation {
    /// Creates a new invariant violation.
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
        }
    }
}

/// A set of invariants that can be checked together.
///
/// Implementations are provided for tuples of two and four invariants.
pub trait InvariantSet<S> {
    /// Checks all invariants in the set.
    ///
    /// Returns Ok(()) if all invariants hold, or Err with every violation.
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>>;
}

fn check<S, I: Invariant<S>>(state: &S, violations: &mut Vec<InvariantViolation>) {
    if !I::holds(state) {
        violations.push(InvariantViolation::new(I::description()));
    }
}

fn into_result(violations: Vec<InvariantViolation>) -> Result<(), Vec<InvariantViolation>> {
    if violations.is_empty() {
        Ok(())
    } else {
        Err(violations)
    }
}

impl<S, I1, I2> InvariantSet<S> for (I1, I2)
where
    I1: Invariant<S>,
    I2: Invariant<S>,
{
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>> {
        let mut violations = Vec::new();
        check::<S, I1>(state, &mut violations);
        check::<S, I2>(state, &mut violations);
        into_result(violations)
    }
}

impl<S, I1, I2, I3, I4> InvariantSet<S> for (I1, I2, I3, I4)
where
    I1: Invariant<S>,
    I2: Invariant<S>,
    I3: Invariant<S>,
    I4: Invariant<S>,
{
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>> {
        let mut violations = Vec::new();
        check::<S, I1>(state, &mut violations);
        check::<S, I2>(state, &mut violations);
        check::<S, I3>(state, &mut violations);
        check::<S, I4>(state, &mut violations);
        into_result(violations)
    }
}

/// Every structural table invariant as a composable set.
pub type TableInvariants = (
    ChecklistComplete,
    ConfirmedAreYes,
    SolutionExclusive,
    HolderIndexConsistent,
);

/// Asserts the table invariants in debug builds.
pub(crate) fn assert_invariants(table: &Table) {
    debug_assert!(
        TableInvariants::check_all(table).is_ok(),
        "Table invariants violated: {:?}",
        TableInvariants::check_all(table)
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures::{id, seat, three_seats};

    #[test]
    fn test_invariant_set_holds_for_fresh_table() {
        let table = three_seats(true);
        assert!(TableInvariants::check_all(&table).is_ok());
    }

    #[test]
    fn test_invariant_set_holds_after_confirmations() {
        let mut table = three_seats(false);
        let universe = table.universe().clone();
        table.confirm(seat(1), id(&universe, "Person1")).unwrap();
        table
            .confirm(crate::Owner::Solution, id(&universe, "Room3"))
            .unwrap();
        assert!(TableInvariants::check_all(&table).is_ok());
    }

    #[test]
    fn test_invariant_set_reports_each_violation() {
        let mut table = three_seats(false);
        let item = id(table.universe(), "Weapon2");
        table.holders_mut()[item.index()] = Some(seat(2));

        let violations = TableInvariants::check_all(&table).unwrap_err();
        assert_eq!(violations.len(), 1);
        assert_eq!(
            violations[0].description,
            HolderIndexConsistent::description()
        );
    }

    #[test]
    fn test_two_invariants_as_set() {
        let table = three_seats(false);
        type TwoInvariants = (ChecklistComplete, SolutionExclusive);
        assert!(TwoInvariants::check_all(&table).is_ok());
    }
}
