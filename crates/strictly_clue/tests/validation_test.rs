//! Turn validation against a standard four-seat game.

use strictly_clue::{
    Accusation, CardHeld, HandId, ItemId, Owner, Table, TableSetup, Turn, Universe, ViolationKind,
    apply_turn, process_turns, validate,
};

fn card(universe: &Universe, name: &str) -> ItemId {
    universe.find(name).unwrap()
}

fn standard_table() -> Table {
    let universe = Universe::standard();
    let own = ["Mr. Green", "Knife", "Study"].map(|name| card(&universe, name));
    TableSetup::new(universe)
        .with_self("You", own)
        .with_opponent("Alice", 6)
        .with_opponent("Bob", 6)
        .with_opponent("Carol", 3)
        .build()
        .unwrap()
}

fn guess(table: &Table, names: [&str; 3]) -> Accusation {
    let universe = table.universe();
    let [p, w, r] = names.map(|name| card(universe, name));
    Accusation::new(universe, p, w, r).unwrap()
}

#[test]
fn test_self_passing_with_a_guessed_card_is_flagged() {
    let table = standard_table();
    let bob = table.seat("Bob").unwrap();
    let alice = table.seat("Alice").unwrap();
    let turn = Turn::new(
        guess(&table, ["Mr. Green", "Rope", "Hall"]),
        bob,
        Some(alice),
        None,
    );

    let validation = validate(&turn, &table).unwrap();

    assert!(!validation.is_valid());
    let violation = &validation.violations()[0];
    assert_eq!(*violation.kind(), ViolationKind::PassingHandHoldsItem);
    assert_eq!(*violation.hand(), HandId::new(0));
    assert_eq!(violation.items(), &vec![card(table.universe(), "Mr. Green")]);
    assert_eq!(
        validation.warnings(&table),
        vec!["You holds Mr. Green and could not have passed".to_string()]
    );
}

#[test]
fn test_consistent_turn_passes_and_can_be_applied() {
    let mut table = standard_table();
    let you = table.self_seat().unwrap();
    let bob = table.seat("Bob").unwrap();
    let accusation = guess(&table, ["Mrs. White", "Rope", "Hall"]);
    let turn = Turn::new(accusation, you, Some(bob), Some(accusation.room()));

    let validation = validate(&turn, &table).unwrap();
    assert!(validation.is_valid());

    apply_turn(&mut table, &turn).unwrap();
    process_turns(&mut table, &[turn]).unwrap();
    assert_eq!(
        table.status(Owner::Seat(bob), accusation.room()),
        Ok(CardHeld::Yes)
    );
}

#[test]
fn test_revealer_with_nothing_to_show_is_flagged() {
    let mut table = standard_table();
    let mut log = Vec::new();
    let you = table.self_seat().unwrap();
    let alice = table.seat("Alice").unwrap();
    let carol = table.seat("Carol").unwrap();

    let first = Turn::new(guess(&table, ["Prof. Plum", "Rope", "Hall"]), you, Some(carol), None);
    apply_turn(&mut table, &first).unwrap();
    log.push(first);
    process_turns(&mut table, &log).unwrap();

    // Alice passed on Plum, Rope and Hall, so she cannot answer them now.
    let second = Turn::new(guess(&table, ["Prof. Plum", "Rope", "Hall"]), carol, Some(alice), None);
    let validation = validate(&second, &table).unwrap();

    assert!(
        validation
            .violations()
            .iter()
            .any(|v| *v.kind() == ViolationKind::RevealerCannotShow)
    );
    assert_eq!(validation.warnings(&table).len(), 3);
}

#[test]
fn test_disclosing_a_card_you_hold_is_flagged() {
    let table = standard_table();
    let you = table.self_seat().unwrap();
    let alice = table.seat("Alice").unwrap();
    let accusation = guess(&table, ["Mr. Green", "Rope", "Hall"]);
    let turn = Turn::new(accusation, you, Some(alice), Some(accusation.person()));

    let validation = validate(&turn, &table).unwrap();

    assert_eq!(validation.violations().len(), 1);
    assert_eq!(
        *validation.violations()[0].kind(),
        ViolationKind::DisclosedItemImpossible
    );
    assert_eq!(
        validation.warnings(&table),
        vec!["Alice cannot have shown Mr. Green".to_string()]
    );
}
