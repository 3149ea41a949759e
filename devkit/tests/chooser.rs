use std::cell::RefCell;
use std::rc::Rc;

use devdom::{Element, find_element, render_text};
use devkit::widgets::{ChooserAction, ListChooser};

#[derive(Debug, Clone, PartialEq)]
struct Field {
    id: u32,
    label: &'static str,
}

fn field(id: u32, label: &'static str) -> Field {
    Field { id, label }
}

fn abcd() -> Vec<Field> {
    vec![field(1, "a"), field(2, "b"), field(3, "c"), field(4, "d")]
}

fn labels(items: &[Field]) -> Vec<&'static str> {
    items.iter().map(|f| f.label).collect()
}

fn chooser(items: Vec<Field>) -> ListChooser<Field, u32> {
    ListChooser::new(items, |f: &Field| Element::text(f.label), |f: &Field| f.id).id("fields")
}

fn recording_chooser(
    items: Vec<Field>,
) -> (ListChooser<Field, u32>, Rc<RefCell<Vec<Vec<&'static str>>>>) {
    let calls = Rc::new(RefCell::new(Vec::new()));
    let sink = calls.clone();
    let chooser = chooser(items).on_chosen_changed(move |chosen: &[Field]| {
        sink.borrow_mut().push(labels(chosen));
    });
    (chooser, calls)
}

// ============================================================================
// Construction
// ============================================================================

#[test]
fn test_new_starts_with_everything_available() {
    let chooser = chooser(abcd());

    assert_eq!(labels(chooser.available()), vec!["a", "b", "c", "d"]);
    assert!(chooser.chosen().is_empty());
    assert!(chooser.is_partition_consistent());
}

#[test]
fn test_initial_chosen_is_subtracted_by_identity() {
    // Different labels, same identities: membership is by identity only
    let chooser = chooser(abcd()).with_initial_chosen(vec![field(3, "C"), field(1, "A")]);

    assert_eq!(labels(chooser.available()), vec!["b", "d"]);
    assert_eq!(labels(chooser.chosen()), vec!["C", "A"]);
    assert!(chooser.is_partition_consistent());
}

#[test]
fn test_initial_chosen_drops_strays_and_repeats() {
    let chooser = chooser(abcd()).with_initial_chosen(vec![
        field(2, "b"),
        field(9, "stray"),
        field(2, "b again"),
    ]);

    assert_eq!(labels(chooser.available()), vec!["a", "c", "d"]);
    assert_eq!(labels(chooser.chosen()), vec!["b"]);
    assert!(chooser.is_partition_consistent());
}

// ============================================================================
// Moves
// ============================================================================

#[test]
fn test_move_selected_then_all_back() {
    let (mut chooser, calls) = recording_chooser(abcd());

    chooser.select_available(3);
    chooser.select_available(1);
    chooser.move_selected_to_chosen();

    assert_eq!(labels(chooser.available()), vec!["a", "c"]);
    assert_eq!(labels(chooser.chosen()), vec!["b", "d"]);
    assert!(chooser.available_list().selected_indices().is_empty());
    assert!(chooser.chosen_list().selected_indices().is_empty());
    assert!(chooser.is_partition_consistent());

    chooser.move_all_to_available();

    assert_eq!(labels(chooser.available()), vec!["a", "c", "b", "d"]);
    assert!(chooser.chosen().is_empty());
    assert!(chooser.is_partition_consistent());

    assert_eq!(*calls.borrow(), vec![vec!["b", "d"], vec![]]);
}

#[test]
fn test_move_selected_back_appends_to_available() {
    let mut chooser = chooser(abcd());
    chooser.move_all_to_chosen();
    assert_eq!(labels(chooser.chosen()), vec!["a", "b", "c", "d"]);

    chooser.select_chosen(0);
    chooser.select_chosen(2);
    chooser.move_selected_to_available();

    assert_eq!(labels(chooser.available()), vec!["a", "c"]);
    assert_eq!(labels(chooser.chosen()), vec!["b", "d"]);
    assert!(chooser.is_partition_consistent());
}

#[test]
fn test_move_with_empty_selection_is_idempotent() {
    let (mut chooser, calls) = recording_chooser(abcd());
    chooser.select_available(0);
    chooser.move_selected_to_chosen();

    chooser.move_selected_to_chosen();
    chooser.move_selected_to_available();

    assert_eq!(labels(chooser.available()), vec!["b", "c", "d"]);
    assert_eq!(labels(chooser.chosen()), vec!["a"]);
    assert!(chooser.is_partition_consistent());
    // Every call notifies exactly once
    assert_eq!(calls.borrow().len(), 3);
}

#[test]
fn test_move_all_clears_both_selections() {
    let mut chooser = chooser(abcd()).with_initial_chosen(vec![field(4, "d")]);
    chooser.select_available(0);
    chooser.select_chosen(0);

    chooser.move_all_to_chosen();

    assert_eq!(labels(chooser.chosen()), vec!["d", "a", "b", "c"]);
    assert!(chooser.available().is_empty());
    assert!(chooser.available_list().selected_indices().is_empty());
    assert!(chooser.chosen_list().selected_indices().is_empty());
}

#[test]
fn test_empty_item_set() {
    let (mut chooser, calls) = recording_chooser(Vec::new());

    for action in ChooserAction::ALL {
        chooser.dispatch(action);
        assert!(chooser.is_partition_consistent());
    }
    assert_eq!(calls.borrow().len(), 4);
}

// ============================================================================
// View and clicks
// ============================================================================

#[test]
fn test_view_layout() {
    let mut chooser = chooser(abcd()).with_initial_chosen(vec![field(2, "b")]);
    chooser.select_available(0);

    let expected = [
        "[x] a   >    [ ] b",
        "[ ] c   <",
        "[ ] d   >>",
        "        <<",
    ];
    assert_eq!(render_text(chooser.view()), expected.join("\n"));
}

#[test]
fn test_clicks_route_to_rows_and_buttons() {
    let (mut chooser, calls) = recording_chooser(abcd());

    assert!(chooser.handle_click("fields-available-item-2"));
    assert!(chooser.available_list().is_selected(2));
    let row = find_element(chooser.view(), "fields-available-item-2").unwrap();
    assert!(row.has_class("selected"));

    let button = chooser.button_id(ChooserAction::MoveSelectedToChosen);
    assert_eq!(button, "fields-move-selected");
    assert!(chooser.handle_click(&button));
    assert_eq!(labels(chooser.chosen()), vec!["c"]);

    assert!(chooser.handle_click("fields-chosen-item-0"));
    assert!(chooser.handle_click("fields-move-selected-back"));
    assert_eq!(labels(chooser.available()), vec!["a", "b", "d", "c"]);

    assert!(!chooser.handle_click("somewhere-else"));
    assert_eq!(calls.borrow().len(), 2);
}

#[test]
fn test_action_labels() {
    assert_eq!(ChooserAction::from_label(">>"), Some(ChooserAction::MoveAllToChosen));
    assert_eq!(ChooserAction::from_label("<"), Some(ChooserAction::MoveSelectedToAvailable));
    assert_eq!(ChooserAction::from_label("?"), None);
}
