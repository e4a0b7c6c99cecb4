//! Integration tests for organizing ranges and actions.

use crate::helpers::{FOLDER_ID, RANGE_ID, TestLibraryBuilder, assigned, hand, mounted};
use rangeboard::action::{ActionButton, ActionError, SimpleAction, WeightedAction};
use rangeboard::input::ReleaseHub;
use rangeboard::stats::RangeStats;
use rangeboard::store::{RangeLibrary, StoreError};

#[test]
fn test_paint_save_reload_workflow() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("library.json");
    let hub = ReleaseHub::new();
    let controller = mounted(&hub);

    let mut library = RangeLibrary::default();
    library.add_action(SimpleAction::new("call", "Call", "#22c55e").into()).unwrap();
    let folder_id = library.create_folder("BTN");
    let range_id = library.create_range(&folder_id, "vs 3bet").unwrap();

    let range = library.range_mut(&folder_id, &range_id).unwrap();
    controller.mouse_down(hand("QQ"), range, "call");
    controller.mouse_enter(hand("JJ"), range, "call");
    hub.notify_release();
    controller.mouse_down(hand("AKs"), range, "raise");
    hub.notify_release();
    library.save_to(&path).unwrap();

    let reloaded = RangeLibrary::load_from(&path).unwrap();
    let range = reloaded.find_range(&range_id).unwrap();
    assert_eq!(range.name, "vs 3bet");
    assert_eq!(assigned(range, "QQ"), Some("call"));
    assert_eq!(assigned(range, "JJ"), Some("call"));
    assert_eq!(assigned(range, "AKs"), Some("raise"));
    assert_eq!(reloaded.ranges().count(), 2);
}

#[test]
fn test_stats_split_weighted_combos() {
    let library = TestLibraryBuilder::new()
        .with_weighted("mix", "raise", "fold", 50)
        .with_hand("AA", "raise")
        .with_hand("AKo", "mix")
        .with_hand("72o", "fold")
        .build();
    let range = library.range(FOLDER_ID, RANGE_ID).unwrap();

    let stats = RangeStats::compute(&range.hands, &library.action_buttons);
    assert_eq!(stats.combos_for("raise"), 12.0);
    assert_eq!(stats.combos_for("fold"), 18.0);
    assert_eq!(stats.assigned_combos(), 30.0);
    assert_eq!(stats.unassigned_combos(), 1296.0);
}

#[test]
fn test_remove_action_clears_ranges() {
    let mut library = TestLibraryBuilder::new()
        .with_simple("call", "#22c55e")
        .with_hand("AA", "raise")
        .with_hand("KK", "call")
        .build();

    library.remove_action("call").unwrap();

    let range = library.range(FOLDER_ID, RANGE_ID).unwrap();
    assert_eq!(assigned(range, "KK"), None);
    assert_eq!(assigned(range, "AA"), Some("raise"));
    assert!(library.action("call").is_none());
}

#[test]
fn test_remove_blended_action_is_rejected() {
    let mut library = TestLibraryBuilder::new()
        .with_simple("call", "#22c55e")
        .with_weighted("mix", "raise", "call", 60)
        .build();

    let err = library.remove_action("call").unwrap_err();
    assert!(matches!(err, StoreError::ActionInUse { ref used_by, .. } if used_by == "mix"));
    assert!(library.action("call").is_some());
}

#[test]
fn test_invalid_actions_are_rejected() {
    let mut library = RangeLibrary::default();

    let err = library
        .add_action(SimpleAction::new("fold", "Fold", "#000000").into())
        .unwrap_err();
    assert!(matches!(err, StoreError::Action(ActionError::ReservedId(_))));

    let err = library
        .add_action(WeightedAction::new("mix", "Mix", "raise", "limp", 50).into())
        .unwrap_err();
    assert!(matches!(err, StoreError::Action(ActionError::DanglingReference { .. })));

    let err = library
        .add_action(WeightedAction::new("mix", "Mix", "raise", "fold", 150).into())
        .unwrap_err();
    assert!(matches!(err, StoreError::Action(ActionError::WeightOutOfRange { weight: 150, .. })));

    assert_eq!(library.action_buttons.len(), 1);
}

#[test]
fn test_update_action_recolors() {
    let mut library = RangeLibrary::default();
    library
        .update_action(SimpleAction::new("raise", "Open", "#ef4444").into())
        .unwrap();

    match library.action("raise") {
        Some(ActionButton::Simple(raise)) => {
            assert_eq!(raise.name, "Open");
            assert_eq!(raise.color, "#ef4444");
        }
        other => panic!("expected simple action, got {other:?}"),
    }

    let err = library
        .update_action(SimpleAction::new("missing", "Missing", "#ffffff").into())
        .unwrap_err();
    assert!(matches!(err, StoreError::UnknownAction(_)));
}

#[test]
fn test_folder_and_range_lifecycle() {
    let mut library = RangeLibrary::default();
    let folder_id = library.create_folder("SB");
    let range_id = library.create_range(&folder_id, "open").unwrap();

    library.rename_folder(&folder_id, "Small blind").unwrap();
    library.rename_range(&folder_id, &range_id, "open raise").unwrap();
    assert_eq!(library.folder(&folder_id).unwrap().name, "Small blind");
    assert_eq!(library.range(&folder_id, &range_id).unwrap().name, "open raise");

    library.delete_range(&folder_id, &range_id).unwrap();
    assert!(library.find_range(&range_id).is_none());
    assert!(matches!(
        library.delete_range(&folder_id, &range_id),
        Err(StoreError::UnknownRange(_))
    ));

    library.delete_folder(&folder_id).unwrap();
    assert!(matches!(
        library.create_range(&folder_id, "late"),
        Err(StoreError::UnknownFolder(_))
    ));
    assert_eq!(library.folders.len(), 1);
}

#[test]
fn test_clear_range() {
    let mut library = TestLibraryBuilder::new()
        .with_hand("AA", "raise")
        .with_hand("KK", "raise")
        .build();

    library.clear_range(FOLDER_ID, RANGE_ID).unwrap();
    assert!(library.range(FOLDER_ID, RANGE_ID).unwrap().hands.is_empty());
}
