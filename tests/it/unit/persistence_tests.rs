//! Unit tests for library persistence.

use crate::helpers::{FOLDER_ID, RANGE_ID, TestLibraryBuilder, assigned};
use rangeboard::action::{ActionButton, FontColor, FontSize};
use rangeboard::store::{RangeLibrary, StoreError};

#[test]
fn test_save_and_load_round_trip() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("library.json");
    let library = TestLibraryBuilder::new()
        .with_simple("call", "#22c55e")
        .with_weighted("mix", "raise", "call", 40)
        .with_hand("AA", "raise")
        .with_hand("KQs", "mix")
        .with_hand("72o", "fold")
        .build();

    library.save_to(&path).unwrap();
    let loaded = RangeLibrary::load_from(&path).unwrap();

    assert_eq!(loaded, library);
    let range = loaded.range(FOLDER_ID, RANGE_ID).unwrap();
    assert_eq!(assigned(range, "KQs"), Some("mix"));
    assert_eq!(assigned(range, "72o"), Some("fold"));
}

#[test]
fn test_save_overwrites_existing_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("library.json");

    TestLibraryBuilder::new().with_hand("AA", "raise").build().save_to(&path).unwrap();
    RangeLibrary::default().save_to(&path).unwrap();

    let loaded = RangeLibrary::load_from(&path).unwrap();
    assert!(loaded.range(FOLDER_ID, RANGE_ID).unwrap().hands.is_empty());
}

#[test]
fn test_missing_file_loads_default() {
    let dir = tempfile::tempdir().unwrap();
    let loaded = RangeLibrary::load_from(&dir.path().join("missing.json")).unwrap();
    assert_eq!(loaded, RangeLibrary::default());
}

#[test]
fn test_corrupt_file_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("library.json");
    std::fs::write(&path, "[1, 2").unwrap();

    assert!(matches!(RangeLibrary::load_from(&path), Err(StoreError::Json(_))));
    assert_eq!(RangeLibrary::load_or_default(&path), RangeLibrary::default());
}

#[test]
fn test_legacy_action_records_migrate() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("library.json");
    std::fs::write(
        &path,
        r##"{
            "folders": [
                { "id": "f", "name": "Opens", "ranges": [
                    { "id": "r", "name": "UTG", "hands": { "AA": "open", "AKs": "open" } }
                ] }
            ],
            "actionButtons": [
                { "id": "open", "name": "Open", "color": "#ef4444" },
                { "type": "weighted", "id": "mix", "name": "Mix",
                  "action1Id": "open", "action2Id": "fold", "weight": 25 }
            ]
        }"##,
    )
    .unwrap();

    let loaded = RangeLibrary::load_from(&path).unwrap();
    match loaded.action("open") {
        Some(ActionButton::Simple(open)) => {
            assert_eq!(open.color, "#ef4444");
            assert_eq!(open.font(), FontSize::Adaptive);
        }
        other => panic!("expected migrated simple action, got {other:?}"),
    }
    assert!(loaded.action("mix").and_then(ActionButton::as_weighted).is_some());
    assert_eq!(assigned(loaded.range("f", "r").unwrap(), "AKs"), Some("open"));
}

#[test]
fn test_typed_records_with_fractional_numbers_load() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("library.json");
    std::fs::write(
        &path,
        r##"{
            "folders": [],
            "actionButtons": [
                { "type": "simple", "id": "call", "name": "Call", "color": "#22c55e",
                  "isFontAdaptive": false, "fontSize": 12.5, "fontColor": "black" },
                { "type": "weighted", "id": "mix", "name": "Mix",
                  "action1Id": "call", "action2Id": "fold", "weight": 70.5 }
            ]
        }"##,
    )
    .unwrap();

    let loaded = RangeLibrary::load_from(&path).unwrap();
    let call = loaded.action("call").and_then(ActionButton::as_simple).unwrap();
    assert!(!call.is_font_adaptive);
    assert_eq!(call.font(), FontSize::Fixed(13));
    assert_eq!(call.font_color, FontColor::Black);

    let mix = loaded.action("mix").and_then(ActionButton::as_weighted).unwrap();
    assert_eq!(mix.weight, 71);
}

#[test]
fn test_malformed_typed_record_is_not_migrated() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("library.json");
    std::fs::write(
        &path,
        r##"{ "actionButtons": [
            { "type": "weighted", "id": "mix", "name": "Mix", "color": "#22c55e" }
        ] }"##,
    )
    .unwrap();

    assert!(matches!(RangeLibrary::load_from(&path), Err(StoreError::Json(_))));
}
