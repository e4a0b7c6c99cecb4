//! Unit tests for cell styling.

use crate::helpers::{FOLDER_ID, RANGE_ID, TestLibraryBuilder, hand};
use rangeboard::action::{ActionButton, CellStyle, FontColor, FontSize, SimpleAction, resolve_style};
use rangeboard::constants::{FOLD_COLOR, NEUTRAL_COLOR};
use rangeboard::hand::HandGrid;

#[test]
fn test_weighted_scenario_seventy_thirty() {
    let library = TestLibraryBuilder::new()
        .with_weighted("mix", "raise", "fold", 70)
        .with_hand("QQ", "mix")
        .build();
    let range = library.range(FOLDER_ID, RANGE_ID).unwrap();

    let style = resolve_style(hand("QQ"), &range.hands, &library.action_buttons);
    assert_eq!(
        style,
        CellStyle::Split {
            left: "#8b5cf6".to_string(),
            right: FOLD_COLOR.to_string(),
            split_percent: 70,
            text_color: FontColor::White,
        }
    );
}

#[test]
fn test_weighted_ignores_simple_font_color() {
    let mut library = TestLibraryBuilder::new()
        .with_weighted("mix", "raise", "fold", 30)
        .with_hand("AKo", "mix")
        .build();
    if let ActionButton::Simple(raise) = &mut library.action_buttons[0] {
        raise.font_color = FontColor::Black;
    }
    let range = library.range(FOLDER_ID, RANGE_ID).unwrap();

    let style = resolve_style(hand("AKo"), &range.hands, &library.action_buttons);
    assert_eq!(style.text_color(), Some(FontColor::White));
}

#[test]
fn test_resolve_style_is_idempotent() {
    let library = TestLibraryBuilder::new()
        .with_simple("call", "#22c55e")
        .with_weighted("mix", "call", "fold", 55)
        .with_hand("AA", "raise")
        .with_hand("KK", "call")
        .with_hand("QQ", "mix")
        .with_hand("JJ", "fold")
        .with_hand("TT", "ghost")
        .build();
    let range = library.range(FOLDER_ID, RANGE_ID).unwrap();

    for hand in HandGrid::standard().hands() {
        let first = resolve_style(hand, &range.hands, &library.action_buttons);
        let second = resolve_style(hand, &range.hands, &library.action_buttons);
        assert_eq!(first, second);
    }
}

#[test]
fn test_fold_and_unknown_assignments() {
    let library = TestLibraryBuilder::new()
        .with_hand("JJ", "fold")
        .with_hand("TT", "ghost")
        .build();
    let range = library.range(FOLDER_ID, RANGE_ID).unwrap();

    assert_eq!(
        resolve_style(hand("JJ"), &range.hands, &library.action_buttons),
        CellStyle::Solid {
            fill: FOLD_COLOR.to_string(),
            text_color: FontColor::White,
            font: FontSize::Adaptive,
        }
    );
    assert!(resolve_style(hand("TT"), &range.hands, &library.action_buttons).is_empty());
}

#[test]
fn test_weighted_between_removed_actions_degrades() {
    let library = TestLibraryBuilder::new()
        .with_weighted("mix", "gone", "also-gone", 50)
        .with_hand("99", "mix")
        .build();
    let range = library.range(FOLDER_ID, RANGE_ID).unwrap();

    match resolve_style(hand("99"), &range.hands, &library.action_buttons) {
        CellStyle::Split { left, right, .. } => {
            assert_eq!(left, NEUTRAL_COLOR);
            assert_eq!(right, NEUTRAL_COLOR);
        }
        other => panic!("expected split style, got {other:?}"),
    }
}

#[test]
fn test_fixed_font_size() {
    let actions: Vec<ActionButton> =
        vec![SimpleAction::new("raise", "Raise", "#8b5cf6").with_fixed_font(18).into()];
    let mut hands = rangeboard::action::HandAssignmentMap::new();
    hands.insert(hand("A5s"), "raise".to_string());

    match resolve_style(hand("A5s"), &hands, &actions) {
        CellStyle::Solid { font, .. } => assert_eq!(font, FontSize::Fixed(18)),
        other => panic!("expected solid style, got {other:?}"),
    }
}
