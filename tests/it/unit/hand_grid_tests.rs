//! Unit tests for hand module.

use rangeboard::constants::RANKS;
use rangeboard::hand::{
    HandClass, HandGrid, HandShape, combinations_of, combinations_of_notation, total_combinations,
};
use std::collections::HashSet;

#[test]
fn test_grid_has_169_distinct_hands() {
    let grid = HandGrid::standard();
    let distinct: HashSet<HandClass> = grid.hands().collect();
    assert_eq!(distinct.len(), 169);
}

#[test]
fn test_total_combinations() {
    assert_eq!(total_combinations(), 1326);
    assert_eq!(HandGrid::build(RANKS).total_combinations(), 1326);
}

#[test]
fn test_combinations_follow_shape() {
    for hand in HandGrid::standard().hands() {
        let expected = match hand.shape() {
            HandShape::Pair => 6,
            HandShape::Suited => 4,
            HandShape::Offsuit => 12,
        };
        assert_eq!(combinations_of(hand), expected, "{hand}");
        assert_eq!(combinations_of_notation(&hand.to_string()), expected);
    }
}

#[test]
fn test_offsuit_never_leads_with_weaker_rank() {
    let grid = HandGrid::standard();
    for (row, col, hand) in grid.iter() {
        if row > col {
            assert!(hand.is_offsuit());
            let name = hand.to_string();
            let expected = format!("{}{}o", RANKS[col], RANKS[row]);
            assert_eq!(name, expected);
        }
    }
}

#[test]
fn test_mirrored_cells_share_ranks() {
    let grid = HandGrid::standard();
    for row in 0..13 {
        for col in (row + 1)..13 {
            let suited = grid.get(row, col).unwrap();
            let offsuit = grid.get(col, row).unwrap();
            assert_eq!((suited.high(), suited.low()), (offsuit.high(), offsuit.low()));
        }
    }
}

#[test]
fn test_custom_rank_symbols() {
    let ranks = ['a', 'b', 'c', 'd', 'e', 'f', 'g', 'h', 'i', 'j', 'k', 'l', 'm'];
    let grid = HandGrid::build(ranks);
    assert_eq!(grid.get(0, 0).unwrap().to_string(), "aa");
    assert_eq!(grid.get(0, 12).unwrap().to_string(), "ams");
    assert_eq!(grid.get(12, 0).unwrap().to_string(), "amo");
    assert_eq!(grid.total_combinations(), 1326);
}

#[test]
fn test_out_of_grid_lookup() {
    let grid = HandGrid::standard();
    assert_eq!(grid.get(13, 0), None);
    assert_eq!(grid.get(0, 13), None);
}

#[test]
fn test_serde_uses_notation() {
    let hand: HandClass = "T9s".parse().unwrap();
    assert_eq!(serde_json::to_string(&hand).unwrap(), "\"T9s\"");
    let parsed: HandClass = serde_json::from_str("\"T9s\"").unwrap();
    assert_eq!(parsed, hand);
    assert!(serde_json::from_str::<HandClass>("\"9Ts\"").is_err());
}
