//! Hand classes and the 13x13 preflop matrix.
//!
//! The matrix holds the 169 strategically distinct starting hands:
//! pocket pairs on the diagonal, suited hands above it and offsuit hands
//! below it. Offsuit names always lead with the stronger rank ("AKo",
//! never "KAo"), whichever side of the diagonal produced them.

use crate::constants::{GRID_SIZE, OFFSUIT_COMBOS, PAIR_COMBOS, RANKS, SUITED_COMBOS};
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

static STANDARD_GRID: Lazy<HandGrid> = Lazy::new(|| HandGrid::build(RANKS));

static TOTAL_COMBINATIONS: Lazy<u32> = Lazy::new(|| STANDARD_GRID.total_combinations());

/// Shape of a starting hand.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HandShape {
    Pair,
    Suited,
    Offsuit,
}

impl HandShape {
    /// Number of concrete two-card deals for this shape.
    pub fn combinations(self) -> u32 {
        match self {
            Self::Pair => PAIR_COMBOS,
            Self::Suited => SUITED_COMBOS,
            Self::Offsuit => OFFSUIT_COMBOS,
        }
    }

    fn suffix(self) -> Option<char> {
        match self {
            Self::Pair => None,
            Self::Suited => Some('s'),
            Self::Offsuit => Some('o'),
        }
    }
}

/// Errors produced when parsing hand notation such as `"AKs"`.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum HandParseError {
    #[error("invalid hand notation: {0:?}")]
    Malformed(String),

    #[error("unknown rank symbol {0:?}")]
    UnknownRank(char),

    #[error("ranks out of order in {0:?}, expected the stronger rank first")]
    OutOfOrder(String),
}

/// One of the 169 starting-hand classes.
///
/// Serialized as its notation string so it can key JSON maps.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct HandClass {
    /// Stronger (or equal) rank symbol
    high: char,
    /// Weaker (or equal) rank symbol
    low: char,
    shape: HandShape,
}

impl HandClass {
    pub(crate) fn pair(rank: char) -> Self {
        Self {
            high: rank,
            low: rank,
            shape: HandShape::Pair,
        }
    }

    pub(crate) fn suited(high: char, low: char) -> Self {
        Self {
            high,
            low,
            shape: HandShape::Suited,
        }
    }

    pub(crate) fn offsuit(high: char, low: char) -> Self {
        Self {
            high,
            low,
            shape: HandShape::Offsuit,
        }
    }

    pub fn high(&self) -> char {
        self.high
    }

    pub fn low(&self) -> char {
        self.low
    }

    pub fn shape(&self) -> HandShape {
        self.shape
    }

    pub fn is_pair(&self) -> bool {
        self.shape == HandShape::Pair
    }

    pub fn is_suited(&self) -> bool {
        self.shape == HandShape::Suited
    }

    pub fn is_offsuit(&self) -> bool {
        self.shape == HandShape::Offsuit
    }

    /// Number of concrete deals mapping to this class (6, 4 or 12).
    pub fn combinations(&self) -> u32 {
        self.shape.combinations()
    }

    /// Standard notation, e.g. `"AA"`, `"AKs"`, `"AKo"`.
    pub fn notation(&self) -> String {
        self.to_string()
    }
}

/// Index of a rank symbol in standard strength order; unknown symbols sort
/// after every standard rank, by symbol code.
fn strength_index(rank: char) -> usize {
    RANKS
        .iter()
        .position(|&r| r == rank)
        .unwrap_or(GRID_SIZE + rank as usize)
}

impl Ord for HandClass {
    fn cmp(&self, other: &Self) -> Ordering {
        strength_index(self.high)
            .cmp(&strength_index(other.high))
            .then_with(|| strength_index(self.low).cmp(&strength_index(other.low)))
            .then_with(|| self.shape.cmp(&other.shape))
    }
}

impl PartialOrd for HandClass {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for HandClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.high, self.low)?;
        if let Some(suffix) = self.shape.suffix() {
            write!(f, "{}", suffix)?;
        }
        Ok(())
    }
}

impl FromStr for HandClass {
    type Err = HandParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let chars: Vec<char> = s.chars().collect();
        let (high, low, shape) = match chars.as_slice() {
            [a, b] if a == b => (*a, *b, HandShape::Pair),
            [a, b, 's'] if a != b => (*a, *b, HandShape::Suited),
            [a, b, 'o'] if a != b => (*a, *b, HandShape::Offsuit),
            _ => return Err(HandParseError::Malformed(s.to_string())),
        };

        for rank in [high, low] {
            if !RANKS.contains(&rank) {
                return Err(HandParseError::UnknownRank(rank));
            }
        }
        if strength_index(high) > strength_index(low) {
            return Err(HandParseError::OutOfOrder(s.to_string()));
        }

        Ok(Self { high, low, shape })
    }
}

impl TryFrom<String> for HandClass {
    type Error = HandParseError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<HandClass> for String {
    fn from(hand: HandClass) -> Self {
        hand.to_string()
    }
}

/// The 13x13 table of hand classes for a given rank order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HandGrid {
    ranks: [char; GRID_SIZE],
    cells: [[HandClass; GRID_SIZE]; GRID_SIZE],
}

impl HandGrid {
    /// Build the table for `ranks`, ordered from strongest to weakest.
    ///
    /// Cell `(row, col)` is a pair on the diagonal, suited above it and
    /// offsuit below it. Offsuit cells are named from the lower index first.
    ///
    /// Parsing, serialization and ordering of [`HandClass`] know only the
    /// standard [`RANKS`]. Hands from a grid built with other symbols are
    /// for display; they do not survive a JSON round trip and sort by
    /// symbol code. Persist ranges against [`HandGrid::standard`].
    pub fn build(ranks: [char; GRID_SIZE]) -> Self {
        let cells = std::array::from_fn(|row| {
            std::array::from_fn(|col| match row.cmp(&col) {
                Ordering::Equal => HandClass::pair(ranks[row]),
                Ordering::Less => HandClass::suited(ranks[row], ranks[col]),
                Ordering::Greater => HandClass::offsuit(ranks[col], ranks[row]),
            })
        });
        Self { ranks, cells }
    }

    /// The standard `AKQJT98765432` grid, built once.
    pub fn standard() -> &'static HandGrid {
        &STANDARD_GRID
    }

    pub fn ranks(&self) -> &[char; GRID_SIZE] {
        &self.ranks
    }

    pub fn rows(&self) -> &[[HandClass; GRID_SIZE]; GRID_SIZE] {
        &self.cells
    }

    pub fn get(&self, row: usize, col: usize) -> Option<HandClass> {
        self.cells.get(row)?.get(col).copied()
    }

    /// All cells in row-major order with their coordinates.
    pub fn iter(&self) -> impl Iterator<Item = (usize, usize, HandClass)> + '_ {
        self.cells.iter().enumerate().flat_map(|(row, cells)| {
            cells
                .iter()
                .enumerate()
                .map(move |(col, hand)| (row, col, *hand))
        })
    }

    pub fn hands(&self) -> impl Iterator<Item = HandClass> + '_ {
        self.cells.iter().flatten().copied()
    }

    /// Row and column of `hand`, if it belongs to this grid.
    pub fn position_of(&self, hand: HandClass) -> Option<(usize, usize)> {
        let high = self.ranks.iter().position(|&r| r == hand.high)?;
        let low = self.ranks.iter().position(|&r| r == hand.low)?;
        let position = match hand.shape {
            HandShape::Pair => (high, high),
            HandShape::Suited => (high.min(low), high.max(low)),
            HandShape::Offsuit => (high.max(low), high.min(low)),
        };
        (self.cells[position.0][position.1] == hand).then_some(position)
    }

    /// Sum of combinations over every cell.
    pub fn total_combinations(&self) -> u32 {
        self.hands().map(combinations_of).sum()
    }
}

/// Number of concrete two-card deals for `hand`: 6 pair, 4 suited, 12 offsuit.
pub fn combinations_of(hand: HandClass) -> u32 {
    hand.combinations()
}

/// Combinations for a notation string, or 0 when it is not a hand class.
pub fn combinations_of_notation(notation: &str) -> u32 {
    notation
        .parse::<HandClass>()
        .map(|hand| hand.combinations())
        .unwrap_or(0)
}

/// Total deals over the standard grid (1326), computed from the table.
pub fn total_combinations() -> u32 {
    *TOTAL_COMBINATIONS
}
