//! Action buttons and cell styling.
//!
//! An action button is either a simple action with one solid color and font
//! rules, or a weighted blend of two other actions. Cells of the matrix are
//! styled from the action id assigned to their hand; every lookup that fails
//! degrades to a neutral color instead of an error.

use crate::constants::{FOLD_ACTION_ID, FOLD_COLOR, MAX_WEIGHT, NEUTRAL_COLOR};
use crate::hand::HandClass;
use serde::{Deserialize, Deserializer, Serialize};
use std::collections::{BTreeMap, HashSet};
use thiserror::Error;

/// Sparse mapping from hand class to the id of its assigned action.
///
/// Absent entries are unassigned cells.
pub type HandAssignmentMap = BTreeMap<HandClass, String>;

// ============================================================================
// Action Buttons
// ============================================================================

/// Text color of a cell label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FontColor {
    #[default]
    White,
    Black,
}

impl FontColor {
    pub fn hex(self) -> &'static str {
        match self {
            Self::White => "#ffffff",
            Self::Black => "#000000",
        }
    }
}

/// Font size of a cell label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum FontSize {
    /// Scales with the rendered cell
    #[default]
    Adaptive,
    /// Fixed size in pixels
    Fixed(u32),
}

fn default_true() -> bool {
    true
}

/// Font sizes may be stored as any JSON number; round to whole pixels.
fn deserialize_font_size<'de, D>(deserializer: D) -> Result<Option<u32>, D::Error>
where
    D: Deserializer<'de>,
{
    let size = Option::<f64>::deserialize(deserializer)?;
    Ok(size.map(|size| size.round().max(1.0) as u32))
}

/// Weights may be stored as any JSON number; round and clamp to `0..=100`.
fn deserialize_weight<'de, D>(deserializer: D) -> Result<u8, D::Error>
where
    D: Deserializer<'de>,
{
    let weight = f64::deserialize(deserializer)?;
    Ok(weight.round().clamp(0.0, f64::from(MAX_WEIGHT)) as u8)
}

/// A user action with one solid color.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SimpleAction {
    pub id: String,
    pub name: String,
    /// Fill color as a CSS hex string
    pub color: String,
    #[serde(default = "default_true")]
    pub is_font_adaptive: bool,
    /// Ignored while `is_font_adaptive` is set
    #[serde(
        default,
        deserialize_with = "deserialize_font_size",
        skip_serializing_if = "Option::is_none"
    )]
    pub font_size: Option<u32>,
    #[serde(default)]
    pub font_color: FontColor,
}

impl SimpleAction {
    pub fn new(id: impl Into<String>, name: impl Into<String>, color: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            color: color.into(),
            is_font_adaptive: true,
            font_size: None,
            font_color: FontColor::White,
        }
    }

    pub fn with_fixed_font(mut self, size: u32) -> Self {
        self.is_font_adaptive = false;
        self.font_size = Some(size);
        self
    }

    pub fn with_font_color(mut self, color: FontColor) -> Self {
        self.font_color = color;
        self
    }

    /// Effective label size: fixed only when adaptive fonts are off and a
    /// size is set.
    pub fn font(&self) -> FontSize {
        match (self.is_font_adaptive, self.font_size) {
            (false, Some(size)) => FontSize::Fixed(size),
            _ => FontSize::Adaptive,
        }
    }
}

/// A blend of two actions; `weight` percent goes to `action1_id`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WeightedAction {
    pub id: String,
    pub name: String,
    pub action1_id: String,
    pub action2_id: String,
    #[serde(deserialize_with = "deserialize_weight")]
    pub weight: u8,
}

impl WeightedAction {
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        action1_id: impl Into<String>,
        action2_id: impl Into<String>,
        weight: u8,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            action1_id: action1_id.into(),
            action2_id: action2_id.into(),
            weight,
        }
    }

    /// Weight clamped to `0..=100`.
    pub fn weight_percent(&self) -> u8 {
        self.weight.min(MAX_WEIGHT)
    }
}

/// An entry of the user's action list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum ActionButton {
    Simple(SimpleAction),
    Weighted(WeightedAction),
}

impl ActionButton {
    pub fn id(&self) -> &str {
        match self {
            Self::Simple(action) => &action.id,
            Self::Weighted(action) => &action.id,
        }
    }

    pub fn name(&self) -> &str {
        match self {
            Self::Simple(action) => &action.name,
            Self::Weighted(action) => &action.name,
        }
    }

    pub fn as_simple(&self) -> Option<&SimpleAction> {
        match self {
            Self::Simple(action) => Some(action),
            Self::Weighted(_) => None,
        }
    }

    pub fn as_weighted(&self) -> Option<&WeightedAction> {
        match self {
            Self::Simple(_) => None,
            Self::Weighted(action) => Some(action),
        }
    }

    /// Whether this button is, or blends, the action `id`.
    pub fn refers_to(&self, id: &str) -> bool {
        match self {
            Self::Simple(action) => action.id == id,
            Self::Weighted(action) => {
                action.id == id || action.action1_id == id || action.action2_id == id
            }
        }
    }
}

impl From<SimpleAction> for ActionButton {
    fn from(action: SimpleAction) -> Self {
        Self::Simple(action)
    }
}

impl From<WeightedAction> for ActionButton {
    fn from(action: WeightedAction) -> Self {
        Self::Weighted(action)
    }
}

pub fn find_action<'a>(id: &str, actions: &'a [ActionButton]) -> Option<&'a ActionButton> {
    actions.iter().find(|action| action.id() == id)
}

// ============================================================================
// Validation
// ============================================================================

/// Problems with an action collection, reported before it reaches the matrix.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ActionError {
    #[error("action id {0:?} is reserved")]
    ReservedId(String),

    #[error("duplicate action id {0:?}")]
    DuplicateId(String),

    #[error("action {0:?} has an empty name")]
    EmptyName(String),

    #[error("weighted action {id:?} has weight {weight}, expected 0..=100")]
    WeightOutOfRange { id: String, weight: u8 },

    #[error("weighted action {id:?} references unknown action {target:?}")]
    DanglingReference { id: String, target: String },

    #[error("weighted action {id:?} references weighted action {target:?}")]
    NestedWeighted { id: String, target: String },
}

/// Check id uniqueness, the reserved fold id and weighted references.
pub fn validate_actions(actions: &[ActionButton]) -> Result<(), ActionError> {
    let mut seen = HashSet::new();
    for action in actions {
        let id = action.id();
        if id == FOLD_ACTION_ID {
            return Err(ActionError::ReservedId(id.to_string()));
        }
        if !seen.insert(id) {
            return Err(ActionError::DuplicateId(id.to_string()));
        }
        if action.name().trim().is_empty() {
            return Err(ActionError::EmptyName(id.to_string()));
        }
    }

    for weighted in actions.iter().filter_map(ActionButton::as_weighted) {
        if weighted.weight > MAX_WEIGHT {
            return Err(ActionError::WeightOutOfRange {
                id: weighted.id.clone(),
                weight: weighted.weight,
            });
        }
        for target in [&weighted.action1_id, &weighted.action2_id] {
            if target == FOLD_ACTION_ID {
                continue;
            }
            match find_action(target, actions) {
                Some(ActionButton::Simple(_)) => {}
                Some(ActionButton::Weighted(_)) => {
                    return Err(ActionError::NestedWeighted {
                        id: weighted.id.clone(),
                        target: target.clone(),
                    });
                }
                None => {
                    return Err(ActionError::DanglingReference {
                        id: weighted.id.clone(),
                        target: target.clone(),
                    });
                }
            }
        }
    }
    Ok(())
}

// ============================================================================
// Styling
// ============================================================================

/// Visual description of one matrix cell.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum CellStyle {
    /// Unassigned cell, drawn with the muted theme colors
    Empty,

    /// Single solid fill
    #[serde(rename_all = "camelCase")]
    Solid {
        fill: String,
        text_color: FontColor,
        font: FontSize,
    },

    /// Two-color horizontal split; `left` covers `split_percent` of the width
    #[serde(rename_all = "camelCase")]
    Split {
        left: String,
        right: String,
        split_percent: u8,
        text_color: FontColor,
    },
}

impl CellStyle {
    pub fn is_empty(&self) -> bool {
        matches!(self, Self::Empty)
    }

    /// CSS `background` value for the cell, if it is filled.
    pub fn background(&self) -> Option<String> {
        match self {
            Self::Empty => None,
            Self::Solid { fill, .. } => Some(fill.clone()),
            Self::Split {
                left,
                right,
                split_percent,
                ..
            } => Some(format!(
                "linear-gradient(to right, {left} {split_percent}%, {right} {split_percent}%)"
            )),
        }
    }

    pub fn text_color(&self) -> Option<FontColor> {
        match self {
            Self::Empty => None,
            Self::Solid { text_color, .. } | Self::Split { text_color, .. } => Some(*text_color),
        }
    }
}

/// Text color of weighted cells, which ignore per-action font settings.
pub const WEIGHTED_TEXT_COLOR: FontColor = FontColor::White;

/// Color of the action `action_id`.
///
/// Fold has a fixed color; simple actions use their own. Unknown ids and
/// weighted actions fall back to the neutral color.
pub fn color_of<'a>(action_id: &str, actions: &'a [ActionButton]) -> &'a str {
    if action_id == FOLD_ACTION_ID {
        return FOLD_COLOR;
    }
    match find_action(action_id, actions) {
        Some(ActionButton::Simple(action)) => &action.color,
        Some(ActionButton::Weighted(_)) | None => NEUTRAL_COLOR,
    }
}

/// Style of `hand` given the current assignment and action list.
pub fn resolve_style(
    hand: HandClass,
    assignment: &HandAssignmentMap,
    actions: &[ActionButton],
) -> CellStyle {
    let Some(action_id) = assignment.get(&hand) else {
        return CellStyle::Empty;
    };

    if action_id == FOLD_ACTION_ID {
        return CellStyle::Solid {
            fill: FOLD_COLOR.to_string(),
            text_color: FontColor::White,
            font: FontSize::Adaptive,
        };
    }

    match find_action(action_id, actions) {
        Some(ActionButton::Simple(action)) => CellStyle::Solid {
            fill: action.color.clone(),
            text_color: action.font_color,
            font: action.font(),
        },
        Some(ActionButton::Weighted(action)) => CellStyle::Split {
            left: color_of(&action.action1_id, actions).to_string(),
            right: color_of(&action.action2_id, actions).to_string(),
            split_percent: action.weight_percent(),
            text_color: WEIGHTED_TEXT_COLOR,
        },
        None => CellStyle::Empty,
    }
}
