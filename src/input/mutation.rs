//! Mutations emitted by the selection engine and how a store applies them.

use crate::action::HandAssignmentMap;
use crate::hand::HandClass;
use serde::{Deserialize, Serialize};

/// Whether a drag paints the active action or erases it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SelectionMode {
    Select,
    Deselect,
}

impl SelectionMode {
    /// Deselect when `hand` already carries the active action, select otherwise.
    pub fn for_hand(hand: HandClass, assignment: &HandAssignmentMap, active_action: &str) -> Self {
        match assignment.get(&hand) {
            Some(current) if current == active_action => Self::Deselect,
            _ => Self::Select,
        }
    }
}

/// A request to select or deselect one hand.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct HandMutation {
    pub hand: HandClass,
    pub mode: SelectionMode,
}

impl HandMutation {
    pub fn new(hand: HandClass, mode: SelectionMode) -> Self {
        Self { hand, mode }
    }

    /// Apply to `assignment` on behalf of `active_action`.
    ///
    /// Deselect only clears the active action; a cell holding another
    /// action is left untouched. Returns whether the map changed.
    pub fn apply(&self, assignment: &mut HandAssignmentMap, active_action: &str) -> bool {
        match self.mode {
            SelectionMode::Select => {
                let previous = assignment.insert(self.hand, active_action.to_string());
                previous.as_deref() != Some(active_action)
            }
            SelectionMode::Deselect => {
                if assignment.get(&self.hand).map(String::as_str) == Some(active_action) {
                    assignment.remove(&self.hand);
                    true
                } else {
                    false
                }
            }
        }
    }
}
