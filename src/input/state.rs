//! Selection state machine - drag bookkeeping for painting the matrix.
//!
//! ## State Transitions
//!
//! ```text
//! Idle -> Dragging        (press on a cell)
//! Dragging -> Dragging    (press while dragging: previous drag closed first)
//! Any -> Idle             (release anywhere, touch end, touch cancel)
//! ```

use super::mutation::{HandMutation, SelectionMode};
use crate::hand::HandClass;

/// An in-progress drag. Created on press, dropped on release.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DragSession {
    /// Fixed for the whole drag, decided at press time
    pub mode: SelectionMode,
    /// Cell the drag started on
    pub origin: HandClass,
    /// Last cell a mutation was emitted for
    pub last_mutated: HandClass,
    /// Whether the pointer entered a cell other than the origin
    pub crossed: bool,
}

impl DragSession {
    pub fn new(origin: HandClass, mode: SelectionMode) -> Self {
        Self {
            mode,
            origin,
            last_mutated: origin,
            crossed: false,
        }
    }

    /// Record the pointer entering `hand`, returning the mutation to emit.
    ///
    /// Entering the cell that was just mutated again is a no-op.
    pub fn enter(&mut self, hand: HandClass) -> Option<HandMutation> {
        if hand != self.origin {
            self.crossed = true;
        }
        if hand == self.last_mutated {
            return None;
        }
        self.last_mutated = hand;
        Some(HandMutation::new(hand, self.mode))
    }

    pub fn gesture(&self) -> Gesture {
        Gesture {
            origin: self.origin,
            last: self.last_mutated,
        }
    }
}

/// Summary of a finished (or finishing) press, used to decide whether the
/// terminal click of the gesture still needs to emit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Gesture {
    pub origin: HandClass,
    /// Cell the gesture last painted; the origin for a plain press
    pub last: HandClass,
}

impl Gesture {
    /// Whether a click on `hand` is the terminal click of this gesture.
    pub fn ends_on(&self, hand: HandClass) -> bool {
        hand == self.origin || hand == self.last
    }
}

/// Selection state of one mounted matrix.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SelectionState {
    /// No pointer is held down over the matrix
    #[default]
    Idle,

    /// Pointer held down, painting with a fixed mode
    Dragging(DragSession),
}

impl SelectionState {
    pub fn is_idle(&self) -> bool {
        matches!(self, Self::Idle)
    }

    pub fn is_dragging(&self) -> bool {
        matches!(self, Self::Dragging(_))
    }

    /// Mode of the current drag, if any
    pub fn mode(&self) -> Option<SelectionMode> {
        match self {
            Self::Dragging(session) => Some(session.mode),
            Self::Idle => None,
        }
    }

    /// Cell the current drag started on
    pub fn origin(&self) -> Option<HandClass> {
        match self {
            Self::Dragging(session) => Some(session.origin),
            Self::Idle => None,
        }
    }

    pub fn session_mut(&mut self) -> Option<&mut DragSession> {
        match self {
            Self::Dragging(session) => Some(session),
            Self::Idle => None,
        }
    }

    pub fn start_drag(&mut self, origin: HandClass, mode: SelectionMode) {
        *self = Self::Dragging(DragSession::new(origin, mode));
    }

    /// Back to idle, returning the drag that was in progress
    pub fn finish(&mut self) -> Option<DragSession> {
        match std::mem::take(self) {
            Self::Dragging(session) => Some(session),
            Self::Idle => None,
        }
    }
}
