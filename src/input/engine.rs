//! Selection engine - turns press/enter/release/click events into mutations.
//!
//! The engine holds no assignment data of its own. Every event is
//! interpreted against a [`SelectionContext`] supplied by the caller for the
//! current render, and yields at most one [`HandMutation`].
//!
//! A press emits for its own cell immediately, so the click that closes the
//! same gesture is absorbed. A click that does not follow a press (keyboard
//! activation, synthetic clicks) emits on its own.

use super::mutation::{HandMutation, SelectionMode};
use super::state::{Gesture, SelectionState};
use crate::action::HandAssignmentMap;
use crate::hand::HandClass;
use tracing::{debug, trace};

/// Per-render inputs the engine reads but never owns.
#[derive(Debug, Clone, Copy)]
pub struct SelectionContext<'a> {
    /// The "pen" action painted by select mutations
    pub active_action: &'a str,
    pub assignment: &'a HandAssignmentMap,
    pub read_only: bool,
    /// Non-interactive rendering, e.g. a background preview
    pub disabled: bool,
}

impl<'a> SelectionContext<'a> {
    pub fn new(active_action: &'a str, assignment: &'a HandAssignmentMap) -> Self {
        Self {
            active_action,
            assignment,
            read_only: false,
            disabled: false,
        }
    }

    pub fn read_only(mut self, read_only: bool) -> Self {
        self.read_only = read_only;
        self
    }

    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    pub fn is_interactive(&self) -> bool {
        !self.read_only && !self.disabled
    }

    pub fn mode_for(&self, hand: HandClass) -> SelectionMode {
        SelectionMode::for_hand(hand, self.assignment, self.active_action)
    }
}

/// Raw input forwarded by the rendering layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerEvent {
    /// Mouse down or touch start on a cell
    Press(HandClass),
    /// Pointer moved into a cell (touch moves arrive already hit-tested)
    Enter(HandClass),
    /// Mouse up, touch end or touch cancel, anywhere in the window
    Release,
    /// Click delivered by the cell
    Click(HandClass),
}

/// Drag/click state machine for one mounted matrix.
#[derive(Debug, Default)]
pub struct SelectionEngine {
    state: SelectionState,
    /// Released gesture still waiting for its terminal click
    finished: Option<Gesture>,
}

impl SelectionEngine {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &SelectionState {
        &self.state
    }

    pub fn is_dragging(&self) -> bool {
        self.state.is_dragging()
    }

    pub fn handle(&mut self, event: PointerEvent, ctx: &SelectionContext<'_>) -> Option<HandMutation> {
        match event {
            PointerEvent::Press(hand) => self.press(hand, ctx),
            PointerEvent::Enter(hand) => self.enter(hand, ctx),
            PointerEvent::Release => {
                self.release();
                None
            }
            PointerEvent::Click(hand) => self.click(hand, ctx),
        }
    }

    /// Start a drag on `hand` and emit its mutation.
    pub fn press(&mut self, hand: HandClass, ctx: &SelectionContext<'_>) -> Option<HandMutation> {
        if !ctx.is_interactive() {
            return None;
        }
        if self.state.is_dragging() {
            debug!(%hand, "press while dragging, closing previous drag");
            self.release();
        }
        self.finished = None;

        let mode = ctx.mode_for(hand);
        self.state.start_drag(hand, mode);
        trace!(%hand, ?mode, "drag started");
        Some(HandMutation::new(hand, mode))
    }

    /// Pointer entered `hand` while the button is held.
    pub fn enter(&mut self, hand: HandClass, ctx: &SelectionContext<'_>) -> Option<HandMutation> {
        // The pointer moved on; a pending terminal click can no longer arrive
        self.finished = None;
        if !ctx.is_interactive() {
            return None;
        }
        let mutation = self.state.session_mut()?.enter(hand);
        if let Some(mutation) = &mutation {
            trace!(hand = %mutation.hand, mode = ?mutation.mode, "drag painted cell");
        }
        mutation
    }

    /// End any drag. Safe to call in every state, including disabled views.
    pub fn release(&mut self) {
        if let Some(session) = self.state.finish() {
            trace!(origin = %session.origin, dragged = session.crossed, "drag released");
            self.finished = Some(session.gesture());
        }
    }

    /// A click on `hand`.
    ///
    /// Suppressed when it lands on the origin or last painted cell of the
    /// gesture it closes, since those already emitted; otherwise emits like a
    /// press would.
    pub fn click(&mut self, hand: HandClass, ctx: &SelectionContext<'_>) -> Option<HandMutation> {
        if !ctx.is_interactive() {
            return None;
        }
        let gesture = match &self.state {
            SelectionState::Dragging(session) => Some(session.gesture()),
            SelectionState::Idle => self.finished.take(),
        };

        match gesture {
            Some(gesture) if gesture.ends_on(hand) => {
                trace!(%hand, "click absorbed by gesture");
                None
            }
            _ => Some(HandMutation::new(hand, ctx.mode_for(hand))),
        }
    }

    /// Drop all drag bookkeeping, e.g. when the view becomes non-interactive.
    pub fn cancel(&mut self) {
        self.state = SelectionState::Idle;
        self.finished = None;
    }
}
