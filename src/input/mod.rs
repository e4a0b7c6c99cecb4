//! Pointer and touch input handling for the hand matrix.
//!
//! This module implements the painting interaction: pressing a cell picks a
//! mode (select or deselect), dragging across cells applies that mode to each
//! cell once, and releasing anywhere ends the drag.
//!
//! ## Architecture
//!
//! The selection engine is an explicit state machine (`SelectionState`) and
//! owns no range data. It reads the current assignment through a
//! `SelectionContext` and answers each event with at most one `HandMutation`
//! that the owning store applies.
//!
//! ## Modules
//!
//! - `state` - Selection state machine enum and drag session bookkeeping
//! - `mutation` - Select/deselect requests and how they update an assignment
//! - `engine` - Event handling (press, enter, release, click)
//! - `coords` - Cell geometry on screen
//! - `hit_test` - R-tree lookup from touch coordinates to cells
//! - `release` - Window-wide release listeners with scoped subscriptions

pub mod coords;
mod engine;
mod mutation;
mod release;
mod state;

pub use coords::{CellLayout, CellRect};
pub use engine::{PointerEvent, SelectionContext, SelectionEngine};
pub use hit_test::{CellEntry, CellIndex};
pub use mutation::{HandMutation, SelectionMode};
pub use release::{ReleaseHub, ReleaseSubscription};
pub use state::{DragSession, Gesture, SelectionState};
