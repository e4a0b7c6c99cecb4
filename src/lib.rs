//! Rangeboard - build preflop ranges by painting a 13x13 hand matrix.
//!
//! - `hand` - the 169 hand classes and their combination counts
//! - `action` - action buttons and cell styling
//! - `input` - the drag/click selection state machine and touch hit testing
//! - `matrix` - per-mount controller a rendering layer drives
//! - `store` - folders, ranges, action buttons and their persistence
//! - `stats` - combo share of each action in a range
//! - `settings` - user settings

pub mod action;
pub mod constants;
pub mod hand;
pub mod input;
pub mod logging;
pub mod matrix;
pub mod settings;
pub mod stats;
pub mod store;
