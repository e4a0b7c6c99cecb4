//! Application-wide constants.
//!
//! Centralizes rank symbols, reserved action ids, colors and layout values
//! so the matrix, the renderer and the store agree on them.

// ============================================================================
// Hand Grid
// ============================================================================

/// Number of ranks, and so the side length of the hand matrix
pub const GRID_SIZE: usize = 13;

/// Rank symbols from strongest to weakest
pub const RANKS: [char; GRID_SIZE] = [
    'A', 'K', 'Q', 'J', 'T', '9', '8', '7', '6', '5', '4', '3', '2',
];

/// Concrete two-card deals of a pocket pair
pub const PAIR_COMBOS: u32 = 6;

/// Concrete two-card deals of a suited hand
pub const SUITED_COMBOS: u32 = 4;

/// Concrete two-card deals of an offsuit hand
pub const OFFSUIT_COMBOS: u32 = 12;

// ============================================================================
// Actions
// ============================================================================

/// Reserved id of the built-in fold action (never stored in the action list)
pub const FOLD_ACTION_ID: &str = "fold";

/// Display name of the built-in fold action
pub const FOLD_ACTION_NAME: &str = "Fold";

/// Fixed color of the fold action (muted gray)
pub const FOLD_COLOR: &str = "#6b7280";

/// Fallback color for unresolved or weighted references
pub const NEUTRAL_COLOR: &str = "#ffffff";

/// Id of the action seeded into a fresh library
pub const DEFAULT_ACTION_ID: &str = "raise";

/// Name of the action seeded into a fresh library
pub const DEFAULT_ACTION_NAME: &str = "Raise";

/// Color of newly created actions
pub const DEFAULT_ACTION_COLOR: &str = "#8b5cf6";

/// Font size in pixels used when a simple action disables adaptive fonts
pub const DEFAULT_FONT_SIZE: u32 = 12;

/// Upper bound of a weighted action's split
pub const MAX_WEIGHT: u8 = 100;

// ============================================================================
// Matrix Layout
// ============================================================================

/// Rendered side length of one cell at zoom 1.0, in pixels
pub const DEFAULT_CELL_SIZE: f32 = 40.0;

/// Gap between neighbouring cells at zoom 1.0, in pixels
pub const DEFAULT_CELL_GAP: f32 = 8.0;

/// Zoom presets offered next to the matrix (x1, x1.2, x1.5 labels)
pub const ZOOM_PRESETS: [f32; 3] = [0.85, 1.0, 1.2];

/// Default zoom level on desktop
pub const DEFAULT_ZOOM: f32 = 0.85;

// ============================================================================
// Storage
// ============================================================================

/// Directory name used under the platform config and data dirs
pub const APP_DIR_NAME: &str = "rangeboard";

/// File holding folders, ranges and action buttons
pub const LIBRARY_FILE_NAME: &str = "library.json";

/// File holding user settings
pub const SETTINGS_FILE_NAME: &str = "settings.json";
