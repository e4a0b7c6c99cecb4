//! User settings persisted as `settings.json` in the platform config dir.
//!
//! Missing or unreadable settings never block startup; defaults are used
//! and the problem is logged.

use crate::constants::{
    APP_DIR_NAME, DEFAULT_CELL_GAP, DEFAULT_CELL_SIZE, DEFAULT_ZOOM, SETTINGS_FILE_NAME,
    ZOOM_PRESETS,
};
use crate::input::CellLayout;
use crate::store::{StoreResult, default_library_path, write_json_atomic};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Settings {
    /// Overrides the default library location
    #[serde(skip_serializing_if = "Option::is_none")]
    pub library_path: Option<PathBuf>,
    /// Matrix zoom level
    pub zoom: f32,
    /// Cell side length in pixels at zoom 1.0
    pub cell_size: f32,
    /// Gap between cells in pixels at zoom 1.0
    pub cell_gap: f32,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            library_path: None,
            zoom: DEFAULT_ZOOM,
            cell_size: DEFAULT_CELL_SIZE,
            cell_gap: DEFAULT_CELL_GAP,
        }
    }
}

impl Settings {
    /// Load from the default settings path.
    pub fn load() -> Self {
        default_settings_path()
            .map(|path| Self::load_from(&path))
            .unwrap_or_default()
    }

    pub fn load_from(path: &Path) -> Self {
        let contents = match std::fs::read_to_string(path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                debug!(path = %path.display(), "no settings file, using defaults");
                return Self::default();
            }
            Err(e) => {
                warn!("Failed to read settings {}: {}", path.display(), e);
                return Self::default();
            }
        };

        match serde_json::from_str::<Self>(&contents) {
            Ok(settings) => settings.sanitized(),
            Err(e) => {
                warn!("Failed to parse settings {}: {}", path.display(), e);
                Self::default()
            }
        }
    }

    /// Write settings atomically, so a crash never leaves a truncated file.
    pub fn save_to(&self, path: &Path) -> StoreResult<()> {
        write_json_atomic(path, self)?;
        debug!(path = %path.display(), "settings saved");
        Ok(())
    }

    /// Replace non-positive or non-finite geometry with defaults.
    fn sanitized(mut self) -> Self {
        let defaults = Self::default();
        if !(self.zoom.is_finite() && self.zoom > 0.0) {
            self.zoom = defaults.zoom;
        }
        if !(self.cell_size.is_finite() && self.cell_size > 0.0) {
            self.cell_size = defaults.cell_size;
        }
        if !(self.cell_gap.is_finite() && self.cell_gap >= 0.0) {
            self.cell_gap = defaults.cell_gap;
        }
        self
    }

    /// Select one of the zoom presets; out-of-range indices are ignored.
    pub fn set_zoom_preset(&mut self, index: usize) {
        if let Some(zoom) = ZOOM_PRESETS.get(index) {
            self.zoom = *zoom;
        }
    }

    pub fn library_path(&self) -> Option<PathBuf> {
        self.library_path.clone().or_else(default_library_path)
    }

    /// Matrix geometry for a grid whose top-left corner sits at `origin`.
    pub fn layout(&self, origin: (f32, f32)) -> CellLayout {
        CellLayout::new(origin, self.cell_size, self.cell_gap, self.zoom)
    }
}

/// Default location of `settings.json`.
pub fn default_settings_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join(APP_DIR_NAME).join(SETTINGS_FILE_NAME))
}
