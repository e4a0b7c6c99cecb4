//! The range library - folders of ranges plus the user's action buttons.
//!
//! This is the single owner of every hand assignment. The matrix never
//! keeps a copy; it reads a range's map per render and hands mutations back
//! here.

use super::atomic::write_json_atomic;
use super::error::{StoreError, StoreResult};
use super::migrate;
use crate::action::{ActionButton, HandAssignmentMap, SimpleAction, validate_actions};
use crate::constants::{
    APP_DIR_NAME, DEFAULT_ACTION_COLOR, DEFAULT_ACTION_ID, DEFAULT_ACTION_NAME, DEFAULT_FONT_SIZE,
    LIBRARY_FILE_NAME,
};
use crate::input::HandMutation;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

fn new_id() -> String {
    uuid::Uuid::new_v4().to_string()
}

/// A named hand assignment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Range {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub hands: HandAssignmentMap,
}

impl Range {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: new_id(),
            name: name.into(),
            hands: HandAssignmentMap::new(),
        }
    }

    /// Apply a matrix mutation painted with `active_action`.
    pub fn apply(&mut self, mutation: &HandMutation, active_action: &str) -> bool {
        mutation.apply(&mut self.hands, active_action)
    }

    pub fn clear(&mut self) {
        self.hands.clear();
    }
}

/// A named group of ranges.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Folder {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub ranges: Vec<Range>,
}

impl Folder {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: new_id(),
            name: name.into(),
            ranges: Vec::new(),
        }
    }

    pub fn range(&self, range_id: &str) -> Option<&Range> {
        self.ranges.iter().find(|range| range.id == range_id)
    }

    pub fn range_mut(&mut self, range_id: &str) -> Option<&mut Range> {
        self.ranges.iter_mut().find(|range| range.id == range_id)
    }
}

/// Everything the user has built: folders, ranges and action buttons.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct RangeLibrary {
    pub folders: Vec<Folder>,
    #[serde(deserialize_with = "migrate::deserialize_actions")]
    pub action_buttons: Vec<ActionButton>,
}

impl Default for RangeLibrary {
    /// One folder holding one empty range, and a single raise action.
    fn default() -> Self {
        let mut raise = SimpleAction::new(DEFAULT_ACTION_ID, DEFAULT_ACTION_NAME, DEFAULT_ACTION_COLOR);
        raise.font_size = Some(DEFAULT_FONT_SIZE);

        Self {
            folders: vec![Folder {
                id: "1".to_string(),
                name: "Folder".to_string(),
                ranges: vec![Range {
                    id: "1".to_string(),
                    name: "Range".to_string(),
                    hands: HandAssignmentMap::new(),
                }],
            }],
            action_buttons: vec![raise.into()],
        }
    }
}

impl RangeLibrary {
    /// An empty library with no folders and no actions.
    pub fn empty() -> Self {
        Self {
            folders: Vec::new(),
            action_buttons: Vec::new(),
        }
    }

    // ========================================================================
    // Folders
    // ========================================================================

    pub fn folder(&self, folder_id: &str) -> Option<&Folder> {
        self.folders.iter().find(|folder| folder.id == folder_id)
    }

    pub fn folder_mut(&mut self, folder_id: &str) -> StoreResult<&mut Folder> {
        self.folders
            .iter_mut()
            .find(|folder| folder.id == folder_id)
            .ok_or_else(|| StoreError::UnknownFolder(folder_id.to_string()))
    }

    /// Create a folder and return its id.
    pub fn create_folder(&mut self, name: impl Into<String>) -> String {
        let folder = Folder::new(name);
        let id = folder.id.clone();
        debug!(%id, name = %folder.name, "folder created");
        self.folders.push(folder);
        id
    }

    pub fn rename_folder(&mut self, folder_id: &str, name: impl Into<String>) -> StoreResult<()> {
        self.folder_mut(folder_id)?.name = name.into();
        Ok(())
    }

    pub fn delete_folder(&mut self, folder_id: &str) -> StoreResult<Folder> {
        let index = self
            .folders
            .iter()
            .position(|folder| folder.id == folder_id)
            .ok_or_else(|| StoreError::UnknownFolder(folder_id.to_string()))?;
        debug!(folder_id, "folder deleted");
        Ok(self.folders.remove(index))
    }

    // ========================================================================
    // Ranges
    // ========================================================================

    pub fn range(&self, folder_id: &str, range_id: &str) -> Option<&Range> {
        self.folder(folder_id)?.range(range_id)
    }

    pub fn range_mut(&mut self, folder_id: &str, range_id: &str) -> StoreResult<&mut Range> {
        self.folder_mut(folder_id)?
            .range_mut(range_id)
            .ok_or_else(|| StoreError::UnknownRange(range_id.to_string()))
    }

    /// Look a range up by id across all folders.
    pub fn find_range(&self, range_id: &str) -> Option<&Range> {
        self.folders.iter().find_map(|folder| folder.range(range_id))
    }

    pub fn ranges(&self) -> impl Iterator<Item = (&Folder, &Range)> {
        self.folders
            .iter()
            .flat_map(|folder| folder.ranges.iter().map(move |range| (folder, range)))
    }

    /// Create an empty range in `folder_id` and return its id.
    pub fn create_range(&mut self, folder_id: &str, name: impl Into<String>) -> StoreResult<String> {
        let range = Range::new(name);
        let id = range.id.clone();
        self.folder_mut(folder_id)?.ranges.push(range);
        debug!(folder_id, range_id = %id, "range created");
        Ok(id)
    }

    pub fn rename_range(
        &mut self,
        folder_id: &str,
        range_id: &str,
        name: impl Into<String>,
    ) -> StoreResult<()> {
        self.range_mut(folder_id, range_id)?.name = name.into();
        Ok(())
    }

    pub fn delete_range(&mut self, folder_id: &str, range_id: &str) -> StoreResult<Range> {
        let folder = self.folder_mut(folder_id)?;
        let index = folder
            .ranges
            .iter()
            .position(|range| range.id == range_id)
            .ok_or_else(|| StoreError::UnknownRange(range_id.to_string()))?;
        debug!(folder_id, range_id, "range deleted");
        Ok(folder.ranges.remove(index))
    }

    pub fn clear_range(&mut self, folder_id: &str, range_id: &str) -> StoreResult<()> {
        self.range_mut(folder_id, range_id)?.clear();
        Ok(())
    }

    /// Apply a matrix mutation to one range. Returns whether it changed.
    pub fn apply_mutation(
        &mut self,
        folder_id: &str,
        range_id: &str,
        mutation: &HandMutation,
        active_action: &str,
    ) -> StoreResult<bool> {
        Ok(self.range_mut(folder_id, range_id)?.apply(mutation, active_action))
    }

    // ========================================================================
    // Action Buttons
    // ========================================================================

    pub fn action(&self, action_id: &str) -> Option<&ActionButton> {
        crate::action::find_action(action_id, &self.action_buttons)
    }

    /// Append `button`, rejecting it if the list would become invalid.
    pub fn add_action(&mut self, button: ActionButton) -> StoreResult<()> {
        let mut candidate = self.action_buttons.clone();
        candidate.push(button);
        validate_actions(&candidate)?;
        self.action_buttons = candidate;
        Ok(())
    }

    /// Replace the button with the same id.
    pub fn update_action(&mut self, button: ActionButton) -> StoreResult<()> {
        let index = self
            .action_buttons
            .iter()
            .position(|existing| existing.id() == button.id())
            .ok_or_else(|| StoreError::UnknownAction(button.id().to_string()))?;

        let mut candidate = self.action_buttons.clone();
        candidate[index] = button;
        validate_actions(&candidate)?;
        self.action_buttons = candidate;
        Ok(())
    }

    /// Remove an action and clear it from every range.
    ///
    /// Fails while a weighted action still blends it.
    pub fn remove_action(&mut self, action_id: &str) -> StoreResult<ActionButton> {
        let index = self
            .action_buttons
            .iter()
            .position(|button| button.id() == action_id)
            .ok_or_else(|| StoreError::UnknownAction(action_id.to_string()))?;

        if let Some(user) = self
            .action_buttons
            .iter()
            .find(|button| button.id() != action_id && button.refers_to(action_id))
        {
            return Err(StoreError::ActionInUse {
                id: action_id.to_string(),
                used_by: user.id().to_string(),
            });
        }

        let removed = self.action_buttons.remove(index);
        let mut cleared = 0;
        for folder in &mut self.folders {
            for range in &mut folder.ranges {
                let before = range.hands.len();
                range.hands.retain(|_, assigned| assigned != action_id);
                cleared += before - range.hands.len();
            }
        }
        debug!(action_id, cleared, "action removed");
        Ok(removed)
    }

    // ========================================================================
    // Persistence
    // ========================================================================

    /// Load a library from `path`. A missing file yields the default library.
    pub fn load_from(path: &Path) -> StoreResult<Self> {
        if !path.exists() {
            debug!(path = %path.display(), "no library file, using defaults");
            return Ok(Self::default());
        }

        let contents = std::fs::read_to_string(path)?;
        let library: Self = serde_json::from_str(&contents)?;
        if let Err(e) = validate_actions(&library.action_buttons) {
            warn!("Library {} has invalid actions: {}", path.display(), e);
        }
        info!(
            path = %path.display(),
            folders = library.folders.len(),
            actions = library.action_buttons.len(),
            "library loaded"
        );
        Ok(library)
    }

    /// Like [`load_from`](Self::load_from), falling back to defaults on any error.
    pub fn load_or_default(path: &Path) -> Self {
        Self::load_from(path).unwrap_or_else(|e| {
            warn!("Failed to load library {}: {}", path.display(), e);
            Self::default()
        })
    }

    /// Write the library to `path` atomically.
    pub fn save_to(&self, path: &Path) -> StoreResult<()> {
        write_json_atomic(path, self)?;
        debug!(path = %path.display(), "library saved");
        Ok(())
    }
}

/// Default location of the library file in the platform data dir.
pub fn default_library_path() -> Option<PathBuf> {
    dirs::data_dir().map(|dir| dir.join(APP_DIR_NAME).join(LIBRARY_FILE_NAME))
}
