//! Theme persistence system for saving and loading themes.
//!
//! Handles async file I/O for theme data, including:
//! - Save/load with async task pooling
//! - Unknown section type validation on load
//! - Dirty state tracking against the last saved revision
//!
//! ## Module Structure
//!
//! - [`messages`] - Message types for theme operations
//! - [`resources`] - Resource types for state tracking
//! - [`results`] - Result types for async operations
//! - [`helpers`] - Directory creation utilities
//! - [`save`] - Save system and task polling
//! - [`load`] - Load system and task polling
//! - [`theme_state`] - New theme system and theme installation
//! - [`dirty`] - Dirty state detection system
//!
//! ## Key Types
//!
//! - [`ThemeDirtyState`] - Tracks unsaved changes
//! - [`AsyncThemeOperation`] - Tracks async I/O state
//! - [`CurrentThemeFile`] - Path of the file backing the open theme
//!
//! ## Systems
//!
//! - [`save_theme_system`] - Starts async save operation
//! - [`poll_save_tasks`] - Polls save task completion
//! - [`load_theme_system`] - Starts async load operation
//! - [`poll_load_tasks`] - Polls load task completion
//! - [`new_theme_system`] - Resets the builder to a starter theme

mod dirty;
mod helpers;
mod load;
mod messages;
mod resources;
mod results;
mod save;
mod theme_state;

// Re-exports - Messages
pub use messages::{LoadThemeRequest, NewThemeRequest, SaveThemeRequest};

// Re-exports - Resources
pub use resources::{
    AsyncThemeOperation, CurrentThemeFile, LoadValidationWarning, ThemeDirtyState, ThemeLoadError,
    ThemeSaveError, UnsavedChangesDialog,
};

// Re-exports - Helpers
pub use helpers::ensure_themes_directory;

// Re-exports - Systems
pub use dirty::update_dirty_state;
pub use load::{load_theme_system, poll_load_tasks};
pub use save::{poll_save_tasks, save_theme_system};
pub use theme_state::new_theme_system;
