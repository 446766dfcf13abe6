//! Result types for async theme operations.

use std::path::PathBuf;

use crate::theme::SavedTheme;

/// Result of an async save operation
pub struct SaveResult {
    pub path: PathBuf,
    /// Edit-history revision captured when the save started
    pub revision: u64,
    pub success: bool,
    pub error: Option<String>,
}

/// Result of an async load operation
pub struct LoadResult {
    pub path: PathBuf,
    pub saved_theme: Option<SavedTheme>,
    pub error: Option<String>,
}
