//! Helper functions for theme persistence.

use bevy::prelude::*;

pub fn ensure_themes_directory() {
    let themes_dir = crate::paths::themes_dir();
    if !themes_dir.exists()
        && let Err(e) = std::fs::create_dir_all(&themes_dir)
    {
        warn!("Failed to create themes directory: {}", e);
    }
}
