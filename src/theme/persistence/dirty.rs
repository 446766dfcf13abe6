//! Dirty state detection for tracking unsaved edits.

use bevy::prelude::*;

use crate::builder::EditHistory;

use super::resources::ThemeDirtyState;

/// Keeps the dirty flag in sync with the edit-history revision. Runs
/// every frame; the comparison is two integers.
pub fn update_dirty_state(history: Res<EditHistory>, mut dirty_state: ResMut<ThemeDirtyState>) {
    let is_dirty = history.revision() != dirty_state.last_saved_revision;
    if dirty_state.is_dirty != is_dirty {
        dirty_state.is_dirty = is_dirty;
    }
}
