//! The theme builder's edit-history store.
//!
//! This module owns the single source of truth for the theme tree being
//! edited and the linear undo/redo history over it. UI panels never touch
//! the tree directly: they dispatch [`BuilderAction`] messages, which a
//! single reducer system applies in order.
//!
//! ## Usage
//!
//! - **Ctrl+Z**: Undo the last edit
//! - **Ctrl+Y** or **Ctrl+Shift+Z**: Redo the last undone edit
//!
//! ## Module Structure
//!
//! - [`actions`] - BuilderAction enum defining the dispatch surface
//! - [`snapshot`] - BuilderSnapshot, the unit of history
//! - [`history`] - EditHistory resource (past/present/future)
//! - [`reducer`] - action application and no-op policies
//! - [`systems`] - dispatch drain and keyboard shortcuts

mod actions;
mod history;
mod reducer;
mod snapshot;
mod systems;

#[cfg(test)]
mod tests;

// Re-exports
pub use actions::BuilderAction;
pub use history::EditHistory;
pub use reducer::apply_action;
pub use snapshot::BuilderSnapshot;

use bevy::prelude::*;

/// Maximum number of snapshots to keep in the undo stack
pub(crate) const MAX_HISTORY_SIZE: usize = 100;

pub struct BuilderPlugin;

impl Plugin for BuilderPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<EditHistory>()
            .add_message::<BuilderAction>()
            .add_systems(
                Update,
                (
                    systems::handle_history_shortcuts.run_if(crate::ui::no_dialog_open),
                    systems::apply_builder_actions,
                )
                    .chain(),
            );
    }
}
