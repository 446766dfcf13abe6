mod placeholder;
mod registry;
mod renderers;
mod resolve;

pub use placeholder::render_placeholder;
pub use registry::{SectionDefinition, SectionRegistry, SectionRenderer};
pub use resolve::{ResolutionState, ResolvedSections};

use bevy::prelude::*;

use crate::builder::EditHistory;

pub struct SectionLibraryPlugin;

impl Plugin for SectionLibraryPlugin {
    fn build(&self, app: &mut App) {
        app.insert_resource(SectionRegistry::builtin())
            .init_resource::<ResolvedSections>()
            .init_resource::<ResolutionState>()
            .add_systems(
                Update,
                (
                    resolve::kick_resolution.run_if(resource_changed::<EditHistory>),
                    resolve::poll_resolution_tasks,
                ),
            );
    }
}
