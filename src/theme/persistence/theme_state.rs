//! Theme state management: installing themes and creating new ones.

use bevy::prelude::*;

use crate::builder::{BuilderSnapshot, EditHistory};
use crate::theme::{SectionIdAllocator, ThemeData};

use super::messages::NewThemeRequest;
use super::resources::{CurrentThemeFile, ThemeDirtyState};

/// Install a theme as the edit baseline: seed the id allocator past its
/// section ids, reset the history floor, and mark the state clean.
pub(super) fn install_theme(
    theme: ThemeData,
    history: &mut EditHistory,
    allocator: &mut SectionIdAllocator,
    dirty_state: &mut ThemeDirtyState,
) {
    allocator.seed_from(&theme);
    history.reset_baseline(BuilderSnapshot::open_theme(theme));
    dirty_state.last_saved_revision = history.revision();
    dirty_state.is_dirty = false;
}

pub fn new_theme_system(
    mut events: MessageReader<NewThemeRequest>,
    mut history: ResMut<EditHistory>,
    mut allocator: ResMut<SectionIdAllocator>,
    mut current_theme_file: ResMut<CurrentThemeFile>,
    mut dirty_state: ResMut<ThemeDirtyState>,
) {
    for _ in events.read() {
        install_theme(
            ThemeData::starter(),
            &mut history,
            &mut allocator,
            &mut dirty_state,
        );

        // New theme has no file yet
        current_theme_file.path = None;

        info!("Created new theme");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builder::BuilderAction;
    use crate::theme::{SectionData, SectionId};
    use serde_json::Map;

    #[test]
    fn test_install_theme_resets_floor_and_clean_state() {
        let mut history = EditHistory::default();
        let mut allocator = SectionIdAllocator::default();
        let mut dirty = ThemeDirtyState {
            is_dirty: true,
            last_saved_revision: 0,
        };

        install_theme(
            ThemeData::starter(),
            &mut history,
            &mut allocator,
            &mut dirty,
        );

        assert!(!history.can_undo());
        assert!(!dirty.is_dirty);
        assert_eq!(dirty.last_saved_revision, history.revision());
        assert!(history.present().theme.is_some());
    }

    #[test]
    fn test_install_theme_seeds_allocator() {
        let mut theme = ThemeData::starter();
        theme.pages[0].body.push(SectionData {
            id: SectionId(12),
            section_type: "hero".to_string(),
            name: "hero".to_string(),
            data: Map::new(),
        });

        let mut history = EditHistory::default();
        let mut allocator = SectionIdAllocator::default();
        let mut dirty = ThemeDirtyState::default();
        install_theme(theme, &mut history, &mut allocator, &mut dirty);

        assert_eq!(allocator.allocate(), SectionId(13));
    }

    #[test]
    fn test_edit_after_install_is_dirty_revision() {
        let mut history = EditHistory::default();
        let mut allocator = SectionIdAllocator::default();
        let mut dirty = ThemeDirtyState::default();
        install_theme(
            ThemeData::starter(),
            &mut history,
            &mut allocator,
            &mut dirty,
        );

        crate::builder::apply_action(
            &mut history,
            BuilderAction::AddSection(SectionData {
                id: allocator.allocate(),
                section_type: "hero".to_string(),
                name: "hero".to_string(),
                data: Map::new(),
            }),
        );

        assert_ne!(history.revision(), dirty.last_saved_revision);
    }
}
