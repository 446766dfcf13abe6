//! The dispatch surface: every edit the builder UI can request.

use bevy::prelude::*;
use serde_json::{Map, Value};

use crate::theme::{PageId, SectionData, SectionId, ThemeData};

/// One dispatched edit. Actions are applied atomically, in dispatch
/// order, by a single reducer system; invalid targets are silent no-ops.
#[derive(Message, Debug, Clone)]
pub enum BuilderAction {
    /// Open a theme for editing. The first page becomes active.
    SelectTheme(ThemeData),
    /// Switch the active page within the current theme.
    SelectPage(PageId),
    /// Append a section to the active page's body.
    AddSection(SectionData),
    /// Replace the `data` of the section with the given id on the active page.
    UpdateSection {
        id: SectionId,
        data: Map<String, Value>,
    },
    /// Remove the section with the given id from the active page.
    DeleteSection(SectionId),
    /// Replace the active page's body wholesale. The caller is
    /// responsible for producing a valid permutation.
    ReorderSections(Vec<SectionData>),
    /// Change which section is open in the editor panel. Never an undo step.
    SelectSection(Option<SectionId>),
    Undo,
    Redo,
}
