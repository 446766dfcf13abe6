//! Applies dispatched actions to the edit history.
//!
//! Invalid-target edits (missing section id, no page selected, stale page
//! id) are silent no-ops so the editor stays resilient to UI races such
//! as a delete-then-edit double dispatch.

use bevy::prelude::*;

use super::actions::BuilderAction;
use super::history::EditHistory;
use super::snapshot::BuilderSnapshot;

/// Apply one action. Undoable edits push a history entry; selection and
/// history navigation do not.
pub fn apply_action(history: &mut EditHistory, action: BuilderAction) {
    match action {
        BuilderAction::Undo => {
            if !history.undo() {
                debug!("Undo ignored: nothing to undo");
            }
        }
        BuilderAction::Redo => {
            if !history.redo() {
                debug!("Redo ignored: nothing to redo");
            }
        }
        BuilderAction::SelectSection(id) => {
            history.set_selected_section(id);
        }
        edit => {
            if let Some(next) = apply_edit(history.present(), &edit) {
                history.push(next);
            }
        }
    }
}

/// Compute the snapshot an undoable edit produces, or `None` for a no-op.
fn apply_edit(present: &BuilderSnapshot, action: &BuilderAction) -> Option<BuilderSnapshot> {
    match action {
        BuilderAction::SelectTheme(theme) => Some(BuilderSnapshot::open_theme(theme.clone())),

        BuilderAction::SelectPage(page_id) => {
            let theme = present.theme.as_ref()?;
            // Stale page ids fall back to the first page rather than
            // leaving no page selected.
            let target = match theme.page(*page_id) {
                Some(page) => page,
                None => {
                    warn!(
                        "Page {:?} not found in theme '{}', falling back to first page",
                        page_id, theme.name
                    );
                    theme.first_page()?
                }
            };
            if present.page_id == Some(target.id) {
                return None;
            }
            Some(BuilderSnapshot {
                theme: Some(theme.clone()),
                page_id: Some(target.id),
                // The old selection belonged to the old page.
                selected_section: None,
                available_sections: target.available_sections.clone(),
            })
        }

        BuilderAction::AddSection(section) => {
            present.page()?;
            let mut next = present.clone();
            next.page_mut()?.body.push(section.clone());
            Some(next)
        }

        BuilderAction::UpdateSection { id, data } => {
            let page = present.page()?;
            page.section(*id)?;
            let mut next = present.clone();
            let target = next.page_mut()?.body.iter_mut().find(|s| s.id == *id)?;
            target.data = data.clone();
            Some(next)
        }

        BuilderAction::DeleteSection(id) => {
            let page = present.page()?;
            page.section(*id)?;
            let mut next = present.clone();
            next.page_mut()?.body.retain(|s| s.id != *id);
            if next.selected_section == Some(*id) {
                next.selected_section = None;
            }
            Some(next)
        }

        BuilderAction::ReorderSections(body) => {
            present.page()?;
            let mut next = present.clone();
            next.page_mut()?.body = body.clone();
            Some(next)
        }

        // Handled in apply_action.
        BuilderAction::SelectSection(_) | BuilderAction::Undo | BuilderAction::Redo => None,
    }
}
