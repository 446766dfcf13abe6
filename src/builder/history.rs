//! Edit history resource: bounded, linear, snapshot-based undo/redo.

use bevy::prelude::*;

use super::snapshot::BuilderSnapshot;
use super::MAX_HISTORY_SIZE;

/// The past/present/future triple backing undo/redo.
///
/// `past` and `future` hold full snapshots (most recent last). Installing
/// a theme via [`reset_baseline`](EditHistory::reset_baseline) clears both
/// stacks, so the loaded state is an explicit floor that undo can never
/// cross. Selection-only changes mutate `present` in place and are
/// invisible to the history.
#[derive(Resource, Default)]
pub struct EditHistory {
    past: Vec<BuilderSnapshot>,
    present: BuilderSnapshot,
    future: Vec<BuilderSnapshot>,
    /// Bumped by every undoable edit, undo, and redo. Dirty tracking
    /// compares this against the revision recorded at the last save.
    revision: u64,
}

impl EditHistory {
    pub fn present(&self) -> &BuilderSnapshot {
        &self.present
    }

    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Install a snapshot as the new baseline. Both stacks are cleared:
    /// a freshly loaded or created theme starts with no undoable past.
    pub fn reset_baseline(&mut self, snapshot: BuilderSnapshot) {
        self.past.clear();
        self.future.clear();
        self.present = snapshot;
        self.revision += 1;
    }

    /// Record an edit: the old present moves into the past, the redo
    /// stack is invalidated, and the past is trimmed to the bound.
    pub fn push(&mut self, snapshot: BuilderSnapshot) {
        self.future.clear();
        self.past.push(std::mem::replace(&mut self.present, snapshot));

        while self.past.len() > MAX_HISTORY_SIZE {
            self.past.remove(0);
        }
        self.revision += 1;
    }

    /// Change the selection without creating an undo step.
    pub fn set_selected_section(&mut self, id: Option<crate::theme::SectionId>) {
        self.present.selected_section = id;
    }

    /// Promote the most recent past snapshot to present, clearing its
    /// selection. Returns false (and leaves the state alone) when there
    /// is nothing to undo.
    pub fn undo(&mut self) -> bool {
        let Some(mut previous) = self.past.pop() else {
            return false;
        };
        previous.selected_section = None;
        self.future.push(std::mem::replace(&mut self.present, previous));
        self.revision += 1;
        true
    }

    /// Promote the next future snapshot to present, clearing its
    /// selection. Returns false when there is nothing to redo.
    pub fn redo(&mut self) -> bool {
        let Some(mut next) = self.future.pop() else {
            return false;
        };
        next.selected_section = None;
        self.past.push(std::mem::replace(&mut self.present, next));
        self.revision += 1;
        true
    }

    pub fn can_undo(&self) -> bool {
        !self.past.is_empty()
    }

    pub fn can_redo(&self) -> bool {
        !self.future.is_empty()
    }

    pub fn undo_count(&self) -> usize {
        self.past.len()
    }

    pub fn redo_count(&self) -> usize {
        self.future.len()
    }
}
