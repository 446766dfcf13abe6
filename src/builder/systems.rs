//! Bevy systems for action dispatch and undo/redo keyboard shortcuts.

use bevy::prelude::*;
use bevy_egui::EguiContexts;

use super::actions::BuilderAction;
use super::history::EditHistory;
use super::reducer::apply_action;

/// The single writer: drains dispatched actions and applies them in
/// order through the reducer. All edits are serialized through this
/// system, so no two dispatches can interleave.
pub fn apply_builder_actions(
    mut actions: MessageReader<BuilderAction>,
    mut history: ResMut<EditHistory>,
) {
    for action in actions.read() {
        apply_action(&mut history, action.clone());
    }
}

/// Handles Ctrl+Z (undo) and Ctrl+Y / Ctrl+Shift+Z (redo).
pub fn handle_history_shortcuts(
    keyboard: Res<ButtonInput<KeyCode>>,
    mut actions: MessageWriter<BuilderAction>,
    mut contexts: EguiContexts,
) {
    // Don't steal shortcuts while typing in a text field
    if let Ok(ctx) = contexts.ctx_mut()
        && ctx.wants_keyboard_input()
    {
        return;
    }

    let ctrl = keyboard.pressed(KeyCode::ControlLeft) || keyboard.pressed(KeyCode::ControlRight);
    let shift = keyboard.pressed(KeyCode::ShiftLeft) || keyboard.pressed(KeyCode::ShiftRight);

    if ctrl && !shift && keyboard.just_pressed(KeyCode::KeyZ) {
        actions.write(BuilderAction::Undo);
    }

    let redo_pressed = (ctrl && keyboard.just_pressed(KeyCode::KeyY))
        || (ctrl && shift && keyboard.just_pressed(KeyCode::KeyZ));
    if redo_pressed {
        actions.write(BuilderAction::Redo);
    }
}
