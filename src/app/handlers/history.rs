//! Handler für Undo/Redo-Operationen.

use crate::app::history::UndoOutcome;
use crate::app::EditorState;

/// Führt einen Undo-Schritt aus.
///
/// Vor dem ersten Eintrag wird der Canvas geleert.
pub fn undo(state: &mut EditorState) {
    match state.history.undo() {
        UndoOutcome::Restore(snapshot) => {
            snapshot.apply_to(state);
            log::info!("Undo ausgeführt");
        }
        UndoOutcome::Clear => {
            state.clear_canvas();
            log::info!("Undo: Canvas geleert");
        }
    }
}

/// Führt einen Redo-Schritt aus, falls vorhanden.
pub fn redo(state: &mut EditorState) {
    if let Some(next) = state.history.redo() {
        next.apply_to(state);
        log::info!("Redo ausgeführt");
    } else {
        log::debug!("Redo: nichts zu tun");
    }
}
