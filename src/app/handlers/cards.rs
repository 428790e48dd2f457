//! Handler für Karten-Registry und Canvas-Rechteck.

use crate::app::EditorState;
use crate::core::ScreenRect;

/// Registriert oder aktualisiert das Rechteck einer Play-Karte.
pub fn register_card(state: &mut EditorState, play_id: String, rect: ScreenRect) {
    state.cards.register(play_id, rect);
}

/// Meldet eine Play-Karte ab.
pub fn unregister_card(state: &mut EditorState, play_id: &str) {
    if state.cards.unregister(play_id).is_none() {
        log::debug!("Karte {} war nicht registriert", play_id);
    }
}

/// Setzt das Bildschirm-Rechteck des Canvas-Containers.
pub fn set_canvas_bounds(state: &mut EditorState, rect: ScreenRect) {
    state.canvas_bounds = Some(rect);
}
