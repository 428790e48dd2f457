//! Handler für Drawing- und Spieler-Bearbeitung.
//!
//! Alle Funktionen geben `true` zurück, wenn der Inhalt verändert wurde.
//! Unbekannte IDs werden gewarnt und ändern nichts.

use glam::DVec2;

use crate::app::EditorState;
use crate::core::{drawing_from_polyline, CanvasPx, Drawing, DrawingStyle, LinemanPosition, Player};

/// Fügt eine Drawing hinzu (IDs müssen eindeutig sein).
pub fn add_drawing(state: &mut EditorState, drawing: Drawing) -> bool {
    if state.has_drawing(&drawing.id) {
        log::warn!("Drawing {} existiert bereits, nicht hinzugefügt", drawing.id);
        return false;
    }
    let dangling = drawing.dangling_point_ids();
    if !dangling.is_empty() {
        log::warn!(
            "Drawing {} referenziert fehlende Punkte {:?}",
            drawing.id,
            dangling
        );
    }
    state.drawings_mut().push(drawing);
    true
}

/// Erzeugt eine Drawing aus einer Freihand-Polylinie und fügt sie hinzu.
pub fn add_drawing_from_polyline(
    state: &mut EditorState,
    id: String,
    points: &[DVec2],
    style: DrawingStyle,
) -> bool {
    match drawing_from_polyline(id.as_str(), points, style) {
        Some(drawing) => add_drawing(state, drawing),
        None => {
            log::debug!("Polylinie für {} zu kurz, keine Drawing erzeugt", id);
            false
        }
    }
}

/// Verschiebt einen Kontrollpunkt.
pub fn move_control_point(
    state: &mut EditorState,
    drawing_id: &str,
    point_id: &str,
    position: CanvasPx,
) -> bool {
    let has_point = state
        .drawing(drawing_id)
        .is_some_and(|d| d.point(point_id).is_some());
    if !has_point {
        log::warn!("Punkt {}/{} nicht gefunden", drawing_id, point_id);
        return false;
    }
    state
        .drawing_mut(drawing_id)
        .is_some_and(|d| d.move_point(point_id, position.0))
}

/// Setzt die Handle-Offsets eines Kontrollpunkts.
pub fn set_point_handles(
    state: &mut EditorState,
    drawing_id: &str,
    point_id: &str,
    handle_in: Option<DVec2>,
    handle_out: Option<DVec2>,
) -> bool {
    let has_point = state
        .drawing(drawing_id)
        .is_some_and(|d| d.point(point_id).is_some());
    if !has_point {
        log::warn!("Punkt {}/{} nicht gefunden", drawing_id, point_id);
        return false;
    }
    state
        .drawing_mut(drawing_id)
        .is_some_and(|d| d.set_handles(point_id, handle_in, handle_out))
}

/// Entfernt einen Kontrollpunkt samt referenzierender Segmente.
pub fn remove_control_point(state: &mut EditorState, drawing_id: &str, point_id: &str) -> bool {
    let has_point = state
        .drawing(drawing_id)
        .is_some_and(|d| d.point(point_id).is_some());
    if !has_point {
        log::warn!("Punkt {}/{} nicht gefunden", drawing_id, point_id);
        return false;
    }
    state
        .drawing_mut(drawing_id)
        .and_then(|d| d.remove_point(point_id))
        .is_some()
}

/// Verschiebt eine ganze Drawing.
pub fn translate_drawing(state: &mut EditorState, drawing_id: &str, delta: DVec2) -> bool {
    match state.drawing_mut(drawing_id) {
        Some(drawing) => {
            drawing.translate(delta);
            true
        }
        None => {
            log::warn!("Drawing {} nicht gefunden", drawing_id);
            false
        }
    }
}

/// Löscht eine Drawing.
pub fn delete_drawing(state: &mut EditorState, drawing_id: &str) -> bool {
    if !state.has_drawing(drawing_id) {
        log::warn!("Drawing {} nicht gefunden", drawing_id);
        return false;
    }
    state.drawings_mut().retain(|d| d.id != drawing_id);
    true
}

/// Fügt einen Spieler hinzu (IDs müssen eindeutig sein).
pub fn add_player(state: &mut EditorState, player: Player) -> bool {
    if state.players.iter().any(|p| p.id == player.id) {
        log::warn!("Spieler {} existiert bereits, nicht hinzugefügt", player.id);
        return false;
    }
    state.players_mut().push(player);
    true
}

/// Verschiebt einen Spieler. Drawings, die mit `linked_point_id` an ihm
/// verankert sind, ziehen den verankerten Punkt mit.
pub fn move_player(state: &mut EditorState, player_id: &str, position: CanvasPx) -> bool {
    match state.player_mut(player_id) {
        Some(player) => player.set_position(position.0),
        None => {
            log::warn!("Spieler {} nicht gefunden", player_id);
            return false;
        }
    }

    let anchored: Vec<(String, String)> = state
        .drawings
        .iter()
        .filter(|d| d.player_id.as_deref() == Some(player_id))
        .filter_map(|d| Some((d.id.clone(), d.linked_point_id.clone()?)))
        .collect();
    for (drawing_id, point_id) in anchored {
        if let Some(drawing) = state.drawing_mut(&drawing_id) {
            drawing.move_point(&point_id, position.0);
        }
    }
    true
}

/// Fügt einen Lineman hinzu (IDs müssen eindeutig sein).
pub fn add_lineman(state: &mut EditorState, lineman: LinemanPosition) -> bool {
    if state.lineman_positions.iter().any(|l| l.id == lineman.id) {
        log::warn!("Lineman {} existiert bereits, nicht hinzugefügt", lineman.id);
        return false;
    }
    state.lineman_positions_mut().push(lineman);
    true
}

/// Verschiebt einen Lineman.
pub fn move_lineman(state: &mut EditorState, lineman_id: &str, position: CanvasPx) -> bool {
    match state.lineman_mut(lineman_id) {
        Some(lineman) => {
            lineman.set_position(position.0);
            true
        }
        None => {
            log::warn!("Lineman {} nicht gefunden", lineman_id);
            false
        }
    }
}

/// Leert den Canvas. Zählt als Bearbeitung, sofern es etwas zu leeren gab.
pub fn clear_canvas(state: &mut EditorState) -> bool {
    if state.is_canvas_empty() {
        log::debug!("Canvas ist bereits leer");
        return false;
    }
    state.clear_canvas();
    log::info!("Canvas geleert");
    true
}
