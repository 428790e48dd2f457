//! Builder für SVG-Szenen und Übergänge aus dem EditorState.

use super::transition::{plan_card_transition, CardTransition};
use crate::app::EditorState;
use crate::render::{
    capture_canvas_snapshot, compile_canvas_scene, compile_scene, CanvasContainer, SceneViewport,
};

/// Baut die Editor-Szene (Canvas-Pixel, Zoom/Pan als Gruppen-Transform).
pub fn build_canvas(state: &EditorState) -> String {
    compile_canvas_scene(
        &state.drawings,
        &state.players,
        &state.lineman_positions,
        &state.view,
        &state.options,
    )
}

/// Baut die Karten-Vorschau im konfigurierten Vorschau-Viewport.
pub fn build_preview(state: &EditorState) -> String {
    compile_scene(
        &state.drawings,
        &state.players,
        &state.lineman_positions,
        &SceneViewport::preview(&state.options),
        &state.options,
    )
}

/// Plant den Übergang von der Karte `play_id` zum Canvas.
///
/// Der Snapshot wird aus der aktuellen Editor-Szene im gemessenen
/// Canvas-Rechteck erzeugt. Ohne Canvas-Rechteck oder Karte: `None`.
pub fn build_card_transition(state: &EditorState, play_id: &str) -> Option<CardTransition> {
    let container = state
        .canvas_bounds
        .map(|bounds| CanvasContainer::new(build_canvas(state), bounds));
    let snapshot = capture_canvas_snapshot(container.as_ref());
    plan_card_transition(&state.cards, play_id, state.canvas_bounds, snapshot)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Player, ScreenRect};
    use glam::DVec2;

    #[test]
    fn transition_needs_canvas_bounds_and_card() {
        let mut state = EditorState::new();
        state
            .players_mut()
            .push(Player::new("qb", DVec2::new(400.0, 300.0)));
        state
            .cards
            .register("play-1", ScreenRect::new(20.0, 20.0, 200.0, 150.0));

        assert!(build_card_transition(&state, "play-1").is_none());

        state.canvas_bounds = Some(ScreenRect::new(0.0, 0.0, 800.0, 600.0));
        let plan = build_card_transition(&state, "play-1").expect("Übergang");

        assert_eq!(plan.snapshot.width, 800.0);
        let svg = plan.snapshot.svg_markup().expect("SVG");
        assert!(svg.contains("data-player-id=\"qb\""));
        assert!(build_card_transition(&state, "play-2").is_none());
    }

    #[test]
    fn preview_fits_scene_into_viewport() {
        let mut state = EditorState::new();
        state
            .players_mut()
            .push(Player::new("qb", DVec2::new(400.0, 300.0)));
        let svg = build_preview(&state);
        assert!(svg.contains("width=\"200.00\" height=\"120.00\""));
        assert!(svg.contains("<circle"));
    }
}
