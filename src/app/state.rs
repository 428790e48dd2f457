//! Editor State: zentrale Datenhaltung.

use std::sync::Arc;

use anyhow::Context;

use super::card_registry::CardRegistry;
use super::history::{EditHistory, HistorySnapshot};
use crate::core::{
    compute_scene_bounds, path_length, BoundingBox, CanvasView, ControlPointIndex, Drawing,
    FieldGeometry, LinemanPosition, Player, PointMatch, ScreenPx, ScreenRect,
};
use crate::shared::EditorOptions;

/// Hauptzustand des Editors.
///
/// Inhalte liegen in `Arc<Vec<_>>`: Snapshots teilen sie per Ref-Count,
/// Mutationen gehen über die `*_mut`-Zugriffe (`Arc::make_mut`).
#[derive(Debug, Clone)]
pub struct EditorState {
    /// Name des geladenen Plays
    pub play_name: Option<String>,
    /// Drawings in Zeichenreihenfolge
    pub drawings: Arc<Vec<Drawing>>,
    /// Spieler-Tokens
    pub players: Arc<Vec<Player>>,
    /// Lineman-Positionen
    pub lineman_positions: Arc<Vec<LinemanPosition>>,
    /// Zoom/Pan des Canvas
    pub view: CanvasView,
    /// Canvas- und Feldabmessungen
    pub geometry: FieldGeometry,
    /// Undo/Redo-Historie
    pub history: EditHistory,
    /// Bildschirm-Rechtecke der Play-Karten
    pub cards: CardRegistry,
    /// Bildschirm-Rechteck des Canvas-Containers (sofern gemessen)
    pub canvas_bounds: Option<ScreenRect>,
    /// Laufzeit-Optionen
    pub options: EditorOptions,
}

impl EditorState {
    /// Erstellt einen leeren State mit Standard-Optionen.
    pub fn new() -> Self {
        let options = EditorOptions::default();
        Self {
            play_name: None,
            drawings: Arc::new(Vec::new()),
            players: Arc::new(Vec::new()),
            lineman_positions: Arc::new(Vec::new()),
            view: CanvasView::new(),
            geometry: FieldGeometry::default(),
            history: EditHistory::new_with_capacity(options.history_max_depth),
            cards: CardRegistry::new(),
            canvas_bounds: None,
            options,
        }
    }

    /// Erstellt einen leeren State aus validierten Optionen.
    pub fn from_options(options: EditorOptions) -> anyhow::Result<Self> {
        let geometry = options
            .field_geometry()
            .context("Ungültige Canvas-/Feldabmessungen in den Optionen")?;
        let view = options
            .canvas_view()
            .context("Ungültige Zoom-Grenzen in den Optionen")?;
        Ok(Self {
            history: EditHistory::new_with_capacity(options.history_max_depth),
            geometry,
            view,
            options,
            ..Self::new()
        })
    }

    /// Drawings (read-only).
    pub fn drawings(&self) -> &[Drawing] {
        &self.drawings
    }

    /// Spieler (read-only).
    pub fn players(&self) -> &[Player] {
        &self.players
    }

    /// Veränderbarer Zugriff auf die Drawings (Copy-on-Write).
    pub fn drawings_mut(&mut self) -> &mut Vec<Drawing> {
        Arc::make_mut(&mut self.drawings)
    }

    /// Veränderbarer Zugriff auf die Spieler (Copy-on-Write).
    pub fn players_mut(&mut self) -> &mut Vec<Player> {
        Arc::make_mut(&mut self.players)
    }

    /// Veränderbarer Zugriff auf die Lineman-Positionen (Copy-on-Write).
    pub fn lineman_positions_mut(&mut self) -> &mut Vec<LinemanPosition> {
        Arc::make_mut(&mut self.lineman_positions)
    }

    /// Drawing per ID.
    pub fn drawing(&self, id: &str) -> Option<&Drawing> {
        self.drawings.iter().find(|d| d.id == id)
    }

    /// Prüft ob eine Drawing mit der ID existiert.
    pub fn has_drawing(&self, id: &str) -> bool {
        self.drawing(id).is_some()
    }

    /// Veränderbare Drawing per ID.
    ///
    /// Löst Copy-on-Write nur aus, wenn die Drawing existiert.
    pub fn drawing_mut(&mut self, id: &str) -> Option<&mut Drawing> {
        if !self.has_drawing(id) {
            return None;
        }
        self.drawings_mut().iter_mut().find(|d| d.id == id)
    }

    /// Veränderbarer Spieler per ID.
    pub fn player_mut(&mut self, id: &str) -> Option<&mut Player> {
        if !self.players.iter().any(|p| p.id == id) {
            return None;
        }
        self.players_mut().iter_mut().find(|p| p.id == id)
    }

    /// Veränderbare Lineman-Position per ID.
    pub fn lineman_mut(&mut self, id: &str) -> Option<&mut LinemanPosition> {
        if !self.lineman_positions.iter().any(|l| l.id == id) {
            return None;
        }
        self.lineman_positions_mut().iter_mut().find(|l| l.id == id)
    }

    /// `true` wenn weder Drawings noch Spieler noch Linemen vorhanden sind.
    pub fn is_canvas_empty(&self) -> bool {
        self.drawings.is_empty() && self.players.is_empty() && self.lineman_positions.is_empty()
    }

    /// Leert den Canvas-Inhalt (Drawings, Spieler, Lineman).
    pub fn clear_canvas(&mut self) {
        self.drawings = Arc::new(Vec::new());
        self.players = Arc::new(Vec::new());
        self.lineman_positions = Arc::new(Vec::new());
    }

    /// Erstellt einen O(1)-Snapshot des aktuellen Inhalts.
    pub fn snapshot(&self) -> HistorySnapshot {
        HistorySnapshot::from_state(self)
    }

    /// Legt den aktuellen Inhalt als neuen History-Eintrag ab.
    /// Wird nach jeder Mutation aufgerufen.
    pub fn commit_snapshot(&mut self) {
        let snapshot = self.snapshot();
        self.history.commit(snapshot);
    }

    /// Undo/Redo helpers
    pub fn can_undo(&self) -> bool {
        self.history.can_undo()
    }

    /// Gibt zurück, ob ein Redo-Schritt verfügbar ist.
    pub fn can_redo(&self) -> bool {
        self.history.can_redo()
    }

    /// Bounding-Box von Drawings, Spielern und Linemen.
    pub fn scene_bounds(&self) -> Option<BoundingBox> {
        compute_scene_bounds(&self.drawings, &self.players, &self.lineman_positions)
    }

    /// Routenlänge einer Drawing in Feet (Bézier-Segmente approximiert).
    pub fn drawing_length_feet(&self, id: &str) -> Option<f64> {
        self.drawing(id)
            .map(|drawing| self.geometry.pixels_to_feet_distance(path_length(drawing)))
    }

    /// Kontrollpunkt unter dem Pointer, sofern innerhalb des Pick-Radius.
    ///
    /// Der Radius ist in Screen-Pixeln konfiguriert und wird in den
    /// Canvas-Raum umgerechnet.
    pub fn pick_control_point(&self, screen: ScreenPx) -> Option<PointMatch> {
        let canvas = self.view.screen_to_canvas(screen);
        let tolerance = self.options.pick_radius_px / self.view.zoom();
        ControlPointIndex::from_drawings(&self.drawings).pick(canvas.0, tolerance)
    }
}

impl Default for EditorState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{ControlPoint, DrawingStyle, PathSegment, PointType};
    use glam::DVec2;

    fn state_with_point() -> EditorState {
        let mut state = EditorState::new();
        let mut drawing = Drawing::new("route", DrawingStyle::default());
        drawing.insert_point(ControlPoint::new("a", DVec2::new(100.0, 100.0), PointType::Start));
        state.drawings_mut().push(drawing);
        state
    }

    #[test]
    fn from_options_rejects_invalid_geometry() {
        let options = EditorOptions {
            field_width_feet: 0.0,
            ..EditorOptions::default()
        };
        assert!(EditorState::from_options(options).is_err());
    }

    #[test]
    fn pick_accounts_for_zoom_and_pan() {
        let mut state = state_with_point();
        state.view.set_zoom(2.0).expect("gültiger Zoom");
        state.view.set_pan(DVec2::new(50.0, 0.0));

        // Canvas (100,100) liegt auf Screen (250,200)
        let hit = state.pick_control_point(ScreenPx::new(255.0, 200.0));
        assert_eq!(hit.map(|m| m.key.point_id), Some("a".to_string()));

        assert!(state.pick_control_point(ScreenPx::new(100.0, 100.0)).is_none());
    }

    #[test]
    fn route_length_is_reported_in_feet() {
        let mut state = state_with_point();
        if let Some(drawing) = state.drawing_mut("route") {
            drawing.insert_point(ControlPoint::new("b", DVec2::new(100.0, 200.0), PointType::End));
            drawing.push_segment(PathSegment::line("a", "b"));
        }

        // Standard: 800 px / 160 ft = 5 px pro Foot
        let length = state.drawing_length_feet("route").expect("Drawing vorhanden");
        assert!((length - 20.0).abs() < 1e-9);
        assert!(state.drawing_length_feet("fehlt").is_none());
    }

    #[test]
    fn empty_canvas_is_detected() {
        let mut state = EditorState::new();
        assert!(state.is_canvas_empty());

        state
            .lineman_positions_mut()
            .push(LinemanPosition::new("c", DVec2::new(400.0, 320.0)));
        assert!(!state.is_canvas_empty());
        assert!(state.lineman_mut("c").is_some());
        assert!(state.lineman_mut("lg").is_none());
    }

    #[test]
    fn snapshot_is_isolated_from_live_edits() {
        let mut state = state_with_point();
        let snapshot = state.snapshot();

        if let Some(drawing) = state.drawing_mut("route") {
            drawing.move_point("a", DVec2::new(1.0, 1.0));
        }

        let original = snapshot.drawings[0].point("a").map(|p| p.position());
        assert_eq!(original, Some(DVec2::new(100.0, 100.0)));
    }
}
