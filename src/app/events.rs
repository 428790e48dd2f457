//! Commands: mutierende Schritte, die zentral vom Controller ausgeführt werden.

use glam::DVec2;

use crate::core::{
    CanvasPx, Drawing, DrawingStyle, LinemanPosition, Player, ScreenDelta, ScreenPx, ScreenRect,
};
use crate::io::PlayFile;

/// Commands sind mutierende Schritte, die zentral ausgeführt werden.
#[derive(Debug, Clone)]
pub enum AppCommand {
    // === Plays ===
    /// Play in den Editor laden (ersetzt Inhalt und Historie)
    LoadPlay { play: PlayFile },
    /// Play-Datei von der Platte laden
    LoadPlayFile { path: String },
    /// Aktuellen Inhalt als Play-Datei speichern
    SavePlayFile { path: String },

    // === Drawings ===
    /// Fertige Drawing hinzufügen
    AddDrawing { drawing: Drawing },
    /// Drawing aus einer Freihand-Polylinie (Canvas-Pixel) erzeugen
    AddDrawingFromPolyline {
        id: String,
        points: Vec<DVec2>,
        style: DrawingStyle,
    },
    /// Kontrollpunkt verschieben (Handles wandern mit)
    MoveControlPoint {
        drawing_id: String,
        point_id: String,
        position: CanvasPx,
    },
    /// Handle-Offsets eines Kontrollpunkts setzen
    SetPointHandles {
        drawing_id: String,
        point_id: String,
        handle_in: Option<DVec2>,
        handle_out: Option<DVec2>,
    },
    /// Kontrollpunkt samt referenzierender Segmente entfernen
    RemoveControlPoint { drawing_id: String, point_id: String },
    /// Ganze Drawing verschieben
    TranslateDrawing { drawing_id: String, delta: DVec2 },
    /// Drawing löschen
    DeleteDrawing { drawing_id: String },

    // === Spieler ===
    /// Spieler hinzufügen
    AddPlayer { player: Player },
    /// Spieler verschieben; verankerte Drawing-Punkte folgen
    MovePlayer { player_id: String, position: CanvasPx },
    /// Lineman hinzufügen
    AddLineman { lineman: LinemanPosition },
    /// Lineman verschieben
    MoveLineman {
        lineman_id: String,
        position: CanvasPx,
    },

    // === View ===
    /// View um ein Screen-Delta verschieben (1:1, unabhängig vom Zoom)
    PanView { delta: ScreenDelta },
    /// Zoom mit Faktor, optional um einen Screen-Anker
    ZoomView {
        factor: f64,
        anchor: Option<ScreenPx>,
    },
    /// Stufenweise hineinzoomen
    ZoomIn,
    /// Stufenweise herauszoomen
    ZoomOut,
    /// Zoom und Pan zurücksetzen
    ResetView,

    // === Historie ===
    /// Undo
    Undo,
    /// Redo
    Redo,
    /// Canvas leeren
    ClearCanvas,

    // === Karten ===
    /// Karten-Rechteck registrieren/aktualisieren
    RegisterCard { play_id: String, rect: ScreenRect },
    /// Karte abmelden
    UnregisterCard { play_id: String },
    /// Bildschirm-Rechteck des Canvas setzen
    SetCanvasBounds { rect: ScreenRect },
}

impl AppCommand {
    /// `true` für Commands, die den Canvas-Inhalt ändern und einen
    /// History-Eintrag erzeugen.
    pub fn is_content_edit(&self) -> bool {
        matches!(
            self,
            AppCommand::AddDrawing { .. }
                | AppCommand::AddDrawingFromPolyline { .. }
                | AppCommand::MoveControlPoint { .. }
                | AppCommand::SetPointHandles { .. }
                | AppCommand::RemoveControlPoint { .. }
                | AppCommand::TranslateDrawing { .. }
                | AppCommand::DeleteDrawing { .. }
                | AppCommand::AddPlayer { .. }
                | AppCommand::MovePlayer { .. }
                | AppCommand::AddLineman { .. }
                | AppCommand::MoveLineman { .. }
                | AppCommand::ClearCanvas
        )
    }
}
