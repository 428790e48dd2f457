//! Zentrale Konfiguration für den Playbook-Diagramm-Editor.
//!
//! `EditorOptions` enthält alle zur Laufzeit änderbaren Werte.
//! Die `const`-Werte bleiben als Fallback/Default erhalten.

use serde::{Deserialize, Serialize};

use crate::core::{CanvasView, CoordinateError, FieldGeometry};

// ── Canvas & Spielfeld ──────────────────────────────────────────────

/// Logische Canvas-Breite in Pixeln.
pub const CANVAS_WIDTH_PX: f64 = FieldGeometry::DEFAULT_CANVAS_WIDTH_PX;
/// Logische Canvas-Höhe in Pixeln.
pub const CANVAS_HEIGHT_PX: f64 = FieldGeometry::DEFAULT_CANVAS_HEIGHT_PX;
/// Spielfeldbreite in Feet.
pub const FIELD_WIDTH_FEET: f64 = FieldGeometry::DEFAULT_FIELD_WIDTH_FEET;
/// Sichtbare Feldlänge in Feet.
pub const FIELD_HEIGHT_FEET: f64 = FieldGeometry::DEFAULT_FIELD_HEIGHT_FEET;

// ── Zoom ────────────────────────────────────────────────────────────

/// Minimaler Zoom-Faktor.
pub const ZOOM_MIN: f64 = CanvasView::ZOOM_MIN;
/// Maximaler Zoom-Faktor.
pub const ZOOM_MAX: f64 = CanvasView::ZOOM_MAX;
/// Zoom-Schritt bei stufenweisem Zoom (Buttons / Shortcuts).
pub const ZOOM_STEP: f64 = 1.2;

// ── Historie ────────────────────────────────────────────────────────

/// Maximale Anzahl Undo-Snapshots.
pub const HISTORY_MAX_DEPTH: usize = 100;

// ── Vorschau ────────────────────────────────────────────────────────

/// Breite des Vorschau-Viewports (Play-Karte).
pub const PREVIEW_WIDTH: f64 = 200.0;
/// Höhe des Vorschau-Viewports.
pub const PREVIEW_HEIGHT: f64 = 120.0;
/// Innenabstand im Vorschau-Viewport.
pub const PREVIEW_PADDING: f64 = 10.0;

// ── Picking ─────────────────────────────────────────────────────────

/// Pick-Radius für Kontrollpunkte in Screen-Pixeln.
pub const PICK_RADIUS_PX: f64 = 8.0;

// ── Spieler & Linien ────────────────────────────────────────────────

/// Radius eines Spieler-Tokens in Canvas-Pixeln.
pub const PLAYER_RADIUS_PX: f64 = 12.0;
/// Standard-Füllfarbe der Spieler.
pub const PLAYER_FILL_COLOR: &str = "#ffffff";
/// Randfarbe der Spieler.
pub const PLAYER_STROKE_COLOR: &str = "#1f2937";
/// Strichmuster gestrichelter Linien (`stroke-dasharray`).
pub const DASH_PATTERN: &str = "8 6";

// ── Export ──────────────────────────────────────────────────────────

/// Basis-URL des Export-Dienstes.
pub const EXPORT_BASE_URL: &str = "http://localhost:3000";
/// Maximale Größe der PDF-Antwort in Bytes.
pub const EXPORT_MAX_RESPONSE_BYTES: u64 = 50 * 1024 * 1024;

// ── Laufzeit-Optionen (serialisierbar) ─────────────────────────────

/// Alle zur Laufzeit änderbaren Editor-Optionen.
/// Wird als `playbook_diagram.toml` neben der Binary gespeichert.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct EditorOptions {
    // ── Canvas & Spielfeld ─────────────────────────────────────
    /// Logische Canvas-Breite in Pixeln
    pub canvas_width_px: f64,
    /// Logische Canvas-Höhe in Pixeln
    pub canvas_height_px: f64,
    /// Spielfeldbreite in Feet
    pub field_width_feet: f64,
    /// Sichtbare Feldlänge in Feet
    pub field_height_feet: f64,

    // ── Zoom ────────────────────────────────────────────────────
    /// Minimaler Zoom-Faktor
    pub zoom_min: f64,
    /// Maximaler Zoom-Faktor
    pub zoom_max: f64,
    /// Zoom-Schritt bei Buttons / Shortcuts
    pub zoom_step: f64,

    // ── Historie ────────────────────────────────────────────────
    /// Maximale Anzahl Undo-Snapshots (älteste fallen zuerst heraus)
    #[serde(default = "default_history_max_depth")]
    pub history_max_depth: usize,

    // ── Vorschau ────────────────────────────────────────────────
    /// Breite des Vorschau-Viewports
    pub preview_width: f64,
    /// Höhe des Vorschau-Viewports
    pub preview_height: f64,
    /// Innenabstand im Vorschau-Viewport
    pub preview_padding: f64,

    // ── Picking ─────────────────────────────────────────────────
    /// Pick-Radius für Kontrollpunkte in Screen-Pixeln
    #[serde(default = "default_pick_radius_px")]
    pub pick_radius_px: f64,

    // ── Spieler & Linien ────────────────────────────────────────
    /// Radius eines Spieler-Tokens
    pub player_radius_px: f64,
    /// Standard-Füllfarbe der Spieler
    pub player_fill_color: String,
    /// Randfarbe der Spieler
    pub player_stroke_color: String,
    /// Strichmuster gestrichelter Linien
    pub dash_pattern: String,

    // ── Export ──────────────────────────────────────────────────
    /// Basis-URL des Call-Sheet-Exports
    #[serde(default = "default_export_base_url")]
    pub export_base_url: String,
    /// Maximale Größe der PDF-Antwort in Bytes
    #[serde(default = "default_export_max_response_bytes")]
    pub export_max_response_bytes: u64,
}

impl Default for EditorOptions {
    fn default() -> Self {
        Self {
            canvas_width_px: CANVAS_WIDTH_PX,
            canvas_height_px: CANVAS_HEIGHT_PX,
            field_width_feet: FIELD_WIDTH_FEET,
            field_height_feet: FIELD_HEIGHT_FEET,

            zoom_min: ZOOM_MIN,
            zoom_max: ZOOM_MAX,
            zoom_step: ZOOM_STEP,

            history_max_depth: HISTORY_MAX_DEPTH,

            preview_width: PREVIEW_WIDTH,
            preview_height: PREVIEW_HEIGHT,
            preview_padding: PREVIEW_PADDING,

            pick_radius_px: PICK_RADIUS_PX,

            player_radius_px: PLAYER_RADIUS_PX,
            player_fill_color: PLAYER_FILL_COLOR.to_string(),
            player_stroke_color: PLAYER_STROKE_COLOR.to_string(),
            dash_pattern: DASH_PATTERN.to_string(),

            export_base_url: EXPORT_BASE_URL.to_string(),
            export_max_response_bytes: EXPORT_MAX_RESPONSE_BYTES,
        }
    }
}

/// Serde-Default für `history_max_depth` (Abwärtskompatibilität bestehender TOML-Dateien).
fn default_history_max_depth() -> usize {
    HISTORY_MAX_DEPTH
}

/// Serde-Default für `pick_radius_px` (Abwärtskompatibilität).
fn default_pick_radius_px() -> f64 {
    PICK_RADIUS_PX
}

/// Serde-Default für `export_base_url` (Abwärtskompatibilität).
fn default_export_base_url() -> String {
    EXPORT_BASE_URL.to_string()
}

/// Serde-Default für `export_max_response_bytes` (Abwärtskompatibilität).
fn default_export_max_response_bytes() -> u64 {
    EXPORT_MAX_RESPONSE_BYTES
}

impl EditorOptions {
    /// Lädt Optionen aus einer TOML-Datei. Bei Fehler: Standardwerte.
    pub fn load_from_file(path: &std::path::Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(content) => match toml::from_str(&content) {
                Ok(opts) => {
                    log::info!("Optionen geladen aus: {}", path.display());
                    opts
                }
                Err(e) => {
                    log::warn!("Optionen-Datei fehlerhaft, verwende Standardwerte: {}", e);
                    Self::default()
                }
            },
            Err(_) => {
                log::info!("Keine Optionen-Datei gefunden, verwende Standardwerte");
                Self::default()
            }
        }
    }

    /// Speichert Optionen als TOML-Datei.
    pub fn save_to_file(&self, path: &std::path::Path) -> anyhow::Result<()> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        log::info!("Optionen gespeichert nach: {}", path.display());
        Ok(())
    }

    /// Ermittelt den Pfad zur Optionen-Datei neben der Binary.
    pub fn config_path() -> std::path::PathBuf {
        std::env::current_exe()
            .unwrap_or_else(|_| std::path::PathBuf::from("playbook-diagram"))
            .parent()
            .unwrap_or_else(|| std::path::Path::new("."))
            .join("playbook_diagram.toml")
    }

    /// Validierte Feld-Geometrie aus den Abmessungen.
    pub fn field_geometry(&self) -> Result<FieldGeometry, CoordinateError> {
        FieldGeometry::new(
            self.canvas_width_px,
            self.canvas_height_px,
            self.field_width_feet,
            self.field_height_feet,
        )
    }

    /// Neue Canvas-View mit den konfigurierten Zoom-Grenzen.
    pub fn canvas_view(&self) -> Result<CanvasView, CoordinateError> {
        CanvasView::with_zoom_limits(self.zoom_min, self.zoom_max)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toml_round_trip_keeps_values() {
        let mut options = EditorOptions::default();
        options.history_max_depth = 25;
        options.dash_pattern = "4 2".to_string();

        let text = toml::to_string_pretty(&options).expect("serialisierbar");
        let parsed: EditorOptions = toml::from_str(&text).expect("parsebar");

        assert_eq!(parsed, options);
    }

    #[test]
    fn missing_newer_fields_fall_back_to_defaults() {
        let text = toml::to_string_pretty(&EditorOptions::default()).expect("serialisierbar");
        let text: String = text
            .lines()
            .filter(|line| {
                !line.starts_with("history_max_depth") && !line.starts_with("export_base_url")
            })
            .map(|line| format!("{line}\n"))
            .collect();

        let parsed: EditorOptions = toml::from_str(&text).expect("parsebar");

        assert_eq!(parsed.history_max_depth, HISTORY_MAX_DEPTH);
        assert_eq!(parsed.export_base_url, EXPORT_BASE_URL);
    }

    #[test]
    fn unreadable_file_yields_defaults() {
        let path = std::env::temp_dir().join("playbook_diagram_missing_options.toml");
        let _ = std::fs::remove_file(&path);
        assert_eq!(EditorOptions::load_from_file(&path), EditorOptions::default());
    }

    #[test]
    fn default_geometry_is_valid() {
        let options = EditorOptions::default();
        assert!(options.field_geometry().is_ok());
        assert_eq!(
            options.canvas_view().expect("View").zoom_limits(),
            (ZOOM_MIN, ZOOM_MAX)
        );
    }
}
