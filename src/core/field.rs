//! Koordinatenräume: Field-Feet, Canvas-Pixel und Screen-Pixel.
//!
//! Jeder Raum hat einen eigenen Typ. Umrechnungen gibt es nur zwischen
//! Räumen, für die sie definiert sind:
//! - `CanvasPx → FieldFeet`: [`FieldGeometry::pixels_to_feet`]
//! - `ScreenPx → FieldFeet`: [`FieldGeometry::screen_to_feet`] (entfernt Pan/Zoom)
//!
//! Eine Messung, die bereits innerhalb der Zoom/Pan-Transformation liegt,
//! ist ein `CanvasPx` und kann nicht versehentlich ein zweites Mal
//! durch `screen_to_feet` korrigiert werden.

use glam::DVec2;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::view::CanvasView;

/// Fehler an der Grenze des Koordinatenmodells.
#[derive(Debug, Error, Clone, Copy, PartialEq)]
pub enum CoordinateError {
    /// Zoom muss endlich und > 0 sein
    #[error("ungültiger Zoom-Faktor {0}: muss endlich und > 0 sein")]
    InvalidZoom(f64),
    /// Feld- oder Canvas-Abmessung ist nicht positiv
    #[error("ungültige Abmessung {what}: {value}")]
    InvalidDimension {
        /// Name der Abmessung
        what: &'static str,
        /// Übergebener Wert
        value: f64,
    },
}

/// Wire-Format einer Koordinate (`{x, y}`), z.B. für Handle-Offsets.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Coordinate {
    /// X-Komponente
    pub x: f64,
    /// Y-Komponente
    pub y: f64,
}

impl Coordinate {
    /// Erstellt eine Koordinate.
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Konvertiert in einen glam-Vektor.
    pub fn to_vec2(self) -> DVec2 {
        DVec2::new(self.x, self.y)
    }
}

impl From<DVec2> for Coordinate {
    fn from(v: DVec2) -> Self {
        Self { x: v.x, y: v.y }
    }
}

/// Position in Field-Feet (Y wächst nach oben).
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct FieldFeet(pub DVec2);

/// Position in Canvas-internen Pixeln (feste logische Zeichenfläche, Y wächst nach unten).
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct CanvasPx(pub DVec2);

/// Position in Screen-Pixeln, gemessen **außerhalb** der Zoom/Pan-Transformation.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ScreenPx(pub DVec2);

/// Verschiebung in Screen-Pixeln (Pointer-Delta beim Pannen).
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ScreenDelta(pub DVec2);

impl FieldFeet {
    /// Erstellt eine Feet-Position.
    pub fn new(x: f64, y: f64) -> Self {
        Self(DVec2::new(x, y))
    }
}

impl CanvasPx {
    /// Erstellt eine Canvas-Pixel-Position.
    pub fn new(x: f64, y: f64) -> Self {
        Self(DVec2::new(x, y))
    }
}

impl ScreenPx {
    /// Erstellt eine Screen-Pixel-Position.
    pub fn new(x: f64, y: f64) -> Self {
        Self(DVec2::new(x, y))
    }
}

impl ScreenDelta {
    /// Erstellt ein Screen-Delta.
    pub fn new(x: f64, y: f64) -> Self {
        Self(DVec2::new(x, y))
    }
}

/// Achsenparalleles Rechteck in Screen-Pixeln (Bounding-Rect eines UI-Elements).
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct ScreenRect {
    /// Linke Kante
    pub x: f64,
    /// Obere Kante
    pub y: f64,
    /// Breite
    pub width: f64,
    /// Höhe
    pub height: f64,
}

impl ScreenRect {
    /// Erstellt ein Rechteck.
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Mittelpunkt des Rechtecks.
    pub fn center(&self) -> ScreenPx {
        ScreenPx::new(self.x + self.width / 2.0, self.y + self.height / 2.0)
    }
}

/// Abmessungen von Canvas (Pixel) und Spielfeld (Feet).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FieldGeometry {
    canvas_width_px: f64,
    canvas_height_px: f64,
    field_width_feet: f64,
}

impl FieldGeometry {
    /// Standard-Canvas-Breite in Pixeln.
    pub const DEFAULT_CANVAS_WIDTH_PX: f64 = 800.0;
    /// Standard-Canvas-Höhe in Pixeln.
    pub const DEFAULT_CANVAS_HEIGHT_PX: f64 = 600.0;
    /// Spielfeldbreite in Feet (53⅓ Yards).
    pub const DEFAULT_FIELD_WIDTH_FEET: f64 = 160.0;
    /// Sichtbare Feldlänge in Feet.
    pub const DEFAULT_FIELD_HEIGHT_FEET: f64 = 120.0;

    /// Erstellt eine validierte Geometrie. Alle Abmessungen müssen endlich und > 0 sein.
    ///
    /// Die Feldhöhe wird nur geprüft; die Skalierung folgt aus der Breite.
    pub fn new(
        canvas_width_px: f64,
        canvas_height_px: f64,
        field_width_feet: f64,
        field_height_feet: f64,
    ) -> Result<Self, CoordinateError> {
        for (what, value) in [
            ("canvas_width_px", canvas_width_px),
            ("canvas_height_px", canvas_height_px),
            ("field_width_feet", field_width_feet),
            ("field_height_feet", field_height_feet),
        ] {
            if !value.is_finite() || value <= 0.0 {
                return Err(CoordinateError::InvalidDimension { what, value });
            }
        }
        Ok(Self {
            canvas_width_px,
            canvas_height_px,
            field_width_feet,
        })
    }

    /// Pixel pro Foot: `canvas_width_px / field_width_feet`.
    pub fn scale_factor(&self) -> f64 {
        self.canvas_width_px / self.field_width_feet
    }

    /// Canvas-Pixel → Feet, ohne Pan/Zoom-Korrektur.
    ///
    /// Nur für Koordinaten im Canvas-internen Raum, also Messungen an einem
    /// Element **innerhalb** der Transformation (siehe
    /// [`CanvasView::canvas_from_transformed_offset`]).
    pub fn pixels_to_feet(&self, p: CanvasPx) -> FieldFeet {
        let s = self.scale_factor();
        FieldFeet::new(p.0.x / s, (self.canvas_height_px - p.0.y) / s)
    }

    /// Feet → Canvas-Pixel (Umkehrung von [`Self::pixels_to_feet`]).
    pub fn feet_to_pixels(&self, f: FieldFeet) -> CanvasPx {
        let s = self.scale_factor();
        CanvasPx::new(f.0.x * s, self.canvas_height_px - f.0.y * s)
    }

    /// Screen-Pixel → Feet: erst Pan entfernen und durch Zoom teilen, dann
    /// [`Self::pixels_to_feet`].
    ///
    /// Nur für Messungen **außerhalb** der Transformation (roher Pointer-Event
    /// gegen einen untransformierten Vorfahren).
    pub fn screen_to_feet(&self, p: ScreenPx, view: &CanvasView) -> FieldFeet {
        self.pixels_to_feet(view.screen_to_canvas(p))
    }

    /// Canvas-Distanz in Feet (richtungsunabhängig).
    pub fn pixels_to_feet_distance(&self, distance_px: f64) -> f64 {
        distance_px / self.scale_factor()
    }
}

impl Default for FieldGeometry {
    fn default() -> Self {
        Self {
            canvas_width_px: Self::DEFAULT_CANVAS_WIDTH_PX,
            canvas_height_px: Self::DEFAULT_CANVAS_HEIGHT_PX,
            field_width_feet: Self::DEFAULT_FIELD_WIDTH_FEET,
        }
    }
}
