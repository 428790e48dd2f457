//! Zoom/Pan-Transformation des Canvas.

use glam::DVec2;

use super::field::{CanvasPx, CoordinateError, ScreenDelta, ScreenPx};

/// Zoom/Pan-Zustand des Editor-Canvas.
///
/// Transformation: `screen = canvas * zoom + pan`.
#[derive(Debug, Clone, PartialEq)]
pub struct CanvasView {
    zoom: f64,
    pan: DVec2,
    zoom_min: f64,
    zoom_max: f64,
}

impl CanvasView {
    /// Minimaler Zoom-Faktor.
    pub const ZOOM_MIN: f64 = 0.25;
    /// Maximaler Zoom-Faktor.
    pub const ZOOM_MAX: f64 = 4.0;

    /// Erstellt eine View ohne Pan mit Zoom 1.0.
    pub fn new() -> Self {
        Self {
            zoom: 1.0,
            pan: DVec2::ZERO,
            zoom_min: Self::ZOOM_MIN,
            zoom_max: Self::ZOOM_MAX,
        }
    }

    /// Erstellt eine View mit eigenen Zoom-Grenzen (Reihenfolge wird normalisiert).
    pub fn with_zoom_limits(min: f64, max: f64) -> Result<Self, CoordinateError> {
        validate_zoom(min)?;
        validate_zoom(max)?;
        let (zoom_min, zoom_max) = if min <= max { (min, max) } else { (max, min) };
        Ok(Self {
            zoom: 1.0_f64.clamp(zoom_min, zoom_max),
            pan: DVec2::ZERO,
            zoom_min,
            zoom_max,
        })
    }

    /// Aktueller Zoom-Faktor (immer > 0).
    pub fn zoom(&self) -> f64 {
        self.zoom
    }

    /// Aktueller Pan-Offset in Screen-Pixeln.
    pub fn pan(&self) -> DVec2 {
        self.pan
    }

    /// Zoom-Grenzen `(min, max)`.
    pub fn zoom_limits(&self) -> (f64, f64) {
        (self.zoom_min, self.zoom_max)
    }

    /// Setzt den Zoom. Ungültige Werte (≤ 0, NaN, ∞) werden abgelehnt,
    /// gültige in die Zoom-Grenzen geklemmt.
    pub fn set_zoom(&mut self, zoom: f64) -> Result<(), CoordinateError> {
        validate_zoom(zoom)?;
        self.zoom = zoom.clamp(self.zoom_min, self.zoom_max);
        Ok(())
    }

    /// Setzt den Zoom ohne Fehlerfall: ungültige Werte landen auf dem Minimum.
    pub fn set_zoom_clamped(&mut self, zoom: f64) {
        self.zoom = if validate_zoom(zoom).is_ok() {
            zoom.clamp(self.zoom_min, self.zoom_max)
        } else {
            self.zoom_min
        };
    }

    /// Multipliziert den Zoom mit `factor`.
    pub fn zoom_by(&mut self, factor: f64) -> Result<(), CoordinateError> {
        validate_zoom(factor)?;
        self.set_zoom(self.zoom * factor)
    }

    /// Zoomt um einen Screen-Anker; der Canvas-Punkt unter dem Anker bleibt stehen.
    pub fn zoom_about(&mut self, anchor: ScreenPx, factor: f64) -> Result<(), CoordinateError> {
        let canvas_anchor = self.screen_to_canvas(anchor);
        self.zoom_by(factor)?;
        self.pan = anchor.0 - canvas_anchor.0 * self.zoom;
        Ok(())
    }

    /// Verschiebt die View 1:1 um ein Screen-Delta, unabhängig vom Zoom.
    pub fn pan_by(&mut self, delta: ScreenDelta) {
        self.pan += delta.0;
    }

    /// Setzt den Pan-Offset direkt.
    pub fn set_pan(&mut self, pan: DVec2) {
        self.pan = pan;
    }

    /// Setzt Zoom und Pan zurück.
    pub fn reset(&mut self) {
        self.zoom = 1.0_f64.clamp(self.zoom_min, self.zoom_max);
        self.pan = DVec2::ZERO;
    }

    /// Screen → Canvas: `(screen - pan) / zoom`.
    ///
    /// Nur für Messungen außerhalb der Transformation.
    pub fn screen_to_canvas(&self, p: ScreenPx) -> CanvasPx {
        CanvasPx((p.0 - self.pan) / self.zoom)
    }

    /// Canvas → Screen: `canvas * zoom + pan`.
    pub fn canvas_to_screen(&self, p: CanvasPx) -> ScreenPx {
        ScreenPx(p.0 * self.zoom + self.pan)
    }

    /// Offset relativ zum Bounding-Rect eines Elements **innerhalb** der
    /// Transformation → Canvas-Pixel.
    ///
    /// Der Rect-Ursprung enthält den Pan bereits; es wird nur durch den Zoom geteilt.
    pub fn canvas_from_transformed_offset(&self, offset: DVec2) -> CanvasPx {
        CanvasPx(offset / self.zoom)
    }

    /// SVG-Transform-Attribut dieser View.
    pub fn svg_transform(&self) -> String {
        format!(
            "translate({:.2} {:.2}) scale({:.4})",
            self.pan.x, self.pan.y, self.zoom
        )
    }
}

impl Default for CanvasView {
    fn default() -> Self {
        Self::new()
    }
}

fn validate_zoom(zoom: f64) -> Result<(), CoordinateError> {
    if zoom.is_finite() && zoom > 0.0 {
        Ok(())
    } else {
        Err(CoordinateError::InvalidZoom(zoom))
    }
}
