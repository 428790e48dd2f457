//! Bounding-Box und Fit-Transformation in einen festen Vorschau-Viewport.

use glam::DVec2;
use serde::{Deserialize, Serialize};

use super::drawing::Drawing;
use super::player::{LinemanPosition, Player};

/// Minimales achsenparalleles Rechteck um eine Punktmenge.
///
/// Abgeleitet, nicht persistiert. Alle Werte liegen im selben Raum.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BoundingBox {
    /// Minimale X-Koordinate
    pub min_x: f64,
    /// Maximale X-Koordinate
    pub max_x: f64,
    /// Minimale Y-Koordinate
    pub min_y: f64,
    /// Maximale Y-Koordinate
    pub max_y: f64,
}

impl BoundingBox {
    /// Box, die genau einen Punkt enthält.
    pub fn from_point(p: DVec2) -> Self {
        Self {
            min_x: p.x,
            max_x: p.x,
            min_y: p.y,
            max_y: p.y,
        }
    }

    /// Erweitert die Box um einen Punkt.
    pub fn include(&mut self, p: DVec2) {
        self.min_x = self.min_x.min(p.x);
        self.max_x = self.max_x.max(p.x);
        self.min_y = self.min_y.min(p.y);
        self.max_y = self.max_y.max(p.y);
    }

    /// Breite (`max_x - min_x`).
    pub fn width(&self) -> f64 {
        self.max_x - self.min_x
    }

    /// Höhe (`max_y - min_y`).
    pub fn height(&self) -> f64 {
        self.max_y - self.min_y
    }

    /// `true` wenn eine Achse keine Ausdehnung hat.
    pub fn is_degenerate(&self) -> bool {
        self.width() <= 0.0 || self.height() <= 0.0
    }

    /// Verbreitert ausdehnungslose Achsen um 1 Einheit (`max += 1`).
    pub fn widened(self) -> Self {
        let mut bbox = self;
        if bbox.width() <= 0.0 {
            bbox.max_x = bbox.min_x + 1.0;
        }
        if bbox.height() <= 0.0 {
            bbox.max_y = bbox.min_y + 1.0;
        }
        bbox
    }
}

/// Alle Positionen, die zur Ausdehnung einer Drawing beitragen:
/// Ankerpunkte plus absolute Handle-Endpunkte.
pub fn extent_points(drawing: &Drawing) -> impl Iterator<Item = DVec2> + '_ {
    drawing.points.values().flat_map(|point| {
        [
            Some(point.position()),
            point.handle_in_position(),
            point.handle_out_position(),
        ]
        .into_iter()
        .flatten()
    })
}

fn bounds_of(points: impl Iterator<Item = DVec2>) -> Option<BoundingBox> {
    let mut bbox: Option<BoundingBox> = None;
    for p in points {
        match bbox.as_mut() {
            Some(b) => b.include(p),
            None => bbox = Some(BoundingBox::from_point(p)),
        }
    }
    bbox.map(BoundingBox::widened)
}

/// Bounding-Box einer Menge von Drawings inkl. Handle-Endpunkten.
///
/// `None` für eine leere Menge (nichts zu rendern). Ausdehnungslose Achsen
/// werden um 1 verbreitert.
pub fn compute_bounding_box(drawings: &[Drawing]) -> Option<BoundingBox> {
    bounds_of(drawings.iter().flat_map(extent_points))
}

/// Bounding-Box einer Szene: Drawings plus Spieler- und Lineman-Positionen.
pub fn compute_scene_bounds(
    drawings: &[Drawing],
    players: &[Player],
    linemen: &[LinemanPosition],
) -> Option<BoundingBox> {
    bounds_of(
        drawings
            .iter()
            .flat_map(extent_points)
            .chain(players.iter().map(Player::position))
            .chain(linemen.iter().map(LinemanPosition::position)),
    )
}

/// Uniforme Skalierung + Offset, die eine Bounding-Box zentriert in einen
/// Viewport mit Innenabstand einpasst (Seitenverhältnis bleibt erhalten).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewportFit {
    bbox: BoundingBox,
    scale: f64,
    offset: DVec2,
}

impl ViewportFit {
    /// Berechnet den Fit.
    ///
    /// `scale = min((w - 2p) / bw, (h - 2p) / bh)`; der skalierte Inhalt wird
    /// auf beiden Achsen unabhängig zentriert. Eine ausdehnungslose Box wird
    /// vorher verbreitert, der Divisor ist daher nie 0.
    ///
    /// Läuft die Ausdehnung über (`max - min` = ∞), fällt der Fit auf
    /// Skalierung 0 zurück: alle Punkte landen in der Viewport-Mitte, nie `NaN`.
    pub fn new(bbox: &BoundingBox, viewport_width: f64, viewport_height: f64, padding: f64) -> Self {
        let bbox = bbox.widened();
        let available_w = (viewport_width - 2.0 * padding).max(0.0);
        let available_h = (viewport_height - 2.0 * padding).max(0.0);

        let scale = if bbox.width().is_finite() && bbox.height().is_finite() {
            (available_w / bbox.width()).min(available_h / bbox.height())
        } else {
            log::warn!("Bounding-Box-Ausdehnung nicht darstellbar, Inhalt wird auf die Mitte gelegt");
            0.0
        };
        let scale = if scale.is_finite() { scale } else { 0.0 };

        let (content_w, content_h) = if scale > 0.0 {
            (bbox.width() * scale, bbox.height() * scale)
        } else {
            (0.0, 0.0)
        };
        let offset = DVec2::new(
            padding + (available_w - content_w) / 2.0 - bbox.min_x * scale,
            padding + (available_h - content_h) / 2.0 - bbox.min_y * scale,
        );

        Self {
            bbox,
            scale,
            offset,
        }
    }

    /// Die (ggf. verbreiterte) Box, auf der der Fit basiert.
    pub fn bbox(&self) -> BoundingBox {
        self.bbox
    }

    /// Uniformer Skalierungsfaktor.
    pub fn scale(&self) -> f64 {
        self.scale
    }

    /// Transformiert einen Punkt in Viewport-Koordinaten.
    pub fn apply(&self, point: DVec2) -> DVec2 {
        point * self.scale + self.offset
    }
}

/// Transformiert einen einzelnen Punkt in den Viewport (siehe [`ViewportFit::new`]).
pub fn transform_point(
    point: DVec2,
    bbox: &BoundingBox,
    viewport_width: f64,
    viewport_height: f64,
    padding: f64,
) -> DVec2 {
    ViewportFit::new(bbox, viewport_width, viewport_height, padding).apply(point)
}
