//! Planung des Übergangs von einer Play-Karte zum Editor-Canvas.

use glam::DVec2;

use super::card_registry::CardRegistry;
use crate::core::ScreenRect;
use crate::render::CanvasSnapshot;

/// Alles, was für den Karte → Canvas-Übergang gebraucht wird.
#[derive(Debug, Clone, PartialEq)]
pub struct CardTransition {
    /// Play, dessen Karte geöffnet wird
    pub play_id: String,
    /// Start-Rechteck (Karte)
    pub from: ScreenRect,
    /// Ziel-Rechteck (Canvas)
    pub to: ScreenRect,
    /// Bild, das während des Übergangs gezeigt wird
    pub snapshot: CanvasSnapshot,
}

impl CardTransition {
    /// Skalierung Karte relativ zum Canvas `(sx, sy)`.
    pub fn start_scale(&self) -> DVec2 {
        DVec2::new(
            ratio(self.from.width, self.to.width),
            ratio(self.from.height, self.to.height),
        )
    }

    /// Verschiebung der Kartenmitte relativ zur Canvas-Mitte.
    pub fn start_offset(&self) -> DVec2 {
        self.from.center().0 - self.to.center().0
    }

    /// Interpoliertes Rechteck für `t ∈ [0, 1]` (wird geklemmt).
    pub fn rect_at(&self, t: f64) -> ScreenRect {
        let t = if t.is_nan() { 0.0 } else { t.clamp(0.0, 1.0) };
        let lerp = |a: f64, b: f64| a + (b - a) * t;
        ScreenRect::new(
            lerp(self.from.x, self.to.x),
            lerp(self.from.y, self.to.y),
            lerp(self.from.width, self.to.width),
            lerp(self.from.height, self.to.height),
        )
    }
}

fn ratio(a: f64, b: f64) -> f64 {
    if b > 0.0 {
        a / b
    } else {
        1.0
    }
}

/// Kombiniert Karten-Rechteck, Canvas-Rechteck und Snapshot.
///
/// Fehlt eines davon, gibt es keinen Übergang (`None`); der Editor öffnet
/// dann ohne Animation.
pub fn plan_card_transition(
    registry: &CardRegistry,
    play_id: &str,
    canvas: Option<ScreenRect>,
    snapshot: Option<CanvasSnapshot>,
) -> Option<CardTransition> {
    let Some(from) = registry.lookup(play_id) else {
        log::debug!("Keine Karte für Play {} registriert, kein Übergang", play_id);
        return None;
    };
    let to = canvas?;
    let snapshot = snapshot?;

    Some(CardTransition {
        play_id: play_id.to_string(),
        from,
        to,
        snapshot,
    })
}
