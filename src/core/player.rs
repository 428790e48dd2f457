//! Spieler-Token und Lineman-Positionen.

use glam::DVec2;
use serde::{Deserialize, Serialize};

/// Spieler-Token auf dem Canvas.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Player {
    /// Spieler-ID
    pub id: String,
    /// X-Position
    pub x: f64,
    /// Y-Position
    pub y: f64,
    /// Kurzbeschriftung (z.B. "QB", "X")
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    /// Füllfarbe; ohne Angabe gilt die Option `player_fill_color`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
}

impl Player {
    /// Erstellt einen Spieler ohne Beschriftung.
    pub fn new(id: impl Into<String>, position: DVec2) -> Self {
        Self {
            id: id.into(),
            x: position.x,
            y: position.y,
            label: None,
            color: None,
        }
    }

    /// Setzt die Beschriftung (Builder).
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    /// Position des Spielers.
    pub fn position(&self) -> DVec2 {
        DVec2::new(self.x, self.y)
    }

    /// Setzt die Position.
    pub fn set_position(&mut self, position: DVec2) {
        self.x = position.x;
        self.y = position.y;
    }
}

/// Position eines Offensive Lineman.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LinemanPosition {
    /// Lineman-ID
    pub id: String,
    /// X-Position
    pub x: f64,
    /// Y-Position
    pub y: f64,
}

impl LinemanPosition {
    /// Erstellt eine Lineman-Position.
    pub fn new(id: impl Into<String>, position: DVec2) -> Self {
        Self {
            id: id.into(),
            x: position.x,
            y: position.y,
        }
    }

    /// Position als Vektor.
    pub fn position(&self) -> DVec2 {
        DVec2::new(self.x, self.y)
    }

    /// Setzt die Position.
    pub fn set_position(&mut self, position: DVec2) {
        self.x = position.x;
        self.y = position.y;
    }
}
