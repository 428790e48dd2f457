//! Play-Dateien im JSON-Format (camelCase, Drawing-Format wie auf dem Draht).

use std::path::Path;

use anyhow::Context;
use serde::{Deserialize, Serialize};

use crate::core::{Drawing, LinemanPosition, Player};

/// Inhalt einer Play-Datei.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayFile {
    /// Name des Plays
    #[serde(default)]
    pub name: String,
    /// Drawings in Zeichenreihenfolge
    #[serde(default)]
    pub drawings: Vec<Drawing>,
    /// Spieler-Tokens
    #[serde(default)]
    pub players: Vec<Player>,
    /// Lineman-Positionen
    #[serde(default)]
    pub lineman_positions: Vec<LinemanPosition>,
}

impl PlayFile {
    /// Parst eine Play-Datei aus JSON.
    ///
    /// Segmente mit fehlenden Punkt-Referenzen bleiben erhalten (sie werden
    /// beim Rendern übersprungen), werden aber gewarnt.
    pub fn parse(json: &str) -> anyhow::Result<Self> {
        let play: PlayFile = serde_json::from_str(json).context("Play-JSON ist ungültig")?;

        for drawing in &play.drawings {
            let dangling = drawing.dangling_point_ids();
            if !dangling.is_empty() {
                log::warn!(
                    "Drawing {}: Segmente referenzieren fehlende Punkte {:?}",
                    drawing.id,
                    dangling
                );
            }
        }

        Ok(play)
    }

    /// Serialisiert als eingerücktes JSON.
    pub fn to_json(&self) -> anyhow::Result<String> {
        serde_json::to_string_pretty(self).context("Play konnte nicht serialisiert werden")
    }

    /// Lädt eine Play-Datei von der Platte.
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Play-Datei nicht lesbar: {}", path.display()))?;
        let play = Self::parse(&content)
            .with_context(|| format!("Play-Datei fehlerhaft: {}", path.display()))?;
        log::info!(
            "Play geladen: {} ({} Drawings, {} Spieler)",
            path.display(),
            play.drawings.len(),
            play.players.len()
        );
        Ok(play)
    }

    /// Speichert die Play-Datei.
    pub fn save(&self, path: &Path) -> anyhow::Result<()> {
        let content = self.to_json()?;
        std::fs::write(path, content)
            .with_context(|| format!("Play-Datei nicht schreibbar: {}", path.display()))?;
        log::info!("Play gespeichert nach: {}", path.display());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_arrays_default_to_empty() {
        let play = PlayFile::parse(r#"{ "name": "Slant" }"#).expect("gültig");
        assert_eq!(play.name, "Slant");
        assert!(play.drawings.is_empty());
        assert!(play.players.is_empty());
        assert!(play.lineman_positions.is_empty());
    }

    #[test]
    fn lineman_positions_use_camel_case() {
        let play = PlayFile::parse(
            r#"{ "name": "Dive", "linemanPositions": [ { "id": "lt", "x": 1.0, "y": 2.0 } ] }"#,
        )
        .expect("gültig");
        assert_eq!(play.lineman_positions.len(), 1);

        let json = play.to_json().expect("serialisierbar");
        assert!(json.contains("\"linemanPositions\""));
    }

    #[test]
    fn invalid_json_is_an_error() {
        assert!(PlayFile::parse("{ nicht json").is_err());
    }
}
