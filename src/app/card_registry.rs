//! Registry der Bildschirm-Rechtecke sichtbarer Play-Karten.
//!
//! Gehört dem `EditorState`; Karten melden sich beim Einblenden an und beim
//! Ausblenden ab. Nicht Teil der Undo-Historie.

use std::collections::HashMap;

use crate::core::ScreenRect;

/// Play-ID → aktuelles Bildschirm-Rechteck der Karte.
#[derive(Debug, Clone, Default)]
pub struct CardRegistry {
    cards: HashMap<String, ScreenRect>,
}

impl CardRegistry {
    /// Erstellt eine leere Registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Meldet eine Karte an oder aktualisiert ihr Rechteck.
    pub fn register(&mut self, play_id: impl Into<String>, rect: ScreenRect) {
        self.cards.insert(play_id.into(), rect);
    }

    /// Meldet eine Karte ab. Gibt das letzte bekannte Rechteck zurück.
    pub fn unregister(&mut self, play_id: &str) -> Option<ScreenRect> {
        self.cards.remove(play_id)
    }

    /// Rechteck einer angemeldeten Karte.
    pub fn lookup(&self, play_id: &str) -> Option<ScreenRect> {
        self.cards.get(play_id).copied()
    }

    /// Anzahl angemeldeter Karten.
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// `true` wenn keine Karte angemeldet ist.
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}
