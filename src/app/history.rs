use crate::core::{Drawing, LinemanPosition, Player};
use std::collections::VecDeque;
use std::sync::Arc;

/// Unveränderlicher Stand des Canvas-Inhalts für Undo/Redo.
///
/// Nutzt Arc-Clone (Copy-on-Write): Das Erstellen eines Snapshots ist O(1),
/// der eigentliche Klon passiert erst beim nächsten `Arc::make_mut()` auf der
/// Live-Seite. Ein Snapshot teilt nie veränderlichen Zustand mit dem Editor.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct HistorySnapshot {
    /// Drawings zum Zeitpunkt des Snapshots
    pub drawings: Arc<Vec<Drawing>>,
    /// Spieler zum Zeitpunkt des Snapshots
    pub players: Arc<Vec<Player>>,
    /// Lineman-Positionen zum Zeitpunkt des Snapshots
    pub lineman_positions: Arc<Vec<LinemanPosition>>,
}

impl HistorySnapshot {
    /// Erstellt einen Snapshot aus eigenen Daten.
    pub fn new(
        drawings: Vec<Drawing>,
        players: Vec<Player>,
        lineman_positions: Vec<LinemanPosition>,
    ) -> Self {
        Self {
            drawings: Arc::new(drawings),
            players: Arc::new(players),
            lineman_positions: Arc::new(lineman_positions),
        }
    }

    /// Erstellt einen O(1)-Snapshot durch Arc-Clone statt Deep-Clone.
    pub fn from_state(state: &crate::app::EditorState) -> Self {
        Self {
            drawings: Arc::clone(&state.drawings),
            players: Arc::clone(&state.players),
            lineman_positions: Arc::clone(&state.lineman_positions),
        }
    }

    /// Stellt den Snapshot wieder her (O(1) Arc-Zuweisung).
    pub fn apply_to(self, state: &mut crate::app::EditorState) {
        state.drawings = self.drawings;
        state.players = self.players;
        state.lineman_positions = self.lineman_positions;
    }
}

/// Ergebnis eines Undo-Schritts.
#[derive(Debug, Clone, PartialEq)]
pub enum UndoOutcome {
    /// Diesen Stand wiederherstellen
    Restore(HistorySnapshot),
    /// Vor dem ersten Eintrag: Aufrufer leert den Live-Canvas
    Clear,
}

/// Lineare Undo/Redo-Historie mit Cursor.
///
/// `cursor == None` bedeutet "vor dem ersten Eintrag". Die Kapazität ist fest;
/// beim Überlauf fällt der älteste Eintrag heraus.
#[derive(Debug, Clone)]
pub struct EditHistory {
    entries: VecDeque<HistorySnapshot>,
    cursor: Option<usize>,
    max_depth: usize,
}

impl Default for EditHistory {
    fn default() -> Self {
        Self::new_with_capacity(crate::shared::HISTORY_MAX_DEPTH)
    }
}

impl EditHistory {
    /// Erstellt eine leere Historie mit maximaler Tiefe (mindestens 1).
    pub fn new_with_capacity(max_depth: usize) -> Self {
        let max_depth = max_depth.max(1);
        Self {
            entries: VecDeque::with_capacity(max_depth.min(256)),
            cursor: None,
            max_depth,
        }
    }

    /// Hängt einen Snapshot an. Einträge hinter dem Cursor werden verworfen.
    pub fn commit(&mut self, snapshot: HistorySnapshot) {
        let keep = self.cursor.map_or(0, |i| i + 1);
        self.entries.truncate(keep);
        self.entries.push_back(snapshot);
        while self.entries.len() > self.max_depth {
            self.entries.pop_front();
        }
        self.cursor = Some(self.entries.len() - 1);
    }

    /// Geht einen Schritt zurück.
    ///
    /// Am ersten Eintrag (oder bei leerer Historie) wird [`UndoOutcome::Clear`]
    /// geliefert und der Cursor steht danach vor dem ersten Eintrag.
    pub fn undo(&mut self) -> UndoOutcome {
        match self.cursor {
            Some(i) if i > 0 => {
                self.cursor = Some(i - 1);
                match self.entries.get(i - 1) {
                    Some(snapshot) => UndoOutcome::Restore(snapshot.clone()),
                    None => UndoOutcome::Clear,
                }
            }
            _ => {
                self.cursor = None;
                UndoOutcome::Clear
            }
        }
    }

    /// Geht einen Schritt vor; `None` am neuesten Eintrag.
    pub fn redo(&mut self) -> Option<HistorySnapshot> {
        let next = self.cursor.map_or(0, |i| i + 1);
        let snapshot = self.entries.get(next)?.clone();
        self.cursor = Some(next);
        Some(snapshot)
    }

    /// Prüft ob Undo etwas bewirkt.
    pub fn can_undo(&self) -> bool {
        self.cursor.is_some()
    }

    /// Prüft ob Redo möglich ist.
    pub fn can_redo(&self) -> bool {
        self.cursor.map_or(0, |i| i + 1) < self.entries.len()
    }

    /// Aktuelle Cursor-Position.
    pub fn cursor(&self) -> Option<usize> {
        self.cursor
    }

    /// Anzahl gespeicherter Einträge.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// `true` wenn keine Einträge vorhanden sind.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Maximale Tiefe.
    pub fn max_depth(&self) -> usize {
        self.max_depth
    }

    /// Verwirft alle Einträge.
    pub fn clear(&mut self) {
        self.entries.clear();
        self.cursor = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::DrawingStyle;

    fn snapshot_with_drawings(count: usize) -> HistorySnapshot {
        let drawings = (0..count)
            .map(|i| Drawing::new(format!("d{i}"), DrawingStyle::default()))
            .collect();
        HistorySnapshot::new(drawings, Vec::new(), Vec::new())
    }

    fn restored_count(outcome: UndoOutcome) -> usize {
        match outcome {
            UndoOutcome::Restore(snapshot) => snapshot.drawings.len(),
            UndoOutcome::Clear => panic!("Restore erwartet"),
        }
    }

    #[test]
    fn empty_history_cannot_undo_or_redo() {
        let mut history = EditHistory::new_with_capacity(10);
        assert!(!history.can_undo());
        assert!(!history.can_redo());
        assert_eq!(history.undo(), UndoOutcome::Clear);
        assert!(history.redo().is_none());
    }

    #[test]
    fn undo_twice_then_redo_twice_restores_latest() {
        let mut history = EditHistory::new_with_capacity(10);
        for i in 1..=3 {
            history.commit(snapshot_with_drawings(i));
        }

        assert_eq!(restored_count(history.undo()), 2);
        assert_eq!(restored_count(history.undo()), 1);
        assert_eq!(history.redo().map(|s| s.drawings.len()), Some(2));
        assert_eq!(history.redo().map(|s| s.drawings.len()), Some(3));
        assert!(history.redo().is_none());
    }

    #[test]
    fn undo_at_first_entry_signals_clear() {
        let mut history = EditHistory::new_with_capacity(10);
        history.commit(snapshot_with_drawings(1));

        assert_eq!(history.undo(), UndoOutcome::Clear);
        assert_eq!(history.cursor(), None);

        // Redo von "vor dem ersten Eintrag" landet wieder auf Eintrag 0
        assert_eq!(history.redo().map(|s| s.drawings.len()), Some(1));
    }

    #[test]
    fn commit_truncates_forward_entries() {
        let mut history = EditHistory::new_with_capacity(10);
        history.commit(snapshot_with_drawings(1));
        history.commit(snapshot_with_drawings(2));
        let _ = history.undo();
        assert!(history.can_redo());

        history.commit(snapshot_with_drawings(7));

        assert!(!history.can_redo());
        assert_eq!(history.len(), 2);
        assert_eq!(history.cursor(), Some(1));
    }

    #[test]
    fn respects_max_depth_with_fifo_eviction() {
        let mut history = EditHistory::new_with_capacity(3);
        for i in 1..=5 {
            history.commit(snapshot_with_drawings(i));
        }

        assert_eq!(history.len(), 3);
        assert_eq!(restored_count(history.undo()), 4);
        assert_eq!(restored_count(history.undo()), 3);
        assert_eq!(history.undo(), UndoOutcome::Clear);
    }

    #[test]
    fn snapshots_are_independent_of_later_edits() {
        let mut live = Arc::new(vec![Drawing::new("a", DrawingStyle::default())]);
        let snapshot = HistorySnapshot {
            drawings: Arc::clone(&live),
            ..HistorySnapshot::default()
        };

        Arc::make_mut(&mut live)[0].id = "geändert".to_string();

        assert_eq!(snapshot.drawings[0].id, "a");
        assert_eq!(live[0].id, "geändert");
    }
}
