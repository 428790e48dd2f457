//! Spatial-Index (KD-Tree) für das Picking von Kontrollpunkten.

use glam::DVec2;
use kiddo::{KdTree, SquaredEuclidean};

use super::drawing::Drawing;

/// Schlüssel eines indexierten Kontrollpunkts.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ControlPointKey {
    /// ID der Drawing
    pub drawing_id: String,
    /// ID des Punkts innerhalb der Drawing
    pub point_id: String,
}

/// Ergebnis einer Distanzabfrage gegen den Index.
#[derive(Debug, Clone, PartialEq)]
pub struct PointMatch {
    /// Gefundener Punkt
    pub key: ControlPointKey,
    /// Euklidische Distanz zum Suchpunkt
    pub distance: f64,
}

/// Read-only KD-Tree über alle Kontrollpunkte einer Drawing-Menge.
///
/// Wird nach jeder Mutation neu gebaut; die Drawings selbst bleiben die
/// einzige Quelle der Wahrheit.
#[derive(Debug, Clone)]
pub struct ControlPointIndex {
    tree: KdTree<f64, 2>,
    keys: Vec<ControlPointKey>,
}

impl ControlPointIndex {
    /// Erstellt einen leeren Index.
    pub fn empty() -> Self {
        Self {
            tree: (&Vec::<[f64; 2]>::new()).into(),
            keys: Vec::new(),
        }
    }

    /// Baut den Index aus allen Punkten der Drawings (Reihenfolge wie gespeichert).
    pub fn from_drawings(drawings: &[Drawing]) -> Self {
        let mut keys = Vec::new();
        let mut entries: Vec<[f64; 2]> = Vec::new();

        for drawing in drawings {
            for point in drawing.points.values() {
                keys.push(ControlPointKey {
                    drawing_id: drawing.id.clone(),
                    point_id: point.id.clone(),
                });
                entries.push([point.x, point.y]);
            }
        }

        Self {
            tree: (&entries).into(),
            keys,
        }
    }

    /// Anzahl indexierter Punkte.
    pub fn len(&self) -> usize {
        self.keys.len()
    }

    /// `true` wenn keine Punkte im Index liegen.
    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    /// Nächster Punkt zur Query-Position.
    pub fn nearest(&self, query: DVec2) -> Option<PointMatch> {
        if self.is_empty() {
            return None;
        }

        let result = self
            .tree
            .nearest_one::<SquaredEuclidean>(&[query.x, query.y]);
        let key = self.keys.get(result.item as usize)?.clone();

        Some(PointMatch {
            key,
            distance: result.distance.sqrt(),
        })
    }

    /// Alle Punkte innerhalb von `radius`, aufsteigend nach Distanz.
    pub fn within_radius(&self, query: DVec2, radius: f64) -> Vec<PointMatch> {
        if self.is_empty() || radius.is_sign_negative() || !radius.is_finite() {
            return Vec::new();
        }

        let mut results = self
            .tree
            .within::<SquaredEuclidean>(&[query.x, query.y], radius * radius)
            .into_iter()
            .filter_map(|entry| {
                let key = self.keys.get(entry.item as usize)?.clone();
                Some(PointMatch {
                    key,
                    distance: entry.distance.sqrt(),
                })
            })
            .collect::<Vec<_>>();

        results.sort_by(|a, b| a.distance.total_cmp(&b.distance));
        results
    }

    /// Nächster Punkt, sofern er innerhalb der Pick-Toleranz liegt.
    pub fn pick(&self, query: DVec2, tolerance: f64) -> Option<PointMatch> {
        self.nearest(query).filter(|m| m.distance <= tolerance)
    }
}

impl Default for ControlPointIndex {
    fn default() -> Self {
        Self::empty()
    }
}
