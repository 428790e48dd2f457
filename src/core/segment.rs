//! Auflösung von Pfad-Segmenten in absolute Geometrie.
//!
//! Beide Cubic-Kodierungen (Handles `[from, to]` und Legacy `[cp1, cp2, end]`)
//! werden ausschließlich hier in eine gemeinsame absolute Darstellung
//! übersetzt. Path-Compiler, Längenberechnung und Tests arbeiten nur noch mit
//! [`ResolvedSegment`].

use glam::DVec2;
use indexmap::IndexMap;

use super::drawing::{ControlPoint, Drawing, PathSegment, SegmentType};

/// Absolute Geometrie eines Segments.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ResolvedKind {
    /// Gerade zum Endpunkt
    Line {
        /// Endpunkt
        end: DVec2,
    },
    /// Quadratische Bézier
    Quadratic {
        /// Steuerpunkt
        control: DVec2,
        /// Endpunkt
        end: DVec2,
    },
    /// Kubische Bézier
    Cubic {
        /// Erster Steuerpunkt
        cp1: DVec2,
        /// Zweiter Steuerpunkt
        cp2: DVec2,
        /// Endpunkt
        end: DVec2,
    },
}

/// Ein aufgelöstes Segment.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ResolvedSegment {
    /// Erster Punkt des Segments; wird als `M` genutzt, falls es das erste
    /// gerenderte Segment ist.
    pub first: DVec2,
    /// Geometrie
    pub kind: ResolvedKind,
}

impl ResolvedSegment {
    /// Endpunkt des Segments (neuer Pfad-Cursor).
    pub fn end(&self) -> DVec2 {
        match self.kind {
            ResolvedKind::Line { end }
            | ResolvedKind::Quadratic { end, .. }
            | ResolvedKind::Cubic { end, .. } => end,
        }
    }

    /// Approximierte Bogenlänge ab `start`.
    pub fn length_from(&self, start: DVec2, samples: usize) -> f64 {
        match self.kind {
            ResolvedKind::Line { end } => start.distance(end),
            ResolvedKind::Quadratic { control, end } => {
                approx_length(|t| quadratic_bezier(start, control, end, t), samples)
            }
            ResolvedKind::Cubic { cp1, cp2, end } => {
                approx_length(|t| cubic_bezier(start, cp1, cp2, end, t), samples)
            }
        }
    }
}

/// Löst ein Segment gegen die Punkt-Map auf.
///
/// `None` bei falscher Anzahl IDs oder fehlendem Punkt; der Aufrufer
/// überspringt das Segment dann.
/// - `line`: ≥ 2 IDs, erster und letzter Punkt
/// - `quadratic`: genau 2 IDs `[control, end]`
/// - `cubic` mit 2 IDs: `from + handleOut`, `to + handleIn` (fehlender Handle = Offset 0)
/// - `cubic` mit ≥ 3 IDs: Legacy, die ersten drei als `[cp1, cp2, end]`
pub fn resolve_segment(
    segment: &PathSegment,
    points: &IndexMap<String, ControlPoint>,
) -> Option<ResolvedSegment> {
    let ids = &segment.point_ids;
    let lookup = |id: &String| points.get(id);

    match segment.segment_type {
        SegmentType::Line => {
            if ids.len() < 2 {
                return None;
            }
            let first = lookup(&ids[0])?.position();
            let end = lookup(&ids[ids.len() - 1])?.position();
            Some(ResolvedSegment {
                first,
                kind: ResolvedKind::Line { end },
            })
        }
        SegmentType::Quadratic => {
            let [control, end] = ids.as_slice() else {
                return None;
            };
            let control = lookup(control)?.position();
            let end = lookup(end)?.position();
            Some(ResolvedSegment {
                first: control,
                kind: ResolvedKind::Quadratic { control, end },
            })
        }
        SegmentType::Cubic => match ids.as_slice() {
            [from, to] => {
                let from = lookup(from)?;
                let to = lookup(to)?;
                let cp1 = from.handle_out_position().unwrap_or_else(|| from.position());
                let cp2 = to.handle_in_position().unwrap_or_else(|| to.position());
                Some(ResolvedSegment {
                    first: from.position(),
                    kind: ResolvedKind::Cubic {
                        cp1,
                        cp2,
                        end: to.position(),
                    },
                })
            }
            [cp1, cp2, end, ..] => {
                let cp1 = lookup(cp1)?.position();
                let cp2 = lookup(cp2)?.position();
                let end = lookup(end)?.position();
                Some(ResolvedSegment {
                    first: cp1,
                    kind: ResolvedKind::Cubic { cp1, cp2, end },
                })
            }
            _ => None,
        },
    }
}

/// Alle auflösbaren Segmente einer Drawing in Zeichenreihenfolge.
///
/// Nicht auflösbare Segmente werden übersprungen (Trace-Log).
pub fn resolved_segments(drawing: &Drawing) -> impl Iterator<Item = ResolvedSegment> + '_ {
    drawing
        .segments
        .iter()
        .enumerate()
        .filter_map(|(index, segment)| {
            let resolved = resolve_segment(segment, &drawing.points);
            if resolved.is_none() {
                log::trace!(
                    "Drawing {}: Segment {} ({:?}, {} IDs) nicht auflösbar, übersprungen",
                    drawing.id,
                    index,
                    segment.segment_type,
                    segment.point_ids.len()
                );
            }
            resolved
        })
}

/// Approximierte Pfadlänge einer Drawing (Einheit wie die Punkte).
pub fn path_length(drawing: &Drawing) -> f64 {
    let mut cursor: Option<DVec2> = None;
    let mut length = 0.0;
    for segment in resolved_segments(drawing) {
        let start = cursor.unwrap_or(segment.first);
        length += segment.length_from(start, 64);
        cursor = Some(segment.end());
    }
    length
}

/// Approximierte Kurvenlänge über Polylinien-Segmente.
pub fn approx_length(positions_fn: impl Fn(f64) -> DVec2, samples: usize) -> f64 {
    let samples = samples.max(1);
    let mut length = 0.0;
    let mut prev = positions_fn(0.0);
    for i in 1..=samples {
        let t = i as f64 / samples as f64;
        let p = positions_fn(t);
        length += prev.distance(p);
        prev = p;
    }
    length
}

/// B(t) = (1-t)²·P0 + 2(1-t)t·P1 + t²·P2
pub fn quadratic_bezier(p0: DVec2, p1: DVec2, p2: DVec2, t: f64) -> DVec2 {
    let inv = 1.0 - t;
    inv * inv * p0 + 2.0 * inv * t * p1 + t * t * p2
}

/// B(t) = (1-t)³·P0 + 3(1-t)²t·P1 + 3(1-t)t²·P2 + t³·P3
pub fn cubic_bezier(p0: DVec2, p1: DVec2, p2: DVec2, p3: DVec2, t: f64) -> DVec2 {
    let inv = 1.0 - t;
    inv * inv * inv * p0 + 3.0 * inv * inv * t * p1 + 3.0 * inv * t * t * p2 + t * t * t * p3
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{DrawingStyle, PointType};
    use approx::assert_relative_eq;

    fn points(entries: &[(&str, DVec2)]) -> IndexMap<String, ControlPoint> {
        entries
            .iter()
            .map(|(id, p)| (id.to_string(), ControlPoint::new(*id, *p, PointType::Control)))
            .collect()
    }

    #[test]
    fn handle_cubic_resolves_to_absolute_control_points() {
        let mut map = points(&[("a", DVec2::new(0.0, 0.0)), ("b", DVec2::new(10.0, 0.0))]);
        map["a"].handle_out = Some(DVec2::new(2.0, 4.0).into());
        map["b"].handle_in = Some(DVec2::new(-2.0, 4.0).into());

        let resolved = resolve_segment(&PathSegment::cubic("a", "b"), &map).expect("auflösbar");

        assert_eq!(resolved.first, DVec2::new(0.0, 0.0));
        assert_eq!(
            resolved.kind,
            ResolvedKind::Cubic {
                cp1: DVec2::new(2.0, 4.0),
                cp2: DVec2::new(8.0, 4.0),
                end: DVec2::new(10.0, 0.0),
            }
        );
    }

    #[test]
    fn missing_handle_is_zero_offset() {
        let map = points(&[("a", DVec2::new(1.0, 1.0)), ("b", DVec2::new(5.0, 5.0))]);
        let resolved = resolve_segment(&PathSegment::cubic("a", "b"), &map).expect("auflösbar");
        assert_eq!(
            resolved.kind,
            ResolvedKind::Cubic {
                cp1: DVec2::new(1.0, 1.0),
                cp2: DVec2::new(5.0, 5.0),
                end: DVec2::new(5.0, 5.0),
            }
        );
    }

    #[test]
    fn legacy_cubic_uses_absolute_positions() {
        let map = points(&[
            ("c1", DVec2::new(1.0, 2.0)),
            ("c2", DVec2::new(3.0, 4.0)),
            ("e", DVec2::new(5.0, 6.0)),
        ]);
        let resolved =
            resolve_segment(&PathSegment::cubic_legacy("c1", "c2", "e"), &map).expect("auflösbar");
        assert_eq!(resolved.first, DVec2::new(1.0, 2.0));
        assert_eq!(resolved.end(), DVec2::new(5.0, 6.0));
    }

    #[test]
    fn dangling_or_wrong_arity_is_unresolved() {
        let map = points(&[("a", DVec2::ZERO), ("b", DVec2::ONE)]);

        assert!(resolve_segment(&PathSegment::line("a", "ghost"), &map).is_none());
        let short = PathSegment {
            segment_type: SegmentType::Cubic,
            point_ids: vec!["a".to_string()],
        };
        assert!(resolve_segment(&short, &map).is_none());
        let long_quad = PathSegment {
            segment_type: SegmentType::Quadratic,
            point_ids: vec!["a".to_string(), "b".to_string(), "a".to_string()],
        };
        assert!(resolve_segment(&long_quad, &map).is_none());
    }

    #[test]
    fn path_length_of_polyline() {
        let mut drawing = Drawing::new("d", DrawingStyle::default());
        drawing.points = points(&[
            ("a", DVec2::new(0.0, 0.0)),
            ("b", DVec2::new(3.0, 4.0)),
            ("c", DVec2::new(3.0, 10.0)),
        ]);
        drawing.push_segment(PathSegment::line("a", "b"));
        drawing.push_segment(PathSegment::line("b", "c"));

        assert_relative_eq!(path_length(&drawing), 11.0);
    }

    #[test]
    fn straight_cubic_length_matches_chord() {
        let p0 = DVec2::new(0.0, 0.0);
        let p3 = DVec2::new(9.0, 0.0);
        let length = approx_length(
            |t| cubic_bezier(p0, DVec2::new(3.0, 0.0), DVec2::new(6.0, 0.0), p3, t),
            32,
        );
        assert_relative_eq!(length, 9.0, epsilon = 1e-9);
    }
}
