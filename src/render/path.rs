//! Übersetzt eine Drawing in einen SVG-Pfad-String (`d`-Attribut).

use glam::DVec2;

use crate::core::{resolved_segments, BoundingBox, Drawing, ResolvedKind, ViewportFit};

/// Abbildung von Drawing-Koordinaten in Ausgabe-Koordinaten.
pub trait Projection {
    /// Projiziert einen Punkt.
    fn project(&self, point: DVec2) -> DVec2;
}

impl Projection for ViewportFit {
    fn project(&self, point: DVec2) -> DVec2 {
        self.apply(point)
    }
}

/// Keine Transformation (Canvas-Szene: Zoom/Pan übernimmt die Gruppe).
#[derive(Debug, Clone, Copy, Default)]
pub struct IdentityProjection;

impl Projection for IdentityProjection {
    fn project(&self, point: DVec2) -> DVec2 {
        point
    }
}

/// Formatiert eine Koordinate mit 2 Nachkommastellen; `-0.00` wird zu `0.00`.
pub fn format_coord(value: f64) -> String {
    let text = format!("{:.2}", value);
    if text == "-0.00" {
        "0.00".to_string()
    } else {
        text
    }
}

fn push_point(parts: &mut Vec<String>, p: DVec2) {
    parts.push(format_coord(p.x));
    parts.push(format_coord(p.y));
}

/// Kompiliert eine Drawing in den Vorschau-Viewport.
///
/// Leere Segmentliste → leerer String. Alle Punkte werden mit
/// [`ViewportFit`] aus `bbox` in `viewport_width × viewport_height`
/// (mit `padding`) abgebildet.
pub fn compile_path(
    drawing: &Drawing,
    bbox: &BoundingBox,
    viewport_width: f64,
    viewport_height: f64,
    padding: f64,
) -> String {
    if drawing.is_empty() {
        return String::new();
    }
    let fit = ViewportFit::new(bbox, viewport_width, viewport_height, padding);
    compile_path_with(drawing, &fit)
}

/// Kompiliert eine Drawing mit beliebiger Projektion.
///
/// Das erste tatsächlich gerenderte Segment setzt `M` auf seinen ersten
/// Punkt. Nicht auflösbare Segmente werden übersprungen. Befehle sind durch
/// einzelne Leerzeichen getrennt.
pub fn compile_path_with(drawing: &Drawing, projection: &impl Projection) -> String {
    let mut parts: Vec<String> = Vec::new();

    for segment in resolved_segments(drawing) {
        if parts.is_empty() {
            parts.push("M".to_string());
            push_point(&mut parts, projection.project(segment.first));
        }

        match segment.kind {
            ResolvedKind::Line { end } => {
                parts.push("L".to_string());
                push_point(&mut parts, projection.project(end));
            }
            ResolvedKind::Quadratic { control, end } => {
                parts.push("Q".to_string());
                push_point(&mut parts, projection.project(control));
                push_point(&mut parts, projection.project(end));
            }
            ResolvedKind::Cubic { cp1, cp2, end } => {
                parts.push("C".to_string());
                push_point(&mut parts, projection.project(cp1));
                push_point(&mut parts, projection.project(cp2));
                push_point(&mut parts, projection.project(end));
            }
        }
    }

    parts.join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{compute_bounding_box, ControlPoint, DrawingStyle, PathSegment, PointType};

    fn line(a: DVec2, b: DVec2) -> Drawing {
        let mut drawing = Drawing::new("d", DrawingStyle::default());
        drawing.insert_point(ControlPoint::new("p1", a, PointType::Start));
        drawing.insert_point(ControlPoint::new("p2", b, PointType::End));
        drawing.push_segment(PathSegment::line("p1", "p2"));
        drawing
    }

    #[test]
    fn format_coord_normalizes_negative_zero() {
        assert_eq!(format_coord(-0.0), "0.00");
        assert_eq!(format_coord(-0.001), "0.00");
        assert_eq!(format_coord(-1.5), "-1.50");
        assert_eq!(format_coord(27.75), "27.75");
    }

    #[test]
    fn horizontal_line_in_preview_viewport() {
        let drawing = line(DVec2::new(80.0, 45.0), DVec2::new(100.0, 45.0));
        let bbox = compute_bounding_box(std::slice::from_ref(&drawing)).expect("Bounds");

        let path = compile_path(&drawing, &bbox, 100.0, 60.0, 5.0);

        assert_eq!(path, "M 5.00 27.75 L 95.00 27.75");
    }

    #[test]
    fn empty_drawing_compiles_to_empty_string() {
        let drawing = Drawing::new("leer", DrawingStyle::default());
        let bbox = BoundingBox::from_point(DVec2::ZERO);
        assert_eq!(compile_path(&drawing, &bbox, 100.0, 100.0, 0.0), "");
    }

    #[test]
    fn dangling_first_segment_moves_m_to_next() {
        let mut drawing = line(DVec2::new(0.0, 0.0), DVec2::new(10.0, 0.0));
        drawing.segments.insert(0, PathSegment::line("ghost", "p2"));
        drawing.push_segment(PathSegment::quadratic("p1", "p2"));

        let path = compile_path_with(&drawing, &IdentityProjection);

        assert_eq!(path, "M 0.00 0.00 L 10.00 0.00 Q 0.00 0.00 10.00 0.00");
    }

    #[test]
    fn only_dangling_segments_yield_empty_path() {
        let mut drawing = Drawing::new("d", DrawingStyle::default());
        drawing.push_segment(PathSegment::line("a", "b"));
        assert_eq!(compile_path_with(&drawing, &IdentityProjection), "");
    }
}
