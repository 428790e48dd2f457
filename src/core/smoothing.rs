//! Erzeugt Drawings aus Freihand-Polylinien.
//!
//! `sharp` erzeugt Geraden zwischen aufeinanderfolgenden Punkten, `curve`
//! erzeugt kubische Segmente mit Catmull-Rom-Tangenten als Handles.

use glam::DVec2;

use super::drawing::{ControlPoint, Drawing, DrawingStyle, PathMode, PathSegment, PointType};

/// Mindestabstand, unter dem aufeinanderfolgende Punkte als Duplikat gelten.
const DUPLICATE_EPSILON: f64 = 1e-6;

/// Catmull-Rom-Tangente geteilt durch 3 → Bézier-Handle-Offset.
///
/// Für Rand-Punkte werden Phantom-Punkte gespiegelt, damit die Kurve
/// natürlich durch den ersten und letzten Punkt läuft.
fn catmull_rom_handle(points: &[DVec2], i: usize) -> DVec2 {
    let n = points.len();
    let prev = if i == 0 {
        2.0 * points[0] - points[1]
    } else {
        points[i - 1]
    };
    let next = if i + 1 == n {
        2.0 * points[n - 1] - points[n - 2]
    } else {
        points[i + 1]
    };
    (next - prev) / 6.0
}

/// Entfernt direkt aufeinanderfolgende (nahezu) identische Punkte.
fn dedup_consecutive(polyline: &[DVec2]) -> Vec<DVec2> {
    let mut result: Vec<DVec2> = Vec::with_capacity(polyline.len());
    for &p in polyline {
        if !p.is_finite() {
            continue;
        }
        if result
            .last()
            .is_some_and(|last| last.distance(p) < DUPLICATE_EPSILON)
        {
            continue;
        }
        result.push(p);
    }
    result
}

/// Baut eine Drawing aus einer Polylinie.
///
/// Punkt-IDs sind `p0, p1, …`; der erste Punkt ist `start`, der letzte `end`.
/// Der Modus kommt aus `style.path_mode`. Gibt `None` zurück, wenn nach dem
/// Entfernen von Duplikaten weniger als zwei Punkte übrig bleiben.
pub fn drawing_from_polyline(
    id: impl Into<String>,
    polyline: &[DVec2],
    style: DrawingStyle,
) -> Option<Drawing> {
    let points = dedup_consecutive(polyline);
    if points.len() < 2 {
        return None;
    }

    let mode = style.path_mode;
    let mut drawing = Drawing::new(id, style);
    let last = points.len() - 1;

    for (i, &position) in points.iter().enumerate() {
        let point_type = match i {
            0 => PointType::Start,
            i if i == last => PointType::End,
            _ => PointType::Control,
        };
        let mut point = ControlPoint::new(format!("p{i}"), position, point_type);
        if mode == PathMode::Curve {
            let tangent = catmull_rom_handle(&points, i);
            let handle_in = (i > 0).then_some(-tangent);
            let handle_out = (i < last).then_some(tangent);
            point = point.with_handles(handle_in, handle_out);
        }
        drawing.insert_point(point);
    }

    for i in 0..last {
        let from = format!("p{i}");
        let to = format!("p{}", i + 1);
        let segment = match mode {
            PathMode::Sharp => PathSegment::line(&from, &to),
            PathMode::Curve => PathSegment::cubic(&from, &to),
        };
        drawing.push_segment(segment);
    }

    log::debug!(
        "Drawing {} aus {} Polylinien-Punkten erzeugt ({:?})",
        drawing.id,
        points.len(),
        mode
    );
    Some(drawing)
}
