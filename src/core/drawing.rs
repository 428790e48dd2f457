//! Datenmodell für Freihand-/Vektor-Zeichnungen.
//!
//! Eine [`Drawing`] besitzt ihre [`ControlPoint`]s exklusiv (Map id → Punkt)
//! und eine geordnete Liste von [`PathSegment`]s, die Punkte nur per ID
//! referenzieren. Das JSON-Format (camelCase) ist zugleich Dateiformat.

use glam::DVec2;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use super::field::Coordinate;

/// Rolle eines Kontrollpunkts im Pfad.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PointType {
    /// Startpunkt des Pfads
    Start,
    /// Endpunkt des Pfads
    End,
    /// Zwischen- oder Steuerpunkt
    #[default]
    Control,
}

/// Benannter Kontrollpunkt mit optionalen Bézier-Handles.
///
/// Handles sind **Offsets** relativ zum Punkt: Verschieben des Punkts
/// verschiebt die Tangenten mit.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ControlPoint {
    /// Eindeutig innerhalb der Drawing
    pub id: String,
    /// X-Position
    pub x: f64,
    /// Y-Position
    pub y: f64,
    /// Rolle im Pfad
    #[serde(rename = "type", default)]
    pub point_type: PointType,
    /// Eingehender Handle (Offset)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub handle_in: Option<Coordinate>,
    /// Ausgehender Handle (Offset)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub handle_out: Option<Coordinate>,
}

impl ControlPoint {
    /// Erstellt einen Punkt ohne Handles.
    pub fn new(id: impl Into<String>, position: DVec2, point_type: PointType) -> Self {
        Self {
            id: id.into(),
            x: position.x,
            y: position.y,
            point_type,
            handle_in: None,
            handle_out: None,
        }
    }

    /// Setzt beide Handle-Offsets (Builder).
    pub fn with_handles(mut self, handle_in: Option<DVec2>, handle_out: Option<DVec2>) -> Self {
        self.handle_in = handle_in.map(Coordinate::from);
        self.handle_out = handle_out.map(Coordinate::from);
        self
    }

    /// Position des Punkts.
    pub fn position(&self) -> DVec2 {
        DVec2::new(self.x, self.y)
    }

    /// Absolute Position des eingehenden Handles.
    pub fn handle_in_position(&self) -> Option<DVec2> {
        self.handle_in.map(|h| self.position() + h.to_vec2())
    }

    /// Absolute Position des ausgehenden Handles.
    pub fn handle_out_position(&self) -> Option<DVec2> {
        self.handle_out.map(|h| self.position() + h.to_vec2())
    }
}

/// Segmenttyp.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SegmentType {
    /// Gerade zum letzten Punkt
    Line,
    /// Quadratische Bézier `[control, end]`
    Quadratic,
    /// Kubische Bézier: `[from, to]` (Handles) oder Legacy `[cp1, cp2, end]`
    Cubic,
}

/// Ein zeichenbares Primitiv eines mehrteiligen Pfads.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PathSegment {
    /// Segmenttyp
    #[serde(rename = "type")]
    pub segment_type: SegmentType,
    /// Referenzierte Punkt-IDs in Reihenfolge
    pub point_ids: Vec<String>,
}

impl PathSegment {
    /// Gerade von `from` nach `to`.
    pub fn line(from: &str, to: &str) -> Self {
        Self::with_ids(SegmentType::Line, [from, to])
    }

    /// Quadratische Kurve mit Steuerpunkt `control` nach `end`.
    pub fn quadratic(control: &str, end: &str) -> Self {
        Self::with_ids(SegmentType::Quadratic, [control, end])
    }

    /// Kubische Kurve von `from` nach `to` über die Handles der Punkte.
    pub fn cubic(from: &str, to: &str) -> Self {
        Self::with_ids(SegmentType::Cubic, [from, to])
    }

    /// Kubische Kurve im Legacy-Format mit absoluten Steuerpunkten.
    pub fn cubic_legacy(cp1: &str, cp2: &str, end: &str) -> Self {
        Self::with_ids(SegmentType::Cubic, [cp1, cp2, end])
    }

    fn with_ids<const N: usize>(segment_type: SegmentType, ids: [&str; N]) -> Self {
        Self {
            segment_type,
            point_ids: ids.iter().map(|id| id.to_string()).collect(),
        }
    }

    /// Prüft ob das Segment die Punkt-ID referenziert.
    pub fn references(&self, point_id: &str) -> bool {
        self.point_ids.iter().any(|id| id == point_id)
    }
}

/// Linienart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LineStyle {
    /// Durchgezogen
    #[default]
    Solid,
    /// Gestrichelt
    Dashed,
}

/// Linienende.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum LineEnd {
    /// Kein Abschluss
    #[default]
    None,
    /// Pfeilspitze
    Arrow,
    /// Querbalken (Block)
    TShape,
}

/// Erzeugungsmodus beim Freihand-Zeichnen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PathMode {
    /// Gerade Segmente
    #[default]
    Sharp,
    /// Geglättete kubische Segmente
    Curve,
}

/// Darstellungsstil einer Drawing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DrawingStyle {
    /// Strichfarbe (CSS-Farbe)
    pub color: String,
    /// Strichbreite
    pub stroke_width: f64,
    /// Linienart
    pub line_style: LineStyle,
    /// Linienende
    pub line_end: LineEnd,
    /// Erzeugungsmodus
    pub path_mode: PathMode,
}

impl Default for DrawingStyle {
    fn default() -> Self {
        Self {
            color: "#000000".to_string(),
            stroke_width: 2.0,
            line_style: LineStyle::Solid,
            line_end: LineEnd::None,
            path_mode: PathMode::Sharp,
        }
    }
}

/// Persistierte Darstellung eines gezeichneten Pfads.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Drawing {
    /// Drawing-ID
    pub id: String,
    /// Kontrollpunkte (Map-Schlüssel == `ControlPoint::id`)
    #[serde(default)]
    pub points: IndexMap<String, ControlPoint>,
    /// Rückverweis auf einen Spieler (Besitz bleibt bei der Drawing)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub player_id: Option<String>,
    /// Punkt, der am Spieler verankert ist
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub linked_point_id: Option<String>,
    /// Segmente in Zeichenreihenfolge
    #[serde(default)]
    pub segments: Vec<PathSegment>,
    /// Darstellungsstil
    #[serde(default)]
    pub style: DrawingStyle,
    /// Opake Annotationen (werden unverändert durchgereicht)
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub annotations: Vec<serde_json::Value>,
}

impl Drawing {
    /// Erstellt eine leere Drawing.
    pub fn new(id: impl Into<String>, style: DrawingStyle) -> Self {
        Self {
            id: id.into(),
            points: IndexMap::new(),
            player_id: None,
            linked_point_id: None,
            segments: Vec::new(),
            style,
            annotations: Vec::new(),
        }
    }

    /// Fügt einen Punkt ein (ersetzt einen vorhandenen mit gleicher ID).
    pub fn insert_point(&mut self, point: ControlPoint) -> Option<ControlPoint> {
        self.points.insert(point.id.clone(), point)
    }

    /// Hängt ein Segment an.
    pub fn push_segment(&mut self, segment: PathSegment) {
        self.segments.push(segment);
    }

    /// Gibt den Punkt mit der ID zurück.
    pub fn point(&self, id: &str) -> Option<&ControlPoint> {
        self.points.get(id)
    }

    /// `true` wenn keine Segmente vorhanden sind (nichts zu zeichnen).
    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// Alle Punkt-IDs, die von Segmenten referenziert werden, aber fehlen.
    pub fn dangling_point_ids(&self) -> Vec<&str> {
        let mut dangling: Vec<&str> = Vec::new();
        for id in self.segments.iter().flat_map(|s| s.point_ids.iter()) {
            if !self.points.contains_key(id) && !dangling.contains(&id.as_str()) {
                dangling.push(id);
            }
        }
        dangling
    }

    /// Verschiebt einen Punkt; seine Handles wandern als Offsets mit.
    pub fn move_point(&mut self, id: &str, position: DVec2) -> bool {
        match self.points.get_mut(id) {
            Some(point) => {
                point.x = position.x;
                point.y = position.y;
                true
            }
            None => false,
        }
    }

    /// Setzt die Handle-Offsets eines Punkts.
    pub fn set_handles(
        &mut self,
        id: &str,
        handle_in: Option<DVec2>,
        handle_out: Option<DVec2>,
    ) -> bool {
        match self.points.get_mut(id) {
            Some(point) => {
                point.handle_in = handle_in.map(Coordinate::from);
                point.handle_out = handle_out.map(Coordinate::from);
                true
            }
            None => false,
        }
    }

    /// Verschiebt alle Punkte um `delta`.
    pub fn translate(&mut self, delta: DVec2) {
        for point in self.points.values_mut() {
            point.x += delta.x;
            point.y += delta.y;
        }
    }

    /// Entfernt einen Punkt samt aller Segmente, die ihn referenzieren.
    pub fn remove_point(&mut self, id: &str) -> Option<ControlPoint> {
        let removed = self.points.shift_remove(id)?;
        self.segments.retain(|segment| !segment.references(id));
        if self.linked_point_id.as_deref() == Some(id) {
            self.linked_point_id = None;
        }
        Some(removed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Drawing {
        let mut drawing = Drawing::new("d1", DrawingStyle::default());
        drawing.insert_point(ControlPoint::new("a", DVec2::new(0.0, 0.0), PointType::Start));
        drawing.insert_point(
            ControlPoint::new("b", DVec2::new(10.0, 0.0), PointType::End)
                .with_handles(Some(DVec2::new(-2.0, 3.0)), None),
        );
        drawing.push_segment(PathSegment::cubic("a", "b"));
        drawing
    }

    #[test]
    fn handles_follow_moved_point() {
        let mut drawing = sample();
        assert!(drawing.move_point("b", DVec2::new(20.0, 5.0)));

        let b = drawing.point("b").expect("Punkt b");
        assert_eq!(b.handle_in_position(), Some(DVec2::new(18.0, 8.0)));
    }

    #[test]
    fn move_unknown_point_is_noop() {
        let mut drawing = sample();
        assert!(!drawing.move_point("zz", DVec2::ZERO));
    }

    #[test]
    fn dangling_ids_are_reported_once() {
        let mut drawing = sample();
        drawing.push_segment(PathSegment::line("b", "ghost"));
        drawing.push_segment(PathSegment::line("ghost", "a"));
        assert_eq!(drawing.dangling_point_ids(), vec!["ghost"]);
    }

    #[test]
    fn remove_point_drops_referencing_segments() {
        let mut drawing = sample();
        drawing.linked_point_id = Some("a".to_string());

        let removed = drawing.remove_point("a");

        assert!(removed.is_some());
        assert!(drawing.segments.is_empty());
        assert!(drawing.linked_point_id.is_none());
    }

    #[test]
    fn json_uses_camel_case_wire_names() {
        let mut drawing = sample();
        drawing.style.line_end = LineEnd::TShape;
        let json = serde_json::to_value(&drawing).expect("serialisierbar");

        assert_eq!(json["segments"][0]["type"], "cubic");
        assert_eq!(json["segments"][0]["pointIds"][1], "b");
        assert_eq!(json["points"]["b"]["handleIn"]["x"], -2.0);
        assert_eq!(json["points"]["a"]["type"], "start");
        assert_eq!(json["style"]["lineEnd"], "tShape");
        assert_eq!(json["style"]["strokeWidth"], 2.0);
    }

    #[test]
    fn parses_minimal_json_with_defaults() {
        let json = r#"{
            "id": "d9",
            "points": { "p1": { "id": "p1", "x": 1.5, "y": 2.0, "type": "start" } },
            "segments": []
        }"#;
        let drawing: Drawing = serde_json::from_str(json).expect("gültiges JSON");
        assert_eq!(drawing.style, DrawingStyle::default());
        assert!(drawing.annotations.is_empty());
        assert_eq!(drawing.point("p1").map(|p| p.point_type), Some(PointType::Start));
    }
}
