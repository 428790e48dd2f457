//! Core-Domänentypen: Koordinatenräume, Drawings, Spieler, Bounding-Box, Spatial-Index.

pub mod bounds;
/// Datenmodell für Zeichnungen
///
/// - Drawing: Pfad aus Kontrollpunkten und Segmenten
/// - ControlPoint: benannter Punkt mit optionalen Handle-Offsets
/// - PathSegment: Line / Quadratic / Cubic (zwei Kodierungen)
pub mod drawing;
pub mod field;
pub mod player;
pub mod segment;
pub mod smoothing;
pub mod spatial;
pub mod view;

pub use bounds::{
    compute_bounding_box, compute_scene_bounds, transform_point, BoundingBox, ViewportFit,
};
pub use drawing::{
    ControlPoint, Drawing, DrawingStyle, LineEnd, LineStyle, PathMode, PathSegment, PointType,
    SegmentType,
};
pub use field::{
    CanvasPx, Coordinate, CoordinateError, FieldFeet, FieldGeometry, ScreenDelta, ScreenPx,
    ScreenRect,
};
pub use player::{LinemanPosition, Player};
pub use segment::{path_length, resolve_segment, resolved_segments, ResolvedKind, ResolvedSegment};
pub use smoothing::drawing_from_polyline;
pub use spatial::{ControlPointIndex, ControlPointKey, PointMatch};
pub use view::CanvasView;
