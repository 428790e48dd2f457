//! Playbook Diagram Library.
//! Geometrie- und Render-Kern für Football-Play-Diagramme, als Library
//! exportiert für Tests und Wiederverwendung.

pub mod app;
pub mod core;
pub mod io;
pub mod render;
pub mod shared;

pub use app::{AppCommand, AppController, EditHistory, EditorState, HistorySnapshot, UndoOutcome};
pub use core::{
    compute_bounding_box, transform_point, BoundingBox, CanvasPx, CanvasView, ControlPoint,
    Coordinate, CoordinateError, Drawing, DrawingStyle, FieldFeet, FieldGeometry, LineEnd,
    LineStyle, LinemanPosition, PathMode, PathSegment, Player, PointType, ScreenDelta, ScreenPx,
    ScreenRect, SegmentType,
};
pub use io::PlayFile;
pub use render::{capture_canvas_snapshot, compile_path, CanvasSnapshot};
pub use shared::EditorOptions;
