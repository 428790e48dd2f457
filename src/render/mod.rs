//! Rendering: Pfad- und Szenen-Compiler (SVG), Canvas-Snapshots, PNG-Thumbnails.

pub mod path;
pub mod scene;
pub mod snapshot;
pub mod thumbnail;

pub use path::{compile_path, compile_path_with, format_coord, IdentityProjection, Projection};
pub use scene::{compile_canvas_scene, compile_scene, escape_xml, SceneViewport};
pub use snapshot::{capture_canvas_snapshot, CanvasContainer, CanvasSnapshot};
pub use thumbnail::render_png;
