//! Geteilte Typen für layer-übergreifende Verträge.
//!
//! Enthält Typen, die zwischen `app`, `render` und `io` geteilt werden,
//! um direkte Abhängigkeiten zu vermeiden.

pub mod options;

pub use options::EditorOptions;
pub use options::{HISTORY_MAX_DEPTH, PICK_RADIUS_PX};
