//! Application-Layer: Controller, State, Commands und Historie.

pub mod card_registry;
pub mod controller;
pub mod events;
pub mod handlers;
pub mod history;
pub mod render_scene;
/// Editor State
///
/// Hält den Canvas-Inhalt, die View und die Historie.
pub mod state;
pub mod transition;

pub use card_registry::CardRegistry;
pub use controller::AppController;
pub use events::AppCommand;
pub use history::{EditHistory, HistorySnapshot, UndoOutcome};
pub use render_scene::{build_canvas, build_card_transition, build_preview};
pub use state::EditorState;
pub use transition::{plan_card_transition, CardTransition};
