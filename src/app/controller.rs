//! Application Controller für zentrale Command-Verarbeitung.

use super::{AppCommand, EditorState};

/// Führt Commands auf dem EditorState aus.
#[derive(Debug, Default)]
pub struct AppController;

impl AppController {
    /// Erstellt einen neuen Controller.
    pub fn new() -> Self {
        Self
    }

    /// Führt mutierende Commands auf dem EditorState aus.
    /// Dispatcht an Feature-Handler in `handlers/`.
    ///
    /// Jede Inhaltsänderung legt danach genau einen History-Eintrag an.
    pub fn handle_command(
        &mut self,
        state: &mut EditorState,
        command: AppCommand,
    ) -> anyhow::Result<()> {
        use super::handlers;

        let is_edit = command.is_content_edit();
        let changed = match command {
            // === Plays ===
            AppCommand::LoadPlay { play } => {
                handlers::file_io::load_play(state, play);
                false
            }
            AppCommand::LoadPlayFile { path } => {
                handlers::file_io::load_play_file(state, &path)?;
                false
            }
            AppCommand::SavePlayFile { path } => {
                handlers::file_io::save_play_file(state, &path)?;
                false
            }

            // === Drawings ===
            AppCommand::AddDrawing { drawing } => handlers::editing::add_drawing(state, drawing),
            AppCommand::AddDrawingFromPolyline { id, points, style } => {
                handlers::editing::add_drawing_from_polyline(state, id, &points, style)
            }
            AppCommand::MoveControlPoint {
                drawing_id,
                point_id,
                position,
            } => handlers::editing::move_control_point(state, &drawing_id, &point_id, position),
            AppCommand::SetPointHandles {
                drawing_id,
                point_id,
                handle_in,
                handle_out,
            } => handlers::editing::set_point_handles(
                state,
                &drawing_id,
                &point_id,
                handle_in,
                handle_out,
            ),
            AppCommand::RemoveControlPoint {
                drawing_id,
                point_id,
            } => handlers::editing::remove_control_point(state, &drawing_id, &point_id),
            AppCommand::TranslateDrawing { drawing_id, delta } => {
                handlers::editing::translate_drawing(state, &drawing_id, delta)
            }
            AppCommand::DeleteDrawing { drawing_id } => {
                handlers::editing::delete_drawing(state, &drawing_id)
            }

            // === Spieler ===
            AppCommand::AddPlayer { player } => handlers::editing::add_player(state, player),
            AppCommand::MovePlayer {
                player_id,
                position,
            } => handlers::editing::move_player(state, &player_id, position),
            AppCommand::AddLineman { lineman } => handlers::editing::add_lineman(state, lineman),
            AppCommand::MoveLineman {
                lineman_id,
                position,
            } => handlers::editing::move_lineman(state, &lineman_id, position),

            // === View ===
            AppCommand::PanView { delta } => {
                handlers::view::pan(state, delta);
                false
            }
            AppCommand::ZoomView { factor, anchor } => {
                handlers::view::zoom(state, factor, anchor)?;
                false
            }
            AppCommand::ZoomIn => {
                handlers::view::zoom_in(state)?;
                false
            }
            AppCommand::ZoomOut => {
                handlers::view::zoom_out(state)?;
                false
            }
            AppCommand::ResetView => {
                handlers::view::reset_view(state);
                false
            }

            // === Historie ===
            AppCommand::Undo => {
                handlers::history::undo(state);
                false
            }
            AppCommand::Redo => {
                handlers::history::redo(state);
                false
            }
            AppCommand::ClearCanvas => handlers::editing::clear_canvas(state),

            // === Karten ===
            AppCommand::RegisterCard { play_id, rect } => {
                handlers::cards::register_card(state, play_id, rect);
                false
            }
            AppCommand::UnregisterCard { play_id } => {
                handlers::cards::unregister_card(state, &play_id);
                false
            }
            AppCommand::SetCanvasBounds { rect } => {
                handlers::cards::set_canvas_bounds(state, rect);
                false
            }
        };

        if is_edit && changed {
            state.commit_snapshot();
        }

        Ok(())
    }
}
