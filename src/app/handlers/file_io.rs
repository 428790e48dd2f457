//! Handler für Play-Dateien (Laden, Speichern).

use std::path::Path;
use std::sync::Arc;

use crate::app::EditorState;
use crate::io::PlayFile;

/// Lädt ein Play in den Editor.
///
/// Ersetzt den Inhalt, setzt die View zurück und startet eine neue Historie,
/// deren erster Eintrag der geladene Stand ist.
pub fn load_play(state: &mut EditorState, play: PlayFile) {
    log::info!(
        "Play {:?} geladen: {} Drawings, {} Spieler, {} Lineman",
        play.name,
        play.drawings.len(),
        play.players.len(),
        play.lineman_positions.len()
    );

    state.play_name = Some(play.name);
    state.drawings = Arc::new(play.drawings);
    state.players = Arc::new(play.players);
    state.lineman_positions = Arc::new(play.lineman_positions);
    state.view.reset();

    state.history.clear();
    state.commit_snapshot();
}

/// Lädt eine Play-Datei von der Platte.
pub fn load_play_file(state: &mut EditorState, path: &str) -> anyhow::Result<()> {
    let play = PlayFile::load(Path::new(path))?;
    load_play(state, play);
    Ok(())
}

/// Speichert den aktuellen Inhalt als Play-Datei.
pub fn save_play_file(state: &EditorState, path: &str) -> anyhow::Result<()> {
    let play = PlayFile {
        name: state.play_name.clone().unwrap_or_default(),
        drawings: state.drawings.to_vec(),
        players: state.players.to_vec(),
        lineman_positions: state.lineman_positions.to_vec(),
    };
    play.save(Path::new(path))
}
