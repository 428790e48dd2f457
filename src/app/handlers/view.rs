//! Handler für Zoom und Pan des Canvas.

use crate::app::EditorState;
use crate::core::{ScreenDelta, ScreenPx};

/// Setzt Zoom und Pan zurück.
pub fn reset_view(state: &mut EditorState) {
    state.view.reset();
}

/// Verschiebt die View 1:1 um ein Screen-Delta.
pub fn pan(state: &mut EditorState, delta: ScreenDelta) {
    state.view.pan_by(delta);
}

/// Zoomt um `factor`, mit Anker um diesen Screen-Punkt.
///
/// Ungültige Faktoren (≤ 0, NaN, ∞) werden als Fehler gemeldet.
pub fn zoom(state: &mut EditorState, factor: f64, anchor: Option<ScreenPx>) -> anyhow::Result<()> {
    match anchor {
        Some(anchor) => state.view.zoom_about(anchor, factor)?,
        None => state.view.zoom_by(factor)?,
    }
    log::debug!("Zoom: {:.3}", state.view.zoom());
    Ok(())
}

/// Zoomt stufenweise hinein.
pub fn zoom_in(state: &mut EditorState) -> anyhow::Result<()> {
    let step = state.options.zoom_step;
    zoom(state, step, None)
}

/// Zoomt stufenweise heraus.
pub fn zoom_out(state: &mut EditorState) -> anyhow::Result<()> {
    let step = state.options.zoom_step;
    zoom(state, 1.0 / step, None)
}
