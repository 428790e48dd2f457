//! Playbook Diagram CLI.
//!
//! Rendert Play-Dateien als SVG/PNG, erfasst Canvas-Snapshots und stößt den
//! Call-Sheet-Export an.

use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::{Parser, Subcommand};
use playbook_diagram::io::{CallSheetExporter, CallSheetJob, HttpCallSheetExporter, PlayFile};
use playbook_diagram::render::{
    capture_canvas_snapshot, compile_canvas_scene, compile_scene, render_png, CanvasContainer,
    SceneViewport,
};
use playbook_diagram::{AppCommand, AppController, EditorOptions, EditorState, ScreenRect};

/// Kommandozeilen-Argumente
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct CliArgs {
    /// Pfad zur Optionen-Datei (Standard: `playbook_diagram.toml` neben der Binary)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Play als SVG rendern
    Render {
        /// Play-Datei (JSON)
        play: PathBuf,
        /// Ausgabe-Datei (Standard: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
        /// Vorschau-Viewport statt Canvas-Szene
        #[arg(long, default_value_t = false)]
        preview: bool,
    },
    /// Vorschau eines Plays als PNG rendern
    Thumbnail {
        /// Play-Datei (JSON)
        play: PathBuf,
        /// Ausgabe-Datei (PNG)
        #[arg(short, long)]
        output: PathBuf,
        /// Skalierung gegenüber dem Vorschau-Viewport
        #[arg(long, default_value_t = 2.0)]
        scale: f32,
    },
    /// Routenlängen aller Drawings eines Plays in Feet ausgeben
    Measure {
        /// Play-Datei (JSON)
        play: PathBuf,
    },
    /// Ersten `<svg>`-Teilbaum eines Markups als Data-URL ausgeben
    Snapshot {
        /// Datei mit Container-Markup
        markup: PathBuf,
        /// Bildschirm-Breite des Containers
        #[arg(long)]
        width: f64,
        /// Bildschirm-Höhe des Containers
        #[arg(long)]
        height: f64,
    },
    /// Call-Sheet als PDF exportieren
    Callsheet {
        /// Export-Auftrag (JSON: playbookId, title, sections)
        job: PathBuf,
        /// Ausgabe-Datei (PDF)
        #[arg(short, long)]
        output: PathBuf,
        /// Basis-URL des Export-Dienstes (überschreibt die Optionen)
        #[arg(long)]
        base_url: Option<String>,
    },
    /// Standard-Optionen in die Optionen-Datei schreiben
    InitConfig,
}

fn main() -> anyhow::Result<()> {
    // Logger initialisieren
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .init();

    log::info!("Playbook Diagram v{} startet...", env!("CARGO_PKG_VERSION"));

    let args = CliArgs::parse();
    let config_path = args.config.unwrap_or_else(EditorOptions::config_path);
    let options = EditorOptions::load_from_file(&config_path);

    match args.command {
        Command::Render {
            play,
            output,
            preview,
        } => render(&options, &play, output.as_deref(), preview),
        Command::Thumbnail {
            play,
            output,
            scale,
        } => thumbnail(&options, &play, &output, scale),
        Command::Measure { play } => measure(options, &play),
        Command::Snapshot {
            markup,
            width,
            height,
        } => snapshot(&markup, width, height),
        Command::Callsheet {
            job,
            output,
            base_url,
        } => callsheet(&options, &job, &output, base_url),
        Command::InitConfig => options.save_to_file(&config_path),
    }
}

fn render(
    options: &EditorOptions,
    play_path: &Path,
    output: Option<&Path>,
    preview: bool,
) -> anyhow::Result<()> {
    let play = PlayFile::load(play_path)?;
    let svg = if preview {
        compile_scene(
            &play.drawings,
            &play.players,
            &play.lineman_positions,
            &SceneViewport::preview(options),
            options,
        )
    } else {
        let view = options
            .canvas_view()
            .context("Ungültige Zoom-Grenzen in den Optionen")?;
        compile_canvas_scene(
            &play.drawings,
            &play.players,
            &play.lineman_positions,
            &view,
            options,
        )
    };
    write_or_print(output, svg.as_bytes())
}

fn thumbnail(
    options: &EditorOptions,
    play_path: &Path,
    output: &Path,
    scale: f32,
) -> anyhow::Result<()> {
    let play = PlayFile::load(play_path)?;
    let svg = compile_scene(
        &play.drawings,
        &play.players,
        &play.lineman_positions,
        &SceneViewport::preview(options),
        options,
    );
    let png = render_png(&svg, scale)?;
    write_or_print(Some(output), &png)
}

fn measure(options: EditorOptions, play_path: &Path) -> anyhow::Result<()> {
    let mut state = EditorState::from_options(options)?;
    AppController::new().handle_command(
        &mut state,
        AppCommand::LoadPlayFile {
            path: play_path.to_string_lossy().into_owned(),
        },
    )?;

    for drawing in state.drawings() {
        if let Some(feet) = state.drawing_length_feet(&drawing.id) {
            println!("{}\t{:.1} ft", drawing.id, feet);
        }
    }
    Ok(())
}

fn snapshot(markup_path: &Path, width: f64, height: f64) -> anyhow::Result<()> {
    let markup = std::fs::read_to_string(markup_path)
        .with_context(|| format!("Markup nicht lesbar: {}", markup_path.display()))?;
    let container = CanvasContainer::new(markup, ScreenRect::new(0.0, 0.0, width, height));
    let snapshot = capture_canvas_snapshot(Some(&container))
        .context("Kein <svg> im Markup gefunden")?;
    println!("{}", snapshot.data_url);
    Ok(())
}

fn callsheet(
    options: &EditorOptions,
    job_path: &Path,
    output: &Path,
    base_url: Option<String>,
) -> anyhow::Result<()> {
    let content = std::fs::read_to_string(job_path)
        .with_context(|| format!("Export-Auftrag nicht lesbar: {}", job_path.display()))?;
    let job: CallSheetJob =
        serde_json::from_str(&content).context("Export-Auftrag ist ungültiges JSON")?;

    let base_url = base_url.unwrap_or_else(|| options.export_base_url.clone());
    let exporter = HttpCallSheetExporter::new(base_url, options.export_max_response_bytes);
    let pdf = exporter.export(&job.to_request())?;
    write_or_print(Some(output), &pdf)
}

fn write_or_print(output: Option<&Path>, bytes: &[u8]) -> anyhow::Result<()> {
    match output {
        Some(path) => {
            std::fs::write(path, bytes)
                .with_context(|| format!("Ausgabe nicht schreibbar: {}", path.display()))?;
            log::info!("Geschrieben: {} ({} Bytes)", path.display(), bytes.len());
        }
        None => {
            use std::io::Write;
            std::io::stdout()
                .write_all(bytes)
                .context("Ausgabe auf stdout fehlgeschlagen")?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_consistent() {
        CliArgs::command().debug_assert();
    }

    #[test]
    fn parses_render_subcommand() {
        let args = CliArgs::parse_from(["playbook-diagram", "render", "play.json", "--preview"]);
        assert!(matches!(args.command, Command::Render { preview: true, .. }));
    }

    #[test]
    fn parses_measure_subcommand() {
        let args = CliArgs::parse_from(["playbook-diagram", "measure", "play.json"]);
        assert!(matches!(args.command, Command::Measure { .. }));
    }
}
