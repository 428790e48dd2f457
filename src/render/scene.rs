//! Szenen-Compiler: Drawings und Spieler als SVG-Dokument.
//!
//! Z-Reihenfolge ist fest: erst alle Drawings, danach die Tokens
//! (Linemen, dann Spieler).

use glam::DVec2;

use super::path::{compile_path_with, format_coord, IdentityProjection, Projection};
use crate::core::{
    compute_scene_bounds, CanvasView, Drawing, LineEnd, LineStyle, LinemanPosition, Player,
    ViewportFit,
};
use crate::shared::EditorOptions;

/// Zielgröße einer Vorschau-Szene.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SceneViewport {
    /// Breite
    pub width: f64,
    /// Höhe
    pub height: f64,
    /// Innenabstand
    pub padding: f64,
}

impl SceneViewport {
    /// Erstellt einen Viewport.
    pub fn new(width: f64, height: f64, padding: f64) -> Self {
        Self {
            width,
            height,
            padding,
        }
    }

    /// Vorschau-Viewport aus den Optionen.
    pub fn preview(options: &EditorOptions) -> Self {
        Self::new(
            options.preview_width,
            options.preview_height,
            options.preview_padding,
        )
    }
}

/// Kompiliert eine Vorschau-Szene, eingepasst in `viewport`.
///
/// Die Fit-Box umfasst Drawings, Spieler und Linemen. Eine leere Szene ergibt
/// ein leeres SVG-Dokument in Viewport-Größe.
pub fn compile_scene(
    drawings: &[Drawing],
    players: &[Player],
    linemen: &[LinemanPosition],
    viewport: &SceneViewport,
    options: &EditorOptions,
) -> String {
    let mut svg = open_svg(viewport.width, viewport.height);

    if let Some(bbox) = compute_scene_bounds(drawings, players, linemen) {
        let fit = ViewportFit::new(&bbox, viewport.width, viewport.height, viewport.padding);
        let radius = options.player_radius_px * fit.scale();
        write_body(&mut svg, drawings, players, linemen, &fit, radius, options);
    }

    svg.push_str("</svg>\n");
    svg
}

/// Kompiliert die Editor-Szene in Canvas-Pixeln.
///
/// Drawings und Tokens liegen untransformiert in einer Gruppe, die den
/// Zoom/Pan der View als `transform` trägt.
pub fn compile_canvas_scene(
    drawings: &[Drawing],
    players: &[Player],
    linemen: &[LinemanPosition],
    view: &CanvasView,
    options: &EditorOptions,
) -> String {
    let mut svg = open_svg(options.canvas_width_px, options.canvas_height_px);
    svg.push_str(&format!(
        "  <g class=\"viewport\" transform=\"{}\">\n",
        view.svg_transform()
    ));
    write_body(
        &mut svg,
        drawings,
        players,
        linemen,
        &IdentityProjection,
        options.player_radius_px,
        options,
    );
    svg.push_str("  </g>\n</svg>\n");
    svg
}

fn open_svg(width: f64, height: f64) -> String {
    format!(
        "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"{w}\" height=\"{h}\" viewBox=\"0 0 {w} {h}\">\n",
        w = format_coord(width),
        h = format_coord(height)
    )
}

fn write_body(
    svg: &mut String,
    drawings: &[Drawing],
    players: &[Player],
    linemen: &[LinemanPosition],
    projection: &impl Projection,
    player_radius: f64,
    options: &EditorOptions,
) {
    write_markers(svg, drawings);

    svg.push_str("  <g class=\"drawings\">\n");
    for (index, drawing) in drawings.iter().enumerate() {
        write_drawing(svg, index, drawing, projection, options);
    }
    svg.push_str("  </g>\n");

    if !linemen.is_empty() {
        svg.push_str("  <g class=\"linemen\">\n");
        for lineman in linemen {
            write_lineman(svg, lineman, projection.project(lineman.position()), player_radius, options);
        }
        svg.push_str("  </g>\n");
    }

    svg.push_str("  <g class=\"players\">\n");
    for player in players {
        write_player(svg, player, projection.project(player.position()), player_radius, options);
    }
    svg.push_str("  </g>\n");
}

fn marker_id(index: usize, line_end: LineEnd) -> Option<String> {
    match line_end {
        LineEnd::None => None,
        LineEnd::Arrow => Some(format!("arrow-{index}")),
        LineEnd::TShape => Some(format!("tee-{index}")),
    }
}

fn write_markers(svg: &mut String, drawings: &[Drawing]) {
    let markers: Vec<String> = drawings
        .iter()
        .enumerate()
        .filter_map(|(index, drawing)| {
            let id = marker_id(index, drawing.style.line_end)?;
            let color = escape_xml(&drawing.style.color);
            let marker = match drawing.style.line_end {
                LineEnd::Arrow => format!(
                    "    <marker id=\"{id}\" viewBox=\"0 0 10 10\" refX=\"9\" refY=\"5\" markerWidth=\"6\" markerHeight=\"6\" orient=\"auto-start-reverse\"><path d=\"M 0 0 L 10 5 L 0 10 z\" fill=\"{color}\"/></marker>\n"
                ),
                LineEnd::TShape => format!(
                    "    <marker id=\"{id}\" viewBox=\"0 0 10 10\" refX=\"5\" refY=\"5\" markerWidth=\"6\" markerHeight=\"6\" orient=\"auto\"><path d=\"M 5 0 L 5 10\" stroke=\"{color}\" stroke-width=\"2\"/></marker>\n"
                ),
                LineEnd::None => return None,
            };
            Some(marker)
        })
        .collect();

    if markers.is_empty() {
        return;
    }
    svg.push_str("  <defs>\n");
    for marker in markers {
        svg.push_str(&marker);
    }
    svg.push_str("  </defs>\n");
}

fn write_drawing(
    svg: &mut String,
    index: usize,
    drawing: &Drawing,
    projection: &impl Projection,
    options: &EditorOptions,
) {
    let d = compile_path_with(drawing, projection);
    if d.is_empty() {
        log::trace!("Drawing {} ohne renderbare Segmente", drawing.id);
        return;
    }

    let style = &drawing.style;
    let mut attrs = format!(
        "d=\"{}\" fill=\"none\" stroke=\"{}\" stroke-width=\"{}\" stroke-linecap=\"round\" stroke-linejoin=\"round\"",
        d,
        escape_xml(&style.color),
        format_coord(style.stroke_width)
    );
    if style.line_style == LineStyle::Dashed {
        attrs.push_str(&format!(
            " stroke-dasharray=\"{}\"",
            escape_xml(&options.dash_pattern)
        ));
    }
    if let Some(id) = marker_id(index, style.line_end) {
        attrs.push_str(&format!(" marker-end=\"url(#{id})\""));
    }

    svg.push_str(&format!(
        "    <path data-drawing-id=\"{}\" {}/>\n",
        escape_xml(&drawing.id),
        attrs
    ));
}

fn write_player(
    svg: &mut String,
    player: &Player,
    center: DVec2,
    radius: f64,
    options: &EditorOptions,
) {
    let fill = player
        .color
        .as_deref()
        .unwrap_or(options.player_fill_color.as_str());
    svg.push_str(&format!(
        "    <circle data-player-id=\"{}\" cx=\"{}\" cy=\"{}\" r=\"{}\" fill=\"{}\" stroke=\"{}\" stroke-width=\"1.50\"/>\n",
        escape_xml(&player.id),
        format_coord(center.x),
        format_coord(center.y),
        format_coord(radius),
        escape_xml(fill),
        escape_xml(&options.player_stroke_color)
    ));

    if let Some(label) = player.label.as_deref().filter(|l| !l.is_empty()) {
        svg.push_str(&format!(
            "    <text x=\"{}\" y=\"{}\" font-size=\"{}\" text-anchor=\"middle\" dominant-baseline=\"central\" fill=\"{}\">{}</text>\n",
            format_coord(center.x),
            format_coord(center.y),
            format_coord(radius),
            escape_xml(&options.player_stroke_color),
            escape_xml(label)
        ));
    }
}

/// Lineman als Quadrat mit Kantenlänge `2 * half_size`, in den Spielerfarben.
fn write_lineman(
    svg: &mut String,
    lineman: &LinemanPosition,
    center: DVec2,
    half_size: f64,
    options: &EditorOptions,
) {
    svg.push_str(&format!(
        "    <rect data-lineman-id=\"{}\" x=\"{}\" y=\"{}\" width=\"{}\" height=\"{}\" fill=\"{}\" stroke=\"{}\" stroke-width=\"1.50\"/>\n",
        escape_xml(&lineman.id),
        format_coord(center.x - half_size),
        format_coord(center.y - half_size),
        format_coord(2.0 * half_size),
        format_coord(2.0 * half_size),
        escape_xml(&options.player_fill_color),
        escape_xml(&options.player_stroke_color)
    ));
}

/// Maskiert Text für XML-Attribute und -Inhalte.
pub fn escape_xml(value: &str) -> String {
    value
        .replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&apos;")
}
