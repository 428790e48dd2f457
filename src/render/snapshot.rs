//! Canvas-Snapshot für den Übergang Karte → Canvas.
//!
//! Kopiert den ersten `<svg>`-Teilbaum eines Containers als eigenständiges
//! Dokument und kodiert ihn als `data:`-URL. Die Quelle wird nur gelesen.

use base64::prelude::*;
use quick_xml::events::{BytesStart, Event};
use quick_xml::{Reader, Writer};

use crate::core::ScreenRect;

const SVG_NAMESPACE: &str = "http://www.w3.org/2000/svg";
const DATA_URL_PREFIX: &str = "data:image/svg+xml;base64,";

/// Gerenderter Canvas-Container: Markup plus Bildschirm-Rechteck.
#[derive(Debug, Clone, PartialEq)]
pub struct CanvasContainer {
    /// Markup des Containers (enthält irgendwo ein `<svg>`)
    pub markup: String,
    /// Bildschirm-Rechteck des Containers
    pub bounds: ScreenRect,
}

impl CanvasContainer {
    /// Erstellt einen Container.
    pub fn new(markup: impl Into<String>, bounds: ScreenRect) -> Self {
        Self {
            markup: markup.into(),
            bounds,
        }
    }
}

/// Erfasstes Bild des Canvas.
#[derive(Debug, Clone, PartialEq)]
pub struct CanvasSnapshot {
    /// `data:image/svg+xml;base64,…`
    pub data_url: String,
    /// Breite des Containers auf dem Bildschirm
    pub width: f64,
    /// Höhe des Containers auf dem Bildschirm
    pub height: f64,
}

impl CanvasSnapshot {
    /// Dekodiert das eingebettete SVG-Dokument.
    pub fn svg_markup(&self) -> Option<String> {
        let encoded = self.data_url.strip_prefix(DATA_URL_PREFIX)?;
        let bytes = BASE64_STANDARD.decode(encoded).ok()?;
        String::from_utf8(bytes).ok()
    }
}

/// Erfasst den Canvas als Bild.
///
/// `None` wenn kein Container vorhanden ist, er kein `<svg>` enthält oder
/// das Markup nicht lesbar ist.
pub fn capture_canvas_snapshot(container: Option<&CanvasContainer>) -> Option<CanvasSnapshot> {
    let container = container?;
    let svg = extract_first_svg(&container.markup)?;

    Some(CanvasSnapshot {
        data_url: format!("{DATA_URL_PREFIX}{}", BASE64_STANDARD.encode(svg)),
        width: container.bounds.width,
        height: container.bounds.height,
    })
}

fn is_svg(e: &BytesStart<'_>) -> bool {
    e.local_name().as_ref() == b"svg"
}

/// Setzt `xmlns`, falls das Wurzelelement keins trägt.
fn with_namespace(e: BytesStart<'_>) -> BytesStart<'static> {
    let has_xmlns = e
        .attributes()
        .with_checks(false)
        .flatten()
        .any(|attr| attr.key.as_ref() == b"xmlns");
    let mut root = e.into_owned();
    if !has_xmlns {
        root.push_attribute(("xmlns", SVG_NAMESPACE));
    }
    root
}

/// Kopiert den ersten `<svg>`-Teilbaum per Event-Kopie in ein neues Dokument.
fn extract_first_svg(markup: &str) -> Option<Vec<u8>> {
    let mut reader = Reader::from_str(markup);
    reader.config_mut().check_end_names = false;

    let mut writer = Writer::new(Vec::new());
    let mut depth: usize = 0;

    loop {
        let event = match reader.read_event() {
            Ok(event) => event,
            Err(e) => {
                log::warn!(
                    "Canvas-Markup nicht lesbar an Position {}: {}",
                    reader.buffer_position(),
                    e
                );
                return None;
            }
        };

        if depth == 0 {
            match event {
                Event::Start(e) if is_svg(&e) => {
                    writer.write_event(Event::Start(with_namespace(e))).ok()?;
                    depth = 1;
                }
                Event::Empty(e) if is_svg(&e) => {
                    writer.write_event(Event::Empty(with_namespace(e))).ok()?;
                    return Some(writer.into_inner());
                }
                Event::Eof => {
                    log::debug!("Kein <svg> im Canvas-Container gefunden");
                    return None;
                }
                _ => {}
            }
            continue;
        }

        match event {
            Event::Start(_) => depth += 1,
            Event::End(_) => depth -= 1,
            Event::Eof => {
                log::warn!("<svg> im Canvas-Container nicht geschlossen");
                return None;
            }
            _ => {}
        }
        writer.write_event(event).ok()?;
        if depth == 0 {
            return Some(writer.into_inner());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn container(markup: &str) -> CanvasContainer {
        CanvasContainer::new(markup, ScreenRect::new(10.0, 20.0, 640.0, 480.0))
    }

    #[test]
    fn missing_container_yields_none() {
        assert!(capture_canvas_snapshot(None).is_none());
    }

    #[test]
    fn container_without_svg_yields_none() {
        let c = container("<div class=\"canvas\"><span>leer</span></div>");
        assert!(capture_canvas_snapshot(Some(&c)).is_none());
    }

    #[test]
    fn copies_first_svg_and_adds_namespace() {
        let c = container(
            "<div><svg width=\"10\"><g><path d=\"M 0 0 L 1 1\"/></g></svg><svg id=\"second\"/></div>",
        );

        let snapshot = capture_canvas_snapshot(Some(&c)).expect("Snapshot");
        let svg = snapshot.svg_markup().expect("dekodierbar");

        assert!(snapshot.data_url.starts_with("data:image/svg+xml;base64,"));
        assert_eq!(snapshot.width, 640.0);
        assert_eq!(snapshot.height, 480.0);
        assert!(svg.starts_with("<svg width=\"10\" xmlns=\"http://www.w3.org/2000/svg\">"));
        assert!(svg.ends_with("</svg>"));
        assert!(!svg.contains("second"));
        assert!(!svg.contains("<div"));
    }

    #[test]
    fn existing_namespace_is_kept_once() {
        let c = container("<svg xmlns=\"http://www.w3.org/2000/svg\"><rect/></svg>");
        let svg = capture_canvas_snapshot(Some(&c))
            .and_then(|s| s.svg_markup())
            .expect("Snapshot");
        assert_eq!(svg.matches("xmlns=").count(), 1);
    }

    #[test]
    fn source_markup_is_untouched() {
        let markup = "<div><svg><circle r=\"3\"/></svg></div>";
        let c = container(markup);
        let _ = capture_canvas_snapshot(Some(&c));
        assert_eq!(c.markup, markup);
    }
}
