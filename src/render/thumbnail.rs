//! Rasterisiert SVG-Szenen zu PNG-Thumbnails (resvg).

use anyhow::{anyhow, bail, Result};
use resvg::tiny_skia::{Pixmap, Transform};
use resvg::usvg;

/// Rendert ein SVG-Dokument als PNG.
///
/// `scale` skaliert die intrinsische Dokumentgröße (1.0 = 1 px pro Einheit).
/// Systemschriften werden für Spieler-Beschriftungen geladen.
pub fn render_png(svg: &str, scale: f32) -> Result<Vec<u8>> {
    if !scale.is_finite() || scale <= 0.0 {
        bail!("Skalierung muss endlich und > 0 sein (erhalten: {scale})");
    }

    let mut options = usvg::Options::default();
    options.fontdb_mut().load_system_fonts();

    let tree = usvg::Tree::from_str(svg, &options)
        .map_err(|err| anyhow!("SVG für PNG-Export nicht lesbar: {err}"))?;

    let size = tree.size().to_int_size();
    let scaled_width = (size.width() as f32 * scale).ceil();
    let scaled_height = (size.height() as f32 * scale).ceil();

    if scaled_width < 1.0 || scaled_height < 1.0 {
        bail!("Thumbnail kleiner als 1 px, Skalierung erhöhen");
    }
    if scaled_width > u32::MAX as f32 || scaled_height > u32::MAX as f32 {
        bail!("Thumbnail-Abmessungen zu groß, Skalierung verringern");
    }

    let (width, height) = (scaled_width as u32, scaled_height as u32);
    let mut pixmap = Pixmap::new(width, height)
        .ok_or_else(|| anyhow!("Pixmap {width}x{height} konnte nicht angelegt werden"))?;

    resvg::render(&tree, Transform::from_scale(scale, scale), &mut pixmap.as_mut());
    log::debug!("Thumbnail gerendert: {}x{} px", width, height);

    pixmap
        .encode_png()
        .map_err(|err| anyhow!("PNG-Kodierung fehlgeschlagen: {err}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    const SVG: &str = r##"<svg xmlns="http://www.w3.org/2000/svg" width="40" height="20" viewBox="0 0 40 20"><path d="M 2 2 L 38 18" stroke="#000" fill="none"/></svg>"##;

    #[test]
    fn renders_png_signature() {
        let png = render_png(SVG, 2.0).expect("PNG");
        assert_eq!(&png[..8], b"\x89PNG\r\n\x1a\n");
    }

    #[test]
    fn rejects_invalid_scale() {
        assert!(render_png(SVG, 0.0).is_err());
        assert!(render_png(SVG, f32::NAN).is_err());
    }

    #[test]
    fn rejects_non_svg_input() {
        assert!(render_png("kein svg", 1.0).is_err());
    }
}
