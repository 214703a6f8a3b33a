//! Headless export: the whole grid as one SVG document.

use crate::core::session::ProjectionSession;
use crate::rendering::path::format_number;
use crate::Result;
use std::fmt::Write;
use std::path::Path;

/// Views per row in the exported grid
pub const GRID_COLUMNS: usize = 2;

/// Writes every view of the session, in registry order, into a grid.
pub fn render_document(session: &ProjectionSession) -> String {
    let panel = session.panel();
    let count = session.views().len();
    let rows = count.div_ceil(GRID_COLUMNS).max(1);
    let width = panel.width * GRID_COLUMNS as f64;
    let height = panel.height * rows as f64;

    let mut doc = String::new();
    let _ = writeln!(
        doc,
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="{w}" height="{h}" viewBox="0 0 {w} {h}">"#,
        w = format_number(width),
        h = format_number(height),
    );
    doc.push_str(
        "<style>.brazil-outline{stroke:#999;stroke-width:1}.distortion{stroke:#d62728}</style>\n",
    );

    for (i, view) in session.views().iter().enumerate() {
        let x = (i % GRID_COLUMNS) as f64 * panel.width;
        let y = (i / GRID_COLUMNS) as f64 * panel.height;
        let _ = writeln!(
            doc,
            r#"<g id="vis-{key}" transform="translate({x},{y})">"#,
            key = view.key(),
            x = format_number(x),
            y = format_number(y),
        );
        let _ = writeln!(
            doc,
            r#"<text x="8" y="18" font-family="sans-serif" font-size="14">{}</text>"#,
            escape(view.spec().title)
        );
        let _ = writeln!(
            doc,
            r#"<path class="brazil-outline" fill="none" d="{}"/>"#,
            view.outline().to_svg_d()
        );
        let _ = writeln!(
            doc,
            r#"<path class="distortion" fill="none" stroke-width="2" stroke-linejoin="round" d="{}"/>"#,
            view.distortion().to_svg_d()
        );
        doc.push_str("</g>\n");
    }

    let labels = session.labels();
    let _ = writeln!(
        doc,
        r#"<text id="label-latitude" class="latitude-label" x="4" y="{}" font-family="sans-serif" font-size="12">{}</text>"#,
        format_number(height * labels.latitude_top_percent / 100.0),
        escape(&labels.latitude_text)
    );
    let _ = writeln!(
        doc,
        r#"<text id="label-longitude" class="longitude-label" x="{}" y="{}" font-family="sans-serif" font-size="12" text-anchor="middle">{}</text>"#,
        format_number(width * labels.longitude_left_percent / 100.0),
        format_number(height - 4.0),
        escape(&labels.longitude_text)
    );
    doc.push_str("</svg>\n");
    doc
}

/// Renders and writes the document to `path`
pub fn export(session: &ProjectionSession, path: impl AsRef<Path>) -> Result<()> {
    let doc = render_document(session);
    std::fs::write(path.as_ref(), doc)?;
    log::info!("wrote {}", path.as_ref().display());
    Ok(())
}

fn escape(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::offset::Offset;
    use crate::core::panel::PanelSize;
    use crate::data::geojson::{GeoJsonGeometry, Shape};

    fn session() -> ProjectionSession {
        let shape = Shape::new(GeoJsonGeometry::Polygon {
            coordinates: vec![vec![[-70.0, 4.0], [-35.0, -5.0], [-53.0, -33.0], [-70.0, 4.0]]],
        });
        ProjectionSession::standard(shape, PanelSize::measure(300.0, 200.0)).unwrap()
    }

    #[test]
    fn test_document_has_every_view() {
        let doc = render_document(&session());
        assert!(doc.starts_with("<svg"));
        assert!(doc.contains(r#"width="600" height="400""#));
        for key in ["mercator", "peters", "albers", "winkel"] {
            assert!(doc.contains(&format!(r#"id="vis-{}""#, key)));
        }
        assert_eq!(doc.matches(r#"class="brazil-outline""#).count(), 4);
        assert!(doc.contains(">0.0°</text>"));
        assert!(doc.trim_end().ends_with("</svg>"));
    }

    #[test]
    fn test_labels_follow_offset() {
        let mut session = session();
        session.set_offset(Offset::new(-90.0, 45.0));
        let doc = render_document(&session);
        assert!(doc.contains(">-90.0°</text>"));
        assert!(doc.contains(">45.0°</text>"));
        // 50% + 20% of 400px
        assert!(doc.contains(r#"y="280""#));
    }

    #[test]
    fn test_escape() {
        assert_eq!(escape("a<b & \"c\">"), "a&lt;b &amp; &quot;c&quot;&gt;");
    }
}
