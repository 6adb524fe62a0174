//! SVG rendering backend.

use crate::plotting::element::text::escape_xml;
use crate::plotting::style::{FillStyle, LineStyle, TextStyle};

/// Padding in pixels around text drawn with a background box.
const TEXT_BACKGROUND_PAD: f64 = 2.0;

/// Accumulates SVG elements in pixel space (origin top-left, y down).
#[derive(Debug)]
pub struct SvgBackend {
    pub width: f64,
    pub height: f64,
    content: Vec<String>,
    /// Clip paths
    defs: Vec<String>,
    include_declaration: bool,
}

impl SvgBackend {
    /// Create a new SVG backend with the given dimensions.
    pub fn new(width: f64, height: f64) -> Self {
        SvgBackend {
            width,
            height,
            content: Vec::new(),
            defs: Vec::new(),
            include_declaration: true,
        }
    }

    /// Set whether to include XML declaration.
    pub fn include_declaration(mut self, include: bool) -> Self {
        self.include_declaration = include;
        self
    }

    /// Draw a line between two points.
    pub fn draw_line(&mut self, x1: f64, y1: f64, x2: f64, y2: f64, style: &LineStyle) {
        self.content.push(format!(
            "<line x1=\"{:.2}\" y1=\"{:.2}\" x2=\"{:.2}\" y2=\"{:.2}\" {}/>",
            x1,
            y1,
            x2,
            y2,
            style.to_svg_style()
        ));
    }

    /// Draw a polyline. Two-point polylines are emitted as `<line>`.
    pub fn draw_polyline(&mut self, points: &[(f64, f64)], style: &LineStyle) {
        match points {
            [] | [_] => {}
            [(x1, y1), (x2, y2)] => self.draw_line(*x1, *y1, *x2, *y2, style),
            _ => {
                let points_str: String = points
                    .iter()
                    .map(|(x, y)| format!("{:.2},{:.2}", x, y))
                    .collect::<Vec<_>>()
                    .join(" ");

                self.content.push(format!(
                    "<polyline points=\"{}\" {}/>",
                    points_str,
                    style.to_svg_style()
                ));
            }
        }
    }

    /// Draw a rectangle.
    pub fn draw_rect(&mut self, x: f64, y: f64, width: f64, height: f64, style: &FillStyle) {
        self.draw_rounded_rect(x, y, width, height, 0.0, 0.0, style);
    }

    /// Draw a rectangle with elliptical corners of radii `rx`/`ry`.
    #[allow(clippy::too_many_arguments)]
    pub fn draw_rounded_rect(
        &mut self,
        x: f64,
        y: f64,
        width: f64,
        height: f64,
        rx: f64,
        ry: f64,
        style: &FillStyle,
    ) {
        let corners = if rx > 0.0 || ry > 0.0 {
            format!(" rx=\"{:.2}\" ry=\"{:.2}\"", rx, ry)
        } else {
            String::new()
        };
        self.content.push(format!(
            "<rect x=\"{:.2}\" y=\"{:.2}\" width=\"{:.2}\" height=\"{:.2}\"{} {}/>",
            x,
            y,
            width,
            height,
            corners,
            style.to_svg_style()
        ));
    }

    /// Draw text, preceded by its background box when the style has one.
    pub fn draw_text(&mut self, x: f64, y: f64, text: &str, style: &TextStyle) {
        let transform = if style.rotation != 0.0 {
            // SVG rotates clockwise; text rotation is counter-clockwise
            format!(" transform=\"rotate({},{:.2},{:.2})\"", -style.rotation, x, y)
        } else {
            String::new()
        };

        if let Some(ref background) = style.background {
            let (w, h) = style.approx_extent(text);
            let left = x - w * style.ha.offset_fraction() - TEXT_BACKGROUND_PAD;
            let top = y - h * style.va.offset_fraction() - TEXT_BACKGROUND_PAD;
            self.content.push(format!(
                "<rect x=\"{:.2}\" y=\"{:.2}\" width=\"{:.2}\" height=\"{:.2}\" fill=\"{}\" stroke=\"none\"{}/>",
                left,
                top,
                w + 2.0 * TEXT_BACKGROUND_PAD,
                h + 2.0 * TEXT_BACKGROUND_PAD,
                background.to_svg_string(),
                transform
            ));
        }

        self.content.push(format!(
            "<text x=\"{:.2}\" y=\"{:.2}\" {}{}>{}</text>",
            x,
            y,
            style.to_svg_attrs(),
            transform,
            escape_xml(text)
        ));
    }

    /// Open a group clipped to the given rectangle; close it with [`Self::end_clip`].
    pub fn start_clip(&mut self, id: &str, x: f64, y: f64, width: f64, height: f64) {
        self.defs.push(format!(
            "<clipPath id=\"{}\"><rect x=\"{:.2}\" y=\"{:.2}\" width=\"{:.2}\" height=\"{:.2}\"/></clipPath>",
            id, x, y, width, height
        ));
        self.content
            .push(format!("<g clip-path=\"url(#{})\">", id));
    }

    pub fn end_clip(&mut self) {
        self.content.push("</g>".to_string());
    }

    /// Render the final SVG string.
    pub fn render(self) -> String {
        let declaration = if self.include_declaration {
            "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n"
        } else {
            ""
        };

        let defs_section = if self.defs.is_empty() {
            String::new()
        } else {
            format!("  <defs>\n    {}\n  </defs>\n", self.defs.join("\n    "))
        };

        format!(
            r#"{}<svg xmlns="http://www.w3.org/2000/svg" width="{}" height="{}" viewBox="0 0 {} {}">
{}  {}
</svg>"#,
            declaration,
            self.width,
            self.height,
            self.width,
            self.height,
            defs_section,
            self.content.join("\n  ")
        )
    }

    /// Drawn elements so far, without the document wrapper.
    pub fn content_preview(&self) -> String {
        self.content.join("\n")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::plotting::style::{Color, HAlign, VAlign};

    #[test]
    fn test_text_background_precedes_text() {
        let mut backend = SvgBackend::new(100.0, 100.0);
        let style = TextStyle::new()
            .font_size(10.0)
            .align(HAlign::Left, VAlign::Center)
            .background(Color::WHITE);
        backend.draw_text(10.0, 50.0, "Box", &style);
        let svg = backend.content_preview();
        let rect = svg.find("<rect").unwrap();
        let text = svg.find("<text").unwrap();
        assert!(rect < text);
        // 3 chars * 10px * 0.6 + 2 * 2px padding
        assert!(svg.contains("width=\"22.00\""));
    }

    #[test]
    fn test_render_wraps_defs_and_content() {
        let mut backend = SvgBackend::new(200.0, 100.0).include_declaration(false);
        backend.start_clip("c0", 0.0, 0.0, 200.0, 100.0);
        backend.draw_line(0.0, 0.0, 10.0, 10.0, &LineStyle::default());
        backend.end_clip();
        let svg = backend.render();
        assert!(svg.starts_with("<svg"));
        assert!(svg.contains("<clipPath id=\"c0\">"));
        assert!(svg.contains("clip-path=\"url(#c0)\""));
    }
}
