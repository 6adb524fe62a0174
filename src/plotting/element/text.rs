//! Text artists.

use crate::plotting::backend::SvgBackend;
use crate::plotting::element::{Coords, RenderContext};
use crate::plotting::style::TextStyle;

/// A string anchored at a point; how it sits around the point is set by the
/// style's alignment.
#[derive(Debug, Clone, PartialEq)]
pub struct Text {
    pub content: String,
    pub x: f64,
    pub y: f64,
    pub coords: Coords,
    pub style: TextStyle,
}

impl Text {
    /// Text in data coordinates with the default style.
    pub fn new(content: impl Into<String>, x: f64, y: f64) -> Self {
        Text {
            content: content.into(),
            x,
            y,
            coords: Coords::Data,
            style: TextStyle::default(),
        }
    }

    pub fn coords(mut self, coords: Coords) -> Self {
        self.coords = coords;
        self
    }

    pub fn style(mut self, style: TextStyle) -> Self {
        self.style = style;
        self
    }

    pub fn render(&self, ctx: &RenderContext, backend: &mut SvgBackend) {
        let (px, py) = ctx.transform(self.x, self.y, self.coords);
        backend.draw_text(px, py, &self.content, &self.style);
    }
}

/// Escape special XML characters.
pub fn escape_xml(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&apos;")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::plotting::element::Bounds;

    #[test]
    fn test_escape_xml() {
        assert_eq!(escape_xml("a<b & \"c\""), "a&lt;b &amp; &quot;c&quot;");
    }

    #[test]
    fn test_render_axes_coords_ignores_data_range() {
        let ctx = RenderContext {
            data_bounds: Bounds::new(-50.0, 50.0, 0.0, 1e6),
            pixel_bounds: Bounds::new(0.0, 200.0, 0.0, 100.0),
        };
        let mut backend = SvgBackend::new(200.0, 100.0);
        Text::new("A", 0.5, 0.5)
            .coords(Coords::Axes)
            .render(&ctx, &mut backend);
        let svg = backend.content_preview();
        assert!(svg.contains("x=\"100.00\" y=\"50.00\""));
        assert!(svg.contains(">A</text>"));
    }
}
