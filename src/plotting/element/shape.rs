//! Line segments and rounded rectangles.

use crate::plotting::backend::SvgBackend;
use crate::plotting::element::{Bounds, Coords, RenderContext};
use crate::plotting::style::{FillStyle, LineStyle};

/// A polyline through a sequence of points.
#[derive(Debug, Clone, PartialEq)]
pub struct Line2D {
    pub points: Vec<(f64, f64)>,
    pub coords: Coords,
    pub style: LineStyle,
}

impl Line2D {
    /// A straight segment from `(x0, y0)` to `(x1, y1)` in data coordinates.
    pub fn segment(x0: f64, y0: f64, x1: f64, y1: f64) -> Self {
        Line2D {
            points: vec![(x0, y0), (x1, y1)],
            coords: Coords::Data,
            style: LineStyle::default(),
        }
    }

    pub fn coords(mut self, coords: Coords) -> Self {
        self.coords = coords;
        self
    }

    pub fn style(mut self, style: LineStyle) -> Self {
        self.style = style;
        self
    }

    pub fn data_bounds(&self) -> Option<Bounds> {
        if self.coords != Coords::Data {
            return None;
        }
        let (&(x, y), rest) = self.points.split_first()?;
        let mut bounds = Bounds::new(x, x, y, y);
        for &(x, y) in rest {
            bounds.include_bounds(&Bounds::new(x, x, y, y));
        }
        Some(bounds)
    }

    pub fn render(&self, ctx: &RenderContext, backend: &mut SvgBackend) {
        let points: Vec<(f64, f64)> = self
            .points
            .iter()
            .map(|&(x, y)| ctx.transform(x, y, self.coords))
            .collect();
        backend.draw_polyline(&points, &self.style);
    }
}

/// A rectangle with rounded corners.
///
/// The outline lies `pad` outside the nominal rectangle on every side and the
/// corner radius equals `pad`, so `pad = 0` gives a plain rectangle.
#[derive(Debug, Clone, PartialEq)]
pub struct RoundedBox {
    /// Lower-left corner of the nominal rectangle
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    pub pad: f64,
    pub coords: Coords,
    pub style: FillStyle,
}

impl RoundedBox {
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        RoundedBox {
            x,
            y,
            width,
            height,
            pad: 0.0,
            coords: Coords::Data,
            style: FillStyle::default(),
        }
    }

    pub fn pad(mut self, pad: f64) -> Self {
        self.pad = pad;
        self
    }

    pub fn coords(mut self, coords: Coords) -> Self {
        self.coords = coords;
        self
    }

    pub fn style(mut self, style: FillStyle) -> Self {
        self.style = style;
        self
    }

    /// The drawn outline, including padding.
    pub fn outline(&self) -> Bounds {
        Bounds::from_points(self.x, self.y, self.x + self.width, self.y + self.height)
            .inflate(self.pad)
    }

    pub fn data_bounds(&self) -> Option<Bounds> {
        (self.coords == Coords::Data).then(|| self.outline())
    }

    pub fn render(&self, ctx: &RenderContext, backend: &mut SvgBackend) {
        let outline = self.outline();
        let (left, top) = ctx.transform(outline.x_min, outline.y_max, self.coords);
        let (right, bottom) = ctx.transform(outline.x_max, outline.y_min, self.coords);
        let (sx, sy) = ctx.scale(self.coords);
        backend.draw_rounded_rect(
            left.min(right),
            top.min(bottom),
            (right - left).abs(),
            (bottom - top).abs(),
            (self.pad * sx).abs(),
            (self.pad * sy).abs(),
            &self.style,
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_segment_bounds() {
        let line = Line2D::segment(0.5, 0.0, 0.5, 1.0);
        let b = line.data_bounds().unwrap();
        assert_eq!(b, Bounds::new(0.5, 0.5, 0.0, 1.0));
        assert!(line.coords(Coords::Axes).data_bounds().is_none());
    }

    #[test]
    fn test_rounded_box_outline_includes_pad() {
        let b = RoundedBox::new(0.1, 0.2, 0.5, 0.4).pad(0.05).outline();
        assert_relative_eq!(b.x_min, 0.05);
        assert_relative_eq!(b.x_max, 0.65);
        assert_relative_eq!(b.y_min, 0.15);
        assert_relative_eq!(b.y_max, 0.65);
    }

    #[test]
    fn test_rounded_box_radius_in_pixels() {
        let ctx = RenderContext {
            data_bounds: Bounds::unit(),
            pixel_bounds: Bounds::new(0.0, 400.0, 0.0, 200.0),
        };
        let mut backend = SvgBackend::new(400.0, 200.0);
        RoundedBox::new(0.25, 0.25, 0.5, 0.5)
            .pad(0.05)
            .render(&ctx, &mut backend);
        let svg = backend.content_preview();
        assert!(svg.contains("rx=\"20.00\""));
        assert!(svg.contains("ry=\"10.00\""));
    }
}
