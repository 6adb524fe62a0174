//! Visual elements: artists that can be added to an axes, and the
//! decoration (axis, grid, spines) an axes draws around them.

mod axis;
mod grid;
pub mod shape;
mod spines;
pub mod text;

pub use axis::{AxisConfig, TickSide};
pub use grid::GridConfig;
pub use shape::{Line2D, RoundedBox};
pub use spines::{Spine, Spines};
pub use text::{escape_xml, Text};

use crate::plotting::backend::SvgBackend;

/// Axis-aligned rectangle, in whatever space the caller works in.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    pub x_min: f64,
    pub x_max: f64,
    pub y_min: f64,
    pub y_max: f64,
}

impl Bounds {
    pub fn new(x_min: f64, x_max: f64, y_min: f64, y_max: f64) -> Self {
        Bounds {
            x_min,
            x_max,
            y_min,
            y_max,
        }
    }

    /// Create bounds from corner points.
    pub fn from_points(x1: f64, y1: f64, x2: f64, y2: f64) -> Self {
        Bounds {
            x_min: x1.min(x2),
            x_max: x1.max(x2),
            y_min: y1.min(y2),
            y_max: y1.max(y2),
        }
    }

    /// The unit square.
    pub fn unit() -> Self {
        Bounds::new(0.0, 1.0, 0.0, 1.0)
    }

    pub fn width(&self) -> f64 {
        self.x_max - self.x_min
    }

    pub fn height(&self) -> f64 {
        self.y_max - self.y_min
    }

    /// Expand bounds to include another bounds.
    pub fn include_bounds(&mut self, other: &Bounds) {
        self.x_min = self.x_min.min(other.x_min);
        self.x_max = self.x_max.max(other.x_max);
        self.y_min = self.y_min.min(other.y_min);
        self.y_max = self.y_max.max(other.y_max);
    }

    /// Add padding as a fraction of the range.
    pub fn pad(&self, fraction: f64) -> Bounds {
        let x_pad = self.width() * fraction;
        let y_pad = self.height() * fraction;
        Bounds {
            x_min: self.x_min - x_pad,
            x_max: self.x_max + x_pad,
            y_min: self.y_min - y_pad,
            y_max: self.y_max + y_pad,
        }
    }

    /// Grow every side by an absolute amount.
    pub fn inflate(&self, amount: f64) -> Bounds {
        Bounds {
            x_min: self.x_min - amount,
            x_max: self.x_max + amount,
            y_min: self.y_min - amount,
            y_max: self.y_max + amount,
        }
    }
}

/// Coordinate system an artist is positioned in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Coords {
    /// The axes' data coordinates (subject to its x/y limits)
    #[default]
    Data,
    /// Normalized axes coordinates: (0,0) bottom-left, (1,1) top-right
    Axes,
}

/// Maps one axes' data range onto its pixel rectangle.
pub struct RenderContext {
    pub data_bounds: Bounds,
    /// Pixel rectangle, y growing downward
    pub pixel_bounds: Bounds,
}

impl RenderContext {
    /// Transform a point in the given coordinate system to pixel coordinates.
    pub fn transform(&self, x: f64, y: f64, coords: Coords) -> (f64, f64) {
        let (x_norm, y_norm) = match coords {
            Coords::Data => (
                (x - self.data_bounds.x_min) / self.data_bounds.width(),
                (y - self.data_bounds.y_min) / self.data_bounds.height(),
            ),
            Coords::Axes => (x, y),
        };

        let px = self.pixel_bounds.x_min + x_norm * self.pixel_bounds.width();
        // Flip Y axis since SVG has Y increasing downward
        let py = self.pixel_bounds.y_max - y_norm * self.pixel_bounds.height();

        (px, py)
    }

    /// Pixels per unit along each axis for the given coordinate system.
    pub fn scale(&self, coords: Coords) -> (f64, f64) {
        match coords {
            Coords::Data => (
                self.pixel_bounds.width() / self.data_bounds.width(),
                self.pixel_bounds.height() / self.data_bounds.height(),
            ),
            Coords::Axes => (self.pixel_bounds.width(), self.pixel_bounds.height()),
        }
    }
}

/// Something drawn inside an axes.
#[derive(Debug, Clone, PartialEq)]
pub enum Artist {
    Line(Line2D),
    Patch(RoundedBox),
    Text(Text),
}

impl Artist {
    /// Extent in data coordinates, for autoscaling. Artists placed in axes
    /// coordinates and text do not contribute.
    pub fn data_bounds(&self) -> Option<Bounds> {
        match self {
            Artist::Line(line) => line.data_bounds(),
            Artist::Patch(patch) => patch.data_bounds(),
            Artist::Text(_) => None,
        }
    }

    /// Draw order within an axes; lower draws first.
    pub fn zorder(&self) -> u8 {
        match self {
            Artist::Patch(_) => 1,
            Artist::Line(_) => 2,
            Artist::Text(_) => 3,
        }
    }

    pub fn render(&self, ctx: &RenderContext, backend: &mut SvgBackend) {
        match self {
            Artist::Line(line) => line.render(ctx, backend),
            Artist::Patch(patch) => patch.render(ctx, backend),
            Artist::Text(text) => text.render(ctx, backend),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_transform_data_and_axes() {
        let ctx = RenderContext {
            data_bounds: Bounds::new(0.0, 10.0, 0.0, 100.0),
            pixel_bounds: Bounds::new(100.0, 300.0, 50.0, 250.0),
        };
        let (px, py) = ctx.transform(5.0, 25.0, Coords::Data);
        assert_relative_eq!(px, 200.0);
        assert_relative_eq!(py, 200.0);

        let (px, py) = ctx.transform(0.0, 1.0, Coords::Axes);
        assert_relative_eq!(px, 100.0);
        assert_relative_eq!(py, 50.0);
    }

    #[test]
    fn test_bounds_inflate() {
        let b = Bounds::new(0.1, 0.9, 0.2, 0.8).inflate(0.05);
        assert_relative_eq!(b.x_min, 0.05);
        assert_relative_eq!(b.y_max, 0.85);
    }
}
