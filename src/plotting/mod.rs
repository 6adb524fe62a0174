//! Minimal figure model with SVG output.
//!
//! Provides the matplotlib-like pieces the layout helpers draw into: a
//! [`Figure`] owning [`Axes`], artists (lines, rounded boxes, text) placed in
//! data or axes coordinates, and per-axes decoration (grid, spines, ticks).

pub mod axes;
pub mod backend;
pub mod element;
pub mod error;
pub mod figure;
pub mod scale;
pub mod style;

pub use axes::Axes;
pub use element::{Artist, Bounds, Coords, Line2D, RoundedBox, Spine, Text, TickSide};
pub use error::{PlotError, PlotResult};
pub use figure::{AxesId, Figure};
pub use style::{
    Color, DashPattern, FillStyle, FontWeight, HAlign, LineOverrides, LineStyle, PatchOverrides,
    TextOverrides, TextStyle, VAlign,
};

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::plotting::axes::Axes;
    pub use crate::plotting::element::{Bounds, Coords, Spine};
    pub use crate::plotting::error::{PlotError, PlotResult};
    pub use crate::plotting::figure::{AxesId, Figure};
    pub use crate::plotting::style::{
        Color, DashPattern, FontWeight, HAlign, LineOverrides, PatchOverrides, TextOverrides,
        VAlign,
    };
}
