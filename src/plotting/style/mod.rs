//! Styling module.
//!
//! Colors, line/fill/text styles, and the per-call override structures the
//! layout helpers merge over their defaults.

pub mod color;
pub mod fill_style;
pub mod line_style;
pub mod text_style;

pub use color::Color;
pub use fill_style::{FillStyle, PatchOverrides};
pub use line_style::{DashPattern, LineOverrides, LineStyle};
pub use text_style::{FontWeight, HAlign, TextOverrides, TextStyle, VAlign};
