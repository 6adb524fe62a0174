//! Figure layout helpers built on the plotting substrate.

pub mod decor;
pub mod labels;
pub mod overlay;

pub use decor::{axtext, bottomleft_spines};
pub use labels::{add_panel_labels, AxisCoords, LabelStyle, Labels, PanelLabelOptions};
pub use overlay::{BoxOptions, LabelOptions, Overlay, OverlayOptions, FULL_SPAN};
