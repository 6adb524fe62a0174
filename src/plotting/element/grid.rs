//! Grid lines at tick positions.

use crate::plotting::style::{Color, LineStyle};

/// Grid drawn behind an axes' artists, one line per tick on each enabled axis.
#[derive(Debug, Clone, PartialEq)]
pub struct GridConfig {
    pub visible: bool,
    pub style: LineStyle,
    pub show_x: bool,
    pub show_y: bool,
}

impl Default for GridConfig {
    fn default() -> Self {
        GridConfig {
            visible: false,
            style: LineStyle::new().color(Color::LIGHT_GRAY).width(0.8),
            show_x: true,
            show_y: true,
        }
    }
}
