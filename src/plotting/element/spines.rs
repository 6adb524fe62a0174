//! Frame lines around an axes.

use crate::plotting::style::{Color, LineStyle};

/// One side of an axes frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Spine {
    Top,
    Bottom,
    Left,
    Right,
}

impl Spine {
    pub const ALL: [Spine; 4] = [Spine::Top, Spine::Bottom, Spine::Left, Spine::Right];
}

/// Visibility and style of the four spines.
#[derive(Debug, Clone, PartialEq)]
pub struct Spines {
    visible: [bool; 4],
    pub style: LineStyle,
}

impl Spines {
    fn slot(spine: Spine) -> usize {
        match spine {
            Spine::Top => 0,
            Spine::Bottom => 1,
            Spine::Left => 2,
            Spine::Right => 3,
        }
    }

    pub fn set_visible(&mut self, spine: Spine, visible: bool) {
        self.visible[Self::slot(spine)] = visible;
    }

    pub fn is_visible(&self, spine: Spine) -> bool {
        self.visible[Self::slot(spine)]
    }
}

impl Default for Spines {
    fn default() -> Self {
        Spines {
            visible: [true; 4],
            style: LineStyle::new().color(Color::BLACK).width(1.0),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle_single_spine() {
        let mut spines = Spines::default();
        spines.set_visible(Spine::Right, false);
        assert!(!spines.is_visible(Spine::Right));
        assert!(Spine::ALL
            .iter()
            .filter(|s| **s != Spine::Right)
            .all(|s| spines.is_visible(*s)));
    }
}
