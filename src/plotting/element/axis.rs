//! Axis tick configuration.

use crate::plotting::scale::Scale;
use crate::plotting::style::TextStyle;

/// Which side(s) of the axes carry tick marks.
///
/// `Low` is the bottom side for the x axis and the left side for the y axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TickSide {
    Low,
    High,
    #[default]
    Both,
    None,
}

impl TickSide {
    pub fn low(&self) -> bool {
        matches!(self, TickSide::Low | TickSide::Both)
    }

    pub fn high(&self) -> bool {
        matches!(self, TickSide::High | TickSide::Both)
    }
}

/// Configuration for the ticks of one axis.
#[derive(Debug, Clone, PartialEq)]
pub struct AxisConfig {
    /// Where tick marks are drawn
    pub tick_side: TickSide,
    /// Whether tick labels are drawn
    pub show_labels: bool,
    /// Length of tick marks in pixels
    pub tick_length: f64,
    /// Style for tick labels
    pub tick_label_style: TextStyle,
    /// Number of ticks to generate automatically
    pub num_ticks: usize,
    /// Padding between tick marks and labels
    pub tick_padding: f64,
    /// Custom tick positions (overrides automatic generation)
    pub tick_positions: Option<Vec<f64>>,
    /// Point tick marks and labels into the plot area
    pub inside: bool,
}

impl AxisConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Tick values for the given scale, custom positions first.
    /// Positions outside the scale's range are dropped.
    pub fn tick_values(&self, scale: &dyn Scale) -> Vec<f64> {
        let (min, max) = scale.range();
        let eps = (max - min).abs() * 1e-9;
        match self.tick_positions {
            Some(ref positions) => positions
                .iter()
                .copied()
                .filter(|t| *t >= min - eps && *t <= max + eps)
                .collect(),
            None => scale.ticks(self.num_ticks),
        }
    }

    /// Format a tick value as a label.
    pub fn format_tick(&self, value: f64) -> String {
        if value == 0.0 {
            "0".to_string()
        } else if value.abs() >= 1e4 || value.abs() < 1e-3 {
            format!("{:.1e}", value)
        } else if value.fract() == 0.0 {
            format!("{:.0}", value)
        } else {
            // Shortest representation up to 3 decimals
            let s = format!("{:.3}", value);
            s.trim_end_matches('0').trim_end_matches('.').to_string()
        }
    }
}

impl Default for AxisConfig {
    fn default() -> Self {
        AxisConfig {
            tick_side: TickSide::Both,
            show_labels: true,
            tick_length: 4.0,
            tick_label_style: TextStyle::new().font_size(10.0),
            num_ticks: 5,
            tick_padding: 3.0,
            tick_positions: None,
            inside: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::plotting::scale::LinearScale;

    #[test]
    fn test_format_tick() {
        let axis = AxisConfig::default();
        assert_eq!(axis.format_tick(0.0), "0");
        assert_eq!(axis.format_tick(0.1), "0.1");
        assert_eq!(axis.format_tick(0.30000000000000004), "0.3");
        assert_eq!(axis.format_tick(2.0), "2");
    }

    #[test]
    fn test_custom_positions_clipped_to_range() {
        let mut axis = AxisConfig::default();
        axis.tick_positions = Some(vec![-0.5, 0.0, 0.5, 1.0, 1.5]);
        let scale = LinearScale::new(0.0, 1.0).unwrap();
        assert_eq!(axis.tick_values(&scale), vec![0.0, 0.5, 1.0]);
    }

    #[test]
    fn test_tick_side() {
        assert!(TickSide::Both.low() && TickSide::Both.high());
        assert!(TickSide::Low.low() && !TickSide::Low.high());
        assert!(!TickSide::None.low() && !TickSide::None.high());
    }
}
