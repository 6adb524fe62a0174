use super::{nice_ticks, Scale};
use crate::plotting::error::{PlotError, PlotResult};

/// Affine map of `[min, max]` onto `[0, 1]`.
#[derive(Debug, Clone, PartialEq)]
pub struct LinearScale {
    min: f64,
    max: f64,
}

impl LinearScale {
    pub fn new(min: f64, max: f64) -> PlotResult<Self> {
        let mut scale = LinearScale::default();
        if !(min < max) {
            return Err(PlotError::InvalidConfig(format!(
                "Empty scale range {} .. {}",
                min, max
            )));
        }
        scale.set_range(min, max)?;
        Ok(scale)
    }
}

impl Default for LinearScale {
    fn default() -> Self {
        LinearScale { min: 0.0, max: 1.0 }
    }
}

impl Scale for LinearScale {
    fn transform(&self, value: f64) -> f64 {
        (value - self.min) / (self.max - self.min)
    }

    /// An empty or inverted range is widened around `min` so the map stays
    /// invertible.
    fn set_range(&mut self, min: f64, max: f64) -> PlotResult<()> {
        if !min.is_finite() || !max.is_finite() {
            return Err(PlotError::InvalidConfig(format!(
                "Non-finite scale range {} .. {}",
                min, max
            )));
        }
        (self.min, self.max) = if min < max {
            (min, max)
        } else {
            let half_width = if min == 0.0 { 1.0 } else { min.abs() * 0.1 };
            (min - half_width, min + half_width)
        };
        Ok(())
    }

    fn range(&self) -> (f64, f64) {
        (self.min, self.max)
    }

    fn ticks(&self, num_ticks: usize) -> Vec<f64> {
        nice_ticks(self.min, self.max, num_ticks)
    }
}
