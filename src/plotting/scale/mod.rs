//! Axis scales and tick generation.

mod linear;

pub use linear::LinearScale;

use crate::plotting::error::{PlotError, PlotResult};

/// Mapping from a data range onto the unit interval.
pub trait Scale: std::fmt::Debug {
    /// Position of `value` within the range, 0.0 at the minimum and 1.0 at the maximum.
    fn transform(&self, value: f64) -> f64;

    /// Replace the data range. Fails on non-finite bounds.
    fn set_range(&mut self, min: f64, max: f64) -> PlotResult<()>;

    fn range(&self) -> (f64, f64);

    /// Automatic tick positions within the range.
    fn ticks(&self, num_ticks: usize) -> Vec<f64>;
}

/// Round `value` to 1, 2, 5 or 10 times a power of ten.
///
/// With `round`, picks the closest of those; otherwise the smallest one that
/// is not below `value`.
pub fn nice_number(value: f64, round: bool) -> f64 {
    let magnitude = 10_f64.powf(value.log10().floor());
    let fraction = value / magnitude;
    let steps: [(f64, f64); 3] = if round {
        [(1.5, 1.0), (3.0, 2.0), (7.0, 5.0)]
    } else {
        [(1.0, 1.0), (2.0, 2.0), (5.0, 5.0)]
    };
    let nice = steps
        .iter()
        .find(|(limit, _)| if round { fraction < *limit } else { fraction <= *limit })
        .map_or(10.0, |(_, nice)| *nice);
    nice * magnitude
}

/// Tick positions on round steps covering `[min, max]`, roughly `num_ticks` of them.
pub fn nice_ticks(min: f64, max: f64, num_ticks: usize) -> Vec<f64> {
    if num_ticks < 2 || max <= min {
        return vec![(min + max) / 2.0];
    }

    let span = nice_number(max - min, false);
    let step = nice_number(span / (num_ticks - 1) as f64, true);
    let first = (min / step).ceil() as i64;
    let last = (max / step).floor() as i64;

    // Multiply rather than accumulate so 0.1-steps stay exact at each tick
    (first..=last).map(|i| i as f64 * step).collect()
}

/// Upper bound on the number of values [`arange`] will produce.
pub const MAX_ARANGE_LEN: usize = 1_000_000;

/// Evenly spaced values `start, start+step, ...` strictly below `stop`.
///
/// Fails when the sequence would exceed [`MAX_ARANGE_LEN`] values.
pub fn arange(start: f64, stop: f64, step: f64) -> PlotResult<Vec<f64>> {
    if step <= 0.0 || !step.is_finite() || !(stop > start) {
        return Ok(Vec::new());
    }
    let count = ((stop - start) / step).ceil();
    if !count.is_finite() || count > MAX_ARANGE_LEN as f64 {
        return Err(PlotError::InvalidConfig(format!(
            "Range {} .. {} with step {} exceeds {} values",
            start, stop, step, MAX_ARANGE_LEN
        )));
    }
    let n = count as usize;
    Ok((0..n).map(|i| start + i as f64 * step).collect())
}
