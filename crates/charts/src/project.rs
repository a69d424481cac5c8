//! Value-to-pixel projection
//!
//! Maps a series of scalar samples onto surface coordinates. X positions are
//! spread evenly across the width; Y is inverted so larger values sit nearer
//! the top.

use serde::{Deserialize, Serialize};

/// A point in surface coordinates
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// The value range a projection maps onto the full surface height
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ValueDomain {
    pub min: f64,
    pub max: f64,
}

impl ValueDomain {
    /// The percentage-like default range most site charts use
    pub const PERCENT: ValueDomain = ValueDomain {
        min: 0.0,
        max: 100.0,
    };

    pub fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    /// Fraction of the domain `value` covers, clamped nowhere: out-of-range
    /// values project past the surface edges. A degenerate domain
    /// (max <= min) maps everything to 0.
    pub fn normalize(&self, value: f64) -> f64 {
        let span = self.max - self.min;
        if span > 0.0 {
            (value - self.min) / span
        } else {
            0.0
        }
    }
}

impl Default for ValueDomain {
    fn default() -> Self {
        Self::PERCENT
    }
}

/// Horizontal step between consecutive samples.
///
/// A single sample (or none) yields 0, so degenerate series land at x = 0
/// rather than dividing by zero.
pub fn x_step(count: usize, width: f64) -> f64 {
    if count > 1 {
        width / (count - 1) as f64
    } else {
        0.0
    }
}

/// Project `values` onto a `width` x `height` surface over `domain`.
///
/// Guarantees: x is evenly spaced and strictly increasing for N >= 2 (given
/// positive width); `y = height` at `domain.min` and `y = 0` at `domain.max`.
pub fn project(values: &[f64], width: f64, height: f64, domain: ValueDomain) -> Vec<Point> {
    let step = x_step(values.len(), width);
    values
        .iter()
        .enumerate()
        .map(|(i, &value)| {
            let x = i as f64 * step;
            let y = height - domain.normalize(value) * height;
            Point::new(x, y)
        })
        .collect()
}
