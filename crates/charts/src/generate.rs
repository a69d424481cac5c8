//! Sample data generation
//!
//! Bounded random walks that stand in for live metrics. Generators take the
//! random source as an argument so tests can seed one.

use crate::model::DonutDatum;
use rand::Rng;

/// Largest step a single sample can move from its predecessor.
const MAX_STEP: f64 = 5.0;

/// Generate `count` samples via a bounded random walk.
///
/// The walk starts at the midpoint of `[min, max]`; each step adds a uniform
/// delta in `[-5, 5]` and clamps the running value back into range.
/// `count = 0` yields an empty sequence.
pub fn generate<R: Rng>(rng: &mut R, count: usize, min: f64, max: f64) -> Vec<f64> {
    let mut data = Vec::with_capacity(count);
    let mut current = (min + max) / 2.0;

    for _ in 0..count {
        let change = (rng.gen::<f64>() - 0.5) * 2.0 * MAX_STEP;
        current = (current + change).clamp(min, max);
        data.push(current);
    }

    data
}

/// One random sample in `[min, max)`, used by the live feed.
pub fn sample<R: Rng>(rng: &mut R, min: f64, max: f64) -> f64 {
    min + rng.gen::<f64>() * (max - min)
}

/// The fixed traffic-source split used for the donut demo.
pub fn donut_sample_data() -> Vec<DonutDatum> {
    vec![
        DonutDatum::new("Desktop", 45.0),
        DonutDatum::new("Mobile", 35.0),
        DonutDatum::new("Tablet", 20.0),
    ]
}
