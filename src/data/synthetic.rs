use std::f64::consts::PI;

use rand::prelude::*;
use rand::rngs::StdRng;

use crate::data::sample::Sample;

/// Parameters for a generated dataset lying around `y = w·x + b`.
#[derive(Debug, Clone, Copy)]
pub struct LineSpec {
    pub w: f64,
    pub b: f64,
    /// Standard deviation of the Gaussian noise added to every `y`.
    pub noise: f64,
    /// Inputs are drawn uniformly from `[x_min, x_max)`.
    pub x_min: f64,
    pub x_max: f64,
}

impl Default for LineSpec {
    fn default() -> Self {
        LineSpec {
            w: 1.0,
            b: 0.0,
            noise: 0.0,
            x_min: 0.0,
            x_max: 10.0,
        }
    }
}

/// Generates `n` samples scattered around the line described by `spec`.
/// The same `seed` always yields the same dataset.
pub fn noisy_line(n: usize, spec: LineSpec, seed: u64) -> Vec<Sample> {
    let mut rng = StdRng::seed_from_u64(seed);
    let width = spec.x_max - spec.x_min;

    (0..n)
        .map(|_| {
            let x = spec.x_min + rng.gen::<f64>() * width;
            let y = spec.w * x + spec.b + spec.noise * sample_standard_normal(&mut rng);
            Sample { x, y }
        })
        .collect()
}

/// Samples a single value from N(0, 1) using the Box-Muller transform.
fn sample_standard_normal<R: Rng>(rng: &mut R) -> f64 {
    // Both uniforms must be in (0, 1] to avoid log(0).
    let u1: f64 = 1.0 - rng.gen::<f64>();
    let u2: f64 = 1.0 - rng.gen::<f64>();
    (-2.0 * u1.ln()).sqrt() * (2.0 * PI * u2).cos()
}
