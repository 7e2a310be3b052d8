use crate::data::sample::Sample;
use crate::model::params::LineParams;

/// Squared error of the line `w·x + b` on a single sample: `(w·x + b - y)²`.
pub fn compute_error(b: f64, w: f64, x: f64, y: f64) -> f64 {
    let prediction = w * x + b;
    (prediction - y).powi(2)
}

/// Mean squared error of the line over the whole dataset.
///
/// An empty dataset yields `0.0 / 0.0`, i.e. NaN.
pub fn compute_mse(b: f64, w: f64, data: &[Sample]) -> f64 {
    let mut error_sum = 0.0;
    for sample in data {
        error_sum += compute_error(b, w, sample.x, sample.y);
    }
    error_sum / data.len() as f64
}

pub struct MseLoss;

impl MseLoss {
    /// Scalar MSE of `params` over `data`.
    pub fn loss(params: &LineParams, data: &[Sample]) -> f64 {
        compute_mse(params.b, params.w, data)
    }

    /// Derivative of one squared error w.r.t. the prediction: 2·(predicted - expected)
    pub fn derivative(predicted: f64, expected: f64) -> f64 {
        2.0 * (predicted - expected)
    }
}
