use crate::data::sample::Sample;
use crate::loss::mse::MseLoss;
use crate::model::params::LineParams;
use crate::optim::gradient_descent::GradientDescent;

/// Partial derivatives of the dataset MSE w.r.t. the intercept and the slope.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Gradient {
    pub db: f64,
    pub dw: f64,
}

/// Full-batch MSE gradient at `params`:
///   db = (2/N)·Σ residual,  dw = (2/N)·Σ residual·x
///
/// Every residual is taken against the same `params`; nothing is updated
/// while the batch is being accumulated.
pub fn compute_gradient(params: &LineParams, data: &[Sample]) -> Gradient {
    let mut db_sum = 0.0;
    let mut dw_sum = 0.0;

    for sample in data {
        let prediction = params.predict(sample.x);
        let d = MseLoss::derivative(prediction, sample.y);
        db_sum += d;
        dw_sum += d * sample.x;
    }

    let n = data.len() as f64;
    Gradient {
        db: db_sum / n,
        dw: dw_sum / n,
    }
}

/// One batch gradient-descent update of `(b, w)` over `data` with step size `alpha`.
/// Returns the new `(b, w)`; an empty dataset yields NaN for both.
pub fn step_gradient(b: f64, w: f64, data: &[Sample], alpha: f64) -> (f64, f64) {
    GradientDescent::new(alpha)
        .step(LineParams::new(b, w), data)
        .into()
}
