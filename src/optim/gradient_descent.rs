use crate::data::sample::Sample;
use crate::model::params::LineParams;
use crate::optim::gradient::{compute_gradient, Gradient};

/// Plain full-batch gradient descent with a fixed learning rate.
#[derive(Debug, Clone, Copy)]
pub struct GradientDescent {
    pub learning_rate: f64,
}

impl GradientDescent {
    pub fn new(learning_rate: f64) -> GradientDescent {
        GradientDescent { learning_rate }
    }

    /// Applies a pre-computed gradient, returning the updated parameters.
    pub fn apply(&self, params: LineParams, grad: Gradient) -> LineParams {
        LineParams {
            b: params.b - self.learning_rate * grad.db,
            w: params.w - self.learning_rate * grad.dw,
        }
    }

    /// Computes the batch gradient over `data` and applies it.
    pub fn step(&self, params: LineParams, data: &[Sample]) -> LineParams {
        let grad = compute_gradient(&params, data);
        self.apply(params, grad)
    }
}
