use serde::{Deserialize, Serialize};

use crate::model::params::LineParams;

/// Parameter values recorded after each gradient-descent update, in order.
///
/// `b[i]` and `w[i]` are the intercept and slope after iteration `i + 1`;
/// both vectors always have the same length.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct TrainingHistory {
    pub b: Vec<f64>,
    pub w: Vec<f64>,
}

impl TrainingHistory {
    pub fn with_capacity(iterations: usize) -> TrainingHistory {
        TrainingHistory {
            b: Vec::with_capacity(iterations),
            w: Vec::with_capacity(iterations),
        }
    }

    pub fn push(&mut self, params: LineParams) {
        self.b.push(params.b);
        self.w.push(params.w);
    }

    pub fn len(&self) -> usize {
        self.b.len()
    }

    pub fn is_empty(&self) -> bool {
        self.b.is_empty()
    }

    /// Parameters after the last recorded iteration.
    pub fn last(&self) -> Option<LineParams> {
        Some(LineParams::new(*self.b.last()?, *self.w.last()?))
    }

    pub fn into_parts(self) -> (Vec<f64>, Vec<f64>) {
        (self.b, self.w)
    }
}
