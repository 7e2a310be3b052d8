use serde::{Deserialize, Serialize};

/// One observation of the dataset: `x` is the input, `y` the target.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Sample {
    pub x: f64,
    pub y: f64,
}

impl Sample {
    pub fn new(x: f64, y: f64) -> Sample {
        Sample { x, y }
    }
}

impl From<(f64, f64)> for Sample {
    fn from((x, y): (f64, f64)) -> Self {
        Sample { x, y }
    }
}

/// Builds a dataset from `(x, y)` pairs.
pub fn from_pairs(pairs: &[(f64, f64)]) -> Vec<Sample> {
    pairs.iter().copied().map(Sample::from).collect()
}
