use serde::{Deserialize, Serialize};

use crate::data::sample::Sample;
use crate::error::Result;

/// Intercept `b` and slope `w` of the line `y = w·x + b`.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct LineParams {
    pub b: f64,
    pub w: f64,
}

impl LineParams {
    pub fn new(b: f64, w: f64) -> LineParams {
        LineParams { b, w }
    }

    pub fn predict(&self, x: f64) -> f64 {
        self.w * x + self.b
    }

    /// Predictions for every sample of `data`, in order.
    pub fn predict_all(&self, data: &[Sample]) -> Vec<f64> {
        data.iter().map(|s| self.predict(s.x)).collect()
    }

    /// Serializes the parameters to a pretty-printed JSON file.
    pub fn save_json(&self, path: &str) -> Result<()> {
        let file = std::fs::File::create(path)?;
        let writer = std::io::BufWriter::new(file);
        serde_json::to_writer_pretty(writer, self)?;
        Ok(())
    }

    /// Deserializes parameters from a JSON file previously written by `save_json`.
    pub fn load_json(path: &str) -> Result<LineParams> {
        let file = std::fs::File::open(path)?;
        let reader = std::io::BufReader::new(file);
        Ok(serde_json::from_reader(reader)?)
    }
}

impl From<(f64, f64)> for LineParams {
    fn from((b, w): (f64, f64)) -> Self {
        LineParams { b, w }
    }
}

impl From<LineParams> for (f64, f64) {
    fn from(p: LineParams) -> Self {
        (p.b, p.w)
    }
}
