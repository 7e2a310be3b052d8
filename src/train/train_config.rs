use std::sync::mpsc;

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::model::params::LineParams;
use crate::train::iteration_stats::IterationStats;

/// Configuration for a `train_loop` run.
///
/// # Fields
/// - `learning_rate`  — step size α; not validated
/// - `num_iterations` — number of full-batch updates; the only stopping rule
/// - `initial_b`, `initial_w` — starting parameters
/// - `log_every`      — log progress every N iterations (`None` disables it)
/// - `progress_tx`    — optional channel sender; one `IterationStats` is sent
///                      per completed iteration. Never serialized.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct TrainConfig {
    pub learning_rate: f64,
    pub num_iterations: usize,
    pub initial_b: f64,
    pub initial_w: f64,
    pub log_every: Option<usize>,
    #[serde(skip)]
    pub progress_tx: Option<mpsc::Sender<IterationStats>>,
}

impl Default for TrainConfig {
    fn default() -> Self {
        TrainConfig {
            learning_rate: 0.0001,
            num_iterations: 1000,
            initial_b: 0.0,
            initial_w: 0.0,
            log_every: None,
            progress_tx: None,
        }
    }
}

impl TrainConfig {
    /// Creates a minimal `TrainConfig` starting from `b = w = 0` with no
    /// logging and no progress channel.
    pub fn new(learning_rate: f64, num_iterations: usize) -> Self {
        TrainConfig {
            learning_rate,
            num_iterations,
            ..TrainConfig::default()
        }
    }

    pub fn initial_params(&self) -> LineParams {
        LineParams::new(self.initial_b, self.initial_w)
    }

    /// Serializes the config to a pretty-printed JSON file.
    pub fn save_json(&self, path: &str) -> Result<()> {
        let file = std::fs::File::create(path)?;
        let writer = std::io::BufWriter::new(file);
        serde_json::to_writer_pretty(writer, self)?;
        Ok(())
    }

    /// Deserializes a `TrainConfig` from a JSON file. Missing fields take
    /// their default values.
    pub fn load_json(path: &str) -> Result<TrainConfig> {
        let file = std::fs::File::open(path)?;
        let reader = std::io::BufReader::new(file);
        Ok(serde_json::from_reader(reader)?)
    }
}
