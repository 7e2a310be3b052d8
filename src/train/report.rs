use serde::{Deserialize, Serialize};

use crate::data::sample::Sample;
use crate::error::Result;
use crate::loss::mse::MseLoss;
use crate::model::params::LineParams;
use crate::train::history::TrainingHistory;

/// Outcome of a training run: final parameters, their MSE and the full history.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FitReport {
    pub params: LineParams,
    pub initial_mse: f64,
    pub mse: f64,
    pub history: TrainingHistory,
}

impl FitReport {
    /// Builds the report for a run that started at `initial`. With an empty
    /// history the final parameters are `initial`.
    pub fn new(data: &[Sample], initial: LineParams, history: TrainingHistory) -> FitReport {
        let params = history.last().unwrap_or(initial);
        FitReport {
            params,
            initial_mse: MseLoss::loss(&initial, data),
            mse: MseLoss::loss(&params, data),
            history,
        }
    }

    /// Serializes the report to a pretty-printed JSON file.
    pub fn save_json(&self, path: &str) -> Result<()> {
        let file = std::fs::File::create(path)?;
        let writer = std::io::BufWriter::new(file);
        serde_json::to_writer_pretty(writer, self)?;
        Ok(())
    }
}
