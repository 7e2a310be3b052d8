use serde::{Deserialize, Serialize};

/// Per-iteration training statistics emitted by `train_loop`.
///
/// When a `progress_tx` channel is configured in `TrainConfig`, the training
/// loop sends one `IterationStats` value after every completed update.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IterationStats {
    /// 1-based iteration number.
    pub iteration: usize,
    /// Total iterations requested for this run.
    pub total_iterations: usize,
    /// Intercept after this iteration's update.
    pub b: f64,
    /// Slope after this iteration's update.
    pub w: f64,
    /// MSE of the updated parameters over the training data.
    pub mse: f64,
}
