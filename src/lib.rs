pub mod cli;
pub mod data;
pub mod error;
pub mod loss;
pub mod model;
pub mod optim;
pub mod train;

// Convenience re-exports
pub use data::sample::Sample;
pub use error::{Error, Result};
pub use loss::mse::{compute_error, compute_mse, MseLoss};
pub use model::params::LineParams;
pub use optim::gradient::{compute_gradient, step_gradient, Gradient};
pub use optim::gradient_descent::GradientDescent;
pub use train::loop_fn::{fit, train_loop};
pub use train::{FitReport, IterationStats, TrainConfig, TrainingHistory};
