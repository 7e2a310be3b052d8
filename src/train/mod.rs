pub mod history;
pub mod iteration_stats;
pub mod loop_fn;
pub mod report;
pub mod train_config;

pub use history::TrainingHistory;
pub use iteration_stats::IterationStats;
pub use loop_fn::{fit, train_loop};
pub use report::FitReport;
pub use train_config::TrainConfig;
