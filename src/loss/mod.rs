pub mod mse;

pub use mse::{compute_error, compute_mse, MseLoss};
