pub mod gradient;
pub mod gradient_descent;

pub use gradient::{compute_gradient, step_gradient, Gradient};
pub use gradient_descent::GradientDescent;
