pub mod params;

pub use params::LineParams;
