pub mod csv;
pub mod sample;
pub mod synthetic;

pub use self::csv::{load_csv, parse_csv};
pub use sample::{from_pairs, Sample};
pub use synthetic::{noisy_line, LineSpec};
