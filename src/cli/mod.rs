use clap::{ArgGroup, Parser};
use log::info;

use crate::data::{load_csv, noisy_line, LineSpec, Sample};
use crate::error::{Error, Result};
use crate::model::params::LineParams;
use crate::train::{train_loop, FitReport, TrainConfig};

#[derive(Debug, Parser)]
#[command(
    name = "linefit",
    about = "Fit y = w*x + b to a two-column dataset by batch gradient descent",
    version
)]
#[command(group(ArgGroup::new("source").required(true).args(["data", "synthetic"])))]
pub struct Cli {
    /// CSV file with two numeric columns (x, y); a header row is optional
    pub data: Option<String>,

    /// Generate N noisy points instead of reading a file
    #[arg(long, value_name = "N")]
    pub synthetic: Option<usize>,

    /// Slope of the generated line
    #[arg(long, default_value_t = 1.0, allow_negative_numbers = true)]
    pub true_w: f64,

    /// Intercept of the generated line
    #[arg(long, default_value_t = 0.0, allow_negative_numbers = true)]
    pub true_b: f64,

    /// Standard deviation of the noise added to generated targets
    #[arg(long, default_value_t = 0.0)]
    pub noise: f64,

    /// Seed for the generated dataset
    #[arg(long, default_value_t = 42)]
    pub seed: u64,

    /// JSON training config; flags below override its values
    #[arg(long, value_name = "PATH")]
    pub config: Option<String>,

    /// Learning rate
    #[arg(long)]
    pub alpha: Option<f64>,

    /// Number of gradient-descent iterations
    #[arg(long)]
    pub iterations: Option<usize>,

    /// JSON file with starting parameters `{ "b": .., "w": .. }`, e.g. the
    /// `--params-out` of an earlier run; `--b`/`--w` still override it
    #[arg(long, value_name = "PATH")]
    pub init_params: Option<String>,

    /// Initial intercept
    #[arg(long = "b", allow_negative_numbers = true)]
    pub initial_b: Option<f64>,

    /// Initial slope
    #[arg(long = "w", allow_negative_numbers = true)]
    pub initial_w: Option<f64>,

    /// Log progress every N iterations (visible with RUST_LOG=debug)
    #[arg(long, value_name = "N")]
    pub log_every: Option<usize>,

    /// Write the result (parameters, MSE, history) as JSON
    #[arg(long, value_name = "PATH")]
    pub output: Option<String>,

    /// Write only the fitted parameters as JSON
    #[arg(long, value_name = "PATH")]
    pub params_out: Option<String>,
}

impl Cli {
    /// Reads the dataset from the CSV path or generates it.
    pub fn load_data(&self) -> Result<Vec<Sample>> {
        if let Some(n) = self.synthetic {
            if n == 0 {
                return Err(Error::EmptyDataset);
            }
            let spec = LineSpec {
                w: self.true_w,
                b: self.true_b,
                noise: self.noise,
                ..LineSpec::default()
            };
            info!("generating {n} samples around y = {}*x + {}", spec.w, spec.b);
            return Ok(noisy_line(n, spec, self.seed));
        }

        // clap guarantees one of the two sources.
        let path = self.data.as_deref().unwrap_or_default();
        info!("loading dataset from {path}");
        load_csv(path)
    }

    /// Config file (or defaults) with command-line overrides applied.
    pub fn train_config(&self) -> Result<TrainConfig> {
        let mut config = match &self.config {
            Some(path) => TrainConfig::load_json(path)?,
            None => TrainConfig::default(),
        };

        if let Some(path) = &self.init_params {
            let start = LineParams::load_json(path)?;
            config.initial_b = start.b;
            config.initial_w = start.w;
        }
        if let Some(alpha) = self.alpha {
            config.learning_rate = alpha;
        }
        if let Some(iterations) = self.iterations {
            config.num_iterations = iterations;
        }
        if let Some(b) = self.initial_b {
            config.initial_b = b;
        }
        if let Some(w) = self.initial_w {
            config.initial_w = w;
        }
        if self.log_every.is_some() {
            config.log_every = self.log_every;
        }

        Ok(config)
    }
}

/// Loads data, trains, and optionally writes the JSON report and parameters.
pub fn run(cli: &Cli) -> Result<FitReport> {
    let data = cli.load_data()?;
    let config = cli.train_config()?;

    let history = train_loop(&data, &config);
    let report = FitReport::new(&data, config.initial_params(), history);

    if let Some(path) = &cli.output {
        report.save_json(path)?;
        info!("wrote report to {path}");
    }
    if let Some(path) = &cli.params_out {
        report.params.save_json(path)?;
        info!("wrote parameters to {path}");
    }

    Ok(report)
}
