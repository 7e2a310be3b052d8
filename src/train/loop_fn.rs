use log::{debug, info};

use crate::data::sample::Sample;
use crate::loss::mse::compute_mse;
use crate::optim::gradient_descent::GradientDescent;
use crate::train::history::TrainingHistory;
use crate::train::iteration_stats::IterationStats;
use crate::train::train_config::TrainConfig;

// ---------------------------------------------------------------------------
// Public entry points
// ---------------------------------------------------------------------------

/// Runs `num_iterations` batch gradient-descent updates of `(b, w)` over
/// `data` and returns the `b` and `w` histories.
///
/// Each history holds the values *after* every update, so both have length
/// `num_iterations` and their last entries are the final parameters. Zero
/// iterations return two empty vectors.
pub fn fit(
    data: &[Sample],
    b: f64,
    w: f64,
    alpha: f64,
    num_iterations: usize,
) -> (Vec<f64>, Vec<f64>) {
    let config = TrainConfig {
        initial_b: b,
        initial_w: w,
        ..TrainConfig::new(alpha, num_iterations)
    };

    train_loop(data, &config).into_parts()
}

/// Trains from `config.initial_params()` for `config.num_iterations`
/// iterations with step size `config.learning_rate` and returns the recorded
/// history.
///
/// # Progress
/// - every `config.log_every` iterations the current parameters and MSE are
///   logged at debug level
/// - if `config.progress_tx` is set, one `IterationStats` is sent per
///   iteration. A dropped receiver ends reporting; training still runs to
///   the full iteration count.
pub fn train_loop(data: &[Sample], config: &TrainConfig) -> TrainingHistory {
    let optimizer = GradientDescent::new(config.learning_rate);
    let initial = config.initial_params();
    let total = config.num_iterations;
    let mut history = TrainingHistory::with_capacity(total);
    let mut params = initial;
    let mut progress_tx = config.progress_tx.clone();

    info!(
        "training on {} samples: alpha={} iterations={} b0={} w0={}",
        data.len(),
        optimizer.learning_rate,
        total,
        initial.b,
        initial.w
    );

    for iteration in 1..=total {
        params = optimizer.step(params, data);
        history.push(params);

        let log_now = matches!(config.log_every, Some(every) if every > 0 && iteration % every == 0);
        if progress_tx.is_none() && !log_now {
            continue;
        }

        let mse = compute_mse(params.b, params.w, data);
        if log_now {
            debug!("iteration {iteration}/{total}: b={} w={} mse={mse}", params.b, params.w);
        }

        if let Some(tx) = &progress_tx {
            let stats = IterationStats {
                iteration,
                total_iterations: total,
                b: params.b,
                w: params.w,
                mse,
            };
            if tx.send(stats).is_err() {
                debug!("progress receiver dropped at iteration {iteration}");
                progress_tx = None;
            }
        }
    }

    info!("training finished: b={} w={}", params.b, params.w);
    history
}
