use std::process;

use clap::Parser;
use linefit::cli::{run, Cli};

fn main() {
    env_logger::init();

    let cli = Cli::parse();
    match run(&cli) {
        Ok(report) => {
            println!("initial mse = {:.6}", report.initial_mse);
            println!("b = {:.6}, w = {:.6}", report.params.b, report.params.w);
            println!("final mse = {:.6} after {} iterations", report.mse, report.history.len());
        }
        Err(e) => {
            eprintln!("{e}");
            process::exit(1);
        }
    }
}
