//! `rootscan` — real roots of `a·x² + b·x + c = 0` by Newton-Raphson.

mod cli;
mod logger;
mod report;
mod trace;

use std::process::ExitCode;

use clap::Parser;

use rootscan_quadratic::{
    DERIVATIVE_TOL, Error, find_roots_observed, newton_raphson_observed, scan_config,
};
use rootscan_solvers::equation::newton;

use cli::{Cli, Command};
use report::{NewtonReport, RootsReport};
use trace::TraceObserver;

fn main() -> ExitCode {
    let cli = Cli::parse();
    logger::init(cli.verbose);

    match run(cli.command) {
        Ok(report) => {
            print!("{report}");
            ExitCode::SUCCESS
        }
        Err(err) => {
            tracing::debug!("{err:#}");
            match err.downcast_ref::<Error>() {
                Some(input @ (Error::InvalidCoefficient { .. } | Error::InvalidConfig(_))) => {
                    eprintln!("Input error: {}", report::input_prompt(input));
                    ExitCode::from(2)
                }
                _ => {
                    eprintln!("An unexpected error occurred: {err:#}");
                    ExitCode::FAILURE
                }
            }
        }
    }
}

fn run(command: Command) -> anyhow::Result<String> {
    match command {
        Command::Roots { coefficients, tol } => {
            let quadratic = coefficients.quadratic()?;
            let config = scan_config(tol)?;

            tracing::info!(%quadratic, tol, "scanning for real roots");
            let roots = find_roots_observed(&quadratic, &config, TraceObserver)?;
            tracing::info!(count = roots.len(), "scan finished");

            Ok(RootsReport::new(&quadratic, &roots).to_string())
        }
        Command::Newton {
            coefficients,
            x0,
            tol,
            max_iters,
        } => {
            let quadratic = coefficients.quadratic()?;
            let config = newton::Config::new(max_iters, tol, DERIVATIVE_TOL).map_err(Error::from)?;

            tracing::info!(%quadratic, x0, tol, max_iters, "running Newton-Raphson");
            let result = newton_raphson_observed(&quadratic, x0, &config, TraceObserver)?;

            Ok(NewtonReport::new(&quadratic, x0, &result).to_string())
        }
    }
}
