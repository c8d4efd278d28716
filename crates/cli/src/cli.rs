use clap::{Args, Parser, Subcommand};

use rootscan_quadratic::{DEFAULT_MAX_ITER, DEFAULT_TOL, Error, Quadratic};

/// Find real roots of a·x² + b·x + c = 0 using Newton-Raphson.
#[derive(Debug, Parser)]
#[command(name = "rootscan", version, about)]
pub struct Cli {
    /// Log every seed and iteration (RUST_LOG overrides)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Scan the default seeds and report every distinct real root
    Roots {
        #[command(flatten)]
        coefficients: Coefficients,

        /// Step size below which a Newton run counts as converged
        #[arg(long, default_value_t = DEFAULT_TOL)]
        tol: f64,
    },

    /// Run Newton-Raphson from a single starting point
    Newton {
        #[command(flatten)]
        coefficients: Coefficients,

        /// Starting estimate
        #[arg(long = "from", allow_negative_numbers = true)]
        x0: f64,

        /// Step size below which the run counts as converged
        #[arg(long, default_value_t = DEFAULT_TOL)]
        tol: f64,

        /// Iteration budget
        #[arg(long, default_value_t = DEFAULT_MAX_ITER)]
        max_iters: usize,
    },
}

/// The three coefficients of a·x² + b·x + c.
#[derive(Debug, Clone, Copy, Args)]
pub struct Coefficients {
    /// Coefficient of x² (must be non-zero)
    #[arg(allow_negative_numbers = true)]
    pub a: f64,

    /// Coefficient of x
    #[arg(allow_negative_numbers = true)]
    pub b: f64,

    /// Constant term
    #[arg(allow_negative_numbers = true)]
    pub c: f64,
}

impl Coefficients {
    /// Validates the coefficients as a quadratic.
    pub fn quadratic(self) -> Result<Quadratic, Error> {
        Quadratic::new(self.a, self.b, self.c)
    }
}
