use tracing::debug;

use rootscan_core::Observer;
use rootscan_quadratic::Sample;
use rootscan_solvers::equation::{multi_start, newton};

/// Logs solver progress at `debug` level without steering the solver.
pub struct TraceObserver;

impl Observer<multi_start::Event, multi_start::Action> for TraceObserver {
    fn observe(&mut self, event: &multi_start::Event) -> Option<multi_start::Action> {
        match event {
            multi_start::Event::Accepted { seed, root, iters } => {
                debug!(seed, root, iters, "accepted root");
            }
            multi_start::Event::Duplicate { seed, root, iters } => {
                debug!(seed, root, iters, "discarded duplicate root");
            }
            multi_start::Event::NotConverged {
                seed,
                status,
                x,
                iters,
            } => {
                debug!(seed, ?status, x, iters, "seed did not converge");
            }
        }
        None
    }
}

impl<'a> Observer<newton::Event<'a, f64, Sample>, newton::Action> for TraceObserver {
    fn observe(&mut self, event: &newton::Event<'a, f64, Sample>) -> Option<newton::Action> {
        debug!(
            iter = event.iter(),
            x = event.x(),
            residual = event.residual(),
            derivative = event.derivative(),
            "newton iteration"
        );
        None
    }
}
