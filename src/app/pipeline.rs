//! Shared "simulation pipeline" logic used by the CLI front-end.
//!
//! Keeping this in one place avoids duplicating the core workflow:
//! validate params -> simulate -> extract metrics (-> repeat per tau)
//!
//! The CLI can then focus on presentation (printing, plots, exports).

use crate::domain::{Metrics, Params, SweepRecord, Trajectory};
use crate::error::AppError;
use crate::metrics;
use crate::sim;
use crate::sweep;

/// All computed outputs of a single `rw run`.
#[derive(Debug, Clone)]
pub struct RunOutput {
    pub tau: f64,
    pub trajectory: Trajectory,
    pub metrics: Metrics,
}

/// All computed outputs of a `rw sweep`.
#[derive(Debug, Clone)]
pub struct SweepOutput {
    pub records: Vec<SweepRecord>,
}

/// Simulate one tau and reduce the trajectory to metrics.
pub fn run_single(tau: f64, p: &Params) -> Result<RunOutput, AppError> {
    p.validate()?;
    let trajectory = sim::simulate(tau, p)?;
    let metrics = metrics::extract(&trajectory, p)?;
    Ok(RunOutput {
        tau,
        trajectory,
        metrics,
    })
}

/// Evaluate every tau in order against one shared parameter set.
pub fn run_sweep(taus: &[f64], p: &Params) -> Result<SweepOutput, AppError> {
    let records = sweep::sweep_taus(taus, p)?;
    Ok(SweepOutput { records })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sweep::{best_record, log_space};

    #[test]
    fn single_run_produces_aligned_outputs() {
        let p = Params {
            steps: 800,
            burn_in: 80,
            ..Params::default()
        };
        let out = run_single(12.0, &p).unwrap();
        assert_eq!(out.tau, 12.0);
        assert_eq!(out.trajectory.len(), p.steps + 1);
        assert!(out.metrics.track_rmse.is_finite());
    }

    #[test]
    fn sweep_end_to_end_selects_a_best_tau() {
        let p = Params {
            steps: 1_500,
            burn_in: 150,
            ..Params::default()
        };
        let taus = log_space(0.5, 200.0, 8).unwrap();
        let out = run_sweep(&taus, &p).unwrap();
        let best = best_record(&out.records).unwrap();
        assert!(taus.contains(&best.tau));
    }

    #[test]
    fn invalid_params_fail_before_simulation() {
        let p = Params {
            steps: 10,
            burn_in: 10,
            ..Params::default()
        };
        assert!(run_single(5.0, &p).is_err());
        assert!(run_sweep(&[1.0, 2.0], &p).is_err());
    }
}
