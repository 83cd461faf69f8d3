//! Core data entities: simulation parameters, trajectories, metrics records.

use serde::{Deserialize, Serialize};

use crate::error::AppError;

/// Immutable simulation constants.
///
/// One instance is shared read-only across every tau in a sweep, so sweep
/// comparisons isolate the effect of tau alone.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Params {
    /// Environment angular frequency (the drive is `sin(omega * t)`).
    pub omega: f64,
    /// Environment noise standard deviation (>= 0).
    pub sigma_e: f64,
    /// Damping coefficient; stable dynamics want `[0, 1)`.
    pub gamma: f64,
    /// Corrective gain on the prediction error.
    pub eta: f64,
    /// Generative gain on the cubed prediction error.
    pub sigma: f64,
    /// Total update iterations (>= 1).
    pub steps: usize,
    /// Discarded warm-up prefix length; `0 <= burn_in < steps`.
    pub burn_in: usize,
    /// RNG seed; a run is fully determined by `(tau, Params)`.
    pub seed: u64,
}

impl Default for Params {
    fn default() -> Self {
        Self {
            omega: 2.0 * std::f64::consts::PI / 800.0,
            sigma_e: 0.20,
            gamma: 0.02,
            eta: 0.35,
            sigma: 0.06,
            steps: 20_000,
            burn_in: 2_000,
            seed: 7,
        }
    }
}

impl Params {
    /// Reject parameter sets the simulator or the metric formulas are
    /// undefined on, before any run starts.
    pub fn validate(&self) -> Result<(), AppError> {
        for (name, v) in [
            ("omega", self.omega),
            ("sigma_e", self.sigma_e),
            ("gamma", self.gamma),
            ("eta", self.eta),
            ("sigma", self.sigma),
        ] {
            if !v.is_finite() {
                return Err(AppError::invalid(format!("Parameter {name} must be finite (got {v}).")));
            }
        }
        if self.sigma_e < 0.0 {
            return Err(AppError::invalid(format!(
                "sigma_e must be >= 0 (got {}).",
                self.sigma_e
            )));
        }
        if self.steps < 1 {
            return Err(AppError::invalid("steps must be >= 1."));
        }
        if self.burn_in >= self.steps {
            return Err(AppError::degenerate(format!(
                "burn_in={} leaves no usable data (steps={}).",
                self.burn_in, self.steps
            )));
        }
        Ok(())
    }
}

/// One simulated path: five aligned sequences of length `steps + 1`,
/// indexed by time step.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Trajectory {
    /// System state `x[t]`.
    pub x: Vec<f64>,
    /// Exponential-memory estimate `M[t]` of the environment.
    pub m: Vec<f64>,
    /// Environment signal `e[t]` (sinusoid + noise draw).
    pub e: Vec<f64>,
    /// Prediction exposed at time t (`ehat[t] == m[t]` by construction).
    pub ehat: Vec<f64>,
    /// Prediction error `eps[t] = e[t] - ehat[t]`.
    pub eps: Vec<f64>,
}

impl Trajectory {
    /// Number of time points (`steps + 1`).
    pub fn len(&self) -> usize {
        self.x.len()
    }

    pub fn is_empty(&self) -> bool {
        self.x.is_empty()
    }
}

/// The four regime indicators computed from one post-burn-in trajectory.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Metrics {
    /// RMS tracking error between environment and prediction; lower is better.
    pub track_rmse: f64,
    /// Population std of consecutive state differences.
    pub volatility: f64,
    /// `1 / (mean |dx| + 1e-9)`: large when the state is near-frozen.
    pub rigidity: f64,
    /// Composite heuristic; unbounded, larger is better.
    pub resilience_score: f64,
}

/// One sweep row: the metrics for a single tau.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SweepRecord {
    pub tau: f64,
    #[serde(flatten)]
    pub metrics: Metrics,
}

/// Portable single-run artifact (`rw run --export-run`).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunFile {
    pub tool: String,
    pub params: Params,
    pub tau: f64,
    pub metrics: Metrics,
    pub trajectory: Trajectory,
}

/// Portable sweep artifact (`rw sweep --export-sweep`).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SweepFile {
    pub tool: String,
    pub params: Params,
    pub records: Vec<SweepRecord>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_params_are_valid() {
        assert!(Params::default().validate().is_ok());
    }

    #[test]
    fn burn_in_past_steps_is_rejected() {
        let p = Params {
            steps: 100,
            burn_in: 100,
            ..Params::default()
        };
        let err = p.validate().unwrap_err();
        assert_eq!(err.exit_code(), 3);
    }

    #[test]
    fn negative_noise_std_is_rejected() {
        let p = Params {
            sigma_e: -0.1,
            ..Params::default()
        };
        assert_eq!(p.validate().unwrap_err().exit_code(), 2);
    }
}
