//! The per-step state-update recurrence.
//!
//! Model, for `t = 0 .. steps-1` with memory decay rate `alpha = 1/tau`:
//!
//! ```text
//! e[t]    = sin(omega * t) + N(0, sigma_e)
//! ehat[t] = M[t]
//! eps[t]  = e[t] - ehat[t]
//! x[t+1]  = (1 - gamma) * x[t] + tanh(M[t]) + eta * eps[t] + sigma * eps[t]^3
//! M[t+1]  = (1 - alpha) * M[t] + alpha * x[t+1]
//! ```
//!
//! `M` is an exponential moving average of the state with effective window
//! ≈ tau steps; tau enters the dynamics nowhere else. The `tanh` term is a
//! bounded nonlinear drive; the cubic error term dominates the linear
//! corrective term for large errors.

use rand::prelude::*;
use rand::rngs::StdRng;
use rand_distr::Normal;

use crate::domain::{Params, Trajectory};
use crate::error::AppError;

/// Simulate one trajectory for a given memory timescale `tau`.
///
/// Deterministic given `(tau, Params)`: the RNG is seeded once from
/// `p.seed` and advanced exactly once per time point, in time order —
/// `steps + 1` draws in total (the last one fills the trailing alignment
/// point that never feeds back into the recurrence).
pub fn simulate(tau: f64, p: &Params) -> Result<Trajectory, AppError> {
    if !(tau.is_finite() && tau > 0.0) {
        return Err(AppError::invalid(format!("tau must be > 0 (got {tau}).")));
    }

    let mut rng = StdRng::seed_from_u64(p.seed);
    let noise = Normal::new(0.0, p.sigma_e)
        .map_err(|e| AppError::invalid(format!("Invalid noise std sigma_e={}: {e}", p.sigma_e)))?;
    let alpha = 1.0 / tau;

    let n = p.steps + 1;
    let mut x = vec![0.0f64; n];
    let mut m = vec![0.0f64; n];
    let mut e = vec![0.0f64; n];
    let mut ehat = vec![0.0f64; n];
    let mut eps = vec![0.0f64; n];

    for t in 0..p.steps {
        e[t] = (p.omega * t as f64).sin() + noise.sample(&mut rng);

        ehat[t] = m[t];
        eps[t] = e[t] - ehat[t];

        x[t + 1] = (1.0 - p.gamma) * x[t]
            + m[t].tanh()
            + p.eta * eps[t]
            + p.sigma * eps[t].powi(3);

        m[t + 1] = (1.0 - alpha) * m[t] + alpha * x[t + 1];
    }

    // Trailing environment point so all five sequences stay aligned; it is
    // never fed back into a state update.
    e[p.steps] = (p.omega * p.steps as f64).sin() + noise.sample(&mut rng);
    ehat[p.steps] = m[p.steps];
    eps[p.steps] = e[p.steps] - ehat[p.steps];

    Ok(Trajectory { x, m, e, ehat, eps })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scenario_params() -> Params {
        Params {
            omega: 2.0 * std::f64::consts::PI / 800.0,
            sigma_e: 0.0,
            gamma: 0.02,
            eta: 0.35,
            sigma: 0.06,
            steps: 100,
            burn_in: 10,
            seed: 1,
        }
    }

    #[test]
    fn rejects_non_positive_tau() {
        let p = Params::default();
        assert_eq!(simulate(0.0, &p).unwrap_err().exit_code(), 2);
        assert_eq!(simulate(-3.0, &p).unwrap_err().exit_code(), 2);
    }

    #[test]
    fn two_runs_are_bit_identical() {
        let p = Params {
            steps: 500,
            burn_in: 50,
            ..Params::default()
        };
        let a = simulate(12.0, &p).unwrap();
        let b = simulate(12.0, &p).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn starts_from_zero_state_and_memory() {
        let sim = simulate(7.0, &scenario_params()).unwrap();
        assert_eq!(sim.x[0], 0.0);
        assert_eq!(sim.m[0], 0.0);
    }

    #[test]
    fn eps_equals_e_minus_ehat_at_every_index() {
        let p = Params {
            steps: 300,
            burn_in: 10,
            ..Params::default()
        };
        let sim = simulate(5.0, &p).unwrap();
        assert_eq!(sim.len(), p.steps + 1);
        for t in 0..sim.len() {
            assert!((sim.eps[t] - (sim.e[t] - sim.ehat[t])).abs() < 1e-12);
            assert_eq!(sim.ehat[t], sim.m[t]);
        }
    }

    #[test]
    fn larger_tau_means_slower_memory() {
        // With negligible noise, M moves much less per step at tau=1000 than
        // at tau=1 (where M just equals x).
        let p = Params {
            sigma_e: 1e-12,
            steps: 200,
            burn_in: 10,
            ..Params::default()
        };
        let slow = simulate(1000.0, &p).unwrap();
        let fast = simulate(1.0, &p).unwrap();
        let t = 50;
        let slow_step = (slow.m[t + 1] - slow.m[t]).abs();
        let fast_step = (fast.m[t + 1] - fast.m[t]).abs();
        assert!(slow_step < fast_step);
    }

    #[test]
    fn degenerate_tau_one_completes() {
        // alpha = 1: memory equals state at every step.
        let p = scenario_params();
        let sim = simulate(1.0, &p).unwrap();
        assert_eq!(sim.len(), p.steps + 1);
        for t in 1..sim.len() {
            assert!((sim.m[t] - sim.x[t]).abs() < 1e-12);
        }
    }

    #[test]
    fn zero_noise_run_is_pure_sinusoid_environment() {
        let p = scenario_params();
        let sim = simulate(12.0, &p).unwrap();
        for t in 0..sim.len() {
            let expected = (p.omega * t as f64).sin();
            assert!((sim.e[t] - expected).abs() < 1e-12);
        }
    }
}
