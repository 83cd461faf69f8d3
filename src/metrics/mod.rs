//! Metric extraction: reduce a finished trajectory to four regime indicators.
//!
//! The warm-up prefix (`burn_in` points) is discarded first so transient
//! start-up behavior never contaminates the metrics. The constants below
//! (the `1e-9` guards, the 90th percentile, the `0.5` scale in `target_vol`)
//! are legacy tuning values; the concrete metric values are only comparable
//! across runs if they stay exactly as they are.

use crate::domain::{Metrics, Params, Trajectory};
use crate::error::AppError;
use crate::math::{diff, mean, percentile, population_std};

/// Compute the regime metrics for one trajectory.
///
/// Fails with a degenerate-input error when fewer than two points survive the
/// burn-in discard (the state-difference series would be empty and every
/// formula below undefined).
pub fn extract(sim: &Trajectory, p: &Params) -> Result<Metrics, AppError> {
    if p.burn_in + 2 > sim.len() {
        return Err(AppError::degenerate(format!(
            "burn_in={} leaves {} point(s); need at least 2 for metrics.",
            p.burn_in,
            sim.len().saturating_sub(p.burn_in)
        )));
    }

    let x = &sim.x[p.burn_in..];
    let e = &sim.e[p.burn_in..];
    let ehat = &sim.ehat[p.burn_in..];

    let eps: Vec<f64> = e.iter().zip(ehat).map(|(a, b)| a - b).collect();
    let track_rmse = mean(&eps.iter().map(|v| v * v).collect::<Vec<_>>()).sqrt();

    let dx = diff(x);
    let volatility = population_std(&dx);

    // Rigidity: large when the state barely moves.
    let abs_dx: Vec<f64> = dx.iter().map(|v| v.abs()).collect();
    let rigidity = 1.0 / (mean(&abs_dx) + 1e-9);

    // A "moderate" volatility scale taken from the run's own upper-tail
    // movement; deviations in either direction are penalized relative to it.
    let target_vol = 0.5 * (percentile(&abs_dx, 90.0) + 1e-9);
    let vol_penalty = (volatility - target_vol).abs() / (target_vol + 1e-9);

    let resilience_score = 1.0 / (track_rmse + 1e-9) * 1.0 / (1.0 + vol_penalty);

    Ok(Metrics {
        track_rmse,
        volatility,
        rigidity,
        resilience_score,
    })
}
