//! Tau grid generation.
//!
//! Sweeps cover several orders of magnitude of the memory timescale, so the
//! grid is log-spaced: equally many candidates per decade instead of
//! clustering at the high end.

use crate::error::AppError;

/// Generate `n` log-spaced points between `min` and `max` (inclusive).
///
/// `n == 1` yields just `[min]`.
pub fn log_space(min: f64, max: f64, n: usize) -> Result<Vec<f64>, AppError> {
    if !(min.is_finite() && max.is_finite() && min > 0.0 && max > min) {
        return Err(AppError::invalid(format!(
            "Invalid tau range: min={min}, max={max} (must be finite, >0, and max>min)."
        )));
    }
    if n < 1 {
        return Err(AppError::invalid("Tau count must be >= 1."));
    }
    if n == 1 {
        return Ok(vec![min]);
    }

    let ln_min = min.ln();
    let ln_max = max.ln();
    let step = (ln_max - ln_min) / (n as f64 - 1.0);

    let mut out = Vec::with_capacity(n);
    for i in 0..n {
        out.push((ln_min + step * i as f64).exp());
    }
    Ok(out)
}
