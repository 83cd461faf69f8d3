//! Reductions used by the metric extractor.
//!
//! These mirror the conventions of common array libraries so metric values
//! stay comparable with prior analyses of the same model:
//!
//! - `population_std` uses the population definition (divide by `n`, not `n-1`)
//! - `percentile` uses linear interpolation between order statistics

/// Arithmetic mean. Returns NaN on an empty slice; callers guard emptiness.
pub fn mean(values: &[f64]) -> f64 {
    values.iter().sum::<f64>() / values.len() as f64
}

/// Population standard deviation (divide by `n`).
pub fn population_std(values: &[f64]) -> f64 {
    let mu = mean(values);
    let var = values.iter().map(|v| (v - mu) * (v - mu)).sum::<f64>() / values.len() as f64;
    var.sqrt()
}

/// Consecutive differences: `out[i] = values[i+1] - values[i]`.
pub fn diff(values: &[f64]) -> Vec<f64> {
    values.windows(2).map(|w| w[1] - w[0]).collect()
}

/// The `q`-th percentile (`0 <= q <= 100`) with linear interpolation between
/// the two nearest order statistics.
///
/// # Panics
/// Panics on an empty slice; callers guard emptiness.
pub fn percentile(values: &[f64], q: f64) -> f64 {
    assert!(!values.is_empty(), "percentile of empty slice");
    let mut sorted = values.to_vec();
    sorted.sort_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal));

    let pos = (q / 100.0).clamp(0.0, 1.0) * (sorted.len() as f64 - 1.0);
    let lo = pos.floor() as usize;
    let hi = pos.ceil() as usize;
    if lo == hi {
        return sorted[lo];
    }
    let frac = pos - lo as f64;
    sorted[lo] + frac * (sorted[hi] - sorted[lo])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mean_and_std_of_constant_slice() {
        let v = [3.0; 8];
        assert_eq!(mean(&v), 3.0);
        assert_eq!(population_std(&v), 0.0);
    }

    #[test]
    fn population_std_divides_by_n() {
        // Var([1, 3]) = 1 with the population convention (sample var would be 2).
        assert!((population_std(&[1.0, 3.0]) - 1.0).abs() < 1e-12);
    }

    #[test]
    fn diff_has_one_fewer_element() {
        let d = diff(&[0.0, 1.0, 3.0, 6.0]);
        assert_eq!(d, vec![1.0, 2.0, 3.0]);
    }

    #[test]
    fn percentile_interpolates_linearly() {
        let v = [0.0, 1.0, 2.0, 3.0, 4.0];
        assert!((percentile(&v, 50.0) - 2.0).abs() < 1e-12);
        // pos = 0.9 * 4 = 3.6 -> 3 + 0.6 * (4 - 3)
        assert!((percentile(&v, 90.0) - 3.6).abs() < 1e-12);
    }

    #[test]
    fn percentile_handles_unsorted_input() {
        let v = [4.0, 0.0, 2.0, 3.0, 1.0];
        assert!((percentile(&v, 0.0) - 0.0).abs() < 1e-12);
        assert!((percentile(&v, 100.0) - 4.0).abs() < 1e-12);
    }
}
