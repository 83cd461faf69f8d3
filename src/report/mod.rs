//! Formatted terminal output for runs and sweeps.
//!
//! We keep formatting code in one place so:
//! - the simulation/metric code stays clean and testable
//! - output changes are localized (important for future snapshot tests)

use crate::domain::{Metrics, Params, SweepRecord};

/// Format the summary of a single run: parameters, tau, and metrics.
pub fn format_run_summary(p: &Params, tau: f64, m: &Metrics) -> String {
    let mut out = String::new();

    out.push_str("=== rw - Resilience Window Run ===\n");
    out.push_str(&format!(
        "Params: omega={:.6} sigma_e={:.3} gamma={:.3} eta={:.3} sigma={:.3}\n",
        p.omega, p.sigma_e, p.gamma, p.eta, p.sigma
    ));
    out.push_str(&format!(
        "        steps={} burn_in={} seed={}\n",
        p.steps, p.burn_in, p.seed
    ));
    out.push_str(&format!("Tau: {tau}\n"));
    out.push_str("\nMetrics:\n");
    out.push_str(&format!("- track_rmse:       {:.6}\n", m.track_rmse));
    out.push_str(&format!("- volatility:       {:.6}\n", m.volatility));
    out.push_str(&format!("- rigidity:         {:.6}\n", m.rigidity));
    out.push_str(&format!("- resilience_score: {:.6}\n", m.resilience_score));

    out
}

/// Format the sweep table, marking the best record with `*`, followed by a
/// `[BEST]` line.
pub fn format_sweep_table(records: &[SweepRecord], best: Option<&SweepRecord>) -> String {
    let mut out = String::new();

    out.push_str("=== rw - Resilience Window Sweep ===\n");
    out.push_str(&format!(
        "{:>1} {:>12} {:>12} {:>12} {:>12} {:>16}\n",
        "", "tau", "track_rmse", "volatility", "rigidity", "resilience_score"
    ));

    for r in records {
        let chosen = match best {
            Some(b) if std::ptr::eq(b, r) => "*",
            _ => " ",
        };
        out.push_str(&format!(
            "{chosen} {:>12.4} {:>12.6} {:>12.6} {:>12.6} {:>16.6}\n",
            r.tau,
            r.metrics.track_rmse,
            r.metrics.volatility,
            r.metrics.rigidity,
            r.metrics.resilience_score,
        ));
    }

    if let Some(b) = best {
        out.push_str(&format!(
            "\n[BEST] tau={} score={:.6}\n",
            b.tau, b.metrics.resilience_score
        ));
    }

    out
}
