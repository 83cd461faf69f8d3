//! Export sweep records to CSV.
//!
//! The export is meant to be easy to consume in spreadsheets or downstream
//! scripts: one header row, then one row per tau in sweep order.

use std::fs::File;
use std::io::Write;
use std::path::Path;

use crate::domain::SweepRecord;
use crate::error::AppError;

/// Write sweep records to a CSV file, creating parent directories as needed.
pub fn write_sweep_csv(path: &Path, records: &[SweepRecord]) -> Result<(), AppError> {
    if let Some(dir) = path.parent().filter(|d| !d.as_os_str().is_empty()) {
        std::fs::create_dir_all(dir).map_err(|e| {
            AppError::invalid(format!("Failed to create output dir '{}': {e}", dir.display()))
        })?;
    }

    let mut file = File::create(path).map_err(|e| {
        AppError::invalid(format!("Failed to create sweep CSV '{}': {e}", path.display()))
    })?;

    writeln!(file, "tau,track_rmse,volatility,rigidity,resilience_score")
        .map_err(|e| AppError::invalid(format!("Failed to write sweep CSV header: {e}")))?;

    for r in records {
        writeln!(
            file,
            "{:.10},{:.10},{:.10},{:.10},{:.10}",
            r.tau,
            r.metrics.track_rmse,
            r.metrics.volatility,
            r.metrics.rigidity,
            r.metrics.resilience_score,
        )
        .map_err(|e| AppError::invalid(format!("Failed to write sweep CSV row: {e}")))?;
    }

    Ok(())
}
