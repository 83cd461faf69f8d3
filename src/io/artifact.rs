//! Read/write run and sweep JSON artifacts.
//!
//! Artifact JSON is the "portable" representation of a finished computation:
//! the full parameter set plus either one trajectory (run artifact) or the
//! per-tau metric records (sweep artifact). The `plot` subcommand reloads
//! these, so a long sweep never has to be recomputed just to look at it again.

use std::fs::File;
use std::path::Path;

use crate::domain::{Metrics, Params, RunFile, SweepFile, SweepRecord, Trajectory};
use crate::error::AppError;

const TOOL_TAG: &str = "rw";

/// Write a single-run artifact.
pub fn write_run_json(
    path: &Path,
    p: &Params,
    tau: f64,
    trajectory: &Trajectory,
    metrics: &Metrics,
) -> Result<(), AppError> {
    let file = create(path)?;
    let doc = RunFile {
        tool: TOOL_TAG.to_string(),
        params: p.clone(),
        tau,
        metrics: *metrics,
        trajectory: trajectory.clone(),
    };
    serde_json::to_writer_pretty(file, &doc)
        .map_err(|e| AppError::invalid(format!("Failed to write run JSON: {e}")))?;
    Ok(())
}

/// Read a single-run artifact.
pub fn read_run_json(path: &Path) -> Result<RunFile, AppError> {
    let file = File::open(path)
        .map_err(|e| AppError::invalid(format!("Failed to open run JSON '{}': {e}", path.display())))?;
    serde_json::from_reader(file).map_err(|e| AppError::invalid(format!("Invalid run JSON: {e}")))
}

/// Write a sweep artifact.
pub fn write_sweep_json(path: &Path, p: &Params, records: &[SweepRecord]) -> Result<(), AppError> {
    let file = create(path)?;
    let doc = SweepFile {
        tool: TOOL_TAG.to_string(),
        params: p.clone(),
        records: records.to_vec(),
    };
    serde_json::to_writer_pretty(file, &doc)
        .map_err(|e| AppError::invalid(format!("Failed to write sweep JSON: {e}")))?;
    Ok(())
}

/// Read a sweep artifact.
pub fn read_sweep_json(path: &Path) -> Result<SweepFile, AppError> {
    let file = File::open(path).map_err(|e| {
        AppError::invalid(format!("Failed to open sweep JSON '{}': {e}", path.display()))
    })?;
    serde_json::from_reader(file).map_err(|e| AppError::invalid(format!("Invalid sweep JSON: {e}")))
}

fn create(path: &Path) -> Result<File, AppError> {
    if let Some(dir) = path.parent().filter(|d| !d.as_os_str().is_empty()) {
        std::fs::create_dir_all(dir).map_err(|e| {
            AppError::invalid(format!("Failed to create output dir '{}': {e}", dir.display()))
        })?;
    }
    File::create(path)
        .map_err(|e| AppError::invalid(format!("Failed to create '{}': {e}", path.display())))
}
