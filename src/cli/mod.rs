//! Command-line parsing for the resilience-window simulator.
//!
//! The goal of this module is to keep **argument parsing** and **command
//! dispatch** separate from the simulation/metric code.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

/// Top-level CLI.
#[derive(Debug, Parser)]
#[command(name = "rw", version, about = "Resilience-window toy model: simulate, measure, sweep tau")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

/// CLI subcommands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Simulate a single tau, print metrics, and optionally plot/export.
    Run(RunArgs),
    /// Sweep a log-spaced tau range and report the best-scoring tau.
    Sweep(SweepArgs),
    /// Plot a previously exported run or sweep JSON artifact.
    Plot(PlotArgs),
}

/// Simulation parameters shared by `run` and `sweep`.
#[derive(Debug, Args, Clone)]
pub struct SimArgs {
    /// Environment angular frequency (slow signal).
    #[arg(long, default_value_t = 2.0 * std::f64::consts::PI / 800.0)]
    pub omega: f64,

    /// Environment noise standard deviation.
    #[arg(long = "sigma-e", default_value_t = 0.20)]
    pub sigma_e: f64,

    /// Damping coefficient.
    #[arg(long, default_value_t = 0.02)]
    pub gamma: f64,

    /// Corrective gain (linear error term).
    #[arg(long, default_value_t = 0.35)]
    pub eta: f64,

    /// Generative gain (cubic error term).
    #[arg(long, default_value_t = 0.06)]
    pub sigma: f64,

    /// Total update iterations.
    #[arg(long, default_value_t = 20_000)]
    pub steps: usize,

    /// Initial steps discarded before computing metrics.
    #[arg(long = "burn-in", default_value_t = 2_000)]
    pub burn_in: usize,

    /// RNG seed.
    #[arg(long, default_value_t = 7)]
    pub seed: u64,
}

/// Options for a single-tau run.
#[derive(Debug, Parser)]
pub struct RunArgs {
    #[command(flatten)]
    pub sim: SimArgs,

    /// Memory timescale tau (>0).
    #[arg(long, default_value_t = 12.0)]
    pub tau: f64,

    /// Render an ASCII plot of the post-burn-in window.
    #[arg(long)]
    pub plot: bool,

    /// Plot width (columns).
    #[arg(long, default_value_t = 100)]
    pub width: usize,

    /// Plot height (rows).
    #[arg(long, default_value_t = 25)]
    pub height: usize,

    /// Export the run (params + trajectory + metrics) to JSON.
    #[arg(long = "export-run")]
    pub export_run: Option<PathBuf>,
}

/// Options for a tau sweep.
#[derive(Debug, Parser)]
pub struct SweepArgs {
    #[command(flatten)]
    pub sim: SimArgs,

    /// Minimum tau of the log-spaced grid.
    #[arg(long = "tau-min", default_value_t = 0.5)]
    pub tau_min: f64,

    /// Maximum tau of the log-spaced grid.
    #[arg(long = "tau-max", default_value_t = 200.0)]
    pub tau_max: f64,

    /// Number of taus in the grid.
    #[arg(long = "tau-n", default_value_t = 40)]
    pub tau_n: usize,

    /// Render ASCII sweep charts (score, rmse, volatility/rigidity).
    #[arg(long)]
    pub plot: bool,

    /// Plot width (columns).
    #[arg(long, default_value_t = 100)]
    pub width: usize,

    /// Plot height (rows).
    #[arg(long, default_value_t = 25)]
    pub height: usize,

    /// Export sweep metrics to CSV.
    #[arg(long)]
    pub export: Option<PathBuf>,

    /// Export the sweep (params + records) to JSON.
    #[arg(long = "export-sweep")]
    pub export_sweep: Option<PathBuf>,
}

/// Options for plotting a saved artifact.
#[derive(Debug, Parser)]
pub struct PlotArgs {
    /// Run JSON file produced by `rw run --export-run`.
    #[arg(long, value_name = "JSON", conflicts_with = "sweep")]
    pub run: Option<PathBuf>,

    /// Sweep JSON file produced by `rw sweep --export-sweep`.
    #[arg(long, value_name = "JSON")]
    pub sweep: Option<PathBuf>,

    /// Plot width (columns).
    #[arg(long, default_value_t = 100)]
    pub width: usize,

    /// Plot height (rows).
    #[arg(long, default_value_t = 25)]
    pub height: usize,
}
