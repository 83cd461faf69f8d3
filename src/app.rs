//! Top-level application orchestration.
//!
//! `src/main.rs` is intentionally tiny; this module is the "real main" that:
//! - parses CLI arguments
//! - runs single simulations and tau sweeps
//! - prints reports/plots
//! - writes optional exports

use clap::Parser;

use crate::cli::{Command, PlotArgs, RunArgs, SimArgs, SweepArgs};
use crate::domain::Params;
use crate::error::AppError;
use crate::sweep::{best_record, log_space};

pub mod pipeline;

/// Entry point for the `rw` binary.
pub fn run() -> Result<(), AppError> {
    // We want `rw` and `rw --tau 12` to behave like `rw run ...`.
    //
    // Clap requires a subcommand name, so we do a small, explicit rewrite of
    // the argv list before parsing. This preserves a clean clap structure
    // while keeping the short invocation ergonomic.
    let argv = rewrite_args(std::env::args().collect());
    let cli = crate::cli::Cli::parse_from(argv);

    match cli.command {
        Command::Run(args) => handle_run(args),
        Command::Sweep(args) => handle_sweep(args),
        Command::Plot(args) => handle_plot(args),
    }
}

fn handle_run(args: RunArgs) -> Result<(), AppError> {
    let params = params_from_args(&args.sim);
    let run = pipeline::run_single(args.tau, &params)?;

    println!(
        "{}",
        crate::report::format_run_summary(&params, run.tau, &run.metrics)
    );

    if args.plot {
        let plot =
            crate::plot::render_run_plot(&run.trajectory, params.burn_in, args.width, args.height);
        println!("{plot}");
    }

    if let Some(path) = &args.export_run {
        crate::io::write_run_json(path, &params, run.tau, &run.trajectory, &run.metrics)?;
        println!("[OK] Run saved: {}", path.display());
    }

    Ok(())
}

fn handle_sweep(args: SweepArgs) -> Result<(), AppError> {
    let params = params_from_args(&args.sim);
    let taus = log_space(args.tau_min, args.tau_max, args.tau_n)?;
    let sweep = pipeline::run_sweep(&taus, &params)?;
    let best = best_record(&sweep.records);

    println!("{}", crate::report::format_sweep_table(&sweep.records, best));

    if args.plot {
        let plot = crate::plot::render_sweep_plots(&sweep.records, args.width, args.height);
        println!("{plot}");
    }

    if let Some(path) = &args.export {
        crate::io::write_sweep_csv(path, &sweep.records)?;
        println!("[OK] Sweep saved: {}", path.display());
    }
    if let Some(path) = &args.export_sweep {
        crate::io::write_sweep_json(path, &params, &sweep.records)?;
        println!("[OK] Sweep JSON saved: {}", path.display());
    }

    Ok(())
}

fn handle_plot(args: PlotArgs) -> Result<(), AppError> {
    match (&args.run, &args.sweep) {
        (Some(path), None) => {
            let run = crate::io::read_run_json(path)?;
            let plot = crate::plot::render_run_plot(
                &run.trajectory,
                run.params.burn_in,
                args.width,
                args.height,
            );
            println!("{plot}");
            Ok(())
        }
        (None, Some(path)) => {
            let sweep = crate::io::read_sweep_json(path)?;
            let plot = crate::plot::render_sweep_plots(&sweep.records, args.width, args.height);
            println!("{plot}");
            Ok(())
        }
        _ => Err(AppError::invalid(
            "Pass exactly one of --run <JSON> or --sweep <JSON>.",
        )),
    }
}

pub fn params_from_args(args: &SimArgs) -> Params {
    Params {
        omega: args.omega,
        sigma_e: args.sigma_e,
        gamma: args.gamma,
        eta: args.eta,
        sigma: args.sigma,
        steps: args.steps,
        burn_in: args.burn_in,
        seed: args.seed,
    }
}

/// Rewrite argv so `rw` defaults to `rw run`.
///
/// Rules:
/// - `rw`                      -> `rw run`
/// - `rw --tau 12 ...`         -> `rw run --tau 12 ...`
/// - `rw --help/--version/-h`  -> unchanged (show top-level help/version)
fn rewrite_args(mut argv: Vec<String>) -> Vec<String> {
    let Some(arg1) = argv.get(1).cloned() else {
        argv.push("run".to_string());
        return argv;
    };

    let is_top_level_help_or_version =
        matches!(arg1.as_str(), "-h" | "--help" | "-V" | "--version" | "help");
    if is_top_level_help_or_version {
        return argv;
    }

    let is_subcommand = matches!(arg1.as_str(), "run" | "sweep" | "plot");
    if is_subcommand {
        return argv;
    }

    // If the first token is a flag, treat it as "run flags".
    if arg1.starts_with('-') {
        argv.insert(1, "run".to_string());
        return argv;
    }

    // Otherwise, leave as-is.
    argv
}
