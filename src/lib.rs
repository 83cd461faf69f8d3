//! `resilience-window` library crate.
//!
//! The binary (`rw`) is a thin wrapper around this library so that:
//!
//! - core logic (simulator, metrics, sweep) is testable without spawning processes
//! - modules are reusable (e.g., future GUI/daemon, notebooks, etc.)
//! - code stays easy to navigate as the project grows

pub mod app;
pub mod cli;
pub mod domain;
pub mod error;
pub mod io;
pub mod math;
pub mod metrics;
pub mod plot;
pub mod report;
pub mod sim;
pub mod sweep;
