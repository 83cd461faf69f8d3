//! Tau sweep orchestration.
//!
//! Responsibilities:
//!
//! - generate log-spaced tau grids
//! - evaluate simulate + extract for each tau (parallel across taus)
//! - select the best record by resilience score

pub mod runner;
pub mod tau_grid;

pub use runner::*;
pub use tau_grid::*;
