//! Shared domain types.
//!
//! Everything in here is serializable so the same structs can be:
//!
//! - used in-memory during simulation and sweeps
//! - exported to JSON/CSV
//! - reloaded later for plotting or comparisons

pub mod types;

pub use types::*;
