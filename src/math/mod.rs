//! Mathematical utilities: small reductions over sample slices.

pub mod stats;

pub use stats::*;
