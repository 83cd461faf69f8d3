//! Terminal plotting for trajectories and sweeps.

pub mod ascii;

pub use ascii::*;
