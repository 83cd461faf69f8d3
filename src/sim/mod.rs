//! Trajectory simulation.
//!
//! Responsibilities:
//!
//! - run the fixed-step feedback recurrence for one `(tau, Params)` pair
//! - own the seeded RNG for that run (never a global resource)

pub mod engine;

pub use engine::*;
