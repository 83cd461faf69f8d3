//! Export/import of sweep and run artifacts (CSV and JSON).

pub mod artifact;
pub mod export;

pub use artifact::*;
pub use export::*;
