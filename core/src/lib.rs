//! Descriptive-statistics core for the Rust stats platform.
//!
//! The modules provide the typed slice surface for mean, population
//! variance, and standard deviation, plus a loosely typed JSON ingestion
//! path with well-defined validation errors.

pub mod dataset;
pub mod descriptive;
pub mod prelude;

pub use prelude::{StatsError, StatsResult, Summary};
