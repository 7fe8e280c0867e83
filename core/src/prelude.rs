use serde::{Deserialize, Serialize};

/// Common error type for statistics evaluation.
#[derive(thiserror::Error, Debug)]
pub enum StatsError {
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
    #[error("type mismatch: {0}")]
    TypeMismatch(String),
}

pub type StatsResult<T> = Result<T, StatsError>;

/// Summary of one evaluated sequence.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Summary {
    pub count: usize,
    pub average: f64,
    pub variance: f64,
    pub stdev: f64,
}
