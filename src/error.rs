//! errors reported by the window routines

use thiserror::Error;

#[derive(Error, Debug)]
pub enum WindowError {
    /// every window normalizes by `points - 1`, so at least two points are needed
    #[error("Window needs at least 2 points, got {points}")]
    InvalidLength { points: usize },
    /// batch axis outside a 2-d array
    #[error("Axis {axis} out of range for a 2-d array")]
    InvalidAxis { axis: usize },
    /// name outside the window catalog
    #[error("Unknown window function: {0:?}")]
    UnknownWindow(String),
    /// malformed window cfg
    #[error(transparent)]
    Cfg(#[from] serde_yaml::Error),
}
