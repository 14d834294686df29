//! window functions applied to finite sequences before spectral analysis

pub mod batch;
pub mod cfg;
pub mod error;
pub mod special;
pub mod window;
pub mod window_funcs;

use num_traits::Float;

pub use error::WindowError;
pub use window::{Window, WindowKind};

/// float literal in the target precision
#[inline]
pub(crate) fn lit<T: Float>(x: f64) -> T {
    T::from(x).unwrap_or_else(T::nan)
}
