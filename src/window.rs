//! window catalog and the routines that apply a window to a sequence
//!
//! Application mutates the caller's buffer in place and hands the same
//! buffer back, so calls can be chained:
//! ```
//! let mut x = vec![1.0_f64; 5];
//! rswindow::window::hann(&mut x, None).unwrap();
//! assert!((x[2] - 1.0).abs() < 1e-12);
//! ```

use std::{fmt, str::FromStr};

use num_complex::Complex;
use num_traits::{Float, FloatConst};
use serde::{Deserialize, Serialize};

use crate::{error::WindowError, lit, window_funcs::*};

/// all supported windows
#[derive(Debug, PartialEq, Eq, Hash, Clone, Copy, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WindowKind {
    Hann,
    Hamming,
    Cosine,
    Lanczos,
    Gaussian,
    Tukey,
    Blackman,
    ExactBlackman,
    Kaiser,
    Nuttall,
    BlackmanHarris,
    BlackmanNuttall,
    FlatTop,
}

impl WindowKind {
    pub const ALL: [WindowKind; 13] = [
        WindowKind::Hann,
        WindowKind::Hamming,
        WindowKind::Cosine,
        WindowKind::Lanczos,
        WindowKind::Gaussian,
        WindowKind::Tukey,
        WindowKind::Blackman,
        WindowKind::ExactBlackman,
        WindowKind::Kaiser,
        WindowKind::Nuttall,
        WindowKind::BlackmanHarris,
        WindowKind::BlackmanNuttall,
        WindowKind::FlatTop,
    ];

    pub fn name(self) -> &'static str {
        match self {
            WindowKind::Hann => "hann",
            WindowKind::Hamming => "hamming",
            WindowKind::Cosine => "cosine",
            WindowKind::Lanczos => "lanczos",
            WindowKind::Gaussian => "gaussian",
            WindowKind::Tukey => "tukey",
            WindowKind::Blackman => "blackman",
            WindowKind::ExactBlackman => "exact_blackman",
            WindowKind::Kaiser => "kaiser",
            WindowKind::Nuttall => "nuttall",
            WindowKind::BlackmanHarris => "blackman_harris",
            WindowKind::BlackmanNuttall => "blackman_nuttall",
            WindowKind::FlatTop => "flat_top",
        }
    }

    /// alpha used when the caller passes `None`, `None` for windows without a shape parameter
    pub fn default_alpha(self) -> Option<f64> {
        match self {
            WindowKind::Gaussian => Some(GAUSSIAN_ALPHA),
            WindowKind::Tukey => Some(TUKEY_ALPHA),
            WindowKind::Blackman => Some(BLACKMAN_ALPHA),
            WindowKind::Kaiser => Some(KAISER_ALPHA),
            _ => None,
        }
    }

    pub fn takes_alpha(self) -> bool {
        self.default_alpha().is_some()
    }

    /// weight of sample `n` out of `points`
    ///
    /// `alpha` is ignored by windows without a shape parameter.
    /// `points` is not checked here, see [`apply`].
    pub fn weight<T>(self, n: usize, points: usize, alpha: Option<T>) -> T
    where
        T: Float + FloatConst,
    {
        let or_default = |d: f64| alpha.unwrap_or_else(|| lit(d));
        match self {
            WindowKind::Hann => hann_weight(n, points),
            WindowKind::Hamming => hamming_weight(n, points),
            WindowKind::Cosine => cosine_weight(n, points),
            WindowKind::Lanczos => lanczos_weight(n, points),
            WindowKind::Gaussian => gaussian_weight(n, points, or_default(GAUSSIAN_ALPHA)),
            WindowKind::Tukey => tukey_weight(n, points, or_default(TUKEY_ALPHA)),
            WindowKind::Blackman => blackman_weight(n, points, alpha),
            WindowKind::ExactBlackman => exact_blackman_weight(n, points),
            WindowKind::Kaiser => kaiser_weight(n, points, or_default(KAISER_ALPHA)),
            WindowKind::Nuttall => nuttall_weight(n, points),
            WindowKind::BlackmanHarris => blackman_harris_weight(n, points),
            WindowKind::BlackmanNuttall => blackman_nuttall_weight(n, points),
            WindowKind::FlatTop => flat_top_weight(n, points),
        }
    }
}

impl fmt::Display for WindowKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for WindowKind {
    type Err = WindowError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        WindowKind::ALL
            .iter()
            .copied()
            .find(|k| k.name() == s)
            .ok_or_else(|| WindowError::UnknownWindow(s.to_string()))
    }
}

fn check_len(kind: WindowKind, points: usize) -> Result<(), WindowError> {
    if points < 2 {
        tracing::debug!(window = %kind, points, "sequence too short to window");
        Err(WindowError::InvalidLength { points })
    } else {
        Ok(())
    }
}

/// Multiply `workpiece` in place by the `kind` window and return it.
///
/// The caller's buffer is overwritten. Sequences shorter than 2 points are
/// rejected before any sample is touched. Non-finite samples or alpha
/// propagate through the arithmetic.
pub fn apply<T>(
    workpiece: &mut [T],
    kind: WindowKind,
    alpha: Option<T>,
) -> Result<&mut [T], WindowError>
where
    T: Float + FloatConst + fmt::Debug,
{
    let n = workpiece.len();
    check_len(kind, n)?;
    tracing::debug!(window = %kind, points = n, ?alpha, "applying window");
    workpiece.iter_mut().enumerate().for_each(|(i, x)| {
        *x = *x * kind.weight(i, n, alpha);
    });
    Ok(workpiece)
}

/// [`apply`] for complex samples, both parts are scaled by the same weight
pub fn apply_complex<T>(
    workpiece: &mut [Complex<T>],
    kind: WindowKind,
    alpha: Option<T>,
) -> Result<&mut [Complex<T>], WindowError>
where
    T: Float + FloatConst + fmt::Debug,
{
    let n = workpiece.len();
    check_len(kind, n)?;
    tracing::debug!(window = %kind, points = n, ?alpha, "applying window to complex samples");
    workpiece.iter_mut().enumerate().for_each(|(i, x)| {
        *x = *x * kind.weight(i, n, alpha);
    });
    Ok(workpiece)
}

/// look the window up by its name, then [`apply`] it
pub fn apply_named<'a, T>(
    name: &str,
    workpiece: &'a mut [T],
    alpha: Option<T>,
) -> Result<&'a mut [T], WindowError>
where
    T: Float + FloatConst + fmt::Debug,
{
    apply(workpiece, name.parse()?, alpha)
}

/// the weight curve itself, i.e. the window applied to a sequence of ones
pub fn weights<T>(kind: WindowKind, points: usize, alpha: Option<T>) -> Result<Vec<T>, WindowError>
where
    T: Float + FloatConst,
{
    check_len(kind, points)?;
    Ok((0..points).map(|i| kind.weight(i, points, alpha)).collect())
}

macro_rules! named_windows {
    ($($(#[$doc:meta])* $name:ident => $kind:ident;)*) => {
        $(
            $(#[$doc])*
            pub fn $name<T>(workpiece: &mut [T], alpha: Option<T>) -> Result<&mut [T], WindowError>
            where
                T: Float + FloatConst + fmt::Debug,
            {
                apply(workpiece, WindowKind::$kind, alpha)
            }
        )*
    };
}

named_windows! {
    /// Hann window, `alpha` is ignored
    hann => Hann;
    /// Hamming window, `alpha` is ignored
    hamming => Hamming;
    /// cosine (sine) window, `alpha` is ignored
    cosine => Cosine;
    /// Lanczos window, `alpha` is ignored
    lanczos => Lanczos;
    /// Gaussian window, `alpha` defaults to 0.4, `Some(0.0)` keeps only an exact center sample
    gaussian => Gaussian;
    /// Tukey window, `alpha` defaults to 0.5
    tukey => Tukey;
    /// Blackman window, classic coefficients unless `alpha` is given
    blackman => Blackman;
    exact_blackman => ExactBlackman;
    /// Kaiser window, `alpha` defaults to 3, large values stay finite
    kaiser => Kaiser;
    nuttall => Nuttall;
    blackman_harris => BlackmanHarris;
    blackman_nuttall => BlackmanNuttall;
    flat_top => FlatTop;
}

/// a window together with its shape parameter
#[derive(Debug, PartialEq, Clone, Copy)]
pub struct Window<T> {
    pub kind: WindowKind,
    pub alpha: Option<T>,
}

impl<T> Window<T>
where
    T: Float + FloatConst + fmt::Debug,
{
    pub fn new(kind: WindowKind) -> Self {
        Window { kind, alpha: None }
    }

    pub fn with_alpha(mut self, alpha: T) -> Self {
        self.alpha = Some(alpha);
        self
    }

    pub fn apply<'a>(&self, workpiece: &'a mut [T]) -> Result<&'a mut [T], WindowError> {
        apply(workpiece, self.kind, self.alpha)
    }

    pub fn apply_complex<'a>(
        &self,
        workpiece: &'a mut [Complex<T>],
    ) -> Result<&'a mut [Complex<T>], WindowError> {
        apply_complex(workpiece, self.kind, self.alpha)
    }

    pub fn weights(&self, points: usize) -> Result<Vec<T>, WindowError> {
        weights(self.kind, points, self.alpha)
    }
}

impl<T> From<WindowKind> for Window<T> {
    fn from(kind: WindowKind) -> Self {
        Window { kind, alpha: None }
    }
}
