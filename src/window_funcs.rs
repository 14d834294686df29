//! closed-form window weights
//!
//! Every function maps a sample index `n` in `0..points` to its weight.
//! None of them validate `points`; with `points < 2` the `points - 1`
//! normalization divides by zero. [`crate::window::apply`] checks the length
//! before calling into this module.
#![allow(clippy::many_single_char_names)]
use num_traits::{Float, FloatConst};

use crate::{
    lit,
    special::{bessel_i0, bessel_i0_scaled, sinc},
};

/// default alpha of the Gaussian window
pub const GAUSSIAN_ALPHA: f64 = 0.4;
/// default alpha of the Tukey window
pub const TUKEY_ALPHA: f64 = 0.5;
/// alpha reproducing the classic 0.42/0.5/0.08 Blackman coefficients
pub const BLACKMAN_ALPHA: f64 = 0.16;
/// default alpha of the Kaiser window
pub const KAISER_ALPHA: f64 = 3.0;

fn idx<T: Float>(n: usize) -> T {
    lit(n as f64)
}

fn span<T: Float>(points: usize) -> T {
    lit(points as f64 - 1.0)
}

/// `cos(2 k pi n / (points - 1))`
fn harmonic<T>(k: usize, n: usize, points: usize) -> T
where
    T: Float + FloatConst,
{
    (lit::<T>(2.0 * k as f64) * T::PI() * idx::<T>(n) / span::<T>(points)).cos()
}

/// sum of cosine harmonics with alternating signs, `a0 - a1 cos + a2 cos - ...`
fn cosine_sum<T>(coeffs: &[T], n: usize, points: usize) -> T
where
    T: Float + FloatConst,
{
    coeffs
        .iter()
        .enumerate()
        .skip(1)
        .fold(coeffs[0], |acc, (k, &a)| {
            if k % 2 == 1 {
                acc - a * harmonic(k, n, points)
            } else {
                acc + a * harmonic(k, n, points)
            }
        })
}

pub fn hann_weight<T>(n: usize, points: usize) -> T
where
    T: Float + FloatConst,
{
    let half = lit::<T>(0.5);
    half - half * harmonic(1, n, points)
}

pub fn hamming_weight<T>(n: usize, points: usize) -> T
where
    T: Float + FloatConst,
{
    lit::<T>(0.54) - lit::<T>(0.46) * harmonic(1, n, points)
}

pub fn cosine_weight<T>(n: usize, points: usize) -> T
where
    T: Float + FloatConst,
{
    (T::PI() * idx::<T>(n) / span::<T>(points)).sin()
}

pub fn lanczos_weight<T>(n: usize, points: usize) -> T
where
    T: Float + FloatConst,
{
    let two = T::one() + T::one();
    sinc(two * idx::<T>(n) / span::<T>(points) - T::one())
}

/// Gaussian bump, `alpha` is the standard deviation as a fraction of the half width
///
/// `alpha == 0` is the zero-width limit: 1 at an exact center sample, 0 elsewhere.
pub fn gaussian_weight<T>(n: usize, points: usize, alpha: T) -> T
where
    T: Float + FloatConst,
{
    let two = T::one() + T::one();
    let half = T::one() / two;
    let m = span::<T>(points);
    let d = idx::<T>(n) - m / two;
    if alpha.is_zero() {
        return if d.is_zero() { T::one() } else { T::zero() };
    }
    let x = d / (alpha * m / two);
    (-half * x.powi(2)).exp()
}

/// tapered cosine
/// * `alpha <= 0` - rectangular
/// * `alpha >= 1` - Hann
pub fn tukey_weight<T>(n: usize, points: usize, alpha: T) -> T
where
    T: Float + FloatConst,
{
    if alpha <= T::zero() {
        return T::one();
    }
    let alpha = if alpha > T::one() { T::one() } else { alpha };
    let two = T::one() + T::one();
    let half = T::one() / two;
    let m = span::<T>(points);
    let n = idx::<T>(n);

    if n < half * alpha * m {
        half * (T::one() + (T::PI() * (two * n / (alpha * m) - T::one())).cos())
    } else if n < (T::one() - half * alpha) * m {
        T::one()
    } else {
        half * (T::one() + (T::PI() * (two * n / (alpha * m) + T::one() - two / alpha)).cos())
    }
}

/// Blackman window
///
/// Without `alpha` the classic coefficients `0.42, 0.5, 0.08` are used,
/// otherwise the generalized `(1 - alpha)/2, 1/2, alpha/2`.
pub fn blackman_weight<T>(n: usize, points: usize, alpha: Option<T>) -> T
where
    T: Float + FloatConst,
{
    let coeffs = match alpha {
        None => [lit(0.42), lit(0.5), lit(0.08)],
        Some(a) => {
            let two = T::one() + T::one();
            [(T::one() - a) / two, T::one() / two, a / two]
        }
    };
    cosine_sum(&coeffs, n, points)
}

pub fn exact_blackman_weight<T>(n: usize, points: usize) -> T
where
    T: Float + FloatConst,
{
    cosine_sum(&[lit(0.4243801), lit(0.4973406), lit(0.0782793)], n, points)
}

/// Kaiser window, `I0(pi alpha sqrt(1 - (2n/(N-1) - 1)^2)) / I0(pi alpha)`
///
/// When `I0(pi alpha)` overflows the ratio is taken between scaled Bessel values.
pub fn kaiser_weight<T>(n: usize, points: usize, alpha: T) -> T
where
    T: Float + FloatConst,
{
    let two = T::one() + T::one();
    let r = two * idx::<T>(n) / span::<T>(points) - T::one();
    let pa = T::PI() * alpha;
    let x = pa * (T::one() - r.powi(2)).sqrt();
    let den = bessel_i0(pa);
    if den.is_finite() {
        bessel_i0(x) / den
    } else {
        bessel_i0_scaled(x) / bessel_i0_scaled(pa) * (x.abs() - pa.abs()).exp()
    }
}

pub fn nuttall_weight<T>(n: usize, points: usize) -> T
where
    T: Float + FloatConst,
{
    cosine_sum(
        &[lit(0.355768), lit(0.487396), lit(0.144232), lit(0.012604)],
        n,
        points,
    )
}

pub fn blackman_harris_weight<T>(n: usize, points: usize) -> T
where
    T: Float + FloatConst,
{
    cosine_sum(
        &[lit(0.35875), lit(0.48829), lit(0.14128), lit(0.01168)],
        n,
        points,
    )
}

pub fn blackman_nuttall_weight<T>(n: usize, points: usize) -> T
where
    T: Float + FloatConst,
{
    cosine_sum(
        &[lit(0.3635819), lit(0.3635819), lit(0.1365995), lit(0.0106411)],
        n,
        points,
    )
}

/// flat top window, constant term normalized to 1
pub fn flat_top_weight<T>(n: usize, points: usize) -> T
where
    T: Float + FloatConst,
{
    cosine_sum(
        &[lit(1.0), lit(1.93), lit(1.29), lit(0.388), lit(0.032)],
        n,
        points,
    )
}
