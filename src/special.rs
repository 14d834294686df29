//! special functions needed by the window catalog

use num_traits::{Float, FloatConst};

use crate::lit;

/// polynomial of A&S 9.8.1 in `y = (x/3.75)^2`
fn i0_small<T: Float>(y: T) -> T {
    T::one()
        + y * (lit::<T>(3.5156229)
            + y * (lit::<T>(3.0899424)
                + y * (lit::<T>(1.2067492)
                    + y * (lit::<T>(0.2659732)
                        + y * (lit::<T>(0.360768e-1) + y * lit::<T>(0.45813e-2))))))
}

/// polynomial of A&S 9.8.2 in `y = 3.75/|x|`
fn i0_large<T: Float>(y: T) -> T {
    lit::<T>(0.39894228)
        + y * (lit::<T>(0.1328592e-1)
            + y * (lit::<T>(0.225319e-2)
                + y * (lit::<T>(-0.157565e-2)
                    + y * (lit::<T>(0.916281e-2)
                        + y * (lit::<T>(-0.2057706e-1)
                            + y * (lit::<T>(0.2635537e-1)
                                + y * (lit::<T>(-0.1647633e-1) + y * lit::<T>(0.392377e-2))))))))
}

/// Modified Bessel function of the first kind, order zero.
///
/// Polynomial approximation from Abramowitz & Stegun 9.8.1 and 9.8.2.
/// * `|x| < 3.75` - polynomial in `(x/3.75)^2`
/// * `|x| >= 3.75` - `exp(|x|)/sqrt(|x|)` times a polynomial in `3.75/|x|`
///
/// Overflows to infinity once `exp(|x|)` does, see [`bessel_i0_scaled`].
pub fn bessel_i0<T>(x: T) -> T
where
    T: Float,
{
    let ax = x.abs();
    let threshold = lit::<T>(3.75);

    if ax < threshold {
        let y = x / threshold;
        i0_small(y * y)
    } else {
        (ax.exp() / ax.sqrt()) * i0_large(threshold / ax)
    }
}

/// exponentially scaled `I0`, i.e. `exp(-|x|) I0(x)`, finite for every finite `x`
pub fn bessel_i0_scaled<T>(x: T) -> T
where
    T: Float,
{
    let ax = x.abs();
    let threshold = lit::<T>(3.75);

    if ax < threshold {
        let y = x / threshold;
        i0_small(y * y) * (-ax).exp()
    } else {
        i0_large(threshold / ax) / ax.sqrt()
    }
}

/// normalized sinc, `sin(pi x)/(pi x)`, equal to one at the origin
pub fn sinc<T>(x: T) -> T
where
    T: Float + FloatConst,
{
    if x.is_zero() {
        T::one()
    } else {
        let px = T::PI() * x;
        px.sin() / px
    }
}
