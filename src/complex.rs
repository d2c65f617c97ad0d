//! Complex-number shorthands over `num::complex`.
use num::complex::Complex;

pub type C<T> = Complex<T>;

pub const fn c(re: f64, im: f64) -> C<f64> {
    Complex::new(re, im)
}

/// Purely real value.
pub const fn cr(re: f64) -> C<f64> {
    c(re, 0.0)
}

/// Purely imaginary value.
pub const fn ci(im: f64) -> C<f64> {
    c(0.0, im)
}

/// Squared magnitude from already-squared parts, as tracked by the escape loop.
#[inline]
pub fn norm_sqr_parts(re2: f64, im2: f64) -> f64 {
    re2 + im2
}
