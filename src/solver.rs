use crate::complex::*;

/// Escape radius squared; anything past |z| = 2 diverges.
pub const BAILOUT: f64 = 4.0;

/// Outcome of iterating a single starting point.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum Escape {
    /// Still bounded after the full iteration budget.
    Inside,
    /// Left the bailout radius after `iterations` steps; `z` is the first
    /// iterate outside it.
    Escaped { iterations: u32, z: C<f64> },
}

impl Escape {
    pub fn is_inside(&self) -> bool {
        matches!(self, Escape::Inside)
    }
}

/// Escape-time evaluator for the Julia iteration z <- z^2 + c.
#[derive(Copy, Clone, Debug)]
pub struct EscapeTime {
    c: C<f64>,
    bailout: f64,
    max_iterations: u32,
}

impl EscapeTime {
    pub fn new(c: C<f64>, bailout: f64, max_iterations: u32) -> Self {
        Self {
            c,
            bailout,
            max_iterations,
        }
    }

    pub fn max_iterations(&self) -> u32 {
        self.max_iterations
    }

    pub fn escape(&self, z0: C<f64>) -> Escape {
        let C { re: c_re, im: c_im } = self.c;
        let mut zr = z0.re;
        let mut zi = z0.im;
        let mut zr2 = zr * zr;
        let mut zi2 = zi * zi;

        let mut i = 0;
        while i < self.max_iterations && norm_sqr_parts(zr2, zi2) <= self.bailout {
            zi = (zr + zr) * zi + c_im;
            zr = (zr2 - zi2) + c_re;
            zr2 = zr * zr;
            zi2 = zi * zi;
            i += 1;
        }

        if i >= self.max_iterations {
            Escape::Inside
        } else {
            Escape::Escaped {
                iterations: i,
                z: c(zr, zi),
            }
        }
    }
}
