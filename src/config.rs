use crate::complex::*;
use crate::coord::Frame;
use crate::error::RenderError;
use crate::painter::Gradient;
use crate::solver::BAILOUT;

/// c = -0.4 + 0.6i, the "starfish" Julia constant.
pub const STARFISH_C: C<f64> = c(-0.4, 0.6);
pub const DEFAULT_SIZE: u32 = 1024;
pub const DEFAULT_ITERATIONS: u32 = 1024;

/// Everything one render depends on.
#[derive(Clone, Debug, PartialEq)]
pub struct RenderConfig {
    pub width: u32,
    pub height: u32,
    pub max_iterations: u32,
    pub c: C<f64>,
    pub frame: Frame<f64>,
    pub bailout: f64,
    pub gradient: Gradient,
    /// 0 and 1 both render on the calling thread.
    pub threads: usize,
}

impl RenderConfig {
    /// An `n`x`n` starfish with at most `max_iterations` steps per pixel.
    pub fn square(n: u32, max_iterations: u32) -> Self {
        Self {
            width: n,
            height: n,
            max_iterations,
            c: STARFISH_C,
            frame: Frame::starfish(),
            bailout: BAILOUT,
            gradient: Gradient::starfish(),
            threads: 0,
        }
    }

    pub fn with_threads(mut self, threads: usize) -> Self {
        self.threads = threads;
        self
    }

    pub fn validate(&self) -> Result<(), RenderError> {
        if self.width == 0 || self.height == 0 {
            return Err(RenderError::InvalidConfig("image must be at least 1x1"));
        }
        if self.max_iterations == 0 {
            return Err(RenderError::InvalidConfig("max iterations must be positive"));
        }
        if !self.frame.is_finite() {
            return Err(RenderError::InvalidConfig("view window must be finite"));
        }
        if !(self.c.re.is_finite() && self.c.im.is_finite()) {
            return Err(RenderError::InvalidConfig("julia constant must be finite"));
        }
        if !(self.bailout.is_finite() && self.bailout > 0.0) {
            return Err(RenderError::InvalidConfig("bailout must be positive"));
        }
        Ok(())
    }
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self::square(DEFAULT_SIZE, DEFAULT_ITERATIONS)
    }
}

/// Parses a pixel or iteration count. Any finite positive number is
/// accepted and truncated, as long as something is left after truncation.
pub fn parse_count(arg: &str) -> Result<u32, RenderError> {
    let invalid = || RenderError::InvalidCount(arg.to_string());
    let n: f64 = arg.trim().parse().map_err(|_| invalid())?;
    if !n.is_finite() || n <= 0.0 {
        return Err(invalid());
    }
    let n = n.trunc();
    if n < 1.0 || n > u32::MAX as f64 {
        return Err(invalid());
    }
    Ok(n as u32)
}
