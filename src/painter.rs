use std::f64::consts::LOG2_E;

use image::Rgba;

use crate::complex::C;
use crate::solver::Escape;

pub const INSIDE: Rgba<u8> = Rgba([0, 0, 0, 255]);

/// Coefficients of the hue/value ramp applied to the normalized escape value.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Gradient {
    pub hue_offset: f64,
    pub hue_scale: f64,
    pub saturation: f64,
    pub value_base: f64,
    pub value_scale: f64,
}

impl Gradient {
    pub const fn starfish() -> Self {
        Self {
            hue_offset: 0.66,
            hue_scale: 1.4,
            saturation: 0.85,
            value_base: 0.15,
            value_scale: 0.95,
        }
    }

    /// Hue wraps around the color wheel, value grows with `t`.
    pub fn hsv(&self, t: f64) -> (f64, f64, f64) {
        let h = (self.hue_offset + self.hue_scale * t) % 1.0;
        let v = self.value_base + self.value_scale * t;
        (h, self.saturation, v)
    }
}

impl Default for Gradient {
    fn default() -> Self {
        Self::starfish()
    }
}

/// Continuous escape count scaled into [0, 1].
pub fn smooth_value(iterations: u32, z: C<f64>, max_iterations: u32) -> f64 {
    let mag = z.norm();
    let nu = iterations as f64 + 1.0 - mag.ln().ln() * LOG2_E;
    let t = nu / max_iterations as f64;
    if t.is_nan() {
        0.0
    } else {
        t.clamp(0.0, 1.0)
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
enum Sector {
    RedYellow,
    YellowGreen,
    GreenCyan,
    CyanBlue,
    BlueMagenta,
    MagentaRed,
}

impl Sector {
    fn from_index(i: i64) -> Self {
        match i.rem_euclid(6) {
            0 => Sector::RedYellow,
            1 => Sector::YellowGreen,
            2 => Sector::GreenCyan,
            3 => Sector::CyanBlue,
            4 => Sector::BlueMagenta,
            _ => Sector::MagentaRed,
        }
    }

    fn rgb(self, v: f64, p: f64, q: f64, t: f64) -> (f64, f64, f64) {
        match self {
            Sector::RedYellow => (v, t, p),
            Sector::YellowGreen => (q, v, p),
            Sector::GreenCyan => (p, v, t),
            Sector::CyanBlue => (p, q, v),
            Sector::BlueMagenta => (t, p, v),
            Sector::MagentaRed => (v, p, q),
        }
    }
}

fn channel(x: f64) -> u8 {
    // `as` truncates toward zero, NaN becomes 0
    ((x * 255.0) as i64).clamp(0, 255) as u8
}

pub fn hsv_to_rgb(h: f64, s: f64, v: f64) -> [u8; 3] {
    let scaled = h * 6.0;
    let i = scaled.floor();
    let f = scaled - i;
    let p = v * (1.0 - s);
    let q = v * (1.0 - f * s);
    let t = v * (1.0 - (1.0 - f) * s);

    let (r, g, b) = Sector::from_index(i as i64).rgb(v, p, q, t);
    [channel(r), channel(g), channel(b)]
}

pub trait Painter {
    fn escaped_color(&self, iterations: u32, z: C<f64>) -> Rgba<u8>;

    fn color(&self, escape: &Escape) -> Rgba<u8> {
        match *escape {
            Escape::Inside => INSIDE,
            Escape::Escaped { iterations, z } => self.escaped_color(iterations, z),
        }
    }
}

/// Smooth-coloring painter over an HSV [`Gradient`].
#[derive(Copy, Clone, Debug)]
pub struct SmoothPainter {
    gradient: Gradient,
    max_iterations: u32,
}

impl SmoothPainter {
    pub fn new(gradient: Gradient, max_iterations: u32) -> Self {
        Self {
            gradient,
            max_iterations,
        }
    }
}

impl Painter for SmoothPainter {
    fn escaped_color(&self, iterations: u32, z: C<f64>) -> Rgba<u8> {
        let t = smooth_value(iterations, z, self.max_iterations);
        let (h, s, v) = self.gradient.hsv(t);
        let [r, g, b] = hsv_to_rgb(h, s, v);
        Rgba([r, g, b, 255])
    }
}
