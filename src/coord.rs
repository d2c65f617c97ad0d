use num::{Float, Num};

use crate::complex::*;

#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Axis<T> {
    pub min: T,
    pub max: T,
}

impl<T> Axis<T>
where
    T: Num + Copy,
{
    pub const fn new(min: T, max: T) -> Self {
        Self { min, max }
    }

    pub fn length(&self) -> T {
        self.max - self.min
    }

    pub fn center(&self) -> T {
        (self.max + self.min) / (T::one() + T::one())
    }
}

impl<T> Axis<T>
where
    T: Float,
{
    /// Distance between neighbouring samples when the axis is cut into
    /// `samples` points, both ends included. A single sample has no step.
    pub fn step(&self, samples: usize) -> T {
        if samples < 2 {
            return T::zero();
        }
        match T::from(samples - 1) {
            Some(gaps) => self.length() / gaps,
            None => T::zero(),
        }
    }

    pub fn is_finite(&self) -> bool {
        self.min.is_finite() && self.max.is_finite()
    }
}

#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Frame<T> {
    pub x: Axis<T>,
    pub y: Axis<T>,
}

impl<T> Frame<T>
where
    T: Num + Copy,
{
    pub const fn new(x: Axis<T>, y: Axis<T>) -> Self {
        Self { x, y }
    }

    pub fn from_nums(x1: T, x2: T, y1: T, y2: T) -> Self {
        Self::new(Axis::new(x1, x2), Axis::new(y1, y2))
    }

    pub fn aspect_ratio(&self) -> T {
        self.x.length() / self.y.length()
    }
}

impl Frame<f64> {
    /// The square window the starfish fits in.
    pub const fn starfish() -> Self {
        Self::new(Axis::new(-1.6, 1.6), Axis::new(-1.6, 1.6))
    }

    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

impl Default for Frame<f64> {
    fn default() -> Self {
        Self::starfish()
    }
}

/// Complex-plane sample positions for every pixel column and row.
///
/// Row 0 is the top of the image, so rows count down from `y.max`.
#[derive(Clone, Debug)]
pub struct Grid {
    xs: Vec<f64>,
    ys: Vec<f64>,
}

impl Grid {
    pub fn new(frame: &Frame<f64>, width: usize, height: usize) -> Self {
        let dx = frame.x.step(width);
        let dy = frame.y.step(height);
        let xs = (0..width).map(|x| frame.x.min + x as f64 * dx).collect();
        let ys = (0..height).map(|y| frame.y.max - y as f64 * dy).collect();
        Self { xs, ys }
    }

    pub fn width(&self) -> usize {
        self.xs.len()
    }

    pub fn height(&self) -> usize {
        self.ys.len()
    }

    pub fn xs(&self) -> &[f64] {
        &self.xs
    }

    pub fn y(&self, row: usize) -> f64 {
        self.ys[row]
    }

    pub fn point(&self, x: usize, y: usize) -> C<f64> {
        cr(self.xs[x]) + ci(self.ys[y])
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_grid_corners() {
        let grid = Grid::new(&Frame::starfish(), 4, 4);
        assert_eq!(grid.point(0, 0), c(-1.6, 1.6));
        let last = grid.point(3, 3);
        assert!((last.re - 1.6).abs() < 1e-12);
        assert!((last.im + 1.6).abs() < 1e-12);
    }

    #[test]
    fn test_grid_rows_count_down() {
        let grid = Grid::new(&Frame::starfish(), 5, 5);
        assert_eq!(grid.width(), 5);
        assert_eq!(grid.height(), 5);
        assert_eq!(grid.y(2), 0.0);
        for row in 1..5 {
            assert!(grid.y(row) < grid.y(row - 1));
        }
        assert_eq!(grid.xs()[2], 0.0);
    }

    #[test]
    fn test_rectangular_grid() {
        let frame = Frame::from_nums(-2.0, 1.0, -1.0, 1.0);
        let grid = Grid::new(&frame, 7, 3);
        assert_eq!(grid.point(6, 2), c(1.0, -1.0));
        assert_eq!(grid.point(0, 1), c(-2.0, 0.0));
        assert_eq!(frame.aspect_ratio(), 1.5);
    }

    #[test]
    fn test_single_sample_axis() {
        let axis = Axis::new(-1.6, 1.6);
        assert_eq!(axis.step(1), 0.0);
        assert_eq!(axis.center(), 0.0);
        let grid = Grid::new(&Frame::starfish(), 1, 1);
        assert_eq!(grid.point(0, 0), c(-1.6, 1.6));
    }

    #[test]
    fn test_non_finite_frame() {
        assert!(Frame::starfish().is_finite());
        assert!(!Frame::from_nums(f64::NAN, 1.0, -1.0, 1.0).is_finite());
        assert!(!Frame::from_nums(-1.0, 1.0, -1.0, f64::INFINITY).is_finite());
    }
}
