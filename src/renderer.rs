use std::sync::Arc;

use log::trace;

use crate::config::RenderConfig;
use crate::coord::Grid;
use crate::error::RenderError;
use crate::painter::{Painter, SmoothPainter};
use crate::solver::EscapeTime;
use crate::state::{Band, CHANNELS};
use crate::threads::Solver;

/// Paints bands of the frame; clones share one coordinate grid.
#[derive(Clone, Debug)]
pub struct Renderer {
    grid: Arc<Grid>,
    escape: EscapeTime,
    painter: SmoothPainter,
}

impl Renderer {
    pub fn new(config: &RenderConfig) -> Self {
        let grid = Grid::new(&config.frame, config.width as usize, config.height as usize);
        Self {
            grid: Arc::new(grid),
            escape: EscapeTime::new(config.c, config.bailout, config.max_iterations),
            painter: SmoothPainter::new(config.gradient, config.max_iterations),
        }
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }
}

impl Solver<Band> for Renderer {
    fn solve(&self, band: &Band) -> Result<Band, RenderError> {
        if band.width() != self.grid.width() {
            return Err(RenderError::InvalidConfig("band width does not match grid"));
        }
        let mut pixels = Vec::with_capacity(band.byte_len());
        for &row in band.rows() {
            if row >= self.grid.height() {
                return Err(RenderError::InvalidConfig("band row outside grid"));
            }
            trace!("row {}", row);
            for x in 0..self.grid.width() {
                let escape = self.escape.escape(self.grid.point(x, row));
                pixels.extend_from_slice(&self.painter.color(&escape).0);
            }
        }
        debug_assert_eq!(pixels.len(), band.height() * band.width() * CHANNELS);
        Ok(band.with_pixels(pixels))
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_band_of_small_frame() {
        let config = RenderConfig::square(4, 10);
        let renderer = Renderer::new(&config);
        let band = renderer.solve(&Band::new(4, vec![1])).unwrap();
        let px = band.pixels();
        assert_eq!(px.len(), 16);
        // (1, 1) is inside, (0, 1) and (2, 1) are not
        assert_eq!(&px[4..8], &[0, 0, 0, 255]);
        assert_ne!(&px[0..4], &[0, 0, 0, 255]);
        assert_ne!(&px[8..12], &[0, 0, 0, 255]);
    }

    #[test]
    fn test_rejects_foreign_band() {
        let renderer = Renderer::new(&RenderConfig::square(4, 10));
        assert!(renderer.solve(&Band::new(5, vec![0])).is_err());
        assert!(renderer.solve(&Band::new(4, vec![4])).is_err());
    }
}
