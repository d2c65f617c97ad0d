use image::RgbaImage;

use crate::error::RenderError;
use crate::threads::Split;

pub const CHANNELS: usize = 4;

/// A run of image rows and the RGBA bytes rendered for them so far.
///
/// Splitting hands each part its own rows and its own byte buffer, so
/// workers never share output memory.
#[derive(Clone, Debug, PartialEq)]
pub struct Band {
    width: usize,
    rows: Vec<usize>,
    pixels: Vec<u8>,
}

impl Band {
    /// An unrendered band covering every row of the frame.
    pub fn frame(width: usize, height: usize) -> Self {
        Self::new(width, (0..height).collect())
    }

    pub fn new(width: usize, rows: Vec<usize>) -> Self {
        Self {
            width,
            rows,
            pixels: vec![],
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.rows.len()
    }

    pub fn rows(&self) -> &[usize] {
        &self.rows
    }

    pub fn pixels(&self) -> &[u8] {
        &self.pixels
    }

    /// Same rows, freshly painted bytes.
    pub fn with_pixels(&self, pixels: Vec<u8>) -> Self {
        Self {
            width: self.width,
            rows: self.rows.clone(),
            pixels,
        }
    }

    pub fn byte_len(&self) -> usize {
        self.width * self.height() * CHANNELS
    }

    pub fn into_image(self) -> Result<RgbaImage, RenderError> {
        let expected = self.byte_len();
        let actual = self.pixels.len();
        if actual != expected {
            return Err(RenderError::BufferSize { expected, actual });
        }
        let width = u32::try_from(self.width).map_err(|_| RenderError::InvalidConfig("width"))?;
        let height =
            u32::try_from(self.height()).map_err(|_| RenderError::InvalidConfig("height"))?;
        RgbaImage::from_raw(width, height, self.pixels)
            .ok_or(RenderError::BufferSize { expected, actual })
    }
}

impl Split for Band {
    fn split_parts(&self, n: usize) -> Vec<Self> {
        self.rows
            .split_parts(n)
            .into_iter()
            .map(|rows| Band::new(self.width, rows))
            .collect()
    }

    fn join_parts(&self, parts: &[Self]) -> Self {
        let mut joined = self.clone();
        for part in parts {
            assert!(part.width == self.width, "different width");
            joined.rows.extend_from_slice(&part.rows);
            joined.pixels.extend_from_slice(&part.pixels);
        }
        joined
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::threads::SplitPart;

    #[test]
    fn test_split_keeps_row_order() {
        let band = Band::frame(3, 7);
        let parts = band.split_parts(3);
        let heights: Vec<usize> = parts.iter().map(Band::height).collect();
        assert_eq!(heights, vec![3, 2, 2]);
        assert_eq!(parts[1].rows(), &[3, 4]);
        assert!(parts.iter().all(|p| p.pixels().is_empty()));
    }

    #[test]
    fn test_more_parts_than_rows() {
        let band = Band::frame(2, 2);
        let parts = band.split_parts(4);
        assert_eq!(parts.len(), 4);
        assert_eq!(parts[2].height(), 0);
        assert_eq!(parts[2].byte_len(), 0);
    }

    #[test]
    fn test_join_concatenates_pixels() {
        let band = Band::frame(1, 3);
        let painted: Vec<SplitPart<Band>> = band
            .parts(2)
            .into_iter()
            .rev()
            .map(|p| {
                let bytes = p.part.rows().iter().flat_map(|&r| [r as u8; 4]).collect();
                SplitPart::new(p.part.with_pixels(bytes), p.n)
            })
            .collect();
        let joined = SplitPart::join(painted).unwrap();
        assert_eq!(joined.rows(), &[0, 1, 2]);
        assert_eq!(joined.pixels(), &[0, 0, 0, 0, 1, 1, 1, 1, 2, 2, 2, 2]);
    }

    #[test]
    fn test_into_image_checks_length() {
        let band = Band::frame(2, 2);
        assert!(matches!(
            band.clone().into_image(),
            Err(RenderError::BufferSize {
                expected: 16,
                actual: 0
            })
        ));
        let img = band.with_pixels(vec![7; 16]).into_image().unwrap();
        assert_eq!(img.dimensions(), (2, 2));
        assert_eq!(img.into_raw().len(), 16);
    }
}
