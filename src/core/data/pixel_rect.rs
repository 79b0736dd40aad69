use crate::core::data::point::Point;
use thiserror::Error;

pub const BYTES_PER_PIXEL: usize = 3;

#[derive(Debug, Copy, Clone, PartialEq, Eq, Error)]
pub enum PixelRectError {
    #[error("pixel rect size must be positive: {width}x{height}")]
    InvalidSize { width: u32, height: u32 },
    #[error("pixel rect of {width}x{height} is too large to address")]
    TooLarge { width: u32, height: u32 },
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct PixelRect {
    width: u32,
    height: u32,
}

impl PixelRect {
    pub fn new(width: u32, height: u32) -> Result<Self, PixelRectError> {
        if width == 0 || height == 0 {
            return Err(PixelRectError::InvalidSize { width, height });
        }

        let bytes = u64::from(width) * u64::from(height) * BYTES_PER_PIXEL as u64;
        if usize::try_from(bytes).is_err() {
            return Err(PixelRectError::TooLarge { width, height });
        }

        Ok(Self { width, height })
    }

    #[must_use]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[must_use]
    pub fn height(&self) -> u32 {
        self.height
    }

    #[must_use]
    pub fn size(&self) -> usize {
        self.width as usize * self.height as usize
    }

    #[must_use]
    pub fn buffer_len(&self) -> usize {
        self.size() * BYTES_PER_PIXEL
    }

    #[must_use]
    pub fn contains_point(&self, point: Point) -> bool {
        point.x < self.width && point.y < self.height
    }

    #[must_use]
    pub fn index_of(&self, point: Point) -> usize {
        point.y as usize * self.width as usize + point.x as usize
    }

    pub fn points(&self) -> impl Iterator<Item = Point> + use<> {
        let width = self.width;

        (0..self.height).flat_map(move |y| (0..width).map(move |x| Point { x, y }))
    }
}
