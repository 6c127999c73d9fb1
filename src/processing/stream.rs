use super::capacity::capacity_bits;
use super::error::{StegoError, StegoResult};

/// Row-major pixel bytes together with the geometry they were decoded with.
///
/// `data.len()` is always `width * height * channels`; byte `(row, column)`
/// lives at `row * width * channels + column`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PixelStream {
    data: Vec<u8>,
    width: u32,
    height: u32,
    channels: u8,
}

impl PixelStream {
    /// Wraps a decoded pixel buffer.
    ///
    /// # Errors
    /// - [`StegoError::DimensionMismatch`] if `data` is not exactly `width * height * channels` bytes
    pub fn new(data: Vec<u8>, width: u32, height: u32, channels: u8) -> StegoResult<Self> {
        let expected = capacity_bits(width, height, channels);
        let actual = data.len() as u64;

        if expected != actual {
            return Err(StegoError::DimensionMismatch { expected, actual });
        }

        Ok(Self {
            data,
            width,
            height,
            channels,
        })
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn channels(&self) -> u8 {
        self.channels
    }

    /// Bytes per row, i.e. `width * channels`.
    pub fn row_len(&self) -> usize {
        self.width as usize * self.channels as usize
    }

    /// Byte at `(row, column)`, or `None` when out of range.
    pub fn get(&self, row: usize, column: usize) -> Option<u8> {
        if column >= self.row_len() {
            return None;
        }
        self.data.get(row * self.row_len() + column).copied()
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.data
    }

    pub fn as_bytes_mut(&mut self) -> &mut [u8] {
        &mut self.data
    }

    pub fn into_bytes(self) -> Vec<u8> {
        self.data
    }
}
