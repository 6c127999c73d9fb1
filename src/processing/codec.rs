//! # Image Codec Adapter
//!
//! Bridges the `image` crate and [`PixelStream`]. Decoding accepts any container
//! the `image` crate can read as long as every channel sample is one byte;
//! encoding always produces PNG so the hidden bits survive.

use std::io::Cursor;
use std::path::Path;

use image::{DynamicImage, ImageBuffer, ImageFormat};
use log::debug;

use super::error::{StegoError, StegoResult};
use super::stream::PixelStream;

/// Load an image file into a pixel stream.
///
/// # Errors
/// - [`StegoError::UnreadableImage`] if the file can't be opened or decoded
/// - [`StegoError::UnsupportedFormat`] if channels are not 8 bits wide
pub fn load_pixel_stream<P: AsRef<Path>>(path: P) -> StegoResult<PixelStream> {
    let img = image::open(path.as_ref())?;
    debug!("Loaded {}", path.as_ref().display());
    pixel_stream_from_image(img)
}

/// Decode an in-memory image into a pixel stream.
pub fn decode_pixel_stream(image_bytes: &[u8]) -> StegoResult<PixelStream> {
    let img = image::load_from_memory(image_bytes)?;
    pixel_stream_from_image(img)
}

/// Write a pixel stream to `path` as PNG, whatever the extension says.
pub fn save_pixel_stream<P: AsRef<Path>>(stream: PixelStream, path: P) -> StegoResult<()> {
    let img = image_from_pixel_stream(stream)?;
    img.save_with_format(path.as_ref(), ImageFormat::Png)
        .map_err(StegoError::ImageWrite)?;
    debug!("Saved {}", path.as_ref().display());
    Ok(())
}

/// Encode a pixel stream as PNG bytes.
pub fn encode_png(stream: PixelStream) -> StegoResult<Vec<u8>> {
    let img = image_from_pixel_stream(stream)?;

    let mut output_bytes = Vec::new();
    img.write_to(&mut Cursor::new(&mut output_bytes), ImageFormat::Png)
        .map_err(StegoError::ImageWrite)?;

    Ok(output_bytes)
}

fn pixel_stream_from_image(img: DynamicImage) -> StegoResult<PixelStream> {
    let color = img.color();
    let channels = color.channel_count();

    // One byte per sample is the only layout where "one bit per byte" holds
    if color.bytes_per_pixel() != channels {
        return Err(StegoError::UnsupportedFormat(format!(
            "{:?} uses {} bits per channel, only 8-bit channels are supported",
            color,
            color.bits_per_pixel() / u16::from(channels)
        )));
    }

    let (width, height) = (img.width(), img.height());
    debug!("Pixel stream: {}x{}, {} channels ({:?})", width, height, channels, color);

    PixelStream::new(img.into_bytes(), width, height, channels)
}

fn image_from_pixel_stream(stream: PixelStream) -> StegoResult<DynamicImage> {
    let (width, height, channels) = (stream.width(), stream.height(), stream.channels());
    let data = stream.into_bytes();
    let mismatch = StegoError::DimensionMismatch {
        expected: u64::from(width) * u64::from(height) * u64::from(channels),
        actual: data.len() as u64,
    };

    let img = match channels {
        1 => ImageBuffer::from_raw(width, height, data).map(DynamicImage::ImageLuma8),
        2 => ImageBuffer::from_raw(width, height, data).map(DynamicImage::ImageLumaA8),
        3 => ImageBuffer::from_raw(width, height, data).map(DynamicImage::ImageRgb8),
        4 => ImageBuffer::from_raw(width, height, data).map(DynamicImage::ImageRgba8),
        other => {
            return Err(StegoError::UnsupportedFormat(format!(
                "no 8-bit colour type with {} channels",
                other
            )))
        }
    };

    img.ok_or(mismatch)
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{Rgb, RgbImage};

    #[test]
    fn test_png_round_trip_keeps_bytes() {
        let img = RgbImage::from_fn(5, 3, |x, y| Rgb([x as u8, y as u8, (x * y) as u8]));
        let mut png = Vec::new();
        img.write_to(&mut Cursor::new(&mut png), ImageFormat::Png)
            .unwrap();

        let stream = decode_pixel_stream(&png).unwrap();
        assert_eq!((stream.width(), stream.height(), stream.channels()), (5, 3, 3));
        let original = stream.clone();

        let reencoded = encode_png(stream).unwrap();
        assert_eq!(decode_pixel_stream(&reencoded).unwrap(), original);
    }

    #[test]
    fn test_sixteen_bit_is_unsupported() {
        let img: ImageBuffer<Rgb<u16>, Vec<u16>> =
            ImageBuffer::from_pixel(4, 4, Rgb([1000, 2000, 3000]));
        let mut png = Vec::new();
        DynamicImage::ImageRgb16(img)
            .write_to(&mut Cursor::new(&mut png), ImageFormat::Png)
            .unwrap();

        assert!(matches!(
            decode_pixel_stream(&png),
            Err(StegoError::UnsupportedFormat(_))
        ));
    }

    #[test]
    fn test_garbage_is_unreadable() {
        assert!(matches!(
            decode_pixel_stream(b"definitely not an image"),
            Err(StegoError::UnreadableImage(_))
        ));
    }

    #[test]
    fn test_five_channels_cannot_be_encoded() {
        let stream = PixelStream::new(vec![0; 10], 2, 1, 5).unwrap();
        assert!(matches!(encode_png(stream), Err(StegoError::UnsupportedFormat(_))));
    }
}
