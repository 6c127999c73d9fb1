use image::{GrayAlphaImage, GrayImage, ImageFormat, Luma, LumaA};
use pixel_stash::processing::{
    embed_payload, embed_payload_bytes, extract_payload, extract_payload_bytes, Header,
    PixelStream, StegoError, StegoOptions, DEFAULT_MARKER,
};
use std::io::Cursor;

fn gray_png(width: u32, height: u32) -> Vec<u8> {
    let img = GrayImage::from_fn(width, height, |x, y| Luma([(x * 3 + y * 5) as u8]));
    let mut png = Vec::new();
    img.write_to(&mut Cursor::new(&mut png), ImageFormat::Png)
        .unwrap();
    png
}

#[test]
fn test_hello_in_2400_byte_stream() {
    let data = vec![0x80u8; 2400];
    let mut stream = PixelStream::new(data, 20, 20, 6).unwrap();
    let options = StegoOptions::default();

    embed_payload(&mut stream, b"HELLO", &options).unwrap();

    let header = Header::read(stream.as_bytes()).unwrap();
    assert_eq!(header, Header::new(DEFAULT_MARKER, 5));

    let mut out = Vec::new();
    extract_payload(&stream, &mut out, &options).unwrap();
    assert_eq!(out, b"HELLO");

    // only header + 40 payload positions may differ from the carrier
    assert!(stream.as_bytes()[104..].iter().all(|&b| b == 0x80));
}

#[test]
fn test_boundary_scenario() {
    let options = StegoOptions::default();

    let mut stream = PixelStream::new(vec![0; 19200], 80, 80, 3).unwrap();
    assert!(embed_payload(&mut stream, &vec![0x5A; 2392], &options).is_ok());

    let mut stream = PixelStream::new(vec![0; 19200], 80, 80, 3).unwrap();
    assert!(matches!(
        embed_payload(&mut stream, &vec![0x5A; 2393], &options),
        Err(StegoError::CapacityExceeded {
            required_bits: 19208,
            available_bits: 19200
        })
    ));
    assert!(stream.as_bytes().iter().all(|&b| b == 0));
}

#[test]
fn test_bit_order_at_arbitrary_offset() {
    let mut stream = PixelStream::new(vec![0xFF; 64 + 24], 11, 8, 1).unwrap();
    embed_payload(&mut stream, &[0x00, 0b1011_0001, 0xFF], &StegoOptions::default()).unwrap();

    let lsbs: Vec<u8> = stream.as_bytes()[72..80].iter().map(|b| b & 1).collect();
    assert_eq!(lsbs, vec![1, 0, 0, 0, 1, 1, 0, 1]);
}

#[test]
fn test_in_memory_png_round_trip() {
    let carrier = gray_png(40, 40);
    let options = StegoOptions::default();

    let package = embed_payload_bytes(&carrier, b"grayscale payload", &options).unwrap();
    assert_eq!(
        extract_payload_bytes(&package, &options).unwrap(),
        b"grayscale payload"
    );

    assert!(matches!(
        extract_payload_bytes(&carrier, &options),
        Err(StegoError::NotSteganographicFile { .. })
    ));
}

#[test]
fn test_gray_alpha_keeps_both_channels() {
    let img = GrayAlphaImage::from_pixel(12, 12, LumaA([200, 255]));
    let mut png = Vec::new();
    img.write_to(&mut Cursor::new(&mut png), ImageFormat::Png)
        .unwrap();

    // 12 x 12 x 2 = 288 bits -> 28 payload bytes
    let options = StegoOptions::default();
    let payload = [0xC3u8; 28];
    let package = embed_payload_bytes(&png, &payload, &options).unwrap();
    assert_eq!(extract_payload_bytes(&package, &options).unwrap(), payload);

    assert!(matches!(
        embed_payload_bytes(&png, &[0u8; 29], &options),
        Err(StegoError::CapacityExceeded { .. })
    ));
}
