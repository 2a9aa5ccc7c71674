use base64::Engine as _;
use base64::engine::general_purpose::STANDARD;

use super::*;
use crate::geom::Point;
use crate::palette::Rgb;

fn decode(bytes: &[u8]) -> (png::OutputInfo, Vec<u8>) {
    let decoder = png::Decoder::new(bytes);
    let mut reader = decoder.read_info().unwrap();
    let mut buf = vec![0; reader.output_buffer_size()];
    let info = reader.next_frame(&mut buf).unwrap();
    buf.truncate(info.buffer_size());
    (info, buf)
}

#[test]
fn png_has_surface_dimensions() {
    let surface = Surface::new(32, 18);
    let bytes = encode_png(&surface).unwrap();
    let (info, _) = decode(&bytes);
    assert_eq!(info.width, 32);
    assert_eq!(info.height, 18);
    assert_eq!(info.color_type, png::ColorType::Rgba);
    assert_eq!(info.bit_depth, png::BitDepth::Eight);
}

#[test]
fn png_preserves_pixels_and_transparency() {
    let mut surface = Surface::new(16, 16);
    surface.stroke_segment(Point::new(2.0, 2.0), Point::new(12.0, 12.0), 3.0, Rgb::new(10, 20, 30));
    let bytes = encode_png(&surface).unwrap();
    let (_, pixels) = decode(&bytes);
    assert_eq!(pixels, surface.pixels());
}

#[test]
fn empty_surface_is_rejected() {
    let err = encode_png(&Surface::new(0, 10)).unwrap_err();
    assert!(matches!(err, EncodeError::EmptySurface { width: 0, height: 10 }));
    assert_eq!(err.to_string(), "cannot encode a 0x10 surface");
}

#[test]
fn data_uri_has_png_prefix_and_decodes() {
    let surface = Surface::new(4, 3);
    let uri = png_data_uri(&surface).unwrap();
    let payload = uri.strip_prefix(PNG_DATA_URI_PREFIX).unwrap();
    let bytes = STANDARD.decode(payload).unwrap();
    assert_eq!(&bytes[..8], &[0x89, b'P', b'N', b'G', 0x0D, 0x0A, 0x1A, 0x0A]);
    let (info, _) = decode(&bytes);
    assert_eq!((info.width, info.height), (4, 3));
}
