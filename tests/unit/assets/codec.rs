use super::*;

use crate::foundation::core::Rgb8;

fn gradient_frame(width: u32, height: u32) -> Frame {
    let mut data = Vec::with_capacity((width * height * 3) as usize);
    for y in 0..height {
        for x in 0..width {
            data.extend_from_slice(&[(x * 17 % 256) as u8, (y * 31 % 256) as u8, 128]);
        }
    }
    Frame::from_rgb8(width, height, data).unwrap()
}

#[test]
fn png_round_trip_preserves_pixels() {
    let frame = gradient_frame(13, 7);
    let png = encode_frame_png(&frame).unwrap();
    assert_eq!(&png[1..4], b"PNG");
    let decoded = decode_frame(&png).unwrap();
    assert_eq!(decoded, frame);
}

#[test]
fn decode_flattens_alpha_sources() {
    let rgba = image::RgbaImage::from_fn(4, 4, |x, _| image::Rgba([200, 100, 50, (x * 60) as u8]));
    let mut png = Vec::new();
    rgba.write_to(
        &mut std::io::Cursor::new(&mut png),
        image::ImageFormat::Png,
    )
    .unwrap();

    let frame = decode_frame(&png).unwrap();
    assert_eq!((frame.width(), frame.height()), (4, 4));
    // Alpha is dropped, not composited; color channels survive as-is.
    assert_eq!(frame.pixel(0, 0), Some(Rgb8::new(200, 100, 50)));
}

#[test]
fn decode_rejects_non_image_bytes() {
    assert!(decode_frame(b"definitely not an image").is_err());
}

#[test]
fn resize_changes_dimensions_only_when_needed() {
    let frame = gradient_frame(8, 8);
    let same = resize_frame(&frame, frame.canvas()).unwrap();
    assert_eq!(same, frame);

    let target = Canvas::new(4, 2).unwrap();
    let resized = resize_frame(&frame, target).unwrap();
    assert_eq!(resized.canvas(), target);
}

#[test]
fn gif_preview_encodes_and_rejects_empty() {
    let frames = vec![gradient_frame(6, 6), gradient_frame(6, 6)];
    let fps = Fps::new(6, 1).unwrap();
    let preview = Canvas::new(4, 4).unwrap();
    let gif = encode_gif_preview(&frames, fps, preview).unwrap();
    assert_eq!(&gif[..4], b"GIF8");

    assert!(encode_gif_preview(&[], fps, preview).is_err());
}
