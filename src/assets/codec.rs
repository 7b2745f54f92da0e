use std::io::Cursor;

use anyhow::Context;

use crate::foundation::core::{Canvas, Fps, Frame};
use crate::foundation::error::{FlipbookError, FlipbookResult};

/// Decode encoded image bytes (PNG, JPEG, ...) into an RGB8 [`Frame`].
///
/// Alpha channels are tolerated and flattened to RGB.
pub fn decode_frame(bytes: &[u8]) -> FlipbookResult<Frame> {
    let dyn_img = image::load_from_memory(bytes).context("decode image from memory")?;
    let rgb = dyn_img.to_rgb8();
    let (width, height) = rgb.dimensions();
    Frame::from_rgb8(width, height, rgb.into_raw())
}

/// Encode a frame as lossless 8-bit RGB PNG bytes.
pub fn encode_frame_png(frame: &Frame) -> FlipbookResult<Vec<u8>> {
    let img = rgb_image(frame)?;
    let mut bytes = Vec::new();
    img.write_to(&mut Cursor::new(&mut bytes), image::ImageFormat::Png)
        .context("encode frame as png")?;
    Ok(bytes)
}

/// Resize a frame to the target canvas using bilinear filtering.
///
/// Returns a clone when the frame already matches the target.
pub fn resize_frame(frame: &Frame, target: Canvas) -> FlipbookResult<Frame> {
    if frame.canvas() == target {
        return Ok(frame.clone());
    }
    let img = rgb_image(frame)?;
    let resized = image::imageops::resize(
        &img,
        target.width,
        target.height,
        image::imageops::FilterType::Triangle,
    );
    Frame::from_rgb8(target.width, target.height, resized.into_raw())
}

/// Encode a frame sequence into a looping animated GIF preview.
///
/// Frames are resized to `preview` and shown with a `1/fps` delay. This is a
/// passthrough of already-stored rasters, not a video encode.
pub fn encode_gif_preview(frames: &[Frame], fps: Fps, preview: Canvas) -> FlipbookResult<Vec<u8>> {
    if frames.is_empty() {
        return Err(FlipbookError::validation(
            "gif preview requires at least one frame",
        ));
    }
    let delay_ms = (fps.frame_duration_secs() * 1000.0).round().max(1.0) as u32;

    let mut bytes = Vec::new();
    {
        let mut encoder = image::codecs::gif::GifEncoder::new(&mut bytes);
        encoder
            .set_repeat(image::codecs::gif::Repeat::Infinite)
            .context("configure gif looping")?;
        for frame in frames {
            let resized = resize_frame(frame, preview)?;
            let rgba = image::DynamicImage::ImageRgb8(rgb_image(&resized)?).to_rgba8();
            let gif_frame = image::Frame::from_parts(
                rgba,
                0,
                0,
                image::Delay::from_numer_denom_ms(delay_ms, 1),
            );
            encoder.encode_frame(gif_frame).context("encode gif frame")?;
        }
    }
    Ok(bytes)
}

fn rgb_image(frame: &Frame) -> FlipbookResult<image::RgbImage> {
    image::RgbImage::from_raw(frame.width(), frame.height(), frame.data().to_vec()).ok_or_else(
        || FlipbookError::validation("frame buffer does not match its dimensions"),
    )
}

#[cfg(test)]
#[path = "../../tests/unit/assets/codec.rs"]
mod tests;
