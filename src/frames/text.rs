use crate::assets::font::ResolvedFont;
use crate::foundation::core::{Frame, Rgb8};
use crate::foundation::error::{FlipbookError, FlipbookResult};

/// Placement and styling for a text overlay.
#[derive(Clone, Copy, Debug)]
pub struct TextStyle {
    /// Horizontal pen origin in frame pixels; may be negative (clipped).
    pub x: i32,
    /// Vertical pen origin in frame pixels; may be negative (clipped).
    pub y: i32,
    /// Target glyph height in pixels.
    pub size_px: f32,
    /// Text color.
    pub color: Rgb8,
}

impl TextStyle {
    fn validate(&self) -> FlipbookResult<()> {
        if !self.size_px.is_finite() || self.size_px <= 0.0 {
            return Err(FlipbookError::validation(
                "text size_px must be finite and > 0",
            ));
        }
        Ok(())
    }
}

/// Composite `text` onto `frame` in place.
///
/// Glyphs scale by nearest-neighbor sampling from the resolved font's cells to
/// the requested size. `\n` starts a new line at the original x origin; `\r`
/// is ignored. Pixels falling outside the frame are clipped.
pub(crate) fn draw_text(
    frame: &mut Frame,
    text: &str,
    style: TextStyle,
    font: ResolvedFont<'_>,
) -> FlipbookResult<()> {
    style.validate()?;
    if text.is_empty() {
        return Ok(());
    }

    let origin_x = i64::from(style.x);
    let mut pen_x = origin_x;
    let mut pen_y = i64::from(style.y);
    let mut line_advance: i64 = style.size_px.round().max(1.0) as i64;

    for ch in text.chars() {
        match ch {
            '\n' => {
                pen_x = origin_x;
                pen_y += line_advance;
            }
            '\r' => {}
            _ => {
                let glyph = font.glyph(ch);
                let scale = style.size_px / glyph.height() as f32;
                let out_h = (glyph.height() as f32 * scale).round().max(1.0) as i64;
                let out_w = (glyph.width() as f32 * scale).round().max(1.0) as i64;
                line_advance = line_advance.max(out_h);

                for ty in 0..out_h {
                    let sy = (ty * i64::from(glyph.height()) / out_h) as u32;
                    for tx in 0..out_w {
                        let sx = (tx * i64::from(glyph.width()) / out_w) as u32;
                        if glyph.ink(sx, sy) {
                            frame.set_pixel(pen_x + tx, pen_y + ty, style.color);
                        }
                    }
                }
                pen_x += out_w;
            }
        }
    }
    Ok(())
}

#[cfg(test)]
#[path = "../../tests/unit/frames/text.rs"]
mod tests;
