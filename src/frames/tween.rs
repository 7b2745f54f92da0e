use rayon::prelude::*;

use crate::assets::codec;
use crate::foundation::core::{Canvas, Frame};
use crate::foundation::error::{FlipbookError, FlipbookResult};
use crate::frames::store::FrameStore;

/// Generate `steps` linear-blend frames between two stored frames.
///
/// Both endpoints are resized to `target` before blending. For `s` in
/// `1..=steps`, `alpha = s / (steps + 1)` yields strictly interior frames that
/// never reproduce either endpoint. The run is inserted contiguously
/// immediately after `max(start, end)` in ascending-alpha order; descending
/// requests (`start > end`) follow the same convention, blending from the
/// `start` frame toward the `end` frame.
///
/// `steps = 0` is legal and inserts nothing. Returns the number of inserted
/// frames.
#[tracing::instrument(skip(store), fields(len = store.len()))]
pub fn generate_tweens(
    store: &mut FrameStore,
    start: usize,
    end: usize,
    steps: usize,
    target: Canvas,
) -> FlipbookResult<usize> {
    let len = store.len();
    if len < 2 {
        return Err(FlipbookError::InsufficientFrames { len });
    }
    if start >= len || end >= len {
        return Err(FlipbookError::invalid_range(format!(
            "endpoints {start} and {end} must both lie inside a store of {len} frames"
        )));
    }
    if start == end {
        return Err(FlipbookError::invalid_range(
            "tween endpoints must be distinct frames",
        ));
    }
    if steps == 0 {
        return Ok(0);
    }

    let from = codec::resize_frame(&store.frames()[start], target)?;
    let to = codec::resize_frame(&store.frames()[end], target)?;

    let mut run = Vec::with_capacity(steps);
    for s in 1..=steps {
        let alpha = s as f32 / (steps + 1) as f32;
        run.push(blend_frames(&from, &to, alpha)?);
    }
    store.insert_run(start.max(end) + 1, run);
    Ok(steps)
}

/// Per-channel linear interpolation `from * (1 - alpha) + to * alpha`.
///
/// Both frames must share dimensions. `alpha` is a finite weight in `[0, 1]`.
pub fn blend_frames(from: &Frame, to: &Frame, alpha: f32) -> FlipbookResult<Frame> {
    if from.canvas() != to.canvas() {
        return Err(FlipbookError::validation(format!(
            "blend endpoints must share dimensions ({}x{} vs {}x{})",
            from.width(),
            from.height(),
            to.width(),
            to.height()
        )));
    }
    if !alpha.is_finite() || !(0.0..=1.0).contains(&alpha) {
        return Err(FlipbookError::validation(
            "blend alpha must be finite and within [0, 1]",
        ));
    }

    let stride = from.width() as usize * 3;
    let mut data = vec![0u8; from.data().len()];
    data.par_chunks_mut(stride)
        .zip(from.data().par_chunks(stride))
        .zip(to.data().par_chunks(stride))
        .for_each(|((out, row_from), row_to)| {
            for ((o, &a), &b) in out.iter_mut().zip(row_from).zip(row_to) {
                *o = lerp_u8(a, b, alpha);
            }
        });

    Frame::from_rgb8(from.width(), from.height(), data)
}

fn lerp_u8(a: u8, b: u8, alpha: f32) -> u8 {
    (f32::from(a) * (1.0 - alpha) + f32::from(b) * alpha).round() as u8
}

#[cfg(test)]
#[path = "../../tests/unit/frames/tween.rs"]
mod tests;
