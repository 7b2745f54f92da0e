use crate::assets::font::FontLibrary;
use crate::foundation::core::{Canvas, Frame, Rgb8};
use crate::foundation::error::{FlipbookError, FlipbookResult};
use crate::frames::text::{self, TextStyle};

/// Ordered, mutable sequence of frames plus the transient selection pointer.
///
/// Order is the animation's temporal order. Frames have purely positional
/// identity; reordering changes what an index refers to. The selection is
/// `None` exactly when the store is empty, otherwise it is a valid index, and
/// every structural mutation recomputes it to keep that invariant.
#[derive(Clone, Debug, Default)]
pub struct FrameStore {
    frames: Vec<Frame>,
    selected: Option<usize>,
}

impl FrameStore {
    /// Create an empty store with no selection.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of frames held.
    pub fn len(&self) -> usize {
        self.frames.len()
    }

    /// Return `true` when the store holds no frames.
    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }

    /// Borrow the frame at `index`, or `None` past the end.
    pub fn get(&self, index: usize) -> Option<&Frame> {
        self.frames.get(index)
    }

    /// Borrow all frames in temporal order.
    pub fn frames(&self) -> &[Frame] {
        &self.frames
    }

    /// Iterate frames in temporal order.
    pub fn iter(&self) -> impl Iterator<Item = &Frame> {
        self.frames.iter()
    }

    /// Current editing target, `None` exactly when the store is empty.
    pub fn selected(&self) -> Option<usize> {
        self.selected
    }

    /// Make `index` the current editing target.
    pub fn select(&mut self, index: usize) -> FlipbookResult<()> {
        self.check_index(index)?;
        self.selected = Some(index);
        Ok(())
    }

    /// Append a uniformly colored frame of the given size; it becomes selected.
    ///
    /// Returns the new frame's index.
    pub fn add_blank(&mut self, canvas: Canvas, fill: Rgb8) -> usize {
        self.push(Frame::filled(canvas, fill))
    }

    /// Append a captured frame; it becomes selected. Returns its index.
    pub fn push(&mut self, frame: Frame) -> usize {
        self.frames.push(frame);
        let index = self.frames.len() - 1;
        self.selected = Some(index);
        index
    }

    /// Insert a deep copy immediately after `index`; the copy becomes selected.
    ///
    /// Returns the copy's index.
    pub fn duplicate(&mut self, index: usize) -> FlipbookResult<usize> {
        self.check_index(index)?;
        let copy = self.frames[index].clone();
        self.frames.insert(index + 1, copy);
        self.selected = Some(index + 1);
        Ok(index + 1)
    }

    /// Remove and return the frame at `index`.
    ///
    /// The selection moves to the nearest earlier frame, or clears when the
    /// store becomes empty.
    pub fn remove(&mut self, index: usize) -> FlipbookResult<Frame> {
        self.check_index(index)?;
        let removed = self.frames.remove(index);
        self.selected = if self.frames.is_empty() {
            None
        } else {
            Some(index.saturating_sub(1))
        };
        Ok(removed)
    }

    /// Relocate the frame at `from` to position `to`, preserving its content.
    ///
    /// A no-op when `from == to` or either index is invalid; returns whether a
    /// move happened. The selection tracks the moved frame.
    pub fn move_frame(&mut self, from: usize, to: usize) -> bool {
        if from == to || from >= self.frames.len() || to >= self.frames.len() {
            return false;
        }
        let frame = self.frames.remove(from);
        self.frames.insert(to, frame);
        self.selected = Some(to);
        true
    }

    /// Overwrite the frame at `index` in place, preserving its position.
    pub fn replace(&mut self, index: usize, frame: Frame) -> FlipbookResult<()> {
        self.check_index(index)?;
        self.frames[index] = frame;
        Ok(())
    }

    /// Composite `text` onto the frame at `index`, mutating it in place.
    ///
    /// Fonts resolve through `fonts`' two-tier policy; characters without a
    /// glyph draw as a replacement box, so multi-byte text never fails the
    /// operation.
    pub fn render_text(
        &mut self,
        index: usize,
        text: &str,
        style: TextStyle,
        fonts: &FontLibrary,
    ) -> FlipbookResult<()> {
        self.check_index(index)?;
        text::draw_text(&mut self.frames[index], text, style, fonts.resolve())
    }

    /// Remove every frame and clear the selection.
    pub fn clear(&mut self) {
        self.frames.clear();
        self.selected = None;
    }

    /// Insert a contiguous run of frames starting at `at`, preserving order.
    ///
    /// The selection index is left untouched; identity is positional, so it
    /// keeps pointing at whatever frame now sits at that index.
    pub(crate) fn insert_run(&mut self, at: usize, run: Vec<Frame>) {
        let at = at.min(self.frames.len());
        self.frames.splice(at..at, run);
    }

    /// Replace the whole sequence, selecting the first frame if any.
    pub(crate) fn replace_all(&mut self, frames: Vec<Frame>) {
        self.selected = if frames.is_empty() { None } else { Some(0) };
        self.frames = frames;
    }

    fn check_index(&self, index: usize) -> FlipbookResult<()> {
        if index >= self.frames.len() {
            return Err(FlipbookError::out_of_range(index, self.frames.len()));
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/frames/store.rs"]
mod tests;
