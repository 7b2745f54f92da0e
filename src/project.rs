use crate::foundation::core::{Canvas, Frame};
use crate::timeline::audio::AudioAttachment;
use crate::timeline::cue::Cue;

/// Deep snapshot of a project: the archive's logical content.
///
/// A project is a value with no shared ownership of live session state.
/// Export takes a snapshot; import replaces live state wholesale.
#[derive(Clone, Debug, PartialEq)]
pub struct Project {
    /// Frames in temporal order.
    pub frames: Vec<Frame>,
    /// Cue list in insertion order.
    pub cues: Vec<Cue>,
    /// Optional audio attachment.
    pub audio: Option<AudioAttachment>,
    /// Canvas dimensions at export time.
    pub canvas: Canvas,
}
