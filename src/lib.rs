//! Flipbook is a frame-by-frame animation studio engine.
//!
//! The crate is the headless core of a browser-style animation studio: an
//! ordered frame timeline with tween generation, cue points on a companion
//! audio/video timeline, a single-slot audio attachment, and a portable
//! project archive that round-trips losslessly. Presentation (drawing
//! surfaces, camera/microphone capture, color pickers, page layout) is an
//! external collaborator that hands the core raw rasters, bytes, and text
//! fields, and displays whatever the core returns.
//!
//! # Workflow overview
//!
//! 1. **Collect**: a capture source produces one RGB raster; [`FrameStore`]
//!    holds it (`push`, `add_blank`, `replace`, `render_text`)
//! 2. **Tween**: [`generate_tweens`] blends two stored frames into strictly
//!    interior in-between frames
//! 3. **Play**: [`PlaybackSequencer`] streams frames into a [`DisplaySink`]
//!    on a cancelable, cooperative loop
//! 4. **Archive**: [`Session::export`] / [`Session::import`] round-trip the
//!    whole project through a single random-access container
//!
//! The key design constraints:
//!
//! - **No unsafe**: `unsafe` is forbidden in this crate.
//! - **One owned [`Session`] per editing context**: no ambient globals; all
//!   mutation flows through `&mut Session`.
//! - **Typed, recoverable failures**: a failed operation never partially
//!   mutates committed state, and import is all-or-nothing.
//! - **Bounded archive memory**: export/import stream frame-by-frame, so peak
//!   memory is one decoded frame plus the archive index.
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod archive;
mod assets;
mod foundation;
mod frames;
mod playback;
mod project;
mod session;
mod timeline;

pub use crate::archive::container::{ProjectImport, deserialize, serialize};
pub use crate::archive::manifest::{
    AUDIO_RESOURCE, AudioEntry, MANIFEST_RESOURCE, MANIFEST_VERSION, ProjectManifest,
    frame_resource_name,
};
pub use crate::assets::codec::{decode_frame, encode_frame_png, encode_gif_preview, resize_frame};
pub use crate::assets::font::{FontLibrary, StripFont};
pub use crate::foundation::core::{Canvas, Fps, Frame, Rgb8};
pub use crate::foundation::error::{FlipbookError, FlipbookResult};
pub use crate::frames::store::FrameStore;
pub use crate::frames::text::TextStyle;
pub use crate::frames::tween::{blend_frames, generate_tweens};
pub use crate::playback::sequencer::{
    CancelToken, DisplaySink, InMemorySink, PlaybackConfig, PlaybackSequencer, PlaybackStats,
};
pub use crate::project::Project;
pub use crate::session::{ImportOutcome, Session};
pub use crate::timeline::audio::{AudioAttachment, AudioTrack};
pub use crate::timeline::cue::{Cue, CuePolicy, CueTrack};
