use crate::archive::container::{self, ProjectImport};
use crate::assets::codec;
use crate::assets::font::FontLibrary;
use crate::foundation::core::{Canvas, Fps, Rgb8};
use crate::foundation::error::FlipbookResult;
use crate::frames::store::FrameStore;
use crate::frames::text::TextStyle;
use crate::frames::tween;
use crate::playback::sequencer::{CancelToken, DisplaySink, PlaybackSequencer, PlaybackStats};
use crate::project::Project;
use crate::timeline::audio::{AudioAttachment, AudioTrack};
use crate::timeline::cue::{CuePolicy, CueTrack};

/// Outcome reported by [`Session::import`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ImportOutcome {
    /// Frames, cues, audio, and canvas were all restored.
    Complete,
    /// Metadata-only payload: cues were applied but the frame pixels are not
    /// embedded in that representation, so the frame list is now empty.
    FramesUnavailable {
        /// Number of frames the record claims existed at export time.
        frames_count: usize,
    },
}

/// One editing context: the live frames, cues, audio, fonts, and canvas.
///
/// The session is a single owned aggregate; every operation flows through it
/// explicitly and there is no ambient global state. All mutation takes
/// `&mut self`. Hosts exposing a session to multiple callers serialize
/// mutating calls externally (one lock or actor per session); playback only
/// borrows the frame list immutably and is stopped through a [`CancelToken`].
#[derive(Debug, Default)]
pub struct Session {
    frames: FrameStore,
    cues: CueTrack,
    audio: AudioTrack,
    fonts: FontLibrary,
    sequencer: PlaybackSequencer,
    canvas: Canvas,
}

impl Session {
    /// Create a session with the default canvas and cue policy.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a session with an explicit canvas size.
    pub fn with_canvas(canvas: Canvas) -> Self {
        Self {
            canvas,
            ..Self::default()
        }
    }

    /// Create a session with an explicit cue creation policy.
    pub fn with_cue_policy(policy: CuePolicy) -> Self {
        Self {
            cues: CueTrack::with_policy(policy),
            ..Self::default()
        }
    }

    /// Current canvas dimensions used for blank frames and tween targets.
    pub fn canvas(&self) -> Canvas {
        self.canvas
    }

    /// Change the canvas dimensions for subsequent operations.
    pub fn set_canvas(&mut self, canvas: Canvas) {
        self.canvas = canvas;
    }

    /// Borrow the frame store.
    pub fn frames(&self) -> &FrameStore {
        &self.frames
    }

    /// Borrow the frame store mutably.
    pub fn frames_mut(&mut self) -> &mut FrameStore {
        &mut self.frames
    }

    /// Borrow the cue track.
    pub fn cues(&self) -> &CueTrack {
        &self.cues
    }

    /// Borrow the cue track mutably.
    pub fn cues_mut(&mut self) -> &mut CueTrack {
        &mut self.cues
    }

    /// Borrow the audio slot.
    pub fn audio(&self) -> &AudioTrack {
        &self.audio
    }

    /// Borrow the audio slot mutably.
    pub fn audio_mut(&mut self) -> &mut AudioTrack {
        &mut self.audio
    }

    /// Borrow the font library mutably, e.g. to register a preferred font.
    pub fn fonts_mut(&mut self) -> &mut FontLibrary {
        &mut self.fonts
    }

    /// Append a canvas-sized white frame; it becomes selected.
    pub fn add_blank_frame(&mut self) -> usize {
        self.frames.add_blank(self.canvas, Rgb8::WHITE)
    }

    /// Generate tween frames between two stored frames at the session canvas
    /// size. Returns the number of inserted frames.
    pub fn generate_tweens(
        &mut self,
        start: usize,
        end: usize,
        steps: usize,
    ) -> FlipbookResult<usize> {
        tween::generate_tweens(&mut self.frames, start, end, steps, self.canvas)
    }

    /// Composite text onto the frame at `index` using the session fonts.
    pub fn render_text(&mut self, index: usize, text: &str, style: TextStyle) -> FlipbookResult<()> {
        self.frames.render_text(index, text, style, &self.fonts)
    }

    /// Append a cue to the track.
    pub fn add_cue(&mut self, time: f64, action: impl Into<String>) -> FlipbookResult<()> {
        self.cues.add(time, action)
    }

    /// Attach audio, replacing any existing attachment.
    pub fn attach_audio(&mut self, attachment: AudioAttachment) {
        self.audio.attach(attachment);
    }

    /// Detach audio, returning the previous attachment if any.
    pub fn detach_audio(&mut self) -> Option<AudioAttachment> {
        self.audio.detach()
    }

    /// Deep snapshot of the live state as a [`Project`] value.
    pub fn snapshot(&self) -> Project {
        Project {
            frames: self.frames.frames().to_vec(),
            cues: self.cues.list().to_vec(),
            audio: self.audio.get().cloned(),
            canvas: self.canvas,
        }
    }

    /// Export the whole project as portable archive bytes.
    pub fn export(&self) -> FlipbookResult<Vec<u8>> {
        container::serialize(&self.snapshot())
    }

    /// Encode the frame sequence as a looping GIF preview.
    pub fn export_gif_preview(&self, fps: Fps, preview: Canvas) -> FlipbookResult<Vec<u8>> {
        codec::encode_gif_preview(self.frames.frames(), fps, preview)
    }

    /// Import a project, replacing the live state wholesale.
    ///
    /// The payload is fully parsed before any live state changes, so a failed
    /// import leaves the session untouched. A metadata-only payload applies
    /// its cues (and canvas when recorded), clears frames and audio, and
    /// reports [`ImportOutcome::FramesUnavailable`] so the caller can warn the
    /// user.
    pub fn import(&mut self, bytes: &[u8]) -> FlipbookResult<ImportOutcome> {
        match container::deserialize(bytes)? {
            ProjectImport::Complete(project) => {
                self.frames.replace_all(project.frames);
                self.cues.replace_all(project.cues);
                match project.audio {
                    Some(audio) => self.audio.attach(audio),
                    None => {
                        self.audio.detach();
                    }
                }
                self.canvas = project.canvas;
                Ok(ImportOutcome::Complete)
            }
            ProjectImport::FramesUnavailable {
                cues,
                canvas,
                frames_count,
            } => {
                self.frames.replace_all(Vec::new());
                self.cues.replace_all(cues);
                self.audio.detach();
                if let Some(canvas) = canvas {
                    self.canvas = canvas;
                }
                Ok(ImportOutcome::FramesUnavailable { frames_count })
            }
        }
    }

    /// Play the frame sequence into `sink` at `fps`.
    ///
    /// Re-arms the sequencer first, mirroring a fresh play request; use
    /// [`Session::cancel_token`] or [`Session::stop_playback`] to stop it.
    pub fn play(&mut self, fps: Fps, sink: &mut dyn DisplaySink) -> FlipbookResult<PlaybackStats> {
        self.sequencer.reset();
        self.sequencer.play(&self.frames, fps, sink)
    }

    /// Request that the running playback stop at the next frame boundary.
    pub fn stop_playback(&self) {
        self.sequencer.stop();
    }

    /// Handle for stopping playback from another thread.
    pub fn cancel_token(&self) -> CancelToken {
        self.sequencer.cancel_token()
    }
}
