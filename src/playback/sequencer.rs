use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;

use crate::foundation::core::{Fps, Frame};
use crate::foundation::error::FlipbookResult;
use crate::frames::store::FrameStore;

/// Configuration handed to a [`DisplaySink`] before playback starts.
#[derive(Clone, Copy, Debug)]
pub struct PlaybackConfig {
    /// Playback rate.
    pub fps: Fps,
    /// Number of frames that will be shown if playback runs to completion.
    pub frame_count: usize,
}

/// Sink contract for consuming frames in temporal order.
///
/// `show_frame` is called with strictly increasing indices. The same contract
/// serves single-frame preview (a one-frame store) and full playback.
pub trait DisplaySink: Send {
    /// Called once before any frames are shown.
    fn begin(&mut self, cfg: PlaybackConfig) -> FlipbookResult<()>;
    /// Show one frame.
    fn show_frame(&mut self, index: usize, frame: &Frame) -> FlipbookResult<()>;
    /// Called once after the last frame, including after cancellation.
    fn end(&mut self) -> FlipbookResult<()>;
}

/// Cloneable handle that requests a stop at the next frame boundary.
///
/// Stops are cooperative: the playback loop consults the flag before showing
/// each frame and before each sleep, so a stop issued concurrently takes
/// effect within one frame interval and never preempts a frame mid-show.
#[derive(Clone, Debug, Default)]
pub struct CancelToken {
    flag: Arc<AtomicBool>,
}

impl CancelToken {
    /// Create an armed (not yet stopped) token.
    pub fn new() -> Self {
        Self::default()
    }

    /// Request a stop at the next frame boundary.
    pub fn stop(&self) {
        self.flag.store(true, Ordering::Relaxed);
    }

    /// Return `true` once a stop has been requested.
    pub fn is_stopped(&self) -> bool {
        self.flag.load(Ordering::Relaxed)
    }

    fn rearm(&self) {
        self.flag.store(false, Ordering::Relaxed);
    }
}

/// Aggregated playback counters.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct PlaybackStats {
    /// Frames actually shown to the sink.
    pub frames_shown: usize,
    /// Whether playback halted on a stop request rather than completion.
    pub cancelled: bool,
}

/// Drives a timed, cancelable frame-by-frame playback loop.
#[derive(Clone, Debug, Default)]
pub struct PlaybackSequencer {
    cancel: CancelToken,
}

impl PlaybackSequencer {
    /// Create a sequencer ready to play.
    pub fn new() -> Self {
        Self::default()
    }

    /// Handle for stopping playback, usable from another thread.
    pub fn cancel_token(&self) -> CancelToken {
        self.cancel.clone()
    }

    /// Request a stop at the next frame boundary.
    pub fn stop(&self) {
        self.cancel.stop();
    }

    /// Re-arm the sequencer after a stop so it can play again.
    pub fn reset(&self) {
        self.cancel.rearm();
    }

    /// Iterate `store`'s frames in order, yielding each to `sink` with a
    /// `1/fps` delay between sink updates.
    ///
    /// A previously requested stop is honored before anything is shown; call
    /// [`PlaybackSequencer::reset`] to re-arm. The sink's `begin`/`end` run
    /// exactly once per call, including on cancellation. The store is borrowed
    /// immutably, so hosts supporting concurrent reads can keep inspecting it
    /// between displayed frames.
    #[tracing::instrument(skip(self, store, sink), fields(frames = store.len()))]
    pub fn play(
        &self,
        store: &FrameStore,
        fps: Fps,
        sink: &mut dyn DisplaySink,
    ) -> FlipbookResult<PlaybackStats> {
        let delay = Duration::from_secs_f64(fps.frame_duration_secs());
        sink.begin(PlaybackConfig {
            fps,
            frame_count: store.len(),
        })?;

        let mut stats = PlaybackStats::default();
        let last = store.len().saturating_sub(1);
        for (index, frame) in store.iter().enumerate() {
            if self.cancel.is_stopped() {
                stats.cancelled = true;
                break;
            }
            sink.show_frame(index, frame)?;
            stats.frames_shown += 1;
            if index == last {
                break;
            }
            if self.cancel.is_stopped() {
                stats.cancelled = true;
                break;
            }
            std::thread::sleep(delay);
        }

        sink.end()?;
        Ok(stats)
    }
}

/// In-memory sink for tests and debugging.
#[derive(Debug, Default)]
pub struct InMemorySink {
    cfg: Option<PlaybackConfig>,
    frames: Vec<(usize, Frame)>,
}

impl InMemorySink {
    /// Create a new in-memory sink.
    pub fn new() -> Self {
        Self::default()
    }

    /// Return the configuration captured in `begin`, if any.
    pub fn config(&self) -> Option<PlaybackConfig> {
        self.cfg
    }

    /// Borrow the captured frames.
    pub fn frames(&self) -> &[(usize, Frame)] {
        &self.frames
    }
}

impl DisplaySink for InMemorySink {
    fn begin(&mut self, cfg: PlaybackConfig) -> FlipbookResult<()> {
        self.cfg = Some(cfg);
        self.frames.clear();
        Ok(())
    }

    fn show_frame(&mut self, index: usize, frame: &Frame) -> FlipbookResult<()> {
        self.frames.push((index, frame.clone()));
        Ok(())
    }

    fn end(&mut self) -> FlipbookResult<()> {
        Ok(())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/playback/sequencer.rs"]
mod tests;
