use crate::foundation::error::{FlipbookError, FlipbookResult};

/// A timestamped label on the companion audio/video timeline.
///
/// Cues are immutable once created and serialize verbatim into the project
/// manifest. They do not reference frames; frame identity is positional and
/// out of scope for cue linkage.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Cue {
    /// Timeline position in seconds, non-negative.
    pub time: f64,
    /// Free-text action label.
    #[serde(default)]
    pub action: String,
}

/// Validation policy applied when cues are created.
#[derive(Clone, Copy, Debug)]
pub struct CuePolicy {
    /// Whether an empty `action` label is accepted.
    pub allow_empty_action: bool,
}

impl Default for CuePolicy {
    fn default() -> Self {
        Self {
            allow_empty_action: true,
        }
    }
}

/// Ordered list of cues in insertion order.
///
/// Read order is write order; duplicates are permitted and no time-sorting is
/// enforced.
#[derive(Clone, Debug, Default)]
pub struct CueTrack {
    cues: Vec<Cue>,
    policy: CuePolicy,
}

impl CueTrack {
    /// Create an empty track with the default policy.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty track with an explicit creation policy.
    pub fn with_policy(policy: CuePolicy) -> Self {
        Self {
            cues: Vec::new(),
            policy,
        }
    }

    /// Append a cue after validating it against the track policy.
    pub fn add(&mut self, time: f64, action: impl Into<String>) -> FlipbookResult<()> {
        let action = action.into();
        if !time.is_finite() || time < 0.0 {
            return Err(FlipbookError::validation(
                "cue time must be finite and >= 0 seconds",
            ));
        }
        if !self.policy.allow_empty_action && action.trim().is_empty() {
            return Err(FlipbookError::validation(
                "cue action must be non-empty under the current policy",
            ));
        }
        self.cues.push(Cue { time, action });
        Ok(())
    }

    /// Full cue sequence in insertion order.
    pub fn list(&self) -> &[Cue] {
        &self.cues
    }

    /// Number of cues held.
    pub fn len(&self) -> usize {
        self.cues.len()
    }

    /// Return `true` when the track holds no cues.
    pub fn is_empty(&self) -> bool {
        self.cues.is_empty()
    }

    /// Remove and return the cue at `index`.
    pub fn remove_at(&mut self, index: usize) -> FlipbookResult<Cue> {
        if index >= self.cues.len() {
            return Err(FlipbookError::out_of_range(index, self.cues.len()));
        }
        Ok(self.cues.remove(index))
    }

    /// Remove every cue.
    pub fn clear(&mut self) {
        self.cues.clear();
    }

    /// Replace the whole list verbatim, bypassing the creation policy.
    ///
    /// Imported cues load as-written; the policy governs creation only.
    pub(crate) fn replace_all(&mut self, cues: Vec<Cue>) {
        self.cues = cues;
    }
}

#[cfg(test)]
#[path = "../../tests/unit/timeline/cue.rs"]
mod tests;
