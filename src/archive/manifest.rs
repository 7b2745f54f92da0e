use crate::foundation::core::Canvas;
use crate::foundation::error::{FlipbookError, FlipbookResult};
use crate::timeline::cue::Cue;

/// Name of the metadata resource inside an archive.
pub const MANIFEST_RESOURCE: &str = "project.json";

/// Well-known name of the audio resource.
///
/// Archives written before the manifest carried an explicit audio entry store
/// their attachment under this name with no entry; import probes it.
pub const AUDIO_RESOURCE: &str = "audio/attached_audio";

/// Current manifest format version. Manifests without a `version` field are
/// treated as version 1.
pub const MANIFEST_VERSION: u32 = 1;

/// Resource name for the frame at `index`, e.g. `frames/frame_007.png`.
///
/// The ordinal is zero-padded to at least three digits so natural sort order
/// matches sequence order; the manifest's `frames` list stays authoritative
/// for ordering either way.
pub fn frame_resource_name(index: usize) -> String {
    format!("frames/frame_{index:03}.png")
}

/// Audio entry recorded in the manifest.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct AudioEntry {
    /// Archive resource name holding the audio bytes.
    pub resource: String,
    /// MIME hint captured at attach time.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content_type: Option<String>,
}

/// Versioned metadata record describing an exported project.
///
/// Two serialized shapes exist: the full-archive manifest (embedded in the
/// container next to its frame resources) and the metadata-only record (the
/// same fields serialized alone, with `frames_count` standing in for the
/// missing binary frames).
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct ProjectManifest {
    /// Manifest format version; legacy exports omit it.
    #[serde(default = "default_version")]
    pub version: u32,
    /// Frame resource names in temporal order.
    #[serde(default)]
    pub frames: Vec<String>,
    /// Frame count for metadata-only payloads carrying no binary frames.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub frames_count: Option<usize>,
    /// Cue list, verbatim.
    #[serde(default)]
    pub cues: Vec<Cue>,
    /// Canvas dimensions at export time.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub canvas_size: Option<Canvas>,
    /// Audio resource entry when audio is attached.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub audio: Option<AudioEntry>,
}

fn default_version() -> u32 {
    1
}

const RECOGNIZED_FIELDS: [&str; 6] = [
    "version",
    "frames",
    "frames_count",
    "cues",
    "canvas_size",
    "audio",
];

impl ProjectManifest {
    /// Parse manifest bytes, rejecting JSON that is not manifest-shaped.
    ///
    /// The error string explains the mismatch; callers wrap it as
    /// [`FlipbookError::CorruptArchive`] or
    /// [`FlipbookError::UnrecognizedFormat`] depending on where the bytes came
    /// from.
    pub(crate) fn parse(bytes: &[u8]) -> Result<Self, String> {
        let value: serde_json::Value = serde_json::from_slice(bytes)
            .map_err(|e| format!("metadata is not valid JSON: {e}"))?;
        let object = value
            .as_object()
            .ok_or_else(|| "metadata root must be a JSON object".to_string())?;
        if !object
            .keys()
            .any(|key| RECOGNIZED_FIELDS.contains(&key.as_str()))
        {
            return Err("metadata object carries no recognized project fields".to_string());
        }
        serde_json::from_value(value).map_err(|e| format!("metadata fields are malformed: {e}"))
    }

    /// Validate invariants of a parsed manifest.
    pub fn validate(&self) -> FlipbookResult<()> {
        if self.version == 0 || self.version > MANIFEST_VERSION {
            return Err(FlipbookError::corrupt_archive(format!(
                "unsupported manifest version {} (newest supported is {MANIFEST_VERSION})",
                self.version
            )));
        }
        for name in &self.frames {
            if name.trim().is_empty() {
                return Err(FlipbookError::corrupt_archive(
                    "manifest lists an empty frame resource name",
                ));
            }
        }
        if let Some(count) = self.frames_count
            && !self.frames.is_empty()
            && count != self.frames.len()
        {
            return Err(FlipbookError::corrupt_archive(format!(
                "manifest frames_count {count} disagrees with {} listed frames",
                self.frames.len()
            )));
        }
        for cue in &self.cues {
            if !cue.time.is_finite() || cue.time < 0.0 {
                return Err(FlipbookError::corrupt_archive(format!(
                    "cue '{}' has invalid time {}",
                    cue.action, cue.time
                )));
            }
        }
        if let Some(canvas) = self.canvas_size
            && (canvas.width == 0 || canvas.height == 0)
        {
            return Err(FlipbookError::corrupt_archive(
                "manifest canvas_size must have width/height > 0",
            ));
        }
        if let Some(audio) = &self.audio
            && audio.resource.trim().is_empty()
        {
            return Err(FlipbookError::corrupt_archive(
                "manifest audio resource name must be non-empty",
            ));
        }
        Ok(())
    }

    /// Number of frames this manifest describes, whether or not their binary
    /// data is embedded alongside it.
    pub fn described_frames(&self) -> usize {
        if self.frames.is_empty() {
            self.frames_count.unwrap_or(0)
        } else {
            self.frames.len()
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/archive/manifest.rs"]
mod tests;
