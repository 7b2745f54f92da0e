/// Opaque audio payload attached to a project.
///
/// Bytes pass through the engine untouched; no audio format validation is
/// performed. The content type is a MIME hint inferred from the upload.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AudioAttachment {
    /// Raw encoded audio bytes.
    pub bytes: Vec<u8>,
    /// MIME hint captured at attach time, if known.
    pub content_type: Option<String>,
}

impl AudioAttachment {
    /// Wrap raw bytes with no content-type hint.
    pub fn new(bytes: Vec<u8>) -> Self {
        Self {
            bytes,
            content_type: None,
        }
    }

    /// Wrap raw bytes with a content-type hint.
    pub fn with_content_type(bytes: Vec<u8>, content_type: impl Into<String>) -> Self {
        Self {
            bytes,
            content_type: Some(content_type.into()),
        }
    }
}

/// Single-slot audio attachment for a project.
///
/// Absence is the absence of the attachment, never an empty blob.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AudioTrack {
    attachment: Option<AudioAttachment>,
}

impl AudioTrack {
    /// Create an empty slot.
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace any existing attachment unconditionally.
    pub fn attach(&mut self, attachment: AudioAttachment) {
        self.attachment = Some(attachment);
    }

    /// Clear the slot, returning the previous attachment if any.
    pub fn detach(&mut self) -> Option<AudioAttachment> {
        self.attachment.take()
    }

    /// Return `true` when audio is attached.
    pub fn is_present(&self) -> bool {
        self.attachment.is_some()
    }

    /// Borrow the current attachment, if any.
    pub fn get(&self) -> Option<&AudioAttachment> {
        self.attachment.as_ref()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/timeline/audio.rs"]
mod tests;
