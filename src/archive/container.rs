use std::io::{Cursor, Read, Write};

use anyhow::Context;

use crate::archive::manifest::{
    AUDIO_RESOURCE, AudioEntry, MANIFEST_RESOURCE, MANIFEST_VERSION, ProjectManifest,
    frame_resource_name,
};
use crate::assets::codec;
use crate::foundation::core::Canvas;
use crate::foundation::error::{FlipbookError, FlipbookResult};
use crate::project::Project;
use crate::timeline::audio::AudioAttachment;
use crate::timeline::cue::Cue;

/// Outcome of a successful [`deserialize`] call.
#[derive(Clone, Debug)]
pub enum ProjectImport {
    /// Full archive: frames, cues, audio, and canvas all restored.
    Complete(Project),
    /// Metadata-only payload: cues (and canvas, when recorded) restored, but
    /// the frame pixels are not embedded in this representation.
    ///
    /// This is the partial-import condition callers surface to the user; it is
    /// never silently collapsed into an empty project.
    FramesUnavailable {
        /// Cue list, verbatim.
        cues: Vec<Cue>,
        /// Canvas dimensions, when the record carried them.
        canvas: Option<Canvas>,
        /// Number of frames the record claims existed at export time.
        frames_count: usize,
    },
}

/// Serialize a project snapshot into portable archive bytes.
///
/// Frames are encoded and written one at a time so peak memory stays bounded
/// by the largest single frame plus the archive index. A project with zero
/// frames serializes to a valid archive with an empty frame list; guarding
/// against exporting nothing is the presentation layer's concern.
#[tracing::instrument(skip(project), fields(frames = project.frames.len(), cues = project.cues.len()))]
pub fn serialize(project: &Project) -> FlipbookResult<Vec<u8>> {
    let mut writer = zip::ZipWriter::new(Cursor::new(Vec::new()));
    let options = zip::write::FileOptions::default();

    let mut frame_names = Vec::with_capacity(project.frames.len());
    for (index, frame) in project.frames.iter().enumerate() {
        let name = frame_resource_name(index);
        let png = codec::encode_frame_png(frame)?;
        writer
            .start_file(name.as_str(), options)
            .with_context(|| format!("start frame resource '{name}'"))?;
        writer
            .write_all(&png)
            .with_context(|| format!("write frame resource '{name}'"))?;
        frame_names.push(name);
    }

    let manifest = ProjectManifest {
        version: MANIFEST_VERSION,
        frames: frame_names,
        frames_count: None,
        cues: project.cues.clone(),
        canvas_size: Some(project.canvas),
        audio: project.audio.as_ref().map(|audio| AudioEntry {
            resource: AUDIO_RESOURCE.to_string(),
            content_type: audio.content_type.clone(),
        }),
    };
    writer
        .start_file(MANIFEST_RESOURCE, options)
        .context("start metadata resource")?;
    let manifest_json = serde_json::to_vec_pretty(&manifest).context("encode metadata record")?;
    writer
        .write_all(&manifest_json)
        .context("write metadata resource")?;

    if let Some(audio) = &project.audio {
        writer
            .start_file(AUDIO_RESOURCE, options)
            .context("start audio resource")?;
        writer
            .write_all(&audio.bytes)
            .context("write audio resource")?;
    }

    let cursor = writer.finish().context("finalize archive")?;
    Ok(cursor.into_inner())
}

/// Reconstruct a project from uploaded bytes.
///
/// Detects whether the payload is the full archive container or a bare
/// metadata record. A container with a missing or unparsable metadata
/// resource, a missing listed frame, or an undecodable frame fails with
/// [`FlipbookError::CorruptArchive`]. Bytes that are neither a container nor
/// a metadata record fail with [`FlipbookError::UnrecognizedFormat`]. Nothing
/// is partially constructed on failure.
#[tracing::instrument(skip(bytes), fields(len = bytes.len()))]
pub fn deserialize(bytes: &[u8]) -> FlipbookResult<ProjectImport> {
    if bytes.starts_with(b"PK") {
        return deserialize_container(bytes);
    }
    match ProjectManifest::parse(bytes) {
        Ok(manifest) => deserialize_metadata_only(manifest),
        Err(reason) => Err(FlipbookError::unrecognized_format(reason)),
    }
}

fn deserialize_container(bytes: &[u8]) -> FlipbookResult<ProjectImport> {
    let mut archive = zip::ZipArchive::new(Cursor::new(bytes))
        .map_err(|e| FlipbookError::corrupt_archive(format!("unreadable container: {e}")))?;

    let manifest_bytes = read_resource(&mut archive, MANIFEST_RESOURCE)?.ok_or_else(|| {
        FlipbookError::corrupt_archive(format!("missing '{MANIFEST_RESOURCE}' metadata resource"))
    })?;
    let manifest =
        ProjectManifest::parse(&manifest_bytes).map_err(FlipbookError::corrupt_archive)?;
    manifest.validate()?;

    let mut frames = Vec::with_capacity(manifest.frames.len());
    for name in &manifest.frames {
        let data = read_resource(&mut archive, name)?.ok_or_else(|| {
            FlipbookError::corrupt_archive(format!("missing frame resource '{name}'"))
        })?;
        let frame = codec::decode_frame(&data).map_err(|e| {
            FlipbookError::corrupt_archive(format!("undecodable frame resource '{name}': {e}"))
        })?;
        frames.push(frame);
    }

    let audio = match &manifest.audio {
        Some(entry) => {
            let data = read_resource(&mut archive, &entry.resource)?.ok_or_else(|| {
                FlipbookError::corrupt_archive(format!(
                    "missing audio resource '{}'",
                    entry.resource
                ))
            })?;
            Some(AudioAttachment {
                bytes: data,
                content_type: entry.content_type.clone(),
            })
        }
        // Legacy archives carry audio under the well-known name with no
        // manifest entry.
        None => match read_resource(&mut archive, AUDIO_RESOURCE)? {
            Some(data) => {
                tracing::debug!("audio loaded from legacy well-known resource name");
                Some(AudioAttachment::new(data))
            }
            None => None,
        },
    };

    Ok(ProjectImport::Complete(Project {
        frames,
        cues: manifest.cues,
        audio,
        canvas: manifest.canvas_size.unwrap_or_default(),
    }))
}

fn deserialize_metadata_only(manifest: ProjectManifest) -> FlipbookResult<ProjectImport> {
    manifest.validate()?;
    let frames_count = manifest.described_frames();
    if frames_count > 0 {
        tracing::warn!(
            frames_count,
            "metadata-only import: frame pixels are not embedded in this representation"
        );
        return Ok(ProjectImport::FramesUnavailable {
            cues: manifest.cues,
            canvas: manifest.canvas_size,
            frames_count,
        });
    }
    Ok(ProjectImport::Complete(Project {
        frames: Vec::new(),
        cues: manifest.cues,
        audio: None,
        canvas: manifest.canvas_size.unwrap_or_default(),
    }))
}

fn read_resource(
    archive: &mut zip::ZipArchive<Cursor<&[u8]>>,
    name: &str,
) -> FlipbookResult<Option<Vec<u8>>> {
    let mut file = match archive.by_name(name) {
        Ok(file) => file,
        Err(zip::result::ZipError::FileNotFound) => return Ok(None),
        Err(e) => {
            return Err(FlipbookError::corrupt_archive(format!(
                "resource '{name}': {e}"
            )));
        }
    };
    let mut buf = Vec::new();
    file.read_to_end(&mut buf).map_err(|e| {
        FlipbookError::corrupt_archive(format!("read of resource '{name}' failed: {e}"))
    })?;
    Ok(Some(buf))
}

#[cfg(test)]
#[path = "../../tests/unit/archive/container.rs"]
mod tests;
