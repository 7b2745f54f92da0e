use super::*;

#[test]
fn slot_starts_empty() {
    let track = AudioTrack::new();
    assert!(!track.is_present());
    assert!(track.get().is_none());
}

#[test]
fn attach_replaces_unconditionally() {
    let mut track = AudioTrack::new();
    track.attach(AudioAttachment::new(vec![1, 2, 3]));
    assert!(track.is_present());

    track.attach(AudioAttachment::with_content_type(vec![9], "audio/ogg"));
    let current = track.get().unwrap();
    assert_eq!(current.bytes, vec![9]);
    assert_eq!(current.content_type.as_deref(), Some("audio/ogg"));
}

#[test]
fn detach_returns_the_previous_attachment() {
    let mut track = AudioTrack::new();
    track.attach(AudioAttachment::new(vec![5, 5]));
    let detached = track.detach().unwrap();
    assert_eq!(detached.bytes, vec![5, 5]);
    assert!(!track.is_present());
    assert!(track.detach().is_none());
}
