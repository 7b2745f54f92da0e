use super::*;

use crate::foundation::core::Rgb8;

fn canvas(side: u32) -> Canvas {
    Canvas::new(side, side).unwrap()
}

fn uniform(side: u32, value: u8) -> Frame {
    Frame::filled(canvas(side), Rgb8::new(value, value, value))
}

fn two_frame_store(a: u8, b: u8) -> FrameStore {
    let mut store = FrameStore::new();
    store.push(uniform(2, a));
    store.push(uniform(2, b));
    store
}

#[test]
fn steps_zero_is_a_legal_no_op() {
    let mut store = two_frame_store(0, 255);
    let inserted = generate_tweens(&mut store, 0, 1, 0, canvas(2)).unwrap();
    assert_eq!(inserted, 0);
    assert_eq!(store.len(), 2);
}

#[test]
fn inserts_exactly_the_requested_count() {
    for steps in [1usize, 2, 5] {
        let mut store = two_frame_store(0, 255);
        let inserted = generate_tweens(&mut store, 0, 1, steps, canvas(2)).unwrap();
        assert_eq!(inserted, steps);
        assert_eq!(store.len(), 2 + steps);
    }
}

#[test]
fn interior_frames_follow_ascending_alpha_after_the_later_endpoint() {
    let mut store = two_frame_store(0, 255);
    generate_tweens(&mut store, 0, 1, 2, canvas(2)).unwrap();
    // [A, B, T1, T2] with alpha 1/3 and 2/3 over 0..255.
    assert_eq!(store.len(), 4);
    assert_eq!(store.get(2).unwrap().pixel(0, 0), Some(Rgb8::new(85, 85, 85)));
    assert_eq!(
        store.get(3).unwrap().pixel(1, 1),
        Some(Rgb8::new(170, 170, 170))
    );
}

#[test]
fn single_step_is_the_midpoint_blend() {
    let mut store = two_frame_store(0, 255);
    generate_tweens(&mut store, 0, 1, 1, canvas(2)).unwrap();
    let expected = blend_frames(&uniform(2, 0), &uniform(2, 255), 0.5).unwrap();
    assert_eq!(store.get(2), Some(&expected));
    assert_eq!(expected.pixel(0, 0), Some(Rgb8::new(128, 128, 128)));
}

#[test]
fn interior_frames_never_reproduce_either_endpoint() {
    let mut store = two_frame_store(0, 255);
    generate_tweens(&mut store, 0, 1, 3, canvas(2)).unwrap();
    let from = store.get(0).unwrap().clone();
    let to = store.get(1).unwrap().clone();
    for index in 2..store.len() {
        let tween = store.get(index).unwrap();
        assert_ne!(tween, &from);
        assert_ne!(tween, &to);
    }
}

#[test]
fn descending_ranges_blend_from_start_toward_end() {
    let mut store = two_frame_store(0, 255);
    // start = 1 (white), end = 0 (black): first interior frame is closest to white.
    generate_tweens(&mut store, 1, 0, 2, canvas(2)).unwrap();
    assert_eq!(store.len(), 4);
    assert_eq!(
        store.get(2).unwrap().pixel(0, 0),
        Some(Rgb8::new(170, 170, 170))
    );
    assert_eq!(store.get(3).unwrap().pixel(0, 0), Some(Rgb8::new(85, 85, 85)));
}

#[test]
fn endpoints_resize_to_the_target_canvas() {
    let mut store = FrameStore::new();
    store.push(uniform(2, 0));
    store.push(uniform(8, 255));
    generate_tweens(&mut store, 0, 1, 1, canvas(4)).unwrap();
    let tween = store.get(2).unwrap();
    assert_eq!(tween.canvas(), canvas(4));
    assert_eq!(tween.pixel(0, 0), Some(Rgb8::new(128, 128, 128)));
}

#[test]
fn precondition_failures_are_typed() {
    let mut empty = FrameStore::new();
    assert!(matches!(
        generate_tweens(&mut empty, 0, 1, 1, canvas(2)),
        Err(FlipbookError::InsufficientFrames { len: 0 })
    ));

    let mut one = FrameStore::new();
    one.push(uniform(2, 0));
    assert!(matches!(
        generate_tweens(&mut one, 0, 0, 1, canvas(2)),
        Err(FlipbookError::InsufficientFrames { len: 1 })
    ));

    let mut store = two_frame_store(0, 255);
    assert!(matches!(
        generate_tweens(&mut store, 1, 1, 1, canvas(2)),
        Err(FlipbookError::InvalidRange(_))
    ));
    assert!(matches!(
        generate_tweens(&mut store, 0, 2, 1, canvas(2)),
        Err(FlipbookError::InvalidRange(_))
    ));
    // Failed calls leave the store untouched.
    assert_eq!(store.len(), 2);
}

#[test]
fn blend_rejects_mismatched_inputs() {
    assert!(blend_frames(&uniform(2, 0), &uniform(3, 255), 0.5).is_err());
    assert!(blend_frames(&uniform(2, 0), &uniform(2, 255), 1.5).is_err());
    assert!(blend_frames(&uniform(2, 0), &uniform(2, 255), f32::NAN).is_err());
}
