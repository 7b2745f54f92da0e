use super::*;

fn tiny(canvas_side: u32, fill: Rgb8) -> Frame {
    Frame::filled(Canvas::new(canvas_side, canvas_side).unwrap(), fill)
}

fn store_abc() -> FrameStore {
    let mut store = FrameStore::new();
    store.push(tiny(2, Rgb8::new(1, 0, 0)));
    store.push(tiny(2, Rgb8::new(0, 1, 0)));
    store.push(tiny(2, Rgb8::new(0, 0, 1)));
    store
}

fn selection_invariant_holds(store: &FrameStore) -> bool {
    match store.selected() {
        None => store.is_empty(),
        Some(index) => index < store.len(),
    }
}

#[test]
fn add_blank_appends_uniform_frame_and_selects_it() {
    let mut store = FrameStore::new();
    let index = store.add_blank(Canvas::new(3, 2).unwrap(), Rgb8::new(7, 8, 9));
    assert_eq!(index, 0);
    assert_eq!(store.selected(), Some(0));
    assert_eq!(store.get(0).unwrap().pixel(2, 1), Some(Rgb8::new(7, 8, 9)));
}

#[test]
fn push_selects_the_appended_frame() {
    let mut store = store_abc();
    assert_eq!(store.selected(), Some(2));
    let index = store.push(tiny(2, Rgb8::WHITE));
    assert_eq!(index, 3);
    assert_eq!(store.selected(), Some(3));
}

#[test]
fn remove_shifts_selection_to_nearest_earlier_frame() {
    let mut store = store_abc();
    store.select(2).unwrap();
    store.remove(2).unwrap();
    assert_eq!(store.len(), 2);
    assert_eq!(store.selected(), Some(1));
}

#[test]
fn remove_first_keeps_selection_at_zero() {
    let mut store = store_abc();
    store.remove(0).unwrap();
    assert_eq!(store.selected(), Some(0));
}

#[test]
fn remove_last_remaining_frame_clears_selection() {
    let mut store = FrameStore::new();
    store.push(tiny(2, Rgb8::WHITE));
    store.remove(0).unwrap();
    assert_eq!(store.selected(), None);
    assert!(store.is_empty());
}

#[test]
fn duplicate_inserts_independent_copy_after_original() {
    let mut store = FrameStore::new();
    let a = tiny(2, Rgb8::new(10, 10, 10));
    store.push(a.clone());
    store.push(tiny(2, Rgb8::new(20, 20, 20)));

    let copy_index = store.duplicate(0).unwrap();
    assert_eq!(copy_index, 1);
    assert_eq!(store.len(), 3);
    assert_eq!(store.selected(), Some(1));
    assert_eq!(store.get(1), Some(&a));

    // Mutating the original leaves the copy untouched.
    store.replace(0, tiny(2, Rgb8::new(99, 99, 99))).unwrap();
    assert_eq!(store.get(1), Some(&a));
}

#[test]
fn move_to_same_index_is_a_no_op() {
    let mut store = store_abc();
    let before = store.frames().to_vec();
    let selected = store.selected();
    assert!(!store.move_frame(1, 1));
    assert_eq!(store.frames(), &before[..]);
    assert_eq!(store.selected(), selected);
}

#[test]
fn move_relocates_frame_and_tracks_selection() {
    let mut store = store_abc();
    let first = store.get(0).unwrap().clone();
    assert!(store.move_frame(0, 2));
    assert_eq!(store.get(2), Some(&first));
    assert_eq!(store.selected(), Some(2));
}

#[test]
fn move_with_invalid_index_is_a_no_op() {
    let mut store = store_abc();
    let before = store.frames().to_vec();
    assert!(!store.move_frame(0, 3));
    assert!(!store.move_frame(3, 0));
    assert_eq!(store.frames(), &before[..]);
}

#[test]
fn replace_preserves_position() {
    let mut store = store_abc();
    let swap = tiny(2, Rgb8::new(42, 42, 42));
    store.replace(1, swap.clone()).unwrap();
    assert_eq!(store.get(1), Some(&swap));
    assert_eq!(store.len(), 3);
}

#[test]
fn clear_empties_store_and_selection() {
    let mut store = store_abc();
    store.clear();
    assert!(store.is_empty());
    assert_eq!(store.selected(), None);
}

#[test]
fn index_errors_cover_every_indexed_operation() {
    let mut store = FrameStore::new();
    let e = store.remove(0).unwrap_err();
    assert!(matches!(e, FlipbookError::OutOfRange { index: 0, len: 0 }));
    assert!(store.duplicate(0).is_err());
    assert!(store.replace(0, tiny(2, Rgb8::WHITE)).is_err());
    assert!(store.select(0).is_err());

    store.push(tiny(2, Rgb8::WHITE));
    assert!(matches!(
        store.remove(1),
        Err(FlipbookError::OutOfRange { index: 1, len: 1 })
    ));
}

#[test]
fn selection_invariant_survives_an_operation_storm() {
    let mut store = FrameStore::new();
    assert!(selection_invariant_holds(&store));

    for i in 0..5 {
        store.add_blank(Canvas::new(2, 2).unwrap(), Rgb8::new(i, i, i));
        assert!(selection_invariant_holds(&store));
    }
    store.remove(4).unwrap();
    assert!(selection_invariant_holds(&store));
    store.duplicate(0).unwrap();
    assert!(selection_invariant_holds(&store));
    store.move_frame(0, 3);
    assert!(selection_invariant_holds(&store));
    store.remove(0).unwrap();
    assert!(selection_invariant_holds(&store));
    store.clear();
    assert!(selection_invariant_holds(&store));
    store.add_blank(Canvas::new(2, 2).unwrap(), Rgb8::WHITE);
    assert!(selection_invariant_holds(&store));
}
