use super::*;

use crate::foundation::core::{Canvas, Rgb8};

fn glyph_has_ink(glyph: &Glyph<'_>) -> bool {
    for y in 0..glyph.height() {
        for x in 0..glyph.width() {
            if glyph.ink(x, y) {
                return true;
            }
        }
    }
    false
}

#[test]
fn empty_library_resolves_to_builtin() {
    let fonts = FontLibrary::new();
    assert!(!fonts.has_preferred());
    let resolved = fonts.resolve();
    assert!(glyph_has_ink(&resolved.glyph('A')));
    // Space is legitimately blank.
    assert!(!glyph_has_ink(&resolved.glyph(' ')));
}

#[test]
fn uncovered_characters_draw_replacement_box() {
    let fonts = FontLibrary::new();
    let resolved = fonts.resolve();
    let glyph = resolved.glyph('\u{4F60}');
    // The replacement box has an inked outline.
    assert!(glyph.ink(0, 0));
    assert!(glyph.ink(6, 0));
    assert!(!glyph.ink(3, 3));
}

#[test]
fn strip_font_slices_grid_cells() {
    // Two 4x4 cells side by side: an all-ink 'a' and a blank 'b'.
    let mut sheet = Frame::filled(Canvas::new(8, 4).unwrap(), Rgb8::WHITE);
    for y in 0..4 {
        for x in 0..4 {
            sheet.set_pixel(i64::from(x), i64::from(y), Rgb8::BLACK);
        }
    }
    let font = StripFont::from_grid(&sheet, 4, 4, 2, 1, 'a').unwrap();

    let mut library = FontLibrary::new();
    library.register(font);
    assert!(library.has_preferred());

    let resolved = library.resolve();
    let a = resolved.glyph('a');
    assert_eq!((a.width(), a.height()), (4, 4));
    assert!(a.ink(0, 0) && a.ink(3, 3));

    let b = resolved.glyph('b');
    assert!(!glyph_has_ink(&b));

    // Outside the covered run falls back to the replacement box.
    let z = resolved.glyph('z');
    assert_eq!((z.width(), z.height()), (8, 8));
    assert!(z.ink(0, 0));
}

#[test]
fn from_grid_validates_geometry() {
    let sheet = Frame::filled(Canvas::new(8, 8).unwrap(), Rgb8::WHITE);
    assert!(StripFont::from_grid(&sheet, 0, 8, 1, 1, ' ').is_err());
    assert!(StripFont::from_grid(&sheet, 8, 8, 2, 1, ' ').is_err());
    assert!(StripFont::from_grid(&sheet, 8, 8, 1, 2, ' ').is_err());
    assert!(StripFont::from_grid(&sheet, 8, 8, 1, 1, ' ').is_ok());
}

#[test]
fn clear_returns_to_builtin() {
    let sheet = Frame::filled(Canvas::new(8, 8).unwrap(), Rgb8::BLACK);
    let mut library = FontLibrary::new();
    library.register(StripFont::from_grid(&sheet, 8, 8, 1, 1, 'A').unwrap());
    library.clear();
    assert!(!library.has_preferred());
}
