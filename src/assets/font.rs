use crate::foundation::core::Frame;
use crate::foundation::error::{FlipbookError, FlipbookResult};

/// A raster glyph-grid font sliced out of a sheet image.
///
/// Glyphs are laid out row-major in a fixed-cell grid covering a contiguous
/// run of characters starting at `first_char`. A sheet pixel counts as ink
/// when its luma is below 128, so dark-on-light strips work as-is.
#[derive(Clone, Debug)]
pub struct StripFont {
    cell_width: u32,
    cell_height: u32,
    first_char: u32,
    glyphs: Vec<Vec<bool>>,
}

impl StripFont {
    /// Slice a `columns` x `rows` glyph grid out of `sheet`.
    pub fn from_grid(
        sheet: &Frame,
        cell_width: u32,
        cell_height: u32,
        columns: u32,
        rows: u32,
        first_char: char,
    ) -> FlipbookResult<Self> {
        if cell_width == 0 || cell_height == 0 {
            return Err(FlipbookError::validation(
                "font cell width/height must be > 0",
            ));
        }
        if columns == 0 || rows == 0 {
            return Err(FlipbookError::validation(
                "font grid columns/rows must be > 0",
            ));
        }
        if columns * cell_width > sheet.width() || rows * cell_height > sheet.height() {
            return Err(FlipbookError::validation(format!(
                "font grid {columns}x{rows} of {cell_width}x{cell_height} cells exceeds the \
                 {}x{} sheet",
                sheet.width(),
                sheet.height()
            )));
        }

        let mut glyphs = Vec::with_capacity((columns * rows) as usize);
        for row in 0..rows {
            for col in 0..columns {
                let x0 = col * cell_width;
                let y0 = row * cell_height;
                let mut bits = Vec::with_capacity((cell_width * cell_height) as usize);
                for y in 0..cell_height {
                    for x in 0..cell_width {
                        // Integer Rec. 601 luma, scaled by 1000.
                        let ink = sheet.pixel(x0 + x, y0 + y).is_some_and(|px| {
                            let luma = u32::from(px.r) * 299
                                + u32::from(px.g) * 587
                                + u32::from(px.b) * 114;
                            luma < 128 * 1000
                        });
                        bits.push(ink);
                    }
                }
                glyphs.push(bits);
            }
        }

        Ok(Self {
            cell_width,
            cell_height,
            first_char: first_char as u32,
            glyphs,
        })
    }

    fn glyph_index(&self, ch: char) -> Option<usize> {
        let code = ch as u32;
        if code < self.first_char {
            return None;
        }
        let index = (code - self.first_char) as usize;
        (index < self.glyphs.len()).then_some(index)
    }
}

/// Two-tier font resolution policy: a registered preferred font, then the
/// guaranteed built-in glyph set.
///
/// Resolution never fails; with no registered font, text renders with the
/// built-in 8x8 glyphs. Characters a resolved font does not cover draw as a
/// replacement box rather than failing the operation.
#[derive(Clone, Debug, Default)]
pub struct FontLibrary {
    preferred: Option<StripFont>,
}

impl FontLibrary {
    /// Create an empty library (built-in glyphs only).
    pub fn new() -> Self {
        Self::default()
    }

    /// Register the preferred font, replacing any existing registration.
    pub fn register(&mut self, font: StripFont) {
        self.preferred = Some(font);
    }

    /// Drop the preferred font, falling back to built-in glyphs.
    pub fn clear(&mut self) {
        self.preferred = None;
    }

    /// Return `true` when a preferred font is registered.
    pub fn has_preferred(&self) -> bool {
        self.preferred.is_some()
    }

    pub(crate) fn resolve(&self) -> ResolvedFont<'_> {
        match &self.preferred {
            Some(font) => ResolvedFont::Strip(font),
            None => {
                tracing::debug!("no font resource registered, using built-in glyphs");
                ResolvedFont::Builtin
            }
        }
    }
}

pub(crate) enum ResolvedFont<'a> {
    Strip(&'a StripFont),
    Builtin,
}

impl<'a> ResolvedFont<'a> {
    pub(crate) fn glyph(&self, ch: char) -> Glyph<'a> {
        match self {
            Self::Strip(font) => match font.glyph_index(ch) {
                Some(index) => Glyph::Mask {
                    width: font.cell_width,
                    height: font.cell_height,
                    bits: &font.glyphs[index],
                },
                None => Glyph::Packed(&REPLACEMENT_GLYPH),
            },
            Self::Builtin => {
                let code = ch as u32;
                if (BUILTIN_FIRST_CHAR..BUILTIN_FIRST_CHAR + BUILTIN_GLYPHS.len() as u32)
                    .contains(&code)
                {
                    Glyph::Packed(&BUILTIN_GLYPHS[(code - BUILTIN_FIRST_CHAR) as usize])
                } else {
                    Glyph::Packed(&REPLACEMENT_GLYPH)
                }
            }
        }
    }
}

/// One resolved glyph bitmap.
pub(crate) enum Glyph<'a> {
    /// Built-in 8x8 glyph; bit `x` of row `y`, least-significant bit leftmost.
    Packed(&'static [u8; 8]),
    /// Strip-font glyph mask, row-major.
    Mask {
        width: u32,
        height: u32,
        bits: &'a [bool],
    },
}

impl Glyph<'_> {
    pub(crate) fn width(&self) -> u32 {
        match self {
            Self::Packed(_) => 8,
            Self::Mask { width, .. } => *width,
        }
    }

    pub(crate) fn height(&self) -> u32 {
        match self {
            Self::Packed(_) => 8,
            Self::Mask { height, .. } => *height,
        }
    }

    pub(crate) fn ink(&self, x: u32, y: u32) -> bool {
        match self {
            Self::Packed(rows) => x < 8 && y < 8 && (rows[y as usize] >> x) & 1 == 1,
            Self::Mask {
                width,
                height,
                bits,
            } => x < *width && y < *height && bits[(y * width + x) as usize],
        }
    }
}

const BUILTIN_FIRST_CHAR: u32 = 0x20;

/// Replacement box drawn for characters the resolved font does not cover.
const REPLACEMENT_GLYPH: [u8; 8] = [0x7F, 0x41, 0x41, 0x41, 0x41, 0x41, 0x7F, 0x00];

/// Built-in 8x8 glyphs for printable ASCII, derived from the public-domain
/// font8x8 set. Bit `x` of row `y` is the pixel at `(x, y)`, LSB leftmost.
const BUILTIN_GLYPHS: [[u8; 8]; 95] = [
    [0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00], // ' '
    [0x18, 0x3C, 0x3C, 0x18, 0x18, 0x00, 0x18, 0x00], // '!'
    [0x36, 0x36, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00], // '"'
    [0x36, 0x36, 0x7F, 0x36, 0x7F, 0x36, 0x36, 0x00], // '#'
    [0x0C, 0x3E, 0x03, 0x1E, 0x30, 0x1F, 0x0C, 0x00], // '$'
    [0x00, 0x63, 0x33, 0x18, 0x0C, 0x66, 0x63, 0x00], // '%'
    [0x1C, 0x36, 0x1C, 0x6E, 0x3B, 0x33, 0x6E, 0x00], // '&'
    [0x06, 0x06, 0x03, 0x00, 0x00, 0x00, 0x00, 0x00], // '\''
    [0x18, 0x0C, 0x06, 0x06, 0x06, 0x0C, 0x18, 0x00], // '('
    [0x06, 0x0C, 0x18, 0x18, 0x18, 0x0C, 0x06, 0x00], // ')'
    [0x00, 0x66, 0x3C, 0xFF, 0x3C, 0x66, 0x00, 0x00], // '*'
    [0x00, 0x0C, 0x0C, 0x3F, 0x0C, 0x0C, 0x00, 0x00], // '+'
    [0x00, 0x00, 0x00, 0x00, 0x00, 0x0C, 0x0C, 0x06], // ','
    [0x00, 0x00, 0x00, 0x3F, 0x00, 0x00, 0x00, 0x00], // '-'
    [0x00, 0x00, 0x00, 0x00, 0x00, 0x0C, 0x0C, 0x00], // '.'
    [0x60, 0x30, 0x18, 0x0C, 0x06, 0x03, 0x01, 0x00], // '/'
    [0x3E, 0x63, 0x73, 0x7B, 0x6F, 0x67, 0x3E, 0x00], // '0'
    [0x0C, 0x0E, 0x0C, 0x0C, 0x0C, 0x0C, 0x3F, 0x00], // '1'
    [0x1E, 0x33, 0x30, 0x1C, 0x06, 0x33, 0x3F, 0x00], // '2'
    [0x1E, 0x33, 0x30, 0x1C, 0x30, 0x33, 0x1E, 0x00], // '3'
    [0x38, 0x3C, 0x36, 0x33, 0x7F, 0x30, 0x78, 0x00], // '4'
    [0x3F, 0x03, 0x1F, 0x30, 0x30, 0x33, 0x1E, 0x00], // '5'
    [0x1C, 0x06, 0x03, 0x1F, 0x33, 0x33, 0x1E, 0x00], // '6'
    [0x3F, 0x33, 0x30, 0x18, 0x0C, 0x0C, 0x0C, 0x00], // '7'
    [0x1E, 0x33, 0x33, 0x1E, 0x33, 0x33, 0x1E, 0x00], // '8'
    [0x1E, 0x33, 0x33, 0x3E, 0x30, 0x18, 0x0E, 0x00], // '9'
    [0x00, 0x0C, 0x0C, 0x00, 0x00, 0x0C, 0x0C, 0x00], // ':'
    [0x00, 0x0C, 0x0C, 0x00, 0x00, 0x0C, 0x0C, 0x06], // ';'
    [0x18, 0x0C, 0x06, 0x03, 0x06, 0x0C, 0x18, 0x00], // '<'
    [0x00, 0x00, 0x3F, 0x00, 0x00, 0x3F, 0x00, 0x00], // '='
    [0x06, 0x0C, 0x18, 0x30, 0x18, 0x0C, 0x06, 0x00], // '>'
    [0x1E, 0x33, 0x30, 0x18, 0x0C, 0x00, 0x0C, 0x00], // '?'
    [0x3E, 0x63, 0x7B, 0x7B, 0x7B, 0x03, 0x1E, 0x00], // '@'
    [0x0C, 0x1E, 0x33, 0x33, 0x3F, 0x33, 0x33, 0x00], // 'A'
    [0x3F, 0x66, 0x66, 0x3E, 0x66, 0x66, 0x3F, 0x00], // 'B'
    [0x3C, 0x66, 0x03, 0x03, 0x03, 0x66, 0x3C, 0x00], // 'C'
    [0x1F, 0x36, 0x66, 0x66, 0x66, 0x36, 0x1F, 0x00], // 'D'
    [0x7F, 0x46, 0x16, 0x1E, 0x16, 0x46, 0x7F, 0x00], // 'E'
    [0x7F, 0x46, 0x16, 0x1E, 0x16, 0x06, 0x0F, 0x00], // 'F'
    [0x3C, 0x66, 0x03, 0x03, 0x73, 0x66, 0x7C, 0x00], // 'G'
    [0x33, 0x33, 0x33, 0x3F, 0x33, 0x33, 0x33, 0x00], // 'H'
    [0x1E, 0x0C, 0x0C, 0x0C, 0x0C, 0x0C, 0x1E, 0x00], // 'I'
    [0x78, 0x30, 0x30, 0x30, 0x33, 0x33, 0x1E, 0x00], // 'J'
    [0x67, 0x66, 0x36, 0x1E, 0x36, 0x66, 0x67, 0x00], // 'K'
    [0x0F, 0x06, 0x06, 0x06, 0x46, 0x66, 0x7F, 0x00], // 'L'
    [0x63, 0x77, 0x7F, 0x7F, 0x6B, 0x63, 0x63, 0x00], // 'M'
    [0x63, 0x67, 0x6F, 0x7B, 0x73, 0x63, 0x63, 0x00], // 'N'
    [0x1C, 0x36, 0x63, 0x63, 0x63, 0x36, 0x1C, 0x00], // 'O'
    [0x3F, 0x66, 0x66, 0x3E, 0x06, 0x06, 0x0F, 0x00], // 'P'
    [0x1E, 0x33, 0x33, 0x33, 0x3B, 0x1E, 0x38, 0x00], // 'Q'
    [0x3F, 0x66, 0x66, 0x3E, 0x36, 0x66, 0x67, 0x00], // 'R'
    [0x1E, 0x33, 0x07, 0x0E, 0x38, 0x33, 0x1E, 0x00], // 'S'
    [0x3F, 0x2D, 0x0C, 0x0C, 0x0C, 0x0C, 0x1E, 0x00], // 'T'
    [0x33, 0x33, 0x33, 0x33, 0x33, 0x33, 0x3F, 0x00], // 'U'
    [0x33, 0x33, 0x33, 0x33, 0x33, 0x1E, 0x0C, 0x00], // 'V'
    [0x63, 0x63, 0x63, 0x6B, 0x7F, 0x77, 0x63, 0x00], // 'W'
    [0x63, 0x63, 0x36, 0x1C, 0x1C, 0x36, 0x63, 0x00], // 'X'
    [0x33, 0x33, 0x33, 0x1E, 0x0C, 0x0C, 0x1E, 0x00], // 'Y'
    [0x7F, 0x63, 0x31, 0x18, 0x4C, 0x66, 0x7F, 0x00], // 'Z'
    [0x1E, 0x06, 0x06, 0x06, 0x06, 0x06, 0x1E, 0x00], // '['
    [0x03, 0x06, 0x0C, 0x18, 0x30, 0x60, 0x40, 0x00], // '\\'
    [0x1E, 0x18, 0x18, 0x18, 0x18, 0x18, 0x1E, 0x00], // ']'
    [0x08, 0x1C, 0x36, 0x63, 0x00, 0x00, 0x00, 0x00], // '^'
    [0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0xFF], // '_'
    [0x0C, 0x0C, 0x18, 0x00, 0x00, 0x00, 0x00, 0x00], // '`'
    [0x00, 0x00, 0x1E, 0x30, 0x3E, 0x33, 0x6E, 0x00], // 'a'
    [0x07, 0x06, 0x06, 0x3E, 0x66, 0x66, 0x3B, 0x00], // 'b'
    [0x00, 0x00, 0x1E, 0x33, 0x03, 0x33, 0x1E, 0x00], // 'c'
    [0x38, 0x30, 0x30, 0x3E, 0x33, 0x33, 0x6E, 0x00], // 'd'
    [0x00, 0x00, 0x1E, 0x33, 0x3F, 0x03, 0x1E, 0x00], // 'e'
    [0x1C, 0x36, 0x06, 0x0F, 0x06, 0x06, 0x0F, 0x00], // 'f'
    [0x00, 0x00, 0x6E, 0x33, 0x33, 0x3E, 0x30, 0x1F], // 'g'
    [0x07, 0x06, 0x36, 0x6E, 0x66, 0x66, 0x67, 0x00], // 'h'
    [0x0C, 0x00, 0x0E, 0x0C, 0x0C, 0x0C, 0x1E, 0x00], // 'i'
    [0x30, 0x00, 0x30, 0x30, 0x30, 0x33, 0x33, 0x1E], // 'j'
    [0x07, 0x06, 0x66, 0x36, 0x1E, 0x36, 0x67, 0x00], // 'k'
    [0x0E, 0x0C, 0x0C, 0x0C, 0x0C, 0x0C, 0x1E, 0x00], // 'l'
    [0x00, 0x00, 0x33, 0x7F, 0x7F, 0x6B, 0x63, 0x00], // 'm'
    [0x00, 0x00, 0x1F, 0x33, 0x33, 0x33, 0x33, 0x00], // 'n'
    [0x00, 0x00, 0x1E, 0x33, 0x33, 0x33, 0x1E, 0x00], // 'o'
    [0x00, 0x00, 0x3B, 0x66, 0x66, 0x3E, 0x06, 0x0F], // 'p'
    [0x00, 0x00, 0x6E, 0x33, 0x33, 0x3E, 0x30, 0x78], // 'q'
    [0x00, 0x00, 0x3B, 0x6E, 0x66, 0x06, 0x0F, 0x00], // 'r'
    [0x00, 0x00, 0x3E, 0x03, 0x1E, 0x30, 0x1F, 0x00], // 's'
    [0x08, 0x0C, 0x3E, 0x0C, 0x0C, 0x2C, 0x18, 0x00], // 't'
    [0x00, 0x00, 0x33, 0x33, 0x33, 0x33, 0x6E, 0x00], // 'u'
    [0x00, 0x00, 0x33, 0x33, 0x33, 0x1E, 0x0C, 0x00], // 'v'
    [0x00, 0x00, 0x63, 0x6B, 0x7F, 0x7F, 0x36, 0x00], // 'w'
    [0x00, 0x00, 0x63, 0x36, 0x1C, 0x36, 0x63, 0x00], // 'x'
    [0x00, 0x00, 0x33, 0x33, 0x33, 0x3E, 0x30, 0x1F], // 'y'
    [0x00, 0x00, 0x3F, 0x19, 0x0C, 0x26, 0x3F, 0x00], // 'z'
    [0x38, 0x0C, 0x0C, 0x07, 0x0C, 0x0C, 0x38, 0x00], // '{'
    [0x18, 0x18, 0x18, 0x00, 0x18, 0x18, 0x18, 0x00], // '|'
    [0x07, 0x0C, 0x0C, 0x38, 0x0C, 0x0C, 0x07, 0x00], // '}'
    [0x6E, 0x3B, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00], // '~'
];

#[cfg(test)]
#[path = "../../tests/unit/assets/font.rs"]
mod tests;
