//! Fixed-cell bitmap font rendering.
//!
//! Glyphs live on horizontal strip surfaces, one strip per [`FontColor`],
//! with the glyph for character `c` at column `(c - 33) * 8`. Each cell is
//! 8x14 pixels; the pen advances 9 per character and 16 per line.
//!
//! Rendering writes straight into the destination surface and records no
//! damage. Callers composite the result (or draw over a region they track
//! themselves): writing glyph-by-glyph into the visible screen every frame
//! would be far too slow, which is what the text cache is for.
//!
//! Word wrap is cell-based, not pixel-based. A space past `width - 70`
//! breaks the line; a pen past `width - 31` mid-word splits it with a
//! trailing hyphen when the character just drawn and the three after it are
//! all letters.

use starlance_types::{
    FontColor, GLYPH_ADVANCE, GLYPH_BASE, GLYPH_HEIGHT, GLYPH_WIDTH, HYPHEN_WINDOW, LINE_ADVANCE,
    WRAP_HYPHEN_MARGIN, WRAP_SPACE_MARGIN,
};

use crate::surface::Surface;

/// Pass for `x` to center a line horizontally in the destination.
pub const CENTERED: i32 = -1;

/// Printable ASCII coverage: `!` (33) through `~` (126).
pub const GLYPH_COUNT: usize = 94;

/// Built-in face, 7 rows per glyph with the leftmost pixel in the high bit.
/// Rows are doubled vertically to fill the 14-pixel cell.
#[rustfmt::skip]
const GLYPH_ROWS: [[u8; 7]; GLYPH_COUNT] = [
    [0x20, 0x20, 0x20, 0x20, 0x20, 0x00, 0x20], // !
    [0x50, 0x50, 0x50, 0x00, 0x00, 0x00, 0x00], // "
    [0x50, 0x50, 0xf8, 0x50, 0xf8, 0x50, 0x50], // #
    [0x20, 0x78, 0xa0, 0x70, 0x28, 0xf0, 0x20], // $
    [0xc8, 0xc8, 0x10, 0x20, 0x40, 0x98, 0x98], // %
    [0x40, 0xa0, 0xa0, 0x40, 0xa8, 0x90, 0x68], // &
    [0x20, 0x20, 0x40, 0x00, 0x00, 0x00, 0x00], // '
    [0x10, 0x20, 0x40, 0x40, 0x40, 0x20, 0x10], // (
    [0x40, 0x20, 0x10, 0x10, 0x10, 0x20, 0x40], // )
    [0x00, 0x20, 0xa8, 0x70, 0xa8, 0x20, 0x00], // *
    [0x00, 0x20, 0x20, 0xf8, 0x20, 0x20, 0x00], // +
    [0x00, 0x00, 0x00, 0x00, 0x30, 0x20, 0x40], // ,
    [0x00, 0x00, 0x00, 0xf8, 0x00, 0x00, 0x00], // -
    [0x00, 0x00, 0x00, 0x00, 0x00, 0x60, 0x60], // .
    [0x08, 0x08, 0x10, 0x20, 0x40, 0x80, 0x80], // /
    [0x70, 0x88, 0x98, 0xa8, 0xc8, 0x88, 0x70], // 0
    [0x20, 0x60, 0x20, 0x20, 0x20, 0x20, 0x70], // 1
    [0x70, 0x88, 0x08, 0x10, 0x20, 0x40, 0xf8], // 2
    [0xf8, 0x10, 0x20, 0x10, 0x08, 0x88, 0x70], // 3
    [0x10, 0x30, 0x50, 0x90, 0xf8, 0x10, 0x10], // 4
    [0xf8, 0x80, 0xf0, 0x08, 0x08, 0x88, 0x70], // 5
    [0x30, 0x40, 0x80, 0xf0, 0x88, 0x88, 0x70], // 6
    [0xf8, 0x08, 0x10, 0x20, 0x40, 0x40, 0x40], // 7
    [0x70, 0x88, 0x88, 0x70, 0x88, 0x88, 0x70], // 8
    [0x70, 0x88, 0x88, 0x78, 0x08, 0x10, 0x60], // 9
    [0x00, 0x60, 0x60, 0x00, 0x60, 0x60, 0x00], // :
    [0x00, 0x60, 0x60, 0x00, 0x60, 0x20, 0x40], // ;
    [0x08, 0x10, 0x20, 0x40, 0x20, 0x10, 0x08], // <
    [0x00, 0x00, 0xf8, 0x00, 0xf8, 0x00, 0x00], // =
    [0x80, 0x40, 0x20, 0x10, 0x20, 0x40, 0x80], // >
    [0x70, 0x88, 0x08, 0x10, 0x20, 0x00, 0x20], // ?
    [0x70, 0x88, 0x08, 0x68, 0xa8, 0xa8, 0x70], // @
    [0x70, 0x88, 0x88, 0xf8, 0x88, 0x88, 0x88], // A
    [0xf0, 0x88, 0x88, 0xf0, 0x88, 0x88, 0xf0], // B
    [0x70, 0x88, 0x80, 0x80, 0x80, 0x88, 0x70], // C
    [0xe0, 0x90, 0x88, 0x88, 0x88, 0x90, 0xe0], // D
    [0xf8, 0x80, 0x80, 0xf0, 0x80, 0x80, 0xf8], // E
    [0xf8, 0x80, 0x80, 0xf0, 0x80, 0x80, 0x80], // F
    [0x70, 0x88, 0x80, 0xb8, 0x88, 0x88, 0x78], // G
    [0x88, 0x88, 0x88, 0xf8, 0x88, 0x88, 0x88], // H
    [0x70, 0x20, 0x20, 0x20, 0x20, 0x20, 0x70], // I
    [0x38, 0x10, 0x10, 0x10, 0x10, 0x90, 0x60], // J
    [0x88, 0x90, 0xa0, 0xc0, 0xa0, 0x90, 0x88], // K
    [0x80, 0x80, 0x80, 0x80, 0x80, 0x80, 0xf8], // L
    [0x88, 0xd8, 0xa8, 0xa8, 0x88, 0x88, 0x88], // M
    [0x88, 0x88, 0xc8, 0xa8, 0x98, 0x88, 0x88], // N
    [0x70, 0x88, 0x88, 0x88, 0x88, 0x88, 0x70], // O
    [0xf0, 0x88, 0x88, 0xf0, 0x80, 0x80, 0x80], // P
    [0x70, 0x88, 0x88, 0x88, 0xa8, 0x90, 0x68], // Q
    [0xf0, 0x88, 0x88, 0xf0, 0xa0, 0x90, 0x88], // R
    [0x78, 0x80, 0x80, 0x70, 0x08, 0x08, 0xf0], // S
    [0xf8, 0x20, 0x20, 0x20, 0x20, 0x20, 0x20], // T
    [0x88, 0x88, 0x88, 0x88, 0x88, 0x88, 0x70], // U
    [0x88, 0x88, 0x88, 0x88, 0x88, 0x50, 0x20], // V
    [0x88, 0x88, 0x88, 0xa8, 0xa8, 0xa8, 0x50], // W
    [0x88, 0x88, 0x50, 0x20, 0x50, 0x88, 0x88], // X
    [0x88, 0x88, 0x88, 0x50, 0x20, 0x20, 0x20], // Y
    [0xf8, 0x08, 0x10, 0x20, 0x40, 0x80, 0xf8], // Z
    [0x70, 0x40, 0x40, 0x40, 0x40, 0x40, 0x70], // [
    [0x80, 0x80, 0x40, 0x20, 0x10, 0x08, 0x08], // backslash
    [0x70, 0x10, 0x10, 0x10, 0x10, 0x10, 0x70], // ]
    [0x20, 0x50, 0x88, 0x00, 0x00, 0x00, 0x00], // ^
    [0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0xf8], // _
    [0x40, 0x20, 0x10, 0x00, 0x00, 0x00, 0x00], // `
    [0x00, 0x00, 0x70, 0x08, 0x78, 0x88, 0x78], // a
    [0x80, 0x80, 0xb0, 0xc8, 0x88, 0x88, 0xf0], // b
    [0x00, 0x00, 0x70, 0x80, 0x80, 0x88, 0x70], // c
    [0x08, 0x08, 0x68, 0x98, 0x88, 0x88, 0x78], // d
    [0x00, 0x00, 0x70, 0x88, 0xf8, 0x80, 0x70], // e
    [0x30, 0x48, 0x40, 0xe0, 0x40, 0x40, 0x40], // f
    [0x00, 0x78, 0x88, 0x88, 0x78, 0x08, 0x70], // g
    [0x80, 0x80, 0xb0, 0xc8, 0x88, 0x88, 0x88], // h
    [0x20, 0x00, 0x60, 0x20, 0x20, 0x20, 0x70], // i
    [0x10, 0x00, 0x30, 0x10, 0x10, 0x90, 0x60], // j
    [0x80, 0x80, 0x90, 0xa0, 0xc0, 0xa0, 0x90], // k
    [0x60, 0x20, 0x20, 0x20, 0x20, 0x20, 0x70], // l
    [0x00, 0x00, 0xd0, 0xa8, 0xa8, 0x88, 0x88], // m
    [0x00, 0x00, 0xb0, 0xc8, 0x88, 0x88, 0x88], // n
    [0x00, 0x00, 0x70, 0x88, 0x88, 0x88, 0x70], // o
    [0x00, 0x00, 0xf0, 0x88, 0xf0, 0x80, 0x80], // p
    [0x00, 0x00, 0x68, 0x98, 0x78, 0x08, 0x08], // q
    [0x00, 0x00, 0xb0, 0xc8, 0x80, 0x80, 0x80], // r
    [0x00, 0x00, 0x70, 0x80, 0x70, 0x08, 0xf0], // s
    [0x40, 0x40, 0xe0, 0x40, 0x40, 0x48, 0x30], // t
    [0x00, 0x00, 0x88, 0x88, 0x88, 0x98, 0x68], // u
    [0x00, 0x00, 0x88, 0x88, 0x88, 0x50, 0x20], // v
    [0x00, 0x00, 0x88, 0x88, 0xa8, 0xa8, 0x50], // w
    [0x00, 0x00, 0x88, 0x50, 0x20, 0x50, 0x88], // x
    [0x00, 0x00, 0x88, 0x88, 0x78, 0x08, 0x70], // y
    [0x00, 0x00, 0xf8, 0x10, 0x20, 0x40, 0xf8], // z
    [0x10, 0x20, 0x20, 0x40, 0x20, 0x20, 0x10], // {
    [0x20, 0x20, 0x20, 0x20, 0x20, 0x20, 0x20], // |
    [0x40, 0x20, 0x20, 0x10, 0x20, 0x20, 0x40], // }
    [0x00, 0x00, 0x40, 0xa8, 0x10, 0x00, 0x00], // ~
];

/// One glyph strip per color, indexed by [`FontColor::index`].
pub struct Font {
    strips: [Surface; FontColor::COUNT],
}

impl Font {
    /// Build the self-contained face from [`GLYPH_ROWS`].
    pub fn builtin() -> Self {
        let strips = [
            Self::build_strip(FontColor::White),
            Self::build_strip(FontColor::Red),
            Self::build_strip(FontColor::Yellow),
            Self::build_strip(FontColor::Green),
            Self::build_strip(FontColor::Cyan),
            Self::build_strip(FontColor::Outline),
        ];
        Self { strips }
    }

    /// Use externally loaded strips (one per color, same layout as the
    /// built-in face).
    pub fn from_strips(strips: [Surface; FontColor::COUNT]) -> Self {
        Self { strips }
    }

    fn build_strip(color: FontColor) -> Surface {
        let mut strip =
            Surface::new(GLYPH_COUNT as i32 * GLYPH_WIDTH, GLYPH_HEIGHT).set_transparent();
        {
            let mut px = strip.lock();
            for (glyph, rows) in GLYPH_ROWS.iter().enumerate() {
                let base_x = glyph as i32 * GLYPH_WIDTH;
                for (row, bits) in rows.iter().enumerate() {
                    for col in 0..GLYPH_WIDTH {
                        if bits >> (7 - col) & 1 != 0 {
                            // Each source row covers two strip rows.
                            px.put(base_x + col, row as i32 * 2, color.pixel());
                            px.put(base_x + col, row as i32 * 2 + 1, color.pixel());
                        }
                    }
                }
            }
        }
        strip
    }

    /// Pixel width of `text` at the standard advance.
    pub fn text_width(text: &str) -> i32 {
        text.len() as i32 * GLYPH_ADVANCE
    }

    /// Single rendering pass. Returns the y of the last line written.
    fn render(
        &self,
        text: &str,
        x: i32,
        y: i32,
        color: FontColor,
        wrap: bool,
        dest: &mut Surface,
    ) -> i32 {
        let strip = &self.strips[color.index()];
        let bytes = text.as_bytes();
        let mut pen_x = x;
        let mut pen_y = y;

        for (i, &ch) in bytes.iter().enumerate() {
            if ch != b' ' {
                self.put_glyph(strip, ch, pen_x, pen_y, dest);
            }

            pen_x += GLYPH_ADVANCE;

            if !wrap {
                continue;
            }

            if pen_x > dest.width() - WRAP_SPACE_MARGIN && ch == b' ' {
                pen_y += LINE_ADVANCE;
                pen_x = x;
            } else if pen_x > dest.width() - WRAP_HYPHEN_MARGIN {
                // Split mid-word only when the character just drawn and the
                // next three are all letters; the hyphen lands after the
                // advance, in this pass's color.
                let window = &bytes[i..bytes.len().min(i + HYPHEN_WINDOW)];
                let splittable = window.len() == HYPHEN_WINDOW
                    && window.iter().all(|b| b.is_ascii_alphabetic());
                if splittable {
                    self.put_glyph(strip, b'-', pen_x, pen_y, dest);
                    pen_y += LINE_ADVANCE;
                    pen_x = x;
                }
            }
        }

        pen_y
    }

    fn put_glyph(&self, strip: &Surface, ch: u8, x: i32, y: i32, dest: &mut Surface) {
        let cell = starlance_types::Rect::new(
            (ch as i32 - GLYPH_BASE as i32) * GLYPH_WIDTH,
            0,
            GLYPH_WIDTH,
            GLYPH_HEIGHT,
        );
        dest.composite_region_from(strip, cell, x, y);
    }

    /// Draw one unwrapped line with the dark outline. `x == `[`CENTERED`]
    /// centers it in `dest`. Returns the y the text was drawn at.
    pub fn draw(&self, text: &str, x: i32, y: i32, color: FontColor, dest: &mut Surface) -> i32 {
        let x = if x == CENTERED {
            (dest.width() - Self::text_width(text)) / 2
        } else {
            x
        };
        self.draw_string(text, x, y, color, false, dest)
    }

    /// Draw with the dark outline, wrapping if `wrap` is set. Returns the y
    /// of the last line.
    ///
    /// The outline is six offset passes under the foreground pass; all seven
    /// wrap identically, so the offsets hold across line breaks too.
    pub fn draw_string(
        &self,
        text: &str,
        x: i32,
        y: i32,
        color: FontColor,
        wrap: bool,
        dest: &mut Surface,
    ) -> i32 {
        self.render(text, x, y - 1, FontColor::Outline, wrap, dest);
        self.render(text, x, y + 1, FontColor::Outline, wrap, dest);
        self.render(text, x, y + 2, FontColor::Outline, wrap, dest);
        self.render(text, x - 1, y, FontColor::Outline, wrap, dest);
        self.render(text, x - 2, y, FontColor::Outline, wrap, dest);
        self.render(text, x + 1, y, FontColor::Outline, wrap, dest);
        self.render(text, x, y, color, wrap, dest)
    }
}

impl std::fmt::Debug for Font {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Font").field("glyphs", &GLYPH_COUNT).finish()
    }
}
