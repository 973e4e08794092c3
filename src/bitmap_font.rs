//! Built-in 5x7 bitmap font, the last resort when no outline font loads.

/// Glyph cell width in pixels.
pub const GLYPH_WIDTH: u32 = 5;
/// Glyph cell height in pixels.
pub const GLYPH_HEIGHT: u32 = 7;
/// Horizontal advance between glyph origins.
pub const ADVANCE: u32 = GLYPH_WIDTH + 1;

type Rows = [u8; GLYPH_HEIGHT as usize];

// Bit 4 is the leftmost column.
const MISSING: Rows = [0x1F, 0x11, 0x11, 0x11, 0x11, 0x11, 0x1F];
const SPACE: Rows = [0; 7];

const LETTERS: [Rows; 26] = [
    [0x0E, 0x11, 0x11, 0x1F, 0x11, 0x11, 0x11], // A
    [0x1E, 0x11, 0x11, 0x1E, 0x11, 0x11, 0x1E], // B
    [0x0E, 0x11, 0x10, 0x10, 0x10, 0x11, 0x0E], // C
    [0x1E, 0x11, 0x11, 0x11, 0x11, 0x11, 0x1E], // D
    [0x1F, 0x10, 0x10, 0x1E, 0x10, 0x10, 0x1F], // E
    [0x1F, 0x10, 0x10, 0x1E, 0x10, 0x10, 0x10], // F
    [0x0E, 0x11, 0x10, 0x17, 0x11, 0x11, 0x0F], // G
    [0x11, 0x11, 0x11, 0x1F, 0x11, 0x11, 0x11], // H
    [0x0E, 0x04, 0x04, 0x04, 0x04, 0x04, 0x0E], // I
    [0x07, 0x02, 0x02, 0x02, 0x02, 0x12, 0x0C], // J
    [0x11, 0x12, 0x14, 0x18, 0x14, 0x12, 0x11], // K
    [0x10, 0x10, 0x10, 0x10, 0x10, 0x10, 0x1F], // L
    [0x11, 0x1B, 0x15, 0x15, 0x11, 0x11, 0x11], // M
    [0x11, 0x11, 0x19, 0x15, 0x13, 0x11, 0x11], // N
    [0x0E, 0x11, 0x11, 0x11, 0x11, 0x11, 0x0E], // O
    [0x1E, 0x11, 0x11, 0x1E, 0x10, 0x10, 0x10], // P
    [0x0E, 0x11, 0x11, 0x11, 0x15, 0x12, 0x0D], // Q
    [0x1E, 0x11, 0x11, 0x1E, 0x14, 0x12, 0x11], // R
    [0x0F, 0x10, 0x10, 0x0E, 0x01, 0x01, 0x1E], // S
    [0x1F, 0x04, 0x04, 0x04, 0x04, 0x04, 0x04], // T
    [0x11, 0x11, 0x11, 0x11, 0x11, 0x11, 0x0E], // U
    [0x11, 0x11, 0x11, 0x11, 0x11, 0x0A, 0x04], // V
    [0x11, 0x11, 0x11, 0x15, 0x15, 0x15, 0x0A], // W
    [0x11, 0x11, 0x0A, 0x04, 0x0A, 0x11, 0x11], // X
    [0x11, 0x11, 0x11, 0x0A, 0x04, 0x04, 0x04], // Y
    [0x1F, 0x01, 0x02, 0x04, 0x08, 0x10, 0x1F], // Z
];

const DIGITS: [Rows; 10] = [
    [0x0E, 0x11, 0x13, 0x15, 0x19, 0x11, 0x0E], // 0
    [0x04, 0x0C, 0x04, 0x04, 0x04, 0x04, 0x0E], // 1
    [0x0E, 0x11, 0x01, 0x02, 0x04, 0x08, 0x1F], // 2
    [0x1F, 0x02, 0x04, 0x02, 0x01, 0x11, 0x0E], // 3
    [0x02, 0x06, 0x0A, 0x12, 0x1F, 0x02, 0x02], // 4
    [0x1F, 0x10, 0x1E, 0x01, 0x01, 0x11, 0x0E], // 5
    [0x06, 0x08, 0x10, 0x1E, 0x11, 0x11, 0x0E], // 6
    [0x1F, 0x01, 0x02, 0x04, 0x08, 0x08, 0x08], // 7
    [0x0E, 0x11, 0x11, 0x0E, 0x11, 0x11, 0x0E], // 8
    [0x0E, 0x11, 0x11, 0x0F, 0x01, 0x02, 0x0C], // 9
];

/// Fixed-size uppercase bitmap font. Lowercase input is drawn as uppercase,
/// anything without a glyph as a hollow box.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BitmapFont;

impl BitmapFont {
    fn rows(ch: char) -> &'static Rows {
        let ch = ch.to_ascii_uppercase();
        match ch {
            'A'..='Z' => &LETTERS[(ch as u8 - b'A') as usize],
            '0'..='9' => &DIGITS[(ch as u8 - b'0') as usize],
            ' ' => &SPACE,
            _ => &MISSING,
        }
    }

    /// Calls `f(x, y)` for every set pixel of `text` laid out from origin
    /// (0, 0), one line only.
    pub fn for_each_pixel(&self, text: &str, mut f: impl FnMut(i32, i32)) {
        for (i, ch) in text.chars().enumerate() {
            let origin_x = (i as u32 * ADVANCE) as i32;
            for (row, bits) in Self::rows(ch).iter().enumerate() {
                for col in 0..GLYPH_WIDTH {
                    if bits & (0x10 >> col) != 0 {
                        f(origin_x + col as i32, row as i32);
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ink_extent(text: &str) -> Option<(i32, i32, i32, i32)> {
        let mut extent: Option<(i32, i32, i32, i32)> = None;
        BitmapFont.for_each_pixel(text, |x, y| {
            extent = Some(match extent {
                None => (x, y, x, y),
                Some((l, t, r, b)) => (l.min(x), t.min(y), r.max(x), b.max(y)),
            });
        });
        extent
    }

    #[test]
    fn ps_spans_two_cells() {
        // P starts at column 0, S ends at column 4 of the second cell.
        assert_eq!(ink_extent("PS"), Some((0, 0, 10, 6)));
    }

    #[test]
    fn lowercase_matches_uppercase() {
        let mut upper = Vec::new();
        let mut lower = Vec::new();
        BitmapFont.for_each_pixel("PS", |x, y| upper.push((x, y)));
        BitmapFont.for_each_pixel("ps", |x, y| lower.push((x, y)));
        assert_eq!(upper, lower);
    }

    #[test]
    fn space_has_no_ink() {
        assert_eq!(ink_extent("   "), None);
    }

    #[test]
    fn unknown_glyph_draws_box() {
        let mut count = 0;
        BitmapFont.for_each_pixel("?", |_, _| count += 1);
        // Perimeter of a 5x7 box.
        assert_eq!(count, 5 * 2 + 5 * 2);
    }
}
