use crate::canvas::{Canvas, TextBounds};
use crate::font::IconFont;
use ab_glyph::{Font as _, FontArc, Glyph, OutlinedGlyph, PxScale, ScaleFont as _};

/// A single line of text to be drawn onto an icon.
#[derive(Debug, Clone, PartialEq)]
pub struct Text {
    content: String,
    color: [u8; 3],
}

impl Text {
    pub fn new(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            color: [255, 255, 255],
        }
    }

    pub fn with_color(mut self, color: [u8; 3]) -> Self {
        self.color = color;
        self
    }

    /// Ink bounds of the text laid out at origin (0, 0), where the origin is
    /// the top of the font's ascent. Empty or blank text measures as zero.
    pub fn measure(&self, font: &IconFont) -> TextBounds {
        let mut bounds: Option<TextBounds> = None;
        let mut extend = |b: TextBounds| {
            bounds = Some(match bounds {
                Some(acc) => acc.union(b),
                None => b,
            });
        };

        match font {
            IconFont::Outline { font, scale } => {
                for glyph in self.outline_glyphs(font, *scale) {
                    let px = glyph.px_bounds();
                    extend(TextBounds::new(
                        px.min.x.floor() as i32,
                        px.min.y.floor() as i32,
                        px.max.x.ceil() as i32,
                        px.max.y.ceil() as i32,
                    ));
                }
            }
            IconFont::Builtin(bitmap) => {
                bitmap.for_each_pixel(&self.content, |x, y| {
                    extend(TextBounds::new(x, y, x + 1, y + 1));
                });
            }
        }

        bounds.unwrap_or_default()
    }

    /// Draws the text with its layout origin (left edge, top of the ascent)
    /// at `position`. The ink lands at `position` plus the measured
    /// `left`/`top`.
    pub fn draw(&self, canvas: &mut Canvas, font: &IconFont, position: [i32; 2]) {
        let [dx, dy] = position;

        match font {
            IconFont::Outline { font, scale } => {
                for glyph in self.outline_glyphs(font, *scale) {
                    let px = glyph.px_bounds();
                    let gx = dx + px.min.x.floor() as i32;
                    let gy = dy + px.min.y.floor() as i32;
                    glyph.draw(|x, y, v| {
                        canvas.blend(gx + x as i32, gy + y as i32, self.color, v);
                    });
                }
            }
            IconFont::Builtin(bitmap) => {
                bitmap.for_each_pixel(&self.content, |x, y| {
                    canvas.blend(dx + x, dy + y, self.color, 1.0);
                });
            }
        }
    }

    /// Lays the glyphs out on one line with the baseline at the ascent.
    fn outline_glyphs(&self, font: &FontArc, scale: PxScale) -> Vec<OutlinedGlyph> {
        let scaled = font.as_scaled(scale);
        let baseline = scaled.ascent();
        let mut caret = 0.0f32;
        let mut prev: Option<ab_glyph::GlyphId> = None;
        let mut glyphs = Vec::new();

        for ch in self.content.chars() {
            let id = scaled.glyph_id(ch);
            if let Some(p) = prev {
                caret += scaled.kern(p, id);
            }
            prev = Some(id);

            let glyph = Glyph {
                id,
                scale,
                position: ab_glyph::point(caret, baseline),
            };
            caret += scaled.h_advance(id);

            // Whitespace has no outline.
            if let Some(outlined) = font.outline_glyph(glyph) {
                glyphs.push(outlined);
            }
        }

        glyphs
    }
}
