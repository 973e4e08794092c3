//! Font resolution for icon text.
//!
//! Candidates are tried in order; the first one that can be read and parsed
//! wins. When none do, the built-in bitmap font is used.

use crate::bitmap_font::BitmapFont;
use ab_glyph::{Font as _, FontArc, PxScale};
use std::path::Path;

pub fn load_font_from_file(path: &Path) -> anyhow::Result<Vec<u8>> {
    std::fs::read(path)
        .map_err(|e| anyhow::anyhow!("Failed to load font from {}: {}", path.display(), e))
}

/// A font ready to measure and draw with.
#[derive(Clone)]
pub enum IconFont {
    /// A TrueType/OpenType font at a fixed pixel scale.
    Outline { font: FontArc, scale: PxScale },
    /// The built-in bitmap font. Its size does not follow the icon size.
    Builtin(BitmapFont),
}

impl IconFont {
    /// Walks `candidates` in order and returns the first usable font at
    /// `px_per_em`, falling back to the built-in font. Never fails.
    pub fn resolve<P: AsRef<Path>>(candidates: &[P], px_per_em: u32) -> Self {
        candidates
            .iter()
            .find_map(|path| {
                let path = path.as_ref();
                match Self::load_outline(path, px_per_em) {
                    Ok(font) => {
                        log::debug!("using font {} at {}px", path.display(), px_per_em);
                        Some(font)
                    }
                    Err(e) => {
                        log::debug!("font candidate skipped: {}", e);
                        None
                    }
                }
            })
            .unwrap_or_else(|| {
                log::debug!("no font candidate usable, using built-in bitmap font");
                IconFont::Builtin(BitmapFont)
            })
    }

    fn load_outline(path: &Path, px_per_em: u32) -> anyhow::Result<Self> {
        let data = load_font_from_file(path)?;
        let font = FontArc::try_from_vec(data)
            .map_err(|e| anyhow::anyhow!("Failed to parse font {}: {}", path.display(), e))?;
        let scale = em_scale(&font, px_per_em as f32);
        Ok(IconFont::Outline { font, scale })
    }

    pub fn is_builtin(&self) -> bool {
        matches!(self, IconFont::Builtin(_))
    }
}

/// `PxScale` is the ascent-to-descent height; font sizes are pixels per em.
fn em_scale(font: &FontArc, px_per_em: f32) -> PxScale {
    let px_per_em = px_per_em.max(1.0);
    match font.units_per_em() {
        Some(units_per_em) if units_per_em > 0.0 => {
            PxScale::from(px_per_em * font.height_unscaled() / units_per_em)
        }
        _ => PxScale::from(px_per_em),
    }
}
