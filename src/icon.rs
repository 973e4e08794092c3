//! Single-icon rendering.

use crate::GeneratorConfig;
use crate::canvas::{Canvas, TextBounds};
use crate::font::IconFont;
use crate::text::Text;
use std::path::Path;

/// Layout origin that centers a text of `bounds` extent in a `size`x`size`
/// square.
///
/// Uses floor division, so odd remainders bias the text up and left, and a
/// text wider than the icon gets a negative offset. Only the extent counts;
/// the ink's own offset from the origin is not compensated.
pub fn centered_offset(size: i32, bounds: TextBounds) -> [i32; 2] {
    [
        (size - bounds.width()).div_euclid(2),
        (size - bounds.height()).div_euclid(2),
    ]
}

/// Renders one icon in memory.
pub fn render_icon(size: u32, config: &GeneratorConfig) -> anyhow::Result<Canvas> {
    let edge = i32::try_from(size)
        .map_err(|_| anyhow::anyhow!("icon size {} does not fit a pixel coordinate", size))?;
    let mut canvas = Canvas::new(size, config.background)?;
    let font = IconFont::resolve(config.font_candidates.as_slice(), size / 2);
    let text = Text::new(config.text.as_str()).with_color(config.foreground);

    let bounds = text.measure(&font);
    let position = centered_offset(edge, bounds);
    log::debug!(
        "{}px icon: text {}x{} at ({}, {})",
        size,
        bounds.width(),
        bounds.height(),
        position[0],
        position[1]
    );
    text.draw(&mut canvas, &font, position);
    Ok(canvas)
}

/// Renders one icon and writes it to `path` as PNG, overwriting any existing file.
pub fn create_icon(size: u32, path: &Path, config: &GeneratorConfig) -> anyhow::Result<()> {
    let canvas = render_icon(size, config)?;
    canvas.save_png(path)?;
    log::info!("wrote {} ({}x{})", path.display(), size, size);
    Ok(())
}
