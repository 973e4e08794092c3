use image::{ImageFormat, Rgb, RgbImage};
use std::path::Path;

/// Integer extent of rendered text, relative to the point it was laid out at.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct TextBounds {
    /// X coordinate of the left-most inked column.
    pub left: i32,
    /// Y coordinate of the top-most inked row.
    pub top: i32,
    /// One past the right-most inked column.
    pub right: i32,
    /// One past the bottom-most inked row.
    pub bottom: i32,
}

impl TextBounds {
    pub fn new(left: i32, top: i32, right: i32, bottom: i32) -> Self {
        Self {
            left,
            top,
            right,
            bottom,
        }
    }

    pub fn width(&self) -> i32 {
        self.right - self.left
    }

    pub fn height(&self) -> i32 {
        self.bottom - self.top
    }

    /// Grows the bounds to cover `other`.
    pub(crate) fn union(self, other: TextBounds) -> TextBounds {
        TextBounds {
            left: self.left.min(other.left),
            top: self.top.min(other.top),
            right: self.right.max(other.right),
            bottom: self.bottom.max(other.bottom),
        }
    }
}

/// Square RGB pixel buffer for one icon.
#[derive(Debug, Clone)]
pub struct Canvas {
    pixels: RgbImage,
}

impl Canvas {
    /// Creates a `size`x`size` canvas filled with `background`.
    pub fn new(size: u32, background: [u8; 3]) -> anyhow::Result<Self> {
        if size == 0 {
            return Err(anyhow::anyhow!("icon size must be positive"));
        }
        Ok(Self {
            pixels: RgbImage::from_pixel(size, size, Rgb(background)),
        })
    }

    pub fn size(&self) -> u32 {
        self.pixels.width()
    }

    /// Blends `color` over the pixel at (x, y) with `coverage` in 0..=1.
    /// Coordinates outside the canvas are ignored.
    pub fn blend(&mut self, x: i32, y: i32, color: [u8; 3], coverage: f32) {
        if x < 0 || y < 0 {
            return;
        }
        let (x, y) = (x as u32, y as u32);
        if x >= self.pixels.width() || y >= self.pixels.height() {
            return;
        }
        let v = coverage.clamp(0.0, 1.0);
        if v <= 0.0 {
            return;
        }
        let Rgb(dst) = self.pixels.get_pixel_mut(x, y);
        for (d, s) in dst.iter_mut().zip(color) {
            let mixed = *d as f32 * (1.0 - v) + s as f32 * v;
            *d = mixed.round().clamp(0.0, 255.0) as u8;
        }
    }

    pub fn pixel(&self, x: u32, y: u32) -> [u8; 3] {
        self.pixels.get_pixel(x, y).0
    }

    pub fn as_raw(&self) -> &[u8] {
        self.pixels.as_raw()
    }

    /// Writes the canvas as PNG, replacing any existing file.
    pub fn save_png(&self, path: &Path) -> anyhow::Result<()> {
        self.pixels
            .save_with_format(path, ImageFormat::Png)
            .map_err(|e| anyhow::anyhow!("Failed to save {}: {}", path.display(), e))
    }
}
