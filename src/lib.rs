//! ps-icongen - placeholder icon generator for the PS browser extension.
//!
//! Renders a blue square with centered white "PS" text at 16, 48 and 128
//! pixels and writes each one as PNG.
//!
//! # Example
//! ```no_run
//! use ps_icongen::{Backend, GeneratorConfig, Outcome};
//!
//! let mut out = std::io::stdout();
//! let outcome = ps_icongen::run(&mut out, &GeneratorConfig::default(), Backend::detect())?;
//! if let Outcome::Generated(paths) = outcome {
//!     assert_eq!(paths.len(), 3);
//! }
//! # Ok::<(), anyhow::Error>(())
//! ```
//!
//! Rendering needs the `render` feature (on by default). Without it,
//! [`Backend::detect`] finds nothing and [`run`] prints guidance instead.

#[cfg(feature = "render")]
mod bitmap_font;
#[cfg(feature = "render")]
mod canvas;
#[cfg(feature = "render")]
mod font;
#[cfg(feature = "render")]
mod icon;
#[cfg(feature = "render")]
mod text;

use std::io::Write;
use std::path::PathBuf;

#[cfg(feature = "render")]
pub use bitmap_font::BitmapFont;
#[cfg(feature = "render")]
pub use canvas::{Canvas, TextBounds};
#[cfg(feature = "render")]
pub use font::IconFont;
#[cfg(feature = "render")]
pub use icon::{centered_offset, create_icon, render_icon};
#[cfg(feature = "render")]
pub use text::Text;

/// `#2196F3`
pub const DEFAULT_BACKGROUND: [u8; 3] = [0x21, 0x96, 0xF3];
pub const DEFAULT_FOREGROUND: [u8; 3] = [0xFF, 0xFF, 0xFF];
pub const DEFAULT_TEXT: &str = "PS";
pub const DEFAULT_SIZES: [u32; 3] = [16, 48, 128];
pub const DEFAULT_FONT_CANDIDATES: [&str; 2] = [
    "/usr/share/fonts/truetype/dejavu/DejaVuSans-Bold.ttf",
    "/usr/share/fonts/truetype/liberation/LiberationSans-Bold.ttf",
];

/// One icon to produce.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IconTarget {
    pub size: u32,
    pub file_name: String,
}

impl IconTarget {
    /// `icon<size>.png`
    pub fn for_size(size: u32) -> Self {
        Self {
            size,
            file_name: format!("icon{}.png", size),
        }
    }
}

/// Everything that shapes the generated icons.
///
/// The default reproduces the extension's icon set in the current directory.
#[derive(Debug, Clone)]
pub struct GeneratorConfig {
    pub text: String,
    pub background: [u8; 3],
    pub foreground: [u8; 3],
    pub sizes: Vec<u32>,
    /// Outline fonts to try in order before the built-in bitmap font.
    pub font_candidates: Vec<PathBuf>,
    pub output_dir: PathBuf,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            text: DEFAULT_TEXT.to_string(),
            background: DEFAULT_BACKGROUND,
            foreground: DEFAULT_FOREGROUND,
            sizes: DEFAULT_SIZES.to_vec(),
            font_candidates: DEFAULT_FONT_CANDIDATES.into_iter().map(PathBuf::from).collect(),
            output_dir: PathBuf::from("."),
        }
    }
}

impl GeneratorConfig {
    pub fn with_output_dir(mut self, output_dir: impl Into<PathBuf>) -> Self {
        self.output_dir = output_dir.into();
        self
    }

    pub fn with_font_candidates(mut self, font_candidates: Vec<PathBuf>) -> Self {
        self.font_candidates = font_candidates;
        self
    }

    pub fn with_sizes(mut self, sizes: Vec<u32>) -> Self {
        self.sizes = sizes;
        self
    }

    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = text.into();
        self
    }

    /// Icons in generation order.
    pub fn icons(&self) -> Vec<IconTarget> {
        self.sizes.iter().copied().map(IconTarget::for_size).collect()
    }
}

/// Proof that the rendering backend was compiled in.
#[cfg(feature = "render")]
#[derive(Debug, Clone, Copy)]
pub struct Backend;

/// Uninhabited: no rendering backend in this build.
#[cfg(not(feature = "render"))]
#[derive(Debug, Clone, Copy)]
pub enum Backend {}

impl Backend {
    pub fn detect() -> Option<Backend> {
        #[cfg(feature = "render")]
        {
            Some(Backend)
        }
        #[cfg(not(feature = "render"))]
        {
            None
        }
    }

    fn generate<W: Write>(
        self,
        out: &mut W,
        config: &GeneratorConfig,
    ) -> anyhow::Result<Vec<PathBuf>> {
        #[cfg(feature = "render")]
        {
            let mut written = Vec::new();
            for target in config.icons() {
                let path = config.output_dir.join(&target.file_name);
                create_icon(target.size, &path, config)?;
                writeln!(out, "Created {}", target.file_name)?;
                written.push(path);
            }
            Ok(written)
        }
        #[cfg(not(feature = "render"))]
        {
            let _ = (out, config);
            match self {}
        }
    }
}

/// What a [`run`] did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// Paths of the written icons, in generation order.
    Generated(Vec<PathBuf>),
    /// No backend; guidance was printed and nothing was written.
    BackendMissing,
}

/// Generates every configured icon, or prints guidance when `backend` is `None`.
///
/// Progress and result messages go to `out`.
pub fn run<W: Write>(
    out: &mut W,
    config: &GeneratorConfig,
    backend: Option<Backend>,
) -> anyhow::Result<Outcome> {
    let Some(backend) = backend else {
        log::warn!("rendering backend not available, no icons generated");
        write_missing_backend_guidance(out)?;
        return Ok(Outcome::BackendMissing);
    };

    let written = backend.generate(out, config)?;

    writeln!(out)?;
    writeln!(out, "All icons created successfully!")?;
    writeln!(out, "The extension is now ready to use.")?;
    Ok(Outcome::Generated(written))
}

pub fn write_missing_backend_guidance<W: Write>(out: &mut W) -> std::io::Result<()> {
    writeln!(out, "The image rendering backend is not available.")?;
    writeln!(
        out,
        "It is on by default; rebuild without --no-default-features: cargo install ps-icongen"
    )?;
    writeln!(out)?;
    writeln!(out, "Alternatively, you can:")?;
    writeln!(out, "1. Open generate_icons.html in a browser to download icons")?;
    writeln!(out, "2. Create icons manually using any image editor")?;
    writeln!(out, "3. Use online icon generators")?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn output_of(f: impl FnOnce(&mut Vec<u8>)) -> String {
        let mut buf = Vec::new();
        f(&mut buf);
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn default_icon_set() {
        let names: Vec<_> = GeneratorConfig::default()
            .icons()
            .into_iter()
            .map(|target| target.file_name)
            .collect();
        assert_eq!(names, ["icon16.png", "icon48.png", "icon128.png"]);
    }

    #[test]
    fn missing_backend_prints_guidance_and_writes_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let config = GeneratorConfig::default().with_output_dir(dir.path());

        let mut outcome = None;
        let stdout = output_of(|buf| outcome = Some(run(buf, &config, None).unwrap()));

        assert_eq!(outcome, Some(Outcome::BackendMissing));
        assert_eq!(std::fs::read_dir(dir.path()).unwrap().count(), 0);
        assert!(stdout.starts_with("The image rendering backend is not available."));
        assert!(stdout.contains("Alternatively, you can:"));
        for n in 1..=3 {
            assert!(stdout.contains(&format!("\n{}. ", n)));
        }
        assert!(!stdout.contains("Created"));
        assert!(stdout.contains("without --no-default-features"));
        assert!(!stdout.contains("--features render"));
    }

    #[cfg(feature = "render")]
    #[test]
    fn generates_all_icons_with_progress() {
        let dir = tempfile::tempdir().unwrap();
        let config = GeneratorConfig::default()
            .with_output_dir(dir.path())
            .with_font_candidates(Vec::new());

        let mut outcome = None;
        let stdout = output_of(|buf| {
            outcome = Some(run(buf, &config, Backend::detect()).unwrap());
        });

        let Some(Outcome::Generated(paths)) = outcome else {
            panic!("expected icons to be generated");
        };
        assert_eq!(paths.len(), 3);
        for (path, size) in paths.iter().zip(DEFAULT_SIZES) {
            assert_eq!(image::image_dimensions(path).unwrap(), (size, size));
        }
        assert_eq!(std::fs::read_dir(dir.path()).unwrap().count(), 3);

        assert_eq!(
            stdout,
            "Created icon16.png\n\
             Created icon48.png\n\
             Created icon128.png\n\
             \n\
             All icons created successfully!\n\
             The extension is now ready to use.\n"
        );
    }

    #[cfg(feature = "render")]
    #[test]
    fn rerun_overwrites_with_identical_pixels() {
        let dir = tempfile::tempdir().unwrap();
        let config = GeneratorConfig::default()
            .with_output_dir(dir.path())
            .with_font_candidates(Vec::new());

        let mut sink = Vec::new();
        run(&mut sink, &config, Backend::detect()).unwrap();
        let first = std::fs::read(dir.path().join("icon128.png")).unwrap();
        run(&mut sink, &config, Backend::detect()).unwrap();
        let second = std::fs::read(dir.path().join("icon128.png")).unwrap();

        assert_eq!(first, second);
    }

    #[cfg(feature = "render")]
    #[test]
    fn custom_sizes_and_text() {
        let dir = tempfile::tempdir().unwrap();
        let config = GeneratorConfig::default()
            .with_output_dir(dir.path())
            .with_font_candidates(Vec::new())
            .with_sizes(vec![32])
            .with_text("OK");

        let mut sink = Vec::new();
        let outcome = run(&mut sink, &config, Backend::detect()).unwrap();

        let path = dir.path().join("icon32.png");
        assert_eq!(outcome, Outcome::Generated(vec![path.clone()]));
        assert_eq!(image::image_dimensions(&path).unwrap(), (32, 32));
        assert!(String::from_utf8(sink).unwrap().starts_with("Created icon32.png\n"));
    }

    #[cfg(feature = "render")]
    #[test]
    fn write_failure_propagates() {
        let dir = tempfile::tempdir().unwrap();
        let config = GeneratorConfig::default()
            .with_output_dir(dir.path().join("does-not-exist"))
            .with_font_candidates(Vec::new());

        let mut sink = Vec::new();
        assert!(run(&mut sink, &config, Backend::detect()).is_err());
    }
}
