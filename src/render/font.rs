//! Font resolution through an ordered list of sources
//!
//! Sources are tried in order and the first one that yields a parseable font
//! wins. When nothing loads, a glyphless typeface is returned so that text
//! drawing degrades to a no-op instead of failing the assembly.

use crate::io::configuration::{FONT_ENV_VAR, PLATFORM_FONT_PATHS};
use ab_glyph::FontArc;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

// DejaVu Sans, see assets/fonts/LICENSE-DejaVu.txt
static BUNDLED_FONT: &[u8] = include_bytes!("../../assets/fonts/DejaVuSans.ttf");

/// One place a font may be loaded from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FontSource {
    /// Explicit font file
    File(PathBuf),
    /// Font file named by the `WISHMAP_FONT` environment variable
    Environment,
    /// Font compiled into the binary
    Bundled,
    /// Well-known system font locations
    Platform,
}

impl FontSource {
    /// Default resolution order: configured files, environment, bundled, platform
    pub fn default_chain(configured: &[PathBuf]) -> Vec<Self> {
        configured
            .iter()
            .cloned()
            .map(Self::File)
            .chain([Self::Environment, Self::Bundled, Self::Platform])
            .collect()
    }

    fn load(&self) -> Option<(FontArc, String)> {
        match self {
            Self::File(path) => load_file(path),
            Self::Environment => {
                let path = std::env::var_os(FONT_ENV_VAR)?;
                load_file(Path::new(&path))
            }
            Self::Bundled => FontArc::try_from_slice(BUNDLED_FONT)
                .ok()
                .map(|font| (font, "bundled".to_string())),
            Self::Platform => PLATFORM_FONT_PATHS
                .iter()
                .find_map(|path| load_file(Path::new(path))),
        }
    }
}

fn load_file(path: &Path) -> Option<(FontArc, String)> {
    let bytes = match std::fs::read(path) {
        Ok(bytes) => bytes,
        Err(e) => {
            debug!(path = %path.display(), error = %e, "font file unreadable");
            return None;
        }
    };
    match FontArc::try_from_vec(bytes) {
        Ok(font) => Some((font, path.display().to_string())),
        Err(e) => {
            debug!(path = %path.display(), error = %e, "font file not parseable");
            None
        }
    }
}

/// Resolved font used for all text on a canvas
#[derive(Clone)]
pub struct Typeface {
    font: Option<FontArc>,
    origin: String,
}

impl std::fmt::Debug for Typeface {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Typeface")
            .field("origin", &self.origin)
            .field("has_glyphs", &self.font.is_some())
            .finish()
    }
}

impl Typeface {
    /// Resolve the first loadable font from `sources`
    ///
    /// Never fails: falls back to [`Typeface::glyphless`] when every source is
    /// unavailable.
    pub fn resolve(sources: &[FontSource]) -> Self {
        for source in sources {
            if let Some((font, origin)) = source.load() {
                debug!(?source, %origin, "font resolved");
                return Self {
                    font: Some(font),
                    origin,
                };
            }
        }
        warn!("no font source could be loaded, text will not be rendered");
        Self::glyphless()
    }

    /// The font compiled into the binary
    pub fn bundled() -> Self {
        Self::resolve(&[FontSource::Bundled])
    }

    /// Minimal built-in typeface that draws nothing and measures as zero
    pub fn glyphless() -> Self {
        Self {
            font: None,
            origin: "glyphless".to_string(),
        }
    }

    /// Underlying font, absent for the glyphless typeface
    pub const fn font(&self) -> Option<&FontArc> {
        self.font.as_ref()
    }

    /// Where the font was loaded from
    pub fn origin(&self) -> &str {
        &self.origin
    }
}
