//! Layout constants and runtime configuration defaults

use std::time::Duration;

// Business rule for how many wishes fit on one map
/// Smallest number of images a grid can be planned for
pub const MIN_IMAGES: usize = 3;
/// Largest number of images a grid can be planned for
pub const MAX_IMAGES: usize = 9;

// Canvas layout
/// Title drawn at the top of every map
pub const DEFAULT_TITLE: &str = "Wish Map 2026";
/// Blank border around the grid on every side
pub const MARGIN: u32 = 40;
/// Gap between neighbouring cells
pub const CELL_PADDING: u32 = 20;
/// Height of the band reserved for the title above the grid
pub const TITLE_BAND_HEIGHT: u32 = 100;

// Text sizing
/// Title font size is the canvas width divided by this
pub const TITLE_FONT_DIVISOR: u32 = 18;
/// Upper bound on the title font size
pub const TITLE_FONT_MAX: u32 = 70;
/// Label font size is the shorter cell side divided by this
pub const LABEL_FONT_DIVISOR: u32 = 18;
/// Lower bound on the label font size
pub const LABEL_FONT_MIN: u32 = 16;
/// Gap between a label's baseline area and the cell's bottom edge
pub const LABEL_BOTTOM_PADDING: u32 = 10;
/// Placeholder font size is the shorter side divided by this
pub const PLACEHOLDER_FONT_DIVISOR: u32 = 15;
/// Upper bound on the placeholder font size
pub const PLACEHOLDER_FONT_MAX: u32 = 48;
/// Lower bound on the placeholder font size
pub const PLACEHOLDER_FONT_MIN: u32 = 10;
/// Placeholder captions are cut to this many characters
pub const PLACEHOLDER_LABEL_MAX_CHARS: usize = 30;
/// Offset of the drop shadow behind white text
pub const SHADOW_OFFSET: i32 = 2;

// Normalization
/// Aspect ratios within this distance of 1.0 are treated as square
pub const SQUARE_TOLERANCE: f64 = 0.01;

// Acquisition
/// Upper bound on a single image fetch
pub const DEFAULT_FETCH_TIMEOUT: Duration = Duration::from_secs(30);
/// Upper bound on concurrent fetch workers
pub const DEFAULT_WORKER_LIMIT: usize = MAX_IMAGES;

// Fonts
/// Environment variable naming an extra font file to try first
pub const FONT_ENV_VAR: &str = "WISHMAP_FONT";
/// Well-known font locations probed when no configured font loads
pub const PLATFORM_FONT_PATHS: &[&str] = &[
    "/usr/share/fonts/truetype/dejavu/DejaVuSans.ttf",
    "/usr/share/fonts/TTF/DejaVuSans.ttf",
    "/usr/share/fonts/dejavu/DejaVuSans.ttf",
    "/Library/Fonts/Arial.ttf",
    "/System/Library/Fonts/Supplemental/Arial.ttf",
    "C:/Windows/Fonts/arial.ttf",
];

// Output settings
/// File name used when the CLI is not given an output path
pub const DEFAULT_OUTPUT_FILE: &str = "wish_map.png";

/// Tunable settings for a [`crate::compose::Composer`]
#[derive(Debug, Clone)]
pub struct ComposerConfig {
    /// Title drawn in the band above the grid
    pub title: String,
    /// Blank border around the grid
    pub margin: u32,
    /// Gap between neighbouring cells
    pub padding: u32,
    /// Height reserved for the title band
    pub title_height: u32,
    /// Bound on each remote fetch
    pub fetch_timeout: Duration,
    /// Maximum number of images acquired concurrently
    pub worker_limit: usize,
    /// Font files tried before the bundled and platform fonts
    pub font_paths: Vec<std::path::PathBuf>,
}

impl Default for ComposerConfig {
    fn default() -> Self {
        Self {
            title: DEFAULT_TITLE.to_string(),
            margin: MARGIN,
            padding: CELL_PADDING,
            title_height: TITLE_BAND_HEIGHT,
            fetch_timeout: DEFAULT_FETCH_TIMEOUT,
            worker_limit: DEFAULT_WORKER_LIMIT,
            font_paths: Vec::new(),
        }
    }
}
