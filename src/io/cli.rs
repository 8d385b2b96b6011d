//! Command-line interface for assembling a single wish map

use crate::compose::Composer;
use crate::io::configuration::{
    ComposerConfig, DEFAULT_FETCH_TIMEOUT, DEFAULT_OUTPUT_FILE, DEFAULT_TITLE,
    DEFAULT_WORKER_LIMIT,
};
use crate::io::error::{Result, invalid_parameter};
use crate::io::progress::ProgressManager;
use crate::io::source::WishItem;
use crate::layout::{Format, validate_wish_count};
use clap::{ArgAction, Parser};
use std::path::PathBuf;
use std::time::{Duration, Instant};
use tracing::{Level, info};

#[derive(Parser, Debug)]
#[command(name = "wishmap")]
#[command(
    author,
    version,
    about = "Assemble labeled images into a wish map collage"
)]
/// Command-line arguments for the wish map assembler
pub struct Cli {
    /// Labeled images as LABEL=SOURCE, where SOURCE is a URL or a file path
    #[arg(value_name = "LABEL=SOURCE", required = true)]
    pub items: Vec<String>,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = Format::Phone)]
    pub format: Format,

    /// Output PNG path
    #[arg(short, long, default_value = DEFAULT_OUTPUT_FILE)]
    pub output: PathBuf,

    /// Canvas width in pixels, overriding the format
    #[arg(short = 'w', long)]
    pub width: Option<u32>,

    /// Canvas height in pixels, overriding the format
    #[arg(short = 'H', long)]
    pub height: Option<u32>,

    /// Title drawn above the grid
    #[arg(short, long, default_value = DEFAULT_TITLE)]
    pub title: String,

    /// Font file to try before the bundled font (repeatable)
    #[arg(long = "font", value_name = "PATH")]
    pub fonts: Vec<PathBuf>,

    /// Seconds to wait for each remote image
    #[arg(long, default_value_t = DEFAULT_FETCH_TIMEOUT.as_secs())]
    pub timeout: u64,

    /// Maximum number of images fetched at once
    #[arg(long, default_value_t = DEFAULT_WORKER_LIMIT)]
    pub workers: usize,

    /// Suppress progress output and informational logs
    #[arg(short, long)]
    pub quiet: bool,

    /// Increase log detail (repeat for more)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

impl Cli {
    /// Check if progress should be displayed
    pub const fn should_show_progress(&self) -> bool {
        !self.quiet
    }

    /// Most detailed log level to emit
    pub const fn log_level(&self) -> Level {
        if self.quiet {
            return Level::WARN;
        }
        match self.verbose {
            0 => Level::INFO,
            1 => Level::DEBUG,
            _ => Level::TRACE,
        }
    }

    /// Canvas size from the format, with any explicit overrides applied
    pub const fn dimensions(&self) -> (u32, u32) {
        let (width, height) = self.format.dimensions();
        let width = match self.width {
            Some(w) => w,
            None => width,
        };
        let height = match self.height {
            Some(h) => h,
            None => height,
        };
        (width, height)
    }

    /// Assembly settings derived from the flags
    pub fn composer_config(&self) -> ComposerConfig {
        ComposerConfig {
            title: self.title.clone(),
            fetch_timeout: Duration::from_secs(self.timeout),
            worker_limit: self.workers.max(1),
            font_paths: self.fonts.clone(),
            ..ComposerConfig::default()
        }
    }

    /// Parse and validate the labeled items
    ///
    /// # Errors
    ///
    /// Returns an error if any item is malformed or the item count is
    /// outside 3-9
    pub fn wish_items(&self) -> Result<Vec<WishItem>> {
        let items = self
            .items
            .iter()
            .map(|pair| WishItem::parse_pair(pair))
            .collect::<Result<Vec<_>>>()?;
        validate_wish_count(items.len())?;
        Ok(items)
    }
}

/// Runs one assembly from parsed CLI arguments
pub struct WishMapRunner {
    cli: Cli,
    progress_manager: Option<ProgressManager>,
}

impl WishMapRunner {
    /// Create a runner for the given CLI arguments
    pub fn new(cli: Cli) -> Self {
        let progress_manager = cli.should_show_progress().then(ProgressManager::new);

        Self {
            cli,
            progress_manager,
        }
    }

    /// Validate the arguments, assemble the map and write it out
    ///
    /// # Errors
    ///
    /// Returns an error if the arguments are invalid, the layout cannot be
    /// built, or the output cannot be written
    pub fn run(&self) -> Result<()> {
        let start_time = Instant::now();
        let items = self.cli.wish_items()?;
        let (width, height) = self.cli.dimensions();
        if width == 0 || height == 0 {
            return Err(invalid_parameter(
                "size",
                &format!("{width}x{height}"),
                &"canvas dimensions must be positive",
            ));
        }

        info!(
            format = %self.cli.format,
            width,
            height,
            images = items.len(),
            "assembling wish map"
        );

        let composer = Composer::new(self.cli.composer_config())?;
        let map = match &self.progress_manager {
            Some(pm) => composer.assemble_to_file(&items, width, height, &self.cli.output, pm)?,
            None => composer.assemble_to_file(&items, width, height, &self.cli.output, &())?,
        };

        info!(
            output = %self.cli.output.display(),
            placeholders = map.degraded_cells().len(),
            elapsed_ms = start_time.elapsed().as_millis(),
            "done"
        );
        Ok(())
    }
}
