//! Wish map assembly: title, grid, per-cell images and labels
//!
//! Assembly is a single pass. Cell images are acquired and normalized in
//! parallel on a small dedicated pool, then pasted onto the canvas one at a
//! time in input order. A cell whose image cannot be acquired, decoded or
//! processed gets a placeholder instead; only layout and output errors abort
//! the call.

use crate::io::configuration::{
    ComposerConfig, LABEL_BOTTOM_PADDING, LABEL_FONT_DIVISOR, LABEL_FONT_MIN,
    PLACEHOLDER_LABEL_MAX_CHARS, TITLE_FONT_DIVISOR, TITLE_FONT_MAX,
};
use crate::io::error::{Result, WishMapError, processing_error};
use crate::io::output::{encode_png, write_png};
use crate::io::source::{HttpFetcher, ImageFetcher, WishItem, WishSource, acquire};
use crate::layout::geometry::CanvasLayout;
use crate::render::font::{FontSource, Typeface};
use crate::render::normalize::normalize_bytes;
use crate::render::placeholder::create_placeholder;
use crate::render::text::{self, TITLE_GRAY, centered_offset, truncate_chars};
use image::{Rgb, RgbImage, imageops};
use rayon::prelude::*;
use std::path::Path;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use tracing::{info, warn};

const BACKGROUND: Rgb<u8> = Rgb([255, 255, 255]);

/// Receives progress notifications while cells are prepared
///
/// `cell_ready` is called from worker threads in completion order, not input
/// order.
pub trait AssemblyProgress: Sync {
    /// Called once with the number of cells before any work starts
    fn begin(&self, _total: usize) {}
    /// Called when a cell's image is ready or has fallen back to a placeholder
    fn cell_ready(&self, _index: usize, _label: &str, _degraded: bool) {}
    /// Called once after every cell has been pasted
    fn finish(&self) {}
}

impl AssemblyProgress for () {}

/// Shared flag a caller sets to abort an assembly in progress
///
/// Pending fetches are skipped and no output is written once the flag is set.
#[derive(Debug, Clone, Default)]
pub struct CancelFlag(Arc<AtomicBool>);

impl CancelFlag {
    /// Create an unset flag
    pub fn new() -> Self {
        Self::default()
    }

    /// Request cancellation
    pub fn cancel(&self) {
        self.0.store(true, Ordering::SeqCst);
    }

    /// Whether cancellation has been requested
    pub fn is_cancelled(&self) -> bool {
        self.0.load(Ordering::SeqCst)
    }

    fn check(&self) -> Result<()> {
        if self.is_cancelled() {
            Err(WishMapError::Cancelled)
        } else {
            Ok(())
        }
    }
}

/// What ended up in a cell
#[derive(Debug)]
pub enum CellOutcome {
    /// The source image was acquired, normalized and pasted
    Normalized,
    /// A placeholder was pasted because of the contained error
    Placeholder(WishMapError),
}

impl CellOutcome {
    /// Whether the cell shows a placeholder
    pub const fn is_placeholder(&self) -> bool {
        matches!(self, Self::Placeholder(_))
    }
}

/// Finished wish map with the layout it was built from
#[derive(Debug)]
pub struct WishMap {
    canvas: RgbImage,
    layout: CanvasLayout,
    outcomes: Vec<CellOutcome>,
}

impl WishMap {
    /// Final raster
    pub const fn canvas(&self) -> &RgbImage {
        &self.canvas
    }

    /// Take ownership of the final raster
    pub fn into_canvas(self) -> RgbImage {
        self.canvas
    }

    /// Geometry used for the title band and cells
    pub const fn layout(&self) -> &CanvasLayout {
        &self.layout
    }

    /// Per-cell outcomes in input order
    pub fn outcomes(&self) -> &[CellOutcome] {
        &self.outcomes
    }

    /// Indices of cells that show placeholders
    pub fn degraded_cells(&self) -> Vec<usize> {
        self.outcomes
            .iter()
            .enumerate()
            .filter(|(_, outcome)| outcome.is_placeholder())
            .map(|(index, _)| index)
            .collect()
    }

    /// Encode the canvas as PNG in memory
    ///
    /// # Errors
    ///
    /// Returns an error if PNG encoding fails
    pub fn to_png_bytes(&self) -> Result<Vec<u8>> {
        encode_png(&self.canvas)
    }

    /// Write the canvas to `path` as PNG
    ///
    /// # Errors
    ///
    /// Returns an error if the directory cannot be created or the file cannot
    /// be written; no partial file is left behind
    pub fn save(&self, path: &Path) -> Result<()> {
        write_png(&self.canvas, path)?;
        info!(path = %path.display(), "wish map saved");
        Ok(())
    }
}

/// Builds wish maps from labeled image sources
///
/// Owns its configuration, typeface and fetcher; nothing is shared between
/// assemblies beyond these read-only parts.
#[derive(Debug)]
pub struct Composer<F = HttpFetcher> {
    config: ComposerConfig,
    typeface: Typeface,
    fetcher: F,
    cancel: CancelFlag,
}

impl Composer<HttpFetcher> {
    /// Create a composer that fetches remote images over HTTP
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be built
    pub fn new(config: ComposerConfig) -> Result<Self> {
        let fetcher = HttpFetcher::new(config.fetch_timeout)?;
        Ok(Self::with_fetcher(config, fetcher))
    }
}

impl<F: ImageFetcher> Composer<F> {
    /// Create a composer with a caller-supplied fetcher
    ///
    /// The typeface is resolved from the configured font paths, the
    /// environment, the bundled font and platform fonts, in that order.
    pub fn with_fetcher(config: ComposerConfig, fetcher: F) -> Self {
        let typeface = Typeface::resolve(&FontSource::default_chain(&config.font_paths));
        Self {
            config,
            typeface,
            fetcher,
            cancel: CancelFlag::new(),
        }
    }

    /// Replace the resolved typeface
    #[must_use]
    pub fn with_typeface(mut self, typeface: Typeface) -> Self {
        self.typeface = typeface;
        self
    }

    /// Use a caller-held cancellation flag
    #[must_use]
    pub fn with_cancel_flag(mut self, cancel: CancelFlag) -> Self {
        self.cancel = cancel;
        self
    }

    /// Handle that cancels assemblies run by this composer
    pub fn cancel_flag(&self) -> CancelFlag {
        self.cancel.clone()
    }

    /// Active configuration
    pub const fn config(&self) -> &ComposerConfig {
        &self.config
    }

    /// Typeface used for the title, labels and placeholder captions
    pub const fn typeface(&self) -> &Typeface {
        &self.typeface
    }

    /// Assemble from parallel lists of image sources and labels
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - Either list is empty or their lengths differ
    /// - The image count is outside the supported grid range
    /// - The canvas is too small for the layout
    /// - The assembly is cancelled
    pub fn assemble(
        &self,
        images: &[WishSource],
        labels: &[String],
        width: u32,
        height: u32,
    ) -> Result<WishMap> {
        if images.len() != labels.len() {
            return Err(WishMapError::MismatchedInputs {
                images: images.len(),
                labels: labels.len(),
            });
        }
        let items: Vec<WishItem> = images
            .iter()
            .zip(labels)
            .map(|(source, label)| WishItem {
                label: label.clone(),
                source: source.clone(),
            })
            .collect();
        self.assemble_items(&items, width, height)
    }

    /// Assemble from labeled items
    ///
    /// # Errors
    ///
    /// Same conditions as [`Composer::assemble`]
    pub fn assemble_items(&self, items: &[WishItem], width: u32, height: u32) -> Result<WishMap> {
        self.assemble_with_progress(items, width, height, &())
    }

    /// Assemble and atomically write the result to `path` as PNG
    ///
    /// # Errors
    ///
    /// Returns an error if assembly fails, the assembly is cancelled before
    /// the write, or the file cannot be written
    pub fn assemble_to_file(
        &self,
        items: &[WishItem],
        width: u32,
        height: u32,
        path: &Path,
        progress: &dyn AssemblyProgress,
    ) -> Result<WishMap> {
        let map = self.assemble_with_progress(items, width, height, progress)?;
        self.cancel.check()?;
        map.save(path)?;
        Ok(map)
    }

    /// Assemble while reporting per-cell progress
    ///
    /// # Errors
    ///
    /// Same conditions as [`Composer::assemble`]
    #[tracing::instrument(skip_all, fields(count = items.len(), width = width, height = height))]
    pub fn assemble_with_progress(
        &self,
        items: &[WishItem],
        width: u32,
        height: u32,
        progress: &dyn AssemblyProgress,
    ) -> Result<WishMap> {
        if items.is_empty() {
            return Err(WishMapError::EmptyInput);
        }
        self.cancel.check()?;

        let layout = CanvasLayout::compute(&self.config, items.len(), width, height)?;
        info!(
            rows = layout.plan.rows,
            cols = layout.plan.cols,
            cell_width = layout.cell_size.0,
            cell_height = layout.cell_size.1,
            "starting wish map assembly"
        );

        let mut canvas = RgbImage::from_pixel(width, height, BACKGROUND);
        self.draw_title(&mut canvas, width);

        progress.begin(items.len());
        let prepared = self.prepare_cells(items, layout.cell_size, progress);
        self.cancel.check()?;

        let mut outcomes = Vec::with_capacity(items.len());
        for ((item, cell), image) in items.iter().zip(&layout.plan.boxes).zip(prepared) {
            let origin = layout.cell_origin(cell);
            let outcome = match image {
                Ok(img) => match paste_cell(&mut canvas, &img, origin) {
                    Ok(()) => {
                        self.draw_label(&mut canvas, &layout, origin, &item.label);
                        CellOutcome::Normalized
                    }
                    Err(error) => {
                        warn!(
                            label = %item.label,
                            %error,
                            "cell paste failed, using blank placeholder"
                        );
                        let blank = create_placeholder(
                            layout.cell_size.0,
                            layout.cell_size.1,
                            "",
                            &self.typeface,
                        );
                        imageops::replace(
                            &mut canvas,
                            &blank,
                            origin.0.into(),
                            origin.1.into(),
                        );
                        CellOutcome::Placeholder(error)
                    }
                },
                Err(error) if error.is_recoverable() => {
                    warn!(
                        label = %item.label,
                        source = %item.source,
                        %error,
                        "image unavailable, using placeholder"
                    );
                    let placeholder = create_placeholder(
                        layout.cell_size.0,
                        layout.cell_size.1,
                        truncate_chars(&item.label, PLACEHOLDER_LABEL_MAX_CHARS),
                        &self.typeface,
                    );
                    imageops::replace(
                        &mut canvas,
                        &placeholder,
                        origin.0.into(),
                        origin.1.into(),
                    );
                    self.draw_label(&mut canvas, &layout, origin, &item.label);
                    CellOutcome::Placeholder(error)
                }
                Err(error) => return Err(error),
            };
            outcomes.push(outcome);
        }
        progress.finish();

        let degraded = outcomes.iter().filter(|o| o.is_placeholder()).count();
        info!(cells = outcomes.len(), degraded, "wish map assembled");

        Ok(WishMap {
            canvas,
            layout,
            outcomes,
        })
    }

    fn prepare_cells(
        &self,
        items: &[WishItem],
        cell_size: (u32, u32),
        progress: &dyn AssemblyProgress,
    ) -> Vec<Result<RgbImage>> {
        let prepare = |(index, item): (usize, &WishItem)| {
            let result = self.prepare_cell(item, cell_size);
            progress.cell_ready(index, &item.label, result.is_err());
            result
        };

        let workers = self.config.worker_limit.clamp(1, items.len().max(1));
        match rayon::ThreadPoolBuilder::new().num_threads(workers).build() {
            Ok(pool) => pool.install(|| items.par_iter().enumerate().map(prepare).collect()),
            Err(error) => {
                warn!(%error, "worker pool unavailable, preparing cells sequentially");
                items.iter().enumerate().map(prepare).collect()
            }
        }
    }

    fn prepare_cell(&self, item: &WishItem, cell_size: (u32, u32)) -> Result<RgbImage> {
        self.cancel.check()?;
        let bytes = acquire(&item.source, &self.fetcher)?;
        normalize_bytes(&item.source.to_string(), &bytes, cell_size)
    }

    fn draw_title(&self, canvas: &mut RgbImage, width: u32) {
        let size = (width / TITLE_FONT_DIVISOR).min(TITLE_FONT_MAX);
        let (title_w, _) = text::measure(&self.typeface, size, &self.config.title);
        let x = centered_offset(width, title_w);
        let y = (self.config.margin / 2) as i32;
        text::draw(
            canvas,
            &self.typeface,
            TITLE_GRAY,
            size,
            (x, y),
            &self.config.title,
        );
    }

    fn draw_label(
        &self,
        canvas: &mut RgbImage,
        layout: &CanvasLayout,
        origin: (u32, u32),
        label: &str,
    ) {
        let (cell_w, cell_h) = layout.cell_size;
        let size = label_font_size(cell_w, cell_h);
        let (label_w, _) = text::measure(&self.typeface, size, label);
        let x = i64::from(origin.0) + i64::from(centered_offset(cell_w, label_w));
        let y = i64::from(origin.1) + i64::from(cell_h)
            - i64::from(size)
            - i64::from(LABEL_BOTTOM_PADDING);
        text::draw_shadowed(canvas, &self.typeface, size, (x as i32, y as i32), label);
    }
}

/// Label font size for cells of the given size
pub fn label_font_size(cell_w: u32, cell_h: u32) -> u32 {
    (cell_w.min(cell_h) / LABEL_FONT_DIVISOR).max(LABEL_FONT_MIN)
}

/// Copy a cell image onto the canvas at `origin`
///
/// # Errors
///
/// Returns [`WishMapError::Processing`] if the image would extend past the
/// canvas edge
pub fn paste_cell(canvas: &mut RgbImage, img: &RgbImage, origin: (u32, u32)) -> Result<()> {
    let right = u64::from(origin.0) + u64::from(img.width());
    let bottom = u64::from(origin.1) + u64::from(img.height());
    if right > u64::from(canvas.width()) || bottom > u64::from(canvas.height()) {
        return Err(processing_error(
            "paste",
            &format!(
                "{}x{} cell at ({}, {}) exceeds {}x{} canvas",
                img.width(),
                img.height(),
                origin.0,
                origin.1,
                canvas.width(),
                canvas.height()
            ),
        ));
    }
    imageops::replace(canvas, img, origin.0.into(), origin.1.into());
    Ok(())
}
