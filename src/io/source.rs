//! Image source references and byte acquisition
//!
//! Remote fetching sits behind [`ImageFetcher`] so callers can inject their
//! own transport; [`HttpFetcher`] is the blocking HTTP implementation.

use crate::io::error::{Result, WishMapError, invalid_parameter};
use std::fmt;
use std::path::PathBuf;
use std::time::Duration;
use tracing::debug;

/// Prefix marking a locally generated placeholder file
const PLACEHOLDER_PREFIX: &str = "placeholder:";
/// Prefix of local file URLs
const FILE_URL_PREFIX: &str = "file://";

/// Where an image's bytes come from
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum WishSource {
    /// Absolute `http://` or `https://` URL
    Remote(String),
    /// Filesystem path
    Local(PathBuf),
}

impl WishSource {
    /// Classify a source reference
    ///
    /// `http://` and `https://` references are remote. `file://` URLs and
    /// `placeholder:` references are stripped to their path; anything else is
    /// taken as a filesystem path.
    pub fn parse(reference: &str) -> Self {
        let trimmed = reference.trim();
        if trimmed.starts_with("http://") || trimmed.starts_with("https://") {
            return Self::Remote(trimmed.to_string());
        }
        let path = trimmed
            .strip_prefix(PLACEHOLDER_PREFIX)
            .or_else(|| trimmed.strip_prefix(FILE_URL_PREFIX))
            .unwrap_or(trimmed);
        Self::Local(PathBuf::from(path))
    }

    /// Whether the bytes must be fetched over the network
    pub const fn is_remote(&self) -> bool {
        matches!(self, Self::Remote(_))
    }
}

impl fmt::Display for WishSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Remote(url) => write!(f, "{url}"),
            Self::Local(path) => write!(f, "{}", path.display()),
        }
    }
}

impl From<&str> for WishSource {
    fn from(reference: &str) -> Self {
        Self::parse(reference)
    }
}

impl From<PathBuf> for WishSource {
    fn from(path: PathBuf) -> Self {
        Self::Local(path)
    }
}

/// One labeled image; list order fixes its grid position
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WishItem {
    /// Caption drawn at the bottom of the cell
    pub label: String,
    /// Where the image comes from
    pub source: WishSource,
}

impl WishItem {
    /// Create an item from a label and any source reference
    pub fn new(label: impl Into<String>, source: impl Into<WishSource>) -> Self {
        Self {
            label: label.into(),
            source: source.into(),
        }
    }

    /// Parse a `LABEL=SOURCE` pair
    ///
    /// Only the first `=` separates the label, so URLs with query strings
    /// survive intact.
    ///
    /// # Errors
    ///
    /// Returns an error if there is no `=` or either side is empty
    pub fn parse_pair(pair: &str) -> Result<Self> {
        let (label, source) = pair.split_once('=').ok_or_else(|| {
            invalid_parameter("item", &pair, &"expected LABEL=SOURCE")
        })?;
        let label = label.trim();
        let source = source.trim();
        if label.is_empty() {
            return Err(invalid_parameter("item", &pair, &"label is empty"));
        }
        if source.is_empty() {
            return Err(invalid_parameter("item", &pair, &"source is empty"));
        }
        Ok(Self::new(label, source))
    }
}

/// Fetches image bytes for a remote URL
///
/// Implementations must bound how long a single fetch can take and report
/// every failure as an error rather than panicking.
pub trait ImageFetcher: Send + Sync {
    /// Fetch the body at `url`
    ///
    /// # Errors
    ///
    /// Returns [`WishMapError::Acquisition`] on network failure, timeout or a
    /// non-success response
    fn fetch(&self, url: &str) -> Result<Vec<u8>>;
}

/// Blocking HTTP fetcher with a per-request timeout
#[derive(Debug, Clone)]
pub struct HttpFetcher {
    client: reqwest::blocking::Client,
    timeout: Duration,
}

impl HttpFetcher {
    /// Build a fetcher whose requests give up after `timeout`
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be initialised
    pub fn new(timeout: Duration) -> Result<Self> {
        let client = reqwest::blocking::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| WishMapError::Acquisition {
                location: "http client".to_string(),
                reason: e.to_string(),
            })?;
        Ok(Self { client, timeout })
    }
}

impl ImageFetcher for HttpFetcher {
    fn fetch(&self, url: &str) -> Result<Vec<u8>> {
        let failure = |reason: String| WishMapError::Acquisition {
            location: url.to_string(),
            reason,
        };

        debug!(url, "fetching image");
        let response = self.client.get(url).send().map_err(|e| {
            if e.is_timeout() {
                failure(format!("timed out after {:?}", self.timeout))
            } else {
                failure(e.to_string())
            }
        })?;

        let status = response.status();
        if !status.is_success() {
            return Err(failure(format!("HTTP status {status}")));
        }

        let body = response.bytes().map_err(|e| failure(e.to_string()))?;
        Ok(body.to_vec())
    }
}

/// Read the raw bytes behind a source
///
/// # Errors
///
/// Returns [`WishMapError::Acquisition`] if the file cannot be read or the
/// remote fetch fails
pub fn acquire(source: &WishSource, fetcher: &dyn ImageFetcher) -> Result<Vec<u8>> {
    match source {
        WishSource::Remote(url) => fetcher.fetch(url),
        WishSource::Local(path) => std::fs::read(path).map_err(|e| WishMapError::Acquisition {
            location: path.display().to_string(),
            reason: e.to_string(),
        }),
    }
}
