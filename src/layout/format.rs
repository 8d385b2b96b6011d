//! Named output targets with fixed pixel dimensions

use crate::io::error::{Result, WishMapError};
use std::fmt;
use std::str::FromStr;

/// Output format for a finished wish map
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, clap::ValueEnum)]
pub enum Format {
    /// Vertical phone wallpaper
    Phone,
    /// Horizontal desktop wallpaper
    Pc,
    /// A4 print page at 300 dpi
    A4,
}

impl Format {
    /// Every known format, in lookup order
    pub const ALL: [Self; 3] = [Self::Phone, Self::Pc, Self::A4];

    /// Short key used on the command line and in requests
    pub const fn key(self) -> &'static str {
        match self {
            Self::Phone => "phone",
            Self::Pc => "pc",
            Self::A4 => "a4",
        }
    }

    /// Human readable name
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::Phone => "Phone Wallpaper",
            Self::Pc => "Computer Wallpaper",
            Self::A4 => "Print A4",
        }
    }

    /// Canvas size as (width, height) in pixels
    pub const fn dimensions(self) -> (u32, u32) {
        match self {
            Self::Phone => (1080, 1920),
            Self::Pc => (1920, 1080),
            Self::A4 => (2480, 3508),
        }
    }

    /// Look up a format by its key
    ///
    /// # Errors
    ///
    /// Returns [`WishMapError::UnknownFormat`] listing the accepted keys
    /// when `key` does not name a format
    pub fn from_key(key: &str) -> Result<Self> {
        Self::ALL
            .into_iter()
            .find(|format| format.key() == key)
            .ok_or_else(|| WishMapError::UnknownFormat {
                name: key.to_string(),
                known: Self::ALL.iter().map(|format| format.key()).collect(),
            })
    }
}

impl FromStr for Format {
    type Err = WishMapError;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_key(s)
    }
}

impl fmt::Display for Format {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (width, height) = self.dimensions();
        write!(f, "{} ({width}x{height})", self.display_name())
    }
}
