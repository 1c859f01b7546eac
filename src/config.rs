//! Gallery configuration
//!
//! Built from CLI flags in `main`; the library only sees this struct.

use crate::core::{ArtworkSet, DexNumber};
use crate::logger::VerbosityLevel;
use crate::{DexError, Result};
use std::ops::RangeInclusive;
use std::time::Duration;

pub const DEFAULT_BASE_URL: &str = "https://pokeapi.co";
pub const DEFAULT_COUNT: u32 = 20;
pub const DEFAULT_COLUMNS: usize = 4;

#[derive(Debug, Clone)]
pub struct GalleryConfig {
    /// Catalog host, without trailing `/api/v2`
    pub base_url: String,
    /// First dex number requested
    pub first: u32,
    /// Number of consecutive creatures requested
    pub count: u32,
    /// Maximum requests in flight; 1 means strictly sequential
    pub concurrency: usize,
    /// Per-request timeout. `None` waits indefinitely.
    pub timeout: Option<Duration>,
    pub artwork: ArtworkSet,
    /// Cards per row in the grid
    pub columns: usize,
    pub color: bool,
    pub verbosity: VerbosityLevel,
}

impl Default for GalleryConfig {
    fn default() -> Self {
        GalleryConfig {
            base_url: DEFAULT_BASE_URL.to_string(),
            first: 1,
            count: DEFAULT_COUNT,
            concurrency: 1,
            timeout: None,
            artwork: ArtworkSet::default(),
            columns: DEFAULT_COLUMNS,
            color: true,
            verbosity: VerbosityLevel::default(),
        }
    }
}

impl GalleryConfig {
    pub fn validate(&self) -> Result<()> {
        if self.first == 0 {
            return Err(DexError::InvalidConfig(
                "first dex number must be at least 1".to_string(),
            ));
        }
        if self.count == 0 {
            return Err(DexError::InvalidConfig(
                "count must be greater than 0".to_string(),
            ));
        }
        if self.first.checked_add(self.count - 1).is_none() {
            return Err(DexError::InvalidConfig(format!(
                "range starting at {} with {} entries overflows",
                self.first, self.count
            )));
        }
        if self.concurrency == 0 {
            return Err(DexError::InvalidConfig(
                "concurrency must be greater than 0".to_string(),
            ));
        }
        if self.columns == 0 {
            return Err(DexError::InvalidConfig(
                "columns must be greater than 0".to_string(),
            ));
        }
        if !self.base_url.starts_with("http://") && !self.base_url.starts_with("https://") {
            return Err(DexError::InvalidConfig(format!(
                "base URL '{}' must start with http:// or https://",
                self.base_url
            )));
        }
        Ok(())
    }

    /// Inclusive range of dex numbers to request. Call `validate` first.
    pub fn id_range(&self) -> RangeInclusive<u32> {
        let last = self.first.saturating_add(self.count.saturating_sub(1));
        self.first..=last
    }

    /// Dex numbers to request, in ascending order
    pub fn ids(&self) -> Vec<DexNumber> {
        self.id_range().filter_map(DexNumber::new).collect()
    }

    /// Endpoint for one creature: `{base_url}/api/v2/pokemon/{id}`
    pub fn endpoint(&self, id: DexNumber) -> String {
        endpoint(&self.base_url, id)
    }
}

pub(crate) fn endpoint(base_url: &str, id: DexNumber) -> String {
    format!("{}/api/v2/pokemon/{}", base_url.trim_end_matches('/'), id)
}
