//! Engine configuration, loaded from TOML.
//!
//! ```toml
//! page_size = 15
//! default_price_min = "0"
//! default_price_max = "100000"
//! shuffle_seed = 42
//! source_url = "https://example.org/gifts.json"
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::CatalogError;

pub const DEFAULT_PAGE_SIZE: usize = 15;
pub const DEFAULT_PRICE_MIN: &str = "0";
pub const DEFAULT_PRICE_MAX: &str = "100000";

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Entries released per page.
    pub page_size: usize,
    pub default_price_min: String,
    pub default_price_max: String,
    /// Fixes the session permutation. Unset means a fresh random order per load.
    pub shuffle_seed: Option<u64>,
    pub source_url: Option<String>,
    pub source_path: Option<PathBuf>,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            page_size: DEFAULT_PAGE_SIZE,
            default_price_min: DEFAULT_PRICE_MIN.to_string(),
            default_price_max: DEFAULT_PRICE_MAX.to_string(),
            shuffle_seed: None,
            source_url: None,
            source_path: None,
        }
    }
}

impl EngineConfig {
    pub fn from_toml_str(text: &str) -> Result<Self, CatalogError> {
        let config: EngineConfig = toml::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_file(path: &Path) -> Result<Self, CatalogError> {
        let text = fs::read_to_string(path)?;
        Self::from_toml_str(&text)
    }

    /// Like [`from_file`](Self::from_file), but a missing file yields defaults.
    pub fn from_file_or_default(path: &Path) -> Result<Self, CatalogError> {
        if !path.exists() {
            tracing::debug!("No config at {}, using defaults", path.display());
            return Ok(Self::default());
        }
        Self::from_file(path)
    }

    pub fn validate(&self) -> Result<(), CatalogError> {
        if self.page_size == 0 {
            return Err(CatalogError::ConfigValidation(
                "page_size must be at least 1".to_string(),
            ));
        }
        if self.source_url.is_some() && self.source_path.is_some() {
            return Err(CatalogError::ConfigValidation(
                "source_url and source_path are mutually exclusive".to_string(),
            ));
        }
        Ok(())
    }
}
