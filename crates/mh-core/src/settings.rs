//! Engine settings.
//!
//! [`EngineSettings`] carries the **reference year** that every `"Mon D"`
//! string is interpreted in, and optionally the path of a JSON catalog to
//! load instead of the built-in one.  It is an explicit value handed to the
//! catalog loader; there is no process-wide instance.
//!
//! Settings can be read from JSON and then overridden from the environment:
//!
//! * `MH_REFERENCE_YEAR`: replaces `reference_year`.
//! * `MH_CATALOG_PATH`: replaces `catalog_path`.

use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::errors::{Error, Result};

/// Environment variable overriding [`EngineSettings::reference_year`].
pub const ENV_REFERENCE_YEAR: &str = "MH_REFERENCE_YEAR";

/// Environment variable overriding [`EngineSettings::catalog_path`].
pub const ENV_CATALOG_PATH: &str = "MH_CATALOG_PATH";

/// Year of the built-in catalog.
pub const DEFAULT_REFERENCE_YEAR: u16 = 2025;

/// Earliest reference year accepted (the first year of the date range).
pub const MIN_REFERENCE_YEAR: u16 = 1900;

/// Latest reference year accepted (the year after must still be a valid date).
pub const MAX_REFERENCE_YEAR: u16 = 2198;

/// Settings for constructing a holiday engine.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineSettings {
    /// Year in which catalog dates are interpreted.
    pub reference_year: u16,
    /// JSON catalog to load; `None` selects the built-in catalog.
    pub catalog_path: Option<PathBuf>,
}

impl Default for EngineSettings {
    fn default() -> Self {
        Self {
            reference_year: DEFAULT_REFERENCE_YEAR,
            catalog_path: None,
        }
    }
}

impl EngineSettings {
    /// Settings for the built-in catalog interpreted in `reference_year`.
    pub fn new(reference_year: u16) -> Result<Self> {
        let settings = Self {
            reference_year,
            ..Self::default()
        };
        settings.validate()?;
        Ok(settings)
    }

    /// Use the JSON catalog at `path`.
    pub fn with_catalog_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.catalog_path = Some(path.into());
        self
    }

    /// Parse settings from a JSON string.  Missing fields take their defaults.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let settings: Self = serde_json::from_str(json)?;
        settings.validate()?;
        Ok(settings)
    }

    /// Read settings from a JSON file.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let file = File::open(path)
            .map_err(|e| Error::Io(format!("{}: {e}", path.display())))?;
        let settings: Self = serde_json::from_reader(BufReader::new(file))?;
        settings.validate()?;
        debug!(path = %path.display(), year = settings.reference_year, "loaded engine settings");
        Ok(settings)
    }

    /// Apply `MH_REFERENCE_YEAR` / `MH_CATALOG_PATH` from the process
    /// environment.
    pub fn with_env_overrides(self) -> Result<Self> {
        self.with_overrides(|key| std::env::var(key).ok())
    }

    /// Apply overrides from an arbitrary key lookup (the environment in
    /// production, a map in tests).
    pub fn with_overrides<F>(mut self, lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(raw) = lookup(ENV_REFERENCE_YEAR) {
            let year: u16 = raw.trim().parse().map_err(|_| {
                Error::InvalidArgument(format!("{ENV_REFERENCE_YEAR}='{raw}' is not a year"))
            })?;
            self.reference_year = year;
        }
        if let Some(path) = lookup(ENV_CATALOG_PATH) {
            if !path.trim().is_empty() {
                self.catalog_path = Some(PathBuf::from(path));
            }
        }
        self.validate()?;
        Ok(self)
    }

    /// Check that the reference year is supported.
    pub fn validate(&self) -> Result<()> {
        crate::ensure!(
            (MIN_REFERENCE_YEAR..=MAX_REFERENCE_YEAR).contains(&self.reference_year),
            "reference year {} out of range [{MIN_REFERENCE_YEAR}, {MAX_REFERENCE_YEAR}]",
            self.reference_year
        );
        Ok(())
    }
}
