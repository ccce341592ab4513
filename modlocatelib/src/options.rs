//! Input options for module location.
//!
//! [`Options`] carries the include/exclude pattern lists and the diagnostic
//! logger. Options can be assembled with the builder methods or loaded from
//! a JSON options file.

use std::fmt;
use std::fs;
use std::path::Path;
use std::sync::Arc;

use serde::Deserialize;

use crate::error::LocateError;
use crate::Result;

/// Diagnostic sink. Called for observability only; never affects results.
pub type Logger = Arc<dyn Fn(&str) + Send + Sync>;

/// Options controlling which discovered modules are kept.
#[derive(Clone)]
pub struct Options {
    /// Regex sources a module path must match at least one of (`None` = no restriction)
    pub include: Option<Vec<String>>,
    /// Regex sources that drop any module path they match (`None` = no restriction)
    pub exclude: Option<Vec<String>>,
    /// Diagnostic sink
    pub logger: Logger,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            include: None,
            exclude: None,
            logger: Arc::new(|message: &str| tracing::debug!(target: "modlocate", "{}", message)),
        }
    }
}

impl fmt::Debug for Options {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Options")
            .field("include", &self.include)
            .field("exclude", &self.exclude)
            .finish_non_exhaustive()
    }
}

impl Options {
    /// Create new default options (no filters, logging through `tracing`).
    pub fn new() -> Self {
        Self::default()
    }

    /// Create options whose logger discards every message.
    pub fn silent() -> Self {
        Self::default().with_logger(|_| {})
    }

    /// Builder: replace the diagnostic logger.
    pub fn with_logger(mut self, logger: impl Fn(&str) + Send + Sync + 'static) -> Self {
        self.logger = Arc::new(logger);
        self
    }

    /// Add an include pattern.
    pub fn include(mut self, pattern: &str) -> Self {
        self.include
            .get_or_insert_with(Vec::new)
            .push(pattern.to_string());
        self
    }

    /// Add an exclude pattern.
    pub fn exclude(mut self, pattern: &str) -> Self {
        self.exclude
            .get_or_insert_with(Vec::new)
            .push(pattern.to_string());
        self
    }

    /// Add multiple include patterns.
    ///
    /// An empty slice still makes the include list present, which keeps nothing.
    pub fn include_many(mut self, patterns: &[&str]) -> Self {
        let list = self.include.get_or_insert_with(Vec::new);
        list.extend(patterns.iter().map(|p| p.to_string()));
        self
    }

    /// Add multiple exclude patterns.
    pub fn exclude_many(mut self, patterns: &[&str]) -> Self {
        let list = self.exclude.get_or_insert_with(Vec::new);
        list.extend(patterns.iter().map(|p| p.to_string()));
        self
    }

    /// Load include/exclude lists from a JSON options file.
    ///
    /// The logger is the default `tracing` one; replace it with
    /// [`Options::with_logger`] if needed.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|e| LocateError::Config {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;
        let file: OptionsFile =
            serde_json::from_str(&content).map_err(|e| LocateError::Config {
                path: path.to_path_buf(),
                message: e.to_string(),
            })?;
        Ok(file.into())
    }

    /// Send a diagnostic message to the logger.
    pub fn log(&self, message: &str) {
        (self.logger)(message);
    }
}

/// On-disk form of [`Options`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct OptionsFile {
    #[serde(default)]
    pub include: Option<Vec<String>>,
    #[serde(default)]
    pub exclude: Option<Vec<String>>,
}

impl From<OptionsFile> for Options {
    fn from(file: OptionsFile) -> Self {
        Self {
            include: file.include,
            exclude: file.exclude,
            ..Self::default()
        }
    }
}
