use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Result ordering.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortMode {
    /// Input order.
    Raw,
    #[serde(alias = "asc")]
    Ascending,
    #[serde(alias = "desc")]
    Descending,
    /// Longest consecutive run, then earliest match, then text.
    #[default]
    Auto,
}

/// How multi-token queries combine.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MultipleMode {
    /// Every token must match.
    #[default]
    All,
    /// At least one token must match.
    Any,
}

/// Per-call search options, optionally read from TOML.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchOptions {
    pub sort: SortMode,
    pub multiple: MultipleMode,
    pub separator: String,
    /// Only accept matches where every query piece lands on adjacent characters.
    pub strict: bool,
    /// Segmentations × candidates above which the leading-piece pre-filter runs.
    pub prefilter_threshold: usize,
    /// Number of leading pieces the pre-filter matches.
    pub prefilter_pieces: usize,
}

impl Default for SearchOptions {
    fn default() -> Self {
        Self {
            sort: SortMode::default(),
            multiple: MultipleMode::default(),
            separator: " ".to_string(),
            strict: false,
            prefilter_threshold: 10_000,
            prefilter_pieces: 2,
        }
    }
}

impl SearchOptions {
    pub fn with_sort(mut self, sort: SortMode) -> Self {
        self.sort = sort;
        self
    }

    pub fn with_multiple(mut self, multiple: MultipleMode) -> Self {
        self.multiple = multiple;
        self
    }

    pub fn with_separator(mut self, separator: impl Into<String>) -> Self {
        self.separator = separator.into();
        self
    }

    pub fn with_strict(mut self, strict: bool) -> Self {
        self.strict = strict;
        self
    }

    pub fn from_toml_str(content: &str) -> Result<Self, SearchOptionsError> {
        Ok(toml::from_str(content)?)
    }

    /// Returns validation messages; empty when the options are usable.
    pub fn validate(&self) -> Vec<String> {
        let mut errors = Vec::new();

        if self.separator.is_empty() {
            errors.push("separator must not be empty".to_string());
        }

        if self.prefilter_pieces == 0 {
            errors.push("prefilter_pieces must be at least 1".to_string());
        }

        errors
    }
}

/// Errors that can occur when reading options.
#[derive(Debug, Error)]
pub enum SearchOptionsError {
    #[error("parse error: {0}")]
    Parse(#[from] toml::de::Error),
}
