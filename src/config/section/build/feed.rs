//! Per-language feed generation configuration.

use crate::post::SortPrecision;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Feed output format.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum FeedFormat {
    /// RSS 2.0 format (default).
    #[default]
    Rss,
    /// Atom 1.0 format.
    Atom,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FeedConfig {
    /// Enable feed generation.
    pub enable: bool,
    /// File name written under each language directory.
    pub filename: PathBuf,
    /// Feed format: rss | atom.
    pub format: FeedFormat,
    /// Timestamp precision used when ordering posts.
    pub precision: SortPrecision,
}

impl Default for FeedConfig {
    fn default() -> Self {
        Self {
            enable: true,
            filename: "rss.xml".into(),
            format: FeedFormat::Rss,
            precision: SortPrecision::Second,
        }
    }
}
