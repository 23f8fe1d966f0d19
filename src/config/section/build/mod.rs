//! `[build]` section configuration.
//!
//! Contains build paths, minification, and sub-configurations.
//!
//! # Example
//!
//! ```toml
//! [build]
//! content = "content"         # Content root, posts live in content/blog (relative to site root)
//! output = "dist"             # Output directory for generated feeds (relative to site root)
//! minify = true               # Minify XML output
//! skip_drafts = false         # Leave `draft: true` posts out of feeds
//!
//! [build.feed]
//! enable = true               # Generate one feed per language
//! format = "rss"              # rss | atom
//! filename = "rss.xml"        # Written to {output}/{lang}/{filename}
//! precision = "second"        # Sort precision: second | millisecond
//!
//! [build.slug]
//! mode = "safe"               # full | safe | ascii | no
//! separator = "dash"          # dash | underscore
//! ```
//!
//! See submodules for detailed options: [`feed`], [`slug`].

mod feed;
mod slug;

pub use feed::{FeedConfig, FeedFormat};
pub use slug::{SlugConfig, SlugMode};

use crate::config::{ConfigDiagnostics, FieldPath};
use crate::post::SortPrecision;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct BuildSectionConfig {
    /// Content root directory (the `blog` collection is `{content}/blog`).
    pub content: PathBuf,

    /// Build output directory.
    pub output: PathBuf,

    /// Minify XML output.
    pub minify: bool,

    /// Exclude draft posts from feeds.
    pub skip_drafts: bool,

    /// Feed generation settings.
    pub feed: FeedConfig,

    /// URL slugification settings.
    pub slug: SlugConfig,
}

impl Default for BuildSectionConfig {
    fn default() -> Self {
        Self {
            content: "content".into(),
            output: "dist".into(),
            minify: true,
            skip_drafts: false,
            feed: FeedConfig::default(),
            slug: SlugConfig::default(),
        }
    }
}

impl BuildSectionConfig {
    pub const CONTENT: FieldPath = FieldPath::new("build.content");
    pub const FEED_FILENAME: FieldPath = FieldPath::new("build.feed.filename");

    /// Sort precision used by feed generation.
    pub fn sort_precision(&self) -> SortPrecision {
        self.feed.precision
    }

    /// Validate build configuration.
    ///
    /// A missing content directory is only a hint: the build then produces
    /// empty feeds.
    pub fn validate(&self, diag: &mut ConfigDiagnostics) {
        if !self.content.exists() {
            diag.hint(
                Self::CONTENT,
                format!("directory '{}' not found, feeds will be empty", self.content.display()),
            );
        }

        let filename = self.feed.filename.as_os_str();
        if filename.is_empty() || self.feed.filename.components().count() != 1 {
            diag.error_with_hint(
                Self::FEED_FILENAME,
                format!("'{}' is not a plain file name", self.feed.filename.display()),
                "use a name like \"rss.xml\"",
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::test_parse_config;

    #[test]
    fn test_defaults() {
        let config = test_parse_config("");
        assert_eq!(config.build.content, PathBuf::from("content"));
        assert_eq!(config.build.output, PathBuf::from("dist"));
        assert!(config.build.minify);
        assert!(!config.build.skip_drafts);
        assert_eq!(config.build.sort_precision(), SortPrecision::Second);
    }

    #[test]
    fn test_custom_paths() {
        let config = test_parse_config(
            "[build]\ncontent = \"src/content\"\noutput = \"public\"\nminify = false\nskip_drafts = true",
        );
        assert_eq!(config.build.content, PathBuf::from("src/content"));
        assert_eq!(config.build.output, PathBuf::from("public"));
        assert!(!config.build.minify);
        assert!(config.build.skip_drafts);
    }

    #[test]
    fn test_validate_rejects_nested_filename() {
        let mut config = test_parse_config("[build.feed]\nfilename = \"feeds/rss.xml\"");
        config.build.content = std::env::temp_dir();
        let mut diag = ConfigDiagnostics::new();
        config.build.validate(&mut diag);
        assert_eq!(diag.len(), 1);
        assert_eq!(diag.errors()[0].field, BuildSectionConfig::FEED_FILENAME);
    }
}
