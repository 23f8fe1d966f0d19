//! `[site]` section configuration.
//!
//! Site-level metadata shared by every language feed.
//!
//! # Example
//!
//! ```toml
//! [site]
//! title = "My Blog"
//! description = "A personal blog"
//! url = "https://myblog.com/"
//! author = "Alice"
//! email = "alice@myblog.com"
//! ```

use crate::config::{ConfigDiagnostics, FieldPath};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteInfoConfig {
    /// Site title (channel title of every feed).
    pub title: String,

    /// Site description (channel description of every feed).
    pub description: String,

    /// Site base URL; feed item links are resolved against it.
    pub url: Option<String>,

    /// Default author name.
    pub author: String,

    /// Author email, used for the RSS `author` element.
    pub email: String,
}

impl SiteInfoConfig {
    pub const TITLE: FieldPath = FieldPath::new("site.title");
    pub const URL: FieldPath = FieldPath::new("site.url");

    /// Base URL with a guaranteed trailing slash, or empty when unset.
    pub fn base_url(&self) -> String {
        match self.url.as_deref().map(str::trim) {
            Some(url) if !url.is_empty() => format!("{}/", url.trim_end_matches('/')),
            _ => String::new(),
        }
    }

    /// Validate site configuration.
    ///
    /// # Checks
    /// - If `feed_enabled`, `url` must be set
    /// - `url` must be a valid http(s) URL with a host
    /// - empty `title` is reported as a hint
    pub fn validate(&self, feed_enabled: bool, diag: &mut ConfigDiagnostics) {
        if self.title.trim().is_empty() {
            diag.hint(Self::TITLE, "site title is empty");
        }

        if feed_enabled && self.url.is_none() {
            diag.error_with_hint(
                Self::URL,
                format!("feeds are enabled but {} is not configured", Self::URL),
                format!("set {}, e.g.: \"https://example.com\"", Self::URL),
            );
        }

        if let Some(url_str) = &self.url {
            match url::Url::parse(url_str) {
                Ok(parsed) => {
                    if !matches!(parsed.scheme(), "http" | "https") {
                        diag.error_with_hint(
                            Self::URL,
                            format!(
                                "scheme '{}' not supported, must be http or https",
                                parsed.scheme()
                            ),
                            "use format like https://example.com",
                        );
                    }
                    if parsed.host_str().is_none() {
                        diag.error_with_hint(
                            Self::URL,
                            "URL must have a valid host",
                            "use format like https://example.com",
                        );
                    }
                }
                Err(e) => {
                    diag.error_with_hint(
                        Self::URL,
                        format!("invalid URL: {e}"),
                        "use format like https://example.com",
                    );
                }
            }
        }
    }
}
