//! Static feed routes, one per supported language.

use crate::config::SiteConfig;
use crate::i18n::Language;
use serde::Serialize;
use std::path::{Path, PathBuf};

/// A feed served at `/{lang}/{filename}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FeedRoute {
    pub language: Language,
    /// URL path, always starting with `/`.
    pub path: String,
}

impl FeedRoute {
    pub fn new(language: Language, filename: &Path) -> Self {
        let filename = filename.to_string_lossy();
        Self {
            language,
            path: format!("/{}/{}", language.code(), filename.trim_start_matches('/')),
        }
    }

    /// Path relative to the site root, without the leading slash.
    pub fn relative(&self) -> &str {
        self.path.trim_start_matches('/')
    }

    /// Where the feed lands inside `output`.
    pub fn output_path(&self, output: &Path) -> PathBuf {
        output.join(self.relative())
    }
}

/// Every feed route, in language declaration order.
pub fn feed_routes(config: &SiteConfig) -> Vec<FeedRoute> {
    Language::ALL
        .into_iter()
        .map(|lang| FeedRoute::new(lang, &config.build.feed.filename))
        .collect()
}
