//! Blog posts: schema, parsing, selection and ordering.

mod frontmatter;
mod meta;
mod select;
mod sort;
mod store;

use std::path::PathBuf;
use thiserror::Error;

pub use frontmatter::parse_post;
pub use meta::Post;
pub use select::select_by_language;
pub use sort::{SortPrecision, sort_by_recency, sort_by_recency_with};
pub use store::{ContentStore, LoadedCollection, load_collection};

/// Errors raised while reading post files.
#[derive(Debug, Error)]
pub enum ContentError {
    #[error("failed to read {}: {}", .0.display(), .1)]
    Io(PathBuf, #[source] std::io::Error),

    #[error("missing frontmatter block (expected `---` or `+++` fence)")]
    MissingFrontmatter,

    #[error("invalid YAML frontmatter: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("invalid TOML frontmatter: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("frontmatter does not match post schema: {0}")]
    Schema(#[from] serde_json::Error),

    #[error("{}: {inner}", .path.display())]
    Invalid {
        path: PathBuf,
        inner: Box<ContentError>,
    },
}

#[cfg(test)]
pub fn test_post(title: &str, lang: &str, date: &str) -> Post {
    use crate::i18n::Language;
    use crate::utils::date::PubDatetime;
    use meta::DEFAULT_TAG;

    Post {
        author: None,
        pub_datetime: PubDatetime::parse(date).unwrap(),
        title: title.to_string(),
        language: Language::from_code(lang).unwrap(),
        post_slug: None,
        featured: None,
        draft: None,
        tags: vec![DEFAULT_TAG.to_string()],
        og_image: None,
        description: format!("about {title}"),
    }
}
