//! Post metadata from frontmatter.

use crate::i18n::Language;
use crate::utils::date::PubDatetime;
use serde::{Deserialize, Serialize};

/// Tag assigned when a post declares none.
pub const DEFAULT_TAG: &str = "others";

fn default_tags() -> Vec<String> {
    vec![DEFAULT_TAG.to_string()]
}

/// A blog post as declared in frontmatter.
///
/// The schema is strict: unknown keys are rejected, and so are posts
/// missing `pubDatetime`, `title`, `language` or `description`.
///
/// | Key           | Type           | Required | Default      |
/// |---------------|----------------|----------|--------------|
/// | `author`      | `String`       | no       |              |
/// | `pubDatetime` | `PubDatetime`  | yes      |              |
/// | `title`       | `String`       | yes      |              |
/// | `language`    | `Language`     | yes      |              |
/// | `postSlug`    | `String`       | no       | from title   |
/// | `featured`    | `bool`         | no       |              |
/// | `draft`       | `bool`         | no       |              |
/// | `tags`        | `Vec<String>`  | no       | `["others"]` |
/// | `ogImage`     | `String`       | no       |              |
/// | `description` | `String`       | yes      |              |
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct Post {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub author: Option<String>,
    pub pub_datetime: PubDatetime,
    pub title: String,
    pub language: Language,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub post_slug: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub featured: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub draft: Option<bool>,
    #[serde(default = "default_tags")]
    pub tags: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub og_image: Option<String>,
    pub description: String,
}

impl Post {
    #[inline]
    pub fn is_draft(&self) -> bool {
        self.draft.unwrap_or(false)
    }

    #[inline]
    pub fn is_featured(&self) -> bool {
        self.featured.unwrap_or(false)
    }
}
