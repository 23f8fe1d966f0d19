//! URL slug derivation for posts.
//!
//! A post's slug comes from `postSlug` when present, otherwise from its
//! title. How text is turned into a slug depends on [`SlugMode`].

use crate::config::{SlugConfig, SlugMode};
use crate::post::Post;
use deunicode::deunicode;
use regex::Regex;
use std::sync::LazyLock;

/// Slug for a post: `postSlug` if set, otherwise the title.
pub fn slugify_post(post: &Post, config: &SlugConfig) -> String {
    let source = post.post_slug.as_deref().unwrap_or(&post.title);
    slugify(source, config)
}

/// Slugify arbitrary text according to `config`.
pub fn slugify(text: &str, config: &SlugConfig) -> String {
    let sep = config.separator.as_char();
    match config.mode {
        SlugMode::Safe => slugify_safe(text, sep),
        SlugMode::Ascii => slugify_safe(&deunicode(text), sep),
        SlugMode::Full => slugify_full(text, sep),
        SlugMode::No => text.to_string(),
    }
}

/// Lowercase, keep Unicode letters and digits, turn whitespace into the
/// separator and drop punctuation. Separators are not collapsed.
fn slugify_safe(text: &str, sep: char) -> String {
    let mut slug = String::with_capacity(text.len());
    for c in text.trim().chars() {
        if c.is_alphanumeric() {
            slug.extend(c.to_lowercase());
        } else if c.is_whitespace() {
            slug.push(sep);
        } else if c == '-' || c == '_' {
            slug.push(c);
        }
    }
    slug
}

/// Transliterate to ASCII, lowercase, collapse every non-alphanumeric run
/// into one separator.
fn slugify_full(text: &str, sep: char) -> String {
    static RE_NON_ALNUM: LazyLock<Regex> =
        LazyLock::new(|| Regex::new(r"[^a-z0-9]+").expect("valid regex"));

    let ascii = deunicode(text).to_ascii_lowercase();
    let mut buf = [0u8; 4];
    let sep = &*sep.encode_utf8(&mut buf);
    RE_NON_ALNUM
        .replace_all(&ascii, sep)
        .trim_matches(|c: char| sep.contains(c))
        .to_string()
}
