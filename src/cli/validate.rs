//! Validate command: check every post against the frontmatter schema.

use anyhow::{Result, bail};
use rustc_hash::FxHashMap;

use super::common::{load_blog, report_errors};
use crate::config::{SiteConfig, SlugConfig};
use crate::i18n::Language;
use crate::log;
use crate::post::Post;
use crate::utils::{plural_count, slug::slugify_post};

/// Validate all posts, reporting every invalid file at once.
///
/// Posts sharing a link within one language are reported as warnings.
pub fn validate_site(config: &SiteConfig) -> Result<()> {
    let loaded = load_blog(config);
    let total = loaded.posts.len() + loaded.errors.len();
    log!("validate"; "checking {}", plural_count(total, "post"));

    for (lang, link, count) in duplicate_links(&loaded.posts, &config.build.slug) {
        log!("warning"; "{} posts in `{}` share the link {}", count, lang, link);
    }

    if !loaded.errors.is_empty() {
        report_errors(&loaded.errors);
        bail!(
            "{} of {} failed validation",
            plural_count(loaded.errors.len(), "post"),
            total
        );
    }

    log!("validate"; "all posts valid");
    Ok(())
}

/// `(language, link, count)` for every link used by more than one post.
fn duplicate_links(posts: &[Post], slug: &SlugConfig) -> Vec<(Language, String, usize)> {
    let mut counts: FxHashMap<(Language, String), usize> = FxHashMap::default();
    for post in posts {
        let link = format!("posts/{}", slugify_post(post, slug));
        *counts.entry((post.language, link)).or_default() += 1;
    }

    let mut duplicates: Vec<_> = counts
        .into_iter()
        .filter(|(_, count)| *count > 1)
        .map(|((lang, link), count)| (lang, link, count))
        .collect();
    duplicates.sort();
    duplicates
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::test_parse_config;
    use crate::post::test_post;
    use std::fs;

    #[test]
    fn test_duplicate_links_per_language() {
        let posts = vec![
            test_post("Hello", "en", "2024-01-01"),
            test_post("hello", "en", "2024-01-02"),
            test_post("Hello", "fr", "2024-01-03"),
        ];
        let dups = duplicate_links(&posts, &SlugConfig::default());
        assert_eq!(dups, vec![(Language::En, "posts/hello".to_string(), 2)]);
    }

    #[test]
    fn test_validate_site_fails_on_invalid() {
        let dir = tempfile::tempdir().unwrap();
        let blog = dir.path().join("blog");
        fs::create_dir_all(&blog).unwrap();
        fs::write(
            blog.join("ok.md"),
            "---\ntitle: A\npubDatetime: 2024-01-01\nlanguage: en\ndescription: d\n---\n",
        )
        .unwrap();

        let mut config = test_parse_config("");
        config.build.content = dir.path().to_path_buf();
        assert!(validate_site(&config).is_ok());

        fs::write(blog.join("bad.md"), "---\ntitle: B\nlanguage: xx\n---\n").unwrap();
        let err = validate_site(&config).unwrap_err();
        assert!(err.to_string().contains("1 post of 2"));
    }
}
