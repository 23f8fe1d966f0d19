//! Shared helpers for commands that read posts.

use crate::{
    config::{BLOG_COLLECTION, SiteConfig},
    log,
    post::{ContentError, ContentStore, LoadedCollection, load_collection},
    utils::plural_count,
};
use anyhow::{Result, bail};

/// Load the blog collection from the configured content directory.
pub fn load_blog(config: &SiteConfig) -> LoadedCollection {
    let dir = config.collection_dir(BLOG_COLLECTION);
    let loaded = load_collection(&dir);
    if loaded.posts.is_empty() && loaded.errors.is_empty() {
        log!("warning"; "no posts found in {}", dir.display());
    }
    loaded
}

/// Print every content error with an `error` prefix.
pub fn report_errors(errors: &[ContentError]) {
    for err in errors {
        log!("error"; "{}", err);
    }
}

/// Load the blog collection into a store, failing if any post is invalid.
pub fn load_store(config: &SiteConfig) -> Result<ContentStore> {
    let LoadedCollection { posts, errors } = load_blog(config);

    if !errors.is_empty() {
        report_errors(&errors);
        bail!("{} failed schema validation", plural_count(errors.len(), "post"));
    }

    let mut store = ContentStore::new();
    store.insert_collection(BLOG_COLLECTION, posts);
    Ok(store)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::test_parse_config;
    use std::fs;

    fn config_with_posts(posts: &[(&str, &str)]) -> (tempfile::TempDir, SiteConfig) {
        let dir = tempfile::tempdir().unwrap();
        let blog = dir.path().join("blog");
        fs::create_dir_all(&blog).unwrap();
        for (name, content) in posts {
            fs::write(blog.join(name), content).unwrap();
        }
        let mut config = test_parse_config("");
        config.build.content = dir.path().to_path_buf();
        (dir, config)
    }

    #[test]
    fn test_load_store_valid() {
        let (_dir, config) = config_with_posts(&[(
            "a.md",
            "---\ntitle: A\npubDatetime: 2024-01-01\nlanguage: en\ndescription: d\n---\n",
        )]);
        let store = load_store(&config).unwrap();
        assert_eq!(store.len(BLOG_COLLECTION), 1);
    }

    #[test]
    fn test_load_store_fails_on_invalid_post() {
        let (_dir, config) = config_with_posts(&[("bad.md", "---\ntitle: A\n---\n")]);
        let err = load_store(&config).unwrap_err();
        assert!(err.to_string().contains("1 post failed"));
    }
}
