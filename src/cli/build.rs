//! Build command: load posts, then write every language feed.

use super::common::load_store;
use crate::{
    config::{BLOG_COLLECTION, SiteConfig},
    debug,
    generator::feed::write_feeds,
    log,
    utils::plural_count,
};
use anyhow::{Context, Result};
use std::{fs, path::PathBuf, time::Instant};

/// Run a full build. Returns the written feed paths.
pub fn build_site(config: &SiteConfig) -> Result<Vec<PathBuf>> {
    let started = Instant::now();
    debug!("build"; "content: {}", config.build.content.display());
    debug!("build"; "output: {}", config.build.output.display());

    let store = load_store(config)?;
    let posts = store.collection(BLOG_COLLECTION);
    log!("build"; "loaded {}", plural_count(posts.len(), "post"));

    fs::create_dir_all(&config.build.output)
        .with_context(|| format!("failed to create {}", config.build.output.display()))?;

    if !config.build.feed.enable {
        log!("build"; "feed generation disabled");
        return Ok(Vec::new());
    }

    let written = write_feeds(posts, config)?;
    log!("build"; "done in {:.2?}", started.elapsed());
    Ok(written)
}
