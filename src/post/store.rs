//! Content store: typed posts grouped by collection.
//!
//! Collections are directories under the content root. Every Markdown file
//! in a collection is parsed into a [`Post`]; files that fail the schema are
//! reported, never silently dropped.

use super::{ContentError, Post, parse_post};
use crate::{debug, logger::ProgressLine, utils::path::relative_to};
use jwalk::WalkDir;
use rayon::prelude::*;
use rustc_hash::FxHashMap;
use std::path::{Path, PathBuf};

/// File extensions recognized as posts.
const POST_EXTENSIONS: [&str; 3] = ["md", "markdown", "mdx"];

/// Posts keyed by collection name.
#[derive(Debug, Default)]
pub struct ContentStore {
    collections: FxHashMap<String, Vec<Post>>,
}

/// Result of loading one collection: valid posts plus every invalid file.
#[derive(Debug, Default)]
pub struct LoadedCollection {
    pub posts: Vec<Post>,
    pub errors: Vec<ContentError>,
}

impl ContentStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the posts of a collection.
    pub fn insert_collection(&mut self, name: impl Into<String>, posts: Vec<Post>) {
        self.collections.insert(name.into(), posts);
    }

    /// All posts of a collection, in load order (empty if unknown).
    pub fn collection(&self, name: &str) -> &[Post] {
        self.collections.get(name).map_or(&[], Vec::as_slice)
    }

    /// Posts of a collection matching `predicate`, in load order.
    pub fn get_collection<F>(&self, name: &str, predicate: F) -> Vec<&Post>
    where
        F: Fn(&Post) -> bool,
    {
        self.collection(name)
            .iter()
            .filter(|&post| predicate(post))
            .collect()
    }

    #[cfg(test)]
    pub fn len(&self, name: &str) -> usize {
        self.collection(name).len()
    }
}

/// Post files under `dir`, sorted by path so load order is deterministic.
pub fn scan_collection(dir: &Path) -> Vec<PathBuf> {
    if !dir.is_dir() {
        return Vec::new();
    }

    let mut files: Vec<PathBuf> = WalkDir::new(dir)
        .skip_hidden(true)
        .into_iter()
        .filter_map(Result::ok)
        .filter(|entry| entry.file_type().is_file())
        .map(|entry| entry.path())
        .filter(|path| is_post_file(path))
        .collect();
    files.sort();
    files
}

fn is_post_file(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| POST_EXTENSIONS.contains(&ext))
}

/// Read and parse every post file of the collection at `dir`.
///
/// Parsing runs in parallel; the result keeps path order.
pub fn load_collection(dir: &Path) -> LoadedCollection {
    let files = scan_collection(dir);
    debug!("load"; "{} post files in {}", files.len(), dir.display());

    if files.is_empty() {
        return LoadedCollection::default();
    }

    let progress = ProgressLine::new("load", &[("posts", files.len())]);
    let results: Vec<Result<Post, ContentError>> = files
        .par_iter()
        .map(|path| {
            let result = load_post(path, dir);
            progress.inc("posts");
            result
        })
        .collect();
    progress.finish();

    let mut loaded = LoadedCollection::default();
    for result in results {
        match result {
            Ok(post) => loaded.posts.push(post),
            Err(err) => loaded.errors.push(err),
        }
    }
    loaded
}

fn load_post(path: &Path, root: &Path) -> Result<Post, ContentError> {
    let content =
        std::fs::read_to_string(path).map_err(|err| ContentError::Io(path.to_path_buf(), err))?;
    parse_post(&content).map_err(|err| ContentError::Invalid {
        path: relative_to(path, root).to_path_buf(),
        inner: Box::new(err),
    })
}
