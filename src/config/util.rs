//! Configuration utility functions.

use std::path::{Path, PathBuf};

/// Find config file by searching upward from the current directory.
///
/// ```text
/// /home/user/site/content/blog/  ← cwd
/// /home/user/site/polyblog.toml  ← found!
/// ```
pub fn find_config_file(config_name: &Path) -> Option<PathBuf> {
    let cwd = std::env::current_dir().ok()?;
    find_config_file_from(&cwd, config_name)
}

/// Walk up from `start` until a directory contains `config_name`.
///
/// Absolute names are returned as-is when they exist.
pub fn find_config_file_from(start: &Path, config_name: &Path) -> Option<PathBuf> {
    if config_name.is_absolute() {
        return config_name.exists().then(|| config_name.to_path_buf());
    }

    let mut current = start;
    loop {
        let candidate = current.join(config_name);
        if candidate.exists() {
            return Some(candidate);
        }

        match current.parent() {
            Some(parent) => current = parent,
            None => return None, // Reached filesystem root
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn test_find_config_in_parent() {
        let dir = tempfile::tempdir().unwrap();
        let nested = dir.path().join("content/blog");
        fs::create_dir_all(&nested).unwrap();
        fs::write(dir.path().join("polyblog.toml"), "").unwrap();

        let found = find_config_file_from(&nested, Path::new("polyblog.toml")).unwrap();
        assert_eq!(found, dir.path().join("polyblog.toml"));
    }

    #[test]
    fn test_find_config_missing() {
        let dir = tempfile::tempdir().unwrap();
        let found = find_config_file_from(dir.path(), Path::new("polyblog-missing-1f3a.toml"));
        assert!(found.is_none());
    }

    #[test]
    fn test_find_config_absolute() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("site.toml");
        fs::write(&path, "").unwrap();
        assert_eq!(find_config_file_from(Path::new("/"), &path), Some(path));
    }
}
