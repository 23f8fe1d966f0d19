//! Site configuration management for `polyblog.toml`.
//!
//! # Module Structure
//!
//! ```text
//! config/
//! ├── section/       # Configuration section definitions
//! │   ├── build/     # [build], [build.feed], [build.slug]
//! │   └── site       # [site]
//! ├── types/         # ConfigError, ConfigDiagnostics, FieldPath
//! ├── util.rs        # config file discovery
//! └── mod.rs         # SiteConfig (this file)
//! ```

pub mod section;
pub mod types;
mod util;

use util::find_config_file;

pub use section::{BuildSectionConfig, FeedFormat, SiteInfoConfig, SlugConfig, SlugMode};
pub use types::{ConfigDiagnostics, ConfigError, FieldPath};

use crate::{
    cli::{BuildArgs, Cli, Commands},
    log,
    utils::path::normalize_path,
};
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::{
    fs,
    path::{Path, PathBuf},
};

/// Name of the collection holding blog posts.
pub const BLOG_COLLECTION: &str = "blog";

// ============================================================================
// root configuration
// ============================================================================

/// Root configuration structure representing polyblog.toml
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SiteConfig {
    /// Absolute path to the config file (internal use only)
    #[serde(skip)]
    pub config_path: PathBuf,

    /// Project root directory - parent of config file (internal use only)
    #[serde(skip)]
    pub root: PathBuf,

    /// Site metadata
    #[serde(default)]
    pub site: SiteInfoConfig,

    /// Build settings
    #[serde(default)]
    pub build: BuildSectionConfig,
}

impl SiteConfig {
    /// Load configuration for the given CLI invocation.
    ///
    /// Searches upward from cwd to find the config file. The project root is
    /// the config file's parent directory.
    pub fn load(cli: &Cli) -> Result<Self> {
        let config_path =
            find_config_file(&cli.config).ok_or_else(|| ConfigError::NotFound(cli.config.clone()))?;

        let mut config = Self::from_path(&config_path)?;
        config.config_path = normalize_path(&config_path);
        let root = config
            .config_path
            .parent()
            .map(Path::to_path_buf)
            .unwrap_or_default();

        config.apply_cli(cli);
        config.normalize_paths(&root);
        config.validate(&cli.command)?;
        Ok(config)
    }

    /// Parse configuration from TOML string
    #[cfg(test)]
    pub fn from_str(content: &str) -> Result<Self> {
        let config: Self = toml::from_str(content).map_err(ConfigError::from)?;
        Ok(config)
    }

    /// Load configuration from file path, warning about unknown fields.
    fn from_path(path: &Path) -> Result<Self> {
        let content =
            fs::read_to_string(path).map_err(|err| ConfigError::Io(path.to_path_buf(), err))?;

        let (config, ignored) = Self::parse_with_ignored(&content)
            .with_context(|| format!("failed to parse {}", path.display()))?;

        if !ignored.is_empty() {
            Self::print_unknown_fields_warning(&ignored, path);
        }

        Ok(config)
    }

    /// Parse TOML content, collecting any unknown fields.
    fn parse_with_ignored(content: &str) -> Result<(Self, Vec<String>), ConfigError> {
        let mut ignored = Vec::new();
        let deserializer = toml::Deserializer::new(content);
        let config = serde_ignored::deserialize(deserializer, |path: serde_ignored::Path| {
            ignored.push(path.to_string());
        })?;
        Ok((config, ignored))
    }

    fn print_unknown_fields_warning(fields: &[String], path: &Path) {
        let display_path = path
            .file_name()
            .map(|n| n.to_string_lossy())
            .unwrap_or_else(|| path.to_string_lossy());
        log!("warning"; "unknown fields in {}, ignoring: {}", display_path, fields.join(", "));
    }

    /// Directory holding the `blog` collection.
    pub fn collection_dir(&self, name: &str) -> PathBuf {
        self.build.content.join(name)
    }

    // ========================================================================
    // cli configuration updates
    // ========================================================================

    fn apply_cli(&mut self, cli: &Cli) {
        Self::update_option(&mut self.build.content, cli.content.as_ref());
        Self::update_option(&mut self.build.output, cli.output.as_ref());

        if let Commands::Build { build_args } = &cli.command {
            self.apply_build_args(build_args);
        }
    }

    fn apply_build_args(&mut self, args: &BuildArgs) {
        Self::update_option(&mut self.build.minify, args.minify.as_ref());
        if args.skip_drafts {
            self.build.skip_drafts = true;
        }
        if let Some(ref url) = args.site_url {
            self.site.url = Some(url.clone());
        }
    }

    /// Update config option if CLI value is provided.
    fn update_option<T: Clone>(config_option: &mut T, cli_option: Option<&T>) {
        if let Some(option) = cli_option {
            *config_option = option.clone();
        }
    }

    /// Resolve content and output directories against the project root.
    fn normalize_paths(&mut self, root: &Path) {
        let root = normalize_path(root);
        self.build.content = normalize_path(&root.join(&self.build.content));
        self.build.output = normalize_path(&root.join(&self.build.output));
        self.root = root;
    }

    // ========================================================================
    // validation
    // ========================================================================

    /// Validate configuration for the current command.
    ///
    /// Collects all validation errors and returns them at once.
    pub fn validate(&self, command: &Commands) -> Result<()> {
        let mut diag = ConfigDiagnostics::new();

        let needs_feed = matches!(command, Commands::Build { .. }) && self.build.feed.enable;
        self.site.validate(needs_feed, &mut diag);
        self.build.validate(&mut diag);

        diag.into_result()
            .map_err(|e| ConfigError::Diagnostics(e).into())
    }
}

// ============================================================================
// Test Helpers (available to all modules via `use crate::config::test_*`)
// ============================================================================

/// Parse config with minimal required `[site]` fields.
/// Panics if there are unknown fields (to catch config typos in tests).
#[cfg(test)]
pub fn test_parse_config(extra: &str) -> SiteConfig {
    let config = format!("[site]\ntitle = \"Test\"\ndescription = \"Test\"\n{extra}");
    let (parsed, ignored) = SiteConfig::parse_with_ignored(&config).unwrap();
    assert!(
        ignored.is_empty(),
        "test config has unknown fields: {:?}",
        ignored
    );
    parsed
}

// ============================================================================
// tests
// ============================================================================
