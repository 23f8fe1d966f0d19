//! Command-line interface definitions.

use crate::i18n::Language;
use clap::{ColorChoice, Parser, Subcommand};
use std::path::PathBuf;

/// Multilingual blog feed generator
#[derive(Parser, Debug, Clone)]
#[command(version, about, long_about = None, arg_required_else_help = true)]
pub struct Cli {
    /// Control colored output (auto, always, never)
    #[arg(long, global = true, default_value = "auto")]
    pub color: ColorChoice,

    /// Output directory path (relative to project root)
    #[arg(short, long, value_hint = clap::ValueHint::DirPath)]
    pub output: Option<PathBuf>,

    /// Content directory path (relative to project root)
    #[arg(short, long, value_hint = clap::ValueHint::DirPath)]
    pub content: Option<PathBuf>,

    /// Config file path (default: polyblog.toml)
    #[arg(short = 'C', long, default_value = "polyblog.toml", value_hint = clap::ValueHint::FilePath)]
    pub config: PathBuf,

    /// Enable verbose output for debugging
    #[arg(short = 'v', long, global = true)]
    pub verbose: bool,

    /// subcommands
    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands
#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Load every post and write one feed per language
    #[command(visible_alias = "b")]
    Build {
        #[command(flatten)]
        build_args: BuildArgs,
    },

    /// Print the posts of a language, most recent first, as JSON
    #[command(visible_alias = "q")]
    Query {
        #[command(flatten)]
        args: QueryArgs,
    },

    /// Check every post against the frontmatter schema
    #[command(visible_alias = "v")]
    Validate,

    /// List the static feed routes
    #[command(visible_alias = "r")]
    Routes,

    /// Render the language picker for a page
    Picker {
        /// Language of the current page
        #[arg(short, long)]
        lang: Language,

        /// Page slug, e.g. `posts/hello-world`
        #[arg(short, long)]
        slug: String,

        /// Print the options as JSON instead of HTML
        #[arg(long)]
        json: bool,
    },
}

/// Build command arguments.
#[derive(clap::Args, Debug, Clone, Default)]
pub struct BuildArgs {
    /// Minify the XML output
    #[arg(short, long, action = clap::ArgAction::Set, num_args = 0..=1, default_missing_value = "true", require_equals = false)]
    pub minify: Option<bool>,

    /// Override site URL for deployment.
    ///
    /// Feed links are resolved against this URL, which keeps
    /// polyblog.toml untouched when the production URL differs.
    ///
    /// Example:
    ///   polyblog build --site-url "https://example.github.io/blog"
    #[arg(short = 'U', long = "site-url", value_hint = clap::ValueHint::Url)]
    pub site_url: Option<String>,

    /// Leave draft posts out of the feeds (default: false, drafts are included)
    #[arg(short = 'E', long)]
    pub skip_drafts: bool,
}

/// Query command arguments.
#[derive(clap::Args, Debug, Clone)]
pub struct QueryArgs {
    /// Language code to query
    #[arg(short, long)]
    pub lang: String,

    /// Include draft posts in results
    #[arg(short, long)]
    pub drafts: bool,

    /// Only featured posts
    #[arg(short, long)]
    pub featured: bool,

    /// Pretty-print JSON output
    #[arg(short, long)]
    pub pretty: bool,

    /// Write output to file instead of stdout
    #[arg(short, long, value_hint = clap::ValueHint::FilePath)]
    pub output: Option<PathBuf>,
}
