//! polyblog - per-language feeds for a multilingual blog.

mod cli;
mod config;
mod generator;
mod i18n;
mod logger;
mod post;
mod utils;

use anyhow::Result;
use clap::{ColorChoice, Parser};
use cli::{Cli, Commands};
use config::SiteConfig;

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Set global color override based on CLI option
    match cli.color {
        ColorChoice::Always => owo_colors::set_override(true),
        ColorChoice::Never => owo_colors::set_override(false),
        ColorChoice::Auto => {} // owo-colors auto-detects TTY
    }
    logger::set_verbose(cli.verbose);

    if let Commands::Picker { lang, slug, json } = &cli.command {
        return cli::picker::run_picker(*lang, slug, *json);
    }

    let config = SiteConfig::load(&cli)?;
    debug!("config"; "loaded {} (root: {})", config.config_path.display(), config.root.display());

    match &cli.command {
        Commands::Build { .. } => cli::build::build_site(&config).map(|_| ()),
        Commands::Query { args } => cli::query::run_query(args, &config),
        Commands::Validate => cli::validate::validate_site(&config),
        Commands::Routes => cli::routes::list_routes(&config),
        Commands::Picker { .. } => Ok(()),
    }
}
