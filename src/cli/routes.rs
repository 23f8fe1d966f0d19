//! Routes command: list the static feed paths.

use crate::{config::SiteConfig, debug, generator::routes::feed_routes};
use anyhow::Result;

/// Print one feed path per line, in language order.
pub fn list_routes(config: &SiteConfig) -> Result<()> {
    let base = config.site.base_url();
    for route in feed_routes(config) {
        debug!("routes"; "{} -> {}", route.language.label(), route.output_path(&config.build.output).display());
        if base.is_empty() {
            println!("{}", route.path);
        } else {
            println!("{}\t{}{}", route.path, base, route.relative());
        }
    }
    Ok(())
}
