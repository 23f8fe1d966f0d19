//! Configuration section definitions.
//!
//! Each module corresponds to a section in `polyblog.toml`:
//!
//! | Module  | TOML Section | Purpose                          |
//! |---------|--------------|----------------------------------|
//! | `build` | `[build]`    | Paths, feed and slug settings    |
//! | `site`  | `[site]`     | Site title, description, url     |

pub mod build;
mod site;

pub use build::{BuildSectionConfig, FeedFormat, SlugConfig, SlugMode};
pub use site::SiteInfoConfig;
