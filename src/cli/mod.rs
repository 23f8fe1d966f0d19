//! Command-line interface module.

mod args;
pub mod build;
pub mod common;
pub mod picker;
pub mod query;
pub mod routes;
pub mod validate;

pub use args::{BuildArgs, Cli, Commands};
