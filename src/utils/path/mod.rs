//! Path utilities.
//!
//! - [`fs`]: Filesystem path normalization (`normalize_path`, `relative_to`)

pub mod fs;

pub use fs::{normalize_path, relative_to};
