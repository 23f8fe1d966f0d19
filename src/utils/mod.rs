//! Shared helpers.

pub mod date;
pub mod html;
pub mod path;
pub mod plural;
pub mod slug;

pub use plural::plural_count;
