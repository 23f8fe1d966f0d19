//! URL slug configuration.

use serde::{Deserialize, Serialize};

/// Slug generation mode for post links.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum SlugMode {
    /// Transliterate Unicode to ASCII, lowercase, collapse separators.
    Full,
    /// Lowercase, drop punctuation, preserve Unicode letters (default).
    #[default]
    Safe,
    /// Like `safe`, after transliterating Unicode to ASCII.
    Ascii,
    /// No modification; preserve original text.
    No,
}

/// Separator character for slugs.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum SlugSeparator {
    /// Dash separator (`-`) (default).
    #[default]
    Dash,
    /// Underscore separator (`_`).
    Underscore,
}

impl SlugSeparator {
    pub const fn as_char(self) -> char {
        match self {
            Self::Dash => '-',
            Self::Underscore => '_',
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct SlugConfig {
    pub mode: SlugMode,
    pub separator: SlugSeparator,
}
