//! Supported languages.
//!
//! The set of languages is closed: every post declares one of them, every
//! feed route is derived from [`Language::ALL`], and the picker lists them
//! in declaration order.

mod picker;

pub use picker::LanguagePicker;

use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};
use thiserror::Error;

/// A supported content language.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    En,
    Fr,
    Es,
    De,
}

/// Returned when a code is not one of the supported languages.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unsupported language code `{0}` (expected one of: {codes})", codes = Language::codes().join(", "))]
pub struct UnknownLanguage(pub String);

impl Language {
    /// All languages, in declaration order.
    pub const ALL: [Language; 4] = [Self::En, Self::Fr, Self::Es, Self::De];

    /// Language code used in URLs and frontmatter.
    pub const fn code(self) -> &'static str {
        match self {
            Self::En => "en",
            Self::Fr => "fr",
            Self::Es => "es",
            Self::De => "de",
        }
    }

    /// Human readable label, written in the language itself.
    pub const fn label(self) -> &'static str {
        match self {
            Self::En => "English",
            Self::Fr => "Français",
            Self::Es => "Español",
            Self::De => "Deutsch",
        }
    }

    /// Look up a language by code.
    pub fn from_code(code: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|lang| lang.code() == code)
    }

    pub fn codes() -> Vec<&'static str> {
        Self::ALL.iter().map(|lang| lang.code()).collect()
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl AsRef<str> for Language {
    fn as_ref(&self) -> &str {
        self.code()
    }
}

impl FromStr for Language {
    type Err = UnknownLanguage;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_code(s).ok_or_else(|| UnknownLanguage(s.to_string()))
    }
}
