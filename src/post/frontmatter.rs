//! Frontmatter extraction and strict post parsing.
//!
//! Posts are Markdown files opening with YAML (`---`) or TOML (`+++`)
//! frontmatter. The frontmatter is deserialized straight into [`Post`], so
//! schema violations surface as deserialization errors.

use super::{ContentError, Post};

/// Frontmatter block detected at the top of a file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Frontmatter<'a> {
    Yaml(&'a str),
    Toml(&'a str),
}

/// Split `content` into frontmatter and body.
///
/// Returns `None` when the file has no frontmatter block.
pub fn split_frontmatter(content: &str) -> Option<(Frontmatter<'_>, &str)> {
    let trimmed = content.trim_start_matches('\u{feff}').trim_start();

    for (fence, is_toml) in [("---", false), ("+++", true)] {
        if let Some(rest) = trimmed.strip_prefix(fence)
            && let Some(end) = rest.find(&format!("\n{fence}"))
        {
            // keep the final line break: block scalars end with it
            let fm = &rest[..=end];
            let fm = fm.split_once('\n').map_or(fm, |(_, tail)| tail);
            let body = rest[end + 1 + fence.len()..].trim_start_matches(|c| c == '\r' || c == '\n');
            let fm = if is_toml {
                Frontmatter::Toml(fm)
            } else {
                Frontmatter::Yaml(fm)
            };
            return Some((fm, body));
        }
    }

    None
}

/// Parse a post from the full text of a Markdown file.
pub fn parse_post(content: &str) -> Result<Post, ContentError> {
    let (frontmatter, _body) = split_frontmatter(content).ok_or(ContentError::MissingFrontmatter)?;
    match frontmatter {
        Frontmatter::Yaml(src) => Ok(serde_yaml::from_str(src)?),
        Frontmatter::Toml(src) => {
            let table: toml::Table = toml::from_str(src)?;
            let value = toml_to_json(toml::Value::Table(table));
            Ok(serde_json::from_value(value)?)
        }
    }
}

/// Convert TOML to JSON, turning native datetimes into their RFC 3339 text.
fn toml_to_json(value: toml::Value) -> serde_json::Value {
    use serde_json::Value;

    match value {
        toml::Value::String(s) => Value::String(s),
        toml::Value::Integer(i) => Value::Number(i.into()),
        toml::Value::Float(f) => serde_json::Number::from_f64(f).map_or(Value::Null, Value::Number),
        toml::Value::Boolean(b) => Value::Bool(b),
        toml::Value::Datetime(dt) => Value::String(dt.to_string()),
        toml::Value::Array(items) => Value::Array(items.into_iter().map(toml_to_json).collect()),
        toml::Value::Table(table) => Value::Object(
            table
                .into_iter()
                .map(|(k, v)| (k, toml_to_json(v)))
                .collect(),
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::i18n::Language;
    use crate::utils::date::PubDatetime;

    const YAML_POST: &str = "---
title: Hello
pubDatetime: 2024-03-01T10:00:00Z
language: fr
description: Bonjour
tags:
  - rust
  - i18n
---

# Body
";

    #[test]
    fn test_split_yaml() {
        let (fm, body) = split_frontmatter(YAML_POST).unwrap();
        assert!(matches!(fm, Frontmatter::Yaml(s) if s.starts_with("title: Hello")));
        assert_eq!(body, "# Body\n");
    }

    #[test]
    fn test_split_toml() {
        let content = "+++\ntitle = \"Hello\"\n+++\nBody";
        let (fm, body) = split_frontmatter(content).unwrap();
        assert_eq!(fm, Frontmatter::Toml("title = \"Hello\"\n"));
        assert_eq!(body, "Body");
    }

    #[test]
    fn test_yaml_block_scalar_keeps_final_newline() {
        let content = "---\ntitle: a\npubDatetime: 2024-01-01\nlanguage: en\ndescription: |\n  first\n  second\n---\n";
        let post = parse_post(content).unwrap();
        assert_eq!(post.description, "first\nsecond\n");

        let (fm, _) = split_frontmatter("---\n---\nbody").unwrap();
        assert_eq!(fm, Frontmatter::Yaml(""));
    }

    #[test]
    fn test_no_frontmatter() {
        assert!(split_frontmatter("# Just content").is_none());
        assert!(split_frontmatter("---\nunterminated").is_none());
    }

    #[test]
    fn test_parse_yaml_post() {
        let post = parse_post(YAML_POST).unwrap();
        assert_eq!(post.title, "Hello");
        assert_eq!(post.language, Language::Fr);
        assert_eq!(post.tags, vec!["rust", "i18n"]);
        assert_eq!(
            post.pub_datetime,
            PubDatetime::parse("2024-03-01T10:00:00Z").unwrap()
        );
    }

    #[test]
    fn test_parse_toml_post_with_native_datetime() {
        let content = "+++
title = \"Hallo\"
pubDatetime = 2024-03-01T10:00:00Z
language = \"de\"
description = \"Servus\"
draft = true
+++
";
        let post = parse_post(content).unwrap();
        assert_eq!(post.language, Language::De);
        assert!(post.is_draft());
        assert_eq!(post.tags, vec!["others"]);
        assert_eq!(post.pub_datetime.to_rfc3339(), "2024-03-01T10:00:00Z");
    }

    #[test]
    fn test_parse_toml_local_date() {
        let content = "+++\ntitle = \"a\"\npubDatetime = 2024-03-01\nlanguage = \"en\"\ndescription = \"b\"\n+++\n";
        let post = parse_post(content).unwrap();
        assert_eq!(post.pub_datetime, PubDatetime::from_ymd(2024, 3, 1).unwrap());
    }

    #[test]
    fn test_parse_rejects_unknown_key() {
        let content = YAML_POST.replace("title: Hello", "title: Hello\nsubtitle: nope");
        let err = parse_post(&content).unwrap_err();
        assert!(matches!(err, ContentError::Yaml(_)));
        assert!(err.to_string().contains("subtitle"));
    }

    #[test]
    fn test_parse_rejects_missing_description() {
        let content = YAML_POST.replace("description: Bonjour\n", "");
        let err = parse_post(&content).unwrap_err();
        assert!(err.to_string().contains("description"));
    }

    #[test]
    fn test_parse_rejects_unknown_language() {
        let content = YAML_POST.replace("language: fr", "language: it");
        assert!(parse_post(&content).is_err());
    }

    #[test]
    fn test_parse_missing_frontmatter() {
        assert!(matches!(
            parse_post("# no metadata"),
            Err(ContentError::MissingFrontmatter)
        ));
    }
}
