//! Query command: the sorted posts of one language as JSON.

use std::fs;
use std::io::Write;

use anyhow::{Context, Result};
use serde::Serialize;

use super::common::load_store;
use crate::cli::args::QueryArgs;
use crate::config::{BLOG_COLLECTION, SiteConfig};
use crate::i18n::{Language, UnknownLanguage};
use crate::log;
use crate::post::{Post, select_by_language, sort_by_recency_with};
use crate::utils::{plural_count, slug::slugify_post};

/// A post as printed by `query`: frontmatter plus its feed link.
#[derive(Debug, Serialize)]
pub struct QueryEntry<'a> {
    #[serde(flatten)]
    pub post: &'a Post,
    pub link: String,
}

/// Execute query command
pub fn run_query(args: &QueryArgs, config: &SiteConfig) -> Result<()> {
    if Language::from_code(&args.lang).is_none() {
        log!("warning"; "{}", UnknownLanguage(args.lang.clone()));
    }

    let store = load_store(config)?;
    let candidates = store.get_collection(BLOG_COLLECTION, |post| {
        (args.drafts || !post.is_draft()) && (!args.featured || post.is_featured())
    });
    let entries = query_posts(&candidates, &args.lang, config);
    log!("query"; "found {}", plural_count(entries.len(), "post"));

    let formatted = render_json(&entries, args.pretty)?;
    if let Some(ref output_path) = args.output {
        let mut file = fs::File::create(output_path)
            .with_context(|| format!("failed to create {}", output_path.display()))?;
        writeln!(file, "{}", formatted)?;
        log!("query"; "wrote output to {}", output_path.display());
    } else {
        println!("{}", formatted);
    }

    Ok(())
}

/// Posts of `lang` in feed order, each with its link.
pub fn query_posts<'a>(
    posts: &'a [&'a Post],
    lang: &str,
    config: &SiteConfig,
) -> Vec<QueryEntry<'a>> {
    let selected = select_by_language(posts, lang);
    sort_by_recency_with(&selected, config.build.sort_precision())
        .into_iter()
        .map(|post| QueryEntry {
            post,
            link: format!("posts/{}", slugify_post(post, &config.build.slug)),
        })
        .collect()
}

fn render_json(entries: &[QueryEntry<'_>], pretty: bool) -> Result<String> {
    let json = if pretty {
        serde_json::to_string_pretty(entries)?
    } else {
        serde_json::to_string(entries)?
    };
    Ok(json)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::test_parse_config;
    use crate::post::test_post;

    #[test]
    fn test_query_posts_sorted_with_links() {
        let config = test_parse_config("");
        let posts = vec![
            test_post("Old", "fr", "2023-01-01"),
            test_post("Other", "en", "2024-01-01"),
            test_post("New", "fr", "2024-06-01"),
        ];
        let refs: Vec<&Post> = posts.iter().collect();

        let entries = query_posts(&refs, "fr", &config);
        let links: Vec<_> = entries.iter().map(|e| e.link.as_str()).collect();
        assert_eq!(links, vec!["posts/new", "posts/old"]);
    }

    #[test]
    fn test_render_json_flattens_post() {
        let config = test_parse_config("");
        let posts = vec![test_post("Hola", "es", "2024-01-01")];
        let refs: Vec<&Post> = posts.iter().collect();
        let entries = query_posts(&refs, "es", &config);

        let json: serde_json::Value =
            serde_json::from_str(&render_json(&entries, false).unwrap()).unwrap();
        assert_eq!(json[0]["title"], "Hola");
        assert_eq!(json[0]["language"], "es");
        assert_eq!(json[0]["pubDatetime"], "2024-01-01T00:00:00Z");
        assert_eq!(json[0]["link"], "posts/hola");
    }

    #[test]
    fn test_unknown_language_is_empty_array() {
        let config = test_parse_config("");
        let posts = vec![test_post("a", "en", "2024-01-01")];
        let refs: Vec<&Post> = posts.iter().collect();
        let entries = query_posts(&refs, "xx", &config);
        assert_eq!(render_json(&entries, true).unwrap(), "[]");
    }
}
