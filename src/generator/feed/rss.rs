//! RSS 2.0 serialization.

use super::{FeedDocument, FeedItem, FeedSerializer, GENERATOR};
use anyhow::{Result, anyhow};
use regex::Regex;
use rss::{ChannelBuilder, GuidBuilder, Item, ItemBuilder, validation::Validate};
use std::sync::LazyLock;

/// Renders a validated RSS 2.0 channel.
#[derive(Debug, Clone, Copy, Default)]
pub struct RssSerializer;

impl FeedSerializer for RssSerializer {
    fn name(&self) -> &'static str {
        "rss"
    }

    fn serialize(&self, doc: &FeedDocument) -> Result<String> {
        let items: Vec<Item> = doc.items.iter().map(|item| to_rss_item(item, doc)).collect();

        let channel = ChannelBuilder::default()
            .title(&doc.title)
            .link(&doc.site)
            .description(&doc.description)
            .language(Some(doc.language.clone()))
            .generator(Some(GENERATOR.to_string()))
            .items(items)
            .build();

        channel
            .validate()
            .map_err(|e| anyhow!("RSS validation failed for `{}`: {e}", doc.language))?;
        Ok(channel.to_string())
    }
}

fn to_rss_item(item: &FeedItem, doc: &FeedDocument) -> Item {
    let link = doc.absolute_link(item);

    ItemBuilder::default()
        .title(Some(item.title.clone()))
        .link(Some(link.clone()))
        .guid(Some(GuidBuilder::default().permalink(true).value(link).build()))
        .description(Some(item.description.clone()))
        .pub_date(Some(item.pub_date.to_rfc2822()))
        .author(rss_author(item.author.as_deref(), doc))
        .build()
}

/// RSS wants `email (Name)` in `<author>`.
///
/// A post author already in that form is kept; otherwise the site email is
/// combined with the post author's name. Without any email the element is
/// left out.
fn rss_author(author: Option<&str>, doc: &FeedDocument) -> Option<String> {
    static RE_VALID_AUTHOR: LazyLock<Regex> = LazyLock::new(|| {
        Regex::new(r"^[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,}[ \t]*\([^)]+\)$")
            .expect("valid regex")
    });

    let author = author?.trim();
    if RE_VALID_AUTHOR.is_match(author) {
        return Some(author.to_string());
    }

    let email = doc.email.trim();
    if email.is_empty() {
        return None;
    }
    let name = if author.is_empty() { doc.author.trim() } else { author };
    Some(format!("{email} ({name})"))
}
