//! Atom 1.0 serialization.

use super::{FeedDocument, FeedItem, FeedSerializer, GENERATOR};
use anyhow::Result;
use atom_syndication::{
    Entry, EntryBuilder, FeedBuilder, FixedDateTime, GeneratorBuilder, Link, LinkBuilder, Person,
    PersonBuilder, Text,
};

/// Renders an Atom 1.0 feed.
#[derive(Debug, Clone, Copy, Default)]
pub struct AtomSerializer;

impl FeedSerializer for AtomSerializer {
    fn name(&self) -> &'static str {
        "atom"
    }

    fn serialize(&self, doc: &FeedDocument) -> Result<String> {
        // Epoch when the feed has no entries.
        let updated = doc
            .newest()
            .map(|dt| dt.to_fixed_offset())
            .unwrap_or_default();

        let self_link: Link = LinkBuilder::default()
            .href(doc.self_link.clone())
            .rel("self".to_string())
            .mime_type(Some("application/atom+xml".to_string()))
            .build();
        let alternate_link: Link = LinkBuilder::default()
            .href(doc.site.clone())
            .rel("alternate".to_string())
            .build();

        let entries: Vec<Entry> = doc.items.iter().map(|item| to_atom_entry(item, doc)).collect();

        let feed = FeedBuilder::default()
            .title(Text::plain(doc.title.clone()))
            .id(doc.self_link.clone())
            .updated(updated)
            .authors(site_author(doc))
            .links(vec![self_link, alternate_link])
            .subtitle(Some(Text::plain(doc.description.clone())))
            .generator(Some(GeneratorBuilder::default().value(GENERATOR).build()))
            .lang(Some(doc.language.clone()))
            .entries(entries)
            .build();

        Ok(feed.to_string())
    }
}

fn site_author(doc: &FeedDocument) -> Vec<Person> {
    if doc.author.trim().is_empty() {
        return Vec::new();
    }
    let email = Some(doc.email.clone()).filter(|email| !email.trim().is_empty());
    vec![PersonBuilder::default().name(doc.author.clone()).email(email).build()]
}

fn to_atom_entry(item: &FeedItem, doc: &FeedDocument) -> Entry {
    let link = doc.absolute_link(item);
    let date: FixedDateTime = item.pub_date.to_fixed_offset();

    let entry_link: Link = LinkBuilder::default()
        .href(link.clone())
        .rel("alternate".to_string())
        .build();

    let authors: Vec<Person> = item
        .author
        .as_ref()
        .map(|name| vec![PersonBuilder::default().name(name.clone()).build()])
        .unwrap_or_default();

    EntryBuilder::default()
        .title(Text::plain(item.title.clone()))
        .id(link)
        .updated(date)
        .published(Some(date))
        .links(vec![entry_link])
        .summary(Some(Text::plain(item.description.clone())))
        .authors(authors)
        .build()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::date::PubDatetime;

    fn doc(items: Vec<FeedItem>) -> FeedDocument {
        FeedDocument {
            title: "Blog".to_string(),
            description: "Notes".to_string(),
            site: "https://example.com/".to_string(),
            language: "fr".to_string(),
            self_link: "https://example.com/fr/atom.xml".to_string(),
            author: "Alice".to_string(),
            email: "alice@example.com".to_string(),
            items,
        }
    }

    fn item(slug: &str, date: &str) -> FeedItem {
        FeedItem {
            link: format!("posts/{slug}"),
            title: slug.to_string(),
            description: format!("about {slug}"),
            pub_date: PubDatetime::parse(date).unwrap(),
            author: Some("Bob".to_string()),
        }
    }

    #[test]
    fn test_entry_fields() {
        let d = doc(vec![item("bonjour", "2024-01-15T08:00:00Z")]);
        let entry = to_atom_entry(&d.items[0], &d);
        assert_eq!(entry.title().as_str(), "bonjour");
        assert_eq!(entry.id(), "https://example.com/posts/bonjour");
        assert_eq!(entry.links()[0].href(), "https://example.com/posts/bonjour");
        assert!(entry.updated().to_rfc3339().starts_with("2024-01-15T08:00:00"));
        assert_eq!(entry.authors()[0].name(), "Bob");
    }

    #[test]
    fn test_updated_is_newest_item() {
        let d = doc(vec![
            item("new", "2024-03-01T00:00:00Z"),
            item("old", "2023-03-01T00:00:00Z"),
        ]);
        let xml = AtomSerializer.serialize(&d).unwrap();
        assert!(xml.contains("<updated>2024-03-01T00:00:00+00:00</updated>"));
        assert!(xml.contains("xml:lang=\"fr\""));
        assert!(xml.contains("https://example.com/fr/atom.xml"));
    }

    #[test]
    fn test_empty_feed_uses_epoch() {
        let xml = AtomSerializer.serialize(&doc(Vec::new())).unwrap();
        assert!(xml.contains("<updated>1970-01-01T00:00:00+00:00</updated>"));
        assert!(!xml.contains("<entry>"));
    }
}
