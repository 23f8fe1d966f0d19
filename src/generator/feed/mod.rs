//! Per-language syndication feeds.
//!
//! Every supported language gets its own document: the language's posts,
//! most recent first, each linking to `posts/{slug}`.
//!
//! - **RSS 2.0**: default format (`{lang}/rss.xml`)
//! - **Atom 1.0**: alternative selected by `[build.feed] format`

mod atom;
mod rss;

pub use self::atom::AtomSerializer;
pub use self::rss::RssSerializer;

use super::{
    minify_xml,
    routes::{FeedRoute, feed_routes},
};
use crate::{
    config::{FeedFormat, SiteConfig},
    debug, log,
    post::{Post, select_by_language, sort_by_recency_with},
    utils::{date::PubDatetime, plural_count, slug::slugify_post},
};
use anyhow::{Context, Result};
use rayon::prelude::*;
use std::{borrow::Borrow, fs, path::PathBuf};
use url::Url;

const GENERATOR: &str = "polyblog";

/// One entry of a feed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeedItem {
    /// Site-relative link: `posts/{slug}`.
    pub link: String,
    pub title: String,
    pub description: String,
    pub pub_date: PubDatetime,
    pub author: Option<String>,
}

/// A feed for a single language, independent of the output format.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeedDocument {
    pub title: String,
    pub description: String,
    /// Site base URL (trailing slash) or empty.
    pub site: String,
    pub language: String,
    /// Absolute URL of the document itself.
    pub self_link: String,
    pub author: String,
    pub email: String,
    /// Most recent first.
    pub items: Vec<FeedItem>,
}

impl FeedDocument {
    /// Item link resolved against the site URL.
    ///
    /// Falls back to plain concatenation when the site URL does not parse.
    pub fn absolute_link(&self, item: &FeedItem) -> String {
        resolve(&self.site, &item.link)
    }

    /// Publication time of the newest item.
    pub fn newest(&self) -> Option<PubDatetime> {
        self.items.iter().map(|item| item.pub_date).max()
    }
}

fn resolve(base: &str, link: &str) -> String {
    match Url::parse(base).and_then(|base| base.join(link)) {
        Ok(url) => url.to_string(),
        Err(_) => format!("{base}{link}"),
    }
}

/// Renders a [`FeedDocument`] as XML text.
pub trait FeedSerializer: Sync {
    /// Log prefix and human name of the format.
    fn name(&self) -> &'static str;

    fn serialize(&self, doc: &FeedDocument) -> Result<String>;
}

/// The serializer for a configured format.
pub fn serializer_for(format: FeedFormat) -> &'static dyn FeedSerializer {
    match format {
        FeedFormat::Rss => &RssSerializer,
        FeedFormat::Atom => &AtomSerializer,
    }
}

/// Build the feed for `lang` out of every loaded post.
///
/// Selects the language's posts, orders them most recent first and maps each
/// to a [`FeedItem`]. A code outside the supported set yields a document
/// without items.
pub fn build_feed<P>(all_posts: &[P], lang: &str, config: &SiteConfig) -> FeedDocument
where
    P: Borrow<Post>,
{
    let skip_drafts = config.build.skip_drafts;
    let candidates: Vec<&Post> = all_posts
        .iter()
        .map(<P as Borrow<Post>>::borrow)
        .filter(|post| !(skip_drafts && post.is_draft()))
        .collect();

    let selected = select_by_language(&candidates, lang);
    let sorted = sort_by_recency_with(&selected, config.build.sort_precision());

    let items = sorted
        .into_iter()
        .map(|post| FeedItem {
            link: format!("posts/{}", slugify_post(post, &config.build.slug)),
            title: post.title.clone(),
            description: post.description.clone(),
            pub_date: post.pub_datetime,
            author: post.author.clone(),
        })
        .collect();

    let site = config.site.base_url();
    let self_path = format!(
        "{lang}/{}",
        config.build.feed.filename.to_string_lossy().trim_start_matches('/')
    );

    FeedDocument {
        title: config.site.title.clone(),
        description: config.site.description.clone(),
        self_link: resolve(&site, &self_path),
        site,
        language: lang.to_string(),
        author: config.site.author.clone(),
        email: config.site.email.clone(),
        items,
    }
}

/// Write one feed per supported language into the output directory.
///
/// Languages are generated in parallel. Returns the written paths in
/// language declaration order.
pub fn write_feeds(posts: &[Post], config: &SiteConfig) -> Result<Vec<PathBuf>> {
    let serializer = serializer_for(config.build.feed.format);
    let routes = feed_routes(config);

    let written = routes
        .par_iter()
        .map(|route| write_feed(route, posts, serializer, config))
        .collect::<Result<Vec<_>>>()?;

    log!(serializer.name(); "wrote {}", plural_count(written.len(), "feed"));
    Ok(written)
}

fn write_feed(
    route: &FeedRoute,
    posts: &[Post],
    serializer: &dyn FeedSerializer,
    config: &SiteConfig,
) -> Result<PathBuf> {
    let doc = build_feed(posts, route.language.code(), config);
    let xml = serializer
        .serialize(&doc)
        .with_context(|| format!("failed to render feed {}", route.path))?;
    let xml = minify_xml(xml.as_bytes(), config.build.minify);

    let path = route.output_path(&config.build.output);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("failed to create {}", parent.display()))?;
    }
    fs::write(&path, &*xml).with_context(|| format!("failed to write {}", path.display()))?;

    debug!(serializer.name(); "{} ({})", route.relative(), plural_count(doc.items.len(), "post"));
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::test_parse_config;
    use crate::post::{parse_post, test_post};

    fn site_config(extra: &str) -> SiteConfig {
        test_parse_config(&format!(
            "url = \"https://blog.example.com\"\nauthor = \"Alice\"\nemail = \"alice@example.com\"\n{extra}"
        ))
    }

    fn sample_posts() -> Vec<Post> {
        vec![
            test_post("Hello World", "en", "2024-01-01T10:00:00Z"),
            test_post("Bonjour", "fr", "2024-01-02T10:00:00Z"),
            test_post("Newer Post", "en", "2024-03-01T10:00:00Z"),
        ]
    }

    #[test]
    fn test_build_feed_selects_and_sorts() {
        let config = site_config("");
        let doc = build_feed(&sample_posts(), "en", &config);

        let links: Vec<_> = doc.items.iter().map(|i| i.link.as_str()).collect();
        assert_eq!(links, vec!["posts/newer-post", "posts/hello-world"]);
        assert_eq!(doc.language, "en");
        assert_eq!(doc.title, "Test");
        assert_eq!(doc.site, "https://blog.example.com/");
        assert_eq!(doc.self_link, "https://blog.example.com/en/rss.xml");
    }

    #[test]
    fn test_item_fields_come_from_post() {
        let config = site_config("");
        let doc = build_feed(&sample_posts(), "fr", &config);

        assert_eq!(doc.items.len(), 1);
        let item = &doc.items[0];
        assert_eq!(item.title, "Bonjour");
        assert_eq!(item.description, "about Bonjour");
        assert_eq!(item.pub_date, PubDatetime::parse("2024-01-02T10:00:00Z").unwrap());
        assert_eq!(doc.absolute_link(item), "https://blog.example.com/posts/bonjour");
    }

    #[test]
    fn test_post_slug_overrides_title() {
        let config = site_config("");
        let mut post = test_post("Hello", "en", "2024-01-01");
        post.post_slug = Some("custom-slug".to_string());
        let doc = build_feed(&[post], "en", &config);
        assert_eq!(doc.items[0].link, "posts/custom-slug");
    }

    #[test]
    fn test_unknown_language_is_empty_feed() {
        let config = site_config("");
        let doc = build_feed(&sample_posts(), "xx", &config);
        assert!(doc.items.is_empty());
        assert_eq!(doc.newest(), None);

        let xml = RssSerializer.serialize(&doc).unwrap();
        assert!(xml.contains("<channel>"));
        assert!(!xml.contains("<item>"));
    }

    #[test]
    fn test_language_without_posts_keeps_site_metadata() {
        let config = site_config("");
        let doc = build_feed(&sample_posts(), "de", &config);

        assert!(doc.items.is_empty());
        assert_eq!(doc.title, "Test");
        assert_eq!(doc.description, "Test");
        assert_eq!(doc.site, "https://blog.example.com/");
        assert_eq!(doc.language, "de");
        assert_eq!(doc.self_link, "https://blog.example.com/de/rss.xml");
    }

    #[test]
    fn test_drafts_included_unless_skipped() {
        let mut draft = test_post("Draft", "en", "2024-05-01");
        draft.draft = Some(true);
        let posts = vec![draft, test_post("Live", "en", "2024-01-01")];

        let doc = build_feed(&posts, "en", &site_config(""));
        assert_eq!(doc.items.len(), 2);

        let doc = build_feed(&posts, "en", &site_config("[build]\nskip_drafts = true"));
        assert_eq!(doc.items.len(), 1);
        assert_eq!(doc.items[0].title, "Live");
    }

    #[test]
    fn test_accepts_borrowed_posts() {
        let posts = sample_posts();
        let refs: Vec<&Post> = posts.iter().collect();
        let doc = build_feed(&refs, "en", &site_config(""));
        assert_eq!(doc.items.len(), 2);
    }

    #[test]
    fn test_resolve_without_site() {
        assert_eq!(resolve("", "posts/a"), "posts/a");
        assert_eq!(resolve("https://x.org/blog/", "posts/a"), "https://x.org/blog/posts/a");
    }

    #[test]
    fn test_write_feeds_one_file_per_language() {
        let dir = tempfile::tempdir().unwrap();
        let mut config = site_config("");
        config.build.output = dir.path().join("dist");

        let written = write_feeds(&sample_posts(), &config).unwrap();
        assert_eq!(written.len(), 4);
        assert_eq!(written[0], dir.path().join("dist/en/rss.xml"));

        let en = fs::read_to_string(dir.path().join("dist/en/rss.xml")).unwrap();
        assert!(en.contains("https://blog.example.com/posts/newer-post"));
        assert!(!en.contains("Bonjour"));

        let de = fs::read_to_string(dir.path().join("dist/de/rss.xml")).unwrap();
        assert!(de.contains("<language>de</language>"));
        assert!(!de.contains("<item>"));
    }

    #[test]
    fn test_write_feeds_keeps_multiline_description() {
        let dir = tempfile::tempdir().unwrap();
        let mut config = site_config("");
        config.build.output = dir.path().to_path_buf();
        assert!(config.build.minify);

        let post = parse_post(
            "---\ntitle: Lines\npubDatetime: 2024-01-01\nlanguage: en\ndescription: |\n  first line\n  second line\n---\n",
        )
        .unwrap();
        assert_eq!(post.description, "first line\nsecond line\n");

        write_feeds(&[post], &config).unwrap();
        let en = fs::read_to_string(dir.path().join("en/rss.xml")).unwrap();
        assert!(en.contains("first line\nsecond line\n"), "{en}");
    }

    #[test]
    fn test_write_feeds_atom() {
        let dir = tempfile::tempdir().unwrap();
        let mut config = site_config("[build.feed]\nformat = \"atom\"\nfilename = \"atom.xml\"");
        config.build.output = dir.path().to_path_buf();

        write_feeds(&sample_posts(), &config).unwrap();
        let fr = fs::read_to_string(dir.path().join("fr/atom.xml")).unwrap();
        assert!(fr.contains("<feed"));
        assert!(fr.contains("https://blog.example.com/posts/bonjour"));
    }
}
