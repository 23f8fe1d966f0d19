//! Output generators.
//!
//! - **Feed**: one RSS/Atom document per language (`{lang}/rss.xml`)
//! - **Routes**: the static paths those documents are served under

pub mod feed;
pub mod routes;

use std::borrow::Cow;

const CDATA_OPEN: &str = "<![CDATA[";
const CDATA_CLOSE: &str = "]]>";

/// Drop whitespace-only text between tags when `enabled`.
///
/// Text nodes with content and CDATA sections are copied verbatim, so
/// multi-line descriptions survive. Non UTF-8 input is returned untouched.
pub fn minify_xml(content: &[u8], enabled: bool) -> Cow<'_, [u8]> {
    if !enabled {
        return Cow::Borrowed(content);
    }
    let Ok(xml) = std::str::from_utf8(content) else {
        return Cow::Borrowed(content);
    };

    let mut minified = String::with_capacity(xml.len());
    let mut rest = xml;
    while !rest.is_empty() {
        let end = if rest.starts_with(CDATA_OPEN) {
            rest.find(CDATA_CLOSE)
                .map_or(rest.len(), |i| i + CDATA_CLOSE.len())
        } else if rest.starts_with('<') {
            rest.find('>').map_or(rest.len(), |i| i + 1)
        } else {
            let text_end = rest.find('<').unwrap_or(rest.len());
            if rest[..text_end].trim().is_empty() {
                rest = &rest[text_end..];
                continue;
            }
            text_end
        };
        minified.push_str(&rest[..end]);
        rest = &rest[end..];
    }
    Cow::Owned(minified.into_bytes())
}
