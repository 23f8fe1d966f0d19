//! Selecting posts by language.

use super::Post;
use std::borrow::Borrow;

/// Posts whose language code equals `lang`, in input order.
///
/// `lang` is a raw code so callers holding an unvalidated value still get
/// a well-defined answer: an unsupported code matches nothing.
pub fn select_by_language<'a, P>(posts: &'a [P], lang: &str) -> Vec<&'a Post>
where
    P: Borrow<Post>,
{
    posts
        .iter()
        .map(<P as Borrow<Post>>::borrow)
        .filter(|post| post.language.code() == lang)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::post::test_post;

    #[test]
    fn test_keeps_matching_in_order() {
        let posts = vec![
            test_post("one", "en", "2024-01-01"),
            test_post("deux", "fr", "2024-01-02"),
            test_post("three", "en", "2024-01-03"),
        ];
        let selected = select_by_language(&posts, "en");
        let titles: Vec<_> = selected.iter().map(|p| p.title.as_str()).collect();
        assert_eq!(titles, vec!["one", "three"]);
    }

    #[test]
    fn test_exactly_the_matching_posts() {
        let posts = vec![
            test_post("a", "de", "2024-01-01"),
            test_post("b", "es", "2024-01-02"),
            test_post("c", "de", "2024-01-03"),
            test_post("d", "en", "2024-01-04"),
        ];
        for lang in ["en", "fr", "es", "de"] {
            let selected = select_by_language(&posts, lang);
            let expected = posts.iter().filter(|p| p.language.code() == lang).count();
            assert_eq!(selected.len(), expected);
            assert!(selected.iter().all(|p| p.language.code() == lang));
        }
    }

    #[test]
    fn test_unknown_code_is_empty() {
        let posts = vec![test_post("a", "en", "2024-01-01")];
        assert!(select_by_language(&posts, "xx").is_empty());
        assert!(select_by_language(&posts, "EN").is_empty());
    }

    #[test]
    fn test_accepts_references() {
        let posts = vec![test_post("a", "fr", "2024-01-01")];
        let refs: Vec<&Post> = posts.iter().collect();
        assert_eq!(select_by_language(&refs, "fr").len(), 1);
    }
}
