//! Pluralization for log messages.

/// `"s"` unless `n` is exactly one.
#[inline]
pub fn plural_s(n: usize) -> &'static str {
    if n == 1 { "" } else { "s" }
}

/// `plural_count(3, "post")` -> `"3 posts"`
#[inline]
pub fn plural_count(count: usize, noun: &str) -> String {
    format!("{count} {noun}{}", plural_s(count))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plural_count() {
        assert_eq!(plural_count(0, "feed"), "0 feeds");
        assert_eq!(plural_count(1, "feed"), "1 feed");
        assert_eq!(plural_count(4, "feed"), "4 feeds");
    }
}
