//! Ordering posts by recency.

use super::Post;
use serde::{Deserialize, Serialize};
use std::borrow::Borrow;
use std::cmp::Reverse;

/// Resolution at which publication times are compared.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortPrecision {
    /// Truncate to whole seconds: posts within the same second tie.
    #[default]
    Second,
    /// Compare full millisecond timestamps.
    Millisecond,
}

/// Most recent first, comparing whole seconds.
///
/// Stable: posts published within the same second keep their input order.
/// Works on owned posts as well as on references.
pub fn sort_by_recency<P>(posts: &[P]) -> Vec<P>
where
    P: Borrow<Post> + Clone,
{
    sorted_desc_by(posts, |post| post.pub_datetime.whole_seconds())
}

/// Most recent first at the given precision. The input is left untouched.
pub fn sort_by_recency_with<P>(posts: &[P], precision: SortPrecision) -> Vec<P>
where
    P: Borrow<Post> + Clone,
{
    match precision {
        SortPrecision::Second => sort_by_recency(posts),
        SortPrecision::Millisecond => {
            sorted_desc_by(posts, |post| post.pub_datetime.timestamp_millis())
        }
    }
}

fn sorted_desc_by<P>(posts: &[P], key: impl Fn(&Post) -> i64) -> Vec<P>
where
    P: Borrow<Post> + Clone,
{
    let mut sorted = posts.to_vec();
    sorted.sort_by_key(|post| Reverse(key(<P as Borrow<Post>>::borrow(post))));
    sorted
}
