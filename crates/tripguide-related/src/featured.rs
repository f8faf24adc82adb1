//! Featured and latest content.

use std::cmp::Reverse;

use tripguide_content::ContentSource;
use tripguide_core::{ContentDoc, ContentType};

use crate::collection::fetch_collection;

/// Default number of featured documents.
pub const DEFAULT_FEATURED_MAX: usize = 4;

/// Default number of latest documents across collections.
pub const DEFAULT_LATEST_LIMIT: usize = 6;

/// The first `max_results` documents of `content_type` in source order.
///
/// A collection that fails to load yields nothing.
pub fn featured_content<S: ContentSource + ?Sized>(
    source: &S,
    content_type: ContentType,
    max_results: usize,
) -> Vec<ContentDoc> {
    let mut docs = fetch_collection(source, content_type).into_docs();
    docs.truncate(max_results);
    docs
}

/// The newest documents across `content_types` by publication date.
///
/// Documents published at the same time keep the order of `content_types`;
/// undated documents come last. Unavailable collections are skipped.
pub fn latest_across<S: ContentSource + ?Sized>(
    source: &S,
    content_types: &[ContentType],
    limit: usize,
) -> Vec<ContentDoc> {
    let mut docs: Vec<ContentDoc> = content_types
        .iter()
        .flat_map(|ty| fetch_collection(source, *ty).into_docs())
        .collect();

    docs.sort_by_key(|doc| {
        let published = doc.frontmatter.published();
        (published.is_none(), Reverse(published))
    });
    docs.truncate(limit);
    docs
}
