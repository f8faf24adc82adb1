//! Tag-overlap related content.
//!
//! A candidate's score is the number of its tags found, case-insensitively,
//! among the reference tags. Candidates scoring zero are dropped, the rest
//! are ranked by score with ties left in encounter order: the order of the
//! requested content types, then collection order within a type.

use std::collections::HashSet;

use tracing::debug;
use tripguide_content::ContentSource;
use tripguide_core::{ContentDoc, ContentType};

use crate::collection::fetch_collection;

/// Default number of related documents.
pub const DEFAULT_RELATED_MAX: usize = 6;

/// Default number of related posts within a single collection.
pub const DEFAULT_RELATED_POSTS_LIMIT: usize = 3;

/// Reference document and search settings for [`related_content`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RelatedQuery {
    /// Slug excluded from the results.
    pub current_slug: String,
    /// Tags of the reference document.
    pub current_tags: Vec<String>,
    /// Collections searched, in tie-break order.
    pub content_types: Vec<ContentType>,
    /// Upper bound on the number of results.
    pub max_results: usize,
}

impl RelatedQuery {
    /// Query over the guide collections with the default result count.
    pub fn new<I, T>(current_slug: impl Into<String>, current_tags: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<String>,
    {
        Self {
            current_slug: current_slug.into(),
            current_tags: current_tags.into_iter().map(Into::into).collect(),
            content_types: ContentType::GUIDES.to_vec(),
            max_results: DEFAULT_RELATED_MAX,
        }
    }

    /// Query using a document's own slug and tags.
    pub fn for_doc(doc: &ContentDoc) -> Self {
        Self::new(doc.slug.clone(), doc.tags().iter().cloned())
    }

    #[must_use]
    pub fn content_types(mut self, content_types: impl Into<Vec<ContentType>>) -> Self {
        self.content_types = content_types.into();
        self
    }

    #[must_use]
    pub fn max_results(mut self, max_results: usize) -> Self {
        self.max_results = max_results;
        self
    }
}

/// A related document with its shared-tag count (always at least 1).
#[derive(Debug, Clone, PartialEq)]
pub struct ScoredDoc {
    pub doc: ContentDoc,
    pub score: usize,
}

/// Related documents, best match first.
///
/// Returns nothing when the query has no tags. Collections that fail to load
/// are logged and skipped.
pub fn related_content<S: ContentSource + ?Sized>(
    source: &S,
    query: &RelatedQuery,
) -> Vec<ContentDoc> {
    related_scored(source, query)
        .into_iter()
        .map(|scored| scored.doc)
        .collect()
}

/// Same ranking as [`related_content`], keeping the scores.
pub fn related_scored<S: ContentSource + ?Sized>(
    source: &S,
    query: &RelatedQuery,
) -> Vec<ScoredDoc> {
    if query.current_tags.is_empty() || query.max_results == 0 {
        return Vec::new();
    }

    let tags = tag_set(&query.current_tags);
    let mut scored = Vec::new();

    for content_type in &query.content_types {
        let docs = fetch_collection(source, *content_type).into_docs();
        scored.extend(score_candidates(&tags, &query.current_slug, docs));
    }

    debug!(
        slug = %query.current_slug,
        matches = scored.len(),
        "scored related content"
    );

    rank(scored, query.max_results)
}

/// Related documents from an already loaded candidate list.
///
/// Uses the same case-insensitive scoring as [`related_content`].
pub fn related_posts(current: &ContentDoc, candidates: &[ContentDoc], limit: usize) -> Vec<ContentDoc> {
    if current.tags().is_empty() || limit == 0 {
        return Vec::new();
    }

    let tags = tag_set(current.tags());
    let scored = score_candidates(&tags, &current.slug, candidates.iter().cloned()).collect::<Vec<_>>();

    rank(scored, limit)
        .into_iter()
        .map(|scored| scored.doc)
        .collect()
}

fn tag_set(tags: &[String]) -> HashSet<String> {
    tags.iter().map(|tag| tag.to_lowercase()).collect()
}

/// Number of `tags` present in `reference`.
fn shared_tags(reference: &HashSet<String>, tags: &[String]) -> usize {
    tags.iter()
        .filter(|tag| reference.contains(&tag.to_lowercase()))
        .count()
}

fn score_candidates<'a>(
    reference: &'a HashSet<String>,
    current_slug: &'a str,
    docs: impl IntoIterator<Item = ContentDoc> + 'a,
) -> impl Iterator<Item = ScoredDoc> + 'a {
    docs.into_iter()
        .filter(move |doc| doc.slug != current_slug)
        .filter_map(move |doc| {
            let score = shared_tags(reference, doc.tags());
            (score > 0).then_some(ScoredDoc { doc, score })
        })
}

/// Stable sort by score, highest first, then cut to `limit`.
fn rank(mut scored: Vec<ScoredDoc>, limit: usize) -> Vec<ScoredDoc> {
    scored.sort_by(|a, b| b.score.cmp(&a.score));
    scored.truncate(limit);
    scored
}

#[cfg(test)]
mod tests {
    use tripguide_content::MemoryContentSource;
    use tripguide_core::Frontmatter;

    use super::*;

    fn doc(ty: ContentType, slug: &str, tags: &[&str]) -> ContentDoc {
        let fm = Frontmatter {
            slug: slug.to_string(),
            tags: tags.iter().map(|t| t.to_string()).collect(),
            ..Frontmatter::default()
        };
        ContentDoc::new(ty, fm, "", format!("{slug}.mdx"))
    }

    fn slugs(docs: &[ContentDoc]) -> Vec<&str> {
        docs.iter().map(|d| d.slug.as_str()).collect()
    }

    #[test]
    fn test_case_insensitive_ranking() {
        let source = MemoryContentSource::new().with(
            ContentType::Itinerary,
            vec![
                doc(ContentType::Itinerary, "a", &["beach", "kids"]),
                doc(ContentType::Itinerary, "b", &["BEACH", "Family", "Sunset"]),
            ],
        );
        let query = RelatedQuery::new("current", ["Beach", "family"]);

        let results = related_scored(&source, &query);
        assert_eq!(results.len(), 2);
        assert_eq!(results[0].doc.slug, "b");
        assert_eq!(results[0].score, 2);
        assert_eq!(results[1].doc.slug, "a");
        assert_eq!(results[1].score, 1);
    }

    #[test]
    fn test_empty_tags_skip_fetch() {
        // a source with no collections would log failures if it were queried
        let source = MemoryContentSource::new();
        let query = RelatedQuery::new("current", Vec::<String>::new());
        assert!(related_content(&source, &query).is_empty());
    }

    #[test]
    fn test_zero_max_results() {
        let source = MemoryContentSource::new()
            .with(ContentType::Itinerary, vec![doc(ContentType::Itinerary, "a", &["x"])]);
        let query = RelatedQuery::new("current", ["x"]).max_results(0);
        assert!(related_content(&source, &query).is_empty());
    }

    #[test]
    fn test_duplicate_candidate_tags_each_count() {
        let reference = tag_set(&["beach".to_string()]);
        assert_eq!(
            shared_tags(&reference, &["Beach".to_string(), "beach".to_string()]),
            2
        );
    }

    #[test]
    fn test_ties_keep_type_then_collection_order() {
        let source = MemoryContentSource::new()
            .with(
                ContentType::TravelTip,
                vec![doc(ContentType::TravelTip, "tip-1", &["golf"])],
            )
            .with(
                ContentType::Itinerary,
                vec![
                    doc(ContentType::Itinerary, "it-2", &["golf"]),
                    doc(ContentType::Itinerary, "it-1", &["golf"]),
                ],
            );
        let query = RelatedQuery::new("current", ["golf"])
            .content_types([ContentType::Itinerary, ContentType::TravelTip]);

        let results = related_content(&source, &query);
        assert_eq!(slugs(&results), vec!["it-2", "it-1", "tip-1"]);
    }

    #[test]
    fn test_related_posts_in_memory() {
        let current = doc(ContentType::Hotel, "inn", &["Waterfront", "spa"]);
        let candidates = vec![
            current.clone(),
            doc(ContentType::Hotel, "resort", &["spa", "waterfront"]),
            doc(ContentType::Hotel, "motel", &["budget"]),
            doc(ContentType::Hotel, "lodge", &["SPA"]),
        ];

        let related = related_posts(&current, &candidates, DEFAULT_RELATED_POSTS_LIMIT);
        assert_eq!(slugs(&related), vec!["resort", "lodge"]);

        let limited = related_posts(&current, &candidates, 1);
        assert_eq!(slugs(&limited), vec!["resort"]);
    }

    #[test]
    fn test_for_doc_uses_defaults() {
        let reference = doc(ContentType::DayTrip, "everglades", &["nature"]);
        let query = RelatedQuery::for_doc(&reference);
        assert_eq!(query.current_slug, "everglades");
        assert_eq!(query.current_tags, vec!["nature"]);
        assert_eq!(query.content_types, ContentType::GUIDES.to_vec());
        assert_eq!(query.max_results, DEFAULT_RELATED_MAX);
    }
}
