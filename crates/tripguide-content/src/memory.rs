//! In-memory content collections.

use std::collections::HashMap;

use tripguide_core::{ContentDoc, ContentType};

use crate::source::{ContentSource, Result, SourceError};

/// Collections held in memory, returned in insertion order.
///
/// A type that was never inserted is reported as a missing collection, so an
/// empty collection and an absent one stay distinguishable.
#[derive(Debug, Clone, Default)]
pub struct MemoryContentSource {
    collections: HashMap<ContentType, Vec<ContentDoc>>,
}

impl MemoryContentSource {
    /// Create an empty source with no collections.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the collection for `content_type`.
    pub fn insert(&mut self, content_type: ContentType, docs: Vec<ContentDoc>) -> &mut Self {
        self.collections.insert(content_type, docs);
        self
    }

    /// Builder form of [`MemoryContentSource::insert`].
    #[must_use]
    pub fn with(mut self, content_type: ContentType, docs: Vec<ContentDoc>) -> Self {
        self.insert(content_type, docs);
        self
    }

    /// Group documents by their own content type, keeping relative order.
    pub fn from_docs(docs: impl IntoIterator<Item = ContentDoc>) -> Self {
        let mut source = Self::new();
        for doc in docs {
            source
                .collections
                .entry(doc.content_type)
                .or_default()
                .push(doc);
        }
        source
    }
}

impl ContentSource for MemoryContentSource {
    fn docs_by_type(&self, content_type: ContentType) -> Result<Vec<ContentDoc>> {
        self.collections
            .get(&content_type)
            .cloned()
            .ok_or(SourceError::MissingCollection(content_type))
    }
}

#[cfg(test)]
mod tests {
    use tripguide_core::Frontmatter;

    use super::*;

    fn doc(ty: ContentType, slug: &str) -> ContentDoc {
        let fm = Frontmatter {
            slug: slug.to_string(),
            ..Frontmatter::default()
        };
        ContentDoc::new(ty, fm, "", format!("{slug}.mdx"))
    }

    #[test]
    fn test_missing_collection() {
        let source = MemoryContentSource::new();
        let err = source.docs_by_type(ContentType::Hotel).unwrap_err();
        assert!(matches!(err, SourceError::MissingCollection(ContentType::Hotel)));
        assert_eq!(err.to_string(), "no collection for content type hotel");
    }

    #[test]
    fn test_empty_collection_is_not_missing() {
        let source = MemoryContentSource::new().with(ContentType::Map, vec![]);
        assert!(source.docs_by_type(ContentType::Map).unwrap().is_empty());
    }

    #[test]
    fn test_from_docs_groups_by_type() {
        let source = MemoryContentSource::from_docs([
            doc(ContentType::Hotel, "inn-one"),
            doc(ContentType::Event, "art-fair"),
            doc(ContentType::Hotel, "inn-two"),
        ]);

        assert_eq!(
            source.all_slugs(ContentType::Hotel).unwrap(),
            vec!["inn-one", "inn-two"]
        );
        assert_eq!(source.all_slugs(ContentType::Event).unwrap(), vec!["art-fair"]);
    }

    #[test]
    fn test_doc_by_slug_and_counts() {
        let source = MemoryContentSource::from_docs([
            doc(ContentType::Hotel, "inn-one"),
            doc(ContentType::Hotel, "inn-two"),
            doc(ContentType::Event, "art-fair"),
        ]);

        let found = source
            .doc_by_slug(ContentType::Hotel, "inn-two")
            .unwrap()
            .expect("present");
        assert_eq!(found.slug, "inn-two");
        assert!(
            source
                .doc_by_slug(ContentType::Hotel, "art-fair")
                .unwrap()
                .is_none()
        );

        let counts = source
            .doc_counts(&[ContentType::Hotel, ContentType::Event])
            .unwrap();
        assert_eq!(counts[&ContentType::Hotel], 2);
        assert_eq!(counts[&ContentType::Event], 1);
        assert!(source.doc_counts(&[ContentType::Map]).is_err());
    }
}
