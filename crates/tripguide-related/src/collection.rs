//! Per-type fetch outcome.

use tracing::warn;
use tripguide_content::ContentSource;
use tripguide_core::{ContentDoc, ContentType};

/// Result of fetching one content type.
///
/// A failed fetch is not an error for related or featured content: the type
/// simply contributes no documents and the reason is logged.
#[derive(Debug, Clone, PartialEq)]
pub enum Collection {
    /// Documents in source order.
    Loaded(Vec<ContentDoc>),
    /// The source could not provide this type.
    Unavailable {
        content_type: ContentType,
        reason: String,
    },
}

impl Collection {
    /// Documents of the collection; none when unavailable.
    pub fn into_docs(self) -> Vec<ContentDoc> {
        match self {
            Self::Loaded(docs) => docs,
            Self::Unavailable { .. } => Vec::new(),
        }
    }

    pub fn is_loaded(&self) -> bool {
        matches!(self, Self::Loaded(_))
    }
}

/// Fetch `content_type` from `source`, logging a failure instead of returning it.
pub fn fetch_collection<S: ContentSource + ?Sized>(
    source: &S,
    content_type: ContentType,
) -> Collection {
    match source.docs_by_type(content_type) {
        Ok(docs) => Collection::Loaded(docs),
        Err(e) => {
            warn!(content_type = %content_type, error = %e, "content collection unavailable");
            Collection::Unavailable {
                content_type,
                reason: e.to_string(),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use tripguide_content::MemoryContentSource;

    use super::*;

    #[test]
    fn test_unavailable_collection_has_reason() {
        let source = MemoryContentSource::new();
        let collection = fetch_collection(&source, ContentType::Event);

        assert!(!collection.is_loaded());
        assert_eq!(
            collection,
            Collection::Unavailable {
                content_type: ContentType::Event,
                reason: "no collection for content type event".to_string(),
            }
        );
        assert!(collection.into_docs().is_empty());
    }

    #[test]
    fn test_loaded_collection() {
        let source = MemoryContentSource::new().with(ContentType::Event, vec![]);
        let collection = fetch_collection(&source, ContentType::Event);
        assert!(collection.is_loaded());
    }
}
