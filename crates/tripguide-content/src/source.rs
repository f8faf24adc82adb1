//! Content accessor trait.

use std::{collections::BTreeMap, path::PathBuf};

use thiserror::Error;
use tripguide_core::{ContentDoc, ContentType};

/// Errors raised while fetching a content collection.
#[derive(Debug, Error)]
pub enum SourceError {
    /// The collection for a type does not exist in this source.
    #[error("no collection for content type {0}")]
    MissingCollection(ContentType),

    /// The collection directory could not be read.
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Result type for source operations.
pub type Result<T> = std::result::Result<T, SourceError>;

/// Supplies the documents of a content type.
///
/// Implementations return a fresh snapshot per call in a stable order.
/// Callers treat the documents as read-only.
pub trait ContentSource {
    /// All visible documents of `content_type`.
    fn docs_by_type(&self, content_type: ContentType) -> Result<Vec<ContentDoc>>;

    /// A single document by slug.
    fn doc_by_slug(&self, content_type: ContentType, slug: &str) -> Result<Option<ContentDoc>> {
        Ok(self
            .docs_by_type(content_type)?
            .into_iter()
            .find(|doc| doc.slug == slug))
    }

    /// Slugs of every document of `content_type`, in collection order.
    fn all_slugs(&self, content_type: ContentType) -> Result<Vec<String>> {
        Ok(self
            .docs_by_type(content_type)?
            .into_iter()
            .map(|doc| doc.slug)
            .collect())
    }

    /// Number of documents for each of `types`.
    fn doc_counts(&self, types: &[ContentType]) -> Result<BTreeMap<ContentType, usize>> {
        types
            .iter()
            .map(|ty| Ok((*ty, self.docs_by_type(*ty)?.len())))
            .collect()
    }
}

impl<S: ContentSource + ?Sized> ContentSource for &S {
    fn docs_by_type(&self, content_type: ContentType) -> Result<Vec<ContentDoc>> {
        (**self).docs_by_type(content_type)
    }
}
