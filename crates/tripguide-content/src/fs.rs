//! Content collections read from the filesystem.
//!
//! Each content type lives in its own directory under the content root
//! (`content/itineraries`, `content/hotels`, ...) as `.mdx` files with YAML or
//! TOML front-matter.

use std::{
    cmp::Ordering,
    fs,
    path::{Path, PathBuf},
};

use rayon::prelude::*;
use tracing::{debug, info, warn};
use tripguide_core::{
    ContentDoc, ContentType, config::ContentConfig, frontmatter::parse_frontmatter,
};

use crate::source::{ContentSource, Result, SourceError};

/// File extension of content documents.
pub const CONTENT_EXTENSION: &str = "mdx";

/// Loads collections from `<root>/<type dir>/*.mdx`.
#[derive(Debug, Clone)]
pub struct FsContentSource {
    root: PathBuf,
    include_drafts: bool,
}

impl FsContentSource {
    /// Create a source rooted at `root` that hides drafts.
    #[must_use]
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            include_drafts: false,
        }
    }

    /// Create a source from the `[content]` config section.
    #[must_use]
    pub fn from_config(config: &ContentConfig) -> Self {
        Self::new(config.root.clone()).include_drafts(config.include_drafts)
    }

    /// Whether documents with `status: draft` are returned.
    #[must_use]
    pub fn include_drafts(mut self, include: bool) -> Self {
        self.include_drafts = include;
        self
    }

    /// Content root directory.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Directory holding documents of `content_type`.
    pub fn dir_for(&self, content_type: ContentType) -> PathBuf {
        self.root.join(content_type.dir_name())
    }

    /// Paths of every `.mdx` file for `content_type`, sorted by file name.
    ///
    /// A missing directory yields no files.
    pub fn content_files(&self, content_type: ContentType) -> Result<Vec<PathBuf>> {
        let dir = self.dir_for(content_type);
        if !dir.exists() {
            debug!(dir = %dir.display(), "content directory missing");
            return Ok(Vec::new());
        }

        let io_err = |source| SourceError::Io {
            path: dir.clone(),
            source,
        };

        let mut files = Vec::new();
        for entry in fs::read_dir(&dir).map_err(io_err)? {
            let path = entry.map_err(io_err)?.path();
            if path.is_file()
                && path
                    .extension()
                    .is_some_and(|ext| ext == CONTENT_EXTENSION)
            {
                files.push(path);
            }
        }
        files.sort();
        Ok(files)
    }

    /// Read, parse and validate a single document.
    ///
    /// Drafts are returned as well; visibility is decided by the caller.
    pub fn parse_doc(content_type: ContentType, path: &Path) -> tripguide_core::Result<ContentDoc> {
        debug!(path = %path.display(), "parsing file");

        let raw = fs::read_to_string(path)?;
        let (frontmatter, body) = parse_frontmatter(&raw, path)?;
        frontmatter.validate(content_type, path)?;

        Ok(ContentDoc::new(content_type, frontmatter, body, path))
    }

    fn load_visible(&self, content_type: ContentType, path: &Path) -> Option<ContentDoc> {
        match Self::parse_doc(content_type, path) {
            Ok(doc) if !self.include_drafts && !doc.frontmatter.is_published() => {
                debug!(slug = %doc.slug, "skipping draft");
                None
            }
            Ok(doc) => Some(doc),
            Err(e) => {
                warn!(path = %path.display(), error = %e, "skipping invalid content file");
                None
            }
        }
    }
}

impl ContentSource for FsContentSource {
    fn docs_by_type(&self, content_type: ContentType) -> Result<Vec<ContentDoc>> {
        let files = self.content_files(content_type)?;

        let mut docs: Vec<ContentDoc> = files
            .par_iter()
            .filter_map(|path| self.load_visible(content_type, path))
            .collect();

        docs.sort_by(newest_first);

        info!(
            content_type = %content_type,
            files = files.len(),
            docs = docs.len(),
            "loaded collection"
        );

        Ok(docs)
    }
}

/// Order by `publishedAt` descending, then slug ascending.
fn newest_first(a: &ContentDoc, b: &ContentDoc) -> Ordering {
    match (b.frontmatter.published(), a.frontmatter.published()) {
        (Some(b_date), Some(a_date)) => b_date.cmp(&a_date),
        // undated documents sort last
        (Some(_), None) => Ordering::Greater,
        (None, Some(_)) => Ordering::Less,
        (None, None) => Ordering::Equal,
    }
    .then_with(|| a.slug.cmp(&b.slug))
}
