//! Content types and documents.

use std::{
    fmt,
    path::{Path, PathBuf},
    str::FromStr,
};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::frontmatter::Frontmatter;

/// Reading speed used for the reading-time label.
const WORDS_PER_MINUTE: usize = 200;

/// Category of travel-guide document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ContentType {
    Itinerary,
    WhereToStay,
    DayTrip,
    TravelTip,
    Map,
    Hotel,
    Restaurant,
    Event,
}

/// Unknown content type identifier.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown content type: {0}")]
pub struct ParseContentTypeError(pub String);

impl ContentType {
    /// Every content type, in declaration order.
    pub const ALL: [ContentType; 8] = [
        Self::Itinerary,
        Self::WhereToStay,
        Self::DayTrip,
        Self::TravelTip,
        Self::Map,
        Self::Hotel,
        Self::Restaurant,
        Self::Event,
    ];

    /// The long-form guide types searched for related content by default.
    pub const GUIDES: [ContentType; 4] = [
        Self::Itinerary,
        Self::TravelTip,
        Self::DayTrip,
        Self::WhereToStay,
    ];

    /// Identifier used in front-matter, config and on the command line.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Itinerary => "itinerary",
            Self::WhereToStay => "where-to-stay",
            Self::DayTrip => "day-trip",
            Self::TravelTip => "travel-tip",
            Self::Map => "map",
            Self::Hotel => "hotel",
            Self::Restaurant => "restaurant",
            Self::Event => "event",
        }
    }

    /// Directory under the content root holding documents of this type.
    pub fn dir_name(&self) -> &'static str {
        match self {
            Self::Itinerary => "itineraries",
            Self::WhereToStay => "where-to-stay",
            Self::DayTrip => "day-trips",
            Self::TravelTip => "travel-tips",
            Self::Map => "maps",
            Self::Hotel => "hotels",
            Self::Restaurant => "restaurants",
            Self::Event => "events",
        }
    }

    /// First URL path segment for documents of this type.
    ///
    /// Routes mirror the content directories.
    pub fn route_base(&self) -> &'static str {
        self.dir_name()
    }
}

impl fmt::Display for ContentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ContentType {
    type Err = ParseContentTypeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let needle = s.trim().to_lowercase();
        Self::ALL
            .into_iter()
            .find(|ty| ty.as_str() == needle || ty.dir_name() == needle)
            .ok_or_else(|| ParseContentTypeError(s.to_string()))
    }
}

/// A parsed content document: one `.mdx` file of a given type.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContentDoc {
    /// Type the document was loaded as.
    pub content_type: ContentType,

    /// URL slug, unique within the content type.
    pub slug: String,

    /// Validated front-matter.
    pub frontmatter: Frontmatter,

    /// MDX body without front-matter.
    pub body: String,

    /// Human readable reading time, e.g. "6 min read".
    pub reading_time: String,

    /// Source file path.
    pub file_path: PathBuf,
}

impl ContentDoc {
    /// Assemble a document from its parts.
    pub fn new(
        content_type: ContentType,
        frontmatter: Frontmatter,
        body: impl Into<String>,
        file_path: impl AsRef<Path>,
    ) -> Self {
        let body = body.into();
        Self {
            content_type,
            slug: frontmatter.slug.clone(),
            reading_time: reading_time(&body),
            frontmatter,
            body,
            file_path: file_path.as_ref().to_path_buf(),
        }
    }

    /// Tags declared in front-matter.
    pub fn tags(&self) -> &[String] {
        &self.frontmatter.tags
    }

    /// Display title.
    pub fn title(&self) -> &str {
        &self.frontmatter.title
    }

    /// Site-relative URL path, e.g. `/itineraries/3-day-naples`.
    pub fn url_path(&self) -> String {
        format!("/{}/{}", self.content_type.route_base(), self.slug)
    }
}

/// Reading-time label for a body of text.
pub fn reading_time(body: &str) -> String {
    let words = body.split_whitespace().count();
    let minutes = words.div_ceil(WORDS_PER_MINUTE).max(1);
    format!("{minutes} min read")
}
