//! Tripguide Related Content
//!
//! Ranks documents by how many tags they share with the page being viewed,
//! across several content collections, and picks featured documents when
//! there is nothing to rank.
//!
//! Collections come from a [`ContentSource`](tripguide_content::ContentSource)
//! passed in by the caller. Nothing is cached between calls.
//!
//! # Modules
//!
//! - [`collection`] - Per-type fetch outcome
//! - [`related`] - Tag-overlap scoring and ranking
//! - [`featured`] - Featured and latest content selection

pub mod collection;
pub mod featured;
pub mod related;

pub use collection::{Collection, fetch_collection};
pub use featured::{DEFAULT_FEATURED_MAX, DEFAULT_LATEST_LIMIT, featured_content, latest_across};
pub use related::{
    DEFAULT_RELATED_MAX, DEFAULT_RELATED_POSTS_LIMIT, RelatedQuery, ScoredDoc, related_content,
    related_posts, related_scored,
};
