//! Tripguide Core Library
//!
//! Content types, front-matter, configuration and error handling shared by the
//! Tripguide content crates.

pub mod config;
pub mod content;
pub mod error;
pub mod frontmatter;

pub use config::Config;
pub use content::{ContentDoc, ContentType};
pub use error::{CoreError, Result};
pub use frontmatter::{ContentStatus, Frontmatter};
