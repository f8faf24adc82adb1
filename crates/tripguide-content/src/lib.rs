//! Tripguide Content Library
//!
//! Loading of typed content collections and table-of-contents extraction.
//!
//! # Modules
//!
//! - [`source`] - The [`ContentSource`] accessor trait
//! - [`fs`] - Collections read from `.mdx` files on disk
//! - [`memory`] - Pre-built in-memory collections
//! - [`toc`] - Heading extraction and nesting

pub mod fs;
pub mod memory;
pub mod source;
pub mod toc;

pub use fs::FsContentSource;
pub use memory::MemoryContentSource;
pub use source::{ContentSource, Result, SourceError};
pub use toc::{NestedTocItem, TocItem, extract_toc, nest_toc};
