//! Tripguide Generator Library
//!
//! Search-engine files for a Tripguide site.
//!
//! # Modules
//!
//! - [`sitemap`] - XML sitemap aggregated from static routes and content collections
//! - [`robots`] - robots.txt generation

pub mod robots;
pub mod sitemap;

pub use robots::RobotsGenerator;
pub use sitemap::{ChangeFreq, SitemapGenerator, SitemapUrl};
