//! Command implementations.

pub mod build;
pub mod check;
pub mod featured;
pub mod related;
pub mod toc;

use std::path::{Path, PathBuf};

use color_eyre::eyre::{Result, WrapErr};
use tripguide_content::FsContentSource;
use tripguide_core::{Config, ContentDoc, config::ContentConfig};

/// Load the configuration, applying `TRIPGUIDE__*` environment overrides.
pub fn load_config(config_path: &Path) -> Result<Config> {
    Config::load_with_env(config_path).wrap_err("Failed to load configuration")
}

/// Content root, resolved against the config file's directory when relative.
pub fn content_root(config: &Config, config_path: &Path) -> PathBuf {
    let root = &config.content.root;
    if root.is_absolute() {
        return root.clone();
    }
    config_path
        .parent()
        .map(|dir| dir.join(root))
        .unwrap_or_else(|| root.clone())
}

/// Filesystem source for the `[content]` section, root resolved by
/// [`content_root`].
pub fn content_source(config: &Config, config_path: &Path) -> FsContentSource {
    let content = ContentConfig {
        root: content_root(config, config_path),
        ..config.content.clone()
    };
    FsContentSource::from_config(&content)
}

/// One listing line: title and site URL.
pub fn doc_line(config: &Config, doc: &ContentDoc) -> String {
    format!(
        "{} [{}] {}",
        doc.title(),
        doc.content_type,
        config.url_for(&doc.url_path())
    )
}

#[cfg(test)]
mod tests {
    use tripguide_content::ContentSource;
    use tripguide_core::ContentType;

    use super::*;

    #[test]
    fn test_content_root_relative_to_config() {
        let config = Config::new("Test", "https://example.com");
        assert_eq!(
            content_root(&config, Path::new("site/config.toml")),
            PathBuf::from("site/content")
        );
        assert_eq!(
            content_root(&config, Path::new("config.toml")),
            PathBuf::from("content")
        );
    }

    #[test]
    fn test_content_root_absolute() {
        let mut config = Config::new("Test", "https://example.com");
        config.content.root = PathBuf::from("/srv/content");
        assert_eq!(
            content_root(&config, Path::new("site/config.toml")),
            PathBuf::from("/srv/content")
        );
    }

    #[test]
    fn test_content_source_uses_resolved_root() {
        let dir = tempfile::tempdir().expect("create temp dir");
        let tips = dir.path().join("content/travel-tips");
        std::fs::create_dir_all(&tips).expect("mkdir");
        std::fs::write(
            tips.join("draft.mdx"),
            "---
title: \"Packing List for Naples\"
description: \"What to pack for a Naples beach vacation in every season of the year.\"
slug: packing-list
status: draft
publishedAt: 2024-03-01
updatedAt: 2024-03-01
featuredImage: /images/packing.jpg
---
Body",
        )
        .expect("write");

        let mut config = Config::new("Test", "https://example.com");
        let config_path = dir.path().join("config.toml");

        let source = content_source(&config, &config_path);
        assert_eq!(source.root(), dir.path().join("content"));
        assert!(source.docs_by_type(ContentType::TravelTip).unwrap().is_empty());

        config.content.include_drafts = true;
        let source = content_source(&config, &config_path);
        assert_eq!(
            source.all_slugs(ContentType::TravelTip).unwrap(),
            vec!["packing-list"]
        );
    }
}
