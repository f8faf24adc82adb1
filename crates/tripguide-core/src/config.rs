//! Site configuration management.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::{
    content::ContentType,
    error::{CoreError, Result},
};

/// Main configuration structure for Tripguide.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Site-wide settings.
    pub site: SiteConfig,

    /// Content loading settings.
    #[serde(default)]
    pub content: ContentConfig,

    /// Related and featured content settings.
    #[serde(default)]
    pub related: RelatedConfig,

    /// Sitemap settings.
    #[serde(default)]
    pub sitemap: SitemapConfig,

    /// Robots.txt settings.
    #[serde(default)]
    pub robots: RobotsConfig,
}

/// Site-wide configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SiteConfig {
    /// Site title.
    pub title: String,

    /// Base URL for the site (e.g., "https://example.com").
    pub base_url: String,

    /// Default author for content without one.
    #[serde(default)]
    pub author: Option<String>,
}

/// Content loading configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContentConfig {
    /// Root directory holding one sub-directory per content type.
    #[serde(default = "default_content_root")]
    pub root: PathBuf,

    /// Whether drafts are loaded.
    #[serde(default)]
    pub include_drafts: bool,
}

/// Related and featured content configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RelatedConfig {
    /// Content types searched for related documents.
    #[serde(default = "default_guide_types")]
    pub content_types: Vec<ContentType>,

    /// Maximum number of related documents.
    #[serde(default = "default_related_max")]
    pub max_results: usize,

    /// Maximum number of featured documents.
    #[serde(default = "default_featured_max")]
    pub featured_max: usize,
}

/// Sitemap configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SitemapConfig {
    /// Fixed routes listed before content routes. `""` is the home page.
    #[serde(default = "default_static_routes")]
    pub static_routes: Vec<String>,

    /// Content types listed in the sitemap.
    #[serde(default = "default_guide_types")]
    pub content_types: Vec<ContentType>,
}

/// Robots.txt configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RobotsConfig {
    /// Whether robots.txt is generated.
    #[serde(default = "default_true")]
    pub enabled: bool,

    /// Allowed paths.
    #[serde(default = "default_robots_allow")]
    pub allow: Vec<String>,

    /// Disallowed paths.
    #[serde(default = "default_robots_disallow")]
    pub disallow: Vec<String>,
}

// Default value functions
fn default_content_root() -> PathBuf {
    PathBuf::from("content")
}

fn default_guide_types() -> Vec<ContentType> {
    ContentType::GUIDES.to_vec()
}

fn default_related_max() -> usize {
    6
}

fn default_featured_max() -> usize {
    4
}

fn default_static_routes() -> Vec<String> {
    [
        "",
        "/itineraries",
        "/where-to-stay",
        "/day-trips",
        "/travel-tips",
        "/about",
        "/authors",
        "/editorial-standards",
        "/reviews",
        "/privacy",
        "/terms",
    ]
    .into_iter()
    .map(String::from)
    .collect()
}

fn default_true() -> bool {
    true
}

fn default_robots_allow() -> Vec<String> {
    vec!["/".to_string()]
}

fn default_robots_disallow() -> Vec<String> {
    vec!["/api/".to_string(), "/studio/".to_string()]
}

impl Default for ContentConfig {
    fn default() -> Self {
        Self {
            root: default_content_root(),
            include_drafts: false,
        }
    }
}

impl Default for RelatedConfig {
    fn default() -> Self {
        Self {
            content_types: default_guide_types(),
            max_results: default_related_max(),
            featured_max: default_featured_max(),
        }
    }
}

impl Default for SitemapConfig {
    fn default() -> Self {
        Self {
            static_routes: default_static_routes(),
            content_types: default_guide_types(),
        }
    }
}

impl Default for RobotsConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            allow: default_robots_allow(),
            disallow: default_robots_disallow(),
        }
    }
}

impl Config {
    /// Minimal configuration for a site, everything else defaulted.
    pub fn new(title: impl Into<String>, base_url: impl Into<String>) -> Self {
        Self {
            site: SiteConfig {
                title: title.into(),
                base_url: base_url.into(),
                author: None,
            },
            content: ContentConfig::default(),
            related: RelatedConfig::default(),
            sitemap: SitemapConfig::default(),
            robots: RobotsConfig::default(),
        }
    }

    /// Load configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(CoreError::config(format!(
                "Configuration file not found: {}",
                path.display()
            )));
        }

        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content).map_err(|e| {
            CoreError::config_with_source(
                format!("Failed to parse config file: {}", path.display()),
                e,
            )
        })?;

        config.validate()?;
        Ok(config)
    }

    /// Load configuration with `TRIPGUIDE__SECTION__KEY` environment overrides.
    pub fn load_with_env(path: &Path) -> Result<Self> {
        let settings = config::Config::builder()
            .add_source(config::File::from(path))
            .add_source(config::Environment::with_prefix("TRIPGUIDE").separator("__"))
            .build()?;

        let config: Config = settings.try_deserialize()?;
        config.validate()?;
        Ok(config)
    }

    /// Validate the configuration.
    fn validate(&self) -> Result<()> {
        if self.site.title.is_empty() {
            return Err(CoreError::config("site.title cannot be empty"));
        }

        if self.site.base_url.is_empty() {
            return Err(CoreError::config("site.base_url cannot be empty"));
        }

        if self.site.base_url.ends_with('/') {
            tracing::warn!("site.base_url should not have a trailing slash");
        }

        Ok(())
    }

    /// Base URL without a trailing slash.
    pub fn base_url(&self) -> &str {
        self.site.base_url.trim_end_matches('/')
    }

    /// Get the full URL for a path.
    pub fn url_for(&self, path: &str) -> String {
        let path = path.trim_start_matches('/');
        format!("{}/{path}", self.base_url())
    }
}
