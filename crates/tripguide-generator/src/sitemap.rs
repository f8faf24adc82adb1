//! Sitemap generation.
//!
//! Aggregates the configured static routes and every document of the
//! configured content types into a sitemaps.org XML document.

use std::{fs, io::Write, path::Path};

use chrono::{DateTime, Utc};
use thiserror::Error;
use tracing::{debug, info, warn};
use tripguide_content::ContentSource;
use tripguide_core::{Config, ContentDoc, ContentType};

/// Sitemap generation errors.
#[derive(Debug, Error)]
pub enum SitemapError {
    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for sitemap operations.
pub type Result<T> = std::result::Result<T, SitemapError>;

/// Change frequency for sitemap entries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChangeFreq {
    Always,
    Hourly,
    Daily,
    Weekly,
    Monthly,
    Yearly,
    Never,
}

impl ChangeFreq {
    fn as_str(&self) -> &'static str {
        match self {
            Self::Always => "always",
            Self::Hourly => "hourly",
            Self::Daily => "daily",
            Self::Weekly => "weekly",
            Self::Monthly => "monthly",
            Self::Yearly => "yearly",
            Self::Never => "never",
        }
    }
}

/// A sitemap URL entry.
#[derive(Debug, Clone, PartialEq)]
pub struct SitemapUrl {
    /// URL location.
    pub loc: String,

    /// Last modification date.
    pub lastmod: Option<DateTime<Utc>>,

    /// Change frequency.
    pub changefreq: ChangeFreq,

    /// Priority (0.0 to 1.0).
    pub priority: f32,
}

/// Sitemap generator.
#[derive(Debug)]
pub struct SitemapGenerator {
    config: Config,
}

impl SitemapGenerator {
    /// Create a new sitemap generator.
    #[must_use]
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    /// Collect every sitemap entry: static routes first, then content.
    ///
    /// `now` is the last-modified date of static routes. Content types that
    /// fail to load are logged and left out.
    pub fn entries<S: ContentSource + ?Sized>(&self, source: &S, now: DateTime<Utc>) -> Vec<SitemapUrl> {
        let mut urls: Vec<SitemapUrl> = self
            .config
            .sitemap
            .static_routes
            .iter()
            .map(|route| self.static_url(route, now))
            .collect();

        for content_type in &self.config.sitemap.content_types {
            match source.docs_by_type(*content_type) {
                Ok(docs) => {
                    debug!(content_type = %content_type, count = docs.len(), "adding content routes");
                    urls.extend(docs.iter().map(|doc| self.doc_url(doc)));
                }
                Err(e) => {
                    warn!(content_type = %content_type, error = %e, "sitemap: skipping content type");
                }
            }
        }

        urls
    }

    /// Generate sitemap XML.
    pub fn generate<S: ContentSource + ?Sized>(&self, source: &S, now: DateTime<Utc>) -> String {
        let urls = self.entries(source, now);
        debug!(count = urls.len(), "generating sitemap");

        let mut xml = String::from(r#"<?xml version="1.0" encoding="UTF-8"?>"#);
        xml.push('\n');
        xml.push_str(r#"<urlset xmlns="http://www.sitemaps.org/schemas/sitemap/0.9">"#);
        xml.push('\n');

        for url in &urls {
            xml.push_str(&url_to_xml(url));
        }

        xml.push_str("</urlset>\n");
        xml
    }

    /// Write sitemap to a writer.
    pub fn write_to<S, W>(&self, source: &S, now: DateTime<Utc>, writer: &mut W) -> Result<()>
    where
        S: ContentSource + ?Sized,
        W: Write,
    {
        let xml = self.generate(source, now);
        writer.write_all(xml.as_bytes())?;
        Ok(())
    }

    /// Write `sitemap.xml` into `output_dir`, creating the directory.
    pub fn write_file<S: ContentSource + ?Sized>(
        &self,
        source: &S,
        now: DateTime<Utc>,
        output_dir: &Path,
    ) -> Result<()> {
        fs::create_dir_all(output_dir)?;
        let path = output_dir.join("sitemap.xml");
        info!(path = %path.display(), "writing sitemap");
        let mut file = fs::File::create(path)?;
        self.write_to(source, now, &mut file)
    }

    fn static_url(&self, route: &str, now: DateTime<Utc>) -> SitemapUrl {
        let is_home = route.trim_matches('/').is_empty();
        SitemapUrl {
            loc: format!("{}{}", self.config.base_url(), route),
            lastmod: Some(now),
            changefreq: ChangeFreq::Weekly,
            priority: if is_home { 1.0 } else { 0.8 },
        }
    }

    fn doc_url(&self, doc: &ContentDoc) -> SitemapUrl {
        let priority = if doc.content_type == ContentType::Itinerary {
            0.9
        } else {
            0.7
        };
        SitemapUrl {
            loc: format!("{}{}", self.config.base_url(), doc.url_path()),
            lastmod: doc
                .frontmatter
                .updated()
                .or_else(|| doc.frontmatter.published()),
            changefreq: ChangeFreq::Monthly,
            priority,
        }
    }
}

/// Convert a URL entry to XML.
fn url_to_xml(url: &SitemapUrl) -> String {
    let mut xml = String::from("  <url>\n");

    xml.push_str(&format!("    <loc>{}</loc>\n", escape_xml(&url.loc)));

    if let Some(lastmod) = &url.lastmod {
        xml.push_str(&format!(
            "    <lastmod>{}</lastmod>\n",
            lastmod.format("%Y-%m-%d")
        ));
    }

    xml.push_str(&format!(
        "    <changefreq>{}</changefreq>\n",
        url.changefreq.as_str()
    ));
    xml.push_str(&format!("    <priority>{:.1}</priority>\n", url.priority));

    xml.push_str("  </url>\n");
    xml
}

/// Escape special XML characters.
fn escape_xml(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&apos;")
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;
    use tripguide_content::MemoryContentSource;
    use tripguide_core::Frontmatter;

    use super::*;

    fn test_config() -> Config {
        let mut config = Config::new("Naples Vacation Planner", "https://naples.example.com");
        config.sitemap.static_routes = vec!["".to_string(), "/about".to_string()];
        config
    }

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 3, 1, 12, 0, 0).unwrap()
    }

    fn doc(ty: ContentType, slug: &str, updated_at: &str) -> ContentDoc {
        let fm = Frontmatter {
            slug: slug.to_string(),
            published_at: "2024-01-01".to_string(),
            updated_at: updated_at.to_string(),
            ..Frontmatter::default()
        };
        ContentDoc::new(ty, fm, "", format!("{slug}.mdx"))
    }

    fn source() -> MemoryContentSource {
        MemoryContentSource::from_docs([
            doc(ContentType::Itinerary, "3-days-in-naples", "2024-02-10"),
            doc(ContentType::TravelTip, "best-time-to-visit", ""),
            doc(ContentType::Hotel, "beach-inn", "2024-02-10"),
        ])
    }

    #[test]
    fn test_static_routes_first() {
        let generator = SitemapGenerator::new(test_config());
        let urls = generator.entries(&source(), now());

        assert_eq!(urls[0].loc, "https://naples.example.com");
        assert_eq!(urls[0].priority, 1.0);
        assert_eq!(urls[0].changefreq, ChangeFreq::Weekly);
        assert_eq!(urls[0].lastmod, Some(now()));
        assert_eq!(urls[1].loc, "https://naples.example.com/about");
        assert_eq!(urls[1].priority, 0.8);
    }

    #[test]
    fn test_content_routes() {
        let generator = SitemapGenerator::new(test_config());
        let urls = generator.entries(&source(), now());

        // hotels are not in the default sitemap types; day trips and
        // where-to-stay collections are missing and skipped
        assert_eq!(urls.len(), 4);

        let itinerary = &urls[2];
        assert_eq!(
            itinerary.loc,
            "https://naples.example.com/itineraries/3-days-in-naples"
        );
        assert_eq!(itinerary.priority, 0.9);
        assert_eq!(itinerary.changefreq, ChangeFreq::Monthly);
        assert_eq!(
            itinerary.lastmod,
            Some(Utc.with_ymd_and_hms(2024, 2, 10, 0, 0, 0).unwrap())
        );

        let tip = &urls[3];
        assert_eq!(
            tip.loc,
            "https://naples.example.com/travel-tips/best-time-to-visit"
        );
        assert_eq!(tip.priority, 0.7);
        // falls back to publishedAt
        assert_eq!(
            tip.lastmod,
            Some(Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap())
        );
    }

    #[test]
    fn test_generate_sitemap_xml() {
        let generator = SitemapGenerator::new(test_config());
        let xml = generator.generate(&source(), now());

        assert!(xml.starts_with(r#"<?xml version="1.0" encoding="UTF-8"?>"#));
        assert!(xml.contains("<urlset"));
        assert!(xml.contains("<loc>https://naples.example.com/about</loc>"));
        assert!(xml.contains("<lastmod>2025-03-01</lastmod>"));
        assert!(xml.contains("<changefreq>monthly</changefreq>"));
        assert!(xml.contains("<priority>0.9</priority>"));
        assert!(!xml.contains("beach-inn"));
        assert!(xml.ends_with("</urlset>\n"));
    }

    #[test]
    fn test_escape_xml() {
        assert_eq!(escape_xml("a & b"), "a &amp; b");
        assert_eq!(escape_xml("<tag>"), "&lt;tag&gt;");
        assert_eq!(escape_xml("\"quoted\""), "&quot;quoted&quot;");
    }

    #[test]
    fn test_write_file() {
        let dir = tempfile::tempdir().expect("create temp dir");
        let out = dir.path().join("public");
        let generator = SitemapGenerator::new(test_config());

        generator
            .write_file(&source(), now(), &out)
            .expect("write sitemap");

        let written = fs::read_to_string(out.join("sitemap.xml")).expect("read");
        assert!(written.contains("3-days-in-naples"));
    }
}
