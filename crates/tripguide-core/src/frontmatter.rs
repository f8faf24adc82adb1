//! Front-matter parsing and validation for content files.

use std::{collections::BTreeMap, path::Path};

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};

use crate::{
    content::ContentType,
    error::{CoreError, Result},
};

/// Publication state of a document.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContentStatus {
    #[default]
    Draft,
    Published,
}

/// Front-matter shared by every content type.
///
/// Type-specific keys (itinerary `days`, hotel `priceLevel`, ...) are kept in
/// [`Frontmatter::extra`] and checked by [`Frontmatter::validate`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Frontmatter {
    /// Display title.
    #[serde(default)]
    pub title: String,

    /// Summary used for cards and meta tags.
    #[serde(default)]
    pub description: String,

    /// URL slug, unique within the content type.
    #[serde(default)]
    pub slug: String,

    /// Publication state.
    pub status: ContentStatus,

    /// ISO date or RFC 3339 timestamp.
    #[serde(default, deserialize_with = "date_string")]
    pub published_at: String,

    /// ISO date or RFC 3339 timestamp.
    #[serde(default, deserialize_with = "date_string")]
    pub updated_at: String,

    #[serde(default = "default_author")]
    pub author: String,

    /// Free-text labels used for related-content matching.
    #[serde(default)]
    pub tags: Vec<String>,

    #[serde(default)]
    pub featured_image: String,

    #[serde(default)]
    pub featured_image_alt: Option<String>,

    /// YouTube or Vimeo URL.
    #[serde(default)]
    pub video_url: Option<String>,

    #[serde(default)]
    pub canonical_url: Option<String>,

    /// Type-specific and custom fields.
    #[serde(default, flatten)]
    pub extra: BTreeMap<String, serde_yaml::Value>,
}

fn default_author() -> String {
    "Naples Vacation Planner".to_string()
}

/// Accept a quoted date (YAML) or a native TOML date/datetime.
fn date_string<'de, D>(deserializer: D) -> std::result::Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum DateValue {
        Text(String),
        Toml(toml::value::Datetime),
    }

    Ok(match DateValue::deserialize(deserializer)? {
        DateValue::Text(text) => text,
        DateValue::Toml(datetime) => datetime.to_string(),
    })
}

/// Delimiter types for frontmatter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FrontmatterFormat {
    /// YAML frontmatter delimited by `---`.
    Yaml,
    /// TOML frontmatter delimited by `+++`.
    Toml,
}

impl FrontmatterFormat {
    /// Get the delimiter string for this format.
    pub fn delimiter(&self) -> &'static str {
        match self {
            Self::Yaml => "---",
            Self::Toml => "+++",
        }
    }
}

/// Split content into frontmatter and body.
///
/// The closing delimiter must start a line.
pub fn split_frontmatter(content: &str) -> Option<(FrontmatterFormat, &str, &str)> {
    let content = content.trim_start();

    let format = if content.starts_with("---") {
        FrontmatterFormat::Yaml
    } else if content.starts_with("+++") {
        FrontmatterFormat::Toml
    } else {
        return None;
    };

    let delimiter = format.delimiter();
    let after_first = &content[delimiter.len()..];
    let closing = format!("\n{delimiter}");
    let closing_pos = after_first.find(&closing)?;

    let frontmatter = after_first[..closing_pos].trim();
    let body = after_first[closing_pos + closing.len()..].trim_start();

    Some((format, frontmatter, body))
}

/// Parse frontmatter and body from a document.
///
/// A document without a front-matter block is an error: every content type
/// requires at least a title and a slug.
pub fn parse_frontmatter(content: &str, path: &Path) -> Result<(Frontmatter, String)> {
    let Some((format, fm_str, body)) = split_frontmatter(content) else {
        return Err(CoreError::frontmatter(path, "missing front-matter block"));
    };

    let frontmatter: Frontmatter = match format {
        FrontmatterFormat::Yaml => {
            serde_yaml::from_str(fm_str).map_err(|e| CoreError::frontmatter(path, e.to_string()))?
        }
        FrontmatterFormat::Toml => {
            toml::from_str(fm_str).map_err(|e| CoreError::frontmatter(path, e.to_string()))?
        }
    };

    Ok((frontmatter, body.to_string()))
}

/// Parse an ISO date (`2024-01-15`) or a timestamp into UTC.
pub fn parse_timestamp(value: &str) -> Option<DateTime<Utc>> {
    let value = value.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(value) {
        return Some(dt.with_timezone(&Utc));
    }
    if let Ok(dt) = NaiveDateTime::parse_from_str(value, "%Y-%m-%dT%H:%M:%S%.f") {
        return Some(dt.and_utc());
    }
    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .map(|dt| dt.and_utc())
}

impl Frontmatter {
    /// Whether the document is visible without draft mode.
    pub fn is_published(&self) -> bool {
        self.status == ContentStatus::Published
    }

    /// Parsed `publishedAt`.
    pub fn published(&self) -> Option<DateTime<Utc>> {
        parse_timestamp(&self.published_at)
    }

    /// Parsed `updatedAt`.
    pub fn updated(&self) -> Option<DateTime<Utc>> {
        parse_timestamp(&self.updated_at)
    }

    /// Validate the shared fields and the keys required by `content_type`.
    pub fn validate(&self, content_type: ContentType, path: &Path) -> Result<()> {
        min_chars(path, "title", &self.title, 10)?;
        min_chars(path, "description", &self.description, 50)?;
        if self.description.chars().count() > 180 {
            return Err(CoreError::validation(
                path,
                "description",
                "must not exceed 180 characters",
            ));
        }
        min_chars(path, "slug", &self.slug, 3)?;
        min_chars(path, "author", &self.author, 2)?;

        if self.published().is_none() {
            return Err(CoreError::validation(
                path,
                "publishedAt",
                "must be an ISO date",
            ));
        }
        if self.updated().is_none() {
            return Err(CoreError::validation(
                path,
                "updatedAt",
                "must be an ISO date",
            ));
        }
        if self.featured_image.trim().is_empty() {
            return Err(CoreError::validation(path, "featuredImage", "is required"));
        }

        for (field, value) in [
            ("videoUrl", &self.video_url),
            ("canonicalUrl", &self.canonical_url),
        ] {
            if let Some(url) = value
                && !is_http_url(url)
            {
                return Err(CoreError::validation(path, field, "must be a URL"));
            }
        }

        self.validate_type_fields(content_type, path)
    }

    fn validate_type_fields(&self, content_type: ContentType, path: &Path) -> Result<()> {
        for key in required_keys(content_type) {
            if !self.extra.contains_key(*key) {
                return Err(CoreError::validation(path, *key, "is required"));
            }
        }

        match content_type {
            ContentType::Itinerary => {
                let days = self.extra.get("days").and_then(serde_yaml::Value::as_u64);
                if !matches!(days, Some(1..=14)) {
                    return Err(CoreError::validation(
                        path,
                        "days",
                        "must be an integer between 1 and 14",
                    ));
                }
                one_of(path, "pace", self.extra_str("pace"), &["relaxed", "balanced", "fast"])?;
                one_of(
                    path,
                    "audience",
                    self.extra_str("audience"),
                    &["couples", "families", "luxury", "nature", "all"],
                )?;
                self.optional_url(path, "mapEmbedUrl")?;
            }
            ContentType::WhereToStay => {
                self.extra_min_chars(path, "areaName", 3)?;
                self.optional_one_of(
                    path,
                    "priceRange",
                    &["budget", "mid-range", "luxury", "ultra-luxury"],
                )?;
            }
            ContentType::DayTrip => {
                self.extra_min_chars(path, "driveTimeFromNaples", 2)?;
                self.extra_min_chars(path, "bestSeason", 2)?;
                self.optional_one_of(path, "difficulty", &["easy", "moderate", "challenging"])?;
            }
            ContentType::TravelTip => {
                self.optional_one_of(path, "category", TRAVEL_TIP_CATEGORIES)?;
            }
            ContentType::Map => {
                self.optional_url(path, "downloadUrl")?;
                self.optional_url(path, "mapEmbedUrl")?;
                self.optional_one_of(
                    path,
                    "mapType",
                    &["interactive", "printable", "google-my-maps"],
                )?;
            }
            ContentType::Hotel => {
                self.extra_min_chars(path, "hotelName", 3)?;
                one_of(path, "category", self.extra_str("category"), HOTEL_CATEGORIES)?;
                self.extra_min_chars(path, "area", 3)?;
                one_of(
                    path,
                    "priceLevel",
                    self.extra_str("priceLevel"),
                    &["$", "$$", "$$$", "$$$$", "$$$$$"],
                )?;
                self.optional_url(path, "bookingUrl")?;
            }
            ContentType::Restaurant => {
                self.extra_min_chars(path, "restaurantName", 3)?;
                one_of(path, "cuisine", self.extra_str("cuisine"), CUISINES)?;
                one_of(
                    path,
                    "priceLevel",
                    self.extra_str("priceLevel"),
                    &["$", "$$", "$$$", "$$$$"],
                )?;
                self.extra_min_chars(path, "neighborhood", 3)?;
                self.extra_min_chars(path, "address", 10)?;
                self.optional_url(path, "website")?;
                self.optional_url(path, "reservationUrl")?;
            }
            ContentType::Event => {
                self.extra_min_chars(path, "eventName", 3)?;
                one_of(path, "category", self.extra_str("category"), EVENT_CATEGORIES)?;
                self.extra_min_chars(path, "venue", 3)?;
                self.extra_min_chars(path, "address", 10)?;
                self.optional_url(path, "website")?;
                self.optional_url(path, "ticketUrl")?;
            }
        }

        Ok(())
    }

    /// A type-specific key that must be a string of at least `min` characters.
    fn extra_min_chars(&self, path: &Path, field: &str, min: usize) -> Result<()> {
        min_chars(path, field, self.extra_str(field).unwrap_or_default(), min)
    }

    fn optional_one_of(&self, path: &Path, field: &str, allowed: &[&str]) -> Result<()> {
        if !self.extra.contains_key(field) {
            return Ok(());
        }
        one_of(path, field, self.extra_str(field), allowed)
    }

    fn optional_url(&self, path: &Path, field: &str) -> Result<()> {
        match self.extra.get(field) {
            None => Ok(()),
            Some(_) if self.extra_str(field).is_some_and(is_http_url) => Ok(()),
            Some(_) => Err(CoreError::validation(path, field, "must be a URL")),
        }
    }

    /// String value of a type-specific key.
    pub fn extra_str(&self, key: &str) -> Option<&str> {
        self.extra.get(key).and_then(serde_yaml::Value::as_str)
    }
}

const TRAVEL_TIP_CATEGORIES: &[&str] = &[
    "planning",
    "logistics",
    "seasonal",
    "budget",
    "activities",
    "dining",
];

const HOTEL_CATEGORIES: &[&str] = &[
    "luxury-resort",
    "boutique",
    "mid-range",
    "budget",
    "extended-stay",
    "vacation-rental",
    "golf-resort",
    "family-resort",
    "waterfront",
];

const CUISINES: &[&str] = &[
    "seafood",
    "italian",
    "american",
    "steakhouse",
    "asian",
    "mexican",
    "french",
    "mediterranean",
    "breakfast-brunch",
    "casual",
    "fine-dining",
];

const EVENT_CATEGORIES: &[&str] = &[
    "art-show",
    "festival",
    "farmers-market",
    "music",
    "food-drink",
    "sports",
    "holiday",
    "film",
    "community",
];

/// Keys that must be present in front-matter for each content type.
fn required_keys(content_type: ContentType) -> &'static [&'static str] {
    match content_type {
        ContentType::Itinerary => &["days", "pace", "audience"],
        ContentType::WhereToStay => &["areaName"],
        ContentType::DayTrip => &["driveTimeFromNaples", "bestSeason"],
        ContentType::Hotel => &["hotelName", "category", "area", "priceLevel"],
        ContentType::Restaurant => &[
            "restaurantName",
            "cuisine",
            "priceLevel",
            "neighborhood",
            "address",
        ],
        ContentType::Event => &["eventName", "category", "startDate", "venue", "address"],
        ContentType::TravelTip | ContentType::Map => &[],
    }
}

fn min_chars(path: &Path, field: &str, value: &str, min: usize) -> Result<()> {
    if value.chars().count() < min {
        return Err(CoreError::validation(
            path,
            field,
            format!("must be at least {min} characters"),
        ));
    }
    Ok(())
}

fn one_of(path: &Path, field: &str, value: Option<&str>, allowed: &[&str]) -> Result<()> {
    match value {
        Some(v) if allowed.contains(&v) => Ok(()),
        _ => Err(CoreError::validation(
            path,
            field,
            format!("must be one of {}", allowed.join(", ")),
        )),
    }
}

fn is_http_url(value: &str) -> bool {
    let rest = value
        .strip_prefix("https://")
        .or_else(|| value.strip_prefix("http://"));
    rest.is_some_and(|host| !host.is_empty())
}
