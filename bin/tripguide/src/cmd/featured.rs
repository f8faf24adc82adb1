//! Featured command - list the first documents of a type

use std::path::Path;

use color_eyre::eyre::Result;
use tripguide_core::ContentType;
use tripguide_related::featured_content;

use super::{content_source, doc_line, load_config};

/// Run the featured command.
pub fn run(config_path: &Path, content_type: ContentType, max: Option<usize>) -> Result<()> {
    let config = load_config(config_path)?;
    let source = content_source(&config, config_path);
    let max = max.unwrap_or(config.related.featured_max);

    tracing::info!(%content_type, max, "Selecting featured content");

    let featured = featured_content(&source, content_type, max);
    if featured.is_empty() {
        println!("No {content_type} content available");
        return Ok(());
    }

    for doc in &featured {
        println!("- {}", doc_line(&config, doc));
    }

    Ok(())
}
