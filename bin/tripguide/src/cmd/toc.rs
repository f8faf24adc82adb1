//! Toc command - print a document's table of contents

use std::path::Path;

use color_eyre::eyre::{Result, eyre};
use tripguide_content::{ContentSource, NestedTocItem, extract_toc, nest_toc};
use tripguide_core::ContentType;

use super::{content_source, load_config};

/// Run the toc command.
pub fn run(config_path: &Path, content_type: ContentType, slug: &str, max_level: u8) -> Result<()> {
    let config = load_config(config_path)?;
    let source = content_source(&config, config_path);

    let doc = source
        .doc_by_slug(content_type, slug)?
        .ok_or_else(|| eyre!("no {content_type} document with slug '{slug}'"))?;

    let toc = extract_toc(&doc.body, max_level);
    tracing::debug!(slug, headings = toc.len(), "Extracted table of contents");

    println!("{} ({})", doc.title(), doc.reading_time);
    for item in nest_toc(&toc) {
        print_item(&item, 0);
    }

    Ok(())
}

fn print_item(item: &NestedTocItem, depth: usize) {
    println!("{}- {} #{}", "  ".repeat(depth), item.item.text, item.item.id);
    for child in &item.children {
        print_item(child, depth + 1);
    }
}
