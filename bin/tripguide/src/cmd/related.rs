//! Related command - list documents sharing tags with a document

use std::path::Path;

use color_eyre::eyre::{Result, eyre};
use tripguide_content::ContentSource;
use tripguide_core::{ContentDoc, ContentType};
use tripguide_related::{RelatedQuery, featured_content, related_scored};

use super::{content_source, doc_line, load_config};

/// Run the related command.
///
/// Falls back to featured documents of the same type when nothing shares a
/// tag with the reference document.
pub fn run(
    config_path: &Path,
    content_type: ContentType,
    slug: &str,
    types: &[ContentType],
    max: Option<usize>,
) -> Result<()> {
    tracing::info!(?config_path, %content_type, slug, "Finding related content");

    let config = load_config(config_path)?;
    let source = content_source(&config, config_path);

    let reference = source
        .doc_by_slug(content_type, slug)?
        .ok_or_else(|| eyre!("no {content_type} document with slug '{slug}'"))?;

    let content_types = if types.is_empty() {
        config.related.content_types.clone()
    } else {
        types.to_vec()
    };
    let query = RelatedQuery::for_doc(&reference)
        .content_types(content_types)
        .max_results(max.unwrap_or(config.related.max_results));

    println!("Related to: {}", doc_line(&config, &reference));

    let related = related_scored(&source, &query);
    if related.is_empty() {
        println!("  No related content, featured {content_type} instead:");
        for doc in featured_fallback(&source, &reference, config.related.featured_max) {
            println!("  - {}", doc_line(&config, &doc));
        }
        return Ok(());
    }

    for scored in &related {
        println!(
            "  {} shared: {}",
            scored.score,
            doc_line(&config, &scored.doc)
        );
    }

    Ok(())
}

/// Up to `max` featured documents of the reference's type, excluding the
/// reference itself.
fn featured_fallback<S: ContentSource + ?Sized>(
    source: &S,
    reference: &ContentDoc,
    max: usize,
) -> Vec<ContentDoc> {
    featured_content(source, reference.content_type, max.saturating_add(1))
        .into_iter()
        .filter(|doc| doc.slug != reference.slug)
        .take(max)
        .collect()
}

#[cfg(test)]
mod tests {
    use tripguide_content::MemoryContentSource;
    use tripguide_core::Frontmatter;

    use super::*;

    fn doc(slug: &str) -> ContentDoc {
        let fm = Frontmatter {
            slug: slug.to_string(),
            ..Frontmatter::default()
        };
        ContentDoc::new(ContentType::Hotel, fm, "", format!("{slug}.mdx"))
    }

    #[test]
    fn test_featured_fallback_skips_reference_and_keeps_count() {
        let source = MemoryContentSource::from_docs(["a", "b", "c", "d"].map(doc));

        let slugs = |docs: Vec<ContentDoc>| docs.into_iter().map(|d| d.slug).collect::<Vec<_>>();
        assert_eq!(slugs(featured_fallback(&source, &doc("a"), 2)), vec!["b", "c"]);
        assert_eq!(slugs(featured_fallback(&source, &doc("c"), 2)), vec!["a", "b"]);
        assert_eq!(slugs(featured_fallback(&source, &doc("z"), 2)), vec!["a", "b"]);
        assert!(featured_fallback(&source, &doc("a"), 0).is_empty());
    }
}
