//! Table of contents extraction for MDX bodies.
//!
//! Heading ids match the anchors the site's heading-slug plugin emits, so TOC
//! links resolve against rendered pages.

use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

/// Deepest heading level included by default (`##` and `###`).
pub const DEFAULT_MAX_LEVEL: u8 = 3;

static HEADING_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?m)^(#{2,6})[ \t]+(.+)$").expect("valid regex"));

/// A single heading.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TocItem {
    /// Anchor id.
    pub id: String,
    /// Heading text.
    pub text: String,
    /// Heading level (2-6).
    pub level: u8,
}

/// A heading with the headings nested under it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NestedTocItem {
    #[serde(flatten)]
    pub item: TocItem,
    pub children: Vec<NestedTocItem>,
}

/// Extract `##`..`######` headings up to `max_level`, in document order.
///
/// Level-1 headings are the page title and never appear.
pub fn extract_toc(content: &str, max_level: u8) -> Vec<TocItem> {
    HEADING_RE
        .captures_iter(content)
        .filter_map(|caps| {
            let level = caps[1].len() as u8;
            if level > max_level {
                return None;
            }
            let text = caps[2].trim().to_string();
            Some(TocItem {
                id: slugify(&text),
                text,
                level,
            })
        })
        .collect()
}

/// Turn a flat heading list into a tree.
///
/// Each item becomes a child of the closest preceding item with a lower
/// level; items with no such ancestor are roots.
pub fn nest_toc(items: &[TocItem]) -> Vec<NestedTocItem> {
    let mut roots: Vec<NestedTocItem> = Vec::new();
    // open ancestors, innermost last
    let mut stack: Vec<NestedTocItem> = Vec::new();

    for item in items {
        while stack.last().is_some_and(|open| open.item.level >= item.level) {
            close_last(&mut stack, &mut roots);
        }
        stack.push(NestedTocItem {
            item: item.clone(),
            children: Vec::new(),
        });
    }
    while !stack.is_empty() {
        close_last(&mut stack, &mut roots);
    }

    roots
}

fn close_last(stack: &mut Vec<NestedTocItem>, roots: &mut Vec<NestedTocItem>) {
    if let Some(done) = stack.pop() {
        match stack.last_mut() {
            Some(parent) => parent.children.push(done),
            None => roots.push(done),
        }
    }
}

/// Convert heading text to an anchor id.
///
/// Keeps ASCII word characters, whitespace and `-`; whitespace runs become a
/// single `-`; repeated and edge hyphens are dropped.
pub fn slugify(text: &str) -> String {
    text.to_lowercase()
        .chars()
        .filter(|c| c.is_ascii_alphanumeric() || *c == '_' || *c == '-' || c.is_whitespace())
        .map(|c| if c.is_whitespace() { '-' } else { c })
        .collect::<String>()
        .split('-')
        .filter(|s| !s.is_empty())
        .collect::<Vec<_>>()
        .join("-")
}

#[cfg(test)]
mod tests {
    use super::*;

    const BODY: &str = "# Page title

Intro.

## Day 1: Old Naples

### Morning on 5th Avenue South

#### Coffee stops

## Day 2 -- Marco Island

###### Deep note
";

    #[test]
    fn test_extract_default_levels() {
        let toc = extract_toc(BODY, DEFAULT_MAX_LEVEL);

        let texts: Vec<_> = toc.iter().map(|t| t.text.as_str()).collect();
        assert_eq!(
            texts,
            vec![
                "Day 1: Old Naples",
                "Morning on 5th Avenue South",
                "Day 2 -- Marco Island"
            ]
        );
        assert_eq!(toc[0].level, 2);
        assert_eq!(toc[1].level, 3);
        assert_eq!(toc[0].id, "day-1-old-naples");
        assert_eq!(toc[2].id, "day-2-marco-island");
    }

    #[test]
    fn test_extract_all_levels() {
        let toc = extract_toc(BODY, 6);
        assert_eq!(toc.len(), 5);
        assert_eq!(toc[4].level, 6);
    }

    #[test]
    fn test_heading_needs_space() {
        assert!(extract_toc("##NoSpace\n####### seven", 6).is_empty());
    }

    #[test]
    fn test_slugify() {
        assert_eq!(slugify("Hello World"), "hello-world");
        assert_eq!(slugify("  Where to Eat?  "), "where-to-eat");
        assert_eq!(slugify("Multiple   Spaces"), "multiple-spaces");
        assert_eq!(slugify("Special!@#Chars"), "specialchars");
        assert_eq!(slugify("snake_case kept"), "snake_case-kept");
        assert_eq!(slugify("Café Lurcat"), "caf-lurcat");
    }

    #[test]
    fn test_nest_toc() {
        let toc = extract_toc(BODY, 6);
        let nested = nest_toc(&toc);

        assert_eq!(nested.len(), 2);
        assert_eq!(nested[0].item.text, "Day 1: Old Naples");
        assert_eq!(nested[0].children.len(), 1);
        assert_eq!(nested[0].children[0].children[0].item.text, "Coffee stops");
        assert_eq!(nested[1].children.len(), 1);
        assert_eq!(nested[1].children[0].item.level, 6);
    }

    #[test]
    fn test_nest_toc_starting_deep() {
        let items = vec![
            TocItem {
                id: "a".into(),
                text: "A".into(),
                level: 3,
            },
            TocItem {
                id: "b".into(),
                text: "B".into(),
                level: 2,
            },
        ];
        let nested = nest_toc(&items);
        assert_eq!(nested.len(), 2);
        assert!(nested.iter().all(|n| n.children.is_empty()));
    }
}
