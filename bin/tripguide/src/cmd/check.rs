//! Check command - validate configuration and content

use std::{collections::HashMap, path::Path};

use color_eyre::eyre::{Result, bail};
use tripguide_content::FsContentSource;
use tripguide_core::{Config, ContentType};

use super::content_source;

/// Validation result.
#[derive(Debug, Default)]
struct ValidationResult {
    errors: Vec<String>,
    warnings: Vec<String>,
}

impl ValidationResult {
    fn add_error(&mut self, msg: impl Into<String>) {
        self.errors.push(msg.into());
    }

    fn add_warning(&mut self, msg: impl Into<String>) {
        self.warnings.push(msg.into());
    }

    fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    fn has_warnings(&self) -> bool {
        !self.warnings.is_empty()
    }
}

/// Run the check command.
///
/// Validates configuration, with the same `TRIPGUIDE__*` overrides the other
/// commands apply, and every content file of every type.
pub fn run(config_path: &Path, strict: bool) -> Result<()> {
    tracing::info!(?config_path, strict, "Checking configuration and content");

    let mut result = ValidationResult::default();

    println!("Checking configuration...");
    let config = match Config::load_with_env(config_path) {
        Ok(c) => {
            println!("  ✓ Configuration valid");
            c
        }
        Err(e) => {
            println!("  ✗ Configuration invalid: {e}");
            bail!("Configuration error: {e}");
        }
    };

    check_config_values(&config, &mut result);

    let source = content_source(&config, config_path).include_drafts(true);
    if source.root().exists() {
        println!("\nChecking content files...");
        validate_content(&source, &mut result);
    } else {
        result.add_error(format!(
            "Content directory does not exist: {}",
            source.root().display()
        ));
    }

    println!();
    println!("Summary:");
    println!("  Errors:   {}", result.errors.len());
    println!("  Warnings: {}", result.warnings.len());

    if result.has_errors() {
        println!();
        println!("Errors:");
        for err in &result.errors {
            println!("  ✗ {err}");
        }
    }

    if result.has_warnings() {
        println!();
        println!("Warnings:");
        for warn in &result.warnings {
            println!("  ⚠ {warn}");
        }
    }

    if result.has_errors() {
        bail!("Validation failed with {} error(s)", result.errors.len());
    }

    if strict && result.has_warnings() {
        bail!(
            "Validation failed with {} warning(s) (strict mode)",
            result.warnings.len()
        );
    }

    println!();
    println!("✓ All checks passed");

    Ok(())
}

/// Parse every document of every type, flagging invalid files and
/// duplicate slugs within a type.
fn validate_content(source: &FsContentSource, result: &mut ValidationResult) {
    for content_type in ContentType::ALL {
        let files = match source.content_files(content_type) {
            Ok(files) => files,
            Err(e) => {
                result.add_error(format!("{content_type}: {e}"));
                continue;
            }
        };

        if files.is_empty() {
            result.add_warning(format!(
                "No {content_type} content in {}",
                source.dir_for(content_type).display()
            ));
            continue;
        }

        let mut seen: HashMap<String, String> = HashMap::new();
        let mut failed = 0;
        let mut drafts = 0;

        for path in &files {
            match FsContentSource::parse_doc(content_type, path) {
                Ok(doc) => {
                    if !doc.frontmatter.is_published() {
                        drafts += 1;
                    }
                    let file = path.display().to_string();
                    if let Some(first) = seen.insert(doc.slug.clone(), file.clone()) {
                        result.add_error(format!(
                            "Duplicate {content_type} slug '{}' in {first} and {file}",
                            doc.slug
                        ));
                        failed += 1;
                    }
                }
                Err(e) => {
                    result.add_error(e.to_string());
                    failed += 1;
                }
            }
        }

        if failed == 0 {
            println!(
                "  ✓ {content_type}: {} files valid ({drafts} drafts)",
                files.len()
            );
        } else {
            println!("  ✗ {content_type}: {failed}/{} files have errors", files.len());
        }
    }
}

/// Check configuration values for common issues.
fn check_config_values(config: &Config, result: &mut ValidationResult) {
    if !config.site.base_url.starts_with("http") {
        result.add_warning("site.base_url should start with http:// or https://");
    }

    if config.related.max_results == 0 {
        result.add_warning("related.max_results is 0, related sections will be empty");
    }

    if config.related.content_types.is_empty() {
        result.add_warning("related.content_types is empty");
    }
}
