//! Build command - writes sitemap.xml and robots.txt

use std::{path::Path, time::Instant};

use chrono::Utc;
use color_eyre::eyre::{Result, WrapErr};
use tripguide_generator::{RobotsGenerator, SitemapGenerator};

use super::{content_source, load_config};

/// Run the build command.
pub fn run(config_path: &Path, output: &Path) -> Result<()> {
    let start = Instant::now();
    tracing::info!(?config_path, ?output, "Starting build");

    let config = load_config(config_path)?;
    let source = content_source(&config, config_path);

    SitemapGenerator::new(config.clone())
        .write_file(&source, Utc::now(), output)
        .wrap_err("Failed to write sitemap.xml")?;
    println!("  ✓ {}", output.join("sitemap.xml").display());

    let wrote_robots = RobotsGenerator::new(config)
        .generate(output)
        .wrap_err("Failed to write robots.txt")?;
    if wrote_robots {
        println!("  ✓ {}", output.join("robots.txt").display());
    }

    println!("Build finished in {:.2?}", start.elapsed());
    Ok(())
}
