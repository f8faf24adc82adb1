//! Tripguide CLI
//!
//! Query related and featured travel content, print tables of contents,
//! generate sitemap/robots files and validate a content tree.
//!
//! This is the binary entry point. The library functionality is in `lib.rs`.

use clap::Parser;
use color_eyre::eyre::Result;
use tripguide::ContentType;

/// Command-line interface for Tripguide.
#[derive(Parser)]
#[command(
    name = "tripguide",
    version,
    about = "Related content, sitemaps and content checks for a travel guide site"
)]
struct Cli {
    /// Path to configuration file
    #[arg(short, long, default_value = "config.toml")]
    config: std::path::PathBuf,

    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

/// Available CLI commands.
#[derive(clap::Subcommand)]
enum Commands {
    /// List documents sharing tags with a document
    Related {
        /// Content type of the reference document (e.g. itinerary)
        content_type: ContentType,
        /// Slug of the reference document
        slug: String,
        /// Content types to search, comma separated
        #[arg(long, value_delimiter = ',')]
        types: Vec<ContentType>,
        /// Maximum number of results
        #[arg(long)]
        max: Option<usize>,
    },
    /// List the first documents of a content type
    Featured {
        /// Content type (e.g. hotel)
        content_type: ContentType,
        /// Maximum number of results
        #[arg(long)]
        max: Option<usize>,
    },
    /// Print a document's table of contents
    Toc {
        /// Content type of the document
        content_type: ContentType,
        /// Slug of the document
        slug: String,
        /// Deepest heading level to include
        #[arg(long, default_value_t = 3)]
        max_level: u8,
    },
    /// Write sitemap.xml and robots.txt
    Build {
        /// Output directory
        #[arg(short, long, default_value = "public")]
        output: std::path::PathBuf,
    },
    /// Validate configuration and content
    Check {
        /// Treat warnings as errors
        #[arg(long)]
        strict: bool,
    },
}

fn main() -> Result<()> {
    color_eyre::install()?;

    let cli = Cli::parse();
    tripguide::init_tracing(cli.verbose);

    match cli.command {
        Commands::Related {
            content_type,
            slug,
            types,
            max,
        } => {
            tripguide::cmd::related::run(&cli.config, content_type, &slug, &types, max)?;
        }
        Commands::Featured { content_type, max } => {
            tripguide::cmd::featured::run(&cli.config, content_type, max)?;
        }
        Commands::Toc {
            content_type,
            slug,
            max_level,
        } => {
            tripguide::cmd::toc::run(&cli.config, content_type, &slug, max_level)?;
        }
        Commands::Build { output } => {
            tripguide::cmd::build::run(&cli.config, &output)?;
        }
        Commands::Check { strict } => {
            tripguide::cmd::check::run(&cli.config, strict)?;
        }
    }

    Ok(())
}
