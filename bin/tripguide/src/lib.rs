//! Tripguide CLI Library
//!
//! Command implementations for the `tripguide` binary: related and featured
//! content lookups, table-of-contents output, sitemap/robots generation and
//! content validation.
//!
//! # Modules
//!
//! - [`cmd`] - Command implementations (related, featured, toc, build, check)

pub mod cmd;

pub use tripguide_core::{Config, ContentDoc, ContentType};

/// Initialize tracing with the specified verbosity level.
///
/// # Arguments
///
/// * `verbose` - Verbosity level (0 = WARN, 1 = INFO, 2 = DEBUG, 3+ = TRACE)
pub fn init_tracing(verbose: u8) {
    use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

    let level = match verbose {
        0 => tracing::Level::WARN,
        1 => tracing::Level::INFO,
        2 => tracing::Level::DEBUG,
        _ => tracing::Level::TRACE,
    };

    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(tracing_subscriber::EnvFilter::from_default_env().add_directive(level.into()))
        .init();
}
