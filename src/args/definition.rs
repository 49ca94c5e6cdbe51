//! Command-line argument definition and processing.

use std::path::PathBuf;

use clap::Parser;

use crate::state::SortMode;
use crate::theme::Settings;

/// storefront - browse, search and filter a product catalog in the terminal
#[derive(Parser, Debug, Clone, Default)]
#[command(name = "storefront")]
#[command(version)]
#[command(about = "Browse, search and filter a product catalog in the terminal", long_about = None)]
pub struct Args {
    /// Catalog service endpoint (overrides `catalog_url` in settings.toml)
    #[arg(long)]
    pub catalog_url: Option<String>,

    /// Load the catalog from a local JSON file instead of the service
    #[arg(long)]
    pub catalog_file: Option<PathBuf>,

    /// Initial price ordering (all, low-to-high, high-to-low)
    #[arg(long, value_parser = parse_sort_mode)]
    pub sort: Option<SortMode>,

    /// Submit this search right after startup
    #[arg(short, long)]
    pub query: Option<String>,

    /// Set the logging level (trace, debug, info, warn, error)
    #[arg(long, default_value = "info")]
    pub log_level: String,

    /// Enable verbose output (equivalent to --log-level debug)
    #[arg(short, long)]
    pub verbose: bool,

    /// Settings file to use instead of ~/.config/storefront/settings.toml
    #[arg(long)]
    pub config: Option<PathBuf>,
}

fn parse_sort_mode(s: &str) -> Result<SortMode, String> {
    SortMode::from_config_key(s)
        .ok_or_else(|| format!("unknown sort mode '{s}' (expected all, low-to-high or high-to-low)"))
}

impl Args {
    /// What: Overlay command-line values onto loaded settings.
    ///
    /// Inputs:
    /// - `settings`: Settings read from the config file
    ///
    /// Output:
    /// - Updated settings; CLI values win.
    ///
    /// Details:
    /// - `--catalog-url` clears a configured `catalog_file` so the URL is actually used.
    #[must_use]
    pub fn apply_to(&self, mut settings: Settings) -> Settings {
        if let Some(url) = &self.catalog_url {
            settings.catalog_url.clone_from(url);
            settings.catalog_file = None;
        }
        if let Some(path) = &self.catalog_file {
            settings.catalog_file = Some(path.clone());
        }
        if let Some(mode) = self.sort {
            settings.sort_mode = mode.as_config_key().to_string();
        }
        settings
    }
}

/// What: Determine the log level based on command-line arguments.
///
/// Inputs:
/// - `args`: Parsed command-line arguments.
///
/// Output:
/// - Log level string (trace, debug, info, warn, error).
///
/// Details:
/// - Verbose flag overrides `log_level`.
#[must_use]
pub fn determine_log_level(args: &Args) -> String {
    if args.verbose {
        "debug".to_string()
    } else {
        args.log_level.clone()
    }
}
