use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::state::SortMode;

/// Default catalog endpoint.
pub const DEFAULT_CATALOG_URL: &str = "http://localhost:3000/api/products";

/// Commented settings file written on first run.
pub const SETTINGS_SKELETON_CONTENT: &str = r#"# storefront settings
#
# Lines starting with # are comments. Remove the # to override a default.

# Catalog service endpoint; must answer {"success": true, "data": [...]}.
# catalog_url = "http://localhost:3000/api/products"

# Read the catalog from a local JSON file instead of the service.
# catalog_file = "/path/to/catalog.json"

# Whole-request timeout for catalog fetches, in seconds.
# request_timeout_secs = 15

# Initial price ordering: all | low_to_high | high_to_low
# sort_mode = "all"

# How long notifications stay visible, in seconds.
# notification_secs = 3
"#;

/// User-configurable settings parsed from `settings.toml`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Catalog service endpoint.
    pub catalog_url: String,
    /// Local catalog file; takes precedence over `catalog_url` when set.
    pub catalog_file: Option<PathBuf>,
    /// Request timeout in seconds.
    pub request_timeout_secs: u64,
    /// Initial sort mode key (see [`SortMode::from_config_key`]).
    pub sort_mode: String,
    /// Notification lifetime in seconds.
    pub notification_secs: u64,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            catalog_url: DEFAULT_CATALOG_URL.to_string(),
            catalog_file: None,
            request_timeout_secs: 15,
            sort_mode: SortMode::None.as_config_key().to_string(),
            notification_secs: 3,
        }
    }
}

impl Settings {
    /// Initial sort mode; unknown keys fall back to fetch order.
    #[must_use]
    pub fn initial_sort_mode(&self) -> SortMode {
        SortMode::from_config_key(&self.sort_mode).unwrap_or_else(|| {
            tracing::warn!(value = %self.sort_mode, "unknown sort_mode in settings; using \"all\"");
            SortMode::None
        })
    }
}

/// What: Load settings from `path`, writing the skeleton when the file is missing.
///
/// Inputs:
/// - `path`: Settings file location
///
/// Output:
/// - Parsed settings, or defaults when the file is missing, unreadable or invalid.
///
/// Details:
/// - Invalid TOML is reported with a warning and never aborts startup.
pub fn load_settings(path: &Path) -> Settings {
    if !path.exists() {
        ensure_settings_skeleton(path);
        return Settings::default();
    }
    let content = match fs::read_to_string(path) {
        Ok(c) => c,
        Err(e) => {
            tracing::warn!(path = %path.display(), error = %e, "could not read settings; using defaults");
            return Settings::default();
        }
    };
    match toml::from_str::<Settings>(&content) {
        Ok(s) => {
            tracing::info!(path = %path.display(), "loaded settings");
            s
        }
        Err(e) => {
            tracing::warn!(path = %path.display(), error = %e, "invalid settings file; using defaults");
            Settings::default()
        }
    }
}

/// Write the commented skeleton to `path` unless something is already there.
pub fn ensure_settings_skeleton(path: &Path) {
    if path.exists() {
        return;
    }
    if let Some(dir) = path.parent() {
        let _ = fs::create_dir_all(dir);
    }
    match fs::write(path, SETTINGS_SKELETON_CONTENT) {
        Ok(()) => tracing::info!(path = %path.display(), "wrote default settings skeleton"),
        Err(e) => tracing::debug!(path = %path.display(), error = %e, "could not write settings skeleton"),
    }
}
