//! Theme, paths and settings for storefront.
//!
//! Public re-exports keep the `crate::theme::*` API flat.

/// Path resolution for config directories.
mod paths;
/// Settings file loading and skeleton.
mod settings;
/// Built-in palette.
mod store;
/// Theme type definitions.
mod types;

pub use paths::{config_dir, logs_dir, settings_path};
pub use settings::{
    DEFAULT_CATALOG_URL, SETTINGS_SKELETON_CONTENT, Settings, ensure_settings_skeleton,
    load_settings,
};
pub use store::theme;
pub use types::Theme;
