use std::env;
use std::path::{Path, PathBuf};

/// Resolve an XDG base directory from environment or default to `$HOME` + segments.
///
/// Inputs:
/// - `var`: Environment variable to check (e.g., `XDG_CONFIG_HOME`).
/// - `home_default`: Fallback path segments relative to `$HOME` if `var` is unset/empty.
///
/// Output: Resolved base directory path.
fn xdg_base_dir(var: &str, home_default: &[&str]) -> PathBuf {
    if let Ok(p) = env::var(var)
        && !p.trim().is_empty()
    {
        return PathBuf::from(p);
    }
    let home = env::var("HOME").unwrap_or_else(|_| ".".to_string());
    home_default
        .iter()
        .fold(PathBuf::from(home), |base, seg| base.join(seg))
}

/// Config directory for storefront: `$XDG_CONFIG_HOME/storefront` or
/// `~/.config/storefront` (ensured to exist).
pub fn config_dir() -> PathBuf {
    let dir = xdg_base_dir("XDG_CONFIG_HOME", &[".config"]).join("storefront");
    if let Err(e) = std::fs::create_dir_all(&dir) {
        tracing::debug!(path = %dir.display(), error = %e, "could not create config dir");
    }
    dir
}

/// Logs directory under config: `<config_dir>/logs` (ensured to exist).
pub fn logs_dir() -> PathBuf {
    ensure_child(&config_dir(), "logs")
}

/// Default settings file: `<config_dir>/settings.toml`.
pub fn settings_path() -> PathBuf {
    config_dir().join("settings.toml")
}

fn ensure_child(base: &Path, name: &str) -> PathBuf {
    let dir = base.join(name);
    let _ = std::fs::create_dir_all(&dir);
    dir
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    /// What: Child directories are created under their base
    ///
    /// - Input: Temp dir base; child "logs"
    /// - Output: Returned path ends with "logs" and exists
    fn ensure_child_creates_directory() {
        let base = tempfile::tempdir().expect("tempdir");
        let logs = ensure_child(base.path(), "logs");
        assert!(logs.ends_with("logs"));
        assert!(logs.is_dir());
    }

    #[test]
    /// What: Settings file lives in the config dir
    ///
    /// - Input: Default environment
    /// - Output: `settings.toml` under a `storefront` directory
    fn settings_path_is_under_config_dir() {
        let path = settings_path();
        assert!(path.ends_with("storefront/settings.toml"));
    }
}
