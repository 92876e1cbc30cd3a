// SPDX-License-Identifier: MPL-2.0
//! Centralized path management for application directories.
//!
//! # Path Resolution Order
//!
//! Paths are resolved in the following priority order:
//! 1. **Explicit override** - parameter to `_with_override()` functions (for tests)
//! 2. **CLI arguments** (`--config-dir`, `--assets-dir`) - set via [`init_cli_overrides`]
//! 3. **Environment variables** (`FOLIO_CONFIG_DIR`, `FOLIO_ASSETS_DIR`)
//! 4. **Config file** (`[assets] root`, asset directory only)
//! 5. **Default** - platform config dir via `dirs`, or `assets/portfolio`

use crate::config::DEFAULT_ASSETS_DIR;
use std::path::{Path, PathBuf};
use std::sync::OnceLock;

/// Application name used for directory naming.
const APP_NAME: &str = "Folio";

/// Environment variable to override the config directory.
pub const ENV_CONFIG_DIR: &str = "FOLIO_CONFIG_DIR";

/// Environment variable to override the asset root.
pub const ENV_ASSETS_DIR: &str = "FOLIO_ASSETS_DIR";

static CLI_CONFIG_DIR: OnceLock<Option<PathBuf>> = OnceLock::new();
static CLI_ASSETS_DIR: OnceLock<Option<PathBuf>> = OnceLock::new();

/// Records the `--config-dir` and `--assets-dir` CLI arguments.
///
/// Only the first call has an effect; later calls are ignored.
pub fn init_cli_overrides(config_dir: Option<String>, assets_dir: Option<String>) {
    let _ = CLI_CONFIG_DIR.set(config_dir.map(PathBuf::from));
    let _ = CLI_ASSETS_DIR.set(assets_dir.map(PathBuf::from));
}

fn get_cli_config_dir() -> Option<PathBuf> {
    CLI_CONFIG_DIR.get().and_then(Clone::clone)
}

fn get_cli_assets_dir() -> Option<PathBuf> {
    CLI_ASSETS_DIR.get().and_then(Clone::clone)
}

fn non_empty_env(name: &str) -> Option<PathBuf> {
    std::env::var(name)
        .ok()
        .filter(|value| !value.is_empty())
        .map(PathBuf::from)
}

/// Returns the application config directory path.
///
/// Returns `None` if the platform config directory cannot be determined.
pub fn get_app_config_dir() -> Option<PathBuf> {
    get_app_config_dir_with_override(None)
}

/// Returns the application config directory path with an optional override.
pub fn get_app_config_dir_with_override(override_path: Option<PathBuf>) -> Option<PathBuf> {
    if let Some(path) = override_path {
        return Some(path);
    }

    if let Some(path) = get_cli_config_dir() {
        return Some(path);
    }

    if let Some(path) = non_empty_env(ENV_CONFIG_DIR) {
        return Some(path);
    }

    dirs::config_dir().map(|mut path| {
        path.push(APP_NAME);
        path
    })
}

/// Returns the asset root, given the `[assets] root` value from the config.
pub fn get_assets_dir(config_root: Option<&Path>) -> PathBuf {
    get_assets_dir_with_override(None, config_root)
}

/// Returns the asset root with an optional explicit override.
pub fn get_assets_dir_with_override(
    override_path: Option<PathBuf>,
    config_root: Option<&Path>,
) -> PathBuf {
    if let Some(path) = override_path {
        return path;
    }

    if let Some(path) = get_cli_assets_dir() {
        return path;
    }

    if let Some(path) = non_empty_env(ENV_ASSETS_DIR) {
        return path;
    }

    config_root
        .map(Path::to_path_buf)
        .unwrap_or_else(|| PathBuf::from(DEFAULT_ASSETS_DIR))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    // Mutex to prevent parallel tests from interfering with each other's env vars
    static ENV_MUTEX: Mutex<()> = Mutex::new(());

    #[test]
    fn app_config_dir_contains_app_name() {
        let _lock = ENV_MUTEX.lock().unwrap();
        std::env::remove_var(ENV_CONFIG_DIR);

        if let Some(path) = get_app_config_dir() {
            assert!(
                path.to_string_lossy().contains(APP_NAME),
                "App config dir should contain app name"
            );
        }
    }

    #[test]
    fn override_path_takes_precedence_for_config_dir() {
        let override_path = PathBuf::from("/custom/config/path");
        let result = get_app_config_dir_with_override(Some(override_path.clone()));
        assert_eq!(result, Some(override_path));
    }

    #[test]
    fn env_var_overrides_default_config_dir() {
        let _lock = ENV_MUTEX.lock().unwrap();
        let test_path = "/test/config/dir";
        std::env::set_var(ENV_CONFIG_DIR, test_path);

        let result = get_app_config_dir();
        assert_eq!(result, Some(PathBuf::from(test_path)));

        std::env::remove_var(ENV_CONFIG_DIR);
    }

    #[test]
    fn assets_dir_prefers_env_over_config() {
        let _lock = ENV_MUTEX.lock().unwrap();
        std::env::set_var(ENV_ASSETS_DIR, "/env/assets");

        let result = get_assets_dir(Some(Path::new("/config/assets")));
        assert_eq!(result, PathBuf::from("/env/assets"));

        std::env::remove_var(ENV_ASSETS_DIR);
    }

    #[test]
    fn assets_dir_uses_config_then_default() {
        let _lock = ENV_MUTEX.lock().unwrap();
        std::env::remove_var(ENV_ASSETS_DIR);

        assert_eq!(
            get_assets_dir(Some(Path::new("/config/assets"))),
            PathBuf::from("/config/assets")
        );
        assert_eq!(get_assets_dir(None), PathBuf::from(DEFAULT_ASSETS_DIR));
    }

    #[test]
    fn empty_env_var_is_ignored() {
        let _lock = ENV_MUTEX.lock().unwrap();
        std::env::set_var(ENV_ASSETS_DIR, "");

        assert_eq!(get_assets_dir(None), PathBuf::from(DEFAULT_ASSETS_DIR));

        std::env::remove_var(ENV_ASSETS_DIR);
    }

    #[test]
    fn explicit_override_beats_everything() {
        let _lock = ENV_MUTEX.lock().unwrap();
        std::env::set_var(ENV_ASSETS_DIR, "/env/assets");

        let result = get_assets_dir_with_override(
            Some(PathBuf::from("/override")),
            Some(Path::new("/config/assets")),
        );
        assert_eq!(result, PathBuf::from("/override"));

        std::env::remove_var(ENV_ASSETS_DIR);
    }
}
