// SPDX-License-Identifier: MPL-2.0
//! Config directory resolution.
//!
//! # Resolution Order
//!
//! 1. **Explicit override** - `--config-dir` or a test directory
//! 2. **Environment variable** `SHOWREEL_CONFIG_DIR`
//! 3. **Platform default** via the `dirs` crate, with the app name appended:
//!    - Linux: `~/.config/Showreel/`
//!    - macOS: `~/Library/Application Support/Showreel/`
//!    - Windows: `C:\Users\<User>\AppData\Roaming\Showreel\`

use std::path::PathBuf;

/// Application name used for directory naming.
const APP_NAME: &str = "Showreel";

/// Environment variable to override the config directory.
pub const ENV_CONFIG_DIR: &str = "SHOWREEL_CONFIG_DIR";

/// Returns the application config directory path.
///
/// Returns `None` if the platform has no config directory.
pub fn get_app_config_dir() -> Option<PathBuf> {
    get_app_config_dir_with_override(None)
}

/// Returns the application config directory path with an optional override.
pub fn get_app_config_dir_with_override(override_path: Option<PathBuf>) -> Option<PathBuf> {
    if let Some(path) = override_path {
        return Some(path);
    }

    if let Ok(env_path) = std::env::var(ENV_CONFIG_DIR) {
        if !env_path.is_empty() {
            return Some(PathBuf::from(env_path));
        }
    }

    dirs::config_dir().map(|mut path| {
        path.push(APP_NAME);
        path
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    // Mutex to prevent parallel tests from interfering with each other's env vars
    static ENV_MUTEX: Mutex<()> = Mutex::new(());

    #[test]
    fn explicit_override_wins() {
        let _lock = ENV_MUTEX.lock().unwrap();
        std::env::set_var(ENV_CONFIG_DIR, "/tmp/from-env");
        let dir = get_app_config_dir_with_override(Some(PathBuf::from("/tmp/explicit")));
        std::env::remove_var(ENV_CONFIG_DIR);
        assert_eq!(dir, Some(PathBuf::from("/tmp/explicit")));
    }

    #[test]
    fn env_var_overrides_platform_default() {
        let _lock = ENV_MUTEX.lock().unwrap();
        std::env::set_var(ENV_CONFIG_DIR, "/tmp/from-env");
        let dir = get_app_config_dir();
        std::env::remove_var(ENV_CONFIG_DIR);
        assert_eq!(dir, Some(PathBuf::from("/tmp/from-env")));
    }

    #[test]
    fn empty_env_var_is_ignored() {
        let _lock = ENV_MUTEX.lock().unwrap();
        std::env::set_var(ENV_CONFIG_DIR, "");
        let dir = get_app_config_dir();
        std::env::remove_var(ENV_CONFIG_DIR);
        if let Some(path) = dir {
            assert!(path.ends_with(APP_NAME));
        }
    }
}
