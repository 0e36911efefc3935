//! Settings loading

use std::path::{Path, PathBuf};

use pyfix_core::prelude::*;

use super::types::Settings;

/// File name looked up in the working directory
pub const CONFIG_FILENAME: &str = "pyfix.toml";

const CONFIG_DIR_NAME: &str = "pyfix";
const USER_CONFIG_FILENAME: &str = "config.toml";

/// First existing config file: `<cwd>/pyfix.toml`, then
/// `<config_dir>/pyfix/config.toml`
pub fn find_config_file(working_dir: &Path) -> Option<PathBuf> {
    let local = working_dir.join(CONFIG_FILENAME);
    if local.is_file() {
        return Some(local);
    }

    dirs::config_dir()
        .map(|dir| dir.join(CONFIG_DIR_NAME).join(USER_CONFIG_FILENAME))
        .filter(|path| path.is_file())
}

/// Load settings for `working_dir`, or defaults when no config file exists
pub fn load_settings(working_dir: &Path) -> Settings {
    match find_config_file(working_dir) {
        Some(path) => load_settings_from(&path),
        None => {
            debug!("No config file found, using defaults");
            Settings::default()
        }
    }
}

/// Load settings from an explicit path. Read and parse failures are logged
/// and yield defaults.
pub fn load_settings_from(path: &Path) -> Settings {
    match read_settings(path) {
        Ok(settings) => {
            debug!("Loaded settings from {:?}", path);
            settings
        }
        Err(e) => {
            warn!("{}; using defaults", e);
            Settings::default()
        }
    }
}

fn read_settings(path: &Path) -> Result<Settings> {
    let content = std::fs::read_to_string(path)
        .map_err(|e| Error::config(format!("cannot read {}: {}", path.display(), e)))?;
    toml::from_str(&content)
        .map_err(|e| Error::config(format!("cannot parse {}: {}", path.display(), e)))
}

/// Settings for one run: an explicit `--config` file wins over the lookup in
/// `working_dir`, and `--server` replaces the configured base URL.
pub fn resolve_settings(
    working_dir: &Path,
    config_path: Option<&Path>,
    server_override: Option<&str>,
) -> Settings {
    let mut settings = match config_path {
        Some(path) => load_settings_from(path),
        None => load_settings(working_dir),
    };

    if let Some(url) = server_override {
        debug!("Server URL overridden: {}", url);
        settings.server.url = url.to_string();
    }

    settings
}
