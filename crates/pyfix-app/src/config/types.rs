//! Configuration type definitions

use pyfix_client::{DEFAULT_SERVER_URL, DEFAULT_UPLOAD_PATH};
use serde::{Deserialize, Serialize};

/// Application settings (`pyfix.toml`)
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct Settings {
    #[serde(default)]
    pub server: ServerSettings,

    #[serde(default)]
    pub ui: UiSettings,
}

/// Where the analysis service lives
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct ServerSettings {
    /// Base URL of the analysis service
    #[serde(default = "default_server_url")]
    pub url: String,

    /// Route accepting the upload
    #[serde(default = "default_upload_path")]
    pub upload_path: String,
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            url: default_server_url(),
            upload_path: default_upload_path(),
        }
    }
}

/// Icon set used by the TUI
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum IconMode {
    /// Safe Unicode characters that work in all terminals
    #[default]
    Unicode,
    /// Nerd Font glyphs, requires a Nerd Font in the terminal
    NerdFonts,
}

impl std::fmt::Display for IconMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            IconMode::Unicode => write!(f, "unicode"),
            IconMode::NerdFonts => write!(f, "nerd_fonts"),
        }
    }
}

/// UI settings
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct UiSettings {
    #[serde(default)]
    pub icons: IconMode,
}

fn default_server_url() -> String {
    DEFAULT_SERVER_URL.to_string()
}

fn default_upload_path() -> String {
    DEFAULT_UPLOAD_PATH.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_settings_default() {
        let settings = Settings::default();
        assert_eq!(settings.server.url, "http://localhost:8000");
        assert_eq!(settings.server.upload_path, "/upload");
        assert_eq!(settings.ui.icons, IconMode::Unicode);
    }

    #[test]
    fn test_partial_toml_fills_defaults() {
        let settings: Settings = toml::from_str(
            r#"
            [server]
            url = "http://analysis.internal:9000"
            "#,
        )
        .unwrap();

        assert_eq!(settings.server.url, "http://analysis.internal:9000");
        assert_eq!(settings.server.upload_path, "/upload");
        assert_eq!(settings.ui, UiSettings::default());
    }

    #[test]
    fn test_icon_mode_parse() {
        let settings: Settings = toml::from_str("[ui]\nicons = \"nerd_fonts\"").unwrap();
        assert_eq!(settings.ui.icons, IconMode::NerdFonts);
        assert_eq!(settings.ui.icons.to_string(), "nerd_fonts");
    }
}
