//! Configuration file parsing for PyFix
//!
//! Looks for `pyfix.toml` in the working directory, then
//! `<config_dir>/pyfix/config.toml`, then falls back to defaults.

pub mod settings;
pub mod types;

pub use settings::{
    find_config_file, load_settings, load_settings_from, resolve_settings, CONFIG_FILENAME,
};
pub use types::*;
