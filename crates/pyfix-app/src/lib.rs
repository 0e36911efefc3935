//! # pyfix-app - Application State and Orchestration
//!
//! The TEA (The Elm Architecture) core of PyFix. Owns the application state,
//! the message vocabulary, the pure `update` function, and the action layer
//! that turns [`UpdateAction`]s into background tasks.
//!
//! Depends on [`pyfix_core`] for domain types and [`pyfix_client`] for the
//! [`AnalysisService`] seam. Has no terminal dependency: key input arrives as
//! [`InputKey`], converted at the TUI boundary.
//!
//! ## Public API
//!
//! ### TEA Pattern
//! - [`AppState`] - Complete application state (the Model)
//! - [`Message`] - All possible events/actions
//! - [`handler::update()`] - State transition function
//! - [`UpdateAction`], [`UpdateResult`] - Effects requested by `update`
//!
//! ### Engine
//! - [`Engine`] - State plus message channel plus analysis service, shared by
//!   the TUI and headless runners
//!
//! ### Presentation helpers
//! - [`panels`] - Result and placeholder panel derivation
//!
//! ### Configuration
//! - [`config::Settings`] - `pyfix.toml` contents
//! - [`config::load_settings()`] - Load settings with fallback to defaults
//!
//! [`AnalysisService`]: pyfix_client::AnalysisService

pub mod actions;
pub mod config;
pub mod engine;
pub mod handler;
pub mod input_key;
pub mod message;
pub mod panels;
pub mod process;
pub mod signals;
pub mod state;

// Re-export primary types
pub use engine::Engine;
pub use handler::{UpdateAction, UpdateResult};
pub use input_key::InputKey;
pub use message::Message;
pub use panels::{PanelKind, ResultPanel};
pub use state::{AppState, PathInputState, ResultsViewState, UiMode};
