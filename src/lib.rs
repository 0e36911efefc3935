//! PyFix Library
//!
//! Terminal client for a Python code analysis service. The interactive UI
//! lives in [`pyfix_tui`]; this crate adds the headless NDJSON mode used by
//! scripts.

pub mod headless;

// Re-export main entry points
pub use headless::runner::run_headless;
pub use pyfix_tui::run;
