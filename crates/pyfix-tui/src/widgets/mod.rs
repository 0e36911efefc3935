//! Custom widget components

mod error_banner;
mod file_bar;
mod header;
mod path_prompt;
mod result_panel;
mod status_bar;

pub use error_banner::ErrorBanner;
pub use file_bar::{FileBar, ANALYZE_LABEL, BUSY_LABEL};
pub use header::MainHeader;
pub use path_prompt::PathPrompt;
pub use result_panel::ResultPanelView;
pub use status_bar::StatusBar;
