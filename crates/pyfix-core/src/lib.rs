//! # pyfix-core - Core Domain Types
//!
//! Foundation crate for PyFix. Provides the domain types shared by every other
//! crate, error handling, and logging setup.
//!
//! This crate has **zero internal dependencies** -- it only depends on external
//! crates (serde, chrono, thiserror, tracing).
//!
//! ## Public API
//!
//! ### Domain Types (`types`)
//! - [`FileCandidate`] - A file the user picked, not yet validated
//! - [`SelectedFile`] - A validated `.py` file ready for upload
//! - [`AnalysisResult`] - The eight-field record returned by the analysis service
//! - [`AnalysisRecord`] - An [`AnalysisResult`] with its local receive time
//! - [`AppPhase`] - Application lifecycle phase (Running, Quitting)
//!
//! ### Error Handling (`error`)
//! - [`Error`] - Custom error enum with `fatal` vs `recoverable` classification
//! - [`Result`] - Type alias for `std::result::Result<T, Error>`
//! - [`ResultExt`] - Extension trait for adding error context
//!
//! ## Prelude
//!
//! Import commonly used types with:
//! ```rust
//! use pyfix_core::prelude::*;
//! ```

pub mod error;
pub mod logging;
pub mod types;

/// Prelude for common imports used throughout all PyFix crates
pub mod prelude {
    pub use super::error::{Error, Result, ResultExt};
    pub use tracing::{debug, error, info, instrument, trace, warn};
}

// Re-export commonly used types at crate root for convenience
pub use error::{Error, Result, ResultExt};
pub use types::{
    AnalysisRecord, AnalysisResult, AppPhase, FileCandidate, SelectedFile, PYTHON_EXTENSION,
};
