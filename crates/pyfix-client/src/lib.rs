//! # pyfix-client - Analysis Service Client
//!
//! The single seam between PyFix and the external analysis service: one
//! multipart `POST` per analysis, one JSON record back.
//!
//! Depends on [`pyfix_core`] for domain types and error handling.
//!
//! ## Public API
//!
//! - [`AnalysisService`] - Trait for anything that can analyze a [`SelectedFile`]
//! - [`HttpAnalysisClient`] - reqwest implementation posting to `/upload`
//! - [`Endpoint`] - Validated upload URL built from a server base and path
//!
//! [`SelectedFile`]: pyfix_core::SelectedFile

pub mod endpoint;
pub mod http;
pub mod service;
#[cfg(any(test, feature = "test-helpers"))]
pub mod test_utils;

// Public API re-exports
pub use endpoint::{Endpoint, DEFAULT_SERVER_URL, DEFAULT_UPLOAD_PATH, FILE_FIELD};
pub use http::HttpAnalysisClient;
pub use service::{AnalysisService, LocalAnalysisService};
