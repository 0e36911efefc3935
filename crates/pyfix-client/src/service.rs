//! Analysis service trait

use pyfix_core::{AnalysisResult, Result, SelectedFile};

/// Anything that can turn a selected Python file into an [`AnalysisResult`].
///
/// One call is one round trip. Implementations do not retry, time out, or
/// cache; failures come back as [`pyfix_core::Error`] values whose display
/// text is shown to the user as-is.
#[trait_variant::make(AnalysisService: Send)]
pub trait LocalAnalysisService {
    /// Upload `file` and return the parsed result record
    async fn analyze(&self, file: &SelectedFile) -> Result<AnalysisResult>;

    /// Human-readable target, for headers and logs
    fn describe(&self) -> String;
}
