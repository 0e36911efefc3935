//! Result panel derivation
//!
//! Maps an [`AnalysisResult`] onto the panels the results region shows. The
//! TUI only styles what these functions produce.

use pyfix_core::AnalysisResult;

/// Number of panels for a result
pub const RESULT_PANEL_COUNT: usize = 6;

/// Number of panels shown before any result arrives
pub const PLACEHOLDER_PANEL_COUNT: usize = 2;

/// Which panel this is; picks the icon and accent color
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PanelKind {
    // Placeholders
    GettingStarted,
    Checks,

    // Result groups
    Syntax,
    Style,
    OriginalTests,
    Explanation,
    FixedCode,
    FixedTests,
}

impl PanelKind {
    pub fn is_placeholder(&self) -> bool {
        matches!(self, PanelKind::GettingStarted | PanelKind::Checks)
    }

    /// Code-like bodies render without wrapping
    pub fn is_code(&self) -> bool {
        matches!(self, PanelKind::FixedCode)
    }
}

/// One titled block of the results region
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResultPanel {
    pub kind: PanelKind,
    pub title: &'static str,
    pub body: String,
    /// PASSED/FAILED badge; `None` for panels without one
    pub status: Option<bool>,
}

impl ResultPanel {
    fn new(kind: PanelKind, title: &'static str, body: impl Into<String>) -> Self {
        Self {
            kind,
            title,
            body: body.into(),
            status: None,
        }
    }

    fn with_status(mut self, passed: bool) -> Self {
        self.status = Some(passed);
        self
    }
}

/// The six panels for a result, in display order
pub fn result_panels(result: &AnalysisResult) -> [ResultPanel; RESULT_PANEL_COUNT] {
    [
        ResultPanel::new(PanelKind::Syntax, "Syntax Check", &result.syntax_check),
        ResultPanel::new(PanelKind::Style, "Code Style", &result.pylint_results),
        ResultPanel::new(
            PanelKind::OriginalTests,
            "Original Tests",
            &result.original_test_results,
        )
        .with_status(result.original_test_success),
        ResultPanel::new(
            PanelKind::Explanation,
            "Fix Explanation",
            &result.logical_fix_explanation,
        ),
        ResultPanel::new(PanelKind::FixedCode, "Fixed Code", &result.fixed_code),
        ResultPanel::new(
            PanelKind::FixedTests,
            "Fixed Code Tests",
            &result.fixed_test_results,
        )
        .with_status(result.fixed_test_success),
    ]
}

/// The two static panels shown before the first result
pub fn placeholder_panels() -> [ResultPanel; PLACEHOLDER_PANEL_COUNT] {
    [
        ResultPanel::new(
            PanelKind::GettingStarted,
            "Getting Started",
            "Press o to choose a Python (.py) file.\n\
             Press Enter or a to send it for analysis.",
        ),
        ResultPanel::new(
            PanelKind::Checks,
            "What Gets Checked",
            "Syntax, code style, and unit tests run against your file.\n\
             Logical errors are explained and a fixed version is tested again.",
        ),
    ]
}
