//! Core domain type definitions

use std::path::{Path, PathBuf};

use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};

/// Suffix a file name must carry to be accepted for analysis (case-sensitive)
pub const PYTHON_EXTENSION: &str = ".py";

/// Application lifecycle phase
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AppPhase {
    /// Interactive, accepting input
    #[default]
    Running,
    /// Shutting down
    Quitting,
}

// ─────────────────────────────────────────────────────────────────────────────
// File Selection
// ─────────────────────────────────────────────────────────────────────────────

/// A file the user picked, before its name has been checked
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileCandidate {
    /// File name as shown to the user and sent in the multipart part
    pub name: String,
    /// Where the bytes were read from
    pub path: PathBuf,
    /// Raw file content
    pub content: Vec<u8>,
}

impl FileCandidate {
    pub fn new(name: impl Into<String>, path: impl Into<PathBuf>, content: Vec<u8>) -> Self {
        Self {
            name: name.into(),
            path: path.into(),
            content,
        }
    }

    /// Build a candidate whose name is the last component of `path`
    pub fn from_path(path: &Path, content: Vec<u8>) -> Self {
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.to_string_lossy().into_owned());
        Self::new(name, path, content)
    }

    /// True when the name ends with `.py` (exact case)
    pub fn has_python_extension(&self) -> bool {
        self.name.ends_with(PYTHON_EXTENSION)
    }

    /// Accept the candidate as a [`SelectedFile`], or `None` if the name is not a `.py` file
    pub fn into_selected(self) -> Option<SelectedFile> {
        if !self.has_python_extension() {
            return None;
        }
        Some(SelectedFile {
            name: self.name,
            path: self.path,
            content: self.content,
        })
    }
}

/// A validated Python file held in memory until it is uploaded
///
/// Only constructed through [`FileCandidate::into_selected`], so `name`
/// always ends with [`PYTHON_EXTENSION`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectedFile {
    name: String,
    path: PathBuf,
    content: Vec<u8>,
}

impl SelectedFile {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn content(&self) -> &[u8] {
        &self.content
    }

    pub fn size(&self) -> usize {
        self.content.len()
    }

    /// Human-readable size, e.g. `512 B` or `1.4 KB`
    pub fn display_size(&self) -> String {
        let bytes = self.size();
        if bytes < 1024 {
            format!("{} B", bytes)
        } else if bytes < 1024 * 1024 {
            format!("{:.1} KB", bytes as f64 / 1024.0)
        } else {
            format!("{:.1} MB", bytes as f64 / (1024.0 * 1024.0))
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Analysis Result
// ─────────────────────────────────────────────────────────────────────────────

/// Structured output of one successful analysis round trip
///
/// All eight fields are required on the wire. Extra fields the service sends
/// (generated test code and the like) are ignored.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct AnalysisResult {
    pub syntax_check: String,
    pub pylint_results: String,
    pub original_test_results: String,
    pub original_test_success: bool,
    pub logical_fix_explanation: String,
    pub fixed_code: String,
    pub fixed_test_results: String,
    pub fixed_test_success: bool,
}

/// An [`AnalysisResult`] plus what the client knows about when and for which file it arrived
#[derive(Debug, Clone, PartialEq)]
pub struct AnalysisRecord {
    pub result: AnalysisResult,
    pub file_name: String,
    pub received_at: DateTime<Local>,
}

impl AnalysisRecord {
    pub fn new(result: AnalysisResult, file_name: impl Into<String>) -> Self {
        Self {
            result,
            file_name: file_name.into(),
            received_at: Local::now(),
        }
    }

    /// `HH:MM:SS` of arrival, for the status bar
    pub fn received_time(&self) -> String {
        self.received_at.format("%H:%M:%S").to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn candidate(name: &str) -> FileCandidate {
        FileCandidate::new(name, format!("/tmp/{}", name), b"print('hi')\n".to_vec())
    }

    #[test]
    fn test_python_extension_accepted() {
        for name in ["script.py", "a.b.py", ".py", "my module.py"] {
            assert!(candidate(name).has_python_extension(), "{name}");
        }
    }

    #[test]
    fn test_other_extensions_rejected() {
        for name in ["script.txt", "script.PY", "script.py.bak", "script", "py", "script.pyc"] {
            assert!(!candidate(name).has_python_extension(), "{name}");
            assert!(candidate(name).into_selected().is_none(), "{name}");
        }
    }

    #[test]
    fn test_into_selected_keeps_name_and_content() {
        let file = candidate("calc.py").into_selected().unwrap();
        assert_eq!(file.name(), "calc.py");
        assert_eq!(file.path(), Path::new("/tmp/calc.py"));
        assert_eq!(file.content(), b"print('hi')\n");
    }

    #[test]
    fn test_from_path_uses_file_name() {
        let c = FileCandidate::from_path(Path::new("/work/src/calculator.py"), vec![]);
        assert_eq!(c.name, "calculator.py");
        assert_eq!(c.path, PathBuf::from("/work/src/calculator.py"));
    }

    #[test]
    fn test_display_size() {
        let small = FileCandidate::new("a.py", "a.py", vec![0; 512])
            .into_selected()
            .unwrap();
        assert_eq!(small.display_size(), "512 B");

        let kb = FileCandidate::new("a.py", "a.py", vec![0; 1536])
            .into_selected()
            .unwrap();
        assert_eq!(kb.display_size(), "1.5 KB");
    }

    #[test]
    fn test_analysis_result_parses_eight_fields() {
        let json = r#"{
            "syntax_check": "Code looks good!",
            "pylint_results": "Code style looks good!",
            "original_test_results": "Ran 3 tests\n\nOK",
            "original_test_success": true,
            "logical_fix_explanation": "Nothing to fix.",
            "fixed_code": "def add(a, b):\n    return a + b\n",
            "fixed_test_results": "Ran 3 tests\n\nOK",
            "fixed_test_success": false
        }"#;
        let result: AnalysisResult = serde_json::from_str(json).unwrap();
        assert_eq!(result.syntax_check, "Code looks good!");
        assert!(result.original_test_success);
        assert!(!result.fixed_test_success);
        assert!(result.fixed_code.contains("return a + b"));
    }

    #[test]
    fn test_analysis_result_ignores_extra_fields() {
        let json = r#"{
            "syntax_check": "", "pylint_results": "", "original_test_results": "",
            "original_test_success": false, "logical_fix_explanation": "",
            "fixed_code": "", "fixed_test_results": "", "fixed_test_success": false,
            "generated_test_code": "import unittest", "fixed_test_code": "import unittest"
        }"#;
        assert!(serde_json::from_str::<AnalysisResult>(json).is_ok());
    }

    #[test]
    fn test_analysis_result_requires_every_field() {
        let json = r#"{"syntax_check": "OK"}"#;
        assert!(serde_json::from_str::<AnalysisResult>(json).is_err());
    }

    #[test]
    fn test_analysis_record_time_format() {
        let record = AnalysisRecord::new(AnalysisResult::default(), "calc.py");
        assert_eq!(record.received_time().len(), 8);
        assert_eq!(record.file_name, "calc.py");
    }
}
