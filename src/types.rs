use serde::Serialize;
use std::collections::BTreeMap;
use std::path::PathBuf;

/// What the content reader produced for one file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", content = "value", rename_all = "snake_case")]
pub enum Content {
    Text(String),
    /// The file could not be read or decoded; holds the reason.
    Unreadable(String),
    /// The file exceeded the size ceiling and was not read.
    Oversize { size: u64, limit: u64 },
}
impl Content {
    pub fn text(&self) -> Option<&str> {
        match self {
            Content::Text(text) => Some(text),
            _ => None,
        }
    }
    /// The text written into the report for this file.
    pub fn render(&self) -> String {
        match self {
            Content::Text(text) => text.clone(),
            Content::Unreadable(reason) => format!("<unreadable: {}>", reason),
            Content::Oversize { size, limit } => {
                format!("<skipped: {} bytes exceeds the {} byte limit>", size, limit)
            }
        }
    }
}

/// Heuristic counts for one file. Pattern based, so approximate.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct Metrics {
    pub line_count: usize,
    pub code_lines: usize,
    pub comment_lines: usize,
    pub blank_lines: usize,
    pub function_count: usize,
    pub class_count: usize,
}

/// A single reported file.
#[derive(Debug, Clone, Serialize)]
pub struct FileEntry {
    /// Path relative to the scan root.
    pub path: PathBuf,
    pub language: &'static str,
    /// Size on disk in bytes.
    pub size: u64,
    pub content: Content,
    /// Present only when the scan ran in analyze mode and the content was readable.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metrics: Option<Metrics>,
}

/// A directory node. Children are ordered directories first, then files,
/// each group by name.
#[derive(Debug, Clone, Default, Serialize)]
pub struct DirEntry {
    /// Path relative to the scan root; empty for the root itself.
    pub path: PathBuf,
    pub children: Vec<Entry>,
    /// Set when the directory could not be listed.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Entry {
    Dir(DirEntry),
    File(FileEntry),
}

/// The complete result of a scan.
#[derive(Debug, Clone, Serialize)]
pub struct ScanResult {
    /// Canonical root path, shown in the summary.
    pub root: PathBuf,
    pub tree: DirEntry,
    pub analyzed: bool,
}

/// Aggregate figures shown at the top of the report.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Summary {
    pub total_files: usize,
    pub total_directories: usize,
    pub total_size: u64,
    pub total_lines: usize,
    pub unreadable_files: usize,
    pub oversize_files: usize,
    pub unreadable_directories: usize,
    pub languages: BTreeMap<String, usize>,
    /// Direct file count per directory, keyed by relative path (`.` for the root).
    pub directories: BTreeMap<String, usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_functions: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_classes: Option<usize>,
}
