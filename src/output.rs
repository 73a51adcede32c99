//! Report rendering.
//!
//! A text report has three parts in fixed order: the summary, the structure
//! tree, and one code section per file. The preview is exactly the first two
//! parts, so it is always a prefix of the full report.
//!
//! Code sections follow a line-based contract that [`parse_sections`] reads back:
//!
//! ```text
//! === FILE: src/main.py ===
//! Language: Python
//! ----------------------------------------------------------------------------
//! <content, verbatim>
//! === END FILE: src/main.py ===
//! ```
//!
//! Exactly one `\n` follows the content, so the original text is recoverable.

use crate::types::{Content, DirEntry, Entry, FileEntry, ScanResult, Summary};
use crate::{CodedumpError, tree};
use humansize::{DECIMAL, format_size};
use serde::Serialize;
use std::fs;
use std::path::Path;

pub const FILE_OPEN: &str = "=== FILE: ";
pub const FILE_CLOSE: &str = "=== END FILE: ";
pub const MARKER_TAIL: &str = " ===";
/// Separates a section's header lines from the content.
pub const CONTENT_RULE: &str =
    "--------------------------------------------------------------------------------";
const BANNER: &str =
    "================================================================================";

/// Supported output formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Text,
    Json,
}

impl ScanResult {
    /// Aggregates counts over the whole tree.
    pub fn summary(&self) -> Summary {
        let mut summary = Summary {
            total_directories: self.tree.directories().len(),
            ..Default::default()
        };
        if self.analyzed {
            summary.total_functions = Some(0);
            summary.total_classes = Some(0);
        }
        for file in self.tree.files() {
            summary.total_files += 1;
            summary.total_size += file.size;
            *summary.languages.entry(file.language.to_string()).or_default() += 1;
            match &file.content {
                Content::Text(text) => summary.total_lines += text.lines().count(),
                Content::Unreadable(_) => summary.unreadable_files += 1,
                Content::Oversize { .. } => summary.oversize_files += 1,
            }
            if let Some(metrics) = &file.metrics {
                if let Some(total) = summary.total_functions.as_mut() {
                    *total += metrics.function_count;
                }
                if let Some(total) = summary.total_classes.as_mut() {
                    *total += metrics.class_count;
                }
            }
        }
        let top_level = std::iter::once(&self.tree);
        for dir in top_level.chain(self.tree.directories()) {
            if dir.error.is_some() {
                summary.unreadable_directories += 1;
            }
            let direct = dir
                .children
                .iter()
                .filter(|c| matches!(c, Entry::File(_)))
                .count();
            if direct > 0 {
                summary.directories.insert(display_dir(dir), direct);
            }
        }
        summary
    }
}

/// Formats the scan result into a string.
pub fn format_result(result: &ScanResult, format: OutputFormat) -> Result<String, CodedumpError> {
    match format {
        OutputFormat::Text => Ok(render_report(result)),
        OutputFormat::Json => format_json(result),
    }
}

/// Writes the formatted result to a file and returns the number of bytes written.
pub fn write_result_to_file(
    result: &ScanResult,
    format: OutputFormat,
    path: impl AsRef<Path>,
) -> Result<u64, CodedumpError> {
    let content = format_result(result, format)?;
    fs::write(&path, &content).map_err(|e| CodedumpError::io(path.as_ref(), e))?;
    Ok(content.len() as u64)
}

/// Summary and structure tree only.
pub fn render_preview(result: &ScanResult) -> String {
    let mut out = String::with_capacity(1024);
    out.push_str(&render_summary(result.root.as_path(), &result.summary()));
    out.push('\n');
    out.push_str("Structure:\n");
    out.push_str(&tree::render_tree(&result.tree));
    out.push_str("\n\n");
    out
}

/// The full report: preview followed by every code section in tree order.
pub fn render_report(result: &ScanResult) -> String {
    let mut out = render_preview(result);
    out.push_str(BANNER);
    out.push_str("\n\n");
    for file in result.tree.files() {
        out.push_str(&render_section(file));
        out.push('\n');
    }
    out
}

fn render_summary(root: &Path, summary: &Summary) -> String {
    let mut lines = vec![
        BANNER.to_string(),
        "CODEBASE SUMMARY".to_string(),
        BANNER.to_string(),
        format!("Root Directory: {}", root.display()),
        format!("Total Files: {}", summary.total_files),
        format!("Total Directories: {}", summary.total_directories),
        format!(
            "Total Size: {} ({} bytes)",
            format_size(summary.total_size, DECIMAL),
            summary.total_size
        ),
        format!("Total Lines: {}", summary.total_lines),
        format!("Unreadable Files: {}", summary.unreadable_files),
        format!("Oversize Files (content omitted): {}", summary.oversize_files),
    ];
    if summary.unreadable_directories > 0 {
        lines.push(format!("Unreadable Directories: {}", summary.unreadable_directories));
    }
    if let (Some(functions), Some(classes)) = (summary.total_functions, summary.total_classes) {
        lines.push(format!("Total Functions (approx.): {}", functions));
        lines.push(format!("Total Classes (approx.): {}", classes));
    }
    lines.push(String::new());
    lines.push("Languages:".to_string());
    for (language, count) in &summary.languages {
        lines.push(format!("  {}: {} {}", language, count, plural(*count)));
    }
    lines.push(String::new());
    lines.push("Directory Overview:".to_string());
    for (dir, count) in &summary.directories {
        lines.push(format!("  {}: {} {}", dir, count, plural(*count)));
    }
    lines.push(BANNER.to_string());
    lines.push(String::new());
    lines.join("\n")
}

fn render_section(file: &FileEntry) -> String {
    let path = display_path(&file.path);
    let mut out = String::with_capacity(file.size as usize + 256);
    out.push_str(&format!("{}{}{}\n", FILE_OPEN, path, MARKER_TAIL));
    out.push_str(&format!("Language: {}\n", file.language));
    if let Some(m) = &file.metrics {
        out.push_str(&format!(
            "Lines: {} (code {}, comments {}, blank {}) | Functions: {} | Classes: {}\n",
            m.line_count, m.code_lines, m.comment_lines, m.blank_lines, m.function_count, m.class_count
        ));
    }
    out.push_str(CONTENT_RULE);
    out.push('\n');
    out.push_str(&file.content.render());
    out.push('\n');
    out.push_str(&format!("{}{}{}\n", FILE_CLOSE, path, MARKER_TAIL));
    out
}

/// Recovers `(path, content)` pairs from a text report.
///
/// A section starts at an opening marker line, its content starts after the
/// first [`CONTENT_RULE`] line and ends at the closing marker naming the same
/// path. Unterminated sections are dropped.
pub fn parse_sections(report: &str) -> Vec<(String, String)> {
    let mut sections = Vec::new();
    let mut lines = report.split_inclusive('\n');
    while let Some(line) = lines.next() {
        let Some(path) = marker_path(line, FILE_OPEN) else {
            continue;
        };
        if !lines.by_ref().any(|l| trim_newline(l) == CONTENT_RULE) {
            break;
        }
        let mut content = String::new();
        let mut closed = false;
        for body in lines.by_ref() {
            if marker_path(body, FILE_CLOSE) == Some(path) {
                closed = true;
                break;
            }
            content.push_str(body);
        }
        if !closed {
            break;
        }
        content.pop();
        sections.push((path.to_string(), content));
    }
    sections
}

fn marker_path<'a>(line: &'a str, open: &str) -> Option<&'a str> {
    trim_newline(line)
        .strip_prefix(open)?
        .strip_suffix(MARKER_TAIL)
}

fn trim_newline(line: &str) -> &str {
    line.strip_suffix('\n').unwrap_or(line)
}

fn format_json(result: &ScanResult) -> Result<String, CodedumpError> {
    #[derive(Serialize)]
    struct Report<'a> {
        summary: Summary,
        #[serde(flatten)]
        result: &'a ScanResult,
    }
    let report = Report {
        summary: result.summary(),
        result,
    };
    Ok(serde_json::to_string_pretty(&report)?)
}

/// Forward slashes on every platform so reports compare equal across systems.
fn display_path(path: &Path) -> String {
    path.components()
        .map(|c| c.as_os_str().to_string_lossy())
        .collect::<Vec<_>>()
        .join("/")
}

fn display_dir(dir: &DirEntry) -> String {
    if dir.path.as_os_str().is_empty() {
        ".".to_string()
    } else {
        display_path(&dir.path)
    }
}

fn plural(count: usize) -> &'static str {
    if count == 1 { "file" } else { "files" }
}
