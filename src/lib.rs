//! # Codedump
//!
//! `codedump` walks a project directory, keeps the files it recognizes as source code,
//! and renders a single text report: a summary, the directory structure, and the full
//! content of every file between fixed delimiter lines that downstream tools can parse.
//!
//! Vendor, build and VCS directories are pruned before they are read, binary and
//! oversized files are reported with a placeholder, and nothing below the root can
//! abort the run. Output is deterministic for an unchanged tree.
//!
//! With `analyze` enabled each file also carries heuristic [`Metrics`]: line, comment,
//! function and class counts from per-language patterns. They are approximations.
//!
//! # Example
//!
//! ```no_run
//! use codedump::{ScanBuilder, render_report, scan};
//!
//! let options = ScanBuilder::new(".")
//!     .max_file_size(512 * 1024)
//!     .analyze(true)
//!     .build();
//!
//! let result = scan(&options).expect("Failed to scan directory");
//! println!("{}", render_report(&result));
//! ```

mod content;
mod engine;
mod error;
mod language;
mod metrics;
mod options;
pub mod output;
mod rules;
mod tree;
mod types;

pub use content::{decode, read_content};
pub use engine::scan;
pub use error::CodedumpError;
pub use language::{LanguageFamily, UNKNOWN, classify};
pub use metrics::{analyze, line_count};
pub use options::{DEFAULT_MAX_FILE_SIZE, DEFAULT_OUTPUT_FILE, ScanBuilder, ScanOptions};
pub use output::{OutputFormat, parse_sections, render_preview, render_report};
pub use rules::{BINARY_EXTENSIONS, IGNORED_DIRS, IGNORED_FILES, IgnoreRules};
pub use types::{Content, DirEntry, Entry, FileEntry, Metrics, ScanResult, Summary};
