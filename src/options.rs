use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Files larger than this keep their place in the tree but have their content omitted.
pub const DEFAULT_MAX_FILE_SIZE: u64 = 1024 * 1024;
/// Report file written to the working directory when no output is given.
pub const DEFAULT_OUTPUT_FILE: &str = "code.txt";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScanOptions {
    pub root: PathBuf,
    pub max_file_size: u64,
    pub follow_links: bool,
    pub respect_gitignore: bool,
    pub include_hidden: bool,
    /// Keep files the classifier cannot label, reported as `Unknown`.
    pub include_unknown: bool,
    /// Extensions (without the dot, lowercase) included even when unclassified.
    pub extra_extensions: Vec<String>,
    pub ignore_patterns: Vec<String>,
    /// Absolute paths that never show up in the report, e.g. the report itself.
    pub exclude_paths: Vec<PathBuf>,
    pub analyze: bool,
}
impl Default for ScanOptions {
    fn default() -> Self {
        Self {
            root: PathBuf::from("."),
            max_file_size: DEFAULT_MAX_FILE_SIZE,
            follow_links: false,
            respect_gitignore: false,
            include_hidden: true,
            include_unknown: false,
            extra_extensions: Vec::new(),
            ignore_patterns: Vec::new(),
            exclude_paths: Vec::new(),
            analyze: false,
        }
    }
}
#[derive(Debug, Default)]
pub struct ScanBuilder {
    options: ScanOptions,
}
impl ScanBuilder {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            options: ScanOptions {
                root: root.into(),
                ..Default::default()
            },
        }
    }
    pub fn max_file_size(mut self, limit: u64) -> Self {
        self.options.max_file_size = limit;
        self
    }
    pub fn follow_links(mut self, yes: bool) -> Self {
        self.options.follow_links = yes;
        self
    }
    pub fn respect_gitignore(mut self, yes: bool) -> Self {
        self.options.respect_gitignore = yes;
        self
    }
    pub fn include_hidden(mut self, yes: bool) -> Self {
        self.options.include_hidden = yes;
        self
    }
    pub fn include_unknown(mut self, yes: bool) -> Self {
        self.options.include_unknown = yes;
        self
    }
    /// Accepts `vue`, `.vue` or `VUE` alike.
    pub fn extra_extensions<I, S>(mut self, extensions: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.options.extra_extensions = extensions
            .into_iter()
            .map(|ext| ext.as_ref().trim().trim_start_matches('.').to_lowercase())
            .filter(|ext| !ext.is_empty())
            .collect();
        self
    }
    pub fn ignore_patterns(mut self, patterns: Vec<String>) -> Self {
        self.options.ignore_patterns = patterns;
        self
    }
    pub fn exclude_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.options.exclude_paths.push(path.into());
        self
    }
    pub fn analyze(mut self, yes: bool) -> Self {
        self.options.analyze = yes;
        self
    }
    pub fn build(self) -> ScanOptions {
        self.options
    }
}
