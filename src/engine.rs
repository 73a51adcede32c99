use crate::content::{describe_io_error, read_content};
use crate::error::CodedumpError;
use crate::language::{UNKNOWN, classify};
use crate::metrics::analyze;
use crate::options::ScanOptions;
use crate::rules::IgnoreRules;
use crate::types::{DirEntry, FileEntry, ScanResult};
use ignore::WalkBuilder;
use std::fs;
use std::path::{Path, PathBuf};
struct Walker {
    inner: ignore::Walk,
}
impl Walker {
    fn new(options: &ScanOptions, rules: IgnoreRules) -> Self {
        let mut builder = WalkBuilder::new(&options.root);
        builder
            .standard_filters(false)
            .git_ignore(options.respect_gitignore)
            .git_exclude(options.respect_gitignore)
            .require_git(false)
            .hidden(!options.include_hidden)
            .follow_links(options.follow_links)
            .sort_by_file_name(|a, b| a.cmp(b))
            .filter_entry(move |entry| {
                let is_dir = entry.file_type().is_some_and(|t| t.is_dir());
                entry.depth() == 0 || !rules.excludes(entry.path(), is_dir)
            });
        Self {
            inner: builder.build(),
        }
    }
}
/// Builds the tree in one walk. Each file is opened, read and closed before
/// the walk moves on; unreadable directories are marked and skipped.
struct TreeBuilder<'a> {
    options: &'a ScanOptions,
    tree: DirEntry,
}
impl TreeBuilder<'_> {
    fn relative(&self, path: &Path) -> PathBuf {
        path.strip_prefix(&self.options.root)
            .unwrap_or(path)
            .to_path_buf()
    }
    fn accepts(&self, path: &Path, language: &str) -> bool {
        if language != UNKNOWN || self.options.include_unknown {
            return true;
        }
        path.extension()
            .and_then(|e| e.to_str())
            .is_some_and(|ext| {
                self.options
                    .extra_extensions
                    .iter()
                    .any(|x| x.eq_ignore_ascii_case(ext))
            })
    }
    fn add_file(&mut self, entry: &ignore::DirEntry) {
        let path = entry.path();
        let language = classify(path);
        if !self.accepts(path, language) {
            return;
        }
        let relative = self.relative(path);
        let size = match entry.metadata() {
            Ok(meta) => meta.len(),
            Err(e) => {
                tracing::warn!("Cannot stat {}: {}", path.display(), e);
                0
            }
        };
        let content = read_content(path, size, self.options.max_file_size);
        let metrics = match (self.options.analyze, content.text()) {
            (true, Some(text)) => Some(analyze(text, language)),
            _ => None,
        };
        self.tree.insert_file(FileEntry {
            path: relative,
            language,
            size,
            content,
            metrics,
        });
    }
    fn add_error(&mut self, err: ignore::Error) {
        let Some(path) = error_path(&err) else {
            tracing::warn!("Walk error: {}", err);
            return;
        };
        let is_loop = err_loop(&err);
        let reason = if is_loop {
            "symlink loop".to_string()
        } else if let Some(io) = err.io_error() {
            describe_io_error(io)
        } else {
            err.to_string()
        };
        tracing::warn!("Skipping {}: {}", path.display(), reason);
        if is_loop || path.is_dir() {
            let relative = self.relative(&path);
            self.tree.mark_error(&relative, reason);
        }
    }
}
/// Walks `options.root` and returns the filtered, classified and read tree.
///
/// Only a missing root or a bad ignore pattern is an error; everything that
/// goes wrong below the root is recorded in the tree instead.
pub fn scan(options: &ScanOptions) -> Result<ScanResult, CodedumpError> {
    let metadata = fs::metadata(&options.root)
        .map_err(|_| CodedumpError::RootNotFound(options.root.clone()))?;
    if !metadata.is_dir() {
        return Err(CodedumpError::NotADirectory(options.root.clone()));
    }
    let root = fs::canonicalize(&options.root).map_err(|e| CodedumpError::io(&options.root, e))?;
    tracing::debug!("Starting scan with root: {}", root.display());
    let rules = IgnoreRules::new(options)?;
    let walker = Walker::new(options, rules);
    let mut builder = TreeBuilder {
        options,
        tree: DirEntry::root(),
    };
    for result in walker.inner {
        match result {
            Ok(entry) if entry.depth() == 0 => {}
            Ok(entry) => match entry.file_type() {
                Some(t) if t.is_dir() => {
                    let relative = builder.relative(entry.path());
                    builder.tree.ensure_dir(&relative);
                }
                Some(t) if t.is_file() => builder.add_file(&entry),
                _ => tracing::debug!("Skipping special entry {}", entry.path().display()),
            },
            Err(err) => builder.add_error(err),
        }
    }
    let mut tree = builder.tree;
    tree.finalize();
    tracing::info!(
        "Scanned {} files in {} directories",
        tree.files().len(),
        tree.directories().len()
    );
    Ok(ScanResult {
        root,
        tree,
        analyzed: options.analyze,
    })
}
fn error_path(err: &ignore::Error) -> Option<PathBuf> {
    match err {
        ignore::Error::WithPath { path, .. } => Some(path.clone()),
        ignore::Error::Loop { child, .. } => Some(child.clone()),
        ignore::Error::WithDepth { err, .. } | ignore::Error::WithLineNumber { err, .. } => {
            error_path(err)
        }
        _ => None,
    }
}
fn err_loop(err: &ignore::Error) -> bool {
    match err {
        ignore::Error::Loop { .. } => true,
        ignore::Error::WithDepth { err, .. }
        | ignore::Error::WithPath { err, .. }
        | ignore::Error::WithLineNumber { err, .. } => err_loop(err),
        _ => false,
    }
}
