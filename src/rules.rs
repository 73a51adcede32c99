//! The fixed ignore tables and the filter that applies them.
//!
//! Directory denylist hits are pruned before the walker descends, so a huge
//! `node_modules` costs one `readdir` of its parent and nothing more.

use crate::error::CodedumpError;
use crate::options::ScanOptions;
use globset::{Glob, GlobSet, GlobSetBuilder};
use std::ffi::OsStr;
use std::fs;
use std::path::{Path, PathBuf};

/// Version control metadata, dependency caches, build output and IDE config.
pub const IGNORED_DIRS: &[&str] = &[
    "node_modules", "__pycache__", ".git", ".svn", ".hg", "build", "dist", "target",
    "bin", "obj", ".gradle", ".idea", ".vscode", "vendor", "coverage", ".nyc_output",
    "logs", "tmp", "temp", ".next", ".nuxt", "out", "venv", "env", ".env",
    ".mypy_cache", ".pytest_cache", ".tox",
];

pub const IGNORED_FILES: &[&str] = &[
    ".gitignore", ".dockerignore", "package-lock.json", "yarn.lock", "Pipfile.lock",
    "poetry.lock", ".DS_Store", "Thumbs.db", "desktop.ini",
];

pub const IGNORED_FILE_GLOBS: &[&str] = &["*.log", "*.tmp", "*.temp"];

/// Binary and media formats, compared lowercase.
pub const BINARY_EXTENSIONS: &[&str] = &[
    "png", "jpg", "jpeg", "gif", "bmp", "ico", "webp", "tiff", "psd", "svgz",
    "mp3", "wav", "flac", "ogg", "m4a", "mp4", "mkv", "avi", "mov", "webm",
    "zip", "tar", "gz", "tgz", "bz2", "xz", "7z", "rar", "jar", "war",
    "exe", "dll", "so", "dylib", "a", "o", "obj", "lib", "class", "pyc", "pyo", "wasm",
    "ttf", "otf", "woff", "woff2", "eot",
    "pdf", "doc", "docx", "xls", "xlsx", "ppt", "pptx",
    "db", "sqlite", "sqlite3", "bin", "dat", "iso", "img",
];

/// Decides whether a path is left out of the scan. Immutable once built.
#[derive(Debug, Clone)]
pub struct IgnoreRules {
    root: PathBuf,
    globs: GlobSet,
    excluded: Vec<PathBuf>,
}
impl IgnoreRules {
    pub fn new(options: &ScanOptions) -> Result<Self, CodedumpError> {
        let mut builder = GlobSetBuilder::new();
        let patterns = IGNORED_FILE_GLOBS
            .iter()
            .copied()
            .chain(options.ignore_patterns.iter().map(String::as_str));
        for pattern in patterns {
            let glob = Glob::new(pattern).map_err(|e| CodedumpError::InvalidPattern {
                pattern: pattern.to_string(),
                reason: e.to_string(),
            })?;
            builder.add(glob);
        }
        let globs = builder.build().map_err(|e| CodedumpError::InvalidPattern {
            pattern: options.ignore_patterns.join(","),
            reason: e.to_string(),
        })?;
        let canonical_root =
            fs::canonicalize(&options.root).unwrap_or_else(|_| options.root.clone());
        let excluded = options
            .exclude_paths
            .iter()
            .filter_map(|p| relative_to_root(&canonical_root, p))
            .collect();
        Ok(Self {
            root: options.root.clone(),
            globs,
            excluded,
        })
    }

    /// True when `path` (absolute or under the scan root) must not appear in the report.
    pub fn excludes(&self, path: &Path, is_dir: bool) -> bool {
        let relative = path.strip_prefix(&self.root).unwrap_or(path);
        if relative.as_os_str().is_empty() {
            return false;
        }
        if self.excluded.iter().any(|p| p == relative) {
            return true;
        }
        let name = path.file_name().unwrap_or(OsStr::new(""));
        if is_dir {
            return name.to_str().is_some_and(|n| IGNORED_DIRS.contains(&n))
                || self.globs.is_match(name)
                || self.globs.is_match(relative);
        }
        if name.to_str().is_some_and(|n| IGNORED_FILES.contains(&n)) {
            return true;
        }
        if is_binary_extension(path) {
            return true;
        }
        self.globs.is_match(name) || self.globs.is_match(relative)
    }
}

pub fn is_binary_extension(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .is_some_and(|ext| BINARY_EXTENSIONS.contains(&ext.to_lowercase().as_str()))
}

// The report may not exist yet, so only its parent is canonicalized.
fn relative_to_root(canonical_root: &Path, path: &Path) -> Option<PathBuf> {
    let absolute = match (path.parent(), path.file_name()) {
        (Some(parent), Some(name)) if !parent.as_os_str().is_empty() => {
            fs::canonicalize(parent).ok()?.join(name)
        }
        (_, Some(name)) => std::env::current_dir().ok()?.canonicalize().ok()?.join(name),
        _ => return None,
    };
    absolute
        .strip_prefix(canonical_root)
        .ok()
        .map(Path::to_path_buf)
}
