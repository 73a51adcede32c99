//! Internal module for assembling the directory tree and drawing it.

use crate::types::{DirEntry, Entry, FileEntry};
use std::cmp::Ordering;
use std::path::{Component, Path};

impl DirEntry {
    pub(crate) fn root() -> Self {
        Self::default()
    }

    /// Returns the directory at `relative`, creating every missing level.
    pub(crate) fn ensure_dir(&mut self, relative: &Path) -> &mut DirEntry {
        let mut current = self;
        for component in relative.components() {
            let Component::Normal(name) = component else {
                continue;
            };
            let path = current.path.join(name);
            let index = match current
                .children
                .iter()
                .position(|c| matches!(c, Entry::Dir(d) if d.path == path))
            {
                Some(index) => index,
                None => {
                    current.children.push(Entry::Dir(DirEntry {
                        path,
                        ..Default::default()
                    }));
                    current.children.len() - 1
                }
            };
            let Entry::Dir(dir) = &mut current.children[index] else {
                unreachable!("index points at a directory");
            };
            current = dir;
        }
        current
    }

    pub(crate) fn insert_file(&mut self, file: FileEntry) {
        let parent = file.path.parent().unwrap_or(Path::new("")).to_path_buf();
        self.ensure_dir(&parent).children.push(Entry::File(file));
    }

    pub(crate) fn mark_error(&mut self, relative: &Path, reason: String) {
        self.ensure_dir(relative).error = Some(reason);
    }

    /// Drops directories with nothing to report and orders children
    /// directories first, then by name.
    pub(crate) fn finalize(&mut self) {
        for child in &mut self.children {
            if let Entry::Dir(dir) = child {
                dir.finalize();
            }
        }
        self.children.retain(|child| match child {
            Entry::Dir(dir) => !dir.children.is_empty() || dir.error.is_some(),
            Entry::File(_) => true,
        });
        self.children.sort_by(compare_entries);
    }

    /// Files in tree order (depth first, directories before files).
    pub fn files(&self) -> Vec<&FileEntry> {
        let mut out = Vec::new();
        self.collect_files(&mut out);
        out
    }

    fn collect_files<'a>(&'a self, out: &mut Vec<&'a FileEntry>) {
        for child in &self.children {
            match child {
                Entry::Dir(dir) => dir.collect_files(out),
                Entry::File(file) => out.push(file),
            }
        }
    }

    /// Every directory below this one, in tree order.
    pub fn directories(&self) -> Vec<&DirEntry> {
        let mut out = Vec::new();
        for child in &self.children {
            if let Entry::Dir(dir) = child {
                out.push(dir);
                out.extend(dir.directories());
            }
        }
        out
    }

    pub fn name(&self) -> String {
        self.path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| ".".to_string())
    }
}

fn compare_entries(a: &Entry, b: &Entry) -> Ordering {
    match (a, b) {
        (Entry::Dir(_), Entry::File(_)) => Ordering::Less,
        (Entry::File(_), Entry::Dir(_)) => Ordering::Greater,
        (Entry::Dir(x), Entry::Dir(y)) => x.path.file_name().cmp(&y.path.file_name()),
        (Entry::File(x), Entry::File(y)) => x.path.file_name().cmp(&y.path.file_name()),
    }
}

/// Draws the tree the way the `tree` command does, directories suffixed with `/`.
pub(crate) fn render_tree(root: &DirEntry) -> String {
    let mut lines = vec![match &root.error {
        Some(e) => format!(". [unreadable: {}]", e),
        None => ".".to_string(),
    }];
    render_children(root, "", &mut lines);
    lines.join("\n")
}

fn render_children(dir: &DirEntry, prefix: &str, lines: &mut Vec<String>) {
    let count = dir.children.len();
    for (i, child) in dir.children.iter().enumerate() {
        let last = i + 1 == count;
        let connector = if last { "└── " } else { "├── " };
        match child {
            Entry::Dir(sub) => {
                let marker = sub
                    .error
                    .as_ref()
                    .map(|e| format!(" [unreadable: {}]", e))
                    .unwrap_or_default();
                lines.push(format!("{}{}{}/{}", prefix, connector, sub.name(), marker));
                let next = format!("{}{}", prefix, if last { "    " } else { "│   " });
                render_children(sub, &next, lines);
            }
            Entry::File(file) => {
                let name = file.path.file_name().unwrap_or_default().to_string_lossy();
                lines.push(format!("{}{}{}", prefix, connector, name));
            }
        }
    }
}
