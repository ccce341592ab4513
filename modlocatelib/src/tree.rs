//! Directory tree model and filesystem scanning.
//!
//! The locator works on an immutable [`Directory`] tree. Trees can be built
//! in memory with the `with_*` builders or read from disk with
//! [`Directory::scan`].

use std::borrow::Cow;
use std::path::{Path, PathBuf};

use serde::{Serialize, Serializer};
use walkdir::{DirEntry, WalkDir};

use crate::error::LocateError;
use crate::module::INDEX_FILE_NAMES;
use crate::Result;

/// A reference to a single file.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Location {
    /// Full path of the file
    #[serde(serialize_with = "serialize_path_lossy")]
    pub path: PathBuf,
    /// Base file name
    pub name: String,
}

/// Paths serialize as text, replacing invalid UTF-8 the same way [`Location::path_str`] does.
fn serialize_path_lossy<S: Serializer>(
    path: &Path,
    serializer: S,
) -> std::result::Result<S::Ok, S::Error> {
    serializer.serialize_str(&path.to_string_lossy())
}

impl Location {
    /// Create a location from a full path, deriving the name from its last component.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
        Self { path, name }
    }

    /// The full path as text, which is what include/exclude patterns match against.
    pub fn path_str(&self) -> Cow<'_, str> {
        self.path.to_string_lossy()
    }
}

/// A directory node with its direct files, child directories and optional index.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Directory {
    /// Path of the directory
    pub path: PathBuf,
    /// Non-directory entries directly inside this directory
    pub files: Vec<Location>,
    /// Child directories
    pub directories: Vec<Directory>,
    /// Index module for this directory, if one exists
    pub index: Option<Location>,
}

impl Directory {
    /// Create an empty directory node.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            ..Self::default()
        }
    }

    /// Builder: add a file with the given name inside this directory.
    pub fn with_file(mut self, name: &str) -> Self {
        self.files.push(Location::new(self.path.join(name)));
        self
    }

    /// Builder: add a child directory.
    pub fn with_directory(mut self, directory: Directory) -> Self {
        self.directories.push(directory);
        self
    }

    /// Builder: designate the file with the given name as this directory's index.
    ///
    /// The index is not added to `files`; use [`Directory::with_file`] as
    /// well when the listing should contain it.
    pub fn with_index(mut self, name: &str) -> Self {
        self.index = Some(Location::new(self.path.join(name)));
        self
    }

    /// Build a directory tree by scanning the filesystem under `root`.
    ///
    /// Entries are sorted by file name. Hidden entries and `node_modules`
    /// directories are skipped. A directory's index is the first file in
    /// [`INDEX_FILE_NAMES`] present in its listing.
    ///
    /// Entries below the root that cannot be read (dangling symlinks,
    /// permission errors, symlink loops) are left out with a warning. Only a
    /// failure on the root itself is an error.
    pub fn scan(root: impl AsRef<Path>) -> Result<Self> {
        let root = root.as_ref();

        if !root.exists() {
            return Err(LocateError::PathNotFound(root.to_path_buf()));
        }
        if !root.is_dir() {
            return Err(LocateError::NotADirectory(root.to_path_buf()));
        }

        let walker = WalkDir::new(root)
            .min_depth(1)
            .follow_links(true)
            .sort_by_file_name()
            .into_iter();

        // stack[d] is the open directory at depth d
        let mut stack = vec![Directory::new(root)];

        for entry in walker.filter_entry(|e| !should_skip(e)) {
            let entry = match entry {
                Ok(entry) => entry,
                Err(err) if err.depth() > 0 => {
                    tracing::warn!(
                        target: "modlocate",
                        path = ?err.path(),
                        error = %err,
                        "skipping unreadable entry"
                    );
                    continue;
                }
                Err(err) => return Err(err.into()),
            };

            while stack.len() > entry.depth() {
                close_directory(&mut stack);
            }

            let file_type = entry.file_type();
            if file_type.is_dir() {
                stack.push(Directory::new(entry.path()));
            } else if file_type.is_file() {
                if let Some(parent) = stack.last_mut() {
                    parent.files.push(Location::new(entry.path()));
                }
            }
        }

        while stack.len() > 1 {
            close_directory(&mut stack);
        }

        let mut root_dir = stack.pop().unwrap_or_else(|| Directory::new(root));
        root_dir.index = find_index(&root_dir.files);
        Ok(root_dir)
    }
}

/// Pop the innermost open directory, resolve its index and attach it to its parent.
fn close_directory(stack: &mut Vec<Directory>) {
    if stack.len() < 2 {
        return;
    }
    if let Some(mut done) = stack.pop() {
        done.index = find_index(&done.files);
        if let Some(parent) = stack.last_mut() {
            parent.directories.push(done);
        }
    }
}

fn find_index(files: &[Location]) -> Option<Location> {
    INDEX_FILE_NAMES
        .iter()
        .find_map(|name| files.iter().find(|f| f.name == *name).cloned())
}

/// Check if an entry should be left out of the tree.
fn should_skip(entry: &DirEntry) -> bool {
    let name = entry.file_name().to_string_lossy();
    name.starts_with('.') || (entry.file_type().is_dir() && name == "node_modules")
}
