// SPDX-License-Identifier: MIT

//! Iterative directory traversal producing file descriptors

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// Metadata for one discovered regular file
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub struct FileDescriptor {
    /// Base file name
    pub name: String,
    /// Absolute path
    pub full_path: PathBuf,
    /// Byte length at time of traversal
    pub size_bytes: u64,
    /// Lower-cased extension including the leading dot, or empty
    pub extension: String,
}

impl FileDescriptor {
    fn from_path(path: PathBuf, size_bytes: u64) -> Self {
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
        let extension = path
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| format!(".{}", e.to_ascii_lowercase()))
            .unwrap_or_default();
        Self {
            name,
            full_path: path,
            size_bytes,
            extension,
        }
    }
}

/// Walk the tree under `root` and collect a descriptor for every regular
/// file reachable through subdirectories. No ordering guarantee.
///
/// Uses an explicit pending-directory stack rather than recursion, so deep
/// trees cannot exhaust the call stack. A directory that cannot be
/// enumerated is logged and skipped; the rest of the walk continues. A
/// missing or unreadable root is handled the same way and yields an empty
/// result. Symbolic links are not followed, which also keeps link cycles
/// out of the stack.
pub fn scan_tree(root: &Path) -> Vec<FileDescriptor> {
    // Canonicalize up front so descriptors carry absolute paths even when
    // the root argument is relative.
    let root = match root.canonicalize() {
        Ok(p) => p,
        Err(e) => {
            warn!("Error accessing {}: {}", root.display(), e);
            return Vec::new();
        }
    };

    let mut files = Vec::new();
    let mut pending = vec![root];

    while let Some(dir) = pending.pop() {
        let entries = match std::fs::read_dir(&dir) {
            Ok(entries) => entries,
            Err(e) => {
                warn!("Error accessing {}: {}", dir.display(), e);
                continue;
            }
        };

        for entry in entries {
            let entry = match entry {
                Ok(entry) => entry,
                Err(e) => {
                    warn!("Error accessing {}: {}", dir.display(), e);
                    continue;
                }
            };

            let file_type = match entry.file_type() {
                Ok(t) => t,
                Err(e) => {
                    warn!("Error accessing {}: {}", entry.path().display(), e);
                    continue;
                }
            };

            if file_type.is_dir() {
                pending.push(entry.path());
            } else if file_type.is_file() {
                match entry.metadata() {
                    Ok(meta) => files.push(FileDescriptor::from_path(entry.path(), meta.len())),
                    Err(e) => warn!("Error accessing {}: {}", entry.path().display(), e),
                }
            } else {
                debug!("Skipping non-regular entry: {}", entry.path().display());
            }
        }
    }

    files
}
