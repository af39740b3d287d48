//! File handles as seen by the indexer.

use std::path::{Component, Path};

use serde::Serialize;

/// Opaque handle to a note supplied by the host.
///
/// The indexer only ever asks for the two derived names below.
pub trait NoteRef {
    /// File name without directory or extension.
    fn base_name(&self) -> &str;
    /// Full logical path, `/`-separated.
    fn full_path(&self) -> &str;
}

/// A note discovered in a vault, addressed by its vault-relative path.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct NoteFile {
    path: String,
    base_name: String,
}

impl NoteFile {
    /// Build from a `/`-separated vault-relative path.
    pub fn new(path: impl Into<String>) -> Self {
        let path = path.into();
        let file_name = path.rsplit('/').next().unwrap_or(&path);
        let base_name = match file_name.rfind('.') {
            Some(idx) if idx > 0 => &file_name[..idx],
            _ => file_name,
        }
        .to_string();
        Self { path, base_name }
    }

    /// Build from a platform path relative to the vault root.
    pub fn from_relative(relative: &Path) -> Self {
        let parts: Vec<String> = relative
            .components()
            .filter_map(|c| match c {
                Component::Normal(s) => Some(s.to_string_lossy().into_owned()),
                _ => None,
            })
            .collect();
        Self::new(parts.join("/"))
    }

    pub fn path(&self) -> &str {
        &self.path
    }
}

impl NoteRef for NoteFile {
    fn base_name(&self) -> &str {
        &self.base_name
    }

    fn full_path(&self) -> &str {
        &self.path
    }
}
