//! Asynchronous note content retrieval.

use std::future::Future;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::excerpt::HeadingMatcher;
use crate::vault::NoteFile;

use super::types::CellOutcome;

#[derive(Debug, Error)]
pub enum ReadError {
    #[error("note not found: {0}")]
    NotFound(String),

    #[error("failed to read note {0}: {1}")]
    Io(String, #[source] std::io::Error),
}

/// Reads the full text of a note.
pub trait NoteReader<F>: Send + Sync + 'static {
    fn read(&self, note: &F) -> impl Future<Output = Result<String, ReadError>> + Send;
}

/// Reads notes from a vault directory on disk.
#[derive(Debug, Clone)]
pub struct VaultReader {
    root: PathBuf,
}

impl VaultReader {
    pub fn new(root: &Path) -> Self {
        Self { root: root.to_path_buf() }
    }
}

impl NoteReader<NoteFile> for VaultReader {
    fn read(
        &self,
        note: &NoteFile,
    ) -> impl Future<Output = Result<String, ReadError>> + Send {
        let path = self.root.join(note.path());
        let display = note.path().to_string();
        async move {
            tokio::fs::read_to_string(&path).await.map_err(|e| match e.kind() {
                ErrorKind::NotFound => ReadError::NotFound(display),
                _ => ReadError::Io(display, e),
            })
        }
    }
}

/// Read one note and extract its excerpt, turning failures into cell states.
pub async fn load_cell<F, R>(reader: &R, note: &F, matcher: &HeadingMatcher) -> CellOutcome
where
    R: NoteReader<F>,
{
    match reader.read(note).await {
        Ok(text) => CellOutcome::Loaded(matcher.extract(&text)),
        Err(ReadError::NotFound(path)) => {
            tracing::warn!("indexed note disappeared before it was read: {path}");
            CellOutcome::FileNotFound
        }
        Err(e) => {
            tracing::warn!("{e}");
            CellOutcome::ReadError(e.to_string())
        }
    }
}
