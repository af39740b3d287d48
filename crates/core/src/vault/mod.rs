//! Vault file discovery.
//!
//! This module provides the note handle used by the indexer, a walker
//! that enumerates markdown notes, and the folder scoping rules that decide
//! which of them are daily-note candidates.

pub mod files;
pub mod scope;
pub mod walker;

pub use files::{NoteFile, NoteRef};
pub use scope::{
    ConfiguredFolder, FolderChain, FolderSource, ObsidianDailyNotes, list_candidate_files,
};
pub use walker::{VaultWalker, VaultWalkerError};
