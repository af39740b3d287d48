//! Which files count as daily-note candidates.
//!
//! The daily-note folder can come from several places: the user's own
//! config, or the host application's daily-notes plugin settings. Each
//! place is a [`FolderSource`]; [`FolderChain`] asks them in order so the
//! rest of the crate sees a single `configured_folder()` call.

use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use super::files::NoteRef;

/// Something that may know where daily notes live.
pub trait FolderSource {
    /// Vault-relative folder, `Some("")` meaning "vault root" explicitly.
    fn configured_folder(&self) -> Option<String>;
}

/// A folder named directly in our own config file.
#[derive(Debug, Clone)]
pub struct ConfiguredFolder(pub Option<String>);

impl FolderSource for ConfiguredFolder {
    fn configured_folder(&self) -> Option<String> {
        self.0.clone()
    }
}

/// Reads the Obsidian core daily-notes plugin settings
/// (`<vault>/.obsidian/daily-notes.json`).
#[derive(Debug, Clone)]
pub struct ObsidianDailyNotes {
    settings_path: PathBuf,
}

#[derive(Debug, Deserialize)]
struct DailyNotesOptions {
    folder: Option<String>,
}

impl ObsidianDailyNotes {
    pub fn new(vault_root: &Path) -> Self {
        Self { settings_path: vault_root.join(".obsidian").join("daily-notes.json") }
    }
}

impl FolderSource for ObsidianDailyNotes {
    fn configured_folder(&self) -> Option<String> {
        let raw = fs::read_to_string(&self.settings_path).ok()?;
        match serde_json::from_str::<DailyNotesOptions>(&raw) {
            Ok(opts) => opts.folder.map(|f| f.trim().trim_matches('/').to_string()),
            Err(e) => {
                tracing::warn!(
                    "ignoring malformed {}: {e}",
                    self.settings_path.display()
                );
                None
            }
        }
    }
}

/// Tries each source in turn; the first one that answers wins.
#[derive(Default)]
pub struct FolderChain {
    sources: Vec<Box<dyn FolderSource + Send + Sync>>,
}

impl FolderChain {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, source: impl FolderSource + Send + Sync + 'static) -> Self {
        self.sources.push(Box::new(source));
        self
    }

    /// The usual chain: explicit config first, then the Obsidian settings.
    pub fn for_vault(vault_root: &Path, configured: Option<String>) -> Self {
        Self::new()
            .with(ConfiguredFolder(configured))
            .with(ObsidianDailyNotes::new(vault_root))
    }
}

impl FolderSource for FolderChain {
    fn configured_folder(&self) -> Option<String> {
        self.sources.iter().find_map(|s| s.configured_folder())
    }
}

/// Restrict `files` to the daily-note scope.
///
/// With no folder (or an empty one) only root-level files qualify; this is
/// not a recursive scan. With a folder, every file below it qualifies.
pub fn list_candidate_files<F: NoteRef + Clone>(
    files: &[F],
    scope_folder: Option<&str>,
) -> Vec<F> {
    match scope_folder.filter(|f| !f.is_empty()) {
        None => files.iter().filter(|f| !f.full_path().contains('/')).cloned().collect(),
        Some(folder) => {
            let prefix = format!("{folder}/");
            files.iter().filter(|f| f.full_path().starts_with(&prefix)).cloned().collect()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::vault::files::NoteFile;
    use tempfile::TempDir;

    fn files() -> Vec<NoteFile> {
        ["2024-01-01.md", "Journal/2023-05-06.md", "Journal/Old/2019-12-31.md", "Journalism/x.md"]
            .into_iter()
            .map(NoteFile::new)
            .collect()
    }

    #[test]
    fn test_no_folder_means_root_only() {
        let picked = list_candidate_files(&files(), None);
        assert_eq!(picked, vec![NoteFile::new("2024-01-01.md")]);

        let picked = list_candidate_files(&files(), Some(""));
        assert_eq!(picked.len(), 1);
    }

    #[test]
    fn test_folder_scope_is_recursive_and_prefix_exact() {
        let picked = list_candidate_files(&files(), Some("Journal"));
        let paths: Vec<_> = picked.iter().map(|f| f.path()).collect();
        assert_eq!(paths, vec!["Journal/2023-05-06.md", "Journal/Old/2019-12-31.md"]);
    }

    #[test]
    fn test_chain_prefers_configured_folder() {
        let chain = FolderChain::new()
            .with(ConfiguredFolder(Some("Daily".into())))
            .with(ConfiguredFolder(Some("Other".into())));
        assert_eq!(chain.configured_folder().as_deref(), Some("Daily"));
    }

    #[test]
    fn test_chain_falls_back_to_obsidian_settings() {
        let vault = TempDir::new().unwrap();
        fs::create_dir(vault.path().join(".obsidian")).unwrap();
        fs::write(
            vault.path().join(".obsidian/daily-notes.json"),
            r#"{"folder": "Journal/Daily/", "format": "YYYY-MM-DD"}"#,
        )
        .unwrap();

        let chain = FolderChain::for_vault(vault.path(), None);
        assert_eq!(chain.configured_folder().as_deref(), Some("Journal/Daily"));
    }

    #[test]
    fn test_chain_without_any_source_is_none() {
        let vault = TempDir::new().unwrap();
        let chain = FolderChain::for_vault(vault.path(), None);
        assert_eq!(chain.configured_folder(), None);
    }

    #[test]
    fn test_malformed_obsidian_settings_ignored() {
        let vault = TempDir::new().unwrap();
        fs::create_dir(vault.path().join(".obsidian")).unwrap();
        fs::write(vault.path().join(".obsidian/daily-notes.json"), "{ not json").unwrap();

        assert_eq!(ObsidianDailyNotes::new(vault.path()).configured_folder(), None);
    }
}
