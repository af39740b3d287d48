pub mod compare;
pub mod doctor;
pub mod excerpt;
pub mod open;

use std::path::{Path, PathBuf};

use tracing::error;
use yearly_diary_core::config::{ConfigLoader, ResolvedConfig};
use yearly_diary_core::vault::{
    FolderChain, FolderSource, NoteFile, VaultWalker, list_candidate_files,
};

/// Load the config and start logging, or exit.
pub fn load_config(config: Option<&Path>, profile: Option<&str>) -> ResolvedConfig {
    let cfg = match ConfigLoader::load(config, profile) {
        Ok(rc) => rc,
        Err(e) => {
            eprintln!("Failed to load config: {e}");
            std::process::exit(1);
        }
    };
    crate::logging::init(&cfg.logging);
    cfg
}

/// Daily-note candidates of the configured vault, plus the canonical vault root.
pub fn daily_notes(cfg: &ResolvedConfig) -> (PathBuf, Vec<NoteFile>) {
    let walker = match VaultWalker::new(&cfg.vault_root) {
        Ok(w) => w,
        Err(e) => {
            error!("{e}");
            std::process::exit(1);
        }
    };

    let notes = match walker.walk() {
        Ok(n) => n,
        Err(e) => {
            error!("Failed to scan vault: {e}");
            std::process::exit(1);
        }
    };

    let folder =
        FolderChain::for_vault(walker.root(), cfg.daily_folder.clone()).configured_folder();
    let files = list_candidate_files(&notes, folder.as_deref());
    tracing::debug!(
        "{} daily note candidates in {}",
        files.len(),
        folder.as_deref().filter(|f| !f.is_empty()).unwrap_or("(vault root)")
    );

    (walker.root().to_path_buf(), files)
}
