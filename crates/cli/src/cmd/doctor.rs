use std::path::Path;

use yearly_diary_core::config::{ConfigLoader, default_config_path};
use yearly_diary_core::vault::{FolderChain, FolderSource};

pub fn run(config: Option<&Path>, profile: Option<&str>) {
    match ConfigLoader::load(config, profile) {
        Ok(rc) => {
            crate::logging::init(&rc.logging);
            tracing::debug!("config loaded for profile {}", rc.active_profile);

            let folder = FolderChain::for_vault(&rc.vault_root, rc.daily_folder.clone())
                .configured_folder()
                .filter(|f| !f.is_empty());

            println!("OK   ydc doctor");
            println!(
                "path: {}",
                config.map_or_else(
                    || default_config_path().display().to_string(),
                    |p| p.display().to_string()
                )
            );
            println!("profile: {}", rc.active_profile);
            println!("vault_root: {}", rc.vault_root.display());
            println!("daily_folder: {}", folder.as_deref().unwrap_or("(vault root)"));
            println!("heading_keyword: {}", rc.comparator.heading_keyword);
            println!("column_width: {}", rc.comparator.column_width);
        }
        Err(e) => {
            println!("FAIL ydc doctor");
            println!("{e}");
            if config.is_none() {
                println!("looked for: {}", default_config_path().display());
            }
            std::process::exit(1);
        }
    }
}
