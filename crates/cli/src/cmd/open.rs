use chrono::NaiveDate;
use color_eyre::eyre::{Result, WrapErr, bail};
use std::path::Path;
use tracing::error;
use yearly_diary_core::diary::build_index;

use crate::OpenArgs;

/// Open the daily note of a date in the user's editor.
pub fn run(config: Option<&Path>, profile: Option<&str>, args: OpenArgs) -> Result<()> {
    if NaiveDate::parse_from_str(&args.date, "%Y-%m-%d").is_err() {
        bail!("invalid date '{}', expected YYYY-MM-DD", args.date);
    }

    let cfg = super::load_config(config, profile);
    let (root, files) = super::daily_notes(&cfg);
    let index = build_index(&files);

    let Some(note) = index.note(&args.date) else {
        error!("No daily note for {}", args.date);
        std::process::exit(1);
    };
    let path = root.join(note.path());

    let editor = std::env::var("EDITOR")
        .or_else(|_| std::env::var("VISUAL"))
        .unwrap_or_else(|_| "vim".to_string());

    let status = std::process::Command::new(&editor)
        .arg(&path)
        .status()
        .wrap_err_with(|| format!("failed to open editor '{editor}'"))?;

    if !status.success() {
        bail!("editor exited with status: {status}");
    }
    Ok(())
}
