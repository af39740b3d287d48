use color_eyre::eyre::{Result, WrapErr};
use std::path::Path;
use yearly_diary_core::config::{ComparatorSettings, ConfigError, ConfigLoader};
use yearly_diary_core::excerpt::{Excerpt, extract_excerpt};

use crate::ExcerptArgs;

/// Print the excerpt of one file. Works without a config file, using defaults;
/// a config file that exists but does not load is an error.
pub async fn run(config: Option<&Path>, profile: Option<&str>, args: ExcerptArgs) -> Result<()> {
    let mut settings = match ConfigLoader::load(config, profile) {
        Ok(rc) => {
            crate::logging::init(&rc.logging);
            rc.comparator
        }
        Err(ConfigError::NotFound(_)) => ComparatorSettings::default(),
        Err(e) => {
            eprintln!("Failed to load config: {e}");
            std::process::exit(1);
        }
    };
    if let Some(ref heading) = args.heading {
        settings = settings.with_heading_keyword(heading);
    }

    let text = tokio::fs::read_to_string(&args.file)
        .await
        .wrap_err_with(|| format!("failed to read {}", args.file.display()))?;

    match extract_excerpt(&text, &settings.heading_keyword) {
        Excerpt::Text(body) => println!("{body}"),
        Excerpt::Empty => println!("(empty)"),
        Excerpt::NotFound => {
            println!("(no '{}' heading)", settings.heading_keyword.trim());
        }
    }
    Ok(())
}
