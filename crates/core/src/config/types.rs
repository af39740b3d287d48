use std::collections::HashMap;
use std::path::PathBuf;

use serde::Deserialize;

/// Heading keyword used when none (or a blank one) is configured.
pub const DEFAULT_HEADING_KEYWORD: &str = "[DAILY_SUMMARY]";

/// Year column width used when none (or an invalid one) is configured.
pub const DEFAULT_COLUMN_WIDTH: f64 = 480.0;

#[derive(Debug, Deserialize)]
pub struct ConfigFile {
    pub version: u32,
    pub profile: Option<String>,
    pub profiles: HashMap<String, Profile>,
    #[serde(default)]
    pub comparator: ComparatorSection,
    #[serde(default)]
    pub logging: LoggingConfig,
}

#[derive(Debug, Deserialize)]
pub struct Profile {
    pub vault_root: String,
    /// Folder holding daily notes, relative to vault_root.
    /// When absent the Obsidian daily-notes settings are consulted.
    #[serde(default)]
    pub daily_folder: Option<String>,
}

/// Raw `[comparator]` table as written by the user.
///
/// Values are kept loose here and normalized into [`ComparatorSettings`],
/// so a typo in the config never prevents loading.
#[derive(Debug, Deserialize, Default, Clone)]
pub struct ComparatorSection {
    #[serde(default)]
    pub heading_keyword: Option<String>,
    #[serde(default)]
    pub column_width: Option<toml::Value>,
}

/// The two user-adjustable values consumed by the comparator.
#[derive(Debug, Clone, PartialEq)]
pub struct ComparatorSettings {
    pub heading_keyword: String,
    pub column_width: f64,
}

impl Default for ComparatorSettings {
    fn default() -> Self {
        Self {
            heading_keyword: DEFAULT_HEADING_KEYWORD.to_string(),
            column_width: DEFAULT_COLUMN_WIDTH,
        }
    }
}

impl ComparatorSettings {
    /// Normalize a raw section, substituting defaults for blank or invalid values.
    pub fn from_section(section: &ComparatorSection) -> Self {
        let heading_keyword = match section.heading_keyword.as_deref() {
            Some(k) if !k.trim().is_empty() => k.to_string(),
            Some(_) => {
                tracing::warn!("blank heading_keyword, using {DEFAULT_HEADING_KEYWORD}");
                DEFAULT_HEADING_KEYWORD.to_string()
            }
            None => DEFAULT_HEADING_KEYWORD.to_string(),
        };

        let column_width = match &section.column_width {
            None => DEFAULT_COLUMN_WIDTH,
            Some(value) => parse_column_width(value).unwrap_or_else(|| {
                tracing::warn!(
                    "invalid column_width {value}, using {DEFAULT_COLUMN_WIDTH}"
                );
                DEFAULT_COLUMN_WIDTH
            }),
        };

        Self { heading_keyword, column_width }
    }

    /// Replace the heading keyword, falling back to the default when blank.
    pub fn with_heading_keyword(mut self, keyword: &str) -> Self {
        self.heading_keyword = if keyword.trim().is_empty() {
            DEFAULT_HEADING_KEYWORD.to_string()
        } else {
            keyword.to_string()
        };
        self
    }
}

/// Accepts a positive finite number, either as a TOML number or a numeric string.
pub fn parse_column_width(value: &toml::Value) -> Option<f64> {
    let num = match value {
        toml::Value::Integer(i) => *i as f64,
        toml::Value::Float(f) => *f,
        toml::Value::String(s) => s.trim().parse::<f64>().ok()?,
        _ => return None,
    };
    (num.is_finite() && num > 0.0).then_some(num)
}

#[derive(Debug, Deserialize, Clone)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,
    #[serde(default)]
    pub file_level: Option<String>,
    #[serde(default)]
    pub file: Option<PathBuf>,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self { level: default_log_level(), file_level: None, file: None }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}

#[derive(Debug, Clone)]
pub struct ResolvedConfig {
    pub active_profile: String,
    pub vault_root: PathBuf,
    /// Explicitly configured daily folder, if any (not yet merged with host settings).
    pub daily_folder: Option<String>,
    pub comparator: ComparatorSettings,
    pub logging: LoggingConfig,
}
