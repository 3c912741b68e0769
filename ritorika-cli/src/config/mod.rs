//! Configuration module
//!
//! An optional `ritorika.toml` supplies defaults; command-line flags win.

use crate::error::CliError;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// CLI configuration structure
#[derive(Debug, Deserialize, Serialize, Default)]
#[serde(deny_unknown_fields)]
pub struct CliConfig {
    /// Dictionary and pattern resources
    #[serde(default)]
    pub resources: ResourcesConfig,

    /// Repeat detection defaults
    #[serde(default)]
    pub repeats: RepeatsConfig,

    /// Output configuration
    #[serde(default)]
    pub output: OutputConfig,
}

/// Resource locations; the embedded Russian resources are used when unset
#[derive(Debug, Deserialize, Serialize, Default)]
pub struct ResourcesConfig {
    /// Dictionary TOML file
    pub dictionary: Option<PathBuf>,

    /// Cliché pattern TOML file
    pub cliches: Option<PathBuf>,

    /// Warn about pattern lemmas missing from the dictionary
    #[serde(default)]
    pub check_pattern_lemmas: bool,
}

/// Repeat window defaults
#[derive(Debug, Deserialize, Serialize, Default)]
pub struct RepeatsConfig {
    /// Window for ordinary words (default: number of words in the text)
    pub window_size: Option<usize>,

    /// Window for function words (default: `window_size`)
    pub function_word_window: Option<usize>,
}

/// Output-related configuration
#[derive(Debug, Deserialize, Serialize)]
pub struct OutputConfig {
    /// Default output format
    pub default_format: String,

    /// Pretty print JSON output
    pub pretty_json: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            default_format: "text".to_string(),
            pretty_json: true,
        }
    }
}

impl CliConfig {
    /// Load configuration from a TOML file
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        Self::parse(&content)
            .with_context(|| format!("Invalid config file: {}", path.display()))
    }

    /// Parse configuration from TOML text
    pub fn parse(content: &str) -> Result<Self> {
        toml::from_str(content).map_err(|e| CliError::ConfigError(e.to_string()).into())
    }

    /// Load `path` when given, defaults otherwise
    pub fn load(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => {
                log::info!("Loading configuration from {}", path.display());
                Self::from_file(path)
            }
            None => Ok(Self::default()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_defaults() {
        let config = CliConfig::default();
        assert!(config.resources.dictionary.is_none());
        assert_eq!(config.repeats.window_size, None);
        assert_eq!(config.output.default_format, "text");
        assert!(config.output.pretty_json);
    }

    #[test]
    fn test_parse_sections() {
        let config = CliConfig::parse(
            r#"
[resources]
cliches = "my-cliches.toml"
check_pattern_lemmas = true

[repeats]
window_size = 15
function_word_window = 3

[output]
default_format = "json"
pretty_json = false
"#,
        )
        .unwrap();

        assert_eq!(
            config.resources.cliches.as_deref(),
            Some(Path::new("my-cliches.toml"))
        );
        assert!(config.resources.check_pattern_lemmas);
        assert_eq!(config.repeats.window_size, Some(15));
        assert_eq!(config.repeats.function_word_window, Some(3));
        assert_eq!(config.output.default_format, "json");
    }

    #[test]
    fn test_unknown_section_rejected() {
        assert!(CliConfig::parse("[processing]\nthreads = 2").is_err());
    }

    #[test]
    fn test_load_from_file() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "[repeats]\nwindow_size = 7").unwrap();

        let config = CliConfig::load(Some(file.path())).unwrap();
        assert_eq!(config.repeats.window_size, Some(7));

        assert!(CliConfig::load(Some(Path::new("/nonexistent/ritorika.toml"))).is_err());
        assert!(CliConfig::load(None).is_ok());
    }
}
