use super::pattern::ClichePattern;
use crate::domain::error::DomainError;
use crate::domain::morphology::config::MetadataConfig;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::Path;

const EMBEDDED_RUSSIAN: &str = include_str!("../../../configs/cliches/russian.toml");

/// Reference cliché set file
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClicheConfig {
    pub metadata: MetadataConfig,
    #[serde(default)]
    pub patterns: Vec<PatternConfig>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PatternConfig {
    pub id: String,
    pub pattern: String,
    #[serde(default = "default_category")]
    pub category: String,
}

fn default_category() -> String {
    "general".to_string()
}

impl ClicheConfig {
    /// Compile every pattern, rejecting duplicate ids and bad syntax
    pub fn compile(&self) -> Result<Vec<ClichePattern>, DomainError> {
        let mut ids = HashSet::new();
        let mut patterns = Vec::with_capacity(self.patterns.len());

        for entry in &self.patterns {
            if entry.id.trim().is_empty() {
                return Err(DomainError::ConfigurationError(format!(
                    "pattern '{}' has an empty id",
                    entry.pattern
                )));
            }
            if !ids.insert(entry.id.as_str()) {
                return Err(DomainError::ConfigurationError(format!(
                    "duplicate pattern id '{}'",
                    entry.id
                )));
            }
            patterns.push(ClichePattern::parse(
                entry.id.clone(),
                &entry.pattern,
                entry.category.clone(),
            )?);
        }

        Ok(patterns)
    }
}

/// Parse a cliché set from TOML text
pub fn parse_cliche_config(source: &str, origin: &str) -> Result<ClicheConfig, DomainError> {
    toml::from_str(source).map_err(|e| {
        DomainError::ConfigurationError(format!("Failed to parse {origin} cliché set: {e}"))
    })
}

/// The Russian cliché set compiled into the binary
pub fn embedded_cliche_config() -> Result<ClicheConfig, DomainError> {
    parse_cliche_config(EMBEDDED_RUSSIAN, "embedded")
}

/// Load a cliché set from an external TOML file
pub fn load_cliche_config(path: &Path) -> Result<ClicheConfig, DomainError> {
    let content = std::fs::read_to_string(path).map_err(|e| {
        DomainError::ConfigurationError(format!(
            "Failed to read file '{}': {}",
            path.display(),
            e
        ))
    })?;

    parse_cliche_config(&content, &format!("'{}'", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_embedded_set_compiles() {
        let config = embedded_cliche_config().unwrap();
        assert_eq!(config.metadata.code, "ru");
        let patterns = config.compile().unwrap();
        assert!(patterns.iter().any(|p| p.source == "оказать|оказывать помощь"));
        assert!(patterns.iter().any(|p| p.source == "играть <ADJF>? роль"));
    }

    #[test]
    fn test_duplicate_ids_rejected() {
        let config = parse_cliche_config(
            r#"
            [metadata]
            code = "ru"
            name = "Dup"

            [[patterns]]
            id = "a"
            pattern = "холодный пот"

            [[patterns]]
            id = "a"
            pattern = "бросить взгляд"
            "#,
            "inline",
        )
        .unwrap();

        assert!(matches!(
            config.compile(),
            Err(DomainError::ConfigurationError(_))
        ));
    }

    #[test]
    fn test_category_defaults_to_general() {
        let config = parse_cliche_config(
            r#"
            [metadata]
            code = "ru"
            name = "One"

            [[patterns]]
            id = "cold-sweat"
            pattern = "холодный пот"
            "#,
            "inline",
        )
        .unwrap();
        assert_eq!(config.patterns[0].category, "general");
    }

    #[test]
    fn test_load_from_file_reports_bad_pattern() {
        let mut file = NamedTempFile::new().unwrap();
        write!(
            file,
            r#"
[metadata]
code = "ru"
name = "Broken"

[[patterns]]
id = "bad"
pattern = "<NOPE> роль"
"#
        )
        .unwrap();

        let config = load_cliche_config(file.path()).unwrap();
        assert!(matches!(
            config.compile(),
            Err(DomainError::InvalidPattern { .. })
        ));
    }
}
