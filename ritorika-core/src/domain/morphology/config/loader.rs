use super::types::DictionaryConfig;
use crate::domain::error::DomainError;
use std::path::Path;

const EMBEDDED_RUSSIAN: &str = include_str!("../../../../configs/morphology/russian.toml");

/// Parse and validate a lexicon from TOML text
pub fn parse_dictionary_config(source: &str, origin: &str) -> Result<DictionaryConfig, DomainError> {
    let config: DictionaryConfig = toml::from_str(source).map_err(|e| {
        DomainError::ConfigurationError(format!("Failed to parse {origin} lexicon: {e}"))
    })?;
    config.validate()?;
    Ok(config)
}

/// The Russian lexicon compiled into the binary
pub fn embedded_dictionary_config() -> Result<DictionaryConfig, DomainError> {
    let config = parse_dictionary_config(EMBEDDED_RUSSIAN, "embedded")?;

    if config.metadata.code != "ru" {
        return Err(DomainError::ConfigurationError(format!(
            "Config code mismatch: expected ru, got {}",
            config.metadata.code
        )));
    }

    Ok(config)
}

/// Load a lexicon from an external TOML file
pub fn load_dictionary_config(path: &Path) -> Result<DictionaryConfig, DomainError> {
    let content = std::fs::read_to_string(path).map_err(|e| {
        DomainError::ConfigurationError(format!(
            "Failed to read file '{}': {}",
            path.display(),
            e
        ))
    })?;

    parse_dictionary_config(&content, &format!("'{}'", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_embedded_config_loads() {
        let config = embedded_dictionary_config().expect("embedded lexicon should load");
        assert_eq!(config.metadata.code, "ru");
        assert!(!config.paradigms.is_empty());
        assert!(!config.lexemes.is_empty());
        assert!(config.closed.prepositions.iter().any(|p| p == "в"));
    }

    #[test]
    fn test_load_from_file() {
        let mut file = NamedTempFile::new().unwrap();
        write!(
            file,
            r#"
[metadata]
code = "ru-test"
name = "Test"

[closed]
particles = ["же"]
"#
        )
        .unwrap();

        let config = load_dictionary_config(file.path()).unwrap();
        assert_eq!(config.metadata.code, "ru-test");
        assert_eq!(config.closed.particles, vec!["же".to_string()]);
    }

    #[test]
    fn test_missing_file_is_configuration_error() {
        match load_dictionary_config(Path::new("/nonexistent/lexicon.toml")) {
            Err(DomainError::ConfigurationError(msg)) => {
                assert!(msg.contains("Failed to read file"));
            }
            other => panic!("Expected ConfigurationError, got {other:?}"),
        }
    }

    #[test]
    fn test_malformed_toml_is_configuration_error() {
        let result = parse_dictionary_config("[metadata\ncode = ", "inline");
        match result {
            Err(DomainError::ConfigurationError(msg)) => assert!(msg.contains("inline")),
            other => panic!("Expected ConfigurationError, got {other:?}"),
        }
    }
}
