use thiserror::Error;

/// Domain-specific errors
///
/// All of them come from loading reference resources; analysis itself never
/// fails.
#[derive(Debug, Error)]
pub enum DomainError {
    /// Configuration loading or parsing error
    #[error("Configuration error: {0}")]
    ConfigurationError(String),

    /// Lexeme refers to a paradigm that does not exist
    #[error("Unknown paradigm '{paradigm}' for lemma '{lemma}'")]
    UnknownParadigm { lemma: String, paradigm: String },

    /// Lexeme entry is inconsistent
    #[error("Invalid lexeme '{lemma}': {reason}")]
    InvalidLexeme { lemma: String, reason: String },

    /// Cliché pattern could not be parsed
    #[error("Invalid cliché pattern '{pattern}': {reason}")]
    InvalidPattern { pattern: String, reason: String },
}
