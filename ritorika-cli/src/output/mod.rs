//! Output formatting module

use crate::error::CliError;
use anyhow::Result;
use ritorika_api::{CasesResponse, ClichesResponse, RepeatsResponse};
use std::io::Write;
use std::str::FromStr;

/// Trait for output formatters
///
/// `source` names the analyzed text when several texts share one output.
pub trait OutputFormatter: Send + Sync {
    /// Format the declension of one phrase
    fn format_cases(&mut self, phrase: &str, cases: &CasesResponse) -> Result<()>;

    /// Format the repeated words of one text
    fn format_repeats(&mut self, source: Option<&str>, repeats: &RepeatsResponse) -> Result<()>;

    /// Format the clichés of one text
    fn format_cliches(&mut self, source: Option<&str>, cliches: &ClichesResponse) -> Result<()>;

    /// Finalize output (e.g., close JSON array)
    fn finish(&mut self) -> Result<()>;
}

pub mod json;
pub mod markdown;
pub mod text;

pub use json::JsonFormatter;
pub use markdown::MarkdownFormatter;
pub use text::TextFormatter;

/// Supported output formats
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// Human-readable plain text
    Text,
    /// JSON in the shape served to the web front end
    Json,
    /// Markdown tables
    Markdown,
}

impl OutputFormat {
    /// All formats with a short description
    pub const ALL: [(OutputFormat, &'static str); 3] = [
        (OutputFormat::Text, "human-readable plain text"),
        (OutputFormat::Json, "JSON as served to the web front end"),
        (OutputFormat::Markdown, "Markdown tables"),
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            OutputFormat::Text => "text",
            OutputFormat::Json => "json",
            OutputFormat::Markdown => "markdown",
        }
    }

    /// Create a formatter writing to `writer`
    pub fn formatter<W>(self, writer: W, pretty_json: bool) -> Box<dyn OutputFormatter>
    where
        W: Write + Send + Sync + 'static,
    {
        match self {
            OutputFormat::Text => Box::new(TextFormatter::new(writer)),
            OutputFormat::Json => Box::new(JsonFormatter::new(writer, pretty_json)),
            OutputFormat::Markdown => Box::new(MarkdownFormatter::new(writer)),
        }
    }
}

impl FromStr for OutputFormat {
    type Err = CliError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "text" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            "markdown" | "md" => Ok(OutputFormat::Markdown),
            other => Err(CliError::ConfigError(format!(
                "unknown output format '{other}'"
            ))),
        }
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_from_str() {
        assert_eq!("json".parse::<OutputFormat>().unwrap(), OutputFormat::Json);
        assert_eq!("MD".parse::<OutputFormat>().unwrap(), OutputFormat::Markdown);
        assert!("xml".parse::<OutputFormat>().is_err());
    }

    #[test]
    fn test_format_names_round_trip() {
        for (format, _) in OutputFormat::ALL {
            assert_eq!(format.as_str().parse::<OutputFormat>().unwrap(), format);
        }
    }
}
