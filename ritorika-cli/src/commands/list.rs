//! List command implementation

use super::GlobalArgs;
use crate::output::OutputFormat;
use anyhow::Result;
use clap::Subcommand;

/// List subcommands
#[derive(Debug, Subcommand)]
pub enum ListCommands {
    /// List the reference cliché patterns
    Patterns,

    /// List prepositions, conjunctions and particles checked with the function word window
    FunctionWords,

    /// List available output formats
    Formats,
}

impl ListCommands {
    /// Execute the list command
    pub fn execute(&self, global: &GlobalArgs) -> Result<()> {
        match self {
            ListCommands::Patterns => {
                let config = global.load_config()?;
                let analyzer = global.analyzer(&config)?;
                for pattern in analyzer.cliches().patterns() {
                    println!("{:<24} {:<14} {}", pattern.id, pattern.category, pattern.source);
                }
            }
            ListCommands::FunctionWords => {
                let config = global.load_config()?;
                let analyzer = global.analyzer(&config)?;
                for (word, pos) in analyzer.dictionary().function_words() {
                    println!("{:<12} {}", word, pos.tag());
                }
            }
            ListCommands::Formats => {
                for (format, description) in OutputFormat::ALL {
                    println!("{:<10} {}", format.as_str(), description);
                }
            }
        }
        Ok(())
    }
}
