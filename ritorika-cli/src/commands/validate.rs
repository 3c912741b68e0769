//! Validate command implementation

use super::GlobalArgs;
use crate::error::CliError;
use anyhow::Result;
use clap::Args;
use ritorika_core::{ClicheMatcher, MorphDictionary};
use std::path::Path;

/// Arguments for the validate command
#[derive(Debug, Args)]
pub struct ValidateArgs {
    /// Fail when cliché patterns use lemmas unknown to the dictionary
    #[arg(long)]
    pub strict: bool,
}

fn source_name(path: Option<&Path>) -> String {
    path.map_or_else(|| "embedded".to_string(), |p| p.display().to_string())
}

impl ValidateArgs {
    /// Execute the validate command
    pub fn execute(&self, global: &GlobalArgs) -> Result<()> {
        let config = global.load_config()?;
        let dictionary_path = global
            .dictionary
            .as_deref()
            .or(config.resources.dictionary.as_deref());
        let cliches_path = global.cliches.as_deref().or(config.resources.cliches.as_deref());

        println!("Validating dictionary: {}", source_name(dictionary_path));
        let dictionary = match dictionary_path {
            Some(path) => MorphDictionary::from_file(path),
            None => MorphDictionary::russian(),
        };
        let dictionary = match dictionary {
            Ok(dictionary) => {
                println!("✓ Dictionary is valid!");
                println!("  Code: {}", dictionary.code());
                println!("  Name: {}", dictionary.name());
                println!("  Paradigms: {}", dictionary.paradigm_count());
                println!("  Lexemes: {}", dictionary.lexeme_count());
                dictionary
            }
            Err(e) => {
                println!("✗ Dictionary is invalid!");
                println!("  Error: {e}");
                return Err(CliError::ValidationFailed(e.to_string()).into());
            }
        };

        println!("Validating cliché patterns: {}", source_name(cliches_path));
        let cliches = match cliches_path {
            Some(path) => ClicheMatcher::from_file(path),
            None => ClicheMatcher::russian(),
        };
        let cliches = match cliches {
            Ok(cliches) => {
                println!("✓ Cliché patterns are valid!");
                println!("  Patterns: {}", cliches.patterns().len());
                cliches
            }
            Err(e) => {
                println!("✗ Cliché patterns are invalid!");
                println!("  Error: {e}");
                return Err(CliError::ValidationFailed(e.to_string()).into());
            }
        };

        let unknown = cliches.unknown_lemmas(&dictionary);
        for (id, lemma) in &unknown {
            println!("  Warning: pattern '{id}' uses lemma '{lemma}' unknown to the dictionary");
        }
        if self.strict && !unknown.is_empty() {
            return Err(CliError::ValidationFailed(format!(
                "{} pattern lemmas unknown to the dictionary",
                unknown.len()
            ))
            .into());
        }

        Ok(())
    }
}
