//! Cases command implementation

use super::GlobalArgs;
use anyhow::Result;
use clap::Args;
use ritorika_api::CasesRequest;

/// Arguments for the cases command
#[derive(Debug, Args)]
pub struct CasesArgs {
    /// Phrases to decline, e.g. "красивый дом"
    #[arg(value_name = "PHRASE", required = true)]
    pub phrases: Vec<String>,
}

impl CasesArgs {
    /// Execute the cases command
    pub fn execute(&self, global: &GlobalArgs) -> Result<()> {
        let config = global.load_config()?;
        let analyzer = global.analyzer(&config)?;
        let mut formatter = global.formatter(&config)?;

        for phrase in &self.phrases {
            log::debug!("Declining '{phrase}'");
            let cases = analyzer.generate_cases(CasesRequest::new(phrase.as_str()))?;
            formatter.format_cases(phrase, &cases)?;
        }

        formatter.finish()
    }
}
