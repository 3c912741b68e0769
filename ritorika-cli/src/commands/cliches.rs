//! Cliches command implementation

use super::{source_label, GlobalArgs};
use crate::input::collect_sources;
use anyhow::Result;
use clap::Args;
use ritorika_api::ClichesRequest;

/// Arguments for the cliches command
#[derive(Debug, Args)]
pub struct ClichesArgs {
    /// Input files or patterns (supports glob; default: stdin)
    #[arg(short, long, value_name = "FILE/PATTERN")]
    pub input: Vec<String>,

    /// Analyze this text instead of files
    #[arg(long, value_name = "TEXT", conflicts_with = "input")]
    pub text: Option<String>,
}

impl ClichesArgs {
    /// Execute the cliches command
    pub fn execute(&self, global: &GlobalArgs) -> Result<()> {
        let config = global.load_config()?;
        let analyzer = global.analyzer(&config)?;
        let sources = collect_sources(&self.input, self.text.as_deref())?;

        let results = global.analyze_sources(&sources, |source| {
            Ok(analyzer.analyze_cliches(ClichesRequest::new(source.text.as_str()))?)
        })?;

        let mut formatter = global.formatter(&config)?;
        for (source, cliches) in sources.iter().zip(&results) {
            formatter.format_cliches(source_label(&sources, source).as_deref(), cliches)?;
        }
        formatter.finish()
    }
}
