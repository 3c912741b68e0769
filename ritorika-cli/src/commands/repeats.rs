//! Repeats command implementation

use super::{source_label, GlobalArgs};
use crate::input::collect_sources;
use anyhow::Result;
use clap::Args;
use ritorika_api::RepeatsRequest;

/// Arguments for the repeats command
#[derive(Debug, Args)]
pub struct RepeatsArgs {
    /// Input files or patterns (supports glob; default: stdin)
    #[arg(short, long, value_name = "FILE/PATTERN")]
    pub input: Vec<String>,

    /// Analyze this text instead of files
    #[arg(long, value_name = "TEXT", conflicts_with = "input")]
    pub text: Option<String>,

    /// Window for ordinary words, in words (default: whole text)
    #[arg(short = 'w', long, value_name = "N")]
    pub window_size: Option<usize>,

    /// Window for prepositions, conjunctions and particles (default: --window-size)
    #[arg(
        short = 't',
        long,
        value_name = "N",
        visible_alias = "window-size-tech-words"
    )]
    pub function_word_window: Option<usize>,
}

impl RepeatsArgs {
    /// Execute the repeats command
    pub fn execute(&self, global: &GlobalArgs) -> Result<()> {
        let config = global.load_config()?;
        let analyzer = global.analyzer(&config)?;
        let sources = collect_sources(&self.input, self.text.as_deref())?;

        let results = global.analyze_sources(&sources, |source| {
            let request = RepeatsRequest {
                text: Some(source.text.clone()),
                window_size: self.window_size,
                window_size_tech_words: self.function_word_window,
            };
            Ok(analyzer.find_repeats(request)?)
        })?;

        let mut formatter = global.formatter(&config)?;
        for (source, repeats) in sources.iter().zip(&results) {
            formatter.format_repeats(source_label(&sources, source).as_deref(), repeats)?;
        }
        formatter.finish()
    }
}
