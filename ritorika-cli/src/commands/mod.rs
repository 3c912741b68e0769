//! CLI command implementations

use crate::config::CliConfig;
use crate::input::TextSource;
use crate::output::{OutputFormat, OutputFormatter};
use crate::progress::ProgressReporter;
use anyhow::{Context, Result};
use clap::{Args, Subcommand};
use rayon::prelude::*;
use ritorika_api::{Config, TextAnalyzer};
use std::fs::File;
use std::io::{self, BufWriter};
use std::path::PathBuf;

pub mod cases;
pub mod cliches;
pub mod list;
pub mod repeats;
pub mod validate;

/// Options shared by every command
#[derive(Debug, Args)]
pub struct GlobalArgs {
    /// Dictionary TOML file (default: embedded Russian dictionary)
    #[arg(long, value_name = "FILE", global = true)]
    pub dictionary: Option<PathBuf>,

    /// Cliché pattern TOML file (default: embedded Russian patterns)
    #[arg(long, value_name = "FILE", global = true)]
    pub cliches: Option<PathBuf>,

    /// Configuration file
    #[arg(short, long, value_name = "FILE", global = true, env = "RITORIKA_CONFIG")]
    pub config: Option<PathBuf>,

    /// Output file (default: stdout)
    #[arg(short, long, value_name = "FILE", global = true)]
    pub output: Option<PathBuf>,

    /// Output format (default: from config, else text)
    #[arg(short, long, value_enum, global = true)]
    pub format: Option<OutputFormat>,

    /// Analyze several input files concurrently
    #[arg(short, long, global = true)]
    pub parallel: bool,

    /// Worker threads for --parallel (default: number of CPUs)
    #[arg(long, value_name = "N", global = true)]
    pub threads: Option<usize>,

    /// Suppress progress output and logging
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Increase verbosity
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,
}

/// Available CLI commands
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Decline phrases into the six cases
    Cases(cases::CasesArgs),

    /// Find words repeated within a window
    Repeats(repeats::RepeatsArgs),

    /// Find stock phrases from the reference set
    Cliches(cliches::ClichesArgs),

    /// Check dictionary and cliché resources
    Validate(validate::ValidateArgs),

    /// List available components
    List {
        #[command(subcommand)]
        subcommand: list::ListCommands,
    },
}

impl Commands {
    /// Execute the selected command
    pub fn execute(&self, global: &GlobalArgs) -> Result<()> {
        match self {
            Commands::Cases(args) => args.execute(global),
            Commands::Repeats(args) => args.execute(global),
            Commands::Cliches(args) => args.execute(global),
            Commands::Validate(args) => args.execute(global),
            Commands::List { subcommand } => subcommand.execute(global),
        }
    }
}

impl GlobalArgs {
    /// Configuration file contents, or defaults
    pub fn load_config(&self) -> Result<CliConfig> {
        CliConfig::load(self.config.as_deref())
    }

    /// Analyzer over the resources chosen by flags, then config, then defaults
    pub fn analyzer(&self, config: &CliConfig) -> Result<TextAnalyzer> {
        let mut builder = Config::builder()
            .check_pattern_lemmas(config.resources.check_pattern_lemmas);
        if let Some(path) = self.dictionary.as_ref().or(config.resources.dictionary.as_ref()) {
            builder = builder.dictionary_file(path);
        }
        if let Some(path) = self.cliches.as_ref().or(config.resources.cliches.as_ref()) {
            builder = builder.cliches_file(path);
        }
        if let Some(window) = config.repeats.window_size {
            builder = builder.window_size(window);
        }
        if let Some(window) = config.repeats.function_word_window {
            builder = builder.function_word_window(window);
        }

        let analyzer = TextAnalyzer::with_config(builder.build()?)
            .context("Failed to load analysis resources")?;
        log::info!(
            "Loaded dictionary '{}' and {} cliché patterns",
            analyzer.dictionary().name(),
            analyzer.cliches().patterns().len()
        );
        Ok(analyzer)
    }

    /// Formatter for the chosen format and destination
    pub fn formatter(&self, config: &CliConfig) -> Result<Box<dyn OutputFormatter>> {
        let format = match self.format {
            Some(format) => format,
            None => config.output.default_format.parse()?,
        };
        let pretty = config.output.pretty_json;

        let formatter = match &self.output {
            Some(path) => {
                let file = File::create(path)
                    .with_context(|| format!("Failed to create output file: {}", path.display()))?;
                format.formatter(BufWriter::new(file), pretty)
            }
            None => format.formatter(io::stdout(), pretty),
        };
        Ok(formatter)
    }

    /// Analyze every source, concurrently with `--parallel`, keeping input order
    pub fn analyze_sources<T, F>(&self, sources: &[TextSource], analyze: F) -> Result<Vec<T>>
    where
        T: Send,
        F: Fn(&TextSource) -> Result<T> + Sync,
    {
        let mut progress = ProgressReporter::new(self.quiet);
        progress.init_sources(sources.len() as u64);

        let run = |source: &TextSource| {
            let result = analyze(source);
            progress.source_completed(&source.name);
            result
        };

        let results = if self.parallel && sources.len() > 1 {
            let threads = self.threads.unwrap_or_else(num_cpus::get).max(1);
            log::info!("Analyzing {} texts on {} threads", sources.len(), threads);
            let pool = rayon::ThreadPoolBuilder::new()
                .num_threads(threads)
                .build()
                .context("Failed to start worker threads")?;
            pool.install(|| sources.par_iter().map(run).collect::<Result<Vec<_>>>())?
        } else {
            sources.iter().map(run).collect::<Result<Vec<_>>>()?
        };

        progress.finish();
        Ok(results)
    }
}

/// Source label shown in output; a lone source needs none
pub(crate) fn source_label(sources: &[TextSource], source: &TextSource) -> Option<String> {
    (sources.len() > 1).then(|| source.name.clone())
}
