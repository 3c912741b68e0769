//! High-level configuration API

use crate::error::{ApiError, Result};
use ritorika_core::{word_count, ClicheMatcher, MorphDictionary, RepeatWindows};
use std::path::PathBuf;

/// Where a resource is loaded from
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum ResourceSource {
    /// The Russian resource compiled into the binary
    #[default]
    Embedded,
    /// An external TOML file
    File(PathBuf),
}

impl ResourceSource {
    pub(crate) fn load_dictionary(&self) -> Result<MorphDictionary> {
        let dictionary = match self {
            ResourceSource::Embedded => MorphDictionary::russian()?,
            ResourceSource::File(path) => MorphDictionary::from_file(path)?,
        };
        Ok(dictionary)
    }

    pub(crate) fn load_cliches(&self) -> Result<ClicheMatcher> {
        let cliches = match self {
            ResourceSource::Embedded => ClicheMatcher::russian()?,
            ResourceSource::File(path) => ClicheMatcher::from_file(path)?,
        };
        Ok(cliches)
    }
}

/// Repeat window sizes, any of which may be left to default
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RepeatOptions {
    /// Window for ordinary words; defaults to the number of words in the text
    pub window_size: Option<usize>,
    /// Window for function words; defaults to the resolved `window_size`
    pub function_word_window: Option<usize>,
}

impl RepeatOptions {
    /// Create options with both windows left to default
    pub fn new() -> Self {
        Self::default()
    }

    /// Fill unset windows from `fallback`
    pub fn or(self, fallback: RepeatOptions) -> Self {
        Self {
            window_size: self.window_size.or(fallback.window_size),
            function_word_window: self.function_word_window.or(fallback.function_word_window),
        }
    }

    /// Concrete windows for `text`
    pub fn resolve(&self, text: &str) -> RepeatWindows {
        let window_size = self.window_size.unwrap_or_else(|| word_count(text));
        let function_word_window = self.function_word_window.unwrap_or(window_size);
        RepeatWindows::new(window_size, function_word_window)
    }
}

/// High-level configuration for the analyzers
#[derive(Debug, Clone, Default)]
pub struct Config {
    /// Morphological dictionary source
    pub dictionary: ResourceSource,
    /// Reference cliché set source
    pub cliches: ResourceSource,
    /// Repeat windows used when a request leaves them unset
    pub repeats: RepeatOptions,
    /// Warn about pattern lemmas missing from the dictionary when loading
    pub check_pattern_lemmas: bool,
}

impl Config {
    /// Create a builder
    pub fn builder() -> ConfigBuilder {
        ConfigBuilder::default()
    }
}

/// Configuration builder
#[derive(Debug, Default)]
pub struct ConfigBuilder {
    config: Config,
}

impl ConfigBuilder {
    /// Load the dictionary from a TOML file
    pub fn dictionary_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.config.dictionary = ResourceSource::File(path.into());
        self
    }

    /// Load the cliché patterns from a TOML file
    pub fn cliches_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.config.cliches = ResourceSource::File(path.into());
        self
    }

    /// Default window for ordinary words
    pub fn window_size(mut self, window: usize) -> Self {
        self.config.repeats.window_size = Some(window);
        self
    }

    /// Default window for function words
    pub fn function_word_window(mut self, window: usize) -> Self {
        self.config.repeats.function_word_window = Some(window);
        self
    }

    /// Warn about pattern lemmas unknown to the dictionary
    pub fn check_pattern_lemmas(mut self, check: bool) -> Self {
        self.config.check_pattern_lemmas = check;
        self
    }

    /// Build the configuration
    pub fn build(self) -> Result<Config> {
        for source in [&self.config.dictionary, &self.config.cliches] {
            if let ResourceSource::File(path) = source {
                if path.as_os_str().is_empty() {
                    return Err(ApiError::Config("resource path is empty".to_string()));
                }
            }
        }
        Ok(self.config)
    }
}
