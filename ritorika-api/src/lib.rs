//! Public API for Ritorika text style analysis
//!
//! This crate wraps the three analyzers of `ritorika-core` behind
//! request/response types shaped for the web front end, and owns the shared
//! dictionary and cliché resources.

#![warn(missing_docs)]

pub mod config;
pub mod dto;
pub mod error;

use ritorika_core::{find_word_repeats, generate_phrase_cases, ClicheMatcher, MorphDictionary};
use std::sync::Arc;

// Re-export key types
pub use config::{Config, ConfigBuilder, RepeatOptions, ResourceSource};
pub use dto::{
    CasesRequest, CasesResponse, ClicheDTO, ClichesRequest, ClichesResponse, RepeatDTO,
    RepeatGroupDTO, RepeatsRequest, RepeatsResponse,
};
pub use error::{ApiError, Result};
pub use ritorika_core::WordCategory;

/// Main entry point for text analysis
///
/// Resources are loaded once and shared; cloning the analyzer is cheap and
/// every method takes `&self`, so one instance can serve concurrent requests.
#[derive(Debug, Clone)]
pub struct TextAnalyzer {
    dictionary: Arc<MorphDictionary>,
    cliches: Arc<ClicheMatcher>,
    config: Config,
}

impl TextAnalyzer {
    /// Create an analyzer over the embedded Russian resources
    pub fn new() -> Result<Self> {
        Self::with_config(Config::default())
    }

    /// Create an analyzer with custom configuration
    pub fn with_config(config: Config) -> Result<Self> {
        let dictionary = config.dictionary.load_dictionary()?;
        let cliches = config.cliches.load_cliches()?;
        log::debug!(
            "loaded dictionary '{}' ({} lexemes) and {} cliché patterns",
            dictionary.name(),
            dictionary.lexeme_count(),
            cliches.patterns().len()
        );
        if config.check_pattern_lemmas {
            cliches.warn_unknown_lemmas(&dictionary);
        }
        Ok(Self::from_parts(Arc::new(dictionary), Arc::new(cliches), config))
    }

    /// Create an analyzer over already loaded resources
    pub fn from_parts(
        dictionary: Arc<MorphDictionary>,
        cliches: Arc<ClicheMatcher>,
        config: Config,
    ) -> Self {
        Self {
            dictionary,
            cliches,
            config,
        }
    }

    /// Decline a phrase into the six cases
    pub fn generate_cases(&self, request: CasesRequest) -> Result<CasesResponse> {
        let phrase = request.phrase.ok_or(ApiError::MissingField("phrase"))?;
        Ok(generate_phrase_cases(self.dictionary.as_ref(), &phrase).into())
    }

    /// Find words repeated within their window
    pub fn find_repeats(&self, request: RepeatsRequest) -> Result<RepeatsResponse> {
        let text = request.text.ok_or(ApiError::MissingField("text"))?;
        let options = RepeatOptions {
            window_size: request.window_size,
            function_word_window: request.window_size_tech_words,
        }
        .or(self.config.repeats);
        let windows = options.resolve(&text);

        let repeat_data = find_word_repeats(self.dictionary.as_ref(), &text, windows)
            .into_iter()
            .map(RepeatGroupDTO::from)
            .collect();
        Ok(RepeatsResponse { repeat_data })
    }

    /// Find reference clichés in the text
    pub fn analyze_cliches(&self, request: ClichesRequest) -> Result<ClichesResponse> {
        let text = request.text.ok_or(ApiError::MissingField("text"))?;
        let data = self
            .cliches
            .find_matches(self.dictionary.as_ref(), &text)
            .into_iter()
            .map(ClicheDTO::from)
            .collect();
        Ok(ClichesResponse { data })
    }

    /// Get the current configuration
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// The shared dictionary
    pub fn dictionary(&self) -> &MorphDictionary {
        &self.dictionary
    }

    /// The shared cliché set
    pub fn cliches(&self) -> &ClicheMatcher {
        &self.cliches
    }
}

// Convenience functions

/// Decline a phrase with the embedded resources
pub fn decline(phrase: &str) -> Result<CasesResponse> {
    TextAnalyzer::new()?.generate_cases(CasesRequest::new(phrase))
}

/// Find repeats with the embedded resources and default windows
pub fn find_repeats(text: &str) -> Result<RepeatsResponse> {
    TextAnalyzer::new()?.find_repeats(RepeatsRequest::new(text))
}

/// Find clichés with the embedded resources
pub fn analyze_cliches(text: &str) -> Result<ClichesResponse> {
    TextAnalyzer::new()?.analyze_cliches(ClichesRequest::new(text))
}
