//! Data Transfer Objects for API
//!
//! Field names follow the JSON consumed by the existing web front end.

use ritorika_core::{Case, ClicheMatch, PhraseCases, RepeatFinding, WordCategory};

/// Request to decline a phrase
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CasesRequest {
    /// Phrase to decline; required
    #[cfg_attr(feature = "serde", serde(default))]
    pub phrase: Option<String>,
}

impl CasesRequest {
    /// Create a request for `phrase`
    pub fn new(phrase: impl Into<String>) -> Self {
        Self {
            phrase: Some(phrase.into()),
        }
    }
}

/// The phrase in every case, keyed by OpenCorpora case tag
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CasesResponse {
    /// Nominative
    pub nomn: String,
    /// Genitive
    pub gent: String,
    /// Dative
    pub datv: String,
    /// Accusative
    pub accs: String,
    /// Instrumental
    pub ablt: String,
    /// Prepositional
    pub loct: String,
    /// Nominative plural, absent when no word has a plural form
    pub plural_nomn: Option<String>,
}

impl CasesResponse {
    /// Text for `case`
    pub fn get(&self, case: Case) -> &str {
        match case {
            Case::Nominative => &self.nomn,
            Case::Genitive => &self.gent,
            Case::Dative => &self.datv,
            Case::Accusative => &self.accs,
            Case::Instrumental => &self.ablt,
            Case::Prepositional => &self.loct,
        }
    }
}

impl From<PhraseCases> for CasesResponse {
    fn from(cases: PhraseCases) -> Self {
        let text = |case| cases.text(case).unwrap_or(&cases.phrase).to_string();
        Self {
            nomn: text(Case::Nominative),
            gent: text(Case::Genitive),
            datv: text(Case::Dative),
            accs: text(Case::Accusative),
            ablt: text(Case::Instrumental),
            loct: text(Case::Prepositional),
            plural_nomn: cases.plural.clone(),
        }
    }
}

/// Request to find repeated words
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RepeatsRequest {
    /// Text to check; required
    #[cfg_attr(feature = "serde", serde(default))]
    pub text: Option<String>,
    /// Window for ordinary words
    #[cfg_attr(feature = "serde", serde(default))]
    pub window_size: Option<usize>,
    /// Window for prepositions, conjunctions and particles
    #[cfg_attr(feature = "serde", serde(default))]
    pub window_size_tech_words: Option<usize>,
}

impl RepeatsRequest {
    /// Create a request for `text` with default windows
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: Some(text.into()),
            ..Self::default()
        }
    }

    /// Set the ordinary word window
    pub fn window_size(mut self, window: usize) -> Self {
        self.window_size = Some(window);
        self
    }

    /// Set the function word window
    pub fn function_word_window(mut self, window: usize) -> Self {
        self.window_size_tech_words = Some(window);
        self
    }
}

/// One occurrence of a repeated word
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct RepeatDTO {
    /// Word as written
    pub word: String,
    /// Char offset of the first character
    pub start_position: usize,
    /// Char offset of the last character (inclusive)
    pub end_position: usize,
    /// Position among the words of the text
    pub word_index: usize,
}

/// A group of occurrences of one lemma
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct RepeatGroupDTO {
    /// Shared lemma
    pub word: String,
    /// Serialized as `ordinary` or `function_word`
    pub category: WordCategory,
    /// Window the group was checked against
    pub window_size: usize,
    /// Occurrences in text order
    pub repeats: Vec<RepeatDTO>,
}

impl From<RepeatFinding> for RepeatGroupDTO {
    fn from(finding: RepeatFinding) -> Self {
        Self {
            word: finding.lemma,
            category: finding.category,
            window_size: finding.window_size,
            repeats: finding
                .occurrences
                .into_iter()
                .map(|o| RepeatDTO {
                    word: o.surface,
                    start_position: o.char_start,
                    end_position: o.char_end.saturating_sub(1),
                    word_index: o.word_index,
                })
                .collect(),
        }
    }
}

impl RepeatGroupDTO {
    /// Whether the group holds function words
    pub fn is_function_word(&self) -> bool {
        self.category == WordCategory::FunctionWord
    }
}

/// Repeated word groups in order of first occurrence
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RepeatsResponse {
    /// Groups of repeated words
    #[cfg_attr(feature = "serde", serde(rename = "repeatData"))]
    pub repeat_data: Vec<RepeatGroupDTO>,
}

/// Request to find clichés
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ClichesRequest {
    /// Text to check; required
    #[cfg_attr(feature = "serde", serde(default))]
    pub text: Option<String>,
}

impl ClichesRequest {
    /// Create a request for `text`
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: Some(text.into()),
        }
    }
}

/// One cliché found in the text
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct ClicheDTO {
    /// Char offset of the first character
    pub start: usize,
    /// Char offset one past the last character
    pub end: usize,
    /// Matched text as written
    pub text: String,
    /// Pattern source
    pub pattern: String,
    /// Pattern identifier
    pub pattern_id: String,
}

impl From<ClicheMatch> for ClicheDTO {
    fn from(found: ClicheMatch) -> Self {
        Self {
            start: found.char_start,
            end: found.char_end,
            text: found.text,
            pattern: found.pattern,
            pattern_id: found.pattern_id,
        }
    }
}

/// Clichés in order of start position
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ClichesResponse {
    /// Matches
    pub data: Vec<ClicheDTO>,
}
