//! Morphological lookup: word analysis and inflection
//!
//! The [`Morphology`] trait is the seam every analyzer depends on.
//! [`MorphDictionary`] implements it over a lexicon loaded once from TOML
//! (the embedded Russian lexicon or an external file) and never mutated, so a
//! single instance can be shared across threads without locking.

pub mod config;
mod dictionary;
mod guesser;
mod paradigm;

pub use dictionary::MorphDictionary;

use crate::domain::grammeme::{Case, Grammemes, PartOfSpeech};
use crate::domain::token::normalize;
use serde::Serialize;

/// Where a parse came from and how to regenerate its lexeme's forms
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LexemeHandle {
    /// Lexeme stored in the dictionary
    Dictionary(usize),
    /// Lexeme reconstructed by the suffix guesser
    Guessed {
        /// Index of the paradigm the guess was made from
        paradigm: usize,
        /// Stem the paradigm endings attach to
        stem: String,
    },
    /// Digits, foreign words and other tokens without forms
    Unanalyzable,
}

/// One morphological analysis of a word
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Parse {
    /// Normalized surface form that was analyzed
    pub word: String,
    /// Dictionary form (normalized)
    pub lemma: String,
    pub pos: PartOfSpeech,
    /// Lexeme grammemes plus the grammemes of this particular form
    pub tags: Grammemes,
    /// Relative plausibility in `(0, 1]`; dictionary parses outrank guesses
    pub score: f32,
    #[serde(skip)]
    pub lexeme: LexemeHandle,
}

impl Parse {
    /// True when the analysis is a heuristic guess for an unknown word
    pub fn is_guessed(&self) -> bool {
        matches!(self.lexeme, LexemeHandle::Guessed { .. })
    }

    /// True when the word was found in the dictionary
    pub fn is_known(&self) -> bool {
        matches!(self.lexeme, LexemeHandle::Dictionary(_))
    }

    /// Case of this form, if it has one
    pub fn case(&self) -> Option<Case> {
        self.tags.case()
    }
}

/// Dictionary-backed morphological analysis
pub trait Morphology: Send + Sync {
    /// All plausible analyses of `word`, best first
    ///
    /// Unknown words receive guessed analyses; the result is only empty for
    /// input without letters or digits.
    fn analyze(&self, word: &str) -> Vec<Parse>;

    /// Forms of the parse's lexeme that carry every grammeme in `required`
    ///
    /// Forms come in paradigm order without duplicates. An empty result means
    /// the lexeme cannot take these grammemes (indeclinable words, adverbs,
    /// a case requested from a verb); callers keep the original form.
    fn inflect(&self, parse: &Parse, required: &Grammemes) -> Vec<String>;

    /// Every form of `lemma` as `pos` that is in `case`
    fn inflect_case(&self, lemma: &str, pos: PartOfSpeech, case: Case) -> Vec<String> {
        let lemma = normalize(lemma);
        let required = Grammemes::new().with(case.grammeme());
        let mut forms: Vec<String> = Vec::new();

        for parse in self
            .analyze(&lemma)
            .iter()
            .filter(|p| p.pos == pos && p.lemma == lemma)
        {
            for form in self.inflect(parse, &required) {
                if !forms.contains(&form) {
                    forms.push(form);
                }
            }
        }

        forms
    }

    /// Lemma of the best analysis, or the normalized word itself
    fn lemmatize(&self, word: &str) -> String {
        self.analyze(word)
            .into_iter()
            .next()
            .map(|p| p.lemma)
            .unwrap_or_else(|| normalize(word))
    }
}

impl<M: Morphology + ?Sized> Morphology for &M {
    fn analyze(&self, word: &str) -> Vec<Parse> {
        (**self).analyze(word)
    }

    fn inflect(&self, parse: &Parse, required: &Grammemes) -> Vec<String> {
        (**self).inflect(parse, required)
    }
}

impl<M: Morphology + ?Sized> Morphology for std::sync::Arc<M> {
    fn analyze(&self, word: &str) -> Vec<Parse> {
        (**self).analyze(word)
    }

    fn inflect(&self, parse: &Parse, required: &Grammemes) -> Vec<String> {
        (**self).inflect(parse, required)
    }
}
