//! Domain layer: tokenization, morphology and the three text analyzers
//!
//! Every analyzer is a pure function of its input text and the shared,
//! read-only resources it is given.

pub mod analysis;
pub mod cases;
pub mod cliches;
pub mod error;
pub mod grammeme;
pub mod morphology;
pub mod repeats;
pub mod token;

pub use analysis::{analyze_tokens, AnalyzedToken};
pub use cases::{generate_phrase_cases, CaseVariant, PhraseCases};
pub use cliches::{ClicheMatch, ClicheMatcher, ClichePattern};
pub use error::DomainError;
pub use grammeme::{Case, Grammeme, Grammemes, PartOfSpeech};
pub use morphology::{LexemeHandle, MorphDictionary, Morphology, Parse};
pub use repeats::{find_word_repeats, Occurrence, RepeatFinding, RepeatWindows, WordCategory};
pub use token::{normalize, tokenize, word_count, Token, TokenKind};
