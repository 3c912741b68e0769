//! Style analysis of Russian text
//!
//! The crate provides three independent analyzers sharing one read-only
//! morphological dictionary:
//!
//! - **Case generator**: declines a phrase into the six grammatical cases
//! - **Repeat detector**: finds words repeated within a sliding window
//! - **Cliché matcher**: finds stock phrases from a reference pattern set
//!
//! # Example
//!
//! ```rust
//! use ritorika_core::{
//!     find_word_repeats, generate_phrase_cases, Case, ClicheMatcher, MorphDictionary,
//!     RepeatWindows,
//! };
//!
//! let dictionary = MorphDictionary::russian().unwrap();
//!
//! let cases = generate_phrase_cases(&dictionary, "красивый дом");
//! assert_eq!(cases.text(Case::Genitive), Some("красивого дома"));
//!
//! let repeats = find_word_repeats(
//!     &dictionary,
//!     "Он купил дом. Он купил машину.",
//!     RepeatWindows::new(10, 3),
//! );
//! assert_eq!(repeats.len(), 2);
//!
//! let cliches = ClicheMatcher::russian().unwrap();
//! let found = cliches.find_matches(&dictionary, "Это играет важную роль.");
//! assert_eq!(found[0].pattern_id, "play-role");
//! ```

pub mod domain;

pub use domain::*;
