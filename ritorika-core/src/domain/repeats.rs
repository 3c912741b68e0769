//! Repeated words within a sliding window
//!
//! Words are compared by lemma, so `купил` and `куплю` repeat each other.
//! Prepositions, conjunctions and particles are checked against their own,
//! usually narrower, window.

use crate::domain::analysis::{analyze_tokens, AnalyzedToken};
use crate::domain::morphology::Morphology;
use crate::domain::token::tokenize;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

/// Window sizes in words
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RepeatWindows {
    /// Maximum distance between repeats of ordinary words
    pub window_size: usize,
    /// Maximum distance between repeats of function words
    pub function_word_window: usize,
}

impl RepeatWindows {
    pub fn new(window_size: usize, function_word_window: usize) -> Self {
        Self {
            window_size,
            function_word_window,
        }
    }

    /// The window that applies to `category`
    pub fn for_category(&self, category: WordCategory) -> usize {
        match category {
            WordCategory::Ordinary => self.window_size,
            WordCategory::FunctionWord => self.function_word_window,
        }
    }
}

/// Which window a word is checked against
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WordCategory {
    Ordinary,
    /// Preposition, conjunction or particle
    FunctionWord,
}

impl fmt::Display for WordCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WordCategory::Ordinary => f.write_str("ordinary"),
            WordCategory::FunctionWord => f.write_str("function_word"),
        }
    }
}

/// A single repeated word in the text
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Occurrence {
    pub word_index: usize,
    pub char_start: usize,
    /// One past the last character
    pub char_end: usize,
    /// Surface form as written
    pub surface: String,
}

/// A chain of occurrences of one lemma, each within the window of the previous
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RepeatFinding {
    pub lemma: String,
    pub category: WordCategory,
    pub window_size: usize,
    pub occurrences: Vec<Occurrence>,
}

impl RepeatFinding {
    pub fn first_index(&self) -> usize {
        self.occurrences.first().map_or(0, |o| o.word_index)
    }
}

/// Find lemmas repeated within their category window
///
/// Words are numbered by position among word tokens. Consecutive occurrences
/// at most `window` words apart chain into one finding; single-character words
/// and words without letters or digits are skipped but still take up
/// positions. Findings come in order of their first occurrence.
pub fn find_word_repeats<M>(morph: &M, text: &str, windows: RepeatWindows) -> Vec<RepeatFinding>
where
    M: Morphology + ?Sized,
{
    let tokens = tokenize(text);
    let words = analyze_tokens(morph, &tokens);

    let mut positions: HashMap<(WordCategory, &str), Vec<usize>> = HashMap::new();
    for word in &words {
        if word.token.char_len() < 2 || !word.token.has_alphanumeric() {
            continue;
        }
        let category = match word.pos() {
            Some(pos) if pos.is_function_word() => WordCategory::FunctionWord,
            _ => WordCategory::Ordinary,
        };
        positions
            .entry((category, word.lemma()))
            .or_default()
            .push(word.word_index);
    }

    let mut findings = Vec::new();
    for ((category, lemma), indices) in positions {
        let window = windows.for_category(category);

        let mut chain: Vec<usize> = Vec::new();
        for index in indices {
            if let Some(&prev) = chain.last() {
                if index - prev > window {
                    if chain.len() > 1 {
                        findings.push(build_finding(lemma, category, window, &chain, &words));
                    }
                    chain.clear();
                }
            }
            chain.push(index);
        }
        if chain.len() > 1 {
            findings.push(build_finding(lemma, category, window, &chain, &words));
        }
    }

    findings.sort_by_key(RepeatFinding::first_index);

    log::debug!(
        "found {} repeat findings among {} words (windows {}/{})",
        findings.len(),
        words.len(),
        windows.window_size,
        windows.function_word_window
    );
    findings
}

fn build_finding(
    lemma: &str,
    category: WordCategory,
    window_size: usize,
    chain: &[usize],
    words: &[AnalyzedToken<'_>],
) -> RepeatFinding {
    RepeatFinding {
        lemma: lemma.to_string(),
        category,
        window_size,
        occurrences: chain
            .iter()
            .map(|&i| {
                let token = &words[i].token;
                Occurrence {
                    word_index: i,
                    char_start: token.char_start,
                    char_end: token.char_end,
                    surface: token.text.to_string(),
                }
            })
            .collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::morphology::MorphDictionary;

    fn lemmas(findings: &[RepeatFinding]) -> Vec<&str> {
        findings.iter().map(|f| f.lemma.as_str()).collect()
    }

    #[test]
    fn test_repeats_by_lemma() {
        let dict = MorphDictionary::russian().unwrap();
        let findings = find_word_repeats(
            &dict,
            "Он купил дом. Он купил машину.",
            RepeatWindows::new(10, 3),
        );
        assert_eq!(lemmas(&findings), vec!["он", "купить"]);

        let he = &findings[0];
        assert_eq!(he.category, WordCategory::Ordinary);
        assert_eq!(he.window_size, 10);
        let indices: Vec<usize> = he.occurrences.iter().map(|o| o.word_index).collect();
        assert_eq!(indices, vec![0, 3]);
        assert_eq!(he.occurrences[1].char_start, 14);
        assert_eq!(he.occurrences[1].char_end, 16);
        assert_eq!(he.occurrences[1].surface, "Он");
    }

    #[test]
    fn test_different_forms_of_one_lemma() {
        let dict = MorphDictionary::russian().unwrap();
        let findings = find_word_repeats(&dict, "Я куплю то, что он купил", RepeatWindows::new(10, 1));
        let buy = findings.iter().find(|f| f.lemma == "купить").unwrap();
        let surfaces: Vec<&str> = buy.occurrences.iter().map(|o| o.surface.as_str()).collect();
        assert_eq!(surfaces, vec!["куплю", "купил"]);
    }

    #[test]
    fn test_window_boundary_is_inclusive() {
        let dict = MorphDictionary::russian().unwrap();
        // "дом" at word 0 and word 3: distance 3
        let text = "дом стол окно дом";
        assert_eq!(find_word_repeats(&dict, text, RepeatWindows::new(3, 1)).len(), 1);
        assert!(find_word_repeats(&dict, text, RepeatWindows::new(2, 1)).is_empty());
    }

    #[test]
    fn test_chains_are_transitive() {
        let dict = MorphDictionary::russian().unwrap();
        // Positions 0, 2, 4: each pair of neighbours within 2, ends 4 apart
        let findings = find_word_repeats(
            &dict,
            "дом стол дом окно дом",
            RepeatWindows::new(2, 1),
        );
        assert_eq!(findings.len(), 1);
        assert_eq!(findings[0].occurrences.len(), 3);
    }

    #[test]
    fn test_distant_repeats_split_into_separate_findings() {
        let dict = MorphDictionary::russian().unwrap();
        let text = "дом дом стол окно книга рука дом дом";
        let findings = find_word_repeats(&dict, text, RepeatWindows::new(1, 1));
        assert_eq!(findings.len(), 2);
        assert_eq!(findings[0].first_index(), 0);
        assert_eq!(findings[1].first_index(), 6);
    }

    #[test]
    fn test_function_words_use_their_own_window() {
        let dict = MorphDictionary::russian().unwrap();
        let text = "кот или пёс или мама";
        let narrow = find_word_repeats(&dict, text, RepeatWindows::new(10, 1));
        assert!(narrow.is_empty());

        let wide = find_word_repeats(&dict, "дом на столе на окне", RepeatWindows::new(0, 2));
        assert_eq!(wide.len(), 1);
        assert_eq!(wide[0].lemma, "на");
        assert_eq!(wide[0].category, WordCategory::FunctionWord);
        assert_eq!(wide[0].window_size, 2);
    }

    #[test]
    fn test_single_character_words_are_skipped() {
        let dict = MorphDictionary::russian().unwrap();
        let findings = find_word_repeats(&dict, "я и ты и я", RepeatWindows::new(10, 10));
        assert!(findings.is_empty());
    }

    #[test]
    fn test_case_insensitive() {
        let dict = MorphDictionary::russian().unwrap();
        let findings = find_word_repeats(&dict, "Дом и ДОМ", RepeatWindows::new(5, 5));
        assert_eq!(lemmas(&findings), vec!["дом"]);
    }

    #[test]
    fn test_empty_text() {
        let dict = MorphDictionary::russian().unwrap();
        assert!(find_word_repeats(&dict, "", RepeatWindows::new(5, 5)).is_empty());
        assert!(find_word_repeats(&dict, " ,.!", RepeatWindows::new(5, 5)).is_empty());
    }
}
