use super::config::{embedded_cliche_config, load_cliche_config, ClicheConfig};
use super::pattern::{ClichePattern, Slot};
use crate::domain::analysis::{analyze_tokens, AnalyzedToken};
use crate::domain::error::DomainError;
use crate::domain::morphology::Morphology;
use crate::domain::token::{tokenize, Token, TokenKind};
use serde::Serialize;
use std::collections::HashMap;
use std::path::Path;

/// One occurrence of a reference cliché in the text
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ClicheMatch {
    pub pattern_id: String,
    /// Pattern source as written in the reference set
    pub pattern: String,
    pub category: String,
    /// First matched word (word index)
    pub start_word: usize,
    /// One past the last matched word
    pub end_word: usize,
    /// Char offset of the first matched character
    pub char_start: usize,
    /// Char offset one past the last matched character
    pub char_end: usize,
    /// Matched text as written, including inner whitespace and punctuation
    pub text: String,
}

impl ClicheMatch {
    /// Number of words covered by the match
    pub fn word_len(&self) -> usize {
        self.end_word - self.start_word
    }
}

/// Compiled reference cliché set
#[derive(Debug, Clone)]
pub struct ClicheMatcher {
    patterns: Vec<ClichePattern>,
}

impl ClicheMatcher {
    pub fn new(patterns: Vec<ClichePattern>) -> Self {
        Self { patterns }
    }

    /// The embedded Russian reference set
    pub fn russian() -> Result<Self, DomainError> {
        Self::from_config(&embedded_cliche_config()?)
    }

    /// Reference set loaded from an external TOML file
    pub fn from_file(path: &Path) -> Result<Self, DomainError> {
        Self::from_config(&load_cliche_config(path)?)
    }

    pub fn from_config(config: &ClicheConfig) -> Result<Self, DomainError> {
        let patterns = config.compile()?;
        log::debug!(
            "compiled {} cliché patterns from '{}'",
            patterns.len(),
            config.metadata.name
        );
        Ok(Self::new(patterns))
    }

    pub fn patterns(&self) -> &[ClichePattern] {
        &self.patterns
    }

    /// Pattern lemmas the morphology does not know, as `(pattern id, lemma)`
    ///
    /// Such slots can still match through the surface-form fallback, so they
    /// are reported rather than rejected.
    pub fn unknown_lemmas<M>(&self, morph: &M) -> Vec<(String, String)>
    where
        M: Morphology + ?Sized,
    {
        let mut unknown = Vec::new();
        for pattern in &self.patterns {
            for lemma in pattern.slots.iter().flat_map(Slot::lemmas) {
                let known = morph
                    .analyze(lemma)
                    .iter()
                    .any(|p| p.is_known() && p.lemma == *lemma);
                if !known {
                    unknown.push((pattern.id.clone(), lemma.clone()));
                }
            }
        }
        unknown
    }

    /// Log a warning for every pattern lemma missing from the morphology
    pub fn warn_unknown_lemmas<M>(&self, morph: &M)
    where
        M: Morphology + ?Sized,
    {
        for (id, lemma) in self.unknown_lemmas(morph) {
            log::warn!("cliché pattern '{id}' uses lemma '{lemma}' unknown to the dictionary");
        }
    }

    /// Find reference clichés in `text`, in ascending start order
    ///
    /// At most one match is reported per start word: the one covering the
    /// most words, then the longest text, then the earliest pattern.
    pub fn find_matches<M>(&self, morph: &M, text: &str) -> Vec<ClicheMatch>
    where
        M: Morphology + ?Sized,
    {
        let tokens = tokenize(text);
        let words = analyze_tokens(morph, &tokens);
        let links = word_links(&tokens, &words);

        let mut matches = Vec::new();
        let mut last_end: HashMap<usize, usize> = HashMap::new();

        for start in 0..words.len() {
            let mut best: Option<(usize, usize, usize)> = None;

            for (p_idx, pattern) in self.patterns.iter().enumerate() {
                if last_end.get(&p_idx).is_some_and(|&end| start < end) {
                    continue;
                }
                let Some(end) = match_slots(&pattern.slots, &words, &links, start, start) else {
                    continue;
                };
                let span = words[end - 1].token.char_end - words[start].token.char_start;
                let better = match best {
                    None => true,
                    Some((_, best_end, best_span)) => {
                        end > best_end || (end == best_end && span > best_span)
                    }
                };
                if better {
                    best = Some((p_idx, end, span));
                }
            }

            if let Some((p_idx, end, _)) = best {
                last_end.insert(p_idx, end);
                matches.push(self.build_match(p_idx, text, &words, start, end));
            }
        }

        log::debug!(
            "found {} cliché matches among {} words",
            matches.len(),
            words.len()
        );
        matches
    }

    fn build_match(
        &self,
        p_idx: usize,
        text: &str,
        words: &[AnalyzedToken<'_>],
        start: usize,
        end: usize,
    ) -> ClicheMatch {
        let pattern = &self.patterns[p_idx];
        let first = &words[start].token;
        let last = &words[end - 1].token;
        ClicheMatch {
            pattern_id: pattern.id.clone(),
            pattern: pattern.source.clone(),
            category: pattern.category.clone(),
            start_word: start,
            end_word: end,
            char_start: first.char_start,
            char_end: last.char_end,
            text: text[first.byte_range.start..last.byte_range.end].to_string(),
        }
    }
}

/// `links[i]` tells whether word `i` and word `i + 1` may belong to one match:
/// at most one punctuation token between them, and no sentence terminator
fn word_links(tokens: &[Token<'_>], words: &[AnalyzedToken<'_>]) -> Vec<bool> {
    words
        .windows(2)
        .map(|pair| {
            let between = &tokens[pair[0].token_index + 1..pair[1].token_index];
            let punctuation: Vec<&Token<'_>> = between
                .iter()
                .filter(|t| t.kind == TokenKind::Punctuation)
                .collect();
            punctuation.len() <= 1 && !punctuation.iter().any(|t| t.is_terminator())
        })
        .collect()
}

/// Fill `slots` starting at word `pos`; returns the furthest end reachable
///
/// The first filled word must be `start`, so leading optional slots can only
/// be skipped, never used to shift the match.
fn match_slots(
    slots: &[Slot],
    words: &[AnalyzedToken<'_>],
    links: &[bool],
    start: usize,
    pos: usize,
) -> Option<usize> {
    let Some((slot, rest)) = slots.split_first() else {
        return (pos > start).then_some(pos);
    };

    let linked = pos == start || links.get(pos - 1).copied().unwrap_or(false);
    let consumed = if pos < words.len() && linked && slot.accepts(&words[pos]) {
        match_slots(rest, words, links, start, pos + 1)
    } else {
        None
    };

    let skipped = if slot.optional {
        match_slots(rest, words, links, start, pos)
    } else {
        None
    };

    consumed.max(skipped)
}
