//! Word tokens paired with their morphological analyses

use crate::domain::grammeme::PartOfSpeech;
use crate::domain::morphology::{Morphology, Parse};
use crate::domain::token::{Token, TokenKind};

/// A word token with every parse the morphology produced for it
#[derive(Debug, Clone)]
pub struct AnalyzedToken<'a> {
    pub token: Token<'a>,
    /// Position among word tokens (whitespace and punctuation not counted)
    pub word_index: usize,
    /// Position in the full token stream
    pub token_index: usize,
    /// Lower-cased surface with `ё` folded
    pub normalized: String,
    /// Ranked analyses, best first
    pub parses: Vec<Parse>,
}

impl<'a> AnalyzedToken<'a> {
    /// Top-ranked analysis
    pub fn best(&self) -> Option<&Parse> {
        self.parses.first()
    }

    /// Lemma of the top analysis, or the normalized surface
    pub fn lemma(&self) -> &str {
        self.best().map_or(self.normalized.as_str(), |p| p.lemma.as_str())
    }

    /// Part of speech of the top analysis
    pub fn pos(&self) -> Option<PartOfSpeech> {
        self.best().map(|p| p.pos)
    }

    /// Whether any analysis has this lemma
    pub fn has_lemma(&self, lemma: &str) -> bool {
        self.parses.iter().any(|p| p.lemma == lemma)
    }

    /// Whether any analysis has this part of speech
    pub fn has_pos(&self, pos: PartOfSpeech) -> bool {
        self.parses.iter().any(|p| p.pos == pos)
    }
}

/// Analyze every word token of an already tokenized text
pub fn analyze_tokens<'a, M>(morph: &M, tokens: &[Token<'a>]) -> Vec<AnalyzedToken<'a>>
where
    M: Morphology + ?Sized,
{
    tokens
        .iter()
        .enumerate()
        .filter(|(_, token)| token.kind == TokenKind::Word)
        .enumerate()
        .map(|(word_index, (token_index, token))| {
            let normalized = token.normalized();
            let parses = morph.analyze(&normalized);
            AnalyzedToken {
                token: token.clone(),
                word_index,
                token_index,
                normalized,
                parses,
            }
        })
        .collect()
}
