//! Cliché pattern syntax
//!
//! A pattern is a space-separated list of slots:
//!
//! | Slot | Matches |
//! |---|---|
//! | `помощь` | any form of the lemma |
//! | `оказать\|оказывать` | any form of either lemma |
//! | `роль:NOUN` | the lemma as the given part of speech |
//! | `=тем` | exactly this (normalized) surface |
//! | `<ADJF>` | any word of the part of speech |
//!
//! A trailing `?` makes a slot optional.

use crate::domain::analysis::AnalyzedToken;
use crate::domain::error::DomainError;
use crate::domain::grammeme::PartOfSpeech;
use crate::domain::token::normalize;
use smallvec::SmallVec;
use std::fmt;

/// What a single slot accepts
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SlotMatcher {
    /// Any form of one of the lemmas, optionally restricted to a part of speech
    Lemma {
        lemmas: SmallVec<[String; 2]>,
        pos: Option<PartOfSpeech>,
    },
    /// Exact normalized surface form
    Surface(String),
    /// Any word with this part of speech
    Pos(PartOfSpeech),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Slot {
    pub matcher: SlotMatcher,
    pub optional: bool,
}

impl Slot {
    fn parse(raw: &str, pattern: &str) -> Result<Self, DomainError> {
        let invalid = |reason: String| DomainError::InvalidPattern {
            pattern: pattern.to_string(),
            reason,
        };

        let (body, optional) = match raw.strip_suffix('?') {
            Some(body) => (body, true),
            None => (raw, false),
        };
        if body.is_empty() {
            return Err(invalid(format!("empty slot '{raw}'")));
        }

        let matcher = if let Some(inner) = body.strip_prefix('<') {
            let tag = inner
                .strip_suffix('>')
                .ok_or_else(|| invalid(format!("unclosed part of speech in '{raw}'")))?;
            SlotMatcher::Pos(tag.parse::<PartOfSpeech>().map_err(invalid)?)
        } else if let Some(surface) = body.strip_prefix('=') {
            if surface.is_empty() {
                return Err(invalid(format!("empty surface form in '{raw}'")));
            }
            SlotMatcher::Surface(normalize(surface))
        } else {
            let (lemma_part, pos) = match body.split_once(':') {
                Some((lemmas, tag)) => (lemmas, Some(tag.parse::<PartOfSpeech>().map_err(invalid)?)),
                None => (body, None),
            };
            let lemmas: SmallVec<[String; 2]> = lemma_part.split('|').map(normalize).collect();
            if lemmas.iter().any(String::is_empty) {
                return Err(invalid(format!("empty lemma in '{raw}'")));
            }
            SlotMatcher::Lemma { lemmas, pos }
        };

        Ok(Self { matcher, optional })
    }

    /// Whether the analyzed word can fill this slot
    pub fn accepts(&self, word: &AnalyzedToken<'_>) -> bool {
        match &self.matcher {
            SlotMatcher::Lemma { lemmas, pos: None } => lemmas
                .iter()
                .any(|lemma| word.has_lemma(lemma) || word.normalized == *lemma),
            SlotMatcher::Lemma {
                lemmas,
                pos: Some(pos),
            } => word
                .parses
                .iter()
                .any(|p| p.pos == *pos && lemmas.contains(&p.lemma)),
            SlotMatcher::Surface(surface) => word.normalized == *surface,
            SlotMatcher::Pos(pos) => word.has_pos(*pos),
        }
    }

    /// Lemmas named by the slot
    pub fn lemmas(&self) -> &[String] {
        match &self.matcher {
            SlotMatcher::Lemma { lemmas, .. } => lemmas,
            _ => &[],
        }
    }
}

impl fmt::Display for Slot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.matcher {
            SlotMatcher::Lemma { lemmas, pos } => {
                f.write_str(&lemmas.join("|"))?;
                if let Some(pos) = pos {
                    write!(f, ":{pos}")?;
                }
            }
            SlotMatcher::Surface(surface) => write!(f, "={surface}")?,
            SlotMatcher::Pos(pos) => write!(f, "<{pos}>")?,
        }
        if self.optional {
            f.write_str("?")?;
        }
        Ok(())
    }
}

/// A compiled reference cliché
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClichePattern {
    pub id: String,
    /// Pattern text as written in the reference set
    pub source: String,
    pub category: String,
    pub slots: Vec<Slot>,
}

impl ClichePattern {
    pub fn parse(
        id: impl Into<String>,
        source: &str,
        category: impl Into<String>,
    ) -> Result<Self, DomainError> {
        let slots = source
            .split_whitespace()
            .map(|raw| Slot::parse(raw, source))
            .collect::<Result<Vec<_>, _>>()?;

        if !slots.iter().any(|s| !s.optional) {
            return Err(DomainError::InvalidPattern {
                pattern: source.to_string(),
                reason: "pattern needs at least one required slot".to_string(),
            });
        }

        Ok(Self {
            id: id.into(),
            source: source.trim().to_string(),
            category: category.into(),
            slots,
        })
    }

    /// Number of slots that must be filled
    pub fn required_len(&self) -> usize {
        self.slots.iter().filter(|s| !s.optional).count()
    }
}
