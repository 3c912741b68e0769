use super::config::{
    embedded_dictionary_config, load_dictionary_config, DictionaryConfig, LexemeConfig,
};
use super::guesser::{default_lexeme_tags, Guesser};
use super::paradigm::{apply_overrides, Paradigm, WordForm};
use super::{LexemeHandle, Morphology, Parse};
use crate::domain::error::DomainError;
use crate::domain::grammeme::{Grammeme, Grammemes, PartOfSpeech};
use crate::domain::token::normalize;
use smallvec::SmallVec;
use std::collections::HashMap;
use std::path::Path;

#[derive(Debug, Clone)]
struct Lexeme {
    lemma: String,
    pos: PartOfSpeech,
    tags: Grammemes,
    freq: u32,
    forms: Vec<WordForm>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct FormRef {
    lexeme: u32,
    form: u16,
}

/// Immutable in-memory morphological dictionary
///
/// Every form of every lexeme is indexed by its normalized spelling, so
/// analysis of a known word is a single hash lookup.
#[derive(Debug, Clone)]
pub struct MorphDictionary {
    code: String,
    name: String,
    paradigms: Vec<Paradigm>,
    lexemes: Vec<Lexeme>,
    index: HashMap<String, SmallVec<[FormRef; 4]>>,
    guesser: Guesser,
}

impl MorphDictionary {
    /// Build the dictionary from the embedded Russian lexicon
    pub fn russian() -> Result<Self, DomainError> {
        let config = embedded_dictionary_config()?;
        Self::from_config(&config)
    }

    /// Build the dictionary from an external lexicon file
    pub fn from_file(path: &Path) -> Result<Self, DomainError> {
        let config = load_dictionary_config(path)?;
        Self::from_config(&config)
    }

    /// Build the dictionary from a parsed lexicon
    pub fn from_config(config: &DictionaryConfig) -> Result<Self, DomainError> {
        config.validate()?;

        let paradigms: Vec<Paradigm> = config.paradigms.iter().map(Paradigm::from_config).collect();
        let by_name: HashMap<&str, usize> = paradigms
            .iter()
            .enumerate()
            .map(|(i, p)| (p.name.as_str(), i))
            .collect();

        let mut lexemes = Vec::with_capacity(config.lexemes.len());
        for entry in &config.lexemes {
            lexemes.push(build_lexeme(entry, &paradigms, &by_name)?);
        }

        for (pos, word) in config.closed.entries() {
            let lemma = normalize(word);
            lexemes.push(Lexeme {
                lemma,
                pos,
                tags: Grammemes::new(),
                freq: 1,
                forms: vec![WordForm {
                    text: word.to_string(),
                    tags: Grammemes::new().with(Grammeme::Fixd),
                }],
            });
        }

        let mut index: HashMap<String, SmallVec<[FormRef; 4]>> = HashMap::new();
        for (l_idx, lexeme) in lexemes.iter().enumerate() {
            for (f_idx, form) in lexeme.forms.iter().enumerate() {
                let refs = index.entry(normalize(&form.text)).or_default();
                let form_ref = FormRef {
                    lexeme: l_idx as u32,
                    form: f_idx as u16,
                };
                if !refs.contains(&form_ref) {
                    refs.push(form_ref);
                }
            }
        }

        let guesser = Guesser::new(&paradigms);

        log::debug!(
            "built '{}' dictionary: {} paradigms, {} lexemes, {} distinct forms",
            config.metadata.code,
            paradigms.len(),
            lexemes.len(),
            index.len()
        );

        Ok(Self {
            code: config.metadata.code.clone(),
            name: config.metadata.name.clone(),
            paradigms,
            lexemes,
            index,
            guesser,
        })
    }

    /// Lexicon language code
    pub fn code(&self) -> &str {
        &self.code
    }

    /// Lexicon display name
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn lexeme_count(&self) -> usize {
        self.lexemes.len()
    }

    pub fn paradigm_count(&self) -> usize {
        self.paradigms.len()
    }

    /// Whether the word (any form) is in the dictionary
    pub fn is_known(&self, word: &str) -> bool {
        self.index.contains_key(&normalize(word))
    }

    /// Whether some lexeme has this lemma
    pub fn contains_lemma(&self, lemma: &str) -> bool {
        let lemma = normalize(lemma);
        self.index
            .get(&lemma)
            .map(|refs| {
                refs.iter()
                    .any(|r| self.lexemes[r.lexeme as usize].lemma == lemma)
            })
            .unwrap_or(false)
    }

    /// Prepositions, conjunctions and particles, in lexicon order
    pub fn function_words(&self) -> Vec<(&str, PartOfSpeech)> {
        self.lexemes
            .iter()
            .filter(|l| l.pos.is_function_word())
            .map(|l| (l.lemma.as_str(), l.pos))
            .collect()
    }

    fn dictionary_parses(&self, word: &str, refs: &[FormRef]) -> Vec<Parse> {
        let mut seen: SmallVec<[u32; 4]> = SmallVec::new();
        let mut total: u64 = 0;
        for r in refs {
            if !seen.contains(&r.lexeme) {
                seen.push(r.lexeme);
                total += u64::from(self.lexemes[r.lexeme as usize].freq.max(1));
            }
        }

        let mut parses: Vec<Parse> = refs
            .iter()
            .map(|r| {
                let lexeme = &self.lexemes[r.lexeme as usize];
                let form = &lexeme.forms[r.form as usize];
                let mut tags = lexeme.tags.clone();
                tags.extend(form.tags.iter());
                Parse {
                    word: word.to_string(),
                    lemma: lexeme.lemma.clone(),
                    pos: lexeme.pos,
                    tags,
                    score: lexeme.freq.max(1) as f32 / total.max(1) as f32,
                    lexeme: LexemeHandle::Dictionary(r.lexeme as usize),
                }
            })
            .collect();

        // Stable sort keeps lexicon and slot order among equal scores
        parses.sort_by(|a, b| b.score.total_cmp(&a.score));
        parses
    }

    fn unanalyzable(word: &str, pos: PartOfSpeech) -> Parse {
        Parse {
            word: word.to_string(),
            lemma: word.to_string(),
            pos,
            tags: Grammemes::new().with(Grammeme::Fixd),
            score: 1.0,
            lexeme: LexemeHandle::Unanalyzable,
        }
    }

    fn lexeme_forms(&self, handle: &LexemeHandle) -> Option<(Grammemes, Vec<WordForm>)> {
        match handle {
            LexemeHandle::Dictionary(idx) => self
                .lexemes
                .get(*idx)
                .map(|l| (l.tags.clone(), l.forms.clone())),
            LexemeHandle::Guessed { paradigm, stem } => self.paradigms.get(*paradigm).map(|p| {
                let tags = default_lexeme_tags(p);
                let forms = p.forms(stem, &tags);
                (tags, forms)
            }),
            LexemeHandle::Unanalyzable => None,
        }
    }
}

fn build_lexeme(
    entry: &LexemeConfig,
    paradigms: &[Paradigm],
    by_name: &HashMap<&str, usize>,
) -> Result<Lexeme, DomainError> {
    let lemma = normalize(&entry.lemma);

    match &entry.paradigm {
        Some(name) => {
            let paradigm = by_name
                .get(name.as_str())
                .map(|&i| &paradigms[i])
                .ok_or_else(|| DomainError::UnknownParadigm {
                    lemma: entry.lemma.clone(),
                    paradigm: name.clone(),
                })?;
            let stem = paradigm
                .stem_of(&entry.lemma)
                .ok_or_else(|| DomainError::InvalidLexeme {
                    lemma: entry.lemma.clone(),
                    reason: format!(
                        "lemma does not end with '{}' required by paradigm '{}'",
                        paradigm.lemma_ending(),
                        paradigm.name
                    ),
                })?;
            let tags = paradigm.lexeme_tags(&entry.tags);
            let mut forms = paradigm.forms(stem, &tags);
            apply_overrides(&mut forms, &entry.overrides);

            Ok(Lexeme {
                lemma,
                pos: paradigm.pos,
                tags,
                freq: entry.freq,
                forms,
            })
        }
        None => {
            if !entry.overrides.is_empty() {
                return Err(DomainError::InvalidLexeme {
                    lemma: entry.lemma.clone(),
                    reason: "overrides need a paradigm".to_string(),
                });
            }
            let pos = entry.pos.ok_or_else(|| DomainError::InvalidLexeme {
                lemma: entry.lemma.clone(),
                reason: "explicit forms require a part of speech".to_string(),
            })?;

            Ok(Lexeme {
                lemma,
                pos,
                tags: entry.tags.clone(),
                freq: entry.freq,
                forms: entry
                    .forms
                    .iter()
                    .map(|f| WordForm {
                        text: f.form.clone(),
                        tags: f.tags.clone(),
                    })
                    .collect(),
            })
        }
    }
}

fn classify_script(word: &str) -> Script {
    if word.chars().all(|c| c.is_numeric() || c == '-') {
        return Script::Digits;
    }
    if word.chars().any(is_cyrillic) {
        Script::Cyrillic
    } else {
        Script::Foreign
    }
}

fn is_cyrillic(c: char) -> bool {
    matches!(c, '\u{0400}'..='\u{04FF}')
}

enum Script {
    Cyrillic,
    Digits,
    Foreign,
}

impl Morphology for MorphDictionary {
    fn analyze(&self, word: &str) -> Vec<Parse> {
        let normalized = normalize(word.trim());
        if !normalized.chars().any(char::is_alphanumeric) {
            return Vec::new();
        }

        if let Some(refs) = self.index.get(&normalized) {
            return self.dictionary_parses(&normalized, refs);
        }

        match classify_script(&normalized) {
            Script::Digits => vec![Self::unanalyzable(&normalized, PartOfSpeech::Number)],
            Script::Foreign => vec![Self::unanalyzable(&normalized, PartOfSpeech::Latin)],
            Script::Cyrillic => {
                // Guessed stems keep `ё`, which the index spelling folds away
                let lowered = word.trim().to_lowercase();
                let guesses = self.guesser.guess(&lowered, &self.paradigms);
                if guesses.is_empty() {
                    vec![Self::unanalyzable(&normalized, PartOfSpeech::Noun)]
                } else {
                    guesses
                }
            }
        }
    }

    fn inflect(&self, parse: &Parse, required: &Grammemes) -> Vec<String> {
        let Some((lexeme_tags, forms)) = self.lexeme_forms(&parse.lexeme) else {
            return Vec::new();
        };

        let mut result: Vec<String> = Vec::new();
        for form in forms {
            let mut tags = lexeme_tags.clone();
            tags.extend(form.tags.iter());
            if tags.contains_all(required) && !result.contains(&form.text) {
                result.push(form.text);
            }
        }
        result
    }
}
