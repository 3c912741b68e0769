use super::config::{FormConfig, ParadigmConfig};
use crate::domain::grammeme::{Grammeme, Grammemes, PartOfSpeech};

/// A concrete word form with the grammemes of its paradigm slot
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct WordForm {
    pub text: String,
    pub tags: Grammemes,
}

#[derive(Debug, Clone)]
pub(crate) struct Ending {
    pub suffix: String,
    pub tags: Grammemes,
    pub when: Option<Grammeme>,
}

impl Ending {
    /// Whether the slot exists for a lexeme with the given tags
    pub fn applies_to(&self, lexeme_tags: &Grammemes) -> bool {
        self.when.map_or(true, |g| lexeme_tags.contains(g))
    }
}

/// Inflection table: the same endings shared by every lexeme of a class
#[derive(Debug, Clone)]
pub(crate) struct Paradigm {
    pub name: String,
    pub pos: PartOfSpeech,
    pub tags: Grammemes,
    pub guess_weight: u32,
    pub stem_final: Option<Vec<char>>,
    pub endings: Vec<Ending>,
}

impl Paradigm {
    pub fn from_config(config: &ParadigmConfig) -> Self {
        Self {
            name: config.name.clone(),
            pos: config.pos,
            tags: config.tags.clone(),
            guess_weight: config.guess_weight,
            stem_final: config.stem_final.as_ref().map(|s| s.chars().collect()),
            endings: config
                .forms
                .iter()
                .map(|f| Ending {
                    suffix: f.ending.clone(),
                    tags: f.tags.clone(),
                    when: f.when,
                })
                .collect(),
        }
    }

    /// Ending of the dictionary form
    pub fn lemma_ending(&self) -> &str {
        self.endings.first().map_or("", |e| e.suffix.as_str())
    }

    /// Stem of `lemma` under this paradigm
    pub fn stem_of<'a>(&self, lemma: &'a str) -> Option<&'a str> {
        lemma.strip_suffix(self.lemma_ending())
    }

    /// Whether a guessed stem is compatible with the paradigm
    pub fn accepts_stem(&self, stem: &str) -> bool {
        match (&self.stem_final, stem.chars().last()) {
            (Some(allowed), Some(last)) => allowed.contains(&last),
            (None, Some(_)) => true,
            (_, None) => false,
        }
    }

    /// Lexeme grammemes: the paradigm's own plus the lexeme's
    pub fn lexeme_tags(&self, extra: &Grammemes) -> Grammemes {
        let mut tags = self.tags.clone();
        tags.extend(extra.iter());
        tags
    }

    /// Generate every form of the lexeme with `stem`
    pub fn forms(&self, stem: &str, lexeme_tags: &Grammemes) -> Vec<WordForm> {
        self.endings
            .iter()
            .filter(|e| e.applies_to(lexeme_tags))
            .map(|e| WordForm {
                text: format!("{stem}{}", e.suffix),
                tags: e.tags.clone(),
            })
            .collect()
    }
}

/// Replace forms whose tag set equals an override's; unmatched overrides are appended
pub(crate) fn apply_overrides(forms: &mut Vec<WordForm>, overrides: &[FormConfig]) {
    for over in overrides {
        let mut replaced = false;
        for form in forms.iter_mut() {
            if form.tags.contains_all(&over.tags) && over.tags.contains_all(&form.tags) {
                form.text = over.form.clone();
                replaced = true;
            }
        }
        if !replaced {
            forms.push(WordForm {
                text: over.form.clone(),
                tags: over.tags.clone(),
            });
        }
    }
}
