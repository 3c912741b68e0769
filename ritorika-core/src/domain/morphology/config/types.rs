use crate::domain::error::DomainError;
use crate::domain::grammeme::{Grammeme, Grammemes, PartOfSpeech};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Lexicon file: paradigms, lexemes and closed word classes
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DictionaryConfig {
    pub metadata: MetadataConfig,
    #[serde(default)]
    pub paradigms: Vec<ParadigmConfig>,
    #[serde(default)]
    pub lexemes: Vec<LexemeConfig>,
    #[serde(default)]
    pub closed: ClosedClassConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MetadataConfig {
    pub code: String,
    pub name: String,
}

/// Ending table shared by many lexemes
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ParadigmConfig {
    pub name: String,
    pub pos: PartOfSpeech,
    /// Grammemes every form of the paradigm carries (e.g. gender)
    #[serde(default)]
    pub tags: Grammemes,
    /// Weight for the unknown-word guesser; 0 excludes the paradigm
    #[serde(default)]
    pub guess_weight: u32,
    /// Letters a guessed stem may end with (any letter when absent)
    #[serde(default)]
    pub stem_final: Option<String>,
    pub forms: Vec<EndingConfig>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EndingConfig {
    pub ending: String,
    pub tags: Grammemes,
    /// Only generate this form for lexemes tagged with this grammeme
    #[serde(default)]
    pub when: Option<Grammeme>,
}

/// Dictionary word: either paradigm-based or with explicit forms
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LexemeConfig {
    pub lemma: String,
    #[serde(default)]
    pub paradigm: Option<String>,
    /// Required for lexemes with explicit forms
    #[serde(default)]
    pub pos: Option<PartOfSpeech>,
    #[serde(default)]
    pub tags: Grammemes,
    #[serde(default = "default_freq")]
    pub freq: u32,
    /// Explicit forms; the first one must be the lemma
    #[serde(default)]
    pub forms: Vec<FormConfig>,
    /// Replace paradigm forms that carry exactly these tags
    #[serde(default)]
    pub overrides: Vec<FormConfig>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FormConfig {
    pub form: String,
    pub tags: Grammemes,
}

/// Unchangeable words grouped by part of speech
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ClosedClassConfig {
    #[serde(default)]
    pub prepositions: Vec<String>,
    #[serde(default)]
    pub conjunctions: Vec<String>,
    #[serde(default)]
    pub particles: Vec<String>,
    #[serde(default)]
    pub adverbs: Vec<String>,
    #[serde(default)]
    pub interjections: Vec<String>,
}

impl ClosedClassConfig {
    /// Every closed-class word paired with its part of speech
    pub fn entries(&self) -> impl Iterator<Item = (PartOfSpeech, &str)> + '_ {
        let groups: [(PartOfSpeech, &Vec<String>); 5] = [
            (PartOfSpeech::Preposition, &self.prepositions),
            (PartOfSpeech::Conjunction, &self.conjunctions),
            (PartOfSpeech::Particle, &self.particles),
            (PartOfSpeech::Adverb, &self.adverbs),
            (PartOfSpeech::Interjection, &self.interjections),
        ];
        groups
            .into_iter()
            .flat_map(|(pos, words)| words.iter().map(move |w| (pos, w.as_str())))
    }
}

fn default_freq() -> u32 {
    1
}

impl DictionaryConfig {
    /// Check structural consistency before the dictionary is built
    pub fn validate(&self) -> Result<(), DomainError> {
        if self.metadata.code.trim().is_empty() {
            return Err(DomainError::ConfigurationError(
                "metadata.code must not be empty".to_string(),
            ));
        }

        let mut names = HashSet::new();
        for paradigm in &self.paradigms {
            if !names.insert(paradigm.name.as_str()) {
                return Err(DomainError::ConfigurationError(format!(
                    "duplicate paradigm '{}'",
                    paradigm.name
                )));
            }
            if paradigm.forms.is_empty() {
                return Err(DomainError::ConfigurationError(format!(
                    "paradigm '{}' has no forms",
                    paradigm.name
                )));
            }
        }

        for lexeme in &self.lexemes {
            lexeme.validate(&names)?;
        }

        for (_, word) in self.closed.entries() {
            if word.trim().is_empty() {
                return Err(DomainError::ConfigurationError(
                    "closed word classes must not contain empty words".to_string(),
                ));
            }
        }

        Ok(())
    }
}

impl LexemeConfig {
    fn validate(&self, paradigms: &HashSet<&str>) -> Result<(), DomainError> {
        let invalid = |reason: &str| DomainError::InvalidLexeme {
            lemma: self.lemma.clone(),
            reason: reason.to_string(),
        };

        if self.lemma.trim().is_empty() {
            return Err(invalid("lemma must not be empty"));
        }

        match (&self.paradigm, self.forms.is_empty()) {
            (Some(paradigm), true) => {
                if !paradigms.contains(paradigm.as_str()) {
                    return Err(DomainError::UnknownParadigm {
                        lemma: self.lemma.clone(),
                        paradigm: paradigm.clone(),
                    });
                }
            }
            (Some(_), false) => return Err(invalid("use either a paradigm or explicit forms")),
            (None, true) => return Err(invalid("needs a paradigm or explicit forms")),
            (None, false) => {
                if self.pos.is_none() {
                    return Err(invalid("explicit forms require a part of speech"));
                }
                if self.forms[0].form != self.lemma {
                    return Err(invalid("the first explicit form must be the lemma"));
                }
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r#"
        [metadata]
        code = "ru"
        name = "Russian"

        [[paradigms]]
        name = "noun_masc_hard"
        pos = "NOUN"
        tags = ["masc"]
        guess_weight = 10
        forms = [
            { ending = "", tags = ["nomn", "sing"] },
            { ending = "а", tags = ["gent", "sing"] },
            { ending = "а", tags = ["accs", "sing"], when = "anim" },
        ]

        [[lexemes]]
        lemma = "дом"
        paradigm = "noun_masc_hard"
        tags = ["inan"]
        freq = 50

        [[lexemes]]
        lemma = "он"
        pos = "NPRO"
        forms = [
            { form = "он", tags = ["nomn", "masc", "sing", "3per"] },
            { form = "его", tags = ["gent", "masc", "sing", "3per"] },
        ]

        [closed]
        prepositions = ["в", "на"]
        conjunctions = ["и"]
    "#;

    #[test]
    fn test_dictionary_config_deserialize() {
        let config: DictionaryConfig = toml::from_str(SAMPLE).unwrap();
        assert_eq!(config.metadata.code, "ru");
        assert_eq!(config.paradigms.len(), 1);
        assert_eq!(config.paradigms[0].forms[2].when, Some(Grammeme::Anim));
        assert_eq!(config.lexemes[0].freq, 50);
        assert_eq!(config.lexemes[1].freq, 1);
        assert_eq!(config.lexemes[1].pos, Some(PartOfSpeech::Pronoun));
        assert_eq!(config.closed.entries().count(), 3);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_unknown_paradigm_rejected() {
        let mut config: DictionaryConfig = toml::from_str(SAMPLE).unwrap();
        config.lexemes[0].paradigm = Some("missing".to_string());
        match config.validate() {
            Err(DomainError::UnknownParadigm { lemma, paradigm }) => {
                assert_eq!(lemma, "дом");
                assert_eq!(paradigm, "missing");
            }
            other => panic!("Expected UnknownParadigm, got {other:?}"),
        }
    }

    #[test]
    fn test_explicit_forms_require_lemma_first() {
        let mut config: DictionaryConfig = toml::from_str(SAMPLE).unwrap();
        config.lexemes[1].forms.swap(0, 1);
        assert!(matches!(
            config.validate(),
            Err(DomainError::InvalidLexeme { .. })
        ));
    }

    #[test]
    fn test_duplicate_paradigm_rejected() {
        let mut config: DictionaryConfig = toml::from_str(SAMPLE).unwrap();
        let copy = config.paradigms[0].clone();
        config.paradigms.push(copy);
        assert!(matches!(
            config.validate(),
            Err(DomainError::ConfigurationError(_))
        ));
    }

    #[test]
    fn test_empty_code_rejected() {
        let mut config: DictionaryConfig = toml::from_str(SAMPLE).unwrap();
        config.metadata.code = " ".to_string();
        assert!(config.validate().is_err());
    }
}
