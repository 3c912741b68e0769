//! Suffix-based analysis of words missing from the dictionary

use super::paradigm::Paradigm;
use super::{LexemeHandle, Parse};
use crate::domain::grammeme::{Grammeme, Grammemes, PartOfSpeech};
use crate::domain::token::normalize;
use std::collections::HashMap;

/// Longest ending the guesser tries, in characters
const MAX_ENDING_CHARS: usize = 5;

/// Shortest stem a guess may leave, in characters
const MIN_STEM_CHARS: usize = 2;

/// Guesses are scaled below every dictionary parse
const GUESS_SCORE_SCALE: f32 = 0.5;

/// Multiplier for nominative singular slots, the form a phrase is written in
const NOMINATIVE_BOOST: u32 = 3;

/// Multiplier for a full adjective in its dictionary-form endings
const ADJECTIVE_BOOST: u32 = 3;

/// Nominative singular endings that almost always mark a full adjective
const ADJECTIVE_ENDINGS: [&str; 4] = ["ый", "ий", "ая", "яя"];

/// Index from paradigm ending to the slots that use it
#[derive(Debug, Clone, Default)]
pub(crate) struct Guesser {
    endings: HashMap<String, Vec<(usize, usize)>>,
}

struct Candidate {
    plausibility: u32,
    nominative: bool,
    parse: Parse,
}

impl Guesser {
    pub fn new(paradigms: &[Paradigm]) -> Self {
        let mut endings: HashMap<String, Vec<(usize, usize)>> = HashMap::new();

        for (p_idx, paradigm) in paradigms.iter().enumerate() {
            if paradigm.guess_weight == 0 {
                continue;
            }
            let tags = default_lexeme_tags(paradigm);
            for (e_idx, ending) in paradigm.endings.iter().enumerate() {
                if ending.suffix.chars().count() > MAX_ENDING_CHARS || !ending.applies_to(&tags) {
                    continue;
                }
                endings
                    .entry(ending.suffix.clone())
                    .or_default()
                    .push((p_idx, e_idx));
            }
        }

        Self { endings }
    }

    /// Guess analyses for a lower-cased word, best first
    ///
    /// Every ending length is tried. A candidate's plausibility is its
    /// paradigm weight, scaled up for longer endings, for nominative singular
    /// slots and for unmistakable adjective endings. Stems keep the word's own
    /// spelling, `ё` included, so generated forms match what was written.
    pub fn guess(&self, word: &str, paradigms: &[Paradigm]) -> Vec<Parse> {
        let chars: Vec<char> = word.chars().collect();
        if chars.len() < MIN_STEM_CHARS {
            return Vec::new();
        }
        let normalized = normalize(word);
        let longest = MAX_ENDING_CHARS.min(chars.len() - MIN_STEM_CHARS);
        let mut candidates: Vec<Candidate> = Vec::new();

        for len in (0..=longest).rev() {
            let split = chars.len() - len;
            let suffix = normalize(&chars[split..].iter().collect::<String>());
            let Some(slots) = self.endings.get(&suffix) else {
                continue;
            };
            let stem: String = chars[..split].iter().collect();
            let folded_stem = normalize(&stem);

            for &(p_idx, e_idx) in slots {
                let paradigm = &paradigms[p_idx];
                if !paradigm.accepts_stem(&folded_stem) {
                    continue;
                }
                let ending = &paradigm.endings[e_idx];
                let nominative =
                    ending.tags.contains(Grammeme::Nomn) && ending.tags.contains(Grammeme::Sing);

                // Every ending letter is evidence; the bare stem is the weakest
                let mut plausibility = paradigm.guess_weight * (1 + 2 * len as u32);
                if nominative {
                    plausibility *= NOMINATIVE_BOOST;
                    if paradigm.pos == PartOfSpeech::Adjective
                        && ADJECTIVE_ENDINGS.contains(&ending.suffix.as_str())
                    {
                        plausibility *= ADJECTIVE_BOOST;
                    }
                }

                let mut tags = default_lexeme_tags(paradigm);
                tags.extend(ending.tags.iter());
                candidates.push(Candidate {
                    plausibility,
                    nominative,
                    parse: Parse {
                        word: normalized.clone(),
                        lemma: format!("{folded_stem}{}", paradigm.lemma_ending()),
                        pos: paradigm.pos,
                        tags,
                        score: 0.0,
                        lexeme: LexemeHandle::Guessed {
                            paradigm: p_idx,
                            stem: stem.clone(),
                        },
                    },
                });
            }
        }

        if candidates.is_empty() {
            return Vec::new();
        }

        let total: u32 = candidates.iter().map(|c| c.plausibility).sum();
        // Stable: equal candidates keep longest-ending, paradigm and slot order
        candidates.sort_by(|a, b| {
            b.plausibility
                .cmp(&a.plausibility)
                .then(b.nominative.cmp(&a.nominative))
        });

        log::trace!("guessed {} analyses for '{}'", candidates.len(), word);

        candidates
            .into_iter()
            .map(|mut c| {
                c.parse.score = GUESS_SCORE_SCALE * c.plausibility as f32 / total.max(1) as f32;
                c.parse
            })
            .collect()
    }
}


/// Lexeme tags assumed for a guessed word: nouns are taken as inanimate
pub(crate) fn default_lexeme_tags(paradigm: &Paradigm) -> Grammemes {
    let mut tags = paradigm.tags.clone();
    if paradigm.pos == PartOfSpeech::Noun && tags.animacy().is_none() {
        tags.insert(Grammeme::Inan);
    }
    tags
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::morphology::config::ParadigmConfig;

    fn paradigms() -> Vec<Paradigm> {
        let sources = [
            r#"
            name = "noun_masc_hard"
            pos = "NOUN"
            tags = ["masc"]
            guess_weight = 10
            stem_final = "бвдзлмнпрстфц"
            forms = [
                { ending = "", tags = ["nomn", "sing"] },
                { ending = "а", tags = ["gent", "sing"] },
                { ending = "у", tags = ["datv", "sing"] },
                { ending = "а", tags = ["accs", "sing"], when = "anim" },
                { ending = "ом", tags = ["ablt", "sing"] },
            ]
            "#,
            r#"
            name = "noun_fem_a"
            pos = "NOUN"
            tags = ["femn"]
            guess_weight = 8
            forms = [
                { ending = "а", tags = ["nomn", "sing"] },
                { ending = "ы", tags = ["gent", "sing"] },
                { ending = "ой", tags = ["ablt", "sing"] },
            ]
            "#,
            r#"
            name = "pronoun_table"
            pos = "NPRO"
            forms = [{ ending = "", tags = ["nomn"] }]
            "#,
        ];
        sources
            .iter()
            .map(|s| Paradigm::from_config(&toml::from_str::<ParadigmConfig>(s).unwrap()))
            .collect()
    }

    #[test]
    fn test_longest_ending_wins() {
        let paradigms = paradigms();
        let guesser = Guesser::new(&paradigms);
        let parses = guesser.guess("зебровом", &paradigms);
        assert!(!parses.is_empty());
        assert_eq!(parses[0].lemma, "зебров");
        assert!(parses[0].tags.contains(Grammeme::Ablt));
        assert!(parses.iter().all(Parse::is_guessed));
    }

    #[test]
    fn test_ambiguous_ending_yields_several_guesses() {
        let paradigms = paradigms();
        let guesser = Guesser::new(&paradigms);
        let parses = guesser.guess("бурта", &paradigms);
        let lemmas: Vec<&str> = parses.iter().map(|p| p.lemma.as_str()).collect();
        assert!(lemmas.contains(&"бурт"));
        assert!(lemmas.contains(&"бурта"));
        // The nominative reading outranks a heavier paradigm's oblique case
        assert_eq!(parses[0].lemma, "бурта");
        assert!(parses[0].tags.contains(Grammeme::Nomn));
        assert!(parses.iter().all(|p| p.score <= GUESS_SCORE_SCALE));
    }

    #[test]
    fn test_shorter_endings_are_kept_as_alternatives() {
        let paradigms = paradigms();
        let guesser = Guesser::new(&paradigms);
        let parses = guesser.guess("зебровом", &paradigms);
        assert_eq!(parses[0].lemma, "зебров");
        // Zero ending: the whole word read as a nominative
        assert!(parses.iter().any(|p| p.lemma == "зебровом" && p.tags.contains(Grammeme::Nomn)));
        assert!(parses.windows(2).all(|w| w[0].score >= w[1].score));
    }

    #[test]
    fn test_stem_keeps_yo() {
        let paradigms = paradigms();
        let guesser = Guesser::new(&paradigms);
        let parses = guesser.guess("зелёном", &paradigms);
        assert_eq!(parses[0].word, "зеленом");
        assert_eq!(parses[0].lemma, "зелен");
        match &parses[0].lexeme {
            LexemeHandle::Guessed { stem, .. } => assert_eq!(stem, "зелён"),
            other => panic!("expected a guessed lexeme, got {other:?}"),
        }
    }

    #[test]
    fn test_zero_ending_respects_stem_final() {
        let paradigms = paradigms();
        let guesser = Guesser::new(&paradigms);
        let parses = guesser.guess("бобров", &paradigms);
        assert_eq!(parses[0].lemma, "бобров");
        assert!(parses[0].tags.contains(Grammeme::Nomn));
        assert!(parses[0].tags.contains(Grammeme::Inan));

        // "ж" is not an allowed final stem letter and no ending matches
        assert!(guesser.guess("ёрш", &paradigms).is_empty());
    }

    #[test]
    fn test_animate_only_slots_are_not_indexed() {
        let paradigms = paradigms();
        let guesser = Guesser::new(&paradigms);
        let parses = guesser.guess("бурта", &paradigms);
        assert!(parses.iter().all(|p| !p.tags.contains(Grammeme::Accs)));
    }

    #[test]
    fn test_paradigms_without_weight_are_skipped() {
        let paradigms = paradigms();
        let guesser = Guesser::new(&paradigms);
        let parses = guesser.guess("абвгд", &paradigms);
        assert!(parses.iter().all(|p| p.pos != PartOfSpeech::Pronoun));
    }

    #[test]
    fn test_short_words_are_not_guessed() {
        let paradigms = paradigms();
        let guesser = Guesser::new(&paradigms);
        assert!(guesser.guess("ы", &paradigms).is_empty());
    }
}
