//! Declension of whole phrases into the six cases
//!
//! The first noun or personal pronoun is the head of the phrase. Adjectives
//! before it agree with it; words after it are inflected only when they stand
//! in the head's case (apposition, coordinated nouns) and are otherwise left
//! alone as dependents, so `дом отца` becomes `дома отца`.

use crate::domain::analysis::{analyze_tokens, AnalyzedToken};
use crate::domain::grammeme::{Case, Grammeme, Grammemes, PartOfSpeech};
use crate::domain::morphology::{Morphology, Parse};
use crate::domain::token::{match_capitalization, tokenize, Token};
use serde::Serialize;
use std::collections::HashMap;

/// One case form of a phrase
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CaseVariant {
    pub case: Case,
    /// Phrase built from the first form of every word
    pub text: String,
    /// Phrases using the other valid forms (`машиною` next to `машиной`)
    pub alternatives: Vec<String>,
}

/// All case forms of a phrase
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PhraseCases {
    pub phrase: String,
    /// Six entries in [`Case::ALL`] order
    pub variants: Vec<CaseVariant>,
    /// Nominative plural, when at least one word has a plural form
    pub plural: Option<String>,
}

impl PhraseCases {
    pub fn get(&self, case: Case) -> Option<&CaseVariant> {
        self.variants.iter().find(|v| v.case == case)
    }

    /// Primary text for `case`
    pub fn text(&self, case: Case) -> Option<&str> {
        self.get(case).map(|v| v.text.as_str())
    }
}

/// Grammemes a dependent adjective takes from the head
#[derive(Debug, Clone, Copy, Default)]
struct Agreement {
    number: Option<Grammeme>,
    gender: Option<Grammeme>,
    animacy: Option<Grammeme>,
}

#[derive(Debug, Clone, Copy)]
enum Role {
    /// Left as written
    Fixed,
    /// Inflected on its own number (nouns, pronouns, adjectives without a head)
    Own,
    /// Adjective agreeing with the head
    Agree(Agreement),
}

struct WordPlan {
    parse: Option<Parse>,
    role: Role,
}

impl WordPlan {
    fn required(&self, case: Case, force_plural: bool) -> Option<Grammemes> {
        let parse = self.parse.as_ref()?;
        let mut required = Grammemes::new().with(case.grammeme());

        match self.role {
            Role::Fixed => return None,
            Role::Own => {
                let number = if force_plural {
                    Some(Grammeme::Plur)
                } else {
                    parse.tags.number()
                };
                required.extend(number);
                if parse.pos == PartOfSpeech::Adjective && number == Some(Grammeme::Sing) {
                    required.extend(parse.tags.gender());
                }
            }
            Role::Agree(agreement) => {
                let number = if force_plural {
                    Some(Grammeme::Plur)
                } else {
                    agreement.number
                };
                required.extend(number);
                if number == Some(Grammeme::Sing) {
                    required.extend(agreement.gender);
                }
                let masculine_or_plural = number == Some(Grammeme::Plur)
                    || agreement.gender == Some(Grammeme::Masc);
                if case == Case::Accusative && masculine_or_plural {
                    required.extend(agreement.animacy);
                }
            }
        }

        Some(required)
    }
}

/// Inflect `phrase` into all six cases and the nominative plural
///
/// Words that cannot take a case (prepositions, adverbs, digits, foreign and
/// indeclinable words) keep their written form, so a fully indeclinable phrase
/// comes back unchanged six times.
pub fn generate_phrase_cases<M>(morph: &M, phrase: &str) -> PhraseCases
where
    M: Morphology + ?Sized,
{
    let tokens = tokenize(phrase);
    let words = analyze_tokens(morph, &tokens);
    let plans = plan_words(&words);

    let variants = Case::ALL
        .into_iter()
        .map(|case| {
            let rendered = render(morph, &tokens, &words, &plans, case, false);
            CaseVariant {
                case,
                text: rendered.text,
                alternatives: rendered.alternatives,
            }
        })
        .collect();

    let plural = render(morph, &tokens, &words, &plans, Case::Nominative, true);
    let plural = plural.inflected.then_some(plural.text);

    log::debug!("declined phrase of {} words", words.len());

    PhraseCases {
        phrase: phrase.to_string(),
        variants,
        plural,
    }
}

/// Pick one parse per word and decide how each word is inflected
fn plan_words(words: &[AnalyzedToken<'_>]) -> Vec<WordPlan> {
    let mut chosen = choose_parses(words);

    let head = chosen.iter().position(|parse| {
        parse
            .as_ref()
            .is_some_and(|p| matches!(p.pos, PartOfSpeech::Noun | PartOfSpeech::Pronoun))
    });

    let Some(head) = head else {
        return chosen
            .into_iter()
            .map(|parse| {
                let role = match &parse {
                    Some(p) if p.pos.is_declinable() => Role::Own,
                    _ => Role::Fixed,
                };
                WordPlan { parse, role }
            })
            .collect();
    };

    chosen[head] = agreeing_head(&words[..=head], chosen[head].take());
    let head_case = chosen[head].as_ref().and_then(Parse::case);
    let agreement = chosen[head]
        .as_ref()
        .map(agreement_of)
        .unwrap_or_default();

    // Words right after the head stay attached while they are in the head's
    // case; the first dependent ends the run. Conjunctions do not end it.
    let mut attached = true;
    let mut plans = Vec::with_capacity(words.len());

    for (i, parse) in chosen.into_iter().enumerate() {
        let plan = if i == head {
            WordPlan {
                parse,
                role: Role::Own,
            }
        } else if i < head {
            match agreeing_adjective(&words[i], head_case, agreement) {
                Some(adjective) => WordPlan {
                    parse: Some(adjective),
                    role: Role::Agree(agreement),
                },
                None => WordPlan {
                    parse,
                    role: Role::Fixed,
                },
            }
        } else {
            let in_head_case = head_case.filter(|_| attached).and_then(|case| {
                words[i].parses.iter().find(|p| {
                    p.case() == Some(case)
                        && matches!(
                            p.pos,
                            PartOfSpeech::Noun | PartOfSpeech::Pronoun | PartOfSpeech::Adjective
                        )
                })
            });
            match in_head_case {
                Some(p) if p.pos == PartOfSpeech::Adjective => WordPlan {
                    parse: Some(p.clone()),
                    role: Role::Agree(agreement),
                },
                Some(p) => WordPlan {
                    parse: Some(p.clone()),
                    role: Role::Own,
                },
                None => {
                    if parse.as_ref().map(|p| p.pos) != Some(PartOfSpeech::Conjunction) {
                        attached = false;
                    }
                    WordPlan {
                        parse,
                        role: Role::Fixed,
                    }
                }
            }
        };
        plans.push(plan);
    }

    plans
}

/// Grammemes of `head` that dependent adjectives must share
fn agreement_of(head: &Parse) -> Agreement {
    Agreement {
        number: head.tags.number(),
        gender: head.tags.gender(),
        animacy: head.tags.animacy(),
    }
}

/// Whether an adjective parse stands in the head's case, number and gender
fn agrees(adjective: &Parse, head_case: Option<Case>, agreement: Agreement) -> bool {
    let case_ok = head_case.map_or(true, |case| adjective.case() == Some(case));
    let number_ok = agreement.number.map_or(true, |n| adjective.tags.contains(n));
    let gender_ok = agreement.number == Some(Grammeme::Plur)
        || agreement.gender.map_or(true, |g| adjective.tags.contains(g));
    case_ok && number_ok && gender_ok
}

/// Re-pick the head's parse so the adjectives before it can agree with it
///
/// `words` ends with the head. Any noun or pronoun parse of the head may be
/// taken, not only the best-scored one; the scored choice stays unless
/// another parse is supported by more of the adjectives.
fn agreeing_head(words: &[AnalyzedToken<'_>], chosen: Option<Parse>) -> Option<Parse> {
    let (head, modifiers) = words.split_last()?;
    let adjectives: Vec<Vec<&Parse>> = modifiers
        .iter()
        .map(|w| {
            w.parses
                .iter()
                .filter(|p| p.pos == PartOfSpeech::Adjective)
                .collect::<Vec<_>>()
        })
        .filter(|parses| !parses.is_empty())
        .collect();
    let mut best = chosen?;
    if adjectives.is_empty() {
        return Some(best);
    }

    let support = |candidate: &Parse| {
        let agreement = agreement_of(candidate);
        adjectives
            .iter()
            .filter(|parses| parses.iter().any(|p| agrees(p, candidate.case(), agreement)))
            .count()
    };

    let mut best_support = support(&best);
    for parse in head
        .parses
        .iter()
        .filter(|p| matches!(p.pos, PartOfSpeech::Noun | PartOfSpeech::Pronoun))
    {
        let parse_support = support(parse);
        if parse_support > best_support {
            best = parse.clone();
            best_support = parse_support;
        }
    }
    Some(best)
}

/// The adjective parse that matches the head in case, number and gender
fn agreeing_adjective(
    word: &AnalyzedToken<'_>,
    head_case: Option<Case>,
    agreement: Agreement,
) -> Option<Parse> {
    let mut adjectives = word
        .parses
        .iter()
        .filter(|p| p.pos == PartOfSpeech::Adjective)
        .peekable();
    let first = adjectives.peek().copied().cloned()?;

    Some(
        adjectives
            .find(|p| agrees(p, head_case, agreement))
            .cloned()
            .unwrap_or(first),
    )
}

/// Top parse of every word
///
/// Among parses tied for the best score, the part of speech most common in the
/// rest of the phrase wins, then a nominative form, then lexicon order.
fn choose_parses(words: &[AnalyzedToken<'_>]) -> Vec<Option<Parse>> {
    let tied: Vec<Vec<&Parse>> = words
        .iter()
        .map(|word| match word.best() {
            Some(best) => word
                .parses
                .iter()
                .filter(|p| p.score >= best.score)
                .collect(),
            None => Vec::new(),
        })
        .collect();

    let mut votes: HashMap<PartOfSpeech, usize> = HashMap::new();
    for candidates in &tied {
        let mut seen: Vec<PartOfSpeech> = Vec::new();
        for parse in candidates {
            if !seen.contains(&parse.pos) {
                seen.push(parse.pos);
                *votes.entry(parse.pos).or_default() += 1;
            }
        }
    }

    tied.iter()
        .map(|candidates| {
            let own: Vec<PartOfSpeech> = candidates.iter().map(|p| p.pos).collect();
            let others = |pos: PartOfSpeech| {
                votes.get(&pos).copied().unwrap_or(0) - usize::from(own.contains(&pos))
            };

            let mut best: Option<(&Parse, (usize, bool))> = None;
            for parse in candidates {
                let key = (others(parse.pos), parse.case() == Some(Case::Nominative));
                if best.map_or(true, |(_, best_key)| key > best_key) {
                    best = Some((*parse, key));
                }
            }
            best.map(|(parse, _)| parse.clone())
        })
        .collect()
}

struct Rendered {
    text: String,
    alternatives: Vec<String>,
    /// Whether any word received an inflected form
    inflected: bool,
}

fn render<M>(
    morph: &M,
    tokens: &[Token<'_>],
    words: &[AnalyzedToken<'_>],
    plans: &[WordPlan],
    case: Case,
    force_plural: bool,
) -> Rendered
where
    M: Morphology + ?Sized,
{
    let mut primary: Vec<Option<String>> = vec![None; words.len()];
    let mut extras: Vec<(usize, String)> = Vec::new();
    let mut inflected = false;

    for (i, plan) in plans.iter().enumerate() {
        let (Some(parse), Some(required)) = (&plan.parse, plan.required(case, force_plural))
        else {
            continue;
        };
        let forms = morph.inflect(parse, &required);
        let Some((first, rest)) = forms.split_first() else {
            continue;
        };

        let surface = words[i].token.text;
        primary[i] = Some(match_capitalization(surface, first));
        extras.extend(
            rest.iter()
                .map(|form| (i, match_capitalization(surface, form))),
        );
        inflected = true;
    }

    let text = compose(tokens, words, &primary);
    let mut alternatives: Vec<String> = Vec::new();
    for (i, form) in extras {
        let mut forms = primary.clone();
        forms[i] = Some(form);
        let alternative = compose(tokens, words, &forms);
        if alternative != text && !alternatives.contains(&alternative) {
            alternatives.push(alternative);
        }
    }

    Rendered {
        text,
        alternatives,
        inflected,
    }
}

/// Rebuild the phrase, substituting word forms at their original positions
fn compose(tokens: &[Token<'_>], words: &[AnalyzedToken<'_>], forms: &[Option<String>]) -> String {
    let mut replacements: HashMap<usize, &str> = HashMap::new();
    for (word, form) in words.iter().zip(forms) {
        if let Some(form) = form {
            replacements.insert(word.token_index, form.as_str());
        }
    }

    tokens
        .iter()
        .enumerate()
        .map(|(i, token)| replacements.get(&i).copied().unwrap_or(token.text))
        .collect()
}
