//! Property tests for the analyzers' invariants

use proptest::prelude::*;
use ritorika_core::{
    find_word_repeats, generate_phrase_cases, Case, ClicheMatcher, MorphDictionary,
    RepeatWindows, WordCategory,
};
use std::sync::OnceLock;

fn dictionary() -> &'static MorphDictionary {
    static DICTIONARY: OnceLock<MorphDictionary> = OnceLock::new();
    DICTIONARY.get_or_init(|| MorphDictionary::russian().unwrap())
}

fn cliches() -> &'static ClicheMatcher {
    static CLICHES: OnceLock<ClicheMatcher> = OnceLock::new();
    CLICHES.get_or_init(|| ClicheMatcher::russian().unwrap())
}

const VOCABULARY: &[&str] = &[
    "дом", "дома", "дому", "он", "его", "купил", "куплю", "машину", "и", "в", "на", "не",
    "красивый", "важную", "роль", "играет", "оказал", "помощь", "время", "настоящее",
    "бармаглот", "2024", "Python", "кот", "тем", "менее", "я", ",", ".", "—",
];

fn text_strategy() -> impl Strategy<Value = String> {
    prop::collection::vec(prop::sample::select(VOCABULARY), 0..40).prop_map(|words| words.join(" "))
}

proptest! {
    #[test]
    fn cases_always_six_in_canonical_order(phrase in text_strategy()) {
        let result = generate_phrase_cases(dictionary(), &phrase);
        let order: Vec<Case> = result.variants.iter().map(|v| v.case).collect();
        prop_assert_eq!(order, Case::ALL.to_vec());
    }

    #[test]
    fn nominative_phrase_is_its_own_nominative(
        phrase in prop::sample::select(vec![
            "красивый дом",
            "новая машина",
            "большое окно",
            "важная роль",
            "новый учитель",
            "кот",
            "время",
            "сегодняшний день",
        ])
    ) {
        let result = generate_phrase_cases(dictionary(), phrase);
        prop_assert_eq!(result.text(Case::Nominative), Some(phrase));
    }

    #[test]
    fn feminine_phrase_with_unknown_noun_agrees(
        adjective in prop::sample::select(vec![
            ("красивая", "красивой"),
            ("новая", "новой"),
            ("синяя", "синей"),
            ("зелёная", "зелёной"),
        ]),
        noun in prop::sample::select(vec![
            ("лампа", "лампы"),
            ("птица", "птицы"),
            ("собака", "собаки"),
            ("ракета", "ракеты"),
        ]),
    ) {
        let phrase = format!("{} {}", adjective.0, noun.0);
        let result = generate_phrase_cases(dictionary(), &phrase);
        prop_assert_eq!(result.text(Case::Nominative), Some(phrase.as_str()));
        let genitive = format!("{} {}", adjective.1, noun.1);
        prop_assert_eq!(result.text(Case::Genitive), Some(genitive.as_str()));
    }

    #[test]
    fn masculine_phrase_with_unknown_adjective_agrees(
        adjective in prop::sample::select(vec![
            ("маленький", "маленького"),
            ("летний", "летнего"),
            ("зелёный", "зелёного"),
            ("пушистый", "пушистого"),
        ]),
        noun in prop::sample::select(vec![
            ("дом", "дома"),
            ("стол", "стола"),
            ("день", "дня"),
            ("кот", "кота"),
        ]),
    ) {
        let phrase = format!("{} {}", adjective.0, noun.0);
        let result = generate_phrase_cases(dictionary(), &phrase);
        prop_assert_eq!(result.text(Case::Nominative), Some(phrase.as_str()));
        let genitive = format!("{} {}", adjective.1, noun.1);
        prop_assert_eq!(result.text(Case::Genitive), Some(genitive.as_str()));
    }

    #[test]
    fn indeclinable_phrase_is_copied(
        parts in prop::collection::vec("[0-9]{1,4}|[a-zA-Z]{1,8}", 1..6)
    ) {
        let phrase = parts.join(" ");
        let result = generate_phrase_cases(dictionary(), &phrase);
        for variant in &result.variants {
            prop_assert_eq!(&variant.text, &phrase);
        }
        prop_assert_eq!(result.plural, None);
    }

    #[test]
    fn repeat_findings_respect_windows(
        text in text_strategy(),
        window in 0usize..12,
        function_window in 0usize..6,
    ) {
        let windows = RepeatWindows::new(window, function_window);
        let findings = find_word_repeats(dictionary(), &text, windows);

        for finding in &findings {
            prop_assert!(finding.occurrences.len() >= 2);
            let limit = match finding.category {
                WordCategory::Ordinary => window,
                WordCategory::FunctionWord => function_window,
            };
            prop_assert_eq!(finding.window_size, limit);
            for pair in finding.occurrences.windows(2) {
                prop_assert!(pair[0].word_index < pair[1].word_index);
                prop_assert!(pair[1].word_index - pair[0].word_index <= limit);
            }
        }
        for pair in findings.windows(2) {
            prop_assert!(pair[0].first_index() < pair[1].first_index());
        }
    }

    #[test]
    fn repeat_findings_grow_with_the_window(
        text in text_strategy(),
        window in 0usize..8,
        extra in 0usize..8,
    ) {
        let narrow = find_word_repeats(dictionary(), &text, RepeatWindows::new(window, window));
        let wide = find_word_repeats(
            dictionary(),
            &text,
            RepeatWindows::new(window + extra, window + extra),
        );

        for finding in &narrow {
            let contained = wide.iter().any(|candidate| {
                candidate.lemma == finding.lemma
                    && candidate.category == finding.category
                    && finding
                        .occurrences
                        .iter()
                        .all(|o| candidate.occurrences.contains(o))
            });
            prop_assert!(contained, "finding for '{}' lost when widening", finding.lemma);
        }
    }

    #[test]
    fn cliche_matches_have_distinct_ascending_starts(text in text_strategy()) {
        let matches = cliches().find_matches(dictionary(), &text);
        for pair in matches.windows(2) {
            prop_assert!(pair[0].start_word < pair[1].start_word);
        }
        for found in &matches {
            prop_assert!(found.end_word > found.start_word);
            prop_assert!(found.char_end > found.char_start);
        }
    }
}
