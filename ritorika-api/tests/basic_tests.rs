//! Basic tests for ritorika-api

use ritorika_api::*;
use std::io::Write;
use tempfile::NamedTempFile;

#[test]
fn test_error_classification() {
    let analyzer = TextAnalyzer::new().unwrap();
    let missing = analyzer.generate_cases(CasesRequest::default()).unwrap_err();
    assert!(missing.is_client_error());

    let config = Config::builder().dictionary_file("").build().unwrap_err();
    assert!(matches!(config, ApiError::Config(_)));
    assert!(!config.is_client_error());
}

#[test]
fn test_generate_cases() {
    let analyzer = TextAnalyzer::new().unwrap();
    let response = analyzer
        .generate_cases(CasesRequest::new("красивый дом"))
        .unwrap();

    assert_eq!(response.nomn, "красивый дом");
    assert_eq!(response.gent, "красивого дома");
    assert_eq!(response.datv, "красивому дому");
    assert_eq!(response.accs, "красивый дом");
    assert_eq!(response.ablt, "красивым домом");
    assert_eq!(response.loct, "красивом доме");
    assert_eq!(response.plural_nomn.as_deref(), Some("красивые дома"));
}

#[test]
fn test_missing_fields() {
    let analyzer = TextAnalyzer::new().unwrap();

    let error = analyzer.generate_cases(CasesRequest::default()).unwrap_err();
    assert!(matches!(error, ApiError::MissingField("phrase")));
    assert!(error.is_client_error());

    assert!(matches!(
        analyzer.find_repeats(RepeatsRequest::default()),
        Err(ApiError::MissingField("text"))
    ));
    assert!(matches!(
        analyzer.analyze_cliches(ClichesRequest::default()),
        Err(ApiError::MissingField("text"))
    ));
}

#[test]
fn test_find_repeats_offsets() {
    let analyzer = TextAnalyzer::new().unwrap();
    let response = analyzer
        .find_repeats(
            RepeatsRequest::new("Он купил дом. Он купил машину.")
                .window_size(10)
                .function_word_window(3),
        )
        .unwrap();

    let words: Vec<&str> = response.repeat_data.iter().map(|g| g.word.as_str()).collect();
    assert_eq!(words, vec!["он", "купить"]);

    let he = &response.repeat_data[0];
    assert_eq!(he.category, WordCategory::Ordinary);
    assert!(!he.is_function_word());
    assert_eq!(he.window_size, 10);
    // End positions point at the last character
    assert_eq!(
        (he.repeats[1].start_position, he.repeats[1].end_position),
        (14, 15)
    );
    assert_eq!(he.repeats[1].word, "Он");
    assert_eq!(he.repeats[1].word_index, 3);
}

#[test]
fn test_repeat_windows_default_to_text_length() {
    let analyzer = TextAnalyzer::new().unwrap();
    let text = "дом стол окно книга рука дом";

    let response = analyzer.find_repeats(RepeatsRequest::new(text)).unwrap();
    assert_eq!(response.repeat_data.len(), 1);
    assert_eq!(response.repeat_data[0].window_size, 6);

    let config = Config::builder().window_size(2).build().unwrap();
    let narrow = TextAnalyzer::with_config(config).unwrap();
    assert!(narrow
        .find_repeats(RepeatsRequest::new(text))
        .unwrap()
        .repeat_data
        .is_empty());
}

#[test]
fn test_analyze_cliches() {
    let analyzer = TextAnalyzer::new().unwrap();
    let response = analyzer
        .analyze_cliches(ClichesRequest::new("Это играет важную роль."))
        .unwrap();

    assert_eq!(response.data.len(), 1);
    let found = &response.data[0];
    assert_eq!(found.pattern_id, "play-role");
    assert_eq!(found.text, "играет важную роль");
    assert_eq!((found.start, found.end), (4, 22));
}

#[test]
fn test_custom_cliche_file() {
    let mut file = NamedTempFile::new().unwrap();
    writeln!(
        file,
        "[metadata]\ncode = \"ru\"\nname = \"Custom\"\n\n[[patterns]]\nid = \"sweat\"\npattern = \"холодный пот\""
    )
    .unwrap();

    let config = Config::builder()
        .cliches_file(file.path())
        .check_pattern_lemmas(true)
        .build()
        .unwrap();
    let analyzer = TextAnalyzer::with_config(config).unwrap();
    assert_eq!(analyzer.cliches().patterns().len(), 1);

    let response = analyzer
        .analyze_cliches(ClichesRequest::new("Это играет роль, и холодный пот."))
        .unwrap();
    assert_eq!(response.data.len(), 1);
    assert_eq!(response.data[0].pattern_id, "sweat");
}

#[test]
fn test_missing_resource_file() {
    let config = Config::builder()
        .dictionary_file("/nonexistent/dictionary.toml")
        .build()
        .unwrap();
    assert!(matches!(
        TextAnalyzer::with_config(config),
        Err(ApiError::Resource(_))
    ));
}

#[test]
fn test_convenience_functions() {
    assert_eq!(decline("кот").unwrap().accs, "кота");
    assert!(find_repeats("").unwrap().repeat_data.is_empty());
    assert!(analyze_cliches("").unwrap().data.is_empty());
}

#[test]
#[cfg(feature = "serde")]
fn test_dto_serialization() {
    let analyzer = TextAnalyzer::new().unwrap();

    let request: RepeatsRequest = serde_json::from_str(
        r#"{"text": "дом и дом", "window_size": 5}"#,
    )
    .unwrap();
    assert_eq!(request.window_size_tech_words, None);

    let response = analyzer.find_repeats(request).unwrap();
    let json = serde_json::to_value(&response).unwrap();
    let group = &json["repeatData"][0];
    assert_eq!(group["word"], "дом");
    assert_eq!(group["category"], "ordinary");
    assert_eq!(group["windowSize"], 5);
    assert_eq!(group["repeats"][1]["startPosition"], 6);
    assert_eq!(group["repeats"][1]["endPosition"], 8);
    assert_eq!(group["repeats"][1]["wordIndex"], 2);

    let cliches = analyzer
        .analyze_cliches(ClichesRequest::new("холодный пот"))
        .unwrap();
    let json = serde_json::to_value(&cliches).unwrap();
    assert_eq!(json["data"][0]["patternId"], "cold-sweat");
    assert_eq!(json["data"][0]["end"], 12);

    let cases: CasesRequest = serde_json::from_str("{}").unwrap();
    assert_eq!(cases.phrase, None);
    let json = serde_json::to_value(analyzer.generate_cases(CasesRequest::new("дом")).unwrap()).unwrap();
    assert_eq!(json["gent"], "дома");
    assert_eq!(json["plural_nomn"], "дома");
}
