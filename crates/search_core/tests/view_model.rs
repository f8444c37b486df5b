use search_core::SearchResult;

fn base() -> SearchResult {
    SearchResult {
        source: "qdrant".to_string(),
        title: "Microgravity".to_string(),
        url: "http://example.com".to_string(),
        ..SearchResult::default()
    }
}

#[test]
fn display_text_prefers_summary() {
    let result = SearchResult {
        summary: Some("summary".to_string()),
        snippet: Some("snippet".to_string()),
        ..base()
    };
    assert_eq!(result.display_text(), "summary");
}

#[test]
fn display_text_falls_back_to_snippet() {
    let missing = SearchResult {
        snippet: Some("snippet".to_string()),
        ..base()
    };
    assert_eq!(missing.display_text(), "snippet");

    let blank = SearchResult {
        summary: Some(String::new()),
        snippet: Some("snippet".to_string()),
        ..base()
    };
    assert_eq!(blank.display_text(), "snippet");
}

#[test]
fn display_text_empty_when_neither_present() {
    assert_eq!(base().display_text(), "");
}

#[test]
fn score_text_uses_three_decimals() {
    let cases = [(0.912, "0.912"), (1.0, "1.000"), (0.12345, "0.123"), (0.0, "0.000")];
    for (score, expected) in cases {
        let result = SearchResult {
            score: Some(score),
            ..base()
        };
        assert_eq!(result.score_text().as_deref(), Some(expected));
    }
    assert_eq!(base().score_text(), None);
}

#[test]
fn score_text_rounds_exact_halves_up() {
    for (score, expected) in [(0.5625, "0.563"), (0.0625, "0.063"), (-0.5625, "-0.563")] {
        let result = SearchResult {
            score: Some(score),
            ..base()
        };
        assert_eq!(result.score_text().as_deref(), Some(expected), "score {score}");
    }
}
