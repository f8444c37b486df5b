use search_core::{update, AppState, Effect, Msg, SearchOutcome, SearchResult};

fn with_results(urls: &[&str]) -> AppState {
    let (state, _) = update(AppState::new(), Msg::QuerySubmitted);
    let results = urls
        .iter()
        .enumerate()
        .map(|(i, url)| SearchResult {
            source: "pgvector".to_string(),
            title: format!("Result {i}"),
            url: url.to_string(),
            ..SearchResult::default()
        })
        .collect();
    let (state, _) = update(
        state,
        Msg::SearchCompleted {
            request_id: 1,
            outcome: SearchOutcome::Results(results),
        },
    );
    state
}

#[test]
fn selection_moves_and_clamps() {
    let state = with_results(&["http://a", "http://b", "http://c"]);
    assert_eq!(state.selected(), Some(0));

    let (state, _) = update(state, Msg::SelectPrevious);
    assert_eq!(state.selected(), Some(0));

    let (state, _) = update(state, Msg::SelectNext);
    let (state, _) = update(state, Msg::SelectNext);
    let (state, _) = update(state, Msg::SelectNext);
    assert_eq!(state.selected(), Some(2));

    let (state, _) = update(state, Msg::SelectPrevious);
    assert_eq!(state.selected(), Some(1));
}

#[test]
fn selection_is_noop_without_results() {
    let (state, _) = update(AppState::new(), Msg::SelectNext);
    assert_eq!(state.selected(), None);

    let (state, effects) = update(state, Msg::OpenSelectedResult);
    assert!(effects.is_empty());
    assert_eq!(state.selected(), None);
}

#[test]
fn result_selected_ignores_out_of_range() {
    let state = with_results(&["http://a", "http://b"]);

    let (state, _) = update(state, Msg::ResultSelected { index: 1 });
    assert_eq!(state.selected(), Some(1));

    let (state, _) = update(state, Msg::ResultSelected { index: 5 });
    assert_eq!(state.selected(), Some(1));
}

#[test]
fn open_selected_emits_url_effect() {
    let state = with_results(&["http://a", "http://b"]);
    let (state, _) = update(state, Msg::ResultSelected { index: 1 });

    let (_state, effects) = update(state, Msg::OpenSelectedResult);

    assert_eq!(
        effects,
        vec![Effect::OpenUrl {
            url: "http://b".to_string()
        }]
    );
}

#[test]
fn open_skips_results_without_url() {
    let state = with_results(&[""]);

    let (_state, effects) = update(state, Msg::OpenSelectedResult);

    assert!(effects.is_empty());
}
