use search_core::{update, AppState, Msg};

#[test]
fn unchanged_input_is_noop() {
    let state = AppState::new();
    let query = state.query().to_string();
    let (mut next, effects) = update(state.clone(), Msg::InputChanged(query));

    assert!(effects.is_empty());
    assert!(!next.consume_dirty());
    assert_eq!(state, next);
}

#[test]
fn selection_without_results_is_noop() {
    let state = AppState::new();
    let (next, effects) = update(state.clone(), Msg::SelectPrevious);

    assert_eq!(state, next);
    assert!(effects.is_empty());
}
