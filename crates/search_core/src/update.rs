use crate::{AppState, Effect, Msg, SearchOutcome};

/// Pure update function: applies a message to state and returns any effects.
pub fn update(mut state: AppState, msg: Msg) -> (AppState, Vec<Effect>) {
    let effects = match msg {
        Msg::InputChanged(text) => {
            state.set_query(text);
            Vec::new()
        }
        Msg::QuerySubmitted => vec![submit(&mut state)],
        Msg::SearchClicked => {
            if state.is_loading() {
                Vec::new()
            } else {
                vec![submit(&mut state)]
            }
        }
        Msg::SearchCompleted {
            request_id,
            outcome,
        } => {
            // No generation check: the last completion to arrive wins, even
            // when it belongs to an older request.
            match outcome {
                SearchOutcome::Results(results) => state.apply_results(request_id, results),
                SearchOutcome::Failed(_) => state.apply_failure(request_id),
            }
            Vec::new()
        }
        Msg::ResultSelected { index } => {
            state.select(index);
            Vec::new()
        }
        Msg::SelectNext => {
            state.move_selection(true);
            Vec::new()
        }
        Msg::SelectPrevious => {
            state.move_selection(false);
            Vec::new()
        }
        Msg::OpenSelectedResult => match state.selected_url() {
            Some(url) => vec![Effect::OpenUrl {
                url: url.to_string(),
            }],
            None => Vec::new(),
        },
    };

    (state, effects)
}

fn submit(state: &mut AppState) -> Effect {
    let (request_id, request) = state.begin_request();
    Effect::Search {
        request_id,
        request,
    }
}
