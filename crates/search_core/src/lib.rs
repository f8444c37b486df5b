//! Search client core: pure state machine and view-model helpers.
mod effect;
mod msg;
mod result;
mod state;
mod update;
mod view_model;

pub use effect::Effect;
pub use msg::Msg;
pub use result::{
    RequestId, SearchFailure, SearchOutcome, SearchRequest, SearchResult, DEFAULT_QUERY,
    DEFAULT_TOPK, HYBRID_SEARCH,
};
pub use state::AppState;
pub use update::update;
pub use view_model::{
    AppViewModel, ResultRowView, StatusKind, StatusView, NO_RESULTS_MESSAGE,
    SEARCH_FAILED_MESSAGE,
};
