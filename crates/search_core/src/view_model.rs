use crate::SearchResult;

/// Shown when the API answered with an empty result set.
pub const NO_RESULTS_MESSAGE: &str = "No results found.";

/// Shown for every transport, status or decoding failure.
pub const SEARCH_FAILED_MESSAGE: &str = "Search failed. Please check backend or network.";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusKind {
    NoResults,
    Failed,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusView {
    pub kind: StatusKind,
    pub message: &'static str,
}

impl StatusView {
    pub(crate) fn from_kind(kind: StatusKind) -> Self {
        let message = match kind {
            StatusKind::NoResults => NO_RESULTS_MESSAGE,
            StatusKind::Failed => SEARCH_FAILED_MESSAGE,
        };
        Self { kind, message }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AppViewModel {
    pub query: String,
    pub loading: bool,
    pub submit_enabled: bool,
    pub status: Option<StatusView>,
    pub results: Vec<ResultRowView>,
    pub selected: Option<usize>,
    pub dirty: bool,
}

impl AppViewModel {
    pub fn submit_label(&self) -> &'static str {
        if self.loading {
            "Searching..."
        } else {
            "Search"
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResultRowView {
    pub source: String,
    pub title: String,
    pub url: String,
    pub score: Option<String>,
    pub text: String,
}

impl ResultRowView {
    pub(crate) fn from_result(result: &SearchResult) -> Self {
        Self {
            source: result.source.clone(),
            title: result.title.clone(),
            url: result.url.clone(),
            score: result.score_text(),
            text: result.display_text().to_string(),
        }
    }

    /// Source tag as rendered, e.g. `[pgvector]`.
    pub fn source_tag(&self) -> String {
        format!("[{}]", self.source)
    }
}
