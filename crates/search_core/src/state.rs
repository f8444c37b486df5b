use crate::view_model::{AppViewModel, ResultRowView, StatusKind, StatusView};
use crate::{RequestId, SearchRequest, SearchResult, DEFAULT_QUERY};

#[derive(Debug, Clone, PartialEq)]
pub struct AppState {
    query: String,
    results: Vec<SearchResult>,
    loading: bool,
    status: Option<StatusKind>,
    selected: Option<usize>,
    next_request_id: RequestId,
    last_resolved: Option<RequestId>,
    dirty: bool,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            query: DEFAULT_QUERY.to_string(),
            results: Vec::new(),
            loading: false,
            status: None,
            selected: None,
            next_request_id: 1,
            last_resolved: None,
            dirty: false,
        }
    }
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn results(&self) -> &[SearchResult] {
        &self.results
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn status(&self) -> Option<StatusKind> {
        self.status
    }

    pub fn selected(&self) -> Option<usize> {
        self.selected
    }

    /// Id of the request whose completion was applied most recently.
    pub fn last_resolved(&self) -> Option<RequestId> {
        self.last_resolved
    }

    pub fn view(&self) -> AppViewModel {
        AppViewModel {
            query: self.query.clone(),
            loading: self.loading,
            submit_enabled: !self.loading,
            status: self.status.map(StatusView::from_kind),
            results: self.results.iter().map(ResultRowView::from_result).collect(),
            selected: self.selected,
            dirty: self.dirty,
        }
    }

    /// Returns whether a re-render is pending and clears the flag.
    pub fn consume_dirty(&mut self) -> bool {
        std::mem::take(&mut self.dirty)
    }

    pub(crate) fn mark_dirty(&mut self) {
        self.dirty = true;
    }

    pub(crate) fn set_query(&mut self, query: String) {
        if self.query != query {
            self.query = query;
            self.mark_dirty();
        }
    }

    /// Enters the loading state and hands out the request to dispatch.
    /// Prior results stay visible until this request resolves.
    pub(crate) fn begin_request(&mut self) -> (RequestId, SearchRequest) {
        let request_id = self.next_request_id;
        self.next_request_id += 1;
        self.loading = true;
        self.status = None;
        self.mark_dirty();
        (request_id, SearchRequest::new(self.query.clone()))
    }

    pub(crate) fn apply_results(&mut self, request_id: RequestId, results: Vec<SearchResult>) {
        self.finish_request(request_id);
        if results.is_empty() {
            self.results.clear();
            self.status = Some(StatusKind::NoResults);
            self.selected = None;
        } else {
            self.results = results;
            self.status = None;
            self.selected = Some(0);
        }
    }

    pub(crate) fn apply_failure(&mut self, request_id: RequestId) {
        self.finish_request(request_id);
        self.status = Some(StatusKind::Failed);
    }

    fn finish_request(&mut self, request_id: RequestId) {
        self.loading = false;
        self.last_resolved = Some(request_id);
        self.mark_dirty();
    }

    pub(crate) fn select(&mut self, index: usize) {
        if index < self.results.len() && self.selected != Some(index) {
            self.selected = Some(index);
            self.mark_dirty();
        }
    }

    pub(crate) fn move_selection(&mut self, forward: bool) {
        let Some(last) = self.results.len().checked_sub(1) else {
            return;
        };
        let next = match (self.selected, forward) {
            (None, _) => 0,
            (Some(current), true) => (current + 1).min(last),
            (Some(current), false) => current.saturating_sub(1),
        };
        self.select(next);
    }

    pub(crate) fn selected_url(&self) -> Option<&str> {
        self.selected
            .and_then(|index| self.results.get(index))
            .map(|result| result.url.as_str())
            .filter(|url| !url.is_empty())
    }
}
