/// Query shown in the input box at startup.
pub const DEFAULT_QUERY: &str = "summary bone density";

/// Number of results requested per search.
pub const DEFAULT_TOPK: u32 = 10;

/// Whether the backend should combine vector and keyword retrieval.
pub const HYBRID_SEARCH: bool = true;

/// Identifies one dispatched request. Used for diagnostics only; completions
/// are applied in arrival order regardless of id.
pub type RequestId = u64;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchRequest {
    pub query: String,
    pub topk: u32,
    pub hybrid: bool,
}

impl SearchRequest {
    /// Builds a request with the fixed `topk`/`hybrid` settings.
    pub fn new(query: impl Into<String>) -> Self {
        Self {
            query: query.into(),
            topk: DEFAULT_TOPK,
            hybrid: HYBRID_SEARCH,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct SearchResult {
    pub source: String,
    pub title: String,
    pub url: String,
    pub score: Option<f64>,
    pub summary: Option<String>,
    pub snippet: Option<String>,
}

impl SearchResult {
    /// Summary when present and non-empty, otherwise the snippet, otherwise "".
    pub fn display_text(&self) -> &str {
        self.summary
            .as_deref()
            .filter(|text| !text.is_empty())
            .or(self.snippet.as_deref())
            .unwrap_or("")
    }

    /// Score as fixed-point text with three decimals. Exact halves round
    /// away from zero (0.5625 -> "0.563"); `format!` alone would round to even.
    pub fn score_text(&self) -> Option<String> {
        self.score.map(|score| {
            let rounded = (score * 1000.0).round() / 1000.0;
            format!("{rounded:.3}")
        })
    }
}

/// How a request resolved, as seen by the state machine.
#[derive(Debug, Clone, PartialEq)]
pub enum SearchOutcome {
    /// Well-formed 2xx response; may be empty.
    Results(Vec<SearchResult>),
    /// Transport, status or decoding failure. Detail is logged by the caller.
    Failed(SearchFailure),
}

/// Coarse failure classes. All of them render the same user message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchFailure {
    Transport,
    HttpStatus(u16),
    MalformedResponse,
}
