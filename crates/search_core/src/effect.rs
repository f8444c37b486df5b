use crate::{RequestId, SearchRequest};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Dispatch one request to the search API.
    Search {
        request_id: RequestId,
        request: SearchRequest,
    },
    /// Open a result link in the system browser.
    OpenUrl { url: String },
}
