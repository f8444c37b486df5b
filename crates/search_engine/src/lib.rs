//! Search engine: search API client and background request execution.
mod api;
mod engine;
mod types;

pub use api::{ApiSettings, ReqwestSearchApi, SearchApi, DEFAULT_BASE_URL, SEARCH_PATH};
pub use engine::{EngineError, EngineHandle};
pub use types::{
    ApiRequest, ApiResponse, ApiResult, EngineEvent, FailureKind, RequestId, SearchError,
};
