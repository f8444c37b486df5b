use std::time::Duration;

use client_logging::client_debug;
use futures_util::StreamExt;
use reqwest::header::CONTENT_TYPE;
use url::Url;

use crate::{ApiRequest, ApiResponse, ApiResult, FailureKind, SearchError};

/// Base URL used when no configuration is provided.
pub const DEFAULT_BASE_URL: &str = "http://localhost:8000";

/// Search endpoint, relative to the base URL.
pub const SEARCH_PATH: &str = "/api/search";

#[derive(Debug, Clone)]
pub struct ApiSettings {
    pub base_url: String,
    pub connect_timeout: Duration,
    pub request_timeout: Duration,
    pub max_bytes: u64,
}

impl Default for ApiSettings {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            connect_timeout: Duration::from_secs(10),
            request_timeout: Duration::from_secs(30),
            max_bytes: 5 * 1024 * 1024,
        }
    }
}

impl ApiSettings {
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            ..Self::default()
        }
    }

    /// `{base_url}/api/search`, tolerating a trailing slash on the base.
    pub fn search_endpoint(&self) -> Result<Url, SearchError> {
        let raw = format!("{}{}", self.base_url.trim_end_matches('/'), SEARCH_PATH);
        Url::parse(&raw).map_err(|err| SearchError::new(FailureKind::InvalidUrl, err.to_string()))
    }
}

#[async_trait::async_trait]
pub trait SearchApi: Send + Sync {
    async fn search(&self, request: &ApiRequest) -> Result<Vec<ApiResult>, SearchError>;
}

#[derive(Debug, Clone)]
pub struct ReqwestSearchApi {
    settings: ApiSettings,
    client: reqwest::Client,
}

impl ReqwestSearchApi {
    pub fn new(settings: ApiSettings) -> Result<Self, SearchError> {
        let client = reqwest::Client::builder()
            .connect_timeout(settings.connect_timeout)
            .timeout(settings.request_timeout)
            .build()
            .map_err(|err| SearchError::new(FailureKind::Network, err.to_string()))?;
        Ok(Self { settings, client })
    }
}

#[async_trait::async_trait]
impl SearchApi for ReqwestSearchApi {
    async fn search(&self, request: &ApiRequest) -> Result<Vec<ApiResult>, SearchError> {
        let endpoint = self.settings.search_endpoint()?;
        let body = serde_json::to_vec(request)
            .map_err(|err| SearchError::new(FailureKind::InvalidRequest, err.to_string()))?;

        let response = self
            .client
            .post(endpoint)
            .header(CONTENT_TYPE, "application/json")
            .body(body)
            .send()
            .await
            .map_err(map_reqwest_error)?;

        // Any non-2xx is a failure, whatever the body says.
        let status = response.status();
        if !status.is_success() {
            return Err(SearchError::new(
                FailureKind::HttpStatus(status.as_u16()),
                status.to_string(),
            ));
        }

        if let Some(content_len) = response.content_length() {
            if content_len > self.settings.max_bytes {
                return Err(SearchError::new(
                    FailureKind::TooLarge {
                        max_bytes: self.settings.max_bytes,
                        actual: Some(content_len),
                    },
                    "response too large",
                ));
            }
        }

        let mut bytes = Vec::new();
        let mut stream = response.bytes_stream();
        while let Some(chunk) = stream.next().await {
            let chunk = chunk.map_err(map_reqwest_error)?;
            let next_len = bytes.len() as u64 + chunk.len() as u64;
            if next_len > self.settings.max_bytes {
                return Err(SearchError::new(
                    FailureKind::TooLarge {
                        max_bytes: self.settings.max_bytes,
                        actual: Some(next_len),
                    },
                    "response too large",
                ));
            }
            bytes.extend_from_slice(&chunk);
        }
        client_debug!("search response status={} bytes={}", status, bytes.len());

        let decoded: ApiResponse = serde_json::from_slice(&bytes)
            .map_err(|err| SearchError::new(FailureKind::MalformedResponse, err.to_string()))?;
        Ok(decoded.results)
    }
}

fn map_reqwest_error(err: reqwest::Error) -> SearchError {
    if err.is_timeout() {
        return SearchError::new(FailureKind::Timeout, err.to_string());
    }
    SearchError::new(FailureKind::Network, err.to_string())
}
