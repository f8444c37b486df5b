use std::sync::mpsc;
use std::thread;
use std::time::Duration;

use client_logging::{client_info, client_warn};
use search_core::{
    Effect, Msg, RequestId, SearchFailure, SearchOutcome, SearchRequest, SearchResult,
};
use search_engine::{ApiRequest, ApiResult, EngineEvent, EngineHandle, FailureKind, SearchError};

use super::browser;

pub struct EffectRunner {
    engine: EngineHandle,
    msg_tx: mpsc::Sender<Msg>,
}

impl EffectRunner {
    pub fn new(engine: EngineHandle, msg_tx: mpsc::Sender<Msg>) -> Self {
        let runner = Self { engine, msg_tx };
        runner.spawn_event_loop(runner.msg_tx.clone());
        runner
    }

    pub fn enqueue(&self, effects: Vec<Effect>) {
        for effect in effects {
            match effect {
                Effect::Search {
                    request_id,
                    request,
                } => {
                    if let Err(err) = self.engine.submit(request_id, to_api_request(request)) {
                        client_warn!("Search {} failed: {}", request_id, err);
                        // Nothing else will resolve this request; clear loading here.
                        let _ = self.msg_tx.send(undispatched_msg(request_id));
                    }
                }
                Effect::OpenUrl { url } => {
                    client_info!("OpenUrl url={}", url);
                    if let Err(err) = browser::open_url(&url) {
                        client_warn!("Failed to open {}: {}", url, err);
                    }
                }
            }
        }
    }

    fn spawn_event_loop(&self, msg_tx: mpsc::Sender<Msg>) {
        let engine = self.engine.clone();
        thread::spawn(move || loop {
            if let Some(event) = engine.try_recv() {
                let msg = completion_msg(event);
                if msg_tx.send(msg).is_err() {
                    break;
                }
            } else {
                thread::sleep(Duration::from_millis(20));
            }
        });
    }
}

fn to_api_request(request: SearchRequest) -> ApiRequest {
    ApiRequest {
        query: request.query,
        topk: request.topk,
        hybrid: request.hybrid,
    }
}

/// Folds an engine completion into a core message. Failure detail stops here:
/// it is logged, and the core only learns the coarse failure class.
fn completion_msg(event: EngineEvent) -> Msg {
    match event {
        EngineEvent::SearchCompleted { request_id, result } => {
            let outcome = match result {
                Ok(results) => {
                    client_info!(
                        "Search {} completed with {} result(s)",
                        request_id,
                        results.len()
                    );
                    SearchOutcome::Results(results.into_iter().map(map_result).collect())
                }
                Err(err) => {
                    client_warn!("Search {} failed: {}", request_id, err);
                    SearchOutcome::Failed(map_failure(&err))
                }
            };
            Msg::SearchCompleted {
                request_id,
                outcome,
            }
        }
    }
}

/// Completion for a request the engine never accepted.
fn undispatched_msg(request_id: RequestId) -> Msg {
    Msg::SearchCompleted {
        request_id,
        outcome: SearchOutcome::Failed(SearchFailure::Transport),
    }
}

fn map_result(result: ApiResult) -> SearchResult {
    SearchResult {
        source: result.source,
        title: result.title,
        url: result.url,
        score: result.score,
        summary: result.summary,
        snippet: result.snippet,
    }
}

fn map_failure(err: &SearchError) -> SearchFailure {
    match err.kind {
        FailureKind::HttpStatus(code) => SearchFailure::HttpStatus(code),
        FailureKind::MalformedResponse => SearchFailure::MalformedResponse,
        FailureKind::InvalidUrl
        | FailureKind::InvalidRequest
        | FailureKind::Timeout
        | FailureKind::TooLarge { .. }
        | FailureKind::Network => SearchFailure::Transport,
    }
}
