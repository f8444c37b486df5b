use std::sync::{mpsc, Arc, Mutex};
use std::thread;

use client_logging::{client_debug, client_info, client_warn};

use crate::{ApiRequest, ApiSettings, EngineEvent, ReqwestSearchApi, RequestId, SearchApi, SearchError};

#[derive(Debug, thiserror::Error)]
pub enum EngineError {
    #[error("failed to build search client: {0}")]
    Client(SearchError),
    #[error("failed to start async runtime: {0}")]
    Runtime(#[from] std::io::Error),
    #[error("engine stopped; request {0} was not dispatched")]
    Stopped(RequestId),
}

enum EngineCommand {
    Search {
        request_id: RequestId,
        request: ApiRequest,
    },
}

/// Runs search requests on a background runtime and reports completions
/// over a channel. Requests are never cancelled or deduplicated; each one
/// produces exactly one [`EngineEvent::SearchCompleted`].
#[derive(Clone)]
pub struct EngineHandle {
    cmd_tx: mpsc::Sender<EngineCommand>,
    event_rx: Arc<Mutex<mpsc::Receiver<EngineEvent>>>,
}

impl EngineHandle {
    pub fn new(settings: ApiSettings) -> Result<Self, EngineError> {
        let api = ReqwestSearchApi::new(settings).map_err(EngineError::Client)?;
        Self::with_api(Arc::new(api))
    }

    pub fn with_api(api: Arc<dyn SearchApi>) -> Result<Self, EngineError> {
        let runtime = tokio::runtime::Runtime::new()?;
        let (cmd_tx, cmd_rx) = mpsc::channel();
        let (event_tx, event_rx) = mpsc::channel();

        thread::spawn(move || {
            while let Ok(command) = cmd_rx.recv() {
                let api = api.clone();
                let event_tx = event_tx.clone();
                runtime.spawn(async move {
                    handle_command(api.as_ref(), command, event_tx).await;
                });
            }
            client_debug!("engine command channel closed");
        });

        Ok(Self {
            cmd_tx,
            event_rx: Arc::new(Mutex::new(event_rx)),
        })
    }

    /// Hands a request to the background runtime. Fails only when the
    /// engine thread is gone, in which case no completion will follow.
    pub fn submit(&self, request_id: RequestId, request: ApiRequest) -> Result<(), EngineError> {
        client_info!(
            "search dispatch request_id={} query={:?} topk={} hybrid={}",
            request_id,
            request.query,
            request.topk,
            request.hybrid
        );
        self.cmd_tx
            .send(EngineCommand::Search {
                request_id,
                request,
            })
            .map_err(|_| {
                client_warn!("search request_id={} not dispatched: engine stopped", request_id);
                EngineError::Stopped(request_id)
            })
    }

    pub fn try_recv(&self) -> Option<EngineEvent> {
        self.event_rx.lock().ok()?.try_recv().ok()
    }
}

async fn handle_command(
    api: &dyn SearchApi,
    command: EngineCommand,
    event_tx: mpsc::Sender<EngineEvent>,
) {
    match command {
        EngineCommand::Search {
            request_id,
            request,
        } => {
            let result = api.search(&request).await;
            let _ = event_tx.send(EngineEvent::SearchCompleted { request_id, result });
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn submit_reports_stopped_engine() {
        let (cmd_tx, cmd_rx) = mpsc::channel();
        let (_event_tx, event_rx) = mpsc::channel();
        drop(cmd_rx);
        let engine = EngineHandle {
            cmd_tx,
            event_rx: Arc::new(Mutex::new(event_rx)),
        };

        let request = ApiRequest {
            query: "bone".to_string(),
            topk: 10,
            hybrid: true,
        };
        let err = engine.submit(7, request).unwrap_err();
        assert!(matches!(err, EngineError::Stopped(7)));
        assert_eq!(err.to_string(), "engine stopped; request 7 was not dispatched");
        assert!(engine.try_recv().is_none());
    }
}
