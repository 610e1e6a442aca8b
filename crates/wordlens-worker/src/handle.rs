//! Channel-backed worker client and the in-process worker task

use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use serde_json::Value;
use tokio::sync::{mpsc, oneshot, Mutex};
use tracing::{debug, info, warn};
use wordlens_paper::{Paper, RelatedKeyphrases};
use wordlens_research::ResearcherOptions;

use crate::engine::AnalysisEngine;
use crate::error::{Result, WorkerError};
use crate::protocol::{
    KeyphraseAnalysis, RequestEnvelope, RequestId, ResponseEnvelope, WorkerRequest,
    WorkerResponse,
};
use crate::worker::AnalysisWorker;

type PendingMap = Arc<Mutex<HashMap<RequestId, oneshot::Sender<Result<WorkerResponse>>>>>;

/// Options for [`spawn_worker`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WorkerOptions {
    /// Capacity of the request and response channels
    pub queue_capacity: usize,
    /// How long a caller waits for its response
    pub request_timeout: Duration,
    /// Researcher options applied to every request
    pub researcher: ResearcherOptions,
}

impl Default for WorkerOptions {
    fn default() -> Self {
        WorkerOptions {
            queue_capacity: 64,
            request_timeout: Duration::from_millis(10_000),
            researcher: ResearcherOptions::default(),
        }
    }
}

/// Client side of the worker boundary
///
/// Requests are sent as [`RequestEnvelope`]s; a routing task hands each
/// [`ResponseEnvelope`] to the caller waiting on its id, in whatever order the
/// responses arrive.
pub struct WorkerHandle {
    requests: mpsc::Sender<RequestEnvelope>,
    pending: PendingMap,
    next_id: AtomicU64,
    timeout: Duration,
}

impl WorkerHandle {
    /// Connect to a worker through its request and response channels
    ///
    /// Must be called inside a tokio runtime; spawns the response routing task.
    pub fn connect(
        requests: mpsc::Sender<RequestEnvelope>,
        responses: mpsc::Receiver<ResponseEnvelope>,
        timeout: Duration,
    ) -> Self {
        let pending: PendingMap = Arc::new(Mutex::new(HashMap::new()));
        tokio::spawn(route_responses(responses, Arc::clone(&pending)));
        WorkerHandle {
            requests,
            pending,
            next_id: AtomicU64::new(1),
            timeout,
        }
    }

    /// Number of requests awaiting a response
    pub async fn pending_count(&self) -> usize {
        self.pending.lock().await.len()
    }

    /// Send a request and wait for its response
    pub async fn request(&self, request: WorkerRequest) -> Result<WorkerResponse> {
        let id = self.next_id.fetch_add(1, Ordering::Relaxed);
        let (tx, rx) = oneshot::channel();
        self.pending.lock().await.insert(id, tx);

        debug!("Sending {} request {}", request.kind(), id);
        if self.requests.send(RequestEnvelope { id, request }).await.is_err() {
            self.pending.lock().await.remove(&id);
            return Err(WorkerError::Unavailable {
                reason: "worker request channel is closed".to_string(),
            });
        }

        match tokio::time::timeout(self.timeout, rx).await {
            Ok(Ok(result)) => result,
            Ok(Err(_)) => Err(WorkerError::Unavailable {
                reason: "worker stopped before responding".to_string(),
            }),
            Err(_) => {
                self.pending.lock().await.remove(&id);
                warn!("Request {} timed out after {:?}", id, self.timeout);
                Err(WorkerError::Timeout {
                    timeout_ms: self.timeout.as_millis() as u64,
                })
            }
        }
    }
}

#[async_trait]
impl AnalysisWorker for WorkerHandle {
    async fn analyze_related_keyphrases(
        &self,
        paper: Paper,
        related: RelatedKeyphrases,
    ) -> Result<KeyphraseAnalysis> {
        match self
            .request(WorkerRequest::AnalyzeRelatedKeyphrases { paper, related })
            .await?
        {
            WorkerResponse::Analysis(analysis) => Ok(analysis),
            WorkerResponse::Research(_) => Err(WorkerError::Protocol {
                reason: "expected an analysis response".to_string(),
            }),
        }
    }

    async fn run_research(&self, name: String, paper: Paper) -> Result<Value> {
        match self.request(WorkerRequest::RunResearch { name, paper }).await? {
            WorkerResponse::Research(value) => Ok(value),
            WorkerResponse::Analysis(_) => Err(WorkerError::Protocol {
                reason: "expected a research response".to_string(),
            }),
        }
    }
}

async fn route_responses(mut responses: mpsc::Receiver<ResponseEnvelope>, pending: PendingMap) {
    while let Some(envelope) = responses.recv().await {
        match pending.lock().await.remove(&envelope.id) {
            // The caller may have timed out and dropped its receiver.
            Some(tx) => {
                let _ = tx.send(envelope.result);
            }
            None => warn!("Dropping response for unknown request {}", envelope.id),
        }
    }
    // Dropping the senders wakes every remaining caller with an error.
    let abandoned = {
        let mut pending = pending.lock().await;
        let count = pending.len();
        pending.clear();
        count
    };
    info!("Worker response channel closed ({} pending)", abandoned);
}

/// Spawn the in-process worker and return a connected handle
///
/// Requests run on the blocking pool, one task each, so a slow analysis does not
/// hold up the rest. Must be called inside a tokio runtime.
pub fn spawn_worker(options: WorkerOptions) -> WorkerHandle {
    let capacity = options.queue_capacity.max(1);
    let (request_tx, request_rx) = mpsc::channel(capacity);
    let (response_tx, response_rx) = mpsc::channel(capacity);
    tokio::spawn(run_worker(
        AnalysisEngine::new(options.researcher),
        request_rx,
        response_tx,
    ));
    info!(
        "Spawned analysis worker (queue {}, timeout {:?})",
        capacity, options.request_timeout
    );
    WorkerHandle::connect(request_tx, response_rx, options.request_timeout)
}

async fn run_worker(
    engine: AnalysisEngine,
    mut requests: mpsc::Receiver<RequestEnvelope>,
    responses: mpsc::Sender<ResponseEnvelope>,
) {
    while let Some(RequestEnvelope { id, request }) = requests.recv().await {
        let responses = responses.clone();
        tokio::spawn(async move {
            let result = match tokio::task::spawn_blocking(move || engine.handle(request)).await {
                Ok(result) => result,
                Err(err) => Err(WorkerError::Unavailable {
                    reason: format!("analysis task failed: {}", err),
                }),
            };
            if responses.send(ResponseEnvelope { id, result }).await.is_err() {
                debug!("Client gone, dropping response {}", id);
            }
        });
    }
    debug!("Worker request channel closed");
}

#[cfg(test)]
mod tests {
    use super::*;
    use wordlens_paper::PaperAttributes;

    fn paper() -> Paper {
        Paper::new(
            "Cat food keeps cats happy.",
            PaperAttributes {
                keyword: "cat food".to_string(),
                ..Default::default()
            },
        )
    }

    #[tokio::test]
    async fn test_spawned_worker_answers() {
        let worker = spawn_worker(WorkerOptions::default());
        let value = worker
            .run_research("keyphraseLength".to_string(), paper())
            .await
            .unwrap();
        assert_eq!(value["keyphraseLength"], 2);
        assert_eq!(worker.pending_count().await, 0);
    }

    #[tokio::test]
    async fn test_unknown_research_is_reported() {
        let worker = spawn_worker(WorkerOptions::default());
        let err = worker
            .run_research("nope".to_string(), paper())
            .await
            .unwrap_err();
        assert_eq!(
            err,
            WorkerError::UnknownResearch {
                name: "nope".to_string()
            }
        );
    }

    #[tokio::test]
    async fn test_closed_request_channel_is_unavailable() {
        let (request_tx, request_rx) = mpsc::channel(1);
        let (_response_tx, response_rx) = mpsc::channel(1);
        drop(request_rx);
        let handle = WorkerHandle::connect(request_tx, response_rx, Duration::from_secs(1));

        let err = handle
            .run_research("morphology".to_string(), paper())
            .await
            .unwrap_err();
        assert!(matches!(err, WorkerError::Unavailable { .. }));
        assert_eq!(handle.pending_count().await, 0);
    }

    #[tokio::test]
    async fn test_silent_worker_times_out() {
        let (request_tx, _request_rx) = mpsc::channel(1);
        let (_response_tx, response_rx) = mpsc::channel(1);
        let handle = WorkerHandle::connect(request_tx, response_rx, Duration::from_millis(20));

        let err = handle
            .run_research("morphology".to_string(), paper())
            .await
            .unwrap_err();
        assert_eq!(err, WorkerError::Timeout { timeout_ms: 20 });
        assert_eq!(handle.pending_count().await, 0);
    }

    #[tokio::test]
    async fn test_wrong_response_kind_is_protocol_error() {
        let (request_tx, mut request_rx) = mpsc::channel::<RequestEnvelope>(1);
        let (response_tx, response_rx) = mpsc::channel(1);
        let handle = WorkerHandle::connect(request_tx, response_rx, Duration::from_secs(1));

        tokio::spawn(async move {
            if let Some(envelope) = request_rx.recv().await {
                let _ = response_tx
                    .send(ResponseEnvelope {
                        id: envelope.id,
                        result: Ok(WorkerResponse::Research(Value::Null)),
                    })
                    .await;
            }
        });

        let err = handle
            .analyze_related_keyphrases(paper(), RelatedKeyphrases::new())
            .await
            .unwrap_err();
        assert!(matches!(err, WorkerError::Protocol { .. }));
    }
}
