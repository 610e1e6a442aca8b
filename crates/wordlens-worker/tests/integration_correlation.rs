//! Integration tests for request correlation across the worker boundary

use std::time::Duration;

use serde_json::json;
use tokio::sync::mpsc;
use wordlens_paper::Paper;
use wordlens_worker::{
    spawn_worker, AnalysisWorker, RequestEnvelope, ResponseEnvelope, WorkerHandle, WorkerOptions,
    WorkerRequest, WorkerResponse,
};

// ============================================================================
// Helper Functions
// ============================================================================

/// Worker double that waits for `batch` requests and answers them in reverse order,
/// echoing each research name back.
fn reversing_worker(batch: usize) -> WorkerHandle {
    let (request_tx, mut request_rx) = mpsc::channel::<RequestEnvelope>(batch);
    let (response_tx, response_rx) = mpsc::channel(batch);

    tokio::spawn(async move {
        let mut received = Vec::new();
        while received.len() < batch {
            match request_rx.recv().await {
                Some(envelope) => received.push(envelope),
                None => return,
            }
        }
        for envelope in received.into_iter().rev() {
            let name = match envelope.request {
                WorkerRequest::RunResearch { name, .. } => name,
                WorkerRequest::AnalyzeRelatedKeyphrases { .. } => String::new(),
            };
            let response = ResponseEnvelope {
                id: envelope.id,
                result: Ok(WorkerResponse::Research(json!({ "echo": name }))),
            };
            if response_tx.send(response).await.is_err() {
                return;
            }
        }
    });

    WorkerHandle::connect(request_tx, response_rx, Duration::from_secs(5))
}

// ============================================================================
// Correlation
// ============================================================================

#[tokio::test]
async fn test_out_of_order_responses_reach_their_callers() {
    let worker = reversing_worker(3);
    let names = ["first", "second", "third"];

    let calls = names
        .iter()
        .map(|name| worker.run_research(name.to_string(), Paper::from_text("text")));
    let results = futures::future::join_all(calls).await;

    for (name, result) in names.iter().zip(results) {
        assert_eq!(result.unwrap()["echo"], *name);
    }
    assert_eq!(worker.pending_count().await, 0);
}

#[tokio::test]
async fn test_concurrent_requests_on_spawned_worker() {
    let worker = spawn_worker(WorkerOptions::default());
    let paper = Paper::from_text("One sentence here. Another sentence there.");

    let (count, sentences) = tokio::join!(
        worker.run_research("wordCountInText".to_string(), paper.clone()),
        worker.run_research("countSentencesFromText".to_string(), paper.clone()),
    );

    assert_eq!(count.unwrap()["count"], 6);
    assert_eq!(sentences.unwrap().as_array().map(Vec::len), Some(2));
}
