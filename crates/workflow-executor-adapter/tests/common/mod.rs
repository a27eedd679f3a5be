/*
[INPUT]:  Test configuration and mock server requirements
[OUTPUT]: Shared test utilities, fixtures, and mock helpers
[POS]:    Test infrastructure - shared across all test modules
[UPDATE]: When adding new test patterns or fixtures
*/

//! Common test utilities for workflow-executor-adapter tests

use serde_json::json;
use workflow_executor_adapter::{ProgressPayload, ResultPayload};
use wiremock::MockServer;

/// Setup a mock HTTP server for testing
pub async fn setup_mock_server() -> MockServer {
    MockServer::start().await
}

/// Progress payload with a fixed timestamp
pub fn sample_progress(step: usize, total: usize) -> ProgressPayload {
    let mut payload = ProgressPayload::new("task-under-test", step, total, format!("Step {step}"));
    payload.timestamp = 1_700_000_000.0;
    payload
}

/// Result payload with fixed timestamps
pub fn sample_result() -> ResultPayload {
    ResultPayload {
        task_id: "task-under-test".to_string(),
        status: "success".to_string(),
        output: json!({"message": "done"}),
        started_at: 1_700_000_000.0,
        finished_at: 1_700_000_004.5,
        duration: 4.5,
    }
}
