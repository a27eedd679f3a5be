/*
[INPUT]:  ProgressPayload / ResultPayload built by the step executor
[OUTPUT]: POST /executor/status and POST /executor/result
[POS]:    HTTP layer - executor reporting endpoints
[UPDATE]: When endpoint paths change or a new report kind is added
*/

use async_trait::async_trait;

use crate::http::{ExecutorClient, Result};
use crate::types::{ProgressPayload, ResultPayload};

pub const STATUS_ENDPOINT: &str = "/executor/status";
pub const RESULT_ENDPOINT: &str = "/executor/result";

/// Sink for task progress and completion reports
#[async_trait]
pub trait ProgressReporter: Send + Sync {
    async fn report_status(&self, payload: &ProgressPayload) -> Result<()>;

    async fn report_result(&self, payload: &ResultPayload) -> Result<()>;
}

#[async_trait]
impl ProgressReporter for ExecutorClient {
    /// POST /executor/status
    async fn report_status(&self, payload: &ProgressPayload) -> Result<()> {
        self.post_json(STATUS_ENDPOINT, payload).await
    }

    /// POST /executor/result
    async fn report_result(&self, payload: &ResultPayload) -> Result<()> {
        self.post_json(RESULT_ENDPOINT, payload).await
    }
}
