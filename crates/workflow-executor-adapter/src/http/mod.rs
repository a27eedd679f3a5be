/*
[INPUT]:  Backend base URL, client timeouts and executor payloads
[OUTPUT]: Best-effort POST results for status and result endpoints
[POS]:    HTTP layer - backend communication
[UPDATE]: When adding new endpoints or changing client behavior
*/

pub mod client;
pub mod error;
pub mod report;

pub use error::{ExecutorError, Result};
pub use report::{ProgressReporter, RESULT_ENDPOINT, STATUS_ENDPOINT};

pub use client::{ClientConfig, ExecutorClient};
