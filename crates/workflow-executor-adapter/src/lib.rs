/*
[INPUT]:  Crate modules and public type definitions
[OUTPUT]: Public executor adapter crate surface
[POS]:    Crate root - module wiring
[UPDATE]: When public modules or exports change
*/

pub mod http;
pub mod types;

// Re-export commonly used types from http
pub use http::{
    ClientConfig,
    ExecutorClient,
    ExecutorError,
    ProgressReporter,
    Result,
    RESULT_ENDPOINT,
    STATUS_ENDPOINT,
};

// Re-export all types
pub use types::*;
