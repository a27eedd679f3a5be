/*
[INPUT]:  Public API exports for the workflow-executor crate
[OUTPUT]: Module declarations and public re-exports
[POS]:    Crate root - library entry point
[UPDATE]: When adding new modules or public exports
*/

pub mod config;
pub mod logging;
pub mod runner;
pub mod task;

// Re-export main types for convenience
pub use config::{ConfigError, ExecutorConfig};
pub use runner::{ExecutionSummary, execute_task};
pub use task::{Step, Task, TaskResult, build_demo_task};
