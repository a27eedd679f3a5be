/*
[INPUT]:  Task + ProgressReporter (ExecutorClient in production)
[OUTPUT]: One status report per step, one result report, ExecutionSummary
[POS]:    Execution layer - sequential step loop
[UPDATE]: When changing step reporting or result timing
*/

use chrono::Utc;
use std::time::Duration;
use tokio::time::{Instant, sleep};
use tracing::{Instrument, debug, info, info_span};
use workflow_executor_adapter::{ProgressPayload, ProgressReporter, ResultPayload, unix_timestamp};

use crate::task::Task;

/// What happened during one run
#[derive(Debug, Clone, PartialEq)]
pub struct ExecutionSummary {
    pub task_id: String,
    pub steps_executed: usize,
    /// Status reports the backend did not accept
    pub status_failures: usize,
    pub result_delivered: bool,
    pub elapsed: Duration,
}

/// Run every step of `task` in order, reporting progress after each one and
/// the result at the end.
///
/// Report failures never stop the run; they are counted in the summary.
pub async fn execute_task<R>(task: &Task, reporter: &R) -> ExecutionSummary
where
    R: ProgressReporter + ?Sized,
{
    let span = info_span!("task", task_id = %task.id());
    run(task, reporter).instrument(span).await
}

async fn run<R>(task: &Task, reporter: &R) -> ExecutionSummary
where
    R: ProgressReporter + ?Sized,
{
    let total_steps = task.steps().len();
    info!("Starting task {} with {} steps", task.id(), total_steps);

    let started = Instant::now();
    let started_at = Utc::now();
    let mut steps_executed = 0;
    let mut status_failures = 0;

    for (index, step) in task.steps().iter().enumerate() {
        let index = index + 1;
        info!(
            "Executing step {}/{}: {} ({:.1}s)",
            index,
            total_steps,
            step.description(),
            step.duration_secs()
        );
        sleep(step.duration()).await;
        steps_executed += 1;

        let payload = ProgressPayload::new(task.id(), index, total_steps, step.description());
        if let Err(err) = reporter.report_status(&payload).await {
            status_failures += 1;
            debug!(step = index, error = %err, "status report dropped");
        }
    }

    let elapsed = started.elapsed();
    let result = ResultPayload {
        task_id: task.id().to_string(),
        status: task.result().status.clone(),
        output: task.result().output.clone(),
        started_at: unix_timestamp(started_at),
        finished_at: unix_timestamp(Utc::now()),
        duration: elapsed.as_secs_f64(),
    };

    let result_delivered = match reporter.report_result(&result).await {
        Ok(()) => true,
        Err(err) => {
            debug!(error = %err, "result report dropped");
            false
        }
    };

    info!("Task {} completed", task.id());

    ExecutionSummary {
        task_id: task.id().to_string(),
        steps_executed,
        status_failures,
        result_delivered,
        elapsed,
    }
}
