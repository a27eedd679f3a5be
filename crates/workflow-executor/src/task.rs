/*
[INPUT]:  Hardcoded demo task definition
[OUTPUT]: Immutable Task / Step / TaskResult values for the runner
[POS]:    Task model - what the executor runs
[UPDATE]: When the task shape changes or a real task source replaces the demo
*/

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value, json};
use std::time::Duration;

const DEFAULT_RESULT_STATUS: &str = "success";
const DEFAULT_STEP_SECS: f64 = 1.0;

/// One simulated unit of work
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "RawStep")]
pub struct Step {
    description: String,
    duration_secs: f64,
}

impl Step {
    /// Negative or non-finite durations are treated as zero.
    pub fn new(description: impl Into<String>, duration_secs: f64) -> Self {
        let duration_secs = if duration_secs.is_finite() && duration_secs > 0.0 {
            duration_secs
        } else {
            0.0
        };
        Self {
            description: description.into(),
            duration_secs,
        }
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn duration_secs(&self) -> f64 {
        self.duration_secs
    }

    /// Saturates at [`Duration::MAX`] for values too large to represent
    pub fn duration(&self) -> Duration {
        Duration::try_from_secs_f64(self.duration_secs).unwrap_or(Duration::MAX)
    }
}

#[derive(Deserialize)]
struct RawStep {
    description: String,
    #[serde(default = "default_step_secs", alias = "duration")]
    duration_secs: f64,
}

fn default_step_secs() -> f64 {
    DEFAULT_STEP_SECS
}

impl From<RawStep> for Step {
    fn from(raw: RawStep) -> Self {
        Step::new(raw.description, raw.duration_secs)
    }
}

/// Outcome reported once the last step finishes
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TaskResult {
    pub status: String,
    pub output: Value,
}

impl Default for TaskResult {
    fn default() -> Self {
        Self {
            status: DEFAULT_RESULT_STATUS.to_string(),
            output: Value::Object(Map::new()),
        }
    }
}

/// Ordered steps plus the result descriptor; read-only once built
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Task {
    id: String,
    steps: Vec<Step>,
    #[serde(default)]
    result: TaskResult,
}

impl Task {
    pub fn new(id: impl Into<String>, steps: Vec<Step>, result: TaskResult) -> Self {
        Self {
            id: id.into(),
            steps,
            result,
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn steps(&self) -> &[Step] {
        &self.steps
    }

    pub fn result(&self) -> &TaskResult {
        &self.result
    }

    /// Sum of all step durations
    pub fn total_duration(&self) -> Duration {
        self.steps
            .iter()
            .map(Step::duration)
            .fold(Duration::ZERO, Duration::saturating_add)
    }
}

/// Fixed three-step task used by the binary
pub fn build_demo_task() -> Task {
    Task::new(
        "demo-task-001",
        vec![
            Step::new("Initialize environment", 1.0),
            Step::new("Process dataset", 2.0),
            Step::new("Finalize output", 1.5),
        ],
        TaskResult {
            status: DEFAULT_RESULT_STATUS.to_string(),
            output: json!({
                "message": "Task completed successfully",
                "artifacts": ["log.txt", "results.json"],
            }),
        },
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn demo_task_is_deterministic() {
        let task = build_demo_task();
        assert_eq!(task.id(), "demo-task-001");
        assert_eq!(task, build_demo_task());

        let durations: Vec<f64> = task.steps().iter().map(Step::duration_secs).collect();
        assert_eq!(durations, vec![1.0, 2.0, 1.5]);
        assert_eq!(task.steps()[1].description(), "Process dataset");
        assert_eq!(task.total_duration(), Duration::from_millis(4500));
    }

    #[test]
    fn demo_result_lists_artifacts() {
        let task = build_demo_task();
        assert_eq!(task.result().status, "success");
        assert_eq!(
            task.result().output["artifacts"],
            json!(["log.txt", "results.json"])
        );
    }

    #[test]
    fn invalid_durations_clamp_to_zero() {
        assert_eq!(Step::new("neg", -1.0).duration_secs(), 0.0);
        assert_eq!(Step::new("nan", f64::NAN).duration(), Duration::ZERO);
        assert_eq!(Step::new("inf", f64::INFINITY).duration(), Duration::ZERO);
    }

    #[test]
    fn huge_durations_saturate_instead_of_panicking() {
        let step = Step::new("huge", 1e30);
        assert_eq!(step.duration_secs(), 1e30);
        assert_eq!(step.duration(), Duration::MAX);

        let task = Task::new(
            "huge",
            vec![step, Step::new("also huge", f64::MAX)],
            TaskResult::default(),
        );
        assert_eq!(task.total_duration(), Duration::MAX);
    }

    #[test]
    fn result_defaults_to_success_with_empty_output() {
        let task: Task = serde_json::from_value(json!({"id": "t", "steps": []}))
            .expect("task should deserialize");
        assert_eq!(task.result().status, "success");
        assert_eq!(task.result().output, json!({}));
        assert!(task.steps().is_empty());
    }

    #[test]
    fn deserialized_steps_are_clamped_and_defaulted() {
        let steps: Vec<Step> = serde_json::from_value(json!([
            {"description": "a", "duration": -3.0},
            {"description": "b"},
        ]))
        .expect("steps should deserialize");
        assert_eq!(steps[0].duration_secs(), 0.0);
        assert_eq!(steps[1].duration_secs(), 1.0);
    }
}
