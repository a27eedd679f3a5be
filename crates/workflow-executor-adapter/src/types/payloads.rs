/*
[INPUT]:  Task progress and completion data produced by the executor
[OUTPUT]: JSON bodies for /executor/status and /executor/result
[POS]:    Data layer - wire records posted to the backend
[UPDATE]: When the backend changes the status or result body
*/

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Progress update sent after each completed step
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProgressPayload {
    pub task_id: String,
    /// 1-based index of the step that just finished
    pub step: usize,
    pub total_steps: usize,
    pub description: String,
    /// Integer percentage in 0..=100
    pub progress: u8,
    /// Unix epoch seconds
    pub timestamp: f64,
}

impl ProgressPayload {
    /// Build the payload for step `step` of `total_steps`, stamped with the current time
    pub fn new(
        task_id: impl Into<String>,
        step: usize,
        total_steps: usize,
        description: impl Into<String>,
    ) -> Self {
        Self {
            task_id: task_id.into(),
            step,
            total_steps,
            description: description.into(),
            progress: progress_percent(step, total_steps),
            timestamp: unix_timestamp(Utc::now()),
        }
    }
}

/// Final outcome sent once after all steps complete
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResultPayload {
    pub task_id: String,
    pub status: String,
    pub output: Value,
    /// Unix epoch seconds
    pub started_at: f64,
    /// Unix epoch seconds
    pub finished_at: f64,
    /// Elapsed seconds
    pub duration: f64,
}

/// Percentage of the task completed after step `index` of `total`.
///
/// Truncates toward zero. A task with no steps counts as fully complete.
pub fn progress_percent(index: usize, total: usize) -> u8 {
    if total == 0 {
        return 100;
    }
    let percent = index.min(total) * 100 / total;
    percent as u8
}

/// Seconds since the Unix epoch with microsecond precision
pub fn unix_timestamp(at: DateTime<Utc>) -> f64 {
    at.timestamp_micros() as f64 / 1_000_000.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use serde_json::json;

    #[test]
    fn progress_truncates_thirds() {
        assert_eq!(progress_percent(1, 3), 33);
        assert_eq!(progress_percent(2, 3), 66);
        assert_eq!(progress_percent(3, 3), 100);
    }

    #[test]
    fn progress_for_empty_task_is_complete() {
        assert_eq!(progress_percent(0, 0), 100);
    }

    #[test]
    fn progress_never_exceeds_hundred() {
        assert_eq!(progress_percent(7, 3), 100);
    }

    #[test]
    fn progress_is_monotonic_and_ends_at_hundred() {
        for total in 1..=50 {
            let values: Vec<u8> = (1..=total).map(|i| progress_percent(i, total)).collect();
            assert!(values.windows(2).all(|w| w[0] <= w[1]), "total={total}");
            assert_eq!(values.last().copied(), Some(100));
        }
    }

    #[test]
    fn unix_timestamp_keeps_sub_second_precision() {
        let at = Utc.timestamp_opt(1_700_000_000, 250_000_000).unwrap();
        assert_eq!(unix_timestamp(at), 1_700_000_000.25);
    }

    #[test]
    fn progress_payload_serializes_backend_field_names() {
        let mut payload = ProgressPayload::new("demo-task-001", 2, 3, "Process dataset");
        payload.timestamp = 10.5;

        let value = serde_json::to_value(&payload).expect("payload should serialize");
        assert_eq!(
            value,
            json!({
                "task_id": "demo-task-001",
                "step": 2,
                "total_steps": 3,
                "description": "Process dataset",
                "progress": 66,
                "timestamp": 10.5,
            })
        );
    }

    #[test]
    fn result_payload_carries_arbitrary_output() {
        let payload = ResultPayload {
            task_id: "t".to_string(),
            status: "success".to_string(),
            output: json!({"artifacts": ["log.txt"]}),
            started_at: 1.0,
            finished_at: 2.5,
            duration: 1.5,
        };

        let value = serde_json::to_value(&payload).expect("payload should serialize");
        assert_eq!(value["output"]["artifacts"][0], "log.txt");
        assert_eq!(value["duration"], 1.5);
        assert_eq!(value.as_object().map(|o| o.len()), Some(6));
    }
}
