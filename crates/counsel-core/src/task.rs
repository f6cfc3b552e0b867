//! # Legal Task Value Objects
//!
//! A [`LegalTask`] is a concrete due date expanded from a recurring
//! taxonomy rule. The engine only ever emits tasks in [`TaskStatus::Pending`];
//! the rest of the lifecycle (completion, overdue transitions,
//! deduplication against already-persisted tasks) belongs to the caller.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Lifecycle state of a legal task.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TaskStatus {
    /// Newly generated, not yet acted on. The only state the engine emits.
    Pending,
    /// Marked done by the caller.
    Completed,
    /// Due date passed without completion; set by the caller.
    Overdue,
}

impl TaskStatus {
    /// Canonical string form, matching the serialized representation.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Pending => "Pending",
            Self::Completed => "Completed",
            Self::Overdue => "Overdue",
        }
    }
}

impl std::fmt::Display for TaskStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A concrete legal obligation with a computed due date.
///
/// `task_id` is taken verbatim from the taxonomy rule, so repeated
/// generation for the same period is idempotent at the identifier level.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LegalTask {
    /// Stable rule identifier from the taxonomy.
    pub task_id: String,
    /// Human-readable obligation title.
    pub title: String,
    /// Authority the obligation is owed to.
    pub responsible_body: String,
    /// Computed calendar due date for the current period.
    pub due_date: NaiveDate,
    /// Always [`TaskStatus::Pending`] at generation time.
    pub status: TaskStatus,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_display_matches_serialized_form() {
        for status in [TaskStatus::Pending, TaskStatus::Completed, TaskStatus::Overdue] {
            let json = serde_json::to_string(&status).unwrap();
            assert_eq!(json, format!("\"{status}\""));
        }
    }

    #[test]
    fn task_serde_roundtrip() {
        let task = LegalTask {
            task_id: "GNT-001".into(),
            title: "Quarterly VAT return".into(),
            responsible_body: "Tax Administration".into(),
            due_date: NaiveDate::from_ymd_opt(2026, 4, 15).unwrap(),
            status: TaskStatus::Pending,
        };
        let json = serde_json::to_string(&task).unwrap();
        let deser: LegalTask = serde_json::from_str(&json).unwrap();
        assert_eq!(task, deser);
    }

    #[test]
    fn due_date_serializes_as_iso_date() {
        let task = LegalTask {
            task_id: "GNT-001".into(),
            title: "t".into(),
            responsible_body: "r".into(),
            due_date: NaiveDate::from_ymd_opt(2026, 4, 15).unwrap(),
            status: TaskStatus::Pending,
        };
        let json = serde_json::to_value(&task).unwrap();
        assert_eq!(json["due_date"], "2026-04-15");
    }
}
