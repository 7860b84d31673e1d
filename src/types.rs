//! Core types for the task board service.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Lifecycle status of a task.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TaskStatus {
    #[default]
    Pending,
    InProgress,
    Completed,
}

impl TaskStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            TaskStatus::Pending => "pending",
            TaskStatus::InProgress => "in-progress",
            TaskStatus::Completed => "completed",
        }
    }
}

/// A task record owned by the store.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    pub id: u64,
    pub title: String,
    pub description: String,
    pub status: TaskStatus,
    pub created_at: DateTime<Utc>,
    /// Absent until the first successful update.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

/// Input for creating a task.
///
/// `title` is optional at the decode layer so a missing title surfaces as a
/// validation error rather than a body-decode failure.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CreateTaskInput {
    pub title: Option<String>,
    pub description: Option<String>,
}

/// Partial update for a task. Omitted fields are left untouched; an explicit
/// empty `description` is a valid overwrite.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateTaskFields {
    pub title: Option<String>,
    pub description: Option<String>,
    pub status: Option<TaskStatus>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_serializes_kebab_case() {
        assert_eq!(
            serde_json::to_string(&TaskStatus::InProgress).unwrap(),
            "\"in-progress\""
        );
        assert_eq!(
            serde_json::from_str::<TaskStatus>("\"completed\"").unwrap(),
            TaskStatus::Completed
        );
    }

    #[test]
    fn task_omits_updated_at_until_first_update() {
        let task = Task {
            id: 1,
            title: "T".to_string(),
            description: String::new(),
            status: TaskStatus::Pending,
            created_at: Utc::now(),
            updated_at: None,
        };
        let json = serde_json::to_value(&task).unwrap();
        assert!(json.get("updatedAt").is_none());
        assert!(json.get("createdAt").is_some());
    }
}
