//! Frontend Models
//!
//! Data structures matching backend payloads.

use serde::{Deserialize, Serialize};

/// Task record as stored by the backend.
///
/// `completed` mirrors the backend's integer column: 0 = active,
/// 1 = completed. Extra backend fields (e.g. `created_at`) are ignored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    pub id: u32,
    pub content: String,
    pub completed: u8,
}

impl Task {
    pub fn is_completed(&self) -> bool {
        self.completed != 0
    }
}

/// Body of `GET /api/tasks`.
#[derive(Debug, Clone, Deserialize)]
pub struct TaskListResponse {
    pub tasks: Vec<Task>,
}

/// Error shape the backend attaches to non-2xx responses.
#[derive(Debug, Clone, Deserialize)]
pub struct ApiError {
    pub error: Option<String>,
}

/// Body of `POST /api/tasks`.
#[derive(Debug, Serialize)]
pub struct NewTask<'a> {
    pub content: &'a str,
}

/// Body of `PUT /api/tasks/{id}`.
#[derive(Debug, Serialize)]
pub struct StatusChange {
    pub completed: u8,
}

/// Normalized task content: surrounding whitespace stripped, `None` when
/// nothing remains. Blank input never reaches the backend.
pub fn trimmed_content(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trimmed_content_rejects_blank_input() {
        assert_eq!(trimmed_content(""), None);
        assert_eq!(trimmed_content("   "), None);
        assert_eq!(trimmed_content("\t\n"), None);
    }

    #[test]
    fn test_trimmed_content_strips_whitespace() {
        assert_eq!(trimmed_content("  Buy milk  "), Some("Buy milk".to_string()));
        assert_eq!(trimmed_content("Buy milk"), Some("Buy milk".to_string()));
    }

    #[test]
    fn test_task_list_ignores_extra_backend_fields() {
        let body = r#"{"tasks":[
            {"id":1,"content":"Buy milk","completed":0,"created_at":"2024-01-01 10:00:00"},
            {"id":2,"content":"Walk dog","completed":1,"created_at":"2024-01-02 09:30:00"}
        ]}"#;
        let parsed: TaskListResponse = serde_json::from_str(body).unwrap();
        assert_eq!(parsed.tasks.len(), 2);
        assert_eq!(parsed.tasks[0].content, "Buy milk");
        assert!(!parsed.tasks[0].is_completed());
        assert!(parsed.tasks[1].is_completed());
    }

    #[test]
    fn test_request_bodies_serialize_to_wire_shape() {
        let body = serde_json::to_string(&NewTask { content: "Buy milk" }).unwrap();
        assert_eq!(body, r#"{"content":"Buy milk"}"#);
        let body = serde_json::to_string(&StatusChange { completed: 1 }).unwrap();
        assert_eq!(body, r#"{"completed":1}"#);
    }
}
