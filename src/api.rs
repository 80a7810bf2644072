//! Backend API Client
//!
//! Bindings for the task REST endpoints, one async fn per operation.
//! Every operation resolves to `Result<T, String>` where the `Err` string
//! is ready to show to the user.

use wasm_bindgen::JsValue;
use wasm_bindgen_futures::JsFuture;
use web_sys::{Request, RequestInit, Response};

use crate::models::{ApiError, NewTask, StatusChange, Task, TaskListResponse};

const TASKS_URL: &str = "/api/tasks";

/// Fetch the full task collection.
pub async fn list_tasks() -> Result<Vec<Task>, String> {
    let (ok, body) = request("GET", TASKS_URL, None).await?;
    if !ok {
        return Err(error_message(&body, "Failed to load tasks"));
    }
    let parsed: TaskListResponse = serde_json::from_str(&body).map_err(|e| e.to_string())?;
    Ok(parsed.tasks)
}

/// Create a task. Callers validate `content` before getting here.
pub async fn create_task(content: &str) -> Result<(), String> {
    let payload = serde_json::to_string(&NewTask { content }).map_err(|e| e.to_string())?;
    let (ok, body) = request("POST", TASKS_URL, Some(&payload)).await?;
    if !ok {
        return Err(error_message(&body, "Failed to add task"));
    }
    Ok(())
}

/// Set a task's completed flag (0 = active, 1 = completed).
pub async fn update_task_status(id: u32, completed: u8) -> Result<(), String> {
    let payload = serde_json::to_string(&StatusChange { completed }).map_err(|e| e.to_string())?;
    let url = format!("{}/{}", TASKS_URL, id);
    let (ok, body) = request("PUT", &url, Some(&payload)).await?;
    if !ok {
        return Err(error_message(&body, "Failed to update task"));
    }
    Ok(())
}

pub async fn delete_task(id: u32) -> Result<(), String> {
    let url = format!("{}/{}", TASKS_URL, id);
    let (ok, body) = request("DELETE", &url, None).await?;
    if !ok {
        return Err(error_message(&body, "Failed to delete task"));
    }
    Ok(())
}

/// Issue one request and read back (is-2xx, body text).
///
/// JSON bodies get a `Content-Type` header. Transport failures surface as
/// user-ready strings; non-2xx statuses are the caller's to interpret.
async fn request(method: &str, url: &str, body: Option<&str>) -> Result<(bool, String), String> {
    let opts = RequestInit::new();
    opts.set_method(method);
    if let Some(payload) = body {
        opts.set_body(&JsValue::from_str(payload));
    }

    let request =
        Request::new_with_str_and_init(url, &opts).map_err(|_| "Failed to build request")?;
    if body.is_some() {
        request
            .headers()
            .set("Content-Type", "application/json")
            .map_err(|_| "Failed to set request headers")?;
    }

    let window = web_sys::window().ok_or("No window available")?;
    let response: Response = JsFuture::from(window.fetch_with_request(&request))
        .await
        .map_err(|_| "Network request failed")?
        .into();

    let text_promise = response.text().map_err(|_| "Failed to read response")?;
    let text = JsFuture::from(text_promise)
        .await
        .map_err(|_| "Failed to read response")?
        .as_string()
        .unwrap_or_default();

    Ok((response.ok(), text))
}

/// Backend-provided error text from a non-2xx body, or `fallback` when the
/// body carries no usable `error` field.
fn error_message(body: &str, fallback: &str) -> String {
    serde_json::from_str::<ApiError>(body)
        .ok()
        .and_then(|e| e.error)
        .unwrap_or_else(|| fallback.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_message_prefers_backend_text() {
        let body = r#"{"error":"Task content cannot be empty!"}"#;
        assert_eq!(
            error_message(body, "Failed to add task"),
            "Task content cannot be empty!"
        );
    }

    #[test]
    fn test_error_message_falls_back_on_missing_field() {
        assert_eq!(error_message("{}", "Failed to add task"), "Failed to add task");
        assert_eq!(
            error_message(r#"{"error":null}"#, "Failed to update task"),
            "Failed to update task"
        );
    }

    #[test]
    fn test_error_message_falls_back_on_unparseable_body() {
        assert_eq!(
            error_message("<html>502 Bad Gateway</html>", "Failed to delete task"),
            "Failed to delete task"
        );
        assert_eq!(error_message("", "Failed to load tasks"), "Failed to load tasks");
    }
}
