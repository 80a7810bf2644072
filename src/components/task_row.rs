//! Task Row Component
//!
//! Single task line: status checkbox, content text, delete control.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api;
use crate::components::DeleteConfirmButton;
use crate::context::use_app_context;
use crate::models::Task;
use crate::notify::use_notifier;

/// A single task row
#[component]
pub fn TaskRow(task: Task) -> impl IntoView {
    let ctx = use_app_context();
    let notifier = use_notifier();

    let id = task.id;
    let completed = task.is_completed();

    let toggle_status = move |ev: web_sys::Event| {
        let checked = event_target_checked(&ev);
        spawn_local(async move {
            match api::update_task_status(id, u8::from(checked)).await {
                Ok(()) => ctx.reload(),
                // The checkbox keeps its toggled state until the next reload
                Err(err) => notifier.error(err),
            }
        });
    };

    let delete = move |()| {
        spawn_local(async move {
            match api::delete_task(id).await {
                Ok(()) => {
                    notifier.success("Task deleted successfully!");
                    ctx.reload();
                }
                Err(err) => notifier.error(err),
            }
        });
    };

    view! {
        <div class="task-item">
            <div class="task-content">
                <input
                    type="checkbox"
                    class="task-checkbox"
                    prop:checked=completed
                    on:change=toggle_status
                />
                <span class=if completed { "task-text completed" } else { "task-text" }>
                    {task.content.clone()}
                </span>
            </div>
            <div class="task-actions">
                <DeleteConfirmButton button_class="delete-btn" on_confirm=delete />
            </div>
        </div>
    }
}
