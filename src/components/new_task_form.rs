//! New Task Form Component
//!
//! Input row for creating tasks. A real `<form>` so both the Add button and
//! the Enter key submit.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api;
use crate::context::use_app_context;
use crate::models::trimmed_content;
use crate::notify::use_notifier;

/// Form for creating new tasks
#[component]
pub fn NewTaskForm() -> impl IntoView {
    let ctx = use_app_context();
    let notifier = use_notifier();

    let (content, set_content) = signal(String::new());

    let add_task = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let Some(text) = trimmed_content(&content.get()) else {
            notifier.error("Task content cannot be empty!");
            return;
        };

        spawn_local(async move {
            match api::create_task(&text).await {
                Ok(()) => {
                    set_content.set(String::new());
                    notifier.success("Task added successfully!");
                    ctx.reload();
                }
                // Input stays as typed so the user can correct and resubmit
                Err(err) => notifier.error(err),
            }
        });
    };

    view! {
        <form class="new-task-form" on:submit=add_task>
            <input
                type="text"
                placeholder="Add a new task..."
                prop:value=move || content.get()
                on:input=move |ev| set_content.set(event_target_value(&ev))
            />
            <button type="submit">"Add"</button>
        </form>
    }
}
