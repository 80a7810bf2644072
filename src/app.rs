//! Task List App
//!
//! Root component: owns the task collection and wires the load cycle.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api;
use crate::components::{FilterBar, NewTaskForm, TaskList, ToastStack};
use crate::context::AppContext;
use crate::filter::TaskFilter;
use crate::models::Task;
use crate::notify::Notifier;

#[component]
pub fn App() -> impl IntoView {
    // State
    let (tasks, set_tasks) = signal(Vec::<Task>::new());
    let (reload_trigger, set_reload_trigger) = signal(0u32);
    let (current_filter, set_current_filter) = signal(TaskFilter::All);

    // Provide context to all children
    let ctx = AppContext::new(
        (reload_trigger, set_reload_trigger),
        (current_filter, set_current_filter),
    );
    provide_context(ctx);
    let notifier = Notifier::new();
    provide_context(notifier);

    // Load tasks on mount, on every reload trigger, and on filter switch.
    // Every mutation goes through ctx.reload(), so the backend response
    // stays the single source of truth for the rendered list.
    Effect::new(move |_| {
        let _ = reload_trigger.get();
        let _ = current_filter.get();
        spawn_local(async move {
            match api::list_tasks().await {
                Ok(loaded) => set_tasks.set(loaded),
                // Keep whatever is rendered; the toast is the only feedback
                Err(err) => {
                    web_sys::console::error_1(&format!("Error loading tasks: {}", err).into());
                    notifier.error("Failed to load tasks. Please try again later.");
                }
            }
        });
    });

    view! {
        <div class="app-container">
            <h1>"Task List"</h1>

            <NewTaskForm />
            <FilterBar />
            <TaskList tasks=tasks />

            <p class="task-count">
                {move || {
                    let total = tasks.get().len();
                    format!("{} task{}", total, if total == 1 { "" } else { "s" })
                }}
            </p>

            <ToastStack />
        </div>
    }
}
