//! Task List Component
//!
//! Renders the filtered task collection, or a filter-specific empty state.

use leptos::prelude::*;

use crate::components::TaskRow;
use crate::context::use_app_context;
use crate::filter;
use crate::models::Task;

/// The task list under the current filter
#[component]
pub fn TaskList(tasks: ReadSignal<Vec<Task>>) -> impl IntoView {
    let ctx = use_app_context();

    let visible = move || filter::apply(&tasks.get(), ctx.current_filter.get());

    view! {
        <div class="task-list">
            <Show when=move || visible().is_empty()>
                <div class="empty-state">
                    <p>{move || ctx.current_filter.get().empty_message()}</p>
                </div>
            </Show>
            // completed is part of the key so a toggled row is rebuilt
            <For
                each=visible
                key=|task| (task.id, task.completed)
                children=move |task| view! { <TaskRow task=task /> }
            />
        </div>
    }
}
