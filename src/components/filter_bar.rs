//! Filter Bar Component
//!
//! Buttons for switching between the three task filters.

use leptos::prelude::*;

use crate::context::use_app_context;
use crate::filter::TaskFilter;

/// Filter bar with exactly one active button at a time
#[component]
pub fn FilterBar() -> impl IntoView {
    let ctx = use_app_context();

    view! {
        <div class="filter-bar">
            {TaskFilter::ALL
                .into_iter()
                .map(|filter| {
                    let is_active = move || ctx.current_filter.get() == filter;
                    view! {
                        <button
                            class=move || {
                                if is_active() { "filter-btn active" } else { "filter-btn" }
                            }
                            on:click=move |_| ctx.set_filter(filter)
                        >
                            {filter.label()}
                        </button>
                    }
                })
                .collect_view()}
        </div>
    }
}
