//! Application Context
//!
//! Shared state provided via Leptos Context API.

use leptos::prelude::*;

use crate::filter::TaskFilter;

/// App-wide signals provided via context.
///
/// The load effect in `App` tracks both signals, so bumping the trigger or
/// switching the filter re-fetches the task collection from the backend.
#[derive(Clone, Copy)]
pub struct AppContext {
    /// Trigger to reload tasks from backend - read
    pub reload_trigger: ReadSignal<u32>,
    /// Trigger to reload tasks from backend - write
    set_reload_trigger: WriteSignal<u32>,
    /// Currently selected filter - read
    pub current_filter: ReadSignal<TaskFilter>,
    /// Currently selected filter - write
    set_current_filter: WriteSignal<TaskFilter>,
}

impl AppContext {
    pub fn new(
        reload_trigger: (ReadSignal<u32>, WriteSignal<u32>),
        current_filter: (ReadSignal<TaskFilter>, WriteSignal<TaskFilter>),
    ) -> Self {
        Self {
            reload_trigger: reload_trigger.0,
            set_reload_trigger: reload_trigger.1,
            current_filter: current_filter.0,
            set_current_filter: current_filter.1,
        }
    }

    /// Trigger a full re-fetch of the task list.
    pub fn reload(&self) {
        self.set_reload_trigger.update(|v| *v += 1);
    }

    /// Switch the filter. The load effect tracks the filter signal, so this
    /// is a full re-fetch, not a re-render of cached data.
    pub fn set_filter(&self, filter: TaskFilter) {
        self.set_current_filter.set(filter);
    }
}

/// Get the app context from context
pub fn use_app_context() -> AppContext {
    expect_context::<AppContext>()
}
