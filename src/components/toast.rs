//! Toast Stack Component
//!
//! Renders the transient notice queue in the page corner.

use leptos::prelude::*;

use crate::notify::{use_notifier, NoticeKind};

/// Stack of auto-dismissing notices
#[component]
pub fn ToastStack() -> impl IntoView {
    let notifier = use_notifier();

    view! {
        <div class="toast-stack">
            <For
                each=move || notifier.notices()
                key=|notice| notice.id
                children=|notice| {
                    let class = match notice.kind {
                        NoticeKind::Success => "toast success",
                        NoticeKind::Error => "toast error",
                    };
                    view! { <div class=class>{notice.message}</div> }
                }
            />
        </div>
    }
}
