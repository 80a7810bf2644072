//! Transient Notifications
//!
//! Toast-style feedback for API outcomes. Notices stack independently and
//! dismiss themselves after a fixed delay.

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;

/// How long a notice stays on screen.
const DISMISS_MS: u32 = 3_000;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Success,
    Error,
}

/// One visible toast.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub id: u32,
    pub kind: NoticeKind,
    pub message: String,
}

/// Notice queue provided via context.
#[derive(Clone, Copy)]
pub struct Notifier {
    notices: ReadSignal<Vec<Notice>>,
    set_notices: WriteSignal<Vec<Notice>>,
    next_id: StoredValue<u32>,
}

impl Notifier {
    pub fn new() -> Self {
        let (notices, set_notices) = signal(Vec::new());
        Self {
            notices,
            set_notices,
            next_id: StoredValue::new(0),
        }
    }

    /// Currently visible notices, oldest first.
    pub fn notices(&self) -> Vec<Notice> {
        self.notices.get()
    }

    pub fn success(&self, message: impl Into<String>) {
        self.push(NoticeKind::Success, message.into());
    }

    pub fn error(&self, message: impl Into<String>) {
        self.push(NoticeKind::Error, message.into());
    }

    fn push(&self, kind: NoticeKind, message: String) {
        let id = self.next_id.get_value();
        self.next_id.set_value(id.wrapping_add(1));
        self.set_notices.update(|notices| {
            notices.push(Notice { id, kind, message });
        });

        let set_notices = self.set_notices;
        spawn_local(async move {
            TimeoutFuture::new(DISMISS_MS).await;
            set_notices.update(|notices| notices.retain(|notice| notice.id != id));
        });
    }
}

impl Default for Notifier {
    fn default() -> Self {
        Self::new()
    }
}

/// Get the notifier from context
pub fn use_notifier() -> Notifier {
    expect_context::<Notifier>()
}
