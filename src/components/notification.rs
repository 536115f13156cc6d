use std::time::Duration;

use leptos::leptos_dom::helpers::set_timeout;
use leptos::prelude::*;

/// A transient user-visible outcome message.
#[derive(Debug, Clone, PartialEq)]
pub struct Notice {
    pub message: String,
    pub kind: NoticeKind,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum NoticeKind {
    Success,
    Error,
}

impl Notice {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            kind: NoticeKind::Success,
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            kind: NoticeKind::Error,
        }
    }
}

/// Toast that renders the current notice and dismisses it after 3 seconds.
#[component]
pub fn Notification(notice: RwSignal<Option<Notice>>) -> impl IntoView {
    Effect::new(move |_| {
        if notice.get().is_some() {
            set_timeout(move || notice.set(None), Duration::from_secs(3));
        }
    });

    view! {
        {move || notice.get().map(|n| {
            let class = match n.kind {
                NoticeKind::Success => "notification success",
                NoticeKind::Error => "notification error",
            };
            view! { <div class=class>{n.message}</div> }
        })}
    }
}
