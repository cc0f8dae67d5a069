use std::sync::atomic::{AtomicU64, Ordering};

use dioxus::prelude::*;
use gloo_timers::future::TimeoutFuture;

const TOAST_MS: u32 = 4000;

static TOAST_SEQ: AtomicU64 = AtomicU64::new(0);

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toast {
    pub title: String,
    pub body: String,
    seq: u64,
}

/// Show a toast and arm its dismiss timer. Each toast carries a sequence
/// number so an expiring timer only clears the toast it was armed for,
/// never one shown after it.
pub fn show_toast(mut slot: Signal<Option<Toast>>, title: &str, body: &str) {
    let seq = TOAST_SEQ.fetch_add(1, Ordering::Relaxed) + 1;
    slot.set(Some(Toast {
        title: title.to_string(),
        body: body.to_string(),
        seq,
    }));

    wasm_bindgen_futures::spawn_local(async move {
        TimeoutFuture::new(TOAST_MS).await;
        let still_current = matches!(&*slot.peek(), Some(t) if t.seq == seq);
        if still_current {
            slot.set(None);
        }
    });
}

/// Renders the current toast, if any. Clicking it dismisses immediately.
#[component]
pub fn ToastHost(slot: Signal<Option<Toast>>) -> Element {
    let Some(toast) = slot.read().clone() else {
        return rsx! {};
    };

    rsx! {
        div { class: "toast", onclick: move |_| slot.set(None),
            strong { "{toast.title}" }
            p { "{toast.body}" }
        }
    }
}
