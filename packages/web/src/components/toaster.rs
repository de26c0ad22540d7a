//! Toast notifications

use std::time::Duration;

use dioxus::prelude::*;
use waitlist_core::{Notice, NoticeTone};

use crate::state::use_notices;
use crate::time::sleep;

const TOAST_LIFETIME: Duration = Duration::from_secs(5);

#[component]
pub fn Toaster() -> Element {
    let notices = use_notices();
    let items = notices.items.read().clone();

    rsx! {
        div {
            class: "fixed bottom-4 right-4 z-50 flex flex-col gap-2 w-80",
            for (id, notice) in items {
                Toast { key: "{id}", id, notice }
            }
        }
    }
}

/// One toast. Dismisses itself after a few seconds or on click.
#[component]
fn Toast(id: u64, notice: Notice) -> Element {
    let notices = use_notices();

    use_future(move || async move {
        sleep(TOAST_LIFETIME).await;
        notices.dismiss(id);
    });

    let tone = match notice.tone {
        NoticeTone::Default => "bg-zinc-900 border-zinc-700 text-white",
        NoticeTone::Success => "bg-zinc-900 border-lime-400 text-white",
        NoticeTone::Destructive => "bg-red-600 border-red-700 text-white",
    };

    rsx! {
        div {
            class: "rounded-lg border p-4 shadow-lg cursor-pointer {tone}",
            onclick: move |_| notices.dismiss(id),
            p { class: "font-semibold text-sm", "{notice.title}" }
            p { class: "text-sm opacity-90", "{notice.description}" }
        }
    }
}
