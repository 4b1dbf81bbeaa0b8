use dioxus::prelude::*;

use crate::{client::store::toast::ToastState, model::record_list::NoticeKind};

/// Stack of pending notices; clicking one dismisses it
#[component]
pub fn Toasts() -> Element {
    let mut toasts = use_context::<Signal<ToastState>>();
    let state = toasts.read();

    rsx!(
        div { class: "toast toast-end z-50",
            for toast in state.toasts().iter().cloned() {
                div {
                    key: "{toast.id}",
                    class: match toast.notice.kind {
                        NoticeKind::Success => "alert alert-success cursor-pointer",
                        NoticeKind::Error => "alert alert-error cursor-pointer",
                    },
                    onclick: move |_| toasts.write().dismiss(toast.id),
                    div { class: "flex flex-col",
                        span { class: "font-bold", "{toast.notice.title}" }
                        span { "{toast.notice.message}" }
                    }
                }
            }
        }
    )
}
