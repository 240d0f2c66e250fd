use dioxus::prelude::*;

use crate::shared::hooks::{use_toaster, Toaster};
use crate::shared::state::Toast;

/// Renders the toasts emitted through the layout's `Toaster`
#[component]
pub fn ToastHost() -> Element {
    let toaster = use_toaster();
    let toasts = toaster.toasts();

    rsx! {
        div { class: "c-toast-host", role: "status", aria_live: "polite",
            for toast in toasts {
                ToastItem { key: "{toast.id}", toast, toaster }
            }
        }
    }
}

#[component]
fn ToastItem(toast: Toast, toaster: Toaster) -> Element {
    let id = toast.id;
    let icon = toast.kind.icon();

    rsx! {
        div {
            class: toast.kind.class(),
            onclick: move |_| toaster.dismiss(id),
            span { class: "c-toast__icon", "{icon}" }
            span { class: "c-toast__message", "{toast.message}" }
        }
    }
}
