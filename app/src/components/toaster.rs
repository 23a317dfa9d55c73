use leptos::{
    html::{button, div},
    prelude::*,
};

use crate::notify::{Notifications, Toast, ToastKind};

fn toast_class(kind: ToastKind) -> &'static str {
    match kind {
        ToastKind::Success => {
            "py-3 px-4 text-sm text-left rounded-lg border shadow-lg bg-emerald-50 text-emerald-800 border-emerald-200"
        }
        ToastKind::Failure => {
            "py-3 px-4 text-sm text-left rounded-lg border shadow-lg bg-rose-50 text-rose-800 border-rose-200"
        }
    }
}

/// Stack of live toasts in the bottom-right corner; clicking one dismisses it.
pub fn component() -> impl IntoView {
    let notifications = Notifications::from_context();

    div()
        .class("flex fixed right-4 bottom-4 z-50 flex-col gap-2 max-w-sm")
        .attr("role", "status")
        .attr("aria-live", "polite")
        .child(For(
            ForProps::builder()
                .each(move || notifications.toasts())
                .key(|toast: &Toast| toast.id)
                .children(move |toast: Toast| {
                    let id = toast.id;
                    button()
                        .class(toast_class(toast.kind))
                        .on(leptos::ev::click, move |_| notifications.dismiss(id))
                        .child(toast.message)
                })
                .build(),
        ))
}
