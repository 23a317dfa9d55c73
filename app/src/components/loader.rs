//! Placeholder shown while a blocking resource resolves.

use leptos::{
    html::{div, p},
    prelude::*,
};

/// Spinning ring with a short, screen-reader friendly status line.
pub fn component() -> impl IntoView {
    div()
        .class("flex flex-col gap-2 justify-center items-center py-16")
        .attr("role", "status")
        .attr("aria-live", "polite")
        .child((
            div().class("rounded-full border-4 animate-spin size-8 border-primary/30 border-t-primary"),
            p().class("text-sm italic text-muted-foreground")
                .child("Loading..."),
        ))
}
