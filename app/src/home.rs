//! Landing page with the product pitch and the two entry points.

use icondata::{FiBookOpen, FiStar};
use leptos::{
    html::{a, div, h1, p, section, span},
    prelude::*,
};
use leptos_meta::{Title, TitleProps};

use crate::components::icons;

pub fn component() -> impl IntoView {
    section().class("flex flex-col gap-8 items-center py-20 px-4 mx-auto max-w-3xl text-center").child((
        Title(
            TitleProps::builder()
                .text("StyleGenie \u{2013} AI-Powered Personal Styling")
                .build(),
        ),
        span()
            .class("py-1 px-3 text-xs font-semibold tracking-wide uppercase rounded-full bg-primary/10 text-primary")
            .child("AI-Powered Personal Styling"),
        h1().class("text-4xl font-bold leading-tight md:text-6xl").child("Your wardrobe, styled by AI and real stylists"),
        p().class("text-lg text-muted-foreground").child(
            "Digitize your closet, get outfit recommendations tailored to you, and book sessions with professional stylists.",
        ),
        div().class("flex flex-wrap gap-3 justify-center").child((
            a().href("/recommendations")
                .class("inline-flex gap-2 items-center py-3 px-6 font-semibold text-white rounded-md shadow-sm bg-primary hover:bg-primary/90")
                .child((icons::icon(FiStar, "size-4"), "Generate Outfits")),
            a().href("/documentation")
                .class("inline-flex gap-2 items-center py-3 px-6 font-medium rounded-md border border-border hover:bg-muted")
                .child((icons::icon(FiBookOpen, "size-4"), "Read the docs")),
        )),
    ))
}
