//! Stand-in pages for routes served by other parts of the product.
//!
//! They exist so every navigation target resolves and the active-link
//! highlighting can be exercised end to end.

use leptos::{
    html::{a, h1, p, section},
    prelude::*,
};
use leptos_meta::{Title, TitleProps};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Placeholder {
    pub title: &'static str,
    pub summary: &'static str,
}

pub const STYLISTS: Placeholder = Placeholder {
    title: "Find Stylists",
    summary: "Browse professional stylists and book a session.",
};
pub const DASHBOARD: Placeholder = Placeholder {
    title: "My Wardrobe",
    summary: "Your digitized wardrobe and saved outfits.",
};
pub const RECOMMENDATIONS: Placeholder = Placeholder {
    title: "AI Styling",
    summary: "Outfit recommendations generated from your wardrobe.",
};
pub const LOGIN: Placeholder = Placeholder {
    title: "Login",
    summary: "Sign in to your StyleGenie account.",
};
pub const REGISTER: Placeholder = Placeholder {
    title: "Get Started",
    summary: "Create a StyleGenie account.",
};

impl Placeholder {
    pub fn render(self) -> impl IntoView {
        section().class("flex flex-col gap-4 py-20 px-4 mx-auto max-w-2xl text-center").child((
            Title(
                TitleProps::builder()
                    .text(format!("{} \u{2013} StyleGenie", self.title))
                    .build(),
            ),
            h1().class("text-3xl font-bold").child(self.title),
            p().class("text-muted-foreground").child(self.summary),
            a().href("/").class("font-semibold text-primary hover:underline").child("Back to home"),
        ))
    }
}
