// Core application modules and components
use crate::components::{error_template, navbar, toaster};
use chrono::{Datelike as _, Utc};
use leptos::{
    html::{a, body, div, footer, head, html, meta, p},
    prelude::*,
};
use leptos_meta::{MetaTags, Stylesheet, StylesheetProps, Title, TitleProps, provide_meta_context};
use leptos_router::{
    SsrMode, StaticSegment,
    components::{FlatRoutes, Route, Router},
};

pub mod api;
pub mod auth;
pub mod components;
pub mod documentation;
mod home;
pub mod navigation;
pub mod notify;
mod placeholder;
pub mod types;

pub fn shell(options: LeptosOptions) -> impl IntoView {
    // Provides context that manages stylesheets, titles, meta tags, etc.
    provide_meta_context();

    let html_comp = html().lang("en").child((
        head().child((
            meta().charset("utf-8"),
            meta()
                .name("viewport")
                .content("width=device-width, initial-scale=1"),
            HydrationScripts(HydrationScriptsProps::builder().options(options).build()),
            MetaTags(),
            Stylesheet(
                StylesheetProps::builder()
                    .id("leptos")
                    .href("/pkg/stylegenie.css")
                    .build(),
            ),
            Title(
                TitleProps::builder()
                    .text("StyleGenie \u{2013} AI-Powered Personal Styling")
                    .build(),
            ),
        )),
        body().class("antialiased bg-background text-foreground").child(self::component),
    ));

    view! {
        <!DOCTYPE html>
        {html_comp}
    }
}

#[must_use]
pub fn component() -> impl IntoView {
    notify::Notifications::provide();
    auth::AuthContext::provide();

    view! {
        <Router>
            <div class="flex flex-col min-h-screen font-sans">
                {navbar::component}
                <main id="main" tabindex="-1" class="flex-1 focus:outline-none">
                    <FlatRoutes fallback=|| {
                        let mut outside_errors = Errors::default();
                        outside_errors.insert_with_default_key(error_template::AppError::NotFound);
                        error_template::component(Some(outside_errors), None)
                    }>
                        <Route path=StaticSegment("") view=home::component/>
                        <Route path=StaticSegment("documentation") view=documentation::component ssr=SsrMode::Async/>
                        <Route path=StaticSegment("stylists") view=|| placeholder::STYLISTS.render()/>
                        <Route path=StaticSegment("dashboard") view=|| placeholder::DASHBOARD.render()/>
                        <Route path=StaticSegment("recommendations") view=|| placeholder::RECOMMENDATIONS.render()/>
                        <Route path=StaticSegment("login") view=|| placeholder::LOGIN.render()/>
                        <Route path=StaticSegment("register") view=|| placeholder::REGISTER.render()/>
                    </FlatRoutes>
                </main>
                {footer_component()}
                {toaster::component}
            </div>
        </Router>
    }
}

fn footer_component() -> impl IntoView {
    footer()
        .class("py-6 text-sm text-center border-t border-border text-muted-foreground")
        .child(
            div().class("flex flex-col gap-1 justify-center items-center").child(
                p().child((
                    format!("\u{a9} {} StyleGenie \u{b7} ", Utc::now().year()),
                    a()
                        .href(types::REPOSITORY_URL)
                        .attr("target", "_blank")
                        .attr("rel", "noreferrer")
                        .class("hover:underline text-primary")
                        .child("Source on GitHub"),
                )),
            ),
        )
}
