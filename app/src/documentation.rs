//! `/documentation`: the launch pad with shared links, the team roster, the
//! handoff checklist and demo credentials.
//!
//! Deployment URLs come from [`select_site_config`] through a blocking
//! resource, so the server render and hydration agree on them.

pub mod clipboard;
pub mod content;

use icondata::{FiCopy, FiExternalLink, FiGithub, FiLinkedin, FiMail, FiShield};
use leptos::prelude::*;
use leptos_meta::{Title, TitleProps};

use self::content::{
    CREDENTIALS, ChecklistItem, Credential, HANDOFF_CHECKLIST, RESOURCE_LINKS, ResourceLink, TEAM, TeamMember,
    hero_links,
};
use crate::{
    api::select_site_config,
    components::{icons, loader},
    notify::Notifications,
    types::SiteConfig,
};

const CARD: &str = "p-6 rounded-3xl border shadow-md bg-background border-border/70";
const URL_CHIP: &str = "py-1 px-2 font-mono text-xs rounded-md border transition-colors border-border bg-background/60 hover:border-primary/50 hover:text-primary";

pub fn component() -> impl IntoView {
    let site = Resource::new_blocking(
        || (),
        |()| async move {
            select_site_config().await.unwrap_or_else(|err| {
                log::warn!("site config unavailable, using defaults: {err}");
                SiteConfig::default()
            })
        },
    );

    view! {
        {Title(TitleProps::builder().text("Documentation \u{2013} StyleGenie").build())}
        <div class="container flex flex-col gap-10 px-4 pt-8 pb-16 mx-auto">
            <Suspense fallback=loader::component>
                {move || Suspend::new(async move {
                    let site = site.await;
                    view! {
                        {hero(&site)}
                        {team_section()}
                        <section class="grid gap-6 lg:grid-cols-3">
                            {links_overview(&site)}
                            {checklist_panel()}
                        </section>
                        {credentials_section()}
                    }
                })}
            </Suspense>
        </div>
    }
}

fn external_link(href: String, class: &'static str, children: impl IntoView + 'static) -> impl IntoView {
    view! {
        <a href=href target="_blank" rel="noreferrer" class=class>
            {children}
        </a>
    }
}

fn hero(site: &SiteConfig) -> impl IntoView + use<> {
    let buttons = hero_links()
        .map(|link| match link.url(site) {
            Some(url) => external_link(
                url.to_owned(),
                "inline-flex gap-2 items-center py-2.5 px-5 font-semibold text-white rounded-md bg-primary hover:bg-primary/90",
                (icons::icon(FiExternalLink, "size-4"), link.title),
            )
            .into_any(),
            None => view! {
                <button
                    type="button"
                    disabled
                    class="inline-flex gap-2 items-center py-2.5 px-5 rounded-md border opacity-60 cursor-not-allowed border-border"
                >
                    {icons::icon(FiShield, "size-4")}
                    {format!("{} (add link)", link.title)}
                </button>
            }
            .into_any(),
        })
        .collect_view();

    let live_links = [
        ("Live API base:", site.api_base_url.clone()),
        ("Frontend URL:", site.frontend_base_url.clone()),
        ("Repository:", site.repository_url.clone()),
    ]
    .into_iter()
    .map(|(caption, url)| {
        view! {
            <div class="flex gap-2 items-center">
                {icons::icon(if caption == "Repository:" { FiGithub } else { FiShield }, "size-4 text-primary")}
                <span>{caption}</span>
                {external_link(url.clone(), URL_CHIP, url)}
            </div>
        }
    })
    .collect_view();

    view! {
        <section class="flex flex-col gap-6 p-8 rounded-3xl border shadow-lg bg-gradient-to-br from-primary/5 to-orange-50 border-border/70">
            <div class="flex flex-col gap-4">
                <span class="py-1 px-2 text-xs font-semibold tracking-wide uppercase rounded-md w-fit bg-muted">
                    "Delivery Source of Truth"
                </span>
                <h1 class="text-4xl font-bold leading-tight md:text-5xl">"Documentation & Launch Pad"</h1>
                <p class="max-w-3xl text-lg text-muted-foreground">
                    "Keep every stakeholder in-sync with the same set of links, demo logins, and handoff expectations. Update the env vars referenced on this page to refresh the live data."
                </p>
            </div>
            <div class="flex flex-wrap gap-3">{buttons}</div>
            <div class="flex flex-wrap gap-4 items-center text-sm text-muted-foreground">{live_links}</div>
        </section>
    }
}

fn team_section() -> impl IntoView {
    view! {
        <section class="flex flex-col gap-6" aria-labelledby="team-heading">
            <div>
                <h2 id="team-heading" class="text-2xl font-bold">"Meet the Team"</h2>
                <p class="text-muted-foreground">"The people building StyleGenie end to end."</p>
            </div>
            <div class="grid gap-4 sm:grid-cols-2 lg:grid-cols-4">
                {TEAM.iter().map(|member| team_card(*member)).collect_view()}
            </div>
        </section>
    }
}

fn team_card(member: TeamMember) -> impl IntoView {
    let profile = |href: Option<&'static str>, glyph: icondata::Icon, label: &'static str| {
        href.map(|href| {
            view! {
                <a href=href target="_blank" rel="noreferrer" aria-label=label class="hover:text-primary">
                    {icons::icon(glyph, "size-4")}
                </a>
            }
        })
    };

    view! {
        <article class=CARD>
            <h3 class="font-semibold">{member.name}</h3>
            <p class="text-sm text-primary">{member.role}</p>
            <p class="mt-1 text-xs text-muted-foreground">
                {format!("{} \u{b7} {}", member.team, member.university)}
            </p>
            <p class="text-xs text-muted-foreground">{member.subject}</p>
            <ul class="flex flex-wrap gap-1 mt-3">
                {member
                    .skills
                    .iter()
                    .map(|skill| view! { <li class="py-0.5 px-2 text-xs rounded-full bg-muted">{*skill}</li> })
                    .collect_view()}
            </ul>
            <ul class="pl-4 mt-3 text-sm list-disc text-muted-foreground">
                {member.responsibilities.iter().map(|item| view! { <li>{*item}</li> }).collect_view()}
            </ul>
            <div class="flex gap-3 items-center mt-4 text-muted-foreground">
                <a href=format!("mailto:{}", member.email) aria-label=format!("Email {}", member.name) class="hover:text-primary">
                    {icons::icon(FiMail, "size-4")}
                </a>
                {profile(member.github, FiGithub, "GitHub profile")}
                {profile(member.linkedin, FiLinkedin, "LinkedIn profile")}
            </div>
        </article>
    }
}

fn links_overview(site: &SiteConfig) -> impl IntoView + use<> {
    view! {
        <div class=format!("lg:col-span-2 {CARD}")>
            <h2 class="text-xl font-semibold">"Design & Product Links"</h2>
            <p class="mb-4 text-sm text-muted-foreground">
                "Main artifacts for architecture, research, and stakeholder reviews."
            </p>
            <div class="flex flex-col gap-4">
                {RESOURCE_LINKS.iter().map(|link| link_card(*link, link.url(site).map(str::to_owned))).collect_view()}
            </div>
        </div>
    }
}

fn link_card(link: ResourceLink, url: Option<String>) -> impl IntoView {
    let missing = url.is_none();
    let action = match url {
        Some(url) => external_link(
            url,
            "inline-flex gap-2 items-center py-1.5 px-3 text-sm rounded-md border border-border hover:bg-muted",
            (icons::icon(FiExternalLink, "size-4"), "Open artifact"),
        )
        .into_any(),
        None => view! {
            <span class="py-0.5 px-2 text-xs font-semibold text-rose-600 rounded-md bg-muted">"Missing link"</span>
        }
        .into_any(),
    };

    view! {
        <div class="flex flex-col gap-4 p-4 rounded-2xl border border-border/70">
            <div class="flex flex-wrap gap-4 justify-between">
                <div class="flex gap-3 items-start">
                    <div class=format!("flex justify-center items-center text-white rounded-2xl size-12 {}", link.kind.tile_class())>
                        {icons::icon(link.kind.icon(), "size-5")}
                    </div>
                    <div>
                        <h3 class="text-lg font-semibold">{link.title}</h3>
                        <p class="text-sm text-muted-foreground">{link.description}</p>
                    </div>
                </div>
                <span class="py-0.5 px-2 text-xs rounded-md border h-fit border-border">
                    {format!("Owner: {}", link.owner)}
                </span>
            </div>
            <div class="flex flex-wrap gap-3 justify-between items-center">{action}</div>
            {missing.then(|| view! {
                <div class="flex flex-col gap-1 text-xs text-muted-foreground">
                    <p>{link.instructions}</p>
                    <p class="text-[11px] opacity-70">{format!("Example: {}", link.example)}</p>
                </div>
            })}
        </div>
    }
}

fn checklist_panel() -> impl IntoView {
    view! {
        <div class=CARD>
            <h2 class="text-xl font-semibold">"Handoff Checklist"</h2>
            <p class="mb-4 text-sm text-muted-foreground">"Track what\u{2019}s ready before demos or go-live."</p>
            <div class="flex flex-col gap-4">
                {HANDOFF_CHECKLIST.iter().map(|item| checklist_card(*item)).collect_view()}
            </div>
        </div>
    }
}

fn checklist_card(item: ChecklistItem) -> impl IntoView {
    view! {
        <div class="flex flex-col gap-2 p-4 rounded-2xl border border-border/70 bg-muted/30">
            <div class="flex gap-3 justify-between items-center">
                <h3 class="font-semibold">{item.title}</h3>
                <span class=format!("inline-flex gap-1 items-center py-0.5 px-2 text-xs rounded-md border {}", item.status.badge_class())>
                    {icons::icon(item.status.icon(), "size-3.5")}
                    {item.status.label()}
                </span>
            </div>
            <p class="text-sm text-muted-foreground">{item.description}</p>
        </div>
    }
}

fn credentials_section() -> impl IntoView {
    // Capability is only known in the browser; the server renders copy buttons disabled.
    let clipboard_ready = RwSignal::new(false);
    #[cfg(feature = "hydrate")]
    Effect::new(move |_| clipboard_ready.set(clipboard::BrowserClipboard::detect().is_some()));

    view! {
        <section>
            <div class="p-6 rounded-3xl border shadow-md bg-primary/15 border-primary/50">
                <h2 class="flex gap-2 items-center text-xl font-semibold">
                    {icons::icon(FiShield, "size-5 text-primary")}
                    "Demo Credentials"
                </h2>
                <p class="mb-4 text-sm text-muted-foreground">"Shared logins for QA, stakeholders, and investors."</p>
                <div class="flex flex-col gap-4">
                    {CREDENTIALS.iter().map(|entry| credential_card(*entry, clipboard_ready)).collect_view()}
                </div>
            </div>
        </section>
    }
}

fn credential_card(entry: Credential, clipboard_ready: RwSignal<bool>) -> impl IntoView {
    view! {
        <div class="flex flex-col gap-4 p-4 rounded-2xl border border-border/70 bg-muted/20">
            <div class="flex flex-wrap gap-3 justify-between items-start">
                <div>
                    <h3 class="text-lg font-semibold">{entry.role}</h3>
                    <p class="text-sm text-muted-foreground">{entry.notes}</p>
                </div>
                <span class="py-0.5 px-2 text-xs font-semibold text-white rounded-md bg-primary">{entry.environment}</span>
            </div>
            <div class="grid gap-3 text-sm sm:grid-cols-2">
                {credential_field("Email", entry.email, format!("{} email", entry.role), clipboard_ready)}
                {credential_field("Password", entry.password, format!("{} password", entry.role), clipboard_ready)}
            </div>
            {entry.instructions.map(|text| view! { <p class="text-xs text-muted-foreground">{text}</p> })}
        </div>
    }
}

fn credential_field(
    caption: &'static str,
    value: Option<&'static str>,
    copy_label: String,
    clipboard_ready: RwSignal<bool>,
) -> impl IntoView {
    let notifications = Notifications::from_context();
    let aria_label = format!("Copy {copy_label}");

    let on_copy = move |_: leptos::ev::MouseEvent| spawn_copy(value, copy_label.clone(), notifications);

    view! {
        <div class="flex flex-col gap-1">
            <p class="text-xs tracking-wide uppercase text-muted-foreground">{caption}</p>
            <div class="flex gap-2 items-center">
                <code class="flex-1 py-1 px-2 text-xs rounded-md border bg-background border-border">
                    {value.unwrap_or("Set in .env")}
                </code>
                <button
                    type="button"
                    class="p-2 rounded-md hover:bg-muted disabled:opacity-40"
                    aria-label=aria_label
                    disabled=move || value.is_none() || !clipboard_ready.get()
                    on:click=on_copy
                >
                    {icons::icon(FiCopy, "size-4")}
                </button>
            </div>
        </div>
    }
}

#[cfg_attr(not(feature = "hydrate"), allow(unused_variables))]
fn spawn_copy(value: Option<&'static str>, label: String, notifications: Notifications) {
    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        let clipboard = clipboard::BrowserClipboard::detect();
        clipboard::copy_credential(value, &label, clipboard.as_ref(), &notifications).await;
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render(view: impl FnOnce() -> AnyView) -> String {
        Owner::new().with(|| {
            Notifications::provide();
            view().to_html()
        })
    }

    #[test]
    fn configured_hero_links_open_in_a_new_tab() {
        let html = render(|| hero(&SiteConfig::default()).into_any());
        assert!(html.contains("System Design (LLD + HLD)"));
        assert!(html.contains(r#"target="_blank""#));
        assert!(html.contains(r#"rel="noreferrer""#));
        assert!(html.contains("(add link)"));
    }

    #[test]
    fn missing_artifact_shows_setup_instructions() {
        let link = RESOURCE_LINKS[2];
        let html = render(|| link_card(link, None).into_any());
        assert!(html.contains("Missing link"));
        assert!(html.contains("PITCH_DECK_URL"));
        assert!(html.contains("Example: "));

        let html = render(|| link_card(link, Some("https://deck.example".to_owned())).into_any());
        assert!(html.contains("Open artifact"));
        assert!(!html.contains("Missing link"));
    }

    #[test]
    fn copy_buttons_render_disabled_on_the_server() {
        let html = render(|| credentials_section().into_any());
        assert!(html.contains("Copy Stylist email"));
        assert!(html.contains("disabled"));
        assert!(html.contains("testuser@gmail.com"));
    }

    #[test]
    fn checklist_shows_status_labels() {
        let html = render(|| checklist_panel().into_any());
        assert!(html.contains("Create Video Demo"));
        assert!(html.contains("Done"));
    }
}
