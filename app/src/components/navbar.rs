//! Sticky, session-aware top navigation bar with a collapsible mobile menu.
//!
//! All menu behaviour goes through a [`MenuController`]; this module only
//! wires browser events into it and renders the state it reports back.

use icondata::{FiChevronDown, FiLogOut, FiMenu, FiStar, FiX};
use leptos::{html, prelude::*};
use leptos_router::{
    NavigateOptions,
    hooks::{use_location, use_navigate},
};

use crate::{
    auth::{AuthContext, Session, settle_logout},
    components::icons,
    navigation::{DocumentRoot, FocusTarget, LinkItem, MenuController, MenuEvent, MenuState, NAV_LINKS},
    notify::Notifications,
};

pub const MOBILE_MENU_ID: &str = "primary-mobile-menu";

const LINK_ACTIVE: &str =
    "flex gap-2 items-center py-2 px-3 text-sm font-medium rounded-md transition-colors text-primary bg-primary/10";
const LINK_IDLE: &str = "flex gap-2 items-center py-2 px-3 text-sm font-medium rounded-md transition-colors text-muted-foreground hover:text-foreground hover:bg-muted";
const MOBILE_ACTIVE: &str =
    "flex justify-between items-center py-3 px-3 rounded-md text-primary bg-primary/10";
const MOBILE_IDLE: &str =
    "flex justify-between items-center py-3 px-3 rounded-md text-foreground hover:bg-muted";
const PRIMARY_BUTTON: &str = "inline-flex gap-2 justify-center items-center py-2 px-4 text-sm font-semibold text-white rounded-md shadow-sm bg-primary hover:bg-primary/90";
const OUTLINE_BUTTON: &str = "inline-flex gap-2 justify-center items-center py-2 px-4 text-sm font-medium rounded-md border border-border hover:bg-muted";

fn nav_class(scrolled: bool) -> &'static str {
    if scrolled {
        "sticky top-0 z-40 border-b backdrop-blur transition-shadow bg-background/90 border-border shadow-md"
    } else {
        "sticky top-0 z-40 border-b backdrop-blur transition-shadow bg-background/90 border-border shadow-none"
    }
}

fn link_icon(link: LinkItem) -> Option<icondata::Icon> {
    match link.path {
        "/recommendations" => Some(FiStar),
        _ => None,
    }
}

/// Only a change of path counts; the first reading after mount never does.
fn is_route_change(previous: Option<&str>, current: &str) -> bool {
    previous.is_some_and(|previous| previous != current)
}

/// Moves keyboard focus on the frame after a menu transition, once the mobile
/// menu has been mounted or removed.
#[derive(Clone, Copy)]
struct BrowserFocus {
    toggle: NodeRef<html::Button>,
    menu: NodeRef<html::Div>,
}

impl FocusTarget for BrowserFocus {
    fn focus_first_link(&self) {
        let menu = self.menu;
        request_animation_frame(move || {
            use leptos::wasm_bindgen::JsCast;

            let first = menu
                .get_untracked()
                .and_then(|menu| menu.query_selector("a[href]").ok().flatten())
                .and_then(|link| link.dyn_into::<web_sys::HtmlElement>().ok());
            if let Some(link) = first {
                _ = link.focus();
            }
        });
    }

    fn focus_toggle(&self) {
        let toggle = self.toggle;
        request_animation_frame(move || {
            if let Some(button) = toggle.get_untracked() {
                _ = button.focus();
            }
        });
    }
}

pub fn component() -> impl IntoView {
    let auth = AuthContext::from_context();
    let notifications = Notifications::from_context();
    let location = use_location();
    let navigate = use_navigate();

    let toggle_ref = NodeRef::<html::Button>::new();
    let menu_ref = NodeRef::<html::Div>::new();
    let menu = RwSignal::new(MenuState::default());
    let account_open = RwSignal::new(false);
    let controller = StoredValue::new_local(MenuController::new(
        DocumentRoot,
        BrowserFocus {
            toggle: toggle_ref,
            menu: menu_ref,
        },
    ));

    let dispatch = move |event: MenuEvent| {
        if let Some(state) = controller.try_update_value(|controller| controller.dispatch(event)) {
            menu.set(state);
        }
    };
    on_cleanup(move || controller.update_value(MenuController::release));

    Effect::new(move |previous: Option<String>| {
        let path = location.pathname.get();
        if is_route_change(previous.as_deref(), &path) {
            account_open.set(false);
            dispatch(MenuEvent::RouteChanged);
        }
        path
    });

    #[cfg(feature = "hydrate")]
    {
        use leptos::ev;

        let scroll_offset = || window().scroll_y().unwrap_or(0.0);
        Effect::new(move |_| dispatch(MenuEvent::Scrolled(scroll_offset())));

        let scroll = window_event_listener(ev::scroll, move |_| {
            dispatch(MenuEvent::Scrolled(scroll_offset()));
        });
        let keydown = window_event_listener(ev::keydown, move |event| {
            if event.key() == "Escape" {
                account_open.set(false);
                dispatch(MenuEvent::Escape);
            }
        });
        on_cleanup(move || {
            scroll.remove();
            keydown.remove();
        });
    }

    Effect::new(move |_| {
        let Some(result) = auth.logout_result() else {
            return;
        };
        let navigate = navigate.clone();
        untrack(move || {
            settle_logout(result, &notifications, || {
                auth.clear();
                navigate("/", NavigateOptions::default());
            });
        });
    });

    let current_path = location.pathname;
    let is_open = Signal::derive(move || menu.get().is_open);
    let is_scrolled = Signal::derive(move || menu.get().is_scrolled);
    let close_menu = move || dispatch(MenuEvent::LinkActivated);
    let start_logout = move || {
        auth.logout();
    };
    let logout_pending = Signal::derive(move || auth.logout_pending());

    let bar = view! {
        {brand()}
        {primary_links(current_path)}
        <div class="hidden gap-2 items-center md:flex">
            <Transition fallback=|| ()>
                {move || {
                    let session = auth.session();
                    if session.is_authenticated() {
                        account_menu(session, account_open, start_logout, logout_pending).into_any()
                    } else {
                        guest_actions(|| ()).into_any()
                    }
                }}
            </Transition>
        </div>
        {menu_toggle(is_open, toggle_ref, move || dispatch(MenuEvent::Toggle))}
    };

    let panel = view! {
        <Show when=move || is_open.get()>
            {mobile_panel(
                menu_ref,
                view! {
                    <ul class="flex flex-col gap-1">
                        {NAV_LINKS
                            .iter()
                            .map(|link| mobile_link(*link, current_path, close_menu))
                            .collect_view()}
                    </ul>
                    <Transition fallback=|| ()>
                        {move || {
                            let session = auth.session();
                            if session.is_authenticated() {
                                mobile_account_actions(session, close_menu, start_logout, logout_pending)
                                    .into_any()
                            } else {
                                guest_actions(close_menu).into_any()
                            }
                        }}
                    </Transition>
                },
            )}
        </Show>
    };

    nav_shell(is_scrolled, bar, panel)
}

/// The `<nav>` landmark: skip link first, then the bar, then the mobile panel.
fn nav_shell(scrolled: Signal<bool>, bar: impl IntoView, panel: impl IntoView) -> impl IntoView {
    view! {
        <nav role="navigation" aria-label="Primary" class=move || nav_class(scrolled.get())>
            <a
                href="#main"
                class="sr-only focus:not-sr-only focus:absolute focus:top-2 focus:left-2 focus:z-50 focus:py-2 focus:px-3 focus:rounded-md focus:bg-background"
            >
                "Skip to content"
            </a>
            <div class="container px-4 mx-auto">
                <div class="flex justify-between items-center h-16">{bar}</div>
                {panel}
            </div>
        </nav>
    }
}

fn brand() -> impl IntoView {
    view! {
        <a href="/" class="flex gap-2 items-center" aria-label="StyleGenie home">
            {icons::logo_mark("rounded-lg size-9")}
            <span class="text-lg font-bold tracking-tight">"StyleGenie"</span>
        </a>
    }
}

fn primary_links(current_path: Memo<String>) -> impl IntoView {
    view! {
        <ul class="hidden gap-1 items-center md:flex" role="menubar">
            {NAV_LINKS
                .iter()
                .map(|link| desktop_link(*link, current_path))
                .collect_view()}
        </ul>
    }
}

fn menu_toggle(
    open: Signal<bool>,
    node_ref: NodeRef<html::Button>,
    on_toggle: impl Fn() + Copy + Send + Sync + 'static,
) -> impl IntoView {
    view! {
        <button
            node_ref=node_ref
            type="button"
            class="inline-flex justify-center items-center p-2 rounded-md md:hidden hover:bg-muted"
            aria-controls=MOBILE_MENU_ID
            aria-expanded=move || open.get().to_string()
            on:click=move |_| on_toggle()
        >
            {move || icons::icon(if open.get() { FiX } else { FiMenu }, "size-6")}
            <span class="sr-only">{move || if open.get() { "Close menu" } else { "Open menu" }}</span>
        </button>
    }
}

fn mobile_panel(node_ref: NodeRef<html::Div>, content: impl IntoView) -> impl IntoView {
    view! {
        <div
            node_ref=node_ref
            id=MOBILE_MENU_ID
            role="dialog"
            aria-label="Mobile navigation"
            class="flex flex-col gap-4 pt-2 pb-4 border-t md:hidden border-border"
        >
            {content}
        </div>
    }
}

fn badge(label: &'static str) -> impl IntoView {
    view! {
        <span class="py-0.5 px-1.5 text-[10px] font-semibold uppercase rounded-full bg-primary/10 text-primary">
            {label}
        </span>
    }
}

// Plain anchors: the router still intercepts them, and `aria-current` comes
// from `LinkItem::is_active` so segment matching stays testable without a router.
fn desktop_link(link: LinkItem, current_path: Memo<String>) -> impl IntoView {
    let active = move || current_path.with(|path| link.is_active(path));

    view! {
        <li role="none">
            <a
                href=link.path
                role="menuitem"
                aria-current=move || active().then_some("page")
                class=move || if active() { LINK_ACTIVE } else { LINK_IDLE }
            >
                {link_icon(link).map(|glyph| icons::icon(glyph, "size-4 text-primary"))}
                <span>{link.label}</span>
                {link.badge.map(badge)}
            </a>
        </li>
    }
}

fn mobile_link(
    link: LinkItem,
    current_path: Memo<String>,
    on_activate: impl Fn() + Copy + Send + Sync + 'static,
) -> impl IntoView {
    let active = move || current_path.with(|path| link.is_active(path));

    view! {
        <li>
            <a
                href=link.path
                aria-current=move || active().then_some("page")
                class=move || if active() { MOBILE_ACTIVE } else { MOBILE_IDLE }
                on:click=move |_| on_activate()
            >
                <span class="flex gap-2 items-center font-medium">
                    {link_icon(link).map(|glyph| icons::icon(glyph, "size-4 text-primary"))}
                    {link.label}
                </span>
                <span class="flex gap-2 items-center">
                    {link.badge.map(badge)}
                    <Show when=active>
                        <span class="rounded-full size-1.5 bg-primary" aria-hidden="true"></span>
                    </Show>
                </span>
            </a>
        </li>
    }
}

/// Login and sign-up calls to action for visitors without a session.
fn guest_actions(on_activate: impl Fn() + Copy + Send + Sync + 'static) -> impl IntoView {
    view! {
        <div class="grid grid-cols-2 gap-2 md:flex">
            <a href="/login" class=OUTLINE_BUTTON on:click=move |_| on_activate()>
                "Login"
            </a>
            <a href="/register" class=PRIMARY_BUTTON on:click=move |_| on_activate()>
                "Get Started"
            </a>
        </div>
    }
}

fn account_menu(
    session: Session,
    open: RwSignal<bool>,
    on_logout: impl Fn() + Copy + Send + Sync + 'static,
    logout_pending: Signal<bool>,
) -> impl IntoView {
    let close = move |_: leptos::ev::MouseEvent| open.set(false);

    view! {
        <a href="/recommendations" class=format!("hidden lg:inline-flex {PRIMARY_BUTTON}")>
            {icons::icon(FiStar, "size-4")}
            "Generate Outfits"
        </a>
        <div class="relative">
            <button
                type="button"
                class="flex gap-2 items-center py-1.5 px-2 text-sm font-medium rounded-md hover:bg-muted"
                aria-haspopup="menu"
                aria-expanded=move || open.get().to_string()
                on:click=move |_| open.update(|open| *open = !*open)
            >
                <span class="inline-flex justify-center items-center font-semibold rounded-md size-8 bg-primary/10 text-primary">
                    {session.initial()}
                </span>
                <span class="truncate max-w-[12ch]">{session.greeting()}</span>
                {icons::icon(FiChevronDown, "size-4 opacity-70")}
            </button>
            <Show when=move || open.get()>
                <div class="fixed inset-0 z-40" aria-hidden="true" on:click=close></div>
                <div
                    role="menu"
                    aria-label="Account menu"
                    class="absolute right-0 z-50 py-1 mt-2 w-56 rounded-md border shadow-lg bg-background border-border"
                >
                    <p class="py-2 px-3 text-xs font-semibold uppercase text-muted-foreground">"My Account"</p>
                    <a role="menuitem" href="/dashboard" class="block py-2 px-3 text-sm hover:bg-muted" on:click=close>
                        "Dashboard"
                    </a>
                    <a role="menuitem" href="/recommendations" class="block py-2 px-3 text-sm hover:bg-muted" on:click=close>
                        "AI Styling"
                    </a>
                    <button
                        role="menuitem"
                        type="button"
                        class="flex gap-2 items-center py-2 px-3 w-full text-sm text-left text-rose-600 hover:bg-rose-50 disabled:opacity-50"
                        disabled=logout_pending
                        on:click=move |_| {
                            open.set(false);
                            on_logout();
                        }
                    >
                        {icons::icon(FiLogOut, "size-4")}
                        "Logout"
                    </button>
                </div>
            </Show>
        </div>
    }
}

fn mobile_account_actions(
    session: Session,
    on_activate: impl Fn() + Copy + Send + Sync + 'static,
    on_logout: impl Fn() + Copy + Send + Sync + 'static,
    logout_pending: Signal<bool>,
) -> impl IntoView {
    view! {
        <div class="grid grid-cols-2 gap-2">
            <a href="/dashboard" class=OUTLINE_BUTTON on:click=move |_| on_activate()>
                {session.short_name()}
            </a>
            <button
                type="button"
                class=OUTLINE_BUTTON
                disabled=logout_pending
                on:click=move |_| {
                    on_activate();
                    on_logout();
                }
            >
                "Logout"
            </button>
            <a href="/recommendations" class=format!("col-span-2 {PRIMARY_BUTTON}") on:click=move |_| on_activate()>
                {icons::icon(FiStar, "size-4")}
                "Generate Outfits"
            </a>
        </div>
    }
}
