//! Drives the navigation bar's state machine through realistic visits using
//! only the public API, with in-memory stand-ins for the document and focus.

use std::cell::RefCell;
use std::rc::Rc;

use app::navigation::{FocusTarget, MenuController, MenuEvent, NAV_LINKS, ScrollLockTarget};
use assert_matches::assert_matches;

#[derive(Clone, Default)]
struct Page {
    classes: Rc<RefCell<Vec<String>>>,
    focus: Rc<RefCell<Vec<&'static str>>>,
}

impl Page {
    fn locked(&self) -> bool {
        self.classes.borrow().iter().any(|class| class == "overflow-hidden")
    }
}

impl ScrollLockTarget for Page {
    fn add_marker(&self, marker: &str) {
        self.classes.borrow_mut().push(marker.to_owned());
    }

    fn remove_marker(&self, marker: &str) {
        self.classes.borrow_mut().retain(|class| class != marker);
    }
}

impl FocusTarget for Page {
    fn focus_first_link(&self) {
        self.focus.borrow_mut().push("first-link");
    }

    fn focus_toggle(&self) {
        self.focus.borrow_mut().push("toggle");
    }
}

#[test]
fn mobile_visitor_opens_menu_and_follows_a_link() {
    let page = Page::default();
    let mut menu = MenuController::new(page.clone(), page.clone());

    let state = menu.dispatch(MenuEvent::Scrolled(120.0));
    assert!(state.is_scrolled);
    assert!(!state.is_open);

    let state = menu.dispatch(MenuEvent::Toggle);
    assert!(state.is_open);
    assert!(page.locked());

    // Clicking a link closes the menu, then the router reports the new path.
    menu.dispatch(MenuEvent::LinkActivated);
    let state = menu.dispatch(MenuEvent::RouteChanged);
    assert!(!state.is_open);
    assert!(state.is_scrolled);
    assert!(!page.locked());
    assert_eq!(*page.focus.borrow(), ["first-link", "toggle"]);
}

#[test]
fn escape_then_unmount_leaves_no_lock_behind() {
    let page = Page::default();
    {
        let mut menu = MenuController::new(page.clone(), page.clone());
        menu.dispatch(MenuEvent::Toggle);
        menu.dispatch(MenuEvent::Escape);
        menu.dispatch(MenuEvent::Toggle);
        assert!(page.locked());
    }
    assert!(!page.locked());
    assert!(page.classes.borrow().is_empty());
}

#[test]
fn documentation_subpages_highlight_documentation() {
    let active: Vec<_> = NAV_LINKS
        .iter()
        .filter(|link| link.is_active("/documentation/setup"))
        .map(|link| link.label)
        .collect();
    assert_matches!(active.as_slice(), ["Documentation"]);

    assert!(NAV_LINKS.iter().all(|link| !link.is_active("/")));
}
