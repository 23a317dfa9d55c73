//! Open/closed state of the responsive menu and the side effects that follow
//! each transition.
//!
//! [`MenuState::apply`] is a pure reducer; [`MenuController`] owns the state
//! together with the host resources (scroll lock, focus) and runs the entry
//! effects of whichever transition the reducer reports.

use super::scroll_lock::{ScrollLock, ScrollLockTarget};

/// Scroll offset, in CSS pixels, past which the bar shows its drop shadow.
pub const SCROLL_SHADOW_THRESHOLD: f64 = 4.0;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct MenuState {
    pub is_open: bool,
    pub is_scrolled: bool,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum MenuEvent {
    /// The hamburger button was activated.
    Toggle,
    /// Escape was pressed anywhere in the document.
    Escape,
    /// The router reported a different path.
    RouteChanged,
    /// A link or action inside the open menu was activated.
    LinkActivated,
    /// The viewport scrolled to this vertical offset.
    Scrolled(f64),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MenuTransition {
    Opened,
    Closed,
}

pub fn is_scrolled_past(offset: f64) -> bool {
    offset > SCROLL_SHADOW_THRESHOLD
}

impl MenuState {
    /// Apply `event`, returning the open/closed transition it caused, if any.
    ///
    /// Scroll events only ever touch `is_scrolled` and never report a
    /// transition. Forced closes on an already closed menu are no-ops.
    pub fn apply(&mut self, event: MenuEvent) -> Option<MenuTransition> {
        match event {
            MenuEvent::Scrolled(offset) => {
                self.is_scrolled = is_scrolled_past(offset);
                None
            }
            MenuEvent::Toggle => Some(self.set_open(!self.is_open)),
            MenuEvent::Escape | MenuEvent::RouteChanged | MenuEvent::LinkActivated => {
                if self.is_open {
                    Some(self.set_open(false))
                } else {
                    None
                }
            }
        }
    }

    fn set_open(&mut self, open: bool) -> MenuTransition {
        self.is_open = open;
        if open {
            MenuTransition::Opened
        } else {
            MenuTransition::Closed
        }
    }
}

/// Where keyboard focus goes when the menu opens or closes.
pub trait FocusTarget {
    fn focus_first_link(&self);
    fn focus_toggle(&self);
}

/// Owns the menu state and the resources whose lifetime follows it.
///
/// The scroll lock lives exactly as long as the menu is open; dropping the
/// controller (component unmount) releases it whatever state it was in.
pub struct MenuController<T, F>
where
    T: ScrollLockTarget + Clone,
    F: FocusTarget,
{
    state: MenuState,
    lock_target: T,
    lock: Option<ScrollLock<T>>,
    focus: F,
}

impl<T, F> MenuController<T, F>
where
    T: ScrollLockTarget + Clone,
    F: FocusTarget,
{
    pub fn new(lock_target: T, focus: F) -> Self {
        Self {
            state: MenuState::default(),
            lock_target,
            lock: None,
            focus,
        }
    }

    pub fn state(&self) -> MenuState {
        self.state
    }

    /// Feed `event` through the reducer and run the effects of any transition.
    pub fn dispatch(&mut self, event: MenuEvent) -> MenuState {
        if let Some(transition) = self.state.apply(event) {
            log::debug!("mobile menu {transition:?} by {event:?}");
            match transition {
                MenuTransition::Opened => {
                    if self.lock.is_none() {
                        self.lock = Some(ScrollLock::acquire(self.lock_target.clone()));
                    }
                    self.focus.focus_first_link();
                }
                MenuTransition::Closed => {
                    self.lock = None;
                    self.focus.focus_toggle();
                }
            }
        }
        self.state
    }

    /// Drop the scroll lock without touching focus. Called on unmount.
    pub fn release(&mut self) {
        self.lock = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::navigation::scroll_lock::{SCROLL_LOCK_CLASS, testing::FakeClassList};
    use std::cell::RefCell;
    use std::rc::Rc;

    #[derive(Clone, Debug, PartialEq, Eq)]
    enum Focused {
        FirstLink,
        Toggle,
    }

    #[derive(Clone, Default)]
    struct FocusLog(Rc<RefCell<Vec<Focused>>>);

    impl FocusLog {
        fn entries(&self) -> Vec<Focused> {
            self.0.borrow().clone()
        }
    }

    impl FocusTarget for FocusLog {
        fn focus_first_link(&self) {
            self.0.borrow_mut().push(Focused::FirstLink);
        }

        fn focus_toggle(&self) {
            self.0.borrow_mut().push(Focused::Toggle);
        }
    }

    fn controller() -> (MenuController<FakeClassList, FocusLog>, FakeClassList, FocusLog) {
        let root = FakeClassList::default();
        let focus = FocusLog::default();
        (MenuController::new(root.clone(), focus.clone()), root, focus)
    }

    /// Small deterministic generator so the interleaving tests cover many
    /// sequences without a property-testing dependency.
    fn event_sequences(count: usize, len: usize) -> Vec<Vec<MenuEvent>> {
        let mut seed: u64 = 0x5eed_cafe;
        (0..count)
            .map(|_| {
                (0..len)
                    .map(|_| {
                        seed = seed.wrapping_mul(6_364_136_223_846_793_005).wrapping_add(1);
                        match (seed >> 33) % 5 {
                            0 | 1 => MenuEvent::Toggle,
                            2 => MenuEvent::Escape,
                            3 => MenuEvent::RouteChanged,
                            _ => MenuEvent::LinkActivated,
                        }
                    })
                    .collect()
            })
            .collect()
    }

    #[test]
    fn starts_closed_and_unscrolled() {
        assert_eq!(
            MenuState::default(),
            MenuState {
                is_open: false,
                is_scrolled: false
            }
        );
    }

    #[test]
    fn open_equals_parity_of_toggles_since_last_forced_close() {
        for events in event_sequences(64, 40) {
            let mut state = MenuState::default();
            let mut toggles_since_close = 0_usize;
            for event in events {
                state.apply(event);
                if event == MenuEvent::Toggle {
                    toggles_since_close += 1;
                } else {
                    toggles_since_close = 0;
                }
                assert_eq!(state.is_open, toggles_since_close % 2 == 1);
            }
        }
    }

    #[test]
    fn route_change_always_closes() {
        let mut state = MenuState::default();
        assert_eq!(state.apply(MenuEvent::RouteChanged), None);
        assert!(!state.is_open);

        state.apply(MenuEvent::Toggle);
        assert_eq!(
            state.apply(MenuEvent::RouteChanged),
            Some(MenuTransition::Closed)
        );
        assert!(!state.is_open);
    }

    #[test]
    fn escape_closes_only_when_open() {
        let mut state = MenuState::default();
        assert_eq!(state.apply(MenuEvent::Escape), None);
        assert_eq!(state, MenuState::default());

        state.apply(MenuEvent::Toggle);
        assert_eq!(state.apply(MenuEvent::Escape), Some(MenuTransition::Closed));
        assert!(!state.is_open);
    }

    #[test]
    fn link_activation_closes_the_menu() {
        let mut state = MenuState::default();
        state.apply(MenuEvent::Toggle);
        assert_eq!(
            state.apply(MenuEvent::LinkActivated),
            Some(MenuTransition::Closed)
        );
    }

    #[test]
    fn scroll_threshold_is_exclusive() {
        let mut state = MenuState::default();
        state.apply(MenuEvent::Scrolled(4.0));
        assert!(!state.is_scrolled);
        state.apply(MenuEvent::Scrolled(5.0));
        assert!(state.is_scrolled);
        state.apply(MenuEvent::Scrolled(0.0));
        assert!(!state.is_scrolled);
    }

    #[test]
    fn scrolling_never_changes_open_state() {
        let mut state = MenuState::default();
        state.apply(MenuEvent::Toggle);
        assert_eq!(state.apply(MenuEvent::Scrolled(120.0)), None);
        assert!(state.is_open);
    }

    #[test]
    fn lock_is_present_exactly_once_while_open() {
        for events in event_sequences(64, 40) {
            let (mut menu, root, _) = controller();
            for event in events {
                let state = menu.dispatch(event);
                let expected = usize::from(state.is_open);
                assert_eq!(root.count(SCROLL_LOCK_CLASS), expected, "after {event:?}");
            }
            drop(menu);
            assert_eq!(root.count(SCROLL_LOCK_CLASS), 0);
        }
    }

    #[test]
    fn release_drops_the_lock_while_open() {
        let (mut menu, root, focus) = controller();
        menu.dispatch(MenuEvent::Toggle);
        assert_eq!(root.count(SCROLL_LOCK_CLASS), 1);

        menu.release();
        assert_eq!(root.count(SCROLL_LOCK_CLASS), 0);
        assert_eq!(focus.entries(), [Focused::FirstLink]);
    }

    #[test]
    fn release_while_closed_is_a_no_op() {
        let (mut menu, root, _) = controller();
        menu.release();
        menu.release();
        assert_eq!(root.count(SCROLL_LOCK_CLASS), 0);
    }

    #[test]
    fn focus_moves_into_menu_and_back_to_toggle() {
        let (mut menu, _, focus) = controller();
        menu.dispatch(MenuEvent::Toggle);
        menu.dispatch(MenuEvent::Escape);
        menu.dispatch(MenuEvent::Escape);
        assert_eq!(focus.entries(), [Focused::FirstLink, Focused::Toggle]);
    }

    #[test]
    fn no_focus_effects_without_a_transition() {
        let (mut menu, _, focus) = controller();
        menu.dispatch(MenuEvent::RouteChanged);
        menu.dispatch(MenuEvent::Scrolled(10.0));
        assert!(focus.entries().is_empty());
        assert!(menu.state().is_scrolled);
    }
}
