//! State and configuration behind the navigation bar, kept free of any view
//! code so it can be tested without a browser.

pub mod links;
pub mod menu;
pub mod scroll_lock;

pub use links::{LinkItem, NAV_LINKS};
pub use menu::{FocusTarget, MenuController, MenuEvent, MenuState, MenuTransition};
pub use scroll_lock::{DocumentRoot, ScrollLock, ScrollLockTarget};
