//! Document-level scroll lock held while the mobile menu is open.
//!
//! The lock is a guard: acquiring it adds the marker class to the target and
//! dropping it removes the class again, so every exit path (toggle, Escape,
//! route change, unmount) releases it without extra bookkeeping.

/// Class applied to the document root while background scrolling is disabled.
pub const SCROLL_LOCK_CLASS: &str = "overflow-hidden";

/// Something that can carry the scroll-lock marker.
///
/// Implementations must be idempotent: adding a marker that is already
/// present, or removing one that is absent, has no further effect.
pub trait ScrollLockTarget {
    fn add_marker(&self, marker: &str);
    fn remove_marker(&self, marker: &str);
}

/// Guard that keeps [`SCROLL_LOCK_CLASS`] on its target for as long as it lives.
#[derive(Debug)]
#[must_use = "the scroll lock is released as soon as the guard is dropped"]
pub struct ScrollLock<T: ScrollLockTarget> {
    target: T,
}

impl<T: ScrollLockTarget> ScrollLock<T> {
    pub fn acquire(target: T) -> Self {
        target.add_marker(SCROLL_LOCK_CLASS);
        Self { target }
    }
}

impl<T: ScrollLockTarget> Drop for ScrollLock<T> {
    fn drop(&mut self) {
        self.target.remove_marker(SCROLL_LOCK_CLASS);
    }
}

/// The `<html>` element of the current document.
///
/// Only touched from client-side event handlers; during server rendering no
/// menu transition ever happens, so the DOM is never reached.
#[derive(Clone, Copy, Debug, Default)]
pub struct DocumentRoot;

impl DocumentRoot {
    fn element() -> Option<web_sys::Element> {
        leptos::prelude::document().document_element()
    }
}

impl ScrollLockTarget for DocumentRoot {
    fn add_marker(&self, marker: &str) {
        if let Some(root) = Self::element() {
            _ = root.class_list().add_1(marker);
        }
    }

    fn remove_marker(&self, marker: &str) {
        if let Some(root) = Self::element() {
            _ = root.class_list().remove_1(marker);
        }
    }
}

#[cfg(test)]
pub(crate) mod testing {
    use super::ScrollLockTarget;
    use std::cell::RefCell;
    use std::collections::BTreeMap;
    use std::rc::Rc;

    /// In-memory class list that counts every `add_marker` call, so a caller
    /// that adds the marker twice shows up as a count of 2.
    #[derive(Clone, Debug, Default)]
    pub struct FakeClassList {
        classes: Rc<RefCell<BTreeMap<String, usize>>>,
    }

    impl FakeClassList {
        pub fn count(&self, marker: &str) -> usize {
            self.classes.borrow().get(marker).copied().unwrap_or(0)
        }
    }

    impl ScrollLockTarget for FakeClassList {
        fn add_marker(&self, marker: &str) {
            let mut classes = self.classes.borrow_mut();
            *classes.entry(marker.to_owned()).or_insert(0) += 1;
        }

        fn remove_marker(&self, marker: &str) {
            self.classes.borrow_mut().remove(marker);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::testing::FakeClassList;
    use super::*;

    #[test]
    fn guard_adds_marker_and_releases_on_drop() {
        let root = FakeClassList::default();
        let lock = ScrollLock::acquire(root.clone());
        assert_eq!(root.count(SCROLL_LOCK_CLASS), 1);

        drop(lock);
        assert_eq!(root.count(SCROLL_LOCK_CLASS), 0);
    }

    #[test]
    fn removing_an_absent_marker_is_a_no_op() {
        let root = FakeClassList::default();
        drop(ScrollLock::acquire(root.clone()));
        root.remove_marker(SCROLL_LOCK_CLASS);
        assert_eq!(root.count(SCROLL_LOCK_CLASS), 0);
    }
}
