//! Current session and the logout flow.
//!
//! [`Session`] exposes the display values the navigation bar needs as pure
//! functions of the underlying [`User`], recomputed on every read. The
//! [`AuthContext`] wraps the session resource and the logout action so the
//! rest of the app can treat authentication as an external collaborator.

use core::fmt::Display;

use leptos::prelude::*;
use serde::{Deserialize, Serialize};

use crate::{
    api::{logout, select_session},
    notify::NotificationSink,
    types::User,
};

pub const LOGOUT_SUCCESS: &str = "Logged out successfully";
pub const LOGOUT_FAILURE: &str = "Unable to logout right now. Please try again.";

const FALLBACK_NAME: &str = "Member";
const FALLBACK_INITIAL: &str = "M";

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Session {
    pub user: Option<User>,
}

fn filled(value: Option<&String>) -> Option<&str> {
    value.map(|v| v.trim()).filter(|v| !v.is_empty())
}

impl Session {
    pub fn anonymous() -> Self {
        Self { user: None }
    }

    pub fn authenticated(user: User) -> Self {
        Self { user: Some(user) }
    }

    pub fn is_authenticated(&self) -> bool {
        self.user.is_some()
    }

    /// Full name when either part is set, else the username, else "Member".
    pub fn display_name(&self) -> String {
        let Some(user) = &self.user else {
            return FALLBACK_NAME.to_owned();
        };
        let first = filled(user.first_name.as_ref());
        let last = filled(user.last_name.as_ref());
        if first.is_some() || last.is_some() {
            return [first, last].into_iter().flatten().collect::<Vec<_>>().join(" ");
        }
        filled(user.username.as_ref()).map_or_else(|| FALLBACK_NAME.to_owned(), str::to_owned)
    }

    /// Uppercased first character of the display name.
    pub fn initial(&self) -> String {
        self.display_name()
            .chars()
            .next()
            .map_or_else(|| FALLBACK_INITIAL.to_owned(), |c| c.to_uppercase().collect())
    }

    /// First word of the display name, used on the compact mobile button.
    pub fn short_name(&self) -> String {
        self.display_name()
            .split_whitespace()
            .next()
            .unwrap_or("Dashboard")
            .to_owned()
    }

    pub fn greeting(&self) -> String {
        format!("Hi, {}", self.display_name())
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LogoutOutcome {
    LoggedOut,
    Failed,
}

/// Turn a settled logout attempt into user feedback.
///
/// `on_success` runs only when the provider succeeded; a failure leaves every
/// piece of state untouched apart from the failure notification.
pub fn settle_logout<E: Display>(
    result: Result<(), E>,
    notifier: &impl NotificationSink,
    on_success: impl FnOnce(),
) -> LogoutOutcome {
    match result {
        Ok(()) => {
            notifier.notify_success(LOGOUT_SUCCESS);
            on_success();
            LogoutOutcome::LoggedOut
        }
        Err(err) => {
            log::warn!("logout failed: {err}");
            notifier.notify_failure(LOGOUT_FAILURE);
            LogoutOutcome::Failed
        }
    }
}

/// Dispatch `action` unless a previous dispatch is still in flight.
fn dispatch_unless_pending<O>(action: Action<(), O>) -> bool
where
    O: Send + Sync + 'static,
{
    if action.pending().get_untracked() {
        log::debug!("logout already pending, ignoring");
        return false;
    }
    action.dispatch(());
    true
}

/// Session resource plus the logout action, shared through context.
#[derive(Clone, Copy)]
pub struct AuthContext {
    session: Resource<Session>,
    generation: RwSignal<u64>,
    logout: Action<(), Result<(), ServerFnError>>,
}

impl AuthContext {
    pub fn provide() -> Self {
        let generation = RwSignal::new(0_u64);
        let session = Resource::new_blocking(
            move || generation.get(),
            |_| async move {
                select_session().await.unwrap_or_else(|err| {
                    log::warn!("session lookup failed: {err}");
                    Session::anonymous()
                })
            },
        );
        let logout = Action::new(|(): &()| async move { logout().await });

        let context = Self {
            session,
            generation,
            logout,
        };
        provide_context(context);
        context
    }

    pub fn from_context() -> Self {
        expect_context::<Self>()
    }

    /// Latest known session; anonymous until the first fetch resolves.
    pub fn session(&self) -> Session {
        self.session.get().unwrap_or_default()
    }

    /// Start a logout unless one is already in flight.
    pub fn logout(&self) -> bool {
        dispatch_unless_pending(self.logout)
    }

    pub fn logout_pending(&self) -> bool {
        self.logout.pending().get()
    }

    /// Result of the most recent logout attempt, tracked.
    pub fn logout_result(&self) -> Option<Result<(), ServerFnError>> {
        self.logout.value().get()
    }

    /// Forget the cached session and fetch it again.
    pub fn clear(&self) {
        self.generation.update(|g| *g = g.wrapping_add(1));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::notify::MockNotificationSink;
    use assert_matches::assert_matches;
    use mockall::predicate::eq;
    use std::sync::{
        Arc,
        atomic::{AtomicUsize, Ordering},
    };

    fn user(first: Option<&str>, last: Option<&str>, username: Option<&str>) -> User {
        User {
            email: "member@stylegenie.app".to_owned(),
            username: username.map(str::to_owned),
            first_name: first.map(str::to_owned),
            last_name: last.map(str::to_owned),
            role: Some("client".to_owned()),
        }
    }

    #[test]
    fn full_name_drives_initial_and_greeting() {
        let session = Session::authenticated(user(Some("Jane"), Some("Doe"), Some("jdoe")));
        assert!(session.is_authenticated());
        assert_eq!(session.display_name(), "Jane Doe");
        assert_eq!(session.initial(), "J");
        assert!(session.greeting().contains("Jane Doe"));
        assert_eq!(session.short_name(), "Jane");
    }

    #[test]
    fn single_name_part_is_used_alone() {
        let session = Session::authenticated(user(None, Some("Doe"), Some("jdoe")));
        assert_eq!(session.display_name(), "Doe");
    }

    #[test]
    fn username_is_the_fallback_display_name() {
        let session = Session::authenticated(user(Some("  "), None, Some("mstyles")));
        assert_eq!(session.display_name(), "mstyles");
        assert_eq!(session.initial(), "M");
    }

    #[test]
    fn member_only_when_nothing_is_known() {
        let session = Session::authenticated(user(None, None, None));
        assert_eq!(session.display_name(), "Member");
        assert_eq!(session.initial(), "M");

        let anonymous = Session::anonymous();
        assert!(!anonymous.is_authenticated());
        assert_eq!(anonymous.display_name(), "Member");
    }

    #[test]
    fn lowercase_names_get_an_uppercase_initial() {
        let session = Session::authenticated(user(Some("émile"), None, None));
        assert_eq!(session.initial(), "É");
    }

    #[test]
    fn successful_logout_notifies_then_runs_follow_up() {
        let mut notifier = MockNotificationSink::new();
        notifier
            .expect_notify_success()
            .with(eq(LOGOUT_SUCCESS))
            .times(1)
            .return_const(());
        notifier.expect_notify_failure().never();

        let mut navigated_to = None;
        let outcome = settle_logout(Ok::<(), String>(()), &notifier, || {
            navigated_to = Some("/");
        });

        assert_matches!(outcome, LogoutOutcome::LoggedOut);
        assert_eq!(navigated_to, Some("/"));
    }

    #[test]
    fn rejected_logout_only_notifies_failure() {
        let mut notifier = MockNotificationSink::new();
        notifier
            .expect_notify_failure()
            .with(eq(LOGOUT_FAILURE))
            .times(1)
            .return_const(());
        notifier.expect_notify_success().never();

        let mut follow_up_ran = false;
        let outcome = settle_logout(Err("backend unavailable"), &notifier, || {
            follow_up_ran = true;
        });

        assert_matches!(outcome, LogoutOutcome::Failed);
        assert!(!follow_up_ran);
    }

    #[tokio::test]
    async fn second_logout_is_ignored_while_the_first_is_in_flight() {
        _ = any_spawner::Executor::init_tokio();
        let dispatched = Arc::new(AtomicUsize::new(0));

        Owner::new().with(|| {
            let counter = Arc::clone(&dispatched);
            let action = Action::new(move |(): &()| {
                counter.fetch_add(1, Ordering::SeqCst);
                std::future::pending::<()>()
            });

            assert!(dispatch_unless_pending(action));
            assert!(action.pending().get_untracked());
            assert!(!dispatch_unless_pending(action));
            assert!(!dispatch_unless_pending(action));
        });

        assert_eq!(dispatched.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn logout_can_run_again_once_settled() {
        _ = any_spawner::Executor::init_tokio();
        let dispatched = Arc::new(AtomicUsize::new(0));

        let owner = Owner::new();
        let action = owner.with(|| {
            let counter = Arc::clone(&dispatched);
            Action::new(move |(): &()| {
                counter.fetch_add(1, Ordering::SeqCst);
                async {}
            })
        });

        assert!(dispatch_unless_pending(action));
        for _ in 0..100 {
            if !action.pending().get_untracked() {
                break;
            }
            tokio::task::yield_now().await;
        }
        assert!(!action.pending().get_untracked());
        assert!(dispatch_unless_pending(action));
        assert_eq!(dispatched.load(Ordering::SeqCst), 2);
    }
}
