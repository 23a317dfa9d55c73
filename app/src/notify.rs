//! Fire-and-forget user notifications ("toasts").

use leptos::prelude::*;

/// How long a toast stays on screen before it dismisses itself.
#[cfg(feature = "hydrate")]
const TOAST_LIFETIME: std::time::Duration = std::time::Duration::from_secs(4);

/// Receiver of user-facing success and failure messages.
#[cfg_attr(test, mockall::automock)]
pub trait NotificationSink {
    fn notify_success(&self, message: &str);
    fn notify_failure(&self, message: &str);
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Failure,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Toast {
    pub id: u64,
    pub kind: ToastKind,
    pub message: String,
}

/// Reactive toast queue shared through context.
#[derive(Clone, Copy, Debug)]
pub struct Notifications {
    toasts: RwSignal<Vec<Toast>>,
    next_id: StoredValue<u64>,
}

impl Default for Notifications {
    fn default() -> Self {
        Self::new()
    }
}

impl Notifications {
    pub fn new() -> Self {
        Self {
            toasts: RwSignal::new(Vec::new()),
            next_id: StoredValue::new(0),
        }
    }

    /// Create the queue and make it available to every descendant.
    pub fn provide() -> Self {
        let notifications = Self::new();
        provide_context(notifications);
        notifications
    }

    /// Context lookup; falls back to a detached queue so callers never panic.
    pub fn from_context() -> Self {
        use_context::<Self>().unwrap_or_else(Self::new)
    }

    pub fn toasts(&self) -> Vec<Toast> {
        self.toasts.get()
    }

    pub fn dismiss(&self, id: u64) {
        self.toasts.update(|toasts| toasts.retain(|toast| toast.id != id));
    }

    fn push(&self, kind: ToastKind, message: &str) {
        let id = self.next_id.get_value();
        self.next_id.set_value(id.wrapping_add(1));
        self.toasts.update(|toasts| {
            toasts.push(Toast {
                id,
                kind,
                message: message.to_owned(),
            });
        });

        #[cfg(feature = "hydrate")]
        {
            let this = *self;
            set_timeout(move || this.dismiss(id), TOAST_LIFETIME);
        }
    }
}

impl NotificationSink for Notifications {
    fn notify_success(&self, message: &str) {
        log::info!("{message}");
        self.push(ToastKind::Success, message);
    }

    fn notify_failure(&self, message: &str) {
        log::warn!("{message}");
        self.push(ToastKind::Failure, message);
    }
}
