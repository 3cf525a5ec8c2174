use parking_lot::Mutex;
use time::{Duration, OffsetDateTime};

/// How long a notification stays visible.
pub const NOTIFICATION_TIMEOUT: Duration = Duration::seconds(5);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationKind {
    Success,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub message: String,
    pub kind: NotificationKind,
    pub shown_at: OffsetDateTime,
}

impl Notification {
    pub fn expires_at(&self) -> OffsetDateTime {
        self.shown_at + NOTIFICATION_TIMEOUT
    }

    pub fn is_expired_at(&self, now: OffsetDateTime) -> bool {
        now >= self.expires_at()
    }
}

/// Holds the single transient notification that is currently displayed.
#[derive(Debug, Default)]
pub struct Toaster {
    current: Mutex<Option<Notification>>,
}

impl Toaster {
    pub fn show(&self, message: impl Into<String>, kind: NotificationKind) {
        self.show_at(message, kind, OffsetDateTime::now_utc());
    }

    /// Replaces any notification that is still displayed.
    pub fn show_at(&self, message: impl Into<String>, kind: NotificationKind, now: OffsetDateTime) {
        let notification = Notification {
            message: message.into(),
            kind,
            shown_at: now,
        };
        log::debug!("Show {:?} notification: {}", kind, notification.message);
        *self.current.lock() = Some(notification);
    }

    pub fn current(&self) -> Option<Notification> {
        self.current_at(OffsetDateTime::now_utc())
    }

    pub fn current_at(&self, now: OffsetDateTime) -> Option<Notification> {
        let mut current = self.current.lock();
        if current.as_ref().is_some_and(|n| n.is_expired_at(now)) {
            *current = None;
        }
        current.clone()
    }

    pub fn dismiss(&self) {
        *self.current.lock() = None;
    }
}
