/// User notifications
///
/// The form never talks to a dialog directly. It reports through the
/// `Notifier` trait, and the window renders whatever the
/// `NotificationCenter` is currently holding.

use std::collections::VecDeque;
use std::time::{Duration, Instant};

/// How long an info notification stays on screen
const INFO_DISMISS_AFTER: Duration = Duration::from_secs(3);

/// Info notifications past this count are dropped, oldest first.
/// Errors are never dropped to make room.
const MAX_VISIBLE: usize = 4;

/// Kind of a notification
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotifyKind {
    /// Auto-dismissed after a few seconds
    Info,
    /// Stays until the user dismisses it
    Error,
}

/// Anything that can show a message to the user
pub trait Notifier {
    fn notify(&mut self, message: &str, kind: NotifyKind);
}

/// Unique identifier for a notification
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NotificationId(u64);

/// A notification shown in the window
#[derive(Debug, Clone)]
pub struct Notification {
    pub id: NotificationId,
    pub kind: NotifyKind,
    pub message: String,
    created_at: Instant,
}

impl Notification {
    /// Whether this notification should disappear on its own by `now`
    pub fn is_expired(&self, now: Instant) -> bool {
        match self.kind {
            NotifyKind::Info => now.saturating_duration_since(self.created_at) >= INFO_DISMISS_AFTER,
            NotifyKind::Error => false,
        }
    }
}

/// The in-window notification stack (newest first)
#[derive(Debug, Default)]
pub struct NotificationCenter {
    visible: VecDeque<Notification>,
    next_id: u64,
}

impl NotificationCenter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Push a notification created at an explicit instant
    ///
    /// An identical notification already showing is replaced, so repeated
    /// keystrokes do not stack copies of the same message.
    pub fn push_at(&mut self, message: &str, kind: NotifyKind, created_at: Instant) -> NotificationId {
        self.visible.retain(|n| n.kind != kind || n.message != message);

        let id = NotificationId(self.next_id);
        self.next_id += 1;

        self.visible.push_front(Notification {
            id,
            kind,
            message: message.to_string(),
            created_at,
        });
        self.evict_overflow();

        id
    }

    /// Drop the oldest info notifications until the stack fits
    fn evict_overflow(&mut self) {
        while self.visible.len() > MAX_VISIBLE {
            match self.visible.iter().rposition(|n| n.kind == NotifyKind::Info) {
                Some(pos) => {
                    self.visible.remove(pos);
                }
                None => break,
            }
        }
    }

    /// Remove a notification, returns `true` if it was showing
    pub fn dismiss(&mut self, id: NotificationId) -> bool {
        match self.visible.iter().position(|n| n.id == id) {
            Some(pos) => {
                self.visible.remove(pos);
                true
            }
            None => false,
        }
    }

    /// Drop every notification that has timed out by `now`
    pub fn expire(&mut self, now: Instant) {
        self.visible.retain(|n| !n.is_expired(now));
    }

    pub fn visible(&self) -> impl Iterator<Item = &Notification> {
        self.visible.iter()
    }

    pub fn is_empty(&self) -> bool {
        self.visible.is_empty()
    }
}

impl Notifier for NotificationCenter {
    fn notify(&mut self, message: &str, kind: NotifyKind) {
        self.push_at(message, kind, Instant::now());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_notify_pushes_newest_first() {
        let mut center = NotificationCenter::new();
        center.notify("first", NotifyKind::Info);
        center.notify("second", NotifyKind::Error);

        let messages: Vec<_> = center.visible().map(|n| n.message.as_str()).collect();
        assert_eq!(messages, vec!["second", "first"]);
        assert_eq!(center.visible().next().map(|n| n.kind), Some(NotifyKind::Error));
    }

    #[test]
    fn test_info_expires_but_error_stays() {
        let mut center = NotificationCenter::new();
        let start = Instant::now();
        center.push_at("saved", NotifyKind::Info, start);
        center.push_at("failed", NotifyKind::Error, start);

        center.expire(start + Duration::from_secs(1));
        assert_eq!(center.visible().count(), 2);

        center.expire(start + INFO_DISMISS_AFTER);
        let remaining: Vec<_> = center.visible().map(|n| n.kind).collect();
        assert_eq!(remaining, vec![NotifyKind::Error]);
    }

    #[test]
    fn test_dismiss_removes_only_matching_id() {
        let mut center = NotificationCenter::new();
        let keep = center.push_at("keep", NotifyKind::Error, Instant::now());
        let drop = center.push_at("drop", NotifyKind::Error, Instant::now());

        assert!(center.dismiss(drop));
        assert!(!center.dismiss(drop));
        assert_eq!(center.visible().next().map(|n| n.id), Some(keep));
    }

    #[test]
    fn test_oldest_info_dropped_past_capacity() {
        let mut center = NotificationCenter::new();
        for i in 0..MAX_VISIBLE + 2 {
            center.notify(&format!("n{i}"), NotifyKind::Info);
        }

        assert_eq!(center.visible().count(), MAX_VISIBLE);
        assert!(center.visible().all(|n| n.message != "n0" && n.message != "n1"));
    }

    #[test]
    fn test_errors_survive_a_burst_of_notifications() {
        let mut center = NotificationCenter::new();
        center.notify("Failed to create listing", NotifyKind::Error);
        center.notify("saved", NotifyKind::Info);
        for i in 0..MAX_VISIBLE {
            center.notify(&format!("e{i}"), NotifyKind::Error);
        }

        let messages: Vec<_> = center.visible().map(|n| n.message.as_str()).collect();
        assert_eq!(messages.len(), MAX_VISIBLE + 1);
        assert!(!messages.contains(&"saved"));
        assert_eq!(messages.last(), Some(&"Failed to create listing"));
    }

    #[test]
    fn test_repeated_message_is_shown_once() {
        let mut center = NotificationCenter::new();
        let first = center.push_at("too long", NotifyKind::Error, Instant::now());
        center.notify("other", NotifyKind::Error);
        let second = center.push_at("too long", NotifyKind::Error, Instant::now());

        let messages: Vec<_> = center.visible().map(|n| n.message.as_str()).collect();
        assert_eq!(messages, vec!["too long", "other"]);
        assert_ne!(first, second);
        assert!(!center.dismiss(first));
    }
}
