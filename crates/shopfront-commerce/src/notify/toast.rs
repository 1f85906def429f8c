//! Transient toast queue with deadline-based expiry.
//!
//! The queue never spawns timers. Callers pass `now` to [`ToastQueue::expire`]
//! and use [`ToastQueue::next_deadline`] to decide when to wake up next.

use serde::Serialize;
use std::fmt;
use std::time::{Duration, Instant};

/// How long a toast stays up unless told otherwise.
pub const DEFAULT_DURATION: Duration = Duration::from_millis(5000);

/// Unique toast identifier, increasing per queue.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct ToastId(u64);

impl fmt::Display for ToastId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Success,
    Error,
    Info,
    Warning,
}

/// A visible notification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toast {
    pub id: ToastId,
    pub message: String,
    pub severity: Severity,
    /// `None` for sticky toasts.
    pub expires_at: Option<Instant>,
}

impl Toast {
    pub fn is_expired(&self, now: Instant) -> bool {
        self.expires_at.is_some_and(|deadline| deadline <= now)
    }
}

/// Visible toasts in push order. Duplicates are allowed.
#[derive(Debug, Default)]
pub struct ToastQueue {
    next_id: u64,
    toasts: Vec<Toast>,
}

impl ToastQueue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Show a toast for [`DEFAULT_DURATION`].
    pub fn push(&mut self, message: impl Into<String>, severity: Severity) -> ToastId {
        self.push_at(message, severity, DEFAULT_DURATION, Instant::now())
    }

    /// Show a toast that expires `duration` after `now`. A zero duration
    /// makes it sticky until dismissed; a duration past the clock's range
    /// saturates to the latest representable deadline.
    pub fn push_at(
        &mut self,
        message: impl Into<String>,
        severity: Severity,
        duration: Duration,
        now: Instant,
    ) -> ToastId {
        self.next_id += 1;
        let id = ToastId(self.next_id);
        let expires_at = if duration.is_zero() {
            None
        } else {
            Some(saturating_deadline(now, duration))
        };
        self.toasts.push(Toast {
            id,
            message: message.into(),
            severity,
            expires_at,
        });
        id
    }

    pub fn success(&mut self, message: impl Into<String>) -> ToastId {
        self.push(message, Severity::Success)
    }

    pub fn error(&mut self, message: impl Into<String>) -> ToastId {
        self.push(message, Severity::Error)
    }

    pub fn info(&mut self, message: impl Into<String>) -> ToastId {
        self.push(message, Severity::Info)
    }

    pub fn warning(&mut self, message: impl Into<String>) -> ToastId {
        self.push(message, Severity::Warning)
    }

    /// Remove a toast early. Unknown ids are ignored.
    pub fn dismiss(&mut self, id: ToastId) -> bool {
        let len_before = self.toasts.len();
        self.toasts.retain(|t| t.id != id);
        self.toasts.len() < len_before
    }

    /// Drop every toast whose deadline has passed, returning them.
    pub fn expire(&mut self, now: Instant) -> Vec<Toast> {
        let (expired, live): (Vec<_>, Vec<_>) =
            std::mem::take(&mut self.toasts).into_iter().partition(|t| t.is_expired(now));
        self.toasts = live;
        expired
    }

    /// Earliest pending deadline, if any toast will expire on its own.
    pub fn next_deadline(&self) -> Option<Instant> {
        self.toasts.iter().filter_map(|t| t.expires_at).min()
    }

    /// Remove and return every toast.
    pub fn drain(&mut self) -> Vec<Toast> {
        std::mem::take(&mut self.toasts)
    }

    pub fn visible(&self) -> &[Toast] {
        &self.toasts
    }

    pub fn len(&self) -> usize {
        self.toasts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.toasts.is_empty()
    }
}

fn saturating_deadline(now: Instant, duration: Duration) -> Instant {
    let mut step = duration;
    let mut deadline = now;
    while !step.is_zero() {
        match deadline.checked_add(step) {
            Some(later) => deadline = later,
            None => step /= 2,
        }
    }
    deadline
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ids_are_unique() {
        let mut queue = ToastQueue::new();
        let a = queue.success("Added to cart");
        let b = queue.success("Added to cart");
        assert_ne!(a, b);
        assert_eq!(queue.len(), 2);
    }

    #[test]
    fn test_default_duration_expiry() {
        let mut queue = ToastQueue::new();
        let start = Instant::now();
        queue.push_at("Saved", Severity::Info, DEFAULT_DURATION, start);

        assert!(queue.expire(start + Duration::from_millis(4999)).is_empty());
        let expired = queue.expire(start + DEFAULT_DURATION);
        assert_eq!(expired.len(), 1);
        assert!(queue.is_empty());
    }

    #[test]
    fn test_zero_duration_is_sticky() {
        let mut queue = ToastQueue::new();
        let start = Instant::now();
        let id = queue.push_at("Check your details", Severity::Error, Duration::ZERO, start);

        assert!(queue.expire(start + Duration::from_secs(3600)).is_empty());
        assert_eq!(queue.next_deadline(), None);
        assert!(queue.dismiss(id));
    }

    #[test]
    fn test_huge_duration_saturates_instead_of_sticking() {
        let mut queue = ToastQueue::new();
        let start = Instant::now();
        queue.push_at("Far future", Severity::Info, Duration::MAX, start);

        let deadline = queue.next_deadline().unwrap();
        assert!(deadline > start + Duration::from_secs(3600));
        assert!(queue.expire(start + Duration::from_secs(3600)).is_empty());
        assert_eq!(queue.expire(deadline).len(), 1);
    }

    #[test]
    fn test_dismiss_clears_deadline() {
        let mut queue = ToastQueue::new();
        let start = Instant::now();
        let short = queue.push_at("a", Severity::Info, Duration::from_millis(100), start);
        queue.push_at("b", Severity::Info, Duration::from_millis(900), start);

        assert_eq!(queue.next_deadline(), Some(start + Duration::from_millis(100)));
        assert!(queue.dismiss(short));
        assert!(!queue.dismiss(short));
        assert_eq!(queue.next_deadline(), Some(start + Duration::from_millis(900)));
    }

    #[test]
    fn test_expire_keeps_push_order() {
        let mut queue = ToastQueue::new();
        let start = Instant::now();
        queue.push_at("first", Severity::Info, Duration::from_millis(50), start);
        queue.push_at("second", Severity::Warning, Duration::ZERO, start);
        queue.push_at("third", Severity::Success, Duration::from_millis(500), start);

        queue.expire(start + Duration::from_millis(60));
        let messages: Vec<_> = queue.visible().iter().map(|t| t.message.as_str()).collect();
        assert_eq!(messages, ["second", "third"]);
    }
}
