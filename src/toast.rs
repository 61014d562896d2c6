//! Transient toast messages with self-expiring entries.
//!
//! Toasts are ephemeral and must never reach the persistence bridge, so
//! the queue is independent of the state store. Each entry carries its own
//! expiry timer; removing an entry (explicitly or by expiry) cancels the
//! pending timer, and ids are monotonic and never reused, so a late
//! callback can never act on the wrong entry.

use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex, PoisonError, Weak};
use std::time::Duration;

use tokio::task::JoinHandle;
use tracing::trace;

use crate::models::{DEFAULT_TOAST_DURATION_MS, Toast, ToastId, ToastKind};

/// Payload for [`ToastQueue::show`]; the queue assigns identity.
#[derive(Debug, Clone)]
pub struct ToastRequest {
    pub kind: ToastKind,
    pub title: String,
    pub message: Option<String>,
    /// Milliseconds until automatic removal; defaults to 5000.
    pub duration_ms: Option<u64>,
}

impl ToastRequest {
    #[must_use]
    pub fn new(kind: ToastKind, title: impl Into<String>) -> Self {
        Self {
            kind,
            title: title.into(),
            message: None,
            duration_ms: None,
        }
    }

    #[must_use]
    pub fn message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }

    #[must_use]
    pub fn duration_ms(mut self, duration_ms: u64) -> Self {
        self.duration_ms = Some(duration_ms);
        self
    }
}

struct Inner {
    toasts: Mutex<Vec<Toast>>,
    timers: Mutex<HashMap<ToastId, JoinHandle<()>>>,
    next_id: AtomicU64,
}

impl Inner {
    /// Drops the entry and its timer bookkeeping. Returns whether the entry
    /// was still present.
    fn take(&self, id: ToastId) -> bool {
        let removed = {
            let mut toasts = self.toasts.lock().unwrap_or_else(PoisonError::into_inner);
            let before = toasts.len();
            toasts.retain(|t| t.id != id);
            toasts.len() != before
        };
        if let Some(handle) = self
            .timers
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .remove(&id)
        {
            handle.abort();
        }
        removed
    }
}

/// Queue of active toasts, display-ordered by insertion.
///
/// Cloning is cheap and clones share the same queue. `show` must be called
/// from within a tokio runtime, since it schedules the expiry timer.
#[derive(Clone)]
pub struct ToastQueue {
    inner: Arc<Inner>,
}

impl ToastQueue {
    #[must_use]
    pub fn new() -> Self {
        Self {
            inner: Arc::new(Inner {
                toasts: Mutex::new(Vec::new()),
                timers: Mutex::new(HashMap::new()),
                next_id: AtomicU64::new(1),
            }),
        }
    }

    /// Appends a toast, assigns a fresh id, and schedules automatic removal
    /// after its duration (default 5000 ms). Returns the assigned id.
    pub fn show(&self, request: ToastRequest) -> ToastId {
        let id = ToastId(self.inner.next_id.fetch_add(1, Ordering::Relaxed));
        let duration_ms = request.duration_ms.unwrap_or(DEFAULT_TOAST_DURATION_MS);
        let toast = Toast {
            id,
            kind: request.kind,
            title: request.title,
            message: request.message,
            duration_ms,
        };

        self.inner
            .toasts
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(toast);

        // The timer holds a Weak: when the queue is dropped the upgrade
        // fails and the task exits.
        let weak: Weak<Inner> = Arc::downgrade(&self.inner);
        let handle = tokio::spawn(async move {
            tokio::time::sleep(Duration::from_millis(duration_ms)).await;
            if let Some(inner) = weak.upgrade() {
                trace!("Toast {id:?} expired");
                inner.take(id);
            }
        });
        self.inner
            .timers
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(id, handle);

        id
    }

    /// Removes a toast immediately, cancelling its pending timer. Removing
    /// an absent id is a no-op.
    pub fn remove(&self, id: ToastId) {
        self.inner.take(id);
    }

    /// Active toasts in insertion order.
    #[must_use]
    pub fn toasts(&self) -> Vec<Toast> {
        self.inner
            .toasts
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.inner
            .toasts
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Default for ToastQueue {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    use super::*;

    fn success(title: &str) -> ToastRequest {
        ToastRequest::new(ToastKind::Success, title)
    }

    #[tokio::test]
    async fn show_appends_in_insertion_order() {
        let queue = ToastQueue::new();
        let a = queue.show(success("Saved"));
        let b = queue.show(success("Also saved").message("Details"));

        let toasts = queue.toasts();
        assert_eq!(toasts.len(), 2);
        assert_eq!(toasts[0].id, a);
        assert_eq!(toasts[1].id, b);
        assert_eq!(toasts[1].message.as_deref(), Some("Details"));
        assert_ne!(a, b);
    }

    #[tokio::test]
    async fn duration_defaults_to_5000_ms() {
        let queue = ToastQueue::new();
        queue.show(success("Saved"));
        assert_eq!(queue.toasts()[0].duration_ms, 5_000);
    }

    #[tokio::test]
    async fn toast_expires_after_its_duration() {
        let queue = ToastQueue::new();
        queue.show(success("Short-lived").duration_ms(50));
        assert_eq!(queue.len(), 1);

        tokio::time::sleep(Duration::from_millis(150)).await;
        assert!(queue.is_empty());
    }

    #[tokio::test]
    async fn remove_is_immediate_and_idempotent() {
        let queue = ToastQueue::new();
        let id = queue.show(success("Saved"));
        queue.remove(id);
        assert!(queue.is_empty());
        // Absent id: no-op, no panic.
        queue.remove(id);
        queue.remove(ToastId(999));
    }

    #[tokio::test]
    async fn cancelled_timer_never_fires_against_later_toasts() {
        let queue = ToastQueue::new();
        let a = queue.show(success("Removed early").duration_ms(80));
        queue.remove(a);

        let b = queue.show(success("Long-lived").duration_ms(10_000));
        tokio::time::sleep(Duration::from_millis(200)).await;

        // A's timer was aborted; B must be untouched.
        let toasts = queue.toasts();
        assert_eq!(toasts.len(), 1);
        assert_eq!(toasts[0].id, b);
    }

    #[tokio::test]
    async fn concurrent_toasts_expire_independently() {
        let queue = ToastQueue::new();
        queue.show(success("Fast").duration_ms(50));
        let slow = queue.show(success("Slow").duration_ms(400));

        tokio::time::sleep(Duration::from_millis(180)).await;
        let toasts = queue.toasts();
        assert_eq!(toasts.len(), 1);
        assert_eq!(toasts[0].id, slow);
    }

    #[tokio::test]
    async fn clones_share_the_same_queue() {
        let queue = ToastQueue::new();
        let other = queue.clone();
        let id = queue.show(success("Shared"));
        assert_eq!(other.len(), 1);
        other.remove(id);
        assert!(queue.is_empty());
    }
}
