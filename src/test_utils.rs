//! Shared test utilities for the Campus Hub admin state core.
//!
//! Helpers for building sample notifications and initializing tracing in
//! tests; keeps individual test modules free of setup boilerplate.

use tracing_subscriber::EnvFilter;

use crate::models::{NewNotification, Notification, NotificationKind, Priority};

/// Initializes tracing for a test. Safe to call from every test; only the
/// first call in a process wins.
pub fn init_test_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug")),
        )
        .with_test_writer()
        .try_init();
}

/// Creates an unread event notification with the given id and predictable
/// content.
pub fn sample_notification(id: u64) -> Notification {
    Notification {
        id,
        kind: NotificationKind::Event,
        title: format!("Notification {id}"),
        message: "Something happened on campus".to_string(),
        time: "just now".to_string(),
        read: false,
        priority: Priority::Medium,
    }
}

/// Creates an id-less notification payload for `AppStore::notify` tests.
pub fn sample_new_notification(title: &str) -> NewNotification {
    NewNotification {
        kind: NotificationKind::System,
        title: title.to_string(),
        message: "Something happened on campus".to_string(),
        time: "just now".to_string(),
        priority: Priority::Low,
    }
}
