//! Domain types shared across the state store, persistence bridge, and
//! toast queue.
//!
//! Serde attributes follow the camelCase wire shape of the persisted
//! dashboard state, so a blob written by an earlier front end deserializes
//! without field mapping.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Administrative role of the signed-in user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Role {
    #[serde(rename = "Super Admin")]
    SuperAdmin,
    Admin,
    Moderator,
    Faculty,
    Student,
}

/// The current session user. Replaced wholesale via `Action::SetUser`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: u64,
    pub name: String,
    pub role: Role,
    /// Avatar image URL.
    pub avatar: String,
    pub email: String,
    pub last_login: DateTime<Utc>,
}

impl Default for User {
    fn default() -> Self {
        Self {
            id: 1,
            name: "Sarah Johnson".to_string(),
            role: Role::SuperAdmin,
            avatar: "https://randomuser.me/api/portraits/women/44.jpg".to_string(),
            email: "sarah.johnson@campushub.edu".to_string(),
            // Deterministic default; callers that care stamp the real
            // login time (see config::profile).
            last_login: DateTime::UNIX_EPOCH,
        }
    }
}

/// Which subsystem a notification originated from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NotificationKind {
    Event,
    Club,
    User,
    System,
    Chat,
}

/// Notification priority, used by the display layer for badge styling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    Low,
    Medium,
    High,
}

/// A persisted-in-session notification entry.
///
/// Identity is assigned by the store when produced through
/// [`crate::store::AppStore::notify`]; manually constructed entries may
/// carry their own id, but mixing schemes is discouraged.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Notification {
    pub id: u64,
    pub kind: NotificationKind,
    pub title: String,
    pub message: String,
    /// Human-readable time label (e.g. "2 hours ago"). Display-only.
    pub time: String,
    pub read: bool,
    pub priority: Priority,
}

/// Notification payload without identity, for producers that let the store
/// assign an id.
#[derive(Debug, Clone, Deserialize)]
pub struct NewNotification {
    pub kind: NotificationKind,
    pub title: String,
    pub message: String,
    pub time: String,
    pub priority: Priority,
}

impl NewNotification {
    /// Attaches a store-assigned id, producing an unread entry.
    #[must_use]
    pub fn with_id(self, id: u64) -> Notification {
        Notification {
            id,
            kind: self.kind,
            title: self.title,
            message: self.message,
            time: self.time,
            read: false,
            priority: self.priority,
        }
    }
}

/// Display theme.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    Light,
    Dark,
}

/// User-tunable preferences, persisted across sessions.
///
/// Numeric fields use unsigned types so the "non-negative" invariant holds
/// by construction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Settings {
    pub theme: Theme,
    /// Whether notification delivery is enabled.
    pub notifications: bool,
    pub auto_refresh: bool,
    /// Auto-refresh interval in milliseconds.
    pub refresh_interval: u64,
    pub items_per_page: u32,
    pub sidebar_collapsed: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            theme: Theme::Light,
            notifications: true,
            auto_refresh: true,
            refresh_interval: 30_000,
            items_per_page: 10,
            sidebar_collapsed: false,
        }
    }
}

/// Severity of a transient toast message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ToastKind {
    Success,
    Error,
    Warning,
    Info,
}

/// Opaque toast identifier. Monotonic within a [`crate::toast::ToastQueue`]
/// and never reused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ToastId(pub u64);

/// A transient, self-expiring message. Never persisted.
#[derive(Debug, Clone, PartialEq)]
pub struct Toast {
    pub id: ToastId,
    pub kind: ToastKind,
    pub title: String,
    pub message: Option<String>,
    /// Time until automatic removal, in milliseconds.
    pub duration_ms: u64,
}

/// Default toast lifetime when the caller does not specify one.
pub const DEFAULT_TOAST_DURATION_MS: u64 = 5_000;
