//! The application state store: single dispatch entry point, change
//! listeners, and the wiring to the persistence bridge.
//!
//! The store is an explicit, constructible instance with no globals, so
//! tests and embedders can run any number of isolated stores, each with
//! its own injected storage adapter.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, PoisonError, RwLock};

use tracing::{debug, warn};

use crate::models::{NewNotification, Notification};
use crate::persist::{self, StorageAdapter};
use crate::state::{Action, AppState, reduce};

/// Callback invoked with the new state snapshot after every dispatch.
pub type ChangeHandler = Arc<dyn Fn(&AppState) + Send + Sync>;

/// Handle for unregistering a change listener.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ListenerId(u64);

struct ListenerEntry {
    id: ListenerId,
    handler: ChangeHandler,
}

/// Central state container for one dashboard instance.
///
/// State is immutable between dispatches: `dispatch` derives a wholly new
/// snapshot via the pure reducer, swaps it in, mirrors the persistable
/// projection to the injected adapter (fire-and-forget), then notifies
/// listeners with the just-computed snapshot.
pub struct AppStore {
    state: RwLock<AppState>,
    listeners: RwLock<Vec<ListenerEntry>>,
    next_listener_id: AtomicU64,
    /// Monotonic id source for notifications produced through [`Self::notify`].
    next_notification_id: AtomicU64,
    storage: Option<Box<dyn StorageAdapter>>,
}

impl AppStore {
    /// Creates a store with default state and no persistence.
    #[must_use]
    pub fn new() -> Self {
        Self::build(AppState::default(), None)
    }

    /// Creates a store backed by `storage`, rehydrating any prior state.
    ///
    /// A missing or malformed blob is logged and ignored; the store starts
    /// from defaults in that case.
    #[must_use]
    pub fn with_storage(storage: impl StorageAdapter + 'static) -> Self {
        let store = Self::build(AppState::default(), Some(Box::new(storage)));
        store.rehydrate();
        store
    }

    fn build(initial: AppState, storage: Option<Box<dyn StorageAdapter>>) -> Self {
        Self {
            state: RwLock::new(initial),
            listeners: RwLock::new(Vec::new()),
            next_listener_id: AtomicU64::new(1),
            next_notification_id: AtomicU64::new(1),
            storage,
        }
    }

    fn rehydrate(&self) {
        let Some(storage) = self.storage.as_deref() else {
            return;
        };
        match storage.load() {
            Ok(Some(raw)) => match persist::decode(&raw) {
                Ok(patch) => {
                    debug!("Rehydrating dashboard state from storage");
                    self.dispatch(Action::LoadState(patch));
                }
                Err(e) => {
                    warn!("Discarding malformed persisted state: {e}");
                }
            },
            Ok(None) => {
                debug!("No persisted dashboard state found, starting from defaults");
            }
            Err(e) => {
                warn!("Failed to read persisted state, starting from defaults: {e}");
            }
        }
    }

    /// Applies `action` and notifies listeners. Never fails.
    pub fn dispatch(&self, action: Action) {
        let next = {
            let current = self
                .state
                .read()
                .unwrap_or_else(PoisonError::into_inner);
            reduce(&current, &action)
        };
        {
            let mut current = self
                .state
                .write()
                .unwrap_or_else(PoisonError::into_inner);
            *current = next.clone();
        }

        self.persist(&next);

        let listeners = self
            .listeners
            .read()
            .unwrap_or_else(PoisonError::into_inner);
        for entry in listeners.iter() {
            (entry.handler)(&next);
        }
    }

    /// Adds a notification on behalf of an external producer, assigning the
    /// next store-owned id. Returns the assigned id.
    pub fn notify(&self, entry: NewNotification) -> u64 {
        let id = self.next_notification_id.fetch_add(1, Ordering::Relaxed);
        self.dispatch(Action::AddNotification(entry.with_id(id)));
        id
    }

    /// Adds a notification that already carries an id (e.g. replayed data).
    pub fn add_notification(&self, entry: Notification) {
        self.dispatch(Action::AddNotification(entry));
    }

    /// Current state snapshot.
    #[must_use]
    pub fn state(&self) -> AppState {
        self.state
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Registers a change listener, called synchronously after every
    /// dispatch with the new snapshot.
    pub fn subscribe<F>(&self, handler: F) -> ListenerId
    where
        F: Fn(&AppState) + Send + Sync + 'static,
    {
        let id = ListenerId(self.next_listener_id.fetch_add(1, Ordering::Relaxed));
        self.listeners
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .push(ListenerEntry {
                id,
                handler: Arc::new(handler),
            });
        id
    }

    /// Removes a listener. No-op if the id was never registered.
    pub fn unsubscribe(&self, id: ListenerId) {
        self.listeners
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .retain(|entry| entry.id != id);
    }

    /// Writes the persistable projection to storage. Failures are logged
    /// and swallowed: persistence must never surface as a user-visible
    /// error.
    fn persist(&self, state: &AppState) {
        let Some(storage) = self.storage.as_deref() else {
            return;
        };
        let raw = match persist::encode(state) {
            Ok(raw) => raw,
            Err(e) => {
                warn!("Failed to serialize dashboard state: {e}");
                return;
            }
        };
        if let Err(e) = storage.save(&raw) {
            warn!("Failed to persist dashboard state: {e}");
        }
    }
}

impl Default for AppStore {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    use super::*;
    use crate::errors::{Error, Result};
    use crate::models::{NotificationKind, Priority, Theme};
    use crate::persist::MemoryStorage;
    use crate::state::SettingsPatch;
    use crate::test_utils::{init_test_tracing, sample_new_notification, sample_notification};
    use std::sync::Mutex;
    use std::sync::atomic::AtomicUsize;

    #[test]
    fn dispatch_updates_snapshot() {
        let store = AppStore::new();
        store.dispatch(Action::SetCurrentPage("events".to_string()));
        assert_eq!(store.state().current_page, "events");
    }

    #[test]
    fn listeners_see_the_new_snapshot() {
        let store = AppStore::new();
        let seen = Arc::new(Mutex::new(Vec::<String>::new()));
        let seen_c = Arc::clone(&seen);

        store.subscribe(move |state| {
            seen_c.lock().unwrap().push(state.current_page.clone());
        });

        store.dispatch(Action::SetCurrentPage("clubs".to_string()));
        store.dispatch(Action::SetCurrentPage("users".to_string()));

        assert_eq!(*seen.lock().unwrap(), vec!["clubs", "users"]);
    }

    #[test]
    fn unsubscribe_stops_notifications_and_is_idempotent() {
        let store = AppStore::new();
        let count = Arc::new(AtomicUsize::new(0));
        let count_c = Arc::clone(&count);

        let id = store.subscribe(move |_| {
            count_c.fetch_add(1, Ordering::Relaxed);
        });

        store.dispatch(Action::ToggleSidebar);
        assert_eq!(count.load(Ordering::Relaxed), 1);

        store.unsubscribe(id);
        store.unsubscribe(id); // second removal is a no-op
        store.dispatch(Action::ToggleSidebar);
        assert_eq!(count.load(Ordering::Relaxed), 1);
    }

    #[test]
    fn notify_assigns_sequential_ids() {
        let store = AppStore::new();
        let first = store.notify(sample_new_notification("First"));
        let second = store.notify(sample_new_notification("Second"));
        assert_eq!(first, 1);
        assert_eq!(second, 2);

        let state = store.state();
        assert_eq!(state.notifications[0].id, second);
        assert_eq!(state.notifications[1].id, first);
    }

    #[test]
    fn every_change_is_mirrored_to_storage() {
        let storage = MemoryStorage::new();
        let store = AppStore::with_storage(storage.clone());

        store.dispatch(Action::SetCurrentPage("chat".to_string()));
        let raw = storage.load().unwrap().unwrap();
        let value: serde_json::Value = serde_json::from_str(&raw).unwrap();
        assert_eq!(value["currentPage"], "chat");

        store.dispatch(Action::SetSidebarCollapsed(true));
        let raw = storage.load().unwrap().unwrap();
        let value: serde_json::Value = serde_json::from_str(&raw).unwrap();
        assert_eq!(value["sidebarCollapsed"], true);
    }

    #[test]
    fn rehydration_restores_projection_only() {
        let storage = MemoryStorage::new();
        {
            let store = AppStore::with_storage(storage.clone());
            store.dispatch(Action::SetCurrentPage("rsvp".to_string()));
            store.dispatch(Action::SetSidebarCollapsed(true));
            store.dispatch(Action::UpdateSettings(SettingsPatch {
                theme: Some(Theme::Dark),
                ..Default::default()
            }));
            store.notify(sample_new_notification("Session-scoped"));
        }

        // Fresh store over the same storage: projection restored, session
        // data back at defaults.
        let store = AppStore::with_storage(storage);
        let state = store.state();
        assert_eq!(state.current_page, "rsvp");
        assert!(state.sidebar_collapsed);
        assert_eq!(state.settings.theme, Theme::Dark);
        assert!(state.notifications.is_empty());
        assert_eq!(state.user, crate::models::User::default());
    }

    #[test]
    fn malformed_blob_falls_back_to_defaults() {
        init_test_tracing();
        let storage = MemoryStorage::new();
        storage.save("{{{ definitely not json").unwrap();

        let store = AppStore::with_storage(storage);
        assert_eq!(store.state(), AppState::default());
    }

    struct FailingStorage;

    impl StorageAdapter for FailingStorage {
        fn load(&self) -> Result<Option<String>> {
            Ok(None)
        }
        fn save(&self, _raw: &str) -> Result<()> {
            Err(Error::Storage {
                message: "quota exceeded".to_string(),
            })
        }
    }

    #[test]
    fn write_failure_is_logged_not_propagated() {
        init_test_tracing();
        let store = AppStore::with_storage(FailingStorage);
        // Must not panic or error; the in-memory state still advances.
        store.dispatch(Action::SetCurrentPage("settings".to_string()));
        assert_eq!(store.state().current_page, "settings");
    }

    #[test]
    fn add_notification_accepts_preassigned_ids() {
        let store = AppStore::new();
        store.add_notification(sample_notification(41));
        assert_eq!(store.state().notifications[0].id, 41);
    }

    #[test]
    fn isolated_stores_do_not_share_state() {
        let a = AppStore::new();
        let b = AppStore::new();
        a.dispatch(Action::SetCurrentPage("events".to_string()));
        assert_eq!(b.state().current_page, "dashboard");
    }

    #[test]
    fn notify_respects_notification_kind_and_priority() {
        let store = AppStore::new();
        store.notify(NewNotification {
            kind: NotificationKind::Chat,
            title: "Chat Message Flagged".to_string(),
            message: "In Debate Club chat room".to_string(),
            time: "Yesterday".to_string(),
            priority: Priority::Medium,
        });
        let state = store.state();
        assert_eq!(state.notifications[0].kind, NotificationKind::Chat);
        assert_eq!(state.notifications[0].priority, Priority::Medium);
    }
}
