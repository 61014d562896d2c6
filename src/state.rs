//! Application state shape, the action set, and the pure reducer.
//!
//! The reducer is a pure function: it never mutates its input and never
//! fails. Dispatching is the store's job ([`crate::store::AppStore`]); this
//! module only knows how to turn (state, action) into the next state.

use serde::{Deserialize, Serialize};

use crate::models::{Notification, Settings, Theme, User};

/// Maximum number of notifications retained; older entries are dropped
/// silently.
pub const NOTIFICATION_CAP: usize = 50;

/// Page key shown when no prior state exists.
pub const DEFAULT_PAGE: &str = "dashboard";

/// The full in-memory application state. One snapshot per dispatch.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AppState {
    pub user: User,
    pub current_page: String,
    pub sidebar_collapsed: bool,
    pub mobile_menu_open: bool,
    /// Newest-first, capped at [`NOTIFICATION_CAP`].
    pub notifications: Vec<Notification>,
    pub settings: Settings,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            user: User::default(),
            current_page: DEFAULT_PAGE.to_string(),
            sidebar_collapsed: false,
            mobile_menu_open: false,
            notifications: Vec::new(),
            settings: Settings::default(),
        }
    }
}

impl AppState {
    /// Number of unread notifications.
    #[must_use]
    pub fn unread_count(&self) -> usize {
        self.notifications.iter().filter(|n| !n.read).count()
    }
}

/// Partial settings update. Unset fields keep their prior value.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SettingsPatch {
    pub theme: Option<Theme>,
    pub notifications: Option<bool>,
    pub auto_refresh: Option<bool>,
    pub refresh_interval: Option<u64>,
    pub items_per_page: Option<u32>,
    pub sidebar_collapsed: Option<bool>,
}

impl SettingsPatch {
    fn apply(&self, prior: &Settings) -> Settings {
        Settings {
            theme: self.theme.unwrap_or(prior.theme),
            notifications: self.notifications.unwrap_or(prior.notifications),
            auto_refresh: self.auto_refresh.unwrap_or(prior.auto_refresh),
            refresh_interval: self.refresh_interval.unwrap_or(prior.refresh_interval),
            items_per_page: self.items_per_page.unwrap_or(prior.items_per_page),
            sidebar_collapsed: self.sidebar_collapsed.unwrap_or(prior.sidebar_collapsed),
        }
    }
}

/// Partial top-level state, shallow-merged by `Action::LoadState`.
///
/// Accepts any subset of the full shape; the persistence bridge only ever
/// produces the three-field projection in [`crate::persist::PersistedState`].
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct StatePatch {
    pub user: Option<User>,
    pub current_page: Option<String>,
    pub sidebar_collapsed: Option<bool>,
    pub mobile_menu_open: Option<bool>,
    pub notifications: Option<Vec<Notification>>,
    pub settings: Option<Settings>,
}

/// A requested state change. Dispatching never fails; `Noop` is the
/// explicit identity transform kept for forward compatibility of the
/// action set.
#[derive(Debug, Clone)]
pub enum Action {
    SetCurrentPage(String),
    ToggleSidebar,
    SetSidebarCollapsed(bool),
    ToggleMobileMenu,
    SetMobileMenuOpen(bool),
    AddNotification(Notification),
    MarkNotificationRead(u64),
    ClearNotifications,
    UpdateSettings(SettingsPatch),
    SetUser(User),
    /// Rehydration path only; shallow-merges top-level fields.
    LoadState(StatePatch),
    Noop,
}

/// Pure reducer: (current state, action) -> next state.
///
/// Every call produces a wholly new snapshot; the input is never mutated.
#[must_use]
pub fn reduce(state: &AppState, action: &Action) -> AppState {
    match action {
        Action::SetCurrentPage(page) => AppState {
            // Stored verbatim; the page registry resolves unknown keys at
            // display time.
            current_page: page.clone(),
            ..state.clone()
        },

        Action::ToggleSidebar => AppState {
            sidebar_collapsed: !state.sidebar_collapsed,
            ..state.clone()
        },

        Action::SetSidebarCollapsed(collapsed) => AppState {
            sidebar_collapsed: *collapsed,
            ..state.clone()
        },

        Action::ToggleMobileMenu => AppState {
            mobile_menu_open: !state.mobile_menu_open,
            ..state.clone()
        },

        Action::SetMobileMenuOpen(open) => AppState {
            mobile_menu_open: *open,
            ..state.clone()
        },

        Action::AddNotification(entry) => {
            let mut notifications = Vec::with_capacity(state.notifications.len() + 1);
            notifications.push(entry.clone());
            notifications.extend(state.notifications.iter().cloned());
            notifications.truncate(NOTIFICATION_CAP);
            AppState {
                notifications,
                ..state.clone()
            }
        }

        Action::MarkNotificationRead(id) => AppState {
            notifications: state
                .notifications
                .iter()
                .map(|n| {
                    if n.id == *id {
                        Notification {
                            read: true,
                            ..n.clone()
                        }
                    } else {
                        n.clone()
                    }
                })
                .collect(),
            ..state.clone()
        },

        Action::ClearNotifications => AppState {
            notifications: Vec::new(),
            ..state.clone()
        },

        Action::UpdateSettings(patch) => AppState {
            settings: patch.apply(&state.settings),
            ..state.clone()
        },

        Action::SetUser(user) => AppState {
            user: user.clone(),
            ..state.clone()
        },

        Action::LoadState(patch) => AppState {
            user: patch.user.clone().unwrap_or_else(|| state.user.clone()),
            current_page: patch
                .current_page
                .clone()
                .unwrap_or_else(|| state.current_page.clone()),
            sidebar_collapsed: patch.sidebar_collapsed.unwrap_or(state.sidebar_collapsed),
            mobile_menu_open: patch.mobile_menu_open.unwrap_or(state.mobile_menu_open),
            notifications: patch
                .notifications
                .clone()
                .unwrap_or_else(|| state.notifications.clone()),
            settings: patch
                .settings
                .clone()
                .unwrap_or_else(|| state.settings.clone()),
        },

        Action::Noop => state.clone(),
    }
}
