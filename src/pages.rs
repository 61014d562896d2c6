//! Static page registry and the page view-model.
//!
//! The registry is configuration data: a page key maps to the title and
//! subtitle the header renders. Lookup is total; unknown keys (including
//! stale persisted ones) resolve to the dashboard entry.

use crate::state::AppState;

/// Display title and subtitle for one page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageInfo {
    pub key: &'static str,
    pub title: &'static str,
    pub subtitle: &'static str,
}

/// All known pages, in sidebar order. The first entry is the default.
pub const PAGES: &[PageInfo] = &[
    PageInfo {
        key: "dashboard",
        title: "Dashboard Overview",
        subtitle: "Welcome back! Here's what's happening today.",
    },
    PageInfo {
        key: "events",
        title: "Manage Events",
        subtitle: "Create, edit, and monitor all campus events.",
    },
    PageInfo {
        key: "clubs",
        title: "Manage Clubs",
        subtitle: "Oversee club registrations and activities.",
    },
    PageInfo {
        key: "announcements",
        title: "Announcements",
        subtitle: "Send important updates to the campus community.",
    },
    PageInfo {
        key: "users",
        title: "User Management",
        subtitle: "Manage user accounts and permissions.",
    },
    PageInfo {
        key: "chat",
        title: "Club Chat Monitor",
        subtitle: "Monitor and moderate club chat rooms.",
    },
    PageInfo {
        key: "rsvp",
        title: "RSVP & Email Logs",
        subtitle: "Track event responses and email communications.",
    },
    PageInfo {
        key: "settings",
        title: "Settings",
        subtitle: "Configure system preferences and options.",
    },
    PageInfo {
        key: "help",
        title: "Help & Support",
        subtitle: "Get assistance and find documentation.",
    },
];

/// Resolves a page key. Total: unknown keys fall back to the dashboard.
#[must_use]
pub fn page_info(key: &str) -> &'static PageInfo {
    PAGES.iter().find(|p| p.key == key).unwrap_or(&PAGES[0])
}

/// What a display surface needs to render the page chrome. Produced by
/// [`view_model`] from a state snapshot; carries no rendering concerns.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageView {
    pub page: &'static PageInfo,
    pub user_name: String,
    pub unread_count: usize,
    pub sidebar_collapsed: bool,
    pub mobile_menu_open: bool,
}

/// Pure mapping from a state snapshot to the page view-model.
#[must_use]
pub fn view_model(state: &AppState) -> PageView {
    PageView {
        page: page_info(&state.current_page),
        user_name: state.user.name.clone(),
        unread_count: state.unread_count(),
        sidebar_collapsed: state.sidebar_collapsed,
        mobile_menu_open: state.mobile_menu_open,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::{Action, reduce};
    use crate::test_utils::sample_notification;

    #[test]
    fn known_keys_resolve_to_their_entry() {
        let info = page_info("events");
        assert_eq!(info.title, "Manage Events");
        let info = page_info("rsvp");
        assert_eq!(info.title, "RSVP & Email Logs");
    }

    #[test]
    fn unknown_key_falls_back_to_dashboard() {
        let info = page_info("nonexistent");
        assert_eq!(info.key, "dashboard");
        assert_eq!(info.title, "Dashboard Overview");
        assert_eq!(
            info.subtitle,
            "Welcome back! Here's what's happening today."
        );
    }

    #[test]
    fn registry_keys_are_unique() {
        for (i, a) in PAGES.iter().enumerate() {
            assert!(PAGES.iter().skip(i + 1).all(|b| b.key != a.key));
        }
    }

    #[test]
    fn view_model_reflects_navigation_and_unread_count() {
        let mut state = AppState::default();
        state = reduce(&state, &Action::SetCurrentPage("clubs".to_string()));
        state = reduce(&state, &Action::AddNotification(sample_notification(1)));
        state = reduce(&state, &Action::AddNotification(sample_notification(2)));
        state = reduce(&state, &Action::MarkNotificationRead(1));

        let view = view_model(&state);
        assert_eq!(view.page.title, "Manage Clubs");
        assert_eq!(view.unread_count, 1);
        assert_eq!(view.user_name, "Sarah Johnson");
        assert!(!view.sidebar_collapsed);
    }

    #[test]
    fn view_model_survives_unknown_page_key() {
        let state = reduce(
            &AppState::default(),
            &Action::SetCurrentPage("removed-page".to_string()),
        );
        assert_eq!(view_model(&state).page.key, "dashboard");
    }
}
