//! Admin profile configuration from environment variables.
//!
//! The session user is presentation data with sensible built-in defaults;
//! deployments override individual fields via `ADMIN_NAME`, `ADMIN_EMAIL`,
//! `ADMIN_AVATAR_URL`, and `ADMIN_ROLE` in the `.env` file. `last_login`
//! is always stamped at load time.

use chrono::Utc;
use tracing::warn;

use crate::models::{Role, User};

fn parse_role(raw: &str) -> Option<Role> {
    match raw {
        "Super Admin" => Some(Role::SuperAdmin),
        "Admin" => Some(Role::Admin),
        "Moderator" => Some(Role::Moderator),
        "Faculty" => Some(Role::Faculty),
        "Student" => Some(Role::Student),
        _ => None,
    }
}

/// Builds the session user from environment overrides layered over the
/// defaults. An unrecognized `ADMIN_ROLE` is logged and ignored.
#[must_use]
pub fn load_admin_profile() -> User {
    let mut user = User {
        last_login: Utc::now(),
        ..User::default()
    };

    if let Ok(name) = std::env::var("ADMIN_NAME") {
        user.name = name;
    }
    if let Ok(email) = std::env::var("ADMIN_EMAIL") {
        user.email = email;
    }
    if let Ok(avatar) = std::env::var("ADMIN_AVATAR_URL") {
        user.avatar = avatar;
    }
    if let Ok(raw) = std::env::var("ADMIN_ROLE") {
        match parse_role(&raw) {
            Some(role) => user.role = role,
            None => warn!("Unrecognized ADMIN_ROLE {raw:?}, keeping default"),
        }
    }

    user
}
