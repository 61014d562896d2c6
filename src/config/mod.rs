//! Application configuration: storage location, admin profile overrides,
//! and seed data.

/// Admin profile loading from environment variables
pub mod profile;

/// Seed notification and settings loading from config.toml
pub mod seeds;

/// Durable state file location
pub mod storage;

use std::path::PathBuf;

use tracing::info;

use crate::errors::Result;
use crate::models::User;

/// Everything `main` needs to wire up a dashboard instance.
#[derive(Debug)]
pub struct AppConfig {
    /// Where the persisted state blob lives.
    pub state_path: PathBuf,
    /// The session user, from env overrides or built-in defaults.
    pub admin: User,
    /// Seed data from config.toml (empty when the file is absent).
    pub seeds: seeds::SeedConfig,
}

/// Loads the full application configuration.
///
/// The state path and admin profile always resolve (env vars with
/// defaults); seed loading tolerates a missing config.toml but surfaces
/// parse errors, since a present-but-broken file is worth failing loudly
/// over.
pub fn load_app_configuration() -> Result<AppConfig> {
    let state_path = storage::state_path();
    let admin = profile::load_admin_profile();
    let seeds = seeds::load_default_seeds()?;
    info!(
        "Configuration loaded: state file {:?}, {} seed notification(s)",
        state_path,
        seeds.notifications.len()
    );
    Ok(AppConfig {
        state_path,
        admin,
        seeds,
    })
}
