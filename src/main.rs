use dotenvy::dotenv;
use tracing::info;
use tracing_subscriber::EnvFilter;

use campus_hub_admin::config;
use campus_hub_admin::errors::Result;
use campus_hub_admin::models::ToastKind;
use campus_hub_admin::pages;
use campus_hub_admin::persist::FileStorage;
use campus_hub_admin::state::Action;
use campus_hub_admin::store::AppStore;
use campus_hub_admin::toast::{ToastQueue, ToastRequest};

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    // 1. Initialize tracing (as early as possible)
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    // 2. Load .env file (non-fatal, env vars can be set externally)
    dotenv().ok();
    info!("Attempted to load .env file.");

    // 3. Load the application configuration
    let app_config = config::load_app_configuration()?;

    // 4. Construct the store over file-backed storage, rehydrating any
    //    prior session's preferences
    let store = AppStore::with_storage(FileStorage::new(&app_config.state_path));
    store.dispatch(Action::SetUser(app_config.admin.clone()));
    if let Some(overrides) = app_config.seeds.settings.clone() {
        store.dispatch(Action::UpdateSettings(overrides.into_patch()));
    }
    info!(
        "Store initialized, resuming on page {:?}.",
        store.state().current_page
    );

    // 5. Seed notifications through the normal producer path
    for entry in app_config.seeds.notifications.clone() {
        store.notify(entry);
    }

    // 6. Greet the returning admin
    let toasts = ToastQueue::new();
    toasts.show(
        ToastRequest::new(
            ToastKind::Success,
            format!("Welcome back, {}!", app_config.admin.name),
        )
        .duration_ms(1_000),
    );

    let view = pages::view_model(&store.state());
    info!(
        "{}: {} ({} unread notification(s))",
        view.page.title, view.page.subtitle, view.unread_count
    );

    // Let the welcome toast run its course before shutting down.
    tokio::time::sleep(std::time::Duration::from_millis(1_100)).await;
    info!("{} toast(s) still active at shutdown.", toasts.len());

    Ok(())
}
