mod api;
mod app;
mod auth;
mod config;
mod domain;
mod error;
mod forms;
mod logging;
mod middleware;
mod routes;
mod services;
mod store;

use anyhow::{Context, Result};

use auth::SessionRegistry;
use services::NotificationCenter;
use store::Store;

#[tokio::main]
async fn main() -> Result<()> {
    // Load environment variables
    dotenvy::dotenv().ok();

    let settings = config::Settings::from_env()?;

    logging::init_logging(&settings.env);

    tracing::info!(
        env = ?settings.env,
        server_addr = %settings.server_addr,
        "Starting SkillSwap backend"
    );

    let store = Store::new(settings.event_channel_capacity);
    let sessions = SessionRegistry::new(settings.session_ttl_seconds);

    // Subscribe before seeding so demo data is visible to listeners too
    let notifications = NotificationCenter::new(settings.notification_inbox_limit);
    notifications.spawn_listener(store.clone());

    if settings.seed_demo_data {
        let accounts = store::seed::load_demo_data(&store).context("Failed to seed demo data")?;
        for account in &accounts {
            sessions.register_account(&account.email, &account.name, account.user_id);
        }
        tracing::info!(accounts = accounts.len(), "Demo accounts registered");
    }

    let state = app::AppState::new(settings.clone(), store, sessions, notifications);
    let app = app::create_app(state);

    let listener = tokio::net::TcpListener::bind(&settings.server_addr)
        .await
        .with_context(|| format!("Failed to bind {}", settings.server_addr))?;
    tracing::info!("Listening on {}", settings.server_addr);

    axum::serve(listener, app).await?;

    Ok(())
}
