//! # Todolist API Server
//!
//! Loads configuration, connects to PostgreSQL, applies migrations, and
//! serves the todo API until Ctrl-C.
//!
//! ## Usage
//!
//! ```bash
//! DATABASE_URL=postgresql://localhost/todolist API_SECRET=changeme cargo run -p todolist-api
//! ```

use std::sync::Arc;

use todolist_api::{
    app::{build_router, AppState},
    config::Config,
};
use todolist_shared::{
    db::{migrations, pool},
    repositories::postgres::{PgTodoRepository, PgUserRepository},
    usecases::TodoUseCases,
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "todolist_api=debug,todolist_shared=info,tower_http=debug".into());

    let json = std::env::var("LOG_FORMAT")
        .map(|v| v.eq_ignore_ascii_case("json"))
        .unwrap_or(false);

    let registry = tracing_subscriber::registry().with(filter);
    if json {
        registry.with(tracing_subscriber::fmt::layer().json()).init();
    } else {
        registry.with(tracing_subscriber::fmt::layer()).init();
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = Config::from_env()?;
    init_tracing();

    tracing::info!(
        "Todolist API Server v{} starting...",
        env!("CARGO_PKG_VERSION")
    );
    tracing::debug!(?config, "Loaded configuration");

    if config.auth.api_secret.is_none() {
        tracing::warn!("API_SECRET is not set; token requests will fail");
    }

    let db = pool::create_pool(pool::DatabaseConfig {
        url: config.database.url.clone(),
        max_connections: config.database.max_connections,
        ..Default::default()
    })
    .await?;

    migrations::run_migrations(&db).await?;

    let status = migrations::get_migration_status(&db).await?;
    if status.is_up_to_date() {
        tracing::info!(
            applied = status.applied_migrations,
            latest_version = ?status.latest_version,
            "Database schema is up to date"
        );
    } else {
        tracing::warn!(
            applied = status.applied_migrations,
            known = status.known_migrations,
            "Database schema is behind this build"
        );
    }

    let usecases = TodoUseCases::new(
        Arc::new(PgTodoRepository::new(db.clone())),
        Arc::new(PgUserRepository::new(db.clone())),
    );

    let bind_address = config.bind_address();
    let state = AppState::new(config, usecases).with_database(db.clone());
    let app = build_router(state);

    let listener = tokio::net::TcpListener::bind(&bind_address).await?;
    tracing::info!("Server listening on http://{}", bind_address);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    pool::close_pool(db).await;
    tracing::info!("Server stopped");

    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "Failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown signal received, draining connections...");
}
