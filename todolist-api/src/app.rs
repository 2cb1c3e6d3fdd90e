/// Application state and router builder
///
/// This module defines the shared application state and provides
/// a function to build the Axum router with all routes and middleware.
///
/// # Example
///
/// ```no_run
/// use std::sync::Arc;
/// use todolist_api::{app::AppState, config::Config};
/// use todolist_shared::{
///     repositories::postgres::{PgTodoRepository, PgUserRepository},
///     usecases::TodoUseCases,
/// };
/// use sqlx::PgPool;
///
/// # async fn example() -> anyhow::Result<()> {
/// let config = Config::from_env()?;
/// let pool = PgPool::connect(&config.database.url).await?;
/// let usecases = TodoUseCases::new(
///     Arc::new(PgTodoRepository::new(pool.clone())),
///     Arc::new(PgUserRepository::new(pool.clone())),
/// );
/// let state = AppState::new(config, usecases).with_database(pool);
/// let app = todolist_api::app::build_router(state);
/// # Ok(())
/// # }
/// ```

use crate::{config::Config, error::ApiError};
use axum::{
    extract::Request,
    http::{header, HeaderValue, Method},
    middleware::Next,
    response::Response,
    routing::{get, post},
    Router,
};
use sqlx::PgPool;
use std::sync::Arc;
use todolist_shared::{auth::middleware::authenticate, usecases::TodoUseCases};
use tower_http::{
    cors::CorsLayer,
    trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer},
};
use tracing::Level;

/// Shared application state
///
/// Cloned for each request via Axum's `State` extractor.
#[derive(Clone)]
pub struct AppState {
    /// Todo use cases, wired to whichever repositories the caller chose
    pub usecases: TodoUseCases,

    /// Application configuration
    pub config: Arc<Config>,

    /// Database pool, used by the health check when present
    pub db: Option<PgPool>,
}

impl AppState {
    /// Creates new application state without a database handle
    pub fn new(config: Config, usecases: TodoUseCases) -> Self {
        Self {
            usecases,
            config: Arc::new(config),
            db: None,
        }
    }

    /// Attaches the pool so `/health` can report on it
    pub fn with_database(mut self, pool: PgPool) -> Self {
        self.db = Some(pool);
        self
    }

    /// Configured API secret, if any
    pub fn api_secret(&self) -> Option<&str> {
        self.config.auth.api_secret.as_deref()
    }
}

/// Builds the complete Axum router with all routes and middleware
///
/// # Architecture
///
/// ```text
/// /
/// ├── /health                 # Health check (public)
/// └── /api/
///     ├── POST /auth/token    # Exchange API secret for access token (public)
///     └── /todos              # Bearer token required
///         ├── POST            # Create todo
///         ├── GET    ?userId  # List a user's todos
///         ├── PUT             # Update todo
///         └── DELETE ?id      # Delete todo
/// ```
///
/// # Middleware Stack
///
/// 1. Logging (tower-http TraceLayer)
/// 2. CORS (tower-http CorsLayer)
/// 3. Bearer authentication (`/api/todos` only, before extractors run)
pub fn build_router(state: AppState) -> Router {
    use crate::routes;

    let health_routes = Router::new().route("/health", get(routes::health::health_check));

    // route_layer so unmatched methods still get 405 rather than 401
    let todo_routes = Router::new()
        .route(
            "/api/todos",
            post(routes::todos::create_todo)
                .get(routes::todos::list_todos)
                .put(routes::todos::update_todo)
                .delete(routes::todos::delete_todo),
        )
        .route_layer(axum::middleware::from_fn(bearer_auth_layer));

    Router::new()
        .merge(health_routes)
        .route("/api/auth/token", post(routes::auth::issue_token))
        .merge(todo_routes)
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO)),
        )
        .layer(cors_layer(&state.config))
        .with_state(state)
}

fn cors_layer(config: &Config) -> CorsLayer {
    if config.cors_permissive() {
        return CorsLayer::permissive();
    }

    let origins: Vec<HeaderValue> = config
        .api
        .cors_origins
        .iter()
        .filter_map(|origin| origin.parse().ok())
        .collect();

    CorsLayer::new()
        .allow_origin(origins)
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers([header::AUTHORIZATION, header::CONTENT_TYPE])
        .max_age(std::time::Duration::from_secs(3600))
}

/// Bearer authentication middleware layer
///
/// Verifies the `Authorization` header. Rejections never reach the handler.
/// Tokens carry no identity, so nothing is passed on to handlers.
pub async fn bearer_auth_layer(req: Request, next: Next) -> Result<Response, ApiError> {
    let context = authenticate(req.headers())?;

    tracing::debug!(token = %context.token, "Authenticated request");

    Ok(next.run(req).await)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{ApiConfig, AuthConfig, DatabaseConfig};
    use todolist_shared::repositories::memory::{InMemoryTodoRepository, InMemoryUserRepository};

    fn config(secret: Option<&str>) -> Config {
        Config {
            api: ApiConfig {
                host: "127.0.0.1".to_string(),
                port: 0,
                cors_origins: vec!["https://app.example".to_string()],
            },
            database: DatabaseConfig {
                url: "postgresql://localhost/unused".to_string(),
                max_connections: 1,
            },
            auth: AuthConfig {
                api_secret: secret.map(String::from),
            },
        }
    }

    fn usecases() -> TodoUseCases {
        TodoUseCases::new(
            Arc::new(InMemoryTodoRepository::new()),
            Arc::new(InMemoryUserRepository::new()),
        )
    }

    #[test]
    fn test_app_state_secret() {
        let state = AppState::new(config(Some("s3cret")), usecases());
        assert_eq!(state.api_secret(), Some("s3cret"));
        assert!(state.db.is_none());

        let state = AppState::new(config(None), usecases());
        assert_eq!(state.api_secret(), None);
    }

    #[test]
    fn test_router_builds_with_origin_list() {
        let state = AppState::new(config(None), usecases());
        let _router = build_router(state);
    }
}
