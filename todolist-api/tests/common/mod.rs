/// Common test utilities for integration tests
///
/// Builds the full router over in-memory repositories so HTTP behavior can
/// be exercised without a database.

use axum::body::Body;
use axum::http::{Request, Response, StatusCode};
use serde_json::Value;
use std::sync::Arc;
use todolist_api::app::{build_router, AppState};
use todolist_api::config::{ApiConfig, AuthConfig, Config, DatabaseConfig};
use todolist_shared::repositories::memory::{InMemoryTodoRepository, InMemoryUserRepository};
use todolist_shared::usecases::TodoUseCases;
use tower::Service as _;

pub const TEST_SECRET: &str = "integration-secret";

/// Test context containing the app and the repositories behind it
pub struct TestContext {
    pub app: axum::Router,
    pub todos: Arc<InMemoryTodoRepository>,
    pub users: Arc<InMemoryUserRepository>,
}

impl TestContext {
    /// App configured with [`TEST_SECRET`]
    pub fn new() -> Self {
        Self::with_secret(Some(TEST_SECRET))
    }

    /// App with an explicit (possibly absent) API secret
    pub fn with_secret(secret: Option<&str>) -> Self {
        let config = Config {
            api: ApiConfig {
                host: "127.0.0.1".to_string(),
                port: 0,
                cors_origins: vec!["*".to_string()],
            },
            database: DatabaseConfig {
                url: "postgresql://localhost/unused".to_string(),
                max_connections: 1,
            },
            auth: AuthConfig {
                api_secret: secret.map(String::from),
            },
        };

        let todos = Arc::new(InMemoryTodoRepository::new());
        let users = Arc::new(InMemoryUserRepository::new());
        let usecases = TodoUseCases::new(todos.clone(), users.clone());
        let app = build_router(AppState::new(config, usecases));

        Self { app, todos, users }
    }

    /// Total repository calls made so far
    pub fn repository_calls(&self) -> usize {
        self.todos.calls() + self.users.calls()
    }

    /// Sends a request and returns status plus parsed JSON body
    pub async fn send(&self, request: Request<Body>) -> (StatusCode, Value) {
        let response = self.app.clone().call(request).await.unwrap();
        read_json(response).await
    }

    /// Exchanges the test secret for an access token
    pub async fn token(&self) -> String {
        let (status, body) = self
            .send(json_request(
                "POST",
                "/api/auth/token",
                None,
                serde_json::json!({ "apiSecret": TEST_SECRET }),
            ))
            .await;
        assert_eq!(status, StatusCode::OK, "token request failed: {}", body);
        body["accessToken"].as_str().unwrap().to_string()
    }
}

/// Builds a JSON request, optionally with a bearer token
pub fn json_request(method: &str, uri: &str, token: Option<&str>, body: Value) -> Request<Body> {
    let mut builder = Request::builder()
        .method(method)
        .uri(uri)
        .header("content-type", "application/json");
    if let Some(token) = token {
        builder = builder.header("authorization", format!("Bearer {}", token));
    }
    builder.body(Body::from(body.to_string())).unwrap()
}

/// Builds a body-less request, optionally with a bearer token
pub fn empty_request(method: &str, uri: &str, token: Option<&str>) -> Request<Body> {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(token) = token {
        builder = builder.header("authorization", format!("Bearer {}", token));
    }
    builder.body(Body::empty()).unwrap()
}

/// Reads a response body as JSON (`Value::Null` when empty)
pub async fn read_json(response: Response<Body>) -> (StatusCode, Value) {
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let body = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap_or_else(|_| {
            Value::String(String::from_utf8_lossy(&bytes).into_owned())
        })
    };
    (status, body)
}

/// A valid create-todo body for the given todo and user IDs
pub fn create_body(todo_id: &str, user_id: &str) -> Value {
    serde_json::json!({
        "todo": {
            "id": todo_id,
            "description": "buy milk",
            "status": "pending",
            "userId": user_id
        },
        "user": {
            "id": user_id,
            "name": "A",
            "email": "a@x.com",
            "idTenant": "t1"
        }
    })
}
