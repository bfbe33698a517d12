use std::sync::Arc;

use axum::{
    body::Body,
    http::{Method, Request, StatusCode},
    middleware, Router,
};
use paydesk_api::{
    config::AppConfig,
    db::{self, DbConfig},
    entities::admin,
    services::admins::RegisterAdminInput,
    AppState,
};
use serde_json::Value;
use tower::ServiceExt;

/// Test harness: the full application router backed by an in-memory SQLite
/// database, plus a staff admin and its bearer token.
pub struct TestApp {
    router: Router,
    pub state: AppState,
    token: String,
}

impl TestApp {
    /// Construct a new test application with fresh database state.
    pub async fn new() -> Self {
        let cfg = AppConfig {
            database_url: "sqlite::memory:".to_string(),
            jwt_secret: "test-secret-key-for-testing-purposes-only".to_string(),
            jwt_expiration: 3600,
            host: "127.0.0.1".to_string(),
            port: 18080,
            environment: "test".to_string(),
            log_level: "info".to_string(),
            log_json: false,
            auto_migrate: true,
            cors_allowed_origins: None,
            cors_allow_any_origin: false,
            db_max_connections: 1,
            db_min_connections: 1,
            db_connect_timeout_secs: 30,
            db_idle_timeout_secs: 600,
            db_acquire_timeout_secs: 8,
            bootstrap_username: None,
            bootstrap_email: None,
            bootstrap_password: None,
        };

        // A single connection keeps the in-memory database alive and shared.
        let pool = db::establish_connection_with_config(&DbConfig {
            url: cfg.database_url.clone(),
            max_connections: 1,
            min_connections: 1,
            ..Default::default()
        })
        .await
        .expect("failed to create test database");

        db::run_migrations(&pool)
            .await
            .expect("failed to run migrations in tests");

        let state = AppState::new(Arc::new(pool), cfg);

        let admin = state
            .services
            .admins
            .bootstrap_superuser("testadmin", "test@admin.com", "testpassword")
            .await
            .expect("bootstrap superuser")
            .expect("superuser should not exist yet");
        let token = state.auth.issue_token(&admin).expect("issue token");

        let auth_service = state.auth.clone();
        let router = Router::new()
            .merge(paydesk_api::api_routes())
            .layer(middleware::from_fn_with_state(
                auth_service,
                |axum::extract::State(auth): axum::extract::State<
                    Arc<paydesk_api::auth::AuthService>,
                >,
                 mut req: Request<Body>,
                 next: middleware::Next| async move {
                    req.extensions_mut().insert(auth);
                    next.run(req).await
                },
            ))
            .with_state(state.clone());

        Self {
            router,
            state,
            token,
        }
    }

    /// Bearer token of the default staff admin.
    #[allow(dead_code)]
    pub fn token(&self) -> &str {
        &self.token
    }

    /// Register another admin through the service layer and return it with a
    /// fresh token.
    #[allow(dead_code)]
    pub async fn create_admin(&self, username: &str, is_staff: bool) -> (admin::Model, String) {
        let input = RegisterAdminInput {
            username: username.to_string(),
            name: Some(format!("{} name", username)),
            email: format!("{}@admin.com", username),
            password: "testpassword".to_string(),
            title: None,
            address: None,
            phone: None,
            postal_code: None,
            birth_date: None,
            nationality_id: None,
            is_staff: Some(is_staff),
        };
        let admin = self
            .state
            .services
            .admins
            .register(input, None)
            .await
            .expect("register test admin");
        let token = self.state.auth.issue_token(&admin).expect("issue token");
        (admin, token)
    }

    /// Send a request against the router with an optional bearer token.
    pub async fn request(
        &self,
        method: Method,
        uri: &str,
        body: Option<Value>,
        token: Option<&str>,
    ) -> axum::response::Response {
        let mut builder = Request::builder().method(method).uri(uri);

        if let Some(tok) = token {
            builder = builder.header("authorization", format!("Bearer {}", tok));
        }

        let body = if let Some(json) = body {
            builder = builder.header("content-type", "application/json");
            Body::from(serde_json::to_vec(&json).expect("serialize json request body"))
        } else {
            Body::empty()
        };

        let request = builder.body(body).expect("failed to build request");
        self.router
            .clone()
            .oneshot(request)
            .await
            .expect("router error during test request")
    }

    /// Convenience helper for requests authenticated as the staff admin.
    pub async fn request_authenticated(
        &self,
        method: Method,
        uri: &str,
        body: Option<Value>,
    ) -> axum::response::Response {
        self.request(method, uri, body, Some(&self.token)).await
    }
}

/// Read a response body as JSON.
pub async fn body_json(response: axum::response::Response) -> Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("read response body");
    if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).expect("response body should be JSON")
    }
}

/// Assert a status and return the parsed body.
pub async fn expect_status(
    response: axum::response::Response,
    expected: StatusCode,
) -> Value {
    let status = response.status();
    let body = body_json(response).await;
    assert_eq!(status, expected, "unexpected status, body: {}", body);
    body
}
