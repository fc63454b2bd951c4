//! Shared harness for storefront router tests.
//!
//! Spins up a stand-in commerce backend on an ephemeral port that answers
//! canned JSON per route and records every request it receives, then builds
//! the storefront router against it.

#![allow(dead_code, clippy::unwrap_used, clippy::missing_panics_doc)]

use std::collections::HashMap;
use std::net::SocketAddr;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use axum::{
    Router,
    body::Body,
    extract::State,
    http::{HeaderMap, Method, Request, Response, StatusCode, Uri, header},
};
use creator_market_storefront::{
    app,
    config::{BackendConfig, StorefrontConfig},
    state::AppState,
};
use serde_json::Value;
use tower::ServiceExt;
use url::Url;

/// Cookie header carrying both session tokens.
pub const TOKEN_COOKIES: &str = "accessToken=access-abc; refreshToken=refresh-xyz";

/// A request as seen by the stand-in backend.
#[derive(Debug, Clone)]
pub struct RecordedCall {
    pub method: Method,
    pub path: String,
    pub query: Option<String>,
    pub cookie: Option<String>,
    pub body: String,
}

#[derive(Default)]
struct MockState {
    responses: Mutex<HashMap<(Method, String), (StatusCode, String)>>,
    calls: Mutex<Vec<RecordedCall>>,
}

/// Stand-in commerce backend.
#[derive(Clone)]
pub struct MockBackend {
    addr: SocketAddr,
    state: Arc<MockState>,
}

impl MockBackend {
    /// Start the backend; unconfigured routes answer 404.
    pub async fn start() -> Self {
        let state = Arc::new(MockState::default());
        let router = Router::new()
            .fallback(record_and_respond)
            .with_state(Arc::clone(&state));

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, router).await.unwrap();
        });

        Self { addr, state }
    }

    /// Base URL the storefront should call, including the `/api` prefix.
    pub fn base_url(&self) -> Url {
        Url::parse(&format!("http://{}/api", self.addr)).unwrap()
    }

    /// Answer `method path` with a JSON body.
    pub fn respond_json(&self, method: Method, path: &str, body: &Value) -> &Self {
        self.respond(method, path, StatusCode::OK, &body.to_string())
    }

    /// Answer `method path` with a fixed status and raw body.
    pub fn respond(&self, method: Method, path: &str, status: StatusCode, body: &str) -> &Self {
        self.state
            .responses
            .lock()
            .unwrap()
            .insert((method, path.to_string()), (status, body.to_string()));
        self
    }

    /// Every request received so far.
    pub fn calls(&self) -> Vec<RecordedCall> {
        self.state.calls.lock().unwrap().clone()
    }

    /// Requests received with the given method.
    pub fn calls_with(&self, method: &Method) -> Vec<RecordedCall> {
        self.calls()
            .into_iter()
            .filter(|c| &c.method == method)
            .collect()
    }
}

async fn record_and_respond(
    State(state): State<Arc<MockState>>,
    method: Method,
    uri: Uri,
    headers: HeaderMap,
    body: String,
) -> (StatusCode, [(header::HeaderName, &'static str); 1], String) {
    state.calls.lock().unwrap().push(RecordedCall {
        method: method.clone(),
        path: uri.path().to_string(),
        query: uri.query().map(ToString::to_string),
        cookie: headers
            .get(header::COOKIE)
            .and_then(|v| v.to_str().ok())
            .map(ToString::to_string),
        body,
    });

    let (status, body) = state
        .responses
        .lock()
        .unwrap()
        .get(&(method, uri.path().to_string()))
        .cloned()
        .unwrap_or((StatusCode::NOT_FOUND, String::new()));

    (status, [(header::CONTENT_TYPE, "application/json")], body)
}

/// Storefront configuration pointing at `backend`.
pub fn test_config(backend: Url) -> StorefrontConfig {
    StorefrontConfig {
        host: "127.0.0.1".parse().unwrap(),
        port: 3000,
        base_url: "http://localhost:3000".to_string(),
        backend: BackendConfig {
            base_url: backend,
            timeout: Duration::from_secs(5),
        },
        sentry_dsn: None,
        sentry_environment: None,
        sentry_sample_rate: 1.0,
        sentry_traces_sample_rate: 0.0,
    }
}

/// Storefront router wired to `backend`.
pub fn storefront(backend: &MockBackend) -> Router {
    app(AppState::new(test_config(backend.base_url())).unwrap())
}

/// Send a request through the router.
pub async fn send(app: &Router, request: Request<Body>) -> Response<Body> {
    app.clone().oneshot(request).await.unwrap()
}

/// GET `uri` with an optional `Cookie` header.
pub async fn get(app: &Router, uri: &str, cookie: Option<&str>) -> Response<Body> {
    let mut builder = Request::get(uri);
    if let Some(cookie) = cookie {
        builder = builder.header(header::COOKIE, cookie);
    }
    send(app, builder.body(Body::empty()).unwrap()).await
}

/// Read a response body as text.
pub async fn body_text(response: Response<Body>) -> String {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    String::from_utf8(bytes.to_vec()).unwrap()
}

/// `name=value` of the session cookie set by a response.
pub fn session_cookie(response: &Response<Body>) -> String {
    response
        .headers()
        .get_all(header::SET_COOKIE)
        .iter()
        .filter_map(|v| v.to_str().ok())
        .find(|v| v.starts_with("cm_session="))
        .and_then(|v| v.split(';').next())
        .unwrap()
        .to_string()
}

/// Hand a customer identity to the storefront and return the session cookie.
pub async fn sign_in(app: &Router, customer: &Value) -> String {
    let request = Request::post("/auth/session")
        .header(header::COOKIE, TOKEN_COOKIES)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(customer.to_string()))
        .unwrap();

    let response = send(app, request).await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);
    session_cookie(&response)
}
