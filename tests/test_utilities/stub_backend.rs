//! Loopback HTTP backend for tests that exercise the real REST client.
//!
//! Serves canned JSON per `(method, path)` through an axum fallback handler
//! and records every request it receives.

use axum::body::Bytes;
use axum::extract::State;
use axum::http::{header, HeaderMap, Method, StatusCode, Uri};
use axum::response::IntoResponse;
use axum::Router;
use std::sync::{mpsc, Arc, Mutex};
use std::thread;

/// Path prefix of the stub's base URL
const API_PREFIX: &str = "/api";

#[derive(Debug, Clone)]
pub struct RecordedRequest {
    pub method: String,
    pub target: String,
    pub headers: Vec<(String, String)>,
    pub body: String,
}

impl RecordedRequest {
    /// Request path relative to the base URL
    pub fn path(&self) -> &str {
        let path = self.target.split('?').next().unwrap_or_default();
        path.strip_prefix(API_PREFIX).unwrap_or(path)
    }

    pub fn query(&self) -> Option<&str> {
        self.target.split_once('?').map(|(_, query)| query)
    }

    pub fn header(&self, name: &str) -> Option<&str> {
        let name = name.to_ascii_lowercase();
        self.headers
            .iter()
            .find(|(key, _)| *key == name)
            .map(|(_, value)| value.as_str())
    }

    pub fn json(&self) -> serde_json::Value {
        serde_json::from_str(&self.body).unwrap()
    }
}

#[derive(Debug, Clone)]
struct Route {
    method: Method,
    path: String,
    status: StatusCode,
    body: String,
}

struct StubState {
    routes: Vec<Route>,
    requests: Arc<Mutex<Vec<RecordedRequest>>>,
}

/// Builder for the routes a stub serves
#[derive(Default)]
pub struct StubBackendBuilder {
    routes: Vec<Route>,
}

impl StubBackendBuilder {
    pub fn route(mut self, method: &str, path: &str, status: u16, body: serde_json::Value) -> Self {
        self.routes.push(Route {
            method: Method::from_bytes(method.as_bytes()).unwrap(),
            path: path.to_string(),
            status: StatusCode::from_u16(status).unwrap(),
            body: body.to_string(),
        });
        self
    }

    /// Starts serving on an ephemeral loopback port.
    ///
    /// The server owns its own runtime thread so both `#[test]` and
    /// `#[tokio::test]` callers can use it.
    pub fn start(self) -> StubBackend {
        let requests = Arc::new(Mutex::new(Vec::new()));
        let state = Arc::new(StubState {
            routes: self.routes,
            requests: Arc::clone(&requests),
        });

        let (port_tx, port_rx) = mpsc::channel();
        thread::spawn(move || {
            let runtime = tokio::runtime::Builder::new_multi_thread()
                .worker_threads(1)
                .enable_all()
                .build()
                .unwrap();
            runtime.block_on(async move {
                let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
                port_tx.send(listener.local_addr().unwrap().port()).unwrap();

                let app = Router::new().fallback(respond).with_state(state);
                axum::serve(listener, app).await.unwrap();
            });
        });
        let port = port_rx.recv().unwrap();

        StubBackend { port, requests }
    }
}

pub struct StubBackend {
    port: u16,
    requests: Arc<Mutex<Vec<RecordedRequest>>>,
}

impl StubBackend {
    pub fn builder() -> StubBackendBuilder {
        StubBackendBuilder::default()
    }

    pub fn base_url(&self) -> String {
        format!("http://127.0.0.1:{}{}", self.port, API_PREFIX)
    }

    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.requests.lock().unwrap().clone()
    }

    /// Requests other than reads
    pub fn mutations(&self) -> Vec<RecordedRequest> {
        self.requests()
            .into_iter()
            .filter(|request| request.method != "GET")
            .collect()
    }
}

async fn respond(
    State(state): State<Arc<StubState>>,
    method: Method,
    uri: Uri,
    headers: HeaderMap,
    body: Bytes,
) -> impl IntoResponse {
    let request = RecordedRequest {
        method: method.to_string(),
        target: uri
            .path_and_query()
            .map(|target| target.as_str().to_string())
            .unwrap_or_else(|| uri.path().to_string()),
        headers: headers
            .iter()
            .map(|(name, value)| {
                (
                    name.as_str().to_ascii_lowercase(),
                    value.to_str().unwrap_or_default().to_string(),
                )
            })
            .collect(),
        body: String::from_utf8_lossy(&body).into_owned(),
    };

    let (status, payload) = state
        .routes
        .iter()
        .find(|route| route.method == method && route.path == request.path())
        .map(|route| (route.status, route.body.clone()))
        .unwrap_or_else(|| (StatusCode::NOT_FOUND, r#"{"message":"No route"}"#.to_string()));

    state.requests.lock().unwrap().push(request);

    (status, [(header::CONTENT_TYPE, "application/json")], payload)
}
