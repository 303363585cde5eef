use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::routing::get;
use axum::Router;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

/// A request the mock service received, with the query already decoded
#[derive(Debug, Clone, PartialEq)]
pub struct RecordedRequest {
    pub endpoint: String,
    pub name: Option<String>,
}

type Responder = Arc<dyn Fn(&str, &str) -> (StatusCode, String) + Send + Sync>;

#[derive(Clone)]
struct ServiceState {
    responder: Responder,
    requests: Arc<Mutex<Vec<RecordedRequest>>>,
}

/// In-process stand-in for the `/syllabus/{course,teacher}` service
pub struct MockSyllabusService {
    pub base_url: String,
    requests: Arc<Mutex<Vec<RecordedRequest>>>,
}

impl MockSyllabusService {
    /// Start a server that answers every search with `responder(endpoint, name)`
    pub async fn start<F>(responder: F) -> Self
    where
        F: Fn(&str, &str) -> (StatusCode, String) + Send + Sync + 'static,
    {
        let requests = Arc::new(Mutex::new(Vec::new()));
        let state = ServiceState {
            responder: Arc::new(responder),
            requests: requests.clone(),
        };

        let app = Router::new()
            .route("/syllabus/:endpoint", get(handle_search))
            .with_state(state);

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("bind mock service");
        let addr = listener.local_addr().expect("mock service address");

        tokio::spawn(async move {
            axum::serve(listener, app).await.expect("mock service");
        });

        Self {
            base_url: format!("http://{}", addr),
            requests,
        }
    }

    /// Start a server that always answers with the given JSON value
    pub async fn returning(body: serde_json::Value) -> Self {
        let body = body.to_string();
        Self::start(move |_, _| (StatusCode::OK, body.clone())).await
    }

    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.requests.lock().unwrap().clone()
    }
}

async fn handle_search(
    State(state): State<ServiceState>,
    Path(endpoint): Path<String>,
    Query(params): Query<HashMap<String, String>>,
) -> (StatusCode, String) {
    let name = params.get("name").cloned();
    state.requests.lock().unwrap().push(RecordedRequest {
        endpoint: endpoint.clone(),
        name: name.clone(),
    });

    (state.responder)(&endpoint, name.as_deref().unwrap_or_default())
}
