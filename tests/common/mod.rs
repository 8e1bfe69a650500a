//! In-process employees server used by the integration tests.
//!
//! Every call to [`start`] spawns a fresh server on an ephemeral loopback port
//! with an empty user list, so tests never share state.
use std::sync::{mpsc, Arc, Mutex};
use std::thread;

use axum::extract::{Path, State};
use axum::http::header::{ALLOW, AUTHORIZATION, CONTENT_TYPE, USER_AGENT};
use axum::http::{HeaderMap, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Json, Router};
use serde_json::{Map, Value};

pub const WELCOME: &str = "Welcome to the employees test app!";
pub const USERNAME: &str = "superuser";
pub const PASSWORD: &str = "superpass";

type Users = Arc<Mutex<Vec<Value>>>;

pub struct MockServer {
    /// `host:port` the server listens on
    pub bind: String,
}

pub fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

pub fn start() -> MockServer {
    init_logging();

    let (tx, rx) = mpsc::channel();
    thread::spawn(move || {
        let rt = tokio::runtime::Builder::new_multi_thread()
            .worker_threads(1)
            .enable_all()
            .build()
            .expect("mock runtime");
        rt.block_on(async move {
            let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.expect("bind mock server");
            tx.send(listener.local_addr().expect("local addr")).expect("send mock address");
            axum::serve(listener, app()).await.expect("mock server");
        });
    });

    let addr = rx.recv().expect("mock server address");
    MockServer { bind: addr.to_string() }
}

fn app() -> Router {
    let users: Users = Arc::default();
    Router::new()
        .route("/", get(index).options(allow))
        .route("/users", get(list_users))
        .route("/create_user", post(create_user))
        .route("/users/:id", get(get_user).put(put_user).patch(patch_user).delete(delete_user))
        .route("/echo", post(echo).put(echo))
        .route("/whoami", get(whoami))
        .route("/secure", get(secure))
        .with_state(users)
}

async fn index() -> &'static str {
    WELCOME
}

async fn allow() -> impl IntoResponse {
    (StatusCode::OK, [(ALLOW, "GET, HEAD, OPTIONS")])
}

async fn list_users(State(users): State<Users>) -> Json<Value> {
    Json(Value::Array(users.lock().unwrap().clone()))
}

fn with_id(mut record: Map<String, Value>, id: u64) -> Value {
    record.insert("id".to_string(), id.into());
    Value::Object(record)
}

fn position(users: &[Value], id: u64) -> Option<usize> {
    users.iter().position(|u| u["id"].as_u64() == Some(id))
}

fn not_found(id: u64) -> Response {
    (StatusCode::NOT_FOUND, format!("{id} is not found")).into_response()
}

async fn create_user(State(users): State<Users>, Json(body): Json<Map<String, Value>>) -> Response {
    let mut users = users.lock().unwrap();
    let id = users
        .last()
        .and_then(|u| u["id"].as_u64())
        .map_or(0, |last| last + 1);
    let record = with_id(body, id);
    users.push(record.clone());
    (StatusCode::CREATED, Json(record)).into_response()
}

async fn get_user(State(users): State<Users>, Path(id): Path<u64>) -> Response {
    let users = users.lock().unwrap();
    match position(&users, id) {
        Some(i) => Json(users[i].clone()).into_response(),
        None => not_found(id),
    }
}

async fn put_user(
    State(users): State<Users>,
    Path(id): Path<u64>,
    Json(body): Json<Map<String, Value>>,
) -> Response {
    let mut users = users.lock().unwrap();
    match position(&users, id) {
        Some(i) => {
            users[i] = with_id(body, id);
            Json(users[i].clone()).into_response()
        }
        None => not_found(id),
    }
}

async fn patch_user(
    State(users): State<Users>,
    Path(id): Path<u64>,
    Json(body): Json<Map<String, Value>>,
) -> Response {
    let mut users = users.lock().unwrap();
    match position(&users, id) {
        Some(i) => {
            if let Value::Object(record) = &mut users[i] {
                record.extend(body);
                record.insert("id".to_string(), id.into());
            }
            Json(users[i].clone()).into_response()
        }
        None => not_found(id),
    }
}

async fn delete_user(State(users): State<Users>, Path(id): Path<u64>) -> Response {
    let mut users = users.lock().unwrap();
    match position(&users, id) {
        Some(i) => {
            users.remove(i);
            StatusCode::NO_CONTENT.into_response()
        }
        None => not_found(id),
    }
}

/// Answers with the request body and content type.
async fn echo(headers: HeaderMap, body: String) -> Response {
    let content_type = headers
        .get(CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .unwrap_or("")
        .to_string();
    Json(serde_json::json!({ "content_type": content_type, "body": body })).into_response()
}

async fn whoami(headers: HeaderMap) -> Json<Value> {
    let header = |name: &str| {
        headers
            .get(name)
            .and_then(|v| v.to_str().ok())
            .map(|v| Value::String(v.to_string()))
            .unwrap_or(Value::Null)
    };
    Json(serde_json::json!({
        "user_agent": header(USER_AGENT.as_str()),
        "x_api_version": header("x-api-version"),
        "authorization": header(AUTHORIZATION.as_str()),
    }))
}

async fn secure(headers: HeaderMap) -> Response {
    let expected = format!(
        "Basic {}",
        base64::Engine::encode(
            &base64::engine::general_purpose::STANDARD,
            format!("{USERNAME}:{PASSWORD}")
        )
    );
    let authorized = headers
        .get(AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        .is_some_and(|v| v == expected);

    if authorized {
        WELCOME.into_response()
    } else {
        (StatusCode::UNAUTHORIZED, "Unauthorized").into_response()
    }
}
