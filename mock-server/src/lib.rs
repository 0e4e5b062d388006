use std::sync::{
    atomic::{AtomicUsize, Ordering},
    Arc,
};

use axum::{
    body::Bytes,
    extract::{DefaultBodyLimit, Path, State},
    http::{header, HeaderMap, Method, StatusCode},
    routing::{any, get, post},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use tokio::net::TcpListener;

/// Largest upload body the server accepts; larger bodies get 413.
pub const UPLOAD_LIMIT: usize = 20 * 1024 * 1024;

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Home {
    pub banners: Vec<String>,
    pub authorization: Option<String>,
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct Upload {
    pub id: usize,
    pub size: usize,
}

/// What the echo route saw of a request.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct Echo {
    pub method: String,
    pub authorization: Option<String>,
    pub body: String,
}

/// Number of uploads stored so far; the next upload gets this plus one.
pub type UploadCount = Arc<AtomicUsize>;

pub fn app() -> Router {
    let uploads: UploadCount = Arc::new(AtomicUsize::new(0));
    Router::new()
        .route("/api/v1/home", get(home))
        .route(
            "/api/v1/file/upload",
            post(upload).layer(DefaultBodyLimit::max(UPLOAD_LIMIT)),
        )
        .route("/api/v1/status/{code}", get(status))
        .route("/api/v1/echo", any(echo))
        .with_state(uploads)
}

pub async fn run(listener: TcpListener) -> Result<(), std::io::Error> {
    axum::serve(listener, app()).await
}

fn authorization(headers: &HeaderMap) -> Option<String> {
    headers
        .get(header::AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        .map(str::to_string)
}

async fn home(headers: HeaderMap) -> Json<Home> {
    Json(Home {
        banners: vec![
            "https://img.0voice.com/public/ea9e8a4f224a2f04801d530346705995.jpg".to_string(),
            "https://img.0voice.com/public/d7ec6513d12fe44db70403b850810d02.jpg".to_string(),
        ],
        authorization: authorization(&headers),
    })
}

async fn upload(State(uploads): State<UploadCount>, body: Bytes) -> (StatusCode, Json<Upload>) {
    let upload = Upload {
        id: uploads.fetch_add(1, Ordering::Relaxed) + 1,
        size: body.len(),
    };
    tracing::info!(id = upload.id, size = upload.size, "upload stored");
    (StatusCode::CREATED, Json(upload))
}

/// Answer with an arbitrary status so clients can exercise error handling.
async fn status(Path(code): Path<u16>) -> Result<StatusCode, StatusCode> {
    StatusCode::from_u16(code).map_err(|_| StatusCode::BAD_REQUEST)
}

async fn echo(method: Method, headers: HeaderMap, body: Bytes) -> Json<Echo> {
    Json(Echo {
        method: method.to_string(),
        authorization: authorization(&headers),
        body: String::from_utf8_lossy(&body).into_owned(),
    })
}
