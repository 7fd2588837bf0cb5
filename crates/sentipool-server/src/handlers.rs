//! HTTP request handlers for the annotation service.
//!
//! Implements batch selection, vote recording, and health check endpoints
//! using axum. Handlers resolve the visitor identity from cookies and pass
//! it into the domain core; the core never touches request state.

use crate::visitor::resolve_visitor;
use axum::{
    extract::State,
    http::header::SET_COOKIE,
    http::{HeaderMap, HeaderValue, StatusCode},
    response::{IntoResponse, Json, Response},
    routing::{get, post},
    Router as AxumRouter,
};
use sentipool_domain::traits::RecordStore;
use sentipool_domain::{record_vote, select_batch, VoteError};
use sentipool_store::{JsonFileStore, StoreError};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tokio::sync::RwLock;

/// Shared application state
///
/// One RwLock serializes vote read-modify-write cycles while letting
/// batch selections read concurrently against a consistent snapshot.
#[derive(Clone)]
pub struct AppState {
    /// The sentence pool store, shared across handlers
    pub store: Arc<RwLock<JsonFileStore>>,
    /// Visitor cookie lifetime in seconds
    pub cookie_max_age_secs: u64,
}

/// Vote submission request
#[derive(Debug, Deserialize)]
pub struct AnnotateRequest {
    /// Exact text of the sentence being voted on
    pub sentence: String,
    /// Chosen category, matched case-insensitively
    pub sentiment: String,
}

/// Vote submission response
#[derive(Debug, Serialize, Deserialize)]
pub struct AnnotateResponse {
    /// Whether the vote was recorded
    pub success: bool,
    /// Human-readable outcome
    pub message: String,
}

/// Batch selection response
#[derive(Debug, Serialize, Deserialize)]
pub struct BatchResponse {
    /// Sentences to display, in order
    pub sentences: Vec<String>,
    /// How many sentences are shown now
    pub total_displayed: usize,
    /// Pool-wide progress percentage
    pub progress_percentage: u32,
    /// Records with at least one vote
    pub annotated_count: usize,
    /// Records in the pool
    pub total_sentences: usize,
    /// True when nothing suitable remains for this visitor
    pub no_more_sentences: bool,
}

/// Health check response
#[derive(Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Overall health status
    pub status: String,
    /// Records in the pool
    pub total_sentences: usize,
}

/// Application error type
#[derive(Debug)]
pub enum AppError {
    /// Vote rejected by the domain core
    Vote(VoteError),
    /// Persistence failure
    Store(StoreError),
    /// Internal server error
    Internal(String),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            AppError::Vote(e @ VoteError::UnknownSentiment(_)) => {
                (StatusCode::BAD_REQUEST, e.to_string())
            }
            AppError::Vote(e @ VoteError::SentenceNotFound(_)) => {
                (StatusCode::NOT_FOUND, e.to_string())
            }
            AppError::Store(e) => (StatusCode::INTERNAL_SERVER_ERROR, e.to_string()),
            AppError::Internal(msg) => (StatusCode::INTERNAL_SERVER_ERROR, msg),
        };

        let body = Json(AnnotateResponse {
            success: false,
            message,
        });
        (status, body).into_response()
    }
}

impl From<VoteError> for AppError {
    fn from(e: VoteError) -> Self {
        AppError::Vote(e)
    }
}

impl From<StoreError> for AppError {
    fn from(e: StoreError) -> Self {
        AppError::Store(e)
    }
}

/// Attach a Set-Cookie header when a fresh visitor token was minted
fn with_cookie(mut response: Response, cookie: Option<String>) -> Result<Response, AppError> {
    if let Some(cookie) = cookie {
        let value =
            HeaderValue::from_str(&cookie).map_err(|e| AppError::Internal(e.to_string()))?;
        response.headers_mut().insert(SET_COOKIE, value);
    }
    Ok(response)
}

/// GET /api/batch - Select up to three sentences for this visitor
///
/// The batch is recomputed from the current pool on every call; there is
/// no session-scoped batch memory.
async fn get_batch(State(state): State<AppState>, headers: HeaderMap) -> Result<Response, AppError> {
    let (visitor, minted) = resolve_visitor(&headers, state.cookie_max_age_secs);

    let records = {
        let store = state.store.read().await;
        store.load_all()?
    };

    let selection = {
        let mut rng = rand::thread_rng();
        select_batch(&records, Some(&visitor), &mut rng)
    };

    let body = BatchResponse {
        total_displayed: selection.sentences.len(),
        progress_percentage: selection.stats.progress_percentage,
        annotated_count: selection.stats.annotated_count,
        total_sentences: selection.stats.total_sentences,
        no_more_sentences: selection.no_more_sentences,
        sentences: selection.sentences,
    };

    with_cookie(Json(body).into_response(), minted)
}

/// POST /api/annotate - Record one vote
///
/// Holds the write lock across the whole read-modify-write cycle so
/// concurrent votes cannot lose increments. A failed save surfaces as an
/// error and the in-memory mutation is discarded with it.
async fn post_annotate(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(request): Json<AnnotateRequest>,
) -> Result<Response, AppError> {
    let (visitor, minted) = resolve_visitor(&headers, state.cookie_max_age_secs);

    let sentiment = {
        let mut store = state.store.write().await;
        let mut records = store.load_all()?;
        let sentiment = record_vote(&mut records, &request.sentence, &request.sentiment, &visitor)?;
        store.save_all(&records)?;
        sentiment
    };

    let body = AnnotateResponse {
        success: true,
        message: format!(
            "Sentence \"{}\" annotated as {}",
            request.sentence, sentiment
        ),
    };

    with_cookie(Json(body).into_response(), minted)
}

/// GET /health - Service health and pool size
async fn health_check(State(state): State<AppState>) -> Result<Json<HealthResponse>, AppError> {
    let records = {
        let store = state.store.read().await;
        store.load_all()?
    };

    Ok(Json(HealthResponse {
        status: "healthy".to_string(),
        total_sentences: records.len(),
    }))
}

/// Create the axum router with all routes
pub fn create_router(state: AppState) -> AxumRouter {
    AxumRouter::new()
        .route("/api/batch", get(get_batch))
        .route("/api/annotate", post(post_annotate))
        .route("/health", get(health_check))
        .with_state(state)
}
