//! Sentence read and edit endpoints
//!
//! Request/response only; the frame stream mutates the same engine through
//! the daemon's loop. Every handler takes the engine lock once, so an edit
//! can never interleave with a frame-loop commit.

use std::sync::Arc;
use std::time::Instant;

use axum::{
    Json, Router,
    extract::State,
    routing::{get, post},
};
use serde::{Deserialize, Serialize};

use super::ApiState;

/// Current session state: sentence, live letter, completions
#[derive(Serialize)]
pub struct TextResponse {
    pub sentence: String,
    /// Live vote-window majority; empty when no votes are in flight
    pub letter: String,
    pub recs: Vec<String>,
}

/// Acknowledgement carrying the resulting sentence
#[derive(Serialize)]
pub struct EditResponse {
    pub ok: bool,
    pub sentence: String,
}

/// Bare acknowledgement
#[derive(Serialize)]
pub struct AckResponse {
    pub ok: bool,
}

/// Suggestion substitution request
#[derive(Deserialize)]
pub struct SuggestionRequest {
    pub word: String,
}

/// Get the current sentence, live letter and recommendations
async fn get_text(State(state): State<Arc<ApiState>>) -> Json<TextResponse> {
    let snapshot = state.engine.lock().await.snapshot();

    Json(TextResponse {
        sentence: snapshot.sentence,
        letter: snapshot.letter.map(String::from).unwrap_or_default(),
        recs: snapshot.recommendations,
    })
}

/// Reset all session state
async fn clear(State(state): State<Arc<ApiState>>) -> Json<AckResponse> {
    state.engine.lock().await.reset(Instant::now());
    tracing::info!("session cleared");
    Json(AckResponse { ok: true })
}

/// Replace the trailing word with a chosen completion
async fn apply_suggestion(
    State(state): State<Arc<ApiState>>,
    Json(request): Json<SuggestionRequest>,
) -> Json<EditResponse> {
    let mut engine = state.engine.lock().await;
    engine.apply_suggestion(&request.word);

    Json(EditResponse {
        ok: true,
        sentence: engine.sentence().to_string(),
    })
}

/// Delete the final character (no-op on empty, still ok)
async fn delete_last(State(state): State<Arc<ApiState>>) -> Json<EditResponse> {
    let mut engine = state.engine.lock().await;
    engine.delete_last();

    Json(EditResponse {
        ok: true,
        sentence: engine.sentence().to_string(),
    })
}

/// Append a word boundary on explicit request
async fn add_space(State(state): State<Arc<ApiState>>) -> Json<EditResponse> {
    let mut engine = state.engine.lock().await;
    engine.add_space();

    Json(EditResponse {
        ok: true,
        sentence: engine.sentence().to_string(),
    })
}

/// Build the text router
pub fn router(state: Arc<ApiState>) -> Router {
    Router::new()
        .route("/text", get(get_text))
        .route("/clear", post(clear))
        .route("/suggestion", post(apply_suggestion))
        .route("/delete", post(delete_last))
        .route("/space", post(add_space))
        .with_state(state)
}
