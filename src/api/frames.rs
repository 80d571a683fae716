//! Frame ingest endpoint
//!
//! The classification collaborator pushes one observation per frame. The
//! body is either a pre-classified symbol or a raw landmark frame run
//! through the heuristic classifier. Observations are queued to the frame
//! loop; a full queue sheds load instead of blocking the collaborator.

use std::sync::Arc;

use axum::{Json, Router, extract::State, http::StatusCode, routing::post};
use serde::Deserialize;
use tokio::sync::mpsc::error::TrySendError;

use super::ApiState;
use crate::classify::{HandFrame, Observation};

/// One frame from the collaborator
///
/// Raw landmark frames are tried first so a body carrying `landmarks`
/// never falls through to the pre-classified shape.
#[derive(Deserialize)]
#[serde(untagged)]
pub enum FrameRequest {
    /// Raw hand frame: landmarks plus ranked model classes
    Raw {
        #[serde(flatten)]
        frame: HandFrame,
        present: bool,
    },
    /// Pre-classified symbol (possibly none, when prediction is throttled)
    Classified {
        #[serde(default)]
        symbol: Option<char>,
        present: bool,
    },
}

/// Ingest one frame
async fn ingest(
    State(state): State<Arc<ApiState>>,
    Json(request): Json<FrameRequest>,
) -> (StatusCode, Json<super::text::AckResponse>) {
    let observation = match request {
        FrameRequest::Classified { symbol, present } => Observation { symbol, present },
        FrameRequest::Raw { frame, present } => {
            let symbol = if present {
                state.classifier.classify(&frame)
            } else {
                None
            };
            Observation { symbol, present }
        }
    };

    match state.frames.try_send(observation) {
        Ok(()) => (
            StatusCode::ACCEPTED,
            Json(super::text::AckResponse { ok: true }),
        ),
        Err(TrySendError::Full(_)) => {
            tracing::warn!("frame queue full, dropping frame");
            (
                StatusCode::TOO_MANY_REQUESTS,
                Json(super::text::AckResponse { ok: false }),
            )
        }
        Err(TrySendError::Closed(_)) => (
            StatusCode::SERVICE_UNAVAILABLE,
            Json(super::text::AckResponse { ok: false }),
        ),
    }
}

/// Build the frames router
pub fn router(state: Arc<ApiState>) -> Router {
    Router::new()
        .route("/frames", post(ingest))
        .with_state(state)
}
