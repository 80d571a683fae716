//! HTTP API server for the glyph gateway

pub mod frames;
pub mod health;
pub mod text;

use std::sync::Arc;

use axum::Router;
use tokio::net::TcpListener;
use tokio::sync::{Mutex, mpsc};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::classify::{Classifier, Observation};
use crate::engine::Engine;
use crate::Result;

/// The engine behind the single lock shared by the frame loop and handlers
pub type SharedEngine = Arc<Mutex<Engine>>;

/// Shared state for API handlers
#[derive(Clone)]
pub struct ApiState {
    /// Session engine; every read and edit goes through this one lock
    pub engine: SharedEngine,
    /// Frame ingest queue feeding the daemon's frame loop
    pub frames: mpsc::Sender<Observation>,
    /// Classifier applied to raw landmark frames
    pub classifier: Arc<dyn Classifier>,
}

/// API server
pub struct ApiServer {
    state: Arc<ApiState>,
    port: u16,
}

impl ApiServer {
    /// Create a server for the given state and port
    #[must_use]
    pub const fn new(state: Arc<ApiState>, port: u16) -> Self {
        Self { state, port }
    }

    /// Build the router with all routes
    #[must_use]
    pub fn router(state: Arc<ApiState>) -> Router {
        let router = Router::new()
            .nest("/api", text::router(state.clone()))
            .nest("/api", frames::router(state.clone()))
            .merge(health::router())
            .merge(health::ready_router(state));

        // CORS layer for cross-origin requests from the frontend
        let cors = CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any);

        router.layer(cors).layer(TraceLayer::new_for_http())
    }

    /// Run the API server
    ///
    /// # Errors
    ///
    /// Returns error if the server fails to bind or run.
    pub async fn run(self) -> Result<()> {
        let addr = format!("0.0.0.0:{}", self.port);
        let listener = TcpListener::bind(&addr).await?;

        tracing::info!(port = self.port, "API server listening");

        axum::serve(listener, Self::router(self.state)).await?;

        Ok(())
    }

    /// Run the API server in a background task
    #[must_use]
    pub fn spawn(self) -> tokio::task::JoinHandle<Result<()>> {
        tokio::spawn(async move { self.run().await })
    }
}
