//! Gateway daemon: frame loop plus API server
//!
//! Two concurrency domains share one engine lock: the frame loop (driven
//! by the ingest queue and a periodic absence tick) and the API handlers.
//! Engine operations are near-constant time and no `await` happens while
//! the lock is held, so neither domain starves the other.

use std::sync::Arc;
use std::time::{Duration, Instant};

use tokio::sync::{Mutex, mpsc};

use crate::api::{ApiServer, ApiState, SharedEngine};
use crate::classify::{HeuristicClassifier, Observation};
use crate::config::Config;
use crate::engine::Engine;
use crate::recommend::Recommender;
use crate::Result;

/// How often the frame loop re-evaluates absence when no frames arrive
const TICK_INTERVAL: Duration = Duration::from_millis(250);

/// Long-running gateway process
pub struct Daemon {
    config: Config,
    engine: SharedEngine,
    state: Arc<ApiState>,
    frames_rx: mpsc::Receiver<Observation>,
}

impl Daemon {
    /// Build the engine, ingest queue and API state from configuration
    #[must_use]
    pub fn new(config: Config) -> Self {
        let recommender = config
            .dictionary
            .clone()
            .map_or_else(Recommender::default, Recommender::new);

        let engine: SharedEngine = Arc::new(Mutex::new(Engine::new(
            &config.engine,
            recommender,
            Instant::now(),
        )));

        let (frames_tx, frames_rx) = mpsc::channel(config.frame_queue);

        let state = Arc::new(ApiState {
            engine: engine.clone(),
            frames: frames_tx,
            classifier: Arc::new(HeuristicClassifier::new()),
        });

        Self {
            config,
            engine,
            state,
            frames_rx,
        }
    }

    /// Run the API server and frame loop until interrupted
    ///
    /// # Errors
    ///
    /// Returns error if the API server fails to start.
    pub async fn run(mut self) -> Result<()> {
        let api = ApiServer::new(self.state.clone(), self.config.port);
        let _api_handle = api.spawn();

        let (shutdown_tx, mut shutdown_rx) = mpsc::channel::<()>(1);
        tokio::spawn(async move {
            if tokio::signal::ctrl_c().await.is_ok() {
                let _ = shutdown_tx.send(()).await;
            }
        });

        tracing::info!(
            vote_window = self.config.engine.vote_window,
            stable = ?self.config.engine.stable_threshold,
            cooldown = ?self.config.engine.cooldown_window,
            absence = ?self.config.engine.absence_threshold,
            "frame loop running"
        );

        let mut tick = tokio::time::interval(TICK_INTERVAL);
        loop {
            tokio::select! {
                _ = shutdown_rx.recv() => {
                    tracing::info!("shutdown requested");
                    break;
                }
                frame = self.frames_rx.recv() => {
                    match frame {
                        Some(observation) => {
                            self.engine.lock().await.observe_frame(observation, Instant::now());
                        }
                        None => break,
                    }
                }
                _ = tick.tick() => {
                    self.engine.lock().await.tick(Instant::now());
                }
            }
        }

        Ok(())
    }
}
