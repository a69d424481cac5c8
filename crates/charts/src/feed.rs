//! Live data feed
//!
//! A periodic producer that pushes one fresh sample into a registered chart,
//! simulating a live metrics stream. Unlike a fire-and-forget timer, the
//! feed is spawned explicitly and returns a handle whose `stop` (or drop)
//! cancels the task, so no interval outlives the chart it feeds.

use crate::generate;
use crate::registry::{ChartRegistry, SeriesUpdate};
use crate::surface::Surface;
use rand::Rng;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::Mutex;
use tokio::task::JoinHandle;

/// Configuration for a live feed
#[derive(Debug, Clone)]
pub struct FeedConfig {
    /// Time between samples
    pub cadence: Duration,
    /// Lower bound of generated samples
    pub min: f64,
    /// Upper bound of generated samples
    pub max: f64,
}

impl Default for FeedConfig {
    fn default() -> Self {
        Self {
            cadence: Duration::from_secs(3),
            min: 20.0,
            max: 80.0,
        }
    }
}

impl FeedConfig {
    /// Set the tick cadence
    pub fn with_cadence(mut self, cadence: Duration) -> Self {
        self.cadence = cadence;
        self
    }

    /// Set the sample bounds
    pub fn with_bounds(mut self, min: f64, max: f64) -> Self {
        self.min = min;
        self.max = max;
        self
    }
}

/// Handle owning a running feed task
///
/// Dropping the handle cancels the feed.
pub struct FeedHandle {
    task: JoinHandle<()>,
}

impl FeedHandle {
    /// Cancel the feed task
    pub fn stop(&self) {
        self.task.abort();
    }

    /// Whether the feed task has finished (after [`stop`](Self::stop))
    pub fn is_stopped(&self) -> bool {
        self.task.is_finished()
    }
}

impl Drop for FeedHandle {
    fn drop(&mut self) {
        self.task.abort();
    }
}

/// Spawn a feed pushing one sample per cadence into the chart under `key`.
///
/// Each tick appends a sample (evicting the oldest past the window cap) and
/// redraws synchronously, so no redraw can observe a half-applied update.
/// Pushes against an unregistered key are no-ops, as everywhere in the
/// registry protocol.
pub fn spawn_feed<S, R>(
    registry: Arc<Mutex<ChartRegistry<S>>>,
    key: impl Into<String>,
    config: FeedConfig,
    mut rng: R,
) -> FeedHandle
where
    S: Surface + Send + 'static,
    R: Rng + Send + 'static,
{
    let key = key.into();
    let task = tokio::spawn(async move {
        let mut ticker = tokio::time::interval(config.cadence);
        // the first interval tick completes immediately; consume it so the
        // first sample lands one cadence after spawn
        ticker.tick().await;
        loop {
            ticker.tick().await;
            let value = generate::sample(&mut rng, config.min, config.max);
            let mut registry = registry.lock().await;
            registry.update(&key, SeriesUpdate::Push(value));
            tracing::trace!(key = %key, value, "live feed pushed sample");
        }
    });
    FeedHandle { task }
}
