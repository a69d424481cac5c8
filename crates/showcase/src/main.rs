//! Demo wiring the chart pipeline together end to end: two recording
//! surfaces, a live feed on the hero chart, and a resize pass, with the
//! resulting primitive counts logged per chart.

use std::sync::Arc;
use std::time::Duration;

use rand::rngs::StdRng;
use rand::SeedableRng;
use tokio::sync::Mutex;
use tracing::info;
use tracing_subscriber::EnvFilter;

use charts::{
    generate, spawn_feed, Chart, ChartKind, ChartRegistry, FeedConfig, RecordingSurface,
};

const HERO_POINTS: usize = 20;
const FEED_CADENCE: Duration = Duration::from_millis(50);

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    let mut rng = StdRng::seed_from_u64(7);
    let mut registry = ChartRegistry::new();

    let hero = Chart::new("hero", ChartKind::Area, 800.0, 400.0)
        .with_series(generate(&mut rng, HERO_POINTS, 20.0, 80.0));
    registry.register(hero, RecordingSurface::new(800.0, 400.0));

    let analytics = Chart::new("analytics", ChartKind::Line, 600.0, 300.0)
        .with_series(generate(&mut rng, 12, 30.0, 90.0))
        .with_series(generate(&mut rng, 12, 10.0, 60.0))
        .with_series(generate(&mut rng, 12, 40.0, 95.0))
        .with_legend(vec![
            "Throughput".into(),
            "Latency".into(),
            "Accuracy".into(),
        ]);
    registry.register(analytics, RecordingSurface::new(600.0, 300.0));

    info!(charts = registry.len(), "registry populated");

    let registry = Arc::new(Mutex::new(registry));
    let feed = spawn_feed(
        Arc::clone(&registry),
        "hero",
        FeedConfig::default().with_cadence(FEED_CADENCE),
        StdRng::seed_from_u64(11),
    );
    tokio::time::sleep(FEED_CADENCE * 5).await;
    feed.stop();

    let mut registry = registry.lock().await;
    registry.resize_all();

    for key in registry.keys().map(str::to_owned).collect::<Vec<_>>() {
        let chart = registry.chart(&key)?;
        let samples = chart.primary_series().map_or(0, |s| s.len());
        if let Some(surface) = registry.surface(&key) {
            info!(
                key = %key,
                samples,
                primitives = surface.ops().len(),
                "final surface state"
            );
        }
    }

    Ok(())
}
