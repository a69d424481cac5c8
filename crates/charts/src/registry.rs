//! Chart registry and update protocol
//!
//! The registry owns every live chart together with its drawing surface and
//! runs the update/resize/redraw protocol against them. It is an explicitly
//! constructed component: callers create one and pass it to whichever layer
//! needs it, rather than reaching for a global instance.
//!
//! Lookups against an absent key or a detached surface degrade to logged
//! no-ops; no registry operation propagates an error.

use crate::error::{ChartError, ChartResult};
use crate::model::{Chart, ChartKind, Series};
use crate::project::{project, ValueDomain};
use crate::render;
use crate::surface::Surface;
use std::collections::HashMap;

/// A mutation applied to a chart's primary series
#[derive(Debug, Clone, PartialEq)]
pub enum SeriesUpdate {
    /// Replace the whole series
    Replace(Vec<f64>),
    /// Append one sample, evicting the oldest past the window cap
    Push(f64),
}

struct ChartEntry<S> {
    chart: Chart,
    surface: S,
}

/// Registry of live charts keyed by string identifier
pub struct ChartRegistry<S> {
    charts: HashMap<String, ChartEntry<S>>,
}

impl<S> Default for ChartRegistry<S> {
    fn default() -> Self {
        Self {
            charts: HashMap::new(),
        }
    }
}

impl<S: Surface> ChartRegistry<S> {
    /// Create an empty registry
    pub fn new() -> Self {
        Self {
            charts: HashMap::new(),
        }
    }

    /// Register a chart with its surface and draw it.
    ///
    /// Registering under an existing key overwrites the previous chart.
    pub fn register(&mut self, chart: Chart, surface: S) {
        let key = chart.key.clone();
        if self.charts.contains_key(&key) {
            tracing::debug!(key, "replacing registered chart");
        }
        self.charts.insert(key.clone(), ChartEntry { chart, surface });
        self.redraw(&key);
    }

    /// Number of registered charts
    pub fn len(&self) -> usize {
        self.charts.len()
    }

    /// Whether no charts are registered
    pub fn is_empty(&self) -> bool {
        self.charts.is_empty()
    }

    /// Registered keys, in no particular order
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.charts.keys().map(String::as_str)
    }

    /// The chart registered under `key`
    pub fn chart(&self, key: &str) -> ChartResult<&Chart> {
        self.charts
            .get(key)
            .map(|entry| &entry.chart)
            .ok_or_else(|| ChartError::MissingChart(key.to_string()))
    }

    /// The surface owned by the chart under `key`
    pub fn surface(&self, key: &str) -> Option<&S> {
        self.charts.get(key).map(|entry| &entry.surface)
    }

    /// Apply `update` to the chart's primary series and redraw.
    ///
    /// A no-op when the key is absent.
    pub fn update(&mut self, key: &str, update: SeriesUpdate) {
        let Some(entry) = self.charts.get_mut(key) else {
            tracing::debug!(key, "update for unregistered chart ignored");
            return;
        };

        if entry.chart.series.is_empty() {
            entry.chart.series.push(Series::default());
        }
        if let Some(series) = entry.chart.primary_series_mut() {
            match update {
                SeriesUpdate::Replace(values) => series.replace(values),
                SeriesUpdate::Push(value) => series.push_capped(value),
            }
        }

        self.redraw(key);
    }

    /// Re-read the surface's container size, store it, and redraw.
    ///
    /// A no-op when the key is absent or the surface no longer has a
    /// container.
    pub fn resize(&mut self, key: &str) {
        let Some(entry) = self.charts.get_mut(key) else {
            tracing::debug!(key, "resize for unregistered chart ignored");
            return;
        };
        let Some((width, height)) = entry.surface.container_size() else {
            tracing::debug!(key, "resize skipped: surface has no container");
            return;
        };

        entry.surface.set_size(width, height);
        entry.chart.width = width;
        entry.chart.height = height;
        self.redraw(key);
    }

    /// Resize every registered chart (the window-resize signal).
    pub fn resize_all(&mut self) {
        let keys: Vec<String> = self.charts.keys().cloned().collect();
        for key in keys {
            self.resize(&key);
        }
    }

    /// Clear the surface and re-run the full draw sequence for the chart's
    /// current series. A no-op when the key is absent.
    pub fn redraw(&mut self, key: &str) {
        let Some(entry) = self.charts.get_mut(key) else {
            tracing::debug!(key, "redraw for unregistered chart ignored");
            return;
        };

        let chart = &entry.chart;
        let surface = &mut entry.surface;
        let (width, height) = (chart.width, chart.height);
        let style = &chart.style;
        surface.clear_rect(0.0, 0.0, width, height);

        match &chart.kind {
            ChartKind::Area => {
                if let Some(series) = chart.primary_series() {
                    let points = project(series.values(), width, height, ValueDomain::PERCENT);
                    render::draw_area(surface, &points, &style.fill);
                    render::draw_line(surface, &points, style.stroke, style.line_width);
                    render::draw_points(surface, &points, style.stroke, style.marker_radius);
                }
                for (index, series) in chart.series.iter().enumerate().skip(1) {
                    let points = project(series.values(), width, height, ValueDomain::PERCENT);
                    let color = style.palette_color(index);
                    render::draw_line(surface, &points, color, style.line_width);
                }
            }
            ChartKind::Line => {
                for (index, series) in chart.series.iter().enumerate() {
                    let points = project(series.values(), width, height, ValueDomain::PERCENT);
                    let color = style.palette_color(index);
                    render::draw_line(surface, &points, color, style.line_width);
                }
            }
            ChartKind::Bar => {
                if let Some(series) = chart.primary_series() {
                    render::draw_bars(surface, series.values(), style.stroke);
                }
            }
            ChartKind::Donut { .. } => {
                let data = chart.donut_data();
                if let Err(ChartError::EmptyDataset) =
                    render::draw_donut(surface, &data, &style.palette)
                {
                    tracing::debug!(key, "donut dataset empty, nothing drawn");
                }
            }
        }

        if !chart.legend.is_empty() {
            render::draw_legend(surface, &chart.legend_entries());
        }
    }

    /// Remove the chart under `key`, releasing its surface
    pub fn remove(&mut self, key: &str) -> Option<Chart> {
        self.charts.remove(key).map(|entry| entry.chart)
    }

    /// Destroy every chart, releasing all surface references
    pub fn clear(&mut self) {
        self.charts.clear();
    }
}
