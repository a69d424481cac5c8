//! Chart model types
//!
//! This module defines the data structures for representing charts:
//! series data, chart kinds, styling, and legend entries.

use serde::{Deserialize, Serialize};

/// Maximum number of samples a live-updated series holds.
///
/// Pushing past this capacity evicts the oldest sample first.
pub const SERIES_CAP: usize = 20;

/// An ordered sequence of numeric samples for one plotted line.
///
/// Values conventionally lie in [0, 100], but the projection accepts an
/// explicit domain for anything else.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Series {
    values: Vec<f64>,
}

impl Series {
    /// Create a series from raw samples
    pub fn new(values: Vec<f64>) -> Self {
        Self { values }
    }

    /// The samples, in insertion order
    pub fn values(&self) -> &[f64] {
        &self.values
    }

    /// Number of samples
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Whether the series holds no samples
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Replace all samples wholesale
    pub fn replace(&mut self, values: Vec<f64>) {
        self.values = values;
    }

    /// Append one sample, evicting the oldest once the window exceeds
    /// [`SERIES_CAP`]
    pub fn push_capped(&mut self, value: f64) {
        self.values.push(value);
        if self.values.len() > SERIES_CAP {
            self.values.remove(0);
        }
    }
}

impl From<Vec<f64>> for Series {
    fn from(values: Vec<f64>) -> Self {
        Self::new(values)
    }
}

/// RGBA color representation
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    /// Create a new color from RGB values (fully opaque)
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    /// Create a new color from RGBA values
    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Create a color from a hex string (e.g., "#6366F1" or "6366F1")
    pub fn from_hex(hex: &str) -> Option<Self> {
        let hex = hex.trim_start_matches('#');
        if !hex.is_ascii() {
            return None;
        }
        if hex.len() == 6 {
            let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
            let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
            let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
            Some(Self::rgb(r, g, b))
        } else if hex.len() == 8 {
            let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
            let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
            let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
            let a = u8::from_str_radix(&hex[6..8], 16).ok()?;
            Some(Self::rgba(r, g, b, a))
        } else {
            None
        }
    }

    /// Copy of this color with a different alpha channel
    pub const fn with_alpha(self, a: u8) -> Self {
        Self { a, ..self }
    }

    /// Convert to CSS color string
    pub fn to_css(&self) -> String {
        if self.a == 255 {
            format!("rgb({}, {}, {})", self.r, self.g, self.b)
        } else {
            format!(
                "rgba({}, {}, {}, {:.3})",
                self.r,
                self.g,
                self.b,
                self.a as f64 / 255.0
            )
        }
    }

    // Site theme colors
    pub const PRIMARY: Color = Color::rgb(0x63, 0x66, 0xF1);
    pub const SECONDARY: Color = Color::rgb(0x8B, 0x5C, 0xF6);
    pub const ACCENT: Color = Color::rgb(0xD9, 0x46, 0xEF);
    pub const SUCCESS: Color = Color::rgb(0x22, 0xC5, 0x5E);
    pub const WARNING: Color = Color::rgb(0xF5, 0x9E, 0x0B);
    pub const ERROR: Color = Color::rgb(0xEF, 0x44, 0x44);
    pub const WHITE: Color = Color::rgb(255, 255, 255);
}

impl Default for Color {
    fn default() -> Self {
        Self::PRIMARY
    }
}

/// Default series color palette (site gradient colors)
pub fn default_palette() -> Vec<Color> {
    vec![Color::PRIMARY, Color::SECONDARY, Color::ACCENT]
}

/// How a surface region is filled
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum FillStyle {
    /// A single flat color
    Solid(Color),
    /// A vertical two-stop gradient from `top` to `bottom`
    Vertical { top: Color, bottom: Color },
}

/// A (label, value) pair for donut charts
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DonutDatum {
    pub label: String,
    pub value: f64,
}

impl DonutDatum {
    pub fn new(label: impl Into<String>, value: f64) -> Self {
        Self {
            label: label.into(),
            value,
        }
    }
}

/// A legend entry, recomputed each draw call
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LegendEntry {
    pub label: String,
    pub color: Color,
}

impl LegendEntry {
    pub fn new(label: impl Into<String>, color: Color) -> Self {
        Self {
            label: label.into(),
            color,
        }
    }
}

/// Kinds of charts the redraw pipeline knows how to render
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "kind")]
pub enum ChartKind {
    /// Filled area under the primary series, plus the line and its markers
    Area,
    /// One stroked line per series
    Line,
    /// One bar per sample of the primary series
    Bar,
    /// Proportional ring slices from (label, value) pairs
    Donut { labels: Vec<String> },
}

/// Visual styling for a chart
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChartStyle {
    /// Stroke color for the primary series
    pub stroke: Color,
    /// Line width for stroked series
    pub line_width: f64,
    /// Marker radius for data points
    pub marker_radius: f64,
    /// Area/bar fill
    pub fill: FillStyle,
    /// Per-series colors for multi-series charts
    pub palette: Vec<Color>,
    /// Font for labels and legend text
    pub font: String,
}

impl ChartStyle {
    /// Palette color for a series index, wrapping around the palette.
    ///
    /// Falls back to the default color when the palette is empty, so an
    /// emptied palette degrades the draw instead of aborting it.
    pub fn palette_color(&self, index: usize) -> Color {
        self.palette
            .get(index % self.palette.len().max(1))
            .copied()
            .unwrap_or_default()
    }
}

impl Default for ChartStyle {
    fn default() -> Self {
        Self {
            stroke: Color::PRIMARY,
            line_width: 2.0,
            marker_radius: 4.0,
            fill: FillStyle::Vertical {
                top: Color::PRIMARY.with_alpha(204),
                bottom: Color::PRIMARY.with_alpha(25),
            },
            palette: default_palette(),
            font: "12px Inter, sans-serif".to_string(),
        }
    }
}

/// A chart: a keyed set of series with styling and stored surface dimensions
///
/// Lifecycle: created when a named surface exists at initialization,
/// mutated by registry updates and resizes, destroyed when its registry
/// entry is removed.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Chart {
    /// String key identifying this chart (e.g. "hero", "analytics")
    pub key: String,
    /// What to draw
    pub kind: ChartKind,
    /// Surface width, updated on resize
    pub width: f64,
    /// Surface height, updated on resize
    pub height: f64,
    /// Plotted series; the first is the primary one live updates target
    pub series: Vec<Series>,
    /// Visual styling
    pub style: ChartStyle,
    /// Legend labels, one per series; empty means no legend
    pub legend: Vec<String>,
}

impl Chart {
    /// Create a new chart with the given key, kind, and dimensions
    pub fn new(key: impl Into<String>, kind: ChartKind, width: f64, height: f64) -> Self {
        Self {
            key: key.into(),
            kind,
            width,
            height,
            series: Vec::new(),
            style: ChartStyle::default(),
            legend: Vec::new(),
        }
    }

    /// Add a data series
    pub fn with_series(mut self, series: impl Into<Series>) -> Self {
        self.series.push(series.into());
        self
    }

    /// Set legend labels (one per series)
    pub fn with_legend(mut self, labels: Vec<String>) -> Self {
        self.legend = labels;
        self
    }

    /// Set the styling
    pub fn with_style(mut self, style: ChartStyle) -> Self {
        self.style = style;
        self
    }

    /// The series live updates are applied to
    pub fn primary_series(&self) -> Option<&Series> {
        self.series.first()
    }

    /// Mutable access to the primary series
    pub fn primary_series_mut(&mut self) -> Option<&mut Series> {
        self.series.first_mut()
    }

    /// Legend entries paired with palette colors, recomputed per draw
    pub fn legend_entries(&self) -> Vec<LegendEntry> {
        self.legend
            .iter()
            .enumerate()
            .map(|(i, label)| LegendEntry::new(label.clone(), self.style.palette_color(i)))
            .collect()
    }

    /// Donut data built from legend labels and the primary series
    pub fn donut_data(&self) -> Vec<DonutDatum> {
        let ChartKind::Donut { ref labels } = self.kind else {
            return Vec::new();
        };
        let values = self.primary_series().map(Series::values).unwrap_or(&[]);
        labels
            .iter()
            .zip(values)
            .map(|(label, &value)| DonutDatum::new(label.clone(), value))
            .collect()
    }
}
