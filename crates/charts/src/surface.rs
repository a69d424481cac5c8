//! Drawing surface abstraction
//!
//! The drawing pipeline talks to a [`Surface`] capability trait exposing only
//! the primitive operations it uses, so rendering is testable headlessly.
//! [`RecordingSurface`] implements it by appending [`SurfaceOp`] values that
//! tests (and the showcase binary) inspect.

use serde::{Deserialize, Serialize};

/// Horizontal text alignment relative to the anchor point
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TextAlign {
    Left,
    Center,
}

/// A color stop in a linear gradient
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GradientStop {
    /// Offset along the gradient axis in [0, 1]
    pub offset: f64,
    /// CSS color string
    pub color: String,
}

/// A two-point linear gradient fill
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LinearGradient {
    pub x0: f64,
    pub y0: f64,
    pub x1: f64,
    pub y1: f64,
    pub stops: Vec<GradientStop>,
}

impl LinearGradient {
    /// A vertical gradient spanning `y0..y1`
    pub fn vertical(y0: f64, y1: f64, stops: Vec<GradientStop>) -> Self {
        Self {
            x0: 0.0,
            y0,
            x1: 0.0,
            y1,
            stops,
        }
    }
}

/// One recorded drawing primitive
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum SurfaceOp {
    BeginPath,
    ClosePath,
    MoveTo {
        x: f64,
        y: f64,
    },
    LineTo {
        x: f64,
        y: f64,
    },
    QuadraticCurveTo {
        cx: f64,
        cy: f64,
        x: f64,
        y: f64,
    },
    Arc {
        x: f64,
        y: f64,
        radius: f64,
        start_angle: f64,
        end_angle: f64,
        anticlockwise: bool,
    },
    Fill,
    Stroke,
    FillRect {
        x: f64,
        y: f64,
        width: f64,
        height: f64,
    },
    ClearRect {
        x: f64,
        y: f64,
        width: f64,
        height: f64,
    },
    FillText {
        text: String,
        x: f64,
        y: f64,
    },
    SetFill {
        style: String,
    },
    SetFillGradient {
        gradient: LinearGradient,
    },
    SetStroke {
        style: String,
    },
    SetLineWidth {
        width: f64,
    },
    SetRoundCaps,
    SetFont {
        font: String,
    },
    SetTextAlign {
        align: TextAlign,
    },
}

/// The primitive drawing capability the pipeline renders against
pub trait Surface {
    /// Current width and height of the drawable region
    fn size(&self) -> (f64, f64);

    /// Resize the drawable region (a resize signal re-reads the container)
    fn set_size(&mut self, width: f64, height: f64);

    /// Current size of the owning container, or `None` once the surface has
    /// been detached from the page
    fn container_size(&self) -> Option<(f64, f64)>;

    fn begin_path(&mut self);
    fn close_path(&mut self);
    fn move_to(&mut self, x: f64, y: f64);
    fn line_to(&mut self, x: f64, y: f64);
    fn quadratic_curve_to(&mut self, cx: f64, cy: f64, x: f64, y: f64);
    fn arc(
        &mut self,
        x: f64,
        y: f64,
        radius: f64,
        start_angle: f64,
        end_angle: f64,
        anticlockwise: bool,
    );
    fn fill(&mut self);
    fn stroke(&mut self);
    fn fill_rect(&mut self, x: f64, y: f64, width: f64, height: f64);
    fn clear_rect(&mut self, x: f64, y: f64, width: f64, height: f64);
    fn fill_text(&mut self, text: &str, x: f64, y: f64);
    /// Advance width of `text` under the current font
    fn measure_text(&self, text: &str) -> f64;
    fn set_fill(&mut self, style: &str);
    fn set_fill_gradient(&mut self, gradient: LinearGradient);
    fn set_stroke(&mut self, style: &str);
    fn set_line_width(&mut self, width: f64);
    fn set_round_caps(&mut self);
    fn set_font(&mut self, font: &str);
    fn set_text_align(&mut self, align: TextAlign);
}

/// Per-character width estimate used by [`RecordingSurface::measure_text`].
const APPROX_CHAR_WIDTH: f64 = 7.2;

/// An in-memory surface that records every primitive issued against it
#[derive(Debug, Clone, Default)]
pub struct RecordingSurface {
    width: f64,
    height: f64,
    container: Option<(f64, f64)>,
    ops: Vec<SurfaceOp>,
}

impl RecordingSurface {
    /// Create a surface whose container matches its initial size
    pub fn new(width: f64, height: f64) -> Self {
        Self {
            width,
            height,
            container: Some((width, height)),
            ops: Vec::new(),
        }
    }

    /// Create a surface that reports no container, as after page teardown
    pub fn detached(width: f64, height: f64) -> Self {
        Self {
            width,
            height,
            container: None,
            ops: Vec::new(),
        }
    }

    /// Simulate the container changing size (e.g. a window resize)
    pub fn set_container(&mut self, size: Option<(f64, f64)>) {
        self.container = size;
    }

    /// Every primitive recorded so far, oldest first
    pub fn ops(&self) -> &[SurfaceOp] {
        &self.ops
    }

    /// Drop all recorded primitives
    pub fn reset(&mut self) {
        self.ops.clear();
    }

    /// Count of recorded ops matching `predicate`
    pub fn count_ops(&self, predicate: impl Fn(&SurfaceOp) -> bool) -> usize {
        self.ops.iter().filter(|op| predicate(op)).count()
    }
}

impl Surface for RecordingSurface {
    fn size(&self) -> (f64, f64) {
        (self.width, self.height)
    }

    fn set_size(&mut self, width: f64, height: f64) {
        self.width = width;
        self.height = height;
    }

    fn container_size(&self) -> Option<(f64, f64)> {
        self.container
    }

    fn begin_path(&mut self) {
        self.ops.push(SurfaceOp::BeginPath);
    }

    fn close_path(&mut self) {
        self.ops.push(SurfaceOp::ClosePath);
    }

    fn move_to(&mut self, x: f64, y: f64) {
        self.ops.push(SurfaceOp::MoveTo { x, y });
    }

    fn line_to(&mut self, x: f64, y: f64) {
        self.ops.push(SurfaceOp::LineTo { x, y });
    }

    fn quadratic_curve_to(&mut self, cx: f64, cy: f64, x: f64, y: f64) {
        self.ops.push(SurfaceOp::QuadraticCurveTo { cx, cy, x, y });
    }

    fn arc(
        &mut self,
        x: f64,
        y: f64,
        radius: f64,
        start_angle: f64,
        end_angle: f64,
        anticlockwise: bool,
    ) {
        self.ops.push(SurfaceOp::Arc {
            x,
            y,
            radius,
            start_angle,
            end_angle,
            anticlockwise,
        });
    }

    fn fill(&mut self) {
        self.ops.push(SurfaceOp::Fill);
    }

    fn stroke(&mut self) {
        self.ops.push(SurfaceOp::Stroke);
    }

    fn fill_rect(&mut self, x: f64, y: f64, width: f64, height: f64) {
        self.ops.push(SurfaceOp::FillRect {
            x,
            y,
            width,
            height,
        });
    }

    fn clear_rect(&mut self, x: f64, y: f64, width: f64, height: f64) {
        self.ops.push(SurfaceOp::ClearRect {
            x,
            y,
            width,
            height,
        });
    }

    fn fill_text(&mut self, text: &str, x: f64, y: f64) {
        self.ops.push(SurfaceOp::FillText {
            text: text.to_string(),
            x,
            y,
        });
    }

    fn measure_text(&self, text: &str) -> f64 {
        text.chars().count() as f64 * APPROX_CHAR_WIDTH
    }

    fn set_fill(&mut self, style: &str) {
        self.ops.push(SurfaceOp::SetFill {
            style: style.to_string(),
        });
    }

    fn set_fill_gradient(&mut self, gradient: LinearGradient) {
        self.ops.push(SurfaceOp::SetFillGradient { gradient });
    }

    fn set_stroke(&mut self, style: &str) {
        self.ops.push(SurfaceOp::SetStroke {
            style: style.to_string(),
        });
    }

    fn set_line_width(&mut self, width: f64) {
        self.ops.push(SurfaceOp::SetLineWidth { width });
    }

    fn set_round_caps(&mut self) {
        self.ops.push(SurfaceOp::SetRoundCaps);
    }

    fn set_font(&mut self, font: &str) {
        self.ops.push(SurfaceOp::SetFont {
            font: font.to_string(),
        });
    }

    fn set_text_align(&mut self, align: TextAlign) {
        self.ops.push(SurfaceOp::SetTextAlign { align });
    }
}
