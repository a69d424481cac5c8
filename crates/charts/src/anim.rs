//! Reveal animation
//!
//! Charts fade in when they scroll into view. The driver calls
//! [`Reveal::advance`] once per animation frame and applies the returned
//! opacity to the surface element.

/// Opacity increment applied per frame.
const DEFAULT_STEP: f64 = 0.05;

/// Opacity ramp from 0 to 1
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Reveal {
    opacity: f64,
    step: f64,
}

impl Reveal {
    /// Start a reveal at zero opacity
    pub fn new() -> Self {
        Self {
            opacity: 0.0,
            step: DEFAULT_STEP,
        }
    }

    /// Use a custom per-frame increment (must be positive)
    pub fn with_step(mut self, step: f64) -> Self {
        self.step = step.max(f64::EPSILON);
        self
    }

    /// Current opacity in [0, 1]
    pub fn opacity(&self) -> f64 {
        self.opacity
    }

    /// Advance one frame and return the new opacity, clamped at 1
    pub fn advance(&mut self) -> f64 {
        self.opacity = (self.opacity + self.step).min(1.0);
        self.opacity
    }

    /// Whether the ramp has reached full opacity
    pub fn done(&self) -> bool {
        self.opacity >= 1.0
    }
}

impl Default for Reveal {
    fn default() -> Self {
        Self::new()
    }
}
