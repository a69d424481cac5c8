//! Message character counter

/// Default character budget for the message field.
pub const DEFAULT_MAX_LENGTH: usize = 1000;

/// Remaining budget below which the counter turns into a warning.
const WARNING_THRESHOLD: i64 = 50;

/// Counter urgency, mapped to the counter's text color
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CounterLevel {
    Normal,
    Warning,
    OverLimit,
}

/// A snapshot of the counter for the current input
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CounterState {
    pub remaining: i64,
    pub level: CounterLevel,
    pub label: String,
}

/// Character counter for a bounded text field
#[derive(Debug, Clone, Copy)]
pub struct CharacterCounter {
    max_length: usize,
}

impl CharacterCounter {
    pub fn new(max_length: usize) -> Self {
        Self { max_length }
    }

    /// Evaluate the counter against the current text
    pub fn measure(&self, text: &str) -> CounterState {
        let remaining = self.max_length as i64 - text.chars().count() as i64;
        let level = if remaining < 0 {
            CounterLevel::OverLimit
        } else if remaining < WARNING_THRESHOLD {
            CounterLevel::Warning
        } else {
            CounterLevel::Normal
        };
        CounterState {
            remaining,
            level,
            label: format!("{remaining} characters remaining"),
        }
    }
}

impl Default for CharacterCounter {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_LENGTH)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_text_has_full_budget() {
        let state = CharacterCounter::default().measure("");
        assert_eq!(state.remaining, 1000);
        assert_eq!(state.level, CounterLevel::Normal);
        assert_eq!(state.label, "1000 characters remaining");
    }

    #[test]
    fn test_warning_below_threshold() {
        let counter = CharacterCounter::new(100);
        let state = counter.measure(&"x".repeat(60));
        assert_eq!(state.level, CounterLevel::Warning);
        assert_eq!(state.remaining, 40);
    }

    #[test]
    fn test_over_limit() {
        let counter = CharacterCounter::new(10);
        let state = counter.measure("this text is far too long");
        assert_eq!(state.level, CounterLevel::OverLimit);
        assert!(state.remaining < 0);
    }

    #[test]
    fn test_boundary_at_threshold_is_normal() {
        let counter = CharacterCounter::new(100);
        let state = counter.measure(&"x".repeat(50));
        assert_eq!(state.remaining, 50);
        assert_eq!(state.level, CounterLevel::Normal);
    }
}
