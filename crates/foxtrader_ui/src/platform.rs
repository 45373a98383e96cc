//! Platform collaborators: the frame clock and the clipboard sink.

use std::time::Instant;

/// Source of animation time, in seconds.
///
/// The scheduler reads it exactly once per tick.
pub trait Clock {
    /// Returns the current time in seconds.
    fn seconds(&mut self) -> f32;
}

/// Wall clock that never advances more than `max_step` per read.
///
/// Long stalls (debugger, window drag, loading) are truncated rather than
/// replayed, so animations resume where they paused instead of jumping to
/// the end.
#[derive(Debug, Clone)]
pub struct SteppedClock {
    last: Instant,
    current: f32,
    max_step: f32,
}

impl SteppedClock {
    /// Default clamp for a single read.
    pub const DEFAULT_MAX_STEP: f32 = 0.1;

    /// Creates a clock starting at zero.
    #[must_use]
    pub fn new(max_step: f32) -> Self {
        Self {
            last: Instant::now(),
            current: 0.0,
            max_step,
        }
    }

    /// Creates a clock from the `[clock]` config section.
    #[must_use]
    pub fn from_config(config: &crate::config::ClockConfig) -> Self {
        Self::new(config.max_step_seconds)
    }
}

impl Default for SteppedClock {
    fn default() -> Self {
        Self::new(Self::DEFAULT_MAX_STEP)
    }
}

impl Clock for SteppedClock {
    fn seconds(&mut self) -> f32 {
        let now = Instant::now();
        let step = now.duration_since(self.last).as_secs_f32().min(self.max_step);
        self.current += step;
        self.last = now;
        self.current
    }
}

/// Clock driven by hand. Used by deterministic hosts and tests.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ManualClock {
    now: f32,
}

impl ManualClock {
    /// Creates a clock at the given time.
    #[must_use]
    pub const fn at(now: f32) -> Self {
        Self { now }
    }

    /// Moves the clock forward.
    pub fn advance(&mut self, seconds: f32) {
        self.now += seconds;
    }

    /// Sets the clock to an absolute time.
    pub fn set(&mut self, now: f32) {
        self.now = now;
    }
}

impl Clock for ManualClock {
    fn seconds(&mut self) -> f32 {
        self.now
    }
}

/// Destination for copied text.
pub trait Clipboard {
    /// Replaces the clipboard contents.
    fn set_text(&mut self, text: &str);
}

/// In-process clipboard.
#[derive(Debug, Clone, Default)]
pub struct MemoryClipboard {
    contents: Option<String>,
}

impl MemoryClipboard {
    /// Returns the last copied text.
    #[must_use]
    pub fn text(&self) -> Option<&str> {
        self.contents.as_deref()
    }
}

impl Clipboard for MemoryClipboard {
    fn set_text(&mut self, text: &str) {
        self.contents = Some(text.to_owned());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stepped_clock_clamps_stalls() {
        let mut clock = SteppedClock::new(0.1);
        if let Some(past) = Instant::now().checked_sub(std::time::Duration::from_secs(5)) {
            clock.last = past;
        }

        let t = clock.seconds();
        assert!(t <= 0.1 + f32::EPSILON, "stall was replayed: {t}");
        assert!(clock.seconds() >= t);
    }

    #[test]
    fn test_manual_clock() {
        let mut clock = ManualClock::at(1.0);
        clock.advance(0.5);
        assert!((clock.seconds() - 1.5).abs() < f32::EPSILON);
        clock.set(0.25);
        assert!((clock.seconds() - 0.25).abs() < f32::EPSILON);
    }

    #[test]
    fn test_memory_clipboard() {
        let mut clipboard = MemoryClipboard::default();
        assert!(clipboard.text().is_none());
        clipboard.set_text("Sol");
        assert_eq!(clipboard.text(), Some("Sol"));
    }
}
