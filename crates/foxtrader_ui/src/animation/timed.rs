//! Time-gated animation state machine.
//!
//! ```text
//!   Pending ──(now >= start)──▶ Running ──(progress == 1)──▶ Finished
//! ```
//!
//! Both transitions happen at most once. `Finished` is terminal.

use serde::{Deserialize, Serialize};

use crate::error::{UiError, UiResult};

/// Lifecycle phase of a timed animation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AnimationPhase {
    /// Start time not reached yet.
    #[default]
    Pending,
    /// Started, not finished.
    Running,
    /// Reached the end. No further work.
    Finished,
}

/// Length, delay and ease of an animation, in seconds.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Timing {
    /// Duration from start to end.
    pub length: f32,
    /// Wait before starting, measured from creation.
    #[serde(default)]
    pub delay: f32,
    /// Exponent applied to linear progress. `1.0` is linear.
    #[serde(default = "Timing::linear_ease")]
    pub ease: f32,
}

impl Timing {
    /// Linear timing with no delay.
    #[must_use]
    pub const fn new(length: f32) -> Self {
        Self {
            length,
            delay: 0.0,
            ease: 1.0,
        }
    }

    /// Sets the start delay.
    #[must_use]
    pub const fn with_delay(mut self, delay: f32) -> Self {
        self.delay = delay;
        self
    }

    /// Sets the ease exponent.
    #[must_use]
    pub const fn with_ease(mut self, ease: f32) -> Self {
        self.ease = ease;
        self
    }

    const fn linear_ease() -> f32 {
        1.0
    }

    /// Checks that the timing describes a finite, forward-running animation.
    ///
    /// # Errors
    ///
    /// [`UiError::InvalidDuration`] for a non-positive or non-finite length
    /// or a non-finite delay, [`UiError::InvalidEase`] for a non-positive or
    /// non-finite ease exponent.
    pub fn validate(&self) -> UiResult<()> {
        if !(self.length.is_finite() && self.length > 0.0) || !self.delay.is_finite() {
            return Err(UiError::InvalidDuration(self.length));
        }
        if !(self.ease.is_finite() && self.ease > 0.0) {
            return Err(UiError::InvalidEase(self.ease));
        }
        Ok(())
    }
}

/// What a single [`TimedAnimation::advance`] call did.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct TimerStep {
    /// The animation left `Pending` on this call.
    pub started: bool,
    /// Eased progress to apply, if the animation ran.
    pub eased: Option<f32>,
    /// The animation reached `Finished` on this call.
    pub finished: bool,
}

/// Start/end window with a power-curve ease.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TimedAnimation {
    start: f32,
    end: f32,
    ease: f32,
    phase: AnimationPhase,
}

impl TimedAnimation {
    /// Creates an animation that starts `timing.delay` seconds after `now`.
    ///
    /// # Errors
    ///
    /// Rejects timings that fail [`Timing::validate`].
    pub fn new(now: f32, timing: Timing) -> UiResult<Self> {
        if let Err(err) = timing.validate() {
            tracing::warn!(?timing, %err, "rejected animation timing");
            return Err(err);
        }
        let start = now + timing.delay;
        Ok(Self {
            start,
            end: start + timing.length,
            ease: timing.ease,
            phase: AnimationPhase::Pending,
        })
    }

    /// Current phase.
    #[must_use]
    pub const fn phase(&self) -> AnimationPhase {
        self.phase
    }

    /// True once the end has been reached.
    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.phase == AnimationPhase::Finished
    }

    /// Absolute start time.
    #[must_use]
    pub const fn start_time(&self) -> f32 {
        self.start
    }

    /// Absolute end time.
    #[must_use]
    pub const fn end_time(&self) -> f32 {
        self.end
    }

    /// Linear progress at `now`, clamped to `[0, 1]`.
    #[must_use]
    pub fn progress_at(&self, now: f32) -> f32 {
        ((now - self.start) / (self.end - self.start)).clamp(0.0, 1.0)
    }

    /// Eased progress at `now`.
    #[must_use]
    pub fn eased_at(&self, now: f32) -> f32 {
        self.progress_at(now).powf(self.ease)
    }

    /// Advances the state machine to `now`.
    pub fn advance(&mut self, now: f32) -> TimerStep {
        let mut step = TimerStep::default();
        if self.phase == AnimationPhase::Finished || now < self.start {
            return step;
        }

        if self.phase == AnimationPhase::Pending {
            self.phase = AnimationPhase::Running;
            step.started = true;
        }

        let progress = self.progress_at(now);
        step.eased = Some(progress.powf(self.ease));

        if progress >= 1.0 {
            self.phase = AnimationPhase::Finished;
            step.finished = true;
        }
        step
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: f32, b: f32) -> bool {
        (a - b).abs() < 1e-5
    }

    #[test]
    #[allow(clippy::cast_precision_loss)]
    fn test_eased_progress_follows_power_curve() {
        for &ease in &[0.5_f32, 1.0, 2.0, 3.0] {
            let timer = TimedAnimation::new(10.0, Timing::new(2.0).with_ease(ease)).unwrap();
            for i in 0..=8 {
                let t = i as f32 * 0.25;
                let expected = (t / 2.0).powf(ease);
                assert!(
                    close(timer.eased_at(10.0 + t), expected),
                    "ease {ease} at {t}: {} != {expected}",
                    timer.eased_at(10.0 + t)
                );
            }
            assert!(close(timer.eased_at(5.0), 0.0));
            assert!(close(timer.eased_at(99.0), 1.0));
        }
    }

    #[test]
    #[allow(clippy::cast_precision_loss)]
    fn test_start_and_finish_fire_exactly_once() {
        let mut timer = TimedAnimation::new(0.0, Timing::new(1.0).with_delay(0.5)).unwrap();
        let mut starts = 0;
        let mut finishes = 0;
        let mut runs_before_start = 0;
        let mut runs_after_finish = 0;

        for i in 0..100 {
            let step = timer.advance(i as f32 * 0.05);
            if step.eased.is_some() && starts == 0 && !step.started {
                runs_before_start += 1;
            }
            if step.eased.is_some() && finishes > 0 {
                runs_after_finish += 1;
            }
            starts += usize::from(step.started);
            finishes += usize::from(step.finished);
        }

        assert_eq!(starts, 1);
        assert_eq!(finishes, 1);
        assert_eq!(runs_before_start, 0);
        assert_eq!(runs_after_finish, 0);
        assert!(timer.is_finished());
    }

    #[test]
    fn test_pending_until_delay_elapses() {
        let mut timer = TimedAnimation::new(1.0, Timing::new(1.0).with_delay(0.5)).unwrap();
        assert!(close(timer.start_time(), 1.5));
        assert!(close(timer.end_time(), 2.5));
        assert_eq!(timer.advance(1.2), TimerStep::default());
        assert_eq!(timer.phase(), AnimationPhase::Pending);

        let step = timer.advance(1.5);
        assert!(step.started);
        assert_eq!(step.eased, Some(0.0));
        assert_eq!(timer.phase(), AnimationPhase::Running);
    }

    #[test]
    fn test_single_late_tick_starts_and_finishes() {
        let mut timer = TimedAnimation::new(0.0, Timing::new(0.25)).unwrap();
        let step = timer.advance(3.0);
        assert!(step.started && step.finished);
        assert_eq!(step.eased, Some(1.0));
        assert_eq!(timer.advance(4.0), TimerStep::default());
    }

    #[test]
    fn test_rejects_degenerate_timing() {
        assert_eq!(
            TimedAnimation::new(0.0, Timing::new(0.0)).unwrap_err(),
            UiError::InvalidDuration(0.0)
        );
        assert!(TimedAnimation::new(0.0, Timing::new(-1.0)).is_err());
        assert!(TimedAnimation::new(0.0, Timing::new(f32::NAN)).is_err());
        assert!(TimedAnimation::new(0.0, Timing::new(1.0).with_delay(f32::INFINITY)).is_err());
        assert_eq!(
            TimedAnimation::new(0.0, Timing::new(1.0).with_ease(0.0)).unwrap_err(),
            UiError::InvalidEase(0.0)
        );
    }
}
