//! Animated numeric counters.
//!
//! Two fill policies, one per counter instance:
//!
//! - **Stepped**: the value climbs by 1 on a fixed interval sized so the whole
//!   run fits a total budget, with a floor so huge targets stay readable.
//!   Used by the stat counters, which render a `+` suffix past 1.
//! - **Eased**: the value follows a quadratic ease-in-out curve over a fixed
//!   window. Used by the skill percent labels.
//!
//! A counter fires at most once; re-triggering is a no-op. Under reduced
//! motion the target renders immediately with no intermediate values.

use std::time::Duration;

use super::easing::ease_in_out_quad;
use super::timing::progress;

/// Numeric fill policy
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CounterPolicy {
    /// +1 per interval of `max(budget / max(target, 1), min_step)`
    Stepped,
    /// `round(target * ease(t))` over a fixed window
    Eased,
}

/// Rendered suffix style
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Style {
    /// `{value}+` when the target exceeds 1, bare value otherwise
    Stat,
    /// `{value}%`
    Percent,
}

/// One-shot animated counter
#[derive(Debug, Clone)]
pub struct Counter {
    target: u64,
    policy: CounterPolicy,
    style: Style,
    duration: Duration,
    min_step: Duration,
    started: Option<Duration>,
    /// Reduced motion: jump straight to the target
    snapped: bool,
}

impl Counter {
    /// Stepped stat counter with a total budget and a step floor
    pub fn stat(target: u64, budget: Duration, min_step: Duration) -> Self {
        Self {
            target,
            policy: CounterPolicy::Stepped,
            style: Style::Stat,
            duration: budget,
            min_step,
            started: None,
            snapped: false,
        }
    }

    /// Eased percent counter over a fixed window
    pub fn percent(target: u64, window: Duration) -> Self {
        Self {
            target,
            policy: CounterPolicy::Eased,
            style: Style::Percent,
            duration: window,
            min_step: Duration::ZERO,
            started: None,
            snapped: false,
        }
    }

    pub fn target(&self) -> u64 {
        self.target
    }

    pub fn policy(&self) -> CounterPolicy {
        self.policy
    }

    /// Start the animation as of `now`. Already-started counters keep their
    /// original start; duplicate triggers never restart the run.
    pub fn trigger(&mut self, now: Duration, reduced_motion: bool) {
        if self.started.is_some() {
            return;
        }
        self.started = Some(now);
        self.snapped = reduced_motion;
    }

    /// Interval between stepped increments
    fn step_interval(&self) -> Duration {
        let per_step = self.duration.as_millis() as u64 / self.target.max(1);
        Duration::from_millis(per_step).max(self.min_step)
    }

    /// Current value as of `now`; 0 before the trigger, clamped to the exact
    /// target once the run completes
    pub fn value(&self, now: Duration) -> u64 {
        let started = match self.started {
            Some(s) => s,
            None => return 0,
        };
        if self.snapped {
            return self.target;
        }
        match self.policy {
            CounterPolicy::Stepped => {
                let step_ms = self.step_interval().as_millis().max(1) as u64;
                let elapsed_ms = now.saturating_sub(started).as_millis() as u64;
                (elapsed_ms / step_ms).min(self.target)
            }
            CounterPolicy::Eased => {
                let t = progress(started, now, self.duration);
                if t >= 1.0 {
                    self.target
                } else {
                    (self.target as f64 * ease_in_out_quad(t)).round() as u64
                }
            }
        }
    }

    /// Whether the run has reached its target as of `now`
    pub fn is_finished(&self, now: Duration) -> bool {
        self.started.is_some() && self.value(now) == self.target
    }

    /// Triggered but not yet at the target
    pub fn is_animating(&self, now: Duration) -> bool {
        self.started.is_some() && !self.is_finished(now)
    }

    /// Display text as of `now`
    pub fn render(&self, now: Duration) -> String {
        let value = self.value(now);
        match self.style {
            Style::Stat if self.target > 1 => format!("{}+", value),
            Style::Stat => format!("{}", value),
            Style::Percent => format!("{}%", value),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const MS: fn(u64) -> Duration = Duration::from_millis;

    fn stat(target: u64) -> Counter {
        Counter::stat(target, MS(1100), MS(12))
    }

    fn percent(target: u64) -> Counter {
        Counter::percent(target, MS(900))
    }

    #[test]
    fn test_idle_before_trigger() {
        let counter = stat(10);
        assert_eq!(counter.value(MS(10_000)), 0);
        assert!(!counter.is_finished(MS(10_000)));
    }

    #[test]
    fn test_stepped_interval_formula() {
        // 1100ms over 10 steps = 110ms per step
        assert_eq!(stat(10).step_interval(), MS(110));
        // Huge targets hit the 12ms floor
        assert_eq!(stat(250).step_interval(), MS(12));
        // Zero target divides by max(target, 1)
        assert_eq!(stat(0).step_interval(), MS(1100));
    }

    #[test]
    fn test_stepped_climbs_by_interval() {
        let mut counter = stat(10);
        counter.trigger(MS(0), false);
        assert_eq!(counter.value(MS(0)), 0);
        assert_eq!(counter.value(MS(110)), 1);
        assert_eq!(counter.value(MS(550)), 5);
        assert_eq!(counter.value(MS(1100)), 10);
        // Clamped past completion
        assert_eq!(counter.value(MS(60_000)), 10);
        assert!(counter.is_finished(MS(1100)));
    }

    #[test]
    fn test_stepped_monotonic() {
        let mut counter = stat(250);
        counter.trigger(MS(0), false);
        let mut prev = 0;
        for ms in (0..4000).step_by(7) {
            let v = counter.value(MS(ms));
            assert!(v >= prev, "value regressed at {}ms", ms);
            prev = v;
        }
        assert_eq!(prev, 250);
    }

    #[test]
    fn test_stat_rendering_suffix() {
        let mut a = stat(10);
        let mut b = stat(0);
        let mut c = stat(250);
        for counter in [&mut a, &mut b, &mut c] {
            counter.trigger(MS(0), false);
        }
        assert_eq!(a.render(MS(60_000)), "10+");
        assert_eq!(b.render(MS(60_000)), "0");
        assert_eq!(c.render(MS(60_000)), "250+");
        // Target 1 gets no plus either
        let mut one = stat(1);
        one.trigger(MS(0), false);
        assert_eq!(one.render(MS(60_000)), "1");
    }

    #[test]
    fn test_eased_known_samples() {
        let mut counter = percent(100);
        counter.trigger(MS(0), false);
        assert_eq!(counter.value(MS(0)), 0);
        // Midpoint of ease-in-out-quad is exactly half
        assert_eq!(counter.value(MS(450)), 50);
        assert_eq!(counter.value(MS(900)), 100);
        assert_eq!(counter.render(MS(900)), "100%");
    }

    #[test]
    fn test_eased_monotonic_and_exact_finish() {
        let mut counter = percent(78);
        counter.trigger(MS(0), false);
        let mut prev = 0;
        for ms in (0..1200).step_by(3) {
            let v = counter.value(MS(ms));
            assert!(v >= prev, "value regressed at {}ms", ms);
            prev = v;
        }
        assert_eq!(counter.value(MS(900)), 78);
    }

    #[test]
    fn test_duplicate_trigger_does_not_restart() {
        let mut counter = stat(10);
        counter.trigger(MS(0), false);
        let mid = counter.value(MS(550));
        // A second crossing long after the start must not rewind the run
        counter.trigger(MS(550), false);
        assert_eq!(counter.value(MS(550)), mid);
        assert_eq!(counter.value(MS(1100)), 10);
    }

    #[test]
    fn test_reduced_motion_renders_target_immediately() {
        let mut counter = percent(42);
        counter.trigger(MS(0), true);
        assert_eq!(counter.value(MS(0)), 42);
        assert_eq!(counter.render(MS(0)), "42%");

        let mut stat42 = stat(42);
        stat42.trigger(MS(0), true);
        assert_eq!(stat42.render(MS(0)), "42+");
    }
}
