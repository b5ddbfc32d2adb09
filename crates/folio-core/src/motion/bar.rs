//! Skill-bar fill animation.
//!
//! The fill target is parsed once from the row's authored style; the rendered
//! width then starts at zero and fills to the remembered target when the
//! skills section first crosses its trigger threshold. Under reduced motion
//! the bar never leaves its target width. The final width is the declared
//! target exactly, never a rounded neighbor.

use std::time::Duration;

use super::easing::ease_in_out_quad;
use super::timing::progress;

/// One-shot width fill from 0 to a remembered percentage
#[derive(Debug, Clone)]
pub struct Bar {
    /// Declared fill percentage, remembered at wiring
    target: f64,
    duration: Duration,
    started: Option<Duration>,
    /// Reduced motion or fail-open: no transition, width pinned to target
    snapped: bool,
}

impl Bar {
    pub fn new(target: f64, duration: Duration, reduced_motion: bool) -> Self {
        Self {
            target,
            duration,
            started: None,
            // Reduced motion skips the zeroing at wiring time, so the bar
            // sits at its target from the first paint.
            snapped: reduced_motion,
        }
    }

    pub fn target(&self) -> f64 {
        self.target
    }

    /// Begin the fill as of `now`; duplicate triggers are no-ops
    pub fn trigger(&mut self, now: Duration) {
        if self.started.is_some() || self.snapped {
            return;
        }
        self.started = Some(now);
    }

    /// Fill immediately without a transition (reduced motion, or the
    /// fail-open path when visibility observation is unsupported)
    pub fn snap(&mut self) {
        self.snapped = true;
    }

    /// Rendered width percentage as of `now`
    pub fn width(&self, now: Duration) -> f64 {
        if self.snapped {
            return self.target;
        }
        let started = match self.started {
            Some(s) => s,
            None => return 0.0,
        };
        let t = progress(started, now, self.duration);
        if t >= 1.0 {
            self.target
        } else {
            self.target * ease_in_out_quad(t)
        }
    }

    /// Mid-transition as of `now`
    pub fn is_animating(&self, now: Duration) -> bool {
        self.started.is_some() && !self.is_filled(now)
    }

    /// Whether the fill has settled at its target as of `now`
    pub fn is_filled(&self, now: Duration) -> bool {
        self.snapped
            || self
                .started
                .map(|s| now.saturating_sub(s) >= self.duration)
                .unwrap_or(false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const MS: fn(u64) -> Duration = Duration::from_millis;

    fn bar(target: f64) -> Bar {
        Bar::new(target, MS(800), false)
    }

    #[test]
    fn test_starts_at_zero() {
        let bar = bar(75.0);
        assert_eq!(bar.width(MS(10_000)), 0.0);
        assert!(!bar.is_filled(MS(10_000)));
    }

    #[test]
    fn test_final_width_is_exact_target() {
        let mut bar = bar(75.0);
        bar.trigger(MS(0));
        // Bit-for-bit: the settled width is the declared literal
        assert_eq!(bar.width(MS(800)), 75.0);
        assert_eq!(bar.width(MS(30_000)), 75.0);
        assert!(bar.is_filled(MS(800)));
    }

    #[test]
    fn test_fill_is_monotonic() {
        let mut bar = bar(78.5);
        bar.trigger(MS(0));
        let mut prev = 0.0;
        for ms in (0..1000).step_by(5) {
            let w = bar.width(MS(ms));
            assert!(w >= prev, "width regressed at {}ms", ms);
            prev = w;
        }
        assert_eq!(prev, 78.5);
    }

    #[test]
    fn test_duplicate_trigger_ignored() {
        let mut bar = bar(60.0);
        bar.trigger(MS(0));
        let mid = bar.width(MS(400));
        bar.trigger(MS(400));
        assert_eq!(bar.width(MS(400)), mid);
        assert_eq!(bar.width(MS(800)), 60.0);
    }

    #[test]
    fn test_reduced_motion_pins_target() {
        let bar = Bar::new(40.0, MS(800), true);
        // No trigger needed; the width never left its target
        assert_eq!(bar.width(MS(0)), 40.0);
        assert!(bar.is_filled(MS(0)));
    }

    #[test]
    fn test_snap_fills_without_transition() {
        let mut bar = bar(30.0);
        bar.snap();
        assert_eq!(bar.width(MS(0)), 30.0);
    }

    #[test]
    fn test_zero_target_stays_flat() {
        let mut bar = bar(0.0);
        bar.trigger(MS(0));
        assert_eq!(bar.width(MS(400)), 0.0);
        assert_eq!(bar.width(MS(800)), 0.0);
    }
}
