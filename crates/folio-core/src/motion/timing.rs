//! Progress and interpolation helpers.
//!
//! Animations never read a clock; the host passes the moment an animation
//! started and the current moment, both as offsets from an arbitrary epoch.

use std::time::Duration;

/// Normalized progress of an animation that started at `started` as of `now`,
/// clamped to [0, 1]. A zero-length animation is always complete.
#[inline]
pub fn progress(started: Duration, now: Duration, duration: Duration) -> f64 {
    if duration.is_zero() {
        return 1.0;
    }
    let elapsed = now.saturating_sub(started);
    (elapsed.as_secs_f64() / duration.as_secs_f64()).clamp(0.0, 1.0)
}

/// Whether an animation that started at `started` has run its full duration.
#[inline]
pub fn is_complete(started: Duration, now: Duration, duration: Duration) -> bool {
    now.saturating_sub(started) >= duration
}

/// Linear interpolation between two values with factor t in [0, 1].
#[inline]
pub fn lerp(from: f64, to: f64, t: f64) -> f64 {
    from + (to - from) * t
}
