//! Viewport scrolling for the rendered page.
//!
//! Key scrolling moves the offset instantly; nav jumps glide to their target
//! with the same quadratic ease the page animations use. The scroller owns
//! the offset in fractional rows so short animations stay smooth, and clamps
//! against the content height the layout pass reports.

use std::time::{Duration, Instant};

use folio_core::motion::easing::ease_in_out_quad;

#[derive(Debug, Clone)]
struct ActiveGlide {
    started: Instant,
    from: f64,
    to: f64,
    duration: Duration,
}

/// Scroll offset of the page viewport
#[derive(Debug, Clone)]
pub struct PageScroller {
    current: f64,
    max: f64,
    smooth: bool,
    glide_duration: Duration,
    glide: Option<ActiveGlide>,
}

impl PageScroller {
    pub fn new(smooth: bool, glide_duration_ms: u64) -> Self {
        Self {
            current: 0.0,
            max: 0.0,
            smooth,
            glide_duration: Duration::from_millis(glide_duration_ms),
            glide: None,
        }
    }

    /// Update the scrollable range after a layout pass
    pub fn set_max(&mut self, max: f64) {
        self.max = max.max(0.0);
        self.current = self.current.clamp(0.0, self.max);
    }

    /// Current offset in rows
    pub fn offset(&self) -> f64 {
        self.current
    }

    /// Instant scroll by a delta (key scrolling); cancels any glide
    pub fn scroll_by(&mut self, delta: f64) {
        self.glide = None;
        self.current = (self.current + delta).clamp(0.0, self.max);
    }

    /// Scroll to an absolute offset; animated when smooth scrolling is on
    pub fn scroll_to(&mut self, target: f64) {
        let target = target.clamp(0.0, self.max);
        if !self.smooth || (target - self.current).abs() < f64::EPSILON {
            self.glide = None;
            self.current = target;
            return;
        }
        self.glide = Some(ActiveGlide {
            started: Instant::now(),
            from: self.current,
            to: target,
            duration: self.glide_duration,
        });
    }

    /// Advance the glide; call once per frame. Returns the current offset.
    pub fn update(&mut self) -> f64 {
        if let Some(ref glide) = self.glide {
            let elapsed = glide.started.elapsed();
            if elapsed >= glide.duration {
                self.current = glide.to;
                self.glide = None;
            } else {
                let t = elapsed.as_secs_f64() / glide.duration.as_secs_f64();
                self.current = glide.from + (glide.to - glide.from) * ease_in_out_quad(t);
            }
        }
        self.current
    }

    pub fn is_animating(&self) -> bool {
        self.glide.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_instant_when_smooth_disabled() {
        let mut scroller = PageScroller::new(false, 150);
        scroller.set_max(500.0);
        scroller.scroll_to(120.0);
        assert_eq!(scroller.offset(), 120.0);
        assert!(!scroller.is_animating());
    }

    #[test]
    fn test_scroll_by_clamps() {
        let mut scroller = PageScroller::new(true, 150);
        scroller.set_max(100.0);
        scroller.scroll_by(500.0);
        assert_eq!(scroller.offset(), 100.0);
        scroller.scroll_by(-500.0);
        assert_eq!(scroller.offset(), 0.0);
    }

    #[test]
    fn test_glide_starts_and_targets() {
        let mut scroller = PageScroller::new(true, 150);
        scroller.set_max(500.0);
        scroller.scroll_to(300.0);
        assert!(scroller.is_animating());
        // The offset only moves once update() runs
        assert_eq!(scroller.offset(), 0.0);
    }

    #[test]
    fn test_shrinking_content_pulls_offset_back() {
        let mut scroller = PageScroller::new(false, 150);
        scroller.set_max(400.0);
        scroller.scroll_by(400.0);
        scroller.set_max(50.0);
        assert_eq!(scroller.offset(), 50.0);
    }
}
