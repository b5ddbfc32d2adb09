//! Viewport intersection math and visibility-crossing detection.
//!
//! A detector answers one question: did this element just become visible
//! enough? It is edge-triggered, so holding an element in view produces a
//! single crossing, and it comes in a recurring variant (re-arms once the
//! element leaves) and a one-shot variant (detaches after the first firing).

/// Vertical window the page is viewed through
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    /// Scroll offset of the top edge, in page rows
    pub offset: f64,
    /// Visible height, in page rows
    pub height: f64,
}

impl Viewport {
    pub fn new(offset: f64, height: f64) -> Self {
        Self { offset, height }
    }
}

/// Vertical placement of an element on the page
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Extent {
    /// Distance from the top of the page to the element's top edge
    pub top: f64,
    /// Element height, in page rows
    pub height: f64,
}

impl Extent {
    pub fn new(top: f64, height: f64) -> Self {
        Self { top, height }
    }

    /// One past the element's bottom edge
    #[inline]
    pub fn bottom(&self) -> f64 {
        self.top + self.height
    }
}

/// Whether intersection observation is available on this host.
///
/// When unsupported, detectors fail open: every subscribed element reports an
/// immediate crossing so animations run rather than never firing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ObserverSupport {
    Supported,
    Unsupported,
}

/// Fraction of the element's height inside the viewport after shaving
/// `margin` rows off both viewport edges. Zero-height elements are never
/// visible.
pub fn visible_fraction(extent: Extent, viewport: Viewport, margin: f64) -> f64 {
    if extent.height <= 0.0 {
        return 0.0;
    }
    let view_top = viewport.offset + margin;
    let view_bottom = viewport.offset + viewport.height - margin;
    if view_bottom <= view_top {
        return 0.0;
    }
    let overlap = extent.bottom().min(view_bottom) - extent.top.max(view_top);
    (overlap / extent.height).clamp(0.0, 1.0)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Mode {
    /// Keeps observing; re-arms after the element drops below threshold
    Recurring,
    /// Detaches itself after the first crossing
    Once,
}

/// Edge-triggered visibility-crossing detector for a single element
#[derive(Debug, Clone)]
pub struct VisibilityDetector {
    threshold: f64,
    margin: f64,
    mode: Mode,
    support: ObserverSupport,
    /// Element was at or above threshold on the last observation
    above: bool,
    /// One-shot already fired (or fail-open already delivered)
    detached: bool,
}

impl VisibilityDetector {
    /// Detector that keeps observing across crossings
    pub fn recurring(threshold: f64, margin: f64, support: ObserverSupport) -> Self {
        Self::new(threshold, margin, Mode::Recurring, support)
    }

    /// Detector that unsubscribes itself after the first crossing
    pub fn once(threshold: f64, margin: f64, support: ObserverSupport) -> Self {
        Self::new(threshold, margin, Mode::Once, support)
    }

    fn new(threshold: f64, margin: f64, mode: Mode, support: ObserverSupport) -> Self {
        Self {
            threshold,
            margin,
            mode,
            support,
            above: false,
            detached: false,
        }
    }

    /// Feed the current geometry; returns true exactly when the element
    /// crosses from below to at-or-above the visibility threshold.
    pub fn observe(&mut self, extent: Extent, viewport: Viewport) -> bool {
        if self.detached {
            return false;
        }

        // Fail open: without observation support the element counts as
        // immediately visible, exactly once.
        if self.support == ObserverSupport::Unsupported {
            self.detached = true;
            return true;
        }

        let now_above = visible_fraction(extent, viewport, self.margin) >= self.threshold;
        let crossed = now_above && !self.above;
        self.above = now_above;

        if crossed && self.mode == Mode::Once {
            self.detached = true;
        }
        crossed
    }

    /// One-shot detectors report detached after firing
    pub fn is_detached(&self) -> bool {
        self.detached
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn view(offset: f64) -> Viewport {
        Viewport::new(offset, 100.0)
    }

    #[test]
    fn test_visible_fraction() {
        let elem = Extent::new(50.0, 50.0);
        // Fully inside
        assert!((visible_fraction(elem, view(25.0), 0.0) - 1.0).abs() < 1e-9);
        // Fully outside
        assert_eq!(visible_fraction(elem, view(200.0), 0.0), 0.0);
        // Bottom half clipped: element 50..100, viewport 0..75
        assert!((visible_fraction(elem, Viewport::new(0.0, 75.0), 0.0) - 0.5).abs() < 1e-9);
    }

    #[test]
    fn test_margin_shrinks_viewport() {
        // Element sits in the top 10 rows of the viewport; a 50 row margin
        // pushes the effective window past it.
        let elem = Extent::new(0.0, 10.0);
        assert!((visible_fraction(elem, view(0.0), 0.0) - 1.0).abs() < 1e-9);
        assert_eq!(visible_fraction(elem, view(0.0), 50.0), 0.0);
    }

    #[test]
    fn test_zero_height_never_visible() {
        assert_eq!(visible_fraction(Extent::new(10.0, 0.0), view(0.0), 0.0), 0.0);
    }

    #[test]
    fn test_recurring_rearms_after_exit() {
        let mut det = VisibilityDetector::recurring(0.5, 0.0, ObserverSupport::Supported);
        let elem = Extent::new(0.0, 10.0);

        assert!(det.observe(elem, view(0.0)));
        // Still visible: no new crossing
        assert!(!det.observe(elem, view(0.0)));
        // Scrolled away, then back
        assert!(!det.observe(elem, view(500.0)));
        assert!(det.observe(elem, view(0.0)));
    }

    #[test]
    fn test_once_detaches_after_first_crossing() {
        let mut det = VisibilityDetector::once(0.5, 0.0, ObserverSupport::Supported);
        let elem = Extent::new(0.0, 10.0);

        assert!(det.observe(elem, view(0.0)));
        assert!(det.is_detached());
        // Leaving and re-entering never fires again
        assert!(!det.observe(elem, view(500.0)));
        assert!(!det.observe(elem, view(0.0)));
    }

    #[test]
    fn test_fail_open_when_unsupported() {
        let mut det = VisibilityDetector::once(0.5, 0.0, ObserverSupport::Unsupported);
        // Element nowhere near the viewport still fires immediately
        let elem = Extent::new(10_000.0, 10.0);
        assert!(det.observe(elem, view(0.0)));
        assert!(!det.observe(elem, view(0.0)));
    }

    #[test]
    fn test_threshold_boundary() {
        let mut det = VisibilityDetector::recurring(0.15, 0.0, ObserverSupport::Supported);
        // 100-row element, exactly 15 rows visible at the viewport bottom
        let elem = Extent::new(185.0, 100.0);
        assert!(det.observe(elem, view(100.0)));
    }
}
