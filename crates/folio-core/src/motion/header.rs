//! Scroll-direction header hide/show.
//!
//! Scrolling down past the floor hides the header; any upward scroll brings
//! it back. Scroll events only arm a frame-cadence guard; the actual check
//! runs once per frame, so a burst of events costs one update.

/// Auto-hiding header state
#[derive(Debug, Clone)]
pub struct HeaderController {
    /// Offset below which the header never hides
    floor: f64,
    last_offset: f64,
    hidden: bool,
    /// A check is scheduled for the next frame
    ticking: bool,
}

impl HeaderController {
    pub fn new(floor: f64) -> Self {
        Self {
            floor,
            last_offset: 0.0,
            hidden: false,
            ticking: false,
        }
    }

    /// A scroll event arrived; schedule a check at the next frame unless one
    /// is already pending. Returns whether this call armed the guard.
    pub fn on_scroll(&mut self) -> bool {
        if self.ticking {
            return false;
        }
        self.ticking = true;
        true
    }

    /// Frame callback: apply the direction rule if a check is pending, then
    /// clear the guard. The last-seen offset is always refreshed.
    pub fn on_frame(&mut self, offset: f64) {
        if !self.ticking {
            return;
        }
        self.hidden = offset > self.last_offset && offset > self.floor;
        self.last_offset = offset;
        self.ticking = false;
    }

    pub fn is_hidden(&self) -> bool {
        self.hidden
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scrolled(header: &mut HeaderController, offset: f64) {
        header.on_scroll();
        header.on_frame(offset);
    }

    #[test]
    fn test_hides_scrolling_down_past_floor() {
        let mut header = HeaderController::new(100.0);
        scrolled(&mut header, 50.0);
        assert!(!header.is_hidden());
        // 50 -> 150: downward and past the floor
        scrolled(&mut header, 150.0);
        assert!(header.is_hidden());
    }

    #[test]
    fn test_shows_on_any_upward_scroll() {
        let mut header = HeaderController::new(100.0);
        scrolled(&mut header, 150.0);
        assert!(header.is_hidden());
        // 150 -> 120: upward brings it back
        scrolled(&mut header, 120.0);
        assert!(!header.is_hidden());
    }

    #[test]
    fn test_stays_visible_below_floor() {
        let mut header = HeaderController::new(100.0);
        scrolled(&mut header, 10.0);
        scrolled(&mut header, 60.0);
        // Downward but still under the floor
        assert!(!header.is_hidden());
    }

    #[test]
    fn test_ticking_guard_coalesces_events() {
        let mut header = HeaderController::new(100.0);
        assert!(header.on_scroll());
        // Further events before the frame do not re-arm
        assert!(!header.on_scroll());
        assert!(!header.on_scroll());
        header.on_frame(150.0);
        assert!(header.is_hidden());
        // Guard cleared inside the frame callback
        assert!(header.on_scroll());
    }

    #[test]
    fn test_frame_without_scroll_is_inert() {
        let mut header = HeaderController::new(100.0);
        header.on_frame(500.0);
        // No scroll was seen, so the state (and last offset) is untouched
        assert!(!header.is_hidden());
        scrolled(&mut header, 400.0);
        // First real observation compares against 0.0 baseline
        assert!(header.is_hidden());
    }
}
