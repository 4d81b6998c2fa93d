//! Header scroll state.

/// Tracks whether the page has scrolled past the header threshold.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HeaderState {
    threshold: f64,
    scrolled: bool,
}

impl HeaderState {
    pub fn new(threshold: f64) -> Self {
        Self {
            threshold,
            scrolled: false,
        }
    }

    pub fn is_scrolled(&self) -> bool {
        self.scrolled
    }

    /// Feed the current vertical scroll offset. Returns the new flag.
    pub fn on_scroll(&mut self, scroll_y: f64) -> bool {
        self.scrolled = is_scrolled(scroll_y, self.threshold);
        self.scrolled
    }
}

/// Strictly greater than: an offset equal to the threshold is not scrolled.
pub fn is_scrolled(scroll_y: f64, threshold: f64) -> bool {
    scroll_y > threshold
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn threshold_is_strict() {
        assert!(!is_scrolled(0.0, 50.0));
        assert!(!is_scrolled(50.0, 50.0));
        assert!(is_scrolled(50.5, 50.0));
        assert!(is_scrolled(1200.0, 50.0));
    }

    #[test]
    fn state_follows_latest_offset() {
        let mut header = HeaderState::new(50.0);
        assert!(!header.is_scrolled());
        assert!(header.on_scroll(51.0));
        assert!(header.is_scrolled());
        assert!(!header.on_scroll(50.0));
        assert!(!header.is_scrolled());
    }

    #[test]
    fn sweep_matches_predicate() {
        let mut header = HeaderState::new(50.0);
        for s in 0..200 {
            let s = s as f64 * 0.5;
            assert_eq!(header.on_scroll(s), s > 50.0, "offset {s}");
        }
    }
}
