//! Scroll-threshold flag behind the nav bar's compact style.

/// `true` once `offset` is strictly past `threshold`.
#[inline]
pub fn is_scrolled_past(offset: f64, threshold: f64) -> bool {
    offset > threshold
}

/// Boolean derived from the most recent scroll sample.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScrollFlag {
    threshold: f64,
    scrolled: bool,
}

impl ScrollFlag {
    pub fn new(threshold: f64) -> Self {
        Self {
            threshold,
            scrolled: false,
        }
    }

    pub fn is_scrolled(&self) -> bool {
        self.scrolled
    }

    /// Recompute from a scroll offset. Returns `true` only when the flag flipped,
    /// so callers re-render on changes and nothing else.
    pub fn sample(&mut self, offset: f64) -> bool {
        let scrolled = is_scrolled_past(offset, self.threshold);
        if scrolled == self.scrolled {
            return false;
        }
        self.scrolled = scrolled;
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_unscrolled() {
        let flag = ScrollFlag::new(50.0);
        assert!(!flag.is_scrolled());
    }

    #[test]
    fn test_threshold_is_exclusive() {
        assert!(!is_scrolled_past(0.0, 50.0));
        assert!(!is_scrolled_past(50.0, 50.0));
        assert!(is_scrolled_past(50.5, 50.0));
        assert!(is_scrolled_past(4000.0, 50.0));
    }

    #[test]
    fn test_flag_tracks_every_sample() {
        let mut flag = ScrollFlag::new(50.0);
        for offset in [0.0, 12.0, 49.9, 50.0, 51.0, 300.0, 50.0, 0.0, 75.0] {
            flag.sample(offset);
            assert_eq!(flag.is_scrolled(), offset > 50.0, "offset {}", offset);
        }
    }

    #[test]
    fn test_sample_reports_changes_only() {
        let mut flag = ScrollFlag::new(50.0);
        assert!(!flag.sample(10.0));
        assert!(flag.sample(60.0));
        assert!(!flag.sample(120.0));
        assert!(!flag.sample(900.0));
        assert!(flag.sample(50.0));
        assert!(!flag.sample(0.0));
    }
}
