//! One-shot viewport entry and the entrance transitions it unlocks.

/// Latches the first time an element is reported inside the viewport.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct RevealLatch {
    entered: bool,
}

impl RevealLatch {
    #[cfg(test)]
    pub fn has_entered(&self) -> bool {
        self.entered
    }

    /// Feed an intersection sample. Returns `true` on the first entry only;
    /// exits and re-entries afterwards are ignored.
    pub fn observe(&mut self, intersecting: bool) -> bool {
        if self.entered || !intersecting {
            return false;
        }
        self.entered = true;
        true
    }
}

/// Entrance transition applied to a block when it is revealed.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Entrance {
    Fade,
    FadeUp { distance_px: u32 },
    SlideFromLeft { distance_px: u32 },
    ScaleIn { from_percent: u32 },
}

impl Entrance {
    fn hidden_transform(&self) -> String {
        match *self {
            Entrance::Fade => "none".to_string(),
            Entrance::FadeUp { distance_px } => format!("translateY({}px)", distance_px),
            Entrance::SlideFromLeft { distance_px } => format!("translateX(-{}px)", distance_px),
            Entrance::ScaleIn { from_percent } => {
                format!("scale({})", from_percent as f64 / 100.0)
            }
        }
    }

    /// Inline CSS for the hidden or shown state. The transition is always
    /// present so the switch to `shown` animates.
    pub fn style(&self, shown: bool, delay_ms: u32, duration_ms: u32) -> String {
        let (opacity, transform) = if shown {
            ("1".to_string(), "none".to_string())
        } else {
            ("0".to_string(), self.hidden_transform())
        };
        format!(
            "opacity: {}; transform: {}; transition: opacity {dur}ms ease-out {delay}ms, transform {dur}ms ease-out {delay}ms;",
            opacity,
            transform,
            dur = duration_ms,
            delay = delay_ms,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_latch_fires_once() {
        let mut latch = RevealLatch::default();
        assert!(!latch.observe(false));
        assert!(!latch.has_entered());

        assert!(latch.observe(true));
        assert!(latch.has_entered());

        // leave and come back without remounting
        assert!(!latch.observe(false));
        assert!(!latch.observe(true));
        assert!(latch.has_entered());
    }

    #[test]
    fn test_fresh_latch_fires_again() {
        let mut first = RevealLatch::default();
        assert!(first.observe(true));

        let mut remounted = RevealLatch::default();
        assert!(remounted.observe(true));
    }

    #[test]
    fn test_hidden_styles() {
        let up = Entrance::FadeUp { distance_px: 30 }.style(false, 0, 800);
        assert!(up.starts_with("opacity: 0; transform: translateY(30px);"));

        let left = Entrance::SlideFromLeft { distance_px: 50 }.style(false, 0, 800);
        assert!(left.contains("translateX(-50px)"));

        let scale = Entrance::ScaleIn { from_percent: 90 }.style(false, 0, 500);
        assert!(scale.contains("scale(0.9)"));
    }

    #[test]
    fn test_fade_only_changes_opacity() {
        let hidden = Entrance::Fade.style(false, 1000, 1000);
        assert!(hidden.starts_with("opacity: 0; transform: none;"));
        assert!(hidden.contains("opacity 1000ms ease-out 1000ms"));

        let shown = Entrance::Fade.style(true, 1000, 1000);
        assert!(shown.starts_with("opacity: 1; transform: none;"));
    }

    #[test]
    fn test_shown_style_keeps_delay() {
        let style = Entrance::FadeUp { distance_px: 20 }.style(true, 400, 500);
        assert_eq!(
            style,
            "opacity: 1; transform: none; transition: opacity 500ms ease-out 400ms, transform 500ms ease-out 400ms;"
        );
    }
}
