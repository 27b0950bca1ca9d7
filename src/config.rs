use log::Level;

/// Vertical offset past which the nav bar switches to its compact style.
pub const NAV_SCROLL_THRESHOLD_PX: f64 = 50.0;

pub const COUNTER_DURATION_MS: u32 = 2000;
pub const COUNTER_TICK_MS: u32 = 16;

// IntersectionObserver root margins
pub const DEFAULT_REVEAL_MARGIN: &str = "0px";
pub const ABOUT_REVEAL_MARGIN: &str = "-100px";

pub const BRAND_NAME: &str = "THE CONCEPT";
pub const COMPANY_NAME: &str = "The Concept Advertising";
pub const OFFICE_LOCATION: &str = "Dubai, United Arab Emirates";

#[cfg(debug_assertions)]
pub fn log_level() -> Level {
    Level::Debug // Verbose when running locally
}

#[cfg(not(debug_assertions))]
pub fn log_level() -> Level {
    Level::Info
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_counter_runs_125_ticks() {
        assert_eq!(COUNTER_DURATION_MS as f64 / COUNTER_TICK_MS as f64, 125.0);
    }

    #[test]
    fn test_log_level_matches_profile() {
        if cfg!(debug_assertions) {
            assert_eq!(log_level(), Level::Debug);
        } else {
            assert_eq!(log_level(), Level::Info);
        }
    }
}
