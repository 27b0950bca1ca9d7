//! Count-up animation for the statistics counters.
//!
//! A run adds a fixed increment to a floating accumulator on every tick and
//! shows the floor of it. Once the accumulator reaches the target the display
//! snaps to the exact target and the run stops producing updates.

use crate::config::{COUNTER_DURATION_MS, COUNTER_TICK_MS};

/// How long a run lasts and how often it ticks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CounterTiming {
    pub duration_ms: u32,
    pub tick_ms: u32,
}

impl Default for CounterTiming {
    fn default() -> Self {
        Self {
            duration_ms: COUNTER_DURATION_MS,
            tick_ms: COUNTER_TICK_MS,
        }
    }
}

impl CounterTiming {
    /// Number of ticks a run is spread over (125.0 with the defaults).
    pub fn ticks(&self) -> f64 {
        if self.tick_ms == 0 {
            return 1.0;
        }
        self.duration_ms as f64 / self.tick_ms as f64
    }

    pub fn increment_for(&self, target: u32) -> f64 {
        let ticks = self.ticks();
        if ticks <= 0.0 {
            return target as f64;
        }
        target as f64 / ticks
    }
}

/// Outcome of a single tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tick {
    Running(u32),
    Done(u32),
}

impl Tick {
    pub fn value(&self) -> u32 {
        match *self {
            Tick::Running(v) | Tick::Done(v) => v,
        }
    }
}

/// One animation run from 0 to `target`.
#[derive(Debug, Clone)]
pub struct CountUp {
    target: u32,
    increment: f64,
    accumulator: f64,
    current: u32,
    finished: bool,
}

impl CountUp {
    pub fn new(target: u32, timing: CounterTiming) -> Self {
        Self {
            target,
            increment: timing.increment_for(target),
            accumulator: 0.0,
            current: 0,
            finished: false,
        }
    }

    #[cfg(test)]
    pub fn increment(&self) -> f64 {
        self.increment
    }

    #[cfg(test)]
    pub fn current(&self) -> u32 {
        self.current
    }

    #[cfg(test)]
    pub fn is_finished(&self) -> bool {
        self.finished
    }

    /// Stop the run where it is. Later ticks are ignored.
    pub fn cancel(&mut self) {
        self.finished = true;
    }

    /// Advance one tick. `None` once the run finished or was cancelled.
    pub fn tick(&mut self) -> Option<Tick> {
        if self.finished {
            return None;
        }

        self.accumulator += self.increment;
        if self.accumulator >= self.target as f64 {
            self.current = self.target;
            self.finished = true;
            return Some(Tick::Done(self.target));
        }

        let floored = self.accumulator.floor() as u32;
        self.current = floored.min(self.target).max(self.current);
        Some(Tick::Running(self.current))
    }
}

/// Whether a counter should start a run: it is in view and the last run did
/// not already settle on `target`. A changed target starts over.
pub fn needs_run(in_view: bool, settled: Option<u32>, target: u32) -> bool {
    in_view && settled != Some(target)
}

pub fn format_count(value: u32, suffix: &str) -> String {
    format!("{}{}", value, suffix)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run_to_end(run: &mut CountUp) -> Vec<u32> {
        let mut seen = Vec::new();
        // Generous cap so a regression fails instead of hanging.
        for _ in 0..10_000 {
            match run.tick() {
                Some(tick) => seen.push(tick.value()),
                None => break,
            }
        }
        seen
    }

    #[test]
    fn test_default_timing() {
        let timing = CounterTiming::default();
        assert_eq!(timing.duration_ms, 2000);
        assert_eq!(timing.tick_ms, 16);
        assert_eq!(timing.ticks(), 125.0);
    }

    #[test]
    fn test_final_display_is_exact() {
        for (value, suffix, expected) in [
            (35, "%", "35%"),
            (150, "+", "150+"),
            (10, "ms", "10ms"),
            (24, "/7", "24/7"),
            (1, "", "1"),
            (99_999, "k", "99999k"),
        ] {
            let mut run = CountUp::new(value, CounterTiming::default());
            run_to_end(&mut run);
            assert!(run.is_finished());
            assert_eq!(format_count(run.current(), suffix), expected);
        }
    }

    #[test]
    fn test_sequence_is_monotonic_and_bounded() {
        for value in [3, 35, 150, 1000, 123_457] {
            let mut run = CountUp::new(value, CounterTiming::default());
            let seen = run_to_end(&mut run);
            assert!(seen.windows(2).all(|w| w[0] <= w[1]), "target {}", value);
            assert!(seen.iter().all(|v| *v <= value), "target {}", value);
            assert_eq!(seen.last(), Some(&value));
        }
    }

    #[test]
    fn test_zero_target_finishes_on_first_tick() {
        let mut run = CountUp::new(0, CounterTiming::default());
        assert_eq!(run.increment(), 0.0);
        assert_eq!(run.tick(), Some(Tick::Done(0)));
        assert_eq!(run.tick(), None);
        assert_eq!(format_count(run.current(), "+"), "0+");
    }

    #[test]
    fn test_round_the_clock_scenario() {
        let mut run = CountUp::new(24, CounterTiming::default());
        assert!((run.increment() - 0.192).abs() < 1e-12);

        let seen = run_to_end(&mut run);
        // 125 ticks, plus one if float drift leaves the sum a hair short
        assert!(seen.len() == 125 || seen.len() == 126, "took {} ticks", seen.len());
        assert_eq!(format_count(run.current(), "/7"), "24/7");
    }

    #[test]
    fn test_no_updates_after_done() {
        let mut run = CountUp::new(10, CounterTiming::default());
        run_to_end(&mut run);
        assert_eq!(run.tick(), None);
        assert_eq!(run.current(), 10);
    }

    #[test]
    fn test_cancel_stops_mid_run() {
        let mut run = CountUp::new(150, CounterTiming::default());
        for _ in 0..40 {
            run.tick();
        }
        let frozen = run.current();
        assert!(frozen > 0 && frozen < 150);

        run.cancel();
        for _ in 0..200 {
            assert_eq!(run.tick(), None);
        }
        assert_eq!(run.current(), frozen);
    }

    #[test]
    fn test_needs_run_waits_for_view() {
        assert!(!needs_run(false, None, 35));
        assert!(needs_run(true, None, 35));
    }

    #[test]
    fn test_needs_run_settled_target() {
        assert!(!needs_run(true, Some(35), 35));
        assert!(!needs_run(true, Some(0), 0));
    }

    #[test]
    fn test_changed_target_restarts_from_zero() {
        // First run settles on 35.
        let mut first = CountUp::new(35, CounterTiming::default());
        run_to_end(&mut first);
        assert_eq!(format_count(first.current(), "%"), "35%");

        // Target moves to 150 after completion: a fresh run is due.
        assert!(needs_run(true, Some(35), 150));
        let mut second = CountUp::new(150, CounterTiming::default());
        assert_eq!(second.current(), 0);
        let seen = run_to_end(&mut second);
        assert!(seen.windows(2).all(|w| w[0] <= w[1]));
        assert_eq!(format_count(second.current(), "%"), "150%");

        // Once settled on the new target no further run starts.
        assert!(!needs_run(true, Some(150), 150));
    }

    #[test]
    fn test_zero_tick_interval_finishes_in_one_tick() {
        let timing = CounterTiming {
            duration_ms: 2000,
            tick_ms: 0,
        };
        let mut run = CountUp::new(42, timing);
        assert_eq!(run.tick(), Some(Tick::Done(42)));
    }
}
