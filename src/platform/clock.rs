//! Host frame clock
//!
//! Turns variable frame deltas into the two fixed cadences the simulation
//! consumes: ticks and spawn signals. The cadences are independent; signals
//! come out in the order they fall due.

use crate::settings::TimingTuning;

/// A scheduled simulation signal
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Signal {
    Tick,
    Spawn,
}

/// Fixed timestep accumulator with a separate spawn timer
#[derive(Debug, Clone)]
pub struct FrameClock {
    tick_dt: f64,
    spawn_interval: f64,
    max_substeps: u32,
    max_frame_secs: f64,
    /// Simulated seconds since the clock started
    now: f64,
    next_tick: f64,
    next_spawn: f64,
    /// Total seconds skipped because frames overran the tick budget
    dropped_secs: f64,
}

impl FrameClock {
    pub fn new(timing: &TimingTuning) -> Self {
        let tick_dt = f64::from(timing.tick_dt());
        let spawn_interval = f64::from(timing.spawn_interval_secs);
        Self {
            tick_dt,
            spawn_interval,
            max_substeps: timing.max_substeps,
            max_frame_secs: f64::from(timing.max_frame_secs),
            now: 0.0,
            next_tick: tick_dt,
            next_spawn: spawn_interval,
            dropped_secs: 0.0,
        }
    }

    /// Advance by one host frame and return the signals that fell due, in order.
    ///
    /// Frames longer than `max_frame_secs` are clamped, and at most
    /// `max_substeps` ticks run per frame; ticks beyond that are skipped
    /// rather than queued.
    pub fn advance(&mut self, frame_secs: f32) -> Vec<Signal> {
        let frame_secs = f64::from(frame_secs);
        let dt = if frame_secs > 0.0 {
            frame_secs.min(self.max_frame_secs)
        } else {
            0.0
        };
        if dt < frame_secs {
            self.dropped_secs += frame_secs - dt;
            log::debug!("Clamped long frame {:.3}s to {:.3}s", frame_secs, dt);
        }

        let target = self.now + dt;
        let mut signals = Vec::new();
        let mut ticks = 0;
        loop {
            let tick_due = self.next_tick <= target && ticks < self.max_substeps;
            let spawn_due = self.next_spawn <= target;
            let signal = match (tick_due, spawn_due) {
                (false, false) => break,
                (true, true) if self.next_spawn <= self.next_tick => Signal::Spawn,
                (true, _) => Signal::Tick,
                (false, true) => Signal::Spawn,
            };
            match signal {
                Signal::Tick => {
                    self.next_tick += self.tick_dt;
                    ticks += 1;
                }
                Signal::Spawn => self.next_spawn += self.spawn_interval,
            }
            signals.push(signal);
        }

        if self.next_tick <= target {
            // Skip the backlog so one slow frame does not snowball
            let behind = ((target - self.next_tick) / self.tick_dt).floor() + 1.0;
            self.next_tick += behind * self.tick_dt;
            self.dropped_secs += behind * self.tick_dt;
            log::warn!("Frame overran {} ticks, skipped {} ticks", self.max_substeps, behind);
        }

        self.now = target;
        signals
    }

    /// Interpolation alpha for rendering between ticks (0.0 to 1.0)
    pub fn alpha(&self) -> f32 {
        let remaining = (self.next_tick - self.now) / self.tick_dt;
        (1.0 - remaining).clamp(0.0, 1.0) as f32
    }

    pub fn now(&self) -> f64 {
        self.now
    }

    pub fn dropped_secs(&self) -> f64 {
        self.dropped_secs
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// 64 Hz ticks and half-second spawns, both exact in binary
    fn exact_timing() -> TimingTuning {
        TimingTuning {
            tick_rate_hz: 64.0,
            spawn_interval_secs: 0.5,
            max_substeps: 8,
            max_frame_secs: 0.1,
        }
    }

    fn count(signals: &[Signal], which: Signal) -> usize {
        signals.iter().filter(|&&s| s == which).count()
    }

    #[test]
    fn test_one_tick_per_exact_frame() {
        let mut clock = FrameClock::new(&exact_timing());
        assert_eq!(clock.advance(1.0 / 64.0), [Signal::Tick]);
        assert_eq!(clock.advance(1.0 / 64.0), [Signal::Tick]);
    }

    #[test]
    fn test_accumulates_partial_frames() {
        let mut clock = FrameClock::new(&exact_timing());
        assert!(clock.advance(1.0 / 128.0).is_empty());
        assert_eq!(clock.advance(1.0 / 128.0), [Signal::Tick]);
    }

    #[test]
    fn test_spawn_cadence_independent_of_ticks() {
        let mut clock = FrameClock::new(&exact_timing());
        let mut all = Vec::new();
        for _ in 0..64 {
            all.extend(clock.advance(1.0 / 64.0));
        }
        assert_eq!(count(&all, Signal::Tick), 64);
        assert_eq!(count(&all, Signal::Spawn), 2);
        // Spawn due at the same instant as tick 32 comes first
        assert_eq!(all[31], Signal::Spawn);
        assert_eq!(all[32], Signal::Tick);
    }

    #[test]
    fn test_caps_ticks_per_frame() {
        let timing = TimingTuning {
            max_frame_secs: 1.0,
            ..exact_timing()
        };
        let mut clock = FrameClock::new(&timing);
        let signals = clock.advance(0.25);
        assert_eq!(count(&signals, Signal::Tick), 8);
        assert!(clock.dropped_secs() > 0.0);
        // Backlog is not carried into the next frame
        assert_eq!(clock.advance(1.0 / 64.0), [Signal::Tick]);
    }

    #[test]
    fn test_long_frame_is_clamped() {
        let mut clock = FrameClock::new(&exact_timing());
        clock.advance(5.0);
        assert!((clock.now() - 0.1).abs() < 1e-6);
        assert!(clock.dropped_secs() > 4.8);
    }

    #[test]
    fn test_negative_frame_is_ignored() {
        let mut clock = FrameClock::new(&exact_timing());
        assert!(clock.advance(-1.0).is_empty());
        assert!(clock.advance(f32::NAN).is_empty());
        assert_eq!(clock.now(), 0.0);
    }

    #[test]
    fn test_default_timing_rates() {
        let mut clock = FrameClock::new(&TimingTuning::default());
        let mut all = Vec::new();
        for _ in 0..180 {
            all.extend(clock.advance(1.0 / 60.0));
        }
        let ticks = count(&all, Signal::Tick);
        assert!((179..=181).contains(&ticks), "ticks {}", ticks);
        assert_eq!(count(&all, Signal::Spawn), 2);
    }

    #[test]
    fn test_alpha_is_between_zero_and_one() {
        let mut clock = FrameClock::new(&exact_timing());
        clock.advance(1.0 / 128.0);
        let a = clock.alpha();
        assert!((0.0..=1.0).contains(&a), "alpha was {}", a);
        assert!((a - 0.5).abs() < 1e-6);
    }
}
