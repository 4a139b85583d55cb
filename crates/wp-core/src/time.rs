//! Simulation time model.
//!
//! # Design
//!
//! Time advances in discrete ticks of a fixed length `dt_secs`:
//!
//!   elapsed_secs = tick * dt_secs
//!
//! The tick counter is the canonical unit so that runs are reproducible; the
//! per-tick `dt` handed to movement code is always `SimClock::dt_secs`.

use std::fmt;

use crate::{CoreError, CoreResult};

// ── Tick ─────────────────────────────────────────────────────────────────────

/// An absolute simulation tick counter.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Tick(pub u64);

impl Tick {
    pub const ZERO: Tick = Tick(0);
}

impl std::ops::Add<u64> for Tick {
    type Output = Tick;
    #[inline]
    fn add(self, rhs: u64) -> Tick {
        Tick(self.0 + rhs)
    }
}

impl fmt::Display for Tick {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "T{}", self.0)
    }
}

// ── SimClock ──────────────────────────────────────────────────────────────────

/// Tracks the current tick and the fixed step length.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SimClock {
    /// Seconds of simulated time per tick.
    pub dt_secs: f32,
    /// The current tick - advanced by `SimClock::advance()` each iteration.
    pub current_tick: Tick,
}

impl SimClock {
    pub fn new(dt_secs: f32) -> Self {
        Self { dt_secs, current_tick: Tick::ZERO }
    }

    /// Advance the clock by one tick.
    #[inline]
    pub fn advance(&mut self) {
        self.current_tick = self.current_tick + 1;
    }

    /// Elapsed simulated seconds since tick 0.
    #[inline]
    pub fn elapsed_secs(&self) -> f64 {
        self.current_tick.0 as f64 * self.dt_secs as f64
    }
}

impl fmt::Display for SimClock {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({:.3}s)", self.current_tick, self.elapsed_secs())
    }
}

// ── SimConfig ─────────────────────────────────────────────────────────────────

/// Top-level simulation configuration.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SimConfig {
    /// Seconds per tick.  Must be finite and non-negative.
    pub dt_secs: f32,

    /// Total ticks to simulate.
    pub total_ticks: u64,

    /// Master RNG seed for anything the application randomizes.
    pub seed: u64,

    /// Emit a pose snapshot every N ticks.  0 disables snapshots.
    pub output_interval_ticks: u64,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            dt_secs:               1.0 / 60.0,
            total_ticks:           600,
            seed:                  0,
            output_interval_ticks: 1,
        }
    }
}

impl SimConfig {
    /// The tick at which the simulation ends (exclusive upper bound).
    #[inline]
    pub fn end_tick(&self) -> Tick {
        Tick(self.total_ticks)
    }

    /// Construct a `SimClock` pre-configured for this run.
    pub fn make_clock(&self) -> SimClock {
        SimClock::new(self.dt_secs)
    }

    /// Reject step lengths the tick contract does not allow.
    pub fn validate(&self) -> CoreResult<()> {
        if !self.dt_secs.is_finite() || self.dt_secs < 0.0 {
            return Err(CoreError::Config(format!(
                "dt_secs must be finite and non-negative, got {}",
                self.dt_secs
            )));
        }
        Ok(())
    }
}
