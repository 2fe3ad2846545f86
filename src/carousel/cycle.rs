//! The automatic advance as an explicit two-state machine.
//!
//! ```text
//!            BeginFade (interval tick)
//!   Idle  ------------------------------>  Fading
//!    ^                                       |
//!    +---------------------------------------+
//!      CompleteFade (fade elapsed after the tick)
//! ```
//!
//! Ticks missed while the runtime was stalled collapse into one, and every
//! advance waits the full fade.

use std::num::NonZeroUsize;
use std::time::Duration;

use super::state::{CarouselStore, IndexUpdate};
use crate::config::ConfigError;

/// Where the cycle currently is.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CyclePhase {
    /// Showing an image, waiting for the next tick.
    Idle,
    /// Current image fading out, waiting to advance.
    Fading,
}

/// What a call to [`CarouselCycle::step`] did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CycleStep {
    /// Set `is_transitioning`.
    BeginFade,
    /// Advanced the index to this value and cleared `is_transitioning`.
    CompleteFade { index: usize },
}

/// Timing of the automatic advance.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CarouselCycle {
    interval: Duration,
    fade: Duration,
    phase: CyclePhase,
}

impl CarouselCycle {
    /// Create a cycle. The fade must be strictly shorter than the interval,
    /// otherwise ticks would overlap.
    pub fn new(interval: Duration, fade: Duration) -> Result<Self, ConfigError> {
        if interval <= fade {
            return Err(ConfigError::IntervalTooShort {
                interval_ms: interval.as_millis(),
                fade_ms: fade.as_millis(),
            });
        }
        Ok(Self {
            interval,
            fade,
            phase: CyclePhase::Idle,
        })
    }

    /// Current phase.
    pub fn phase(&self) -> CyclePhase {
        self.phase
    }

    /// Interval between ticks.
    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// How long the fade runs before the index advances.
    pub fn fade(&self) -> Duration {
        self.fade
    }

    /// Perform the transition that is due and apply it to `store`.
    pub fn step(&mut self, store: &CarouselStore, len: NonZeroUsize) -> CycleStep {
        match self.phase {
            CyclePhase::Idle => {
                store.set_transitioning(true);
                self.phase = CyclePhase::Fading;
                CycleStep::BeginFade
            }
            CyclePhase::Fading => {
                let index = store.set_index(IndexUpdate::advance(len.get()));
                store.set_transitioning(false);
                self.phase = CyclePhase::Idle;
                CycleStep::CompleteFade { index }
            }
        }
    }
}
