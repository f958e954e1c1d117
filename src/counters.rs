//! Ramp animation for the home-page stat counters.
//!
//! The browser only schedules: the stats section fires once when it scrolls
//! into view, and each frame response asks for the next step after a fixed
//! delay until the ramp completes. All values come from here, so the counts
//! a visitor sees are exactly the ones `value_at` defines.

use crate::models::StatTargets;

/// Number of discrete animation steps.
pub const STEP_COUNT: u32 = 60;
/// Delay between steps; 60 steps over a fixed 2 second ramp.
pub const STEP_DELAY_MS: u64 = 33;

/// Lifecycle of one counter run. A run never restarts: past-the-end steps
/// collapse to `Done`, so replaying or skipping requests cannot move a
/// counter backwards.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RampPhase {
    Idle,
    Animating(u32),
    Done,
}

impl RampPhase {
    pub fn at_step(step: u32) -> Self {
        match step {
            0 => Self::Idle,
            s if s < STEP_COUNT => Self::Animating(s),
            _ => Self::Done,
        }
    }

    pub fn advance(self) -> Self {
        match self {
            Self::Idle => Self::at_step(1),
            Self::Animating(step) => Self::at_step(step + 1),
            Self::Done => Self::Done,
        }
    }

    /// Step the next frame should request, if the run is still going.
    pub fn next_step(self) -> Option<u32> {
        match self {
            Self::Idle => Some(1),
            Self::Animating(step) => Some(step + 1),
            Self::Done => None,
        }
    }
}

/// One rendered frame of the three counters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RampFrame {
    pub phase: RampPhase,
    pub students: String,
    pub courses: String,
    pub exams: String,
}

#[derive(Debug, Clone, Copy)]
pub struct CounterRamp {
    targets: StatTargets,
}

impl CounterRamp {
    pub fn new(targets: StatTargets) -> Self {
        Self { targets }
    }

    /// Count shown at `step`: each step adds `target / STEP_COUNT`, clamped
    /// to the target and floored to a whole number. Step `STEP_COUNT` (and
    /// anything beyond) lands on the target exactly.
    pub fn value_at(target: u64, step: u32) -> u64 {
        if step >= STEP_COUNT {
            return target;
        }
        let increment = target as f64 / f64::from(STEP_COUNT);
        (f64::from(step) * increment).min(target as f64).floor() as u64
    }

    /// Rendered text for one counter. "+" marks a completed nonzero count,
    /// read as "at least this many"; a zero target stays a plain "0".
    pub fn display_at(target: u64, step: u32) -> String {
        let value = Self::value_at(target, step);
        if value == target && target > 0 {
            format!("{value}+")
        } else {
            value.to_string()
        }
    }

    pub fn frame(&self, step: u32) -> RampFrame {
        RampFrame {
            phase: RampPhase::at_step(step),
            students: Self::display_at(self.targets.students, step),
            courses: Self::display_at(self.targets.courses, step),
            exams: Self::display_at(self.targets.exams, step),
        }
    }
}
