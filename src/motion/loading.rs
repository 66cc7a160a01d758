use std::ops::Range;

use rand::Rng;

pub const COMPLETE: f64 = 100.0;

/// What a single progress tick did.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ProgressTick {
    Advanced(f64),
    /// This tick brought progress to 100.
    Reached,
    /// Progress was already at 100; nothing changed.
    Done,
}

/// Simulated splash-screen progress, clamped to `[0, 100]`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LoadingProgress {
    percent: f64,
}

impl LoadingProgress {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn percent(&self) -> f64 {
        self.percent
    }

    /// Whole-number percentage for the splash label.
    pub fn label(&self) -> u8 {
        self.percent.round() as u8
    }

    pub fn is_complete(&self) -> bool {
        self.percent >= COMPLETE
    }

    pub fn tick<R: Rng + ?Sized>(&mut self, rng: &mut R, step: &Range<f64>) -> ProgressTick {
        if self.is_complete() {
            return ProgressTick::Done;
        }
        let inc = if step.start < step.end {
            rng.gen_range(step.clone())
        } else {
            step.start
        };
        self.percent = (self.percent + inc.max(0.0)).min(COMPLETE);
        if self.is_complete() {
            ProgressTick::Reached
        } else {
            ProgressTick::Advanced(self.percent)
        }
    }
}
