//! Cosmetic upload progress.
//!
//! The width is not derived from transferred bytes: each frame adds a random
//! step and the animation stops itself once it reaches 100%.

use rand::Rng;

use crate::config::PROGRESS_MAX_STEP;

/// Width of the fake progress bar, in percent.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ProgressAnimation {
    width: f64,
    finished: bool,
}

impl ProgressAnimation {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn width(&self) -> f64 {
        self.width
    }

    pub fn is_finished(&self) -> bool {
        self.finished
    }

    /// Adds `step` to the width, clamping at exactly 100.
    ///
    /// Negative steps are ignored so the width never decreases.
    /// Returns the new width.
    pub fn advance(&mut self, step: f64) -> f64 {
        if self.finished {
            return self.width;
        }
        self.width += step.max(0.0);
        if self.width >= 100.0 {
            self.width = 100.0;
            self.finished = true;
        }
        self.width
    }

    /// Advances by a random step in `[0, PROGRESS_MAX_STEP)`.
    pub fn tick<R: Rng + ?Sized>(&mut self, rng: &mut R) -> f64 {
        let step = rng.gen_range(0.0..PROGRESS_MAX_STEP);
        self.advance(step)
    }
}
