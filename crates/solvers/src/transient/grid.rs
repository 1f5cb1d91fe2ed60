//! Uniform time grids.
//!
//! A [`TimeGrid`] samples `0, step, 2·step, …` up to and including the first
//! point at or past `end`. The point count is `ceil((end + step) / step)`
//! evaluated in `f64`, so when `end / step` is not exactly representable the
//! last point may land one rounding error past `end`, or one whole step past
//! it. The grid is exactly the half-open range `[0, end + step)` sampled at
//! multiples of `step`.

use thiserror::Error;

/// Errors that can occur when building a [`TimeGrid`].
#[derive(Debug, Error, Clone, Copy, PartialEq)]
pub enum GridError {
    #[error("step must be finite and positive, got {0}")]
    Step(f64),

    #[error("end must be finite and non-negative, got {0}")]
    End(f64),

    #[error("grid would hold {points} points, more than the limit of {limit}")]
    TooManyPoints { points: f64, limit: usize },
}

/// A uniform grid of sample times starting at zero.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TimeGrid {
    step: f64,
    len: usize,
}

impl TimeGrid {
    /// Largest number of points a grid may hold.
    pub const MAX_POINTS: usize = 10_000_000;

    /// Builds the grid `0, step, 2·step, …` that runs through `end`.
    ///
    /// # Errors
    ///
    /// Returns an error if `step` is not finite and positive, if `end` is not
    /// finite and non-negative, or if the grid would exceed
    /// [`TimeGrid::MAX_POINTS`].
    pub fn through(end: f64, step: f64) -> Result<Self, GridError> {
        if !step.is_finite() || step <= 0.0 {
            return Err(GridError::Step(step));
        }
        if !end.is_finite() || end < 0.0 {
            return Err(GridError::End(end));
        }

        let points = ((end + step) / step).ceil();

        #[allow(clippy::cast_precision_loss)]
        let limit = Self::MAX_POINTS as f64;
        if !points.is_finite() || points > limit {
            return Err(GridError::TooManyPoints {
                points,
                limit: Self::MAX_POINTS,
            });
        }

        // `points >= 1` because `end >= 0` and `step > 0`.
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let len = points as usize;

        Ok(Self { step, len })
    }

    /// Returns the spacing between consecutive points.
    #[must_use]
    pub fn step(&self) -> f64 {
        self.step
    }

    /// Returns the number of points, including `t = 0`.
    #[must_use]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Always `false`: every grid contains at least `t = 0`.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns the number of steps between the first and last points.
    #[must_use]
    pub fn steps(&self) -> usize {
        self.len - 1
    }

    /// Returns the time of the point at `index`.
    ///
    /// Times are computed as `index * step` rather than accumulated, so the
    /// grid does not drift over long runs.
    #[must_use]
    pub fn time(&self, index: usize) -> f64 {
        #[allow(clippy::cast_precision_loss)]
        let index = index as f64;
        index * self.step
    }

    /// Returns the time of the last point.
    #[must_use]
    pub fn end(&self) -> f64 {
        self.time(self.steps())
    }

    /// Iterates over every point of the grid in order.
    pub fn iter(&self) -> impl ExactSizeIterator<Item = f64> + '_ {
        (0..self.len).map(|index| self.time(index))
    }
}
