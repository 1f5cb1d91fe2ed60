//! Solvers for transient problems: stepping a model forward in time.
//!
//! An [`OdeProblem`] extracts a state from model inputs and a derivative from
//! model outputs. Solvers in this module repeatedly step that state across a
//! fixed time grid.
//!
//! # Solvers
//!
//! - [`euler`]: explicit forward Euler with a constant step
//!
//! [`OdeProblem`]: predprey_core::OdeProblem

pub mod euler;
pub mod grid;

pub use grid::{GridError, TimeGrid};
