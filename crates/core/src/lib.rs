//! Core traits and types for predator–prey simulation.
//!
//! This crate defines the shared abstractions that the solver and the
//! population models build on:
//!
//! - [`Model`]: a callable that maps a typed input to a typed output
//! - [`Snapshot`]: a captured input/output pair from a model call
//! - [`Observer`]: receives solver events and optionally returns control actions
//! - [`OdeProblem`]: adapts a model to an ODE solver by extracting state,
//!   computing derivatives, and rebuilding inputs
//! - [`StepIntegrable`]: a state that can be advanced by `derivative * delta`

mod model;
mod observer;
mod problems;
mod step;

pub use observer::Observer;
pub use problems::OdeProblem;
pub use step::{DerivativeOf, StepIntegrable};
pub use {model::Model, model::Snapshot};
