//! Numerical solvers for predprey models.
//!
//! # Modules
//!
//! - [`transient`]: fixed-step time integration: the [`TimeGrid`] a run is
//!   sampled on and the forward [`euler`] integrator that walks it
//!
//! [`TimeGrid`]: transient::TimeGrid
//! [`euler`]: transient::euler

pub mod transient;
