//! Chart descriptions and rendering for predprey simulations.
//!
//! A [`Figure`] is a plain description of one chart: a title, axis labels,
//! and colored [`Trace`]s. Figures carry no rendering state, so they can be
//! built and tested without a display.
//!
//! # Features
//!
//! - `window`: Enables [`show`], which opens a native egui window with one
//!   plot per figure. This feature adds dependencies on `eframe` and
//!   `egui_plot`.

mod figure;

pub use figure::{Figure, Rgb, Style, Trace};

#[cfg(feature = "window")]
mod window;

#[cfg(feature = "window")]
pub use window::{ShowConfig, show};
