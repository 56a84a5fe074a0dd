//! Core one-dimensional gradient descent library.
//!
//! Main components:
//! - [`objective`] — the quadratic loss and its derivative.
//! - [`curve`] — sampling of the static loss curve.
//! - [`config`] — run constants (start point, step size, threshold, pause).
//! - [`descent`] — the descent state machine and the headless driver.
//! - [`trajectory`] — append-only series of visited points.
//! - [`pacing`] — injectable pause between steps.
//! - [`report`] — final outcome of a converged run.
//! - [`error`] — failure conditions of a run.

pub mod config;
pub mod curve;
pub mod descent;
pub mod error;
pub mod objective;
pub mod pacing;
pub mod report;
pub mod trajectory;
