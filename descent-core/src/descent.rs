//! Fixed-step gradient descent on the quadratic loss.
//!
//! A run has a single "descending" state and one terminal condition:
//! 1. [`Descent::step`] moves `theta` against the derivative,
//!    `theta <- theta - alpha * derivative(theta)`.
//! 2. The caller draws the new point and pauses (see [`run`]).
//! 3. The run ends once `|derivative(theta)| < epsilon`.
//!
//! The termination check always follows an update, so a run started at the
//! minimum still performs one (no-op) step.

use glam::DVec2;
use log::{debug, info, warn};

use crate::{
    config::Config,
    error::DescentError,
    objective::{derivative, loss},
    pacing::Pacer,
    report::Outcome,
};

/// State after one update.
///
/// ### Fields
/// - `iter` - 1-based index of the update that produced this state.
/// - `theta` - Parameter value after the update.
/// - `loss` - `loss(theta)`.
/// - `derivative` - `derivative(theta)`, the value the stop test uses.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Step {
    pub iter: usize,
    pub theta: f64,
    pub loss: f64,
    pub derivative: f64,
}

impl Step {
    /// The plotted point `(theta, loss)`.
    pub fn point(&self) -> DVec2 {
        DVec2::new(self.theta, self.loss)
    }
}

/// An in-progress descent.
///
/// Owns the current `theta` and the run's [`Config`]; there is no shared
/// state between runs.
#[derive(Clone, Debug)]
pub struct Descent {
    cfg: Config,
    theta: f64,
    iters: usize,
    converged: bool,
}

impl Descent {
    /// Starts a run at `cfg.theta0` with no updates applied.
    pub fn new(cfg: Config) -> Self {
        Self {
            cfg,
            theta: cfg.theta0,
            iters: 0,
            converged: false,
        }
    }

    pub fn config(&self) -> &Config {
        &self.cfg
    }

    pub fn theta(&self) -> f64 {
        self.theta
    }

    pub fn iters(&self) -> usize {
        self.iters
    }

    pub fn is_converged(&self) -> bool {
        self.converged
    }

    /// `true` once the iteration guard is used up without convergence.
    pub fn is_exhausted(&self) -> bool {
        !self.converged && self.cfg.max_iters.is_some_and(|n| self.iters >= n)
    }

    /// `true` while [`Descent::step`] would still update `theta`.
    pub fn is_running(&self) -> bool {
        !self.converged && !self.is_exhausted()
    }

    /// Applies one gradient step and evaluates the stop condition.
    ///
    /// ### Returns
    /// - `Some(step)` describing the new state.
    /// - `None` if the run had already converged or hit `max_iters`; `theta`
    ///   is left untouched.
    pub fn step(&mut self) -> Option<Step> {
        if !self.is_running() {
            return None;
        }

        self.theta -= self.cfg.alpha * derivative(self.theta);
        self.iters += 1;

        let step = Step {
            iter: self.iters,
            theta: self.theta,
            loss: loss(self.theta),
            derivative: derivative(self.theta),
        };
        debug!(
            "iter {}: theta = {}, loss = {}, derivative = {}",
            step.iter, step.theta, step.loss, step.derivative
        );

        if step.derivative.abs() < self.cfg.epsilon {
            self.converged = true;
            info!(
                "converged after {} iterations at theta = {}",
                self.iters, self.theta
            );
        } else if self.is_exhausted() {
            warn!(
                "stopped after {} iterations without converging (theta = {})",
                self.iters, self.theta
            );
        }

        Some(step)
    }

    /// Current state as an [`Outcome`], whether or not the run has finished.
    pub fn snapshot(&self) -> Outcome {
        Outcome {
            theta: self.theta,
            loss: loss(self.theta),
            iters: self.iters,
        }
    }

    /// Result of the run.
    ///
    /// ### Returns
    /// - `Ok(outcome)` once the run has converged.
    /// - `Err(DescentError::DidNotConverge)` otherwise, carrying the
    ///   iterations done so far and the current `theta`.
    pub fn outcome(&self) -> Result<Outcome, DescentError> {
        if self.converged {
            Ok(self.snapshot())
        } else {
            Err(DescentError::DidNotConverge {
                iters: self.iters,
                theta: self.theta,
            })
        }
    }
}

/// Runs a full descent on the calling thread.
///
/// Every step is handed to `on_step` (to draw it), followed by
/// `pacer.pause(cfg.pause)`; the loop ends when the run converges or the
/// iteration guard trips.
///
/// ### Parameters
/// - `cfg` - Run constants.
/// - `pacer` - Pause between steps; [`crate::pacing::NoPacing`] for tests.
/// - `on_step` - Called with each new state, in order.
///
/// ### Returns
/// The converged [`Outcome`], or [`DescentError::DidNotConverge`] when
/// `cfg.max_iters` steps were taken without meeting `epsilon`.
pub fn run<P, F>(cfg: &Config, pacer: &mut P, mut on_step: F) -> Result<Outcome, DescentError>
where
    P: Pacer + ?Sized,
    F: FnMut(&Step),
{
    info!(
        "starting descent: theta0 = {}, alpha = {}, epsilon = {}",
        cfg.theta0, cfg.alpha, cfg.epsilon
    );

    let mut descent = Descent::new(*cfg);
    while let Some(step) = descent.step() {
        on_step(&step);
        pacer.pause(cfg.pause);
    }
    descent.outcome()
}
