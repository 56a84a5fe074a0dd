//! Interactive gradient descent viewer built with eframe/egui.
//!
//! This module defines [`Viewer`], which owns a [`Descent`] run together with
//! the plotted series and implements [`eframe::App`] to animate the run one
//! step per pause interval.

use std::{cell::RefCell, rc::Rc};

use descent_core::{
    config::Config,
    curve::loss_curve,
    descent::Descent,
    objective::{derivative, loss},
    report::Outcome,
    trajectory::Trajectory,
};
use eframe::App;
use egui_plot::{Legend, Line, MarkerShape, Plot, PlotPoints, Points};
use log::info;

/// Main application state for the viewer.
///
/// [`Viewer`] glues together:
/// - The descent core: [`Descent`], [`Trajectory`], [`Config`].
/// - The static loss curve, sampled once at construction.
/// - Timing used to space steps by `cfg.pause`.
///
/// The per-frame update is:
/// 1. Handle the control buttons.
/// 2. If `running` is `true` and enough time has passed, call [`Viewer::step_once`].
/// 3. Plot the curve and the trajectory.
///
/// ### Fields
/// - `cfg` - Constants of the run; reused on reset.
/// - `descent` - The run being animated.
/// - `curve` - Reference parabola as `[theta, loss]` pairs.
/// - `trajectory` - Points visited so far, in order.
/// - `report` - Latest state, shared with `main` for printing after close.
///
/// - `running` - Whether the run is currently auto-advancing.
/// - `step_interval` - Target time between automatic steps (seconds).
/// - `last_step_time` - Time stamp of the last step (egui time).
/// - `last_step_dt` - Actual time delta between the last two steps (for display only).
pub struct Viewer {
    cfg: Config,
    descent: Descent,
    curve: Vec<[f64; 2]>,
    trajectory: Trajectory,
    report: Rc<RefCell<Outcome>>,

    running: bool,
    step_interval: f64,
    last_step_time: f64,
    last_step_dt: f64,
}

impl Viewer {
    /// Creates a viewer that starts descending from `cfg.theta0` right away.
    ///
    /// ### Parameters
    /// - `cfg` - Run constants; `cfg.pause` sets the step interval.
    /// - `report` - Slot that always holds the current [`Outcome`].
    pub fn new(cfg: Config, report: Rc<RefCell<Outcome>>) -> Self {
        let descent = Descent::new(cfg);
        *report.borrow_mut() = descent.snapshot();

        info!(
            "starting descent: theta0 = {}, alpha = {}, epsilon = {}",
            cfg.theta0, cfg.alpha, cfg.epsilon
        );

        Self {
            cfg,
            descent,
            curve: loss_curve().iter().map(|p| p.to_array()).collect(),
            trajectory: Trajectory::new(),
            report,
            running: true,
            step_interval: cfg.pause.as_secs_f64(),
            last_step_time: 0.0,
            last_step_dt: 0.0,
        }
    }

    /// Restarts the run from `cfg.theta0`.
    ///
    /// The trajectory is cleared and auto-running stops; the static curve is
    /// kept.
    fn reset(&mut self) {
        self.descent = Descent::new(self.cfg);
        self.trajectory.clear();
        *self.report.borrow_mut() = self.descent.snapshot();
        self.running = false;
    }

    /// Advances the run by a single step.
    ///
    /// The new point is appended to the trajectory and published to the
    /// shared report. Once the run converges (or hits its iteration guard)
    /// auto-running stops and further calls do nothing.
    fn step_once(&mut self) {
        if let Some(step) = self.descent.step() {
            self.trajectory.push(step.point());
            *self.report.borrow_mut() = self.descent.snapshot();
        }
        if !self.descent.is_running() {
            self.running = false;
        }
    }

    fn status_text(&self) -> &'static str {
        if self.descent.is_converged() {
            "converged"
        } else if self.descent.is_exhausted() {
            "stopped (iteration limit)"
        } else if self.running {
            "running"
        } else {
            "paused"
        }
    }

    /// Builds the top panel UI (run controls, stepping, reset).
    fn ui_top_panel(&mut self, ctx: &egui::Context) {
        egui::TopBottomPanel::top("top_panel").show(ctx, |ui| {
            ui.horizontal(|ui| {
                let can_step = self.descent.is_running();

                if ui
                    .add_enabled(
                        can_step,
                        egui::Button::new(if self.running { "⏸ Pause" } else { "▶ Run" }),
                    )
                    .clicked()
                {
                    self.running = !self.running;
                }

                if ui
                    .add_enabled(can_step, egui::Button::new("Step"))
                    .clicked()
                {
                    let now = ctx.input(|i| i.time);
                    if self.last_step_time > 0.0 {
                        self.last_step_dt = now - self.last_step_time;
                    }
                    self.step_once();
                    self.last_step_time = now;
                }

                if ui.button("Reset").clicked() {
                    self.reset();
                }
            });
        });
    }

    /// Builds the bottom status bar (iteration, theta, loss, derivative).
    fn ui_status_bar(&self, ctx: &egui::Context) {
        let theta = self.descent.theta();

        egui::TopBottomPanel::bottom("status_bar").show(ctx, |ui| {
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                ui.label(format!("dt target = {:.3} s", self.step_interval));
                ui.label(format!("dt last = {:.3} s", self.last_step_dt));
                ui.separator();
                ui.label(self.status_text());
                ui.label(format!("derivative = {:.6}", derivative(theta)));
                ui.label(format!("loss = {:.6}", loss(theta)));
                ui.label(format!("theta = {:.6}", theta));
                ui.label(format!("iter = {}", self.descent.iters()));
            });
        });
    }

    /// Builds the central panel with the loss curve and the descent markers.
    fn ui_central_panel(&mut self, ctx: &egui::Context) {
        egui::CentralPanel::default().show(ctx, |ui| {
            let curve = Line::new("loss", PlotPoints::from(self.curve.clone())).width(2.0_f32);
            let markers = Points::new("descent", PlotPoints::from(self.trajectory.to_pairs()))
                .shape(MarkerShape::Asterisk)
                .color(egui::Color32::BLUE)
                .radius(4.0_f32);

            Plot::new("loss_plot")
                .legend(Legend::default())
                .x_axis_label("theta")
                .y_axis_label("loss")
                .show(ui, |plot_ui| {
                    plot_ui.line(curve);
                    plot_ui.points(markers);
                });

            // Auto-run if requested.
            if self.running {
                let now = ctx.input(|i| i.time);
                let elapsed = now - self.last_step_time;
                if elapsed >= self.step_interval {
                    if self.last_step_time > 0.0 {
                        self.last_step_dt = elapsed;
                    }
                    self.step_once();
                    self.last_step_time = now;
                }

                ctx.request_repaint();
            }
        });
    }
}

impl App for Viewer {
    /// eframe callback that builds all UI panels for each frame.
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.ui_top_panel(ctx);
        self.ui_status_bar(ctx);
        self.ui_central_panel(ctx);
    }
}
