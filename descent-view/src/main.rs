//! Application entry point for the gradient descent viewer.
//!
//! This binary sets up logging and eframe/egui, hands the run to
//! [`Viewer`], and prints the final result once the window is closed.

mod viewer;

use std::{cell::RefCell, rc::Rc};

use descent_core::{config::Config, descent::Descent};
use viewer::Viewer;

/// Starts the native eframe application.
///
/// The window titled `"Gradient Descent"` stays open after the descent
/// converges; the two result lines go to stdout after the user closes it.
///
/// ### Returns
/// - `Ok(())` once the window has been closed.
/// - `Err` if eframe fails to create the native window or event loop.
fn main() -> eframe::Result<()> {
    env_logger::init();

    let cfg = Config::default();
    let report = Rc::new(RefCell::new(Descent::new(cfg).snapshot()));
    let options = eframe::NativeOptions::default();

    let slot = Rc::clone(&report);
    eframe::run_native(
        "Gradient Descent",
        options,
        Box::new(move |_cc| Ok(Box::new(Viewer::new(cfg, slot)))),
    )?;

    println!("{}", report.borrow());
    Ok(())
}
