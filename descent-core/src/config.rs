use std::time::Duration;

/// Constants of a descent run.
///
/// ### Fields
/// - `theta0` - Starting parameter value.
/// - `alpha` - Fixed learning rate applied to the derivative.
/// - `epsilon` - The run stops once `|derivative(theta)| < epsilon`.
/// - `pause` - Delay between consecutive steps when paced.
/// - `max_iters` - Iteration guard; `None` keeps stepping until convergence.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Config {
    pub theta0: f64,
    pub alpha: f64,
    pub epsilon: f64,
    pub pause: Duration,
    pub max_iters: Option<usize>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            theta0: -4.0,
            alpha: 0.01,
            epsilon: 0.0001,
            pause: Duration::from_millis(100),
            max_iters: Some(100_000),
        }
    }
}
