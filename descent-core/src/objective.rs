//! The quadratic loss `a² − 4a + 10` and its analytic derivative.

/// Parameter value at which [`loss`] attains its minimum.
pub const THETA_STAR: f64 = 2.0;

/// Minimum value of [`loss`], reached at [`THETA_STAR`].
pub const LOSS_STAR: f64 = 6.0;

/// Evaluates the loss `a² − 4a + 10`.
pub fn loss(a: f64) -> f64 {
    a * a - 4.0 * a + 10.0
}

/// Evaluates `d/da loss(a) = 2a − 4`.
///
/// Must stay the exact derivative of [`loss`]: the descent stops on its
/// magnitude.
pub fn derivative(a: f64) -> f64 {
    2.0 * a - 4.0
}
