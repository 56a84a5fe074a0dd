//! Sampling of the static loss curve drawn behind the trajectory.

use crate::objective::loss;
use glam::DVec2;

/// First sampled parameter value of the reference curve.
pub const CURVE_START: f64 = -4.0;
/// Spacing between consecutive samples.
pub const CURVE_STEP: f64 = 0.1;
/// Number of samples; covers `[-4, 8)`.
pub const CURVE_SAMPLES: usize = 120;

/// Samples `count` points `(theta_i, loss(theta_i))` with
/// `theta_i = start + step * i`.
///
/// Each `theta_i` is computed from its index rather than by accumulating
/// `step`, so rounding does not drift along the curve.
pub fn sample_curve(start: f64, step: f64, count: usize) -> Vec<DVec2> {
    (0..count)
        .map(|i| {
            let theta = start + step * i as f64;
            DVec2::new(theta, loss(theta))
        })
        .collect()
}

/// The reference parabola over `[-4, 8)` at a `0.1` spacing.
pub fn loss_curve() -> Vec<DVec2> {
    sample_curve(CURVE_START, CURVE_STEP, CURVE_SAMPLES)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn loss_curve_covers_the_half_open_domain() {
        let curve = loss_curve();

        assert_eq!(curve.len(), 120);
        assert_eq!(curve[0], DVec2::new(-4.0, 42.0));

        let last = curve[curve.len() - 1];
        assert!((last.x - 7.9).abs() < 1e-12, "last theta = {}", last.x);
        assert!(last.x < 8.0);
    }

    #[test]
    fn samples_increase_and_lie_on_the_loss() {
        let curve = loss_curve();

        for pair in curve.windows(2) {
            assert!(pair[1].x > pair[0].x);
        }
        for p in &curve {
            assert_eq!(p.y, loss(p.x));
        }
    }

    #[test]
    fn sample_curve_with_zero_count_is_empty() {
        assert!(sample_curve(0.0, 1.0, 0).is_empty());
    }
}
