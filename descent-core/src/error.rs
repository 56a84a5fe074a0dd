/// Ways a descent run can end without reaching the threshold.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum DescentError {
    /// The iteration guard ran out before `|derivative| < epsilon`.
    #[error("did not converge after {iters} iterations (theta = {theta})")]
    DidNotConverge { iters: usize, theta: f64 },
}
