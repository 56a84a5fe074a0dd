use std::fmt;

/// Final state of a converged descent.
///
/// Displays as the two lines printed at the end of a run:
///
/// ```text
/// Minimum loss function: 6.00000000248942
/// Minimum loss function when theta equals: 1.9999501059134195
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Outcome {
    pub theta: f64,
    pub loss: f64,
    pub iters: usize,
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Minimum loss function: {}", self.loss)?;
        write!(f, "Minimum loss function when theta equals: {}", self.theta)
    }
}
