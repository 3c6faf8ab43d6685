use crate::equation::Evaluation;

/// Iteration event emitted by the bisection solver.
///
/// One event is emitted per midpoint evaluation. Endpoint evaluations are
/// not observed.
#[derive(Debug)]
pub struct Event<'a, I, O> {
    /// Iteration counter (1-based within the bisection loop).
    pub iter: usize,
    /// Search bracket the midpoint was taken from.
    pub bracket: [f64; 2],
    /// Evaluation at the current midpoint.
    pub eval: &'a Evaluation<I, O, 1>,
}

impl<I, O> Event<'_, I, O> {
    /// Returns the evaluated midpoint.
    #[must_use]
    pub fn x(&self) -> f64 {
        self.eval.x[0]
    }

    /// Returns the residual at the midpoint.
    #[must_use]
    pub fn residual(&self) -> f64 {
        self.eval.residuals[0]
    }
}
