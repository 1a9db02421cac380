//! The objective function seam shared by both engines.
//!
//! Engines minimize: lower objective values are better. For
//! maximization, negate the objective.

/// A pure two-variable objective function.
///
/// Implemented for any `Fn(f64, f64) -> f64 + Send + Sync`, so plain
/// functions and closures plug in directly:
///
/// ```
/// use bivar_metaheur::objective::Objective;
///
/// let sphere = |x1: f64, x2: f64| x1 * x1 + x2 * x2;
/// assert_eq!(sphere.evaluate(3.0, 4.0), 25.0);
/// ```
pub trait Objective: Send + Sync {
    /// Evaluates the objective at `(x1, x2)`. Lower is better.
    fn evaluate(&self, x1: f64, x2: f64) -> f64;
}

impl<F> Objective for F
where
    F: Fn(f64, f64) -> f64 + Send + Sync,
{
    fn evaluate(&self, x1: f64, x2: f64) -> f64 {
        self(x1, x2)
    }
}

/// Default test objective: `4·(x1 − 5)² + (x2 − 6)²`.
///
/// A shifted elliptic bowl with its global minimum of 0 at (5, 6).
pub fn shifted_bowl(x1: f64, x2: f64) -> f64 {
    4.0 * (x1 - 5.0).powi(2) + (x2 - 6.0).powi(2)
}
