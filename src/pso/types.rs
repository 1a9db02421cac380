//! Particle state.

use rand::Rng;

/// One candidate solution in the swarm.
///
/// Owned exclusively by the runner and mutated every iteration. The
/// final particle collection is handed back in the result so callers
/// can render the swarm's end state.
#[derive(Debug, Clone)]
pub struct Particle {
    /// Current position in the plane.
    pub position: [f64; 2],

    /// Current velocity.
    pub velocity: [f64; 2],

    /// Best position this particle has visited.
    pub best_position: [f64; 2],

    /// Objective value at `best_position`; starts at +∞ so the first
    /// evaluation always records.
    pub best_value: f64,
}

impl Particle {
    /// Draws a particle with position ~ Uniform(bounds) and velocity ~
    /// Uniform(−1, 1), independently per dimension.
    pub fn random<R: Rng>(bounds: (f64, f64), rng: &mut R) -> Self {
        let position = [
            rng.random_range(bounds.0..bounds.1),
            rng.random_range(bounds.0..bounds.1),
        ];
        Particle {
            position,
            velocity: [rng.random_range(-1.0..1.0), rng.random_range(-1.0..1.0)],
            best_position: position,
            best_value: f64::INFINITY,
        }
    }
}
