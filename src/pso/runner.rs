//! PSO iteration loop execution.

use super::config::PsoConfig;
use super::types::Particle;
use crate::error::Error;
use crate::objective::Objective;
use crate::random::create_rng;
use rand::Rng;

/// Result of a PSO optimization run.
#[derive(Debug, Clone)]
pub struct PsoResult {
    /// Best position found by any particle across the run.
    pub best_position: [f64; 2],

    /// Objective value at `best_position`.
    pub best_value: f64,

    /// The swarm's final state, exposed for external visualization.
    pub particles: Vec<Particle>,

    /// Global best value at the end of each iteration: `num_iterations`
    /// entries, non-increasing.
    pub value_history: Vec<f64>,
}

/// Executes the PSO loop.
///
/// # Usage
///
/// ```
/// use bivar_metaheur::pso::{PsoConfig, PsoRunner};
/// use bivar_metaheur::objective::shifted_bowl;
///
/// let config = PsoConfig::default().with_seed(42);
/// let result = PsoRunner::run(&shifted_bowl, &config).unwrap();
/// assert_eq!(result.particles.len(), 300);
/// ```
pub struct PsoRunner;

impl PsoRunner {
    /// Runs the swarm to completion.
    ///
    /// Always executes the full iteration budget; the only failure mode
    /// is an invalid configuration, rejected before any work starts.
    pub fn run<O: Objective>(objective: &O, config: &PsoConfig) -> Result<PsoResult, Error> {
        config.validate()?;

        let mut rng = match config.seed {
            Some(seed) => create_rng(seed),
            None => create_rng(rand::random()),
        };

        let (lo, hi) = config.bounds;
        let mut particles: Vec<Particle> = (0..config.num_particles)
            .map(|_| Particle::random(config.bounds, &mut rng))
            .collect();

        let mut global_best_position = [rng.random_range(lo..hi), rng.random_range(lo..hi)];
        let mut global_best_value = f64::INFINITY;
        let mut value_history = Vec::with_capacity(config.num_iterations);

        for _ in 0..config.num_iterations {
            // Phase A: evaluate every particle and settle all bests
            // before any movement. Strict `<` means equal values never
            // displace an existing best.
            for particle in &mut particles {
                let value = objective.evaluate(particle.position[0], particle.position[1]);

                if value < particle.best_value {
                    particle.best_position = particle.position;
                    particle.best_value = value;
                }
                if value < global_best_value {
                    global_best_position = particle.position;
                    global_best_value = value;
                }
            }

            // Phase B: move every particle against the settled bests.
            for particle in &mut particles {
                // One scalar draw per attraction term, shared by both
                // dimensions of this particle's update.
                let r1: f64 = rng.random_range(0.0..1.0);
                let r2: f64 = rng.random_range(0.0..1.0);

                for d in 0..2 {
                    let inertia = config.inertia * particle.velocity[d];
                    let cognitive = config.cognitive
                        * r1
                        * (particle.best_position[d] - particle.position[d]);
                    let social =
                        config.social * r2 * (global_best_position[d] - particle.position[d]);

                    let mut v = inertia + cognitive + social;
                    if let Some(max_velocity) = config.max_velocity {
                        if v.abs() > max_velocity {
                            v = max_velocity.copysign(v);
                        }
                    }

                    particle.velocity[d] = v;
                    particle.position[d] = (particle.position[d] + v).clamp(lo, hi);
                }
            }

            value_history.push(global_best_value);
        }

        Ok(PsoResult {
            best_position: global_best_position,
            best_value: global_best_value,
            particles,
            value_history,
        })
    }
}
