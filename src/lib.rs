//! Population-based minimizers for two-variable objectives.
//!
//! Provides two independent stochastic, gradient-free engines that
//! minimize a pluggable objective `f(x1, x2) -> f64`:
//!
//! - **Genetic Algorithm (GA)**: Generational evolution over either
//!   real-valued chromosomes or fixed-length binary chromosomes, with
//!   truncation selection, elitist replacement, and two crossover
//!   operators (single-point, uniform).
//! - **Particle Swarm Optimization (PSO)**: A swarm of particles moving
//!   through the continuous plane under inertia, cognitive, and social
//!   forces, tracking personal and global bests.
//!
//! The engines share only the [`objective::Objective`] seam and the
//! builder-style configuration pattern; they never interact. Both are
//! single-threaded, run-to-completion computations: a run executes its
//! full iteration budget and returns the best solution found.
//!
//! # Example
//!
//! ```
//! use bivar_metaheur::ga::{GaConfig, GaRunner};
//! use bivar_metaheur::objective::shifted_bowl;
//!
//! let config = GaConfig::default().with_seed(42);
//! let result = GaRunner::run(&shifted_bowl, &config).unwrap();
//! assert!(result.best_fitness.is_finite());
//! ```

pub mod error;
pub mod ga;
pub mod objective;
pub mod pso;
pub mod random;
