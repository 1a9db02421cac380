//! Particle Swarm Optimization engine.
//!
//! A fixed-iteration swarm simulation over the continuous plane. Each
//! particle carries a position, a velocity, and the best position it
//! has personally visited; the swarm shares one global best. Every
//! iteration runs two phases in strict order: first every particle is
//! evaluated and the bests are recorded, then every particle's velocity
//! and position are updated against those settled bests.
//!
//! # Key Types
//!
//! - [`PsoConfig`]: Swarm parameters (size, inertia, attraction, bounds)
//! - [`Particle`]: Per-particle state
//! - [`PsoRunner`] / [`PsoResult`]: Loop execution and outcome
//!
//! # References
//!
//! - Kennedy & Eberhart (1995), "Particle Swarm Optimization"
//! - Shi & Eberhart (1998), "A Modified Particle Swarm Optimizer"

mod config;
mod runner;
mod types;

pub use config::PsoConfig;
pub use runner::{PsoResult, PsoRunner};
pub use types::Particle;
