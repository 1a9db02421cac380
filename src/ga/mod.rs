//! Genetic Algorithm engine.
//!
//! A generational GA over two-variable chromosomes. Candidates are
//! either real pairs or fixed-length bit strings ([`Chromosome`]); the
//! binary variant decodes to the continuous phenotype only for fitness
//! evaluation and final reporting.
//!
//! Each generation: evaluate all chromosomes, keep the best half as
//! parents (truncation selection), fill the remainder with crossover
//! offspring, mutate offspring with configured probability, and carry
//! the parents over unchanged (elitism). The best fitness therefore
//! never regresses between generations.
//!
//! # Key Types
//!
//! - [`GaConfig`]: Algorithm parameters (population, bounds, rates)
//! - [`Chromosome`] / [`Encoding`]: Candidate representation
//! - [`Crossover`]: Recombination operator selection
//! - [`GaRunner`] / [`GaResult`]: Loop execution and outcome
//!
//! # References
//!
//! - Holland (1975), *Adaptation in Natural and Artificial Systems*
//! - Goldberg (1989), *Genetic Algorithms in Search, Optimization, and Machine Learning*

mod config;
mod operators;
mod runner;
mod types;

pub use config::GaConfig;
pub use operators::Crossover;
pub use runner::{GaResult, GaRunner};
pub use types::{Chromosome, Encoding};
