//! GA configuration.
//!
//! [`GaConfig`] holds all parameters that control the generational loop.

use super::operators::Crossover;
use super::types::Encoding;
use crate::error::ConfigError;

/// Configuration for the Genetic Algorithm.
///
/// Controls population size, search bounds, encoding, crossover
/// operator, mutation probability, and termination.
///
/// # Defaults
///
/// ```
/// use bivar_metaheur::ga::GaConfig;
///
/// let config = GaConfig::default();
/// assert_eq!(config.population_size, 50);
/// assert_eq!(config.num_generations, 200);
/// ```
///
/// # Builder Pattern
///
/// ```
/// use bivar_metaheur::ga::{Crossover, Encoding, GaConfig};
///
/// let config = GaConfig::default()
///     .with_encoding(Encoding::Binary)
///     .with_crossover(Crossover::Uniform)
///     .with_bounds(0.0, 10.0)
///     .with_mutation_rate(0.1);
/// ```
#[derive(Debug, Clone)]
pub struct GaConfig {
    /// Number of chromosomes in the population.
    ///
    /// The best `population_size / 2` (integer floor) survive each
    /// generation as parents; the remainder is refilled by crossover.
    /// Odd sizes therefore produce one more offspring than parents.
    pub population_size: usize,

    /// Lower search bound for each gene.
    pub min_val: f64,

    /// Upper search bound for each gene. Must exceed `min_val`.
    pub max_val: f64,

    /// Number of generations to run.
    ///
    /// Zero is allowed and returns the best of the initial random
    /// population.
    pub num_generations: usize,

    /// Probability of mutating each offspring (0.0–1.0).
    ///
    /// Mutation is all-or-nothing per chromosome: one event perturbs
    /// both real genes, or flips exactly one bit.
    pub mutation_rate: f64,

    /// Chromosome representation.
    pub encoding: Encoding,

    /// Recombination operator.
    pub crossover: Crossover,

    /// Bits per gene for the binary encoding (ignored by `Real`).
    pub gene_length: usize,

    /// Random seed for reproducibility.
    ///
    /// `None` uses a random seed.
    pub seed: Option<u64>,
}

impl Default for GaConfig {
    fn default() -> Self {
        Self {
            population_size: 50,
            min_val: -50.0,
            max_val: 50.0,
            num_generations: 200,
            mutation_rate: 0.05,
            encoding: Encoding::Real,
            crossover: Crossover::SinglePoint,
            gene_length: 10,
            seed: None,
        }
    }
}

impl GaConfig {
    /// Sets the population size.
    pub fn with_population_size(mut self, n: usize) -> Self {
        self.population_size = n;
        self
    }

    /// Sets both search bounds.
    pub fn with_bounds(mut self, min_val: f64, max_val: f64) -> Self {
        self.min_val = min_val;
        self.max_val = max_val;
        self
    }

    /// Sets the number of generations.
    pub fn with_num_generations(mut self, n: usize) -> Self {
        self.num_generations = n;
        self
    }

    /// Sets the mutation rate, clamped into [0, 1].
    pub fn with_mutation_rate(mut self, rate: f64) -> Self {
        self.mutation_rate = rate.clamp(0.0, 1.0);
        self
    }

    /// Sets the chromosome encoding.
    pub fn with_encoding(mut self, encoding: Encoding) -> Self {
        self.encoding = encoding;
        self
    }

    /// Sets the crossover operator.
    pub fn with_crossover(mut self, crossover: Crossover) -> Self {
        self.crossover = crossover;
        self
    }

    /// Sets the bits-per-gene for the binary encoding.
    pub fn with_gene_length(mut self, bits: usize) -> Self {
        self.gene_length = bits;
        self
    }

    /// Sets the random seed for reproducibility.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Number of parents retained each generation.
    pub fn num_parents(&self) -> usize {
        self.population_size / 2
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.population_size < 2 {
            return Err(ConfigError::PopulationTooSmall(self.population_size));
        }
        if !(self.min_val < self.max_val) {
            return Err(ConfigError::InvalidBounds {
                min: self.min_val,
                max: self.max_val,
            });
        }
        if !(0.0..=1.0).contains(&self.mutation_rate) {
            return Err(ConfigError::MutationRateOutOfRange(self.mutation_rate));
        }
        if self.encoding == Encoding::Binary && self.gene_length == 0 {
            return Err(ConfigError::ZeroGeneLength);
        }
        Ok(())
    }
}
