//! Error taxonomy for the optimization engines.
//!
//! Two failure classes exist: rejected configuration ([`ConfigError`])
//! and malformed chromosome content during decoding ([`DecodeError`]).
//! Both surface synchronously through [`Error`]; the engines never
//! retry, print, or swallow. A run with a valid configuration always
//! completes and returns a result — stochastic search has no failure
//! mode beyond bad input.

use thiserror::Error;

/// Invalid or inconsistent engine configuration.
///
/// Returned by `GaConfig::validate` and `PsoConfig::validate`, and by
/// the runners before any work starts.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    /// Population too small to split into parents and offspring.
    #[error("population_size must be at least 2, got {0}")]
    PopulationTooSmall(usize),

    /// Lower bound does not lie strictly below the upper bound.
    #[error("invalid bounds: min {min} must be strictly less than max {max}")]
    InvalidBounds { min: f64, max: f64 },

    /// Mutation probability outside [0, 1].
    #[error("mutation_rate must be within [0, 1], got {0}")]
    MutationRateOutOfRange(f64),

    /// Binary encoding requires at least one bit per gene.
    #[error("gene_length must be at least 1")]
    ZeroGeneLength,

    /// A swarm needs at least one particle.
    #[error("num_particles must be at least 1")]
    EmptySwarm,

    /// Velocity clamp must be a positive finite magnitude.
    #[error("max_velocity must be positive and finite, got {0}")]
    InvalidMaxVelocity(f64),
}

/// Malformed chromosome content encountered during decoding.
///
/// The engine's own generators only produce well-formed chromosomes,
/// so these are defensive checks for externally supplied ones.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DecodeError {
    /// Binary chromosome cannot be split into two equal gene halves.
    #[error("binary chromosome length {0} is not even")]
    OddLength(usize),

    /// Bit count disagrees with the configured gene length, so a half
    /// could encode integers beyond the rescaling range.
    #[error("binary chromosome has {actual} bits, expected {expected} (2 * gene_length)")]
    LengthMismatch { expected: usize, actual: usize },

    /// Decoding with `gene_length == 0` is undefined.
    #[error("gene_length must be at least 1")]
    ZeroGeneLength,

    /// A bit slot held something other than 0 or 1.
    #[error("bit {index} holds non-binary value {value}")]
    NonBinaryBit { index: usize, value: u8 },
}

/// Umbrella error returned by the engine runners.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Decode(#[from] DecodeError),
}
