//! PSO configuration.

use crate::error::ConfigError;

/// Configuration for Particle Swarm Optimization.
///
/// # Defaults
///
/// ```
/// use bivar_metaheur::pso::PsoConfig;
///
/// let config = PsoConfig::default();
/// assert_eq!(config.num_particles, 300);
/// assert_eq!(config.num_iterations, 100);
/// assert!(config.max_velocity.is_none());
/// ```
///
/// # Builder Pattern
///
/// ```
/// use bivar_metaheur::pso::PsoConfig;
///
/// let config = PsoConfig::default()
///     .with_num_particles(100)
///     .with_coefficients(0.7, 1.5, 1.5)
///     .with_max_velocity(10.0);
/// ```
#[derive(Debug, Clone)]
pub struct PsoConfig {
    /// Number of particles in the swarm.
    pub num_particles: usize,

    /// Number of swarm iterations to run. Zero is allowed and returns
    /// the randomly drawn initial global best.
    pub num_iterations: usize,

    /// Inertia weight `w`: how much of the previous velocity carries
    /// over each step.
    pub inertia: f64,

    /// Cognitive coefficient `c1`: attraction toward the particle's
    /// personal best.
    pub cognitive: f64,

    /// Social coefficient `c2`: attraction toward the swarm's global
    /// best.
    pub social: f64,

    /// Component-wise velocity magnitude clamp.
    ///
    /// `None` disables clamping.
    pub max_velocity: Option<f64>,

    /// Search bounds per dimension; positions are clamped back inside
    /// after every move.
    pub bounds: (f64, f64),

    /// Random seed for reproducibility.
    ///
    /// `None` uses a random seed.
    pub seed: Option<u64>,
}

impl Default for PsoConfig {
    fn default() -> Self {
        Self {
            num_particles: 300,
            num_iterations: 100,
            inertia: 0.3,
            cognitive: 2.0,
            social: 5.0,
            max_velocity: None,
            bounds: (-500.0, 500.0),
            seed: None,
        }
    }
}

impl PsoConfig {
    /// Sets the swarm size.
    pub fn with_num_particles(mut self, n: usize) -> Self {
        self.num_particles = n;
        self
    }

    /// Sets the iteration count.
    pub fn with_num_iterations(mut self, n: usize) -> Self {
        self.num_iterations = n;
        self
    }

    /// Sets inertia, cognitive, and social coefficients (w, c1, c2).
    pub fn with_coefficients(mut self, inertia: f64, cognitive: f64, social: f64) -> Self {
        self.inertia = inertia;
        self.cognitive = cognitive;
        self.social = social;
        self
    }

    /// Enables the velocity clamp.
    pub fn with_max_velocity(mut self, v: f64) -> Self {
        self.max_velocity = Some(v);
        self
    }

    /// Disables the velocity clamp.
    pub fn without_max_velocity(mut self) -> Self {
        self.max_velocity = None;
        self
    }

    /// Sets the search bounds.
    pub fn with_bounds(mut self, lo: f64, hi: f64) -> Self {
        self.bounds = (lo, hi);
        self
    }

    /// Sets the random seed for reproducibility.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.num_particles == 0 {
            return Err(ConfigError::EmptySwarm);
        }
        if !(self.bounds.0 < self.bounds.1) {
            return Err(ConfigError::InvalidBounds {
                min: self.bounds.0,
                max: self.bounds.1,
            });
        }
        if let Some(v) = self.max_velocity {
            if !(v > 0.0 && v.is_finite()) {
                return Err(ConfigError::InvalidMaxVelocity(v));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = PsoConfig::default();
        assert_eq!(config.num_particles, 300);
        assert_eq!(config.num_iterations, 100);
        assert!((config.inertia - 0.3).abs() < 1e-12);
        assert!((config.cognitive - 2.0).abs() < 1e-12);
        assert!((config.social - 5.0).abs() < 1e-12);
        assert!(config.max_velocity.is_none());
        assert_eq!(config.bounds, (-500.0, 500.0));
        assert!(config.seed.is_none());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_builder_pattern() {
        let config = PsoConfig::default()
            .with_num_particles(50)
            .with_num_iterations(200)
            .with_coefficients(0.7, 1.5, 1.5)
            .with_max_velocity(10.0)
            .with_bounds(-10.0, 10.0)
            .with_seed(42);

        assert_eq!(config.num_particles, 50);
        assert_eq!(config.num_iterations, 200);
        assert!((config.inertia - 0.7).abs() < 1e-12);
        assert_eq!(config.max_velocity, Some(10.0));
        assert_eq!(config.bounds, (-10.0, 10.0));
        assert_eq!(config.seed, Some(42));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_empty_swarm() {
        let config = PsoConfig::default().with_num_particles(0);
        assert_eq!(config.validate().unwrap_err(), ConfigError::EmptySwarm);
    }

    #[test]
    fn test_validate_inverted_bounds() {
        let config = PsoConfig::default().with_bounds(1.0, 1.0);
        assert!(matches!(
            config.validate().unwrap_err(),
            ConfigError::InvalidBounds { .. }
        ));
    }

    #[test]
    fn test_validate_max_velocity() {
        let config = PsoConfig::default().with_max_velocity(0.0);
        assert_eq!(
            config.validate().unwrap_err(),
            ConfigError::InvalidMaxVelocity(0.0)
        );

        let config = PsoConfig::default().with_max_velocity(f64::NAN);
        assert!(matches!(
            config.validate().unwrap_err(),
            ConfigError::InvalidMaxVelocity(_)
        ));

        let config = PsoConfig::default()
            .with_max_velocity(1.0)
            .without_max_velocity();
        assert!(config.validate().is_ok());
    }
}
