//! GA generational loop execution.
//!
//! [`GaRunner`] orchestrates the complete cycle:
//! initialization → evaluation → selection → crossover → mutation → replacement.

use super::config::GaConfig;
use super::types::{Chromosome, Encoding};
use crate::error::Error;
use crate::objective::Objective;
use crate::random::create_rng;
use rand::Rng;

/// Result of a GA optimization run.
#[derive(Debug, Clone)]
pub struct GaResult {
    /// Decoded phenotype of the best chromosome in the final population.
    pub best: (f64, f64),

    /// Objective value at `best`.
    pub best_fitness: f64,

    /// Number of generations executed.
    pub generations: usize,

    /// Best fitness per generation plus the final evaluation:
    /// `num_generations + 1` entries, non-increasing under elitism.
    pub fitness_history: Vec<f64>,
}

/// Executes the GA generational loop.
///
/// # Usage
///
/// ```
/// use bivar_metaheur::ga::{GaConfig, GaRunner};
/// use bivar_metaheur::objective::shifted_bowl;
///
/// let config = GaConfig::default().with_seed(42);
/// let result = GaRunner::run(&shifted_bowl, &config).unwrap();
/// assert_eq!(result.generations, 200);
/// ```
pub struct GaRunner;

impl GaRunner {
    /// Runs the GA to completion.
    ///
    /// Always executes the full generation budget; the only failure
    /// mode is an invalid configuration, rejected before any work
    /// starts.
    pub fn run<O: Objective>(objective: &O, config: &GaConfig) -> Result<GaResult, Error> {
        config.validate()?;

        let mut rng = match config.seed {
            Some(seed) => create_rng(seed),
            None => create_rng(rand::random()),
        };

        let mut population = initial_population(config, &mut rng);
        let num_parents = config.num_parents();
        let offspring_count = config.population_size - num_parents;
        let mut fitness_history = Vec::with_capacity(config.num_generations + 1);

        for _ in 0..config.num_generations {
            // Fitness is recomputed fresh each generation; mutation
            // invalidates any previously known values.
            let fitness = evaluate(objective, &population, config)?;
            fitness_history.push(min_fitness(&fitness));

            let parents = select_parents(&population, &fitness, num_parents);
            let mut offspring = config.crossover.offspring(&parents, offspring_count, &mut rng);
            mutate_offspring(&mut offspring, config.mutation_rate, &mut rng);

            // Parents carry over unchanged (elitism), offspring fill
            // the rest, preserving parents-first ordering.
            population = parents;
            population.extend(offspring);
            debug_assert_eq!(population.len(), config.population_size);
        }

        let fitness = evaluate(objective, &population, config)?;
        let best_idx = argmin(&fitness);
        let best_fitness = fitness[best_idx];
        fitness_history.push(best_fitness);

        let best =
            population[best_idx].decode(config.min_val, config.max_val, config.gene_length)?;

        Ok(GaResult {
            best,
            best_fitness,
            generations: config.num_generations,
            fitness_history,
        })
    }
}

/// Draws the initial population for the configured encoding.
fn initial_population<R: Rng>(config: &GaConfig, rng: &mut R) -> Vec<Chromosome> {
    (0..config.population_size)
        .map(|_| match config.encoding {
            Encoding::Real => Chromosome::random_real(config.min_val, config.max_val, rng),
            Encoding::Binary => Chromosome::random_binary(config.gene_length, rng),
        })
        .collect()
}

/// Evaluates the objective at every chromosome's decoded phenotype.
fn evaluate<O: Objective>(
    objective: &O,
    population: &[Chromosome],
    config: &GaConfig,
) -> Result<Vec<f64>, Error> {
    population
        .iter()
        .map(|c| {
            let (x1, x2) = c.decode(config.min_val, config.max_val, config.gene_length)?;
            Ok(objective.evaluate(x1, x2))
        })
        .collect()
}

/// Rolls the per-offspring mutation gate: each chromosome mutates
/// independently with probability `mutation_rate`, all-or-nothing.
fn mutate_offspring<R: Rng>(offspring: &mut [Chromosome], mutation_rate: f64, rng: &mut R) {
    for child in offspring.iter_mut() {
        if rng.random_range(0.0..1.0) < mutation_rate {
            child.mutate(&mut *rng);
        }
    }
}

/// Truncation selection: the `num_parents` fittest chromosomes, in
/// ascending fitness order. The sort is stable, so equal fitness keeps
/// the original population order.
fn select_parents(
    population: &[Chromosome],
    fitness: &[f64],
    num_parents: usize,
) -> Vec<Chromosome> {
    let mut order: Vec<usize> = (0..population.len()).collect();
    order.sort_by(|&a, &b| {
        fitness[a]
            .partial_cmp(&fitness[b])
            .unwrap_or(std::cmp::Ordering::Equal)
    });
    order[..num_parents]
        .iter()
        .map(|&i| population[i].clone())
        .collect()
}

fn min_fitness(fitness: &[f64]) -> f64 {
    fitness.iter().copied().fold(f64::INFINITY, f64::min)
}

/// Index of the lowest fitness value.
fn argmin(fitness: &[f64]) -> usize {
    fitness
        .iter()
        .enumerate()
        .min_by(|(_, a), (_, b)| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal))
        .map(|(i, _)| i)
        .expect("population must not be empty")
}
