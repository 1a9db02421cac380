//! Crossover operators for the GA.
//!
//! Offspring `k` always recombines parents `k % num_parents` and
//! `(k + 1) % num_parents`: adjacent parents in sorted-fitness order,
//! with wrap-around. The pairing is fixed rather than random and is
//! part of the algorithm's observable convergence behavior, so it must
//! not be changed.
//!
//! # Operators
//!
//! - [`Crossover::SinglePoint`]: split at the gene midpoint, first half
//!   from parent 1, second half from parent 2
//! - [`Crossover::Uniform`]: fresh fair coin per gene

use super::types::Chromosome;
use rand::Rng;

/// Recombination operator for producing offspring.
///
/// Both operators assume all parents share one chromosome variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Crossover {
    /// One cut at the exact midpoint of the chromosome (integer floor
    /// for odd bit lengths). For the real variant this means x1 from
    /// parent 1 and x2 from parent 2.
    SinglePoint,

    /// Each gene independently copied from parent 1 with probability
    /// 0.5, else from parent 2.
    Uniform,
}

impl Crossover {
    /// Produces `count` offspring from the parent pool.
    ///
    /// # Panics
    ///
    /// Panics if `parents` is empty, or if the pool mixes chromosome
    /// variants (the runner's initialization makes both impossible).
    pub fn offspring<R: Rng>(
        &self,
        parents: &[Chromosome],
        count: usize,
        rng: &mut R,
    ) -> Vec<Chromosome> {
        assert!(!parents.is_empty(), "cannot recombine an empty parent pool");

        (0..count)
            .map(|k| {
                let p1 = &parents[k % parents.len()];
                let p2 = &parents[(k + 1) % parents.len()];
                match self {
                    Crossover::SinglePoint => single_point(p1, p2),
                    Crossover::Uniform => uniform(p1, p2, rng),
                }
            })
            .collect()
    }
}

/// Midpoint cut: genes before the cut from `p1`, the rest from `p2`.
fn single_point(p1: &Chromosome, p2: &Chromosome) -> Chromosome {
    match (p1, p2) {
        (Chromosome::Real { x1, .. }, Chromosome::Real { x2, .. }) => Chromosome::Real {
            x1: *x1,
            x2: *x2,
        },
        (Chromosome::Binary(a), Chromosome::Binary(b)) => {
            let cut = a.len() / 2;
            let mut bits = a[..cut].to_vec();
            bits.extend_from_slice(&b[cut..]);
            Chromosome::Binary(bits)
        }
        _ => panic!("parent pool mixes chromosome variants"),
    }
}

/// Per-gene fair coin: heads takes the gene from `p1`, tails from `p2`.
fn uniform<R: Rng>(p1: &Chromosome, p2: &Chromosome, rng: &mut R) -> Chromosome {
    match (p1, p2) {
        (
            Chromosome::Real { x1: a1, x2: a2 },
            Chromosome::Real { x1: b1, x2: b2 },
        ) => Chromosome::Real {
            x1: if rng.random_bool(0.5) { *a1 } else { *b1 },
            x2: if rng.random_bool(0.5) { *a2 } else { *b2 },
        },
        (Chromosome::Binary(a), Chromosome::Binary(b)) => {
            let bits = a
                .iter()
                .zip(b.iter())
                .map(|(&x, &y)| if rng.random_bool(0.5) { x } else { y })
                .collect();
            Chromosome::Binary(bits)
        }
        _ => panic!("parent pool mixes chromosome variants"),
    }
}
