//! Chromosome representation and the encoding layer.
//!
//! A [`Chromosome`] is either a real pair (the phenotype itself) or a
//! fixed-length bit string of `2 * gene_length` bits. The binary
//! representation is primary: the continuous phenotype is derived from
//! it only for fitness evaluation and final reporting, never written
//! back. Variation happens directly on the representation (bit flips,
//! gene perturbations).

use crate::error::DecodeError;
use rand::Rng;

/// Chromosome representation selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Encoding {
    /// Genes are the two phenotype coordinates directly.
    Real,
    /// Genes are `2 * gene_length` bits, one half per coordinate.
    Binary,
}

/// One candidate solution.
///
/// All chromosomes in a population share one variant; operators panic
/// if asked to recombine mismatched variants (the runner never does).
#[derive(Debug, Clone, PartialEq)]
pub enum Chromosome {
    /// Real-valued pair: the genes are the phenotype.
    Real { x1: f64, x2: f64 },
    /// Bit string of even length, stored as 0/1 bytes, MSB first
    /// within each half.
    Binary(Vec<u8>),
}

impl Chromosome {
    /// Draws a random real chromosome with each gene ~ Uniform(min, max).
    pub fn random_real<R: Rng>(min_val: f64, max_val: f64, rng: &mut R) -> Self {
        Chromosome::Real {
            x1: rng.random_range(min_val..max_val),
            x2: rng.random_range(min_val..max_val),
        }
    }

    /// Draws a random binary chromosome of `2 * gene_length` fair-coin bits.
    pub fn random_binary<R: Rng>(gene_length: usize, rng: &mut R) -> Self {
        let bits = (0..2 * gene_length)
            .map(|_| u8::from(rng.random_bool(0.5)))
            .collect();
        Chromosome::Binary(bits)
    }

    /// Decodes this chromosome into its phenotype `(x1, x2)`.
    ///
    /// The real variant decodes to itself. The binary variant splits at
    /// the midpoint, reads each half as an MSB-first unsigned integer
    /// `code`, and maps it linearly:
    ///
    /// ```text
    /// value = min_val + (code / (2^gene_length − 1)) · (max_val − min_val)
    /// ```
    ///
    /// so the all-zero half decodes to `min_val` and the all-one half
    /// to `max_val`. Decoding is deterministic and total over all
    /// well-formed bit strings.
    ///
    /// # Errors
    ///
    /// Binary content is validated defensively for externally supplied
    /// chromosomes: odd bit length, zero `gene_length`, a bit count
    /// other than `2 * gene_length`, or any byte outside {0, 1} is
    /// rejected. The bounds guarantee above is therefore total: no
    /// accepted chromosome can decode outside `[min_val, max_val]`.
    pub fn decode(
        &self,
        min_val: f64,
        max_val: f64,
        gene_length: usize,
    ) -> Result<(f64, f64), DecodeError> {
        match self {
            Chromosome::Real { x1, x2 } => Ok((*x1, *x2)),
            Chromosome::Binary(bits) => {
                if gene_length == 0 {
                    return Err(DecodeError::ZeroGeneLength);
                }
                if bits.len() % 2 != 0 {
                    return Err(DecodeError::OddLength(bits.len()));
                }
                if bits.len() != 2 * gene_length {
                    return Err(DecodeError::LengthMismatch {
                        expected: 2 * gene_length,
                        actual: bits.len(),
                    });
                }
                let midpoint = bits.len() / 2;
                let x1 = decode_half(&bits[..midpoint], 0, min_val, max_val, gene_length)?;
                let x2 = decode_half(&bits[midpoint..], midpoint, min_val, max_val, gene_length)?;
                Ok((x1, x2))
            }
        }
    }

    /// Applies one mutation event.
    ///
    /// Real variant: adds an independent Uniform(−1, 1) perturbation to
    /// each of the two genes. The result is deliberately not clamped
    /// back into the search bounds; out-of-range phenotypes compete on
    /// fitness like any other. Binary variant: flips exactly one
    /// uniformly-chosen bit.
    ///
    /// The caller decides *whether* to mutate (the per-offspring
    /// `mutation_rate` roll lives in the runner); this method always
    /// applies the event.
    pub fn mutate<R: Rng>(&mut self, rng: &mut R) {
        match self {
            Chromosome::Real { x1, x2 } => {
                *x1 += rng.random_range(-1.0..1.0);
                *x2 += rng.random_range(-1.0..1.0);
            }
            Chromosome::Binary(bits) => {
                let idx = rng.random_range(0..bits.len());
                bits[idx] ^= 1;
            }
        }
    }
}

/// Decode one half of a binary chromosome into a single coordinate.
///
/// `offset` is the half's starting index in the full bit string, used
/// only to report accurate error positions.
fn decode_half(
    bits: &[u8],
    offset: usize,
    min_val: f64,
    max_val: f64,
    gene_length: usize,
) -> Result<f64, DecodeError> {
    let mut code = 0.0f64;
    for (i, &bit) in bits.iter().enumerate() {
        if bit > 1 {
            return Err(DecodeError::NonBinaryBit {
                index: offset + i,
                value: bit,
            });
        }
        code = code * 2.0 + f64::from(bit);
    }
    let max_code = 2.0f64.powi(gene_length as i32) - 1.0;
    Ok(min_val + (code / max_code) * (max_val - min_val))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::random::create_rng;
    use proptest::prelude::*;

    #[test]
    fn test_real_decode_is_identity() {
        let c = Chromosome::Real { x1: 1.5, x2: -2.5 };
        assert_eq!(c.decode(-50.0, 50.0, 10).unwrap(), (1.5, -2.5));
    }

    #[test]
    fn test_all_zero_decodes_to_min() {
        let c = Chromosome::Binary(vec![0; 20]);
        assert_eq!(c.decode(-3.0, 7.0, 10).unwrap(), (-3.0, -3.0));
    }

    #[test]
    fn test_all_one_decodes_to_max() {
        let c = Chromosome::Binary(vec![1; 20]);
        assert_eq!(c.decode(0.0, 10.0, 10).unwrap(), (10.0, 10.0));
    }

    #[test]
    fn test_zero_half_one_half() {
        // "0000000000 1111111111" over [0, 10] must be exactly (0, 10).
        let mut bits = vec![0u8; 10];
        bits.extend(vec![1u8; 10]);
        let c = Chromosome::Binary(bits);
        assert_eq!(c.decode(0.0, 10.0, 10).unwrap(), (0.0, 10.0));
    }

    #[test]
    fn test_msb_first_parse() {
        // "10 01" with gene_length 2: codes 2 and 1 out of 3.
        let c = Chromosome::Binary(vec![1, 0, 0, 1]);
        let (x1, x2) = c.decode(0.0, 3.0, 2).unwrap();
        assert!((x1 - 2.0).abs() < 1e-12);
        assert!((x2 - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_decode_rejects_odd_length() {
        let c = Chromosome::Binary(vec![0, 1, 0]);
        assert_eq!(
            c.decode(0.0, 1.0, 2).unwrap_err(),
            DecodeError::OddLength(3)
        );
    }

    #[test]
    fn test_decode_rejects_length_mismatch() {
        // Even length, but fewer bits than gene_length declares: the
        // halves could never reach max_val.
        let c = Chromosome::Binary(vec![1, 1, 1, 1]);
        assert_eq!(
            c.decode(0.0, 1.0, 3).unwrap_err(),
            DecodeError::LengthMismatch {
                expected: 6,
                actual: 4
            }
        );

        // More bits than declared: codes would exceed 2^gene_length - 1
        // and decode past max_val.
        let c = Chromosome::Binary(vec![1; 8]);
        assert_eq!(
            c.decode(0.0, 1.0, 2).unwrap_err(),
            DecodeError::LengthMismatch {
                expected: 4,
                actual: 8
            }
        );
    }

    #[test]
    fn test_decode_rejects_zero_gene_length() {
        let c = Chromosome::Binary(vec![0, 1]);
        assert_eq!(
            c.decode(0.0, 1.0, 0).unwrap_err(),
            DecodeError::ZeroGeneLength
        );
    }

    #[test]
    fn test_decode_rejects_non_binary_bit() {
        let c = Chromosome::Binary(vec![0, 1, 2, 1]);
        assert_eq!(
            c.decode(0.0, 1.0, 2).unwrap_err(),
            DecodeError::NonBinaryBit { index: 2, value: 2 }
        );
    }

    #[test]
    fn test_random_binary_shape() {
        let mut rng = create_rng(42);
        let c = Chromosome::random_binary(10, &mut rng);
        let Chromosome::Binary(bits) = &c else {
            panic!("expected binary chromosome");
        };
        assert_eq!(bits.len(), 20);
        assert!(bits.iter().all(|&b| b <= 1));
    }

    #[test]
    fn test_random_real_within_bounds() {
        let mut rng = create_rng(42);
        for _ in 0..100 {
            let Chromosome::Real { x1, x2 } = Chromosome::random_real(-5.0, 5.0, &mut rng) else {
                panic!("expected real chromosome");
            };
            assert!((-5.0..5.0).contains(&x1));
            assert!((-5.0..5.0).contains(&x2));
        }
    }

    #[test]
    fn test_binary_mutation_flips_exactly_one_bit() {
        let mut rng = create_rng(7);
        for _ in 0..50 {
            let original = Chromosome::random_binary(10, &mut rng);
            let mut mutated = original.clone();
            mutated.mutate(&mut rng);

            let (Chromosome::Binary(a), Chromosome::Binary(b)) = (&original, &mutated) else {
                panic!("expected binary chromosomes");
            };
            let diffs = a.iter().zip(b.iter()).filter(|(x, y)| x != y).count();
            assert_eq!(diffs, 1);
        }
    }

    #[test]
    fn test_real_mutation_perturbs_both_genes() {
        let mut rng = create_rng(7);
        for _ in 0..50 {
            let mut c = Chromosome::Real { x1: 5.0, x2: 6.0 };
            c.mutate(&mut rng);
            let Chromosome::Real { x1, x2 } = c else {
                panic!("expected real chromosome");
            };
            // Each gene moves by an independent Uniform(-1, 1) step.
            assert!((x1 - 5.0).abs() <= 1.0);
            assert!((x2 - 6.0).abs() <= 1.0);
            assert_ne!(x1, 5.0);
            assert_ne!(x2, 6.0);
        }
    }

    proptest! {
        #[test]
        fn prop_decode_stays_within_bounds(
            bits in proptest::collection::vec(0u8..=1, 2..=32)
                .prop_filter("even length", |b| b.len() % 2 == 0),
            min in -1000.0f64..0.0,
            span in 1e-6f64..2000.0,
        ) {
            let gene_length = bits.len() / 2;
            let max = min + span;
            let c = Chromosome::Binary(bits);
            let (x1, x2) = c.decode(min, max, gene_length).unwrap();
            let tol = 1e-9 * (1.0 + span);
            prop_assert!(x1 >= min - tol && x1 <= max + tol);
            prop_assert!(x2 >= min - tol && x2 <= max + tol);
        }

        #[test]
        fn prop_decode_is_deterministic(
            bits in proptest::collection::vec(0u8..=1, 2..=32)
                .prop_filter("even length", |b| b.len() % 2 == 0),
        ) {
            let gene_length = bits.len() / 2;
            let c = Chromosome::Binary(bits);
            let a = c.decode(0.0, 10.0, gene_length).unwrap();
            let b = c.decode(0.0, 10.0, gene_length).unwrap();
            prop_assert_eq!(a, b);
        }
    }
}
