use rand::Rng;

/// Measures the parity bias of a random source.
///
/// Draws `samples` values uniformly from `{0, 1}` and counts how many
/// land on the even outcome (zero). Returns the observed percentage of
/// even draws, in `[0, 100]`; an unbiased source trends toward 50 as
/// `samples` grows.
///
/// This is a coarse sanity check, not an entropy test. Callers treat the
/// result as a quality signal only and never adjust behavior based on it.
/// Note that the draws are consumed from the shared generator, so for a
/// seeded stream the check changes the realization of whatever sampling
/// follows it.
///
/// # Examples
///
/// ```rust
/// use rand::SeedableRng;
/// use rand_chacha::ChaCha20Rng;
/// use mcpi::randomness::even_percentage;
///
/// let mut rng = ChaCha20Rng::seed_from_u64(7);
/// let pct = even_percentage(&mut rng, 10_000);
/// assert!((0.0..=100.0).contains(&pct));
/// ```
pub fn even_percentage<R: Rng>(rng: &mut R, samples: u64) -> f64 {
    let mut even = 0u64;
    for _ in 0..samples {
        if rng.gen_range(0..2u8) % 2 == 0 {
            even += 1;
        }
    }
    even as f64 * 100.0 / samples as f64
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha20Rng;

    #[test]
    fn test_percentage_stays_in_range() {
        for seed in 0..20 {
            let mut rng = ChaCha20Rng::seed_from_u64(seed);
            let pct = even_percentage(&mut rng, 100);
            assert!((0.0..=100.0).contains(&pct), "seed {}: {}", seed, pct);
        }
    }

    #[test]
    fn test_single_sample_is_all_or_nothing() {
        let mut rng = ChaCha20Rng::seed_from_u64(1);
        let pct = even_percentage(&mut rng, 1);
        assert!(pct == 0.0 || pct == 100.0);
    }

    #[test]
    fn test_large_run_lands_near_fifty() {
        // Binomial std at one million draws is 0.05 percentage points, so
        // a one-point band is a very loose 20-sigma check.
        let mut rng = ChaCha20Rng::seed_from_u64(42);
        let pct = even_percentage(&mut rng, 1_000_000);
        assert!((pct - 50.0).abs() < 1.0, "got {}", pct);
    }

    #[test]
    fn test_equal_seeds_give_equal_results() {
        let mut a = ChaCha20Rng::seed_from_u64(9);
        let mut b = ChaCha20Rng::seed_from_u64(9);
        assert_eq!(
            even_percentage(&mut a, 10_000),
            even_percentage(&mut b, 10_000)
        );
    }
}
