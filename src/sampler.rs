use crate::CrawlerError;
use rand::{seq::IndexedRandom, Rng};

/// Picks `required` distinct candidates uniformly at random, without replacement.
pub fn sample<R>(rng: &mut R, candidates: &[String], required: usize) -> Result<Vec<String>, CrawlerError>
where
    R: Rng + ?Sized,
{
    if candidates.len() < required {
        return Err(CrawlerError::InsufficientData {
            available: candidates.len(),
            required,
        });
    }
    Ok(candidates.choose_multiple(rng, required).cloned().collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{rngs::StdRng, SeedableRng};
    use std::collections::HashSet;

    fn urls(n: usize) -> Vec<String> {
        (0..n).map(|i| format!("https://www.coursera.org/learn/c{}", i)).collect()
    }

    #[test]
    fn distinct_members_of_candidates() {
        let candidates = urls(50);
        let mut rng = StdRng::seed_from_u64(7);
        for k in [0, 1, 20, 49, 50] {
            let picked = sample(&mut rng, &candidates, k).unwrap();
            assert_eq!(picked.len(), k);
            let unique: HashSet<_> = picked.iter().collect();
            assert_eq!(unique.len(), k);
            assert!(picked.iter().all(|u| candidates.contains(u)));
        }
    }

    #[test]
    fn whole_population_when_equal() {
        let candidates = urls(3);
        let mut rng = StdRng::seed_from_u64(1);
        let mut picked = sample(&mut rng, &candidates, 3).unwrap();
        picked.sort();
        assert_eq!(picked, candidates);
    }

    #[test]
    fn too_few_candidates() {
        let mut rng = StdRng::seed_from_u64(1);
        let err = sample(&mut rng, &urls(2), 3).unwrap_err();
        assert!(matches!(
            err,
            CrawlerError::InsufficientData {
                available: 2,
                required: 3
            }
        ));
    }

    #[test]
    fn same_seed_same_sample() {
        let candidates = urls(100);
        let a = sample(&mut StdRng::seed_from_u64(42), &candidates, 20).unwrap();
        let b = sample(&mut StdRng::seed_from_u64(42), &candidates, 20).unwrap();
        assert_eq!(a, b);
    }
}
