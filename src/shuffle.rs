use rand::Rng;

/// Returns a shuffled copy of `items` (Fisher–Yates). The input is left as is.
pub fn shuffle<T: Clone, R: Rng + ?Sized>(items: &[T], rng: &mut R) -> Vec<T> {
    let mut out = items.to_vec();
    for i in (1..out.len()).rev() {
        let j = rng.gen_range(0..=i);
        out.swap(i, j);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn result_is_a_permutation() {
        let mut rng = StdRng::seed_from_u64(7);
        let input: Vec<u8> = (1..=9).collect();
        for _ in 0..50 {
            let mut out = shuffle(&input, &mut rng);
            assert_eq!(out.len(), input.len());
            out.sort_unstable();
            assert_eq!(out, input);
        }
    }

    #[test]
    fn input_is_untouched() {
        let mut rng = StdRng::seed_from_u64(1);
        let input = vec!['А', 'Б', 'В'];
        let _ = shuffle(&input, &mut rng);
        assert_eq!(input, vec!['А', 'Б', 'В']);
    }

    #[test]
    fn empty_and_single() {
        let mut rng = StdRng::seed_from_u64(0);
        assert!(shuffle::<u8, _>(&[], &mut rng).is_empty());
        assert_eq!(shuffle(&[5], &mut rng), vec![5]);
    }

    #[test]
    fn repeated_calls_differ() {
        let mut rng = StdRng::seed_from_u64(42);
        let input: Vec<u8> = (1..=9).collect();
        let first = shuffle(&input, &mut rng);
        let differs = (0..20).any(|_| shuffle(&input, &mut rng) != first);
        assert!(differs);
    }
}
