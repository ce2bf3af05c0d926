use idxsort::prelude::*;
use idxsort::sort_stable_by;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

#[test]
fn test_heavy_duplicates() {
    let mut rng = StdRng::seed_from_u64(42);

    for _iter in 0..10 {
        let len = rng.random_range(2000..5000);
        // Few distinct values so most comparisons are ties with the pivot.
        let input: Vec<u8> = (0..len).map(|_| rng.random_range(0..3)).collect();

        let mut expected = input.clone();
        expected.sort();

        let mut actual = input.clone();
        quick_sort(&mut actual, 0, len - 1);

        if actual != expected {
            // Find first mismatch
            for (i, (a, b)) in actual.iter().zip(expected.iter()).enumerate() {
                if a != b {
                    panic!("Mismatch at index {}: Got {:?}, Expected {:?}", i, a, b);
                }
            }
        }

        let mut tagged: Vec<(u8, usize)> = input.into_iter().zip(0..).collect();
        let mut expected = tagged.clone();
        expected.sort_by_key(|&(key, _)| key);

        sort_stable_by(&mut tagged, |a, b| a.0.cmp(&b.0));
        assert_eq!(tagged, expected);
    }
}

#[test]
fn test_organ_pipe_and_sawtooth() {
    let mut rng = StdRng::seed_from_u64(7);

    for _iter in 0..20 {
        let len: usize = rng.random_range(100..1000);
        let period = rng.random_range(2..50);

        let organ: Vec<usize> = (0..len).map(|i| i.min(len - 1 - i)).collect();
        let saw: Vec<usize> = (0..len).map(|i| i % period).collect();

        for input in [organ, saw] {
            let mut expected = input.clone();
            expected.sort();

            let mut actual = input.clone();
            quick_sort(&mut actual, 0, len - 1);
            assert_eq!(actual, expected);

            let mut actual = input;
            merge_sort(&mut actual, 0, len);
            assert_eq!(actual, expected);
        }
    }
}
