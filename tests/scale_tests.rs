use idxsort::prelude::*;
use rand::Rng;
use std::time::Instant;

#[test]
fn test_quick_sort_1m() {
    let count = 1_000_000;
    println!("Generating {} random elements...", count);

    let mut rng = rand::rng();
    let mut input: Vec<u64> = (0..count).map(|_| rng.random()).collect();

    println!("Sorting {} elements...", count);
    let start = Instant::now();
    quick_sort(&mut input, 0, count - 1);
    let duration = start.elapsed();
    println!("Quicksorted 1M elements in {:?}", duration);

    assert!(input.windows(2).all(|w| w[0] <= w[1]));
}

#[test]
fn test_merge_sort_100k() {
    // O(N log² N) swaps, so stay an order of magnitude below the quicksort test.
    let count = 100_000;

    let mut rng = rand::rng();
    let input: Vec<u32> = (0..count).map(|_| rng.random_range(0..1_000)).collect();

    let mut expected = input.clone();
    expected.sort();

    let mut actual = input;
    let start = Instant::now();
    merge_sort(&mut actual, 0, count);
    println!("Merge sorted 100k elements in {:?}", start.elapsed());

    assert_eq!(actual, expected);
}

#[test]
#[ignore]
fn test_merge_sort_10m() {
    // WARNING: This test takes minutes in debug builds.
    let count = 10_000_000;
    let mut rng = rand::rng();
    let mut input: Vec<u64> = (0..count).map(|_| rng.random()).collect();

    let start = Instant::now();
    merge_sort(&mut input, 0, count);
    println!("Merge sorted 10M elements in {:?}", start.elapsed());

    // Verify sample
    for i in (0..count - 1).step_by(1_000) {
        assert!(input[i] <= input[i + 1], "Sort failed at index {}", i);
    }
}
