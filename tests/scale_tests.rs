use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use sortkit::prelude::*;

fn random_vec(rng: &mut StdRng, len: usize, bound: i32) -> Vec<i32> {
    (0..len).map(|_| rng.random_range(-bound..=bound)).collect()
}

#[test]
fn test_fuzz_random_all_algorithms() {
    let mut rng = StdRng::seed_from_u64(42);

    for _ in 0..300 {
        let len = rng.random_range(0..200);
        let bound = rng.random_range(1..10_000);
        let input = random_vec(&mut rng, len, bound);

        let mut expected = input.clone();
        expected.sort();

        for algorithm in Algorithm::ALL {
            if algorithm.requires_power_of_two() {
                continue;
            }
            let mut data = input.clone();
            algorithm.sort(&mut data).unwrap();
            assert_eq!(data, expected, "{algorithm} on {input:?}");
        }
    }
}

#[test]
fn test_fuzz_random_cube_sort() {
    let mut rng = StdRng::seed_from_u64(7);

    for _ in 0..200 {
        let len = 1usize << rng.random_range(0..11);
        let mut data = random_vec(&mut rng, len, 1_000);

        let mut expected = data.clone();
        expected.sort();

        cube_sort(&mut data).unwrap();
        assert_eq!(data, expected);
    }
}

#[test]
fn test_fuzz_random_quick_sort_range() {
    let mut rng = StdRng::seed_from_u64(11);

    for _ in 0..500 {
        let len = rng.random_range(1..100);
        let input = random_vec(&mut rng, len, 50);
        let left = rng.random_range(0..len);
        let right = rng.random_range(left..len);

        let mut expected = input.clone();
        expected[left..=right].sort();

        let mut data = input.clone();
        quick_sort_range(&mut data, left as isize, right as isize).unwrap();
        assert_eq!(data, expected, "range [{left}, {right}] of {input:?}");
    }
}

#[test]
fn test_fuzz_bucket_sort_floats() {
    let mut rng = StdRng::seed_from_u64(3);

    for _ in 0..200 {
        let len = rng.random_range(0..300);
        let mut data: Vec<f64> = (0..len).map(|_| rng.random::<f64>() * 1e6 - 5e5).collect();

        let mut expected = data.clone();
        expected.sort_by(f64::total_cmp);

        match UnitScale::from_values(data.iter().copied()) {
            Some(scale) => {
                bucket_sort_by(&mut data, |&x| scale.apply(x), f64::total_cmp);
            }
            None => assert!(data.is_empty()),
        }
        assert_eq!(data, expected);
    }
}

#[test]
fn test_large_n_log_n_sorts() {
    let mut rng = StdRng::seed_from_u64(1234);
    let input: Vec<i64> = (0..200_000).map(|_| rng.random()).collect();

    let mut expected = input.clone();
    expected.sort_unstable();

    for algorithm in [
        Algorithm::Quick,
        Algorithm::Merge,
        Algorithm::Heap,
        Algorithm::Tree,
        Algorithm::Radix,
    ] {
        let mut data = input.clone();
        algorithm.sort(&mut data).unwrap();
        assert_eq!(data, expected, "{algorithm}");
    }
}

#[test]
fn test_large_narrow_key_range() {
    let mut rng = StdRng::seed_from_u64(5678);
    let input: Vec<u16> = (0..500_000).map(|_| rng.random_range(0..1_000)).collect();

    let mut expected = input.clone();
    expected.sort_unstable();

    for algorithm in [Algorithm::Counting, Algorithm::Bucket, Algorithm::Shell] {
        let mut data = input.clone();
        algorithm.sort(&mut data).unwrap();
        assert_eq!(data, expected, "{algorithm}");
    }
}

#[test]
#[ignore]
fn test_sort_1m_cube() {
    // 2^20 elements: ~20M compare-exchanges per stage sweep.
    let mut rng = StdRng::seed_from_u64(1);
    let mut data: Vec<u32> = (0..1 << 20).map(|_| rng.random()).collect();
    cube_sort(&mut data).unwrap();
    assert!(data.windows(2).all(|w| w[0] <= w[1]));
}
