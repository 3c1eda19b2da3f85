use sortkit::prelude::*;

const MIXED: [i32; 8] = [3, 1, 4, 1, 5, 9, 2, 6];
const MIXED_SORTED: [i32; 8] = [1, 1, 2, 3, 4, 5, 6, 9];

#[test]
fn test_comparison_sorts_on_mixed_input() {
    type SortFn = fn(&mut [i32]) -> &mut [i32];
    let sorts: [(&str, SortFn); 8] = [
        ("bubble", bubble_sort),
        ("insertion", insertion_sort),
        ("selection", selection_sort),
        ("shell", shell_sort),
        ("quick", quick_sort),
        ("merge", merge_sort),
        ("heap", heap_sort),
        ("tree", tree_sort),
    ];

    for (name, sort) in sorts {
        let mut data = MIXED;
        sort(&mut data);
        assert_eq!(data, MIXED_SORTED, "{name}");
    }
}

#[test]
fn test_counting_sort_identity_key() {
    let mut data = [5, 3, 8, 4, 2, 5, 4, 1];
    counting_sort_by_key(&mut data, |&x| i64::from(x));
    assert_eq!(data, [1, 2, 3, 4, 4, 5, 5, 8]);
}

#[test]
fn test_cube_sort_power_of_two() {
    let mut data = [5, 3, 8, 4, 2, 5, 4, 1];
    cube_sort(&mut data).unwrap();
    assert_eq!(data, [1, 2, 3, 4, 4, 5, 5, 8]);
}

#[test]
fn test_cube_sort_length_three_fails() {
    let mut data = [3, 2, 1];
    assert_eq!(
        cube_sort(&mut data).unwrap_err(),
        SortError::InvalidCollectionSize { len: 3 }
    );
}

#[test]
fn test_quick_sort_range_partial() {
    let mut data = [8, 4, 3, 7, 6, 5, 2];
    quick_sort_range(&mut data, 1, 5).unwrap();
    assert_eq!(data, [8, 3, 4, 5, 6, 7, 2]);
}

#[test]
fn test_bucket_sort_min_max_normalized() {
    let mut data = [5.0, 4.0, 6.0, 2.0];
    let (min, max) = (2.0, 6.0);
    bucket_sort_by(&mut data, |&x| (x - min) / (max - min), f64::total_cmp);
    assert_eq!(data, [2.0, 4.0, 5.0, 6.0]);
}

#[test]
fn test_bucket_sort_with_unit_scale() {
    let mut data = vec![42, -7, 19, 0, 88, 19, -30];
    let scale = UnitScale::from_values(data.iter().map(|&x| f64::from(x))).unwrap();
    bucket_sort(&mut data, |&x| scale.apply(f64::from(x)));
    assert_eq!(data, vec![-30, -7, 0, 19, 19, 42, 88]);
}

#[test]
fn test_radix_sort_mixed_signs() {
    let mut data = vec![-12i16, 400, 0, -999, 37, 37, 5];
    radix_sort(&mut data);
    assert_eq!(data, vec![-999, -12, 0, 5, 37, 37, 400]);
}

#[test]
fn test_radix_sort_unsigned() {
    let mut data = [u32::MAX, 0, 1_000_000, 7, u32::MAX - 1];
    radix_sort(&mut data);
    assert_eq!(data, [0, 7, 1_000_000, u32::MAX - 1, u32::MAX]);
}

#[test]
fn test_sort_by_descending() {
    let mut data = MIXED;
    quick_sort_by(&mut data, |a, b| b.cmp(a));
    assert_eq!(data, [9, 6, 5, 4, 3, 2, 1, 1]);

    let mut data = MIXED;
    cube_sort_by(&mut data, |a, b| b.cmp(a)).unwrap();
    assert_eq!(data, [9, 6, 5, 4, 3, 2, 1, 1]);
}

#[test]
fn test_sort_by_key_strings() {
    let mut words = vec!["kiwi", "fig", "banana", "apple", "plum"];
    shell_sort_by_key(&mut words, |w| w.len());
    let lengths: Vec<usize> = words.iter().map(|w| w.len()).collect();
    assert_eq!(lengths, vec![3, 4, 4, 5, 6]);
}

#[test]
fn test_chaining() {
    let mut data = MIXED;
    let first = insertion_sort(&mut data).first().copied();
    assert_eq!(first, Some(1));

    // The returned slice is the input.
    let mut data = MIXED;
    let sorted = merge_sort(&mut data);
    sorted[0] = 100;
    assert_eq!(data[0], 100);
}

#[test]
fn test_algorithm_dispatch() {
    for algorithm in Algorithm::ALL {
        let mut data = [5i32, 3, 8, 4, 2, 5, 4, 1];
        algorithm.sort(&mut data).unwrap();
        assert_eq!(data, [1, 2, 3, 4, 4, 5, 5, 8], "{algorithm}");
    }
}

#[test]
fn test_strings_with_comparator() {
    let mut data = vec![
        "banana".to_string(),
        "Apple".to_string(),
        "cherry".to_string(),
        "apple".to_string(),
    ];
    tree_sort_by(&mut data, |a, b| {
        a.to_lowercase()
            .cmp(&b.to_lowercase())
            .then_with(|| a.cmp(b))
    });
    assert_eq!(data, vec!["Apple", "apple", "banana", "cherry"]);
}

#[test]
fn test_heap_sort_partial_order_via_total_cmp() {
    let mut data = [2.5, -0.0, 1.0, f64::INFINITY, -3.25];
    heap_sort_by(&mut data, f64::total_cmp);
    assert_eq!(data, [-3.25, -0.0, 1.0, 2.5, f64::INFINITY]);
}

#[test]
fn test_selection_sort_reverse_ordering() {
    let mut data = [(1, 'a'), (3, 'b'), (2, 'c')];
    selection_sort_by(&mut data, |a, b| a.0.cmp(&b.0).reverse());
    assert_eq!(data, [(3, 'b'), (2, 'c'), (1, 'a')]);
}
