//! Reference algorithms and generators against fixed, scripted inputs.

use running_times_core::{
    bubble_sort, comparison_sort, linear_search, random_array, random_matrix, IntDomain, Runner,
    TimeUnit,
};
use running_times_test::{SequenceSource, FIXED_ARRAY, SORTED_FIXED_ARRAY};

#[test]
fn test_scripted_source_reproduces_fixed_array() {
    let mut source = SequenceSource::new(FIXED_ARRAY.to_vec());
    let values = random_array(FIXED_ARRAY.len(), IntDomain::default(), &mut source);
    assert_eq!(values, FIXED_ARRAY);
}

#[test]
fn test_both_sorts_match_reference() {
    let mut sorted = FIXED_ARRAY;
    comparison_sort(&mut sorted);
    assert_eq!(sorted, SORTED_FIXED_ARRAY);

    let mut bubbled = FIXED_ARRAY;
    bubble_sort(&mut bubbled);
    assert_eq!(bubbled, SORTED_FIXED_ARRAY);
}

#[test]
fn test_absent_target_is_never_found() {
    let runner = Runner::new(TimeUnit::Nanoseconds);
    assert!(!linear_search(&FIXED_ARRAY, runner.absent_target()));
    assert!(linear_search(&FIXED_ARRAY, 512));
}

#[test]
fn test_runner_leaves_input_untouched() {
    let runner = Runner::new(TimeUnit::Nanoseconds).with_search_repetitions(3);
    let input = FIXED_ARRAY.to_vec();
    runner.comparison_sort(&input);
    runner.bubble_sort(&input);
    runner.linear_search(&input);
    assert_eq!(input, FIXED_ARRAY);
}

#[test]
fn test_scripted_matrix_entries() {
    let mut source = SequenceSource::with_units(vec![1], vec![0.25, 0.75]);
    let m = random_matrix(2, &mut source);
    assert_eq!(m.as_slice(), &[0.25, 0.75, 0.25, 0.75]);
}

#[test]
fn test_scripted_ints_are_clamped_to_domain() {
    let mut source = SequenceSource::new(FIXED_ARRAY.to_vec());
    let values = random_array(10, IntDomain::new(5, 100), &mut source);
    assert!(values.iter().all(|&v| (5..=100).contains(&v)));
}
