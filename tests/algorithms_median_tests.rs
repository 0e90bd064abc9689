use movrank::prelude::*;

const FILTER_SIZES: [usize; 5] = [1, 3, 4, 5, 200];

fn constant_all_good(n: usize, value: f64) -> RankedArray<f64> {
    RankedArray::from_parts(vec![value; n], vec![RANK_MAX; n])
}

fn run_median(input: &RankedArray<f64>, size: usize, pass_through: bool) -> RankedArray<f64> {
    let mut output = RankedArray::new();
    let mut scratch = vec![0.0; size];
    moving_median(input, &mut output, &mut scratch, pass_through);
    output
}

// ============================================================================
// Scenario coverage
// ============================================================================

#[test]
fn test_constant_all_good_input_is_preserved() {
    let input = constant_all_good(12, -2.5);

    for size in FILTER_SIZES {
        for pass_through in [false, true] {
            let output = run_median(&input, size, pass_through);

            assert_eq!(output.len(), 12);
            assert_eq!(output.values(), input.values(), "size {}", size);
            assert_eq!(output.ranks(), input.ranks(), "size {}", size);
        }
    }
}

#[test]
fn test_empty_input_yields_empty_output() {
    let input = RankedArray::<f64>::new();

    for size in FILTER_SIZES {
        for pass_through in [false, true] {
            let output = run_median(&input, size, pass_through);
            assert!(output.is_empty(), "size {}", size);
        }
    }
}

#[test]
fn test_all_bad_input_yields_all_bad_output() {
    let input = RankedArray::from_parts(vec![7.0; 10], vec![RANK_MIN; 10]);

    for size in FILTER_SIZES {
        for pass_through in [false, true] {
            let output = run_median(&input, size, pass_through);

            assert_eq!(output.len(), 10);
            assert_eq!(output.ranks(), &[RANK_MIN; 10], "size {}", size);
        }
    }
}

// ============================================================================
// Hand-computed sequences
// ============================================================================

#[test]
fn test_spike_is_removed() {
    let input = constant_all_good(5, 5.0);
    let mut spiked = input.clone();
    spiked.set(2, 9.0, RANK_MAX);

    let output = run_median(&spiked, 3, false);
    assert_eq!(output.values(), &[5.0, 5.0, 5.0, 5.0, 5.0]);
    assert_eq!(output.ranks(), &[RANK_MAX; 5]);
}

#[test]
fn test_even_window_selects_lower_median_statistic() {
    let input = RankedArray::from_parts(vec![1.0, 2.0, 3.0, 4.0], vec![RANK_MAX; 4]);

    // The median of an even-sized window is the (n/2)-th order statistic,
    // never an average of the two middle values.
    let output = run_median(&input, 4, false);
    assert_eq!(output.values(), &[2.0, 3.0, 3.0, 4.0]);
}

#[test]
fn test_sparse_good_ranks_median_and_rank() {
    let input = RankedArray::from_parts(
        vec![10.0, 0.0, 20.0, 30.0, 0.0, 40.0],
        vec![RANK_MAX, RANK_MIN, 128, 64, RANK_MIN, RANK_MAX],
    );

    let output = run_median(&input, 3, false);
    assert_eq!(output.values(), &[10.0, 20.0, 30.0, 30.0, 40.0, 40.0]);
    assert_eq!(output.ranks(), &[RANK_MAX, 191, 96, 96, 159, RANK_MAX]);
}

#[test]
fn test_pass_through_forces_bad_positions() {
    let input = RankedArray::from_parts(
        vec![10.0, 0.0, 20.0, 30.0, 0.0, 40.0],
        vec![RANK_MAX, RANK_MIN, 128, 64, RANK_MIN, RANK_MAX],
    );

    let output = run_median(&input, 3, true);
    assert_eq!(output.get(1), (0.0, RANK_MIN));
    assert_eq!(output.get(4), (0.0, RANK_MIN));
    assert_eq!(output.get(0), (10.0, RANK_MAX));
    assert_eq!(output.get(3), (30.0, 96));
}

// ============================================================================
// Laws
// ============================================================================

#[test]
fn test_identity_for_size_one_and_short_input() {
    let input = RankedArray::from_parts(vec![3.0, -1.0, 2.0], vec![200, RANK_MIN, 10]);

    assert_eq!(run_median(&input, 1, true), input);
    assert_eq!(run_median(&input, 4, false), input);
}

#[test]
fn test_determinism() {
    let input = RankedArray::from_parts(
        vec![1.0, 7.0, -3.0, 2.0, 2.0, 9.0, 0.5],
        vec![RANK_MAX, 12, RANK_MIN, 200, 200, 1, RANK_MAX],
    );

    let first = run_median(&input, 5, true);
    let second = run_median(&input, 5, true);
    assert_eq!(first, second);
}

#[test]
fn test_duplicate_values_survive_sliding() {
    // Repeated values stress the working set's linear search: any slot
    // holding an equal value may be removed, and the multiset must stay
    // consistent across the whole sweep.
    let input = RankedArray::from_parts(
        vec![2.0, 2.0, 2.0, 5.0, 2.0, 2.0, 5.0, 5.0, 2.0, 2.0],
        vec![RANK_MAX; 10],
    );

    let output = run_median(&input, 4, false);
    assert_eq!(output.len(), 10);
    assert_eq!(
        output.values(),
        &[2.0, 2.0, 2.0, 2.0, 5.0, 5.0, 5.0, 5.0, 2.0, 2.0]
    );
}
