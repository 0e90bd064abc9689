#![cfg(feature = "dev")]

use movrank::internals::algorithms::median::{moving_median, WorkingSet};
use movrank::prelude::*;

// ============================================================================
// WorkingSet operations
// ============================================================================

#[test]
fn test_append_skips_bad_rank_but_counts_it() {
    let mut slots = [0.0f64; 4];
    let mut set = WorkingSet::new(&mut slots);

    set.append(1.0, 100);
    set.append(9.0, RANK_MIN);
    set.append(2.0, 50);

    assert_eq!(set.len(), 2);
    // Bad entries contribute zero to the rank sum: 150 / 2 good values.
    assert_eq!(set.emit(RANK_MAX, false), (2.0, 75));
}

#[test]
fn test_remove_swaps_last_slot_in() {
    let mut slots = [0.0f64; 4];
    let mut set = WorkingSet::new(&mut slots);

    set.append(1.0, 100);
    set.append(2.0, 100);
    set.append(3.0, 100);
    set.remove_value(1.0, 100);

    assert_eq!(set.len(), 2);
    // 1.0 is gone; the remaining multiset is {2.0, 3.0}.
    assert_eq!(set.emit(RANK_MAX, false), (3.0, 100));
}

#[test]
fn test_remove_bad_rank_is_a_no_op() {
    let mut slots = [0.0f64; 2];
    let mut set = WorkingSet::new(&mut slots);

    set.append(4.0, 100);
    set.remove_value(4.0, RANK_MIN);

    assert_eq!(set.len(), 1);
}

#[test]
fn test_update_reuses_the_vacated_slot() {
    let mut slots = [0.0f64; 3];
    let mut set = WorkingSet::new(&mut slots);

    set.append(1.0, 100);
    set.append(2.0, 200);
    set.update_value(1.0, 100, 5.0, 60);

    assert_eq!(set.len(), 2);
    // Multiset is now {2.0, 5.0}; rank sum 260.
    assert_eq!(set.emit(RANK_MAX, false), (5.0, 130));
}

#[test]
fn test_update_with_bad_outgoing_rank_appends() {
    let mut slots = [0.0f64; 3];
    let mut set = WorkingSet::new(&mut slots);

    set.append(1.0, 100);
    set.update_value(9.0, RANK_MIN, 3.0, 40);

    assert_eq!(set.len(), 2);
    assert_eq!(set.emit(RANK_MAX, false), (3.0, 70));
}

#[test]
fn test_update_with_bad_incoming_rank_removes() {
    let mut slots = [0.0f64; 3];
    let mut set = WorkingSet::new(&mut slots);

    set.append(1.0, 100);
    set.append(2.0, 200);
    set.update_value(1.0, 100, 9.0, RANK_MIN);

    assert_eq!(set.len(), 1);
    assert_eq!(set.emit(RANK_MAX, false), (2.0, 200));
}

#[test]
fn test_emit_empty_set_is_bad() {
    let mut slots = [0.0f64; 2];
    let mut set = WorkingSet::new(&mut slots);
    assert!(set.is_empty());
    assert_eq!(set.emit(RANK_MAX, false), (0.0, RANK_MIN));
}

#[test]
fn test_emit_pass_through_overrides() {
    let mut slots = [0.0f64; 2];
    let mut set = WorkingSet::new(&mut slots);
    set.append(7.0, 100);

    assert_eq!(set.emit(RANK_MIN, true), (0.0, RANK_MIN));
    assert_eq!(set.emit(RANK_MIN, false), (7.0, 100));
}

#[test]
#[should_panic(expected = "missing from median working set")]
fn test_search_miss_for_good_value_is_fatal() {
    let mut slots = [0.0f64; 2];
    let mut set = WorkingSet::new(&mut slots);
    set.append(5.0, 200);

    // Removing a good-ranked value that was never appended is an algorithm
    // defect; tolerating it would corrupt all subsequent bookkeeping.
    set.remove_value(7.0, 200);
}

// ============================================================================
// Cross-check of the two update paths
// ============================================================================

/// Same sweep as `moving_median`, but stepping the window with an explicit
/// remove-then-append instead of the slot-reusing `update_value`.
fn moving_median_remove_append(
    input: &RankedArray<f64>,
    output: &mut RankedArray<f64>,
    working_set: &mut [f64],
    pass_through_bad_rank: bool,
) {
    let filter_size = working_set.len();
    let n = input.len();
    if filter_size <= 1 || n < filter_size {
        output.assign_from(input);
        return;
    }
    output.resize(n);

    let half = filter_size / 2;
    let mut set = WorkingSet::new(working_set);

    for read in 0..filter_size {
        let (value, rank) = input.get(read);
        set.append(value, rank);
        if read >= half {
            let out = read - half;
            let (v, r) = set.emit(input.ranks()[out], pass_through_bad_rank);
            output.set(out, v, r);
        }
    }

    for read in filter_size..n {
        let (old_value, old_rank) = input.get(read - filter_size);
        let (new_value, new_rank) = input.get(read);
        set.remove_value(old_value, old_rank);
        set.append(new_value, new_rank);

        let out = read - half;
        let (v, r) = set.emit(input.ranks()[out], pass_through_bad_rank);
        output.set(out, v, r);
    }

    for step in 0..half {
        let (old_value, old_rank) = input.get(n - filter_size + step);
        set.remove_value(old_value, old_rank);

        let out = n - half + step;
        let (v, r) = set.emit(input.ranks()[out], pass_through_bad_rank);
        output.set(out, v, r);
    }
}

/// 44 samples: a constant run, a reference block, its negation, and a
/// scaled copy, with bad ranks on every position divisible by 6 or 7.
fn mixed_blocks() -> RankedArray<f64> {
    let base = [3.0, 1.5, -0.25, 7.0, 2.0, 4.5, -1.0, 0.5, 6.25, -3.5, 2.75];

    let mut values = vec![2.5; 11];
    values.extend_from_slice(&base);
    values.extend(base.iter().map(|v| -v));
    values.extend(base.iter().map(|v| v * 1.75));

    let ranks = (0..44)
        .map(|i| {
            if i % 6 == 0 || i % 7 == 0 {
                RANK_MIN
            } else {
                100 + (i as Rank % 5) * 30
            }
        })
        .collect();

    RankedArray::from_parts(values, ranks)
}

#[test]
fn test_update_path_matches_remove_append_path() {
    let input = mixed_blocks();

    for size in [3, 4, 5, 7] {
        for pass_through in [false, true] {
            let mut fast = RankedArray::new();
            let mut scratch = vec![0.0; size];
            moving_median(&input, &mut fast, &mut scratch, pass_through);

            let mut explicit = RankedArray::new();
            let mut scratch = vec![0.0; size];
            moving_median_remove_append(&input, &mut explicit, &mut scratch, pass_through);

            assert_eq!(fast, explicit, "size {} pass {}", size, pass_through);
        }
    }
}
