//! Comparison-counting sorts over a slice of records.
//!
//! Each algorithm owns exactly one key. The returned count is the number of
//! key comparisons performed, which is deterministic for a given input order.

use crate::domain::model::{Record, SortAlgorithm};

pub fn run(algorithm: SortAlgorithm, records: &mut [Record]) -> usize {
    match algorithm {
        SortAlgorithm::BubbleByName => bubble_sort_by_name(records),
        SortAlgorithm::InsertionByCategory => insertion_sort_by_category(records),
        SortAlgorithm::SelectionByQuantity => selection_sort_by_quantity(records),
    }
}

/// Bubble sort by name. Always `n - 1` full passes, no early exit, so the
/// count is `n(n-1)/2` whatever the input order.
pub fn bubble_sort_by_name(records: &mut [Record]) -> usize {
    let n = records.len();
    let mut comparisons = 0;

    for i in 0..n.saturating_sub(1) {
        for j in 0..n - i - 1 {
            comparisons += 1;
            if records[j].name > records[j + 1].name {
                records.swap(j, j + 1);
            }
        }
    }

    comparisons
}

/// Insertion sort by category.
///
/// One comparison is counted per inner-loop step that still has a
/// predecessor to look at. Running off the left edge ends the walk without
/// a count, a predecessor that is not greater ends it with one.
pub fn insertion_sort_by_category(records: &mut [Record]) -> usize {
    let mut comparisons = 0;

    for i in 1..records.len() {
        // `hole` is where the held record will land; everything in
        // `hole..i` has been shifted one slot right.
        let mut hole = i;
        while hole > 0 {
            comparisons += 1;
            if records[hole - 1].category > records[i].category {
                hole -= 1;
            } else {
                break;
            }
        }
        // Rotating moves record `i` into `hole` and shifts the run right
        // in one step, keeping equal categories in their original order.
        records[hole..=i].rotate_right(1);
    }

    comparisons
}

/// Selection sort by quantity. Scans the whole unsorted tail on every
/// pass, so the count is `n(n-1)/2`. Swaps only when the minimum moved.
pub fn selection_sort_by_quantity(records: &mut [Record]) -> usize {
    let n = records.len();
    let mut comparisons = 0;

    for i in 0..n.saturating_sub(1) {
        let mut min_idx = i;
        for j in i + 1..n {
            comparisons += 1;
            if records[j].quantity < records[min_idx].quantity {
                min_idx = j;
            }
        }
        if min_idx != i {
            records.swap(i, min_idx);
        }
    }

    comparisons
}
