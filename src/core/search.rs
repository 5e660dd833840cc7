use crate::core::inventory::Inventory;
use crate::domain::model::{Backend, Record, SearchMode, SearchOutcome};
use crate::utils::error::{InventoryError, Result};
use std::cmp::Ordering;

/// Linear scan from the front, one comparison per record examined.
pub fn sequential_search<'a, I>(records: I, name: &str) -> SearchOutcome
where
    I: IntoIterator<Item = &'a Record>,
{
    let mut comparisons = 0;
    for (position, record) in records.into_iter().enumerate() {
        comparisons += 1;
        if record.name == name {
            return SearchOutcome::found(position, comparisons);
        }
    }
    SearchOutcome::not_found(comparisons)
}

/// Halving search over the inclusive window `[low, high]`.
///
/// `records` must be sorted ascending by name. This is not checked here; an
/// unsorted slice yields an unspecified position.
pub fn binary_search(records: &[Record], name: &str) -> SearchOutcome {
    let mut comparisons = 0;
    let mut low = 0;
    // exclusive upper bound, so an empty slice never enters the loop
    let mut high = records.len();

    while low < high {
        comparisons += 1;
        let mid = low + (high - 1 - low) / 2;
        match records[mid].name.as_str().cmp(name) {
            Ordering::Equal => return SearchOutcome::found(mid, comparisons),
            Ordering::Less => low = mid + 1,
            Ordering::Greater => high = mid,
        }
    }

    SearchOutcome::not_found(comparisons)
}

/// Dispatch a search to the inventory's backend.
///
/// Binary search is only available on the array, and only while the array
/// is tagged as sorted by name.
pub fn search(inventory: &Inventory, name: &str, mode: SearchMode) -> Result<SearchOutcome> {
    let outcome = match (inventory, mode) {
        (Inventory::Array(array), SearchMode::Sequential) => array.sequential_search(name),
        (Inventory::Linked(list), SearchMode::Sequential) => list.sequential_search(name),
        (Inventory::Array(array), SearchMode::Binary) => array.binary_search(name)?,
        (Inventory::Linked(_), SearchMode::Binary) => {
            return Err(InventoryError::UnsupportedOperation {
                operation: "binary search",
                backend: Backend::Linked,
            })
        }
    };

    tracing::debug!(
        "Searched '{}' ({:?}): position={:?}, comparisons={}",
        name,
        mode,
        outcome.position,
        outcome.comparisons
    );

    Ok(outcome)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sorted_fixture(names: &[&str]) -> Vec<Record> {
        let mut records: Vec<Record> = names.iter().map(|n| Record::new(*n, "misc", 1)).collect();
        records.sort_by(|a, b| a.name.cmp(&b.name));
        records
    }

    #[test]
    fn test_sequential_counts_until_match() {
        let records = sorted_fixture(&["Axe", "Rope", "Water"]);

        assert_eq!(sequential_search(&records, "Axe"), SearchOutcome::found(0, 1));
        assert_eq!(sequential_search(&records, "Water"), SearchOutcome::found(2, 3));
        assert_eq!(sequential_search(&records, "Map"), SearchOutcome::not_found(3));
    }

    #[test]
    fn test_binary_finds_last_in_two_steps() {
        let records = sorted_fixture(&["Rope", "Axe", "Water"]);
        let outcome = binary_search(&records, "Water");

        assert_eq!(outcome.position, Some(2));
        assert!(outcome.comparisons <= 2);
    }

    #[test]
    fn test_binary_on_empty() {
        assert_eq!(binary_search(&[], "anything"), SearchOutcome::not_found(0));
    }

    #[test]
    fn test_binary_midpoint_matches_inclusive_window() {
        // window [0, 3]: mid = 1 first, then [2, 3]: mid = 2, then 3
        let records = sorted_fixture(&["a", "b", "c", "d"]);

        assert_eq!(binary_search(&records, "b"), SearchOutcome::found(1, 1));
        assert_eq!(binary_search(&records, "c"), SearchOutcome::found(2, 2));
        assert_eq!(binary_search(&records, "d"), SearchOutcome::found(3, 3));
        assert_eq!(binary_search(&records, "a"), SearchOutcome::found(0, 2));
        assert_eq!(binary_search(&records, "e"), SearchOutcome::not_found(3));
    }

    #[test]
    fn test_binary_agrees_with_sequential_on_generated_fixtures() {
        let mut seed: u32 = 42;
        for size in 0..40 {
            let mut names = Vec::with_capacity(size);
            while names.len() < size {
                seed = seed.wrapping_mul(1103515245).wrapping_add(12345);
                let candidate = format!("item-{:05}", seed % 100_000);
                if !names.contains(&candidate) {
                    names.push(candidate);
                }
            }
            let refs: Vec<&str> = names.iter().map(String::as_str).collect();
            let records = sorted_fixture(&refs);

            for name in &names {
                let binary = binary_search(&records, name);
                let linear = sequential_search(&records, name);
                assert_eq!(binary.position, linear.position);
            }
            assert_eq!(binary_search(&records, "absent").position, None);
            assert_eq!(binary_search(&records, "zzz").position, None);
        }
    }
}
