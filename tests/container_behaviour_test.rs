use small_inventory::{
    ArrayContainer, Container, InventoryError, LinkedContainer, Record, RemovalPolicy, SearchMode,
    SortKey,
};

/// Deterministic pseudo-random names (LCG), no duplicates.
fn generated_names(count: usize, seed: u32) -> Vec<String> {
    let mut state = seed;
    let mut names = Vec::with_capacity(count);
    while names.len() < count {
        state = state.wrapping_mul(1103515245).wrapping_add(12345);
        let name = format!("item-{:04}", (state >> 8) % 10_000);
        if !names.contains(&name) {
            names.push(name);
        }
    }
    names
}

fn exercise_insert_remove(container: &mut dyn Container, names: &[String]) {
    let mut inserted = 0;
    let mut removed = 0;

    for name in names {
        container.insert(Record::new(name.clone(), "misc", 1)).unwrap();
        inserted += 1;
    }
    for name in names.iter().step_by(3) {
        container.remove(name).unwrap();
        removed += 1;
    }

    assert_eq!(container.list().len(), inserted - removed);
    assert_eq!(container.len(), inserted - removed);

    let before = container.list();
    assert!(matches!(
        container.remove("not-in-there"),
        Err(InventoryError::NotFound { .. })
    ));
    assert_eq!(container.list(), before);
}

#[test]
fn test_length_tracks_inserts_minus_removes_on_both_backends() {
    let names = generated_names(30, 7);

    let mut array = ArrayContainer::new(30);
    exercise_insert_remove(&mut array, &names);

    let mut list = LinkedContainer::new();
    exercise_insert_remove(&mut list, &names);
}

#[test]
fn test_array_full_leaves_size_unchanged() {
    let mut array = ArrayContainer::new(3);
    for name in ["a", "b", "c"] {
        array.insert(Record::new(name, "misc", 1)).unwrap();
    }

    for _ in 0..5 {
        let err = array.insert(Record::new("d", "misc", 1)).unwrap_err();
        assert!(matches!(err, InventoryError::Full { capacity: 3 }));
        assert_eq!(array.len(), 3);
    }
}

#[test]
fn test_backpack_scenario_sort_then_binary_search() {
    let mut array = ArrayContainer::with_policy(10, RemovalPolicy::OrderPreserving);
    array.insert(Record::new("Rope", "tool", 2)).unwrap();
    array.insert(Record::new("Axe", "tool", 1)).unwrap();
    array.insert(Record::new("Water", "food", 5)).unwrap();

    array.sort_by(SortKey::Name);
    let names: Vec<String> = array.list().into_iter().map(|r| r.name).collect();
    assert_eq!(names, vec!["Axe", "Rope", "Water"]);

    let outcome = array.binary_search("Water").unwrap();
    assert_eq!(outcome.position, Some(2));
    assert!(outcome.comparisons <= 2);
}

#[test]
fn test_linked_scenario_prepend_and_remove() {
    let mut list = LinkedContainer::new();
    for name in ["A", "B", "C"] {
        list.insert(Record::new(name, "misc", 1)).unwrap();
    }

    let names: Vec<String> = list.list().into_iter().map(|r| r.name).collect();
    assert_eq!(names, vec!["C", "B", "A"]);

    list.remove("B").unwrap();
    let names: Vec<String> = list.list().into_iter().map(|r| r.name).collect();
    assert_eq!(names, vec!["C", "A"]);
}

#[test]
fn test_removal_policies_differ_only_in_order() {
    let names = generated_names(8, 99);
    let mut ordered = ArrayContainer::with_policy(8, RemovalPolicy::OrderPreserving);
    let mut swapped = ArrayContainer::with_policy(8, RemovalPolicy::SwapRemove);
    for name in &names {
        ordered.insert(Record::new(name.clone(), "misc", 1)).unwrap();
        swapped.insert(Record::new(name.clone(), "misc", 1)).unwrap();
    }

    ordered.remove(&names[2]).unwrap();
    swapped.remove(&names[2]).unwrap();

    let mut expected: Vec<String> = names.clone();
    expected.remove(2);
    let ordered_names: Vec<String> = ordered.list().into_iter().map(|r| r.name).collect();
    assert_eq!(ordered_names, expected);

    let swapped_names: Vec<String> = swapped.list().into_iter().map(|r| r.name).collect();
    assert_eq!(swapped_names[2], names[7]);

    let mut a = ordered_names;
    let mut b = swapped_names;
    a.sort();
    b.sort();
    assert_eq!(a, b);
}

#[test]
fn test_search_modes_through_inventory() {
    let mut inventory = small_inventory::Inventory::array(5, RemovalPolicy::OrderPreserving);
    for name in ["d", "b", "a", "c"] {
        inventory.insert(Record::new(name, "misc", 1)).unwrap();
    }

    assert!(matches!(
        inventory.search("a", SearchMode::Binary),
        Err(InventoryError::PreconditionViolation { .. })
    ));
    assert_eq!(
        inventory.search("a", SearchMode::Sequential).unwrap().position,
        Some(2)
    );

    inventory.sort(SortKey::Name).unwrap();
    assert_eq!(
        inventory.search("a", SearchMode::Binary).unwrap().position,
        Some(0)
    );
}
