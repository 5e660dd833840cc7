//! Singly linked backend built by head-prepend.
//!
//! Each node owns its successor; the container owns only the head. There is
//! no size field, [`LinkedContainer::len`] walks the chain.

use crate::core::search;
use crate::domain::model::{Backend, Record, SearchOutcome};
use crate::domain::ports::Container;
use crate::utils::error::{InventoryError, Result};

#[derive(Debug)]
struct Node {
    record: Record,
    next: Link,
}

type Link = Option<Box<Node>>;

#[derive(Debug, Clone, Copy)]
struct NodeBudget {
    limit: usize,
    remaining: usize,
}

#[derive(Debug, Default)]
pub struct LinkedContainer {
    head: Link,
    budget: Option<NodeBudget>,
}

impl LinkedContainer {
    pub fn new() -> Self {
        Self::default()
    }

    /// A list that refuses to allocate more than `limit` live nodes.
    pub fn with_node_budget(limit: usize) -> Self {
        Self {
            head: None,
            budget: Some(NodeBudget {
                limit,
                remaining: limit,
            }),
        }
    }

    /// Nodes that can still be allocated, `None` when unbounded.
    pub fn remaining_budget(&self) -> Option<usize> {
        self.budget.map(|b| b.remaining)
    }

    pub fn len(&self) -> usize {
        self.iter().count()
    }

    pub fn is_empty(&self) -> bool {
        self.head.is_none()
    }

    pub fn iter(&self) -> Iter<'_> {
        Iter {
            next: self.head.as_deref(),
        }
    }

    /// Prepends `record`; it becomes the new head.
    ///
    /// # Errors
    ///
    /// Returns [`InventoryError::AllocationFailure`] when the node budget is
    /// exhausted. The list is unchanged.
    pub fn insert(&mut self, record: Record) -> Result<()> {
        if let Some(budget) = self.budget.as_mut() {
            if budget.remaining == 0 {
                return Err(InventoryError::AllocationFailure {
                    budget: budget.limit,
                });
            }
            budget.remaining -= 1;
        }

        tracing::debug!("List insert '{}' at head", record.name);
        let node = Box::new(Node {
            record,
            next: self.head.take(),
        });
        self.head = Some(node);
        Ok(())
    }

    /// Splices out the first node named `name` and releases it.
    pub fn remove(&mut self, name: &str) -> Result<Record> {
        let mut cursor = &mut self.head;
        let mut position = 0;

        // Advance while the current link holds a non-matching node. The
        // cursor always points at the link that owns the candidate, so the
        // head needs no special case.
        while cursor.as_ref().is_some_and(|node| node.record.name != name) {
            if let Some(node) = cursor {
                cursor = &mut node.next;
            }
            position += 1;
        }

        let mut node = cursor.take().ok_or_else(|| InventoryError::NotFound {
            name: name.to_string(),
        })?;
        *cursor = node.next.take();

        if let Some(budget) = self.budget.as_mut() {
            budget.remaining += 1;
        }

        tracing::debug!("List removed '{}' at position {}", node.record.name, position);
        Ok(node.record)
    }

    pub fn list(&self) -> Vec<Record> {
        self.iter().cloned().collect()
    }

    pub fn sequential_search(&self, name: &str) -> SearchOutcome {
        search::sequential_search(self.iter(), name)
    }
}

impl Drop for LinkedContainer {
    // Unlink node by node so a long chain does not recurse through
    // `Box<Node>` drops.
    fn drop(&mut self) {
        let mut link = self.head.take();
        while let Some(mut node) = link {
            link = node.next.take();
        }
    }
}

impl Container for LinkedContainer {
    fn insert(&mut self, record: Record) -> Result<()> {
        LinkedContainer::insert(self, record)
    }

    fn remove(&mut self, name: &str) -> Result<Record> {
        LinkedContainer::remove(self, name)
    }

    fn list(&self) -> Vec<Record> {
        LinkedContainer::list(self)
    }

    fn sequential_search(&self, name: &str) -> SearchOutcome {
        LinkedContainer::sequential_search(self, name)
    }

    fn len(&self) -> usize {
        LinkedContainer::len(self)
    }

    fn backend(&self) -> Backend {
        Backend::Linked
    }
}

/// Head-to-tail iterator over a [`LinkedContainer`].
pub struct Iter<'a> {
    next: Option<&'a Node>,
}

impl<'a> Iterator for Iter<'a> {
    type Item = &'a Record;

    fn next(&mut self) -> Option<Self::Item> {
        self.next.map(|node| {
            self.next = node.next.as_deref();
            &node.record
        })
    }
}

impl<'a> IntoIterator for &'a LinkedContainer {
    type Item = &'a Record;
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn list_of(names: &[&str]) -> LinkedContainer {
        let mut list = LinkedContainer::new();
        for name in names {
            list.insert(Record::new(*name, "misc", 1)).unwrap();
        }
        list
    }

    fn names(list: &LinkedContainer) -> Vec<String> {
        list.iter().map(|r| r.name.clone()).collect()
    }

    #[test]
    fn test_prepend_order() {
        let list = list_of(&["A", "B", "C"]);
        assert_eq!(names(&list), vec!["C", "B", "A"]);
        assert_eq!(list.len(), 3);
    }

    #[test]
    fn test_remove_middle_head_and_tail() {
        let mut list = list_of(&["A", "B", "C", "D"]);

        list.remove("B").unwrap();
        assert_eq!(names(&list), vec!["D", "C", "A"]);

        list.remove("D").unwrap();
        assert_eq!(names(&list), vec!["C", "A"]);

        list.remove("A").unwrap();
        assert_eq!(names(&list), vec!["C"]);

        list.remove("C").unwrap();
        assert!(list.is_empty());
    }

    #[test]
    fn test_remove_missing_keeps_order() {
        let mut list = list_of(&["A", "B"]);
        assert!(matches!(
            list.remove("Z"),
            Err(InventoryError::NotFound { .. })
        ));
        assert_eq!(names(&list), vec!["B", "A"]);

        let mut empty = LinkedContainer::new();
        assert!(empty.remove("A").is_err());
    }

    #[test]
    fn test_sequential_search_positions() {
        let list = list_of(&["A", "B", "C"]);

        assert_eq!(list.sequential_search("C"), SearchOutcome::found(0, 1));
        assert_eq!(list.sequential_search("A"), SearchOutcome::found(2, 3));
        assert_eq!(list.sequential_search("Z"), SearchOutcome::not_found(3));
    }

    #[test]
    fn test_node_budget_exhaustion_and_release() {
        let mut list = LinkedContainer::with_node_budget(2);
        list.insert(Record::new("A", "misc", 1)).unwrap();
        list.insert(Record::new("B", "misc", 1)).unwrap();

        let err = list.insert(Record::new("C", "misc", 1)).unwrap_err();
        assert!(matches!(err, InventoryError::AllocationFailure { budget: 2 }));
        assert_eq!(names(&list), vec!["B", "A"]);
        assert_eq!(list.remaining_budget(), Some(0));

        list.remove("A").unwrap();
        assert_eq!(list.remaining_budget(), Some(1));
        list.insert(Record::new("C", "misc", 1)).unwrap();
        assert_eq!(names(&list), vec!["C", "B"]);
    }

    #[test]
    fn test_failed_remove_does_not_refund_budget() {
        let mut list = LinkedContainer::with_node_budget(1);
        list.insert(Record::new("A", "misc", 1)).unwrap();
        assert!(list.remove("missing").is_err());
        assert_eq!(list.remaining_budget(), Some(0));
    }

    #[test]
    fn test_drop_long_chain() {
        let mut list = LinkedContainer::new();
        for i in 0..100_000 {
            list.insert(Record::new(format!("n{}", i), "misc", i)).unwrap();
        }
        drop(list);
    }
}
