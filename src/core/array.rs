//! Fixed-capacity array backend.
//!
//! # Invariants
//! - `len() <= capacity()`; storage is allocated once and never grows.
//! - `sorted_by` is `Some(key)` only while the records are in ascending
//!   order by `key`.

use crate::core::{search, timing};
use crate::domain::model::{
    Backend, Record, RemovalPolicy, SearchOutcome, SortAlgorithm, SortKey, SortReport,
};
use crate::domain::ports::Container;
use crate::utils::error::{InventoryError, Result};

#[derive(Debug, Clone)]
pub struct ArrayContainer {
    records: Vec<Record>,
    capacity: usize,
    policy: RemovalPolicy,
    sorted_by: Option<SortKey>,
}

impl ArrayContainer {
    pub fn new(capacity: usize) -> Self {
        Self::with_policy(capacity, RemovalPolicy::default())
    }

    pub fn with_policy(capacity: usize, policy: RemovalPolicy) -> Self {
        Self {
            records: Vec::with_capacity(capacity),
            capacity,
            policy,
            sorted_by: None,
        }
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn is_full(&self) -> bool {
        self.records.len() >= self.capacity
    }

    /// The key the records are currently ordered by, if any.
    pub fn sorted_by(&self) -> Option<SortKey> {
        self.sorted_by
    }

    pub fn as_slice(&self) -> &[Record] {
        &self.records
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Record> {
        self.records.iter()
    }

    /// Appends at the end.
    ///
    /// # Errors
    ///
    /// Returns [`InventoryError::Full`] when the array is at capacity. The
    /// contents are left untouched.
    pub fn insert(&mut self, record: Record) -> Result<()> {
        if self.is_full() {
            return Err(InventoryError::Full {
                capacity: self.capacity,
            });
        }
        tracing::debug!("Array insert '{}' at index {}", record.name, self.records.len());
        self.records.push(record);
        self.sorted_by = None;
        Ok(())
    }

    /// Removes the first record named `name`, closing the gap according to
    /// the container's [`RemovalPolicy`].
    pub fn remove(&mut self, name: &str) -> Result<Record> {
        let index = self
            .records
            .iter()
            .position(|r| r.name == name)
            .ok_or_else(|| InventoryError::NotFound {
                name: name.to_string(),
            })?;

        let removed = match self.policy {
            RemovalPolicy::OrderPreserving => self.records.remove(index),
            RemovalPolicy::SwapRemove => {
                // Filling the hole from the tail breaks the order unless the
                // hole was the tail itself.
                if index + 1 != self.records.len() {
                    self.sorted_by = None;
                }
                self.records.swap_remove(index)
            }
        };

        tracing::debug!("Array removed '{}' from index {}", removed.name, index);
        Ok(removed)
    }

    pub fn list(&self) -> Vec<Record> {
        self.records.clone()
    }

    pub fn sequential_search(&self, name: &str) -> SearchOutcome {
        search::sequential_search(&self.records, name)
    }

    /// Sorts in place with `algorithm` and tags the array with its key.
    pub fn sort(&mut self, algorithm: SortAlgorithm) -> SortReport {
        let report = timing::measure(algorithm, &mut self.records);
        self.sorted_by = Some(algorithm.key());
        report
    }

    pub fn sort_by(&mut self, key: SortKey) -> SortReport {
        self.sort(SortAlgorithm::for_key(key))
    }

    /// Binary search by name, refused unless the array was last sorted by
    /// name.
    ///
    /// # Errors
    ///
    /// Returns [`InventoryError::PreconditionViolation`] carrying the
    /// current order when the array is not sorted by name.
    pub fn binary_search(&self, name: &str) -> Result<SearchOutcome> {
        if self.sorted_by != Some(SortKey::Name) {
            tracing::warn!(
                "Binary search for '{}' refused: array order is {:?}",
                name,
                self.sorted_by
            );
            return Err(InventoryError::PreconditionViolation {
                required: SortKey::Name,
                actual: self.sorted_by,
            });
        }
        Ok(self.binary_search_unchecked(name))
    }

    /// Binary search without the sortedness check. The caller guarantees the
    /// records are in ascending name order; otherwise the result is
    /// unspecified.
    pub fn binary_search_unchecked(&self, name: &str) -> SearchOutcome {
        search::binary_search(&self.records, name)
    }
}

impl Container for ArrayContainer {
    fn insert(&mut self, record: Record) -> Result<()> {
        ArrayContainer::insert(self, record)
    }

    fn remove(&mut self, name: &str) -> Result<Record> {
        ArrayContainer::remove(self, name)
    }

    fn list(&self) -> Vec<Record> {
        ArrayContainer::list(self)
    }

    fn sequential_search(&self, name: &str) -> SearchOutcome {
        ArrayContainer::sequential_search(self, name)
    }

    fn len(&self) -> usize {
        ArrayContainer::len(self)
    }

    fn backend(&self) -> Backend {
        Backend::Array
    }
}
