use crate::core::array::ArrayContainer;
use crate::core::linked::LinkedContainer;
use crate::core::search;
use crate::domain::model::{
    Backend, Record, RemovalPolicy, SearchMode, SearchOutcome, SortKey, SortReport,
};
use crate::domain::ports::Container;
use crate::utils::error::{InventoryError, Result};

/// An inventory backed by one of the two containers, chosen by the caller.
#[derive(Debug)]
pub enum Inventory {
    Array(ArrayContainer),
    Linked(LinkedContainer),
}

impl Inventory {
    pub fn array(capacity: usize, policy: RemovalPolicy) -> Self {
        Inventory::Array(ArrayContainer::with_policy(capacity, policy))
    }

    /// A linked inventory, optionally capped at `node_budget` live nodes.
    pub fn linked(node_budget: Option<usize>) -> Self {
        match node_budget {
            Some(limit) => Inventory::Linked(LinkedContainer::with_node_budget(limit)),
            None => Inventory::Linked(LinkedContainer::new()),
        }
    }

    pub fn backend(&self) -> Backend {
        self.container().backend()
    }

    pub fn len(&self) -> usize {
        self.container().len()
    }

    pub fn is_empty(&self) -> bool {
        self.container().is_empty()
    }

    pub fn insert(&mut self, record: Record) -> Result<()> {
        self.container_mut().insert(record)
    }

    pub fn remove(&mut self, name: &str) -> Result<Record> {
        self.container_mut().remove(name)
    }

    pub fn list(&self) -> Vec<Record> {
        self.container().list()
    }

    pub fn search(&self, name: &str, mode: SearchMode) -> Result<SearchOutcome> {
        search::search(self, name, mode)
    }

    /// Sorts the array backend by `key` with that key's algorithm.
    pub fn sort(&mut self, key: SortKey) -> Result<SortReport> {
        match self {
            Inventory::Array(array) => Ok(array.sort_by(key)),
            Inventory::Linked(_) => Err(InventoryError::UnsupportedOperation {
                operation: "sort",
                backend: Backend::Linked,
            }),
        }
    }

    pub fn as_array(&self) -> Option<&ArrayContainer> {
        match self {
            Inventory::Array(array) => Some(array),
            Inventory::Linked(_) => None,
        }
    }

    fn container(&self) -> &dyn Container {
        match self {
            Inventory::Array(array) => array,
            Inventory::Linked(list) => list,
        }
    }

    fn container_mut(&mut self) -> &mut dyn Container {
        match self {
            Inventory::Array(array) => array,
            Inventory::Linked(list) => list,
        }
    }
}
