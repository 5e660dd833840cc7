use crate::core::inventory::Inventory;
use crate::core::timing;
use crate::domain::model::{
    Backend, Record, SearchMode, SearchOutcome, SortAlgorithm, SortKey, SortReport,
};
use crate::utils::error::{InventoryError, Result};

/// One request against the inventory.
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    Insert(Record),
    Remove(String),
    List,
    Search { name: String, mode: SearchMode },
    Sort(SortKey),
    /// Run every sort algorithm on a copy of the current contents.
    Bench,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    Inserted,
    Removed(Record),
    Listing(Vec<Record>),
    Found {
        name: String,
        outcome: SearchOutcome,
    },
    Sorted {
        report: SortReport,
        listing: Vec<Record>,
    },
    Bench(Vec<SortReport>),
}

pub struct Session {
    name: String,
    inventory: Inventory,
}

impl Session {
    pub fn new(name: impl Into<String>, inventory: Inventory) -> Self {
        Self {
            name: name.into(),
            inventory,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn inventory(&self) -> &Inventory {
        &self.inventory
    }

    pub fn execute(&mut self, command: Command) -> Result<Outcome> {
        tracing::debug!("[{}] executing {:?}", self.name, command);

        let outcome = match command {
            Command::Insert(record) => {
                let name = record.name.clone();
                self.inventory.insert(record)?;
                tracing::info!("✅ Inserted '{}' ({} items)", name, self.inventory.len());
                Outcome::Inserted
            }
            Command::Remove(name) => {
                let removed = self.inventory.remove(&name)?;
                tracing::info!("🗑️ Removed '{}' ({} items left)", name, self.inventory.len());
                Outcome::Removed(removed)
            }
            Command::List => Outcome::Listing(self.inventory.list()),
            Command::Search { name, mode } => {
                let outcome = self.inventory.search(&name, mode)?;
                match outcome.position {
                    Some(position) => tracing::info!(
                        "🔍 Found '{}' at position {} after {} comparisons",
                        name,
                        position,
                        outcome.comparisons
                    ),
                    None => tracing::info!(
                        "🔍 '{}' not found after {} comparisons",
                        name,
                        outcome.comparisons
                    ),
                }
                Outcome::Found { name, outcome }
            }
            Command::Sort(key) => {
                let report = self.inventory.sort(key)?;
                tracing::info!("📊 {}", report);
                Outcome::Sorted {
                    report,
                    listing: self.inventory.list(),
                }
            }
            Command::Bench => Outcome::Bench(self.bench()?),
        };

        Ok(outcome)
    }

    fn bench(&self) -> Result<Vec<SortReport>> {
        let array = self
            .inventory
            .as_array()
            .ok_or(InventoryError::UnsupportedOperation {
                operation: "bench",
                backend: Backend::Linked,
            })?;

        let reports = SortAlgorithm::ALL
            .iter()
            .map(|algorithm| {
                let mut scratch = array.as_slice().to_vec();
                let report = timing::measure(*algorithm, &mut scratch);
                tracing::info!("📊 {}", report);
                report
            })
            .collect();

        Ok(reports)
    }
}
