use crate::domain::model::{Backend, Record, SearchOutcome};
use crate::utils::error::Result;

/// The operation surface shared by both backends.
pub trait Container {
    fn insert(&mut self, record: Record) -> Result<()>;
    fn remove(&mut self, name: &str) -> Result<Record>;
    fn list(&self) -> Vec<Record>;
    fn sequential_search(&self, name: &str) -> SearchOutcome;
    fn len(&self) -> usize;
    fn backend(&self) -> Backend;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
