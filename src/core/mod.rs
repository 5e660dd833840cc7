pub mod array;
pub mod inventory;
pub mod linked;
pub mod search;
pub mod session;
pub mod sort;
pub mod timing;

pub use crate::domain::model::{
    Record, SearchMode, SearchOutcome, SortAlgorithm, SortKey, SortReport,
};
pub use crate::domain::ports::Container;
pub use crate::utils::error::Result;
