pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::{CliCommand, CliConfig};
pub use config::InventoryConfig;

pub use crate::core::{
    array::ArrayContainer,
    inventory::Inventory,
    linked::LinkedContainer,
    session::{Command, Outcome, Session},
};
pub use domain::model::{
    Backend, Profile, Record, RemovalPolicy, SearchMode, SearchOutcome, SortAlgorithm, SortKey,
    SortReport,
};
pub use domain::ports::Container;
pub use utils::error::{InventoryError, Result};
