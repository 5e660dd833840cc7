use crate::domain::model::{Backend, SortKey};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum InventoryError {
    #[error("Inventory is full (capacity {capacity})")]
    Full { capacity: usize },

    #[error("Node allocation failed (budget of {budget} nodes exhausted)")]
    AllocationFailure { budget: usize },

    #[error("Item not found: {name}")]
    NotFound { name: String },

    #[error("Binary search requires the inventory sorted by {required}, current order: {}", describe_order(.actual))]
    PreconditionViolation {
        required: SortKey,
        actual: Option<SortKey>,
    },

    #[error("Operation '{operation}' is not supported by the {backend} backend")]
    UnsupportedOperation {
        operation: &'static str,
        backend: Backend,
    },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("CSV processing error: {0}")]
    CsvError(#[from] csv::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Configuration error in '{field}': {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Invalid value '{value}' for '{field}': {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Missing required configuration field: {field}")]
    MissingConfigError { field: String },
}

fn describe_order(actual: &Option<SortKey>) -> String {
    match actual {
        Some(key) => format!("sorted by {}", key),
        None => "unsorted".to_string(),
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Capacity,
    Lookup,
    Precondition,
    Configuration,
    System,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl InventoryError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            InventoryError::Full { .. } | InventoryError::AllocationFailure { .. } => {
                ErrorCategory::Capacity
            }
            InventoryError::NotFound { .. } => ErrorCategory::Lookup,
            InventoryError::PreconditionViolation { .. }
            | InventoryError::UnsupportedOperation { .. } => ErrorCategory::Precondition,
            InventoryError::ConfigError { .. }
            | InventoryError::ConfigValidationError { .. }
            | InventoryError::InvalidConfigValueError { .. }
            | InventoryError::MissingConfigError { .. } => ErrorCategory::Configuration,
            InventoryError::IoError(_)
            | InventoryError::SerializationError(_)
            | InventoryError::CsvError(_) => ErrorCategory::System,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self.category() {
            ErrorCategory::Lookup => ErrorSeverity::Low,
            ErrorCategory::Capacity | ErrorCategory::Precondition => ErrorSeverity::Medium,
            ErrorCategory::Configuration => ErrorSeverity::High,
            ErrorCategory::System => ErrorSeverity::Critical,
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            InventoryError::Full { .. } => "背包已滿，無法再加入物品".to_string(),
            InventoryError::AllocationFailure { .. } => "記憶體配置失敗，物品未加入".to_string(),
            InventoryError::NotFound { name } => format!("找不到物品 '{}'", name),
            InventoryError::PreconditionViolation { required, .. } => {
                format!("二分搜尋前必須先依 {} 排序", required)
            }
            InventoryError::UnsupportedOperation { operation, backend } => {
                format!("{} 後端不支援 {} 操作", backend, operation)
            }
            other => other.to_string(),
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            InventoryError::Full { .. } => "Remove an item or raise `inventory.capacity`",
            InventoryError::AllocationFailure { .. } => {
                "Remove an item or raise `inventory.node_budget`"
            }
            InventoryError::NotFound { .. } => "Check the item name with the `list` command",
            InventoryError::PreconditionViolation { .. } => {
                "Run `sort name` first or pass `--sort-first`"
            }
            InventoryError::UnsupportedOperation { .. } => {
                "Use the array backend for sorting and binary search"
            }
            InventoryError::ConfigError { .. }
            | InventoryError::ConfigValidationError { .. }
            | InventoryError::InvalidConfigValueError { .. }
            | InventoryError::MissingConfigError { .. } => {
                "Fix the inventory file and try again"
            }
            InventoryError::IoError(_) => "Make sure the file exists and is readable",
            InventoryError::SerializationError(_) | InventoryError::CsvError(_) => {
                "Try a different output format"
            }
        }
    }
}

pub type Result<T> = std::result::Result<T, InventoryError>;
