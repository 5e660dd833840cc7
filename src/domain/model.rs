use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use std::time::Duration;

/// One item in the backpack.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    pub name: String,
    pub category: String,
    pub quantity: i32,
}

impl Record {
    pub fn new(name: impl Into<String>, category: impl Into<String>, quantity: i32) -> Self {
        Self {
            name: name.into(),
            category: category.into(),
            quantity,
        }
    }
}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Name: {}, Category: {}, Quantity: {}",
            self.name, self.category, self.quantity
        )
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortKey {
    Name,
    Category,
    Quantity,
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let key = match self {
            SortKey::Name => "name",
            SortKey::Category => "category",
            SortKey::Quantity => "quantity",
        };
        f.write_str(key)
    }
}

impl FromStr for SortKey {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "name" => Ok(SortKey::Name),
            "category" | "type" => Ok(SortKey::Category),
            "quantity" | "priority" => Ok(SortKey::Quantity),
            other => Err(format!(
                "unknown sort key '{}', expected name, category or quantity",
                other
            )),
        }
    }
}

/// The closed set of sort strategies. Each one is bound to a single key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortAlgorithm {
    BubbleByName,
    InsertionByCategory,
    SelectionByQuantity,
}

impl SortAlgorithm {
    pub const ALL: [SortAlgorithm; 3] = [
        SortAlgorithm::BubbleByName,
        SortAlgorithm::InsertionByCategory,
        SortAlgorithm::SelectionByQuantity,
    ];

    pub fn for_key(key: SortKey) -> Self {
        match key {
            SortKey::Name => SortAlgorithm::BubbleByName,
            SortKey::Category => SortAlgorithm::InsertionByCategory,
            SortKey::Quantity => SortAlgorithm::SelectionByQuantity,
        }
    }

    pub fn key(&self) -> SortKey {
        match self {
            SortAlgorithm::BubbleByName => SortKey::Name,
            SortAlgorithm::InsertionByCategory => SortKey::Category,
            SortAlgorithm::SelectionByQuantity => SortKey::Quantity,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            SortAlgorithm::BubbleByName => "Bubble Sort (name)",
            SortAlgorithm::InsertionByCategory => "Insertion Sort (category)",
            SortAlgorithm::SelectionByQuantity => "Selection Sort (quantity)",
        }
    }
}

impl fmt::Display for SortAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SearchMode {
    #[default]
    Sequential,
    Binary,
}

impl FromStr for SearchMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "sequential" | "linear" => Ok(SearchMode::Sequential),
            "binary" => Ok(SearchMode::Binary),
            other => Err(format!(
                "unknown search mode '{}', expected sequential or binary",
                other
            )),
        }
    }
}

/// Where a search landed (`None` when absent) and how many comparisons it took.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SearchOutcome {
    pub position: Option<usize>,
    pub comparisons: usize,
}

impl SearchOutcome {
    pub fn found(position: usize, comparisons: usize) -> Self {
        Self {
            position: Some(position),
            comparisons,
        }
    }

    pub fn not_found(comparisons: usize) -> Self {
        Self {
            position: None,
            comparisons,
        }
    }
}

/// Result of one timed sort invocation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SortReport {
    pub algorithm: SortAlgorithm,
    pub elapsed: Duration,
    pub comparisons: usize,
}

impl SortReport {
    pub fn elapsed_seconds(&self) -> f64 {
        self.elapsed.as_secs_f64()
    }
}

impl fmt::Display for SortReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Algorithm {}: Time = {:.6} s, Comparisons = {}",
            self.algorithm,
            self.elapsed_seconds(),
            self.comparisons
        )
    }
}

/// How the array closes the hole left by a removed record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RemovalPolicy {
    /// Shift every later record one slot left.
    #[default]
    OrderPreserving,
    /// Move the last record into the hole. O(1) move, order not kept.
    SwapRemove,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Backend {
    #[default]
    Array,
    Linked,
}

impl fmt::Display for Backend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Backend::Array => f.write_str("array"),
            Backend::Linked => f.write_str("linked"),
        }
    }
}

impl FromStr for Backend {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "array" | "vector" => Ok(Backend::Array),
            "linked" | "list" => Ok(Backend::Linked),
            other => Err(format!("unknown backend '{}', expected array or linked", other)),
        }
    }
}

/// Capacity and removal presets for the three backpack editions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Profile {
    Novice,
    #[default]
    Adventurer,
    Master,
}

impl Profile {
    pub fn capacity(&self) -> usize {
        match self {
            Profile::Novice => 10,
            Profile::Adventurer => 100,
            Profile::Master => 20,
        }
    }

    pub fn removal_policy(&self) -> RemovalPolicy {
        match self {
            Profile::Novice => RemovalPolicy::SwapRemove,
            Profile::Adventurer | Profile::Master => RemovalPolicy::OrderPreserving,
        }
    }
}

impl FromStr for Profile {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "novice" => Ok(Profile::Novice),
            "adventurer" => Ok(Profile::Adventurer),
            "master" => Ok(Profile::Master),
            other => Err(format!(
                "unknown profile '{}', expected novice, adventurer or master",
                other
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_algorithm_key_mapping_is_bijective() {
        for algorithm in SortAlgorithm::ALL {
            assert_eq!(SortAlgorithm::for_key(algorithm.key()), algorithm);
        }
    }

    #[test]
    fn test_profile_presets() {
        assert_eq!(Profile::Novice.capacity(), 10);
        assert_eq!(Profile::Novice.removal_policy(), RemovalPolicy::SwapRemove);
        assert_eq!(Profile::Adventurer.capacity(), 100);
        assert_eq!(Profile::Master.capacity(), 20);
        assert_eq!(
            Profile::Master.removal_policy(),
            RemovalPolicy::OrderPreserving
        );
    }

    #[test]
    fn test_sort_report_display() {
        let report = SortReport {
            algorithm: SortAlgorithm::SelectionByQuantity,
            elapsed: Duration::from_millis(1500),
            comparisons: 10,
        };
        assert_eq!(
            report.to_string(),
            "Algorithm Selection Sort (quantity): Time = 1.500000 s, Comparisons = 10"
        );
    }

    #[test]
    fn test_parse_cli_values() {
        assert_eq!("Name".parse::<SortKey>(), Ok(SortKey::Name));
        assert_eq!("priority".parse::<SortKey>(), Ok(SortKey::Quantity));
        assert_eq!("binary".parse::<SearchMode>(), Ok(SearchMode::Binary));
        assert_eq!("list".parse::<Backend>(), Ok(Backend::Linked));
        assert_eq!("master".parse::<Profile>(), Ok(Profile::Master));
        assert!("weight".parse::<SortKey>().is_err());
    }

    #[test]
    fn test_deserialize_record() {
        let record: Record =
            serde_json::from_str(r#"{"name":"Rope","category":"tool","quantity":2}"#).unwrap();
        assert_eq!(record, Record::new("Rope", "tool", 2));
    }
}
