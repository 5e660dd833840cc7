use crate::core::inventory::Inventory;
use crate::domain::model::{Backend, Profile, Record, RemovalPolicy};
use crate::utils::error::{InventoryError, Result};
use crate::utils::validation::{self, Validate};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::Path;
use std::sync::OnceLock;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InventoryConfig {
    pub inventory: InventorySection,
    #[serde(default)]
    pub items: Vec<Record>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct InventorySection {
    pub name: Option<String>,
    #[serde(default)]
    pub backend: Backend,
    pub profile: Option<Profile>,
    pub capacity: Option<usize>,
    pub removal_policy: Option<RemovalPolicy>,
    pub node_budget: Option<usize>,
}

fn env_placeholder() -> &'static Regex {
    static PLACEHOLDER: OnceLock<Regex> = OnceLock::new();
    // `${VAR_NAME}`; the pattern is a literal and always compiles
    PLACEHOLDER.get_or_init(|| Regex::new(r"\$\{([^}]+)\}").expect("valid placeholder regex"))
}

impl InventoryConfig {
    /// Loads the inventory file at `path`.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(InventoryError::IoError)?;
        Self::from_toml_str(&content)
    }

    /// Parses an inventory from TOML text after `${VAR}` substitution.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content);

        toml::from_str(&processed_content).map_err(|e| InventoryError::ConfigValidationError {
            field: "toml_parsing".to_string(),
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// Replaces `${VAR}` with the variable's value; unset variables are left as is.
    fn substitute_env_vars(content: &str) -> String {
        env_placeholder()
            .replace_all(content, |caps: &regex::Captures| {
                let var_name = &caps[1];
                std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
            })
            .into_owned()
    }

    pub fn name(&self) -> &str {
        self.inventory.name.as_deref().unwrap_or("mochila")
    }

    /// Explicit capacity first, then the profile preset.
    pub fn capacity(&self) -> Option<usize> {
        self.inventory
            .capacity
            .or_else(|| self.inventory.profile.map(|p| p.capacity()))
    }

    pub fn removal_policy(&self) -> RemovalPolicy {
        self.inventory
            .removal_policy
            .or_else(|| self.inventory.profile.map(|p| p.removal_policy()))
            .unwrap_or_default()
    }

    /// Checks the inventory section and every seed item.
    pub fn validate_config(&self) -> Result<()> {
        if let Some(name) = &self.inventory.name {
            validation::validate_non_empty_string("inventory.name", name)?;
        }

        match self.inventory.backend {
            Backend::Array => {
                let capacity = *validation::validate_required_field(
                    "inventory.capacity",
                    &self.capacity(),
                )?;
                validation::validate_positive_number("inventory.capacity", capacity, 1)?;
                if self.items.len() > capacity {
                    return Err(InventoryError::InvalidConfigValueError {
                        field: "items".to_string(),
                        value: self.items.len().to_string(),
                        reason: format!(
                            "{} items do not fit in capacity {}",
                            self.items.len(),
                            capacity
                        ),
                    });
                }
            }
            Backend::Linked => {
                if let Some(budget) = self.inventory.node_budget {
                    validation::validate_positive_number("inventory.node_budget", budget, 1)?;
                    if self.items.len() > budget {
                        return Err(InventoryError::InvalidConfigValueError {
                            field: "items".to_string(),
                            value: self.items.len().to_string(),
                            reason: format!(
                                "{} items exceed node budget {}",
                                self.items.len(),
                                budget
                            ),
                        });
                    }
                }
            }
        }

        let mut seen = HashSet::new();
        for (index, item) in self.items.iter().enumerate() {
            item.validate().map_err(|e| match e {
                InventoryError::InvalidConfigValueError { field, value, reason } => {
                    InventoryError::InvalidConfigValueError {
                        field: format!("items[{}].{}", index, field),
                        value,
                        reason,
                    }
                }
                other => other,
            })?;
            if !seen.insert(item.name.as_str()) {
                // unique names are a convention, removal and search hit the first one
                tracing::warn!("⚠️ Duplicate item name '{}' in inventory file", item.name);
            }
        }

        Ok(())
    }

    /// Builds the configured backend and inserts the seed items in file order.
    pub fn build_inventory(&self) -> Result<Inventory> {
        let mut inventory = match self.inventory.backend {
            Backend::Array => {
                let capacity = *validation::validate_required_field(
                    "inventory.capacity",
                    &self.capacity(),
                )?;
                Inventory::array(capacity, self.removal_policy())
            }
            Backend::Linked => Inventory::linked(self.inventory.node_budget),
        };

        for item in &self.items {
            inventory.insert(item.clone())?;
        }

        tracing::debug!(
            "Seeded {} backend '{}' with {} items",
            inventory.backend(),
            self.name(),
            inventory.len()
        );

        Ok(inventory)
    }
}

impl Default for InventoryConfig {
    fn default() -> Self {
        Self {
            inventory: InventorySection {
                profile: Some(Profile::default()),
                ..InventorySection::default()
            },
            items: Vec::new(),
        }
    }
}

impl Validate for InventoryConfig {
    fn validate(&self) -> Result<()> {
        self.validate_config()
    }
}
