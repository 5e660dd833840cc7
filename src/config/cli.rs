use crate::config::toml_config::InventoryConfig;
use crate::core::session::Command;
use crate::domain::model::{Backend, Profile, Record, SearchMode, SortKey};
use crate::utils::error::Result;
use crate::utils::render::OutputFormat;
use crate::utils::validation::Validate;
use clap::{Parser, Subcommand};

#[derive(Debug, Clone, Parser)]
#[command(name = "small-inventory")]
#[command(about = "A backpack inventory with array and linked-list backends")]
pub struct CliConfig {
    /// Path to a TOML inventory file to seed the session from
    #[arg(short, long)]
    pub config: Option<String>,

    /// Override the backend from the inventory file
    #[arg(long)]
    pub backend: Option<Backend>,

    /// Capacity/removal preset: novice, adventurer or master
    #[arg(long)]
    pub profile: Option<Profile>,

    /// Override the array capacity
    #[arg(long)]
    pub capacity: Option<usize>,

    /// Output format: table, csv or json
    #[arg(long, default_value = "table", global = true)]
    pub format: OutputFormat,

    #[arg(short, long, help = "Enable verbose output", global = true)]
    pub verbose: bool,

    #[arg(long, help = "Emit logs as JSON lines", global = true)]
    pub json_logs: bool,

    #[command(subcommand)]
    pub command: CliCommand,
}

#[derive(Debug, Clone, Subcommand)]
pub enum CliCommand {
    /// List every item in container order
    List,
    /// Insert an item, then list the inventory
    Insert {
        #[arg(long)]
        name: String,
        #[arg(long)]
        category: String,
        #[arg(long, allow_negative_numbers = true)]
        quantity: i32,
    },
    /// Remove the first item with the given name
    Remove { name: String },
    /// Search for an item by name
    Search {
        name: String,
        #[arg(long, default_value = "sequential")]
        mode: SearchMode,
        /// Sort by name before searching (needed for binary search)
        #[arg(long)]
        sort_first: bool,
    },
    /// Sort the array backend by name, category or quantity
    Sort { key: SortKey },
    /// Time all three sort algorithms on copies of the current contents
    Bench,
}

impl CliConfig {
    /// Loads the inventory file, if any, then applies the command-line overrides.
    pub fn load_inventory_config(&self) -> Result<InventoryConfig> {
        let mut config = match &self.config {
            Some(path) => InventoryConfig::from_file(path)?,
            None => InventoryConfig::default(),
        };

        if let Some(backend) = self.backend {
            config.inventory.backend = backend;
        }
        if let Some(profile) = self.profile {
            config.inventory.profile = Some(profile);
        }
        if let Some(capacity) = self.capacity {
            config.inventory.capacity = Some(capacity);
        }

        Ok(config)
    }

    /// The session commands for this invocation, in execution order.
    pub fn commands(&self) -> Result<Vec<Command>> {
        let commands = match &self.command {
            CliCommand::List => vec![Command::List],
            CliCommand::Insert {
                name,
                category,
                quantity,
            } => {
                let record = Record::new(name.clone(), category.clone(), *quantity);
                record.validate()?;
                vec![Command::Insert(record), Command::List]
            }
            CliCommand::Remove { name } => vec![Command::Remove(name.clone())],
            CliCommand::Search {
                name,
                mode,
                sort_first,
            } => {
                let search = Command::Search {
                    name: name.clone(),
                    mode: *mode,
                };
                if *sort_first {
                    vec![Command::Sort(SortKey::Name), search]
                } else {
                    vec![search]
                }
            }
            CliCommand::Sort { key } => vec![Command::Sort(*key)],
            CliCommand::Bench => vec![Command::Bench],
        };
        Ok(commands)
    }
}
