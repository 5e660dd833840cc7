use clap::Parser;
use small_inventory::utils::error::{ErrorSeverity, InventoryError};
use small_inventory::utils::{logger, render, validation::Validate};
use small_inventory::{CliConfig, Session};

fn main() -> anyhow::Result<()> {
    let cli = CliConfig::parse();

    if cli.json_logs {
        logger::init_json_logger(cli.verbose);
    } else {
        logger::init_cli_logger(cli.verbose);
    }

    tracing::info!("🎒 Starting small-inventory");
    if cli.verbose {
        tracing::debug!("CLI config: {:?}", cli);
    }

    if let Err(e) = run(&cli) {
        exit_with(e);
    }

    Ok(())
}

fn run(cli: &CliConfig) -> small_inventory::Result<()> {
    let config = cli.load_inventory_config()?;

    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        tracing::error!("💡 Suggestion: {}", e.recovery_suggestion());
        return Err(e);
    }

    let inventory = config.build_inventory()?;
    tracing::info!(
        "📦 Inventory '{}' ready: {} backend, {} items",
        config.name(),
        inventory.backend(),
        inventory.len()
    );

    let mut session = Session::new(config.name(), inventory);
    for command in cli.commands()? {
        let outcome = session.execute(command)?;
        let rendered = render::render_outcome(&outcome, cli.format)?;
        println!("{}", rendered.trim_end_matches('\n'));
    }

    Ok(())
}

fn exit_with(e: InventoryError) -> ! {
    tracing::error!(
        "❌ Command failed: {} (Category: {:?}, Severity: {:?})",
        e,
        e.category(),
        e.severity()
    );
    tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());

    eprintln!("❌ {}", e.user_friendly_message());
    eprintln!("💡 {}", e.recovery_suggestion());

    let exit_code = match e.severity() {
        ErrorSeverity::Low => 0,
        ErrorSeverity::Medium => 2,
        ErrorSeverity::High => 1,
        ErrorSeverity::Critical => 3,
    };
    std::process::exit(exit_code)
}
