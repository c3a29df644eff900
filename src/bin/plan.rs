//! One-shot execution planning from the command line.
//!
//! ```text
//! plan --side buy --amount 1.5 --data-folder data/exchanges
//! ```
//!
//! Prints the plan as JSON on stdout.

use anyhow::Context;
use clap::Parser;
use execution_planner::api::rest::ExecutionPlanResponse;
use execution_planner::application::services::{ExecutionPlanner, PlannerConfig, TieBreak};
use execution_planner::config::LoggingConfig;
use execution_planner::domain::value_objects::{OrderSide, Quantity};
use execution_planner::infrastructure::persistence::JsonExchangeRepository;
use execution_planner::infrastructure::persistence::json::exchange_repository::DEFAULT_DATA_FOLDER;
use execution_planner::logging::init_logging;
use rust_decimal::Decimal;
use std::path::PathBuf;
use std::sync::Arc;

#[derive(Parser, Debug)]
#[command(author, version, about = "Plan best execution across exchange order books")]
struct Cli {
    /// Order side: buy or sell
    #[arg(long)]
    side: OrderSide,

    /// Quantity of the base asset to fill
    #[arg(long)]
    amount: Decimal,

    /// Folder with one JSON file per exchange
    #[arg(long, default_value = DEFAULT_DATA_FOLDER)]
    data_folder: PathBuf,

    /// Ordering between equally priced orders: input_order or exchange_id
    #[arg(long, default_value_t = TieBreak::InputOrder)]
    tie_break: TieBreak,

    /// Print the domain plan instead of the API response shape
    #[arg(long, default_value_t = false)]
    raw: bool,

    /// Log level, written to stderr
    #[arg(long, default_value = "warn")]
    log_level: String,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    init_logging(&LoggingConfig {
        level: cli.log_level.clone(),
        json: false,
    })
    .context("initialising logging")?;

    anyhow::ensure!(cli.amount > Decimal::ZERO, "amount must be positive");

    let repository = Arc::new(JsonExchangeRepository::new(cli.data_folder.clone()));
    let planner = ExecutionPlanner::new(
        repository,
        PlannerConfig::default().with_tie_break(cli.tie_break),
    );

    let plan = planner
        .plan(cli.side, Quantity::new(cli.amount))
        .await
        .with_context(|| format!("planning against {}", cli.data_folder.display()))?;

    let output = if cli.raw {
        serde_json::to_string_pretty(&plan)?
    } else {
        serde_json::to_string_pretty(&ExecutionPlanResponse::from(&plan))?
    };
    println!("{output}");
    Ok(())
}
