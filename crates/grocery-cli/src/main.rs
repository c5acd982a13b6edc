//! Grocery CLI - manage lists, stock and exports from the command line.

mod cli;
mod commands;
mod error;
mod seed;
#[cfg(test)]
mod tests;

use clap::Parser;

use crate::cli::{Cli, Commands};
use crate::commands::add::run_add;
use crate::commands::completions::run_completions;
use crate::commands::export::run_export;
use crate::commands::items::run_items;
use crate::commands::lists::run_lists;
use crate::commands::products::run_products;
use crate::commands::recolor::run_recolor;
use crate::error::CliError;

#[tokio::main]
async fn main() {
    if let Err(error) = run().await {
        eprintln!("Error: {error}");
        std::process::exit(1);
    }
}

async fn run() -> Result<(), CliError> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("grocery=info".parse().unwrap()),
        )
        .init();

    let cli = Cli::parse();
    let data = cli.data.as_deref();

    match &cli.command {
        Commands::Lists { json } => run_lists(data, *json).await?,
        Commands::Items { list, json } => run_items(data, list, *json).await?,
        Commands::Products { list, search, json } => {
            run_products(data, list, search.as_deref(), *json).await?;
        }
        Commands::Add { list, product } => run_add(data, list, product).await?,
        Commands::Recolor { list, color, name } => {
            run_recolor(data, list, color.as_deref(), name.as_deref()).await?;
        }
        Commands::Export { list, output } => run_export(data, list, output.as_deref()).await?,
        Commands::Completions { shell, output } => run_completions(*shell, output.as_deref())?,
    }

    Ok(())
}
