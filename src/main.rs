// ===== artiforge/src/main.rs =====
use clap::{Parser, Subcommand};
use std::path::Path;
use std::process;
use tracing::error;

use artiforge::store::WeightStore;

mod cmd;
mod reports;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Path of the embedded weight store.
    #[arg(global = true, long, default_value = "data/weights.json")]
    db: String,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Score the artifacts of every showcased character.
    Evaluate(cmd::evaluate::EvaluateArgs),
    /// Import or inspect the per-character weight table.
    Weights(cmd::weights::WeightsArgs),
}

fn main() {
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    let mut store = if Path::new(&cli.db).exists() {
        WeightStore::load_from_file(&cli.db).unwrap_or_else(|e| {
            error!("Failed to load weight store '{}': {}", cli.db, e);
            process::exit(1);
        })
    } else {
        WeightStore::new()
    };

    let result = match cli.command {
        Commands::Evaluate(args) => cmd::evaluate::run(args, &store),
        Commands::Weights(args) => cmd::weights::run(args, &mut store, &cli.db),
    };

    if let Err(e) = result {
        error!("{}", e);
        process::exit(1);
    }
}
