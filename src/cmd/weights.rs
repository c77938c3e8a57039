use crate::reports;
use clap::Args;
use tracing::info;

use artiforge::error::AfResult;
use artiforge::store::WeightStore;

#[derive(Args, Debug, Clone)]
pub struct WeightsArgs {
    /// Import rows from a published weight CSV before showing the table.
    #[arg(long)]
    pub import: Option<String>,
}

pub fn run(args: WeightsArgs, store: &mut WeightStore, db_path: &str) -> AfResult<()> {
    if let Some(csv_path) = &args.import {
        let count = store.import_csv(csv_path)?;
        store.save_to_file(db_path)?;
        info!("Synced {} rows into {}", count, db_path);
    }

    if store.is_empty() {
        info!("Weight store is empty. Import a table with --import <csv>.");
        return Ok(());
    }
    reports::print_weight_table(store);
    Ok(())
}
