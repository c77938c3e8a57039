use crate::reports;
use clap::Args;
use tracing::{info, warn};

use artiforge::config::EngineConfig;
use artiforge::error::AfResult;
use artiforge::evaluator::Evaluator;
use artiforge::ingest;
use artiforge::store::WeightStore;

#[derive(Args, Debug, Clone)]
pub struct EvaluateArgs {
    /// Path to a showcase payload JSON.
    #[arg(short, long)]
    pub player: String,

    /// Only evaluate characters whose name or id contains this filter.
    #[arg(long)]
    pub character: Option<String>,

    /// Print the full per-artifact breakdown for every character.
    #[arg(long, default_value_t = false)]
    pub detail: bool,

    #[command(flatten)]
    pub engine: EngineConfig,
}

pub fn run(args: EvaluateArgs, store: &WeightStore) -> AfResult<()> {
    let mut player = ingest::load_player_from_file(&args.player)?;

    // The payload has no localized names; patch in the store's where known.
    for character in &mut player.characters {
        if let Some(row) = store.get(character.id) {
            character.name = row.character.clone();
        }
    }

    if let Some(filter) = &args.character {
        let needle = filter.to_lowercase();
        player.characters.retain(|c| {
            c.name.to_lowercase().contains(&needle) || c.id.to_string().contains(&needle)
        });
        if player.characters.is_empty() {
            warn!("No showcased character matches '{}'", filter);
            return Ok(());
        }
    }

    let evaluator = Evaluator::new(args.engine.algorithm());
    info!(
        "Evaluating {} characters ({:?})",
        player.characters.len(),
        evaluator.algorithm()
    );

    let snapshot = store.snapshot();
    let evals = evaluator.evaluate_player(&player, &snapshot)?;

    reports::print_player_summary(&player, &evals);
    if args.detail {
        for eval in &evals {
            reports::print_character_report(eval);
        }
    }
    Ok(())
}
