// ===== artiforge/src/evaluator/mod.rs =====
pub mod coefficient;
pub mod eval_model;
pub mod rolls;
pub mod tables;

use rayon::prelude::*;

pub use self::coefficient::Coefficient;
pub use self::eval_model::{ArtifactEval, CharacterEval};
pub use self::rolls::RollEfficiency;
pub use self::tables::{FactorVariant, ScoringTables};

use crate::error::{AfResult, ArtiForgeError};
use crate::genre::GenrePreset;
use crate::model::{Artifact, Character, Player, MAX_SUB_STATS};
use crate::weights::{StatWeightProfile, WeightTable};

/// The scoring strategy, fixed at construction. Adding a strategy means
/// adding a variant here; the orchestrator contract does not change.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Algorithm {
    RollEfficiency,
    Coefficient(FactorVariant),
}

/// The evaluation orchestrator: resolves a character's weight profile and
/// delegates to the configured algorithm. Pure and synchronous; every call
/// is a deterministic function of its inputs.
#[derive(Debug, Clone, Copy)]
pub struct Evaluator {
    algorithm: Algorithm,
    tables: ScoringTables,
}

impl Evaluator {
    pub fn new(algorithm: Algorithm) -> Self {
        Self::with_tables(algorithm, ScoringTables::default())
    }

    pub fn with_tables(algorithm: Algorithm, tables: ScoringTables) -> Self {
        Self { algorithm, tables }
    }

    pub fn algorithm(&self) -> Algorithm {
        self.algorithm
    }

    /// Weight resolution: the character's own profile if published, else the
    /// fallback genre's profile. An empty table means the weight cache was
    /// never populated; that is a configuration failure, not a per-character
    /// one, and scoring as zero instead would be worse than failing.
    fn resolve_profile(
        character: &Character,
        weights: &WeightTable,
    ) -> AfResult<StatWeightProfile> {
        if let Some(profile) = weights.get(&character.id) {
            Ok(profile.clone())
        } else if !weights.is_empty() {
            Ok(GenrePreset::fallback().genre().effective_stat_weights())
        } else {
            Err(ArtiForgeError::Config(
                "no weight data available".to_string(),
            ))
        }
    }

    /// Scores every artifact the character has equipped. The input is never
    /// mutated; the result is a fresh computed view.
    pub fn evaluate_character(
        &self,
        character: &Character,
        weights: &WeightTable,
    ) -> AfResult<CharacterEval> {
        let profile = Self::resolve_profile(character, weights)?;
        match self.algorithm {
            Algorithm::RollEfficiency => {
                RollEfficiency::new(self.tables).evaluate_character(character, &profile)
            }
            Algorithm::Coefficient(variant) => {
                Coefficient::new(variant, self.tables).evaluate_character(character, &profile)
            }
        }
    }

    /// Scores every character in a showcase. Characters evaluate in
    /// parallel; that needs no coordination since evaluation is pure and the
    /// weight table is a read-only snapshot.
    pub fn evaluate_player(&self, player: &Player, weights: &WeightTable) -> AfResult<Vec<CharacterEval>> {
        player
            .characters
            .par_iter()
            .map(|c| self.evaluate_character(c, weights))
            .collect()
    }
}

/// Upper-bound check on an item's substat list. The game fixes the line set
/// at unlock time; more than [`MAX_SUB_STATS`] lines means the payload is
/// corrupt or the catalog is stale.
pub(crate) fn check_sub_stat_cap(artifact: &Artifact) -> AfResult<()> {
    if artifact.sub_stats.len() > MAX_SUB_STATS {
        return Err(ArtiForgeError::DataShape(format!(
            "artifact {} carries {} sub stats, cap is {}",
            artifact.id,
            artifact.sub_stats.len(),
            MAX_SUB_STATS
        )));
    }
    Ok(())
}

pub(crate) fn round1(x: f64) -> f64 {
    (x * 10.0).round() / 10.0
}

pub(crate) fn round2(x: f64) -> f64 {
    (x * 100.0).round() / 100.0
}
