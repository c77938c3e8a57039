// ===== artiforge/src/evaluator/eval_model.rs =====
use std::collections::BTreeMap;

use serde::Serialize;

use crate::genre::Genre;
use crate::model::{Artifact, Character};
use crate::stat::StatKind;

/// Computed view over one artifact: the source item plus its per-kind
/// effective-roll measurements and score. Built fresh per evaluation; the
/// source is copied in, never mutated.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ArtifactEval {
    pub artifact: Artifact,
    /// Effective rolls keyed by the substat's original kind (flat lines stay
    /// keyed flat even though they score via their percent counterpart).
    /// Ordered so repeated evaluations serialize bit-identically.
    pub effective_rolls: BTreeMap<StatKind, f64>,
    pub score: f64,
}

impl ArtifactEval {
    pub fn new(artifact: Artifact) -> Self {
        Self {
            artifact,
            effective_rolls: BTreeMap::new(),
            score: 0.0,
        }
    }

    /// Unweighted sum over all substat lines.
    pub fn total_effective_rolls(&self) -> f64 {
        self.effective_rolls.values().sum()
    }

    /// Genre-weighted sum, the second weighting pass of the roll-efficiency
    /// score: per-line rolls answer "how good is this roll in isolation",
    /// this re-weights cross-item totals by what the genre actually values.
    pub fn weighted_effective_rolls(&self, genre: &Genre) -> f64 {
        self.effective_rolls
            .iter()
            .map(|(kind, rolls)| rolls * genre.stat_weight(*kind))
            .sum()
    }
}

/// Computed view over one character: the source plus per-item evaluations
/// and aggregate totals.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CharacterEval {
    pub character: Character,
    /// The genre that drove evaluation; `None` under the coefficient
    /// algorithm, which never derives one.
    pub genre: Option<Genre>,
    pub artifacts: Vec<ArtifactEval>,
    pub total_score: f64,
    pub total_effective_rolls: f64,
}

impl CharacterEval {
    pub fn new(character: Character) -> Self {
        Self {
            character,
            genre: None,
            artifacts: Vec::new(),
            total_score: 0.0,
            total_effective_rolls: 0.0,
        }
    }
}
