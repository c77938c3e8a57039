// ===== artiforge/src/evaluator/rolls.rs =====
//! Roll-efficiency scoring: each substat line is expressed as a count of
//! statistically ideal rolls, and the character total is normalized against
//! the genre's expected-roll baseline to a 0-100-ish score.

use crate::error::{AfResult, ArtiForgeError};
use crate::evaluator::eval_model::{ArtifactEval, CharacterEval};
use crate::evaluator::tables::ScoringTables;
use crate::evaluator::{check_sub_stat_cap, round2};
use crate::genre::Genre;
use crate::model::{Artifact, Character};
use crate::stat::{Stat, StatKind, StatNature};
use crate::weights::StatWeightProfile;

#[derive(Debug, Clone, Copy)]
pub struct RollEfficiency {
    tables: ScoringTables,
}

impl RollEfficiency {
    pub fn new(tables: ScoringTables) -> Self {
        Self { tables }
    }

    /// Effective rolls of one substat line.
    ///
    /// Flat HP/ATK/DEF lines are converted to their percent counterpart for
    /// the table lookup, with the character's base stat / 100 as the
    /// normalizer; percent and special lines use the value as-is. Kinds
    /// outside the benefit table and zero-weight kinds contribute exactly 0.
    ///
    /// `weight_of` is queried with the *scoring* kind (the percent
    /// counterpart for flat lines); the two call paths below differ only in
    /// how they produce it.
    fn effective_roll<F>(&self, stat: &Stat, character: &Character, weight_of: F) -> AfResult<f64>
    where
        F: Fn(StatKind) -> f64,
    {
        let (scoring_kind, base_prop) = match stat.kind.nature() {
            StatNature::Flat => {
                let percent = stat.kind.percent_counterpart().ok_or_else(|| {
                    ArtiForgeError::DataShape(format!(
                        "flat stat {} has no percent counterpart",
                        stat.kind
                    ))
                })?;
                let base_kind = stat.kind.base_stat().ok_or_else(|| {
                    ArtiForgeError::DataShape(format!(
                        "flat stat {} has no base stat mapping",
                        stat.kind
                    ))
                })?;
                let base = character.base_stat(base_kind).ok_or_else(|| {
                    ArtiForgeError::DataShape(format!(
                        "character {} is missing base stat {}",
                        character.id, base_kind
                    ))
                })?;
                (percent, base / 100.0)
            }
            _ => (stat.kind, 1.0),
        };

        let Some(benefit) = self.tables.roll_benefit(scoring_kind) else {
            return Ok(0.0);
        };
        let weight = weight_of(scoring_kind);
        if weight == 0.0 {
            return Ok(0.0);
        }

        Ok(round2(stat.value * weight / base_prop / benefit))
    }

    fn evaluate_with<F>(
        &self,
        artifact: &Artifact,
        character: &Character,
        weight_of: F,
    ) -> AfResult<ArtifactEval>
    where
        F: Fn(StatKind) -> f64,
    {
        check_sub_stat_cap(artifact)?;
        let mut result = ArtifactEval::new(artifact.clone());
        for sub_stat in &artifact.sub_stats {
            let rolls = self.effective_roll(sub_stat, character, &weight_of)?;
            result.effective_rolls.insert(sub_stat.kind, rolls);
        }
        Ok(result)
    }

    /// Genre-driven item evaluation: weights are the genre's graded
    /// 0 / 0.5 / 1.0 values. This is the path `evaluate_character` takes.
    pub fn evaluate_artifact(
        &self,
        artifact: &Artifact,
        character: &Character,
        genre: &Genre,
    ) -> AfResult<ArtifactEval> {
        self.evaluate_with(artifact, character, |kind| genre.stat_weight(kind))
    }

    /// Profile-driven item evaluation: an explicit numeric weight table is
    /// binarized to 0 / 1 (any positive weight counts in full). Kept as a
    /// separate entry point rather than unified with the graded path; the
    /// formula is identical, only the weight source differs.
    pub fn evaluate_artifact_binary(
        &self,
        artifact: &Artifact,
        character: &Character,
        weights: &StatWeightProfile,
    ) -> AfResult<ArtifactEval> {
        self.evaluate_with(artifact, character, |kind| {
            if weights.get(&kind).copied().unwrap_or(0.0) > 0.0 {
                1.0
            } else {
                0.0
            }
        })
    }

    /// Full character evaluation: derive the genre from the resolved
    /// profile, score every equipped item, then normalize the genre-weighted
    /// roll total against the genre's expected baseline.
    pub fn evaluate_character(
        &self,
        character: &Character,
        weights: &StatWeightProfile,
    ) -> AfResult<CharacterEval> {
        let genre = Genre::from_weights(weights);
        let expected = genre.expected_effective_rolls()?;

        let artifacts = character
            .artifacts
            .iter()
            .map(|a| self.evaluate_artifact(a, character, &genre))
            .collect::<AfResult<Vec<_>>>()?;

        let total_effective_rolls: f64 = artifacts.iter().map(ArtifactEval::total_effective_rolls).sum();
        let weighted: f64 = artifacts
            .iter()
            .map(|a| a.weighted_effective_rolls(&genre))
            .sum();

        let mut result = CharacterEval::new(character.clone());
        result.total_score = round2(weighted * 100.0 / expected);
        result.total_effective_rolls = total_effective_rolls;
        result.genre = Some(genre);
        result.artifacts = artifacts;
        Ok(result)
    }
}
