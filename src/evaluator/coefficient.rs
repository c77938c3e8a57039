// ===== artiforge/src/evaluator/coefficient.rs =====
//! Coefficient scoring: a linear combination of substat values against a
//! fixed empirical factor table, historically the easiest score to
//! cross-check against community tools.

use crate::error::AfResult;
use crate::evaluator::eval_model::{ArtifactEval, CharacterEval};
use crate::evaluator::tables::{FactorVariant, ScoringTables};
use crate::evaluator::{check_sub_stat_cap, round1};
use crate::model::{Artifact, Character};
use crate::stat::StatKind;
use crate::weights::StatWeightProfile;

/// Flat bonus for a crit-rate or crit-damage primary attribute: a crit main
/// stat is guaranteed high value regardless of its substats.
const CRIT_MAIN_STAT_BONUS: f64 = 20.0;

#[derive(Debug, Clone, Copy)]
pub struct Coefficient {
    variant: FactorVariant,
    tables: ScoringTables,
}

impl Coefficient {
    pub fn new(variant: FactorVariant, tables: ScoringTables) -> Self {
        Self { variant, tables }
    }

    /// Item score: per substat in the factor table,
    /// `value x factor x weight / 100`, each term rounded to one decimal at
    /// accumulation and the total rounded to the nearest integer, exactly as
    /// the published score is quoted. Kinds outside the table contribute 0.
    pub fn evaluate_artifact(
        &self,
        artifact: &Artifact,
        weights: &StatWeightProfile,
    ) -> AfResult<ArtifactEval> {
        check_sub_stat_cap(artifact)?;
        let mut result = ArtifactEval::new(artifact.clone());

        for sub_stat in &artifact.sub_stats {
            if let Some(factor) = self.tables.factor(self.variant, sub_stat.kind) {
                let weight = weights.get(&sub_stat.kind).copied().unwrap_or(0.0);
                result.score += round1(sub_stat.value * factor * weight / 100.0);
            }
        }

        result.score = result.score.round();
        if matches!(
            artifact.main_stat.kind,
            StatKind::CritRate | StatKind::CritDmg
        ) {
            result.score += CRIT_MAIN_STAT_BONUS;
        }

        Ok(result)
    }

    /// Character score is the plain sum of item scores; unlike the
    /// roll-efficiency algorithm there is no genre renormalization.
    pub fn evaluate_character(
        &self,
        character: &Character,
        weights: &StatWeightProfile,
    ) -> AfResult<CharacterEval> {
        let artifacts = character
            .artifacts
            .iter()
            .map(|a| self.evaluate_artifact(a, weights))
            .collect::<AfResult<Vec<_>>>()?;

        let mut result = CharacterEval::new(character.clone());
        result.total_score = artifacts.iter().map(|a| a.score).sum();
        result.artifacts = artifacts;
        Ok(result)
    }
}
