// ===== artiforge/src/genre.rs =====
use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};
use strum::IntoEnumIterator;
use strum_macros::{Display, EnumIter, EnumString};

use crate::error::{AfResult, ArtiForgeError};
use crate::stat::StatKind;
use crate::weights::StatWeightProfile;

/// The substat kinds that count toward a genre's expected-roll baseline.
/// Flat HP/ATK/DEF may be effective but never widen the baseline.
pub const COUNTABLE_STATS: [StatKind; 7] = [
    StatKind::HpPercent,
    StatKind::AtkPercent,
    StatKind::DefPercent,
    StatKind::EnergyRecharge,
    StatKind::ElementalMastery,
    StatKind::CritRate,
    StatKind::CritDmg,
];

/// A named build archetype: the set of attributes considered strategically
/// relevant for a broad class of characters. Used as the fallback weight
/// source and to derive the expected-roll baseline a character score is
/// normalized against.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Genre {
    pub name: String,
    /// Ordered so a genre embedded in evaluation output serializes
    /// deterministically.
    pub effective_stats: BTreeSet<StatKind>,
}

/// The ready-made archetypes shipped with the engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, EnumString, Display)]
#[strum(serialize_all = "kebab-case")]
pub enum GenrePreset {
    Crit,
    AtkCrit,
    AtkRechargeCrit,
    AtkMasteryCrit,
    AtkHpMasteryCrit,
}

impl GenrePreset {
    pub fn genre(self) -> Genre {
        let stats: &[StatKind] = match self {
            Self::Crit => &[StatKind::CritRate, StatKind::CritDmg],
            Self::AtkCrit => &[
                StatKind::Atk,
                StatKind::AtkPercent,
                StatKind::CritRate,
                StatKind::CritDmg,
            ],
            Self::AtkRechargeCrit => &[
                StatKind::Atk,
                StatKind::AtkPercent,
                StatKind::EnergyRecharge,
                StatKind::CritRate,
                StatKind::CritDmg,
            ],
            Self::AtkMasteryCrit => &[
                StatKind::Atk,
                StatKind::AtkPercent,
                StatKind::ElementalMastery,
                StatKind::CritRate,
                StatKind::CritDmg,
            ],
            Self::AtkHpMasteryCrit => &[
                StatKind::Atk,
                StatKind::AtkPercent,
                StatKind::Hp,
                StatKind::HpPercent,
                StatKind::ElementalMastery,
                StatKind::CritRate,
                StatKind::CritDmg,
            ],
        };
        Genre {
            name: self.to_string(),
            effective_stats: stats.iter().copied().collect(),
        }
    }

    /// The archetype used when a character has no published weight row.
    pub fn fallback() -> Self {
        Self::AtkRechargeCrit
    }
}

impl Genre {
    /// Derives a genre from a resolved weight profile: any kind with a
    /// positive weight is effective. Published tables grade relevance via
    /// the magnitude; the genre keeps only membership and applies its own
    /// grading in [`stat_weight`](Self::stat_weight).
    pub fn from_weights(weights: &StatWeightProfile) -> Self {
        Self {
            name: "derived".to_string(),
            effective_stats: weights
                .iter()
                .filter(|(_, w)| **w > 0.0)
                .map(|(k, _)| *k)
                .collect(),
        }
    }

    /// Full 0-100 weights for every effective stat, the shape the external
    /// weight tables use.
    pub fn effective_stat_weights(&self) -> StatWeightProfile {
        self.effective_stats.iter().map(|k| (*k, 100.0)).collect()
    }

    /// Graded weight of a kind under this genre: 1.0 for effective stats,
    /// discounted to 0.5 for recharge and mastery (they contribute less
    /// value per roll than crit or attack lines), 0.0 otherwise.
    pub fn stat_weight(&self, kind: StatKind) -> f64 {
        if !self.effective_stats.contains(&kind) {
            return 0.0;
        }
        match kind {
            StatKind::EnergyRecharge | StatKind::ElementalMastery => 0.5,
            _ => 1.0,
        }
    }

    /// How many countable kinds this genre marks effective.
    pub fn countable_effective(&self) -> usize {
        COUNTABLE_STATS
            .iter()
            .filter(|k| self.effective_stats.contains(k))
            .count()
    }

    /// The expected effective-roll total a fully farmed set reaches for this
    /// genre. Empirical lookup keyed on the countable-stat count; a count
    /// outside 2..=7 has no defined baseline and is a configuration error,
    /// never a silent default.
    pub fn expected_effective_rolls(&self) -> AfResult<f64> {
        let count = self.countable_effective();
        let expected = match count {
            2 => 18.0,
            3 => 22.0,
            4 => 25.0,
            5 => 28.0,
            6 => 31.0,
            7 => 34.0,
            _ => {
                return Err(ArtiForgeError::Config(format!(
                    "genre '{}' has {} countable effective stats, expected 2..=7",
                    self.name, count
                )))
            }
        };
        Ok(expected)
    }
}

pub fn all_presets() -> Vec<Genre> {
    GenrePreset::iter().map(GenrePreset::genre).collect()
}
