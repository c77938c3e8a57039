// ===== artiforge/src/evaluator/tables.rs =====
//! Empirical scoring constants, kept as data behind a small provider so a
//! game rebalance patches a table, not algorithm code.

use clap::ValueEnum;
use strum_macros::{Display, EnumString};

use crate::stat::StatKind;

/// Which published coefficient table the coefficient algorithm multiplies
/// against. Both circulate in the community; the refined variant carries
/// more decimal precision for the percent lines.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum, EnumString, Display)]
#[strum(serialize_all = "kebab-case")]
pub enum FactorVariant {
    #[default]
    Community,
    Refined,
}

/// Expected per-roll yield of one substat line, in percent-nature units.
/// Kinds absent here (flat lines score via their percent counterpart,
/// damage bonuses never roll as substats) contribute zero effective rolls.
const ROLL_BENEFIT: &[(StatKind, f64)] = &[
    (StatKind::CritRate, 3.3),
    (StatKind::CritDmg, 6.6),
    (StatKind::AtkPercent, 4.975),
    (StatKind::HpPercent, 4.975),
    (StatKind::DefPercent, 6.2),
    (StatKind::ElementalMastery, 19.75),
    (StatKind::EnergyRecharge, 5.5),
];

const COMMUNITY_FACTORS: &[(StatKind, f64)] = &[
    (StatKind::CritRate, 2.0),
    (StatKind::CritDmg, 1.0),
    (StatKind::AtkPercent, 1.33),
    (StatKind::HpPercent, 1.33),
    (StatKind::DefPercent, 1.06),
    (StatKind::Atk, 0.199),
    (StatKind::Hp, 0.01716),
    (StatKind::Def, 0.2211),
    (StatKind::ElementalMastery, 0.33),
    (StatKind::EnergyRecharge, 1.1979),
];

const REFINED_FACTORS: &[(StatKind, f64)] = &[
    (StatKind::CritRate, 2.0),
    (StatKind::CritDmg, 1.0),
    (StatKind::AtkPercent, 1.331429),
    (StatKind::HpPercent, 1.331429),
    (StatKind::DefPercent, 1.066362),
    (StatKind::Atk, 0.199146),
    (StatKind::Hp, 0.012995),
    (StatKind::Def, 0.162676),
    (StatKind::ElementalMastery, 0.332857),
    (StatKind::EnergyRecharge, 1.197943),
];

/// Lookup provider over the fixed tables. Holds static slices, so it is
/// `Copy` and free to hand to each evaluation.
#[derive(Debug, Clone, Copy)]
pub struct ScoringTables {
    roll_benefit: &'static [(StatKind, f64)],
    community: &'static [(StatKind, f64)],
    refined: &'static [(StatKind, f64)],
}

impl Default for ScoringTables {
    fn default() -> Self {
        Self {
            roll_benefit: ROLL_BENEFIT,
            community: COMMUNITY_FACTORS,
            refined: REFINED_FACTORS,
        }
    }
}

fn lookup(table: &[(StatKind, f64)], kind: StatKind) -> Option<f64> {
    table.iter().find(|(k, _)| *k == kind).map(|(_, v)| *v)
}

impl ScoringTables {
    pub fn roll_benefit(&self, kind: StatKind) -> Option<f64> {
        lookup(self.roll_benefit, kind)
    }

    pub fn factor(&self, variant: FactorVariant, kind: StatKind) -> Option<f64> {
        let table = match variant {
            FactorVariant::Community => self.community,
            FactorVariant::Refined => self.refined,
        };
        lookup(table, kind)
    }
}
