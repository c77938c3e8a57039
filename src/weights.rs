// ===== artiforge/src/weights.rs =====
use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::stat::StatKind;

/// Per-character preference weights on the 0-100 scale the published weight
/// tables use. A missing kind means weight 0.
pub type StatWeightProfile = HashMap<StatKind, f64>;

/// Resolved weight snapshot: character id -> profile. This is a plain map,
/// not a live store handle; refreshing the backing store mid-batch cannot
/// affect evaluations already holding a snapshot.
pub type WeightTable = HashMap<u64, StatWeightProfile>;

/// One row of the published per-character weight table, in the exact column
/// layout of the distributed CSV (and of the embedded store).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CharacterStatWeight {
    pub id: u64,
    pub character: String,
    pub hp_percent: u32,
    pub attack_percent: u32,
    pub defense_percent: u32,
    pub critical: u32,
    pub critical_hurt: u32,
    pub element_mastery: u32,
    pub charge_efficiency: u32,
    pub hp: u32,
    pub attack: u32,
    pub defense: u32,
}

impl CharacterStatWeight {
    pub fn to_profile(&self) -> StatWeightProfile {
        HashMap::from([
            (StatKind::HpPercent, f64::from(self.hp_percent)),
            (StatKind::AtkPercent, f64::from(self.attack_percent)),
            (StatKind::DefPercent, f64::from(self.defense_percent)),
            (StatKind::CritRate, f64::from(self.critical)),
            (StatKind::CritDmg, f64::from(self.critical_hurt)),
            (StatKind::ElementalMastery, f64::from(self.element_mastery)),
            (StatKind::EnergyRecharge, f64::from(self.charge_efficiency)),
            (StatKind::Hp, f64::from(self.hp)),
            (StatKind::Atk, f64::from(self.attack)),
            (StatKind::Def, f64::from(self.defense)),
        ])
    }
}
