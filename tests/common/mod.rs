#![allow(dead_code)] // Not every integration test uses every helper.

use std::collections::{BTreeMap, HashMap};

use artiforge::model::{Artifact, Character, Slot};
use artiforge::stat::{BaseStatKind, Stat, StatKind};
use artiforge::weights::{StatWeightProfile, WeightTable};

/// Builder for Artifact to clean up tests
pub struct ArtifactBuilder {
    artifact: Artifact,
}

impl ArtifactBuilder {
    pub fn new(slot: Slot) -> Self {
        Self {
            artifact: Artifact {
                id: 91_000,
                set_id: 15_001,
                set_name: "Test Set".to_string(),
                level: 20,
                slot,
                rarity: 5,
                main_stat: Stat::new(StatKind::AtkPercent, 46.6),
                sub_stats: Vec::new(),
                sub_stat_ids: Vec::new(),
            },
        }
    }

    pub fn id(mut self, id: u64) -> Self {
        self.artifact.id = id;
        self
    }

    pub fn level(mut self, level: u32) -> Self {
        self.artifact.level = level;
        self
    }

    pub fn rarity(mut self, rarity: u8) -> Self {
        self.artifact.rarity = rarity;
        self
    }

    pub fn main(mut self, kind: StatKind, value: f64) -> Self {
        self.artifact.main_stat = Stat::new(kind, value);
        self
    }

    pub fn sub(mut self, kind: StatKind, value: f64) -> Self {
        self.artifact.sub_stats.push(Stat::new(kind, value));
        self
    }

    pub fn sub_stat_ids(mut self, ids: &[u32]) -> Self {
        self.artifact.sub_stat_ids = ids.to_vec();
        self
    }

    pub fn build(self) -> Artifact {
        self.artifact
    }
}

/// Builder for Character to clean up tests
pub struct CharacterBuilder {
    character: Character,
}

impl CharacterBuilder {
    pub fn new(id: u64) -> Self {
        Self {
            character: Character {
                id,
                name: format!("char-{id}"),
                level: 90,
                element: None,
                friendship: 10,
                base_stats: BTreeMap::from([
                    (BaseStatKind::BaseHp, 12_000.0),
                    (BaseStatKind::BaseAtk, 800.0),
                    (BaseStatKind::BaseDef, 700.0),
                ]),
                artifacts: Vec::new(),
            },
        }
    }

    pub fn name(mut self, name: &str) -> Self {
        self.character.name = name.to_string();
        self
    }

    pub fn base_stat(mut self, kind: BaseStatKind, value: f64) -> Self {
        self.character.base_stats.insert(kind, value);
        self
    }

    pub fn no_base_stats(mut self) -> Self {
        self.character.base_stats.clear();
        self
    }

    pub fn artifact(mut self, artifact: Artifact) -> Self {
        self.character.artifacts.push(artifact);
        self
    }

    pub fn build(self) -> Character {
        self.character
    }
}

pub fn profile(entries: &[(StatKind, f64)]) -> StatWeightProfile {
    entries.iter().copied().collect()
}

pub fn weight_table(id: u64, entries: &[(StatKind, f64)]) -> WeightTable {
    HashMap::from([(id, profile(entries))])
}

/// The five-attribute ATK/Crit/Recharge profile at full published weight.
pub fn atk_recharge_crit_profile() -> StatWeightProfile {
    profile(&[
        (StatKind::Atk, 100.0),
        (StatKind::AtkPercent, 100.0),
        (StatKind::EnergyRecharge, 100.0),
        (StatKind::CritRate, 100.0),
        (StatKind::CritDmg, 100.0),
    ])
}
