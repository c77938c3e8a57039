// ===== artiforge/src/model/artifact.rs =====
use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumIter, EnumString};

use crate::stat::Stat;

/// Game-imposed cap on secondary attributes per item. The substat list is
/// fixed once the item is unlocked; later rolls only deepen existing lines.
pub const MAX_SUB_STATS: usize = 4;

/// The five fixed equipment slots. Wire names are the vendor equip types.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, EnumString, Display, EnumIter,
)]
pub enum Slot {
    #[strum(serialize = "EQUIP_BRACER")]
    Flower,
    #[strum(serialize = "EQUIP_NECKLACE")]
    Plume,
    #[strum(serialize = "EQUIP_SHOES")]
    Sands,
    #[strum(serialize = "EQUIP_RING")]
    Goblet,
    #[strum(serialize = "EQUIP_DRESS")]
    Circlet,
}

/// An equippable artifact: one primary attribute plus up to
/// [`MAX_SUB_STATS`] secondary rolls.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Artifact {
    pub id: u64,
    pub set_id: u64,
    pub set_name: String,
    pub level: u32,
    pub slot: Slot,
    pub rarity: u8,
    pub main_stat: Stat,
    pub sub_stats: Vec<Stat>,
    /// Raw per-roll substat ids as they appear in the payload. Their count
    /// (one entry per roll, including repeats) feeds [`quality`](Self::quality).
    pub sub_stat_ids: Vec<u32>,
}

impl Artifact {
    /// Number of substat lines the item unlocked at drop time: total rolls
    /// minus the one gained every four levels.
    pub fn quality(&self) -> usize {
        self.sub_stat_ids
            .len()
            .saturating_sub(self.level as usize / 4)
    }
}
