//! Numeric `fightPropMap` keys for the base stats the engine de-flattens
//! against. The map carries dozens of derived panel values; only these
//! three matter for scoring.

use crate::stat::BaseStatKind;

pub const PROP_BASE_HP: &str = "1";
pub const PROP_BASE_ATK: &str = "4";
pub const PROP_BASE_DEF: &str = "7";

/// `propMap` key whose string value is the character level.
pub const PROP_LEVEL: &str = "4001";

pub fn base_stat_from_prop_id(id: &str) -> Option<BaseStatKind> {
    match id {
        PROP_BASE_HP => Some(BaseStatKind::BaseHp),
        PROP_BASE_ATK => Some(BaseStatKind::BaseAtk),
        PROP_BASE_DEF => Some(BaseStatKind::BaseDef),
        _ => None,
    }
}
