// ===== artiforge/src/ingest/parser.rs =====
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;
use std::str::FromStr;

use tracing::{debug, info};

use crate::error::{AfResult, ArtiForgeError};
use crate::ingest::payload::{RawAvatarInfo, RawEquip, RawPayload};
use crate::ingest::prop_ids;
use crate::model::{Artifact, Character, Player, Slot};
use crate::stat::{BaseStatKind, Stat, StatKind};

/// Reads and parses a showcase payload from disk.
pub fn load_player_from_file(path: impl AsRef<Path>) -> AfResult<Player> {
    let content = fs::read_to_string(path.as_ref())?;
    let raw: RawPayload = serde_json::from_str(&content)?;
    let player = parse_player(raw)?;
    info!(
        "Parsed showcase of '{}' ({} characters)",
        player.nickname,
        player.characters.len()
    );
    Ok(player)
}

/// Maps the raw payload into the scoring model. Unrecognized stat kinds or
/// slots surface as data-shape errors; they mean the attribute catalog is
/// stale relative to upstream game data, and coercing them to zero would
/// hide exactly the items a scoring tool exists to examine.
pub fn parse_player(raw: RawPayload) -> AfResult<Player> {
    let characters = raw
        .avatar_info_list
        .into_iter()
        .map(parse_character)
        .collect::<AfResult<Vec<_>>>()?;

    Ok(Player {
        uid: raw.uid,
        nickname: raw.player_info.nickname,
        level: raw.player_info.level,
        world_level: raw.player_info.world_level,
        achievement_count: raw.player_info.finish_achievement_num,
        characters,
    })
}

fn parse_character(raw: RawAvatarInfo) -> AfResult<Character> {
    let level = raw
        .prop_map
        .get(prop_ids::PROP_LEVEL)
        .and_then(|p| p.val.as_deref())
        .and_then(|v| v.parse().ok())
        .unwrap_or(0);

    let mut base_stats: BTreeMap<BaseStatKind, f64> = BTreeMap::new();
    for (key, value) in &raw.fight_prop_map {
        if let Some(kind) = prop_ids::base_stat_from_prop_id(key) {
            base_stats.insert(kind, *value);
        }
    }

    let mut artifacts = Vec::new();
    for equip in raw.equip_list {
        if let Some(artifact) = parse_equip(equip)? {
            artifacts.push(artifact);
        }
    }
    debug!(
        "avatar {}: {} artifacts, {} base stats",
        raw.avatar_id,
        artifacts.len(),
        base_stats.len()
    );

    Ok(Character {
        id: raw.avatar_id,
        name: format!("avatar-{}", raw.avatar_id),
        level,
        element: None,
        friendship: raw.fetter_info.map(|f| f.exp_level).unwrap_or(0),
        base_stats,
        artifacts,
    })
}

/// Parses one equip entry; weapons (no `reliquary` block) yield `None`.
fn parse_equip(raw: RawEquip) -> AfResult<Option<Artifact>> {
    let Some(reliquary) = raw.reliquary else {
        return Ok(None);
    };
    let flat = raw.flat;

    let main_raw = flat.reliquary_mainstat.ok_or_else(|| {
        ArtiForgeError::DataShape(format!("artifact {} has no main stat", raw.item_id))
    })?;
    let main_stat = Stat::new(parse_stat_kind(&main_raw.main_prop_id)?, main_raw.stat_value);

    let sub_stats = flat
        .reliquary_substats
        .iter()
        .map(|s| Ok(Stat::new(parse_stat_kind(&s.append_prop_id)?, s.stat_value)))
        .collect::<AfResult<Vec<_>>>()?;

    let slot_name = flat.equip_type.ok_or_else(|| {
        ArtiForgeError::DataShape(format!("artifact {} has no equip type", raw.item_id))
    })?;
    let slot = Slot::from_str(&slot_name).map_err(|_| {
        ArtiForgeError::DataShape(format!("unrecognized equip type '{slot_name}'"))
    })?;

    Ok(Some(Artifact {
        id: raw.item_id,
        set_id: flat.set_id,
        set_name: flat.set_name_text_map_hash.unwrap_or_default(),
        // The payload counts levels from 1, the game UI from 0.
        level: reliquary.level.saturating_sub(1),
        slot,
        rarity: flat.rank_level,
        main_stat,
        sub_stats,
        sub_stat_ids: reliquary.append_prop_id_list,
    }))
}

fn parse_stat_kind(wire_name: &str) -> AfResult<StatKind> {
    StatKind::from_str(wire_name)
        .map_err(|_| ArtiForgeError::DataShape(format!("unrecognized stat kind '{wire_name}'")))
}
