// ===== artiforge/src/ingest/payload.rs =====
//! Raw serde mirror of the showcase payload. Field names match the vendor
//! JSON; anything the scoring model does not need is simply not declared.

use std::collections::HashMap;

use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawPayload {
    pub player_info: RawPlayerInfo,
    #[serde(default)]
    pub avatar_info_list: Vec<RawAvatarInfo>,
    #[serde(default)]
    pub uid: String,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawPlayerInfo {
    pub nickname: String,
    pub level: u32,
    #[serde(default)]
    pub world_level: u32,
    #[serde(default)]
    pub finish_achievement_num: u32,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawAvatarInfo {
    pub avatar_id: u64,
    #[serde(default)]
    pub prop_map: HashMap<String, RawProp>,
    #[serde(default)]
    pub fight_prop_map: HashMap<String, f64>,
    #[serde(default)]
    pub fetter_info: Option<RawFetterInfo>,
    #[serde(default)]
    pub equip_list: Vec<RawEquip>,
}

/// Entries of `propMap` carry values as strings.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawProp {
    #[serde(default)]
    pub val: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawFetterInfo {
    #[serde(default)]
    pub exp_level: u8,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawEquip {
    #[serde(default)]
    pub item_id: u64,
    /// Present on artifacts, absent on weapons.
    #[serde(default)]
    pub reliquary: Option<RawReliquary>,
    pub flat: RawFlat,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawReliquary {
    pub level: u32,
    #[serde(default)]
    pub main_prop_id: u32,
    #[serde(default)]
    pub append_prop_id_list: Vec<u32>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawFlat {
    #[serde(default)]
    pub set_id: u64,
    #[serde(default)]
    pub set_name_text_map_hash: Option<String>,
    #[serde(default)]
    pub rank_level: u8,
    #[serde(default)]
    pub equip_type: Option<String>,
    #[serde(default)]
    pub reliquary_mainstat: Option<RawMainStat>,
    #[serde(default)]
    pub reliquary_substats: Vec<RawSubStat>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawMainStat {
    pub main_prop_id: String,
    #[serde(default)]
    pub stat_value: f64,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawSubStat {
    pub append_prop_id: String,
    #[serde(default)]
    pub stat_value: f64,
}
