use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::model::Artifact;
use crate::stat::BaseStatKind;

/// The subject of scoring: a character together with its equipped artifacts
/// and the base fighting stats used to de-flatten fixed secondary rolls.
///
/// Name, element and friendship are carried for presentation only; the
/// engine never reads them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Character {
    pub id: u64,
    pub name: String,
    pub level: u32,
    pub element: Option<String>,
    pub friendship: u8,
    /// Ordered so evaluation output serializes deterministically.
    pub base_stats: BTreeMap<BaseStatKind, f64>,
    pub artifacts: Vec<Artifact>,
}

impl Character {
    pub fn base_stat(&self, kind: BaseStatKind) -> Option<f64> {
        self.base_stats.get(&kind).copied()
    }
}
