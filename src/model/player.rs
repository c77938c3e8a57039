use serde::{Deserialize, Serialize};

use crate::model::Character;

/// The ingest root: one account's showcase of characters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Player {
    pub uid: String,
    pub nickname: String,
    pub level: u32,
    pub world_level: u32,
    pub achievement_count: u32,
    pub characters: Vec<Character>,
}
