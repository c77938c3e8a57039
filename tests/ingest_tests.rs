// ===== artiforge/tests/ingest_tests.rs =====
use std::fs;

use tempfile::tempdir;

use artiforge::error::ArtiForgeError;
use artiforge::ingest::{self, RawPayload};
use artiforge::model::Slot;
use artiforge::stat::{BaseStatKind, StatKind};

fn sample_payload() -> &'static str {
    r#"{
        "uid": "101242308",
        "playerInfo": {
            "nickname": "Traveler",
            "level": 58,
            "worldLevel": 8,
            "finishAchievementNum": 612
        },
        "avatarInfoList": [
            {
                "avatarId": 10000002,
                "propMap": { "4001": { "val": "90" } },
                "fightPropMap": { "1": 12000.5, "4": 812.3, "7": 700.0, "2000": 18000.0 },
                "fetterInfo": { "expLevel": 10 },
                "equipList": [
                    {
                        "itemId": 11509,
                        "weapon": { "level": 90 },
                        "flat": { "rankLevel": 5 }
                    },
                    {
                        "itemId": 81033,
                        "reliquary": {
                            "level": 21,
                            "mainPropId": 14001,
                            "appendPropIdList": [501204, 501224, 501231, 501243, 501223]
                        },
                        "flat": {
                            "setId": 15001,
                            "setNameTextMapHash": "1337",
                            "rankLevel": 5,
                            "equipType": "EQUIP_DRESS",
                            "reliquaryMainstat": {
                                "mainPropId": "FIGHT_PROP_CRITICAL",
                                "statValue": 31.1
                            },
                            "reliquarySubstats": [
                                { "appendPropId": "FIGHT_PROP_CRITICAL_HURT", "statValue": 13.2 },
                                { "appendPropId": "FIGHT_PROP_ATTACK_PERCENT", "statValue": 9.9 },
                                { "appendPropId": "FIGHT_PROP_ATTACK", "statValue": 19.0 },
                                { "appendPropId": "FIGHT_PROP_CHARGE_EFFICIENCY", "statValue": 11.0 }
                            ]
                        }
                    }
                ]
            }
        ]
    }"#
}

#[test]
fn test_parse_player_fixture() {
    let raw: RawPayload = serde_json::from_str(sample_payload()).unwrap();
    let player = ingest::parse_player(raw).unwrap();

    assert_eq!(player.uid, "101242308");
    assert_eq!(player.nickname, "Traveler");
    assert_eq!(player.world_level, 8);
    assert_eq!(player.characters.len(), 1);

    let character = &player.characters[0];
    assert_eq!(character.id, 10_000_002);
    assert_eq!(character.level, 90);
    assert_eq!(character.friendship, 10);
    assert_eq!(character.base_stat(BaseStatKind::BaseAtk), Some(812.3));
    assert_eq!(character.base_stat(BaseStatKind::BaseHp), Some(12_000.5));

    // The weapon entry is skipped; only the reliquary survives.
    assert_eq!(character.artifacts.len(), 1);
    let artifact = &character.artifacts[0];
    assert_eq!(artifact.slot, Slot::Circlet);
    assert_eq!(artifact.level, 20);
    assert_eq!(artifact.rarity, 5);
    assert_eq!(artifact.main_stat.kind, StatKind::CritRate);
    assert_eq!(artifact.sub_stats.len(), 4);
    assert_eq!(artifact.sub_stats[0].kind, StatKind::CritDmg);
    assert_eq!(artifact.sub_stat_ids.len(), 5);
    assert_eq!(artifact.quality(), 0);
}

#[test]
fn test_unknown_stat_kind_is_surfaced() {
    let payload = sample_payload().replace("FIGHT_PROP_CRITICAL_HURT", "FIGHT_PROP_MOXIE");
    let raw: RawPayload = serde_json::from_str(&payload).unwrap();
    let result = ingest::parse_player(raw);
    assert!(matches!(result, Err(ArtiForgeError::DataShape(_))));
}

#[test]
fn test_unknown_equip_type_is_surfaced() {
    let payload = sample_payload().replace("EQUIP_DRESS", "EQUIP_HAT");
    let raw: RawPayload = serde_json::from_str(&payload).unwrap();
    let result = ingest::parse_player(raw);
    assert!(matches!(result, Err(ArtiForgeError::DataShape(_))));
}

#[test]
fn test_load_player_from_file() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("showcase.json");
    fs::write(&path, sample_payload()).unwrap();

    let player = ingest::load_player_from_file(&path).unwrap();
    assert_eq!(player.characters.len(), 1);
}

#[test]
fn test_missing_file_is_io_error() {
    let result = ingest::load_player_from_file("does/not/exist.json");
    assert!(matches!(result, Err(ArtiForgeError::Io(_))));
}
