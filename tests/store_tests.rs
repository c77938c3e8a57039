use std::fs;

use tempfile::tempdir;

use artiforge::stat::StatKind;
use artiforge::store::WeightStore;
use artiforge::weights::CharacterStatWeight;

fn sample_row(id: u64, name: &str, critical: u32) -> CharacterStatWeight {
    CharacterStatWeight {
        id,
        character: name.to_string(),
        hp_percent: 0,
        attack_percent: 75,
        defense_percent: 0,
        critical,
        critical_hurt: 100,
        element_mastery: 0,
        charge_efficiency: 55,
        hp: 0,
        attack: 75,
        defense: 0,
    }
}

#[test]
fn test_upsert_replaces_by_id() {
    let mut store = WeightStore::new();
    assert!(!store.upsert(sample_row(10_000_002, "Ayaka", 100)));
    assert!(store.upsert(sample_row(10_000_002, "Ayaka", 90)));
    assert_eq!(store.len(), 1);
    assert_eq!(store.get(10_000_002).unwrap().critical, 90);
}

#[test]
fn test_csv_import() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("weights.csv");
    fs::write(
        &path,
        "id,character,hp_percent,attack_percent,defense_percent,critical,critical_hurt,element_mastery,charge_efficiency,hp,attack,defense\n\
         10000002,Ayaka,0,75,0,100,100,0,55,0,75,0\n\
         10000030,Zhongli,80,0,0,100,100,0,0,80,0,0\n",
    )
    .unwrap();

    let mut store = WeightStore::new();
    let count = store.import_csv(&path).unwrap();
    assert_eq!(count, 2);
    assert_eq!(store.len(), 2);
    assert_eq!(store.get(10_000_030).unwrap().character, "Zhongli");
}

#[test]
fn test_malformed_csv_is_surfaced() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("weights.csv");
    fs::write(&path, "id,character\n10000002,Ayaka\n").unwrap();

    let mut store = WeightStore::new();
    assert!(store.import_csv(&path).is_err());
}

#[test]
fn test_snapshot_maps_rows_to_profiles() {
    let mut store = WeightStore::new();
    store.upsert(sample_row(10_000_002, "Ayaka", 100));

    let table = store.snapshot();
    let profile = &table[&10_000_002];
    assert_eq!(profile[&StatKind::CritRate], 100.0);
    assert_eq!(profile[&StatKind::AtkPercent], 75.0);
    assert_eq!(profile[&StatKind::HpPercent], 0.0);
}

/// A snapshot is a copy; later store mutations cannot leak into it.
#[test]
fn test_snapshot_isolation() {
    let mut store = WeightStore::new();
    store.upsert(sample_row(1, "A", 100));

    let snapshot = store.snapshot();
    store.upsert(sample_row(1, "A", 10));
    store.upsert(sample_row(2, "B", 50));

    assert_eq!(snapshot.len(), 1);
    assert_eq!(snapshot[&1][&StatKind::CritRate], 100.0);
}

#[test]
fn test_json_round_trip() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("weights.json");

    let mut store = WeightStore::new();
    store.upsert(sample_row(10_000_002, "Ayaka", 100));
    store.upsert(sample_row(10_000_030, "Zhongli", 100));
    store.save_to_file(&path).unwrap();

    let loaded = WeightStore::load_from_file(&path).unwrap();
    assert_eq!(loaded.len(), 2);
    assert_eq!(loaded.get(10_000_002).unwrap().character, "Ayaka");
}
