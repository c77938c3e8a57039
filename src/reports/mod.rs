// ===== artiforge/src/reports/mod.rs =====
use comfy_table::presets::ASCII_FULL;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use artiforge::evaluator::{ArtifactEval, CharacterEval};
use artiforge::model::Player;
use artiforge::store::WeightStore;

fn sub_stat_summary(eval: &ArtifactEval) -> String {
    eval.artifact
        .sub_stats
        .iter()
        .map(|s| format!("{} {}", s.kind.short_name(), s.display_value()))
        .collect::<Vec<_>>()
        .join(", ")
}

pub fn print_character_report(eval: &CharacterEval) {
    let c = &eval.character;
    let genre_label = eval
        .genre
        .as_ref()
        .map(|g| g.name.clone())
        .unwrap_or_else(|| "-".to_string());
    println!(
        "\n{} (id {}, Lv.{}) | genre: {}",
        c.name, c.id, c.level, genre_label
    );

    let mut table = Table::new();
    table
        .load_preset(ASCII_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic);

    table.add_row(vec![
        Cell::new("Slot").add_attribute(Attribute::Bold),
        Cell::new("Set"),
        Cell::new("Lv"),
        Cell::new("Main Stat"),
        Cell::new("Sub Stats"),
        Cell::new("Rolls").fg(Color::Green),
        Cell::new("Score").fg(Color::Cyan),
    ]);
    for i in [2, 5, 6] {
        if let Some(col) = table.column_mut(i) {
            col.set_cell_alignment(CellAlignment::Right);
        }
    }

    for artifact_eval in &eval.artifacts {
        let a = &artifact_eval.artifact;
        table.add_row(vec![
            Cell::new(format!("{:?}", a.slot)).add_attribute(Attribute::Bold),
            Cell::new(&a.set_name),
            Cell::new(format!("+{}", a.level)),
            Cell::new(format!(
                "{} {}",
                a.main_stat.kind.short_name(),
                a.main_stat.display_value()
            )),
            Cell::new(sub_stat_summary(artifact_eval)),
            Cell::new(format!("{:.2}", artifact_eval.total_effective_rolls())).fg(Color::Green),
            Cell::new(format!("{:.1}", artifact_eval.score)).fg(Color::Cyan),
        ]);
    }
    println!("{table}");
    println!(
        "Total score: {:.2}   Effective rolls: {:.2}",
        eval.total_score, eval.total_effective_rolls
    );
}

pub fn print_player_summary(player: &Player, evals: &[CharacterEval]) {
    println!(
        "\n{} (uid {}) | AR {}, WL {}, {} achievements",
        player.nickname, player.uid, player.level, player.world_level, player.achievement_count
    );

    let mut table = Table::new();
    table
        .load_preset(ASCII_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic);

    table.add_row(vec![
        Cell::new("Character").add_attribute(Attribute::Bold),
        Cell::new("Lv"),
        Cell::new("Genre"),
        Cell::new("Rolls").fg(Color::Green),
        Cell::new("Score").fg(Color::Cyan),
    ]);
    for i in 1..=4 {
        if let Some(col) = table.column_mut(i) {
            col.set_cell_alignment(CellAlignment::Right);
        }
    }

    for eval in evals {
        let genre_label = eval
            .genre
            .as_ref()
            .map(|g| g.name.clone())
            .unwrap_or_else(|| "-".to_string());
        table.add_row(vec![
            Cell::new(&eval.character.name).add_attribute(Attribute::Bold),
            Cell::new(eval.character.level),
            Cell::new(genre_label),
            Cell::new(format!("{:.2}", eval.total_effective_rolls)).fg(Color::Green),
            Cell::new(format!("{:.1}", eval.total_score)).fg(Color::Cyan),
        ]);
    }
    println!("{table}");
}

pub fn print_weight_table(store: &WeightStore) {
    let mut table = Table::new();
    table
        .load_preset(ASCII_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic);

    table.add_row(vec![
        Cell::new("Id").add_attribute(Attribute::Bold),
        Cell::new("Character").add_attribute(Attribute::Bold),
        Cell::new("HP%"),
        Cell::new("ATK%"),
        Cell::new("DEF%"),
        Cell::new("CR"),
        Cell::new("CD"),
        Cell::new("EM"),
        Cell::new("ER"),
        Cell::new("HP"),
        Cell::new("ATK"),
        Cell::new("DEF"),
    ]);
    for i in 2..=11 {
        if let Some(col) = table.column_mut(i) {
            col.set_cell_alignment(CellAlignment::Right);
        }
    }

    for row in store.rows() {
        table.add_row(vec![
            Cell::new(row.id),
            Cell::new(&row.character).add_attribute(Attribute::Bold),
            Cell::new(row.hp_percent),
            Cell::new(row.attack_percent),
            Cell::new(row.defense_percent),
            Cell::new(row.critical),
            Cell::new(row.critical_hurt),
            Cell::new(row.element_mastery),
            Cell::new(row.charge_efficiency),
            Cell::new(row.hp),
            Cell::new(row.attack),
            Cell::new(row.defense),
        ]);
    }
    println!("{table}");
}
