//! Shared rendering of session state for the CLI and other text surfaces.
//! JSON output uses a fixed canonical key order; text output mirrors the
//! party and trainer tables of the desktop editor.

use std::fmt::Write as _;

use pkmn_core::core_api::{CoreError, CreatureSnapshot, PartyRow, Session, TrainerSnapshot};
use pkmn_core::items::ItemCategory;
use serde_json::{Map as JsonMap, Value as JsonValue};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum JsonStyle {
    #[default]
    CanonicalV1,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TextStyle {
    #[default]
    TrainerCard,
}

pub fn render_json_full(session: &Session, style: JsonStyle) -> Result<JsonValue, CoreError> {
    match style {
        JsonStyle::CanonicalV1 => {
            let trainer = session.trainer_snapshot()?;
            let party = session.party()?;

            let mut root = JsonMap::new();
            root.insert("game".into(), JsonValue::from(trainer.game.name()));
            root.insert("trainer".into(), trainer_json(&trainer));
            root.insert(
                "party".into(),
                JsonValue::Array(party.iter().map(party_row_json).collect()),
            );
            root.insert("pockets".into(), pockets_json(session)?);
            Ok(JsonValue::Object(root))
        }
    }
}

pub fn render_creature_json(session: &Session, style: JsonStyle) -> Result<JsonValue, CoreError> {
    match style {
        JsonStyle::CanonicalV1 => {
            let snapshot = session.creature_snapshot()?;
            serde_json::to_value(&snapshot).map_err(|e| {
                CoreError::new(
                    pkmn_core::core_api::CoreErrorCode::InvalidValue,
                    format!("failed to encode creature snapshot: {e}"),
                )
            })
        }
    }
}

pub fn render_text(session: &Session, style: TextStyle) -> Result<String, CoreError> {
    match style {
        TextStyle::TrainerCard => {
            let trainer = session.trainer_snapshot()?;
            let party = session.party()?;

            let mut out = String::new();
            let _ = writeln!(out, "{}", trainer.game_label);
            let _ = writeln!(
                out,
                "Trainer: {} ({})  IDs: {}/{}",
                trainer.name,
                trainer.gender,
                trainer.public_id,
                trainer.secret_id
            );
            let _ = writeln!(
                out,
                "Money: {}  Coins: {}  Time: {:02}:{:02}:{:02}",
                trainer.money,
                trainer.coins,
                trainer.time_played.hours,
                trainer.time_played.minutes,
                trainer.time_played.seconds
            );
            out.push('\n');
            out.push_str(&party_table(&party));
            Ok(out)
        }
    }
}

pub fn render_creature_sheet(session: &Session) -> Result<String, CoreError> {
    let snapshot = session.creature_snapshot()?;
    Ok(creature_sheet(&snapshot))
}

fn trainer_json(trainer: &TrainerSnapshot) -> JsonValue {
    let mut map = JsonMap::new();
    map.insert("name".into(), JsonValue::from(trainer.name.clone()));
    map.insert("gender".into(), JsonValue::from(trainer.gender.as_str()));
    map.insert("public_id".into(), JsonValue::from(trainer.public_id));
    map.insert("secret_id".into(), JsonValue::from(trainer.secret_id));
    map.insert("money".into(), JsonValue::from(trainer.money));
    map.insert("coins".into(), JsonValue::from(trainer.coins));
    map.insert(
        "time_played".into(),
        JsonValue::from(format!(
            "{}:{:02}:{:02}",
            trainer.time_played.hours, trainer.time_played.minutes, trainer.time_played.seconds
        )),
    );
    JsonValue::Object(map)
}

fn party_row_json(row: &PartyRow) -> JsonValue {
    let mut map = JsonMap::new();
    map.insert("nickname".into(), JsonValue::from(row.nickname.clone()));
    map.insert(
        "gender".into(),
        row.gender
            .map_or(JsonValue::Null, |g| JsonValue::from(g.as_str())),
    );
    map.insert("level".into(), JsonValue::from(row.level));
    map.insert(
        "shiny".into(),
        row.shiny.map_or(JsonValue::Null, JsonValue::from),
    );
    map.insert(
        "egg".into(),
        row.egg.map_or(JsonValue::Null, JsonValue::from),
    );
    JsonValue::Object(map)
}

fn pockets_json(session: &Session) -> Result<JsonValue, CoreError> {
    let mut map = JsonMap::new();
    for category in ItemCategory::ALL {
        let entries: Vec<JsonValue> = session
            .pocket(category)?
            .iter()
            .map(|entry| {
                let mut item = JsonMap::new();
                item.insert("name".into(), JsonValue::from(entry.name.clone()));
                item.insert("quantity".into(), JsonValue::from(entry.quantity));
                JsonValue::Object(item)
            })
            .collect();
        map.insert(category.name().into(), JsonValue::Array(entries));
    }
    Ok(JsonValue::Object(map))
}

const PARTY_COL_NICKNAME: usize = 12;
const PARTY_COL_GENDER: usize = 12;
const PARTY_COL_LEVEL: usize = 6;
const PARTY_COL_SHINY: usize = 6;

fn party_table(party: &[PartyRow]) -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        "{:<PARTY_COL_NICKNAME$} {:<PARTY_COL_GENDER$} {:<PARTY_COL_LEVEL$} {:<PARTY_COL_SHINY$} {}",
        "Nickname", "Gender", "Level", "Shiny", "Egg"
    );
    for row in party {
        let gender = row.gender.map_or("-", |g| g.as_str());
        let shiny = row.shiny.map_or("-", yes_no);
        let egg = row.egg.map_or("-", yes_no);
        let _ = writeln!(
            out,
            "{:<PARTY_COL_NICKNAME$} {:<PARTY_COL_GENDER$} {:<PARTY_COL_LEVEL$} {:<PARTY_COL_SHINY$} {}",
            row.nickname, gender, row.level, shiny, egg
        );
    }
    out
}

fn yes_no(value: bool) -> &'static str {
    if value { "Yes" } else { "No" }
}

fn creature_sheet(snapshot: &CreatureSnapshot) -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        "{} (#{}) \"{}\"  Lv. {}",
        snapshot.species_name, snapshot.species_id, snapshot.nickname, snapshot.level
    );
    let _ = writeln!(
        out,
        "Exp: {} ({}-{})",
        snapshot.experience, snapshot.min_exp, snapshot.max_exp
    );
    if let Some(pid) = snapshot.personality_value {
        let _ = writeln!(out, "Personality: 0x{pid:08X}");
    }
    if let Some(nature) = snapshot.nature {
        let _ = writeln!(out, "Nature: {nature}");
    }
    if let Some(gender) = snapshot.gender {
        let _ = writeln!(out, "Gender: {gender}");
    }
    if let Some(shiny) = snapshot.shiny {
        let _ = writeln!(out, "Shiny: {}", yes_no(shiny));
    }
    if let Some(ability) = &snapshot.ability {
        let _ = writeln!(out, "Ability: {ability}");
    }
    if let Some(item) = &snapshot.held_item {
        let _ = writeln!(out, "Held: {item}");
    }
    let _ = writeln!(out, "Status: {}", snapshot.status.name());

    let stats = &snapshot.stats;
    let _ = writeln!(
        out,
        "Stats: HP {} / Atk {} / Def {} / Spe {} / SpA {} / SpD {}",
        stats.hp, stats.attack, stats.defense, stats.speed, stats.special_attack,
        stats.special_defense
    );
    let dv_label = if snapshot.split_special { "IVs" } else { "DVs" };
    let _ = writeln!(
        out,
        "{dv_label}: {:?}  EVs: {:?}",
        snapshot.ivs, snapshot.evs
    );

    for view in &snapshot.moves {
        if view.move_id == 0 {
            continue;
        }
        let _ = writeln!(
            out,
            "Move {}: {} ({}/{} PP, +{})",
            view.slot + 1,
            view.name,
            view.pp,
            view.max_pp,
            view.pp_bonus
        );
    }

    let _ = writeln!(
        out,
        "OT: {} ({}/{})",
        snapshot.ot_name, snapshot.ot_public_id, snapshot.ot_secret_id
    );
    out
}
