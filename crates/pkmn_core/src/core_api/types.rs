use serde::{Deserialize, Serialize};

use crate::creature::StatusCondition;
use crate::game::Game;
use crate::gender::{CreatureGender, TrainerGender};
use crate::nature::Nature;
use crate::stats::StatBlock;
use crate::trainer::TimePlayed;

/// Session-level toggles mirrored from the editor's option menu.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SessionOptions {
    pub allow_illegal_modifications: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TrainerSnapshot {
    pub game: Game,
    pub game_label: String,
    pub name: String,
    pub name_length: usize,
    pub gender: TrainerGender,
    pub public_id: u16,
    pub secret_id: u16,
    pub money: u32,
    pub max_money: u32,
    pub coins: u16,
    pub max_coins: u16,
    pub time_played: TimePlayed,
    pub party_size: usize,
}

/// One row of the party table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PartyRow {
    pub index: usize,
    pub nickname: String,
    pub gender: Option<CreatureGender>,
    pub level: u8,
    pub shiny: Option<bool>,
    pub egg: Option<bool>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct MoveView {
    pub slot: usize,
    pub move_id: u16,
    pub name: String,
    pub pp: u8,
    pub pp_bonus: u8,
    pub max_pp: u8,
}

/// Everything the creature editor displays. Fields the creature's schema
/// lacks read as `None` rather than erroring.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CreatureSnapshot {
    pub index: usize,
    pub species_id: u16,
    pub species_name: String,
    pub nickname: String,
    pub nickname_length: usize,
    pub level: u8,
    pub experience: u32,
    pub min_exp: u32,
    pub max_exp: u32,
    pub friendship: Option<u8>,
    pub personality_value: Option<u32>,
    pub nature: Option<Nature>,
    pub gender: Option<CreatureGender>,
    pub shiny: Option<bool>,
    pub ability: Option<String>,
    pub held_item: Option<String>,
    pub status: StatusCondition,
    pub egg: Option<bool>,
    pub infected: Option<bool>,
    pub cured: Option<bool>,
    pub origin_game: Option<Game>,
    pub met_location: Option<String>,
    pub met_level: Option<u8>,
    pub pokeball: Option<String>,
    pub fateful_encounter: Option<bool>,
    pub ot_name: String,
    pub ot_gender: Option<TrainerGender>,
    pub ot_public_id: u16,
    pub ot_secret_id: u16,
    pub split_special: bool,
    pub iv_max: u8,
    pub ev_max: u16,
    pub ivs: [u8; 6],
    pub evs: [u16; 6],
    pub stats: StatBlock,
    pub moves: [MoveView; 4],
    pub has_trade_evolution: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PocketView {
    pub position: usize,
    pub name: String,
    pub quantity: u16,
}
