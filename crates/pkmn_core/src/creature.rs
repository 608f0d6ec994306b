use serde::{Deserialize, Serialize};

use crate::core_api::{CoreError, CoreErrorCode};
use crate::game::{Game, Generation, LEVEL_MAX, LEVEL_MIN, PP_BONUS_MAX};
use crate::gender::{CreatureGender, TrainerGender};
use crate::items::{self, ItemCategory};
use crate::locations;
use crate::moves::{self, MOVE_NONE};
use crate::nature::Nature;
use crate::personality;
use crate::species::{SpeciesInfo, species_by_id};
use crate::stats::{STAT_COUNT, Stat, StatBlock, compute_stats};

pub const MOVE_SLOTS: usize = 4;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum StatusCondition {
    Healthy,
    Paralyzed,
    Poisoned,
    Asleep,
    Frozen,
    Burned,
}

impl StatusCondition {
    pub const ALL: [StatusCondition; 6] = [
        StatusCondition::Healthy,
        StatusCondition::Paralyzed,
        StatusCondition::Poisoned,
        StatusCondition::Asleep,
        StatusCondition::Frozen,
        StatusCondition::Burned,
    ];

    pub fn from_raw(raw: u8) -> Option<Self> {
        Self::ALL.get(raw as usize).copied()
    }

    pub fn raw(self) -> u8 {
        Self::ALL
            .iter()
            .position(|&s| s == self)
            .expect("ALL covers every status") as u8
    }

    pub fn name(self) -> &'static str {
        match self {
            StatusCondition::Healthy => "Healthy",
            StatusCondition::Paralyzed => "Paralyzed",
            StatusCondition::Poisoned => "Poisoned",
            StatusCondition::Asleep => "Asleep",
            StatusCondition::Frozen => "Frozen",
            StatusCondition::Burned => "Burned",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoveSlot {
    pub(crate) move_id: u16,
    pub(crate) pp: u8,
    pub(crate) pp_bonus: u8,
}

impl MoveSlot {
    pub fn empty() -> Self {
        Self {
            move_id: MOVE_NONE,
            pp: 0,
            pp_bonus: 0,
        }
    }

    pub fn move_id(&self) -> u16 {
        self.move_id
    }

    pub fn pp(&self) -> u8 {
        self.pp
    }

    pub fn pp_bonus(&self) -> u8 {
        self.pp_bonus
    }

    pub fn max_pp(&self) -> u8 {
        let base = moves::move_by_id(self.move_id).map_or(0, |m| m.base_pp);
        moves::max_pp(base, self.pp_bonus)
    }
}

/// Original-trainer identity carried by a creature, independent of the
/// trainer that owns the loaded save.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OtIdentity {
    pub name: String,
    pub public_id: u16,
    pub secret_id: u16,
    pub gender: TrainerGender,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OriginInfo {
    pub(crate) game: Game,
    pub(crate) met_location: u16,
    pub(crate) met_level: u8,
    pub(crate) pokeball: u16,
    pub(crate) fateful_encounter: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreatureRecord {
    pub(crate) game: Game,
    pub(crate) species_id: u16,
    pub(crate) nickname: String,
    pub(crate) level: u8,
    pub(crate) experience: u32,
    pub(crate) friendship: u8,
    pub(crate) personality: u32,
    pub(crate) held_item: Option<u16>,
    pub(crate) moves: [MoveSlot; MOVE_SLOTS],
    pub(crate) ivs: [u8; STAT_COUNT],
    pub(crate) evs: [u16; STAT_COUNT],
    pub(crate) status: StatusCondition,
    pub(crate) origin: OriginInfo,
    pub(crate) egg: bool,
    pub(crate) pokerus_strain: u8,
    pub(crate) pokerus_days: u8,
    pub(crate) ability_index: u8,
    pub(crate) ot: OtIdentity,
}

const POKERUS_FRESH_DAYS: u8 = 4;
const DEFAULT_FRIENDSHIP: u8 = 70;
const DEFAULT_POKEBALL: u16 = 20;

fn invalid(message: impl Into<String>) -> CoreError {
    CoreError::new(CoreErrorCode::InvalidValue, message)
}

impl CreatureRecord {
    pub fn new(
        game: Game,
        species_id: u16,
        level: u8,
        personality: u32,
        ot: OtIdentity,
    ) -> Result<Self, CoreError> {
        let species = species_by_id(species_id)
            .ok_or_else(|| invalid(format!("unknown species id {species_id}")))?;
        if !(LEVEL_MIN..=LEVEL_MAX).contains(&level) {
            return Err(invalid(format!(
                "invalid level {level}, expected {LEVEL_MIN}-{LEVEL_MAX}"
            )));
        }

        Ok(Self {
            game,
            species_id,
            nickname: species.default_nickname(),
            level,
            experience: species.growth.exp_for_level(level),
            friendship: DEFAULT_FRIENDSHIP,
            personality,
            held_item: None,
            moves: [MoveSlot::empty(); MOVE_SLOTS],
            ivs: [0; STAT_COUNT],
            evs: [0; STAT_COUNT],
            status: StatusCondition::Healthy,
            origin: OriginInfo {
                game,
                met_location: 0,
                met_level: level,
                pokeball: DEFAULT_POKEBALL,
                fateful_encounter: false,
            },
            egg: false,
            pokerus_strain: 0,
            pokerus_days: 0,
            ability_index: 0,
            ot,
        })
    }

    pub fn game(&self) -> Game {
        self.game
    }

    pub fn generation(&self) -> Generation {
        self.game.generation()
    }

    pub fn species(&self) -> &'static SpeciesInfo {
        species_by_id(self.species_id).expect("species id is validated on every write")
    }

    pub fn nickname(&self) -> &str {
        &self.nickname
    }

    pub fn level(&self) -> u8 {
        self.level
    }

    pub fn experience(&self) -> u32 {
        self.experience
    }

    pub fn friendship(&self) -> u8 {
        self.friendship
    }

    pub fn personality_value(&self) -> u32 {
        self.personality
    }

    pub fn held_item(&self) -> Option<&'static items::ItemInfo> {
        self.held_item.and_then(items::item_by_id)
    }

    pub fn move_slot(&self, slot: usize) -> Option<&MoveSlot> {
        self.moves.get(slot)
    }

    pub fn moves(&self) -> &[MoveSlot; MOVE_SLOTS] {
        &self.moves
    }

    pub fn iv(&self, stat: Stat) -> u8 {
        self.ivs[stat.slot(self.generation())]
    }

    pub fn ev(&self, stat: Stat) -> u16 {
        self.evs[stat.slot(self.generation())]
    }

    pub fn status(&self) -> StatusCondition {
        self.status
    }

    pub fn egg(&self) -> bool {
        self.egg
    }

    pub fn origin(&self) -> &OriginInfo {
        &self.origin
    }

    pub fn ot(&self) -> &OtIdentity {
        &self.ot
    }

    pub fn ability_index(&self) -> u8 {
        self.ability_index
    }

    pub fn ability_name(&self) -> &'static str {
        self.species().abilities[usize::from(self.ability_index.min(1))]
    }

    // -- derived projections ------------------------------------------------

    pub fn nature(&self) -> Option<Nature> {
        match self.generation() {
            Generation::Three => Some(personality::nature_of(self.personality)),
            _ => None,
        }
    }

    pub fn gender(&self) -> Option<CreatureGender> {
        let ratio = self.species().gender_ratio;
        match self.generation() {
            Generation::One => None,
            Generation::Two => Some(personality::dv_gender(
                self.ivs[Stat::Attack.index()],
                ratio,
            )),
            Generation::Three => Some(personality::gender_of(self.personality, ratio)),
        }
    }

    pub fn is_shiny(&self) -> Option<bool> {
        match self.generation() {
            Generation::One => None,
            Generation::Two => Some(personality::dvs_are_shiny(&self.ivs)),
            Generation::Three => Some(personality::is_shiny(
                self.personality,
                self.ot.public_id,
                self.ot.secret_id,
            )),
        }
    }

    pub fn stats(&self) -> StatBlock {
        compute_stats(
            self.species(),
            self.generation(),
            self.level,
            &self.ivs,
            &self.evs,
            self.nature(),
        )
    }

    pub fn exp_bounds(&self) -> (u32, u32) {
        self.species().growth.exp_bounds(self.level)
    }

    pub fn min_exp(&self) -> u32 {
        self.exp_bounds().0
    }

    pub fn max_exp(&self) -> u32 {
        self.exp_bounds().1
    }

    pub fn has_trade_evolution(&self) -> bool {
        self.species().trade_evolution.is_some()
    }

    pub fn is_infected(&self) -> bool {
        self.pokerus_strain != 0 && self.pokerus_days > 0
    }

    pub fn is_cured(&self) -> bool {
        self.pokerus_strain != 0 && self.pokerus_days == 0
    }

    // -- mutators -----------------------------------------------------------

    pub fn set_species(&mut self, species_id: u16) -> Result<(), CoreError> {
        let species = species_by_id(species_id)
            .ok_or_else(|| invalid(format!("unknown species id {species_id}")))?;
        let old_default = self.species().default_nickname();

        self.species_id = species_id;
        if self.nickname.eq_ignore_ascii_case(&old_default) {
            self.nickname = species.default_nickname();
        }
        self.ability_index = self.ability_index.min(species.ability_count() - 1);
        self.clamp_experience();
        Ok(())
    }

    pub fn set_nickname(&mut self, nickname: &str) -> Result<(), CoreError> {
        if nickname.is_empty() {
            return Err(invalid("nickname cannot be empty"));
        }
        let limit = self.generation().limits().nickname_len;
        self.nickname = nickname.chars().take(limit).collect();
        Ok(())
    }

    pub fn set_level(&mut self, level: u8) -> Result<(), CoreError> {
        if !(LEVEL_MIN..=LEVEL_MAX).contains(&level) {
            return Err(invalid(format!(
                "invalid level {level}, expected {LEVEL_MIN}-{LEVEL_MAX}"
            )));
        }
        self.level = level;
        self.clamp_experience();
        Ok(())
    }

    /// Experience is clamped into the current level's bracket rather than
    /// rejected, mirroring the bounded spin-box the field is edited through.
    pub fn set_experience(&mut self, experience: u32) {
        let (min, max) = self.exp_bounds();
        self.experience = experience.clamp(min, max);
    }

    pub fn set_friendship(&mut self, friendship: u8) {
        self.friendship = friendship;
    }

    pub fn set_status(&mut self, status: StatusCondition) {
        self.status = status;
    }

    pub fn set_egg(&mut self, egg: bool) {
        self.egg = egg;
    }

    pub fn set_held_item(&mut self, item_id: Option<u16>) -> Result<(), CoreError> {
        let Some(id) = item_id else {
            self.held_item = None;
            return Ok(());
        };
        let item =
            items::item_by_id(id).ok_or_else(|| invalid(format!("unknown item id {id}")))?;
        if item.category == ItemCategory::KeyItem {
            return Err(invalid(format!("{} cannot be held", item.name)));
        }
        self.held_item = Some(id);
        Ok(())
    }

    pub fn set_iv(&mut self, stat: Stat, value: u8) {
        let slot = stat.slot(self.generation());
        self.ivs[slot] = value.min(self.generation().limits().iv_max);
    }

    pub fn set_ev(&mut self, stat: Stat, value: u16) {
        let slot = stat.slot(self.generation());
        self.evs[slot] = value.min(self.generation().limits().ev_max);
    }

    pub fn set_move(&mut self, slot: usize, move_id: u16) -> Result<(), CoreError> {
        if slot >= MOVE_SLOTS {
            return Err(invalid(format!("invalid move slot {slot}, expected 0-3")));
        }
        let info = moves::move_by_id(move_id)
            .ok_or_else(|| invalid(format!("unknown move id {move_id}")))?;
        let entry = &mut self.moves[slot];
        entry.move_id = move_id;
        entry.pp = moves::max_pp(info.base_pp, entry.pp_bonus);
        Ok(())
    }

    pub fn set_move_pp(&mut self, slot: usize, pp: u8) -> Result<(), CoreError> {
        if slot >= MOVE_SLOTS {
            return Err(invalid(format!("invalid move slot {slot}, expected 0-3")));
        }
        let ceiling = self.moves[slot].max_pp();
        self.moves[slot].pp = pp.min(ceiling);
        Ok(())
    }

    pub fn set_move_pp_bonus(&mut self, slot: usize, bonus: u8) -> Result<(), CoreError> {
        if slot >= MOVE_SLOTS {
            return Err(invalid(format!("invalid move slot {slot}, expected 0-3")));
        }
        let entry = &mut self.moves[slot];
        entry.pp_bonus = bonus.min(PP_BONUS_MAX);
        entry.pp = entry.pp.min(entry.max_pp());
        Ok(())
    }

    pub fn set_nature(&mut self, nature: Nature) -> Result<(), CoreError> {
        if self.generation() != Generation::Three {
            return Err(invalid("this save has no creature natures"));
        }
        let found = personality::pid_for_nature(
            self.personality,
            self.ot.public_id,
            self.ot.secret_id,
            self.species().gender_ratio,
            nature,
        )
        .ok_or_else(|| invalid(format!("no personality value yields a {nature} nature")))?;
        self.personality = found;
        Ok(())
    }

    pub fn set_gender(&mut self, gender: CreatureGender) -> Result<(), CoreError> {
        let ratio = self.species().gender_ratio;
        match self.generation() {
            Generation::One => Err(invalid("this save has no creature genders")),
            Generation::Two => {
                if personality::dv_gender(self.ivs[Stat::Attack.index()], ratio) == gender {
                    return Ok(());
                }
                let keep_shiny = personality::dvs_are_shiny(&self.ivs);
                let dv = personality::attack_dv_for_gender(ratio, gender, keep_shiny)
                    .or_else(|| personality::attack_dv_for_gender(ratio, gender, false))
                    .ok_or_else(|| {
                        invalid(format!("{} cannot be {gender}", self.species().name))
                    })?;
                self.ivs[Stat::Attack.index()] = dv;
                Ok(())
            }
            Generation::Three => {
                let found = personality::pid_for_gender(
                    self.personality,
                    self.ot.public_id,
                    self.ot.secret_id,
                    ratio,
                    gender,
                )
                .ok_or_else(|| {
                    invalid(format!("{} cannot be {gender}", self.species().name))
                })?;
                self.personality = found;
                Ok(())
            }
        }
    }

    pub fn set_shiny(&mut self, shiny: bool) -> Result<(), CoreError> {
        match self.generation() {
            Generation::One => Err(invalid("this save has no shiny flag")),
            Generation::Two => {
                if shiny {
                    personality::apply_shiny_dvs(&mut self.ivs, self.species().gender_ratio);
                } else {
                    personality::clear_shiny_dvs(&mut self.ivs);
                }
                Ok(())
            }
            Generation::Three => {
                let found = personality::pid_for_shininess(
                    self.personality,
                    self.ot.public_id,
                    self.ot.secret_id,
                    self.species().gender_ratio,
                    shiny,
                )
                .ok_or_else(|| invalid("no personality value satisfies the shininess request"))?;
                self.personality = found;
                Ok(())
            }
        }
    }

    pub fn set_personality_value(&mut self, personality: u32) {
        self.personality = personality;
    }

    pub fn set_ability_index(&mut self, index: u8) -> Result<(), CoreError> {
        let count = self.species().ability_count();
        if index >= count {
            return Err(invalid(format!(
                "{} has {count} ability slot(s)",
                self.species().name
            )));
        }
        self.ability_index = index;
        Ok(())
    }

    pub fn set_infected(&mut self, infected: bool) {
        if infected {
            if self.pokerus_strain == 0 {
                self.pokerus_strain = 1;
            }
            self.pokerus_days = POKERUS_FRESH_DAYS;
        } else {
            self.pokerus_strain = 0;
            self.pokerus_days = 0;
        }
    }

    pub fn set_cured(&mut self, cured: bool) {
        if cured {
            if self.pokerus_strain == 0 {
                self.pokerus_strain = 1;
            }
            self.pokerus_days = 0;
        } else if self.pokerus_strain != 0 {
            self.pokerus_days = POKERUS_FRESH_DAYS;
        }
    }

    pub fn set_origin_game(&mut self, game: Game) {
        self.origin.game = game;
    }

    pub fn set_met_location(&mut self, location_id: u16) -> Result<(), CoreError> {
        locations::location_by_id(location_id)
            .ok_or_else(|| invalid(format!("unknown met location id {location_id}")))?;
        self.origin.met_location = location_id;
        Ok(())
    }

    pub fn set_met_level(&mut self, level: u8) -> Result<(), CoreError> {
        if level > LEVEL_MAX {
            return Err(invalid(format!(
                "invalid met level {level}, expected 0-{LEVEL_MAX}"
            )));
        }
        self.origin.met_level = level;
        Ok(())
    }

    pub fn set_pokeball(&mut self, item_id: u16) -> Result<(), CoreError> {
        let item = items::item_by_id(item_id)
            .ok_or_else(|| invalid(format!("unknown item id {item_id}")))?;
        if item.category != ItemCategory::Pokeball {
            return Err(invalid(format!("{} is not a ball", item.name)));
        }
        self.origin.pokeball = item_id;
        Ok(())
    }

    pub fn set_fateful_encounter(&mut self, fateful: bool) {
        self.origin.fateful_encounter = fateful;
    }

    pub fn set_ot_name(&mut self, name: &str) -> Result<(), CoreError> {
        if name.is_empty() {
            return Err(invalid("trainer name cannot be empty"));
        }
        let limit = self.generation().limits().trainer_name_len;
        self.ot.name = name.chars().take(limit).collect();
        Ok(())
    }

    pub fn set_ot_gender(&mut self, gender: TrainerGender) {
        self.ot.gender = gender;
    }

    pub fn set_ot_public_id(&mut self, id: u16) {
        self.ot.public_id = id;
    }

    pub fn set_ot_secret_id(&mut self, id: u16) {
        self.ot.secret_id = id;
    }

    pub fn simulate_trade_evolution(&mut self) -> Result<(), CoreError> {
        let target = self
            .species()
            .trade_evolution
            .ok_or_else(|| invalid(format!("{} has no trade evolution", self.species().name)))?;
        self.set_species(target)
    }

    fn clamp_experience(&mut self) {
        let (min, max) = self.exp_bounds();
        self.experience = self.experience.clamp(min, max);
    }
}
