use std::path::{Path, PathBuf};

use tracing::{debug, info};

use crate::capability::{CapabilitySet, FieldId};
use crate::creature::{CreatureRecord, StatusCondition};
use crate::game::{Game, Generation};
use crate::gender::{CreatureGender, TrainerGender};
use crate::items::{self, ItemCategory};
use crate::locations;
use crate::nature::Nature;
use crate::savefile::{self, SaveFile};
use crate::stats::Stat;

use super::error::{CoreError, CoreErrorCode};
use super::types::{
    CreatureSnapshot, MoveView, PartyRow, PocketView, SessionOptions, TrainerSnapshot,
};

#[derive(Debug, Default, Clone, Copy)]
pub struct Engine;

impl Engine {
    pub fn new() -> Self {
        Self
    }

    /// A fresh session with nothing loaded.
    pub fn open_session(&self) -> Session {
        Session::new()
    }
}

#[derive(Debug)]
struct LoadedSave {
    save: SaveFile,
    file_name: Option<PathBuf>,
    selected: Option<usize>,
}

/// Owns at most one loaded save and routes every edit through the
/// capability gate, the personality resolver and the stat cascade. Each
/// mutating call reports the set of logical fields whose displayed value may
/// have changed.
#[derive(Debug)]
pub struct Session {
    loaded: Option<LoadedSave>,
    options: SessionOptions,
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}

fn invalid(message: impl Into<String>) -> CoreError {
    CoreError::new(CoreErrorCode::InvalidValue, message)
}

impl Session {
    pub fn new() -> Self {
        Self {
            loaded: None,
            options: SessionOptions::default(),
        }
    }

    pub fn is_loaded(&self) -> bool {
        self.loaded.is_some()
    }

    pub fn game(&self) -> Option<Game> {
        self.loaded.as_ref().map(|l| l.save.game())
    }

    pub fn file_name(&self) -> Option<&Path> {
        self.loaded
            .as_ref()
            .and_then(|l| l.file_name.as_deref())
    }

    pub fn options(&self) -> SessionOptions {
        self.options
    }

    /// Applies immediately to the selected creature: the whole writability
    /// surface must be re-derived without reloading the save.
    pub fn set_allow_illegal(&mut self, allow: bool) -> Vec<FieldId> {
        debug!(allow, "toggling illegal-modification override");
        self.options.allow_illegal_modifications = allow;
        vec![FieldId::Capabilities]
    }

    // -- lifecycle ----------------------------------------------------------

    /// Loads a save, replacing any prior one wholesale. On failure the prior
    /// state (loaded or empty) is left untouched.
    pub fn open(&mut self, path: &Path) -> Result<TrainerSnapshot, CoreError> {
        let save = savefile::read_save_file(path).map_err(|e| {
            CoreError::new(
                CoreErrorCode::LoadFailure,
                format!("failed to load {}: {e}", path.display()),
            )
        })?;
        info!(path = %path.display(), game = save.game().name(), "loaded save");
        self.install(save, Some(path.to_path_buf()));
        self.trainer_snapshot()
    }

    pub fn open_bytes(&mut self, bytes: &[u8]) -> Result<TrainerSnapshot, CoreError> {
        let save = SaveFile::parse(bytes).map_err(|e| {
            CoreError::new(CoreErrorCode::LoadFailure, format!("failed to load save: {e}"))
        })?;
        self.install(save, None);
        self.trainer_snapshot()
    }

    fn install(&mut self, save: SaveFile, file_name: Option<PathBuf>) {
        self.loaded = Some(LoadedSave {
            save,
            file_name,
            selected: None,
        });
    }

    /// Valid only while a save is loaded. A write failure leaves the
    /// in-memory state untouched and the previous file intact.
    pub fn save(&self, path: &Path, backup: bool) -> Result<(), CoreError> {
        let loaded = self.loaded()?;
        savefile::write_save_file(path, &loaded.save, backup).map_err(|e| {
            CoreError::new(
                CoreErrorCode::WriteFailure,
                format!("failed to write {}: {e}", path.display()),
            )
        })?;
        info!(path = %path.display(), backup, "wrote save");
        Ok(())
    }

    pub fn close(&mut self) {
        self.loaded = None;
    }

    fn loaded(&self) -> Result<&LoadedSave, CoreError> {
        self.loaded
            .as_ref()
            .ok_or_else(|| CoreError::new(CoreErrorCode::NothingLoaded, "no save is loaded"))
    }

    fn loaded_mut(&mut self) -> Result<&mut LoadedSave, CoreError> {
        self.loaded
            .as_mut()
            .ok_or_else(|| CoreError::new(CoreErrorCode::NothingLoaded, "no save is loaded"))
    }

    // -- selection ----------------------------------------------------------

    pub fn select_creature(&mut self, index: usize) -> Result<CreatureSnapshot, CoreError> {
        let loaded = self.loaded_mut()?;
        if index >= loaded.save.trainer.party().len() {
            return Err(invalid(format!(
                "invalid party index {index}, expected 0-{}",
                loaded.save.trainer.party().len() - 1
            )));
        }
        loaded.selected = Some(index);
        self.creature_snapshot()
    }

    pub fn selected_index(&self) -> Option<usize> {
        self.loaded.as_ref().and_then(|l| l.selected)
    }

    pub fn clear_selection(&mut self) {
        if let Some(loaded) = self.loaded.as_mut() {
            loaded.selected = None;
        }
    }

    /// The selection is a party position; it is revalidated on every access
    /// so a stale index can never reach a wrong (or missing) creature.
    fn selected(&self) -> Result<(usize, &CreatureRecord), CoreError> {
        let loaded = self.loaded()?;
        let index = loaded
            .selected
            .ok_or_else(|| invalid("no creature selected"))?;
        let creature = loaded
            .save
            .trainer
            .creature(index)
            .ok_or_else(|| invalid("selected creature no longer exists"))?;
        Ok((index, creature))
    }

    fn selected_mut(&mut self) -> Result<&mut CreatureRecord, CoreError> {
        let loaded = self.loaded_mut()?;
        let index = loaded
            .selected
            .ok_or_else(|| invalid("no creature selected"))?;
        loaded
            .save
            .trainer
            .creature_mut(index)
            .ok_or_else(|| invalid("selected creature no longer exists"))
    }

    /// Capability gate: the field must exist on the creature's schema and be
    /// either legal or covered by the illegal-edit override.
    fn gated_mut(&mut self, field: FieldId) -> Result<&mut CreatureRecord, CoreError> {
        let allow = self.options.allow_illegal_modifications;
        let creature = self.selected_mut()?;
        let caps = CapabilitySet::for_creature(creature);
        if !caps.is_writable(field, allow) {
            return Err(CoreError::new(
                CoreErrorCode::FieldNotWritable,
                format!("field {field:?} is not writable for this creature"),
            ));
        }
        Ok(creature)
    }

    pub fn capabilities(&self) -> Result<CapabilitySet, CoreError> {
        let (_, creature) = self.selected()?;
        Ok(CapabilitySet::for_creature(creature))
    }

    pub fn is_writable(&self, field: FieldId) -> Result<bool, CoreError> {
        Ok(self
            .capabilities()?
            .is_writable(field, self.options.allow_illegal_modifications))
    }

    // -- queries ------------------------------------------------------------

    pub fn trainer_snapshot(&self) -> Result<TrainerSnapshot, CoreError> {
        let loaded = self.loaded()?;
        let trainer = &loaded.save.trainer;
        let limits = trainer.game().generation().limits();
        Ok(TrainerSnapshot {
            game: trainer.game(),
            game_label: format!("Pokemon {}", trainer.game().name()),
            name: trainer.name().to_string(),
            name_length: limits.trainer_name_len,
            gender: trainer.gender(),
            public_id: trainer.public_id(),
            secret_id: trainer.secret_id(),
            money: trainer.money(),
            max_money: limits.max_money,
            coins: trainer.coins(),
            max_coins: limits.max_coins,
            time_played: trainer.time_played(),
            party_size: trainer.party().len(),
        })
    }

    pub fn party(&self) -> Result<Vec<PartyRow>, CoreError> {
        let loaded = self.loaded()?;
        Ok(loaded
            .save
            .trainer
            .party()
            .iter()
            .enumerate()
            .map(|(index, creature)| {
                let caps = CapabilitySet::for_creature(creature);
                PartyRow {
                    index,
                    nickname: creature.nickname().to_string(),
                    gender: caps.exists(FieldId::Gender).then(|| creature.gender()).flatten(),
                    level: creature.level(),
                    shiny: caps.exists(FieldId::Shiny).then(|| creature.is_shiny()).flatten(),
                    egg: caps.exists(FieldId::Egg).then_some(creature.egg()),
                }
            })
            .collect())
    }

    pub fn creature_snapshot(&self) -> Result<CreatureSnapshot, CoreError> {
        let (index, creature) = self.selected()?;
        Ok(snapshot_creature(index, creature))
    }

    pub fn pocket(&self, category: ItemCategory) -> Result<Vec<PocketView>, CoreError> {
        let loaded = self.loaded()?;
        Ok(loaded
            .save
            .trainer
            .pockets()
            .entries(category)
            .iter()
            .enumerate()
            .map(|(position, entry)| PocketView {
                position,
                name: items::item_by_id(entry.item)
                    .map_or_else(|| format!("item #{}", entry.item), |i| i.name.to_string()),
                quantity: entry.quantity,
            })
            .collect())
    }

    pub fn item_names(&self, category: ItemCategory) -> Vec<&'static str> {
        items::item_names(category)
    }

    // -- trainer edits ------------------------------------------------------

    pub fn set_trainer_name(&mut self, name: &str) -> Result<Vec<FieldId>, CoreError> {
        self.loaded_mut()?.save.trainer.set_name(name)?;
        Ok(vec![FieldId::TrainerName])
    }

    pub fn set_trainer_gender(&mut self, gender: TrainerGender) -> Result<Vec<FieldId>, CoreError> {
        self.loaded_mut()?.save.trainer.set_gender(gender);
        Ok(vec![FieldId::TrainerGender])
    }

    pub fn set_money(&mut self, money: u32) -> Result<Vec<FieldId>, CoreError> {
        self.loaded_mut()?.save.trainer.set_money(money);
        Ok(vec![FieldId::Money])
    }

    pub fn set_coins(&mut self, coins: u16) -> Result<Vec<FieldId>, CoreError> {
        self.loaded_mut()?.save.trainer.set_coins(coins);
        Ok(vec![FieldId::Coins])
    }

    pub fn set_trainer_public_id(&mut self, id: u16) -> Result<Vec<FieldId>, CoreError> {
        self.loaded_mut()?.save.trainer.set_public_id(id);
        Ok(vec![FieldId::TrainerPublicId])
    }

    pub fn set_trainer_secret_id(&mut self, id: u16) -> Result<Vec<FieldId>, CoreError> {
        self.loaded_mut()?.save.trainer.set_secret_id(id);
        Ok(vec![FieldId::TrainerSecretId])
    }

    // -- party --------------------------------------------------------------

    pub fn remove_creature(&mut self, index: usize) -> Result<Vec<FieldId>, CoreError> {
        let loaded = self.loaded_mut()?;
        loaded.save.trainer.remove_creature(index)?;
        // Positions above the removal shift down; a selection pointing at the
        // removed row is dropped rather than silently retargeted.
        loaded.selected = match loaded.selected {
            Some(sel) if sel == index => None,
            Some(sel) if sel > index => Some(sel - 1),
            other => other,
        };
        Ok(vec![FieldId::PartyList])
    }

    // -- inventory ledger ---------------------------------------------------

    pub fn add_item(
        &mut self,
        category: ItemCategory,
        name: &str,
        quantity: u16,
    ) -> Result<Vec<FieldId>, CoreError> {
        self.loaded_mut()?
            .save
            .trainer
            .add_item(category, name, quantity)?;
        Ok(vec![pocket_field(category)])
    }

    pub fn edit_item(
        &mut self,
        category: ItemCategory,
        position: usize,
        name: &str,
        quantity: u16,
    ) -> Result<Vec<FieldId>, CoreError> {
        self.loaded_mut()?
            .save
            .trainer
            .edit_item(category, position, name, quantity)?;
        Ok(vec![pocket_field(category)])
    }

    pub fn delete_item(
        &mut self,
        category: ItemCategory,
        position: usize,
    ) -> Result<Vec<FieldId>, CoreError> {
        self.loaded_mut()?
            .save
            .trainer
            .delete_item(category, position)?;
        Ok(vec![pocket_field(category)])
    }

    // -- creature edits -----------------------------------------------------

    pub fn set_species(&mut self, species_id: u16) -> Result<Vec<FieldId>, CoreError> {
        let creature = self.gated_mut(FieldId::Species)?;
        creature.set_species(species_id)?;
        Ok(species_refresh())
    }

    /// Not gated: trading is something the games themselves do.
    pub fn simulate_trade_evolution(&mut self) -> Result<Vec<FieldId>, CoreError> {
        let creature = self.selected_mut()?;
        creature.simulate_trade_evolution()?;
        Ok(species_refresh())
    }

    pub fn set_nickname(&mut self, nickname: &str) -> Result<Vec<FieldId>, CoreError> {
        let creature = self.gated_mut(FieldId::Nickname)?;
        creature.set_nickname(nickname)?;
        Ok(vec![FieldId::Nickname, FieldId::PartyList])
    }

    pub fn set_level(&mut self, level: u8) -> Result<Vec<FieldId>, CoreError> {
        let creature = self.gated_mut(FieldId::Level)?;
        creature.set_level(level)?;
        Ok(vec![
            FieldId::Level,
            FieldId::Experience,
            FieldId::ExpBounds,
            FieldId::Stats,
            FieldId::PartyList,
        ])
    }

    pub fn set_experience(&mut self, experience: u32) -> Result<Vec<FieldId>, CoreError> {
        let creature = self.gated_mut(FieldId::Experience)?;
        creature.set_experience(experience);
        Ok(vec![FieldId::Experience])
    }

    pub fn set_friendship(&mut self, friendship: u8) -> Result<Vec<FieldId>, CoreError> {
        let creature = self.gated_mut(FieldId::Friendship)?;
        creature.set_friendship(friendship);
        Ok(vec![FieldId::Friendship])
    }

    /// After any resolver call the caller must re-read nature, gender and
    /// shininess: the two non-requested properties stay valid for the new
    /// personality value but are not guaranteed byte-identical.
    pub fn set_nature(&mut self, nature: Option<Nature>) -> Result<Vec<FieldId>, CoreError> {
        let nature = nature.ok_or_else(|| invalid("the unset nature choice cannot be applied"))?;
        let creature = self.gated_mut(FieldId::Nature)?;
        creature.set_nature(nature)?;
        let generation = creature.generation();
        Ok(resolver_refresh(generation))
    }

    pub fn set_creature_gender(&mut self, gender: CreatureGender) -> Result<Vec<FieldId>, CoreError> {
        let creature = self.gated_mut(FieldId::Gender)?;
        creature.set_gender(gender)?;
        let generation = creature.generation();
        Ok(resolver_refresh(generation))
    }

    pub fn set_shiny(&mut self, shiny: bool) -> Result<Vec<FieldId>, CoreError> {
        let creature = self.gated_mut(FieldId::Shiny)?;
        creature.set_shiny(shiny)?;
        let generation = creature.generation();
        Ok(resolver_refresh(generation))
    }

    /// Direct override of the raw value; every projection is re-read.
    pub fn set_personality_value(&mut self, personality: u32) -> Result<Vec<FieldId>, CoreError> {
        let creature = self.gated_mut(FieldId::PersonalityValue)?;
        creature.set_personality_value(personality);
        Ok(vec![
            FieldId::PersonalityValue,
            FieldId::Nature,
            FieldId::Gender,
            FieldId::Shiny,
            FieldId::Stats,
            FieldId::PartyList,
        ])
    }

    pub fn set_ability_index(&mut self, index: u8) -> Result<Vec<FieldId>, CoreError> {
        let creature = self.gated_mut(FieldId::Ability)?;
        creature.set_ability_index(index)?;
        Ok(vec![FieldId::Ability])
    }

    pub fn set_held_item(&mut self, item_id: Option<u16>) -> Result<Vec<FieldId>, CoreError> {
        let creature = self.gated_mut(FieldId::HeldItem)?;
        creature.set_held_item(item_id)?;
        Ok(vec![FieldId::HeldItem])
    }

    pub fn set_status(&mut self, status: StatusCondition) -> Result<Vec<FieldId>, CoreError> {
        let creature = self.gated_mut(FieldId::Status)?;
        creature.set_status(status);
        Ok(vec![FieldId::Status])
    }

    pub fn set_egg(&mut self, egg: bool) -> Result<Vec<FieldId>, CoreError> {
        let creature = self.gated_mut(FieldId::Egg)?;
        creature.set_egg(egg);
        Ok(vec![FieldId::Egg, FieldId::PartyList])
    }

    pub fn set_infected(&mut self, infected: bool) -> Result<Vec<FieldId>, CoreError> {
        let creature = self.gated_mut(FieldId::Pokerus)?;
        creature.set_infected(infected);
        Ok(vec![FieldId::Pokerus])
    }

    pub fn set_cured(&mut self, cured: bool) -> Result<Vec<FieldId>, CoreError> {
        let creature = self.gated_mut(FieldId::Pokerus)?;
        creature.set_cured(cured);
        Ok(vec![FieldId::Pokerus])
    }

    pub fn set_origin_game(&mut self, game: Game) -> Result<Vec<FieldId>, CoreError> {
        let creature = self.gated_mut(FieldId::OriginGame)?;
        creature.set_origin_game(game);
        Ok(vec![FieldId::OriginGame])
    }

    pub fn set_met_location(&mut self, name: &str) -> Result<Vec<FieldId>, CoreError> {
        let location = locations::location_by_name(name)
            .ok_or_else(|| invalid(format!("unknown met location {name}")))?;
        let creature = self.gated_mut(FieldId::MetLocation)?;
        creature.set_met_location(location.id)?;
        Ok(vec![FieldId::MetLocation])
    }

    pub fn set_met_level(&mut self, level: u8) -> Result<Vec<FieldId>, CoreError> {
        let creature = self.gated_mut(FieldId::MetLevel)?;
        creature.set_met_level(level)?;
        Ok(vec![FieldId::MetLevel])
    }

    pub fn set_pokeball(&mut self, item_id: u16) -> Result<Vec<FieldId>, CoreError> {
        let creature = self.gated_mut(FieldId::Pokeball)?;
        creature.set_pokeball(item_id)?;
        Ok(vec![FieldId::Pokeball])
    }

    pub fn set_fateful_encounter(&mut self, fateful: bool) -> Result<Vec<FieldId>, CoreError> {
        let creature = self.gated_mut(FieldId::FatefulEncounter)?;
        creature.set_fateful_encounter(fateful);
        Ok(vec![FieldId::FatefulEncounter])
    }

    pub fn set_ot_name(&mut self, name: &str) -> Result<Vec<FieldId>, CoreError> {
        let creature = self.gated_mut(FieldId::OtName)?;
        creature.set_ot_name(name)?;
        Ok(vec![FieldId::OtName])
    }

    pub fn set_ot_gender(&mut self, gender: TrainerGender) -> Result<Vec<FieldId>, CoreError> {
        let creature = self.gated_mut(FieldId::OtGender)?;
        creature.set_ot_gender(gender);
        Ok(vec![FieldId::OtGender])
    }

    /// OT id overrides re-derive shininess only; nature and gender do not
    /// depend on the id pair.
    pub fn set_ot_public_id(&mut self, id: u16) -> Result<Vec<FieldId>, CoreError> {
        let creature = self.gated_mut(FieldId::OtPublicId)?;
        creature.set_ot_public_id(id);
        Ok(vec![FieldId::OtPublicId, FieldId::Shiny, FieldId::PartyList])
    }

    pub fn set_ot_secret_id(&mut self, id: u16) -> Result<Vec<FieldId>, CoreError> {
        let creature = self.gated_mut(FieldId::OtSecretId)?;
        creature.set_ot_secret_id(id);
        Ok(vec![FieldId::OtSecretId, FieldId::Shiny, FieldId::PartyList])
    }

    pub fn set_iv(&mut self, stat: Stat, value: u8) -> Result<Vec<FieldId>, CoreError> {
        let creature = self.gated_mut(FieldId::Ivs)?;
        creature.set_iv(stat, value);
        let mut fields = vec![FieldId::Ivs, FieldId::Stats];
        // Pre-split generations decode gender and shininess from DVs.
        if creature.generation() == Generation::Two {
            fields.extend([FieldId::Gender, FieldId::Shiny, FieldId::PartyList]);
        }
        Ok(fields)
    }

    pub fn set_ev(&mut self, stat: Stat, value: u16) -> Result<Vec<FieldId>, CoreError> {
        let creature = self.gated_mut(FieldId::Evs)?;
        creature.set_ev(stat, value);
        Ok(vec![FieldId::Evs, FieldId::Stats])
    }

    pub fn set_move(&mut self, slot: usize, move_id: u16) -> Result<Vec<FieldId>, CoreError> {
        let creature = self.gated_mut(FieldId::Moves)?;
        creature.set_move(slot, move_id)?;
        Ok(vec![FieldId::Moves, FieldId::Pp, FieldId::MaxPp])
    }

    pub fn set_move_pp(&mut self, slot: usize, pp: u8) -> Result<Vec<FieldId>, CoreError> {
        let creature = self.gated_mut(FieldId::Pp)?;
        creature.set_move_pp(slot, pp)?;
        Ok(vec![FieldId::Pp])
    }

    pub fn set_move_pp_bonus(&mut self, slot: usize, bonus: u8) -> Result<Vec<FieldId>, CoreError> {
        let creature = self.gated_mut(FieldId::PpBonus)?;
        creature.set_move_pp_bonus(slot, bonus)?;
        Ok(vec![FieldId::PpBonus, FieldId::Pp, FieldId::MaxPp])
    }

    pub fn has_trade_evolution(&self) -> Result<bool, CoreError> {
        let (_, creature) = self.selected()?;
        Ok(creature.has_trade_evolution())
    }
}

fn pocket_field(category: ItemCategory) -> FieldId {
    match category {
        ItemCategory::Pocket => FieldId::PocketItems,
        ItemCategory::Pokeball => FieldId::PocketBalls,
        ItemCategory::Berry => FieldId::PocketBerries,
        ItemCategory::Tm => FieldId::PocketTms,
        ItemCategory::KeyItem => FieldId::PocketKeyItems,
        ItemCategory::Pc => FieldId::PocketPc,
    }
}

fn species_refresh() -> Vec<FieldId> {
    vec![
        FieldId::Species,
        FieldId::Nickname,
        FieldId::Nature,
        FieldId::Gender,
        FieldId::Shiny,
        FieldId::Ability,
        FieldId::Stats,
        FieldId::ExpBounds,
        FieldId::Experience,
        FieldId::Capabilities,
        FieldId::PartyList,
    ]
}

fn resolver_refresh(generation: Generation) -> Vec<FieldId> {
    match generation {
        // DV-backed: the identity rewrite moves DVs and therefore stats.
        Generation::One | Generation::Two => vec![
            FieldId::Gender,
            FieldId::Shiny,
            FieldId::Ivs,
            FieldId::Stats,
            FieldId::PartyList,
        ],
        Generation::Three => vec![
            FieldId::Nature,
            FieldId::Gender,
            FieldId::Shiny,
            FieldId::PersonalityValue,
            FieldId::Stats,
            FieldId::PartyList,
        ],
    }
}

fn snapshot_creature(index: usize, creature: &CreatureRecord) -> CreatureSnapshot {
    let caps = CapabilitySet::for_creature(creature);
    let species = creature.species();
    let limits = creature.generation().limits();
    let (min_exp, max_exp) = creature.exp_bounds();

    let moves = std::array::from_fn(|slot| {
        let entry = &creature.moves()[slot];
        MoveView {
            slot,
            move_id: entry.move_id(),
            name: crate::moves::move_by_id(entry.move_id())
                .map_or_else(|| format!("move #{}", entry.move_id()), |m| m.name.to_string()),
            pp: entry.pp(),
            pp_bonus: entry.pp_bonus(),
            max_pp: entry.max_pp(),
        }
    });

    let mut ivs = [0u8; 6];
    let mut evs = [0u16; 6];
    for stat in Stat::ALL {
        ivs[stat.index()] = creature.iv(stat);
        evs[stat.index()] = creature.ev(stat);
    }

    CreatureSnapshot {
        index,
        species_id: species.id,
        species_name: species.name.to_string(),
        nickname: creature.nickname().to_string(),
        nickname_length: limits.nickname_len,
        level: creature.level(),
        experience: creature.experience(),
        min_exp,
        max_exp,
        friendship: caps
            .exists(FieldId::Friendship)
            .then_some(creature.friendship()),
        personality_value: caps
            .exists(FieldId::PersonalityValue)
            .then_some(creature.personality_value()),
        nature: caps.exists(FieldId::Nature).then(|| creature.nature()).flatten(),
        gender: caps.exists(FieldId::Gender).then(|| creature.gender()).flatten(),
        shiny: caps.exists(FieldId::Shiny).then(|| creature.is_shiny()).flatten(),
        ability: caps
            .exists(FieldId::Ability)
            .then(|| creature.ability_name().to_string()),
        held_item: caps
            .exists(FieldId::HeldItem)
            .then(|| creature.held_item().map(|i| i.name.to_string()))
            .flatten(),
        status: creature.status(),
        egg: caps.exists(FieldId::Egg).then_some(creature.egg()),
        infected: caps
            .exists(FieldId::Pokerus)
            .then_some(creature.is_infected()),
        cured: caps.exists(FieldId::Pokerus).then_some(creature.is_cured()),
        origin_game: caps
            .exists(FieldId::OriginGame)
            .then_some(creature.origin().game),
        met_location: caps
            .exists(FieldId::MetLocation)
            .then(|| {
                locations::location_by_id(creature.origin().met_location)
                    .map(|l| l.name.to_string())
            })
            .flatten(),
        met_level: caps
            .exists(FieldId::MetLevel)
            .then_some(creature.origin().met_level),
        pokeball: caps
            .exists(FieldId::Pokeball)
            .then(|| items::item_by_id(creature.origin().pokeball).map(|i| i.name.to_string()))
            .flatten(),
        fateful_encounter: caps
            .exists(FieldId::FatefulEncounter)
            .then_some(creature.origin().fateful_encounter),
        ot_name: creature.ot().name.clone(),
        ot_gender: caps
            .exists(FieldId::OtGender)
            .then_some(creature.ot().gender),
        ot_public_id: creature.ot().public_id,
        ot_secret_id: creature.ot().secret_id,
        split_special: caps.exists(FieldId::SpecialSplit),
        iv_max: limits.iv_max,
        ev_max: limits.ev_max,
        ivs,
        evs,
        stats: creature.stats(),
        moves,
        has_trade_evolution: creature.has_trade_evolution(),
    }
}
