use serde::{Deserialize, Serialize};

use crate::core_api::{CoreError, CoreErrorCode};
use crate::creature::CreatureRecord;
use crate::game::{Game, PARTY_MAX};
use crate::gender::TrainerGender;
use crate::items::{self, ItemCategory};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TimePlayed {
    pub hours: u16,
    pub minutes: u8,
    pub seconds: u8,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PocketEntry {
    pub item: u16,
    pub quantity: u16,
}

/// Six independent ordered pockets, keyed by [`ItemCategory`]. Entries are
/// addressed by list position; any structural change invalidates positions
/// captured earlier, so callers re-resolve before editing.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Pockets {
    lists: [Vec<PocketEntry>; 6],
}

impl Pockets {
    pub fn entries(&self, category: ItemCategory) -> &[PocketEntry] {
        &self.lists[category.index()]
    }

    pub(crate) fn entries_mut(&mut self, category: ItemCategory) -> &mut Vec<PocketEntry> {
        &mut self.lists[category.index()]
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrainerProfile {
    pub(crate) game: Game,
    pub(crate) name: String,
    pub(crate) gender: TrainerGender,
    pub(crate) public_id: u16,
    pub(crate) secret_id: u16,
    pub(crate) money: u32,
    pub(crate) coins: u16,
    pub(crate) time_played: TimePlayed,
    pub(crate) pockets: Pockets,
    pub(crate) party: Vec<CreatureRecord>,
}

fn invalid(message: impl Into<String>) -> CoreError {
    CoreError::new(CoreErrorCode::InvalidValue, message)
}

impl TrainerProfile {
    pub fn new(
        game: Game,
        name: &str,
        gender: TrainerGender,
        public_id: u16,
        secret_id: u16,
        starter: CreatureRecord,
    ) -> Result<Self, CoreError> {
        let mut profile = Self {
            game,
            name: String::new(),
            gender,
            public_id,
            secret_id,
            money: 0,
            coins: 0,
            time_played: TimePlayed {
                hours: 0,
                minutes: 0,
                seconds: 0,
            },
            pockets: Pockets::default(),
            party: Vec::new(),
        };
        profile.set_name(name)?;
        profile.add_creature(starter)?;
        Ok(profile)
    }

    pub fn game(&self) -> Game {
        self.game
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn gender(&self) -> TrainerGender {
        self.gender
    }

    pub fn public_id(&self) -> u16 {
        self.public_id
    }

    pub fn secret_id(&self) -> u16 {
        self.secret_id
    }

    pub fn money(&self) -> u32 {
        self.money
    }

    pub fn coins(&self) -> u16 {
        self.coins
    }

    pub fn time_played(&self) -> TimePlayed {
        self.time_played
    }

    pub fn party(&self) -> &[CreatureRecord] {
        &self.party
    }

    pub fn party_mut(&mut self) -> &mut [CreatureRecord] {
        &mut self.party
    }

    pub fn creature(&self, index: usize) -> Option<&CreatureRecord> {
        self.party.get(index)
    }

    pub fn creature_mut(&mut self, index: usize) -> Option<&mut CreatureRecord> {
        self.party.get_mut(index)
    }

    pub fn pockets(&self) -> &Pockets {
        &self.pockets
    }

    pub fn set_name(&mut self, name: &str) -> Result<(), CoreError> {
        if name.is_empty() {
            return Err(invalid("trainer name cannot be empty"));
        }
        let limit = self.game.generation().limits().trainer_name_len;
        self.name = name.chars().take(limit).collect();
        Ok(())
    }

    pub fn set_gender(&mut self, gender: TrainerGender) {
        self.gender = gender;
    }

    pub fn set_public_id(&mut self, id: u16) {
        self.public_id = id;
    }

    pub fn set_secret_id(&mut self, id: u16) {
        self.secret_id = id;
    }

    /// Currency edits clamp to the per-game maximum instead of erroring.
    pub fn set_money(&mut self, money: u32) {
        self.money = money.min(self.game.generation().limits().max_money);
    }

    pub fn set_coins(&mut self, coins: u16) {
        self.coins = coins.min(self.game.generation().limits().max_coins);
    }

    pub fn set_time_played(&mut self, time: TimePlayed) {
        self.time_played = time;
    }

    // -- party --------------------------------------------------------------

    pub fn add_creature(&mut self, creature: CreatureRecord) -> Result<(), CoreError> {
        if self.party.len() >= PARTY_MAX {
            return Err(invalid(format!("party is full ({PARTY_MAX} members)")));
        }
        self.party.push(creature);
        Ok(())
    }

    /// The last party member can never be removed.
    pub fn remove_creature(&mut self, index: usize) -> Result<CreatureRecord, CoreError> {
        if self.party.len() <= 1 {
            return Err(invalid("cannot delete the last party member"));
        }
        if index >= self.party.len() {
            return Err(invalid(format!(
                "invalid party index {index}, expected 0-{}",
                self.party.len() - 1
            )));
        }
        Ok(self.party.remove(index))
    }

    // -- inventory ledger ---------------------------------------------------

    pub fn add_item(
        &mut self,
        category: ItemCategory,
        name: &str,
        quantity: u16,
    ) -> Result<(), CoreError> {
        let item = self.resolve_item(category, name)?;
        let pocket = self.pockets.entries_mut(category);
        if pocket.iter().any(|entry| entry.item == item) {
            return Err(CoreError::new(
                CoreErrorCode::DuplicateItem,
                format!("{name} is already in the {category} pocket"),
            ));
        }
        let quantity = self.clamp_quantity(quantity);
        self.pockets.entries_mut(category).push(PocketEntry {
            item,
            quantity,
        });
        Ok(())
    }

    pub fn edit_item(
        &mut self,
        category: ItemCategory,
        position: usize,
        name: &str,
        quantity: u16,
    ) -> Result<(), CoreError> {
        let item = self.resolve_item(category, name)?;
        let quantity = self.clamp_quantity(quantity);
        let pocket = self.pockets.entries_mut(category);
        if position >= pocket.len() {
            return Err(invalid(format!(
                "invalid {category} pocket position {position}"
            )));
        }
        if pocket
            .iter()
            .enumerate()
            .any(|(i, entry)| i != position && entry.item == item)
        {
            return Err(CoreError::new(
                CoreErrorCode::DuplicateItem,
                format!("{name} is already in the {category} pocket"),
            ));
        }
        pocket[position] = PocketEntry { item, quantity };
        Ok(())
    }

    pub fn delete_item(
        &mut self,
        category: ItemCategory,
        position: usize,
    ) -> Result<(), CoreError> {
        let pocket = self.pockets.entries_mut(category);
        if position >= pocket.len() {
            return Err(invalid(format!(
                "invalid {category} pocket position {position}"
            )));
        }
        pocket.remove(position);
        Ok(())
    }

    fn resolve_item(&self, category: ItemCategory, name: &str) -> Result<u16, CoreError> {
        let item = items::item_by_name(name).ok_or_else(|| {
            CoreError::new(CoreErrorCode::UnknownItem, format!("unknown item {name}"))
        })?;
        if !items::category_accepts(category, item) {
            return Err(CoreError::new(
                CoreErrorCode::UnknownItem,
                format!("{name} does not belong in the {category} pocket"),
            ));
        }
        Ok(item.id)
    }

    fn clamp_quantity(&self, quantity: u16) -> u16 {
        quantity.min(self.game.generation().limits().quantity_max)
    }
}
