//! Section-level encoding of the save body. Each block has a fixed field
//! order; every value that indexes a static table is validated on parse so a
//! corrupt body surfaces as `InvalidData` instead of a broken profile.

use std::io::{self, Read, Write};

use crate::creature::{CreatureRecord, MOVE_SLOTS, MoveSlot, OriginInfo, OtIdentity, StatusCondition};
use crate::game::{Game, LEVEL_MAX, LEVEL_MIN, PARTY_MAX};
use crate::gender::TrainerGender;
use crate::items::ItemCategory;
use crate::moves::{MOVE_NONE, move_by_id};
use crate::reader::{BigEndianReader, BigEndianWriter};
use crate::species::species_by_id;
use crate::stats::STAT_COUNT;
use crate::trainer::{PocketEntry, Pockets, TimePlayed, TrainerProfile};

fn bad_data(message: impl Into<String>) -> io::Error {
    io::Error::new(io::ErrorKind::InvalidData, message.into())
}

pub fn parse_trainer<R: Read>(r: &mut BigEndianReader<R>, game: Game) -> io::Result<TrainerProfile> {
    let name = r.read_string()?;
    let gender = TrainerGender::from_raw(r.read_u8()?)
        .ok_or_else(|| bad_data("invalid trainer gender"))?;
    let public_id = r.read_u16()?;
    let secret_id = r.read_u16()?;
    let money = r.read_u32()?;
    let coins = r.read_u16()?;
    let time_played = TimePlayed {
        hours: r.read_u16()?,
        minutes: r.read_u8()?,
        seconds: r.read_u8()?,
    };

    let mut pockets = Pockets::default();
    for category in ItemCategory::ALL {
        *pockets.entries_mut(category) = parse_pocket(r)?;
    }

    let party = parse_party(r, game)?;

    if name.is_empty() {
        return Err(bad_data("trainer name is empty"));
    }
    let limits = game.generation().limits();
    if money > limits.max_money {
        return Err(bad_data(format!("money {money} exceeds the game maximum")));
    }
    if coins > limits.max_coins {
        return Err(bad_data(format!("coins {coins} exceeds the game maximum")));
    }

    Ok(TrainerProfile {
        game,
        name,
        gender,
        public_id,
        secret_id,
        money,
        coins,
        time_played,
        pockets,
        party,
    })
}

pub fn emit_trainer<W: Write>(
    w: &mut BigEndianWriter<W>,
    trainer: &TrainerProfile,
) -> io::Result<()> {
    w.write_string(&trainer.name)?;
    w.write_u8(trainer.gender.raw())?;
    w.write_u16(trainer.public_id)?;
    w.write_u16(trainer.secret_id)?;
    w.write_u32(trainer.money)?;
    w.write_u16(trainer.coins)?;
    w.write_u16(trainer.time_played.hours)?;
    w.write_u8(trainer.time_played.minutes)?;
    w.write_u8(trainer.time_played.seconds)?;

    for category in ItemCategory::ALL {
        emit_pocket(w, trainer.pockets.entries(category))?;
    }

    emit_party(w, &trainer.party)
}

fn parse_pocket<R: Read>(r: &mut BigEndianReader<R>) -> io::Result<Vec<PocketEntry>> {
    let count = r.read_u16()? as usize;
    let mut entries = Vec::with_capacity(count);
    for _ in 0..count {
        let item = r.read_u16()?;
        let quantity = r.read_u16()?;
        if crate::items::item_by_id(item).is_none() {
            return Err(bad_data(format!("unknown item id {item} in pocket")));
        }
        entries.push(PocketEntry { item, quantity });
    }
    Ok(entries)
}

fn emit_pocket<W: Write>(w: &mut BigEndianWriter<W>, entries: &[PocketEntry]) -> io::Result<()> {
    let count = u16::try_from(entries.len())
        .map_err(|_| bad_data("pocket has too many entries to encode"))?;
    w.write_u16(count)?;
    for entry in entries {
        w.write_u16(entry.item)?;
        w.write_u16(entry.quantity)?;
    }
    Ok(())
}

fn parse_party<R: Read>(r: &mut BigEndianReader<R>, game: Game) -> io::Result<Vec<CreatureRecord>> {
    let count = r.read_u8()? as usize;
    if count == 0 || count > PARTY_MAX {
        return Err(bad_data(format!(
            "party size {count} outside 1-{PARTY_MAX}"
        )));
    }
    let mut party = Vec::with_capacity(count);
    for _ in 0..count {
        party.push(parse_creature(r, game)?);
    }
    Ok(party)
}

fn emit_party<W: Write>(w: &mut BigEndianWriter<W>, party: &[CreatureRecord]) -> io::Result<()> {
    if party.is_empty() || party.len() > PARTY_MAX {
        return Err(bad_data(format!(
            "party size {} outside 1-{PARTY_MAX}",
            party.len()
        )));
    }
    w.write_u8(party.len() as u8)?;
    for creature in party {
        emit_creature(w, creature)?;
    }
    Ok(())
}

pub fn parse_creature<R: Read>(
    r: &mut BigEndianReader<R>,
    game: Game,
) -> io::Result<CreatureRecord> {
    let species_id = r.read_u16()?;
    species_by_id(species_id).ok_or_else(|| bad_data(format!("unknown species id {species_id}")))?;
    let level = r.read_u8()?;
    if !(LEVEL_MIN..=LEVEL_MAX).contains(&level) {
        return Err(bad_data(format!("level {level} outside 1-100")));
    }
    let experience = r.read_u32()?;
    let friendship = r.read_u8()?;
    let personality = r.read_u32()?;
    let held_raw = r.read_u16()?;
    let held_item = if held_raw == 0 {
        None
    } else {
        if crate::items::item_by_id(held_raw).is_none() {
            return Err(bad_data(format!("unknown held item id {held_raw}")));
        }
        Some(held_raw)
    };
    let status = StatusCondition::from_raw(r.read_u8()?)
        .ok_or_else(|| bad_data("invalid status condition"))?;
    let egg = r.read_u8()? != 0;
    let pokerus_strain = r.read_u8()?;
    let pokerus_days = r.read_u8()?;
    let ability_index = r.read_u8()?;

    let origin_game =
        Game::from_raw(r.read_u8()?).ok_or_else(|| bad_data("invalid origin game"))?;
    let origin = OriginInfo {
        game: origin_game,
        met_location: r.read_u16()?,
        met_level: r.read_u8()?,
        pokeball: r.read_u16()?,
        fateful_encounter: r.read_u8()? != 0,
    };

    let nickname = r.read_string()?;
    if nickname.is_empty() {
        return Err(bad_data("nickname is empty"));
    }
    let ot = OtIdentity {
        name: r.read_string()?,
        public_id: r.read_u16()?,
        secret_id: r.read_u16()?,
        gender: TrainerGender::from_raw(r.read_u8()?)
            .ok_or_else(|| bad_data("invalid original-trainer gender"))?,
    };

    let mut moves = [MoveSlot::empty(); MOVE_SLOTS];
    for slot in &mut moves {
        let move_id = r.read_u16()?;
        if move_id != MOVE_NONE && move_by_id(move_id).is_none() {
            return Err(bad_data(format!("unknown move id {move_id}")));
        }
        *slot = MoveSlot {
            move_id,
            pp: r.read_u8()?,
            pp_bonus: r.read_u8()?,
        };
    }

    let mut ivs = [0u8; STAT_COUNT];
    for iv in &mut ivs {
        *iv = r.read_u8()?;
    }
    let mut evs = [0u16; STAT_COUNT];
    for ev in &mut evs {
        *ev = r.read_u16()?;
    }

    Ok(CreatureRecord {
        game,
        species_id,
        nickname,
        level,
        experience,
        friendship,
        personality,
        held_item,
        moves,
        ivs,
        evs,
        status,
        origin,
        egg,
        pokerus_strain,
        pokerus_days,
        ability_index,
        ot,
    })
}

pub fn emit_creature<W: Write>(
    w: &mut BigEndianWriter<W>,
    creature: &CreatureRecord,
) -> io::Result<()> {
    w.write_u16(creature.species_id)?;
    w.write_u8(creature.level)?;
    w.write_u32(creature.experience)?;
    w.write_u8(creature.friendship)?;
    w.write_u32(creature.personality)?;
    w.write_u16(creature.held_item.unwrap_or(0))?;
    w.write_u8(creature.status.raw())?;
    w.write_u8(creature.egg as u8)?;
    w.write_u8(creature.pokerus_strain)?;
    w.write_u8(creature.pokerus_days)?;
    w.write_u8(creature.ability_index)?;

    w.write_u8(creature.origin.game.raw())?;
    w.write_u16(creature.origin.met_location)?;
    w.write_u8(creature.origin.met_level)?;
    w.write_u16(creature.origin.pokeball)?;
    w.write_u8(creature.origin.fateful_encounter as u8)?;

    w.write_string(&creature.nickname)?;
    w.write_string(&creature.ot.name)?;
    w.write_u16(creature.ot.public_id)?;
    w.write_u16(creature.ot.secret_id)?;
    w.write_u8(creature.ot.gender.raw())?;

    for slot in &creature.moves {
        w.write_u16(slot.move_id)?;
        w.write_u8(slot.pp)?;
        w.write_u8(slot.pp_bonus)?;
    }
    for iv in &creature.ivs {
        w.write_u8(*iv)?;
    }
    for ev in &creature.evs {
        w.write_u16(*ev)?;
    }
    Ok(())
}
