use std::fs;
use std::path::PathBuf;
use std::time::{SystemTime, UNIX_EPOCH};

use pkmn_core::core_api::{CoreErrorCode, Engine};
use pkmn_core::creature::{CreatureRecord, OtIdentity, StatusCondition};
use pkmn_core::game::Game;
use pkmn_core::gender::TrainerGender;
use pkmn_core::items::{ItemCategory, item_by_name};
use pkmn_core::savefile::{SaveFile, read_save_file, write_save_file};
use pkmn_core::stats::Stat;
use pkmn_core::trainer::{TimePlayed, TrainerProfile};

fn temp_save_path(prefix: &str) -> PathBuf {
    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .expect("system time before unix epoch")
        .as_nanos();
    std::env::temp_dir().join(format!("pkmn_se_{prefix}_{}_{}.sav", std::process::id(), nanos))
}

/// Non-trivial fixture: mixed party, held items, moves, status, Pokerus,
/// origin data and several pockets.
fn rich_save() -> SaveFile {
    let ot = OtIdentity {
        name: "BRENDAN".to_string(),
        public_id: 40_561,
        secret_id: 11_092,
        gender: TrainerGender::Male,
    };

    let mut pikachu = CreatureRecord::new(Game::Emerald, 25, 42, 0x1A2B_3C4D, ot.clone())
        .expect("Pikachu constructs");
    pikachu.set_move(0, 85).expect("Thunderbolt");
    pikachu.set_move(1, 98).expect("Quick Attack");
    pikachu.set_move_pp_bonus(0, 2).expect("bonus 2");
    pikachu
        .set_held_item(Some(item_by_name("Leftovers").expect("Leftovers exists").id))
        .expect("holdable");
    pikachu.set_friendship(200);
    pikachu.set_status(StatusCondition::Paralyzed);
    pikachu.set_infected(true);
    pikachu.set_ev(Stat::Speed, 252);
    pikachu.set_iv(Stat::Hp, 31);

    let mut kadabra = CreatureRecord::new(Game::Emerald, 64, 37, 0x0099_1122, ot.clone())
        .expect("Kadabra constructs");
    kadabra.set_nickname("Spoons").expect("nickname is valid");
    kadabra.set_fateful_encounter(true);
    kadabra.set_met_location(12).expect("Viridian Forest exists");
    kadabra.set_met_level(5).expect("met level is valid");

    let chansey = CreatureRecord::new(Game::Emerald, 113, 55, 0x7777_0001, ot)
        .expect("Chansey constructs");

    let mut trainer = TrainerProfile::new(
        Game::Emerald,
        "BRENDAN",
        TrainerGender::Male,
        40_561,
        11_092,
        pikachu,
    )
    .expect("profile constructs");
    trainer.add_creature(kadabra).expect("room in party");
    trainer.add_creature(chansey).expect("room in party");
    trainer.set_money(84_560);
    trainer.set_coins(120);
    trainer.set_time_played(TimePlayed {
        hours: 51,
        minutes: 12,
        seconds: 3,
    });
    trainer.add_item(ItemCategory::Pocket, "Potion", 9).expect("add");
    trainer.add_item(ItemCategory::Pocket, "Rare Candy", 42).expect("add");
    trainer
        .add_item(ItemCategory::Pokeball, "Ultra Ball", 33)
        .expect("add");
    trainer.add_item(ItemCategory::Berry, "Sitrus Berry", 7).expect("add");
    trainer.add_item(ItemCategory::Tm, "TM26", 1).expect("add");
    trainer.add_item(ItemCategory::KeyItem, "Bicycle", 1).expect("add");
    trainer.add_item(ItemCategory::Pc, "Master Ball", 2).expect("add");

    SaveFile::new(trainer)
}

#[test]
fn load_write_load_preserves_every_field() {
    let save = rich_save();
    let path = temp_save_path("roundtrip");

    write_save_file(&path, &save, false).expect("write should succeed");
    let reloaded = read_save_file(&path).expect("read should succeed");
    assert_eq!(reloaded, save);

    // And the re-encoding is byte-stable.
    let first = save.to_bytes().expect("serialize");
    let second = reloaded.to_bytes().expect("serialize");
    assert_eq!(first, second);

    let _ = fs::remove_file(&path);
}

#[test]
fn session_roundtrip_preserves_public_accessors() {
    let save = rich_save();
    let path = temp_save_path("session_roundtrip");
    write_save_file(&path, &save, false).expect("write should succeed");

    let mut session = Engine::new().open_session();
    session.open(&path).expect("open should succeed");

    let out_path = temp_save_path("session_roundtrip_out");
    session.save(&out_path, false).expect("save should succeed");

    let mut reopened = Engine::new().open_session();
    reopened.open(&out_path).expect("reopen should succeed");

    assert_eq!(
        session.trainer_snapshot().expect("loaded"),
        reopened.trainer_snapshot().expect("loaded")
    );
    assert_eq!(
        session.party().expect("loaded"),
        reopened.party().expect("loaded")
    );
    for category in ItemCategory::ALL {
        assert_eq!(
            session.pocket(category).expect("loaded"),
            reopened.pocket(category).expect("loaded")
        );
    }
    for index in 0..session.party().expect("loaded").len() {
        assert_eq!(
            session.select_creature(index).expect("valid index"),
            reopened.select_creature(index).expect("valid index")
        );
    }

    let _ = fs::remove_file(&path);
    let _ = fs::remove_file(&out_path);
}

#[test]
fn checksum_corruption_fails_the_load() {
    let mut bytes = rich_save().to_bytes().expect("serialize");
    // Flip a bit in the compressed body, past the header and trailer fields.
    let target = bytes.len() - 1;
    bytes[target] ^= 0x01;

    let mut session = Engine::new().open_session();
    let err = session
        .open_bytes(&bytes)
        .expect_err("corrupt body should fail the checksum");
    assert_eq!(err.code, CoreErrorCode::LoadFailure);
    assert!(err.message.contains("checksum"));
}

#[test]
fn truncation_fails_the_load() {
    let mut bytes = rich_save().to_bytes().expect("serialize");
    bytes.truncate(bytes.len() / 2);

    let mut session = Engine::new().open_session();
    let err = session
        .open_bytes(&bytes)
        .expect_err("truncated input should fail");
    assert_eq!(err.code, CoreErrorCode::LoadFailure);
}

#[test]
fn foreign_magic_fails_the_load() {
    let mut session = Engine::new().open_session();
    let err = session
        .open_bytes(b"GBA0not a save at all")
        .expect_err("wrong magic should fail");
    assert_eq!(err.code, CoreErrorCode::LoadFailure);
}

#[test]
fn missing_file_fails_the_load_and_keeps_the_session_empty() {
    let mut session = Engine::new().open_session();
    let err = session
        .open(&temp_save_path("does_not_exist"))
        .expect_err("missing file should fail");
    assert_eq!(err.code, CoreErrorCode::LoadFailure);
    assert!(!session.is_loaded());
}

#[test]
fn backup_preserves_the_previous_file() {
    let save = rich_save();
    let path = temp_save_path("backup_chain");
    write_save_file(&path, &save, false).expect("first write");
    let first = fs::read(&path).expect("file exists");

    let mut changed = save.clone();
    changed.trainer.set_money(1);
    write_save_file(&path, &changed, true).expect("second write");

    let backup_path = PathBuf::from(format!("{}.bak", path.display()));
    assert_eq!(fs::read(&backup_path).expect("backup exists"), first);
    assert_eq!(
        read_save_file(&path).expect("new content loads").trainer.money(),
        1
    );

    let _ = fs::remove_file(&path);
    let _ = fs::remove_file(&backup_path);
}
