use std::fs;
use std::path::PathBuf;
use std::time::{SystemTime, UNIX_EPOCH};

use pkmn_core::capability::FieldId;
use pkmn_core::core_api::{CoreErrorCode, Engine, Session};
use pkmn_core::creature::{CreatureRecord, OtIdentity};
use pkmn_core::game::Game;
use pkmn_core::gender::TrainerGender;
use pkmn_core::items::ItemCategory;
use pkmn_core::nature::Nature;
use pkmn_core::savefile::SaveFile;
use pkmn_core::stats::Stat;
use pkmn_core::trainer::TrainerProfile;

fn ot() -> OtIdentity {
    OtIdentity {
        name: "BRENDAN".to_string(),
        public_id: 40_561,
        secret_id: 11_092,
        gender: TrainerGender::Male,
    }
}

fn sample_save(game: Game) -> Vec<u8> {
    let mut starter =
        CreatureRecord::new(game, 25, 30, 0x1A2B_3C4D, ot()).expect("starter should construct");
    starter.set_move(0, 85).expect("Thunderbolt is known");
    starter.set_move(1, 98).expect("Quick Attack is known");

    let mut trainer = TrainerProfile::new(
        game,
        "BRENDAN",
        TrainerGender::Male,
        40_561,
        11_092,
        starter,
    )
    .expect("profile should construct");
    trainer
        .add_creature(
            CreatureRecord::new(game, 64, 40, 0x0099_1122, ot()).expect("Kadabra constructs"),
        )
        .expect("party has room");
    trainer
        .add_item(ItemCategory::Pocket, "Potion", 5)
        .expect("Potion is a pocket item");
    trainer
        .add_item(ItemCategory::Pokeball, "Ultra Ball", 12)
        .expect("Ultra Ball is a ball");

    SaveFile::new(trainer).to_bytes().expect("fixture should serialize")
}

fn loaded_session(game: Game) -> Session {
    let mut session = Engine::new().open_session();
    session
        .open_bytes(&sample_save(game))
        .expect("fixture should load");
    session
}

fn temp_save_path(prefix: &str) -> PathBuf {
    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .expect("system time before unix epoch")
        .as_nanos();
    std::env::temp_dir().join(format!("pkmn_se_{prefix}_{}_{}.sav", std::process::id(), nanos))
}

#[test]
fn open_bytes_populates_the_trainer_snapshot() {
    let session = loaded_session(Game::Emerald);
    let snapshot = session.trainer_snapshot().expect("session is loaded");

    assert_eq!(snapshot.game, Game::Emerald);
    assert_eq!(snapshot.game_label, "Pokemon Emerald");
    assert_eq!(snapshot.name, "BRENDAN");
    assert_eq!(snapshot.public_id, 40_561);
    assert_eq!(snapshot.party_size, 2);
    assert_eq!(snapshot.max_money, 999_999);
}

#[test]
fn commands_before_open_report_nothing_loaded() {
    let mut session = Engine::new().open_session();
    assert!(!session.is_loaded());

    let err = session
        .trainer_snapshot()
        .expect_err("no save is loaded yet");
    assert_eq!(err.code, CoreErrorCode::NothingLoaded);

    let err = session
        .save(&temp_save_path("premature"), false)
        .expect_err("saving requires a loaded save");
    assert_eq!(err.code, CoreErrorCode::NothingLoaded);

    let err = session
        .set_money(100)
        .expect_err("edits require a loaded save");
    assert_eq!(err.code, CoreErrorCode::NothingLoaded);
}

#[test]
fn failed_open_leaves_prior_state_untouched() {
    let mut session = loaded_session(Game::Emerald);
    session.select_creature(1).expect("party has two members");

    let err = session
        .open_bytes(b"definitely not a save")
        .expect_err("garbage should not parse");
    assert_eq!(err.code, CoreErrorCode::LoadFailure);

    // Prior save and selection both survive the failed open.
    assert!(session.is_loaded());
    assert_eq!(session.selected_index(), Some(1));
    assert_eq!(
        session.trainer_snapshot().expect("still loaded").name,
        "BRENDAN"
    );
}

#[test]
fn successful_open_discards_prior_state() {
    let mut session = loaded_session(Game::Emerald);
    session.select_creature(0).expect("selection is valid");

    session
        .open_bytes(&sample_save(Game::Crystal))
        .expect("second fixture should load");
    assert_eq!(session.game(), Some(Game::Crystal));
    assert_eq!(session.selected_index(), None);
}

#[test]
fn selection_guards_against_stale_positions() {
    let mut session = loaded_session(Game::Emerald);
    let err = session
        .select_creature(5)
        .expect_err("index 5 is out of range");
    assert_eq!(err.code, CoreErrorCode::InvalidValue);

    session.select_creature(1).expect("index 1 is valid");
    session.remove_creature(0).expect("two members allow removal");
    // The selected creature shifted down with the deletion.
    assert_eq!(session.selected_index(), Some(0));

    let mut session = loaded_session(Game::Emerald);
    session.select_creature(0).expect("index 0 is valid");
    session.remove_creature(0).expect("two members allow removal");
    assert_eq!(session.selected_index(), None);
    let err = session
        .creature_snapshot()
        .expect_err("selection was invalidated by the deletion");
    assert_eq!(err.code, CoreErrorCode::InvalidValue);
}

#[test]
fn party_never_drops_below_one_member() {
    let mut session = loaded_session(Game::Emerald);
    session.remove_creature(1).expect("two members allow removal");
    let err = session
        .remove_creature(0)
        .expect_err("sole member is protected");
    assert_eq!(err.code, CoreErrorCode::InvalidValue);
    assert_eq!(session.party().expect("loaded").len(), 1);
}

#[test]
fn save_roundtrips_through_disk_and_supports_backup() {
    let mut session = loaded_session(Game::Emerald);
    let path = temp_save_path("backup");

    session.save(&path, false).expect("first save should succeed");
    let first_bytes = fs::read(&path).expect("save file should exist");

    session.set_money(123_456).expect("money edit is legal");
    session.save(&path, true).expect("second save should succeed");

    let backup_path = PathBuf::from(format!("{}.bak", path.display()));
    let backup_bytes = fs::read(&backup_path).expect("backup should exist");
    assert_eq!(backup_bytes, first_bytes);

    let mut reopened = Engine::new().open_session();
    reopened.open(&path).expect("saved file should load");
    assert_eq!(
        reopened.trainer_snapshot().expect("loaded").money,
        123_456
    );

    let _ = fs::remove_file(&path);
    let _ = fs::remove_file(&backup_path);
}

#[test]
fn write_failure_keeps_the_session_usable() {
    let session = loaded_session(Game::Emerald);
    let path = std::env::temp_dir()
        .join("pkmn_se_missing_dir")
        .join("nested")
        .join("save.sav");

    let err = session
        .save(&path, false)
        .expect_err("missing directory should fail");
    assert_eq!(err.code, CoreErrorCode::WriteFailure);
    assert_eq!(
        session.trainer_snapshot().expect("still loaded").name,
        "BRENDAN"
    );
}

#[test]
fn legality_toggle_applies_without_reloading() {
    let mut session = loaded_session(Game::Emerald);
    session.select_creature(0).expect("selection is valid");

    let err = session
        .set_iv(Stat::Attack, 31)
        .expect_err("IVs are gated by default");
    assert_eq!(err.code, CoreErrorCode::FieldNotWritable);
    assert_eq!(session.is_writable(FieldId::Ivs).expect("selected"), false);

    let refresh = session.set_allow_illegal(true);
    assert!(refresh.contains(&FieldId::Capabilities));
    assert_eq!(session.is_writable(FieldId::Ivs).expect("selected"), true);
    session
        .set_iv(Stat::Attack, 31)
        .expect("override makes the write succeed");
    assert_eq!(session.creature_snapshot().expect("selected").ivs[1], 31);
}

#[test]
fn absent_fields_read_inert_and_reject_writes() {
    let mut session = loaded_session(Game::Red);
    session.select_creature(0).expect("selection is valid");

    let snapshot = session.creature_snapshot().expect("selected");
    assert_eq!(snapshot.nature, None);
    assert_eq!(snapshot.gender, None);
    assert_eq!(snapshot.shiny, None);
    assert_eq!(snapshot.friendship, None);
    assert_eq!(snapshot.personality_value, None);
    assert!(!snapshot.split_special);

    let err = session
        .set_nature(Some(Nature::Modest))
        .expect_err("gen 1 has no natures");
    assert_eq!(err.code, CoreErrorCode::FieldNotWritable);
    // Even the override cannot conjure a field the schema lacks.
    session.set_allow_illegal(true);
    let err = session
        .set_nature(Some(Nature::Modest))
        .expect_err("gen 1 still has no natures");
    assert_eq!(err.code, CoreErrorCode::FieldNotWritable);
}

#[test]
fn unset_nature_sentinel_is_rejected() {
    let mut session = loaded_session(Game::Emerald);
    session.select_creature(0).expect("selection is valid");
    let err = session
        .set_nature(None)
        .expect_err("the unset choice is not a nature");
    assert_eq!(err.code, CoreErrorCode::InvalidValue);
}

#[test]
fn snapshots_serialize_for_the_presentation_layer() {
    let mut session = loaded_session(Game::Emerald);
    let snapshot = session.select_creature(0).expect("selection is valid");

    let json = serde_json::to_string(&snapshot).expect("snapshot encodes");
    let decoded: pkmn_core::core_api::CreatureSnapshot =
        serde_json::from_str(&json).expect("snapshot decodes");
    assert_eq!(decoded, snapshot);
}

#[test]
fn failed_edit_leaves_the_record_unchanged() {
    let mut session = loaded_session(Game::Emerald);
    session.select_creature(0).expect("selection is valid");
    let before = session.creature_snapshot().expect("selected");

    let err = session.set_level(0).expect_err("level 0 is invalid");
    assert_eq!(err.code, CoreErrorCode::InvalidValue);

    let after = session.creature_snapshot().expect("selected");
    assert_eq!(before, after);
}
