use std::fs;
use std::path::PathBuf;
use std::process::Command;
use std::time::{SystemTime, UNIX_EPOCH};

use pkmn_core::core_api::Engine;
use pkmn_core::creature::{CreatureRecord, OtIdentity};
use pkmn_core::game::Game;
use pkmn_core::gender::TrainerGender;
use pkmn_core::items::ItemCategory;
use pkmn_core::savefile::SaveFile;
use pkmn_core::trainer::TrainerProfile;
use serde_json::Value;

fn run_cli(args: &[&str]) -> std::process::Output {
    Command::new(env!("CARGO_BIN_EXE_pkmn-se"))
        .args(args)
        .output()
        .expect("failed to run pkmn-se CLI")
}

fn temp_save_path(prefix: &str) -> PathBuf {
    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .expect("system time before unix epoch")
        .as_nanos();
    std::env::temp_dir().join(format!("pkmn_cli_{prefix}_{}_{}.sav", std::process::id(), nanos))
}

fn write_fixture(prefix: &str) -> PathBuf {
    let ot = OtIdentity {
        name: "BRENDAN".to_string(),
        public_id: 40_561,
        secret_id: 11_092,
        gender: TrainerGender::Male,
    };
    let starter = CreatureRecord::new(Game::Emerald, 25, 42, 0x1A2B_3C4D, ot)
        .expect("starter should construct");
    let mut trainer = TrainerProfile::new(
        Game::Emerald,
        "BRENDAN",
        TrainerGender::Male,
        40_561,
        11_092,
        starter,
    )
    .expect("profile should construct");
    trainer
        .add_item(ItemCategory::Pocket, "Potion", 5)
        .expect("Potion is a pocket item");

    let path = temp_save_path(prefix);
    let bytes = SaveFile::new(trainer).to_bytes().expect("fixture should serialize");
    fs::write(&path, bytes).expect("fixture should write");
    path
}

#[test]
fn cli_prints_requested_trainer_fields_in_fixed_order() {
    let path = write_fixture("fields");
    let path_str = path.to_string_lossy().to_string();

    let output = run_cli(&["--name", "--gender", "--money", &path_str]);
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    let lines: Vec<&str> = stdout.lines().collect();
    assert_eq!(lines, vec!["name=BRENDAN", "gender=Male", "money=0"]);

    let _ = fs::remove_file(&path);
}

#[test]
fn cli_prints_the_creature_sheet_for_a_slot() {
    let path = write_fixture("sheet");
    let path_str = path.to_string_lossy().to_string();

    let output = run_cli(&["--slot", "0", "--sheet", &path_str]);
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Pikachu (#25)"));
    assert!(stdout.contains("Personality: 0x1A2B3C4D"));

    let _ = fs::remove_file(&path);
}

#[test]
fn cli_lists_a_pocket() {
    let path = write_fixture("pocket");
    let path_str = path.to_string_lossy().to_string();

    let output = run_cli(&["--items", "items", &path_str]);
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert_eq!(stdout.trim(), "Potion=5");

    let _ = fs::remove_file(&path);
}

#[test]
fn cli_json_dump_is_an_object_with_canonical_keys() {
    let path = write_fixture("json");
    let path_str = path.to_string_lossy().to_string();

    let output = run_cli(&["--json", &path_str]);
    assert!(output.status.success());
    let value: Value =
        serde_json::from_slice(&output.stdout).expect("stdout should be valid JSON");
    assert_eq!(value["game"], "Emerald");
    assert_eq!(value["trainer"]["name"], "BRENDAN");

    let _ = fs::remove_file(&path);
}

#[test]
fn cli_edits_and_writes_the_output_file() {
    let path = write_fixture("edit");
    let path_str = path.to_string_lossy().to_string();
    let out_path = temp_save_path("edit_out");
    let out_str = out_path.to_string_lossy().to_string();

    let output = run_cli(&[
        "--slot",
        "0",
        "--set-level",
        "80",
        "--set-nature",
        "modest",
        "--set-money",
        "5000",
        "--output",
        &out_str,
        &path_str,
    ]);
    assert!(output.status.success(), "stderr: {}", String::from_utf8_lossy(&output.stderr));

    let mut session = Engine::new().open_session();
    session.open(&out_path).expect("edited save should load");
    assert_eq!(session.trainer_snapshot().expect("loaded").money, 5_000);
    let snapshot = session.select_creature(0).expect("slot 0 exists");
    assert_eq!(snapshot.level, 80);
    assert_eq!(
        snapshot.nature.map(|n| n.name()),
        Some("Modest")
    );

    let _ = fs::remove_file(&path);
    let _ = fs::remove_file(&out_path);
}

#[test]
fn cli_requires_a_slot_for_creature_edits() {
    let path = write_fixture("noslot");
    let path_str = path.to_string_lossy().to_string();

    let output = run_cli(&["--set-level", "80", &path_str]);
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("--slot"));

    let _ = fs::remove_file(&path);
}

#[test]
fn cli_reports_load_failures() {
    let path = temp_save_path("garbage");
    fs::write(&path, b"not a save").expect("garbage should write");
    let path_str = path.to_string_lossy().to_string();

    let output = run_cli(&["--name", &path_str]);
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("LoadFailure"));

    let _ = fs::remove_file(&path);
}
