use pkmn_core::core_api::{Engine, Session};
use pkmn_core::creature::{CreatureRecord, OtIdentity};
use pkmn_core::game::Game;
use pkmn_core::gender::TrainerGender;
use pkmn_core::items::ItemCategory;
use pkmn_core::savefile::SaveFile;
use pkmn_core::trainer::TrainerProfile;
use pkmn_render::{JsonStyle, TextStyle, render_creature_sheet, render_json_full, render_text};

fn fixture_session() -> Session {
    let ot = OtIdentity {
        name: "BRENDAN".to_string(),
        public_id: 40_561,
        secret_id: 11_092,
        gender: TrainerGender::Male,
    };
    let mut starter = CreatureRecord::new(Game::Emerald, 25, 42, 0x1A2B_3C4D, ot)
        .expect("starter should construct");
    starter.set_move(0, 85).expect("Thunderbolt is known");

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

    let bytes = SaveFile::new(trainer).to_bytes().expect("fixture should serialize");
    let mut session = Engine::new().open_session();
    session.open_bytes(&bytes).expect("fixture should load");
    session
}

#[test]
fn full_json_uses_canonical_top_level_order() {
    let session = fixture_session();
    let value = render_json_full(&session, JsonStyle::CanonicalV1).expect("session is loaded");
    let keys: Vec<&str> = value
        .as_object()
        .expect("json should be an object")
        .keys()
        .map(String::as_str)
        .collect();

    assert_eq!(keys, vec!["game", "trainer", "party", "pockets"]);
    assert_eq!(value["game"], "Emerald");
    assert_eq!(value["trainer"]["name"], "BRENDAN");
    assert_eq!(value["party"][0]["nickname"], "PIKACHU");
    assert_eq!(value["pockets"]["Items"][0]["name"], "Potion");
    assert_eq!(value["pockets"]["Items"][0]["quantity"], 5);
}

#[test]
fn json_renders_absent_fields_as_null() {
    let ot = OtIdentity {
        name: "RED".to_string(),
        public_id: 1,
        secret_id: 0,
        gender: TrainerGender::Male,
    };
    let starter =
        CreatureRecord::new(Game::Red, 25, 30, 0, ot).expect("gen 1 creature constructs");
    let trainer = TrainerProfile::new(Game::Red, "RED", TrainerGender::Male, 1, 0, starter)
        .expect("profile should construct");
    let bytes = SaveFile::new(trainer).to_bytes().expect("fixture should serialize");
    let mut session = Engine::new().open_session();
    session.open_bytes(&bytes).expect("fixture should load");

    let value = render_json_full(&session, JsonStyle::CanonicalV1).expect("session is loaded");
    assert!(value["party"][0]["gender"].is_null());
    assert!(value["party"][0]["shiny"].is_null());
}

#[test]
fn text_card_lists_the_party() {
    let session = fixture_session();
    let text = render_text(&session, TextStyle::TrainerCard).expect("session is loaded");
    assert!(text.contains("Pokemon Emerald"));
    assert!(text.contains("Trainer: BRENDAN (Male)"));
    assert!(text.contains("Nickname"));
    assert!(text.contains("PIKACHU"));
}

#[test]
fn creature_sheet_shows_derived_values() {
    let mut session = fixture_session();
    session.select_creature(0).expect("selection is valid");
    let sheet = render_creature_sheet(&session).expect("a creature is selected");

    assert!(sheet.contains("Pikachu (#25)"));
    assert!(sheet.contains("Personality: 0x1A2B3C4D"));
    assert!(sheet.contains("Nature:"));
    assert!(sheet.contains("Move 1: Thunderbolt"));
    assert!(sheet.contains("OT: BRENDAN (40561/11092)"));
}

#[test]
fn rendering_an_empty_session_reports_nothing_loaded() {
    let session = Engine::new().open_session();
    let err = render_json_full(&session, JsonStyle::CanonicalV1)
        .expect_err("nothing is loaded yet");
    assert_eq!(err.code, pkmn_core::core_api::CoreErrorCode::NothingLoaded);
}
