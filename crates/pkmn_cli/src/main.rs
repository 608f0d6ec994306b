use std::path::PathBuf;
use std::process;

use clap::{Parser, ValueEnum};
use pkmn_core::core_api::{CoreError, Engine, Session};
use pkmn_core::gender::{CreatureGender, TrainerGender};
use pkmn_core::items::ItemCategory;
use pkmn_core::nature::Nature;
use pkmn_render::{JsonStyle, TextStyle, render_creature_sheet, render_json_full, render_text};

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
enum GenderArg {
    Male,
    Female,
}

impl From<GenderArg> for TrainerGender {
    fn from(value: GenderArg) -> Self {
        match value {
            GenderArg::Male => TrainerGender::Male,
            GenderArg::Female => TrainerGender::Female,
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
enum CreatureGenderArg {
    Male,
    Female,
    Genderless,
}

impl From<CreatureGenderArg> for CreatureGender {
    fn from(value: CreatureGenderArg) -> Self {
        match value {
            CreatureGenderArg::Male => CreatureGender::Male,
            CreatureGenderArg::Female => CreatureGender::Female,
            CreatureGenderArg::Genderless => CreatureGender::Genderless,
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
enum PocketArg {
    Items,
    Balls,
    Berries,
    Tms,
    Key,
    Pc,
}

impl From<PocketArg> for ItemCategory {
    fn from(value: PocketArg) -> Self {
        match value {
            PocketArg::Items => ItemCategory::Pocket,
            PocketArg::Balls => ItemCategory::Pokeball,
            PocketArg::Berries => ItemCategory::Berry,
            PocketArg::Tms => ItemCategory::Tm,
            PocketArg::Key => ItemCategory::KeyItem,
            PocketArg::Pc => ItemCategory::Pc,
        }
    }
}

fn parse_nature(value: &str) -> Result<Nature, String> {
    Nature::all()
        .iter()
        .copied()
        .find(|n| n.name().eq_ignore_ascii_case(value))
        .ok_or_else(|| format!("unknown nature {value}"))
}

#[derive(Debug, Parser)]
#[command(author, version, about)]
struct Cli {
    #[arg(value_name = "SAVE.PKSV")]
    path: PathBuf,

    /// Party slot targeted by creature queries and edits (0-based).
    #[arg(long)]
    slot: Option<usize>,

    #[arg(long)]
    name: bool,
    #[arg(long)]
    gender: bool,
    #[arg(long)]
    money: bool,
    #[arg(long)]
    coins: bool,
    #[arg(long)]
    ids: bool,
    #[arg(long)]
    party: bool,
    #[arg(long, value_enum, value_name = "POCKET")]
    items: Option<PocketArg>,
    /// Print the selected creature's editor sheet.
    #[arg(long)]
    sheet: bool,
    #[arg(long)]
    json: bool,

    #[arg(long = "set-name")]
    set_name: Option<String>,
    #[arg(long = "set-gender", value_enum)]
    set_gender: Option<GenderArg>,
    #[arg(long = "set-money")]
    set_money: Option<u32>,
    #[arg(long = "set-coins")]
    set_coins: Option<u16>,
    #[arg(long = "set-nickname")]
    set_nickname: Option<String>,
    #[arg(long = "set-level")]
    set_level: Option<u8>,
    #[arg(long = "set-exp")]
    set_exp: Option<u32>,
    #[arg(long = "set-nature", value_parser = parse_nature)]
    set_nature: Option<Nature>,
    #[arg(long = "set-creature-gender", value_enum)]
    set_creature_gender: Option<CreatureGenderArg>,
    #[arg(long = "set-shiny")]
    set_shiny: Option<bool>,
    #[arg(long = "simulate-trade")]
    simulate_trade: bool,

    /// Permit edits the games could not produce themselves.
    #[arg(long = "allow-illegal")]
    allow_illegal: bool,
    /// Keep the previous file as .bak when writing.
    #[arg(long)]
    backup: bool,
    /// Write the (possibly edited) save here.
    #[arg(long)]
    output: Option<PathBuf>,
}

impl Cli {
    fn has_edits(&self) -> bool {
        self.set_name.is_some()
            || self.set_gender.is_some()
            || self.set_money.is_some()
            || self.set_coins.is_some()
            || self.set_nickname.is_some()
            || self.set_level.is_some()
            || self.set_exp.is_some()
            || self.set_nature.is_some()
            || self.set_creature_gender.is_some()
            || self.set_shiny.is_some()
            || self.simulate_trade
    }

    fn needs_slot(&self) -> bool {
        self.sheet
            || self.set_nickname.is_some()
            || self.set_level.is_some()
            || self.set_exp.is_some()
            || self.set_nature.is_some()
            || self.set_creature_gender.is_some()
            || self.set_shiny.is_some()
            || self.simulate_trade
    }
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    if let Err(err) = run(&cli) {
        eprintln!("error: {err}");
        process::exit(1);
    }
}

fn run(cli: &Cli) -> Result<(), CoreError> {
    let mut session = Engine::new().open_session();
    session.open(&cli.path)?;

    if cli.allow_illegal {
        session.set_allow_illegal(true);
    }

    if let Some(slot) = cli.slot {
        session.select_creature(slot)?;
    } else if cli.needs_slot() {
        return Err(CoreError::new(
            pkmn_core::core_api::CoreErrorCode::InvalidValue,
            "creature queries and edits need --slot",
        ));
    }

    apply_edits(&mut session, cli)?;
    print_queries(&session, cli)?;

    if let Some(output) = &cli.output {
        session.save(output, cli.backup)?;
    } else if cli.has_edits() {
        eprintln!("note: edits were applied in memory; pass --output to write them");
    }

    Ok(())
}

fn apply_edits(session: &mut Session, cli: &Cli) -> Result<(), CoreError> {
    if let Some(name) = &cli.set_name {
        session.set_trainer_name(name)?;
    }
    if let Some(gender) = cli.set_gender {
        session.set_trainer_gender(gender.into())?;
    }
    if let Some(money) = cli.set_money {
        session.set_money(money)?;
    }
    if let Some(coins) = cli.set_coins {
        session.set_coins(coins)?;
    }
    if let Some(nickname) = &cli.set_nickname {
        session.set_nickname(nickname)?;
    }
    if let Some(level) = cli.set_level {
        session.set_level(level)?;
    }
    if let Some(exp) = cli.set_exp {
        session.set_experience(exp)?;
    }
    if let Some(nature) = cli.set_nature {
        session.set_nature(Some(nature))?;
    }
    if let Some(gender) = cli.set_creature_gender {
        session.set_creature_gender(gender.into())?;
    }
    if let Some(shiny) = cli.set_shiny {
        session.set_shiny(shiny)?;
    }
    if cli.simulate_trade {
        session.simulate_trade_evolution()?;
    }
    Ok(())
}

fn print_queries(session: &Session, cli: &Cli) -> Result<(), CoreError> {
    if cli.json {
        let value = render_json_full(session, JsonStyle::CanonicalV1)?;
        println!("{}", serde_json::to_string_pretty(&value).expect("json encodes"));
        return Ok(());
    }

    let field_mode = cli.name || cli.gender || cli.money || cli.coins || cli.ids;
    if field_mode {
        let trainer = session.trainer_snapshot()?;
        if cli.name {
            println!("name={}", trainer.name);
        }
        if cli.gender {
            println!("gender={}", trainer.gender);
        }
        if cli.money {
            println!("money={}", trainer.money);
        }
        if cli.coins {
            println!("coins={}", trainer.coins);
        }
        if cli.ids {
            println!("ids={}/{}", trainer.public_id, trainer.secret_id);
        }
    }

    if cli.party {
        print!("{}", render_text(session, TextStyle::TrainerCard)?);
    }
    if cli.sheet {
        print!("{}", render_creature_sheet(session)?);
    }
    if let Some(pocket) = cli.items {
        for entry in session.pocket(pocket.into())? {
            println!("{}={}", entry.name, entry.quantity);
        }
    }
    Ok(())
}
