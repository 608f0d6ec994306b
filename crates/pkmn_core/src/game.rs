use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Game {
    Red,
    Blue,
    Yellow,
    Gold,
    Silver,
    Crystal,
    Ruby,
    Sapphire,
    Emerald,
    FireRed,
    LeafGreen,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Generation {
    One,
    Two,
    Three,
}

impl Game {
    pub const ALL: [Game; 11] = [
        Game::Red,
        Game::Blue,
        Game::Yellow,
        Game::Gold,
        Game::Silver,
        Game::Crystal,
        Game::Ruby,
        Game::Sapphire,
        Game::Emerald,
        Game::FireRed,
        Game::LeafGreen,
    ];

    pub fn from_raw(raw: u8) -> Option<Game> {
        Game::ALL.get(raw as usize).copied()
    }

    pub fn raw(self) -> u8 {
        Game::ALL
            .iter()
            .position(|&g| g == self)
            .expect("Game::ALL covers every variant") as u8
    }

    pub fn name(self) -> &'static str {
        match self {
            Game::Red => "Red",
            Game::Blue => "Blue",
            Game::Yellow => "Yellow",
            Game::Gold => "Gold",
            Game::Silver => "Silver",
            Game::Crystal => "Crystal",
            Game::Ruby => "Ruby",
            Game::Sapphire => "Sapphire",
            Game::Emerald => "Emerald",
            Game::FireRed => "FireRed",
            Game::LeafGreen => "LeafGreen",
        }
    }

    pub fn generation(self) -> Generation {
        match self {
            Game::Red | Game::Blue | Game::Yellow => Generation::One,
            Game::Gold | Game::Silver | Game::Crystal => Generation::Two,
            Game::Ruby | Game::Sapphire | Game::Emerald | Game::FireRed | Game::LeafGreen => {
                Generation::Three
            }
        }
    }
}

impl Generation {
    pub fn number(self) -> u8 {
        match self {
            Generation::One => 1,
            Generation::Two => 2,
            Generation::Three => 3,
        }
    }

    pub fn limits(self) -> GameLimits {
        match self {
            Generation::One => GameLimits {
                max_money: 999_999,
                max_coins: 9_999,
                trainer_name_len: 7,
                nickname_len: 10,
                iv_max: 15,
                ev_max: 65_535,
                quantity_max: 99,
            },
            Generation::Two => GameLimits {
                max_money: 999_999,
                max_coins: 9_999,
                trainer_name_len: 7,
                nickname_len: 10,
                iv_max: 15,
                ev_max: 65_535,
                quantity_max: 99,
            },
            Generation::Three => GameLimits {
                max_money: 999_999,
                max_coins: 9_999,
                trainer_name_len: 7,
                nickname_len: 10,
                iv_max: 31,
                ev_max: 252,
                quantity_max: 999,
            },
        }
    }
}

/// Editable-value ceilings that differ between game generations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameLimits {
    pub max_money: u32,
    pub max_coins: u16,
    pub trainer_name_len: usize,
    pub nickname_len: usize,
    pub iv_max: u8,
    pub ev_max: u16,
    pub quantity_max: u16,
}

pub const LEVEL_MIN: u8 = 1;
pub const LEVEL_MAX: u8 = 100;
pub const PP_BONUS_MAX: u8 = 3;
pub const PARTY_MAX: usize = 6;
