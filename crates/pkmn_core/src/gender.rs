use std::fmt;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TrainerGender {
    Male,
    Female,
}

impl TrainerGender {
    pub const MALE_RAW: u8 = 0;
    pub const FEMALE_RAW: u8 = 1;

    pub fn from_raw(raw: u8) -> Option<Self> {
        match raw {
            Self::MALE_RAW => Some(Self::Male),
            Self::FEMALE_RAW => Some(Self::Female),
            _ => None,
        }
    }

    pub fn raw(self) -> u8 {
        match self {
            Self::Male => Self::MALE_RAW,
            Self::Female => Self::FEMALE_RAW,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Male => "Male",
            Self::Female => "Female",
        }
    }
}

impl fmt::Display for TrainerGender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CreatureGender {
    Male,
    Female,
    Genderless,
}

impl CreatureGender {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Male => "Male",
            Self::Female => "Female",
            Self::Genderless => "Genderless",
        }
    }
}

impl fmt::Display for CreatureGender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
