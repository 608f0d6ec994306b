use serde::{Deserialize, Serialize};

use crate::growth::GrowthRate;
use crate::stats::STAT_COUNT;

/// Species gender distribution. `FemaleThreshold(t)` species decode gender
/// from the personality value: female when the low byte is below `t`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GenderRatio {
    Genderless,
    MaleOnly,
    FemaleOnly,
    FemaleThreshold(u8),
}

impl GenderRatio {
    /// Attack-DV cutoff for generations that derive gender from DVs:
    /// female when the attack DV is at or below the cutoff.
    pub fn female_dv_cutoff(self) -> Option<u8> {
        match self {
            GenderRatio::FemaleThreshold(t) => Some(t >> 4),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SpeciesInfo {
    pub id: u16,
    pub name: &'static str,
    /// Base stats in `Stat` slot order: HP, Attack, Defense, Speed,
    /// Sp. Attack, Sp. Defense.
    pub base: [u8; STAT_COUNT],
    pub gender_ratio: GenderRatio,
    pub growth: GrowthRate,
    /// Ability pair; `"_"` marks an empty second slot.
    pub abilities: [&'static str; 2],
    /// Species this one becomes when traded, if any.
    pub trade_evolution: Option<u16>,
}

impl SpeciesInfo {
    /// Nickname assigned by the games when none was chosen.
    pub fn default_nickname(&self) -> String {
        self.name.to_ascii_uppercase()
    }

    pub fn ability_count(&self) -> u8 {
        if self.abilities[1] == "_" { 1 } else { 2 }
    }
}

use GenderRatio::{FemaleOnly, FemaleThreshold, Genderless, MaleOnly};
use GrowthRate::{Fast, MediumFast, MediumSlow, Slow};

#[rustfmt::skip]
const SPECIES: &[SpeciesInfo] = &[
    SpeciesInfo { id:   1, name: "Bulbasaur",  base: [ 45,  49,  49,  45,  65,  65], gender_ratio: FemaleThreshold(31),  growth: MediumSlow, abilities: ["Overgrow", "_"],                 trade_evolution: None },
    SpeciesInfo { id:   4, name: "Charmander", base: [ 39,  52,  43,  65,  60,  50], gender_ratio: FemaleThreshold(31),  growth: MediumSlow, abilities: ["Blaze", "_"],                    trade_evolution: None },
    SpeciesInfo { id:   7, name: "Squirtle",   base: [ 44,  48,  65,  43,  50,  64], gender_ratio: FemaleThreshold(31),  growth: MediumSlow, abilities: ["Torrent", "_"],                  trade_evolution: None },
    SpeciesInfo { id:  25, name: "Pikachu",    base: [ 35,  55,  40,  90,  50,  50], gender_ratio: FemaleThreshold(127), growth: MediumFast, abilities: ["Static", "_"],                   trade_evolution: None },
    SpeciesInfo { id:  63, name: "Abra",       base: [ 25,  20,  15,  90, 105,  55], gender_ratio: FemaleThreshold(63),  growth: MediumSlow, abilities: ["Synchronize", "Inner Focus"],    trade_evolution: None },
    SpeciesInfo { id:  64, name: "Kadabra",    base: [ 40,  35,  30, 105, 120,  70], gender_ratio: FemaleThreshold(63),  growth: MediumSlow, abilities: ["Synchronize", "Inner Focus"],    trade_evolution: Some(65) },
    SpeciesInfo { id:  65, name: "Alakazam",   base: [ 55,  50,  45, 120, 135,  85], gender_ratio: FemaleThreshold(63),  growth: MediumSlow, abilities: ["Synchronize", "Inner Focus"],    trade_evolution: None },
    SpeciesInfo { id:  66, name: "Machop",     base: [ 70,  80,  50,  35,  35,  35], gender_ratio: FemaleThreshold(63),  growth: MediumSlow, abilities: ["Guts", "_"],                     trade_evolution: None },
    SpeciesInfo { id:  67, name: "Machoke",    base: [ 80, 100,  70,  45,  50,  60], gender_ratio: FemaleThreshold(63),  growth: MediumSlow, abilities: ["Guts", "_"],                     trade_evolution: Some(68) },
    SpeciesInfo { id:  68, name: "Machamp",    base: [ 90, 130,  80,  55,  65,  85], gender_ratio: FemaleThreshold(63),  growth: MediumSlow, abilities: ["Guts", "_"],                     trade_evolution: None },
    SpeciesInfo { id:  74, name: "Geodude",    base: [ 40,  80, 100,  20,  30,  30], gender_ratio: FemaleThreshold(127), growth: MediumSlow, abilities: ["Rock Head", "Sturdy"],           trade_evolution: None },
    SpeciesInfo { id:  75, name: "Graveler",   base: [ 55,  95, 115,  35,  45,  45], gender_ratio: FemaleThreshold(127), growth: MediumSlow, abilities: ["Rock Head", "Sturdy"],           trade_evolution: Some(76) },
    SpeciesInfo { id:  76, name: "Golem",      base: [ 80, 110, 130,  45,  55,  65], gender_ratio: FemaleThreshold(127), growth: MediumSlow, abilities: ["Rock Head", "Sturdy"],           trade_evolution: None },
    SpeciesInfo { id:  81, name: "Magnemite",  base: [ 25,  35,  70,  45,  95,  55], gender_ratio: Genderless,           growth: MediumFast, abilities: ["Magnet Pull", "Sturdy"],         trade_evolution: None },
    SpeciesInfo { id:  92, name: "Gastly",     base: [ 30,  35,  30,  80, 100,  35], gender_ratio: FemaleThreshold(127), growth: MediumSlow, abilities: ["Levitate", "_"],                 trade_evolution: None },
    SpeciesInfo { id:  93, name: "Haunter",    base: [ 45,  50,  45,  95, 115,  55], gender_ratio: FemaleThreshold(127), growth: MediumSlow, abilities: ["Levitate", "_"],                 trade_evolution: Some(94) },
    SpeciesInfo { id:  94, name: "Gengar",     base: [ 60,  65,  60, 110, 130,  75], gender_ratio: FemaleThreshold(127), growth: MediumSlow, abilities: ["Levitate", "_"],                 trade_evolution: None },
    SpeciesInfo { id: 113, name: "Chansey",    base: [250,   5,   5,  50,  35, 105], gender_ratio: FemaleOnly,           growth: Fast,       abilities: ["Natural Cure", "Serene Grace"],  trade_evolution: None },
    SpeciesInfo { id: 128, name: "Tauros",     base: [ 75, 100,  95, 110,  40,  70], gender_ratio: MaleOnly,             growth: Slow,       abilities: ["Intimidate", "_"],               trade_evolution: None },
    SpeciesInfo { id: 129, name: "Magikarp",   base: [ 20,  10,  55,  80,  15,  20], gender_ratio: FemaleThreshold(127), growth: Slow,       abilities: ["Swift Swim", "_"],               trade_evolution: None },
    SpeciesInfo { id: 130, name: "Gyarados",   base: [ 95, 125,  79,  81,  60, 100], gender_ratio: FemaleThreshold(127), growth: Slow,       abilities: ["Intimidate", "_"],               trade_evolution: None },
    SpeciesInfo { id: 143, name: "Snorlax",    base: [160, 110,  65,  30,  65, 110], gender_ratio: FemaleThreshold(31),  growth: Slow,       abilities: ["Immunity", "Thick Fat"],         trade_evolution: None },
    SpeciesInfo { id: 150, name: "Mewtwo",     base: [106, 110,  90, 130, 154,  90], gender_ratio: Genderless,           growth: Slow,       abilities: ["Pressure", "_"],                 trade_evolution: None },
    SpeciesInfo { id: 151, name: "Mew",        base: [100, 100, 100, 100, 100, 100], gender_ratio: Genderless,           growth: MediumSlow, abilities: ["Synchronize", "_"],              trade_evolution: None },
];

pub fn species_list() -> &'static [SpeciesInfo] {
    SPECIES
}

pub fn species_by_id(id: u16) -> Option<&'static SpeciesInfo> {
    SPECIES.iter().find(|s| s.id == id)
}

pub fn species_by_name(name: &str) -> Option<&'static SpeciesInfo> {
    SPECIES.iter().find(|s| s.name.eq_ignore_ascii_case(name))
}
