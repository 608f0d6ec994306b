use std::fmt;

use serde::{Deserialize, Serialize};

use crate::stats::Stat;

pub const NATURE_COUNT: u8 = 25;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Nature {
    Hardy,
    Lonely,
    Brave,
    Adamant,
    Naughty,
    Bold,
    Docile,
    Relaxed,
    Impish,
    Lax,
    Timid,
    Hasty,
    Serious,
    Jolly,
    Naive,
    Modest,
    Mild,
    Quiet,
    Bashful,
    Rash,
    Calm,
    Gentle,
    Sassy,
    Careful,
    Quirky,
}

const ALL: [Nature; NATURE_COUNT as usize] = [
    Nature::Hardy,
    Nature::Lonely,
    Nature::Brave,
    Nature::Adamant,
    Nature::Naughty,
    Nature::Bold,
    Nature::Docile,
    Nature::Relaxed,
    Nature::Impish,
    Nature::Lax,
    Nature::Timid,
    Nature::Hasty,
    Nature::Serious,
    Nature::Jolly,
    Nature::Naive,
    Nature::Modest,
    Nature::Mild,
    Nature::Quiet,
    Nature::Bashful,
    Nature::Rash,
    Nature::Calm,
    Nature::Gentle,
    Nature::Sassy,
    Nature::Careful,
    Nature::Quirky,
];

// Row order of the raised/lowered grid: Attack, Defense, Speed, Sp. Attack,
// Sp. Defense. Index / 5 picks the raised stat, index % 5 the lowered one.
const GRID: [Stat; 5] = [
    Stat::Attack,
    Stat::Defense,
    Stat::Speed,
    Stat::SpecialAttack,
    Stat::SpecialDefense,
];

impl Nature {
    pub fn all() -> &'static [Nature] {
        &ALL
    }

    pub fn from_index(index: u8) -> Option<Nature> {
        ALL.get(index as usize).copied()
    }

    pub fn index(self) -> u8 {
        ALL.iter()
            .position(|&n| n == self)
            .expect("ALL covers every nature") as u8
    }

    pub fn name(self) -> &'static str {
        match self {
            Nature::Hardy => "Hardy",
            Nature::Lonely => "Lonely",
            Nature::Brave => "Brave",
            Nature::Adamant => "Adamant",
            Nature::Naughty => "Naughty",
            Nature::Bold => "Bold",
            Nature::Docile => "Docile",
            Nature::Relaxed => "Relaxed",
            Nature::Impish => "Impish",
            Nature::Lax => "Lax",
            Nature::Timid => "Timid",
            Nature::Hasty => "Hasty",
            Nature::Serious => "Serious",
            Nature::Jolly => "Jolly",
            Nature::Naive => "Naive",
            Nature::Modest => "Modest",
            Nature::Mild => "Mild",
            Nature::Quiet => "Quiet",
            Nature::Bashful => "Bashful",
            Nature::Rash => "Rash",
            Nature::Calm => "Calm",
            Nature::Gentle => "Gentle",
            Nature::Sassy => "Sassy",
            Nature::Careful => "Careful",
            Nature::Quirky => "Quirky",
        }
    }

    /// Stat grown 10% faster, `None` for the five neutral natures.
    pub fn increased(self) -> Option<Stat> {
        let index = self.index();
        let raised = GRID[usize::from(index / 5)];
        let lowered = GRID[usize::from(index % 5)];
        (raised != lowered).then_some(raised)
    }

    /// Stat grown 10% slower, `None` for the five neutral natures.
    pub fn decreased(self) -> Option<Stat> {
        let index = self.index();
        let raised = GRID[usize::from(index / 5)];
        let lowered = GRID[usize::from(index % 5)];
        (raised != lowered).then_some(lowered)
    }
}

impl fmt::Display for Nature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn index_roundtrip() {
        for &nature in Nature::all() {
            assert_eq!(Nature::from_index(nature.index()), Some(nature));
        }
        assert_eq!(Nature::from_index(NATURE_COUNT), None);
    }

    #[test]
    fn neutral_natures_have_no_modifiers() {
        for nature in [
            Nature::Hardy,
            Nature::Docile,
            Nature::Serious,
            Nature::Bashful,
            Nature::Quirky,
        ] {
            assert_eq!(nature.increased(), None);
            assert_eq!(nature.decreased(), None);
        }
    }

    #[test]
    fn modest_raises_special_attack() {
        assert_eq!(Nature::Modest.increased(), Some(Stat::SpecialAttack));
        assert_eq!(Nature::Modest.decreased(), Some(Stat::Attack));
        assert_eq!(Nature::Adamant.increased(), Some(Stat::Attack));
        assert_eq!(Nature::Adamant.decreased(), Some(Stat::SpecialAttack));
    }
}
