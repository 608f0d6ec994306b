use serde::{Deserialize, Serialize};

use crate::game::{LEVEL_MAX, LEVEL_MIN};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GrowthRate {
    Fast,
    MediumFast,
    MediumSlow,
    Slow,
}

impl GrowthRate {
    pub fn name(self) -> &'static str {
        match self {
            GrowthRate::Fast => "Fast",
            GrowthRate::MediumFast => "Medium Fast",
            GrowthRate::MediumSlow => "Medium Slow",
            GrowthRate::Slow => "Slow",
        }
    }

    /// Total experience required to reach `level`.
    pub fn exp_for_level(self, level: u8) -> u32 {
        let n = i64::from(level.clamp(LEVEL_MIN, LEVEL_MAX));
        let cubed = n * n * n;
        let exp = match self {
            GrowthRate::Fast => 4 * cubed / 5,
            GrowthRate::MediumFast => cubed,
            GrowthRate::MediumSlow => 6 * cubed / 5 - 15 * n * n + 100 * n - 140,
            GrowthRate::Slow => 5 * cubed / 4,
        };
        exp.max(0) as u32
    }

    /// Inclusive experience bracket for `level`: reaching the upper bound
    /// plus one would advance the level.
    pub fn exp_bounds(self, level: u8) -> (u32, u32) {
        let min = self.exp_for_level(level);
        let max = if level >= LEVEL_MAX {
            self.exp_for_level(LEVEL_MAX)
        } else {
            self.exp_for_level(level + 1) - 1
        };
        (min, max)
    }
}
