use serde::{Deserialize, Serialize};

use crate::creature::CreatureRecord;
use crate::game::Generation;

/// Logical display fields. Mutating engine calls report the subset of these
/// whose rendered value may have changed; the capability gate answers which
/// of them exist and are writable for a given creature.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FieldId {
    Species,
    Nickname,
    Level,
    Experience,
    ExpBounds,
    Friendship,
    PersonalityValue,
    Nature,
    Gender,
    Shiny,
    Ability,
    HeldItem,
    Status,
    Egg,
    Pokerus,
    OriginGame,
    MetLocation,
    MetLevel,
    Pokeball,
    FatefulEncounter,
    OtName,
    OtGender,
    OtPublicId,
    OtSecretId,
    Ivs,
    Evs,
    SpecialSplit,
    Moves,
    Pp,
    PpBonus,
    MaxPp,
    Stats,
    Capabilities,
    TrainerName,
    TrainerGender,
    TrainerPublicId,
    TrainerSecretId,
    Money,
    Coins,
    TimePlayed,
    PartyList,
    PocketItems,
    PocketBalls,
    PocketBerries,
    PocketTms,
    PocketKeyItems,
    PocketPc,
}

impl FieldId {
    fn bit(self) -> u64 {
        1u64 << (self as u64)
    }
}

fn mask(fields: &[FieldId]) -> u64 {
    fields.iter().fold(0, |acc, f| acc | f.bit())
}

/// Creature fields that do not exist before generation 2.
const GEN1_ABSENT: &[FieldId] = &[
    FieldId::Gender,
    FieldId::Nature,
    FieldId::Shiny,
    FieldId::Ability,
    FieldId::HeldItem,
    FieldId::Pokerus,
    FieldId::Egg,
    FieldId::Friendship,
    FieldId::OriginGame,
    FieldId::MetLocation,
    FieldId::MetLevel,
    FieldId::Pokeball,
    FieldId::FatefulEncounter,
    FieldId::OtGender,
    FieldId::PersonalityValue,
    FieldId::SpecialSplit,
];

/// Creature fields introduced only with generation 3.
const GEN2_ABSENT: &[FieldId] = &[
    FieldId::Nature,
    FieldId::Ability,
    FieldId::OriginGame,
    FieldId::MetLocation,
    FieldId::MetLevel,
    FieldId::Pokeball,
    FieldId::FatefulEncounter,
    FieldId::OtGender,
    FieldId::PersonalityValue,
    FieldId::SpecialSplit,
];

/// Fields restricted to game-derivable values; writable only under the
/// `allow_illegal_modifications` session override.
const LEGALITY_GATED: &[FieldId] = &[
    FieldId::Species,
    FieldId::PersonalityValue,
    FieldId::Ivs,
    FieldId::Moves,
    FieldId::Egg,
    FieldId::OriginGame,
    FieldId::MetLocation,
    FieldId::MetLevel,
    FieldId::FatefulEncounter,
    FieldId::OtPublicId,
    FieldId::OtSecretId,
    FieldId::Ability,
];

/// Existence and legality surface for one creature, derived from its
/// generation. Recomputed whenever species or origin change.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CapabilitySet {
    exists: u64,
    legal: u64,
}

impl CapabilitySet {
    pub fn for_generation(generation: Generation) -> Self {
        let absent = match generation {
            Generation::One => mask(GEN1_ABSENT),
            Generation::Two => mask(GEN2_ABSENT),
            Generation::Three => 0,
        };
        Self {
            exists: !absent,
            legal: !mask(LEGALITY_GATED),
        }
    }

    pub fn for_creature(creature: &CreatureRecord) -> Self {
        Self::for_generation(creature.generation())
    }

    /// Does the field exist on this creature's schema? Absent fields read as
    /// inert and reject writes; they never error on queries.
    pub fn exists(&self, field: FieldId) -> bool {
        self.exists & field.bit() != 0
    }

    /// May the field be set to arbitrary values without the illegal-edit
    /// override?
    pub fn allows(&self, field: FieldId) -> bool {
        self.legal & field.bit() != 0
    }

    pub fn is_writable(&self, field: FieldId, allow_illegal: bool) -> bool {
        self.exists(field) && (self.allows(field) || allow_illegal)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn gen1_lacks_derived_identity_fields() {
        let caps = CapabilitySet::for_generation(Generation::One);
        assert!(!caps.exists(FieldId::Nature));
        assert!(!caps.exists(FieldId::Gender));
        assert!(!caps.exists(FieldId::Shiny));
        assert!(caps.exists(FieldId::Level));
        assert!(caps.exists(FieldId::Moves));
    }

    #[test]
    fn gen2_gains_gender_and_shininess() {
        let caps = CapabilitySet::for_generation(Generation::Two);
        assert!(caps.exists(FieldId::Gender));
        assert!(caps.exists(FieldId::Shiny));
        assert!(caps.exists(FieldId::Pokerus));
        assert!(!caps.exists(FieldId::Nature));
        assert!(!caps.exists(FieldId::SpecialSplit));
    }

    #[test]
    fn gen3_has_the_full_schema() {
        let caps = CapabilitySet::for_generation(Generation::Three);
        assert!(caps.exists(FieldId::Nature));
        assert!(caps.exists(FieldId::PersonalityValue));
        assert!(caps.exists(FieldId::SpecialSplit));
    }

    #[test]
    fn legality_gate_composes_with_the_override() {
        let caps = CapabilitySet::for_generation(Generation::Three);
        assert!(!caps.is_writable(FieldId::Ivs, false));
        assert!(caps.is_writable(FieldId::Ivs, true));
        assert!(caps.is_writable(FieldId::Level, false));
        // Absent fields stay unwritable even with the override.
        let gen1 = CapabilitySet::for_generation(Generation::One);
        assert!(!gen1.is_writable(FieldId::Nature, true));
    }

    #[test]
    fn resolver_backed_fields_are_legal_by_default() {
        let caps = CapabilitySet::for_generation(Generation::Three);
        assert!(caps.allows(FieldId::Nature));
        assert!(caps.allows(FieldId::Gender));
        assert!(caps.allows(FieldId::Shiny));
        assert!(!caps.allows(FieldId::PersonalityValue));
    }
}
