//! Projections and constrained searches over the 32-bit personality value.
//!
//! Nature, gender and shininess are never stored: they are decoded from the
//! personality value (and the original trainer's id pair), and "setting" one
//! of them means finding a replacement value that decodes to the request
//! while keeping the other two consistent. The searches below are bounded
//! and deterministic; callers must re-read all three properties afterwards.

use crate::gender::CreatureGender;
use crate::nature::{NATURE_COUNT, Nature};
use crate::species::GenderRatio;
use crate::stats::{STAT_COUNT, Stat};

/// XOR folds below this value count as shiny.
const SHINY_BOUND: u16 = 8;

pub fn nature_of(pid: u32) -> Nature {
    Nature::from_index((pid % u32::from(NATURE_COUNT)) as u8)
        .expect("pid modulo the nature count is always a valid index")
}

pub fn gender_of(pid: u32, ratio: GenderRatio) -> CreatureGender {
    gender_from_low(pid as u16, ratio)
}

pub fn is_shiny(pid: u32, public_id: u16, secret_id: u16) -> bool {
    shiny_value(pid, public_id, secret_id) < SHINY_BOUND
}

fn shiny_value(pid: u32, public_id: u16, secret_id: u16) -> u16 {
    public_id ^ secret_id ^ (pid >> 16) as u16 ^ pid as u16
}

fn compose(high: u16, low: u16) -> u32 {
    (u32::from(high) << 16) | u32::from(low)
}

fn gender_from_low(low: u16, ratio: GenderRatio) -> CreatureGender {
    match ratio {
        GenderRatio::Genderless => CreatureGender::Genderless,
        GenderRatio::MaleOnly => CreatureGender::Male,
        GenderRatio::FemaleOnly => CreatureGender::Female,
        GenderRatio::FemaleThreshold(t) => {
            if (low & 0xFF) < u16::from(t) {
                CreatureGender::Female
            } else {
                CreatureGender::Male
            }
        }
    }
}

/// First high half >= the nature residue whose composed value matches
/// `nature` and is not shiny. 65536 mod 25 leaves every residue reachable,
/// and at most eight highs per low are shiny, so this cannot come up empty.
fn high_for_nature_nonshiny(
    low: u16,
    public_id: u16,
    secret_id: u16,
    nature: Nature,
) -> Option<u16> {
    let modulus = u32::from(NATURE_COUNT);
    // (high << 16 | low) % 25 == (high * 11 + low) % 25; 16 inverts 11 mod 25.
    let target = u32::from(nature.index());
    let residue = (16 * (target + modulus - u32::from(low) % modulus)) % modulus;
    (residue..=u32::from(u16::MAX))
        .step_by(modulus as usize)
        .map(|h| h as u16)
        .find(|&h| !is_shiny(compose(h, low), public_id, secret_id))
}

/// The eight shiny high halves for a given low half.
fn shiny_highs(low: u16, public_id: u16, secret_id: u16) -> impl Iterator<Item = u16> {
    let tsv = public_id ^ secret_id;
    (0..SHINY_BOUND).map(move |r| tsv ^ low ^ r)
}

fn high_for_constraints(
    low: u16,
    public_id: u16,
    secret_id: u16,
    want_shiny: bool,
    want_nature: Option<Nature>,
) -> Option<u16> {
    if want_shiny {
        shiny_highs(low, public_id, secret_id)
            .find(|&h| want_nature.is_none_or(|n| nature_of(compose(h, low)) == n))
    } else if let Some(nature) = want_nature {
        high_for_nature_nonshiny(low, public_id, secret_id, nature)
    } else {
        (0..=u16::MAX).find(|&h| !is_shiny(compose(h, low), public_id, secret_id))
    }
}

/// Full search over low halves. `low_filter` constrains the decoded gender,
/// `start_low` biases the scan so results stay near the current value.
fn find_pid(
    public_id: u16,
    secret_id: u16,
    want_shiny: bool,
    want_nature: Option<Nature>,
    start_low: u16,
    low_filter: impl Fn(u16) -> bool,
) -> Option<u32> {
    for offset in 0..=u16::MAX {
        let low = start_low.wrapping_add(offset);
        if !low_filter(low) {
            continue;
        }
        if let Some(high) = high_for_constraints(low, public_id, secret_id, want_shiny, want_nature)
        {
            return Some(compose(high, low));
        }
    }
    None
}

/// Personality value decoding to `nature`, keeping the current shininess and
/// preferring to keep the decoded gender.
pub fn pid_for_nature(
    current: u32,
    public_id: u16,
    secret_id: u16,
    ratio: GenderRatio,
    nature: Nature,
) -> Option<u32> {
    if nature_of(current) == nature {
        return Some(current);
    }
    let want_shiny = is_shiny(current, public_id, secret_id);
    let low = current as u16;

    // Keeping the low half untouched preserves the gender byte exactly.
    if let Some(high) = high_for_constraints(low, public_id, secret_id, want_shiny, Some(nature)) {
        return Some(compose(high, low));
    }

    let gender = gender_of(current, ratio);
    find_pid(public_id, secret_id, want_shiny, Some(nature), low, |l| {
        gender_from_low(l, ratio) == gender
    })
    .or_else(|| find_pid(public_id, secret_id, want_shiny, Some(nature), low, |_| true))
}

/// Personality value decoding to `gender`, keeping the current shininess and
/// preferring to keep the nature. Fixed-distribution species only accept
/// their own gender.
pub fn pid_for_gender(
    current: u32,
    public_id: u16,
    secret_id: u16,
    ratio: GenderRatio,
    gender: CreatureGender,
) -> Option<u32> {
    match ratio {
        GenderRatio::Genderless | GenderRatio::MaleOnly | GenderRatio::FemaleOnly => {
            return (gender_of(current, ratio) == gender).then_some(current);
        }
        GenderRatio::FemaleThreshold(_) => {
            if gender == CreatureGender::Genderless {
                return None;
            }
        }
    }
    if gender_of(current, ratio) == gender {
        return Some(current);
    }

    let want_shiny = is_shiny(current, public_id, secret_id);
    let nature = nature_of(current);
    let low = current as u16;
    find_pid(public_id, secret_id, want_shiny, Some(nature), low, |l| {
        gender_from_low(l, ratio) == gender
    })
    .or_else(|| {
        find_pid(public_id, secret_id, want_shiny, None, low, |l| {
            gender_from_low(l, ratio) == gender
        })
    })
}

/// Personality value with the requested shininess, keeping nature and gender
/// where the value space allows.
pub fn pid_for_shininess(
    current: u32,
    public_id: u16,
    secret_id: u16,
    ratio: GenderRatio,
    shiny: bool,
) -> Option<u32> {
    if is_shiny(current, public_id, secret_id) == shiny {
        return Some(current);
    }
    let nature = nature_of(current);
    let gender = gender_of(current, ratio);
    let low = current as u16;

    if let Some(high) = high_for_constraints(low, public_id, secret_id, shiny, Some(nature)) {
        return Some(compose(high, low));
    }
    find_pid(public_id, secret_id, shiny, Some(nature), low, |l| {
        gender_from_low(l, ratio) == gender
    })
    .or_else(|| {
        find_pid(public_id, secret_id, shiny, Some(nature), low, |_| true)
    })
    .or_else(|| find_pid(public_id, secret_id, shiny, None, low, |_| true))
}

// ---------------------------------------------------------------------------
// Determinant-value backend for generations that predate personality values.

/// Attack DVs that produce a shiny creature (alongside 10s elsewhere).
pub const SHINY_ATTACK_DVS: [u8; 8] = [2, 3, 6, 7, 10, 11, 14, 15];

const SHINY_OTHER_DV: u8 = 10;

pub fn dv_gender(attack_dv: u8, ratio: GenderRatio) -> CreatureGender {
    match ratio {
        GenderRatio::Genderless => CreatureGender::Genderless,
        GenderRatio::MaleOnly => CreatureGender::Male,
        GenderRatio::FemaleOnly => CreatureGender::Female,
        GenderRatio::FemaleThreshold(t) => {
            if attack_dv <= (t >> 4) {
                CreatureGender::Female
            } else {
                CreatureGender::Male
            }
        }
    }
}

pub fn dvs_are_shiny(dvs: &[u8; STAT_COUNT]) -> bool {
    dvs[Stat::Defense.index()] == SHINY_OTHER_DV
        && dvs[Stat::Speed.index()] == SHINY_OTHER_DV
        && dvs[Stat::SpecialAttack.index()] == SHINY_OTHER_DV
        && SHINY_ATTACK_DVS.contains(&dvs[Stat::Attack.index()])
}

/// Rewrite DVs into the shiny pattern, keeping the decoded gender when one of
/// the shiny attack DVs still falls on the right side of the cutoff.
pub fn apply_shiny_dvs(dvs: &mut [u8; STAT_COUNT], ratio: GenderRatio) {
    let current_gender = dv_gender(dvs[Stat::Attack.index()], ratio);
    let attack = SHINY_ATTACK_DVS
        .iter()
        .copied()
        .find(|&dv| dv_gender(dv, ratio) == current_gender)
        .unwrap_or(SHINY_ATTACK_DVS[0]);

    dvs[Stat::Attack.index()] = attack;
    dvs[Stat::Defense.index()] = SHINY_OTHER_DV;
    dvs[Stat::Speed.index()] = SHINY_OTHER_DV;
    dvs[Stat::SpecialAttack.index()] = SHINY_OTHER_DV;
}

/// Break the shiny DV pattern with the smallest possible change.
pub fn clear_shiny_dvs(dvs: &mut [u8; STAT_COUNT]) {
    if dvs_are_shiny(dvs) {
        dvs[Stat::Defense.index()] = SHINY_OTHER_DV - 1;
    }
}

/// Attack DV decoding to `gender`, drawn from the shiny set when the shiny
/// pattern must survive the edit.
pub fn attack_dv_for_gender(
    ratio: GenderRatio,
    gender: CreatureGender,
    keep_shiny: bool,
) -> Option<u8> {
    let candidates: &[u8] = if keep_shiny {
        &SHINY_ATTACK_DVS
    } else {
        &[15, 14, 13, 12, 11, 10, 9, 8, 7, 6, 5, 4, 3, 2, 1, 0]
    };
    candidates
        .iter()
        .copied()
        .find(|&dv| dv_gender(dv, ratio) == gender)
}
