//! Attack resolution
//!
//! Validates an attack between two territories, settles it with one die
//! roll per side, and mutates both records in place. Ties favor the
//! defender. The two handles come from the store's pairing accessor, so
//! they can never alias.

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::core::error::{Result, WarError};
use crate::war::territory::{Territory, MIN_GARRISON};

/// Faces on the battle die.
pub const DIE_SIDES: u8 = 6;

/// What the dice decided for the defender.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum AttackResult {
    /// Attacker rolled strictly higher: the defender flips to the
    /// attacker's faction and receives the transferred troops.
    Conquered { territory: String, troops_moved: u32 },
    /// Defender rolled equal or higher: the attacker loses one troop.
    Repelled,
}

/// Full account of one resolved attack: the dice, the result, and the
/// post-attack state of both territories.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AttackOutcome {
    pub result: AttackResult,
    pub attacker_roll: u8,
    pub defender_roll: u8,
    /// Attacker state after resolution.
    pub attacker: Territory,
    /// Defender state after resolution.
    pub defender: Territory,
}

/// Check whether `attacker` may attack `defender` at all.
///
/// Checked in order: faction first, then the attacker's garrison. A
/// failure never mutates either territory.
pub fn validate_attack(attacker: &Territory, defender: &Territory) -> Result<()> {
    if attacker.color == defender.color {
        return Err(WarError::SameFaction {
            attacker: attacker.name.clone(),
            defender: defender.name.clone(),
            color: attacker.color.clone(),
        });
    }

    if attacker.troops <= MIN_GARRISON {
        return Err(WarError::InsufficientTroops {
            name: attacker.name.clone(),
            troops: attacker.troops,
        });
    }

    Ok(())
}

fn roll_die<R: Rng>(rng: &mut R) -> u8 {
    rng.gen_range(1..=DIE_SIDES)
}

/// Resolve one attack: validate, roll one die per side, mutate in place.
///
/// The RNG is injected so drivers seed once at startup and tests can
/// replay a known sequence. Returns the outcome, or the rejection reason
/// with both territories untouched.
pub fn resolve_attack<R: Rng>(
    attacker: &mut Territory,
    defender: &mut Territory,
    rng: &mut R,
) -> Result<AttackOutcome> {
    validate_attack(attacker, defender)?;

    let attacker_roll = roll_die(rng);
    let defender_roll = roll_die(rng);

    Ok(apply_rolls(attacker, defender, attacker_roll, defender_roll))
}

/// Apply already-drawn dice to a validated attacker/defender pair.
///
/// Split from [`resolve_attack`] so battles can be settled with known
/// dice. Callers must run [`validate_attack`] first.
pub fn apply_rolls(
    attacker: &mut Territory,
    defender: &mut Territory,
    attacker_roll: u8,
    defender_roll: u8,
) -> AttackOutcome {
    let result = if attacker_roll > defender_roll {
        // Half the attacking garrison marches in, at least one troop.
        // The defender's previous garrison is discarded with the conquest.
        let troops_moved = (attacker.troops / 2).max(1);

        defender.color = attacker.color.clone();
        defender.troops = troops_moved;
        attacker.troops = attacker
            .troops
            .saturating_sub(troops_moved)
            .max(MIN_GARRISON);

        tracing::debug!(
            "'{}' conquered '{}' ({} vs {}, {} troops moved)",
            attacker.name,
            defender.name,
            attacker_roll,
            defender_roll,
            troops_moved
        );

        AttackResult::Conquered {
            territory: defender.name.clone(),
            troops_moved,
        }
    } else {
        // Ties favor the defender. Garrison floor holds in all cases.
        attacker.troops = attacker.troops.saturating_sub(1).max(MIN_GARRISON);

        AttackResult::Repelled
    };

    AttackOutcome {
        result,
        attacker_roll,
        defender_roll,
        attacker: attacker.clone(),
        defender: defender.clone(),
    }
}
