use thiserror::Error;

/// Errors surfaced by the territory store and the combat engine.
///
/// None of these are fatal. Validation failures leave both territories
/// untouched; the driver reports the reason and returns to the menu.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum WarError {
    /// Attacker and defender belong to the same faction.
    #[error("Invalid attack: '{attacker}' and '{defender}' both fight for '{color}'")]
    SameFaction {
        attacker: String,
        defender: String,
        color: String,
    },

    /// The attacker must keep a garrison of one troop behind.
    #[error("Invalid attack: '{name}' needs more than 1 troop to attack (has {troops})")]
    InsufficientTroops { name: String, troops: u32 },

    /// A territory index fell outside the store.
    #[error("Territory index {index} out of range (store holds {len})")]
    IndexOutOfRange { index: usize, len: usize },

    /// Attacker and defender indices point at the same territory.
    #[error("A territory cannot attack itself (index {index})")]
    SameTerritory { index: usize },
}

pub type Result<T> = std::result::Result<T, WarError>;
