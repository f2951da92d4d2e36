//! Territory records
//!
//! A territory is a named unit of ownership: a faction color plus a troop
//! garrison. Registration truncates names and colors to the bounds below
//! and rejects empty values; the engine assumes those preconditions hold.

use serde::{Deserialize, Serialize};

/// Maximum characters kept from a territory name at registration.
pub const NAME_LEN: usize = 29;

/// Maximum characters kept from a faction color at registration.
pub const COLOR_LEN: usize = 9;

/// Every territory keeps at least this many troops at all times.
pub const MIN_GARRISON: u32 = 1;

/// A named unit of ownership on the map.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Territory {
    /// Display name. Immutable after registration, not required to be unique.
    pub name: String,

    /// Owning faction. Two territories sharing a color cannot fight.
    pub color: String,

    /// Troop garrison. Never drops below [`MIN_GARRISON`].
    pub troops: u32,
}

impl Territory {
    pub fn new(name: String, color: String, troops: u32) -> Self {
        Self {
            name,
            color,
            troops,
        }
    }
}
