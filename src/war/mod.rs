pub mod attack;
pub mod store;
pub mod territory;

pub use attack::{resolve_attack, AttackOutcome, AttackResult};
pub use store::TerritoryStore;
pub use territory::Territory;
