//! Territory store
//!
//! Owns the registered territories and hands the combat engine disjoint
//! mutable borrows of an attacker/defender pair.

use crate::core::error::{Result, WarError};
use crate::war::territory::{Territory, MIN_GARRISON};

/// Ordered, fixed-size collection of territories, addressed by index.
#[derive(Debug, Clone)]
pub struct TerritoryStore {
    territories: Vec<Territory>,
}

impl TerritoryStore {
    /// Takes ownership of the registered roster.
    ///
    /// Name/color bounds and `troops >= 1` are the registering driver's
    /// responsibility and are not re-checked here.
    pub fn new(territories: Vec<Territory>) -> Self {
        Self { territories }
    }

    pub fn len(&self) -> usize {
        self.territories.len()
    }

    pub fn is_empty(&self) -> bool {
        self.territories.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Territory> {
        self.territories.get(index)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Territory> {
        self.territories.iter()
    }

    /// Mutable borrows of two distinct territories.
    ///
    /// The borrows are disjoint, so the combat engine can mutate attacker
    /// and defender in the same call. Valid for the duration of one attack.
    pub fn get_pair(&mut self, i: usize, j: usize) -> Result<(&mut Territory, &mut Territory)> {
        let len = self.territories.len();
        if i >= len {
            return Err(WarError::IndexOutOfRange { index: i, len });
        }
        if j >= len {
            return Err(WarError::IndexOutOfRange { index: j, len });
        }
        if i == j {
            return Err(WarError::SameTerritory { index: i });
        }

        let (low, high) = if i < j { (i, j) } else { (j, i) };
        let (head, tail) = self.territories.split_at_mut(high);
        let (first, second) = (&mut head[low], &mut tail[0]);
        if i < j {
            Ok((first, second))
        } else {
            Ok((second, first))
        }
    }

    /// Check the structural invariants of every registered territory.
    ///
    /// Returns the violations found, empty when the store is sound. These
    /// should never trigger in a correct engine; a violation indicates a
    /// bug in attack resolution, not a gameplay state.
    pub fn check_invariants(&self) -> Vec<InvariantViolation> {
        let mut violations = Vec::new();

        for (index, territory) in self.territories.iter().enumerate() {
            if territory.troops < MIN_GARRISON {
                violations.push(InvariantViolation {
                    message: format!(
                        "Territory [{}] '{}' holds {} troops, below the garrison floor of {}",
                        index, territory.name, territory.troops, MIN_GARRISON
                    ),
                });
            }
            if territory.color.is_empty() {
                violations.push(InvariantViolation {
                    message: format!("Territory [{}] '{}' has no faction color", index, territory.name),
                });
            }
        }

        violations
    }
}

/// Invariant violation found by [`TerritoryStore::check_invariants`].
#[derive(Debug, Clone)]
pub struct InvariantViolation {
    /// Description of the violated invariant.
    pub message: String,
}

impl std::fmt::Display for InvariantViolation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Invariant violation: {}", self.message)
    }
}

impl std::error::Error for InvariantViolation {}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_store() -> TerritoryStore {
        TerritoryStore::new(vec![
            Territory::new("Avalon".to_string(), "Red".to_string(), 10),
            Territory::new("Brumark".to_string(), "Blue".to_string(), 5),
            Territory::new("Caldera".to_string(), "Green".to_string(), 3),
        ])
    }

    #[test]
    fn get_pair_returns_disjoint_borrows() {
        let mut store = sample_store();
        let (a, b) = store.get_pair(0, 1).unwrap();
        assert_eq!(a.name, "Avalon");
        assert_eq!(b.name, "Brumark");

        a.troops = 7;
        b.troops = 2;
        assert_eq!(store.get(0).unwrap().troops, 7);
        assert_eq!(store.get(1).unwrap().troops, 2);
    }

    #[test]
    fn get_pair_preserves_argument_order() {
        let mut store = sample_store();
        let (a, b) = store.get_pair(2, 0).unwrap();
        assert_eq!(a.name, "Caldera");
        assert_eq!(b.name, "Avalon");
    }

    #[test]
    fn get_pair_rejects_same_index() {
        let mut store = sample_store();
        assert_eq!(
            store.get_pair(1, 1).unwrap_err(),
            WarError::SameTerritory { index: 1 }
        );
    }

    #[test]
    fn get_pair_rejects_out_of_range() {
        let mut store = sample_store();
        assert_eq!(
            store.get_pair(3, 0).unwrap_err(),
            WarError::IndexOutOfRange { index: 3, len: 3 }
        );
        assert_eq!(
            store.get_pair(0, 99).unwrap_err(),
            WarError::IndexOutOfRange { index: 99, len: 3 }
        );
    }

    #[test]
    fn sound_store_passes_invariants() {
        let store = sample_store();
        assert!(store.check_invariants().is_empty());
    }

    #[test]
    fn zero_garrison_detected() {
        let store = TerritoryStore::new(vec![Territory::new(
            "Avalon".to_string(),
            "Red".to_string(),
            0,
        )]);
        let violations = store.check_invariants();
        assert_eq!(violations.len(), 1);
        assert!(violations[0].message.contains("garrison"));
    }

    #[test]
    fn empty_color_detected() {
        let store = TerritoryStore::new(vec![Territory::new(
            "Avalon".to_string(),
            String::new(),
            4,
        )]);
        let violations = store.check_invariants();
        assert_eq!(violations.len(), 1);
        assert!(violations[0].message.contains("faction color"));
    }
}
