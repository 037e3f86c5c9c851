//! AliasRegistry - institution rename chains

use super::error::{EditError, EditResult};
use std::collections::HashMap;

/// Directed old-name -> new-name mappings with transitive resolution
///
/// Insertion order is preserved so the alias file dumps deterministically.
#[derive(Debug, Default)]
pub struct AliasRegistry {
    /// old -> new lookup
    map: HashMap<String, String>,
    /// (old, new) in insertion order
    entries: Vec<(String, String)>,
}

impl AliasRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Follow the rename chain to the canonical name.
    ///
    /// Returns the input unchanged when no mapping exists. Traversal is
    /// bounded by the number of registered mappings; exceeding the bound
    /// means an invariant violation slipped past `rename`, reported as a
    /// cycle rather than looping forever.
    pub fn resolve(&self, name: &str) -> EditResult<String> {
        let mut current = name;
        for _ in 0..=self.map.len() {
            match self.map.get(current) {
                Some(next) => current = next,
                None => return Ok(current.to_string()),
            }
        }
        Err(EditError::Cycle {
            old: name.to_string(),
            new: current.to_string(),
        })
    }

    /// Register a rename, validating before any mutation.
    ///
    /// Returns the resolved old name the mapping was inserted under; the
    /// caller rewrites record fields and appends the change event.
    pub fn rename(&mut self, old: &str, new: &str) -> EditResult<String> {
        let resolved_old = self.resolve(old)?;
        if resolved_old == new {
            return Err(EditError::NoOpRename {
                old: old.to_string(),
                new: new.to_string(),
            });
        }
        if self.resolve(new)? == resolved_old {
            return Err(EditError::Cycle {
                old: old.to_string(),
                new: new.to_string(),
            });
        }

        self.insert(resolved_old.clone(), new.to_string());
        Ok(resolved_old)
    }

    /// Load-phase insert of a persisted mapping: same validation as `rename`
    /// but on the raw pair, for restoring an alias file.
    pub fn restore(&mut self, old: &str, new: &str) -> EditResult<()> {
        if old == new || self.map.contains_key(old) {
            return Err(EditError::NoOpRename {
                old: old.to_string(),
                new: new.to_string(),
            });
        }
        if self.resolve(new)? == old {
            return Err(EditError::Cycle {
                old: old.to_string(),
                new: new.to_string(),
            });
        }
        self.insert(old.to_string(), new.to_string());
        Ok(())
    }

    /// Mappings in insertion order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries
            .iter()
            .map(|(old, new)| (old.as_str(), new.as_str()))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn insert(&mut self, old: String, new: String) {
        self.map.insert(old.clone(), new.clone());
        self.entries.push((old, new));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_unmapped_name_is_identity() {
        let registry = AliasRegistry::new();
        assert_eq!(registry.resolve("Alpha").unwrap(), "Alpha");
    }

    #[test]
    fn test_resolve_follows_chain() {
        let mut registry = AliasRegistry::new();
        registry.rename("A", "B").unwrap();
        registry.rename("B", "C").unwrap();

        assert_eq!(registry.resolve("A").unwrap(), "C");
        assert_eq!(registry.resolve("B").unwrap(), "C");
        assert_eq!(registry.resolve("C").unwrap(), "C");
    }

    #[test]
    fn test_rename_resolves_old_name_first() {
        let mut registry = AliasRegistry::new();
        registry.rename("A", "B").unwrap();

        // renaming via the historical name inserts under the canonical one
        let resolved = registry.rename("A", "C").unwrap();
        assert_eq!(resolved, "B");
        assert_eq!(registry.resolve("A").unwrap(), "C");
    }

    #[test]
    fn test_noop_rename_rejected() {
        let mut registry = AliasRegistry::new();
        registry.rename("A", "B").unwrap();

        let err = registry.rename("A", "B").unwrap_err();
        assert!(matches!(err, EditError::NoOpRename { .. }));
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn test_direct_cycle_rejected() {
        let mut registry = AliasRegistry::new();
        registry.rename("A", "B").unwrap();

        let err = registry.rename("B", "A").unwrap_err();
        assert!(matches!(err, EditError::Cycle { .. }));
        // failed rename leaves the registry untouched
        assert_eq!(registry.len(), 1);
        assert_eq!(registry.resolve("A").unwrap(), "B");
    }

    #[test]
    fn test_longer_cycle_rejected() {
        let mut registry = AliasRegistry::new();
        registry.rename("A", "B").unwrap();
        registry.rename("B", "C").unwrap();

        let err = registry.rename("C", "A").unwrap_err();
        assert!(matches!(err, EditError::Cycle { .. }));
    }

    #[test]
    fn test_every_resolution_terminates_on_canonical_name() {
        let mut registry = AliasRegistry::new();
        registry.rename("A", "B").unwrap();
        registry.rename("C", "D").unwrap();
        registry.rename("B", "E").unwrap();

        for name in ["A", "B", "C", "D", "E", "unrelated"] {
            let canonical = registry.resolve(name).unwrap();
            // canonical names have no outgoing mapping
            assert_eq!(registry.resolve(&canonical).unwrap(), canonical);
        }
    }

    #[test]
    fn test_restore_keeps_raw_pair() {
        let mut registry = AliasRegistry::new();
        registry.restore("Old U", "New U").unwrap();
        assert_eq!(registry.resolve("Old U").unwrap(), "New U");

        assert!(registry.restore("New U", "Old U").is_err());
        assert!(registry.restore("X", "X").is_err());
    }

    #[test]
    fn test_restore_rejects_duplicate_key() {
        let mut registry = AliasRegistry::new();
        registry.restore("A", "B").unwrap();

        // replaying the same file must not duplicate entries
        assert!(registry.restore("A", "B").is_err());
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn test_iter_preserves_insertion_order() {
        let mut registry = AliasRegistry::new();
        registry.rename("C", "D").unwrap();
        registry.rename("A", "B").unwrap();

        let entries: Vec<(&str, &str)> = registry.iter().collect();
        assert_eq!(entries, vec![("C", "D"), ("A", "B")]);
    }
}
