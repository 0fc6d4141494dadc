//! Uniqueness enforcement shared by every bidirectional map view

use crate::{error::Error, options::SetOptions};

/// Who a value is currently bound to, relative to a candidate key
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Binding {
    /// The value is not bound to any key
    Unbound,
    /// The value is bound to the candidate key
    Same,
    /// The value is bound to some other key
    Other,
}

/// Storage hooks a view exposes so that [`Bijection::ensure_can_set`] can keep
/// both keys and values unique.
pub(crate) trait Bijection {
    type Key;
    type Value;

    /// Describe the current binding of `value` relative to `key`
    fn binding_of(&self, key: &Self::Key, value: &Self::Value) -> Binding;

    /// Check if `key` is bound to anything
    fn contains_key(&self, key: &Self::Key) -> bool;

    /// Remove the association bound to `key` and the one bound to `value`
    fn evict_both(&mut self, key: &Self::Key, value: &Self::Value);

    /// Rewrite the key of the association bound to `value` to be `key`
    fn rekey(&mut self, value: &Self::Value, key: &Self::Key);

    /// Make sure that binding `key` to `value` will not break value uniqueness.
    ///
    /// Nothing is modified unless the value is bound to another key and the
    /// caller passed `force`. In that case:
    /// - if `key` is bound as well, both conflicting associations are removed
    ///   and the following set creates a fresh one
    /// - otherwise the value's association is moved over to `key`, keeping its
    ///   place, and the following set has nothing left to do
    fn ensure_can_set(
        &mut self,
        key: &Self::Key,
        value: &Self::Value,
        options: SetOptions,
    ) -> Result<(), Error> {
        match self.binding_of(key, value) {
            Binding::Unbound | Binding::Same => return Ok(()),
            Binding::Other => {}
        }

        if !options.force {
            return Err(Error::DuplicateValue);
        }

        if self.contains_key(key) {
            log::debug!("Key and value are bound to two different entries. Evicting both");
            self.evict_both(key, value);
        } else {
            log::trace!("Moving the entry bound to the value over to a new key");
            self.rekey(value, key);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Bare-bones implementation over a list of pairs, just enough to drive the routine
    #[derive(Debug, Default)]
    struct Pairs(Vec<(u8, u8)>);

    impl Bijection for Pairs {
        type Key = u8;
        type Value = u8;

        fn binding_of(&self, key: &u8, value: &u8) -> Binding {
            match self.0.iter().find(|(_, v)| v == value) {
                None => Binding::Unbound,
                Some((k, _)) if k == key => Binding::Same,
                Some(_) => Binding::Other,
            }
        }

        fn contains_key(&self, key: &u8) -> bool {
            self.0.iter().any(|(k, _)| k == key)
        }

        fn evict_both(&mut self, key: &u8, value: &u8) {
            self.0.retain(|(k, v)| k != key && v != value);
        }

        fn rekey(&mut self, value: &u8, key: &u8) {
            for pair in &mut self.0 {
                if pair.1 == *value {
                    pair.0 = *key;
                }
            }
        }
    }

    #[test]
    fn test_unbound_and_same_pass_untouched() {
        let mut pairs = Pairs(vec![(1, 10)]);
        assert_eq!(pairs.ensure_can_set(&2, &20, SetOptions::default()), Ok(()));
        assert_eq!(pairs.ensure_can_set(&1, &10, SetOptions::default()), Ok(()));
        assert_eq!(pairs.0, vec![(1, 10)]);
    }

    #[test]
    fn test_conflict_without_force_fails_cleanly() {
        let mut pairs = Pairs(vec![(1, 10), (2, 20)]);
        assert_eq!(
            pairs.ensure_can_set(&2, &10, SetOptions::default()),
            Err(Error::DuplicateValue)
        );
        assert_eq!(pairs.0, vec![(1, 10), (2, 20)]);
    }

    #[test]
    fn test_forced_steal_rekeys_in_place() {
        let mut pairs = Pairs(vec![(1, 10), (2, 20)]);
        assert_eq!(pairs.ensure_can_set(&3, &10, SetOptions::forced()), Ok(()));
        assert_eq!(pairs.0, vec![(3, 10), (2, 20)]);
    }

    #[test]
    fn test_forced_double_conflict_evicts_both() {
        let mut pairs = Pairs(vec![(1, 10), (2, 20), (3, 30)]);
        assert_eq!(pairs.ensure_can_set(&2, &10, SetOptions::forced()), Ok(()));
        assert_eq!(pairs.0, vec![(3, 30)]);
    }
}
