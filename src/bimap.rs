use std::{
    borrow::Borrow,
    fmt,
    hash::Hash,
    marker::PhantomData,
};

use rustc_hash::FxHashMap;

use crate::{
    conflict::{Bijection, Binding},
    error::Result,
    iter::{Iter, Keys, Values},
    ledger::{EntryId, Ledger},
    options::SetOptions,
    orientation::{Forward, Orientation},
};

/// Storage shared by both views of a [`BiMap`]
#[derive(Debug, Clone)]
struct Store<L, R> {
    /// Every live entry, in creation order
    ledger: Ledger<L, R>,
    /// Mapping from a left value to the entry holding it
    left: FxHashMap<L, EntryId>,
    /// Mapping from a right value to the entry holding it
    right: FxHashMap<R, EntryId>,
}

/// A bi-directional hash map that keeps both its keys and its values unique.
///
/// Every `BiMap` is one view of a pair. [`BiMap::inverse`] returns the other
/// view, which is backed by the same entries with keys and values swapped.
/// Both views iterate in the same insertion order and can both be modified.
///
/// The `O` parameter records which view this is. A map built with
/// [`BiMap::new`] is a [`Forward`] view from `L` to `R`; its inverse is a
/// [`Backward`](crate::Backward) view from `R` to `L`.
#[derive(Clone)]
#[repr(transparent)]
pub struct BiMap<L, R, O = Forward> {
    store: Store<L, R>,
    orientation: PhantomData<O>,
}

impl<L, R> BiMap<L, R, Forward> {
    /// Construct a new empty `BiMap`
    #[must_use]
    pub fn new() -> Self {
        Self::with_capacity(0)
    }

    /// Construct a new empty `BiMap` with room for at least `capacity` entries
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            store: Store {
                ledger: Ledger::with_capacity(capacity),
                left: FxHashMap::with_capacity_and_hasher(capacity, Default::default()),
                right: FxHashMap::with_capacity_and_hasher(capacity, Default::default()),
            },
            orientation: PhantomData,
        }
    }
}

impl<L, R> BiMap<L, R, Forward>
where
    L: Eq + Hash + Clone,
    R: Eq + Hash + Clone,
{
    /// Construct a `BiMap` by setting each pair in order.
    ///
    /// Pairs are not forced, so a value that shows up under two different
    /// keys fails with [`Error::DuplicateValue`](crate::Error::DuplicateValue).
    pub fn from_entries<I>(entries: I) -> Result<Self>
    where
        I: IntoIterator<Item = (L, R)>,
    {
        let entries = entries.into_iter();
        let mut map = Self::with_capacity(entries.size_hint().0);
        map.try_extend(entries)?;
        Ok(map)
    }
}

impl<L, R> Default for BiMap<L, R, Forward> {
    fn default() -> Self {
        Self::new()
    }
}

impl<L, R, O> BiMap<L, R, O>
where
    O: Orientation<L, R>,
{
    /// Get the other view of this map
    #[must_use]
    pub fn inverse(&self) -> &BiMap<L, R, O::Flip> {
        // SAFETY: `BiMap` is `repr(transparent)` over `Store<L, R>` whatever its
        // orientation, so both views share one layout
        unsafe { &*(self as *const Self).cast::<BiMap<L, R, O::Flip>>() }
    }

    /// Get the other view of this map, for modification
    #[must_use]
    pub fn inverse_mut(&mut self) -> &mut BiMap<L, R, O::Flip> {
        // SAFETY: see `inverse`
        unsafe { &mut *(self as *mut Self).cast::<BiMap<L, R, O::Flip>>() }
    }

    /// Get the total number of entries in the `BiMap`
    #[must_use]
    pub fn len(&self) -> usize {
        debug_assert_eq!(self.store.ledger.len(), self.store.left.len());
        self.store.left.len()
    }

    /// Check if the `BiMap` is empty
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Remove every entry from both views
    #[profiling::function]
    pub fn clear(&mut self) {
        if self.is_empty() {
            return;
        }
        log::trace!("Clearing {} entries", self.len());
        self.store.ledger.clear();
        self.store.left.clear();
        self.store.right.clear();
    }

    /// Iterate over all `(key, value)` pairs, oldest first
    pub fn iter(&self) -> Iter<'_, L, R, O> {
        Iter::new(self.store.ledger.iter())
    }

    /// Iterate over all keys, oldest first
    pub fn keys(&self) -> Keys<'_, L, R, O> {
        Keys::new(self.iter())
    }

    /// Iterate over all values, oldest first
    pub fn values(&self) -> Values<'_, L, R, O> {
        Values::new(self.iter())
    }

    /// Call `callback` with `(value, key, map)` for every entry, oldest first
    pub fn for_each<F>(&self, mut callback: F)
    where
        F: FnMut(&O::Value, &O::Key, &Self),
    {
        for (key, value) in self.iter() {
            callback(value, key, self);
        }
    }
}

impl<L, R, O> BiMap<L, R, O>
where
    O: Orientation<L, R>,
    O::Key: Eq + Hash + Clone,
    O::Value: Eq + Hash + Clone,
{
    /// Get the value bound to `key`
    #[must_use]
    #[profiling::function]
    pub fn get<Q>(&self, key: &Q) -> Option<&O::Value>
    where
        O::Key: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        let (keys, _) = O::indexes(&self.store.left, &self.store.right);
        keys.get(key)
            .map(|&id| O::slots(&self.store.ledger[id]).1)
    }

    /// Check if `key` is bound to a value
    #[must_use]
    pub fn has<Q>(&self, key: &Q) -> bool
    where
        O::Key: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        let (keys, _) = O::indexes(&self.store.left, &self.store.right);
        keys.contains_key(key)
    }

    /// Bind `key` to `value`.
    ///
    /// Fails with [`Error::DuplicateValue`](crate::Error::DuplicateValue) if
    /// `value` is already bound to another key. Use [`BiMap::set_with`] to
    /// force the pair in.
    pub fn set(&mut self, key: O::Key, value: O::Value) -> Result<&mut Self> {
        self.set_with(key, value, SetOptions::default())
    }

    /// Bind `key` to `value` with the given options.
    ///
    /// An entry that already exists for `key` is updated in place and keeps
    /// its position. With [`SetOptions::force`] a conflicting entry is either
    /// moved over to `key` (if `key` was unbound) or removed together with the
    /// entry for `key`, in which case the new pair goes at the end.
    #[profiling::function]
    pub fn set_with(
        &mut self,
        key: O::Key,
        value: O::Value,
        options: SetOptions,
    ) -> Result<&mut Self> {
        self.ensure_can_set(&key, &value, options)?;

        let Store {
            ledger,
            left,
            right,
        } = &mut self.store;
        let (keys, values) = O::indexes_mut(left, right);
        match keys.get(&key).copied() {
            None => {
                let id = ledger.push_back(O::entry(key.clone(), value.clone()));
                log::trace!("Allocated entry {:?}", id);
                keys.insert(key, id);
                values.insert(value, id);
            }
            Some(id) => {
                let (_, slot) = O::slots_mut(&mut ledger[id]);
                if *slot != value {
                    values.remove(&*slot);
                    *slot = value.clone();
                    values.insert(value, id);
                }
            }
        }
        Ok(self)
    }

    /// Set every pair in order, stopping at the first conflict.
    ///
    /// Pairs set before the conflict stay in the map.
    pub fn try_extend<I>(&mut self, pairs: I) -> Result<&mut Self>
    where
        I: IntoIterator<Item = (O::Key, O::Value)>,
    {
        for (key, value) in pairs {
            self.set(key, value)?;
        }
        Ok(self)
    }

    /// Remove the entry bound to `key`. Returns `false` if there was none
    #[profiling::function]
    pub fn delete<Q>(&mut self, key: &Q) -> bool
    where
        O::Key: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        let (keys, _) = O::indexes(&self.store.left, &self.store.right);
        match keys.get(key).copied() {
            Some(id) => {
                self.discard(id);
                true
            }
            None => false,
        }
    }

    /// Remove an entry from the ledger and from both indexes
    fn discard(&mut self, id: EntryId) {
        let Store {
            ledger,
            left,
            right,
        } = &mut self.store;
        if let Some(entry) = ledger.remove(id) {
            let (keys, values) = O::indexes_mut(left, right);
            let (key, value) = O::slots(&entry);
            keys.remove(key);
            values.remove(value);
            log::trace!("Discarded entry {:?}", id);
        }
    }
}

impl<L, R, O> Bijection for BiMap<L, R, O>
where
    O: Orientation<L, R>,
    O::Key: Eq + Hash + Clone,
    O::Value: Eq + Hash + Clone,
{
    type Key = O::Key;
    type Value = O::Value;

    fn binding_of(&self, key: &O::Key, value: &O::Value) -> Binding {
        let (_, values) = O::indexes(&self.store.left, &self.store.right);
        match values.get(value) {
            None => Binding::Unbound,
            Some(&id) if O::slots(&self.store.ledger[id]).0 == key => Binding::Same,
            Some(_) => Binding::Other,
        }
    }

    fn contains_key(&self, key: &O::Key) -> bool {
        self.has(key)
    }

    fn evict_both(&mut self, key: &O::Key, value: &O::Value) {
        let (keys, values) = O::indexes(&self.store.left, &self.store.right);
        let doomed = [keys.get(key).copied(), values.get(value).copied()];
        for id in doomed.into_iter().flatten() {
            self.discard(id);
        }
    }

    fn rekey(&mut self, value: &O::Value, key: &O::Key) {
        let Store {
            ledger,
            left,
            right,
        } = &mut self.store;
        let (keys, values) = O::indexes_mut(left, right);
        if let Some(&id) = values.get(value) {
            let (slot, _) = O::slots_mut(&mut ledger[id]);
            let previous = std::mem::replace(slot, key.clone());
            keys.remove(&previous);
            keys.insert(key.clone(), id);
        }
    }
}

impl<L, R, O> fmt::Debug for BiMap<L, R, O>
where
    O: Orientation<L, R>,
    O::Key: fmt::Debug,
    O::Value: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.iter()).finish()
    }
}

impl<L, R, O> PartialEq for BiMap<L, R, O>
where
    O: Orientation<L, R>,
    O::Key: PartialEq,
    O::Value: PartialEq,
{
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.iter().eq(other.iter())
    }
}

impl<L, R, O> Eq for BiMap<L, R, O>
where
    O: Orientation<L, R>,
    O::Key: Eq,
    O::Value: Eq,
{
}

impl<'a, L, R, O> IntoIterator for &'a BiMap<L, R, O>
where
    O: Orientation<L, R>,
{
    type Item = (&'a O::Key, &'a O::Value);
    type IntoIter = Iter<'a, L, R, O>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
