use std::{
    fmt,
    marker::PhantomData,
    rc::{Rc, Weak},
};

use rustc_hash::FxHashMap;

use crate::{
    conflict::{Bijection, Binding},
    error::Result,
    options::SetOptions,
    orientation::{Forward, Orientation},
};

/// The address of a reference-counted object, used as its hash map key.
///
/// Every identity stored in a map belongs to an allocation kept alive by a
/// `Weak` held in that same map, so an address cannot be reused by another
/// object while the map still refers to it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
struct Identity(usize);

impl Identity {
    fn of<T>(object: &Rc<T>) -> Self {
        Self(Rc::as_ptr(object).cast::<()>() as usize)
    }

    fn of_weak<T>(object: &Weak<T>) -> Self {
        Self(object.as_ptr().cast::<()>() as usize)
    }
}

/// A non-owning link between a left object and a right object
#[derive(Debug)]
pub struct Association<L, R> {
    pub(crate) left: Weak<L>,
    pub(crate) right: Weak<R>,
}

impl<L, R> Association<L, R> {
    pub(crate) fn new(left: Weak<L>, right: Weak<R>) -> Self {
        Self { left, right }
    }

    /// An association is live while both of its objects are
    fn is_live(&self) -> bool {
        self.left.strong_count() > 0 && self.right.strong_count() > 0
    }
}

impl<L, R> Clone for Association<L, R> {
    fn clone(&self) -> Self {
        Self::new(self.left.clone(), self.right.clone())
    }
}

/// Number of stored associations below which dead ones are never swept
const MIN_SWEEP_THRESHOLD: usize = 64;

/// Storage shared by both views of a [`WeakBiMap`]
struct WeakStore<L, R> {
    /// Associations indexed by the identity of their left object
    left: FxHashMap<Identity, Association<L, R>>,
    /// The same associations indexed by the identity of their right object
    right: FxHashMap<Identity, Association<L, R>>,
    /// Dead associations are swept once `left` grows to this size
    sweep_at: usize,
}

/// A bi-directional map between reference-counted objects that does not keep
/// its objects alive.
///
/// Keys and values are compared by identity (the `Rc` allocation), not by
/// value. Once either object of a pair has been dropped everywhere else, the
/// pair no longer shows up in either view. The storage for such pairs is
/// swept as the map grows, or all at once by [`WeakBiMap::prune`].
///
/// Like [`BiMap`](crate::BiMap), every `WeakBiMap` is one view of a pair and
/// [`WeakBiMap::inverse`] returns the other one. There is no way to count or
/// iterate over the pairs.
#[repr(transparent)]
pub struct WeakBiMap<L, R, O = Forward> {
    store: WeakStore<L, R>,
    orientation: PhantomData<O>,
}

impl<L, R> WeakBiMap<L, R, Forward> {
    /// Construct a new empty `WeakBiMap`
    #[must_use]
    pub fn new() -> Self {
        Self {
            store: WeakStore {
                left: FxHashMap::default(),
                right: FxHashMap::default(),
                sweep_at: MIN_SWEEP_THRESHOLD,
            },
            orientation: PhantomData,
        }
    }

    /// Construct a `WeakBiMap` by setting each pair in order, without forcing
    pub fn from_entries<'a, I>(entries: I) -> Result<Self>
    where
        I: IntoIterator<Item = (&'a Rc<L>, &'a Rc<R>)>,
        L: 'a,
        R: 'a,
    {
        let mut map = Self::new();
        for (key, value) in entries {
            map.set(key, value)?;
        }
        Ok(map)
    }
}

impl<L, R> Default for WeakBiMap<L, R, Forward> {
    fn default() -> Self {
        Self::new()
    }
}

impl<L, R, O> WeakBiMap<L, R, O>
where
    O: Orientation<L, R>,
{
    /// Get the other view of this map
    #[must_use]
    pub fn inverse(&self) -> &WeakBiMap<L, R, O::Flip> {
        // SAFETY: `WeakBiMap` is `repr(transparent)` over `WeakStore<L, R>`
        // whatever its orientation, so both views share one layout
        unsafe { &*(self as *const Self).cast::<WeakBiMap<L, R, O::Flip>>() }
    }

    /// Get the other view of this map, for modification
    #[must_use]
    pub fn inverse_mut(&mut self) -> &mut WeakBiMap<L, R, O::Flip> {
        // SAFETY: see `inverse`
        unsafe { &mut *(self as *mut Self).cast::<WeakBiMap<L, R, O::Flip>>() }
    }

    /// Get the value bound to `key`, if the value is still alive
    #[must_use]
    #[profiling::function]
    pub fn get(&self, key: &Rc<O::Key>) -> Option<Rc<O::Value>> {
        let (keys, _) = O::links(&self.store.left, &self.store.right);
        let association = keys.get(&Identity::of(key))?;
        O::ends(association).1.upgrade()
    }

    /// Check if `key` is bound to a value that is still alive
    #[must_use]
    pub fn has(&self, key: &Rc<O::Key>) -> bool {
        let (keys, _) = O::links(&self.store.left, &self.store.right);
        keys.get(&Identity::of(key))
            .is_some_and(Association::is_live)
    }

    /// Bind `key` to `value`.
    ///
    /// Fails with [`Error::DuplicateValue`](crate::Error::DuplicateValue) if
    /// `value` is already bound to another live key.
    pub fn set(&mut self, key: &Rc<O::Key>, value: &Rc<O::Value>) -> Result<&mut Self> {
        self.set_with(key, value, SetOptions::default())
    }

    /// Bind `key` to `value` with the given options.
    ///
    /// With [`SetOptions::force`] the value is taken from whichever key it was
    /// bound to. If `key` was bound to another value as well, that pair is
    /// removed too.
    #[profiling::function]
    pub fn set_with(
        &mut self,
        key: &Rc<O::Key>,
        value: &Rc<O::Value>,
        options: SetOptions,
    ) -> Result<&mut Self> {
        self.ensure_can_set(key, value, options)?;

        let (key_id, value_id) = (Identity::of(key), Identity::of(value));
        let (keys, values) = O::links_mut(&mut self.store.left, &mut self.store.right);

        // Forget the value this key used to be bound to
        if let Some(previous) = keys.get(&key_id) {
            let previous_value = Identity::of_weak(O::ends(previous).1);
            if previous_value != value_id {
                values.remove(&previous_value);
            }
        }

        let association = O::association(Rc::downgrade(key), Rc::downgrade(value));
        keys.insert(key_id, association.clone());
        values.insert(value_id, association);

        // Sweep dead associations each time the store doubles
        if self.store.left.len() >= self.store.sweep_at {
            self.prune();
            self.store.sweep_at = MIN_SWEEP_THRESHOLD.max(self.store.left.len() * 2);
        }
        Ok(self)
    }

    /// Remove the pair bound to `key`.
    ///
    /// Returns `false` if `key` was not bound to a live value.
    #[profiling::function]
    pub fn delete(&mut self, key: &Rc<O::Key>) -> bool {
        let (keys, values) = O::links_mut(&mut self.store.left, &mut self.store.right);
        match keys.remove(&Identity::of(key)) {
            Some(association) => {
                values.remove(&Identity::of_weak(O::ends(&association).1));
                association.is_live()
            }
            None => false,
        }
    }

    /// Drop the storage of every pair whose key or value no longer exists.
    ///
    /// Returns the number of pairs removed.
    pub fn prune(&mut self) -> usize {
        log::trace!("Pruning dead associations");
        let before = self.store.left.len();
        self.store.left.retain(|_, association| association.is_live());
        self.store.right.retain(|_, association| association.is_live());

        let pruned = before - self.store.left.len();
        if pruned > 0 {
            log::trace!("Pruned {} dead associations", pruned);
        }
        pruned
    }
}

impl<L, R, O> Bijection for WeakBiMap<L, R, O>
where
    O: Orientation<L, R>,
{
    type Key = Rc<O::Key>;
    type Value = Rc<O::Value>;

    fn binding_of(&self, key: &Rc<O::Key>, value: &Rc<O::Value>) -> Binding {
        let (_, values) = O::links(&self.store.left, &self.store.right);
        match values.get(&Identity::of(value)) {
            Some(association) if association.is_live() => {
                if Identity::of_weak(O::ends(association).0) == Identity::of(key) {
                    Binding::Same
                } else {
                    Binding::Other
                }
            }
            _ => Binding::Unbound,
        }
    }

    fn contains_key(&self, key: &Rc<O::Key>) -> bool {
        self.has(key)
    }

    fn evict_both(&mut self, key: &Rc<O::Key>, value: &Rc<O::Value>) {
        let (keys, values) = O::links_mut(&mut self.store.left, &mut self.store.right);
        if let Some(association) = keys.remove(&Identity::of(key)) {
            values.remove(&Identity::of_weak(O::ends(&association).1));
        }
        if let Some(association) = values.remove(&Identity::of(value)) {
            keys.remove(&Identity::of_weak(O::ends(&association).0));
        }
    }

    fn rekey(&mut self, value: &Rc<O::Value>, key: &Rc<O::Key>) {
        let (keys, values) = O::links_mut(&mut self.store.left, &mut self.store.right);
        let value_id = Identity::of(value);
        if let Some(association) = values.get(&value_id) {
            keys.remove(&Identity::of_weak(O::ends(association).0));
        }

        let association = O::association(Rc::downgrade(key), Rc::downgrade(value));
        keys.insert(Identity::of(key), association.clone());
        values.insert(value_id, association);
    }
}

impl<L, R, O> fmt::Debug for WeakBiMap<L, R, O> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("WeakBiMap")
            .field("associations", &self.store.left.len())
            .finish_non_exhaustive()
    }
}
