//! Type-level tags selecting which side of a map a view treats as its keys
//!
//! Both views of a bidirectional map share one storage. A [`Forward`] view reads
//! the left side of every association as the key and the right side as the
//! value; a [`Backward`] view reads them the other way around. Flipping the tag
//! turns a view into its inverse without touching the storage.

use std::rc::Weak;

use rustc_hash::FxHashMap;

use crate::ledger::{Entry, EntryId};
use crate::weak::Association;

mod sealed {
    pub trait Sealed {}
}

/// The view that maps left values to right values
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Forward {}

/// The view that maps right values to left values
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Backward {}

impl sealed::Sealed for Forward {}
impl sealed::Sealed for Backward {}

/// Assigns the key and value roles of a view over left/right storage.
///
/// This trait is sealed. Its methods are plumbing for the map types.
pub trait Orientation<L, R>: sealed::Sealed + 'static {
    /// The type this view looks things up by
    type Key;
    /// The type this view returns
    type Value;
    /// The orientation of the paired inverse view, with key and value swapped
    type Flip: Orientation<L, R, Key = Self::Value, Value = Self::Key>;

    #[doc(hidden)]
    fn entry(key: Self::Key, value: Self::Value) -> Entry<L, R>;

    #[doc(hidden)]
    fn slots(entry: &Entry<L, R>) -> (&Self::Key, &Self::Value);

    #[doc(hidden)]
    fn slots_mut(entry: &mut Entry<L, R>) -> (&mut Self::Key, &mut Self::Value);

    #[doc(hidden)]
    fn indexes<'a>(
        left: &'a FxHashMap<L, EntryId>,
        right: &'a FxHashMap<R, EntryId>,
    ) -> (
        &'a FxHashMap<Self::Key, EntryId>,
        &'a FxHashMap<Self::Value, EntryId>,
    );

    #[doc(hidden)]
    fn indexes_mut<'a>(
        left: &'a mut FxHashMap<L, EntryId>,
        right: &'a mut FxHashMap<R, EntryId>,
    ) -> (
        &'a mut FxHashMap<Self::Key, EntryId>,
        &'a mut FxHashMap<Self::Value, EntryId>,
    );

    #[doc(hidden)]
    fn association(key: Weak<Self::Key>, value: Weak<Self::Value>) -> Association<L, R>;

    #[doc(hidden)]
    fn ends(association: &Association<L, R>) -> (&Weak<Self::Key>, &Weak<Self::Value>);

    /// Order a left/right pair of same-typed containers as (keys, values)
    #[doc(hidden)]
    fn links<'a, T>(left: &'a T, right: &'a T) -> (&'a T, &'a T);

    #[doc(hidden)]
    fn links_mut<'a, T>(left: &'a mut T, right: &'a mut T) -> (&'a mut T, &'a mut T);
}

impl<L, R> Orientation<L, R> for Forward {
    type Key = L;
    type Value = R;
    type Flip = Backward;

    fn entry(key: L, value: R) -> Entry<L, R> {
        Entry::new(key, value)
    }

    fn slots(entry: &Entry<L, R>) -> (&L, &R) {
        (&entry.left, &entry.right)
    }

    fn slots_mut(entry: &mut Entry<L, R>) -> (&mut L, &mut R) {
        (&mut entry.left, &mut entry.right)
    }

    fn indexes<'a>(
        left: &'a FxHashMap<L, EntryId>,
        right: &'a FxHashMap<R, EntryId>,
    ) -> (&'a FxHashMap<L, EntryId>, &'a FxHashMap<R, EntryId>) {
        (left, right)
    }

    fn indexes_mut<'a>(
        left: &'a mut FxHashMap<L, EntryId>,
        right: &'a mut FxHashMap<R, EntryId>,
    ) -> (&'a mut FxHashMap<L, EntryId>, &'a mut FxHashMap<R, EntryId>) {
        (left, right)
    }

    fn association(key: Weak<L>, value: Weak<R>) -> Association<L, R> {
        Association::new(key, value)
    }

    fn ends(association: &Association<L, R>) -> (&Weak<L>, &Weak<R>) {
        (&association.left, &association.right)
    }

    fn links<'a, T>(left: &'a T, right: &'a T) -> (&'a T, &'a T) {
        (left, right)
    }

    fn links_mut<'a, T>(left: &'a mut T, right: &'a mut T) -> (&'a mut T, &'a mut T) {
        (left, right)
    }
}

impl<L, R> Orientation<L, R> for Backward {
    type Key = R;
    type Value = L;
    type Flip = Forward;

    fn entry(key: R, value: L) -> Entry<L, R> {
        Entry::new(value, key)
    }

    fn slots(entry: &Entry<L, R>) -> (&R, &L) {
        (&entry.right, &entry.left)
    }

    fn slots_mut(entry: &mut Entry<L, R>) -> (&mut R, &mut L) {
        (&mut entry.right, &mut entry.left)
    }

    fn indexes<'a>(
        left: &'a FxHashMap<L, EntryId>,
        right: &'a FxHashMap<R, EntryId>,
    ) -> (&'a FxHashMap<R, EntryId>, &'a FxHashMap<L, EntryId>) {
        (right, left)
    }

    fn indexes_mut<'a>(
        left: &'a mut FxHashMap<L, EntryId>,
        right: &'a mut FxHashMap<R, EntryId>,
    ) -> (&'a mut FxHashMap<R, EntryId>, &'a mut FxHashMap<L, EntryId>) {
        (right, left)
    }

    fn association(key: Weak<R>, value: Weak<L>) -> Association<L, R> {
        Association::new(value, key)
    }

    fn ends(association: &Association<L, R>) -> (&Weak<R>, &Weak<L>) {
        (&association.right, &association.left)
    }

    fn links<'a, T>(left: &'a T, right: &'a T) -> (&'a T, &'a T) {
        (right, left)
    }

    fn links_mut<'a, T>(left: &'a mut T, right: &'a mut T) -> (&'a mut T, &'a mut T) {
        (right, left)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_backward_swaps_slots() {
        let mut entry = <Backward as Orientation<u8, char>>::entry('a', 1);
        assert_eq!(entry, Entry::new(1, 'a'));

        let (key, value) = <Backward as Orientation<u8, char>>::slots_mut(&mut entry);
        *key = 'b';
        *value = 2;
        assert_eq!(<Forward as Orientation<u8, char>>::slots(&entry), (&2, &'b'));
    }

    #[test]
    fn test_links_follow_orientation() {
        let (left, right) = (vec![1], vec![2]);
        assert_eq!(
            <Forward as Orientation<(), ()>>::links(&left, &right),
            (&left, &right)
        );
        assert_eq!(
            <Backward as Orientation<(), ()>>::links(&left, &right),
            (&right, &left)
        );
    }
}
