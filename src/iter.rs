use std::{iter::FusedIterator, marker::PhantomData};

use crate::{ledger::Entries, orientation::Orientation};

/// Iterator over the `(key, value)` pairs of a [`BiMap`](crate::BiMap) view, oldest first
#[derive(Debug)]
pub struct Iter<'a, L, R, O> {
    entries: Entries<'a, L, R>,
    orientation: PhantomData<O>,
}

impl<'a, L, R, O> Iter<'a, L, R, O> {
    pub(crate) fn new(entries: Entries<'a, L, R>) -> Self {
        Self {
            entries,
            orientation: PhantomData,
        }
    }
}

impl<L, R, O> Clone for Iter<'_, L, R, O> {
    fn clone(&self) -> Self {
        Self::new(self.entries.clone())
    }
}

impl<'a, L, R, O> Iterator for Iter<'a, L, R, O>
where
    O: Orientation<L, R>,
    O::Key: 'a,
    O::Value: 'a,
{
    type Item = (&'a O::Key, &'a O::Value);

    fn next(&mut self) -> Option<Self::Item> {
        self.entries.next().map(|entry| O::slots(entry))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.entries.size_hint()
    }
}

impl<'a, L, R, O> DoubleEndedIterator for Iter<'a, L, R, O>
where
    O: Orientation<L, R>,
    O::Key: 'a,
    O::Value: 'a,
{
    fn next_back(&mut self) -> Option<Self::Item> {
        self.entries.next_back().map(|entry| O::slots(entry))
    }
}

impl<'a, L, R, O> ExactSizeIterator for Iter<'a, L, R, O>
where
    O: Orientation<L, R>,
    O::Key: 'a,
    O::Value: 'a,
{
}

impl<'a, L, R, O> FusedIterator for Iter<'a, L, R, O>
where
    O: Orientation<L, R>,
    O::Key: 'a,
    O::Value: 'a,
{
}

/// Iterator over the keys of a [`BiMap`](crate::BiMap) view, oldest first
#[derive(Debug)]
pub struct Keys<'a, L, R, O> {
    inner: Iter<'a, L, R, O>,
}

impl<'a, L, R, O> Keys<'a, L, R, O> {
    pub(crate) fn new(inner: Iter<'a, L, R, O>) -> Self {
        Self { inner }
    }
}

impl<'a, L, R, O> Iterator for Keys<'a, L, R, O>
where
    O: Orientation<L, R>,
    O::Key: 'a,
    O::Value: 'a,
{
    type Item = &'a O::Key;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|(key, _)| key)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<'a, L, R, O> DoubleEndedIterator for Keys<'a, L, R, O>
where
    O: Orientation<L, R>,
    O::Key: 'a,
    O::Value: 'a,
{
    fn next_back(&mut self) -> Option<Self::Item> {
        self.inner.next_back().map(|(key, _)| key)
    }
}

impl<'a, L, R, O> ExactSizeIterator for Keys<'a, L, R, O>
where
    O: Orientation<L, R>,
    O::Key: 'a,
    O::Value: 'a,
{
}

/// Iterator over the values of a [`BiMap`](crate::BiMap) view, oldest first
#[derive(Debug)]
pub struct Values<'a, L, R, O> {
    inner: Iter<'a, L, R, O>,
}

impl<'a, L, R, O> Values<'a, L, R, O> {
    pub(crate) fn new(inner: Iter<'a, L, R, O>) -> Self {
        Self { inner }
    }
}

impl<'a, L, R, O> Iterator for Values<'a, L, R, O>
where
    O: Orientation<L, R>,
    O::Key: 'a,
    O::Value: 'a,
{
    type Item = &'a O::Value;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|(_, value)| value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<'a, L, R, O> DoubleEndedIterator for Values<'a, L, R, O>
where
    O: Orientation<L, R>,
    O::Key: 'a,
    O::Value: 'a,
{
    fn next_back(&mut self) -> Option<Self::Item> {
        self.inner.next_back().map(|(_, value)| value)
    }
}

impl<'a, L, R, O> ExactSizeIterator for Values<'a, L, R, O>
where
    O: Orientation<L, R>,
    O::Key: 'a,
    O::Value: 'a,
{
}
