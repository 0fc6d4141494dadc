//! Insertion-ordered storage for the entries of a strong bidirectional map
//!
//! Entries live in a slot arena threaded with a doubly-linked list. This gives
//! O(1) append, O(1) removal from anywhere, and iteration in creation order.
//! Removed slots are recycled by later appends.

use std::ops::{Index, IndexMut};

/// Handle to an entry stored in a [`Ledger`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct EntryId(usize);

/// A key-value association shared by both views of a map.
///
/// Which slot is the key depends on the view reading it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry<L, R> {
    pub(crate) left: L,
    pub(crate) right: R,
}

impl<L, R> Entry<L, R> {
    pub(crate) fn new(left: L, right: R) -> Self {
        Self { left, right }
    }
}

#[derive(Debug, Clone)]
struct Node<L, R> {
    entry: Entry<L, R>,
    prev: Option<EntryId>,
    next: Option<EntryId>,
}

/// Ordered arena of entries
#[derive(Debug, Clone)]
pub(crate) struct Ledger<L, R> {
    slots: Vec<Option<Node<L, R>>>,
    /// Indices of empty slots, reused before growing `slots`
    vacant: Vec<usize>,
    head: Option<EntryId>,
    tail: Option<EntryId>,
    len: usize,
}

impl<L, R> Ledger<L, R> {
    pub(crate) fn with_capacity(capacity: usize) -> Self {
        Self {
            slots: Vec::with_capacity(capacity),
            vacant: Vec::new(),
            head: None,
            tail: None,
            len: 0,
        }
    }

    pub(crate) fn len(&self) -> usize {
        self.len
    }

    /// Append an entry after every live entry
    pub(crate) fn push_back(&mut self, entry: Entry<L, R>) -> EntryId {
        let node = Node {
            entry,
            prev: self.tail,
            next: None,
        };

        let id = match self.vacant.pop() {
            Some(index) => {
                self.slots[index] = Some(node);
                EntryId(index)
            }
            None => {
                self.slots.push(Some(node));
                EntryId(self.slots.len() - 1)
            }
        };

        match self.tail {
            Some(tail) => self.node_mut(tail).next = Some(id),
            None => self.head = Some(id),
        }
        self.tail = Some(id);
        self.len += 1;
        id
    }

    /// Unlink and return an entry. Returns `None` if the slot is already empty
    pub(crate) fn remove(&mut self, id: EntryId) -> Option<Entry<L, R>> {
        let node = self.slots.get_mut(id.0)?.take()?;

        match node.prev {
            Some(prev) => self.node_mut(prev).next = node.next,
            None => self.head = node.next,
        }
        match node.next {
            Some(next) => self.node_mut(next).prev = node.prev,
            None => self.tail = node.prev,
        }

        self.vacant.push(id.0);
        self.len -= 1;
        Some(node.entry)
    }

    pub(crate) fn clear(&mut self) {
        self.slots.clear();
        self.vacant.clear();
        self.head = None;
        self.tail = None;
        self.len = 0;
    }

    pub(crate) fn iter(&self) -> Entries<'_, L, R> {
        Entries {
            ledger: self,
            front: self.head,
            back: self.tail,
            remaining: self.len,
        }
    }

    fn node(&self, id: EntryId) -> &Node<L, R> {
        match self.slots.get(id.0) {
            Some(Some(node)) => node,
            _ => panic!("Entry {} is not stored in this ledger", id.0),
        }
    }

    fn node_mut(&mut self, id: EntryId) -> &mut Node<L, R> {
        match self.slots.get_mut(id.0) {
            Some(Some(node)) => node,
            _ => panic!("Entry {} is not stored in this ledger", id.0),
        }
    }
}

impl<L, R> Index<EntryId> for Ledger<L, R> {
    type Output = Entry<L, R>;

    fn index(&self, id: EntryId) -> &Self::Output {
        &self.node(id).entry
    }
}

impl<L, R> IndexMut<EntryId> for Ledger<L, R> {
    fn index_mut(&mut self, id: EntryId) -> &mut Self::Output {
        &mut self.node_mut(id).entry
    }
}

/// Iterator over the entries of a [`Ledger`] from oldest to newest
#[derive(Debug)]
pub struct Entries<'a, L, R> {
    ledger: &'a Ledger<L, R>,
    front: Option<EntryId>,
    back: Option<EntryId>,
    remaining: usize,
}

impl<L, R> Clone for Entries<'_, L, R> {
    fn clone(&self) -> Self {
        Self {
            ledger: self.ledger,
            front: self.front,
            back: self.back,
            remaining: self.remaining,
        }
    }
}

impl<'a, L, R> Iterator for Entries<'a, L, R> {
    type Item = &'a Entry<L, R>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        let node = self.ledger.node(self.front?);
        self.front = node.next;
        self.remaining -= 1;
        Some(&node.entry)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<L, R> DoubleEndedIterator for Entries<'_, L, R> {
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        let node = self.ledger.node(self.back?);
        self.back = node.prev;
        self.remaining -= 1;
        Some(&node.entry)
    }
}

impl<L, R> ExactSizeIterator for Entries<'_, L, R> {}
