//! Singly linked list of customer records.
//!
//! Nodes live in an arena owned by the list and link to their successor by
//! slot index. The list only ever grows at the tail, and is torn down as a
//! whole by [`RecordList::release_all`].

use std::collections::TryReserveError;
use std::io::{self, Write};

use tracing::{debug, trace, warn};

use crate::error::{Error, Result};
use crate::record::Record;

/// Line written by [`RecordList::print_all`] when the list holds no records.
pub const EMPTY_NOTICE: &str = "The list is empty.";

/// One link of the chain.
#[derive(Debug)]
struct Node {
    record: Record,
    next: Option<usize>,
}

/// An ordered, singly linked sequence of customer records.
///
/// The list exclusively owns its nodes. Records are copied in on
/// [`append`](Self::append) and come out again, in append order, through
/// [`iter`](Self::iter) and [`print_all`](Self::print_all).
///
/// # Examples
///
/// ```
/// use customer_list::{Record, RecordList};
///
/// let mut list = RecordList::new();
/// list.append(Record::new("Schmidt")).unwrap();
/// list.append(Record::new("Müller")).unwrap();
///
/// let mut out = Vec::new();
/// list.print_all(&mut out).unwrap();
/// assert_eq!(String::from_utf8(out).unwrap(), "Schmidt\nMüller\n");
///
/// list.release_all();
/// assert!(list.is_empty());
/// ```
#[derive(Debug, Default)]
pub struct RecordList {
    /// Slot of the first node, `None` while the list is empty.
    head: Option<usize>,
    /// Node storage. A slot is `None` only while `release_all` is running.
    slots: Vec<Option<Node>>,
    /// Refuse node storage once this many nodes exist.
    node_limit: Option<usize>,
}

impl RecordList {
    /// Create an empty list.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            head: None,
            slots: Vec::new(),
            node_limit: None,
        }
    }

    /// Create an empty list whose node storage runs out after `limit` nodes.
    #[cfg(test)]
    pub(crate) const fn with_node_limit(limit: usize) -> Self {
        Self {
            head: None,
            slots: Vec::new(),
            node_limit: Some(limit),
        }
    }

    /// Number of records in the list.
    #[must_use]
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    /// Check whether the list holds no records.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.head.is_none()
    }

    /// Append a record at the tail of the list.
    ///
    /// Returns the arena slot of the new node.
    ///
    /// # Errors
    ///
    /// Returns [`Error::AllocationFailure`] if storage for the new node cannot
    /// be obtained. The list is left exactly as it was.
    pub fn append(&mut self, record: Record) -> Result<usize> {
        self.reserve_node()
            .map_err(|source| Error::AllocationFailure {
                requested: std::mem::size_of::<Option<Node>>(),
                source,
            })?;

        let tail = self.tail();
        let slot = self.slots.len();
        self.slots.push(Some(Node { record, next: None }));
        debug!(slot, len = self.slots.len(), "allocated node");

        match tail {
            None => {
                debug!("inserting first element");
                self.head = Some(slot);
            }
            Some(tail) => {
                if let Some(node) = self.slots[tail].as_mut() {
                    node.next = Some(slot);
                }
            }
        }
        Ok(slot)
    }

    /// Write every record, one per line, head to tail.
    ///
    /// An empty list writes the single line [`EMPTY_NOTICE`].
    ///
    /// # Errors
    ///
    /// Returns an error if writing to `out` fails.
    pub fn print_all<W: Write>(&self, out: &mut W) -> io::Result<()> {
        if self.is_empty() {
            return writeln!(out, "{EMPTY_NOTICE}");
        }
        for record in self {
            writeln!(out, "{record}")?;
        }
        Ok(())
    }

    /// Release every node, leaving the list empty.
    ///
    /// Returns the number of nodes released. Releasing an empty list is a
    /// no-op.
    pub fn release_all(&mut self) -> usize {
        self.release_all_with(|_, _| {})
    }

    /// Release every node head to tail, handing each slot and record to
    /// `on_release` as its node is destroyed.
    ///
    /// The successor of a node is read before the node is released.
    pub fn release_all_with<F>(&mut self, mut on_release: F) -> usize
    where
        F: FnMut(usize, Record),
    {
        let Some(head) = self.head.take() else {
            debug!("list was empty, nothing to release");
            return 0;
        };

        let mut released = 0;
        let mut cursor = Some(head);
        while let Some(slot) = cursor {
            let Some(node) = self.slots.get_mut(slot).and_then(Option::take) else {
                warn!(slot, released, "chain points at an empty slot, release cut short");
                break;
            };
            cursor = node.next;
            debug!(slot, "released node");
            on_release(slot, node.record);
            released += 1;
        }

        self.slots.clear();
        debug!(released, "list released");
        released
    }

    /// Iterate over the records head to tail.
    #[must_use]
    pub fn iter(&self) -> Iter<'_> {
        Iter {
            list: self,
            cursor: self.head,
        }
    }

    /// Obtain storage for one more node.
    fn reserve_node(&mut self) -> std::result::Result<(), TryReserveError> {
        if self.node_limit.is_some_and(|limit| self.slots.len() >= limit) {
            // An impossible request yields the allocator's own error type.
            return Vec::<Option<Node>>::new().try_reserve(usize::MAX);
        }
        self.slots.try_reserve(1)
    }

    /// Walk the chain to the last node.
    fn tail(&self) -> Option<usize> {
        let mut current = self.head?;
        while let Some(next) = self.node(current).and_then(|node| node.next) {
            trace!(from = current, to = next, "following link");
            current = next;
        }
        Some(current)
    }

    fn node(&self, slot: usize) -> Option<&Node> {
        self.slots.get(slot).and_then(Option::as_ref)
    }
}

/// Borrowing iterator over the records of a [`RecordList`].
#[derive(Debug, Clone)]
pub struct Iter<'a> {
    list: &'a RecordList,
    cursor: Option<usize>,
}

impl<'a> Iterator for Iter<'a> {
    type Item = &'a Record;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.list.node(self.cursor?)?;
        self.cursor = node.next;
        Some(&node.record)
    }
}

impl<'a> IntoIterator for &'a RecordList {
    type Item = &'a Record;
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
