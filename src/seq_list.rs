use std::fmt;

use tracing::{debug, trace};

use crate::error::{Result, SeqListError};

/// The operations every sequence container offers.
///
/// `SeqList` is the implementor; the trait exists so drivers can be written
/// against the contract rather than the concrete list.
pub trait Sequence<T> {
    /// Appends `element`, rejecting `None`.
    fn add(&mut self, element: Option<T>) -> Result<()>;
    fn get(&self, index: usize) -> Result<&T>;
    fn remove(&mut self, index: usize) -> Result<T>;
    /// Removes the first element equal to `element`. Returns whether one was found.
    fn remove_item(&mut self, element: &T) -> bool;
    fn len(&self) -> usize;
    fn is_empty(&self) -> bool;
    fn clear(&mut self);
    fn contains(&self, element: &T) -> bool;
    fn index_of(&self, element: &T) -> Option<usize>;
}

/// A singly-linked list with a head and a tail link.
///
/// Nodes are kept in an arena and linked by slot index. A slot is either on
/// the chain reachable from `head` or on the free list, never both, and
/// appends recycle free slots before growing the arena.
pub struct SeqList<T> {
    nodes: Vec<Option<Node<T>>>,
    free: Vec<usize>,
    head: Link,
    tail: Link,
    length: usize,
}

// Slot index of the next node.
type Link = Option<usize>;

struct Node<T> {
    data: T,
    next: Link,
}

/// Walks the chain from `head`, yielding each node with its slot.
struct Chain<'a, T> {
    nodes: &'a [Option<Node<T>>],
    cursor: Link,
}

impl<'a, T> Iterator for Chain<'a, T> {
    type Item = (usize, &'a Node<T>);

    fn next(&mut self) -> Option<Self::Item> {
        let slot = self.cursor?;
        let node = self.nodes.get(slot)?.as_ref()?;
        self.cursor = node.next;
        Some((slot, node))
    }
}

impl<T> SeqList<T> {
    pub fn new() -> Self {
        SeqList {
            nodes: Vec::new(),
            free: Vec::new(),
            head: None,
            tail: None,
            length: 0,
        }
    }

    /// Appends `element` at the end of the list.
    ///
    /// Accepts a bare value or an `Option`; `None` fails with
    /// [`SeqListError::InvalidArgument`] and leaves the list untouched.
    pub fn add(&mut self, element: impl Into<Option<T>>) -> Result<()> {
        let data = match element.into() {
            Some(data) => data,
            None => {
                debug!(len = self.length, "rejected absent element");
                return Err(SeqListError::InvalidArgument {
                    reason: "element cannot be None",
                });
            }
        };

        let node = Node { data, next: None };
        let slot = match self.free.pop() {
            Some(slot) => {
                self.nodes[slot] = Some(node);
                slot
            }
            None => {
                self.nodes.push(Some(node));
                self.nodes.len() - 1
            }
        };

        match self.tail {
            Some(tail) => {
                if let Some(Some(last)) = self.nodes.get_mut(tail) {
                    last.next = Some(slot);
                }
            }
            None => self.head = Some(slot),
        }
        self.tail = Some(slot);
        self.length += 1;

        trace!(slot, len = self.length, "appended node");
        Ok(())
    }

    /// Returns the element at `index`, walking from the head.
    pub fn get(&self, index: usize) -> Result<&T> {
        let slot = self.slot_at(index)?;
        self.data_at(Some(slot))
            .ok_or_else(|| self.out_of_range(index))
    }

    /// Unlinks and returns the element at `index`.
    pub fn remove(&mut self, index: usize) -> Result<T> {
        self.check_index(index)?;

        let prev = match index.checked_sub(1) {
            Some(before) => Some(self.slot_at(before)?),
            None => None,
        };

        let removed = self.unlink_after(prev);
        removed.ok_or_else(|| self.out_of_range(index))
    }

    /// Unlinks the first element equal to `element`.
    ///
    /// Returns `false` without touching the list when nothing matches.
    pub fn remove_item(&mut self, element: &T) -> bool
    where
        T: PartialEq,
    {
        let mut prev: Link = None;
        let mut hit = None;
        for (slot, node) in self.chain() {
            if node.data == *element {
                hit = Some(prev);
                break;
            }
            prev = Some(slot);
        }

        match hit {
            Some(prev) => self.unlink_after(prev).is_some(),
            None => false,
        }
    }

    pub fn len(&self) -> usize {
        self.length
    }

    pub fn is_empty(&self) -> bool {
        self.length == 0
    }

    /// Drops the whole chain at once.
    pub fn clear(&mut self) {
        trace!(len = self.length, "clearing list");
        self.nodes.clear();
        self.free.clear();
        self.head = None;
        self.tail = None;
        self.length = 0;
    }

    pub fn contains(&self, element: &T) -> bool
    where
        T: PartialEq,
    {
        self.index_of(element).is_some()
    }

    /// Position of the first element equal to `element`, if any.
    pub fn index_of(&self, element: &T) -> Option<usize>
    where
        T: PartialEq,
    {
        self.chain().position(|(_, node)| node.data == *element)
    }

    pub fn first(&self) -> Option<&T> {
        self.data_at(self.head)
    }

    pub fn last(&self) -> Option<&T> {
        self.data_at(self.tail)
    }

    fn chain(&self) -> Chain<'_, T> {
        Chain {
            nodes: &self.nodes,
            cursor: self.head,
        }
    }

    fn data_at(&self, link: Link) -> Option<&T> {
        let node = self.nodes.get(link?)?.as_ref()?;
        Some(&node.data)
    }

    fn slot_at(&self, index: usize) -> Result<usize> {
        self.check_index(index)?;
        self.chain()
            .nth(index)
            .map(|(slot, _)| slot)
            .ok_or_else(|| self.out_of_range(index))
    }

    fn check_index(&self, index: usize) -> Result<()> {
        if index >= self.length {
            debug!(index, len = self.length, "index out of range");
            return Err(self.out_of_range(index));
        }
        Ok(())
    }

    fn out_of_range(&self, index: usize) -> SeqListError {
        SeqListError::IndexOutOfRange {
            index,
            len: self.length,
        }
    }

    // Unlinks the node after `prev`, or the head when `prev` is `None`.
    fn unlink_after(&mut self, prev: Link) -> Option<T> {
        let target = match prev {
            Some(prev) => self.nodes.get(prev)?.as_ref()?.next?,
            None => self.head?,
        };
        let node = self.nodes.get_mut(target)?.take()?;

        match prev {
            Some(prev) => {
                if let Some(Some(before)) = self.nodes.get_mut(prev) {
                    before.next = node.next;
                }
            }
            None => self.head = node.next,
        }
        if node.next.is_none() {
            self.tail = prev;
        }
        self.free.push(target);
        self.length -= 1;

        trace!(slot = target, len = self.length, "unlinked node");
        Some(node.data)
    }
}

impl<T> Default for SeqList<T> {
    fn default() -> Self {
        SeqList::new()
    }
}

impl<T: PartialEq> Sequence<T> for SeqList<T> {
    fn add(&mut self, element: Option<T>) -> Result<()> {
        SeqList::add(self, element)
    }

    fn get(&self, index: usize) -> Result<&T> {
        SeqList::get(self, index)
    }

    fn remove(&mut self, index: usize) -> Result<T> {
        SeqList::remove(self, index)
    }

    fn remove_item(&mut self, element: &T) -> bool {
        SeqList::remove_item(self, element)
    }

    fn len(&self) -> usize {
        SeqList::len(self)
    }

    fn is_empty(&self) -> bool {
        SeqList::is_empty(self)
    }

    fn clear(&mut self) {
        SeqList::clear(self)
    }

    fn contains(&self, element: &T) -> bool {
        SeqList::contains(self, element)
    }

    fn index_of(&self, element: &T) -> Option<usize> {
        SeqList::index_of(self, element)
    }
}

impl<T: fmt::Display> fmt::Display for SeqList<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[")?;
        for (i, (_, node)) in self.chain().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{}", node.data)?;
        }
        f.write_str("]")
    }
}

impl<T: fmt::Debug> fmt::Debug for SeqList<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list()
            .entries(self.chain().map(|(_, node)| &node.data))
            .finish()
    }
}
