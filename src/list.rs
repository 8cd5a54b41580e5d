//! Generic ordered container with a versioned cursor
//!
//! A singly-linked list that owns its items: O(1) prepend, O(n) append and
//! removal, O(1) size. Traversal goes through [`Cursor`], a detached handle
//! that records the list's structural version and refuses to keep walking a
//! list that changed underneath it.

use crate::error::{Error, Result};

struct Node<T> {
    item: T,
    next: Option<Box<Node<T>>>,
}

/// Singly-linked ordered collection.
///
/// Invariants: `len` equals the number of nodes reachable from `head`; the
/// chain is acyclic; `version` increases on every structural mutation.
pub struct List<T> {
    head: Option<Box<Node<T>>>,
    len: usize,
    version: u64,
}

impl<T> List<T> {
    /// Create an empty list.
    pub fn new() -> Self {
        Self {
            head: None,
            len: 0,
            version: 0,
        }
    }

    /// Number of items currently in the list.
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Prepend an item. O(1).
    pub fn push_front(&mut self, item: T) {
        self.head = Some(Box::new(Node {
            item,
            next: self.head.take(),
        }));
        self.len += 1;
        self.version += 1;
    }

    /// Append an item at the tail. O(n).
    pub fn push_back(&mut self, item: T) {
        let mut link = &mut self.head;
        while let Some(node) = link {
            link = &mut node.next;
        }
        *link = Some(Box::new(Node { item, next: None }));
        self.len += 1;
        self.version += 1;
    }

    /// Remove the first item equal to `target` and return it.
    ///
    /// Returns `None` when the list is empty or no item matches; the list is
    /// left unchanged in that case. Absence is not an error.
    pub fn remove(&mut self, target: &T) -> Option<T>
    where
        T: PartialEq,
    {
        self.remove_where(|item| item == target)
    }

    /// Remove the first item matching `pred` and return it.
    ///
    /// The walk tracks the link to rewrite rather than a "previous node", so
    /// there is no uninitialized-predecessor state: the head link itself is
    /// the first candidate. The predicate peeks through a shared borrow;
    /// the link is reborrowed mutably only to advance, so the `?` branch
    /// after a successful peek cannot fire.
    pub fn remove_where(&mut self, mut pred: impl FnMut(&T) -> bool) -> Option<T> {
        let mut link = &mut self.head;
        while link.as_ref().is_some_and(|node| !pred(&node.item)) {
            link = &mut link.as_mut()?.next;
        }
        let mut node = link.take()?;
        *link = node.next.take();
        self.len -= 1;
        self.version += 1;
        Some(node.item)
    }

    /// Drop every item, releasing each node exactly once.
    ///
    /// Iterative so a long chain cannot overflow the stack through recursive
    /// drop. Safe on an already-empty list.
    pub fn clear(&mut self) {
        let mut cur = self.head.take();
        while let Some(mut node) = cur {
            cur = node.next.take();
        }
        self.len = 0;
        self.version += 1;
    }

    /// Bind a cursor at the current head.
    pub fn cursor(&self) -> Cursor {
        Cursor {
            pos: 0,
            version: self.version,
        }
    }

    /// Forward iterator over item references.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            next: self.head.as_deref(),
        }
    }

    /// Forward iterator over mutable item references.
    pub fn iter_mut(&mut self) -> IterMut<'_, T> {
        IterMut {
            next: self.head.as_deref_mut(),
        }
    }

    fn nth(&self, mut n: usize) -> Option<&T> {
        let mut cur = self.head.as_deref();
        while let Some(node) = cur {
            if n == 0 {
                return Some(&node.item);
            }
            n -= 1;
            cur = node.next.as_deref();
        }
        None
    }

    fn nth_mut(&mut self, mut n: usize) -> Option<&mut T> {
        let mut cur = self.head.as_deref_mut();
        while let Some(node) = cur {
            if n == 0 {
                return Some(&mut node.item);
            }
            n -= 1;
            cur = node.next.as_deref_mut();
        }
        None
    }
}

impl<T> Default for List<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Drop for List<T> {
    fn drop(&mut self) {
        self.clear();
    }
}

impl<T: std::fmt::Debug> std::fmt::Debug for List<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

pub struct Iter<'a, T> {
    next: Option<&'a Node<T>>,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<&'a T> {
        self.next.map(|node| {
            self.next = node.next.as_deref();
            &node.item
        })
    }
}

pub struct IterMut<'a, T> {
    next: Option<&'a mut Node<T>>,
}

impl<'a, T> Iterator for IterMut<'a, T> {
    type Item = &'a mut T;

    fn next(&mut self) -> Option<&'a mut T> {
        self.next.take().map(|node| {
            self.next = node.next.as_deref_mut();
            &mut node.item
        })
    }
}

/// Forward-only, resettable traversal handle.
///
/// A cursor holds no borrow of its list; each call passes the list in. It
/// remembers the structural version it was bound at and returns
/// [`Error::StaleCursor`] if the list has been mutated since, instead of
/// walking freed-or-shifted structure. Exhaustion is `Ok(None)`, a normal
/// terminal signal.
#[derive(Debug, Clone)]
pub struct Cursor {
    pos: usize,
    version: u64,
}

impl Cursor {
    /// Yield the current item and advance.
    pub fn next<'a, T>(&mut self, list: &'a List<T>) -> Result<Option<&'a T>> {
        if self.version != list.version {
            return Err(Error::StaleCursor);
        }
        let item = list.nth(self.pos);
        if item.is_some() {
            self.pos += 1;
        }
        Ok(item)
    }

    /// Yield the current item mutably and advance.
    pub fn next_mut<'a, T>(&mut self, list: &'a mut List<T>) -> Result<Option<&'a mut T>> {
        if self.version != list.version {
            return Err(Error::StaleCursor);
        }
        let pos = self.pos;
        let item = list.nth_mut(pos);
        if item.is_some() {
            self.pos += 1;
        }
        Ok(item)
    }

    /// Rebind at the list's current head, accepting its current version.
    pub fn reset<T>(&mut self, list: &List<T>) {
        self.pos = 0;
        self.version = list.version;
    }

    /// Whether this cursor may still traverse `list` without erroring.
    pub fn is_valid_for<T>(&self, list: &List<T>) -> bool {
        self.version == list.version
    }
}
