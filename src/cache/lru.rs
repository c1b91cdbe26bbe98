//! LRU Tracker Module
//!
//! Implements Least Recently Used ordering for cache eviction.
//!
//! Nodes live in a growable arena and link to each other by slot index, so
//! moving or unlinking any node is O(1) without shared ownership. Freed slots
//! are recycled through a free list.

// == Slot ==
#[derive(Debug)]
struct Slot<T> {
    /// Payload, `None` while the slot sits on the free list
    item: Option<T>,
    prev: Option<usize>,
    next: Option<usize>,
}

// == LRU Tracker ==
/// Doubly-linked recency list backed by an index arena.
///
/// - Front (head) = most recently used
/// - Back (tail) = least recently used
///
/// Every `usize` handed out by [`push_front`](Self::push_front) stays valid
/// until that item is removed.
#[derive(Debug)]
pub struct LruTracker<T> {
    slots: Vec<Slot<T>>,
    free: Vec<usize>,
    head: Option<usize>,
    tail: Option<usize>,
    len: usize,
}

impl<T> Default for LruTracker<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> LruTracker<T> {
    // == Constructor ==
    /// Creates a new empty LRU tracker.
    pub fn new() -> Self {
        Self {
            slots: Vec::new(),
            free: Vec::new(),
            head: None,
            tail: None,
            len: 0,
        }
    }

    /// Creates a tracker with room for `capacity` nodes before reallocating.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            slots: Vec::with_capacity(capacity),
            ..Self::new()
        }
    }

    // == Push Front ==
    /// Inserts an item as most recently used and returns its slot handle.
    pub fn push_front(&mut self, item: T) -> usize {
        let slot = Slot {
            item: Some(item),
            prev: None,
            next: None,
        };
        let idx = match self.free.pop() {
            Some(idx) => {
                self.slots[idx] = slot;
                idx
            }
            None => {
                self.slots.push(slot);
                self.slots.len() - 1
            }
        };
        self.link_front(idx);
        self.len += 1;
        idx
    }

    // == Touch ==
    /// Marks a slot as recently used (moves it to the front).
    pub fn touch(&mut self, idx: usize) {
        if self.head == Some(idx) || !self.is_live(idx) {
            return;
        }
        self.unlink(idx);
        self.link_front(idx);
    }

    // == Remove ==
    /// Unlinks a slot and returns its item. Returns None for a stale handle.
    pub fn remove(&mut self, idx: usize) -> Option<T> {
        if !self.is_live(idx) {
            return None;
        }
        self.unlink(idx);
        self.len -= 1;
        self.free.push(idx);
        self.slots[idx].item.take()
    }

    // == Evict Oldest ==
    /// Returns and removes the least recently used item.
    ///
    /// Returns None if tracker is empty.
    pub fn evict_oldest(&mut self) -> Option<T> {
        let tail = self.tail?;
        self.remove(tail)
    }

    // == Peek Oldest ==
    /// Returns the least recently used item without removing it.
    pub fn peek_oldest(&self) -> Option<&T> {
        self.tail.and_then(|idx| self.get(idx))
    }

    // == Access ==
    pub fn get(&self, idx: usize) -> Option<&T> {
        self.slots.get(idx).and_then(|slot| slot.item.as_ref())
    }

    pub fn get_mut(&mut self, idx: usize) -> Option<&mut T> {
        self.slots.get_mut(idx).and_then(|slot| slot.item.as_mut())
    }

    /// Iterates items from most to least recently used.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            tracker: self,
            cursor: self.head,
        }
    }

    // == Clear ==
    /// Drops every item and releases the arena.
    pub fn clear(&mut self) {
        self.slots.clear();
        self.free.clear();
        self.head = None;
        self.tail = None;
        self.len = 0;
    }

    // == Length ==
    /// Returns the number of tracked items.
    pub fn len(&self) -> usize {
        self.len
    }

    // == Is Empty ==
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    // == Linkage ==
    fn is_live(&self, idx: usize) -> bool {
        self.slots.get(idx).is_some_and(|slot| slot.item.is_some())
    }

    fn link_front(&mut self, idx: usize) {
        self.slots[idx].prev = None;
        self.slots[idx].next = self.head;
        match self.head {
            Some(old_head) => self.slots[old_head].prev = Some(idx),
            None => self.tail = Some(idx),
        }
        self.head = Some(idx);
    }

    fn unlink(&mut self, idx: usize) {
        let prev = self.slots[idx].prev.take();
        let next = self.slots[idx].next.take();

        match prev {
            Some(p) => self.slots[p].next = next,
            None => self.head = next,
        }
        match next {
            Some(n) => self.slots[n].prev = prev,
            None => self.tail = prev,
        }
    }
}

// == Iterator ==
/// Front-to-back iterator over an [`LruTracker`].
pub struct Iter<'a, T> {
    tracker: &'a LruTracker<T>,
    cursor: Option<usize>,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let idx = self.cursor?;
        let slot = &self.tracker.slots[idx];
        self.cursor = slot.next;
        slot.item.as_ref()
    }
}
