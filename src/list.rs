//! Indexed List
//!
//! A sequence stored as a doubly linked chain of blocks, where each block
//! owns a doubly linked chain of nodes. Blocks are kept around sqrt(n) in
//! size by a balancing pass after every insert and remove, so the chain has
//! O(sqrt(n)) blocks and every indexed operation walks O(sqrt(n)) blocks plus
//! O(sqrt(n)) nodes.
//!
//! ```text
//! head -> [3: a b c] <-> [4: d e f g] <-> [2: h i] -> NULL
//! ```
//!
//! - get / get_mut / set: O(sqrt(n)) - locate block, then node
//! - insert: O(sqrt(n)) - locate, link, balance
//! - remove: O(sqrt(n)) - locate, unlink, balance
//! - len: O(1)
//! - iter / to_vec: O(n)
//!
//! Nodes and blocks live in two arenas and link to each other by index; no
//! value is ever reachable from two places.

use std::fmt;

use tracing::debug;

use crate::arena::Arena;
use crate::arena::Idx;
use crate::arena::NULL;
use crate::block::Block;
use crate::block::Node;
use crate::error::IndexError;
use crate::error::Op;
use crate::error::Result;
use crate::iter::IntoIter;
use crate::iter::Iter;

/// A list with O(sqrt(n)) indexed access, insertion and removal.
#[derive(Clone)]
pub struct IndexedList<T> {
    /// Arena of element nodes.
    pub(crate) nodes: Arena<Node<T>>,
    /// Arena of blocks.
    pub(crate) blocks: Arena<Block>,
    /// First block. Never `NULL`: an empty list has one empty block.
    pub(crate) head: Idx,
    /// Number of elements, the sum of every block's size.
    pub(crate) total_size: usize,
}

impl<T> IndexedList<T> {
    /// Create an empty list, represented by a single empty block.
    pub fn new() -> IndexedList<T> {
        let mut blocks = Arena::new();
        let head = blocks.alloc(Block::new());
        IndexedList {
            nodes: Arena::new(),
            blocks,
            head,
            total_size: 0,
        }
    }

    /// Create an empty list with room for `capacity` elements before the
    /// node arena reallocates.
    pub fn with_capacity(capacity: usize) -> IndexedList<T> {
        let mut blocks = Arena::with_capacity(capacity.isqrt() + 1);
        let head = blocks.alloc(Block::new());
        IndexedList {
            nodes: Arena::with_capacity(capacity),
            blocks,
            head,
            total_size: 0,
        }
    }

    /// Number of elements in the list.
    pub fn len(&self) -> usize {
        self.total_size
    }

    /// Alias for `len`.
    pub fn size(&self) -> usize {
        self.total_size
    }

    pub fn is_empty(&self) -> bool {
        self.total_size == 0
    }

    /// Number of blocks in the chain. At least one, even when empty.
    pub fn block_count(&self) -> usize {
        self.blocks.live()
    }

    /// Sizes of the blocks in chain order.
    pub fn block_sizes(&self) -> Vec<usize> {
        let mut sizes = Vec::with_capacity(self.block_count());
        let mut block = self.head;
        while block != NULL {
            let b = self.blocks.get(block);
            sizes.push(b.size);
            block = b.next;
        }
        sizes
    }

    // --- Locate ---

    fn out_of_range(&self, op: Op, index: usize) -> IndexError {
        debug!(%op, index, len = self.total_size, "index out of range");
        IndexError::IndexOutOfRange {
            op,
            index,
            len: self.total_size,
        }
    }

    /// Find the block holding the element at `index` and the offset of that
    /// element within the block. Requires `index < total_size`.
    fn locate_block(&self, index: usize) -> (Idx, usize) {
        debug_assert!(index < self.total_size);
        let mut cur = 0usize;
        let mut block = self.head;
        loop {
            let b = self.blocks.get(block);
            if cur + b.size > index {
                return (block, index - cur);
            }
            cur += b.size;
            block = b.next;
        }
    }

    /// Walk `offset` nodes along the chain of `block`.
    fn walk_block(&self, block: Idx, offset: usize) -> Idx {
        let mut node = self.blocks.get(block).head;
        for _ in 0..offset {
            node = self.nodes.get(node).next;
        }
        node
    }

    /// Find the node holding the element at `index`. Requires
    /// `index < total_size`.
    fn locate(&self, index: usize) -> Idx {
        if index == 0 {
            return self.blocks.get(self.head).head;
        }
        let (block, offset) = self.locate_block(index);
        self.walk_block(block, offset)
    }

    // --- Reads and in-place writes ---

    /// Get a reference to the element at `index`.
    pub fn get(&self, index: usize) -> Result<&T> {
        if index >= self.total_size {
            return Err(self.out_of_range(Op::Get, index));
        }
        let node = self.locate(index);
        Ok(&self.nodes.get(node).value)
    }

    /// Get a mutable reference to the element at `index`.
    pub fn get_mut(&mut self, index: usize) -> Result<&mut T> {
        if index >= self.total_size {
            return Err(self.out_of_range(Op::Get, index));
        }
        let node = self.locate(index);
        Ok(&mut self.nodes.get_mut(node).value)
    }

    /// Overwrite the element at `index`, returning the old value.
    /// On error the list is untouched and `value` is dropped.
    pub fn set(&mut self, index: usize, value: T) -> Result<T> {
        if index >= self.total_size {
            return Err(self.out_of_range(Op::Set, index));
        }
        let node = self.locate(index);
        Ok(std::mem::replace(&mut self.nodes.get_mut(node).value, value))
    }

    pub fn first(&self) -> Option<&T> {
        self.get(0).ok()
    }

    pub fn last(&self) -> Option<&T> {
        let last = self.total_size.checked_sub(1)?;
        self.get(last).ok()
    }

    // --- Structural mutation ---

    /// Insert `value` so that it ends up at `index`, shifting every element
    /// at or after `index` one place to the right. `index == len()` appends.
    pub fn insert(&mut self, index: usize, value: T) -> Result<()> {
        if index > self.total_size {
            return Err(self.out_of_range(Op::Insert, index));
        }
        self.link_at(index, value);
        Ok(())
    }

    /// Link a new node holding `value` at `index` and rebalance. Requires
    /// `index <= total_size`.
    fn link_at(&mut self, index: usize, value: T) {
        debug_assert!(index <= self.total_size);
        let block = if index == 0 {
            let block = self.head;
            let old_head = self.blocks.get(block).head;
            let new_idx = self.nodes.alloc(Node::new(value, NULL, old_head));
            if old_head != NULL {
                self.nodes.get_mut(old_head).prev = new_idx;
            }
            self.blocks.get_mut(block).head = new_idx;
            block
        } else {
            // Link after the current element at index - 1. Using its block
            // means appending to the end of a block needs no special case.
            let (block, offset) = self.locate_block(index - 1);
            let pred = self.walk_block(block, offset);
            let succ = self.nodes.get(pred).next;
            let new_idx = self.nodes.alloc(Node::new(value, pred, succ));
            self.nodes.get_mut(pred).next = new_idx;
            if succ != NULL {
                self.nodes.get_mut(succ).prev = new_idx;
            }
            block
        };

        self.blocks.get_mut(block).size += 1;
        self.total_size += 1;
        self.balance();
        self.check_invariants();
    }

    /// Remove and return the element at `index`, shifting every element
    /// after it one place to the left.
    pub fn remove(&mut self, index: usize) -> Result<T> {
        if index >= self.total_size {
            return Err(self.out_of_range(Op::Remove, index));
        }

        let (block, offset) = self.locate_block(index);
        let node_idx = self.walk_block(block, offset);
        let node = self.nodes.free(node_idx);

        if node.prev != NULL {
            self.nodes.get_mut(node.prev).next = node.next;
        } else {
            self.blocks.get_mut(block).head = node.next;
        }
        if node.next != NULL {
            self.nodes.get_mut(node.next).prev = node.prev;
        }

        self.blocks.get_mut(block).size -= 1;
        self.total_size -= 1;
        self.balance();
        self.check_invariants();
        Ok(node.value)
    }

    /// Append `value` to the end of the list.
    pub fn push(&mut self, value: T) {
        self.link_at(self.total_size, value);
    }

    /// Remove and return the last element, or `None` if the list is empty.
    pub fn pop(&mut self) -> Option<T> {
        let last = self.total_size.checked_sub(1)?;
        self.remove(last).ok()
    }

    /// Drop every element and block, leaving one empty block.
    pub fn clear(&mut self) {
        self.nodes.clear();
        self.blocks.clear();
        self.head = self.blocks.alloc(Block::new());
        self.total_size = 0;
    }

    // --- Traversal ---

    /// Iterate over the elements in order.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter::new(self)
    }

    /// Copy the elements out in order.
    pub fn to_vec(&self) -> Vec<T>
    where
        T: Clone,
    {
        self.iter().cloned().collect()
    }

    // --- Invariant checking ---

    #[cfg(debug_assertions)]
    pub(crate) fn check_invariants(&self) {
        assert_ne!(self.head, NULL, "INVARIANT VIOLATED: block chain has no head");
        assert_eq!(
            self.blocks.get(self.head).prev,
            NULL,
            "INVARIANT VIOLATED: head block has a predecessor"
        );

        let threshold = crate::balance::threshold(self.total_size);
        let mut block = self.head;
        let mut prev_block = NULL;
        let mut prev_size = None;
        let mut block_count = 0usize;
        let mut sum = 0usize;

        while block != NULL {
            let b = self.blocks.get(block);
            assert_eq!(b.prev, prev_block, "INVARIANT VIOLATED: block {} prev link", block_count);

            // Node chain length and back links.
            let mut count = 0usize;
            let mut prev_node = NULL;
            let mut node = b.head;
            while node != NULL {
                let n = self.nodes.get(node);
                assert_eq!(n.prev, prev_node, "INVARIANT VIOLATED: node prev link in block {}", block_count);
                prev_node = node;
                node = n.next;
                count += 1;
            }
            assert_eq!(
                count, b.size,
                "INVARIANT VIOLATED: block {} has {} nodes but size {}",
                block_count, count, b.size
            );

            if self.total_size > 0 {
                assert!(
                    b.size >= 1 && b.size < 2 * threshold,
                    "INVARIANT VIOLATED: block {} size {} outside [1, {})",
                    block_count,
                    b.size,
                    2 * threshold
                );
            }
            if let Some(prev_size) = prev_size {
                assert!(
                    prev_size + b.size >= threshold,
                    "INVARIANT VIOLATED: blocks {} and {} should have merged ({} + {} < {})",
                    block_count - 1,
                    block_count,
                    prev_size,
                    b.size,
                    threshold
                );
            }

            sum += b.size;
            prev_size = Some(b.size);
            prev_block = block;
            block = b.next;
            block_count += 1;
        }

        assert_eq!(sum, self.total_size, "INVARIANT VIOLATED: sum of block sizes={} != total_size={}", sum, self.total_size);
        assert_eq!(self.nodes.live(), self.total_size, "INVARIANT VIOLATED: leaked or missing nodes");
        assert_eq!(self.blocks.live(), block_count, "INVARIANT VIOLATED: leaked or missing blocks");
        if self.total_size == 0 {
            assert_eq!(block_count, 1, "INVARIANT VIOLATED: empty list must have exactly one block");
        }
    }

    #[cfg(not(debug_assertions))]
    #[inline(always)]
    pub(crate) fn check_invariants(&self) {}
}

impl<T> Default for IndexedList<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: fmt::Debug> fmt::Debug for IndexedList<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T: PartialEq> PartialEq for IndexedList<T> {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.iter().eq(other.iter())
    }
}

impl<T: Eq> Eq for IndexedList<T> {}

impl<T> Extend<T> for IndexedList<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.push(value);
        }
    }
}

impl<T> FromIterator<T> for IndexedList<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let iter = iter.into_iter();
        let mut list = IndexedList::with_capacity(iter.size_hint().0);
        list.extend(iter);
        list
    }
}

impl<T> From<Vec<T>> for IndexedList<T> {
    fn from(values: Vec<T>) -> Self {
        values.into_iter().collect()
    }
}

impl<'a, T> IntoIterator for &'a IndexedList<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T> IntoIterator for IndexedList<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter::new(self)
    }
}
