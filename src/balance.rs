//! Block balancing.
//!
//! After every insert or remove the list makes one forward pass over the
//! block chain and repairs the block that mutation touched. With
//! `t = threshold(len)` the pass leaves every block with a size in `[1, 2t)`
//! and every pair of neighbours with a combined size of at least `t`.
//!
//! At each block the first matching rule is applied:
//!
//! 1. split: `size >= 2t`, cut after the first `t` nodes and continue on the
//!    new right half
//! 2. evict: the next block is empty, unlink it and look again
//! 3. merge: `size + next.size < t`, splice the next block's nodes onto this
//!    one and look again
//! 4. otherwise advance to the next block
//!
//! An insert or remove changes the length by one, so `t` moves by at most one
//! and only the touched block can violate the bounds. One pass is enough.

use tracing::trace;

use crate::arena::Idx;
use crate::arena::NULL;
use crate::block::Block;
use crate::list::IndexedList;

/// Lower bound on the threshold, so tiny lists still get two-node blocks.
pub const MIN_THRESHOLD: usize = 2;

/// Target block size for a list of `total` elements: `max(2, floor(sqrt(total)))`.
pub fn threshold(total: usize) -> usize {
    total.isqrt().max(MIN_THRESHOLD)
}

impl<T> IndexedList<T> {
    /// Restore the block size invariant in a single pass.
    pub(crate) fn balance(&mut self) {
        let threshold = threshold(self.total_size);

        // Drop empty blocks at the front of the chain.
        while self.head != NULL && self.blocks.get(self.head).is_empty() {
            let block = self.blocks.free(self.head);
            trace!(size = 0, "evict head block");
            self.head = block.next;
        }
        if self.head == NULL {
            self.head = self.blocks.alloc(Block::new());
            return;
        }
        self.blocks.get_mut(self.head).prev = NULL;

        let mut current = self.head;
        let mut position = 0usize;
        while current != NULL {
            let block = self.blocks.get(current);
            let size = block.size;
            let next = block.next;

            if size >= 2 * threshold {
                trace!(block = position, size, threshold, "split block");
                current = self.split_block(current, threshold);
                position += 1;
            } else if next != NULL && self.blocks.get(next).is_empty() {
                trace!(block = position + 1, "evict empty block");
                self.unlink_next(current);
            } else if next != NULL && size + self.blocks.get(next).size < threshold {
                trace!(
                    block = position,
                    size,
                    next_size = self.blocks.get(next).size,
                    threshold,
                    "merge blocks"
                );
                self.merge_next(current);
            } else {
                current = next;
                position += 1;
            }
        }
    }

    /// Keep the first `keep` nodes of `block` and move the rest into a new
    /// block linked right after it. Returns the new block.
    fn split_block(&mut self, block: Idx, keep: usize) -> Idx {
        let (size, head, old_next) = {
            let b = self.blocks.get(block);
            (b.size, b.head, b.next)
        };
        debug_assert!(keep >= 1 && keep < size);

        let mut cut = head;
        for _ in 1..keep {
            cut = self.nodes.get(cut).next;
        }
        let tail_head = self.nodes.get(cut).next;
        self.nodes.get_mut(cut).next = NULL;
        self.nodes.get_mut(tail_head).prev = NULL;

        let new_block = self.blocks.alloc(Block {
            size: size - keep,
            head: tail_head,
            prev: block,
            next: old_next,
        });
        if old_next != NULL {
            self.blocks.get_mut(old_next).prev = new_block;
        }
        let b = self.blocks.get_mut(block);
        b.next = new_block;
        b.size = keep;
        new_block
    }

    /// Unlink and release the block after `block`, returning it. The caller
    /// is responsible for its nodes.
    fn unlink_next(&mut self, block: Idx) -> Block {
        let next = self.blocks.get(block).next;
        let removed = self.blocks.free(next);
        self.blocks.get_mut(block).next = removed.next;
        if removed.next != NULL {
            self.blocks.get_mut(removed.next).prev = block;
        }
        debug_assert!(removed.is_empty() || removed.head != NULL);
        removed
    }

    /// Splice every node of the next block onto the tail of `block` and
    /// release the emptied block.
    fn merge_next(&mut self, block: Idx) {
        let removed = self.unlink_next(block);
        if removed.head == NULL {
            return;
        }

        let head = self.blocks.get(block).head;
        if head == NULL {
            self.blocks.get_mut(block).head = removed.head;
        } else {
            let mut tail = head;
            while self.nodes.get(tail).next != NULL {
                tail = self.nodes.get(tail).next;
            }
            self.nodes.get_mut(tail).next = removed.head;
            self.nodes.get_mut(removed.head).prev = tail;
        }
        self.blocks.get_mut(block).size += removed.size;
    }
}
