//! Node and block primitives.
//!
//! A `Node` holds one value and links to its neighbours inside the same
//! block. A `Block` owns a run of nodes (by holding the index of the first
//! one) and links to its neighbouring blocks. Both are stored in arenas owned
//! by the list, so "ownership" here means: exactly one block's chain reaches
//! a given node, and exactly one list's chain reaches a given block.

use crate::arena::Idx;
use crate::arena::NULL;

/// A single element holder, doubly linked within one block.
#[derive(Clone, Debug)]
pub struct Node<T> {
    pub value: T,
    pub prev: Idx,
    pub next: Idx,
}

impl<T> Node<T> {
    pub fn new(value: T, prev: Idx, next: Idx) -> Node<T> {
        Node { value, prev, next }
    }
}

/// A bounded run of nodes; one segment of the sequence.
#[derive(Clone, Debug)]
pub struct Block {
    /// Number of nodes reachable from `head`.
    pub size: usize,
    /// First node, or `NULL` if the block is empty.
    pub head: Idx,
    pub prev: Idx,
    pub next: Idx,
}

impl Block {
    pub fn new() -> Block {
        Block {
            size: 0,
            head: NULL,
            prev: NULL,
            next: NULL,
        }
    }

    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        self.size == 0
    }
}

impl Default for Block {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_block_is_empty() {
        let block = Block::new();
        assert!(block.is_empty());
        assert_eq!(block.head, NULL);
        assert_eq!(block.prev, NULL);
        assert_eq!(block.next, NULL);
    }

    #[test]
    fn new_node_keeps_links() {
        let node = Node::new('x', NULL, 4);
        assert_eq!(node.value, 'x');
        assert_eq!(node.prev, NULL);
        assert_eq!(node.next, 4);
    }
}
