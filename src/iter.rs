//! Iterators over an `IndexedList`, walking blocks then nodes.

use std::iter::FusedIterator;

use crate::arena::Arena;
use crate::arena::Idx;
use crate::arena::NULL;
use crate::block::Block;
use crate::block::Node;
use crate::list::IndexedList;

/// Borrowing iterator, in list order.
pub struct Iter<'a, T> {
    list: &'a IndexedList<T>,
    /// Next block to enter once the current node chain runs out.
    block: Idx,
    /// Next node to yield.
    node: Idx,
    remaining: usize,
}

impl<'a, T> Iter<'a, T> {
    pub(crate) fn new(list: &'a IndexedList<T>) -> Self {
        Iter {
            list,
            block: list.head,
            node: NULL,
            remaining: list.total_size,
        }
    }
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        while self.node == NULL {
            if self.block == NULL {
                return None;
            }
            let block = self.list.blocks.get(self.block);
            self.node = block.head;
            self.block = block.next;
        }

        let node = self.list.nodes.get(self.node);
        self.node = node.next;
        self.remaining -= 1;
        Some(&node.value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}

impl<T> FusedIterator for Iter<'_, T> {}

impl<T> Clone for Iter<'_, T> {
    fn clone(&self) -> Self {
        Iter {
            list: self.list,
            block: self.block,
            node: self.node,
            remaining: self.remaining,
        }
    }
}

/// Consuming iterator. Moves each value out of its node as it goes.
pub struct IntoIter<T> {
    nodes: Arena<Node<T>>,
    blocks: Arena<Block>,
    block: Idx,
    node: Idx,
    remaining: usize,
}

impl<T> IntoIter<T> {
    pub(crate) fn new(list: IndexedList<T>) -> Self {
        let IndexedList {
            nodes,
            blocks,
            head,
            total_size,
        } = list;
        IntoIter {
            nodes,
            blocks,
            block: head,
            node: NULL,
            remaining: total_size,
        }
    }
}

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        while self.node == NULL {
            if self.block == NULL {
                return None;
            }
            let block = self.blocks.get(self.block);
            self.node = block.head;
            self.block = block.next;
        }

        let node = self.nodes.free(self.node);
        self.node = node.next;
        self.remaining -= 1;
        Some(node.value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T> ExactSizeIterator for IntoIter<T> {}

impl<T> FusedIterator for IntoIter<T> {}
