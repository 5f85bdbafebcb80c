//! Append-only singly linked list with a cached tail
//!
//! Nodes live in an arena owned by the list and are addressed by [`NodeId`].
//! Every node carries an explicit `next` link, and the list caches its `first`
//! and `last` node so appending never walks the list.
//!
//! Invariants, after every operation:
//! - `first` is `None` exactly when `last` is `None`, exactly when the list is empty
//! - following `next` from `first` reaches `last` and then `None`
//! - traversal order is insertion order

use std::ops::{Index, IndexMut};

/// Stable handle to a node of a [`Chain`]
///
/// Ids are arena positions. After [`Chain::clear`] an old id is not detected
/// as stale: once new nodes are pushed it aliases whichever node now occupies
/// that position, and before that `get` returns `None` while indexing panics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId(usize);

#[derive(Debug, Clone)]
struct Node<T> {
    value: T,
    next: Option<NodeId>,
}

#[derive(Debug, Clone)]
pub struct Chain<T> {
    nodes: Vec<Node<T>>,
    first: Option<NodeId>,
    last: Option<NodeId>,
}

impl<T> Default for Chain<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Chain<T> {
    pub const fn new() -> Self {
        Self {
            nodes: Vec::new(),
            first: None,
            last: None,
        }
    }

    /// Append `value` as the new tail in O(1)
    ///
    /// On an empty chain the new node becomes both `first` and `last`;
    /// otherwise the previous tail is linked to it and `first` is untouched.
    pub fn push(&mut self, value: T) -> NodeId {
        let id = NodeId(self.nodes.len());
        self.nodes.push(Node { value, next: None });

        match self.last {
            Some(last) => self.nodes[last.0].next = Some(id),
            None => {
                debug_assert!(self.first.is_none());
                self.first = Some(id);
            }
        }
        self.last = Some(id);

        id
    }

    pub fn first(&self) -> Option<NodeId> {
        self.first
    }

    pub fn last(&self) -> Option<NodeId> {
        self.last
    }

    /// Successor of `id`, `None` for the tail
    pub fn next(&self, id: NodeId) -> Option<NodeId> {
        self.nodes.get(id.0).and_then(|node| node.next)
    }

    pub fn get(&self, id: NodeId) -> Option<&T> {
        self.nodes.get(id.0).map(|node| &node.value)
    }

    pub fn get_mut(&mut self, id: NodeId) -> Option<&mut T> {
        self.nodes.get_mut(id.0).map(|node| &mut node.value)
    }

    pub fn front(&self) -> Option<&T> {
        self.first.and_then(|id| self.get(id))
    }

    pub fn back(&self) -> Option<&T> {
        self.last.and_then(|id| self.get(id))
    }

    pub fn is_empty(&self) -> bool {
        self.first.is_none()
    }

    /// Number of nodes, read from the arena without walking the links
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Walk the `next` links from `first`
    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            chain: self,
            cursor: self.first,
        }
    }

    /// Mutable traversal in insertion order
    pub fn iter_mut(&mut self) -> IterMut<'_, T> {
        // Append-only: arena order and link order are the same.
        IterMut(self.nodes.iter_mut())
    }

    /// Release every node and reset to the empty state
    pub fn clear(&mut self) {
        self.nodes.clear();
        self.first = None;
        self.last = None;
    }
}

impl<T> Index<NodeId> for Chain<T> {
    type Output = T;

    fn index(&self, id: NodeId) -> &T {
        &self.nodes[id.0].value
    }
}

impl<T> IndexMut<NodeId> for Chain<T> {
    fn index_mut(&mut self, id: NodeId) -> &mut T {
        &mut self.nodes[id.0].value
    }
}

impl<T> FromIterator<T> for Chain<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut chain = Chain::new();
        chain.extend(iter);
        chain
    }
}

impl<T> Extend<T> for Chain<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.push(value);
        }
    }
}

impl<'a, T> IntoIterator for &'a Chain<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'a, T> IntoIterator for &'a mut Chain<T> {
    type Item = &'a mut T;
    type IntoIter = IterMut<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter_mut()
    }
}

/// Link-following iterator over a [`Chain`]
#[derive(Debug)]
pub struct Iter<'a, T> {
    chain: &'a Chain<T>,
    cursor: Option<NodeId>,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<&'a T> {
        let id = self.cursor?;
        let node = &self.chain.nodes[id.0];
        self.cursor = node.next;
        Some(&node.value)
    }
}

#[derive(Debug)]
pub struct IterMut<'a, T>(std::slice::IterMut<'a, Node<T>>);

impl<'a, T> Iterator for IterMut<'a, T> {
    type Item = &'a mut T;

    fn next(&mut self) -> Option<&'a mut T> {
        self.0.next().map(|node| &mut node.value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.0.size_hint()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use std::rc::Rc;

    struct DropCounter(Rc<Cell<usize>>);

    impl Drop for DropCounter {
        fn drop(&mut self) {
            self.0.set(self.0.get() + 1);
        }
    }

    #[test]
    fn test_empty_chain() {
        let chain: Chain<i32> = Chain::new();
        assert!(chain.is_empty());
        assert_eq!(chain.first(), None);
        assert_eq!(chain.last(), None);
        assert_eq!(chain.iter().count(), 0);
    }

    #[test]
    fn test_first_push_sets_both_ends() {
        let mut chain = Chain::new();
        let id = chain.push('a');
        assert_eq!(chain.first(), Some(id));
        assert_eq!(chain.last(), Some(id));
        assert_eq!(chain.next(id), None);
    }

    #[test]
    fn test_push_keeps_first_and_moves_last() {
        let mut chain = Chain::new();
        let a = chain.push(1);
        let b = chain.push(2);
        let c = chain.push(3);

        assert_eq!(chain.first(), Some(a));
        assert_eq!(chain.last(), Some(c));
        assert_eq!(chain.next(a), Some(b));
        assert_eq!(chain.next(b), Some(c));
        assert_eq!(chain.next(c), None);
    }

    #[test]
    fn test_iteration_follows_insertion_order() {
        let chain: Chain<u32> = (0..50).collect();
        let seen: Vec<u32> = chain.iter().copied().collect();
        assert_eq!(seen, (0..50).collect::<Vec<_>>());
        assert_eq!(chain.iter().count(), chain.len());
    }

    #[test]
    fn test_links_end_at_last() {
        let chain: Chain<u32> = (0..10).collect();
        let mut cursor = chain.first();
        let mut tail = None;
        while let Some(id) = cursor {
            tail = Some(id);
            cursor = chain.next(id);
        }
        assert_eq!(tail, chain.last());
    }

    #[test]
    fn test_iter_mut_and_index() {
        let mut chain: Chain<i32> = vec![1, 2, 3].into_iter().collect();
        for value in chain.iter_mut() {
            *value *= 10;
        }
        let last = chain.last().unwrap();
        chain[last] += 1;

        assert_eq!(chain.iter().copied().collect::<Vec<_>>(), vec![10, 20, 31]);
        assert_eq!(chain.front(), Some(&10));
        assert_eq!(chain.back(), Some(&31));
    }

    #[test]
    fn test_clear_releases_each_node_once() {
        let drops = Rc::new(Cell::new(0));
        let mut chain = Chain::new();
        for _ in 0..5 {
            chain.push(DropCounter(drops.clone()));
        }

        chain.clear();
        assert_eq!(drops.get(), 5);
        assert!(chain.is_empty());
        assert_eq!(chain.last(), None);

        drop(chain);
        assert_eq!(drops.get(), 5);
    }

    #[test]
    fn test_get_mut_by_id() {
        let mut chain = Chain::new();
        chain.push(1);
        let middle = chain.push(2);
        chain.push(3);

        if let Some(value) = chain.get_mut(middle) {
            *value = 20;
        }
        assert_eq!(chain.get(middle), Some(&20));
        assert_eq!(chain.iter().copied().collect::<Vec<_>>(), vec![1, 20, 3]);
    }

    #[test]
    fn test_stale_id_aliases_after_clear() {
        let mut chain = Chain::new();
        chain.push('a');
        let old = chain.push('b');

        chain.clear();
        assert_eq!(chain.get(old), None);
        assert!(chain.get_mut(old).is_none());

        chain.push('x');
        chain.push('y');
        assert_eq!(chain.get(old), Some(&'y'));
    }

    #[test]
    fn test_reuse_after_clear() {
        let mut chain = Chain::new();
        chain.push(1);
        chain.clear();
        let id = chain.push(2);
        assert_eq!(chain.first(), Some(id));
        assert_eq!(chain.iter().copied().collect::<Vec<_>>(), vec![2]);
    }
}
