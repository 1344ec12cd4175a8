//! Iterators over a [`RegionList`].

use core::iter::FusedIterator;

use crate::{
    block::Block,
    list::{Node, RegionList},
};

/// Borrowing iterator over the blocks of a [`RegionList`], in list
/// order.
#[derive(Clone)]
pub struct Iter<'a> {
    node: Option<&'a Node>,
    remaining: usize,
}

impl<'a> Iter<'a> {
    pub(crate) fn new(node: Option<&'a Node>, remaining: usize) -> Self {
        Self { node, remaining }
    }
}

impl<'a> Iterator for Iter<'a> {
    type Item = &'a Block;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.node?;
        self.node = node.next.as_deref();
        self.remaining -= 1;
        Some(&node.block)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl ExactSizeIterator for Iter<'_> {}
impl FusedIterator for Iter<'_> {}

/// Owning iterator that drains a [`RegionList`] front to back.
pub struct IntoIter {
    list: RegionList,
}

impl Iterator for IntoIter {
    type Item = Block;

    fn next(&mut self) -> Option<Self::Item> {
        self.list.pop_front()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self.list.len();
        (len, Some(len))
    }
}

impl ExactSizeIterator for IntoIter {}
impl FusedIterator for IntoIter {}

impl IntoIterator for RegionList {
    type Item = Block;
    type IntoIter = IntoIter;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter { list: self }
    }
}

impl<'a> IntoIterator for &'a RegionList {
    type Item = &'a Block;
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_iter_walks_in_list_order() {
        let mut list = RegionList::new();
        list.push_back(Block::free(0, 9));
        list.push_back(Block::held_by(1, 10, 19));
        let starts: Vec<_> = list.iter().map(Block::start).collect();
        assert_eq!(starts, [0, 10]);
    }

    #[test]
    fn test_iter_reports_its_exact_length_and_fuses() {
        let mut list = RegionList::new();
        list.push_back(Block::free(0, 9));
        list.push_back(Block::free(10, 19));
        let mut iter = list.iter();
        assert_eq!(iter.len(), 2);
        let _ = iter.next();
        assert_eq!(iter.len(), 1);
        let _ = iter.next();
        assert_eq!(iter.len(), 0);
        assert_eq!(iter.next(), None);
        assert_eq!(iter.next(), None);
    }

    #[test]
    fn test_into_iter_drains_front_to_back() {
        let mut list = RegionList::new();
        list.push_back(Block::free(0, 9));
        list.push_back(Block::held_by(2, 10, 19));
        let drained: Vec<_> = list.into_iter().collect();
        assert_eq!(drained, [Block::free(0, 9), Block::held_by(2, 10, 19)]);
    }

    #[test]
    fn test_for_loop_over_a_reference() {
        let mut list = RegionList::new();
        list.push_back(Block::free(0, 9));
        list.push_back(Block::free(10, 29));
        let mut total = 0;
        for block in &list {
            total += block.size();
        }
        assert_eq!(total, 30);
        assert_eq!(list.len(), 2);
    }
}
