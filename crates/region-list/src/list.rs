//! The ordered block sequence and its operations.

use alloc::boxed::Box;
use core::{cmp, fmt};

use log::trace;
use snafu::{Location, Snafu, ensure};

use crate::{
    block::{Block, Owner},
    iter::Iter,
};

pub(crate) type Link = Option<Box<Node>>;

/// One link in the chain. Each node exclusively owns its block and the
/// rest of the list.
pub(crate) struct Node {
    pub(crate) block: Block,
    pub(crate) next: Link,
}

/// Reasons a positional removal can fail.
///
/// An empty list is reported separately from an index that is out of
/// range for a non-empty list, so callers can tell "nothing left to
/// hand out" apart from plain misuse.
#[derive(Debug, Snafu)]
#[snafu(module)]
pub enum RemoveError {
    /// The list holds no blocks at all.
    #[snafu(display("cannot remove from an empty list"))]
    Empty {
        #[snafu(implicit)]
        location: Location,
    },
    /// The list is non-empty but `index` is past its last position.
    #[snafu(display("index {index} is out of range for a list of {len} blocks"))]
    OutOfRange {
        index: usize,
        len: usize,
        #[snafu(implicit)]
        location: Location,
    },
}

/// An ordered sequence of [`Block`]s backed by a singly linked chain.
///
/// The list itself imposes no order: each insertion discipline
/// maintains its own, and a list stays coherent only while all
/// insertions use the same discipline. Positional and keyed operations
/// work on any list.
///
/// Every operation either completes or leaves the list untouched.
/// Failed removals never unlink anything, and the cached length always
/// matches the chain.
///
/// # Examples
///
/// ```
/// use region_list::{Block, RegionList};
///
/// let mut holes = RegionList::new();
/// holes.insert_by_address(Block::free(30, 79));
/// holes.insert_by_address(Block::free(0, 9));
///
/// assert_eq!(holes.len(), 2);
/// assert_eq!(holes.front(), Some(&Block::free(0, 9)));
/// assert_eq!(holes.first_fit(20), Some(&Block::free(30, 79)));
/// ```
pub struct RegionList {
    head: Link,
    len: usize,
}

impl RegionList {
    /// Creates an empty list.
    #[must_use]
    pub const fn new() -> Self {
        Self { head: None, len: 0 }
    }

    /// Returns the number of blocks in the list.
    ///
    /// The length is cached, so this does not walk the chain.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if the list holds no blocks.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns the first block without removing it.
    #[must_use]
    pub fn front(&self) -> Option<&Block> {
        self.iter().next()
    }

    /// Returns the block at `index` without removing it, or `None` if
    /// `index` is past the end.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&Block> {
        self.iter().nth(index)
    }

    /// Returns an iterator over the blocks in list order.
    #[must_use]
    pub fn iter(&self) -> Iter<'_> {
        Iter::new(self.head.as_deref(), self.len)
    }

    /// Inserts `block` at the front of the list.
    pub fn push_front(&mut self, block: Block) {
        self.insert_at(0, block);
    }

    /// Inserts `block` at the back of the list.
    ///
    /// Walks the whole chain; the list keeps no tail pointer.
    pub fn push_back(&mut self, block: Block) {
        self.insert_at(self.len, block);
    }

    /// Inserts `block` so that it occupies position `index`, shifting
    /// the blocks from `index` onward one position back.
    ///
    /// Any index works on any list: `index == 0` prepends even when the
    /// list is empty, and an index past the end appends at the tail.
    ///
    /// # Examples
    ///
    /// ```
    /// use region_list::{Block, RegionList};
    ///
    /// let mut list = RegionList::new();
    /// list.insert_at(9, Block::free(0, 9));      // clamps to the tail
    /// list.insert_at(0, Block::held_by(1, 10, 19));
    /// assert_eq!(list.front(), Some(&Block::held_by(1, 10, 19)));
    /// assert_eq!(list.get(1), Some(&Block::free(0, 9)));
    /// ```
    pub fn insert_at(&mut self, index: usize, block: Block) {
        let mut remaining = index;
        self.insert_before(block, |_, _| {
            if remaining == 0 {
                true
            } else {
                remaining -= 1;
                false
            }
        });
    }

    /// Inserts `block` keeping sizes non-decreasing from front to back.
    ///
    /// A block that ties an already-present size lands before it, the
    /// same tie rule as all ordered insertions here.
    ///
    /// # Examples
    ///
    /// ```
    /// use region_list::{Block, RegionList};
    ///
    /// let mut list = RegionList::new();
    /// list.insert_by_size(Block::free(0, 49));    // size 50
    /// list.insert_by_size(Block::free(60, 69));   // size 10
    /// list.insert_by_size(Block::free(80, 109));  // size 30
    ///
    /// let sizes: Vec<_> = list.iter().map(Block::size).collect();
    /// assert_eq!(sizes, [10, 30, 50]);
    /// ```
    pub fn insert_by_size(&mut self, block: Block) {
        self.insert_before(block, |new, resident| resident.size() >= new.size());
    }

    /// Inserts `block` keeping start addresses non-decreasing from
    /// front to back. Ties land before the resident block.
    pub fn insert_by_address(&mut self, block: Block) {
        self.insert_before(block, |new, resident| resident.start() >= new.start());
    }

    /// Inserts `block` keeping sizes non-increasing from front to back.
    /// Ties land before the resident block.
    pub fn insert_by_size_desc(&mut self, block: Block) {
        self.insert_before(block, |new, resident| resident.size() <= new.size());
    }

    /// Splices `block` in before the first resident block for which
    /// `place_before` answers true, or at the tail if none does.
    ///
    /// All insertions funnel through here: a shared walk finds the
    /// position, then a mutable cursor advances straight to it and
    /// splices. `place_before` sees the incoming block first and the
    /// resident block second.
    fn insert_before(
        &mut self,
        block: Block,
        mut place_before: impl FnMut(&Block, &Block) -> bool,
    ) {
        let mut at = 0;
        let mut current = self.head.as_deref();
        while let Some(node) = current {
            if place_before(&block, &node.block) {
                break;
            }
            current = node.next.as_deref();
            at += 1;
        }
        trace!("insert {block} at index {at}");
        // `at` never exceeds the chain length.
        let mut cursor = &mut self.head;
        for _ in 0..at {
            match cursor {
                Some(node) => cursor = &mut node.next,
                None => break,
            }
        }
        let next = cursor.take();
        *cursor = Some(Box::new(Node { block, next }));
        self.len += 1;
    }

    /// Removes and returns the first block, or `None` if the list is
    /// empty.
    pub fn pop_front(&mut self) -> Option<Block> {
        self.splice_out_at(0)
    }

    /// Removes and returns the last block, or `None` if the list is
    /// empty. A single-block list is left empty and fully usable.
    pub fn pop_back(&mut self) -> Option<Block> {
        let last = self.len.checked_sub(1)?;
        self.splice_out_at(last)
    }

    /// Removes and returns the block at `index`.
    ///
    /// # Errors
    ///
    /// Returns [`RemoveError::Empty`] if the list holds no blocks, and
    /// [`RemoveError::OutOfRange`] if it does but `index` is past the
    /// last position. A failed call leaves the list untouched.
    ///
    /// # Examples
    ///
    /// ```
    /// use region_list::{Block, RegionList, RemoveError};
    ///
    /// let mut list = RegionList::new();
    /// assert!(matches!(list.remove_at(0), Err(RemoveError::Empty { .. })));
    ///
    /// list.push_back(Block::free(0, 9));
    /// let err = list.remove_at(4).unwrap_err();
    /// assert!(matches!(err, RemoveError::OutOfRange { index: 4, len: 1, .. }));
    /// assert_eq!(list.remove_at(0).unwrap(), Block::free(0, 9));
    /// ```
    pub fn remove_at(&mut self, index: usize) -> Result<Block, RemoveError> {
        ensure!(!self.is_empty(), remove_error::EmptySnafu);
        let len = self.len;
        self.splice_out_at(index)
            .ok_or_else(|| remove_error::OutOfRangeSnafu { index, len }.build())
    }

    /// Removes and returns the first block equal to `block`, or `None`
    /// if no block matches. Later duplicates stay in place.
    pub fn remove_block(&mut self, block: &Block) -> Option<Block> {
        let index = self.index_of(block)?;
        self.splice_out_at(index)
    }

    /// Unlinks the node at `index` and hands its block back. The walk
    /// and the unlink shared by every removal.
    fn splice_out_at(&mut self, index: usize) -> Option<Block> {
        let mut cursor = &mut self.head;
        for _ in 0..index {
            cursor = &mut cursor.as_mut()?.next;
        }
        let mut node = cursor.take()?;
        *cursor = node.next.take();
        self.len -= 1;
        trace!("remove {} from index {index}", node.block);
        Some(node.block)
    }

    /// Returns the first block in list order that fits a request of
    /// `size` units, without removing it.
    ///
    /// # Examples
    ///
    /// ```
    /// use region_list::{Block, RegionList};
    ///
    /// let mut holes = RegionList::new();
    /// holes.push_back(Block::free(0, 9));     // size 10
    /// holes.push_back(Block::free(30, 79));   // size 50
    /// assert_eq!(holes.first_fit(7), Some(&Block::free(0, 9)));
    /// assert_eq!(holes.first_fit(20), Some(&Block::free(30, 79)));
    /// assert_eq!(holes.first_fit(100), None);
    /// ```
    #[must_use]
    pub fn first_fit(&self, size: usize) -> Option<&Block> {
        self.iter().find(|block| block.fits(size))
    }

    /// Returns the smallest block that fits a request of `size` units,
    /// without removing it. Among equally small candidates the one
    /// closest to the front wins.
    #[must_use]
    pub fn best_fit(&self, size: usize) -> Option<&Block> {
        // min_by_key keeps the first of equal minima, which is exactly
        // the tie rule the placement strategies promise.
        self.iter()
            .filter(|block| block.fits(size))
            .min_by_key(|block| block.size())
    }

    /// Returns the largest block that fits a request of `size` units,
    /// without removing it. Among equally large candidates the one
    /// closest to the front wins.
    #[must_use]
    pub fn worst_fit(&self, size: usize) -> Option<&Block> {
        // Reverse under min_by_key keeps the first of equal maxima;
        // max_by_key would keep the last.
        self.iter()
            .filter(|block| block.fits(size))
            .min_by_key(|block| cmp::Reverse(block.size()))
    }

    /// Returns `true` if some block equals `block`.
    #[must_use]
    pub fn contains(&self, block: &Block) -> bool {
        self.iter().any(|resident| resident == block)
    }

    /// Returns `true` if some block fits a request of `size` units.
    #[must_use]
    pub fn contains_fit(&self, size: usize) -> bool {
        self.first_fit(size).is_some()
    }

    /// Returns `true` if some block is held by `owner`.
    #[must_use]
    pub fn contains_owner(&self, owner: Owner) -> bool {
        self.iter().any(|block| block.owner() == owner)
    }

    /// Returns the position of the first block equal to `block`.
    #[must_use]
    pub fn index_of(&self, block: &Block) -> Option<usize> {
        self.iter().position(|resident| resident == block)
    }

    /// Returns the position of the first block that fits a request of
    /// `size` units.
    #[must_use]
    pub fn index_of_fit(&self, size: usize) -> Option<usize> {
        self.iter().position(|block| block.fits(size))
    }

    /// Returns the position of the first block held by `owner`.
    #[must_use]
    pub fn index_of_owner(&self, owner: Owner) -> Option<usize> {
        self.iter().position(|block| block.owner() == owner)
    }
}

impl Default for RegionList {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for RegionList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl Drop for RegionList {
    fn drop(&mut self) {
        // Unlink node by node; dropping a long chain through the
        // default recursive path would overflow the stack.
        let mut head = self.head.take();
        while let Some(mut node) = head {
            head = node.next.take();
        }
    }
}

impl FromIterator<Block> for RegionList {
    fn from_iter<T: IntoIterator<Item = Block>>(iter: T) -> Self {
        let mut list = Self::new();
        list.extend(iter);
        list
    }
}

impl Extend<Block> for RegionList {
    fn extend<T: IntoIterator<Item = Block>>(&mut self, iter: T) {
        let mut cursor = &mut self.head;
        while let Some(node) = cursor {
            cursor = &mut node.next;
        }
        for block in iter {
            self.len += 1;
            let node = cursor.insert(Box::new(Node { block, next: None }));
            cursor = &mut node.next;
        }
    }
}
