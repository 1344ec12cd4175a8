//! Ordered block lists for a memory-allocation placement simulator.
//!
//! `RegionList` is the bookkeeping core of a main-memory simulator: a
//! singly linked sequence of [`Block`] values, each covering an
//! inclusive address range held by a process or left free. The list
//! offers positional and ordered insertion, keyed and positional
//! removal, and the three classic placement searches over the blocks
//! it holds. Allocation policy stays with the caller; the list only
//! keeps the blocks in order and finds candidates.
//!
//! # Features
//!
//! - **Three placement strategies**: first-fit, best-fit, and
//!   worst-fit over the same list, with one tie rule for all
//! - **Ordered insertion disciplines**: by start address, or by size
//!   ascending or descending
//! - **Explicit failure taxonomy**: removing from an empty list and
//!   using an out-of-range index are distinct errors
//! - **No-std support**: only `alloc` is required
//!
//! # Examples
//!
//! ```
//! use region_list::{Block, Placement, RegionList};
//!
//! let mut holes = RegionList::new();
//! holes.insert_by_address(Block::free(30, 79));
//! holes.insert_by_address(Block::free(0, 9));
//! holes.insert_by_address(Block::free(90, 104));
//!
//! // Pick a hole for a 12-unit request under each strategy.
//! assert_eq!(Placement::FirstFit.find_in(&holes, 12), Some(&Block::free(30, 79)));
//! assert_eq!(Placement::BestFit.find_in(&holes, 12), Some(&Block::free(90, 104)));
//! assert_eq!(Placement::WorstFit.find_in(&holes, 12), Some(&Block::free(30, 79)));
//!
//! // The searches never unlink; the caller decides what to take out.
//! let hole = holes.remove_block(&Block::free(90, 104)).unwrap();
//! assert_eq!(hole.size(), 15);
//! assert_eq!(holes.len(), 2);
//! ```
//!
//! # Performance
//!
//! - Ordered and positional inserts: O(n) walk of the chain
//! - Push front / pop front: O(1)
//! - Fit searches and keyed lookups: O(n), one pass
//! - Length: O(1), cached

#![cfg_attr(not(test), no_std)]

extern crate alloc;

mod block;
mod iter;
mod list;
mod strategy;

pub use self::{
    block::{Block, Owner},
    iter::{IntoIter, Iter},
    list::{RegionList, RemoveError},
    strategy::{Placement, SortOrder},
};
