//! Named placement strategies and insertion disciplines.

use log::debug;

use crate::{block::Block, list::RegionList};

/// How a hole is chosen to satisfy an allocation request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, derive_more::Display)]
pub enum Placement {
    /// The first fitting block in list order.
    #[display("first-fit")]
    FirstFit,
    /// The smallest fitting block.
    #[display("best-fit")]
    BestFit,
    /// The largest fitting block.
    #[display("worst-fit")]
    WorstFit,
}

impl Placement {
    /// Returns the block this strategy selects from `list` for a
    /// request of `size` units, without removing it.
    ///
    /// All three strategies resolve ties the same way: the candidate
    /// closest to the front wins.
    ///
    /// # Examples
    ///
    /// ```
    /// use region_list::{Block, Placement, RegionList};
    ///
    /// let mut holes = RegionList::new();
    /// holes.push_back(Block::free(0, 49));
    /// holes.push_back(Block::free(60, 74));
    /// assert_eq!(Placement::BestFit.find_in(&holes, 10), Some(&Block::free(60, 74)));
    /// assert_eq!(Placement::FirstFit.find_in(&holes, 10), Some(&Block::free(0, 49)));
    /// ```
    #[must_use]
    pub fn find_in(self, list: &RegionList, size: usize) -> Option<&Block> {
        let candidate = match self {
            Self::FirstFit => list.first_fit(size),
            Self::BestFit => list.best_fit(size),
            Self::WorstFit => list.worst_fit(size),
        };
        if let Some(block) = candidate {
            debug!("{self} picked {block} for a request of {size}");
        } else {
            debug!("{self} found no block for a request of {size}");
        }
        candidate
    }
}

/// The order an insertion discipline maintains.
///
/// A list stays coherent only while every insertion uses the same
/// discipline; mixing disciplines in one list gives no order at all.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, derive_more::Display)]
pub enum SortOrder {
    /// Start addresses non-decreasing from front to back.
    #[display("by-address")]
    ByAddress,
    /// Sizes non-decreasing from front to back.
    #[display("by-size-ascending")]
    BySizeAscending,
    /// Sizes non-increasing from front to back.
    #[display("by-size-descending")]
    BySizeDescending,
}

impl SortOrder {
    /// Inserts `block` into `list` under this discipline.
    pub fn insert_into(self, list: &mut RegionList, block: Block) {
        match self {
            Self::ByAddress => list.insert_by_address(block),
            Self::BySizeAscending => list.insert_by_size(block),
            Self::BySizeDescending => list.insert_by_size_desc(block),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn starts(list: &RegionList) -> Vec<usize> {
        list.iter().map(Block::start).collect()
    }

    #[test]
    fn test_each_placement_matches_its_search() {
        let mut holes = RegionList::new();
        holes.push_back(Block::free(0, 49));
        holes.push_back(Block::free(60, 74));
        holes.push_back(Block::free(80, 199));
        assert_eq!(
            Placement::FirstFit.find_in(&holes, 12),
            Some(&Block::free(0, 49))
        );
        assert_eq!(
            Placement::BestFit.find_in(&holes, 12),
            Some(&Block::free(60, 74))
        );
        assert_eq!(
            Placement::WorstFit.find_in(&holes, 12),
            Some(&Block::free(80, 199))
        );
        assert_eq!(Placement::FirstFit.find_in(&holes, 500), None);
    }

    #[test]
    fn test_sort_orders_dispatch_to_their_disciplines() {
        let seed = [Block::free(30, 79), Block::free(0, 9), Block::free(90, 104)];

        let mut by_address = RegionList::new();
        let mut ascending = RegionList::new();
        let mut descending = RegionList::new();
        for block in &seed {
            SortOrder::ByAddress.insert_into(&mut by_address, block.clone());
            SortOrder::BySizeAscending.insert_into(&mut ascending, block.clone());
            SortOrder::BySizeDescending.insert_into(&mut descending, block.clone());
        }
        assert_eq!(starts(&by_address), [0, 30, 90]);
        assert_eq!(starts(&ascending), [0, 90, 30]);
        assert_eq!(starts(&descending), [30, 90, 0]);
    }

    #[test]
    fn test_display_names() {
        assert_eq!(Placement::FirstFit.to_string(), "first-fit");
        assert_eq!(Placement::BestFit.to_string(), "best-fit");
        assert_eq!(Placement::WorstFit.to_string(), "worst-fit");
        assert_eq!(SortOrder::ByAddress.to_string(), "by-address");
        assert_eq!(SortOrder::BySizeAscending.to_string(), "by-size-ascending");
        assert_eq!(SortOrder::BySizeDescending.to_string(), "by-size-descending");
    }
}
