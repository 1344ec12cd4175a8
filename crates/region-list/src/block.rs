//! Blocks of the simulated address space.

/// Holder of a [`Block`]: a process, or nobody.
///
/// A hole is marked by an explicit variant rather than a reserved
/// process id, so it can never collide with a real owner.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, derive_more::Display, derive_more::IsVariant)]
pub enum Owner {
    /// The block is an unowned hole.
    #[display("free")]
    Free,
    /// The block is held by the process with this id.
    #[display("pid {_0}")]
    Process(u32),
}

/// One contiguous range of the simulated address space.
///
/// Both bounds are inclusive, so a block is never empty and
/// `Block::new(owner, a, a)` spans exactly one unit. Construction
/// establishes `start <= end` and keeps `end` below `usize::MAX`, so
/// the size `end - start + 1` is always representable; the list
/// operations never re-check either bound.
///
/// Blocks are compared field-wise: two blocks are equal only if the
/// owner and both bounds all match.
///
/// # Examples
///
/// ```
/// use region_list::{Block, Owner};
///
/// let hole = Block::free(100, 149);
/// assert_eq!(hole.size(), 50);
/// assert!(hole.fits(32));
/// assert!(hole.owner().is_free());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, derive_more::Display)]
#[display("{owner} {start}..={end}")]
pub struct Block {
    owner: Owner,
    start: usize,
    end: usize,
}

impl Block {
    /// Creates a block spanning `start..=end` held by `owner`.
    ///
    /// # Panics
    ///
    /// Panics if `start > end`, or if `end == usize::MAX` (the size
    /// `end - start + 1` must stay representable).
    #[must_use]
    pub fn new(owner: Owner, start: usize, end: usize) -> Self {
        assert!(start <= end, "block end {end} precedes start {start}");
        assert!(
            end < usize::MAX,
            "block ending at usize::MAX has no representable size"
        );
        Self { owner, start, end }
    }

    /// Creates an unowned hole spanning `start..=end`.
    ///
    /// # Panics
    ///
    /// Panics if `start > end` or if `end == usize::MAX`.
    #[must_use]
    pub fn free(start: usize, end: usize) -> Self {
        Self::new(Owner::Free, start, end)
    }

    /// Creates a block spanning `start..=end` held by process `pid`.
    ///
    /// # Panics
    ///
    /// Panics if `start > end` or if `end == usize::MAX`.
    #[must_use]
    pub fn held_by(pid: u32, start: usize, end: usize) -> Self {
        Self::new(Owner::Process(pid), start, end)
    }

    /// Returns the holder of this block.
    #[must_use]
    pub fn owner(&self) -> Owner {
        self.owner
    }

    /// Returns the first address covered by this block.
    #[must_use]
    pub fn start(&self) -> usize {
        self.start
    }

    /// Returns the last address covered by this block.
    #[must_use]
    pub fn end(&self) -> usize {
        self.end
    }

    /// Returns the number of addresses this block covers.
    ///
    /// Both bounds are inclusive, so a one-address block has size 1.
    #[must_use]
    pub fn size(&self) -> usize {
        self.end - self.start + 1
    }

    /// Returns `true` if a request of `size` units fits in this block.
    #[must_use]
    pub fn fits(&self, size: usize) -> bool {
        self.size() >= size
    }
}
